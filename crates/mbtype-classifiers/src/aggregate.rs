//! Composite type label aggregation
//!
//! Runs the four axis classifiers over one cleaned post and concatenates
//! their single-letter predictions in fixed EI, NS, TF, PJ order.

use crate::model_set::ModelSet;
use futures::future::join_all;
use mbtype_core::{Axis, CleanedPost, Error, Result, TypeLabel};

/// Queries the four axis classifiers and assembles the composite label.
///
/// The classifiers are mutually independent, so the four calls run
/// concurrently; the label is assembled only once all four have answered.
/// Any classifier failure fails the whole prediction: no partial label,
/// no fallback axis value.
pub struct TypeAggregator {
    models: ModelSet,
}

impl TypeAggregator {
    /// Create an aggregator over a loaded model set
    pub fn new(models: ModelSet) -> Self {
        Self { models }
    }

    /// Names of the loaded models, in axis order
    pub fn model_names(&self) -> Vec<String> {
        self.models.model_names()
    }

    /// Predict the composite type label for one cleaned post.
    ///
    /// The post is wrapped as a one-element batch; the first element of
    /// each classifier's result batch becomes that axis's letter.
    pub async fn predict(&self, post: &CleanedPost) -> Result<TypeLabel> {
        let batch = std::slice::from_ref(post);

        let futures = Axis::ALL.map(|axis| {
            let classifier = self.models.classifier(axis);
            async move { classifier.predict_batch(batch).await }
        });
        let results = join_all(futures).await;

        let mut label = String::with_capacity(Axis::ALL.len());
        for (axis, result) in Axis::ALL.into_iter().zip(results) {
            let batch_out = result?;
            let first = batch_out.into_iter().next().ok_or_else(|| {
                Error::inference(format!("{axis} classifier returned an empty batch"))
            })?;
            label.push_str(&first);
        }

        Ok(TypeLabel::new(label))
    }
}
