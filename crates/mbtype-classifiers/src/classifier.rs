//! Axis classifier trait

use async_trait::async_trait;
use mbtype_core::{Axis, CleanedPost, Result};

/// Capability shared by all four axis classifiers.
///
/// A classifier is loaded once at startup, shared read-only across
/// requests, and stateless from the caller's perspective. Prediction is
/// batch-oriented: callers wrap a single post as a one-element batch and
/// take the first element of the result.
#[async_trait]
pub trait AxisClassifier: Send + Sync {
    /// Predict one single-letter label per input post.
    ///
    /// The output batch has the same length as the input batch, and every
    /// label is drawn from the two-symbol alphabet of [`Self::axis`].
    async fn predict_batch(&self, posts: &[CleanedPost]) -> Result<Vec<String>>;

    /// Get the classifier name
    fn name(&self) -> &str;

    /// The personality axis this classifier predicts
    fn axis(&self) -> Axis;
}
