//! Linear bag-of-words axis classifier
//!
//! Each axis model is an exported linear classifier: a vocabulary mapping
//! terms to weight indices, one weight per term, an intercept, and the two
//! class labels. Scoring a cleaned post is a sparse dot product over its
//! whitespace tokens; the sign of the score selects the label.

use crate::classifier::AxisClassifier;
use async_trait::async_trait;
use mbtype_core::{Axis, CleanedPost, Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// On-disk form of a linear axis model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModelArtifact {
    /// Axis this model predicts
    pub axis: Axis,

    /// Class labels; index 0 is emitted for non-positive scores, index 1
    /// for positive scores
    pub labels: [String; 2],

    /// Term to weight-index mapping
    pub vocabulary: HashMap<String, usize>,

    /// One weight per vocabulary term
    pub weights: Vec<f32>,

    /// Decision function intercept
    pub intercept: f32,
}

/// A loaded linear model for one personality axis.
#[derive(Debug)]
pub struct LinearAxisClassifier {
    name: String,
    axis: Axis,
    labels: [String; 2],
    vocabulary: HashMap<String, usize>,
    weights: Vec<f32>,
    intercept: f32,
}

impl LinearAxisClassifier {
    /// Build a classifier from a deserialized artifact, validating it
    /// against the axis label alphabet.
    pub fn from_artifact(artifact: LinearModelArtifact) -> Result<Self> {
        let alphabet = artifact.axis.alphabet();
        for label in &artifact.labels {
            let matches_alphabet =
                label.len() == 1 && label.chars().all(|c| alphabet.contains(&c));
            if !matches_alphabet {
                return Err(Error::model(format!(
                    "label {label:?} is not in the {} axis alphabet {alphabet:?}",
                    artifact.axis
                )));
            }
        }
        if artifact.labels[0] == artifact.labels[1] {
            return Err(Error::model(format!(
                "{} axis model declares the same label for both classes",
                artifact.axis
            )));
        }

        if artifact.weights.len() != artifact.vocabulary.len() {
            return Err(Error::model(format!(
                "{} axis model has {} weights for {} vocabulary terms",
                artifact.axis,
                artifact.weights.len(),
                artifact.vocabulary.len()
            )));
        }
        if let Some((term, &index)) = artifact
            .vocabulary
            .iter()
            .find(|(_, &index)| index >= artifact.weights.len())
        {
            return Err(Error::model(format!(
                "{} axis model maps term {term:?} to out-of-range weight index {index}",
                artifact.axis
            )));
        }

        Ok(Self {
            name: format!("{}-linear", artifact.axis),
            axis: artifact.axis,
            labels: artifact.labels,
            vocabulary: artifact.vocabulary,
            weights: artifact.weights,
            intercept: artifact.intercept,
        })
    }

    /// Load a classifier from a JSON artifact file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let artifact: LinearModelArtifact = serde_json::from_str(&raw)?;
        Self::from_artifact(artifact)
    }

    /// Decision function: occurrence-weighted dot product plus intercept
    fn score(&self, post: &CleanedPost) -> f32 {
        let mut score = self.intercept;
        for token in post.as_str().split_whitespace() {
            if let Some(&index) = self.vocabulary.get(token) {
                score += self.weights[index];
            }
        }
        score
    }

    fn predict_one(&self, post: &CleanedPost) -> String {
        let class = usize::from(self.score(post) > 0.0);
        self.labels[class].clone()
    }
}

#[async_trait]
impl AxisClassifier for LinearAxisClassifier {
    async fn predict_batch(&self, posts: &[CleanedPost]) -> Result<Vec<String>> {
        Ok(posts.iter().map(|post| self.predict_one(post)).collect())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn axis(&self) -> Axis {
        self.axis
    }
}
