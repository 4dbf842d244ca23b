//! Core types for MBType

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four independent personality dimensions.
///
/// The variant order is the order in which axis predictions are
/// concatenated into a [`TypeLabel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Axis {
    /// Extraversion / Introversion
    Ei,
    /// Intuition / Sensing
    Ns,
    /// Thinking / Feeling
    Tf,
    /// Perceiving / Judging
    Pj,
}

impl Axis {
    /// All axes in label concatenation order
    pub const ALL: [Axis; 4] = [Axis::Ei, Axis::Ns, Axis::Tf, Axis::Pj];

    /// The two symbols a classifier for this axis may emit
    pub fn alphabet(&self) -> [char; 2] {
        match self {
            Self::Ei => ['E', 'I'],
            Self::Ns => ['N', 'S'],
            Self::Tf => ['T', 'F'],
            Self::Pj => ['P', 'J'],
        }
    }

    /// File name of the model artifact for this axis
    pub fn artifact_file_name(&self) -> &'static str {
        match self {
            Self::Ei => "model_EI.json",
            Self::Ns => "model_NS.json",
            Self::Tf => "model_TF.json",
            Self::Pj => "model_PJ.json",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ei => "EI",
            Self::Ns => "NS",
            Self::Tf => "TF",
            Self::Pj => "PJ",
        };
        f.write_str(name)
    }
}

/// Normalized text ready for classification.
///
/// Space-joined, lowercase, alphabetic-only, stopword-filtered, stemmed
/// tokens. Derived deterministically from the raw post and never mutated
/// after creation. May be empty; an empty cleaned post is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CleanedPost(String);

impl CleanedPost {
    /// Create a cleaned post from already-normalized text
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The normalized text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether normalization left no tokens
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CleanedPost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Four-character composite personality label.
///
/// Formed by concatenating one prediction per axis in [`Axis::ALL`] order.
/// Any combination of the four independent axis outputs is accepted; there
/// is no validation against the sixteen canonical types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeLabel(String);

impl TypeLabel {
    /// Create a type label from an already-concatenated string
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The composite label text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
