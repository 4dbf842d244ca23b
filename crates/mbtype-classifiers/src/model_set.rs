//! Loading and holding the four axis models
//!
//! All four artifacts load at startup or the service never becomes ready;
//! there is no partial-capability mode.

use crate::classifier::AxisClassifier;
use crate::linear::LinearAxisClassifier;
use mbtype_core::{Axis, Error, Result};
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// The four loaded axis classifiers, in label concatenation order.
///
/// Built once at startup and shared read-only for the process lifetime.
pub struct ModelSet {
    classifiers: Vec<Arc<dyn AxisClassifier>>,
}

impl fmt::Debug for ModelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelSet")
            .field(
                "classifiers",
                &self
                    .classifiers
                    .iter()
                    .map(|c| c.name())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl ModelSet {
    /// Load all four axis artifacts from a models directory.
    ///
    /// Expects `model_EI.json`, `model_NS.json`, `model_TF.json`, and
    /// `model_PJ.json` under `models_dir`. Any missing or invalid artifact
    /// is fatal.
    pub fn load(models_dir: impl AsRef<Path>) -> Result<Self> {
        let models_dir = models_dir.as_ref();
        let mut classifiers: Vec<Arc<dyn AxisClassifier>> =
            Vec::with_capacity(Axis::ALL.len());

        for axis in Axis::ALL {
            let path = models_dir.join(axis.artifact_file_name());
            let classifier = LinearAxisClassifier::from_file(&path).map_err(|e| {
                Error::model(format!(
                    "failed to load {axis} axis model from {}: {e}",
                    path.display()
                ))
            })?;
            if classifier.axis() != axis {
                return Err(Error::model(format!(
                    "artifact {} declares axis {}, expected {axis}",
                    path.display(),
                    classifier.axis()
                )));
            }

            info!(%axis, path = %path.display(), "loaded axis model");
            classifiers.push(Arc::new(classifier));
        }

        Ok(Self { classifiers })
    }

    /// Build a set from pre-constructed classifiers, one per axis in
    /// [`Axis::ALL`] order.
    pub fn from_classifiers(classifiers: [Arc<dyn AxisClassifier>; 4]) -> Result<Self> {
        for (classifier, axis) in classifiers.iter().zip(Axis::ALL) {
            if classifier.axis() != axis {
                return Err(Error::model(format!(
                    "classifier {} is for axis {}, expected {axis}",
                    classifier.name(),
                    classifier.axis()
                )));
            }
        }
        Ok(Self {
            classifiers: classifiers.into(),
        })
    }

    /// The classifier for one axis
    pub fn classifier(&self, axis: Axis) -> &Arc<dyn AxisClassifier> {
        // variant order matches Axis::ALL
        &self.classifiers[axis as usize]
    }

    /// Names of the loaded models, in axis order
    pub fn model_names(&self) -> Vec<String> {
        self.classifiers
            .iter()
            .map(|c| c.name().to_string())
            .collect()
    }
}
