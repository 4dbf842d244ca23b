//! Shared application state

use mbtype_classifiers::{TextNormalizer, TypeAggregator};
use std::sync::Arc;

/// Immutable state shared across all requests.
///
/// Built once at startup from the loaded model set; nothing in it is
/// written during request handling, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    /// Text normalizer feeding the classifiers
    pub normalizer: Arc<TextNormalizer>,

    /// The four axis classifiers behind the aggregation contract
    pub aggregator: Arc<TypeAggregator>,
}

impl AppState {
    pub fn new(normalizer: TextNormalizer, aggregator: TypeAggregator) -> Self {
        Self {
            normalizer: Arc::new(normalizer),
            aggregator: Arc::new(aggregator),
        }
    }
}
