//! Registry and classifier seams consulted during aggregation.
//!
//! The census core never reaches into ambient global databases: the domain
//! registry and the significance classifier are injected as read-only
//! collaborators, so tests can substitute in-memory fakes.

use std::collections::{BTreeSet, HashMap};

use foldsym_core::Result;

use crate::types::{DomainInfo, SymmetryResult};

/// Read-only lookup of structural domains and their function annotations.
pub trait DomainRegistry {
    /// Resolve a domain identifier to its descriptor, or `None` when the
    /// registry does not know the domain.
    fn resolve(&self, domain_id: &str) -> Result<Option<DomainInfo>>;

    /// The distinct enzyme-function codes observed across the domain's
    /// constituent chains. May be empty when no chain is annotated.
    ///
    /// The default implementation reads the codes off the descriptor itself;
    /// registries that consult a separate function database can override it.
    fn function_codes(&self, domain: &DomainInfo) -> Result<BTreeSet<String>> {
        let mut codes = BTreeSet::new();
        for chain in &domain.chains {
            if let Some(ec) = &chain.ec {
                codes.insert(ec.clone());
            }
        }
        Ok(codes)
    }
}

/// Judges whether a detection result shows significant symmetry.
pub trait SignificanceClassifier {
    /// Whether the detected symmetry is structurally meaningful.
    fn is_significant(&self, result: &SymmetryResult) -> bool;
}

/// Significance by detected order and TM-score threshold.
///
/// A result is significant when a non-trivial order (at least 2) was
/// detected and the self-alignment TM-score reaches the threshold. Results
/// missing either value are never significant.
#[derive(Debug, Clone)]
pub struct TmScoreClassifier {
    threshold: f64,
}

impl TmScoreClassifier {
    /// Conventional TM-score cutoff for significant internal symmetry.
    pub const DEFAULT_THRESHOLD: f64 = 0.4;

    /// Create a classifier with the given TM-score threshold.
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Default for TmScoreClassifier {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}

impl SignificanceClassifier for TmScoreClassifier {
    fn is_significant(&self, result: &SymmetryResult) -> bool {
        let order_ok = result.order.map_or(false, |order| order >= 2);
        let score_ok = result.tm_score.map_or(false, |tm| tm >= self.threshold);
        order_ok && score_ok
    }
}

/// HashMap-backed [`DomainRegistry`] for stand-alone runs and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    domains: HashMap<String, DomainInfo>,
}

impl InMemoryRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a domain descriptor, replacing any previous entry with the
    /// same identifier.
    pub fn insert(&mut self, info: DomainInfo) {
        self.domains.insert(info.domain_id.clone(), info);
    }

    /// Number of registered domains.
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

impl DomainRegistry for InMemoryRegistry {
    fn resolve(&self, domain_id: &str) -> Result<Option<DomainInfo>> {
        Ok(self.domains.get(domain_id).cloned())
    }
}
