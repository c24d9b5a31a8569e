//! Correlation of detected rotational symmetry with enzyme function.
//!
//! [`FunctionCorrelation`] consumes a census of symmetry-detection results,
//! partitions function-annotated domains into symmetric and asymmetric
//! buckets, and answers ranked per-function comparison queries at any EC
//! hierarchy depth.

use std::collections::HashMap;

use foldsym_core::{FoldsymError, Result, Summarizable};

use crate::registry::{DomainRegistry, SignificanceClassifier};
use crate::types::{function_label, SymmetryResult};

/// Deepest EC hierarchy level a comparison can be requested at.
pub const MAX_DEPTH: usize = 3;

/// A domain with its single resolved function code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    /// Domain identifier.
    pub domain_id: String,
    /// The one EC code shared by every annotated chain of the domain.
    pub code: String,
    /// Structural fold the domain belongs to.
    pub fold: String,
}

/// Per-record outcome that kept a domain out of both buckets.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProcessingNote {
    /// The registry does not know the domain.
    Unresolved {
        /// Identifier the lookup was attempted with.
        domain_id: String,
    },
    /// The domain's chains carry more than one distinct function code.
    /// Not necessarily wrong, but the domain cannot be assigned a single
    /// code and is excluded from both buckets.
    Ambiguous {
        /// Identifier of the multi-function domain.
        domain_id: String,
        /// The distinct codes observed, in ascending order.
        codes: Vec<String>,
    },
    /// A resolution step failed; the record was skipped.
    Failed {
        /// Identifier of the skipped record.
        domain_id: String,
        /// What went wrong.
        reason: String,
    },
}

/// One row of a symmetric-vs-asymmetric comparison at a fixed depth.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonRow {
    /// EC label truncated to the requested depth.
    pub label: String,
    /// Number of symmetric domains under the label.
    pub symmetric: usize,
    /// Number of asymmetric domains under the label.
    pub asymmetric: usize,
    /// Number of distinct folds among the symmetric domains.
    pub distinct_folds: usize,
    /// Most prevalent folds among the symmetric domains, best first, capped
    /// at the requested number of examples. Ties rank alphabetically.
    pub example_folds: Vec<String>,
}

impl ComparisonRow {
    /// Total number of domains under the label.
    pub fn total(&self) -> usize {
        self.symmetric + self.asymmetric
    }

    /// Fraction of domains under the label that are symmetric.
    ///
    /// NaN when the label has no domains at all; never a division panic.
    pub fn fraction(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            f64::NAN
        } else {
            self.symmetric as f64 / total as f64
        }
    }
}

/// Outcome of processing a single census record.
enum RecordOutcome {
    Symmetric(Assignment),
    Asymmetric(Assignment),
    Note(ProcessingNote),
    /// No function information available; skipped silently.
    NoFunction,
}

/// Per-label accumulator used while building a comparison.
#[derive(Default)]
struct LabelStats {
    symmetric: usize,
    asymmetric: usize,
    folds: HashMap<String, usize>,
}

/// Symmetric and asymmetric domain buckets keyed by resolved function code.
///
/// Built eagerly in a single pass over the census and immutable afterwards;
/// any number of comparison queries can then be answered without touching
/// the raw corpus again.
#[derive(Debug, Clone)]
pub struct FunctionCorrelation {
    symmetric: Vec<Assignment>,
    asymmetric: Vec<Assignment>,
    notes: Vec<ProcessingNote>,
}

impl FunctionCorrelation {
    /// Build the correlation from a census of detection results.
    ///
    /// Records are processed in input order. A record that cannot be
    /// resolved is logged, recorded as a [`ProcessingNote`], and skipped;
    /// the batch never aborts because of one bad record. A domain is
    /// assigned a function code only when exactly one distinct code is
    /// observed across its chains, and lands in exactly one bucket as judged
    /// by the classifier.
    pub fn from_results<R, C>(results: &[SymmetryResult], registry: &R, classifier: &C) -> Self
    where
        R: DomainRegistry + Sync,
        C: SignificanceClassifier + Sync,
    {
        // Resolution is independent per record; with the `parallel` feature
        // it fans out while the bucket updates below stay sequential and
        // input-ordered.
        #[cfg(feature = "parallel")]
        let outcomes: Vec<RecordOutcome> = {
            use rayon::prelude::*;
            results
                .par_iter()
                .map(|result| Self::process_record(result, registry, classifier))
                .collect()
        };
        #[cfg(not(feature = "parallel"))]
        let outcomes: Vec<RecordOutcome> = results
            .iter()
            .map(|result| Self::process_record(result, registry, classifier))
            .collect();

        let mut symmetric = Vec::new();
        let mut asymmetric = Vec::new();
        let mut notes = Vec::new();

        for (i, outcome) in outcomes.into_iter().enumerate() {
            match outcome {
                RecordOutcome::Symmetric(assignment) => symmetric.push(assignment),
                RecordOutcome::Asymmetric(assignment) => asymmetric.push(assignment),
                RecordOutcome::Note(note) => {
                    match &note {
                        ProcessingNote::Unresolved { domain_id } => {
                            log::warn!("skipping {}: not found in the domain registry", domain_id);
                        }
                        ProcessingNote::Ambiguous { domain_id, codes } => {
                            log::info!(
                                "{} has {} distinct EC numbers; excluded from both buckets",
                                domain_id,
                                codes.len(),
                            );
                        }
                        ProcessingNote::Failed { domain_id, reason } => {
                            log::error!("skipping {}: {}", domain_id, reason);
                        }
                    }
                    notes.push(note);
                }
                RecordOutcome::NoFunction => {}
            }
            if i > 0 && i % 1000 == 0 {
                log::debug!("processed {} census records", i);
            }
        }

        Self {
            symmetric,
            asymmetric,
            notes,
        }
    }

    fn process_record<R, C>(result: &SymmetryResult, registry: &R, classifier: &C) -> RecordOutcome
    where
        R: DomainRegistry,
        C: SignificanceClassifier,
    {
        let domain = match registry.resolve(&result.domain_id) {
            Ok(Some(domain)) => domain,
            Ok(None) => {
                return RecordOutcome::Note(ProcessingNote::Unresolved {
                    domain_id: result.domain_id.clone(),
                })
            }
            Err(e) => {
                return RecordOutcome::Note(ProcessingNote::Failed {
                    domain_id: result.domain_id.clone(),
                    reason: e.to_string(),
                })
            }
        };

        let codes = match registry.function_codes(&domain) {
            Ok(codes) => codes,
            Err(e) => {
                return RecordOutcome::Note(ProcessingNote::Failed {
                    domain_id: result.domain_id.clone(),
                    reason: e.to_string(),
                })
            }
        };

        let mut iter = codes.into_iter();
        match (iter.next(), iter.next()) {
            (None, _) => RecordOutcome::NoFunction,
            (Some(code), None) => {
                let assignment = Assignment {
                    domain_id: result.domain_id.clone(),
                    code,
                    fold: domain.fold,
                };
                if classifier.is_significant(result) {
                    RecordOutcome::Symmetric(assignment)
                } else {
                    RecordOutcome::Asymmetric(assignment)
                }
            }
            (Some(first), Some(second)) => RecordOutcome::Note(ProcessingNote::Ambiguous {
                domain_id: result.domain_id.clone(),
                codes: [first, second].into_iter().chain(iter).collect(),
            }),
        }
    }

    /// Domains judged significantly symmetric, with their codes, in input
    /// order.
    pub fn symmetric(&self) -> &[Assignment] {
        &self.symmetric
    }

    /// Domains carrying a single function code but no significant symmetry,
    /// in input order.
    pub fn asymmetric(&self) -> &[Assignment] {
        &self.asymmetric
    }

    /// Records excluded from both buckets, with the reason for each.
    pub fn notes(&self) -> &[ProcessingNote] {
        &self.notes
    }

    /// Compare symmetric against asymmetric domain counts per EC label.
    ///
    /// `depth` selects the EC hierarchy level, 0 for the top tier up to
    /// [`MAX_DEPTH`]; anything deeper is an invalid-argument error, never a
    /// silent clamp. Domains whose code is under-specified for the requested
    /// depth contribute to no row. `max_examples` caps the example fold
    /// names listed per row.
    ///
    /// Rows appear in first-seen label order (symmetric assignments first,
    /// then asymmetric); within a row, folds rank by descending
    /// symmetric-domain count with ties broken by name.
    pub fn build_report(&self, depth: usize, max_examples: usize) -> Result<Vec<ComparisonRow>> {
        if depth > MAX_DEPTH {
            return Err(FoldsymError::InvalidInput(format!(
                "comparison depth must be between 0 and {}, got {}",
                MAX_DEPTH, depth,
            )));
        }

        let mut order: Vec<String> = Vec::new();
        let mut stats: HashMap<String, LabelStats> = HashMap::new();

        for assignment in &self.symmetric {
            let label = match function_label(&assignment.code, depth) {
                Some(label) => label,
                None => continue,
            };
            if !stats.contains_key(&label) {
                order.push(label.clone());
            }
            let entry = stats.entry(label).or_default();
            entry.symmetric += 1;
            *entry.folds.entry(assignment.fold.clone()).or_insert(0) += 1;
        }

        for assignment in &self.asymmetric {
            let label = match function_label(&assignment.code, depth) {
                Some(label) => label,
                None => continue,
            };
            if !stats.contains_key(&label) {
                order.push(label.clone());
            }
            stats.entry(label).or_default().asymmetric += 1;
        }

        let mut rows = Vec::with_capacity(order.len());
        for label in order {
            let entry = stats.remove(&label).unwrap_or_default();
            let mut ranked: Vec<(String, usize)> = entry.folds.into_iter().collect();
            ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            rows.push(ComparisonRow {
                label,
                symmetric: entry.symmetric,
                asymmetric: entry.asymmetric,
                distinct_folds: ranked.len(),
                example_folds: ranked
                    .into_iter()
                    .take(max_examples)
                    .map(|(fold, _)| fold)
                    .collect(),
            });
        }
        Ok(rows)
    }
}

impl Summarizable for FunctionCorrelation {
    fn summary(&self) -> String {
        format!(
            "FunctionCorrelation: {} symmetric, {} asymmetric, {} excluded",
            self.symmetric.len(),
            self.asymmetric.len(),
            self.notes.len(),
        )
    }
}
