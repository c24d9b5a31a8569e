//! Symmetry-function correlation analysis for protein-domain censuses.
//!
//! `foldsym-census` consumes a batch of structural-symmetry detection
//! results and correlates detected rotational symmetry with enzyme function
//! (EC classification):
//!
//! - **Data model** — census records and registry descriptors in [`types`]
//! - **Collaborator seams** — [`registry::DomainRegistry`] and
//!   [`registry::SignificanceClassifier`], with in-memory implementations
//! - **Aggregation** — [`correlation::FunctionCorrelation`] buckets domains
//!   by significance and answers per-EC comparison queries
//! - **Corpus I/O** — tab-separated corpus parsing in [`corpus`]
//! - **Reporting** — flat text rendering in [`report`]
//!
//! # Quick start
//!
//! ```
//! use foldsym_census::correlation::FunctionCorrelation;
//! use foldsym_census::registry::{InMemoryRegistry, TmScoreClassifier};
//! use foldsym_census::types::{ChainAnnotation, DomainInfo, SymmetryResult};
//!
//! let mut registry = InMemoryRegistry::new();
//! registry.insert(DomainInfo {
//!     domain_id: "d1gkub1".into(),
//!     fold: "TIM beta/alpha-barrel".into(),
//!     chains: vec![ChainAnnotation { chain: 'A', ec: Some("3.2.1.1".into()) }],
//! });
//! let results = vec![SymmetryResult {
//!     domain_id: "d1gkub1".into(),
//!     order: Some(6),
//!     angle: Some(1.047),
//!     tm_score: Some(0.61),
//! }];
//!
//! let corr = FunctionCorrelation::from_results(
//!     &results,
//!     &registry,
//!     &TmScoreClassifier::default(),
//! );
//! assert_eq!(corr.symmetric().len(), 1);
//!
//! let rows = corr.build_report(0, 10).unwrap();
//! assert_eq!(rows[0].label, "3");
//! ```

pub mod corpus;
pub mod correlation;
pub mod registry;
pub mod report;
pub mod types;

pub use corpus::{parse_corpus, Corpus};
pub use correlation::{
    Assignment, ComparisonRow, FunctionCorrelation, ProcessingNote, MAX_DEPTH,
};
pub use registry::{DomainRegistry, InMemoryRegistry, SignificanceClassifier, TmScoreClassifier};
pub use types::{function_label, ChainAnnotation, DomainInfo, SymmetryResult};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{comparison_string, listing_string};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn integration_parse_aggregate_report() {
        let mut file = NamedTempFile::with_suffix(".tsv").unwrap();
        writeln!(file, "domain_id\tfold\tchains\torder\tangle\ttm_score").unwrap();
        // significant 6-fold barrel
        writeln!(
            file,
            "d1gkub1\tTIM beta/alpha-barrel\tA:3.2.1.1;B:3.2.1.1\t6\t1.047\t0.61"
        )
        .unwrap();
        // same top-level EC tier, no symmetry
        writeln!(file, "d2pela_\tSandwich\tA:3.1.1.1\t1\t2.513\t0.22").unwrap();
        // ambiguous: two distinct codes, excluded
        writeln!(file, "d3ambg_\tBarrel-sandwich hybrid\tA:1.1.1.1;B:2.2.2.2\t2\t3.1\t0.55")
            .unwrap();
        // no function information, silently skipped
        writeln!(file, "d4none_\tLong alpha-hairpin\tA:-\t2\t3.1\t0.55").unwrap();
        file.flush().unwrap();

        let corpus = parse_corpus(file.path()).unwrap();
        assert_eq!(corpus.results.len(), 4);

        let corr = FunctionCorrelation::from_results(
            &corpus.results,
            &corpus.registry,
            &TmScoreClassifier::default(),
        );
        assert_eq!(corr.symmetric().len(), 1);
        assert_eq!(corr.asymmetric().len(), 1);
        assert_eq!(corr.notes().len(), 1);
        assert!(matches!(
            corr.notes()[0],
            ProcessingNote::Ambiguous { ref domain_id, .. } if domain_id == "d3ambg_"
        ));

        let listing = listing_string(&corr).unwrap();
        assert!(listing.starts_with("d1gkub1\t3.2.1.1\n"));
        assert!(listing.contains("d2pela_\t3.1.1.1"));
        assert!(!listing.contains("d3ambg_"));

        let depth0 = comparison_string(&corr, 0, 10).unwrap();
        assert_eq!(depth0, "3\t0.50\t2\t1\tTIM beta/alpha-barrel\n");

        // the same immutable aggregate answers a deeper query
        let depth1 = comparison_string(&corr, 1, 10).unwrap();
        assert_eq!(
            depth1,
            "3.2\t1.00\t1\t1\tTIM beta/alpha-barrel\n3.1\t0.00\t1\n"
        );
    }
}
