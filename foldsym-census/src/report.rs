//! Flat text rendering of census correlation results.
//!
//! Pure serialization over [`FunctionCorrelation`] output; no aggregation
//! logic lives here. All rows are tab-separated.

use std::io::Write;

use foldsym_core::Result;

use crate::correlation::FunctionCorrelation;

/// Separator between the symmetric and asymmetric sections of a listing.
const SECTION_SEPARATOR: &str = "---------------------------------------------------";

/// Write the raw domain-to-code listing.
///
/// Symmetric assignments come first, one `domain_id<TAB>code` row each,
/// followed by a dashed separator line and the asymmetric assignments.
pub fn write_listing<W: Write>(corr: &FunctionCorrelation, out: &mut W) -> Result<()> {
    for assignment in corr.symmetric() {
        writeln!(out, "{}\t{}", assignment.domain_id, assignment.code)?;
    }
    writeln!(out, "{}", SECTION_SEPARATOR)?;
    for assignment in corr.asymmetric() {
        writeln!(out, "{}\t{}", assignment.domain_id, assignment.code)?;
    }
    Ok(())
}

/// Write the symmetric-vs-asymmetric comparison at `depth`.
///
/// One row per EC label:
/// `label<TAB>fraction<TAB>total[<TAB>foldCount[<TAB>fold]*]`.
/// The fold columns appear only for labels with at least one symmetric
/// domain.
pub fn write_comparison<W: Write>(
    corr: &FunctionCorrelation,
    depth: usize,
    max_examples: usize,
    out: &mut W,
) -> Result<()> {
    let rows = corr.build_report(depth, max_examples)?;
    for row in rows {
        write!(
            out,
            "{}\t{}\t{}",
            row.label,
            format_fraction(row.fraction()),
            row.total(),
        )?;
        if row.symmetric > 0 {
            write!(out, "\t{}", row.distinct_folds)?;
            for fold in &row.example_folds {
                write!(out, "\t{}", fold)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Render the raw listing to a string.
pub fn listing_string(corr: &FunctionCorrelation) -> Result<String> {
    let mut buf = Vec::new();
    write_listing(corr, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Render a comparison at `depth` to a string.
pub fn comparison_string(
    corr: &FunctionCorrelation,
    depth: usize,
    max_examples: usize,
) -> Result<String> {
    let mut buf = Vec::new();
    write_comparison(corr, depth, max_examples, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Two-decimal fraction, or the `NA` sentinel when there is no data.
fn format_fraction(fraction: f64) -> String {
    if fraction.is_nan() {
        "NA".to_string()
    } else {
        format!("{:.2}", fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{InMemoryRegistry, SignificanceClassifier};
    use crate::types::{ChainAnnotation, DomainInfo, SymmetryResult};

    struct ByOrder;

    impl SignificanceClassifier for ByOrder {
        fn is_significant(&self, result: &SymmetryResult) -> bool {
            result.order.map_or(false, |order| order >= 2)
        }
    }

    fn record(id: &str, order: Option<u32>) -> SymmetryResult {
        SymmetryResult {
            domain_id: id.to_string(),
            order,
            angle: None,
            tm_score: None,
        }
    }

    fn domain(id: &str, fold: &str, ec: &str) -> DomainInfo {
        DomainInfo {
            domain_id: id.to_string(),
            fold: fold.to_string(),
            chains: vec![ChainAnnotation {
                chain: 'A',
                ec: Some(ec.to_string()),
            }],
        }
    }

    fn sample() -> FunctionCorrelation {
        let mut registry = InMemoryRegistry::new();
        registry.insert(domain("ds1", "barrel", "3.2.1.1"));
        registry.insert(domain("ds2", "propeller", "3.2.1.4"));
        registry.insert(domain("da1", "sandwich", "3.1.1.1"));
        registry.insert(domain("da2", "sandwich", "4.1.1.1"));
        FunctionCorrelation::from_results(
            &[
                record("ds1", Some(6)),
                record("ds2", Some(2)),
                record("da1", None),
                record("da2", Some(1)),
            ],
            &registry,
            &ByOrder,
        )
    }

    #[test]
    fn listing_has_both_sections() {
        let listing = listing_string(&sample()).unwrap();
        assert_eq!(
            listing,
            "ds1\t3.2.1.1\n\
             ds2\t3.2.1.4\n\
             ---------------------------------------------------\n\
             da1\t3.1.1.1\n\
             da2\t4.1.1.1\n"
        );
    }

    #[test]
    fn comparison_rows_are_tab_separated() {
        let comparison = comparison_string(&sample(), 0, 10).unwrap();
        // "3": 2 symmetric of 3 total across two folds; "4": asymmetric only,
        // so no fold columns at all
        assert_eq!(comparison, "3\t0.67\t3\t2\tbarrel\tpropeller\n4\t0.00\t1\n");
    }

    #[test]
    fn comparison_respects_max_examples() {
        let comparison = comparison_string(&sample(), 0, 1).unwrap();
        assert_eq!(comparison, "3\t0.67\t3\t2\tbarrel\n4\t0.00\t1\n");
    }

    #[test]
    fn comparison_repeats_identically() {
        let corr = sample();
        let first = comparison_string(&corr, 1, 10).unwrap();
        let second = comparison_string(&corr, 1, 10).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn invalid_depth_propagates() {
        let corr = sample();
        let mut sink = Vec::new();
        assert!(write_comparison(&corr, 4, 10, &mut sink).is_err());
    }

    #[test]
    fn fraction_formatting() {
        assert_eq!(format_fraction(f64::NAN), "NA");
        assert_eq!(format_fraction(0.5), "0.50");
        assert_eq!(format_fraction(2.0 / 3.0), "0.67");
        assert_eq!(format_fraction(1.0), "1.00");
    }
}
