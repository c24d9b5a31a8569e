//! Core types for symmetry-census analysis.

use foldsym_core::Scored;

/// One structural domain's symmetry-detection outcome, as produced by an
/// upstream census run. Read-only once parsed.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymmetryResult {
    /// Domain identifier (e.g. a SCOP domain id like "d1gkub1").
    pub domain_id: String,
    /// Detected order of rotational symmetry, when the run reported one.
    pub order: Option<u32>,
    /// Magnitude of the self-alignment rotation angle, in radians.
    pub angle: Option<f64>,
    /// TM-score of the self-alignment.
    pub tm_score: Option<f64>,
}

impl Scored for SymmetryResult {
    fn score(&self) -> f64 {
        self.tm_score.unwrap_or(f64::NAN)
    }
}

/// Enzyme-function annotation for one chain of a domain's parent structure.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainAnnotation {
    /// Chain identifier.
    pub chain: char,
    /// EC number of the chain's polymer, if annotated.
    pub ec: Option<String>,
}

/// Registry-side descriptor of a structural domain.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DomainInfo {
    /// Domain identifier.
    pub domain_id: String,
    /// Name of the structural fold the domain belongs to.
    pub fold: String,
    /// Chains participating in the domain, with their function annotations.
    pub chains: Vec<ChainAnnotation>,
}

/// Truncate a dot-separated EC code to `depth + 1` leading components.
///
/// Returns `None` when the code carries fewer components than requested; an
/// under-specified code (common in practice) is excluded rather than padded
/// or shortened into a misleading label.
///
/// ```
/// use foldsym_census::types::function_label;
///
/// assert_eq!(function_label("1.2.3.4", 1), Some("1.2".to_string()));
/// assert_eq!(function_label("1.2", 0), Some("1".to_string()));
/// assert_eq!(function_label("1.2", 3), None);
/// ```
pub fn function_label(code: &str, depth: usize) -> Option<String> {
    let parts: Vec<&str> = code.split('.').collect();
    if parts.len() < depth + 1 {
        return None;
    }
    Some(parts[..=depth].join("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_has_depth_plus_one_components() {
        for depth in 0..=3 {
            let label = function_label("3.2.1.1", depth).unwrap();
            assert_eq!(label.split('.').count(), depth + 1);
        }
    }

    #[test]
    fn full_code_at_each_depth() {
        assert_eq!(function_label("3.2.1.1", 0).as_deref(), Some("3"));
        assert_eq!(function_label("3.2.1.1", 1).as_deref(), Some("3.2"));
        assert_eq!(function_label("3.2.1.1", 2).as_deref(), Some("3.2.1"));
        assert_eq!(function_label("3.2.1.1", 3).as_deref(), Some("3.2.1.1"));
    }

    #[test]
    fn short_code_excluded_at_deeper_levels() {
        assert_eq!(function_label("1.2", 0).as_deref(), Some("1"));
        assert_eq!(function_label("1.2", 1).as_deref(), Some("1.2"));
        assert_eq!(function_label("1.2", 2), None);
        assert_eq!(function_label("1.2", 3), None);
    }

    #[test]
    fn score_falls_back_to_nan() {
        let result = SymmetryResult {
            domain_id: "d1xyza_".into(),
            order: None,
            angle: None,
            tm_score: None,
        };
        assert!(result.score().is_nan());

        let scored = SymmetryResult {
            tm_score: Some(0.55),
            ..result
        };
        assert!((scored.score() - 0.55).abs() < 1e-12);
    }
}
