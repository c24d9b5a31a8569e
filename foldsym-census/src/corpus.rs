//! Tab-separated census corpus parsing.
//!
//! A corpus file carries one row per analyzed domain:
//!
//! ```text
//! domain_id	fold	chains	order	angle	tm_score
//! d1gkub1	TIM beta/alpha-barrel	A:3.2.1.1;B:3.2.1.1	6	1.047	0.61
//! d1xyza_	Immunoglobulin-like	A:-	-	-	0.21
//! ```
//!
//! `chains` is a `;`-separated list of `chain:ec` pairs, with `-` marking an
//! unannotated chain. `order`, `angle`, and `tm_score` may each be `-` when
//! the upstream run did not report them.

use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use foldsym_core::{FoldsymError, Result};
use log::warn;

use crate::registry::InMemoryRegistry;
use crate::types::{ChainAnnotation, DomainInfo, SymmetryResult};

/// Number of columns a corpus row must carry.
const CORPUS_COLUMNS: usize = 6;

/// A parsed corpus: the result sequence plus the registry built from the
/// per-domain annotations carried alongside it.
#[derive(Debug, Clone)]
pub struct Corpus {
    /// Symmetry-detection results, in file order.
    pub results: Vec<SymmetryResult>,
    /// Domain descriptors keyed by identifier.
    pub registry: InMemoryRegistry,
}

/// Parse a tab-separated census corpus file.
///
/// Malformed data rows are logged and skipped; an unreadable file or a
/// missing header is an error, since without them no work can proceed.
pub fn parse_corpus(path: impl AsRef<Path>) -> Result<Corpus> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        FoldsymError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })?;
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| FoldsymError::Parse(e.to_string()))?;
    if headers.len() < CORPUS_COLUMNS {
        return Err(FoldsymError::Parse(format!(
            "{}: expected {} corpus columns, found {}",
            path.display(),
            CORPUS_COLUMNS,
            headers.len(),
        )));
    }

    let mut results = Vec::new();
    let mut registry = InMemoryRegistry::new();

    for (i, record) in reader.records().enumerate() {
        let line = i + 2; // 1-based, after the header
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                warn!("skipping corpus line {}: {}", line, e);
                continue;
            }
        };
        match parse_row(&record) {
            Ok((result, info)) => {
                registry.insert(info);
                results.push(result);
            }
            Err(e) => warn!("skipping corpus line {}: {}", line, e),
        }
    }

    Ok(Corpus { results, registry })
}

fn parse_row(record: &StringRecord) -> Result<(SymmetryResult, DomainInfo)> {
    if record.len() < CORPUS_COLUMNS {
        return Err(FoldsymError::Parse(format!(
            "expected {} columns, found {}",
            CORPUS_COLUMNS,
            record.len(),
        )));
    }

    let domain_id = record.get(0).unwrap_or("").trim();
    if domain_id.is_empty() {
        return Err(FoldsymError::Parse("empty domain_id".into()));
    }
    let fold = record.get(1).unwrap_or("").trim().to_string();
    let chains = parse_chains(record.get(2).unwrap_or(""))?;
    let order = parse_optional(record.get(3).unwrap_or(""), "order", |s| {
        s.parse::<u32>().ok()
    })?;
    let angle = parse_optional(record.get(4).unwrap_or(""), "angle", |s| {
        s.parse::<f64>().ok()
    })?;
    let tm_score = parse_optional(record.get(5).unwrap_or(""), "tm_score", |s| {
        s.parse::<f64>().ok()
    })?;

    let result = SymmetryResult {
        domain_id: domain_id.to_string(),
        order,
        angle,
        tm_score,
    };
    let info = DomainInfo {
        domain_id: domain_id.to_string(),
        fold,
        chains,
    };
    Ok((result, info))
}

/// Parse a `;`-separated list of `chain:ec` pairs; `-` means no annotation.
fn parse_chains(raw: &str) -> Result<Vec<ChainAnnotation>> {
    let raw = raw.trim();
    let mut chains = Vec::new();
    if raw.is_empty() || raw == "-" {
        return Ok(chains);
    }
    for part in raw.split(';') {
        let (chain, ec) = part.split_once(':').ok_or_else(|| {
            FoldsymError::Parse(format!("bad chain annotation '{}'", part))
        })?;
        let mut ids = chain.trim().chars();
        let id = match (ids.next(), ids.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(FoldsymError::Parse(format!(
                    "bad chain identifier '{}'",
                    chain,
                )))
            }
        };
        let ec = ec.trim();
        let ec = if ec.is_empty() || ec == "-" {
            None
        } else {
            Some(ec.to_string())
        };
        chains.push(ChainAnnotation { chain: id, ec });
    }
    Ok(chains)
}

/// Parse an optional numeric field where `-` or empty means absent.
fn parse_optional<T>(raw: &str, name: &str, parse: impl Fn(&str) -> Option<T>) -> Result<Option<T>> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "-" {
        return Ok(None);
    }
    match parse(raw) {
        Some(value) => Ok(Some(value)),
        None => Err(FoldsymError::Parse(format!("bad {} '{}'", name, raw))),
    }
}
