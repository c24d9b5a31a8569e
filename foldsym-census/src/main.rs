//! Thin command-line surface over the census correlation core.
//!
//! Reads a tab-separated census corpus, prints the raw domain-to-EC listing
//! and the level-0 and level-1 comparisons to standard output, and
//! optionally writes the listing to a file.

use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::process::ExitCode;

use foldsym_census::correlation::FunctionCorrelation;
use foldsym_census::corpus::parse_corpus;
use foldsym_census::registry::TmScoreClassifier;
use foldsym_census::report::{write_comparison, write_listing};
use foldsym_core::Result;

const USAGE: &str = "Usage: foldsym-census <corpus.tsv> [listing-output.tsv]";

/// Example folds listed per comparison row.
const MAX_EXAMPLES: usize = 10;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() || args.len() > 2 {
        eprintln!("{}", USAGE);
        return ExitCode::from(2);
    }

    match run(&args[0], args.get(1).map(String::as_str)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(corpus_path: &str, listing_path: Option<&str>) -> Result<()> {
    let corpus = parse_corpus(corpus_path)?;
    let classifier = TmScoreClassifier::default();
    let corr = FunctionCorrelation::from_results(&corpus.results, &corpus.registry, &classifier);

    // optional file sink; a failure here must not spoil the console output
    if let Some(path) = listing_path {
        if let Err(e) = write_listing_file(&corr, path) {
            log::error!("couldn't write listing to {}: {}", path, e);
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_report(&corr, &mut out)
}

fn print_report<W: Write>(corr: &FunctionCorrelation, out: &mut W) -> Result<()> {
    writeln!(out, "============List of EC numbers of domains============")?;
    write_listing(corr, out)?;
    writeln!(out, "=====================================================\n")?;
    writeln!(out, "===================EC numbers level 0================")?;
    write_comparison(corr, 0, MAX_EXAMPLES, out)?;
    writeln!(out, "=====================================================\n")?;
    writeln!(out, "===================EC numbers level 1================")?;
    write_comparison(corr, 1, MAX_EXAMPLES, out)?;
    writeln!(out, "=====================================================\n")?;
    Ok(())
}

fn write_listing_file(corr: &FunctionCorrelation, path: &str) -> Result<()> {
    let mut file = File::create(path)?;
    write_listing(corr, &mut file)?;
    Ok(())
}
