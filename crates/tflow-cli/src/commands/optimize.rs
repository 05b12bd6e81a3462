use anyhow::Result;
use tflow_config::Config;
use tflow_core::OptimizationResult;
use tflow_engine::{Optimizer, OptimizerOptions, effective_output, tokens_saved};
use tflow_security::MaskingProfile;
use tflow_storage::SavingsLedger;
use tflow_tokens::TokenEstimator;
use tracing::warn;

use super::read_input;
use crate::cli::OptimizeArgs;

pub fn handle(args: OptimizeArgs, config: &Config) -> Result<()> {
    let input = read_input(args.file.as_deref())?;
    let masking = args.profile.map(MaskingProfile::from).unwrap_or(config.masking);

    let optimizer = Optimizer::new(OptimizerOptions { masking });
    let result = optimizer.optimize(&input);
    let output = effective_output(&result, &input);

    if args.json {
        println!("{}", result.to_json()?);
    } else {
        println!("{}", output);
        // Report on stderr so the optimized text can be piped
        print_report(&result, &input, config);
    }

    if config.ledger.enabled && !args.no_ledger {
        record_savings(&input, output, config);
    }

    if args.copy {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(output.to_string())?;
        eprintln!("✓ Copied to clipboard");
    }

    Ok(())
}

fn print_report(result: &OptimizationResult, input: &str, config: &Config) {
    let stats = &result.stats;

    eprintln!();
    eprintln!(
        "Words: {} → {} ({}% reduction, {}% efficiency)",
        stats.original_words, stats.optimized_words, stats.reduction, stats.efficiency
    );
    eprintln!(
        "Lines: {} total, {} compressed, {} code, {} preserved",
        stats.total_lines, stats.lines_processed, stats.code_lines, stats.preserved_lines
    );
    eprintln!(
        "Chars: {} → {} ({}%)",
        stats.original_chars, stats.optimized_chars, stats.char_reduction
    );

    if !config.report.methods.is_empty() {
        eprintln!("Tokens:");
        for method in &config.report.methods {
            if let Some(analysis) = stats.tokens.get(method) {
                eprintln!(
                    "  {:<12} {:>6} → {:<6} ({}%)",
                    method.name(),
                    analysis.original,
                    analysis.optimized,
                    analysis.reduction
                );
            }
        }
    }

    if config.report.bpe_estimate {
        match TokenEstimator::new() {
            Ok(estimator) => {
                let (before, after) = estimator.estimate_pair(input, &result.optimized);
                eprintln!("  {:<12} {:>6} → {:<6} (estimate)", "cl100k", before, after);
            }
            Err(e) => warn!("BPE estimate unavailable: {}", e),
        }
    }

    if config.report.show_detections && !result.detections.is_empty() {
        eprintln!("Secrets masked: {}", result.detections.len());
        for d in &result.detections {
            eprintln!("  line {} [{}] {}: {}", d.line, d.severity, d.kind, d.masked);
        }
    }
}

fn record_savings(input: &str, output: &str, config: &Config) {
    let saved = tokens_saved(input, output) as u64;
    if saved == 0 {
        return;
    }

    let opened = match &config.ledger.path {
        Some(path) => SavingsLedger::open(path),
        None => SavingsLedger::open_default(),
    };

    // The optimized text is already printed; a ledger problem only costs the tally
    if let Err(e) = opened.and_then(|mut ledger| ledger.record_today(saved)) {
        warn!("Failed to record savings: {}", e);
    }
}
