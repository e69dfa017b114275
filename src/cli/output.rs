//! Output formatting for CLI commands.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, TextcatArgs};
use crate::error::Result;

/// Result structure for a single classified document.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub document: String,
    pub predicted: String,
    /// Per-class log-probability scores, present with --show-scores.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<BTreeMap<String, f64>>,
}

/// Result structure for a classification run.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationResults {
    pub results: Vec<ClassificationResult>,
}

/// Statistics for a single class in a trained model.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassStats {
    pub label: String,
    pub documents: u64,
    pub words: u64,
    pub distinct_words: usize,
}

/// Statistics for a trained model.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelStats {
    pub vocabulary_size: usize,
    pub total_documents: u64,
    pub classes: Vec<ClassStats>,
}

/// Output classification results in the format selected by the args.
pub fn output_classifications(results: &ClassificationResults, args: &TextcatArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(results, args),
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!("Classification Results:");
                println!("═══════════════════════");
            }

            for result in &results.results {
                println!("{}\t{}", result.predicted, result.document);

                if let Some(scores) = &result.scores {
                    for (label, log_prob) in scores {
                        println!("    {label}: {log_prob:.6}");
                    }
                }
            }

            Ok(())
        }
    }
}

/// Output model statistics in the format selected by the args.
pub fn output_model_stats(stats: &ModelStats, args: &TextcatArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(stats, args),
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!("Model Statistics:");
                println!("═════════════════");
            }

            println!("Vocabulary size: {}", stats.vocabulary_size);
            println!("Total documents: {}", stats.total_documents);

            for class in &stats.classes {
                println!(
                    "  {}: {} documents, {} words ({} distinct)",
                    class.label, class.documents, class.words, class.distinct_words
                );
            }

            Ok(())
        }
    }
}

/// Output any serializable value as JSON, honoring --pretty.
fn output_json<T: Serialize>(value: &T, args: &TextcatArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
