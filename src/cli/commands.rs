//! Command implementations for the textcat CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::classifier::{Corpus, NaiveBayesClassifier};
use crate::cli::args::{ClassifyArgs, Command, StatsArgs, TextcatArgs};
use crate::cli::output::{
    ClassStats, ClassificationResult, ClassificationResults, ModelStats, output_classifications,
    output_model_stats,
};

/// Execute a CLI command.
pub fn execute_command(args: TextcatArgs) -> Result<()> {
    match &args.command {
        Command::Classify(classify_args) => classify_documents(classify_args.clone(), &args),
        Command::Demo => run_demo(&args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Train on a corpus file and classify documents.
fn classify_documents(args: ClassifyArgs, cli_args: &TextcatArgs) -> Result<()> {
    let corpus = load_corpus(&args.corpus)?;

    let documents = if args.documents.is_empty() {
        read_documents_from_stdin()?
    } else {
        args.documents.clone()
    };

    if documents.is_empty() {
        bail!("no documents to classify");
    }

    let classifier = NaiveBayesClassifier::train(&corpus)?;

    if cli_args.verbosity() > 1 {
        println!(
            "Trained on {} documents across {} classes ({} distinct tokens)",
            classifier.model().total_documents(),
            classifier.model().class_count(),
            classifier.model().vocabulary_size()
        );
    }

    let predicted = classifier.predict(&documents)?;
    let scores = if args.show_scores {
        Some(classifier.score(&documents)?)
    } else {
        None
    };

    let results = ClassificationResults {
        results: documents
            .into_iter()
            .enumerate()
            .map(|(i, document)| ClassificationResult {
                document,
                predicted: predicted[i].clone(),
                scores: scores.as_ref().map(|all| all[i].clone()),
            })
            .collect(),
    };

    output_classifications(&results, cli_args)?;
    Ok(())
}

/// Classify the built-in toy corpus's four example documents.
fn run_demo(cli_args: &TextcatArgs) -> Result<()> {
    let corpus = demo_corpus();
    let documents = [
        "How did your final exam go",
        "Last minute clearance discount",
        "Nigerian Prince",
        "Payment for your kids processed successfully",
    ];

    let classifier = NaiveBayesClassifier::train(&corpus)?;
    let predicted = classifier.predict(&documents)?;

    let results = ClassificationResults {
        results: documents
            .iter()
            .zip(predicted)
            .map(|(document, predicted)| ClassificationResult {
                document: document.to_string(),
                predicted,
                scores: None,
            })
            .collect(),
    };

    output_classifications(&results, cli_args)?;
    Ok(())
}

/// Train on a corpus file and report model statistics.
fn show_stats(args: StatsArgs, cli_args: &TextcatArgs) -> Result<()> {
    let corpus = load_corpus(&args.corpus)?;
    let classifier = NaiveBayesClassifier::train(&corpus)?;
    let model = classifier.model();

    let stats = ModelStats {
        vocabulary_size: model.vocabulary_size(),
        total_documents: model.total_documents(),
        classes: model
            .classes()
            .map(|(label, class)| ClassStats {
                label: label.to_string(),
                documents: class.document_count(),
                words: class.word_total(),
                distinct_words: class.distinct_words(),
            })
            .collect(),
    };

    output_model_stats(&stats, cli_args)?;
    Ok(())
}

/// Load a corpus from a JSON file.
fn load_corpus(path: &Path) -> Result<Corpus> {
    let file = File::open(path)
        .with_context(|| format!("failed to open corpus file: {}", path.display()))?;
    let corpus = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse corpus file: {}", path.display()))?;
    Ok(corpus)
}

/// Read documents from stdin, one per line.
fn read_documents_from_stdin() -> Result<Vec<String>> {
    let stdin = io::stdin();
    let mut documents = Vec::new();
    for line in stdin.lock().lines() {
        documents.push(line.context("failed to read document from stdin")?);
    }
    Ok(documents)
}

/// The toy spam corpus used by the demo command.
fn demo_corpus() -> Corpus {
    let mut corpus = Corpus::new();
    corpus.add_class(
        "spam",
        [
            "Dear sir, I am Dr Tunde, brother of Nigerian Prince",
            "Win a million dollars today",
            "48 hours clearance ends now 48 hours 48 hours Free stuff",
            "Private invite to exclusive event",
            "Discount inside 90 percent off everything",
            "12 days of deals happening now Closeout sale Free giveaways and more",
            "This is your last chance to register for the biggest giveaway of the year",
            "Your attention is needed for this very important message",
            "Tick-tock it's the last day for 30 percent off your purchase",
            "Final hours Mega mega mega mega mega free shipping on all items",
            "Checkout these last minute deals on all electronics",
            "Dear sir, please join me in this one of a lifetime opportunity",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
    );
    corpus.add_class(
        "not spam",
        [
            "It was great catching up with you yesterday give me a call anytime",
            "Please remember to bring the drink ingredients to the party",
            "How did your final exam go yesterday",
            "Please give me a call back",
            "Thanks for inquiring about transferring the non-IRA assets from your personal account",
            "You have a package to pick up at the lobby hub",
            "You have a package to pick up at the lobby hub",
            "Thanks for reaching out, a member of our team will get back to you",
            "You have a package to pick up at the lobby hub",
            "Payment successfully processed for account ending in",
            "I am attaching mom's favorite mulled wine recipe that you can use for this weekend",
            "How are the kids doing",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
    );
    corpus
}
