//! Criterion benchmarks for the textcat classifier.
//!
//! Covers the two halves of the pipeline:
//! - Training (corpus folding into a model)
//! - Scoring and prediction against a trained model

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use textcat::classifier::{Corpus, NaiveBayesClassifier};

/// Generate test documents for benchmarking.
fn generate_test_documents(count: usize) -> Vec<String> {
    let words = vec![
        "account", "package", "payment", "discount", "clearance", "free", "deal", "invite",
        "event", "party", "exam", "call", "back", "team", "member", "final", "hours", "shipping",
        "electronics", "recipe", "weekend", "lobby", "million", "dollars", "today", "exclusive",
        "register", "giveaway", "message", "purchase", "attention", "opportunity",
    ];

    let mut documents = Vec::with_capacity(count);
    for i in 0..count {
        let doc_length = 10 + (i % 30); // Variable length documents
        let mut doc_words = Vec::with_capacity(doc_length);
        for j in 0..doc_length {
            let word_idx = (i * 7 + j * 13) % words.len(); // Pseudo-random distribution
            doc_words.push(words[word_idx]);
        }

        documents.push(doc_words.join(" "));
    }

    documents
}

/// Build a two-class corpus from generated documents.
fn generate_corpus(documents_per_class: usize) -> Corpus {
    let documents = generate_test_documents(documents_per_class * 2);
    let mut corpus = Corpus::new();
    for (i, document) in documents.into_iter().enumerate() {
        let label = if i % 2 == 0 { "even" } else { "odd" };
        corpus.add_document(label, document);
    }
    corpus
}

/// Benchmark model training.
fn bench_training(c: &mut Criterion) {
    let mut group = c.benchmark_group("training");

    for documents_per_class in [10, 100, 1000] {
        let corpus = generate_corpus(documents_per_class);
        group.throughput(Throughput::Elements(corpus.document_count() as u64));
        group.bench_function(format!("train_{documents_per_class}_docs_per_class"), |b| {
            b.iter(|| {
                let classifier = NaiveBayesClassifier::train(black_box(&corpus));
                black_box(classifier)
            })
        });
    }

    group.finish();
}

/// Benchmark scoring and prediction.
fn bench_prediction(c: &mut Criterion) {
    let mut group = c.benchmark_group("prediction");

    let corpus = generate_corpus(500);
    let classifier = NaiveBayesClassifier::train(&corpus).unwrap();
    let documents = generate_test_documents(100);

    group.bench_function("score_single_document", |b| {
        b.iter(|| {
            let scores = classifier.score(black_box(&documents[..1]));
            black_box(scores)
        })
    });

    group.throughput(Throughput::Elements(documents.len() as u64));
    group.bench_function("predict_batch_documents", |b| {
        b.iter(|| {
            let labels = classifier.predict(black_box(&documents));
            black_box(labels)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_training, bench_prediction);
criterion_main!(benches);
