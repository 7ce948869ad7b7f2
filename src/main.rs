use clap::Parser;
use nearlite::{Collection, Document, HashEmbedder, Metadata, SimilarityMetric};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Nearlite - a minimal in-memory text similarity collection",
    long_about = None
)]
struct Args {
    /// Query term to search the collection for
    #[arg(short, long, default_value = "apple")]
    query: String,

    /// Number of results to retrieve
    #[arg(short, long, default_value_t = 3)]
    top_k: usize,

    /// Similarity metric: cosine, euclidean, or dot
    #[arg(short, long, default_value = "cosine")]
    metric: String,

    /// Embedding dimension for the built-in hashing embedder
    #[arg(short, long, default_value_t = 64)]
    dimension: usize,
}

const GROCERY_TEXTS: [&str; 14] = [
    "fresh red apples",
    "organic bananas",
    "ripe mangoes",
    "whole wheat bread",
    "farm-fresh eggs",
    "natural yogurt",
    "frozen vegetables",
    "grass-fed beef",
    "free-range chicken",
    "fresh salmon fillet",
    "aromatic coffee beans",
    "pure honey",
    "golden apple",
    "red fruit",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let metric: SimilarityMetric = args.metric.parse()?;

    let mut collection = Collection::new(
        "my_grocery_collection",
        metric,
        Box::new(HashEmbedder::new(args.dimension)?),
    )?;
    info!("Collection created: {}", collection.name());

    let mut metadata = Metadata::new();
    metadata.insert("source".to_string(), serde_json::json!("grocery_store"));
    metadata.insert("category".to_string(), serde_json::json!("food"));

    let documents = GROCERY_TEXTS
        .iter()
        .enumerate()
        .map(|(index, text)| {
            Document::new(format!("food_{}", index + 1), *text).with_metadata(metadata.clone())
        })
        .collect();
    collection.insert(documents)?;

    info!("Collection contents:");
    info!("Number of documents: {}", collection.len());

    let results = collection.query(&args.query, args.top_k)?;
    if results.is_empty() {
        info!("No documents found similar to \"{}\"", args.query);
        return Ok(());
    }

    info!("Top {} similar documents to \"{}\":", results.len(), args.query);
    for result in &results {
        info!(
            " - ID: {}, Text: \"{}\", Score: {:.4}",
            result.id, result.text, result.score
        );
    }

    Ok(())
}
