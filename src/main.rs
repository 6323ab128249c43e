use std::error::Error;

use tracing_subscriber::EnvFilter;

use shotmatch::{
    search_similar, FeatureExtractor, MemoryBackend, MemoryStore, MotionPath, Shot,
    ShotmatchConfig,
};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ShotmatchConfig::default();
    let extractor = config.extractor();
    let store = MemoryStore::new();
    let backend = MemoryBackend::new();

    let corpus = [
        Shot::new(
            "pan-right",
            vec![MotionPath::new(vec![(0.1, 0.5), (0.4, 0.5), (0.7, 0.5)])],
        ),
        Shot::new(
            "tilt-up",
            vec![MotionPath::new(vec![(0.5, 0.2), (0.5, 0.5), (0.5, 0.8)])],
        ),
        Shot::new("static", Vec::new()),
    ];

    for shot in &corpus {
        extractor.extract(shot, &store)?;
        let vectors = store
            .get(&shot.id)
            .ok_or("extracted vectors missing from store")?;
        backend.insert(shot.id.clone(), vectors[1].clone());
    }
    tracing::info!(shots = corpus.len(), "indexed demo corpus");

    let query = Shot::new(
        "query",
        vec![MotionPath::new(vec![(0.2, 0.5), (0.5, 0.5), (0.8, 0.5)])],
    );
    let scores = search_similar(&extractor, &query, &config.query_config(), &backend)?;

    println!("ranked matches for {:?}:", query.id);
    for element in scores {
        println!("  {:<12} {:.4}", element.id, element.score);
    }

    Ok(())
}
