use clap::Parser;
use knnscan::{GroupedCollector, Id, Knn, Metric, TopKCollector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "KnnScan CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum MetricConfig {
    L2,
    InnerProduct,
}

impl From<MetricConfig> for Metric {
    fn from(value: MetricConfig) -> Self {
        match value {
            MetricConfig::L2 => Metric::L2,
            MetricConfig::InnerProduct => Metric::InnerProduct,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    dim: usize,
    num_vectors: usize,
    num_queries: usize,
    k: usize,
    metric: MetricConfig,
    seed: u64,
    /// Collapse consecutive vectors into groups of this size and keep at
    /// most one result per group.
    group_size: Option<usize>,
    output_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dim: 16,
            num_vectors: 10_000,
            num_queries: 3,
            k: 5,
            metric: MetricConfig::L2,
            seed: 42,
            group_size: None,
            output_path: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct QueryRecord {
    query: usize,
    ids: Vec<Id>,
    distances: Vec<f32>,
}

#[derive(Debug, Serialize)]
struct Output {
    results: Vec<QueryRecord>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("knnscan=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.num_vectors == 0 || config.num_queries == 0 {
        return Err("num_vectors and num_queries must be at least 1".into());
    }
    if let Some(0) = config.group_size {
        return Err("group_size must be at least 1".into());
    }

    let knn = Knn::new(config.dim, config.k, config.metric.into())?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let base: Vec<f32> = (0..config.num_vectors * config.dim)
        .map(|_| rng.random::<f32>() - 0.5)
        .collect();
    let queries: Vec<f32> = (0..config.num_queries * config.dim)
        .map(|_| rng.random::<f32>() - 0.5)
        .collect();

    let group_of: Option<Vec<Id>> = config.group_size.map(|size| {
        (0..config.num_vectors).map(|i| (i / size) as Id).collect()
    });

    let mut results = Vec::with_capacity(config.num_queries);
    for (q, query) in queries.chunks_exact(config.dim).enumerate() {
        let mut distances = vec![0.0f32; config.k];
        let mut ids = vec![-1 as Id; config.k];
        let nres = match &group_of {
            Some(table) => {
                let mut collector = GroupedCollector::new(table);
                knn.search_with(query, &base, &mut distances, &mut ids, &mut collector)?
            }
            None => {
                let mut collector = TopKCollector;
                knn.search_with(query, &base, &mut distances, &mut ids, &mut collector)?
            }
        };
        distances.truncate(nres);
        ids.truncate(nres);
        results.push(QueryRecord {
            query: q,
            ids,
            distances,
        });
    }

    let output = Output { results };
    let rendered = serde_json::to_string_pretty(&output)?;
    match config.output_path {
        Some(path) => fs::write(path, rendered)?,
        None => println!("{rendered}"),
    }

    Ok(())
}
