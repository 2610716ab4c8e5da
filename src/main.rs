use itertools::Itertools;
use kmeans_lloyd::logger::init_logger;
use kmeans_lloyd::{dataset, kmeans, Initialization, KMeansConfig, DEFAULT_MAX_ITERATIONS};

const K: usize = 5;
const DATA_START: i32 = 0;
const DATA_END: i32 = 50;

fn main() {
    init_logger().expect("Failed to initialize logger");

    let mut rng = rand::thread_rng();
    let points = dataset::staggered(DATA_START, DATA_END, &mut rng);
    log::info!("Generated {} points in [{}, {}]", points.nrows(), DATA_START, DATA_END);

    let config = KMeansConfig::new(K)
        .with_max_iterations(DEFAULT_MAX_ITERATIONS)
        .with_initialization(Initialization::Uniform {
            low: DATA_START as f64,
            high: DATA_END as f64,
        });

    let outcome = match kmeans(points.view(), &config, &mut rng) {
        Ok(outcome) => outcome,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    };

    log::info!(
        "{:?} after {} iterations, inertia {}",
        outcome.termination,
        outcome.iterations,
        outcome.inertia
    );
    for (idx, (centroid, members)) in outcome
        .centroids
        .outer_iter()
        .zip(outcome.clusters())
        .enumerate()
    {
        log::info!(
            "centroid {}: ({}) with {} points",
            idx,
            centroid.iter().map(|c| format!("{:.2}", c)).join(", "),
            members.len()
        );
    }
    if !outcome.empty_clusters.is_empty() {
        log::warn!(
            "{} empty cluster events, centroids {:?}",
            outcome.empty_clusters.len(),
            outcome.empty_clusters.iter().map(|e| e.centroid).unique().collect_vec()
        );
    }

    println!("labels: {:?}", outcome.labels);
}
