use ndarray::ArrayView2;
use rand::Rng;

use crate::config::KMeansConfig;
use crate::engine::{ClusterEngine, RunOutcome};
use crate::error::Result;

/// Runs `config.initializations` independently seeded clusterings of `data`
/// and returns the one with the lowest inertia. Earlier runs win ties.
pub fn kmeans<R: Rng>(
    data: ArrayView2<f64>,
    config: &KMeansConfig,
    rng: &mut R,
) -> Result<RunOutcome> {
    config.validate()?;

    let mut best = run_initialization(data, config, 0, rng)?;
    let mut best_initialization_index = 0;
    let mut inertia_per_initialization = vec![best.inertia];

    for initialization_index in 1..config.initializations {
        let outcome = run_initialization(data, config, initialization_index, rng)?;
        inertia_per_initialization.push(outcome.inertia);
        if outcome.inertia < best.inertia {
            best = outcome;
            best_initialization_index = initialization_index;
        }
    }

    log::debug!("Inertia per initialization: {:?}", inertia_per_initialization);
    log::info!(
        "Best initialization is index #{} with {} inertia",
        best_initialization_index,
        best.inertia
    );
    Ok(best)
}

fn run_initialization<R: Rng>(
    data: ArrayView2<f64>,
    config: &KMeansConfig,
    initialization_index: usize,
    rng: &mut R,
) -> Result<RunOutcome> {
    log::debug!("Starting KMeans initialization #{}", initialization_index);
    let mut engine = ClusterEngine::seeded(data.to_owned(), config.k, &config.initialization, rng)?;
    let outcome = engine.run(config.max_iterations)?;
    log::info!(
        "Finished KMeans for initialization #{} - Inertia: {}",
        initialization_index,
        outcome.inertia
    );
    Ok(outcome)
}
