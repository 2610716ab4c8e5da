use crate::engine::DEFAULT_MAX_ITERATIONS;
use crate::error::{InvalidConfiguration, Result};
use crate::initialization::Initialization;

/// Parameters of a [`kmeans`](crate::algorithm::kmeans) call.
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansConfig {
    /// Number of clusters.
    pub k: usize,
    /// Step cap for each initialization.
    pub max_iterations: usize,
    /// Independent seeded runs; the one with the lowest inertia is kept.
    pub initializations: usize,
    pub initialization: Initialization,
}

impl KMeansConfig {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            initializations: 1,
            initialization: Initialization::default(),
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_initializations(mut self, initializations: usize) -> Self {
        self.initializations = initializations;
        self
    }

    pub fn with_initialization(mut self, initialization: Initialization) -> Self {
        self.initialization = initialization;
        self
    }

    /// Checks what can be checked without the data.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(InvalidConfiguration::ZeroIterationCap.into());
        }
        if self.initializations == 0 {
            return Err(InvalidConfiguration::ZeroInitializations.into());
        }
        Ok(())
    }
}
