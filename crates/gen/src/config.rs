/// Seed used when no seed is given explicitly.
pub const DEFAULT_SEED: u64 = 1234;

/// Number of draws granted per requested item before a request is abandoned.
pub const ATTEMPTS_PER_ITEM: u64 = 64;

/// Lower bound for the number of draws granted to any request.
pub const MIN_ATTEMPTS: u64 = 1024;

/// Decides how large a sampling domain is considered to be when checking
/// whether a request can be satisfied.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum FeasibilityBound {
    /// The domain is exactly what sampling can produce: `high - low + 1`
    /// vertices and `n * (n - 1)` edges over `n` distinct vertices.
    #[default]
    Exact,
    /// Compatibility mode. The vertex domain is `high - low` and the edge
    /// domain is `n * n`, self-loop slots included.
    ///
    /// Both bounds can admit requests that sampling cannot satisfy. Those
    /// requests end with [`crate::Error::AttemptsExhausted`].
    Reference,
}

impl FeasibilityBound {
    /// Number of distinct vertices that may be requested from a range whose
    /// bounds are `distance` apart.
    pub fn vertex_domain(self, distance: u128) -> u128 {
        match self {
            FeasibilityBound::Exact => distance.saturating_add(1),
            FeasibilityBound::Reference => distance,
        }
    }

    /// Number of distinct directed edges that may be requested over
    /// `vertex_count` distinct vertices.
    pub fn edge_domain(self, vertex_count: usize) -> u128 {
        let n = vertex_count as u128;
        match self {
            FeasibilityBound::Exact => n * n.saturating_sub(1),
            FeasibilityBound::Reference => n * n,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "clap", derive(clap::Args))]
pub struct GeneratorConfig {
    /// Seed for the random source of the generator.
    #[cfg_attr(feature = "clap", arg(long, default_value_t = DEFAULT_SEED))]
    pub seed: u64,

    /// How the size of a sampling domain is computed for feasibility checks.
    #[cfg_attr(
        feature = "clap",
        arg(long, value_enum, default_value_t = FeasibilityBound::Exact)
    )]
    pub bounds: FeasibilityBound,

    /// Maximum number of draws for a single request. Derived from the
    /// requested count if absent.
    #[cfg_attr(feature = "clap", arg(long))]
    pub max_attempts: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            bounds: FeasibilityBound::default(),
            max_attempts: None,
        }
    }
}

impl GeneratorConfig {
    pub fn new(seed: u64, bounds: FeasibilityBound, max_attempts: Option<u64>) -> Self {
        Self {
            seed,
            bounds,
            max_attempts,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Number of draws a request for `requested` items may use.
    pub fn attempt_budget(&self, requested: usize) -> u64 {
        self.max_attempts.unwrap_or_else(|| {
            (requested as u64)
                .saturating_mul(ATTEMPTS_PER_ITEM)
                .max(MIN_ATTEMPTS)
        })
    }
}
