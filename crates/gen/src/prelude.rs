pub use crate::config::FeasibilityBound;
pub use crate::config::GeneratorConfig;
pub use crate::config::DEFAULT_SEED;

pub use crate::generator::RandomGraphGenerator;

pub use crate::output::Labels;

pub use crate::presets::Input;

pub use crate::simple::Growth;
pub use crate::simple::SimpleGraph;

pub use crate::vertex::VertexId;

pub use crate::Error;
