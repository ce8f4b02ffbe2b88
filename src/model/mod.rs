pub use morphogen_core::{ConfigError, Network, Simulation};
pub mod analysis {
    pub use morphogen_core::analysis::*;
}
pub mod attractor {
    pub use morphogen_core::attractor::*;
}
pub mod config {
    pub use morphogen_core::config::*;
}
pub mod describe {
    pub use morphogen_core::describe::*;
}
pub mod engine {
    pub use morphogen_core::engine::*;
}
pub mod ensemble {
    pub use morphogen_core::ensemble::*;
}
pub mod history {
    pub use morphogen_core::history::*;
}
pub mod metrics {
    pub use morphogen_core::metrics::*;
}
pub mod network {
    pub use morphogen_core::network::*;
}
pub mod presets {
    pub use morphogen_core::presets::*;
}
pub mod rng {
    pub use morphogen_core::rng::*;
}
pub mod step {
    pub use morphogen_core::step::*;
}

pub mod state {
    pub use morphogen_data::*;
}
