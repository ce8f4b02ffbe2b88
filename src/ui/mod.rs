pub mod report;

pub use report::{render_ensemble, render_report};
