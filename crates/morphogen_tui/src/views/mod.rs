pub mod stats;
pub mod status;
pub mod timeline;
