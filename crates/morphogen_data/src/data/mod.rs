//! Core data structures for the logical-morphogenesis simulation.

pub mod attractor;
pub mod params;
pub mod preset;
pub mod result;
pub mod sentence;
