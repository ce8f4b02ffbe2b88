//! Infinite-valued self-reference dynamics (Grim et al., 1993).
//!
//! Sentences take truth values in [0, 1]; "X is as true as Y" becomes
//! `1 - |X - Y|`.

use morphogen_data::{
    AttractorKind, AttractorParams, AttractorPoint, AttractorResult, DualistMode,
    EscapeTimePoint,
};

const MINERVA_FACTOR: f64 = 0.5;

/// X: "X is as false as Y is true", Y: "Y is as true as X is".
pub fn dualist_step(x: f64, y: f64) -> (f64, f64) {
    let x_next = 1.0 - ((1.0 - y) - x).abs();
    let y_next = 1.0 - (x - y).abs();
    (x_next, y_next)
}

/// Dualist where Y already sees the updated X.
pub fn dualist_sequential_step(x: f64, y: f64) -> (f64, f64) {
    let x_next = 1.0 - ((1.0 - y) - x).abs();
    let y_next = 1.0 - (x_next - y).abs();
    (x_next, y_next)
}

/// Each sentence is `factor` as true as the difference between the other two,
/// updated in order x, y, z.
pub fn triplist_step(x: f64, y: f64, z: f64, factor: f64) -> (f64, f64, f64) {
    let x_next = 1.0 - (factor * (y - z).abs() - x).abs();
    let y_next = 1.0 - (factor * (x_next - z).abs() - y).abs();
    let z_next = 1.0 - (factor * (x_next - y_next).abs() - z).abs();
    (x_next, y_next, z_next)
}

/// Iterates the chosen map, dropping the first tenth of the orbit.
pub fn simulate_attractor(params: &AttractorParams) -> AttractorResult {
    let burn_in = params.iterations / 10;
    let mut points = Vec::with_capacity(params.iterations - burn_in);
    let (mut x, mut y, mut z) = (params.initial_x, params.initial_y, params.initial_z);

    for i in 0..params.iterations {
        match params.kind {
            AttractorKind::Dualist => {
                (x, y) = dualist_step(x, y);
                z = 0.0;
            }
            AttractorKind::DualistSequential => {
                (x, y) = dualist_sequential_step(x, y);
                z = 0.0;
            }
            AttractorKind::Minerva => (x, y, z) = triplist_step(x, y, z, MINERVA_FACTOR),
            AttractorKind::Triplist => (x, y, z) = triplist_step(x, y, z, params.factor),
        }
        if i >= burn_in {
            points.push(AttractorPoint { x, y, z });
        }
    }

    AttractorResult {
        points,
        is_3d: params.kind.is_3d(),
    }
}

/// Escape-time map of the dualist over a `resolution`² grid of the unit square.
///
/// Counts iterations until the orbit leaves the disc of radius
/// `escape_distance`, capped at `max_iterations`. Resolution is clamped to 2
/// so both edges of the square are sampled.
pub fn generate_escape_time(
    resolution: usize,
    max_iterations: usize,
    escape_distance: f64,
    mode: DualistMode,
) -> Vec<EscapeTimePoint> {
    let resolution = resolution.max(2);
    let span = (resolution - 1) as f64;
    let mut points = Vec::with_capacity(resolution * resolution);

    for i in 0..resolution {
        for j in 0..resolution {
            let (x0, y0) = (i as f64 / span, j as f64 / span);
            let (mut x, mut y) = (x0, y0);
            let mut iterations = 0;
            while iterations < max_iterations {
                if (x * x + y * y).sqrt() > escape_distance {
                    break;
                }
                (x, y) = match mode {
                    DualistMode::Simultaneous => dualist_step(x, y),
                    DualistMode::Sequential => dualist_sequential_step(x, y),
                };
                iterations += 1;
            }
            points.push(EscapeTimePoint {
                x: x0,
                y: y0,
                iterations,
            });
        }
    }

    points
}
