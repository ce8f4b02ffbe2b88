use serde::{Deserialize, Serialize};

/// Continuous-valued (infinite-valued logic) self-reference systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttractorKind {
    /// X: "X is as false as Y is true", Y: "Y is as true as X is", updated together.
    #[default]
    Dualist,
    /// Same sentences, Y reads the already-updated X.
    DualistSequential,
    /// Triplist with factor 0.5.
    Minerva,
    /// Each sentence is `factor` as true as the difference between the other two.
    Triplist,
}

impl AttractorKind {
    /// Minerva and Triplist iterate three coordinates.
    pub fn is_3d(&self) -> bool {
        matches!(self, AttractorKind::Minerva | AttractorKind::Triplist)
    }

    pub fn name(&self) -> &'static str {
        match self {
            AttractorKind::Dualist => "Chaotic Dualist",
            AttractorKind::DualistSequential => "Dualist Sequential",
            AttractorKind::Minerva => "Minerva (Triplist)",
            AttractorKind::Triplist => "Triplist Variation",
        }
    }
}

/// Update order of the two-sentence dualist map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DualistMode {
    #[default]
    Simultaneous,
    Sequential,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttractorParams {
    pub kind: AttractorKind,
    pub iterations: usize,
    pub initial_x: f64,
    pub initial_y: f64,
    pub initial_z: f64,
    /// Triplist factor; Minerva ignores it and uses 0.5.
    pub factor: f64,
}

impl Default for AttractorParams {
    fn default() -> Self {
        Self {
            kind: AttractorKind::Dualist,
            iterations: 5000,
            initial_x: 0.6,
            initial_y: 0.7,
            initial_z: 0.6,
            factor: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttractorPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AttractorResult {
    pub points: Vec<AttractorPoint>,
    pub is_3d: bool,
}

/// Grid point of the unit square with the number of iterations it survived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EscapeTimePoint {
    pub x: f64,
    pub y: f64,
    pub iterations: usize,
}
