use serde::{Deserialize, Serialize};

// Force simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub enabled: bool,

    /// Many-body force; negative values repel.
    pub charge: f32,

    pub collision: bool,
    pub collision_strength: f32,

    pub centering: bool,
    pub centering_strength: f32,

    pub link_strength: f32,
    pub link_iterations: u32,

    pub alpha_decay: f32,
    pub alpha_target: f32,
    pub alpha_min: f32,
    pub velocity_decay: f32,

    pub gravity: f32,
    pub gravity_on: bool,
    /// Apply gravity in the local graph as well.
    pub gravity_local: bool,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            charge: -700.0,
            collision: true,
            collision_strength: 20.0,
            centering: true,
            centering_strength: 0.05,
            link_strength: 0.3,
            link_iterations: 1,
            alpha_decay: 0.05,
            alpha_target: 0.0,
            alpha_min: 0.0,
            velocity_decay: 0.25,
            gravity: 0.3,
            gravity_on: true,
            gravity_local: false,
        }
    }
}
