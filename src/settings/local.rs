use serde::{Deserialize, Serialize};

pub const MAX_NEIGHBORS: u32 = 5;

// Local graph display options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalConfig {
    /// Link depth shown around the focused node, `1..=MAX_NEIGHBORS`.
    pub neighbors: u32,
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self { neighbors: 1 }
    }
}
