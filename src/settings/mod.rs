//! Value types of the configuration domains and the set that holds them.

mod behavior;
mod coloring;
mod filter;
mod local;
mod mouse;
mod physics;
mod tag_colors;
mod visuals;

use serde::{Deserialize, Serialize};

use crate::domain::Domain;

pub use self::behavior::{BehaviorConfig, FollowMode, LocalSame};
pub use self::coloring::{ColoringConfig, ColoringMethod, CommunityAlgorithm};
pub use self::filter::{FilterConfig, ParentLinks};
pub use self::local::{LocalConfig, MAX_NEIGHBORS};
pub use self::mouse::{MouseConfig, Trigger};
pub use self::physics::PhysicsConfig;
pub use self::tag_colors::TagColors;
pub use self::visuals::{
    default_node_color_scheme, DashStyle, EasingAlgorithm, LabelMode, VisualsConfig,
};

/// Every configuration domain the settings panel edits.
///
/// Lives as long as the host application; fields are only ever written
/// through the [`Domain`] setters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tweaks {
    pub physics: Domain<PhysicsConfig>,
    pub filter: Domain<FilterConfig>,
    pub visuals: Domain<VisualsConfig>,
    pub mouse: Domain<MouseConfig>,
    pub behavior: Domain<BehaviorConfig>,
    pub tag_colors: Domain<TagColors>,
    pub coloring: Domain<ColoringConfig>,
    pub local: Domain<LocalConfig>,
}

impl Tweaks {
    /// Write counters of every domain, in declaration order.
    pub fn revisions(&self) -> [u64; 8] {
        [
            self.physics.revision(),
            self.filter.revision(),
            self.visuals.revision(),
            self.mouse.revision(),
            self.behavior.revision(),
            self.tag_colors.revision(),
            self.coloring.revision(),
            self.local.revision(),
        ]
    }
}
