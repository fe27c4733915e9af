use serde::{Deserialize, Serialize};

/// Pointer gesture that fires an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trigger {
    Never,
    Hover,
    Click,
    DoubleClick,
    RightClick,
}

impl Trigger {
    /// Options offered for click-driven actions.
    pub const CLICKS: [Self; 4] = [Self::Click, Self::DoubleClick, Self::RightClick, Self::Never];
    pub const HIGHLIGHT: [Self; 2] = [Self::Hover, Self::Never];

    pub fn label(self) -> &'static str {
        match self {
            Self::Never => "Never",
            Self::Hover => "On hover",
            Self::Click => "Click",
            Self::DoubleClick => "Double click",
            Self::RightClick => "Right click",
        }
    }
}

// Mouse bindings for node actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MouseConfig {
    pub highlight: Trigger,
    /// Open the local graph of a node.
    pub local: Trigger,
    pub context: Trigger,
    pub preview: Trigger,
    pub background_exits_local: bool,
}

impl Default for MouseConfig {
    fn default() -> Self {
        Self {
            highlight: Trigger::Hover,
            local: Trigger::DoubleClick,
            context: Trigger::RightClick,
            preview: Trigger::Click,
            background_exits_local: false,
        }
    }
}
