use serde::{Deserialize, Serialize};

/// What the view does when the opened node changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FollowMode {
    #[default]
    Zoom,
    Local,
    Never,
}

impl FollowMode {
    pub const ALL: [Self; 3] = [Self::Zoom, Self::Local, Self::Never];

    pub fn label(self) -> &'static str {
        match self {
            Self::Zoom => "Zoom to node",
            Self::Local => "Open local graph",
            Self::Never => "Stay put",
        }
    }
}

/// Opening a local graph while already in one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LocalSame {
    #[default]
    Add,
    Replace,
}

impl LocalSame {
    pub const ALL: [Self; 2] = [Self::Add, Self::Replace];

    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "Add to local graph",
            Self::Replace => "Replace local graph",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    pub preview: bool,
    pub follow: FollowMode,
    pub local_same: LocalSame,
    pub zoom_padding: f32,
    /// Zoom animation duration in ms.
    pub zoom_speed: f32,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            preview: true,
            follow: FollowMode::Zoom,
            local_same: LocalSame::Add,
            zoom_padding: 200.0,
            zoom_speed: 2000.0,
        }
    }
}
