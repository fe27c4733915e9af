use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColoringMethod {
    /// Color nodes by number of links.
    #[default]
    Degree,
    /// Color nodes by detected community.
    Community,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CommunityAlgorithm {
    #[default]
    Louvain,
    LabelPropagation,
}

impl ColoringMethod {
    pub const ALL: [Self; 2] = [Self::Degree, Self::Community];

    pub fn label(self) -> &'static str {
        match self {
            Self::Degree => "Number of links",
            Self::Community => "Communities",
        }
    }
}

impl CommunityAlgorithm {
    pub const ALL: [Self; 2] = [Self::Louvain, Self::LabelPropagation];

    pub fn label(self) -> &'static str {
        match self {
            Self::Louvain => "Louvain",
            Self::LabelPropagation => "Label propagation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColoringConfig {
    pub method: ColoringMethod,
    /// Only used with [`ColoringMethod::Community`].
    pub algorithm: CommunityAlgorithm,
}
