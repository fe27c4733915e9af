use serde::{Deserialize, Serialize};

use crate::color::ColorToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LabelMode {
    Never,
    #[default]
    OnHighlight,
    Always,
}

impl LabelMode {
    pub const ALL: [Self; 3] = [Self::Never, Self::OnHighlight, Self::Always];

    pub fn label(self) -> &'static str {
        match self {
            Self::Never => "Never",
            Self::OnHighlight => "On highlight",
            Self::Always => "Always",
        }
    }
}

/// Easing curve of the highlight animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EasingAlgorithm {
    Linear,
    QuadraticInOut,
    CubicOut,
    ExponentialOut,
    #[default]
    BackOut,
    ElasticOut,
}

impl EasingAlgorithm {
    pub const ALL: [Self; 6] = [
        Self::Linear,
        Self::QuadraticInOut,
        Self::CubicOut,
        Self::ExponentialOut,
        Self::BackOut,
        Self::ElasticOut,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::QuadraticInOut => "Quadratic in/out",
            Self::CubicOut => "Cubic out",
            Self::ExponentialOut => "Exponential out",
            Self::BackOut => "Back out",
            Self::ElasticOut => "Elastic out",
        }
    }
}

/// Dash pattern for a class of links (citations, references).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashStyle {
    pub dashes: bool,
    pub dash_length: f32,
    pub gap_length: f32,
    pub link_color: ColorToken,
    pub node_color: ColorToken,
}

impl Default for DashStyle {
    fn default() -> Self {
        Self {
            dashes: true,
            dash_length: 35.0,
            gap_length: 15.0,
            link_color: ColorToken::from("gray.600"),
            node_color: ColorToken::from("black"),
        }
    }
}

pub fn default_node_color_scheme() -> Vec<ColorToken> {
    [
        "red.500",
        "gray.600",
        "yellow.500",
        "green.500",
        "cyan.500",
        "blue.500",
        "pink.500",
        "purple.500",
        "orange.500",
    ]
    .into_iter()
    .map(ColorToken::from)
    .collect()
}

// Everything about how nodes, links and labels are drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualsConfig {
    // Link particles
    pub particles: bool,
    pub particles_number: u32,
    pub particles_width: f32,

    // Arrows
    pub arrows: bool,
    pub arrows_length: f32,
    pub arrows_pos: f32,

    // Sizes
    pub link_opacity: f32,
    pub link_width: f32,
    pub node_rel: f32,
    pub node_opacity: f32,
    pub node_resolution: u32,
    pub node_size_links: f32,
    pub node_zoom_size: f32,

    // Labels
    pub labels: LabelMode,
    pub label_scale: f32,
    pub label_font_size: f32,
    pub label_length: u32,
    pub label_background_opacity: f32,

    // Highlight
    pub highlight: bool,
    pub highlight_node_size: f32,
    pub highlight_link_size: f32,
    pub highlight_fade: f32,
    pub highlight_anim: bool,
    pub animation_speed: u32,
    pub algorithm: EasingAlgorithm,

    // Colors
    pub node_color_scheme: Vec<ColorToken>,
    pub link_color_scheme: ColorToken,
    pub link_highlight: ColorToken,
    /// `None` uses the highlight color.
    pub node_highlight: Option<ColorToken>,
    pub background_color: ColorToken,
    pub label_text_color: ColorToken,
    pub label_background_color: Option<ColorToken>,

    pub cite: DashStyle,
    #[serde(rename = "ref")]
    pub reference: DashStyle,
}

impl Default for VisualsConfig {
    fn default() -> Self {
        Self {
            particles: false,
            particles_number: 0,
            particles_width: 4.0,
            arrows: false,
            arrows_length: 1.0,
            arrows_pos: 0.5,
            link_opacity: 0.8,
            link_width: 1.0,
            node_rel: 4.0,
            node_opacity: 1.0,
            node_resolution: 12,
            node_size_links: 0.5,
            node_zoom_size: 1.2,
            labels: LabelMode::OnHighlight,
            label_scale: 1.5,
            label_font_size: 13.0,
            label_length: 40,
            label_background_opacity: 0.7,
            highlight: true,
            highlight_node_size: 2.0,
            highlight_link_size: 2.0,
            highlight_fade: 0.8,
            highlight_anim: true,
            animation_speed: 420,
            algorithm: EasingAlgorithm::BackOut,
            node_color_scheme: default_node_color_scheme(),
            link_color_scheme: ColorToken::from("gray.500"),
            link_highlight: ColorToken::from("purple.500"),
            node_highlight: None,
            background_color: ColorToken::from("white"),
            label_text_color: ColorToken::from("black"),
            label_background_color: None,
            cite: DashStyle::default(),
            reference: DashStyle::default(),
        }
    }
}
