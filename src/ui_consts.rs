// Side panel sizing
pub const PANEL_WIDTH: f32 = 320.0;

// Share of the screen height the section list may take before scrolling
pub const SCROLL_MAX_HEIGHT_FRACTION: f32 = 0.85;

// Common spacing between grouped controls
pub const SECTION_SPACING: f32 = 6.0;

pub const COMBO_WIDTH: f32 = 140.0;
pub const SWATCH_SIZE: f32 = 12.0;

// Text sizes
pub const HEADING_TEXT_SIZE: f32 = 16.0;
