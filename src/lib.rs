//! Configuration state model behind the settings panel of a graph viewer.
//!
//! Settings are split into independent [`Domain`]s collected in [`Tweaks`].
//! [`TweaksPanel`] edits them through per-section slices, persists its own
//! visibility through a [`FlagStore`], and resets everything, including the
//! shared highlight color of the [`SharedTheme`], in one action.

mod color;
mod domain;
mod panel;
mod reset;
pub mod sections;
pub mod settings;
mod store;
mod theme;
mod ui_consts;

pub use self::color::{color_list, palette_tokens, ColorToken, COLOR_LIST};
pub use self::domain::Domain;
pub use self::panel::{PanelView, SectionView, TweaksContext, TweaksPanel, SHOW_TWEAKS_KEY};
pub use self::reset::{ExternalReset, ResetCoordinator, ResetTarget};
pub use self::settings::Tweaks;
pub use self::store::{
    EguiMemoryBackend, FlagStore, JsonFileBackend, MemoryBackend, Persisted, PersistentFlag,
    StorageBackend, StoreError,
};
pub use self::theme::{SharedTheme, Theme, ThemeStore, DEFAULT_HIGHLIGHT_COLOR};
pub use self::ui_consts::PANEL_WIDTH;
