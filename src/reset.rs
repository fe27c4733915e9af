//! Restore-all-to-defaults as a single action.
//!
//! Domains are reset through a static registry of `(target, reset fn)`
//! pairs; values owned elsewhere (the theme) plug in as [`ExternalReset`]
//! targets. Tag colors, panel visibility and the 2D/3D mode are not
//! settings and are never registered.

use std::fmt;

use log::info;

use crate::color::ColorToken;
use crate::settings::Tweaks;
use crate::theme::{SharedTheme, ThemeStore, DEFAULT_HIGHLIGHT_COLOR};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResetTarget {
    Visuals,
    Filter,
    Mouse,
    Physics,
    Behavior,
    Coloring,
    HighlightColor,
    Local,
}

impl fmt::Display for ResetTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

type DomainReset = fn(&mut Tweaks);

const DOMAIN_REGISTRY: [(ResetTarget, DomainReset); 7] = [
    (ResetTarget::Visuals, |t: &mut Tweaks| t.visuals.reset()),
    (ResetTarget::Filter, |t: &mut Tweaks| t.filter.reset()),
    (ResetTarget::Mouse, |t: &mut Tweaks| t.mouse.reset()),
    (ResetTarget::Physics, |t: &mut Tweaks| t.physics.reset()),
    (ResetTarget::Behavior, |t: &mut Tweaks| t.behavior.reset()),
    (ResetTarget::Coloring, |t: &mut Tweaks| t.coloring.reset()),
    (ResetTarget::Local, |t: &mut Tweaks| t.local.reset()),
];

/// A resettable value that does not live in [`Tweaks`].
pub trait ExternalReset {
    fn reset(&self);
}

impl ExternalReset for SharedTheme {
    fn reset(&self) {
        self.set_highlight_color(ColorToken::from(DEFAULT_HIGHLIGHT_COLOR));
    }
}

#[derive(Default)]
pub struct ResetCoordinator {
    externals: Vec<(ResetTarget, Box<dyn ExternalReset>)>,
}

impl ResetCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Coordinator with the theme's highlight color registered.
    pub fn with_theme(theme: &SharedTheme) -> Self {
        let mut coordinator = Self::new();
        coordinator.register_external(ResetTarget::HighlightColor, Box::new(theme.clone()));
        coordinator
    }

    pub fn register_external(&mut self, target: ResetTarget, value: Box<dyn ExternalReset>) {
        self.externals.push((target, value));
    }

    pub fn targets(&self) -> impl Iterator<Item = ResetTarget> + '_ {
        DOMAIN_REGISTRY
            .iter()
            .map(|(target, _)| *target)
            .chain(self.externals.iter().map(|(target, _)| *target))
    }

    /// Writes every registered default before returning.
    pub fn reset_all(&self, tweaks: &mut Tweaks) {
        for (_, reset) in &DOMAIN_REGISTRY {
            reset(tweaks);
        }
        for (_, value) in &self.externals {
            value.reset();
        }
        info!(
            "settings reset to defaults ({} targets)",
            DOMAIN_REGISTRY.len() + self.externals.len()
        );
    }
}

impl fmt::Debug for ResetCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.targets()).finish()
    }
}
