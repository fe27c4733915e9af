use egui::{Align, CollapsingHeader, Layout, RichText, ScrollArea, Ui};
use log::debug;

use crate::color::{color_list, ColorToken};
use crate::reset::ResetCoordinator;
use crate::sections::{
    BehaviorSection, FilterSection, PhysicsSection, Section, SectionId, VisualSection,
};
use crate::settings::Tweaks;
use crate::store::{FlagStore, PersistentFlag, StorageBackend};
use crate::theme::{SharedTheme, ThemeStore};
use crate::ui_consts::{HEADING_TEXT_SIZE, SCROLL_MAX_HEIGHT_FRACTION};

/// Storage key of the panel visibility flag.
pub const SHOW_TWEAKS_KEY: &str = "showTweaks";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionView {
    pub id: SectionId,
    pub title: &'static str,
    pub expanded: bool,
}

/// What the panel exposes in its current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView {
    /// Only the button that opens the panel.
    Closed,
    Open { sections: Vec<SectionView> },
}

/// Everything the panel reads or writes that it does not own.
pub struct TweaksContext<'a> {
    pub tweaks: &'a mut Tweaks,
    pub theme: &'a SharedTheme,
    /// Currently known tag names.
    pub tags: &'a [String],
    pub three_dim: &'a mut bool,
}

#[derive(Default)]
struct HeaderActions {
    toggle_view: bool,
    reset: bool,
    close: bool,
}

/// The settings panel.
///
/// Owns whether it is open (persisted under [`SHOW_TWEAKS_KEY`]) and which
/// sections are expanded; every domain is borrowed per frame through
/// [`TweaksContext`] and handed out in per-section slices.
#[derive(Debug)]
pub struct TweaksPanel {
    show_tweaks: PersistentFlag,
    expanded: [bool; SectionId::ALL.len()],
    reset: ResetCoordinator,
    color_list: Vec<ColorToken>,
}

impl TweaksPanel {
    pub fn new<B: StorageBackend>(store: &FlagStore<B>, theme: &SharedTheme) -> Self {
        Self {
            show_tweaks: PersistentFlag::load(store, SHOW_TWEAKS_KEY, false),
            expanded: [false; SectionId::ALL.len()],
            reset: ResetCoordinator::with_theme(theme),
            color_list: color_list(),
        }
    }

    pub fn is_open(&self) -> bool {
        *self.show_tweaks.get()
    }

    /// Flips visibility and persists it. Domains are not touched.
    pub fn toggle_visibility<B: StorageBackend>(&mut self, store: &mut FlagStore<B>) -> bool {
        self.show_tweaks.toggle(store)
    }

    fn set_open<B: StorageBackend>(&mut self, store: &mut FlagStore<B>, open: bool) {
        if self.is_open() != open {
            self.toggle_visibility(store);
        }
    }

    pub fn is_expanded(&self, id: SectionId) -> bool {
        self.expanded[id.index()]
    }

    /// Expanding one section leaves the others as they are.
    pub fn set_expanded(&mut self, id: SectionId, expanded: bool) {
        debug!("section {} expanded={expanded}", id.title());
        self.expanded[id.index()] = expanded;
    }

    pub fn toggle_section(&mut self, id: SectionId) {
        self.set_expanded(id, !self.is_expanded(id));
    }

    pub fn render(&self) -> PanelView {
        if !self.is_open() {
            return PanelView::Closed;
        }
        let sections = SectionId::ALL
            .iter()
            .map(|&id| SectionView {
                id,
                title: id.title(),
                expanded: self.is_expanded(id),
            })
            .collect();
        PanelView::Open { sections }
    }

    pub fn reset_coordinator(&self) -> &ResetCoordinator {
        &self.reset
    }

    /// Restores every setting and the highlight color to its default.
    pub fn reset_all(&self, tweaks: &mut Tweaks) {
        self.reset.reset_all(tweaks);
    }

    pub fn show<B: StorageBackend>(
        &mut self,
        ui: &mut Ui,
        store: &mut FlagStore<B>,
        cx: TweaksContext<'_>,
    ) {
        if !self.is_open() {
            if ui.button("⚙").on_hover_text("Settings").clicked() {
                self.set_open(store, true);
            }
            return;
        }

        let actions = Self::header(ui, *cx.three_dim);
        if actions.toggle_view {
            *cx.three_dim = !*cx.three_dim;
        }
        if actions.reset {
            self.reset_all(cx.tweaks);
        }
        if actions.close {
            self.set_open(store, false);
            return;
        }

        ui.separator();
        let toggled = self.sections(ui, cx);
        for id in toggled {
            self.toggle_section(id);
        }
    }

    fn header(ui: &mut Ui, three_dim: bool) -> HeaderActions {
        let mut actions = HeaderActions::default();
        ui.horizontal(|ui| {
            let (current, other) = if three_dim { ("3D", "2D") } else { ("2D", "3D") };
            actions.toggle_view = ui
                .button(current)
                .on_hover_text(format!("Switch to {other} view"))
                .clicked();
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                actions.close = ui
                    .small_button("✖")
                    .on_hover_text("Close settings")
                    .clicked();
                actions.reset = ui
                    .small_button("⟲")
                    .on_hover_text("Reset settings to defaults")
                    .clicked();
            });
        });
        actions
    }

    /// Draws the sections and returns those whose header was clicked.
    fn sections(&self, ui: &mut Ui, cx: TweaksContext<'_>) -> Vec<SectionId> {
        let TweaksContext {
            tweaks,
            theme,
            tags,
            three_dim,
        } = cx;
        let Tweaks {
            physics,
            filter,
            visuals,
            mouse,
            behavior,
            tag_colors,
            coloring,
            local,
        } = tweaks;
        let three_dim = *three_dim;
        let scroll_height = ui.ctx().screen_rect().height() * SCROLL_MAX_HEIGHT_FRACTION;

        let mut toggled = Vec::new();
        ScrollArea::vertical()
            .max_height(scroll_height)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for id in SectionId::ALL {
                    let heading_color = theme
                        .highlight_color()
                        .to_color32()
                        .unwrap_or(ui.visuals().text_color());
                    let title = RichText::new(id.title())
                        .size(HEADING_TEXT_SIZE)
                        .color(heading_color);
                    let response = CollapsingHeader::new(title)
                        .id_salt(id)
                        .open(Some(self.is_expanded(id)))
                        .show(ui, |ui| match id {
                            SectionId::Filter => FilterSection {
                                filter: &mut *filter,
                                tag_colors: &mut *tag_colors,
                                local: &mut *local,
                                tags,
                                color_list: &self.color_list,
                            }
                            .show(ui),
                            SectionId::Physics => PhysicsSection {
                                physics: &mut *physics,
                            }
                            .show(ui),
                            SectionId::Visual => VisualSection {
                                visuals: &mut *visuals,
                                coloring: &mut *coloring,
                                theme,
                                three_dim,
                            }
                            .show(ui),
                            SectionId::Behavior => BehaviorSection {
                                behavior: &mut *behavior,
                                mouse: &mut *mouse,
                            }
                            .show(ui),
                        });
                    if response.header_response.clicked() {
                        toggled.push(id);
                    }
                }
            });
        toggled
    }
}
