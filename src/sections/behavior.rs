use egui::Ui;

use super::widgets::{choice, slider};
use super::{Section, SectionId};
use crate::domain::Domain;
use crate::settings::{BehaviorConfig, FollowMode, LocalSame, MouseConfig, Trigger};
use crate::ui_consts::SECTION_SPACING;

pub struct BehaviorSection<'a> {
    pub behavior: &'a mut Domain<BehaviorConfig>,
    pub mouse: &'a mut Domain<MouseConfig>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BehaviorDraft {
    pub behavior: BehaviorConfig,
    pub mouse: MouseConfig,
}

impl Section for BehaviorSection<'_> {
    type Draft = BehaviorDraft;

    const ID: SectionId = SectionId::Behavior;

    fn draft(&self) -> BehaviorDraft {
        BehaviorDraft {
            behavior: self.behavior.get().clone(),
            mouse: self.mouse.get().clone(),
        }
    }

    fn draw(&self, draft: &mut BehaviorDraft, ui: &mut Ui) {
        let m = &mut draft.mouse;
        ui.label("Mouse");
        choice(ui, "Highlight", &mut m.highlight, &Trigger::HIGHLIGHT, Trigger::label);
        choice(ui, "Open local graph", &mut m.local, &Trigger::CLICKS, Trigger::label);
        choice(ui, "Open preview", &mut m.preview, &Trigger::CLICKS, Trigger::label);
        choice(ui, "Context menu", &mut m.context, &Trigger::CLICKS, Trigger::label);
        ui.checkbox(&mut m.background_exits_local, "Clicking background exits local graph");

        ui.add_space(SECTION_SPACING);
        let b = &mut draft.behavior;
        ui.checkbox(&mut b.preview, "Preview notes");
        choice(ui, "When opening a note", &mut b.follow, &FollowMode::ALL, FollowMode::label);
        choice(
            ui,
            "Local graph of another note",
            &mut b.local_same,
            &LocalSame::ALL,
            LocalSame::label,
        );
        slider(ui, "Zoom padding", &mut b.zoom_padding, 0.0..=400.0);
        slider(ui, "Zoom duration (ms)", &mut b.zoom_speed, 0.0..=5000.0);
    }

    fn commit(&mut self, draft: BehaviorDraft) {
        self.behavior.set_if_changed(draft.behavior);
        self.mouse.set_if_changed(draft.mouse);
    }
}
