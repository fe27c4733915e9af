//! Editing surfaces of the settings panel.
//!
//! Each section is built from a slice of borrowed domains and can only reach
//! what it was handed. Drawing works on a draft copy; `commit` writes back
//! through the domain setters, and only for values that actually changed.

mod behavior;
mod filter;
mod physics;
mod visual;
mod widgets;

use egui::Ui;
use log::debug;

pub use self::behavior::{BehaviorDraft, BehaviorSection};
pub use self::filter::{FilterDraft, FilterSection};
pub use self::physics::PhysicsSection;
pub use self::visual::{VisualDraft, VisualSection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Filter,
    Physics,
    Visual,
    Behavior,
}

impl SectionId {
    /// Display order.
    pub const ALL: [Self; 4] = [Self::Filter, Self::Physics, Self::Visual, Self::Behavior];

    pub fn title(self) -> &'static str {
        match self {
            Self::Filter => "Filter",
            Self::Physics => "Physics",
            Self::Visual => "Visual",
            Self::Behavior => "Behavior",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Filter => 0,
            Self::Physics => 1,
            Self::Visual => 2,
            Self::Behavior => 3,
        }
    }
}

pub trait Section {
    type Draft: Clone + PartialEq;

    const ID: SectionId;

    /// Copy of the current values of the slice.
    fn draft(&self) -> Self::Draft;

    fn draw(&self, draft: &mut Self::Draft, ui: &mut Ui);

    /// Writes changed parts of `draft` through the owning setters.
    fn commit(&mut self, draft: Self::Draft);

    fn show(&mut self, ui: &mut Ui) {
        let before = self.draft();
        let mut draft = before.clone();
        self.draw(&mut draft, ui);
        if draft != before {
            debug!("{} section edited", Self::ID.title());
            self.commit(draft);
        }
    }
}
