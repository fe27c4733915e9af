use egui::Ui;

use super::widgets::{choice, color_choice, info_icon, slider};
use super::{Section, SectionId};
use crate::color::ColorToken;
use crate::domain::Domain;
use crate::settings::{FilterConfig, LocalConfig, ParentLinks, TagColors, MAX_NEIGHBORS};
use crate::ui_consts::SECTION_SPACING;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagListing {
    Shown,
    Hidden,
    Only,
}

impl TagListing {
    const ALL: [Self; 3] = [Self::Shown, Self::Hidden, Self::Only];

    fn of(filter: &FilterConfig, tag: &str) -> Self {
        if filter.tags_blacklist.iter().any(|t| t == tag) {
            Self::Hidden
        } else if filter.tags_whitelist.iter().any(|t| t == tag) {
            Self::Only
        } else {
            Self::Shown
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Shown => "Show",
            Self::Hidden => "Hide",
            Self::Only => "Only these",
        }
    }

    fn apply(self, filter: &mut FilterConfig, tag: &str) {
        match self {
            Self::Shown => filter.unlist(tag),
            Self::Hidden => filter.blacklist(tag),
            Self::Only => filter.whitelist(tag),
        }
    }
}

pub struct FilterSection<'a> {
    pub filter: &'a mut Domain<FilterConfig>,
    pub tag_colors: &'a mut Domain<TagColors>,
    pub local: &'a mut Domain<LocalConfig>,
    pub tags: &'a [String],
    pub color_list: &'a [ColorToken],
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterDraft {
    pub filter: FilterConfig,
    pub tag_colors: TagColors,
    pub local: LocalConfig,
}

impl FilterSection<'_> {
    fn draw_tags(&self, draft: &mut FilterDraft, ui: &mut Ui) {
        if self.tags.is_empty() {
            ui.weak("No tags");
            return;
        }
        for tag in self.tags {
            ui.push_id(tag, |ui| {
                let shown = draft.tag_colors.color_for(tag, self.tags, self.color_list);
                let mut picked = shown.clone().unwrap_or_else(|| ColorToken::from("gray.500"));
                color_choice(ui, "color", tag, &mut picked, self.color_list);
                if shown.as_ref() != Some(&picked) {
                    draft.tag_colors.set(tag.clone(), picked);
                }

                let current = TagListing::of(&draft.filter, tag);
                let mut listing = current;
                choice(ui, "", &mut listing, &TagListing::ALL, TagListing::label);
                if listing != current {
                    listing.apply(&mut draft.filter, tag);
                }
            });
        }
    }
}

impl Section for FilterSection<'_> {
    type Draft = FilterDraft;

    const ID: SectionId = SectionId::Filter;

    fn draft(&self) -> FilterDraft {
        FilterDraft {
            filter: self.filter.get().clone(),
            tag_colors: self.tag_colors.get().clone(),
            local: self.local.get().clone(),
        }
    }

    fn draw(&self, draft: &mut FilterDraft, ui: &mut Ui) {
        let f = &mut draft.filter;
        ui.checkbox(&mut f.orphans, "Orphans");
        ui.checkbox(&mut f.dailies, "Dailies");
        ui.horizontal(|ui| {
            ui.checkbox(&mut f.fileless_cites, "Citations without notes");
            info_icon(ui, "Show citation nodes that have no note of their own.");
        });
        ui.checkbox(&mut f.bad, "Links to missing notes");
        choice(ui, "Parent links", &mut f.parent, &ParentLinks::ALL, ParentLinks::label);

        ui.add_space(SECTION_SPACING);
        slider(ui, "Local graph depth", &mut draft.local.neighbors, 1..=MAX_NEIGHBORS);

        ui.add_space(SECTION_SPACING);
        ui.collapsing("Tags", |ui| self.draw_tags(draft, ui));
    }

    fn commit(&mut self, draft: FilterDraft) {
        self.filter.set_if_changed(draft.filter);
        self.local.set_if_changed(draft.local);

        let mut tag_colors = draft.tag_colors;
        if &tag_colors != self.tag_colors.get() {
            tag_colors.fill_missing(self.tags, self.color_list);
            self.tag_colors.set(tag_colors);
        }
    }
}
