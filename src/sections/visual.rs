use egui::Ui;

use super::widgets::{choice, color_choice, info_icon, optional_color_choice, slider};
use super::{Section, SectionId};
use crate::color::{palette_tokens, ColorToken};
use crate::domain::Domain;
use crate::settings::{
    ColoringConfig, ColoringMethod, CommunityAlgorithm, DashStyle, EasingAlgorithm, LabelMode,
    VisualsConfig,
};
use crate::theme::{SharedTheme, ThemeStore};

pub struct VisualSection<'a> {
    pub visuals: &'a mut Domain<VisualsConfig>,
    pub coloring: &'a mut Domain<ColoringConfig>,
    pub theme: &'a SharedTheme,
    /// Read only; label settings do not apply to the 3D view.
    pub three_dim: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisualDraft {
    pub visuals: VisualsConfig,
    pub coloring: ColoringConfig,
    pub highlight_color: ColorToken,
}

fn dash_style(ui: &mut Ui, id: &str, style: &mut DashStyle, palette: &[ColorToken]) {
    ui.push_id(id, |ui| {
        ui.checkbox(&mut style.dashes, "Dashed");
        if style.dashes {
            slider(ui, "dash length", &mut style.dash_length, 1.0..=100.0);
            slider(ui, "gap length", &mut style.gap_length, 1.0..=100.0);
        }
        color_choice(ui, "link", "Link color", &mut style.link_color, palette);
        color_choice(ui, "node", "Node color", &mut style.node_color, palette);
    });
}

impl VisualSection<'_> {
    fn draw_colors(draft: &mut VisualDraft, ui: &mut Ui, palette: &[ColorToken]) {
        color_choice(ui, "highlight", "Highlight color", &mut draft.highlight_color, palette);

        let c = &mut draft.coloring;
        choice(ui, "Color nodes by", &mut c.method, &ColoringMethod::ALL, ColoringMethod::label);
        if c.method == ColoringMethod::Community {
            choice(
                ui,
                "Community detection",
                &mut c.algorithm,
                &CommunityAlgorithm::ALL,
                CommunityAlgorithm::label,
            );
        }

        let v = &mut draft.visuals;
        ui.collapsing("Node scheme", |ui| {
            for (i, color) in v.node_color_scheme.iter_mut().enumerate() {
                color_choice(ui, ("scheme", i), &(i + 1).to_string(), color, palette);
            }
        });
        color_choice(ui, "links", "Links", &mut v.link_color_scheme, palette);
        color_choice(ui, "link_hl", "Link highlight", &mut v.link_highlight, palette);
        optional_color_choice(ui, "node_hl", "Node highlight", &mut v.node_highlight, palette);
        color_choice(ui, "bg", "Background", &mut v.background_color, palette);
    }

    fn draw_labels(v: &mut VisualsConfig, ui: &mut Ui, palette: &[ColorToken]) {
        choice(ui, "Show labels", &mut v.labels, &LabelMode::ALL, LabelMode::label);
        if v.labels == LabelMode::Never {
            return;
        }
        slider(ui, "Font size", &mut v.label_font_size, 5.0..=20.0);
        slider(ui, "Scale", &mut v.label_scale, 0.5..=5.0);
        slider(ui, "Max length", &mut v.label_length, 10..=100);
        color_choice(ui, "label_text", "Text", &mut v.label_text_color, palette);
        optional_color_choice(
            ui,
            "label_bg",
            "Background",
            &mut v.label_background_color,
            palette,
        );
        if v.label_background_color.is_some() {
            slider(ui, "Background opacity", &mut v.label_background_opacity, 0.0..=1.0);
        }
    }
}

impl Section for VisualSection<'_> {
    type Draft = VisualDraft;

    const ID: SectionId = SectionId::Visual;

    fn draft(&self) -> VisualDraft {
        VisualDraft {
            visuals: self.visuals.get().clone(),
            coloring: self.coloring.get().clone(),
            highlight_color: self.theme.highlight_color(),
        }
    }

    fn draw(&self, draft: &mut VisualDraft, ui: &mut Ui) {
        let palette: Vec<ColorToken> = palette_tokens().collect();

        ui.collapsing("Colors", |ui| Self::draw_colors(draft, ui, &palette));

        let v = &mut draft.visuals;
        ui.collapsing("Nodes & links", |ui| {
            slider(ui, "Node size", &mut v.node_rel, 1.0..=10.0);
            slider(ui, "Size by links", &mut v.node_size_links, 0.0..=2.0);
            slider(ui, "Zoom scaling", &mut v.node_zoom_size, 1.0..=3.0);
            slider(ui, "Node opacity", &mut v.node_opacity, 0.0..=1.0);
            if self.three_dim {
                slider(ui, "Node resolution", &mut v.node_resolution, 5..=32);
            }
            slider(ui, "Link width", &mut v.link_width, 0.1..=5.0);
            slider(ui, "Link opacity", &mut v.link_opacity, 0.0..=1.0);

            ui.checkbox(&mut v.arrows, "Arrows");
            if v.arrows {
                ui.indent("arrows", |ui| {
                    slider(ui, "length", &mut v.arrows_length, 1.0..=10.0);
                    slider(ui, "position", &mut v.arrows_pos, 0.0..=1.0);
                });
            }
            ui.checkbox(&mut v.particles, "Particles");
            if v.particles {
                ui.indent("particles", |ui| {
                    slider(ui, "count", &mut v.particles_number, 0..=5);
                    slider(ui, "width", &mut v.particles_width, 1.0..=20.0);
                });
            }
        });

        if self.three_dim {
            ui.horizontal(|ui| {
                ui.weak("Labels");
                info_icon(ui, "Labels are only drawn in the 2D view.");
            });
        } else {
            ui.collapsing("Labels", |ui| Self::draw_labels(&mut *v, ui, &palette));
        }

        ui.collapsing("Highlight", |ui| {
            ui.checkbox(&mut v.highlight, "Highlight neighbors");
            if !v.highlight {
                return;
            }
            slider(ui, "Node size", &mut v.highlight_node_size, 1.0..=5.0);
            slider(ui, "Link size", &mut v.highlight_link_size, 1.0..=5.0);
            slider(ui, "Fade others", &mut v.highlight_fade, 0.0..=1.0);
            ui.checkbox(&mut v.highlight_anim, "Animate");
            if v.highlight_anim {
                slider(ui, "Duration (ms)", &mut v.animation_speed, 50..=1000);
                choice(
                    ui,
                    "Easing",
                    &mut v.algorithm,
                    &EasingAlgorithm::ALL,
                    EasingAlgorithm::label,
                );
            }
        });

        ui.collapsing("Citations", |ui| dash_style(ui, "cite", &mut v.cite, &palette));
        ui.collapsing("References", |ui| dash_style(ui, "ref", &mut v.reference, &palette));
    }

    fn commit(&mut self, draft: VisualDraft) {
        self.visuals.set_if_changed(draft.visuals);
        self.coloring.set_if_changed(draft.coloring);
        if draft.highlight_color != self.theme.highlight_color() {
            self.theme.set_highlight_color(draft.highlight_color);
        }
    }
}
