use eframe::{App, CreationContext};
use egui::{Align2, CentralPanel, Frame, Id, RichText, ScrollArea};
use graph_tweaks::{
    ColorToken, EguiMemoryBackend, FlagStore, SharedTheme, Theme, ThemeStore, Tweaks,
    TweaksContext, TweaksPanel, PANEL_WIDTH,
};
use log::{info, warn};

pub const TWEAKS_KEY: &str = "tweaks";
pub const HIGHLIGHT_KEY: &str = "highlightColor";

const UI_MARGIN: f32 = 10.0;

const SAMPLE_TAGS: [&str; 6] = ["project", "reading", "journal", "idea", "person", "archive"];

pub struct TweaksDemoApp {
    pub tweaks: Tweaks,
    pub theme: SharedTheme,
    pub panel: TweaksPanel,
    pub store: FlagStore<EguiMemoryBackend>,
    pub tags: Vec<String>,
    pub three_dim: bool,
    pub new_tag: String,
}

impl TweaksDemoApp {
    pub fn new(cc: &CreationContext<'_>) -> Self {
        let store = FlagStore::new(EguiMemoryBackend::new(cc.egui_ctx.clone()));

        let tweaks: Tweaks = cc
            .storage
            .and_then(|s| eframe::get_value(s, TWEAKS_KEY))
            .unwrap_or_default();
        let theme = SharedTheme::new(
            cc.storage
                .and_then(|s| eframe::get_value::<ColorToken>(s, HIGHLIGHT_KEY))
                .map(|highlight_color| Theme { highlight_color })
                .unwrap_or_default(),
        );
        if cc.storage.is_none() {
            warn!("no app storage, settings will not outlive this session");
        }

        let panel = TweaksPanel::new(&store, &theme);
        info!("tweaks panel open: {}", panel.is_open());

        Self {
            tweaks,
            theme,
            panel,
            store,
            tags: SAMPLE_TAGS.iter().map(|t| (*t).to_string()).collect(),
            three_dim: false,
            new_tag: String::new(),
        }
    }

    fn ui_preview(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(if self.three_dim { "3D view" } else { "2D view" });
            let highlight = self.theme.highlight_color();
            let mut text = RichText::new(format!("highlight {highlight}"));
            if let Some(c) = highlight.to_color32() {
                text = text.color(c);
            }
            ui.label(text);
        });

        ui.horizontal(|ui| {
            ui.text_edit_singleline(&mut self.new_tag);
            let tag = self.new_tag.trim().to_owned();
            if ui.button("Add tag").clicked() && !tag.is_empty() && !self.tags.contains(&tag) {
                self.tags.push(tag);
                self.new_tag.clear();
            }
        });

        ui.separator();
        let json = serde_json::to_string_pretty(&self.tweaks).unwrap_or_else(|e| e.to_string());
        ScrollArea::vertical().show(ui, |ui| {
            ui.monospace(json);
        });
    }
}

impl App for TweaksDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        CentralPanel::default().show(ctx, |ui| {
            ui.add_space(UI_MARGIN * 4.0);
            self.ui_preview(ui);
        });

        egui::Area::new(Id::new("tweaks_area"))
            .anchor(Align2::LEFT_TOP, [UI_MARGIN, UI_MARGIN])
            .show(ctx, |ui| {
                Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_max_width(PANEL_WIDTH);
                    self.panel.show(
                        ui,
                        &mut self.store,
                        TweaksContext {
                            tweaks: &mut self.tweaks,
                            theme: &self.theme,
                            tags: &self.tags,
                            three_dim: &mut self.three_dim,
                        },
                    );
                });
            });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, TWEAKS_KEY, &self.tweaks);
        eframe::set_value(storage, HIGHLIGHT_KEY, &self.theme.highlight_color());
    }
}
