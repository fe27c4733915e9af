use egui::Ui;

use super::widgets::{info_icon, slider};
use super::{Section, SectionId};
use crate::domain::Domain;
use crate::settings::PhysicsConfig;

pub struct PhysicsSection<'a> {
    pub physics: &'a mut Domain<PhysicsConfig>,
}

impl Section for PhysicsSection<'_> {
    type Draft = PhysicsConfig;

    const ID: SectionId = SectionId::Physics;

    fn draft(&self) -> PhysicsConfig {
        self.physics.get().clone()
    }

    fn draw(&self, p: &mut PhysicsConfig, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.checkbox(&mut p.enabled, "Simulation");
            info_icon(ui, "Pause the layout to keep nodes where they are.");
        });
        if !p.enabled {
            return;
        }

        ui.checkbox(&mut p.gravity_on, "Gravity");
        if p.gravity_on {
            ui.indent("gravity", |ui| {
                slider(ui, "strength", &mut p.gravity, -100.0..=100.0);
                ui.checkbox(&mut p.gravity_local, "Also in local graph");
            });
        }

        slider(ui, "Repulsive force", &mut p.charge, -1500.0..=0.0);
        slider(ui, "Link force", &mut p.link_strength, 0.0..=2.0);
        slider(ui, "Link iterations", &mut p.link_iterations, 1..=6);

        ui.checkbox(&mut p.collision, "Collision");
        if p.collision {
            ui.indent("collision", |ui| {
                slider(ui, "strength", &mut p.collision_strength, 0.0..=50.0);
            });
        }

        ui.checkbox(&mut p.centering, "Centering");
        if p.centering {
            ui.indent("centering", |ui| {
                slider(ui, "strength", &mut p.centering_strength, 0.0..=2.0);
            });
        }

        ui.collapsing("Advanced", |ui| {
            slider(ui, "Stabilization rate", &mut p.alpha_decay, 0.0..=0.1);
            slider(ui, "Minimum energy", &mut p.alpha_min, 0.0..=1.0);
            slider(ui, "Target energy", &mut p.alpha_target, 0.0..=1.0);
            slider(ui, "Friction", &mut p.velocity_decay, 0.0..=1.0);
        });
    }

    fn commit(&mut self, draft: PhysicsConfig) {
        self.physics.set_if_changed(draft);
    }
}
