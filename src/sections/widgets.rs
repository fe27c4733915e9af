use std::hash::Hash;
use std::ops::RangeInclusive;

use egui::{emath::Numeric, ComboBox, Sense, Slider, SliderClamping, Ui, Vec2};

use crate::color::ColorToken;
use crate::ui_consts::{COMBO_WIDTH, SWATCH_SIZE};

pub(crate) fn info_icon(ui: &mut Ui, tip: &str) {
    ui.add_space(4.0);
    ui.small_button("ℹ").on_hover_text(tip);
}

/// Values outside `range` are shown as they are and only clamped once edited.
pub(crate) fn slider<N: Numeric>(
    ui: &mut Ui,
    label: &str,
    value: &mut N,
    range: RangeInclusive<N>,
) {
    ui.add(
        Slider::new(value, range)
            .clamping(SliderClamping::Edits)
            .text(label),
    );
}

/// Combo box over a fixed list of enum options.
pub(crate) fn choice<T: Copy + PartialEq>(
    ui: &mut Ui,
    label: &str,
    value: &mut T,
    options: &[T],
    name: impl Fn(T) -> &'static str,
) {
    ui.horizontal(|ui| {
        ComboBox::from_id_salt(label)
            .width(COMBO_WIDTH)
            .selected_text(name(*value))
            .show_ui(ui, |ui| {
                for option in options {
                    ui.selectable_value(value, *option, name(*option));
                }
            });
        ui.label(label);
    });
}

pub(crate) fn swatch(ui: &mut Ui, color: &ColorToken) {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(SWATCH_SIZE), Sense::hover());
    if let Some(c) = color.to_color32() {
        ui.painter().rect_filled(rect, 2.0, c);
    }
    response.on_hover_text(color.as_str());
}

pub(crate) fn color_choice(
    ui: &mut Ui,
    id: impl Hash,
    label: &str,
    value: &mut ColorToken,
    options: &[ColorToken],
) {
    ui.horizontal(|ui| {
        swatch(ui, value);
        ComboBox::from_id_salt(id)
            .width(COMBO_WIDTH)
            .selected_text(value.as_str())
            .show_ui(ui, |ui| {
                for option in options {
                    ui.horizontal(|ui| {
                        swatch(ui, option);
                        ui.selectable_value(value, option.clone(), option.as_str());
                    });
                }
            });
        ui.label(label);
    });
}

/// Like [`color_choice`] with a "Default" entry mapped to `None`.
pub(crate) fn optional_color_choice(
    ui: &mut Ui,
    id: impl Hash,
    label: &str,
    value: &mut Option<ColorToken>,
    options: &[ColorToken],
) {
    ui.horizontal(|ui| {
        if let Some(c) = value.as_ref() {
            swatch(ui, c);
        }
        let text = value.as_ref().map_or("Default", ColorToken::as_str).to_owned();
        ComboBox::from_id_salt(id)
            .width(COMBO_WIDTH)
            .selected_text(text)
            .show_ui(ui, |ui| {
                ui.selectable_value(value, None, "Default");
                for option in options {
                    ui.selectable_value(value, Some(option.clone()), option.as_str());
                }
            });
        ui.label(label);
    });
}
