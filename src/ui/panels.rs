use eframe::egui::{self, SelectableLabel, TextEdit, Ui};

use crate::chart::ChartKind;
use crate::color::PaletteKind;
use crate::controller;
use crate::state::DatasetStore;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the toolbar: dataset picker, dataset creation, chart and palette.
pub fn top_bar(ui: &mut Ui, store: &mut DatasetStore, new_name: &mut String) {
    ui.horizontal_wrapped(|ui: &mut Ui| {
        dataset_selector(ui, store);
        ui.separator();

        ui.add(
            TextEdit::singleline(new_name)
                .hint_text("Data set name")
                .desired_width(150.0),
        );
        if ui.button("Create").clicked() && controller::create_dataset(store, new_name) {
            new_name.clear();
        }
        ui.separator();

        let current = store.view().chart;
        for kind in ChartKind::ALL {
            let enabled = controller::chart_enabled(store, kind);
            let toggle = SelectableLabel::new(current == kind, kind.label());
            if ui.add_enabled(enabled, toggle).clicked() {
                controller::select_chart(store, kind);
            }
        }
    });

    ui.separator();

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Color scheme:");
        let current = store.view().palette;
        for kind in PaletteKind::ALL {
            if ui.radio(current == kind, kind.label()).clicked() {
                controller::select_palette(store, kind);
            }
        }
    });
}

fn dataset_selector(ui: &mut Ui, store: &mut DatasetStore) {
    // Collect first so the store can be mutated after the combo closes.
    let names: Vec<String> = store.dataset_names().map(str::to_owned).collect();
    let current = store.view().dataset.clone();
    let mut picked = None;

    egui::ComboBox::from_id_salt("dataset")
        .width(150.0)
        .selected_text(&current)
        .show_ui(ui, |ui: &mut Ui| {
            for name in &names {
                if ui.selectable_label(*name == current, name).clicked() {
                    picked = Some(name.clone());
                }
            }
        });

    if let Some(name) = picked.filter(|n| *n != current) {
        controller::select_dataset(store, &name);
    }
}
