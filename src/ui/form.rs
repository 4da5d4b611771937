use eframe::egui::{self, Button, RichText, ScrollArea, TextEdit, Ui};
use egui_extras::{Column, TableBuilder};

use crate::notify::{Observer, Snapshot};

// ---------------------------------------------------------------------------
// Entry form (left panel)
// ---------------------------------------------------------------------------

/// Something the user did in the entry form, applied after the frame's UI pass.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryAction {
    Edit(usize, String),
    Delete(usize),
    Add,
}

/// Text buffers for the current dataset's entries.
///
/// Rebuilt on a full refresh only, so text being typed survives chart redraws.
#[derive(Debug, Default)]
pub struct EntryForm {
    dataset: String,
    texts: Vec<String>,
}

impl Observer for EntryForm {
    fn on_full_refresh(&mut self, snapshot: &Snapshot<'_>) {
        self.dataset = snapshot.dataset.to_string();
        self.texts = snapshot.values.iter().map(|v| format!("{v:?}")).collect();
    }

    fn on_chart_refresh(&mut self, _snapshot: &Snapshot<'_>) {}
}

impl EntryForm {
    /// Render the form and collect the actions taken this frame.
    pub fn show(&mut self, ui: &mut Ui) -> Vec<EntryAction> {
        let mut actions = Vec::new();
        let can_delete = self.texts.len() > 1;

        ui.label(RichText::new(format!("Dataset name: {}", self.dataset)).strong());
        ui.separator();

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui: &mut Ui| {
                let texts = &mut self.texts;
                TableBuilder::new(ui)
                    .vscroll(false)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .column(Column::exact(60.0))
                    .column(Column::remainder())
                    .column(Column::exact(24.0))
                    .body(|body| {
                        body.rows(26.0, texts.len(), |mut row| {
                            let i = row.index();
                            row.col(|ui: &mut Ui| {
                                ui.label(format!("Entry #{i}"));
                            });
                            row.col(|ui: &mut Ui| {
                                let edit = TextEdit::singleline(&mut texts[i])
                                    .desired_width(f32::INFINITY);
                                if ui.add(edit).changed() {
                                    actions.push(EntryAction::Edit(i, texts[i].clone()));
                                }
                            });
                            row.col(|ui: &mut Ui| {
                                if ui.add_enabled(can_delete, Button::new("X")).clicked() {
                                    actions.push(EntryAction::Delete(i));
                                }
                            });
                        });
                    });

                ui.add_space(6.0);
                let add = Button::new("Add Entry").min_size(egui::vec2(ui.available_width(), 0.0));
                if ui.add(add).clicked() {
                    actions.push(EntryAction::Add);
                }
            });

        actions
    }
}
