use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};
use eframe::egui;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::AppConfig;
use crate::controller;
use crate::data::model::DatasetCollection;
use crate::state::{DatasetStore, ViewState};
use crate::ui::canvas::ChartCanvas;
use crate::ui::form::{EntryAction, EntryForm};
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ChartpadApp {
    store: DatasetStore,
    form: Rc<RefCell<EntryForm>>,
    canvas: Rc<RefCell<ChartCanvas>>,
    /// Text of the "new dataset" field.
    new_name: String,
}

impl ChartpadApp {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let datasets = match config.random_seed {
            Some(seed) => DatasetCollection::seeded(&mut StdRng::seed_from_u64(seed)),
            None => DatasetCollection::seeded(&mut rand::thread_rng()),
        };

        let dataset = if datasets.contains(&config.dataset) {
            config.dataset.clone()
        } else {
            let first = datasets.first_name().unwrap_or_default().to_string();
            log::warn!("no dataset named '{}', starting with '{first}'", config.dataset);
            first
        };

        let view = ViewState {
            dataset,
            chart: config.chart,
            palette: config.palette,
        };
        let mut store = DatasetStore::new(datasets, view).context("building dataset store")?;

        let form = Rc::new(RefCell::new(EntryForm::default()));
        let canvas = Rc::new(RefCell::new(ChartCanvas::default()));
        store.register(Box::new(Rc::clone(&form)));
        store.register(Box::new(Rc::clone(&canvas)));
        controller::enforce_chart_policy(&mut store);

        Ok(Self {
            store,
            form,
            canvas,
            new_name: String::new(),
        })
    }

    fn apply(&mut self, actions: Vec<EntryAction>) {
        for action in actions {
            match action {
                EntryAction::Edit(index, text) => controller::edit_entry(&mut self.store, index, &text),
                EntryAction::Delete(index) => controller::delete_entry(&mut self.store, index),
                EntryAction::Add => controller::add_entry(&mut self.store),
            }
        }
    }
}

impl eframe::App for ChartpadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: toolbar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.store, &mut self.new_name);
        });

        // ---- Left side panel: entries ----
        let actions = egui::SidePanel::left("entry_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| self.form.borrow_mut().show(ui))
            .inner;
        self.apply(actions);

        // ---- Central panel: chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            self.canvas.borrow_mut().show(ui);
        });
    }
}
