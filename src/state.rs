use thiserror::Error;

use crate::chart::ChartKind;
use crate::color::PaletteKind;
use crate::data::model::{Dataset, DatasetCollection, DatasetError};
use crate::notify::{NotificationHub, Observer, Snapshot};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no dataset named '{0}'")]
    UnknownDataset(String),
    #[error("a dataset named '{0}' already exists")]
    DuplicateName(String),
    #[error("dataset name is empty")]
    EmptyName,
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

// ---------------------------------------------------------------------------
// View state
// ---------------------------------------------------------------------------

/// What is currently selected.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub dataset: String,
    pub chart: ChartKind,
    pub palette: PaletteKind,
}

// ---------------------------------------------------------------------------
// Dataset store
// ---------------------------------------------------------------------------

/// All datasets plus the selection state, independent of rendering.
///
/// Every successful mutation notifies the registered observers. A refused
/// mutation changes nothing and notifies no one.
pub struct DatasetStore {
    datasets: DatasetCollection,
    view: ViewState,
    hub: NotificationHub,
}

fn snapshot<'a>(datasets: &'a DatasetCollection, view: &'a ViewState) -> Snapshot<'a> {
    let values = datasets
        .get(&view.dataset)
        .map(Dataset::values)
        .unwrap_or_default();
    Snapshot {
        dataset: &view.dataset,
        values,
        chart: view.chart,
        palette: view.palette,
    }
}

impl DatasetStore {
    /// Build a store over `datasets`. Fails if the selected dataset is missing.
    pub fn new(datasets: DatasetCollection, view: ViewState) -> Result<Self, StoreError> {
        if !datasets.contains(&view.dataset) {
            return Err(StoreError::UnknownDataset(view.dataset));
        }
        Ok(Self {
            datasets,
            view,
            hub: NotificationHub::default(),
        })
    }

    /// Register an observer and bring it up to date with a full refresh.
    pub fn register(&mut self, mut observer: Box<dyn Observer>) {
        observer.on_full_refresh(&snapshot(&self.datasets, &self.view));
        self.hub.register(observer);
    }

    // -- queries --

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn dataset_names(&self) -> impl Iterator<Item = &str> {
        self.datasets.names()
    }

    #[cfg(test)]
    pub fn current_values(&self) -> &[f64] {
        snapshot(&self.datasets, &self.view).values
    }

    /// Whether the current dataset holds any value below zero.
    pub fn has_negative_values(&self) -> bool {
        self.datasets
            .get(&self.view.dataset)
            .is_some_and(Dataset::has_negative)
    }

    // -- selection --

    pub fn select_dataset(&mut self, name: &str) -> Result<(), StoreError> {
        if !self.datasets.contains(name) {
            return Err(StoreError::UnknownDataset(name.to_string()));
        }
        self.view.dataset = name.to_string();
        self.notify_full();
        Ok(())
    }

    pub fn select_chart(&mut self, chart: ChartKind) {
        self.view.chart = chart;
        self.notify_chart();
    }

    pub fn select_palette(&mut self, palette: PaletteKind) {
        self.view.palette = palette;
        self.notify_chart();
    }

    // -- mutation --

    /// Add a dataset holding a single zero and make it current.
    pub fn create_dataset(&mut self, name: &str) -> Result<(), StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        if !self.datasets.insert(name.to_string(), Dataset::zero()) {
            return Err(StoreError::DuplicateName(name.to_string()));
        }
        self.view.dataset = name.to_string();
        self.notify_full();
        Ok(())
    }

    pub fn append_entry(&mut self) {
        if let Some(ds) = self.datasets.get_mut(&self.view.dataset) {
            ds.push(0.0);
        }
        self.notify_full();
    }

    pub fn remove_entry(&mut self, index: usize) -> Result<(), StoreError> {
        self.current_mut()?.remove(index)?;
        self.notify_full();
        Ok(())
    }

    /// Overwrite one value. Entry count is unchanged so only the chart redraws.
    pub fn set_entry(&mut self, index: usize, value: f64) -> Result<(), StoreError> {
        self.current_mut()?.set(index, value)?;
        self.notify_chart();
        Ok(())
    }

    fn current_mut(&mut self) -> Result<&mut Dataset, StoreError> {
        self.datasets
            .get_mut(&self.view.dataset)
            .ok_or_else(|| StoreError::UnknownDataset(self.view.dataset.clone()))
    }

    fn notify_full(&mut self) {
        self.hub.notify_full(&snapshot(&self.datasets, &self.view));
    }

    fn notify_chart(&mut self) {
        self.hub.notify_chart(&snapshot(&self.datasets, &self.view));
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    /// Counts notifications and remembers the last values seen.
    #[derive(Default)]
    pub(crate) struct Recorder {
        pub full: usize,
        pub chart: usize,
        pub last_values: Vec<f64>,
    }

    impl Observer for Recorder {
        fn on_full_refresh(&mut self, snapshot: &Snapshot<'_>) {
            self.full += 1;
            self.last_values = snapshot.values.to_vec();
        }

        fn on_chart_refresh(&mut self, snapshot: &Snapshot<'_>) {
            self.chart += 1;
            self.last_values = snapshot.values.to_vec();
        }
    }

    pub(crate) fn seeded_store() -> (DatasetStore, Rc<RefCell<Recorder>>) {
        let datasets = DatasetCollection::seeded(&mut StdRng::seed_from_u64(1));
        let view = ViewState {
            dataset: "quadratic".into(),
            chart: ChartKind::Line,
            palette: PaletteKind::Rainbow,
        };
        let mut store = DatasetStore::new(datasets, view).unwrap();
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        store.register(Box::new(Rc::clone(&recorder)));
        (store, recorder)
    }

    fn counts(rec: &Rc<RefCell<Recorder>>) -> (usize, usize) {
        let r = rec.borrow();
        (r.full, r.chart)
    }

    #[test]
    fn registration_triggers_full_refresh() {
        let (_, rec) = seeded_store();
        assert_eq!(counts(&rec), (1, 0));
        assert_eq!(rec.borrow().last_values, vec![0.1, 1.0, 4.0, 9.0, 16.0]);
    }

    #[test]
    fn missing_initial_dataset_is_rejected() {
        let view = ViewState {
            dataset: "nope".into(),
            chart: ChartKind::Line,
            palette: PaletteKind::Rainbow,
        };
        assert!(matches!(
            DatasetStore::new(DatasetCollection::default(), view),
            Err(StoreError::UnknownDataset(_))
        ));
    }

    #[test]
    fn selection_notifications() {
        let (mut store, rec) = seeded_store();
        store.select_dataset("alternating").unwrap();
        assert_eq!(counts(&rec), (2, 0));
        store.select_chart(ChartKind::Bar);
        store.select_palette(PaletteKind::Gray);
        assert_eq!(counts(&rec), (2, 2));
        assert_eq!(store.view().chart, ChartKind::Bar);
        assert_eq!(store.view().palette, PaletteKind::Gray);
    }

    #[test]
    fn unknown_dataset_changes_nothing() {
        let (mut store, rec) = seeded_store();
        assert!(store.select_dataset("missing").is_err());
        assert_eq!(store.view().dataset, "quadratic");
        assert_eq!(counts(&rec), (1, 0));
    }

    #[test]
    fn create_append_remove_sequence() {
        let (mut store, rec) = seeded_store();
        store.create_dataset("test").unwrap();
        assert_eq!(store.view().dataset, "test");
        assert_eq!(store.current_values(), &[0.0]);
        assert_eq!(store.dataset_names().last(), Some("test"));
        assert_eq!(store.dataset_names().count(), 6);

        store.append_entry();
        assert_eq!(store.current_values().len(), 2);

        store.remove_entry(0).unwrap();
        assert_eq!(store.current_values(), &[0.0]);

        assert_eq!(
            store.remove_entry(0),
            Err(StoreError::Dataset(DatasetError::LastEntry))
        );
        assert_eq!(store.current_values(), &[0.0]);
        // create, append, first remove
        assert_eq!(counts(&rec), (4, 0));
    }

    #[test]
    fn append_grows_seeded_dataset_by_one_zero() {
        let (mut store, rec) = seeded_store();
        store.append_entry();
        assert_eq!(store.current_values(), &[0.1, 1.0, 4.0, 9.0, 16.0, 0.0]);
        assert_eq!(rec.borrow().last_values.len(), 6);
        assert_eq!(counts(&rec), (2, 0));
    }

    #[test]
    fn create_refuses_empty_and_duplicate_names() {
        let (mut store, rec) = seeded_store();
        assert_eq!(store.create_dataset("   "), Err(StoreError::EmptyName));
        assert_eq!(
            store.create_dataset("quadratic"),
            Err(StoreError::DuplicateName("quadratic".into()))
        );
        assert_eq!(store.dataset_names().count(), 5);
        assert_eq!(counts(&rec), (1, 0));
    }

    #[test]
    fn set_entry_keeps_length_and_redraws_chart_only() {
        let (mut store, rec) = seeded_store();
        store.set_entry(2, -3.5).unwrap();
        assert_eq!(store.current_values(), &[0.1, 1.0, -3.5, 9.0, 16.0]);
        assert_eq!(counts(&rec), (1, 1));
        assert!(store.has_negative_values());

        assert!(store.set_entry(9, 1.0).is_err());
        assert_eq!(store.current_values().len(), 5);
        assert_eq!(counts(&rec), (1, 1));
    }

    #[test]
    fn negative_values_query() {
        let (mut store, _) = seeded_store();
        assert!(!store.has_negative_values());
        store.select_dataset("negative quadratic").unwrap();
        assert!(store.has_negative_values());
    }
}
