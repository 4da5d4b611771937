//! Translates user actions into store mutations.
//!
//! Refused actions are logged and otherwise ignored; the UI never shows an
//! error for them. This is also where charts that need non-negative data are
//! switched off when the current dataset has negative values.

use crate::chart::ChartKind;
use crate::color::PaletteKind;
use crate::state::DatasetStore;

/// Whether `chart` can be picked for the current dataset.
pub fn chart_enabled(store: &DatasetStore, chart: ChartKind) -> bool {
    !(chart.requires_non_negative() && store.has_negative_values())
}

/// Fall back to the line chart if the active chart is no longer allowed.
pub fn enforce_chart_policy(store: &mut DatasetStore) {
    let chart = store.view().chart;
    if !chart_enabled(store, chart) {
        log::info!("{chart:?} unavailable for negative data, switching to line chart");
        store.select_chart(ChartKind::Line);
    }
}

pub fn select_dataset(store: &mut DatasetStore, name: &str) {
    match store.select_dataset(name) {
        Ok(()) => {
            log::info!("selected dataset '{name}'");
            enforce_chart_policy(store);
        }
        Err(e) => log::warn!("{e}"),
    }
}

/// Returns `true` when the dataset was created so the caller can clear its input.
pub fn create_dataset(store: &mut DatasetStore, name: &str) -> bool {
    match store.create_dataset(name) {
        Ok(()) => {
            log::info!("created dataset '{}'", store.view().dataset);
            true
        }
        Err(e) => {
            log::warn!("not creating dataset: {e}");
            false
        }
    }
}

pub fn select_chart(store: &mut DatasetStore, chart: ChartKind) {
    if !chart_enabled(store, chart) {
        log::debug!("{chart:?} is disabled for the current dataset");
        return;
    }
    if store.view().chart != chart {
        log::info!("chart: {chart:?}");
        store.select_chart(chart);
    }
}

pub fn select_palette(store: &mut DatasetStore, palette: PaletteKind) {
    if store.view().palette != palette {
        log::info!("palette: {palette:?}");
        store.select_palette(palette);
    }
}

pub fn add_entry(store: &mut DatasetStore) {
    store.append_entry();
}

pub fn delete_entry(store: &mut DatasetStore, index: usize) {
    match store.remove_entry(index) {
        Ok(()) => enforce_chart_policy(store),
        Err(e) => log::debug!("delete refused: {e}"),
    }
}

/// Apply a text edit. Text that is not a finite number leaves the value as it was.
pub fn edit_entry(store: &mut DatasetStore, index: usize, text: &str) {
    // `f64::from_str` also accepts "NaN" and "inf", which are not values.
    let Some(value) = text.trim().parse::<f64>().ok().filter(|v| v.is_finite()) else {
        log::debug!("ignoring non-numeric entry #{index}: {text:?}");
        return;
    };
    match store.set_entry(index, value) {
        Ok(()) => enforce_chart_policy(store),
        Err(e) => log::debug!("edit refused: {e}"),
    }
}
