use std::cell::RefCell;
use std::rc::Rc;

use crate::chart::ChartKind;
use crate::color::PaletteKind;

// ---------------------------------------------------------------------------
// What observers get to see
// ---------------------------------------------------------------------------

/// Read-only view of the store at notification time.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub dataset: &'a str,
    pub values: &'a [f64],
    pub chart: ChartKind,
    pub palette: PaletteKind,
}

/// Receives refresh notifications from the dataset store.
pub trait Observer {
    /// Dataset selection or entry count changed: rebuild form and chart.
    fn on_full_refresh(&mut self, snapshot: &Snapshot<'_>);

    /// Only the chart needs redrawing.
    fn on_chart_refresh(&mut self, snapshot: &Snapshot<'_>);
}

/// Lets the UI keep a handle on an observer it also registered.
impl<T: Observer> Observer for Rc<RefCell<T>> {
    fn on_full_refresh(&mut self, snapshot: &Snapshot<'_>) {
        self.borrow_mut().on_full_refresh(snapshot);
    }

    fn on_chart_refresh(&mut self, snapshot: &Snapshot<'_>) {
        self.borrow_mut().on_chart_refresh(snapshot);
    }
}

// ---------------------------------------------------------------------------
// Hub
// ---------------------------------------------------------------------------

/// Fixed, ordered set of observers. There is no unsubscribe.
#[derive(Default)]
pub struct NotificationHub {
    observers: Vec<Box<dyn Observer>>,
}

impl NotificationHub {
    pub fn register(&mut self, observer: Box<dyn Observer>) {
        self.observers.push(observer);
    }

    pub fn notify_full(&mut self, snapshot: &Snapshot<'_>) {
        log::debug!("full refresh for '{}' ({} observers)", snapshot.dataset, self.observers.len());
        for observer in &mut self.observers {
            observer.on_full_refresh(snapshot);
        }
    }

    pub fn notify_chart(&mut self, snapshot: &Snapshot<'_>) {
        log::debug!("chart refresh: {:?} / {:?}", snapshot.chart, snapshot.palette);
        for observer in &mut self.observers {
            observer.on_chart_refresh(snapshot);
        }
    }
}
