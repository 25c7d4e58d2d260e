//! Shared application state.
//!
//! Item handlers take no arguments, so everything they touch is captured
//! through an `Rc<AppState>`. The menu is single-threaded; `Cell` is enough.

use chrono::{DateTime, Local};
use std::cell::{Cell, RefCell};
use std::fmt::Display;
use std::io::{self, Write};
use std::rc::Rc;

/// Where handlers print their results.
pub type SharedOutput = Rc<RefCell<dyn Write>>;

/// State shared by every handler in the demo tree.
pub struct AppState {
    counter: Cell<i64>,
    verbose: Cell<bool>,
    selections: Cell<u64>,
    started_at: DateTime<Local>,
    out: SharedOutput,
}

impl AppState {
    pub fn new(out: SharedOutput) -> Self {
        Self {
            counter: Cell::new(0),
            verbose: Cell::new(false),
            selections: Cell::new(0),
            started_at: Local::now(),
            out,
        }
    }

    /// State that prints to the process's stdout.
    pub fn stdout() -> Self {
        let out: SharedOutput = Rc::new(RefCell::new(io::stdout()));
        Self::new(out)
    }

    pub fn counter(&self) -> i64 {
        self.counter.get()
    }

    /// Add `delta` to the counter and return the new value.
    pub fn add(&self, delta: i64) -> i64 {
        let value = self.counter.get().saturating_add(delta);
        self.counter.set(value);
        value
    }

    pub fn reset(&self) {
        self.counter.set(0);
    }

    pub fn verbose(&self) -> bool {
        self.verbose.get()
    }

    /// Flip verbose output and return the new setting.
    pub fn toggle_verbose(&self) -> bool {
        let verbose = !self.verbose.get();
        self.verbose.set(verbose);
        verbose
    }

    pub fn record_selection(&self) {
        self.selections.set(self.selections.get() + 1);
    }

    /// Number of item handlers run so far.
    pub fn selections(&self) -> u64 {
        self.selections.get()
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    /// Print one line of handler output.
    pub fn say(&self, line: impl Display) -> io::Result<()> {
        let mut out = self.out.borrow_mut();
        writeln!(out, "{}", line)?;
        out.flush()
    }
}
