//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use termenu_core::{Console, Menu, Result};

/// Shared log of handler invocations, in call order.
pub type CallLog = Rc<RefCell<Vec<String>>>;

pub fn call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Handler that appends `label` to `log` each time it runs.
pub fn recorder(log: &CallLog, label: &str) -> impl FnMut() -> anyhow::Result<()> + 'static {
    let log = log.clone();
    let label = label.to_string();
    move || {
        log.borrow_mut().push(label.clone());
        Ok(())
    }
}

/// Feed `lines` to `menu.run` and return the result along with all output.
pub fn run_script(menu: &mut Menu, lines: &[&str]) -> (Result<()>, String) {
    let mut script = lines.join("\n");
    script.push('\n');

    let mut console = Console::new(script.as_bytes(), Vec::new());
    let result = menu.run(&mut console);
    let (_, output) = console.into_parts();

    let output = String::from_utf8(output)
        .unwrap_or_else(|e| panic!("Menu output was not UTF-8: {}", e));
    (result, output)
}

/// Assert that `needle` appears in `output`, showing the output on failure.
pub fn assert_output_contains(output: &str, needle: &str) {
    assert!(
        output.contains(needle),
        "Expected output to contain '{}', got:\n{}",
        needle, output
    );
}
