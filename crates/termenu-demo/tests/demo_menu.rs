//! Integration tests for the demo menu tree.
//!
//! These tests build the same tree the `termenu` binary runs, feed it a
//! script through an in-memory console, and check both the menu output and
//! what the handlers printed.

use std::cell::RefCell;
use std::rc::Rc;
use termenu_core::{Console, Menu, MenuError};
use termenu_demo::{
    app,
    config::Config,
    state::{AppState, SharedOutput},
};

struct Harness {
    menu: Menu,
    state: Rc<AppState>,
    handler_output: Rc<RefCell<Vec<u8>>>,
}

fn harness(config: &Config) -> Harness {
    let handler_output = Rc::new(RefCell::new(Vec::new()));
    let out: SharedOutput = handler_output.clone();
    let state = Rc::new(AppState::new(out));
    let menu = app::build_menu(config, state.clone()).expect("Failed to build demo menu");
    Harness {
        menu,
        state,
        handler_output,
    }
}

impl Harness {
    /// Run `lines`; returns (menu result, menu output).
    fn run(&mut self, lines: &[&str]) -> (Result<(), MenuError>, String) {
        let script = format!("{}\n", lines.join("\n"));
        let mut console = Console::new(script.as_bytes(), Vec::new());
        let result = self.menu.run(&mut console);
        let output = String::from_utf8(console.into_parts().1).unwrap();
        (result, output)
    }

    fn handler_output(&self) -> String {
        String::from_utf8(self.handler_output.borrow().clone()).unwrap()
    }
}

#[test]
fn test_counter_items() {
    let mut h = harness(&Config::default());

    let (result, _) = h.run(&["i", "I", "i", "d", "s", "./exit"]);

    result.unwrap();
    assert_eq!(h.state.counter(), 2);
    assert_eq!(h.state.selections(), 5);
    assert_eq!(h.handler_output(), "1\n2\n3\n2\nCounter: 2\n");
}

#[test]
fn test_reset_starts_disabled() {
    let mut h = harness(&Config::default());

    let (result, output) = h.run(&["i", "z", "./enable z", "z", "./exit"]);

    result.unwrap();
    assert!(output.contains("❗ Option 'Z' is disabled."));
    assert!(output.contains("✅ Enabled 'Z'."));
    assert_eq!(h.state.counter(), 0);
    assert!(h.handler_output().ends_with("Counter reset to 0\n"));
}

#[test]
fn test_root_display_groups() {
    let mut h = harness(&Config::default());

    let (result, output) = h.run(&["./exit"]);

    result.unwrap();
    assert!(output.contains("  termenu demo\n"));
    assert!(output.contains("-- Counter --\n  [I] Increment counter\n"));
    assert!(output.contains("  [ ] Reset counter\n"));
    assert!(output.contains("-- Tools --\n  [T] Time\n"));
    assert!(output.contains("-- Settings --\n  [P] Preferences\n"));
}

#[test]
fn test_verbose_preference_changes_counter_output() {
    let mut h = harness(&Config::default());

    let (result, output) = h.run(&["p", "v", "./exit", "i", "./exit"]);

    result.unwrap();
    assert!(output.contains("  termenu demo > Preferences\n"));
    assert!(h.state.verbose());
    assert_eq!(
        h.handler_output(),
        "Verbose output on\nCounter incremented to 1\n"
    );
}

#[test]
fn test_about_is_three_levels_deep() {
    let mut h = harness(&Config::default());

    let (result, output) = h.run(&["p", "a", "n", "./exit", "./exit", "./exit"]);

    result.unwrap();
    assert!(output.contains("  termenu demo > Preferences > About\n"));
    assert!(h.handler_output().starts_with("termenu-demo "));
}

#[test]
fn test_custom_escape_commands() {
    let mut h = harness(&Config::default());

    let (result, output) = h.run(&["i", "i", "./stats", "./reset", "./help", "./exit"]);

    result.unwrap();
    assert!(output.contains("Counter:    2\n"));
    assert!(output.contains("Selections: 2\n"));
    assert!(output.contains("Counter reset to 0\n"));
    assert!(output.contains("./stats"));
    assert!(output.contains("./reset"));
    assert_eq!(h.state.counter(), 0);
}

#[test]
fn test_custom_escapes_only_on_root() {
    let mut h = harness(&Config::default());

    let (result, output) = h.run(&["t", "./stats", "./exit", "./exit"]);

    result.unwrap();
    assert!(output.contains("❓ Unrecognized command './stats'"));
}

#[test]
fn test_configured_prefix_and_title() {
    let config = Config {
        title: "Ops".to_string(),
        escape_prefix: "!".to_string(),
        ..Config::default()
    };
    let mut h = harness(&config);

    let (result, output) = h.run(&["t", "!exit", "./exit", "!quit"]);

    result.unwrap();
    assert!(output.contains("  Ops > Time\n"));
    assert!(output.contains("Invalid choice: './EXIT'. Type '!help'"));
}

#[test]
fn test_invalid_prefix_fails_to_build() {
    let config = Config {
        escape_prefix: "".to_string(),
        ..Config::default()
    };
    let handler_output: SharedOutput = Rc::new(RefCell::new(Vec::new()));
    let result = app::build_menu(&config, Rc::new(AppState::new(handler_output)));
    assert!(matches!(result, Err(MenuError::InvalidPrefix(_))));
}

#[test]
fn test_outline_describes_whole_tree() {
    let h = harness(&Config::default());
    let outline = h.menu.outline();

    assert_eq!(outline.menu_count(), 4);
    assert_eq!(outline.depth(), 3);
    assert!(!outline.item("z").unwrap().enabled);

    let json = serde_json::to_string(&outline).unwrap();
    assert!(json.contains(r#""breadcrumb":"termenu demo > Preferences > About""#));
    assert!(json.contains(r#""name":"./stats""#));
}

#[test]
fn test_eof_reports_input_closed() {
    let mut h = harness(&Config::default());
    let (result, _) = h.run(&["i"]);
    assert!(matches!(result, Err(MenuError::InputClosed)));
    assert_eq!(h.state.counter(), 1);
}
