//! The demo menu tree.
//!
//! ```text
//! termenu demo
//!   -- Counter --   I, D, S, Z (starts disabled)
//!   -- Tools --     T > Time
//!   -- Settings --  P > Preferences > About
//! ```
//!
//! The root also carries two application escape commands, `stats` and
//! `reset`, next to the built-in ones.

use crate::config::Config;
use crate::state::AppState;
use chrono::{Local, Utc};
use std::rc::Rc;
use termenu_core::{Flow, Menu, MenuIo, MenuItem, Result};
use tracing::info;

/// Wrap a state-aware handler as a zero-argument item handler.
fn action<F>(state: &Rc<AppState>, mut handler: F) -> impl FnMut() -> anyhow::Result<()> + 'static
where
    F: FnMut(&AppState) -> anyhow::Result<()> + 'static,
{
    let state = Rc::clone(state);
    move || {
        state.record_selection();
        handler(state.as_ref())
    }
}

/// Build the whole demo tree from `config`.
pub fn build_menu(config: &Config, state: Rc<AppState>) -> Result<Menu> {
    let mut root = Menu::with_options(&config.title, config.menu_options())?;

    root.insert_item(MenuItem::new("i", "Increment counter", action(&state, |s| {
        let value = s.add(1);
        info!(target: "termenu::app", value, "Counter incremented");
        report_counter(s, "incremented", value)
    })).in_group("Counter"))
    .insert_item(MenuItem::new("d", "Decrement counter", action(&state, |s| {
        let value = s.add(-1);
        info!(target: "termenu::app", value, "Counter decremented");
        report_counter(s, "decremented", value)
    })).in_group("Counter"))
    .insert_item(MenuItem::new("s", "Show counter", action(&state, |s| {
        s.say(format!("Counter: {}", s.counter()))?;
        Ok(())
    })).in_group("Counter"))
    .insert_item(MenuItem::new("z", "Reset counter", action(&state, |s| {
        s.reset();
        info!(target: "termenu::app", "Counter reset");
        s.say("Counter reset to 0")?;
        Ok(())
    })).in_group("Counter").disabled())
    .insert_item(MenuItem::submenu("t", "Time", time_menu(config, &state)?).in_group("Tools"))
    .insert_item(
        MenuItem::submenu("p", "Preferences", preferences_menu(config, &state)?).in_group("Settings"),
    );

    let stats_state = Rc::clone(&state);
    root.register_escape("stats", "Show counter and selection statistics.", move |_, io| {
        write_stats(&stats_state, io)?;
        Ok(Flow::Continue)
    });

    let reset_state = Rc::clone(&state);
    root.register_escape("reset", "Reset the counter without selecting an item.", move |_, io| {
        reset_state.reset();
        info!(target: "termenu::app", "Counter reset from escape command");
        io.write_line("Counter reset to 0")?;
        Ok(Flow::Continue)
    });

    Ok(root)
}

fn report_counter(state: &AppState, verb: &str, value: i64) -> anyhow::Result<()> {
    if state.verbose() {
        state.say(format!("Counter {} to {}", verb, value))?;
    } else {
        state.say(value)?;
    }
    Ok(())
}

fn write_stats(state: &AppState, io: &mut dyn MenuIo) -> std::io::Result<()> {
    let uptime = Local::now().signed_duration_since(state.started_at());
    io.write_line(&format!("Counter:    {}", state.counter()))?;
    io.write_line(&format!("Selections: {}", state.selections()))?;
    io.write_line(&format!("Verbose:    {}", if state.verbose() { "on" } else { "off" }))?;
    io.write_line(&format!("Uptime:     {}s", uptime.num_seconds()))
}

fn time_menu(config: &Config, state: &Rc<AppState>) -> Result<Menu> {
    let mut menu = Menu::with_options("Time", config.menu_options())?;
    menu.add_item("l", "Local time", action(state, |s| {
        s.say(Local::now().format("%Y-%m-%d %H:%M:%S %Z"))?;
        Ok(())
    }))
    .add_item("u", "UTC time", action(state, |s| {
        s.say(Utc::now().to_rfc3339())?;
        Ok(())
    }))
    .add_item("e", "Unix timestamp", action(state, |s| {
        s.say(Utc::now().timestamp())?;
        Ok(())
    }))
    .add_item("w", "Time since start", action(state, |s| {
        let elapsed = Local::now().signed_duration_since(s.started_at());
        s.say(format!("Running for {}s", elapsed.num_seconds()))?;
        Ok(())
    }));
    Ok(menu)
}

fn preferences_menu(config: &Config, state: &Rc<AppState>) -> Result<Menu> {
    let mut menu = Menu::with_options("Preferences", config.menu_options())?;
    menu.add_item("v", "Toggle verbose output", action(state, |s| {
        let verbose = s.toggle_verbose();
        info!(target: "termenu::app", verbose, "Verbose output toggled");
        s.say(format!("Verbose output {}", if verbose { "on" } else { "off" }))?;
        Ok(())
    }))
    .add_submenu("a", "About", about_menu(config, state)?);
    Ok(menu)
}

fn about_menu(config: &Config, state: &Rc<AppState>) -> Result<Menu> {
    let mut menu = Menu::with_options("About", config.menu_options())?;
    menu.add_item("n", "Name and version", action(state, |s| {
        s.say(format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")))?;
        Ok(())
    }))
    .add_item("b", "Build profile", action(state, |s| {
        s.say(if cfg!(debug_assertions) { "debug" } else { "release" })?;
        Ok(())
    }));
    Ok(menu)
}
