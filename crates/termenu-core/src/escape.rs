//! Escape commands: out-of-band instructions typed behind a prefix.
//!
//! Any line starting with the manager's prefix belongs to the escape layer,
//! recognized or not. Dispatch never hands a prefixed line back for item
//! selection, so `./a` can never select item `A`.

use crate::error::MenuError;
use crate::io::MenuIo;
use crate::item::{MenuItems, Toggle};
use crate::render;
use crate::Result;
use anyhow::Context;
use termenu_types::{normalize_key, EscapeCommandInfo, Flow, Notice};
use tracing::{debug, trace, warn};

/// Prefix used when none is configured.
pub const DEFAULT_ESCAPE_PREFIX: &str = "./";

/// Handler for an application-defined escape command.
///
/// Receives the whitespace-split arguments after the command name and the
/// menu's I/O. Returning [`Flow::Exit`] leaves the menu like `exit` does.
pub type EscapeHandler = Box<dyn FnMut(&[String], &mut dyn MenuIo) -> anyhow::Result<Flow>>;

/// Commands every menu registers for itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Builtin {
    Help,
    Exit,
    Disable,
    Enable,
    List,
}

enum CommandKind {
    Builtin(Builtin),
    Custom(EscapeHandler),
}

/// A named, described escape action.
pub struct EscapeCommand {
    name: String,
    description: String,
    kind: CommandKind,
}

impl std::fmt::Debug for EscapeCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EscapeCommand")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl EscapeCommand {
    /// Create an application-defined command.
    ///
    /// `name` is the full command name, prefix included (e.g., "./stats").
    pub fn new<F>(name: &str, description: &str, handler: F) -> Self
    where
        F: FnMut(&[String], &mut dyn MenuIo) -> anyhow::Result<Flow> + 'static,
    {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            kind: CommandKind::Custom(Box::new(handler)),
        }
    }

    pub(crate) fn builtin(name: String, description: String, builtin: Builtin) -> Self {
        Self {
            name,
            description,
            kind: CommandKind::Builtin(builtin),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    fn matches(&self, token: &str) -> bool {
        self.name.to_lowercase() == token.to_lowercase()
    }

    fn info(&self) -> EscapeCommandInfo {
        EscapeCommandInfo {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

/// Registry of escape commands under one prefix.
#[derive(Debug)]
pub struct EscapeManager {
    prefix: String,
    commands: Vec<EscapeCommand>,
}

impl Default for EscapeManager {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_ESCAPE_PREFIX.to_string(),
            commands: Vec::new(),
        }
    }
}

impl EscapeManager {
    /// Create an empty manager.
    ///
    /// The prefix must be non-empty and free of whitespace: an empty prefix
    /// would swallow every line, and whitespace would split the command token.
    pub fn new(prefix: &str) -> Result<Self> {
        if prefix.is_empty() || prefix.chars().any(char::is_whitespace) {
            return Err(MenuError::InvalidPrefix(prefix.to_string()));
        }
        Ok(Self {
            prefix: prefix.to_string(),
            commands: Vec::new(),
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Full name of the help command (e.g., "./help").
    pub fn help_command(&self) -> String {
        format!("{}help", self.prefix)
    }

    /// True if `line` belongs to the escape layer.
    pub fn is_escape(&self, line: &str) -> bool {
        line.starts_with(&self.prefix)
    }

    /// Register a command, replacing any command with the same name.
    ///
    /// The last registration wins and keeps the replaced command's position.
    pub fn register(&mut self, command: EscapeCommand) {
        if !command.name.starts_with(&self.prefix) {
            warn!(
                target: "termenu::escape",
                name = %command.name,
                prefix = %self.prefix,
                "Escape command does not start with the prefix and can never be typed"
            );
        }

        match self.commands.iter().position(|c| c.matches(&command.name)) {
            Some(index) => {
                warn!(target: "termenu::escape", name = %command.name, "Overwriting escape command");
                self.commands[index] = command;
            }
            None => self.commands.push(command),
        }
    }

    pub fn get(&self, name: &str) -> Option<&EscapeCommand> {
        self.commands.iter().find(|c| c.matches(name))
    }

    pub fn commands(&self) -> impl Iterator<Item = &EscapeCommand> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub(crate) fn infos(&self) -> Vec<EscapeCommandInfo> {
        self.commands.iter().map(EscapeCommand::info).collect()
    }

    /// Run the command named by the first token of `raw`.
    ///
    /// Unrecognized commands are reported and still count as handled; the
    /// return value only says whether the menu should exit.
    pub fn dispatch(
        &mut self,
        raw: &str,
        items: &mut MenuItems,
        io: &mut dyn MenuIo,
    ) -> Result<Flow> {
        let raw = raw.trim();
        let (token, rest) = raw.split_once(char::is_whitespace).unwrap_or((raw, ""));
        let args: Vec<String> = rest.split_whitespace().map(str::to_string).collect();

        let Some(index) = self.commands.iter().position(|c| c.matches(token)) else {
            debug!(target: "termenu::escape", token, "Unrecognized escape command");
            io.write_line(
                &Notice::unrecognized(format!(
                    "Unrecognized command '{}'. Type '{}' for valid commands.",
                    token,
                    self.help_command()
                ))
                .to_string(),
            )?;
            return Ok(Flow::Continue);
        };

        trace!(target: "termenu::escape", command = %self.commands[index].name, ?args, "Dispatching escape command");

        let builtin = match &mut self.commands[index] {
            EscapeCommand {
                kind: CommandKind::Custom(handler),
                name,
                ..
            } => {
                let flow = handler(args.as_slice(), io)
                    .with_context(|| format!("Escape command '{}' failed", name))?;
                return Ok(flow);
            }
            EscapeCommand {
                kind: CommandKind::Builtin(builtin),
                ..
            } => *builtin,
        };
        self.run_builtin(builtin, &args, items, io)
    }

    fn run_builtin(
        &self,
        builtin: Builtin,
        args: &[String],
        items: &mut MenuItems,
        io: &mut dyn MenuIo,
    ) -> Result<Flow> {
        match builtin {
            Builtin::Help => self.write_help(io)?,
            Builtin::Exit => {
                debug!(target: "termenu::escape", "Exit requested");
                return Ok(Flow::Exit);
            }
            Builtin::Disable => self.toggle(args, false, items, io)?,
            Builtin::Enable => self.toggle(args, true, items, io)?,
            Builtin::List => write_list(items, io)?,
        }
        Ok(Flow::Continue)
    }

    fn write_help(&self, io: &mut dyn MenuIo) -> std::io::Result<()> {
        io.write_line("")?;
        io.write_line("=== Escape Commands ===")?;
        for command in &self.commands {
            io.write_line(&format!("  {:<12} - {}", command.name, command.description))?;
        }
        io.write_line("")
    }

    fn toggle(
        &self,
        args: &[String],
        enabled: bool,
        items: &mut MenuItems,
        io: &mut dyn MenuIo,
    ) -> std::io::Result<()> {
        let verb = if enabled { "enable" } else { "disable" };
        let Some(key) = args.first().map(|k| normalize_key(k)) else {
            return io.write_line(
                &Notice::error(format!("Usage: {}{} <KEY>", self.prefix, verb)).to_string(),
            );
        };

        let notice = match items.toggle(&key, enabled) {
            Toggle::Changed => {
                debug!(target: "termenu::escape", key = %key, enabled, "Toggled menu item");
                let past = if enabled { "Enabled" } else { "Disabled" };
                Notice::success(format!("{} '{}'.", past, key))
            }
            Toggle::Unchanged => Notice::warning(format!("'{}' already {}d.", key, verb)),
            Toggle::Missing => Notice::error(format!("No menu item '{}'.", key)),
        };
        io.write_line(&notice.to_string())
    }
}

fn write_list(items: &MenuItems, io: &mut dyn MenuIo) -> std::io::Result<()> {
    io.write_line("")?;
    io.write_line("=== Menu Items ===")?;
    render::write_grouped(io, items, render::status_line)?;
    io.write_line("")
}
