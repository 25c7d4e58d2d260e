//! The menu: item display, input routing and nested navigation.
//!
//! Entering a sub-menu is a plain nested call to [`Menu::run`]; the call stack
//! is the navigation stack. Each menu only keeps a weak link to its parent's
//! title node, used to draw breadcrumbs. Children never keep a parent alive.

use crate::escape::{Builtin, EscapeCommand, EscapeManager, DEFAULT_ESCAPE_PREFIX};
use crate::io::MenuIo;
use crate::item::{ItemAction, MenuItem, MenuItems, Toggle};
use crate::render;
use crate::{MenuError, Result};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use termenu_types::{normalize_key, Flow, MenuOutline, Notice};
use tracing::{debug, trace};

/// Prompt shown when none is configured.
pub const DEFAULT_PROMPT: &str = "Select an option:";

/// Width of the `=` banner lines.
pub const DEFAULT_BANNER_WIDTH: usize = 50;

/// Widest banner a menu will draw; wider settings are clamped.
pub const MAX_BANNER_WIDTH: usize = 500;

/// Construction options for a [`Menu`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOptions {
    pub prompt: String,
    pub escape_prefix: String,
    pub banner_width: usize,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            escape_prefix: DEFAULT_ESCAPE_PREFIX.to_string(),
            banner_width: DEFAULT_BANNER_WIDTH,
        }
    }
}

/// A line read by [`Menu::read_input`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Trimmed, non-escape text to match against item keys
    Selection(String),
    /// An escape command asked to leave this menu
    Exit,
}

/// Title plus a weak link to the parent's node.
#[derive(Debug)]
struct TitleNode {
    title: String,
    parent: RefCell<Weak<TitleNode>>,
}

impl TitleNode {
    fn breadcrumb(&self) -> String {
        match self.parent.borrow().upgrade() {
            Some(parent) => format!("{} > {}", parent.breadcrumb(), self.title),
            None => self.title.clone(),
        }
    }
}

/// A titled list of selectable items with its own escape commands.
#[derive(Debug)]
pub struct Menu {
    node: Rc<TitleNode>,
    prompt: String,
    banner_width: usize,
    items: MenuItems,
    escapes: EscapeManager,
}

impl Menu {
    /// Create a menu with the default prompt and `./` escape prefix.
    pub fn new(title: &str) -> Self {
        Self::build(
            title,
            DEFAULT_PROMPT.to_string(),
            DEFAULT_BANNER_WIDTH,
            EscapeManager::default(),
        )
    }

    /// Create a menu with explicit options.
    ///
    /// Fails if the escape prefix is empty or contains whitespace.
    pub fn with_options(title: &str, options: MenuOptions) -> Result<Self> {
        let escapes = EscapeManager::new(&options.escape_prefix)?;
        Ok(Self::build(title, options.prompt, options.banner_width, escapes))
    }

    fn build(title: &str, prompt: String, banner_width: usize, escapes: EscapeManager) -> Self {
        let mut menu = Self {
            node: Rc::new(TitleNode {
                title: title.to_string(),
                parent: RefCell::new(Weak::new()),
            }),
            prompt,
            banner_width: banner_width.clamp(1, MAX_BANNER_WIDTH),
            items: MenuItems::new(),
            escapes,
        };
        menu.register_default_escapes();
        menu
    }

    fn register_default_escapes(&mut self) {
        let p = self.escapes.prefix().to_string();
        let defaults = [
            ("help", "Show list of escape commands.".to_string(), Builtin::Help),
            ("exit", "Exit current menu (return to parent).".to_string(), Builtin::Exit),
            ("quit", "Alias for exit.".to_string(), Builtin::Exit),
            ("disable", format!("Disable a menu item: '{}disable <KEY>'.", p), Builtin::Disable),
            ("enable", format!("Enable a menu item: '{}enable <KEY>'.", p), Builtin::Enable),
            ("list", "List menu items and status.".to_string(), Builtin::List),
        ];
        for (name, description, builtin) in defaults {
            self.escapes
                .register(EscapeCommand::builtin(format!("{}{}", p, name), description, builtin));
        }
    }

    pub fn title(&self) -> &str {
        &self.node.title
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn escape_prefix(&self) -> &str {
        self.escapes.prefix()
    }

    pub fn escapes(&self) -> &EscapeManager {
        &self.escapes
    }

    pub fn items(&self) -> &MenuItems {
        &self.items
    }

    /// Look up an item (case-insensitive).
    pub fn item(&self, key: &str) -> Option<&MenuItem> {
        self.items.get(key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ancestor titles and this title joined with " > ".
    pub fn breadcrumb(&self) -> String {
        self.node.breadcrumb()
    }

    /// Nested menu entered by `key`, if that item is a sub-menu.
    pub fn submenu(&self, key: &str) -> Option<&Menu> {
        match self.items.get(key)?.action() {
            ItemAction::Submenu(menu) => Some(menu),
            ItemAction::Handler(_) => None,
        }
    }

    /// Add an item, replacing any item with the same key in place.
    ///
    /// A sub-menu item gets its parent link pointed at this menu.
    pub fn insert_item(&mut self, mut item: MenuItem) -> &mut Self {
        if let ItemAction::Submenu(child) = item.action_mut() {
            child.node.parent.replace(Rc::downgrade(&self.node));
        }
        if self.escapes.is_escape(item.key()) {
            debug!(
                target: "termenu::menu",
                key = item.key(),
                "Item key starts with the escape prefix and cannot be selected"
            );
        }
        self.items.insert(item);
        self
    }

    /// Add an enabled, ungrouped item that runs `handler`.
    pub fn add_item<F>(&mut self, key: &str, description: &str, handler: F) -> &mut Self
    where
        F: FnMut() -> anyhow::Result<()> + 'static,
    {
        self.insert_item(MenuItem::new(key, description, handler))
    }

    /// Attach `submenu` under `key`; selecting it runs the sub-menu until it exits.
    pub fn add_submenu(&mut self, key: &str, description: &str, submenu: Menu) -> &mut Self {
        self.insert_item(MenuItem::submenu(key, description, submenu))
    }

    /// Register an application escape command.
    ///
    /// Names without the prefix are namespaced under it, so `"stats"` and
    /// `"./stats"` register the same command on a `./` menu.
    pub fn register_escape<F>(&mut self, name: &str, description: &str, handler: F) -> &mut Self
    where
        F: FnMut(&[String], &mut dyn MenuIo) -> anyhow::Result<Flow> + 'static,
    {
        let name = if self.escapes.is_escape(name) {
            name.to_string()
        } else {
            format!("{}{}", self.escapes.prefix(), name)
        };
        self.escapes.register(EscapeCommand::new(&name, description, handler));
        self
    }

    /// Enable or disable an item without printing anything.
    ///
    /// Returns false if no item has that key.
    pub fn set_enabled(&mut self, key: &str, enabled: bool) -> bool {
        self.items.toggle(key, enabled) != Toggle::Missing
    }

    /// Whether `key` names an enabled item.
    pub fn is_enabled(&self, key: &str) -> bool {
        self.items.get(key).is_some_and(MenuItem::is_enabled)
    }

    /// Print the banner, breadcrumb and items.
    pub fn render(&self, io: &mut dyn MenuIo) -> Result<()> {
        let banner = render::banner(self.banner_width);
        io.write_line("")?;
        io.write_line(&banner)?;
        io.write_line(&format!("  {}", self.breadcrumb()))?;
        io.write_line(&banner)?;
        render::write_grouped(io, &self.items, render::menu_line)?;
        io.write_line(&banner)?;
        Ok(())
    }

    /// Read lines until one is not an escape command.
    ///
    /// Escape lines are dispatched and never returned. End of input is an
    /// error: nothing else could ever end the loop.
    pub fn read_input(&mut self, io: &mut dyn MenuIo, prompt: &str) -> Result<Input> {
        loop {
            let Some(raw) = io.read_line(prompt)? else {
                debug!(target: "termenu::menu", menu = %self.title(), "Input closed");
                return Err(MenuError::InputClosed);
            };
            let line = raw.trim();

            if !self.escapes.is_escape(line) {
                return Ok(Input::Selection(line.to_string()));
            }

            if self.escapes.dispatch(line, &mut self.items, io)?.is_exit() {
                return Ok(Input::Exit);
            }
        }
    }

    /// Run the menu until an exit command is entered.
    ///
    /// Exit leaves this menu only; a parent's loop resumes and redraws. Handler
    /// errors and I/O errors are returned as-is.
    pub fn run(&mut self, io: &mut dyn MenuIo) -> Result<()> {
        debug!(target: "termenu::menu", breadcrumb = %self.breadcrumb(), "Entering menu");
        let prompt = format!("{} ", self.prompt);

        loop {
            self.render(io)?;
            let choice = match self.read_input(io, &prompt)? {
                Input::Selection(line) => normalize_key(&line),
                Input::Exit => break,
            };
            self.select(&choice, io)?;
        }

        debug!(target: "termenu::menu", breadcrumb = %self.breadcrumb(), "Leaving menu");
        Ok(())
    }

    fn select(&mut self, choice: &str, io: &mut dyn MenuIo) -> Result<()> {
        let notice = match self.items.get_mut(choice) {
            Some(item) if item.is_enabled() => {
                trace!(target: "termenu::menu", key = %choice, "Activating menu item");
                return item.activate(io);
            }
            Some(_) => Notice::error(format!("Option '{}' is disabled.", choice)),
            None => Notice::error(format!(
                "Invalid choice: '{}'. Type '{}' or select a valid key.",
                choice,
                self.escapes.help_command()
            )),
        };
        io.write_line(&notice.to_string())?;
        Ok(())
    }

    /// Serializable description of this menu and its sub-menus.
    pub fn outline(&self) -> MenuOutline {
        MenuOutline {
            title: self.title().to_string(),
            breadcrumb: self.breadcrumb(),
            prompt: self.prompt.clone(),
            escape_prefix: self.escapes.prefix().to_string(),
            items: self.items.iter().map(MenuItem::outline).collect(),
            escape_commands: self.escapes.infos(),
        }
    }
}
