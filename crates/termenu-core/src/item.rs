//! Menu items and the ordered collection that holds them.

use crate::io::MenuIo;
use crate::menu::Menu;
use crate::Result;
use anyhow::Context;
use termenu_types::{normalize_key, ItemOutline};
use tracing::debug;

/// Zero-argument action run when an item is selected.
pub type ItemHandler = Box<dyn FnMut() -> anyhow::Result<()>>;

/// What selecting an item does.
pub enum ItemAction {
    /// Run an application handler
    Handler(ItemHandler),
    /// Enter a nested menu; its exit returns here
    Submenu(Box<Menu>),
}

impl std::fmt::Debug for ItemAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemAction::Handler(_) => f.write_str("Handler(..)"),
            ItemAction::Submenu(menu) => f.debug_tuple("Submenu").field(&menu.title()).finish(),
        }
    }
}

/// A keyed, described, optionally grouped, enable-toggleable entry.
#[derive(Debug)]
pub struct MenuItem {
    key: String,
    description: String,
    group: Option<String>,
    enabled: bool,
    action: ItemAction,
}

impl MenuItem {
    /// Create an enabled, ungrouped item that runs `handler`.
    pub fn new<F>(key: &str, description: &str, handler: F) -> Self
    where
        F: FnMut() -> anyhow::Result<()> + 'static,
    {
        Self::with_action(key, description, ItemAction::Handler(Box::new(handler)))
    }

    /// Create an item that enters `menu` when selected.
    pub fn submenu(key: &str, description: &str, menu: Menu) -> Self {
        Self::with_action(key, description, ItemAction::Submenu(Box::new(menu)))
    }

    fn with_action(key: &str, description: &str, action: ItemAction) -> Self {
        Self {
            key: normalize_key(key),
            description: description.to_string(),
            group: None,
            enabled: true,
            action,
        }
    }

    /// Place the item in a display group. An empty name means no group.
    pub fn in_group(mut self, group: &str) -> Self {
        self.group = Some(group.to_string()).filter(|g| !g.is_empty());
        self
    }

    /// Start out disabled.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_submenu(&self) -> bool {
        matches!(self.action, ItemAction::Submenu(_))
    }

    pub fn action(&self) -> &ItemAction {
        &self.action
    }

    pub(crate) fn action_mut(&mut self) -> &mut ItemAction {
        &mut self.action
    }

    /// Run the item's action. Disabled state is the caller's concern.
    ///
    /// A handler error is wrapped with the item key and returned unchanged
    /// otherwise; nothing here catches it.
    pub(crate) fn activate(&mut self, io: &mut dyn MenuIo) -> Result<()> {
        match &mut self.action {
            ItemAction::Handler(handler) => {
                handler().with_context(|| format!("Menu item '{}' failed", self.key))?;
                Ok(())
            }
            ItemAction::Submenu(menu) => menu.run(io),
        }
    }

    pub(crate) fn outline(&self) -> ItemOutline {
        ItemOutline {
            key: self.key.clone(),
            description: self.description.clone(),
            group: self.group.clone(),
            enabled: self.enabled,
            submenu: match &self.action {
                ItemAction::Submenu(menu) => Some(Box::new(menu.outline())),
                ItemAction::Handler(_) => None,
            },
        }
    }
}

/// Result of an enable/disable request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The item's state was flipped
    Changed,
    /// The item was already in the requested state
    Unchanged,
    /// No item has that key
    Missing,
}

/// Items in display order, unique by normalized key.
#[derive(Debug, Default)]
pub struct MenuItems {
    items: Vec<MenuItem>,
}

impl MenuItems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an item, or replace the one with the same key in place.
    ///
    /// A replaced item keeps its display position. Returns the old item.
    pub fn insert(&mut self, item: MenuItem) -> Option<MenuItem> {
        match self.position(&item.key) {
            Some(index) => {
                debug!(target: "termenu::menu", key = %item.key, "Replacing existing menu item");
                Some(std::mem::replace(&mut self.items[index], item))
            }
            None => {
                self.items.push(item);
                None
            }
        }
    }

    fn position(&self, normalized: &str) -> Option<usize> {
        self.items.iter().position(|item| item.key == normalized)
    }

    /// Look up an item by key (case-insensitive).
    pub fn get(&self, key: &str) -> Option<&MenuItem> {
        let key = normalize_key(key);
        self.items.iter().find(|item| item.key == key)
    }

    /// Look up an item by key for mutation (case-insensitive).
    pub fn get_mut(&mut self, key: &str) -> Option<&mut MenuItem> {
        let key = normalize_key(key);
        self.items.iter_mut().find(|item| item.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Set an item's enabled flag.
    pub fn toggle(&mut self, key: &str, enabled: bool) -> Toggle {
        match self.get_mut(key) {
            None => Toggle::Missing,
            Some(item) if item.enabled == enabled => Toggle::Unchanged,
            Some(item) => {
                item.enabled = enabled;
                Toggle::Changed
            }
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MenuItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a MenuItems {
    type Item = &'a MenuItem;
    type IntoIter = std::slice::Iter<'a, MenuItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
