//! Serializable snapshot of a menu tree.
//!
//! A live menu holds closures and cannot be serialized. An outline captures
//! everything else (titles, keys, groups, enabled state, escape commands) so
//! an embedding application can dump or inspect the tree it built.

use serde::{Deserialize, Serialize};

/// An escape command as listed by `help`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscapeCommandInfo {
    /// Full command name including the prefix (e.g., "./disable")
    pub name: String,
    pub description: String,
}

/// One entry of a menu outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemOutline {
    /// Normalized (uppercase) key
    pub key: String,
    pub description: String,
    /// Display group, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    pub enabled: bool,
    /// Nested menu entered by this item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submenu: Option<Box<MenuOutline>>,
}

/// A menu and everything reachable from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuOutline {
    pub title: String,
    /// Ancestor titles joined with " > ", ending in this title
    pub breadcrumb: String,
    pub prompt: String,
    pub escape_prefix: String,
    pub items: Vec<ItemOutline>,
    pub escape_commands: Vec<EscapeCommandInfo>,
}

impl MenuOutline {
    /// Find an item by key (case-insensitive).
    pub fn item(&self, key: &str) -> Option<&ItemOutline> {
        let key = crate::normalize_key(key);
        self.items.iter().find(|item| item.key == key)
    }

    /// Number of menus in this tree, including this one.
    pub fn menu_count(&self) -> usize {
        1 + self
            .items
            .iter()
            .filter_map(|item| item.submenu.as_deref())
            .map(MenuOutline::menu_count)
            .sum::<usize>()
    }

    /// Depth of the deepest menu; a menu without sub-menus has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .items
            .iter()
            .filter_map(|item| item.submenu.as_deref())
            .map(MenuOutline::depth)
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(title: &str, breadcrumb: &str) -> MenuOutline {
        MenuOutline {
            title: title.to_string(),
            breadcrumb: breadcrumb.to_string(),
            prompt: "Select an option:".to_string(),
            escape_prefix: "./".to_string(),
            items: vec![ItemOutline {
                key: "X".to_string(),
                description: "Do the thing".to_string(),
                group: None,
                enabled: true,
                submenu: None,
            }],
            escape_commands: vec![EscapeCommandInfo {
                name: "./help".to_string(),
                description: "Show list of escape commands.".to_string(),
            }],
        }
    }

    fn tree() -> MenuOutline {
        let mut mid = leaf("Mid", "Root > Mid");
        mid.items.push(ItemOutline {
            key: "L".to_string(),
            description: "Leaf".to_string(),
            group: None,
            enabled: true,
            submenu: Some(Box::new(leaf("Leaf", "Root > Mid > Leaf"))),
        });

        let mut root = leaf("Root", "Root");
        root.items.push(ItemOutline {
            key: "M".to_string(),
            description: "Mid".to_string(),
            group: Some("Nested".to_string()),
            enabled: false,
            submenu: Some(Box::new(mid)),
        });
        root
    }

    #[test]
    fn test_item_lookup_is_case_insensitive() {
        let root = tree();
        assert_eq!(root.item("m").unwrap().description, "Mid");
        assert_eq!(root.item(" x ").unwrap().description, "Do the thing");
        assert!(root.item("nope").is_none());
    }

    #[test]
    fn test_menu_count_and_depth() {
        let root = tree();
        assert_eq!(root.menu_count(), 3);
        assert_eq!(root.depth(), 3);
        assert_eq!(leaf("Solo", "Solo").depth(), 1);
    }

    #[test]
    fn test_serialization_skips_empty_optionals() {
        let json = serde_json::to_string(&leaf("Solo", "Solo")).unwrap();
        assert!(json.contains(r#""breadcrumb":"Solo""#));
        assert!(json.contains(r#""escape_prefix":"./""#));
        assert!(!json.contains(r#""group""#));
        assert!(!json.contains(r#""submenu""#));
    }

    #[test]
    fn test_nested_serialization() {
        let json = serde_json::to_string(&tree()).unwrap();
        assert!(json.contains(r#""group":"Nested""#));
        assert!(json.contains(r#""breadcrumb":"Root > Mid > Leaf""#));
    }

    #[test]
    fn test_deserialization_defaults_optionals() {
        let json = r#"{
            "title": "Main",
            "breadcrumb": "Main",
            "prompt": "Pick:",
            "escape_prefix": "!",
            "items": [
                {"key": "A", "description": "Add", "enabled": true}
            ],
            "escape_commands": []
        }"#;

        let outline: MenuOutline = serde_json::from_str(json).unwrap();
        assert_eq!(outline.escape_prefix, "!");
        assert_eq!(outline.items.len(), 1);
        assert!(outline.items[0].group.is_none());
        assert!(outline.items[0].submenu.is_none());
    }
}
