//! Plain-text layout shared by the menu display and the `list` command.

use crate::io::MenuIo;
use crate::item::MenuItem;
use std::io;

/// A horizontal rule of `width` `=` characters.
pub(crate) fn banner(width: usize) -> String {
    "=".repeat(width)
}

/// `-- group --` header line.
pub(crate) fn group_header(group: &str) -> String {
    format!("-- {} --", group)
}

/// Write items in order, inserting a group header whenever the group changes.
///
/// Headers are only written for defined groups; a run of ungrouped items
/// following a group gets no header of its own.
pub(crate) fn write_grouped<'a, I, F>(io: &mut dyn MenuIo, items: I, mut line: F) -> io::Result<()>
where
    I: IntoIterator<Item = &'a MenuItem>,
    F: FnMut(&MenuItem) -> String,
{
    let mut current: Option<&str> = None;
    for item in items {
        if item.group() != current {
            current = item.group();
            if let Some(group) = current {
                io.write_line("")?;
                io.write_line(&group_header(group))?;
            }
        }
        io.write_line(&line(item))?;
    }
    Ok(())
}

/// Line for an item in the main menu display.
///
/// Disabled items stay visible, but their key is blanked out.
pub(crate) fn menu_line(item: &MenuItem) -> String {
    if item.is_enabled() {
        format!("  [{}] {}", item.key(), item.description())
    } else {
        format!("  [ ] {}", item.description())
    }
}

/// Line for an item in the `list` escape command.
pub(crate) fn status_line(item: &MenuItem) -> String {
    if item.is_enabled() {
        format!("  [{}] {}", item.key(), item.description())
    } else {
        format!("  [{}] {} (Disabled)", item.key(), item.description())
    }
}
