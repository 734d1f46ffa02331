//! Item commands
//!
//! Context-menu entries registered by the host workspace for project items.

use std::fmt;

use super::types::Node;
use crate::error::{BrowserError, BrowserResult};

type Action = Box<dyn Fn(&Node)>;

/// A context-menu entry; entries without an action are shown disabled
pub struct ItemCommand {
    pub text: String,
    action: Option<Action>,
}

impl fmt::Debug for ItemCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemCommand")
            .field("text", &self.text)
            .field("enabled", &self.action.is_some())
            .finish()
    }
}

#[derive(Debug, Default)]
pub struct ItemCommands {
    commands: Vec<ItemCommand>,
}

impl ItemCommands {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: impl Into<String>, action: impl Fn(&Node) + 'static) {
        self.commands.push(ItemCommand {
            text: text.into(),
            action: Some(Box::new(action)),
        });
    }

    pub fn push_disabled(&mut self, text: impl Into<String>) {
        self.commands.push(ItemCommand {
            text: text.into(),
            action: None,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemCommand> {
        self.commands.iter()
    }

    /// Run the first command labelled `Open` on `item`
    pub fn open_project(&self, item: &Node) -> BrowserResult<()> {
        let action = self
            .commands
            .iter()
            .find(|cmd| cmd.text == "Open")
            .and_then(|cmd| cmd.action.as_ref())
            .ok_or(BrowserError::OpenCommandMissing)?;
        action(item);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_open_runs_open_command() {
        let opened = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&opened);

        let mut commands = ItemCommands::new();
        commands.push("Rename", |_| {});
        commands.push("Open", move |node: &Node| sink.borrow_mut().push(node.name.clone()));

        commands.open_project(&Node::item("Span", "42")).unwrap();
        assert_eq!(*opened.borrow(), vec!["Span".to_string()]);
    }

    #[test]
    fn test_open_missing() {
        let mut commands = ItemCommands::new();
        commands.push("Rename", |_| {});
        assert_eq!(
            commands.open_project(&Node::item("Span", "42")),
            Err(BrowserError::OpenCommandMissing)
        );
    }

    #[test]
    fn test_open_disabled() {
        let mut commands = ItemCommands::new();
        commands.push_disabled("Open");
        assert_eq!(
            commands.open_project(&Node::item("Span", "42")),
            Err(BrowserError::OpenCommandMissing)
        );
        assert_eq!(commands.iter().count(), 1);
    }
}
