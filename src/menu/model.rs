use serde::{Deserialize, Serialize};

/// Sentinel item name that marks a separator in flat menu definition files.
pub const SEPARATOR_NAME: &str = "__";

/// One top-level entry in the menu bar (e.g. "File", "Edit").
///
/// Entries are plain data supplied by the embedding application; the
/// interaction controller only ever reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Visible label in the menu bar.
    pub name: String,
    /// Ordered popup rows shown while this entry is active.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<MenuItem>,
}

impl MenuEntry {
    /// Create an entry with no popup rows yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Append a popup row.
    ///
    /// Returns `self` for fluent chaining.
    pub fn add_item(mut self, item: impl Into<MenuItem>) -> Self {
        self.items.push(item.into());
        self
    }
}

/// One row inside a popup: either a divider or a clickable action.
///
/// In definition files the flat conventional shape is used: a row whose name
/// is [`SEPARATOR_NAME`] or that carries no `action` field deserializes as a
/// separator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "MenuItemDef", into = "MenuItemDef")]
pub enum MenuItem {
    /// Non-interactive divider row.
    Separator,
    /// Clickable row that dispatches a named action.
    Action(ActionItem),
}

impl MenuItem {
    /// A divider row.
    pub fn separator() -> Self {
        Self::Separator
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, Self::Separator)
    }
}

impl From<ActionItem> for MenuItem {
    fn from(item: ActionItem) -> Self {
        Self::Action(item)
    }
}

/// A clickable popup row.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionItem {
    /// Visible row label.
    pub name: String,
    /// Optional keyboard shortcut label, right-aligned in the row.
    /// Display only; triggering shortcuts is up to the embedding application.
    pub shortcut: Option<String>,
    /// Action identifier resolved against the [`ActionRegistry`](crate::menu::ActionRegistry).
    pub action: String,
    /// Value handed to the action callback.
    pub value: ActionValue,
    /// Nested rows. Accepted in the data model, not expanded by the popup.
    pub items: Vec<MenuItem>,
}

impl ActionItem {
    /// Create an actionable row.
    pub fn new(
        name: impl Into<String>,
        action: impl Into<String>,
        value: impl Into<ActionValue>,
    ) -> Self {
        Self {
            name: name.into(),
            shortcut: None,
            action: action.into(),
            value: value.into(),
            items: Vec::new(),
        }
    }

    /// Attach a shortcut label (e.g. `"Ctrl+O"`).
    pub fn with_shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }

    /// Attach a nested row.
    pub fn add_item(mut self, item: impl Into<MenuItem>) -> Self {
        self.items.push(item.into());
        self
    }
}

/// Value carried by an actionable row: text or number, as in menu
/// definition files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionValue {
    Text(String),
    Number(f64),
}

impl Default for ActionValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<&str> for ActionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ActionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for ActionValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for ActionValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

/// Flat on-disk shape of a popup row.
#[derive(Serialize, Deserialize)]
struct MenuItemDef {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    shortcut: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<ActionValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    items: Vec<MenuItemDef>,
}

impl From<MenuItemDef> for MenuItem {
    fn from(def: MenuItemDef) -> Self {
        let action = match def.action {
            Some(action) if def.name != SEPARATOR_NAME => action,
            _ => return MenuItem::Separator,
        };
        MenuItem::Action(ActionItem {
            name: def.name,
            shortcut: def.shortcut,
            action,
            value: def.value.unwrap_or_default(),
            items: def.items.into_iter().map(MenuItem::from).collect(),
        })
    }
}

impl From<MenuItem> for MenuItemDef {
    fn from(item: MenuItem) -> Self {
        match item {
            MenuItem::Separator => MenuItemDef {
                name: SEPARATOR_NAME.to_string(),
                shortcut: None,
                action: None,
                value: None,
                items: Vec::new(),
            },
            MenuItem::Action(item) => MenuItemDef {
                name: item.name,
                shortcut: item.shortcut,
                action: Some(item.action),
                value: Some(item.value),
                items: item.items.into_iter().map(MenuItemDef::from).collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flat_definition_file() {
        let json = r#"[
            {
                "name": "File",
                "items": [
                    { "name": "Open File", "action": "openFile", "value": "path/to/x", "shortcut": "Ctrl+O" },
                    { "name": "__" },
                    { "name": "Exit", "action": "exit", "value": 0 }
                ]
            },
            { "name": "Help" }
        ]"#;

        let menus: Vec<MenuEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(menus.len(), 2);
        assert_eq!(menus[0].name, "File");
        assert_eq!(menus[0].items.len(), 3);
        assert!(menus[0].items[1].is_separator());
        assert!(menus[1].items.is_empty());

        match &menus[0].items[0] {
            MenuItem::Action(item) => {
                assert_eq!(item.action, "openFile");
                assert_eq!(item.shortcut.as_deref(), Some("Ctrl+O"));
                assert_eq!(item.value, ActionValue::Text("path/to/x".into()));
            }
            other => panic!("expected action row, got {other:?}"),
        }
        match &menus[0].items[2] {
            MenuItem::Action(item) => assert_eq!(item.value, ActionValue::Number(0.0)),
            other => panic!("expected action row, got {other:?}"),
        }
    }

    #[test]
    fn row_without_action_is_a_separator() {
        let item: MenuItem = serde_json::from_str(r#"{ "name": "dangling" }"#).unwrap();
        assert!(item.is_separator());
    }

    #[test]
    fn nested_items_are_kept_in_the_model() {
        let item = ActionItem::new("Recent", "openRecent", "")
            .add_item(ActionItem::new("a.txt", "openFile", "a.txt"));
        assert_eq!(item.items.len(), 1);

        let json = serde_json::to_string(&MenuItem::from(item)).unwrap();
        let back: MenuItem = serde_json::from_str(&json).unwrap();
        match back {
            MenuItem::Action(item) => assert_eq!(item.items.len(), 1),
            other => panic!("expected action row, got {other:?}"),
        }
    }

    #[test]
    fn separator_round_trips_through_the_flat_shape() {
        let json = serde_json::to_string(&MenuItem::Separator).unwrap();
        assert!(json.contains(SEPARATOR_NAME));
        let back: MenuItem = serde_json::from_str(&json).unwrap();
        assert!(back.is_separator());
    }
}
