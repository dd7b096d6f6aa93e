//! Roles and ARIA state carried by elements.
//!
//! Attributes are explicit fields rather than a free-form map so widgets
//! cannot misspell them. `Aria::get` exposes them under their DOM names for
//! queries and assertions.

/// Semantic role of an element in the accessibility tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    /// No semantic role (plain container or text run).
    #[default]
    Generic,
    Table,
    Caption,
    Row,
    ColumnHeader,
    Cell,
    Button,
    Combobox,
    ListOption,
    Navigation,
    Img,
    Status,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Generic => "generic",
            Role::Table => "table",
            Role::Caption => "caption",
            Role::Row => "row",
            Role::ColumnHeader => "columnheader",
            Role::Cell => "cell",
            Role::Button => "button",
            Role::Combobox => "combobox",
            Role::ListOption => "option",
            Role::Navigation => "navigation",
            Role::Img => "img",
            Role::Status => "status",
        }
    }
}

/// Value of `aria-sort`. Neutral columns omit the attribute entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AriaSort {
    Ascending,
    Descending,
}

impl AriaSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            AriaSort::Ascending => "ascending",
            AriaSort::Descending => "descending",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aria {
    pub sort: Option<AriaSort>,
    /// Decorative content hidden from assistive technology. Still painted.
    pub hidden: bool,
    pub label: Option<String>,
    pub labelled_by: Option<String>,
    pub described_by: Option<String>,
    pub expanded: Option<bool>,
    pub has_popup: Option<bool>,
    pub pressed: Option<bool>,
}

impl Aria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an attribute by its DOM name, e.g. `aria-sort`.
    pub fn get(&self, name: &str) -> Option<String> {
        match name {
            "aria-sort" => self.sort.map(|s| s.as_str().to_string()),
            "aria-hidden" => self.hidden.then(|| "true".to_string()),
            "aria-label" => self.label.clone(),
            "aria-labelledby" => self.labelled_by.clone(),
            "aria-describedby" => self.described_by.clone(),
            "aria-expanded" => self.expanded.map(|v| v.to_string()),
            "aria-haspopup" => self.has_popup.map(|v| v.to_string()),
            "aria-pressed" => self.pressed.map(|v| v.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_attributes_are_absent() {
        let aria = Aria::new();
        assert_eq!(aria.get("aria-sort"), None);
        assert_eq!(aria.get("aria-hidden"), None);
        assert_eq!(aria.get("aria-pressed"), None);
    }

    #[test]
    fn booleans_render_as_strings() {
        let aria = Aria {
            hidden: true,
            expanded: Some(false),
            pressed: Some(true),
            ..Default::default()
        };
        assert_eq!(aria.get("aria-hidden").as_deref(), Some("true"));
        assert_eq!(aria.get("aria-expanded").as_deref(), Some("false"));
        assert_eq!(aria.get("aria-pressed").as_deref(), Some("true"));
    }

    #[test]
    fn sort_uses_aria_tokens() {
        let aria = Aria {
            sort: Some(AriaSort::Descending),
            ..Default::default()
        };
        assert_eq!(aria.get("aria-sort").as_deref(), Some("descending"));
        assert_eq!(Role::ColumnHeader.as_str(), "columnheader");
        assert_eq!(Role::ListOption.as_str(), "option");
    }
}
