use crate::error::{MenuError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

// ---------------------------------------------------------------------------
// MenuAction
// ---------------------------------------------------------------------------

/// What selecting a menu item does. Dispatch only produces these; executing
/// them is the host's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuAction {
    /// Switch to another menu by id.
    Navigate { target: String },
    /// Invoke a named command handler, with optional string arguments.
    Invoke {
        command: String,
        #[serde(default, skip_serializing_if = "HashMap::is_empty")]
        args: HashMap<String, String>,
    },
    /// Leave the session.
    Exit,
}

// ---------------------------------------------------------------------------
// MenuItem / MenuSection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub action: MenuAction,
    /// Alternate typed inputs that select this item (e.g. ["1", "config", "c"]).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shortcuts: Vec<String>,
}

/// Display hints for a section heading. Carried as data only; interpreting
/// the color name is up to the terminal collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionTheme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_color: Option<String>,
    #[serde(default)]
    pub bold: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuSection {
    pub id: String,
    pub heading: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub items: Vec<MenuItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<SectionTheme>,
}

// ---------------------------------------------------------------------------
// MenuDefinition
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuMetadata {
    pub context_level: String,
    #[serde(default = "default_allow_back")]
    pub allow_back: bool,
    /// Stamped by the registry when a skin override resolves.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin_name: Option<String>,
}

fn default_allow_back() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuDefinition {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub sections: Vec<MenuSection>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub footer_hints: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MenuMetadata>,
}

impl MenuDefinition {
    /// Items in display order across all sections.
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.sections.iter().flat_map(|s| s.items.iter())
    }

    /// Whether "back" navigation is allowed (defaults to true when no
    /// metadata has been stamped).
    pub fn allows_back(&self) -> bool {
        self.metadata.as_ref().map(|m| m.allow_back).unwrap_or(true)
    }
}

// ---------------------------------------------------------------------------
// Skin
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinMetadata {
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// A named bundle of menu-id → definition overrides, layered above the core
/// menus by activation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skin {
    pub metadata: SkinMetadata,
    #[serde(default)]
    pub menus: HashMap<String, MenuDefinition>,
}

/// Introspection view of an active skin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinInfo {
    pub name: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Structural validation used by `MenuRegistry::register_menu_safe`.
///
/// Checks: menu id and title present; every section has an id and heading;
/// every item has an id, a label, and a well-formed action; item ids unique
/// within their section.
pub fn validate_definition(menu: &MenuDefinition) -> Result<()> {
    if menu.id.trim().is_empty() {
        return Err(MenuError::InvalidDefinition(
            "menu definition must have an id".to_string(),
        ));
    }
    if menu.title.trim().is_empty() {
        return Err(MenuError::InvalidDefinition(format!(
            "menu '{}' must have a title",
            menu.id
        )));
    }

    for section in &menu.sections {
        if section.id.trim().is_empty() {
            return Err(MenuError::InvalidDefinition(format!(
                "section in menu '{}' must have an id",
                menu.id
            )));
        }
        if section.heading.trim().is_empty() {
            return Err(MenuError::InvalidDefinition(format!(
                "section '{}' in menu '{}' must have a heading",
                section.id, menu.id
            )));
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for item in &section.items {
            if item.id.trim().is_empty() {
                return Err(MenuError::InvalidDefinition(format!(
                    "item in section '{}' must have an id",
                    section.id
                )));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(MenuError::InvalidDefinition(format!(
                    "duplicate item id '{}' in section '{}'",
                    item.id, section.id
                )));
            }
            if item.label.trim().is_empty() {
                return Err(MenuError::InvalidDefinition(format!(
                    "item '{}' must have a label",
                    item.id
                )));
            }
            validate_action(&item.id, &item.action)?;
        }
    }

    Ok(())
}

fn validate_action(item_id: &str, action: &MenuAction) -> Result<()> {
    match action {
        MenuAction::Navigate { target } if target.trim().is_empty() => {
            Err(MenuError::InvalidDefinition(format!(
                "item '{item_id}' navigate action must have a target"
            )))
        }
        MenuAction::Invoke { command, .. } if command.trim().is_empty() => {
            Err(MenuError::InvalidDefinition(format!(
                "item '{item_id}' invoke action must have a command"
            )))
        }
        _ => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, label: &str, action: MenuAction) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            label: label.to_string(),
            description: None,
            icon: None,
            action,
            shortcuts: Vec::new(),
        }
    }

    fn sample_menu() -> MenuDefinition {
        MenuDefinition {
            id: "main".to_string(),
            title: "Main".to_string(),
            subtitle: None,
            sections: vec![MenuSection {
                id: "nav".to_string(),
                heading: "Navigation".to_string(),
                description: None,
                items: vec![item(
                    "config",
                    "Configuration",
                    MenuAction::Navigate {
                        target: "config".to_string(),
                    },
                )],
                theme: None,
            }],
            footer_hints: Vec::new(),
            metadata: None,
        }
    }

    #[test]
    fn valid_menu_passes() {
        assert!(validate_definition(&sample_menu()).is_ok());
    }

    #[test]
    fn missing_title_rejected() {
        let mut menu = sample_menu();
        menu.title = String::new();
        let err = validate_definition(&menu).unwrap_err();
        assert!(matches!(err, MenuError::InvalidDefinition(_)));
        assert!(err.to_string().contains("must have a title"));
    }

    #[test]
    fn missing_section_heading_rejected() {
        let mut menu = sample_menu();
        menu.sections[0].heading = "  ".to_string();
        assert!(validate_definition(&menu).is_err());
    }

    #[test]
    fn duplicate_item_ids_rejected() {
        let mut menu = sample_menu();
        let dup = menu.sections[0].items[0].clone();
        menu.sections[0].items.push(dup);
        let err = validate_definition(&menu).unwrap_err();
        assert!(err.to_string().contains("duplicate item id 'config'"));
    }

    #[test]
    fn empty_navigate_target_rejected() {
        let mut menu = sample_menu();
        menu.sections[0].items[0].action = MenuAction::Navigate {
            target: String::new(),
        };
        assert!(validate_definition(&menu).is_err());
    }

    #[test]
    fn empty_sections_allowed() {
        let mut menu = sample_menu();
        menu.sections[0].items.clear();
        assert!(validate_definition(&menu).is_ok());
    }

    #[test]
    fn action_yaml_tagged() {
        let action = MenuAction::Navigate {
            target: "config".to_string(),
        };
        let yaml = serde_yaml::to_string(&action).unwrap();
        assert!(yaml.contains("type: navigate"));
        let parsed: MenuAction = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, action);
    }

    #[test]
    fn skin_yaml_camel_case() {
        let yaml = r#"
metadata:
  name: midnight
  displayName: Midnight
  version: "1.2.0"
menus:
  main:
    id: main
    title: Midnight Main
    sections: []
"#;
        let skin: Skin = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(skin.metadata.display_name, "Midnight");
        assert_eq!(skin.menus["main"].title, "Midnight Main");
    }

    #[test]
    fn metadata_allow_back_defaults_true() {
        let yaml = "contextLevel: config\n";
        let meta: MenuMetadata = serde_yaml::from_str(yaml).unwrap();
        assert!(meta.allow_back);
    }
}
