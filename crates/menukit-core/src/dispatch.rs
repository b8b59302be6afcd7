use crate::definition::{MenuAction, MenuDefinition};

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Outcome of routing one line of typed input against a resolved menu.
/// This module only produces descriptors; executing them is the session's
/// job.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// A menu item was selected; carries its action descriptor.
    Action(MenuAction),
    /// Return to the previous menu.
    Back,
    /// Show contextual help.
    Help,
    /// Leave the session.
    Quit,
}

// ---------------------------------------------------------------------------
// Input resolution
// ---------------------------------------------------------------------------

/// Route trimmed, lowercased input to a selection.
///
/// Order: session keywords (`back` honored only when the menu allows it,
/// `help`, `quit`/`exit`), then item id, then declared shortcuts, then the
/// 1-based item number counted across sections in display order. Returns
/// `None` for unrecognized input.
pub fn resolve_input(menu: &MenuDefinition, input: &str) -> Option<Selection> {
    let cmd = input.trim().to_lowercase();
    if cmd.is_empty() {
        return None;
    }

    match cmd.as_str() {
        "back" if menu.allows_back() => return Some(Selection::Back),
        "help" => return Some(Selection::Help),
        "quit" | "exit" => return Some(Selection::Quit),
        _ => {}
    }

    for (index, item) in menu.items().enumerate() {
        let number = (index + 1).to_string();
        if item.id.to_lowercase() == cmd
            || number == cmd
            || item.shortcuts.iter().any(|s| s.to_lowercase() == cmd)
        {
            return Some(Selection::Action(item.action.clone()));
        }
    }

    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{MenuItem, MenuMetadata, MenuSection};

    fn menu() -> MenuDefinition {
        MenuDefinition {
            id: "main".to_string(),
            title: "Main".to_string(),
            subtitle: None,
            sections: vec![
                MenuSection {
                    id: "nav".to_string(),
                    heading: "Navigate".to_string(),
                    description: None,
                    items: vec![MenuItem {
                        id: "config".to_string(),
                        label: "Configuration".to_string(),
                        description: None,
                        icon: None,
                        action: MenuAction::Navigate {
                            target: "config".to_string(),
                        },
                        shortcuts: vec!["c".to_string()],
                    }],
                    theme: None,
                },
                MenuSection {
                    id: "cmds".to_string(),
                    heading: "Commands".to_string(),
                    description: None,
                    items: vec![MenuItem {
                        id: "generate".to_string(),
                        label: "Generate".to_string(),
                        description: None,
                        icon: None,
                        action: MenuAction::Invoke {
                            command: "generate:task".to_string(),
                            args: Default::default(),
                        },
                        shortcuts: Vec::new(),
                    }],
                    theme: None,
                },
            ],
            footer_hints: Vec::new(),
            metadata: None,
        }
    }

    #[test]
    fn resolves_by_id() {
        let sel = resolve_input(&menu(), "config").unwrap();
        assert!(matches!(
            sel,
            Selection::Action(MenuAction::Navigate { target }) if target == "config"
        ));
    }

    #[test]
    fn resolves_by_shortcut_and_case_insensitive() {
        let sel = resolve_input(&menu(), "  C ").unwrap();
        assert!(matches!(sel, Selection::Action(MenuAction::Navigate { .. })));
    }

    #[test]
    fn resolves_by_number_across_sections() {
        // Item 2 lives in the second section.
        let sel = resolve_input(&menu(), "2").unwrap();
        assert!(matches!(
            sel,
            Selection::Action(MenuAction::Invoke { command, .. }) if command == "generate:task"
        ));
    }

    #[test]
    fn keywords_take_precedence() {
        assert_eq!(resolve_input(&menu(), "quit"), Some(Selection::Quit));
        assert_eq!(resolve_input(&menu(), "exit"), Some(Selection::Quit));
        assert_eq!(resolve_input(&menu(), "help"), Some(Selection::Help));
        assert_eq!(resolve_input(&menu(), "back"), Some(Selection::Back));
    }

    #[test]
    fn back_ignored_when_menu_disallows_it() {
        let mut m = menu();
        m.metadata = Some(MenuMetadata {
            context_level: "main".to_string(),
            allow_back: false,
            skin_name: None,
        });
        assert_eq!(resolve_input(&m, "back"), None);
    }

    #[test]
    fn unknown_input_is_none() {
        assert_eq!(resolve_input(&menu(), "frobnicate"), None);
        assert_eq!(resolve_input(&menu(), "99"), None);
        assert_eq!(resolve_input(&menu(), "  "), None);
    }
}
