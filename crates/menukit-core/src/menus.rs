//! Stock menu set for the assistant shell. Registered at startup; skins
//! layered on top may override any of them by id.

use crate::definition::{
    MenuAction, MenuDefinition, MenuItem, MenuMetadata, MenuSection, SectionTheme,
};
use crate::error::Result;
use crate::registry::MenuRegistry;
use std::collections::HashMap;

pub const CORE_MENU_IDS: [&str; 5] = ["main", "config", "templates", "generate", "advanced"];

/// Register every core menu, with validation. Intended to run once at
/// process start.
pub fn register_core_menus(registry: &mut MenuRegistry) -> Result<()> {
    registry.register_menu_safe(main_menu())?;
    registry.register_menu_safe(config_menu())?;
    registry.register_menu_safe(templates_menu())?;
    registry.register_menu_safe(generate_menu())?;
    registry.register_menu_safe(advanced_menu())?;
    Ok(())
}

fn navigate(id: &str, label: &str, description: &str, target: &str) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        label: label.to_string(),
        description: Some(description.to_string()),
        icon: None,
        action: MenuAction::Navigate {
            target: target.to_string(),
        },
        shortcuts: Vec::new(),
    }
}

fn invoke(id: &str, label: &str, description: &str, command: &str) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        label: label.to_string(),
        description: Some(description.to_string()),
        icon: None,
        action: MenuAction::Invoke {
            command: command.to_string(),
            args: HashMap::new(),
        },
        shortcuts: Vec::new(),
    }
}

fn metadata(level: &str, allow_back: bool) -> Option<MenuMetadata> {
    Some(MenuMetadata {
        context_level: level.to_string(),
        allow_back,
        skin_name: None,
    })
}

fn main_menu() -> MenuDefinition {
    MenuDefinition {
        id: "main".to_string(),
        title: "Menukit • Workflow Orchestrator".to_string(),
        subtitle: Some("Drive coding workflows from a stable, skinnable shell".to_string()),
        sections: vec![MenuSection {
            id: "navigation".to_string(),
            heading: "Main Navigation".to_string(),
            description: None,
            items: vec![
                navigate(
                    "config",
                    "Configuration",
                    "Manage project settings and preferences",
                    "config",
                ),
                navigate(
                    "templates",
                    "Templates",
                    "Starter, enterprise, and performance configurations",
                    "templates",
                ),
                navigate(
                    "generate",
                    "Generate",
                    "AI-powered, test-driven code generation",
                    "generate",
                ),
                navigate(
                    "advanced",
                    "Advanced",
                    "Expert settings, metrics, logging",
                    "advanced",
                ),
            ],
            theme: Some(SectionTheme {
                heading_color: Some("red".to_string()),
                bold: true,
            }),
        }],
        footer_hints: vec![
            "Type a number or command name to navigate".to_string(),
            "Use \"help\" for a command reference".to_string(),
        ],
        metadata: metadata("main", false),
    }
}

fn config_menu() -> MenuDefinition {
    MenuDefinition {
        id: "config".to_string(),
        title: "Configuration Management".to_string(),
        subtitle: Some("Project settings and preferences".to_string()),
        sections: vec![MenuSection {
            id: "commands".to_string(),
            heading: "Configuration Commands".to_string(),
            description: None,
            items: vec![
                invoke("show", "show", "Display current configuration", "config:show"),
                invoke("edit", "edit", "Interactive configuration editor", "config:edit"),
                invoke(
                    "quality",
                    "quality",
                    "Quality gates and testing thresholds",
                    "config:quality",
                ),
                invoke(
                    "security",
                    "security",
                    "Security policies and guardrails",
                    "config:security",
                ),
            ],
            theme: Some(SectionTheme {
                heading_color: Some("yellow".to_string()),
                bold: true,
            }),
        }],
        footer_hints: vec!["Navigation: command name, number, \"back\" to return".to_string()],
        metadata: metadata("config", true),
    }
}

fn templates_menu() -> MenuDefinition {
    MenuDefinition {
        id: "templates".to_string(),
        title: "Template Management".to_string(),
        subtitle: Some("Browse, apply, and maintain configuration templates".to_string()),
        sections: vec![MenuSection {
            id: "commands".to_string(),
            heading: "Template Commands".to_string(),
            description: None,
            items: vec![
                invoke("list", "list", "Show all available templates", "templates:list"),
                invoke("use", "use", "Apply a template to the project", "templates:use"),
                invoke(
                    "preview",
                    "preview",
                    "Preview template settings before applying",
                    "templates:preview",
                ),
                invoke(
                    "reset",
                    "reset",
                    "Restore a template to its defaults",
                    "templates:reset",
                ),
            ],
            theme: Some(SectionTheme {
                heading_color: Some("yellow".to_string()),
                bold: true,
            }),
        }],
        footer_hints: vec!["Popular templates: starter, enterprise, performance".to_string()],
        metadata: metadata("templates", true),
    }
}

fn generate_menu() -> MenuDefinition {
    MenuDefinition {
        id: "generate".to_string(),
        title: "Code Generation".to_string(),
        subtitle: Some("Turn a task description into tested code".to_string()),
        sections: vec![MenuSection {
            id: "commands".to_string(),
            heading: "Generation Commands".to_string(),
            description: None,
            items: vec![
                invoke("task", "task", "General generation from a description", "generate:task"),
                invoke(
                    "component",
                    "component",
                    "UI components with tests and styling",
                    "generate:component",
                ),
                invoke("api", "api", "API endpoints with validation", "generate:api"),
                invoke("test", "test", "Test suites for existing code", "generate:test"),
            ],
            theme: Some(SectionTheme {
                heading_color: Some("magenta".to_string()),
                bold: true,
            }),
        }],
        footer_hints: vec!["Describe what you want to build in plain language".to_string()],
        metadata: metadata("generate", true),
    }
}

fn advanced_menu() -> MenuDefinition {
    MenuDefinition {
        id: "advanced".to_string(),
        title: "Advanced Settings".to_string(),
        subtitle: Some("Expert settings, debugging tools, and monitoring".to_string()),
        sections: vec![MenuSection {
            id: "settings".to_string(),
            heading: "Advanced Commands".to_string(),
            description: None,
            items: vec![
                invoke(
                    "agents",
                    "agents",
                    "Agent configuration and specialization",
                    "advanced:agents",
                ),
                invoke(
                    "logging",
                    "logging",
                    "Audit logging and session tracking",
                    "advanced:logging",
                ),
                invoke(
                    "metrics",
                    "metrics",
                    "Performance metrics and analytics",
                    "advanced:metrics",
                ),
                invoke("debug", "debug", "Debug mode and troubleshooting", "advanced:debug"),
            ],
            theme: Some(SectionTheme {
                heading_color: Some("cyan".to_string()),
                bold: true,
            }),
        }],
        footer_hints: Vec::new(),
        metadata: metadata("advanced", true),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
