use crate::definition::{MenuDefinition, MenuItem};
use crate::layout::{MenuLayoutManager, MenuLayoutPlan};

const SEPARATOR_WIDTH: usize = 60;

// ---------------------------------------------------------------------------
// LineWriter
// ---------------------------------------------------------------------------

/// Terminal collaborator seam. One call per logical display line, so partial
/// output stays visible even if rendering is interrupted.
pub trait LineWriter {
    fn write_line(&mut self, line: &str);

    /// Clear the frame before repainting. Optional; recorders ignore it.
    fn clear_screen(&mut self) {}
}

/// Writes each line to stdout.
#[derive(Debug, Default)]
pub struct StdoutWriter;

impl LineWriter for StdoutWriter {
    fn write_line(&mut self, line: &str) {
        println!("{line}");
    }

    fn clear_screen(&mut self) {
        use std::io::Write;
        print!("\x1b[2J\x1b[H");
        let _ = std::io::stdout().flush();
    }
}

impl LineWriter for Vec<String> {
    fn write_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

// ---------------------------------------------------------------------------
// MenuContext
// ---------------------------------------------------------------------------

/// Display context for one render. Only the navigation level matters here:
/// it decides whether the footer offers a "back" hint.
#[derive(Debug, Clone)]
pub struct MenuContext {
    pub level: String,
}

impl MenuContext {
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
        }
    }

    fn is_top_level(&self) -> bool {
        self.level == "main"
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

impl MenuLayoutManager {
    /// Render `menu` into the fixed frame described by `plan`.
    ///
    /// Content is emitted greedily and stops the moment the running line
    /// counter reaches `plan.content_lines` — items and headings past the
    /// cutoff are simply dropped. The footer (breathing room, separator,
    /// navigation hint, prompt rows) is emitted unconditionally so the
    /// input area always lands at `textbox_position()`.
    pub fn render_with_consistent_height(
        &self,
        menu: &MenuDefinition,
        plan: &MenuLayoutPlan,
        context: &MenuContext,
        writer: &mut dyn LineWriter,
    ) {
        if self.constraints().enforce_consistent_height {
            writer.clear_screen();
        }

        let emitted = self.render_constrained_content(menu, plan, writer);

        if plan.needs_truncation {
            writer.write_line("  ... more options available");
        }

        // Pad so the footer lands on a constant row.
        let shortfall = plan.content_lines.saturating_sub(emitted);
        for _ in 0..plan.padding_lines_needed + shortfall {
            writer.write_line("");
        }

        self.render_textbox_area(context, writer);
    }

    /// Emit content lines up to `plan.content_lines`; returns how many were
    /// written.
    fn render_constrained_content(
        &self,
        menu: &MenuDefinition,
        plan: &MenuLayoutPlan,
        writer: &mut dyn LineWriter,
    ) -> usize {
        let max = plan.content_lines;
        let mut emitted = 0;

        let mut emit = |writer: &mut dyn LineWriter, emitted: &mut usize, line: &str| -> bool {
            if *emitted >= max {
                return false;
            }
            writer.write_line(line);
            *emitted += 1;
            true
        };

        emit(writer, &mut emitted, &menu.title);
        emit(writer, &mut emitted, &"═".repeat(SEPARATOR_WIDTH));
        if let Some(subtitle) = &menu.subtitle {
            emit(writer, &mut emitted, subtitle);
        }
        emit(writer, &mut emitted, "");

        for section in &menu.sections {
            if emitted >= max {
                break;
            }
            emit(writer, &mut emitted, &section.heading);
            for item in &section.items {
                if !emit(writer, &mut emitted, &item_line(item)) {
                    break;
                }
            }
            if let Some(description) = &section.description {
                emit(writer, &mut emitted, &format!("  {description}"));
            }
            emit(writer, &mut emitted, "");
        }

        if !menu.footer_hints.is_empty() && emitted < max {
            emit(writer, &mut emitted, &"─".repeat(SEPARATOR_WIDTH));
            for hint in &menu.footer_hints {
                if !emit(writer, &mut emitted, &format!("* {hint}")) {
                    break;
                }
            }
        }

        emitted
    }

    /// The fixed footer: breathing room, separator, navigation hint, and
    /// blank rows for the command prompt.
    fn render_textbox_area(&self, context: &MenuContext, writer: &mut dyn LineWriter) {
        for _ in 0..self.constraints().padding_lines {
            writer.write_line("");
        }

        writer.write_line(&"─".repeat(SEPARATOR_WIDTH));
        writer.write_line(&navigation_hint(context));

        // Remaining textbox rows are left blank for the prompt itself.
        for _ in 0..self.constraints().command_textbox_lines.saturating_sub(2) {
            writer.write_line("");
        }
    }
}

fn item_line(item: &MenuItem) -> String {
    let icon = item.icon.as_deref().unwrap_or("");
    match &item.description {
        Some(description) => format!("{icon}  {} - {description}", item.label),
        None => format!("{icon}  {}", item.label),
    }
}

fn navigation_hint(context: &MenuContext) -> String {
    let mut hints = Vec::new();
    if !context.is_top_level() {
        hints.push("\"back\" to return");
    }
    hints.push("\"help\" for commands");
    hints.push("\"quit\" to exit");
    format!("💡 {}", hints.join(", "))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::{MenuAction, MenuItem, MenuSection};
    use crate::layout::MenuLayoutConstraints;

    fn menu_with(sections: usize, items_per_section: usize) -> MenuDefinition {
        MenuDefinition {
            id: "test".to_string(),
            title: "Test Menu".to_string(),
            subtitle: None,
            sections: (0..sections)
                .map(|s| MenuSection {
                    id: format!("s{s}"),
                    heading: format!("Section {s}"),
                    description: None,
                    items: (0..items_per_section)
                        .map(|i| MenuItem {
                            id: format!("s{s}i{i}"),
                            label: format!("Item {i}"),
                            description: Some("does a thing".to_string()),
                            icon: None,
                            action: MenuAction::Exit,
                            shortcuts: Vec::new(),
                        })
                        .collect(),
                    theme: None,
                })
                .collect(),
            footer_hints: Vec::new(),
            metadata: None,
        }
    }

    fn manager() -> MenuLayoutManager {
        MenuLayoutManager::new(MenuLayoutConstraints::default())
    }

    fn render(menu: &MenuDefinition, level: &str) -> Vec<String> {
        let mgr = manager();
        let plan = mgr.calculate_consistent_layout(menu);
        let mut lines: Vec<String> = Vec::new();
        mgr.render_with_consistent_height(menu, &plan, &MenuContext::new(level), &mut lines);
        lines
    }

    #[test]
    fn frame_is_exactly_fixed_height() {
        // 3 sections of 2 items, no subtitle, no footer hints, 25/3/2.
        let lines = render(&menu_with(3, 2), "main");
        assert_eq!(lines.len(), 25);
    }

    #[test]
    fn separator_row_lands_at_textbox_position() {
        let mgr = manager();
        let lines = render(&menu_with(3, 2), "main");
        // Breathing room sits above the footer separator.
        assert_eq!(lines[mgr.textbox_position()], "─".repeat(60));

        // A bigger menu must not move it.
        let lines = render(&menu_with(1, 9), "main");
        assert_eq!(lines[mgr.textbox_position()], "─".repeat(60));
    }

    #[test]
    fn truncated_menu_drops_tail_and_marks_it() {
        let lines = render(&menu_with(3, 7), "main");
        assert!(lines.iter().any(|l| l.contains("more options available")));
        // Content past the cutoff is dropped, not summarized.
        assert!(!lines.iter().any(|l| l.contains("Section 2")));
    }

    #[test]
    fn untruncated_menu_has_no_marker() {
        let lines = render(&menu_with(2, 2), "main");
        assert!(!lines.iter().any(|l| l.contains("more options available")));
    }

    #[test]
    fn back_hint_only_below_top_level() {
        let main = render(&menu_with(1, 1), "main");
        let hint = main.iter().find(|l| l.contains("\"quit\"")).unwrap();
        assert!(!hint.contains("\"back\""));

        let sub = render(&menu_with(1, 1), "config");
        let hint = sub.iter().find(|l| l.contains("\"quit\"")).unwrap();
        assert!(hint.contains("\"back\" to return"));
        assert!(hint.contains("\"help\" for commands"));
    }

    #[test]
    fn subtitle_and_hints_render_in_order() {
        let mut menu = menu_with(1, 1);
        menu.subtitle = Some("A helpful strapline".to_string());
        menu.footer_hints = vec!["Type a number to choose".to_string()];
        let lines = render(&menu, "main");

        assert_eq!(lines[0], "Test Menu");
        assert_eq!(lines[1], "═".repeat(60));
        assert_eq!(lines[2], "A helpful strapline");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "Section 0");
        assert!(lines.iter().any(|l| l == "* Type a number to choose"));
        // Hints still fit, so the full frame height holds.
        assert_eq!(lines.len(), 25);
    }

    #[test]
    fn item_line_includes_icon_and_description() {
        let mut menu = menu_with(1, 1);
        menu.sections[0].items[0].icon = Some("⚙".to_string());
        let lines = render(&menu, "main");
        assert!(lines.iter().any(|l| l == "⚙  Item 0 - does a thing"));
    }

    #[test]
    fn zero_content_budget_still_emits_footer() {
        let mgr = MenuLayoutManager::new(MenuLayoutConstraints {
            fixed_height: 4,
            command_textbox_lines: 3,
            padding_lines: 2,
            enforce_consistent_height: false,
        });
        let menu = menu_with(1, 1);
        let plan = mgr.calculate_consistent_layout(&menu);
        assert_eq!(plan.content_lines, 0);

        let mut lines: Vec<String> = Vec::new();
        mgr.render_with_consistent_height(&menu, &plan, &MenuContext::new("main"), &mut lines);
        // Marker + breathing room + separator + hint + prompt row.
        assert!(lines.iter().any(|l| l.contains("more options available")));
        assert!(lines.iter().any(|l| l.contains("\"quit\" to exit")));
    }
}
