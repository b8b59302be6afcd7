use crate::skinfile::registry_with_skins;
use anyhow::Context;
use menukit_core::definition::{MenuAction, MenuDefinition};
use menukit_core::dispatch::{resolve_input, Selection};
use menukit_core::layout::{ConstraintOverrides, MenuLayoutManager};
use menukit_core::render::{MenuContext, StdoutWriter};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Interactive loop: render the current menu, read a line, dispatch it.
/// Navigation follows `navigate` actions and keeps a back stack; `invoke`
/// actions are printed as JSON descriptors for the surrounding tooling to
/// execute.
pub fn run(skins: &[PathBuf], start: &str, no_clear: bool) -> anyhow::Result<()> {
    let registry = registry_with_skins(skins)?;

    let mut manager = MenuLayoutManager::default();
    if no_clear {
        manager.update_constraints(ConstraintOverrides {
            enforce_consistent_height: Some(false),
            ..Default::default()
        });
    }

    let mut current = registry
        .get_menu(start)
        .with_context(|| format!("cannot start session at '{start}'"))?;
    let mut stack: Vec<String> = Vec::new();

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        render_menu(&manager, &current);

        print!("menukit> ");
        std::io::stdout().flush()?;

        let input = match lines.next() {
            Some(line) => line?,
            None => break, // stdin closed
        };

        match resolve_input(&current, &input) {
            Some(Selection::Action(MenuAction::Navigate { target })) => {
                match registry.get_menu(&target) {
                    Ok(next) => {
                        stack.push(current.id.clone());
                        current = next;
                    }
                    Err(e) => println!("{e}"),
                }
            }
            Some(Selection::Action(action @ MenuAction::Invoke { .. })) => {
                println!("{}", serde_json::to_string(&action)?);
            }
            Some(Selection::Action(MenuAction::Exit)) | Some(Selection::Quit) => break,
            Some(Selection::Back) => {
                if let Some(prev) = stack.pop() {
                    // A menu on the stack can only disappear if a skin was
                    // the source; fall back to staying put.
                    match registry.get_menu(&prev) {
                        Ok(menu) => current = menu,
                        Err(e) => println!("{e}"),
                    }
                }
            }
            Some(Selection::Help) => show_help(&current),
            None => println!("Unrecognized command: {}", input.trim()),
        }
    }

    Ok(())
}

fn render_menu(manager: &MenuLayoutManager, menu: &MenuDefinition) {
    let plan = manager.calculate_consistent_layout(menu);
    let level = menu
        .metadata
        .as_ref()
        .map(|m| m.context_level.clone())
        .unwrap_or_else(|| menu.id.clone());
    manager.render_with_consistent_height(menu, &plan, &MenuContext::new(level), &mut StdoutWriter);
}

fn show_help(menu: &MenuDefinition) {
    for item in menu.items() {
        let description = item.description.as_deref().unwrap_or("");
        println!("  {:<12} - {description}", item.id);
    }
}
