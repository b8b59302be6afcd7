use crate::output::print_json;
use crate::skinfile::registry_with_skins;
use anyhow::Context;
use menukit_core::layout::{ConstraintOverrides, MenuLayoutManager};
use menukit_core::render::{MenuContext, StdoutWriter};
use std::path::PathBuf;

pub struct Options {
    pub height: Option<usize>,
    pub textbox_lines: Option<usize>,
    pub padding: Option<usize>,
    pub no_clear: bool,
    pub plan: bool,
    pub json: bool,
}

pub fn run(skins: &[PathBuf], menu_id: &str, opts: Options) -> anyhow::Result<()> {
    let registry = registry_with_skins(skins)?;
    let menu = registry
        .get_menu(menu_id)
        .with_context(|| format!("cannot render '{menu_id}'"))?;

    let mut manager = MenuLayoutManager::default();
    manager.update_constraints(ConstraintOverrides {
        fixed_height: opts.height,
        command_textbox_lines: opts.textbox_lines,
        padding_lines: opts.padding,
        enforce_consistent_height: if opts.no_clear { Some(false) } else { None },
    });

    let plan = manager.calculate_consistent_layout(&menu);

    if opts.plan {
        if opts.json {
            return print_json(&plan);
        }
        println!("menu:            {}", menu.id);
        println!("total lines:     {}", plan.total_lines);
        println!("content lines:   {}", plan.content_lines);
        println!("textbox lines:   {}", plan.textbox_area_lines);
        println!("padding needed:  {}", plan.padding_lines_needed);
        println!("truncation:      {}", plan.needs_truncation);
        println!("textbox row:     {}", manager.textbox_position());
        return Ok(());
    }

    let level = menu
        .metadata
        .as_ref()
        .map(|m| m.context_level.clone())
        .unwrap_or_else(|| menu.id.clone());
    let context = MenuContext::new(level);

    manager.render_with_consistent_height(&menu, &plan, &context, &mut StdoutWriter);
    Ok(())
}
