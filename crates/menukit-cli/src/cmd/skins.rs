use crate::output::{print_json, print_skin_list};
use crate::skinfile::registry_with_skins;
use std::path::PathBuf;

pub fn run(skins: &[PathBuf], priority: Option<&[String]>, json: bool) -> anyhow::Result<()> {
    let mut registry = registry_with_skins(skins)?;

    if let Some(names) = priority {
        registry.set_skin_priority(names)?;
    }

    let active = registry.active_skins();

    if json {
        return print_json(&active);
    }

    if active.is_empty() {
        println!("No skins loaded.");
        return Ok(());
    }

    print_skin_list(&active);
    Ok(())
}
