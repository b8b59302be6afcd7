use crate::output::print_json;
use crate::skinfile::registry_with_skins;
use std::path::PathBuf;

pub fn run(skins: &[PathBuf], json: bool) -> anyhow::Result<()> {
    let registry = registry_with_skins(skins)?;
    let mut ids = registry.available_menu_ids();
    ids.sort();

    if json {
        return print_json(&ids);
    }

    for id in ids {
        println!("{id}");
    }
    Ok(())
}
