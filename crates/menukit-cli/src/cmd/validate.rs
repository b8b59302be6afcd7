use crate::output::print_json;
use anyhow::Context;
use menukit_core::definition::{validate_definition, MenuDefinition, Skin};
use menukit_core::registry::MenuRegistry;
use std::path::Path;

/// Validate a YAML file holding either a skin (metadata + menus) or a single
/// menu definition. Exits non-zero with the structural error on failure.
pub fn run(file: &Path, json: bool) -> anyhow::Result<()> {
    let data = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    let (kind, checked) = if let Ok(skin) = serde_yaml::from_str::<Skin>(&data) {
        let count = skin.menus.len();
        // Load into a scratch registry so skin-level checks run too.
        let mut scratch = MenuRegistry::new();
        for menu in skin.menus.values() {
            validate_definition(menu)?;
        }
        scratch.load_skin(skin)?;
        ("skin", count)
    } else {
        let menu: MenuDefinition = serde_yaml::from_str(&data)
            .with_context(|| format!("{} is neither a skin nor a menu definition", file.display()))?;
        validate_definition(&menu)?;
        ("menu", 1)
    };

    if json {
        #[derive(serde::Serialize)]
        struct ValidateOutput<'a> {
            file: String,
            kind: &'a str,
            menus_checked: usize,
            valid: bool,
        }
        return print_json(&ValidateOutput {
            file: file.display().to_string(),
            kind,
            menus_checked: checked,
            valid: true,
        });
    }

    println!("{}: valid {kind} ({checked} menu(s))", file.display());
    Ok(())
}
