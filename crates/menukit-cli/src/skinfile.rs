use anyhow::Context;
use menukit_core::definition::Skin;
use menukit_core::menus::register_core_menus;
use menukit_core::registry::MenuRegistry;
use std::path::Path;

/// Parse one skin YAML file.
pub fn load_skin_file(path: &Path) -> anyhow::Result<Skin> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read skin file {}", path.display()))?;
    let skin: Skin = serde_yaml::from_str(&data)
        .with_context(|| format!("failed to parse skin file {}", path.display()))?;
    Ok(skin)
}

/// Build a registry with the core menus plus the given skin files, loaded in
/// order — file order is activation order, so later files win resolution.
pub fn registry_with_skins(paths: &[impl AsRef<Path>]) -> anyhow::Result<MenuRegistry> {
    let mut registry = MenuRegistry::new();
    register_core_menus(&mut registry).context("failed to register core menus")?;

    for path in paths {
        let path = path.as_ref();
        let skin = load_skin_file(path)?;
        tracing::debug!(file = %path.display(), skin = %skin.metadata.name, "loading skin file");
        registry
            .load_skin(skin)
            .with_context(|| format!("failed to load skin from {}", path.display()))?;
    }

    Ok(registry)
}
