use crate::definition::{validate_definition, MenuDefinition, MenuMetadata, Skin, SkinInfo};
use crate::error::{MenuError, Result};
use std::collections::{HashMap, HashSet};

// ---------------------------------------------------------------------------
// MenuRegistry
// ---------------------------------------------------------------------------

/// Single source of truth for menu definitions, with skin-based override
/// resolution.
///
/// Core menus and loaded skins are owned exclusively by the registry. All
/// mutation goes through `&mut self`, so a registry shared across threads
/// must be wrapped in a `std::sync::Mutex` by the host — `set_skin_priority`
/// in particular is a read-validate-replace sequence that must not
/// interleave.
#[derive(Debug, Default)]
pub struct MenuRegistry {
    menus: HashMap<String, MenuDefinition>,
    skins: HashMap<String, Skin>,
    /// Activation order. Resolution scans from the end backwards, so the
    /// most recently activated skin has the highest priority.
    active: Vec<String>,
}

impl MenuRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a core menu. Only the id is checked here; an existing menu
    /// with the same id is silently overwritten (last registration wins).
    pub fn register_menu(&mut self, menu: MenuDefinition) -> Result<()> {
        if menu.id.trim().is_empty() {
            return Err(MenuError::InvalidDefinition(
                "menu definition must have an id".to_string(),
            ));
        }
        self.menus.insert(menu.id.clone(), menu);
        Ok(())
    }

    /// Register a core menu after full structural validation. The registry
    /// is left unchanged when validation fails.
    pub fn register_menu_safe(&mut self, menu: MenuDefinition) -> Result<()> {
        validate_definition(&menu)?;
        self.register_menu(menu)
    }

    /// Load and activate a skin. Re-loading a skin with the same name
    /// replaces its definition but keeps its position in the active order.
    pub fn load_skin(&mut self, skin: Skin) -> Result<()> {
        let name = skin.metadata.name.clone();
        if name.trim().is_empty() {
            return Err(MenuError::InvalidSkin(
                "skin must have metadata with a name".to_string(),
            ));
        }

        tracing::debug!(skin = %name, menus = skin.menus.len(), "loading skin");
        self.skins.insert(name.clone(), skin);
        if !self.active.contains(&name) {
            self.active.push(name);
        }
        Ok(())
    }

    /// Unload a skin and drop it from the active order. Returns whether
    /// anything was removed; idempotent.
    pub fn unload_skin(&mut self, name: &str) -> bool {
        let removed = self.skins.remove(name).is_some();
        self.active.retain(|id| id != name);
        if removed {
            tracing::debug!(skin = %name, "unloaded skin");
        }
        removed
    }

    /// Resolve the effective definition for `id`.
    ///
    /// Active skins are scanned from most-recently-activated to least; the
    /// first one defining `id` wins, and its override fully replaces any
    /// core menu (no section merging). Skin overrides come back with
    /// metadata re-stamped; core menus come back as registered.
    pub fn get_menu(&self, id: &str) -> Result<MenuDefinition> {
        for skin_name in self.active.iter().rev() {
            let skin = match self.skins.get(skin_name) {
                Some(s) => s,
                None => continue,
            };
            if let Some(menu) = skin.menus.get(id) {
                return Ok(stamp_metadata(menu.clone(), skin_name));
            }
        }

        self.menus
            .get(id)
            .cloned()
            .ok_or_else(|| MenuError::MenuNotFound(id.to_string()))
    }

    /// Replace the active order wholesale. Fails atomically with every
    /// unknown name enumerated; the prior order is untouched on failure.
    pub fn set_skin_priority(&mut self, names: &[String]) -> Result<()> {
        let unknown: Vec<String> = names
            .iter()
            .filter(|n| !self.skins.contains_key(n.as_str()))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return Err(MenuError::InvalidSkinReference(unknown));
        }

        self.active = names.to_vec();
        Ok(())
    }

    /// Union of core menu ids and ids defined by any active skin, each id
    /// once, order insignificant.
    pub fn available_menu_ids(&self) -> Vec<String> {
        let mut ids: HashSet<&str> = self.menus.keys().map(String::as_str).collect();
        for skin_name in &self.active {
            if let Some(skin) = self.skins.get(skin_name) {
                ids.extend(skin.menus.keys().map(String::as_str));
            }
        }
        ids.into_iter().map(str::to_string).collect()
    }

    /// Active skins in activation order, for introspection.
    pub fn active_skins(&self) -> Vec<SkinInfo> {
        self.active
            .iter()
            .filter_map(|name| self.skins.get(name))
            .map(|skin| SkinInfo {
                name: skin.metadata.name.clone(),
                display_name: skin.metadata.display_name.clone(),
                version: skin.metadata.version.clone(),
            })
            .collect()
    }

    /// Reset all three stores. Intended for test isolation.
    pub fn clear(&mut self) {
        self.menus.clear();
        self.skins.clear();
        self.active.clear();
    }
}

/// Non-destructive metadata stamp applied to skin overrides at resolution
/// time: context level defaults to the menu's own id, back navigation
/// defaults to allowed, and the overriding skin is recorded.
fn stamp_metadata(mut menu: MenuDefinition, skin_name: &str) -> MenuDefinition {
    let metadata = match menu.metadata.take() {
        Some(mut meta) => {
            if meta.context_level.trim().is_empty() {
                meta.context_level = menu.id.clone();
            }
            meta.skin_name = Some(skin_name.to_string());
            meta
        }
        None => MenuMetadata {
            context_level: menu.id.clone(),
            allow_back: true,
            skin_name: Some(skin_name.to_string()),
        },
    };
    menu.metadata = Some(metadata);
    menu
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
