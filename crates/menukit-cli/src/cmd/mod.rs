pub mod menus;
pub mod render;
pub mod session;
pub mod skins;
pub mod validate;
