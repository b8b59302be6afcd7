pub mod definition;
pub mod dispatch;
pub mod error;
pub mod layout;
pub mod menus;
pub mod registry;
pub mod render;

pub use error::{MenuError, Result};
