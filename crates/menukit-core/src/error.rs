use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("invalid menu definition: {0}")]
    InvalidDefinition(String),

    #[error("invalid skin: {0}")]
    InvalidSkin(String),

    #[error("menu not found: {0}")]
    MenuNotFound(String),

    #[error("unknown skins: {}", .0.join(", "))]
    InvalidSkinReference(Vec<String>),
}

pub type Result<T> = std::result::Result<T, MenuError>;
