use thiserror::Error;

#[derive(Error, Debug)]
pub enum WinWlanError {
    #[error("netsh reported an error: {0}")]
    ExternalTool(String),

    #[error("No wireless interface reported by netsh")]
    NoInterface,

    #[error("Failed to render profile XML: {0}")]
    Template(#[from] tera::Error),

    #[error("Profile file error: {0}")]
    Io(#[from] std::io::Error),
}
