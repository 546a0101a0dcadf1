use thiserror::Error;

use crate::config::ConfigError;
use crate::fetcher::FetchError;
use crate::render::RenderError;

/// Fatal errors that abort a run
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to fetch Go versions: {0}")]
    Fetch(#[from] FetchError),

    #[error("Failed to generate Ansible vars file: {0}")]
    Render(#[from] RenderError),
}
