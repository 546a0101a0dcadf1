//! Ansible variables rendering
//!
//! Formatting is pure and kept apart from writing so the layout can be
//! tested without touching the filesystem. The `{{ ... }}` placeholders are
//! Jinja expressions for Ansible and are emitted verbatim.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::config::{DEFAULT_DOWNLOAD_BASE_URL, DEFAULT_PLATFORM};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("No Go versions to render")]
    NoVersions,

    #[error("Failed to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Layout parameters for the variables file
#[derive(Debug, Clone, PartialEq)]
pub struct VarsLayout {
    pub platform: String,
    pub download_base_url: String,
}

impl Default for VarsLayout {
    fn default() -> Self {
        Self {
            platform: DEFAULT_PLATFORM.to_string(),
            download_base_url: DEFAULT_DOWNLOAD_BASE_URL.to_string(),
        }
    }
}

/// Render the variables file. The first version becomes the target.
pub fn render_vars(versions: &[String], layout: &VarsLayout) -> Result<String, RenderError> {
    let Some(target) = versions.first() else {
        return Err(RenderError::NoVersions);
    };

    let mut out = String::from("go_versions:\n");
    for version in versions {
        out.push_str(&format!("  - \"{}\"\n", version));
    }
    out.push_str(&format!("go_version_target: \"{}\"\n", target));
    out.push_str(&format!(
        "go_tarball: \"{{{{ go_version_target }}}}.{}.tar.gz\"\n",
        layout.platform
    ));
    out.push_str(&format!(
        "go_download_location: \"{}{{{{ go_tarball }}}}\"\n",
        layout.download_base_url
    ));

    Ok(out)
}

/// Write rendered text to `path`, replacing any existing file
pub fn write_vars(path: &Path, contents: &str) -> Result<(), RenderError> {
    std::fs::write(path, contents).map_err(|source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote {} bytes to {:?}", contents.len(), path);
    Ok(())
}
