//! Fetch → extract → render pipeline

use tracing::{info, warn};

use crate::config::Config;
use crate::error::Error;
use crate::fetcher::IndexFetcher;
use crate::render::{render_vars, write_vars};
use crate::version::VersionExtractor;

pub struct Pipeline<F: IndexFetcher> {
    config: Config,
    fetcher: F,
    extractor: VersionExtractor,
}

impl<F: IndexFetcher> Pipeline<F> {
    pub fn new(config: Config, fetcher: F) -> Self {
        let extractor = VersionExtractor::new(&config.platform);
        Self {
            config,
            fetcher,
            extractor,
        }
    }

    /// Fetch the index and return the newest versions, strictly descending
    pub async fn collect_versions(&self) -> Result<Vec<String>, Error> {
        let body = self.fetcher.fetch_index(&self.config.index_url).await?;
        let versions = self.extractor.extract(&body, self.config.max_versions);

        if versions.is_empty() {
            warn!(
                "No Go versions found at {} for platform {}",
                self.config.index_url, self.config.platform
            );
        } else {
            info!("Selected {} Go versions", versions.len());
        }

        Ok(versions)
    }

    /// Collect versions and render the variables file text
    pub async fn render(&self) -> Result<String, Error> {
        let versions = self.collect_versions().await?;
        Ok(render_vars(&versions, &self.config.layout())?)
    }

    /// Collect, render and write to the configured output path
    pub async fn run(&self) -> Result<(), Error> {
        let contents = self.render().await?;
        write_vars(&self.config.output_path, &contents)?;
        Ok(())
    }
}
