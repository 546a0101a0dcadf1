use std::path::PathBuf;

use clap::Parser;
use go_version_vars::config::Config;
use go_version_vars::fetcher::HttpFetcher;
use go_version_vars::logging;
use go_version_vars::pipeline::Pipeline;

#[derive(Parser)]
#[command(name = "go-version-vars")]
#[command(version, about = "Generate Ansible variables for the latest Go releases")]
struct Cli {
    /// JSON config file; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Download index page to scrape
    #[arg(long)]
    url: Option<String>,

    /// Path of the variables file to write
    #[arg(long)]
    output: Option<PathBuf>,

    /// Number of versions to keep
    #[arg(long)]
    max_versions: Option<usize>,

    /// Tarball platform suffix, e.g. linux-arm64
    #[arg(long)]
    platform: Option<String>,

    /// Print the variables to stdout instead of writing the file
    #[arg(long)]
    stdout: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(url) = self.url {
            config.index_url = url;
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }
        if let Some(max_versions) = self.max_versions {
            config.max_versions = max_versions;
        }
        if let Some(platform) = self.platform {
            config.platform = platform;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let to_stdout = cli.stdout;
    let config = cli.into_config()?;

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let pipeline = Pipeline::new(config, HttpFetcher::new()?);
            if to_stdout {
                print!("{}", pipeline.render().await?);
            } else {
                pipeline.run().await?;
            }
            Ok::<(), anyhow::Error>(())
        })
}
