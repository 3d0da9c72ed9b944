use anyhow::Context;
use env_logger::{Builder, Env, Target};
use log::error;
use page_image_fetcher::configuration::{normalize_target_url, FetchConfig, Settings};
use page_image_fetcher::models::Cli;
use page_image_fetcher::{prompt, run};
use std::io;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Init logging
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.target(Target::Stdout);
    builder.init();

    // Parse Args
    let cli = Cli::new();

    // Parse Settings
    let settings = match Settings::new(&cli.config_file) {
        Ok(s) => s,
        Err(e) => {
            error!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    let config = match fetch_config(cli, settings) {
        Ok(c) => c,
        Err(e) => {
            error!("{:#}", e);
            process::exit(1);
        }
    };

    // Run
    if let Err(e) = run(&config).await {
        error!("Application error: {}", e);
        process::exit(1);
    }
}

/// Flags win over settings. Without `--url` the URL and output directory are
/// asked for on stdin.
fn fetch_config(cli: Cli, mut settings: Settings) -> anyhow::Result<FetchConfig> {
    if let Some(delay_ms) = cli.delay_ms {
        settings.delay_ms = delay_ms;
    }

    let (target_url, output_dir) = match cli.url {
        Some(url) => (
            normalize_target_url(&url)?,
            cli.output_dir.unwrap_or_else(|| settings.output_directory.clone()),
        ),
        None => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            let url = prompt::ask_target_url(&mut input, &mut output)
                .context("Unable to read URL")?;
            // Bail before asking anything else
            let url = normalize_target_url(&url)?;
            let dir = match cli.output_dir {
                Some(dir) => dir,
                None => prompt::ask_output_directory(
                    &mut input,
                    &mut output,
                    &settings.output_directory,
                )
                .context("Unable to read output directory")?,
            };
            (url, dir)
        }
    };

    Ok(FetchConfig::new(target_url, &output_dir, &settings))
}
