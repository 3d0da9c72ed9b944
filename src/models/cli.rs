use clap::Parser;

#[derive(clap::Parser, Debug)]
#[command(about = "Download every image referenced by a single web page")]
pub struct Cli {
    /// Page to scan. Prompts interactively when omitted.
    #[arg(short, long)]
    pub url: Option<String>,

    /// Directory the images are written to
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Pause after each image, in milliseconds
    #[arg(short, long)]
    pub delay_ms: Option<u64>,

    #[arg(short, long, default_value = "page-images")]
    pub config_file: String,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self::new()
    }
}
