use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mbtype-web")]
#[command(
    author,
    version,
    about = "MBTI type prediction over submitted posts"
)]
pub struct Cli {
    /// Listen port
    #[arg(short, long, default_value = "3000")]
    pub port: u16,

    /// Listen address
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Directory containing the four axis model artifacts
    #[arg(short, long, default_value = "./models")]
    pub models_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
