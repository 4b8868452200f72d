use clap::Parser;
use std::path::PathBuf;

use iconset::{DEFAULT_PREFIX, DEFAULT_SIZES, TargetSize};

#[derive(Parser, Debug)]
#[command(name = "iconset", version, about = "Generate Lanczos-resampled icon sizes from one image")]
pub struct CliArgs {
    /// Source image [default: icon512.png]
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory the icons are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// File name prefix; outputs are named <prefix><W>.png or <prefix><W>x<H>.png
    #[arg(long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Comma-separated target sizes, each `N` (square) or `WxH`
    #[arg(short, long, value_delimiter = ',', default_values_t = DEFAULT_SIZES.to_vec())]
    pub sizes: Vec<TargetSize>,

    /// JSON resize plan ({"input": ..., "outputs": [{"size": {...}, "path": ...}]})
    #[arg(short, long, conflicts_with_all = ["output_dir", "prefix", "sizes"])]
    pub config: Option<PathBuf>,

    /// Print a JSON report of the written icons to stdout
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
