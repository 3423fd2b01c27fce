use clap::Parser;
use std::path::PathBuf;

use alphamerge::{AlphaSource, BitDepth, ResampleFilter};

#[derive(Parser, Debug)]
#[command(
    name = "alphamerge",
    version,
    about = "Merge the RGB of one PNG with the alpha of another on a 2048x2048 canvas"
)]
pub struct CliArgs {
    /// Background PNG; its alpha becomes the output alpha
    pub background: PathBuf,

    /// Foreground PNG; its red, green and blue become the output color
    pub foreground: PathBuf,

    /// Output PNG path (missing parent directories are created)
    pub output: PathBuf,

    /// Resampling filter (bicubic or lanczos3)
    #[arg(long, value_enum)]
    pub filter: Option<ResampleFilter>,

    /// Where output alpha comes from (alpha or luma of the background)
    #[arg(long, value_enum)]
    pub alpha_source: Option<AlphaSource>,

    /// Output bit depth (u8 or u16)
    #[arg(long, value_enum)]
    pub bit_depth: Option<BitDepth>,

    /// Composite pixels on the rayon thread pool
    #[arg(long, default_value_t = false)]
    pub parallel: bool,

    /// JSON parameters file; options given on the command line override it.
    /// The canvas is always 2048x2048 and PNGs use maximum compression.
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
