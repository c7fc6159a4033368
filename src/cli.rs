use std::path::PathBuf;

use clap::builder::styling::AnsiColor;
use clap::builder::Styles;
use clap::Parser;

const fn extra_build_info() -> &'static str {
    match option_env!("CARGO_BUILD_DESC") {
        Some(e) => e,
        None => env!("CARGO_PKG_VERSION"),
    }
}
pub const VERSION: &str = extra_build_info();
const INFO_STRING: &str = "
🧬 dnaprof version ";
const AFTER_STRING: &str = "
   ──────────────────────────────────
   position-wise nucleotide frequency profiles and consensus
   calling for aligned DNA sequences";

// colouring of the help
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().bold())
    .usage(AnsiColor::BrightMagenta.on_default().bold())
    .literal(AnsiColor::BrightMagenta.on_default())
    .placeholder(AnsiColor::White.on_default());

/// The run configuration. Defaults reproduce the fixed file names of the
/// minimal tool; there is no other configuration mechanism.
#[derive(Parser)]
#[command(
    version = VERSION,
    about = format!("{}{}{}", INFO_STRING, VERSION, AFTER_STRING),
    styles = STYLES
)]
pub struct Cli {
    /// the input alignment: one sequence per line, `>` lines ignored
    #[arg(short, long, default_value = "DNAInput.txt")]
    pub input: PathBuf,

    /// the output report file
    #[arg(short, long, default_value = "DNAOutput.txt")]
    pub output: PathBuf,
}
