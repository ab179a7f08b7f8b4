//! Command-line argument definitions

use clap::Parser;
use log::Level;
use std::path::PathBuf;

/// Convert a Red Storm Bitmap (.rsb) file to PNG.
///
/// The output is written next to the input as `<input>.png`.
#[derive(Parser, Debug)]
#[command(name = "rsb2png", version, about)]
pub struct Args {
    /// Input RSB file
    pub input: PathBuf,

    /// Log decoder details
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::Debug
        } else if self.quiet {
            Level::Error
        } else {
            Level::Warn
        }
    }

    /// `<input>.png`, keeping the original extension.
    pub fn output_path(&self) -> PathBuf {
        let mut path = self.input.clone().into_os_string();
        path.push(".png");
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_appends_png_suffix() {
        let args = Args::parse_from(["rsb2png", "textures/wall.rsb"]);
        assert_eq!(args.output_path(), PathBuf::from("textures/wall.rsb.png"));
        assert_eq!(args.log_level(), Level::Warn);
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Args::try_parse_from(["rsb2png", "-v", "-q", "a.rsb"]).is_err());
        assert!(Args::try_parse_from(["rsb2png"]).is_err());
        assert!(Args::try_parse_from(["rsb2png", "a.rsb", "b.rsb"]).is_err());
    }
}
