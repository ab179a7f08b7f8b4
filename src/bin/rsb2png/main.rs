//! rsb2png - convert a Red Storm Bitmap to PNG
//!
//! Decodes one RSB file completely, then writes `<input>.png` as 8-bit RGBA.
//! Nothing is written if decoding or encoding fails.

mod args;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use args::Args;
use clap::Parser;
use log::{debug, info};
use zenrsb::{DecodeOutput, RsbError, Unstoppable};

#[derive(Debug, thiserror::Error)]
enum ConvertError {
    #[error("cannot decode image: {0}")]
    Decode(#[from] RsbError),

    #[error("cannot encode PNG: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("cannot write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

fn setup_logger(args: &Args) {
    let level = args.log_level();
    if let Err(e) = simple_logger::init_with_level(level) {
        eprintln!("logger already initialized: {e}");
    }
    debug!("Log level: {level}");
}

/// Serialize RGBA8 pixels to an in-memory PNG.
fn encode_png(image: &DecodeOutput) -> Result<Vec<u8>, png::EncodingError> {
    let mut output = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut output, image.width, image.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(image.pixels())?;
        writer.finish()?;
    }
    Ok(output)
}

/// Write `bytes` to `path` through a sibling `.partial` file.
///
/// `path` only ever appears complete; on failure the partial file is removed.
fn write_whole(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut partial = path.as_os_str().to_owned();
    partial.push(".partial");
    let partial = PathBuf::from(partial);

    let result = fs::write(&partial, bytes).and_then(|()| fs::rename(&partial, path));
    if result.is_err() {
        let _ = fs::remove_file(&partial);
    }
    result
}

fn run(input: &Path, output: &Path) -> Result<(), ConvertError> {
    let start = Instant::now();
    let image = zenrsb::decode_file(input, Unstoppable)?;
    let elapsed = start.elapsed();

    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());
    println!("{name}: {} ({:.4} s)", image.header, elapsed.as_secs_f64());

    let png = encode_png(&image)?;
    write_whole(output, &png).map_err(|source| ConvertError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    info!("Wrote {} ({} bytes)", output.display(), png.len());
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logger(&args);

    match run(&args.input, &args.output_path()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("{e:?}");
            eprintln!("{}: {e}", args.input.display());
            ExitCode::FAILURE
        }
    }
}
