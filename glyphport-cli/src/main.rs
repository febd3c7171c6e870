//! `glyphport` CLI — export glyphs from font files as SVG or PNG, or
//! export the font file itself.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::Parser;

use glyphport_core::{
    export_font_file_to, export_glyph_to, ExportOptions, ExportSink, ExportStyle, FileNaming,
    OutputFormat,
};
use glyphport_fonts::FontData;

#[derive(Parser)]
#[command(version, about = "Glyphport \u{2014} glyph and font file exporter")]
struct Cli {
    /// Font file to read (.ttf, .otf)
    font: PathBuf,

    /// Character to export
    #[arg(short, long = "char", required_unless_present = "font_file")]
    character: Option<char>,

    /// Output format: "svg" or "png"
    #[arg(short, long, default_value = "svg", value_parser = parse_format)]
    format: OutputFormat,

    /// Fill style: "black", "white" or "color"
    #[arg(short, long, default_value = "black", value_parser = parse_style)]
    style: ExportStyle,

    /// Pixel size vector geometry is prepared at
    #[arg(long, default_value_t = 1024.0)]
    size: f64,

    /// Square canvas dimension for PNG output
    #[arg(long, default_value_t = 1024)]
    canvas: u32,

    /// Output directory for exported files
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Export the font file itself instead of a glyph
    #[arg(long)]
    font_file: bool,

    /// Font file naming: "family" (family + style) or "source"
    /// (original file name)
    #[arg(long, default_value = "family", value_parser = parse_naming)]
    naming: FileNaming,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    match s.to_lowercase().as_str() {
        "svg" => Ok(OutputFormat::Svg),
        "png" => Ok(OutputFormat::Png),
        _ => Err(format!("unknown format \"{s}\": expected \"svg\" or \"png\"")),
    }
}

fn parse_style(s: &str) -> Result<ExportStyle, String> {
    match s.to_lowercase().as_str() {
        "black" => Ok(ExportStyle::Black),
        "white" => Ok(ExportStyle::White),
        "color" => Ok(ExportStyle::ColorGlyph),
        _ => Err(format!(
            "unknown style \"{s}\": expected \"black\", \"white\" or \"color\""
        )),
    }
}

fn parse_naming(s: &str) -> Result<FileNaming, String> {
    match s.to_lowercase().as_str() {
        "family" => Ok(FileNaming::FamilyStyle),
        "source" => Ok(FileNaming::Source),
        _ => Err(format!(
            "unknown naming scheme \"{s}\": expected \"family\" or \"source\""
        )),
    }
}

/// Sink that writes artifacts into a directory on disk.
struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    const fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl ExportSink for DirSink {
    fn write_text(&mut self, name: &str, contents: &str) -> std::io::Result<()> {
        fs::write(self.dir.join(name), contents)
    }

    fn write_bytes(&mut self, name: &str, contents: &[u8]) -> std::io::Result<()> {
        fs::write(self.dir.join(name), contents)
    }
}

fn load_font(path: &Path) -> Result<FontData, String> {
    let bytes = fs::read(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    FontData::from_bytes(Arc::from(bytes.into_boxed_slice()))
        .map_err(|e| format!("cannot load {}: {e}", path.display()))
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let font = match load_font(&cli.font) {
        Ok(font) => font,
        Err(msg) => {
            eprintln!("Error: {msg}");
            process::exit(1);
        }
    };

    let mut sink = DirSink::new(cli.output.clone());

    let outcome = if cli.font_file {
        export_font_file_to(&mut sink, &font, Some(&cli.font), cli.naming)
    } else {
        let Some(ch) = cli.character else {
            eprintln!("Error: --char is required unless --font-file is given");
            process::exit(1);
        };
        let options = ExportOptions {
            font_size: cli.size,
            canvas_size: cli.canvas,
            style: cli.style,
        };
        export_glyph_to(&mut sink, &font, ch, &options, cli.format)
    };

    match outcome {
        Ok(outcome) => {
            eprintln!("Wrote {}", cli.output.join(outcome.file_name).display());
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
