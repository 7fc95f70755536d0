use serde::Serialize;
use std::io::{Read, Write};
use std::str::FromStr;
use std::sync::Once;
use strand::render::raster::{self, RasterError, RasterOptions};
use strand::render::{Color, Palette, Scene, SvgRenderOptions, render, render_svg};
use strand::{Chain, Sequence, ValidationError, build_chain};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Validation(ValidationError),
    Palette(String),
    Raster(RasterError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Validation(err) => write!(f, "{err}"),
            CliError::Palette(msg) => write!(f, "palette error: {msg}"),
            CliError::Raster(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ValidationError> for CliError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RasterError> for CliError {
    fn from(value: RasterError) -> Self {
        Self::Raster(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    Generate,
    Scene,
    #[default]
    Render,
}

#[derive(Debug, Clone, Copy, Default)]
enum RenderFormat {
    #[default]
    Svg,
    Png,
    Jpeg,
    Pdf,
}

impl FromStr for RenderFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "pdf" => Ok(Self::Pdf),
            _ => Err(()),
        }
    }
}

impl RenderFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Pdf => "pdf",
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    sequence: Option<String>,
    input_path: Option<String>,
    pretty: bool,
    width: u32,
    height: u32,
    render_format: RenderFormat,
    render_scale: f32,
    palette_path: Option<String>,
    foreground: Option<Color>,
    background: Option<Color>,
    polygon_fill: Option<Color>,
    svg_id: Option<String>,
    include_label: bool,
    out: Option<String>,
}

#[derive(Serialize)]
struct GenerateOut<'a> {
    sequence: &'a Sequence,
    seed: u32,
    chain: &'a Chain,
}

const DEFAULT_SEQUENCE: &str = strand::render::Studio::DEFAULT_SEQUENCE;
const DEFAULT_OUT_STEM: &str = "generative_art";

fn usage() -> &'static str {
    "strand-cli\n\
\n\
USAGE:\n\
  strand-cli generate [--pretty] [--width <w>] [--height <h>] [--input <path>] [<sequence>|-]\n\
  strand-cli scene [--pretty] [PALETTE] [--width <w>] [--height <h>] [--input <path>] [<sequence>|-]\n\
  strand-cli [render] [--format svg|png|jpg|pdf] [--scale <n>] [PALETTE] [--width <w>] [--height <h>] [--id <svg-id>] [--no-label] [--out <path>|-] [--input <path>] [<sequence>|-]\n\
\n\
PALETTE:\n\
  [--palette <file.json>] [--foreground <hex>] [--background <hex>] [--polygon-fill <hex>]\n\
\n\
NOTES:\n\
  - <sequence> must contain only letters a-z (uppercase is lowercased).\n\
  - If <sequence> is '-', it is read from stdin; --input reads it from a file.\n\
  - Without a sequence, the default 'aiwertunoaapmoa' is used.\n\
  - The surface defaults to 800x600.\n\
  - render prints SVG to stdout by default; use --out to write a file.\n\
  - PNG/JPG/PDF output defaults to ./generative_art.<ext>; '--out -' writes to stdout.\n\
  - Set STRAND_LOG (e.g. STRAND_LOG=debug) to enable diagnostics on stderr.\n\
"
}

fn parse_color(raw: &str) -> Result<Color, CliError> {
    raw.parse::<Color>()
        .map_err(|err| CliError::Palette(err.to_string()))
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args {
        command: Command::Render,
        width: 800,
        height: 600,
        render_format: RenderFormat::Svg,
        render_scale: 1.0,
        include_label: true,
        ..Default::default()
    };

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "generate" => args.command = Command::Generate,
            "scene" => args.command = Command::Scene,
            "render" => args.command = Command::Render,
            "--pretty" => args.pretty = true,
            "--no-label" => args.include_label = false,
            "--format" => {
                let Some(fmt) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.render_format = fmt
                    .parse::<RenderFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--scale" => {
                let Some(scale) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.render_scale = scale.parse::<f32>().map_err(|_| CliError::Usage(usage()))?;
                if !(args.render_scale.is_finite() && args.render_scale > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
            }
            "--width" | "--height" => {
                let Some(v) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                let v = v.parse::<u32>().map_err(|_| CliError::Usage(usage()))?;
                if v == 0 {
                    return Err(CliError::Usage(usage()));
                }
                if a == "--width" {
                    args.width = v;
                } else {
                    args.height = v;
                }
            }
            "--palette" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.palette_path = Some(path.clone());
            }
            "--foreground" | "--background" | "--polygon-fill" => {
                let Some(raw) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                let color = parse_color(raw)?;
                match a.as_str() {
                    "--foreground" => args.foreground = Some(color),
                    "--background" => args.background = Some(color),
                    _ => args.polygon_fill = Some(color),
                }
            }
            "--id" => {
                let Some(id) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.svg_id = Some(id.clone());
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--input" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.input_path = Some(path.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.sequence.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.sequence = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" => {
                if args.sequence.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.sequence = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            text => {
                if args.sequence.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.sequence = Some(text.to_string());
            }
        }
    }

    if args.sequence.is_some() && args.input_path.is_some() {
        return Err(CliError::Usage(usage()));
    }

    Ok(args)
}

/// Resolves the sequence text. File and stdin input are trimmed so a trailing newline is not
/// reported as an invalid character.
fn read_sequence(args: &Args) -> Result<String, CliError> {
    if let Some(path) = args.input_path.as_deref() {
        return Ok(std::fs::read_to_string(path)?.trim().to_string());
    }
    match args.sequence.as_deref() {
        None => Ok(DEFAULT_SEQUENCE.to_string()),
        Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf.trim().to_string())
        }
        Some(text) => Ok(text.to_string()),
    }
}

fn resolve_palette(args: &Args) -> Result<Palette, CliError> {
    let mut palette = match args.palette_path.as_deref() {
        None => Palette::default(),
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            serde_json::from_str::<Palette>(&text)
                .map_err(|err| CliError::Palette(format!("{path}: {err}")))?
        }
    };
    if let Some(c) = args.foreground {
        palette.foreground = c;
    }
    if let Some(c) = args.background {
        palette.background = c;
    }
    if let Some(c) = args.polygon_fill {
        palette.polygon_fill = c;
    }
    Ok(palette)
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut stdout, value)?;
    } else {
        serde_json::to_writer(&mut stdout, value)?;
    }
    writeln!(stdout)?;
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None | Some("-") => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn write_bytes(bytes: &[u8], out: Option<&str>, format: RenderFormat) -> Result<(), CliError> {
    match out {
        Some("-") => {
            std::io::stdout().lock().write_all(bytes)?;
        }
        Some(path) => std::fs::write(path, bytes)?,
        None => {
            let path = format!("{DEFAULT_OUT_STEM}.{}", format.extension());
            std::fs::write(&path, bytes)?;
            tracing::info!(%path, "wrote image");
        }
    }
    Ok(())
}

fn build_scene(sequence: &Sequence, args: &Args, palette: &Palette) -> Scene {
    let chain = build_chain(sequence, args.width, args.height);
    render(&chain, sequence, palette)
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_sequence(&args)?;
    let sequence = Sequence::parse(&text)?;
    tracing::debug!(%sequence, seed = sequence.seed(), "validated sequence");

    match args.command {
        Command::Generate => {
            let chain = build_chain(&sequence, args.width, args.height);
            let out = GenerateOut {
                sequence: &sequence,
                seed: sequence.seed(),
                chain: &chain,
            };
            write_json(&out, args.pretty)
        }
        Command::Scene => {
            let palette = resolve_palette(&args)?;
            write_json(&build_scene(&sequence, &args, &palette), args.pretty)
        }
        Command::Render => {
            let palette = resolve_palette(&args)?;
            let scene = build_scene(&sequence, &args, &palette);
            let svg_options = SvgRenderOptions {
                svg_id: args.svg_id.clone(),
                include_label: args.include_label,
            };
            let raster_options = RasterOptions {
                scale: args.render_scale,
                ..RasterOptions::default()
            }
            .with_background(palette.background);

            match args.render_format {
                RenderFormat::Svg => write_text(&render_svg(&scene, &svg_options), args.out.as_deref()),
                RenderFormat::Png => {
                    let bytes = raster::render_png(&scene, &svg_options, &raster_options)?;
                    write_bytes(&bytes, args.out.as_deref(), args.render_format)
                }
                RenderFormat::Jpeg => {
                    let bytes = raster::render_jpeg(&scene, &svg_options, &raster_options)?;
                    write_bytes(&bytes, args.out.as_deref(), args.render_format)
                }
                RenderFormat::Pdf => {
                    let bytes = raster::render_pdf(&scene, &svg_options)?;
                    write_bytes(&bytes, args.out.as_deref(), args.render_format)
                }
            }
        }
    }
}

/// Installs the stderr subscriber. `STRAND_LOG` takes an `EnvFilter` directive; default `warn`.
fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("STRAND_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .try_init();
    });
}

fn main() {
    init_tracing();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(err @ CliError::Validation(_)) => {
            eprintln!("{err}");
            std::process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
