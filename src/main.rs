//! tate CLI - render vertical Japanese text as SVG

use clap::{Parser, Subcommand};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use tate::catalog::{self, CatalogConfig, FontCatalog};
use tate::{Color, RenderOptions, Result};

/// Lay out Japanese text vertically and render it as SVG
#[derive(Parser, Debug)]
#[command(name = "tate")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug output (RUST_LOG overrides)
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render text as a vertical SVG
    #[command(alias = "r")]
    Render(RenderArgs),

    /// List font families from the catalog
    Fonts(FontsArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Text to render (reads from stdin if omitted)
    text: Option<String>,

    /// Font size in px
    #[arg(short = 's', long = "font-size", default_value_t = 48.0)]
    font_size: f64,

    /// Text color, #RGB or #RRGGBB
    #[arg(short = 'c', long = "color", default_value = "#000000")]
    color: String,

    /// Web font family, e.g. "Noto Sans JP"
    #[arg(short = 'f', long = "font")]
    font_family: Option<String>,

    /// Saved catalog response used to pick a default family when --font is
    /// not given
    #[arg(long = "catalog")]
    catalog: Option<PathBuf>,

    /// Output file (stdout if omitted; with --export, defaults to the
    /// generated file name)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Trim the SVG to its content and embed the font stylesheet
    #[arg(long = "export", conflicts_with = "json")]
    export: bool,

    /// Print the layout as JSON instead of SVG
    #[arg(long = "json")]
    json: bool,
}

#[derive(Parser, Debug)]
struct FontsArgs {
    /// Saved catalog response (the built-in list is used if omitted or
    /// unreadable)
    #[arg(long = "catalog")]
    catalog: Option<PathBuf>,

    /// Print the catalog request URL instead of listing families
    #[arg(long = "url")]
    url: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let result = match cli.command {
        Commands::Render(args) => run_render(args),
        Commands::Fonts(args) => run_fonts(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Initialize logging based on verbosity flag.
fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Catalog from a saved response, or the built-in list
fn load_catalog(path: Option<&Path>) -> FontCatalog {
    match path {
        Some(p) => FontCatalog::load_or_fallback(catalog::read_catalog_file(p)),
        None => FontCatalog::fallback(),
    }
}

fn run_render(args: RenderArgs) -> Result<()> {
    let text = match args.text {
        Some(t) => t.replace("\\n", "\n"),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let text = text.trim_end_matches(&['\r', '\n'][..]).to_string();

    let font_family = match args.font_family {
        Some(f) => Some(f),
        None if args.catalog.is_some() => load_catalog(args.catalog.as_deref())
            .default_family()
            .map(str::to_string),
        None => None,
    };

    let options = RenderOptions {
        font_size: args.font_size,
        color: Color::parse(&args.color)?,
        font_family,
        ..Default::default()
    };
    options.validate()?;

    if args.json {
        let result = tate::layout_text(&text, &options);
        let json = serde_json::to_string_pretty(&result)?;
        return write_output(args.output.as_deref(), &json);
    }

    if args.export {
        let exported = tate::export_svg(&text, &options)?;
        let path = args
            .output
            .unwrap_or_else(|| PathBuf::from(&exported.file_name));
        std::fs::write(&path, &exported.svg)?;
        log::info!("wrote {}", path.display());
        println!("{}", path.display());
        return Ok(());
    }

    let svg = tate::render_to_svg(&text, &options);
    write_output(args.output.as_deref(), &svg)
}

fn run_fonts(args: FontsArgs) -> Result<()> {
    if args.url {
        println!("{}", catalog::request_url(&CatalogConfig::from_env()));
        return Ok(());
    }

    let catalog = load_catalog(args.catalog.as_deref());
    let default = catalog.default_family();
    for family in catalog.families() {
        if Some(family) == default {
            println!("{} (default)", family);
        } else {
            println!("{}", family);
        }
    }
    Ok(())
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(p) => {
            std::fs::write(p, content)?;
            log::info!("wrote {}", p.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
