//! `decor` - inspect resolved window decoration themes.
//!
//! Loads a theme the same way a window manager would and prints what every
//! attribute resolved to, including the values that came from fallbacks.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use console::{style, Style};
use decor_theme::{
    Geometry, LoadOptions, NodeCensus, SearchPaths, Theme, ThemeLoader, DEFAULT_THEME,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Inspect resolved window decoration themes
#[derive(Parser)]
#[command(name = "decor", version)]
#[command(about = "Resolve an Openbox-style theme and print the result")]
struct Cli {
    /// Extra directory of themes, searched before all others
    #[arg(long, global = true, value_name = "DIR")]
    theme_dir: Option<PathBuf>,

    /// Fail instead of falling back to the default theme
    #[arg(long, global = true)]
    no_fallback: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the fully resolved theme
    Show(ShowArgs),

    /// Print every named color with a terminal swatch
    Colors(ThemeArg),

    /// Print how many distinct nodes the theme shares, and its geometry
    Census(ThemeArg),
}

#[derive(Args)]
struct ThemeArg {
    /// Theme name or absolute path (defaults to the fallback theme)
    name: Option<String>,
}

#[derive(Args)]
struct ShowArgs {
    #[command(flatten)]
    theme: ThemeArg,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Yaml)]
    format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Yaml,
    Json,
}

#[derive(Serialize)]
struct CensusReport<'a> {
    theme: &'a str,
    census: NodeCensus,
    nodes: usize,
    geometry: &'a Geometry,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn loader(cli: &Cli) -> ThemeLoader {
    let mut search = SearchPaths::from_env();
    if let Some(dir) = &cli.theme_dir {
        search = search.with_theme_dir(dir);
    }
    ThemeLoader::new(
        LoadOptions::default()
            .search_paths(search)
            .allow_fallback(!cli.no_fallback),
    )
}

fn load(cli: &Cli, arg: &ThemeArg) -> Result<Theme> {
    let name = arg.name.as_deref();
    let theme = loader(cli)
        .load(name)
        .with_context(|| format!("failed to load theme '{}'", name.unwrap_or(DEFAULT_THEME)))?;
    debug!(theme = theme.name(), path = ?theme.path(), "theme loaded");
    Ok(theme)
}

fn show(theme: &Theme, format: Format, out: &mut impl Write) -> Result<()> {
    match format {
        Format::Yaml => {
            let text = serde_yaml::to_string(theme).context("failed to encode YAML")?;
            write!(out, "{text}")?;
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, theme).context("failed to encode JSON")?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn colors(theme: &Theme, out: &mut impl Write) -> Result<()> {
    let label = Style::new().bold();
    for (id, color) in theme.colors().iter() {
        writeln!(
            out,
            "{:<40} {} {}",
            label.apply_to(id.to_string()),
            color.to_hex(),
            style("    ").bg(color.to_console()),
        )?;
    }
    Ok(())
}

fn census(theme: &Theme, out: &mut impl Write) -> Result<()> {
    let census = theme.census();
    let report = CensusReport {
        theme: theme.name(),
        census,
        nodes: census.nodes(),
        geometry: theme.geometry(),
    };
    let text = serde_yaml::to_string(&report).context("failed to encode YAML")?;
    write!(out, "{text}")?;
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Commands::Show(args) => show(&load(cli, &args.theme)?, args.format, &mut out),
        Commands::Colors(arg) => colors(&load(cli, arg)?, &mut out),
        Commands::Census(arg) => census(&load(cli, arg)?, &mut out),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", Style::new().red().bold().apply_to("error:"), err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::collections::HashMap;

    fn theme() -> Theme {
        let mut config = HashMap::new();
        config.insert("window.active.border.color".to_string(), "#336699".to_string());
        decor_theme::ThemeBuilder::new("cli", &config).build().unwrap()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from([
            "decor", "show", "Onyx", "--format", "json", "--no-fallback", "--theme-dir", "/t",
        ])
        .unwrap();
        assert!(cli.no_fallback);
        assert_eq!(cli.theme_dir, Some(PathBuf::from("/t")));
        match cli.command {
            Commands::Show(args) => {
                assert_eq!(args.theme.name.as_deref(), Some("Onyx"));
                assert_eq!(args.format, Format::Json);
            }
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn test_show_json() {
        let mut buf = Vec::new();
        show(&theme(), Format::Json, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["colors"]["menu_border"], "#336699");
    }

    #[test]
    fn test_colors_lists_every_color() {
        let t = theme();
        let mut buf = Vec::new();
        colors(&t, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), t.colors().len());
        assert!(text.contains("#336699"));
    }

    #[test]
    fn test_census_report() {
        let mut buf = Vec::new();
        census(&theme(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("theme: cli"));
        assert!(text.contains("grip_width: 25"));
    }

    #[test]
    fn test_missing_theme_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let theme_dir = dir.path().to_string_lossy().into_owned();
        let cli = Cli::try_parse_from([
            "decor",
            "--no-fallback",
            "--theme-dir",
            theme_dir.as_str(),
            "census",
            "Missing",
        ])
        .unwrap();
        let Commands::Census(arg) = &cli.command else {
            panic!("expected census");
        };
        let err = load(&cli, arg).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.starts_with("failed to load theme 'Missing'"));
        assert!(msg.contains("unable to load the theme 'Missing'"));
        assert!(msg.contains(&theme_dir));
    }

    #[test]
    fn test_load_from_theme_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let themerc = dir.path().join("Onyx").join("openbox-3");
        std::fs::create_dir_all(&themerc).unwrap();
        std::fs::write(themerc.join("themerc"), "border.width: 3\n").unwrap();
        let theme_dir = dir.path().to_string_lossy().into_owned();
        let cli = Cli::try_parse_from(["decor", "--theme-dir", theme_dir.as_str(), "census", "Onyx"])
            .unwrap();
        let Commands::Census(arg) = &cli.command else {
            panic!("expected census");
        };
        let theme = load(&cli, arg).unwrap();
        assert_eq!(theme.name(), "Onyx");
        assert_eq!(theme.dim(decor_theme::Dim::FrameBorderWidth), 3);
    }
}
