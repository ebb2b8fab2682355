use clap::Parser;
use deck::core::config::{self, CliOverrides};
use deck::core::deck::load_file;
use deck::tui::highlight::Highlighter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "deck", version, about = "Step through a JSON presentation of topics and slides")]
struct Args {
    /// Topics file to open on startup
    file: Option<PathBuf>,

    /// Syntax highlighting theme for examples
    #[arg(short, long)]
    theme: Option<String>,

    /// Validate FILE and print a summary instead of starting the viewer
    #[arg(long, requires = "file")]
    check: bool,

    /// List the available highlighting themes and exit
    #[arg(long)]
    list_themes: bool,

    /// Where to write the log (default: deck.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<ExitCode> {
    let args = Args::parse();

    if args.list_themes {
        for name in Highlighter::theme_names() {
            println!("{name}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    if args.check
        && let Some(path) = &args.file
    {
        return Ok(check(path));
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Ignoring config: {e}");
            config::DeckConfig::default()
        }
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            theme: args.theme.as_deref(),
            log_file: args.log_file.as_deref(),
        },
    );

    // Initialize file logger - the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("Deck starting up (theme: {})", resolved.theme);

    deck::tui::run(resolved, args.file)?;
    Ok(ExitCode::SUCCESS)
}

/// `--check`: load and validate without touching the terminal.
fn check(path: &Path) -> ExitCode {
    match load_file(path) {
        Ok(doc) => {
            println!("{}: {}", path.display(), doc.summary());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {}", path.display(), e);
            ExitCode::FAILURE
        }
    }
}
