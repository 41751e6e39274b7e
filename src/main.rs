use clap::Parser;
use lira::core::book::Book;
use lira::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lira", about = "Read interactive lessons in the terminal")]
struct Args {
    /// Book file (TOML lesson tree) to open
    book: Option<PathBuf>,

    /// Syntax highlighting theme for code blocks
    #[arg(short, long)]
    theme: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}, using defaults");
            config::LiraConfig::default()
        }
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            book: args.book,
            theme: args.theme,
        },
    );

    // Initialize file logger - writes to lira.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("lira.log") {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("Lira starting up (theme: {})", resolved.syntax_theme);

    let book = match &resolved.book {
        Some(path) => match Book::load(path) {
            Ok(book) => book,
            Err(e) => {
                log::error!("Failed to load {}: {}", path.display(), e);
                eprintln!("Failed to load {}: {e}", path.display());
                return Err(std::io::Error::other(e));
            }
        },
        None => Book::default(),
    };

    lira::tui::run(resolved, book)
}
