use clap::{Parser, Subcommand};
use grammar_deck::commands::*;
use grammar_deck::core::{command_init::ViewerOptions, error::Result, print_error};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grammar-deck")]
#[command(about = "A terminal flashcard viewer for Japanese grammar points")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Grammar point JSON file
    #[arg(long, global = true, value_name = "PATH")]
    data: Option<PathBuf>,

    /// File holding the last viewed position
    #[arg(long, global = true, value_name = "PATH")]
    state_file: Option<PathBuf>,

    /// Horizontal distance a swipe must exceed, in pixels
    #[arg(long, global = true, value_name = "PIXELS")]
    swipe_threshold: Option<f64>,

    /// Vertical distance that turns a gesture into a scroll, in pixels
    #[arg(long, global = true, value_name = "PIXELS")]
    scroll_threshold: Option<f64>,

    /// Seed for example selection, for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current grammar point
    Show,
    /// Move to the next grammar point (wraps around)
    Next,
    /// Move to the previous grammar point (wraps around)
    Prev,
    /// Jump to a grammar point by its 1-based number
    Jump {
        /// Grammar point number (e.g., "12")
        #[arg(allow_hyphen_values = true)]
        number: String,
    },
    /// Read viewer commands from stdin, one per line
    Session,
}

impl Cli {
    fn viewer_options(&self) -> ViewerOptions {
        ViewerOptions {
            config: self.config.clone(),
            data: self.data.clone(),
            state_file: self.state_file.clone(),
            swipe_threshold: self.swipe_threshold,
            scroll_threshold: self.scroll_threshold,
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let options = cli.viewer_options();
    let result = match &cli.command {
        Commands::Show => execute_show(&options),
        Commands::Next => execute_next(&options),
        Commands::Prev => execute_prev(&options),
        Commands::Jump { number } => execute_jump(&options, number),
        Commands::Session => execute_session(&options),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }

    Ok(())
}
