//! recore CLI: Command-line interface for the storefront TUI

use clap::{Parser, Subcommand};
use recore_core::{
    sample_articles, sample_categories, Config, IconMode, Theme, ARTICLES_TITLE, CATEGORIES_TITLE,
    NAV_LINKS,
};
use recore_tui::Page;
use std::path::{Path, PathBuf};

/// Storefront demo with a terminal UI
#[derive(Parser)]
#[command(name = "recore")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Theme to start with (light or dark), overriding config
    #[arg(long, global = true)]
    theme: Option<Theme>,

    /// Use ASCII-only icons, overriding config
    #[arg(long, global = true)]
    ascii: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the TUI on the home page (default when no command specified)
    Tui,

    /// Open the TUI on the login page
    Login,

    /// Print the navigation links
    Links {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the mock catalog
    Catalog {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Initialize .recore/ directory and config
    Init,
}

const RECORE_DIR: &str = ".recore";

fn config_path() -> PathBuf {
    Path::new(RECORE_DIR).join("config.json")
}

/// Load config from disk (if present) and apply CLI overrides.
fn resolve_config(cli: &Cli) -> Config {
    let path = config_path();
    let mut config = if path.exists() {
        match Config::load(&path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Warning: ignoring bad config at {}: {e}", path.display());
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    if let Some(theme) = cli.theme {
        config.initial_theme = theme;
    }
    if cli.ascii {
        config.icon_mode = IconMode::Ascii;
    }

    config
}

fn main() {
    let cli = Cli::parse();
    let config = resolve_config(&cli);

    match cli.command {
        None | Some(Commands::Tui) => {
            launch_tui(&config, Page::Home);
        }
        Some(Commands::Login) => {
            launch_tui(&config, Page::Login);
        }
        Some(Commands::Links { json }) => {
            cmd_links(json);
        }
        Some(Commands::Catalog { json }) => {
            cmd_catalog(json);
        }
        Some(Commands::Init) => {
            cmd_init(&config);
        }
    }
}

fn launch_tui(config: &Config, page: Page) {
    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    if let Err(e) = rt.block_on(recore_tui::run_tui(config, page)) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_links(json: bool) {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&NAV_LINKS).expect("failed to serialize")
        );
        return;
    }

    println!("Navigation links\n");
    for link in NAV_LINKS {
        println!("  {:<16} {}", link.label, link.target);
    }
}

fn cmd_catalog(json: bool) {
    let categories = sample_categories();
    let articles = sample_articles();

    if json {
        let output = serde_json::json!({
            "categories": categories,
            "articles": articles,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("failed to serialize")
        );
        return;
    }

    println!("{CATEGORIES_TITLE}\n");
    for category in &categories {
        println!("  {:<24} {}", category.name, category.info);
    }

    println!("\n{ARTICLES_TITLE}\n");
    for article in &articles {
        println!("  {:<24} {}", article.name, article.info);
    }
}

fn cmd_init(config: &Config) {
    let path = config_path();

    if path.exists() {
        println!("Config already exists at {}", path.display());
        return;
    }

    match config.save(&path) {
        Ok(()) => {
            println!("Created {}", path.display());
            println!("Initial theme: {}", config.initial_theme);
        }
        Err(e) => {
            eprintln!("Failed to write config: {e}");
            std::process::exit(1);
        }
    }
}
