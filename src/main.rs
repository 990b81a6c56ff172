//! bookmark-launcher: open categorized bookmarks from the terminal

use anyhow::{Context, Result};
use bookmark_launcher::config::{self, Settings};
use bookmark_launcher::launcher::SystemOpener;
use bookmark_launcher::store::{BookmarkPatch, BookmarkStore, LoadStatus};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};

mod commands;

#[derive(Parser)]
#[command(name = "bookmark-launcher")]
#[command(about = "Open, add, remove and search categorized bookmarks", long_about = None)]
#[command(version)]
struct Cli {
    /// Bookmarks file (default: bookmarks.json next to the executable)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Settings file (default: config.json in the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log what the store is doing
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show bookmarks in two columns of categories
    List {
        /// Only show this category
        category: Option<String>,

        /// One table with a category column
        #[arg(long)]
        flat: bool,
    },

    /// Show category names with bookmark counts
    Categories,

    /// Find bookmarks whose name contains QUERY (case-insensitive)
    Search {
        query: String,
    },

    /// Open a bookmark in the browser
    Open {
        /// Bookmark name (case-insensitive; a unique partial name also works)
        name: String,

        /// Look only in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Print the URL instead of opening it
        #[arg(short, long)]
        print: bool,
    },

    /// Add a bookmark, replacing one with the same name in the category
    Add {
        category: String,
        name: String,
        url: String,

        /// Icon path or reference
        #[arg(long)]
        icon: Option<String>,
    },

    /// Remove a bookmark
    Remove {
        category: String,
        name: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Change the name, URL or icon of a bookmark
    Update {
        category: String,

        /// Current bookmark name
        name: String,

        /// New name
        #[arg(long = "name")]
        new_name: Option<String>,

        /// New URL
        #[arg(long)]
        url: Option<String>,

        /// New icon (pass an empty string to clear it)
        #[arg(long)]
        icon: Option<String>,
    },

    /// Write the bundled default bookmarks to the bookmarks file
    Init {
        /// Overwrite an existing bookmarks file
        #[arg(long)]
        force: bool,
    },

    /// Show the bookmarks and settings file locations
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let settings_path = match cli.config {
        Some(path) => path,
        None => config::settings_path().context("Failed to determine settings location")?,
    };
    let settings = Settings::load_or_create(&settings_path);
    let bookmarks_path = settings
        .bookmarks_path(cli.file.as_deref())
        .context("Failed to determine bookmarks file location")?;

    match cli.command {
        Commands::Init { force } => {
            println!("{}", commands::init::execute(&bookmarks_path, force)?);
        }

        Commands::Path => {
            println!("Bookmarks: {}", bookmarks_path.display());
            println!("Settings:  {}", settings_path.display());
        }

        Commands::List { category, flat } => {
            let store = open_store(&bookmarks_path, &settings);
            let options = commands::list::ListOptions { category, flat };
            println!("{}", commands::list::execute(&store, &options)?);
        }

        Commands::Categories => {
            let store = open_store(&bookmarks_path, &settings);
            println!("{}", commands::categories::execute(&store));
        }

        Commands::Search { query } => {
            let store = open_store(&bookmarks_path, &settings);
            println!("{}", commands::search::execute(&store, &query));
        }

        Commands::Open {
            name,
            category,
            print,
        } => {
            let store = open_store(&bookmarks_path, &settings);
            let opener = SystemOpener::new(settings.browser.clone());
            let output =
                commands::open::execute(&store, &opener, &name, category.as_deref(), print)?;
            println!("{}", output);
        }

        Commands::Add {
            category,
            name,
            url,
            icon,
        } => {
            mutate(&bookmarks_path, &settings, |store| {
                commands::add::execute(store, &category, &name, &url, icon.as_deref())
            })?;
        }

        Commands::Remove {
            category,
            name,
            yes,
        } => {
            let skip_prompt = yes || !settings.confirm_remove;
            mutate(&bookmarks_path, &settings, |store| {
                commands::remove::execute(
                    store,
                    &category,
                    &name,
                    skip_prompt,
                    commands::utils::confirm,
                )
            })?;
        }

        Commands::Update {
            category,
            name,
            new_name,
            url,
            icon,
        } => {
            let patch = BookmarkPatch {
                name: new_name,
                url,
                icon,
            };
            mutate(&bookmarks_path, &settings, |store| {
                commands::update::execute(store, &category, &name, patch)
            })?;
        }
    }

    Ok(())
}

/// Run a mutating command, then redraw the categories it touched
fn mutate<F>(path: &Path, settings: &Settings, command: F) -> Result<()>
where
    F: FnOnce(&mut BookmarkStore) -> Result<String>,
{
    let mut store = open_store(path, settings);
    let feed = commands::changes::ChangeFeed::attach(&mut store);

    println!("{}", command(&mut store)?);

    let changes = feed.render(&store);
    if !changes.is_empty() {
        println!("\n{}", changes);
    }
    Ok(())
}

/// Load the store, warning on stderr when the file had to be abandoned
fn open_store(path: &Path, settings: &Settings) -> BookmarkStore {
    let (store, status) = BookmarkStore::load(path, settings.fallback());
    if let LoadStatus::Recovered(e) = &status {
        eprintln!("{} {}", "Warning:".yellow(), e);
        eprintln!(
            "Starting with no bookmarks; the old file is kept as {}.bak",
            path.display()
        );
    }
    store
}
