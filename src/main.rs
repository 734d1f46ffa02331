use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use project_browser::api::{copy_project, ListingNode, ProjectClient};
use project_browser::config::{get_config_path, Config};
use project_browser::logic::errors::format_error_message;
use project_browser::logic::formatting::{parse_to_date_string, truncate_to_width};
use project_browser::logic::path::{index_all, to_path};
use project_browser::model::{BrowserModel, ProjectTree, UiModel};
use project_browser::utils::init_logging;
use project_browser::{DisplayAs, SortBy, SortDirection};

const NAME_WIDTH: usize = 40;

/// Project browser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the temp-dir debug log
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List a folder of a project listing export
    List {
        /// Listing export (JSON)
        listing: PathBuf,

        /// Folder path, e.g. "Bridges/2024"
        #[arg(short, long, default_value = "")]
        path: String,

        /// Sort key (default: from config)
        #[arg(short, long)]
        sort: Option<SortBy>,

        /// Sort descending
        #[arg(long)]
        desc: bool,

        /// Filter names (wildcards allowed)
        #[arg(long)]
        search: Option<String>,

        /// Render as rows or tiles (default: from config)
        #[arg(long)]
        display: Option<DisplayAs>,
    },

    /// Print every project id in a listing export with its location
    Index {
        /// Listing export (JSON)
        listing: PathBuf,
    },

    /// Duplicate a stored project
    Copy {
        /// Project id to copy
        id: String,
    },
}

fn load_tree(listing: &Path) -> Result<ProjectTree> {
    let raw = fs::read_to_string(listing)
        .with_context(|| format!("Failed to read listing {}", listing.display()))?;
    let listing: ListingNode = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid listing {}", listing.display()))?;
    Ok(ProjectTree::from_listing(listing))
}

/// Config is optional for offline commands; fall back to defaults
fn load_optional_config(cli_path: Option<&Path>) -> Result<Option<Config>> {
    match get_config_path(cli_path) {
        Ok(path) => {
            debug!("Loading config from: {:?}", path);
            Config::load(&path).map(Some)
        }
        Err(e) if cli_path.is_none() => {
            debug!("No config: {}", e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn list(
    config: Option<Config>,
    listing: &Path,
    path: &str,
    sort: Option<SortBy>,
    desc: bool,
    search: Option<String>,
    display: Option<DisplayAs>,
) -> Result<()> {
    let tree = load_tree(listing)?;

    let mut ui = match &config {
        Some(config) => UiModel::new(config.default_sort, config.display_as),
        None => UiModel::default(),
    };
    if let Some(sort) = sort {
        ui.sort_by = sort;
    }
    if desc {
        ui.sort_direction = SortDirection::Desc;
    }
    if let Some(display) = display {
        ui.set_display(display);
    }

    let mut model = BrowserModel::new(tree, ui);
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        model.enter(segment)?;
    }
    if let Some(query) = search {
        model.set_search_query(query);
    }

    println!(
        "{}  [{} {}]",
        model.navigation.breadcrumb(),
        model.ui.sort_by.as_str(),
        model.ui.sort_direction.as_str()
    );

    let rows = model.display_list()?;
    for (idx, id) in rows.iter().enumerate() {
        let node = model.tree.node(*id)?;
        let marker = if node.is_folder() { "/" } else { "" };
        let name = truncate_to_width(&format!("{}{}", node.name, marker), NAME_WIDTH);

        if model.ui.is_display(DisplayAs::Tiles) {
            print!("[{}] ", name);
            if (idx + 1) % 4 == 0 {
                println!();
            }
        } else {
            println!(
                "{:<width$}  {}",
                name,
                parse_to_date_string(node.modified.as_ref()),
                width = NAME_WIDTH
            );
        }
    }
    if model.ui.is_display(DisplayAs::Tiles) && rows.len() % 4 != 0 {
        println!();
    }

    Ok(())
}

fn index(listing: &Path) -> Result<()> {
    let tree = load_tree(listing)?;
    let mut entries: Vec<_> = index_all(&tree).into_iter().collect();
    entries.sort();

    for (id, node) in entries {
        let mut segments = vec![tree.node(node)?.name.clone()];
        let mut current = tree.parent(node);
        while let Some(parent) = current.filter(|p| *p != tree.root()) {
            segments.push(tree.node(parent)?.name.clone());
            current = tree.parent(parent);
        }
        segments.reverse();

        println!("{}\t{}", id, to_path(segments.as_slice()));
    }

    Ok(())
}

async fn copy(config: Config, id: &str) -> Result<()> {
    let client = ProjectClient::new(config.base_url, config.api_key);
    let created = copy_project(&client, id).await?;
    println!(
        "{}\t{}",
        created.id.as_deref().unwrap_or("-"),
        created.name
    );
    Ok(())
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Command::List {
            listing,
            path,
            sort,
            desc,
            search,
            display,
        } => {
            let config = load_optional_config(args.config.as_deref())?;
            list(config, &listing, &path, sort, desc, search, display)
        }
        Command::Index { listing } => index(&listing),
        Command::Copy { id } => {
            let config_path = get_config_path(args.config.as_deref())?;
            debug!("Loading config from: {:?}", config_path);
            let config = Config::load(&config_path)?;
            copy(config, &id).await
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.debug)?;
    debug!("Debug mode enabled");

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", format_error_message(&e));
        debug!("Full error: {:?}", e);
        std::process::exit(1);
    }

    Ok(())
}
