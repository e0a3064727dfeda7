use aladdin_auto::catalog::catalog_entries_from_data_folder;
use aladdin_auto::pages::PageNode;
use aladdin_auto::{
    AladdinConfig, ConfigDocument, NavigationPlan, resolve, top_level_pages, user_top_level_pages,
};
use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Inspect Aladdin product configuration XML: pages, parameters and catalog"
)]
struct Cli {
    /// Configuration file (TOML). Defaults to aladdin_config.toml found under the working directory
    #[arg(long, value_name = "FILE")]
    config: Option<Utf8PathBuf>,

    /// Aladdin data folder, overrides the configuration file
    #[arg(long, value_name = "DIR")]
    data_folder: Option<Utf8PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the top-level pages of a product release
    Pages {
        product: String,
        release: String,
        /// Only pages visible at the USER protection level
        #[arg(long)]
        user: bool,
        /// Print the full page tree below each top-level page
        #[arg(long)]
        tree: bool,
    },
    /// Resolve a parameter by code and print it as JSON
    Param {
        product: String,
        release: String,
        code: String,
    },
    /// List every product of the catalog as JSON
    Catalog,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AladdinConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration {}", path))?,
        None => AladdinConfig::discover(".").context("Failed to discover configuration")?,
    };
    if let Some(dir) = cli.data_folder {
        config.data_folder_path = dir;
    }

    match cli.command {
        Command::Pages {
            product,
            release,
            user,
            tree,
        } => {
            let doc = load(&config, &product, &release)?;
            let pages = if user {
                user_top_level_pages(&doc)
            } else {
                top_level_pages(&doc)
            };
            println!("{} {} ({} pages)", doc.product_name, doc.release_label(), pages.len());
            for page in &pages {
                print_page_tree(page, "", tree);
            }
        }
        Command::Param {
            product,
            release,
            code,
        } => {
            let doc = load(&config, &product, &release)?;
            let param = resolve(&doc, &code)?;
            let plan = NavigationPlan::for_parameter(&param).ok();
            let out = serde_json::json!({ "parameter": param, "navigation": plan });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Command::Catalog => {
            let entries = catalog_entries_from_data_folder(&config)
                .with_context(|| format!("Failed to read catalog in {}", config.data_folder_path))?;
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }
    Ok(())
}

fn load(config: &AladdinConfig, product: &str, release: &str) -> Result<ConfigDocument> {
    ConfigDocument::load(config, product, release, product)
        .with_context(|| format!("Failed to load {}_{}", product, release))
}

fn print_page_tree(page: &PageNode<'_>, prefix: &str, recurse: bool) {
    let title = page.title().unwrap_or("<untitled>");
    match page.protection() {
        Some(p) if !p.is_user() => println!("{}{} [{}]", prefix, title, p),
        _ => println!("{}{}", prefix, title),
    }
    if recurse {
        let child_prefix = format!("{}  ", prefix);
        for child in page.children() {
            print_page_tree(&child, &child_prefix, true);
        }
    }
}
