//! Product catalog loading.
//!
//! Aladdin describes its products with two JSON files in the data folder:
//! `products.json`, a flat array of `"<product>_<release>"` strings, and
//! `productsMenu.json`, a tree of `{ "name", "children" }` groups whose leaves
//! are indices (as strings) into the flat array.

use crate::config::AladdinConfig;
use crate::document::ConfigDocument;
use crate::error::{Error, Result};
use crate::model::ProductCatalogEntry;
use camino::Utf8Path;
use rayon::prelude::*;
use serde::Deserialize;

/// A node of the product menu.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MenuItem {
    /// Index into the flat product list.
    Product(String),
    Group {
        name: String,
        #[serde(default)]
        children: Vec<MenuItem>,
    },
    /// Bare list of items; inherits the enclosing group's name.
    List(Vec<MenuItem>),
}

impl MenuItem {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|source| Error::Json {
            context: "product menu".to_string(),
            source,
        })
    }
}

/// Walk the menu depth-first and pair every leaf with its flat-list entry.
///
/// Any leaf that does not name a valid `"<product>_<release>"` entry aborts
/// the whole walk.
pub fn catalog_entries(menu: &MenuItem, products: &[String]) -> Result<Vec<ProductCatalogEntry>> {
    let mut entries = Vec::new();
    collect_entries(menu, "", products, &mut entries)?;
    Ok(entries)
}

fn collect_entries(
    item: &MenuItem,
    current_name: &str,
    products: &[String],
    out: &mut Vec<ProductCatalogEntry>,
) -> Result<()> {
    match item {
        MenuItem::Product(index) => out.push(entry_for(index, current_name, products)?),
        MenuItem::Group { name, children } => {
            for child in children {
                collect_entries(child, name, products, out)?;
            }
        }
        MenuItem::List(items) => {
            for child in items {
                collect_entries(child, current_name, products, out)?;
            }
        }
    }
    Ok(())
}

fn entry_for(index: &str, menu_name: &str, products: &[String]) -> Result<ProductCatalogEntry> {
    let name_and_release = index
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|i| products.get(i))
        .ok_or_else(|| {
            Error::malformed_catalog(format!(
                "could not find index {} in product list of length {}",
                index,
                products.len()
            ))
        })?;
    let (product_name, release_number) = name_and_release
        .split_once('_')
        .filter(|(product, release)| !product.is_empty() && !release.is_empty())
        .ok_or_else(|| {
            Error::malformed_catalog(format!(
                "product entry '{}' is not of the form <product>_<release>",
                name_and_release
            ))
        })?;
    Ok(ProductCatalogEntry {
        menu_product_name: menu_name.to_string(),
        product_name: product_name.to_string(),
        release_number: release_number.to_string(),
    })
}

impl ProductCatalogEntry {
    pub fn load(&self, config: &AladdinConfig) -> Result<ConfigDocument> {
        ConfigDocument::load(
            config,
            &self.product_name,
            &self.release_number,
            &self.menu_product_name,
        )
    }
}

/// Load the configuration document of every catalog entry, in menu order.
/// Documents are loaded in parallel; the first failure aborts the catalog.
pub fn load_catalog(
    config: &AladdinConfig,
    menu: &MenuItem,
    products: &[String],
) -> Result<Vec<ConfigDocument>> {
    let entries = catalog_entries(menu, products)?;
    entries.par_iter().map(|e| e.load(config)).collect()
}

/// Read `products.json` and `productsMenu.json` from the data folder.
pub fn read_catalog_files(config: &AladdinConfig) -> Result<(MenuItem, Vec<String>)> {
    let products: Vec<String> = read_json(&config.products_path())?;
    let menu: MenuItem = read_json(&config.products_menu_path())?;
    Ok((menu, products))
}

/// Catalog entries of the data folder.
pub fn catalog_entries_from_data_folder(
    config: &AladdinConfig,
) -> Result<Vec<ProductCatalogEntry>> {
    let (menu, products) = read_catalog_files(config)?;
    catalog_entries(&menu, &products)
}

/// Configuration documents for every product of the data folder's catalog.
pub fn load_catalog_from_data_folder(config: &AladdinConfig) -> Result<Vec<ConfigDocument>> {
    let (menu, products) = read_catalog_files(config)?;
    load_catalog(config, &menu, &products)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Utf8Path) -> Result<T> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    serde_json::from_str(&text).map_err(|source| Error::Json {
        context: path.to_string(),
        source,
    })
}
