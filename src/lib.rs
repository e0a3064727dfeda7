//! Aladdin configuration XML model.
//!
//! This crate loads the per-product configuration documents of an Aladdin
//! data folder and answers the questions a UI-automation harness asks of them:
//! which parameters exist, how their types and codes are normalized, which
//! chain of pages leads to a parameter, and how many top-level sections the
//! product page renders.
//!
//! The binary `aladdin-auto` exposes the same queries on the command line.

pub mod catalog;
pub mod config;
pub mod document;
pub mod error;
pub mod model;
pub mod navigation;
pub mod pages;
pub mod resolver;
pub mod tree;

pub use catalog::{MenuItem, catalog_entries, load_catalog, load_catalog_from_data_folder};
pub use config::AladdinConfig;
pub use document::ConfigDocument;
pub use error::{Error, Result};
pub use model::{Parameter, ParameterOption, ParameterType, ProductCatalogEntry, Protection};
pub use navigation::NavigationPlan;
pub use pages::{PageNode, top_level_pages, user_top_level_pages};
pub use resolver::{resolve, resolve_all};
