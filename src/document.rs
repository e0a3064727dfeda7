//! Configuration document index.
//!
//! A [`ConfigDocument`] is one parsed `config_<product>_<release>.xml` together
//! with the flat lists the resolver and the page normalizer query: parameters,
//! page fields, tables, and the parent link of every element.

use crate::config::AladdinConfig;
use crate::error::{Error, Result};
use crate::model::*;
use crate::tree::{ElementId, ElementTree};
use camino::{Utf8Path, Utf8PathBuf};
use roxmltree::Document;

/// Title of the synthetic page at the top of every `rootPage` tree.
pub const CONFIGURATION_PAGE_TITLE: &str = "Configuration";

#[derive(Debug, Clone)]
pub struct ConfigDocument {
    /// Name as written in the `ConfigRepository` folder, e.g. `Magellan-9900i`.
    pub product_name: String,
    /// Name shown in the Aladdin product menu, e.g. `Magellan 9600i and 9900i`.
    pub menu_product_name: String,
    /// Release number, e.g. `DR9401563`.
    pub release_number: String,
    mcf: Option<String>,
    tree: ElementTree,
    root_page: Option<ElementId>,
    parameters: Vec<ParameterElement>,
    page_fields: Vec<FieldElement>,
    tables: Vec<TableElement>,
}

impl ConfigDocument {
    /// `<data_root>/ConfigRepository/<product>_<release>/config_<product>_<release>.xml`
    pub fn path_for(data_root: &Utf8Path, product_name: &str, release_number: &str) -> Utf8PathBuf {
        let stem = format!("{}_{}", product_name, release_number);
        data_root
            .join("ConfigRepository")
            .join(&stem)
            .join(format!("config_{}.xml", stem))
    }

    /// Load the configuration XML of a product release from the data folder.
    pub fn load(
        config: &AladdinConfig,
        product_name: &str,
        release_number: &str,
        menu_product_name: &str,
    ) -> Result<Self> {
        let path = Self::path_for(&config.data_folder_path, product_name, release_number);
        if !path.is_file() {
            return Err(Error::DocumentNotFound { path });
        }
        let text = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let doc = Self::parse(
            &text,
            path.as_str(),
            product_name,
            release_number,
            menu_product_name,
        )?;
        log::debug!(
            "Loaded {} ({} parameters, {} page fields, {} tables)",
            path,
            doc.parameters.len(),
            doc.page_fields.len(),
            doc.tables.len()
        );
        Ok(doc)
    }

    /// Build a document from XML text.
    pub fn from_xml(
        text: &str,
        product_name: &str,
        release_number: &str,
        menu_product_name: &str,
    ) -> Result<Self> {
        Self::parse(text, "<memory>", product_name, release_number, menu_product_name)
    }

    fn parse(
        text: &str,
        path_hint: &str,
        product_name: &str,
        release_number: &str,
        menu_product_name: &str,
    ) -> Result<Self> {
        let doc = Document::parse(text).map_err(|source| Error::Xml {
            context: path_hint.to_string(),
            source,
        })?;
        let tree = ElementTree::from_document(&doc);
        let root = tree.root();
        let mcf = tree.get(root).attribute("mcf").map(str::to_string);

        let parameters = match tree.first_child_tagged(root, "parameters") {
            Some(section) => tree
                .children_tagged(section, "parameter")
                .map(|id| parse_parameter(&tree, id))
                .collect::<Result<Vec<_>>>()?,
            None => Vec::new(),
        };

        let root_page = tree.first_child_tagged(root, "rootPage");
        let page_fields = root_page
            .map(|rp| {
                tree.descendants(rp)
                    .into_iter()
                    .filter(|id| tree.get(*id).has_tag("field"))
                    .map(|id| FieldElement {
                        id,
                        name: tree.get(id).attribute("name").map(str::to_string),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let tables = tree
            .first_child_tagged(root, "tableList")
            .map(|tl| {
                tree.get(tl)
                    .children
                    .iter()
                    .map(|id| parse_table(&tree, *id))
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            product_name: product_name.to_string(),
            menu_product_name: menu_product_name.to_string(),
            release_number: release_number.to_string(),
            mcf,
            tree,
            root_page,
            parameters,
            page_fields,
            tables,
        })
    }

    /// Product-release variant tag from the root element's `mcf` attribute.
    pub fn mcf(&self) -> Option<&str> {
        self.mcf.as_deref()
    }

    /// Label of this release in the Aladdin release selector.
    pub fn release_label(&self) -> String {
        match &self.mcf {
            Some(mcf) => format!("{} (MCF: {})", self.release_number, mcf),
            None => self.release_number.clone(),
        }
    }

    pub fn tree(&self) -> &ElementTree {
        &self.tree
    }

    pub fn parameters(&self) -> &[ParameterElement] {
        &self.parameters
    }

    pub fn page_fields(&self) -> &[FieldElement] {
        &self.page_fields
    }

    pub fn tables(&self) -> &[TableElement] {
        &self.tables
    }

    pub fn parameter_by_code(&self, code: &str) -> Option<&ParameterElement> {
        self.parameters.iter().find(|p| p.code == code)
    }

    pub fn table_by_name(&self, name: &str) -> Option<&TableElement> {
        self.tables.iter().find(|t| t.name.as_deref() == Some(name))
    }

    /// First page field referencing the given parameter name.
    pub fn field_for(&self, parameter_name: &str) -> Option<&FieldElement> {
        self.page_fields
            .iter()
            .find(|f| f.name.as_deref() == Some(parameter_name))
    }

    /// The `<rootPage>` element, if the document has one.
    pub fn root_page(&self) -> Option<ElementId> {
        self.root_page
    }

    /// The first `<page>` under `<rootPage>` (titled "Configuration").
    pub fn configuration_page(&self) -> Option<ElementId> {
        self.root_page
            .and_then(|rp| self.tree.first_child_tagged(rp, "page"))
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.tree.parent(id)
    }
}

fn required<'a>(
    tree: &'a ElementTree,
    id: ElementId,
    element: &'static str,
    attribute: &'static str,
) -> Result<&'a str> {
    tree.get(id)
        .attribute(attribute)
        .ok_or(Error::MissingAttribute { element, attribute })
}

fn parse_parameter(tree: &ElementTree, id: ElementId) -> Result<ParameterElement> {
    let el = tree.get(id);
    let optional = |name: &str| el.attribute(name).map(str::to_string);
    let values = tree
        .children_tagged(id, "value")
        .map(|vid| {
            let v = tree.get(vid);
            ValueElement {
                text: v.text.clone(),
                context: v.attribute("context").map(str::to_string),
                read: v.attribute("read").map(str::to_string),
                write: v.attribute("write").map(str::to_string),
                protection: v.attribute("protection").map(Protection::parse),
            }
        })
        .collect();
    Ok(ParameterElement {
        name: required(tree, id, "parameter", "name")?.to_string(),
        declared_type: required(tree, id, "parameter", "type")?.to_string(),
        code: required(tree, id, "parameter", "code")?.to_string(),
        value: required(tree, id, "parameter", "value")?.to_string(),
        table_ref: optional("tableRef"),
        send_to_device: optional("sendToDevice"),
        protection: el.attribute("protection").map(Protection::parse),
        fill_char: optional("fillChar"),
        context: tree
            .first_child_tagged(id, "context")
            .and_then(|c| tree.get(c).text.clone()),
        values,
    })
}

fn parse_table(tree: &ElementTree, id: ElementId) -> TableElement {
    let el = tree.get(id);
    TableElement {
        kind: el.tag.clone(),
        name: el.attribute("name").map(str::to_string),
        table_type: el.attribute("type").map(str::to_string),
        entries: tree
            .children_tagged(id, "element")
            .map(|eid| {
                let e = tree.get(eid);
                TableEntry {
                    name: e.attribute("name").map(str::to_string),
                    value: e.attribute("value").map(str::to_string),
                    text: e.text.clone(),
                }
            })
            .collect(),
    }
}
