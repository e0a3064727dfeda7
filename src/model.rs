use serde::{Deserialize, Serialize};

use crate::tree::ElementId;

// ────────────────────────────────────────────────────────────────────────────
// Protection
// ────────────────────────────────────────────────────────────────────────────

/// Access tier of a page or parameter. `USER` is the default level and the
/// only one visible to ordinary users.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Protection {
    #[default]
    User,
    Factory,
    Other(String),
}

impl Protection {
    pub fn parse(s: &str) -> Self {
        match s {
            "USER" => Protection::User,
            "FACTORY" => Protection::Factory,
            other => Protection::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Protection::User => "USER",
            Protection::Factory => "FACTORY",
            Protection::Other(s) => s,
        }
    }

    pub fn is_user(&self) -> bool {
        *self == Protection::User
    }
}

impl std::fmt::Display for Protection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Protection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Protection::parse(&s))
    }
}

impl Serialize for Protection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Parameter type
// ────────────────────────────────────────────────────────────────────────────

/// Normalized parameter type.
///
/// Declared types are kept verbatim except for the ones the resolver
/// reinterprets (`command`, and the two-valued Disable/Enable shapes).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParameterType {
    Int,
    Enum,
    Command,
    DisableEnableInt,
    DisableEnableEnum,
    Other(String),
}

impl ParameterType {
    pub fn parse(s: &str) -> Self {
        match s {
            "int" => ParameterType::Int,
            "enum" => ParameterType::Enum,
            "command" => ParameterType::Command,
            "disableEnableInt" => ParameterType::DisableEnableInt,
            "disableEnableEnum" => ParameterType::DisableEnableEnum,
            other => ParameterType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ParameterType::Int => "int",
            ParameterType::Enum => "enum",
            ParameterType::Command => "command",
            ParameterType::DisableEnableInt => "disableEnableInt",
            ParameterType::DisableEnableEnum => "disableEnableEnum",
            ParameterType::Other(s) => s,
        }
    }
}

impl std::fmt::Display for ParameterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ParameterType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Raw elements (typed at load time)
// ────────────────────────────────────────────────────────────────────────────

/// A `<value>` child of a `<parameter>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueElement {
    pub text: Option<String>,
    pub context: Option<String>,
    pub read: Option<String>,
    pub write: Option<String>,
    pub protection: Option<Protection>,
}

impl ValueElement {
    /// Text if present, otherwise the `context` attribute.
    pub fn label(&self) -> Option<&str> {
        self.text.as_deref().or(self.context.as_deref())
    }
}

/// A `<parameter>` element under `<parameters>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterElement {
    pub name: String,
    pub declared_type: String,
    pub code: String,
    pub value: String,
    pub table_ref: Option<String>,
    pub send_to_device: Option<String>,
    pub protection: Option<Protection>,
    pub fill_char: Option<String>,
    /// Text of the `<context>` child.
    pub context: Option<String>,
    pub values: Vec<ValueElement>,
}

/// One `<element>` entry of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl TableEntry {
    /// Text if present, otherwise the `name` attribute.
    pub fn label(&self) -> Option<&str> {
        self.text.as_deref().or(self.name.as_deref())
    }
}

/// A named table under `<tableList>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableElement {
    /// Tag of the table element (e.g. `table`, `enumTable`).
    pub kind: String,
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub table_type: Option<String>,
    pub entries: Vec<TableEntry>,
}

/// A `<field>` somewhere under `<rootPage>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldElement {
    pub id: ElementId,
    pub name: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Derived views
// ────────────────────────────────────────────────────────────────────────────

/// One selectable value of a parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterOption {
    pub name: String,
    pub value: String,
    pub command: Option<String>,
}

/// A parameter resolved against its configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    /// Type as written in the XML.
    pub declared_type: String,
    #[serde(rename = "type")]
    pub param_type: ParameterType,
    pub code: String,
    pub value: String,
    pub display_name: Option<String>,
    pub table_ref: Option<String>,
    /// The table named by `table_ref`, when it exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<TableElement>,
    pub send_to_device: Option<String>,
    pub protection: Option<Protection>,
    pub fill_char: Option<String>,
    pub options: Vec<ParameterOption>,
    /// Page titles from the top-level page down to the page holding the
    /// parameter's field. Empty when no field references the parameter.
    pub parent_page_titles: Vec<String>,
}

impl Parameter {
    pub fn has_navigation_path(&self) -> bool {
        !self.parent_page_titles.is_empty()
    }
}

/// One leaf of the product menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCatalogEntry {
    pub menu_product_name: String,
    pub product_name: String,
    pub release_number: String,
}
