//! Parameter resolution.
//!
//! Turns a `<parameter>` element into a [`Parameter`]: normalized type and
//! code, resolved table, selectable options, and the chain of page titles the
//! UI has to open to reach the parameter's field.

use crate::document::{CONFIGURATION_PAGE_TITLE, ConfigDocument};
use crate::error::{Error, Result};
use crate::model::*;

const DISABLE_LABELS: [&str; 2] = ["Disable", "Disabled"];
const ENABLE_LABELS: [&str; 2] = ["Enable", "Enabled"];

/// Resolve the parameter with the given `code` attribute.
pub fn resolve(doc: &ConfigDocument, code: &str) -> Result<Parameter> {
    let elem = doc
        .parameter_by_code(code)
        .ok_or_else(|| Error::ParameterNotFound {
            code: code.to_string(),
        })?;
    Ok(resolve_element(doc, elem))
}

/// Resolve every parameter of the document, in document order.
pub fn resolve_all(doc: &ConfigDocument) -> Vec<Parameter> {
    doc.parameters()
        .iter()
        .map(|p| resolve_element(doc, p))
        .collect()
}

fn resolve_element(doc: &ConfigDocument, elem: &ParameterElement) -> Parameter {
    let mut param_type = ParameterType::parse(&elem.declared_type);
    let mut code = elem.code.clone();

    if param_type == ParameterType::Command {
        code = command_code(&code);
    }

    if param_type == ParameterType::Int
        && is_disable_enable_pair(elem.values.iter().map(|v| v.label()))
    {
        param_type = ParameterType::DisableEnableInt;
    }

    let table = elem.table_ref.as_deref().and_then(|name| {
        let table = doc.table_by_name(name);
        if table.is_none() {
            log::warn!(
                "Could not find tableRef {} of parameter {} in {}_{}",
                name,
                elem.name,
                doc.product_name,
                doc.release_number
            );
        }
        table.cloned()
    });

    if let Some(t) = &table {
        let enum_like =
            param_type == ParameterType::Enum || t.table_type.as_deref() == Some("enum");
        if enum_like && is_disable_enable_pair(t.entries.iter().map(|e| e.label())) {
            param_type = ParameterType::DisableEnableEnum;
        }
    }

    let (parent_page_titles, protection) =
        navigation_path(doc, &elem.name, elem.protection.clone());

    Parameter {
        name: elem.name.clone(),
        declared_type: elem.declared_type.clone(),
        param_type,
        code,
        value: elem.value.clone(),
        display_name: elem.context.clone(),
        table_ref: elem.table_ref.clone(),
        options: options(elem, table.as_ref()),
        table,
        send_to_device: elem.send_to_device.clone(),
        protection,
        fill_char: elem.fill_char.clone(),
        parent_page_titles,
    }
}

/// Command codes carry a one-character prefix in the XML and are referenced
/// upper-cased without it everywhere else.
pub fn command_code(raw: &str) -> String {
    let mut chars = raw.chars();
    chars.next();
    chars.as_str().to_uppercase()
}

/// Exactly two labels forming a Disable/Enable pair, in either order.
fn is_disable_enable_pair<'a>(labels: impl Iterator<Item = Option<&'a str>>) -> bool {
    let labels: Vec<Option<&str>> = labels.collect();
    let (a, b) = match labels.as_slice() {
        [Some(a), Some(b)] => (*a, *b),
        _ => return false,
    };
    let disable = |s: &str| DISABLE_LABELS.contains(&s);
    let enable = |s: &str| ENABLE_LABELS.contains(&s);
    (disable(a) && enable(b)) || (enable(a) && disable(b))
}

fn options(elem: &ParameterElement, table: Option<&TableElement>) -> Vec<ParameterOption> {
    if !elem.values.is_empty() {
        return elem
            .values
            .iter()
            .filter_map(|v| {
                let text = v.text.as_deref();
                let name = v.context.as_deref().or(text)?;
                let value = v.read.as_deref().or(text).unwrap_or(name);
                Some(ParameterOption {
                    name: name.to_string(),
                    value: value.to_string(),
                    command: v.write.clone(),
                })
            })
            .collect();
    }
    table
        .map(|t| {
            t.entries
                .iter()
                .filter_map(|e| {
                    let name = e.label()?;
                    Some(ParameterOption {
                        name: name.to_string(),
                        value: e.value.as_deref().unwrap_or(name).to_string(),
                        command: None,
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Page titles leading to the field named `parameter_name`, and the
/// parameter's protection after inheriting from enclosing pages.
///
/// A parameter declared `USER` takes the protection of the nearest enclosing
/// page that declares a stricter one. An unset protection stays unset.
pub fn navigation_path(
    doc: &ConfigDocument,
    parameter_name: &str,
    mut protection: Option<Protection>,
) -> (Vec<String>, Option<Protection>) {
    let Some(field) = doc.field_for(parameter_name) else {
        return (Vec::new(), protection);
    };
    let tree = doc.tree();
    let mut titles = Vec::new();
    for id in tree.ancestors(field.id) {
        let page = tree.get(id);
        let title = page.attribute("title");
        if title == Some(CONFIGURATION_PAGE_TITLE) {
            break;
        }
        if let Some(page_protection) = page.attribute("protection").map(Protection::parse) {
            let inherits = protection.as_ref().is_some_and(Protection::is_user);
            if inherits && !page_protection.is_user() {
                protection = Some(page_protection);
            }
        }
        if let Some(title) = title {
            titles.push(title.to_string());
        }
    }
    titles.reverse();
    if titles
        .first()
        .is_some_and(|first| first.contains(doc.product_name.as_str()))
    {
        titles.remove(0);
    }
    (titles, protection)
}
