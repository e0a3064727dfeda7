//! UI navigation plan for a resolved parameter.
//!
//! The product page renders top-level pages as collapsible sections and
//! everything below as a page tree. Reaching a parameter means opening its
//! top-level section, expanding the intermediate tree nodes, then selecting
//! the final page.

use crate::error::{Error, Result};
use crate::model::Parameter;
use crate::pages::SCANNER_WRAPPER_TITLES;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationPlan {
    /// Section to open. `None` when the path only names a scanner wrapper.
    pub top_level_page: Option<String>,
    /// Tree nodes to expand, outermost first.
    pub expand: Vec<String>,
    /// Page to select last. `None` when the top-level section is the target.
    pub final_page: Option<String>,
}

impl NavigationPlan {
    pub fn for_parameter(param: &Parameter) -> Result<Self> {
        Self::from_titles(&param.parent_page_titles).ok_or_else(|| Error::NoNavigationPath {
            code: param.code.clone(),
        })
    }

    /// Plan for a path of page titles; `None` for an empty path.
    pub fn from_titles(titles: &[String]) -> Option<Self> {
        let first = titles.first()?;
        // A leading "2D Imager Scanner" is not rendered as a section; the
        // next title is the real top-level page.
        let (top_level_page, start) = if first == SCANNER_WRAPPER_TITLES[0] {
            match titles.get(1) {
                Some(next) => (Some(next.clone()), 2),
                None => (None, 1),
            }
        } else {
            (Some(first.clone()), 1)
        };
        let (expand, final_page) = if start < titles.len() {
            let last = titles.len() - 1;
            (titles[start..last].to_vec(), Some(titles[last].clone()))
        } else {
            (Vec::new(), None)
        };
        Some(Self {
            top_level_page,
            expand,
            final_page,
        })
    }

    /// The top-level section is itself the page holding the parameter.
    pub fn targets_top_level(&self) -> bool {
        self.final_page.is_none()
    }
}
