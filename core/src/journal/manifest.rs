//! Reader for MarkLogic's `assignments.xml`.
//!
//! ```xml
//! <assignments xmlns="http://marklogic.com/xdmp/assignments">
//!   <assignment>
//!     <forest-name>Documents</forest-name>
//!     <data-directory>/data/ml</data-directory>
//!   </assignment>
//! </assignments>
//! ```
//!
//! Elements are matched on their expanded name (namespace plus local name),
//! so the prefix used in the file does not matter.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use preflight_common::forest::ForestAssignment;
use roxmltree::{Document, Node};
use thiserror::Error;

pub const ASSIGNMENTS_NS: &str = "http://marklogic.com/xdmp/assignments";

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("cannot read forest assignments {path}: {source}")]
    Read {
        path: PathBuf,
        source: io::Error,
    },

    #[error("malformed forest assignments {path}: {source}")]
    Parse {
        path: PathBuf,
        source: roxmltree::Error,
    },

    #[error("assignment #{index} in {path} has no forest name")]
    MissingForestName { path: PathBuf, index: usize },
}

pub fn read_manifest(path: &Path) -> Result<Vec<ForestAssignment>, ManifestError> {
    let xml: String = fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_manifest(&xml, path)
}

/// Parses manifest text. `origin` is only used in error messages.
pub fn parse_manifest(xml: &str, origin: &Path) -> Result<Vec<ForestAssignment>, ManifestError> {
    let doc: Document = Document::parse(xml).map_err(|source| ManifestError::Parse {
        path: origin.to_path_buf(),
        source,
    })?;

    doc.root_element()
        .children()
        .filter(|node| node.has_tag_name((ASSIGNMENTS_NS, "assignment")))
        .enumerate()
        .map(|(index, node)| {
            let forest_name: &str = child_text(node, "forest-name").ok_or_else(|| {
                ManifestError::MissingForestName {
                    path: origin.to_path_buf(),
                    index,
                }
            })?;
            let data_directory: Option<PathBuf> = child_text(node, "data-directory").map(PathBuf::from);
            Ok(ForestAssignment::new(forest_name, data_directory))
        })
        .collect()
}

/// Trimmed text of the first child called `local`. Empty text counts as absent.
fn child_text<'a>(node: Node<'a, '_>, local: &str) -> Option<&'a str> {
    node.children()
        .find(|child| child.has_tag_name((ASSIGNMENTS_NS, local)))
        .and_then(|child| child.text())
        .map(str::trim)
        .filter(|text| !text.is_empty())
}
