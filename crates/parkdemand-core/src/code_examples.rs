//! Static code-example snippets shown under the sidebar controls.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::error::SnippetError;

pub const PANEL_HEADING: &str = "## Code examples";
pub const PANEL_CAPTION: &str =
    "Get the code for this app at [GitHub](https://github.com/predicthq/streamlit-parking-demo)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeExample {
    pub label: &'static str,
    /// Snippet file stem; the markdown lives at `<filename>.md`.
    pub filename: &'static str,
}

pub const CODE_EXAMPLES: [CodeExample; 6] = [
    CodeExample {
        label: "Suggested Radius API",
        filename: "suggested_radius_api",
    },
    CodeExample {
        label: "Features API (Predicted Attendance aggregation)",
        filename: "features_api",
    },
    CodeExample {
        label: "Count of Events",
        filename: "count_api",
    },
    CodeExample {
        label: "Demand Surge API",
        filename: "demand_surge_api",
    },
    CodeExample {
        label: "Search Events",
        filename: "events_api",
    },
    CodeExample {
        label: "Python SDK for PredictHQ APIs",
        filename: "python_sdk",
    },
];

/// Where snippet markdown is read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SnippetStore {
    /// Snippets compiled into the binary.
    #[default]
    Bundled,
    /// `<dir>/<filename>.md` on disk.
    Directory(PathBuf),
}

impl SnippetStore {
    #[must_use]
    pub fn from_dir(dir: Option<&Path>) -> Self {
        dir.map_or(Self::Bundled, |d| Self::Directory(d.to_path_buf()))
    }

    /// Load the markdown for one snippet, unmodified.
    ///
    /// # Errors
    ///
    /// Returns [`SnippetError::UnknownSnippet`] for a bundled name that does not
    /// exist, or [`SnippetError::Io`] if a file cannot be read.
    pub fn load(&self, filename: &str) -> Result<Cow<'static, str>, SnippetError> {
        match self {
            Self::Bundled => bundled(filename)
                .map(Cow::Borrowed)
                .ok_or_else(|| SnippetError::UnknownSnippet(filename.to_owned())),
            Self::Directory(dir) => {
                let path = dir.join(format!("{filename}.md"));
                std::fs::read_to_string(&path)
                    .map(Cow::Owned)
                    .map_err(|e| SnippetError::Io {
                        path: path.display().to_string(),
                        source: e,
                    })
            }
        }
    }
}

fn bundled(filename: &str) -> Option<&'static str> {
    let content = match filename {
        "suggested_radius_api" => include_str!("../snippets/suggested_radius_api.md"),
        "features_api" => include_str!("../snippets/features_api.md"),
        "count_api" => include_str!("../snippets/count_api.md"),
        "demand_surge_api" => include_str!("../snippets/demand_surge_api.md"),
        "events_api" => include_str!("../snippets/events_api.md"),
        "python_sdk" => include_str!("../snippets/python_sdk.md"),
        _ => return None,
    };
    Some(content)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelEntry {
    pub label: &'static str,
    pub markdown: Cow<'static, str>,
}

/// Load every snippet in catalog order.
///
/// # Errors
///
/// Fails on the first snippet that cannot be loaded.
pub fn load_panel(store: &SnippetStore) -> Result<Vec<PanelEntry>, SnippetError> {
    CODE_EXAMPLES
        .iter()
        .map(|example| {
            Ok(PanelEntry {
                label: example.label,
                markdown: store.load(example.filename)?,
            })
        })
        .collect()
}
