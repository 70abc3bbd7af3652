//! Declarative tool metadata read by the host at registration time.
//!
//! These are plain constant structures returned by pure accessors; the host
//! queries them once when the tool is registered, not during editing.

use std::collections::BTreeMap;

use serde::Serialize;

/// Entry shown in the host's block-insertion menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toolbox {
    pub icon: &'static str,
    pub title: &'static str,
}

/// Allowed-markup rules for one saved field. An empty map tells the host
/// sanitizer to strip every tag from that field.
pub type FieldRules = BTreeMap<String, bool>;

/// Sanitizer declaration: saved field name mapped to its allowed markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SanitizeConfig(BTreeMap<&'static str, FieldRules>);

impl SanitizeConfig {
    /// Declared field names, one per saved-data field.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    pub fn rules(&self, field: &str) -> Option<&FieldRules> {
        self.0.get(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Read-only mode is fully supported: render disables editing instead of
/// refusing to draw.
pub fn is_read_only_supported() -> bool {
    true
}

/// The line-break key inserts a line break inside the block rather than
/// asking the host to start a new block.
pub fn enable_line_breaks() -> bool {
    true
}

pub fn toolbox() -> Toolbox {
    Toolbox {
        icon: "R",
        title: "Resource",
    }
}

/// Every saved field carries an empty rule set: the host sanitizer strips
/// all markup from `title`, `type`, and `message` on output.
pub fn sanitize() -> SanitizeConfig {
    SanitizeConfig(
        ["title", "type", "message"]
            .into_iter()
            .map(|field| (field, FieldRules::new()))
            .collect(),
    )
}

/// Aggregate of everything the host reads at registration, in one
/// serializable shape for registration manifests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub is_read_only_supported: bool,
    pub enable_line_breaks: bool,
    pub toolbox: Toolbox,
    pub sanitize: SanitizeConfig,
}

impl ToolDescriptor {
    pub fn new() -> Self {
        Self {
            is_read_only_supported: is_read_only_supported(),
            enable_line_breaks: enable_line_breaks(),
            toolbox: toolbox(),
            sanitize: sanitize(),
        }
    }
}

impl Default for ToolDescriptor {
    fn default() -> Self {
        Self::new()
    }
}
