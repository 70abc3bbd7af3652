/// Style-class capability injected by the host editor.
///
/// The tool never reaches into a global style registry; the host hands it
/// this narrow interface at construction and the rendered elements carry
/// whatever classes the host's theme uses.
pub trait StyleProvider: Send + Sync {
    /// Class the host applies to every block root.
    fn block_class(&self) -> &str;
    /// Class the host applies to editable inputs.
    fn input_class(&self) -> &str;
}

/// Stock style classes, matching the class vocabulary of block-editor hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorStyles {
    pub block: String,
    pub input: String,
}

impl Default for EditorStyles {
    fn default() -> Self {
        Self {
            block: "cdx-block".to_string(),
            input: "cdx-input".to_string(),
        }
    }
}

impl StyleProvider for EditorStyles {
    fn block_class(&self) -> &str {
        &self.block
    }

    fn input_class(&self) -> &str {
        &self.input
    }
}
