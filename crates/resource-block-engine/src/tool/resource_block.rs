use std::sync::Arc;

use crate::dom::Element;
use crate::models::{ResourceData, ResourceType};
use crate::tool::styles::{EditorStyles, StyleProvider};

pub const DEFAULT_TITLE_PLACEHOLDER: &str = "Title";
pub const DEFAULT_MESSAGE_PLACEHOLDER: &str = "Message";

/// Class markers the tool renders and `save` looks elements up by.
const WRAPPER_CLASS: &str = "cdx-resource";
const TYPE_CLASS: &str = "cdx-resource__type";
const TITLE_CLASS: &str = "cdx-resource__title";
const MESSAGE_CLASS: &str = "cdx-resource__message";

/// Host-supplied tool configuration. Unset placeholders fall back to
/// [`DEFAULT_TITLE_PLACEHOLDER`] / [`DEFAULT_MESSAGE_PLACEHOLDER`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolConfig {
    pub title_placeholder: Option<String>,
    pub message_placeholder: Option<String>,
}

/// Everything the host hands a block tool at construction.
#[derive(Clone)]
pub struct BlockInit {
    /// Previously saved data, possibly partial (missing fields arrive as
    /// empty strings via the serde defaults on [`ResourceData`]).
    pub data: ResourceData,
    pub config: ToolConfig,
    pub styles: Arc<dyn StyleProvider>,
    pub read_only: bool,
}

impl Default for BlockInit {
    fn default() -> Self {
        Self {
            data: ResourceData::default(),
            config: ToolConfig::default(),
            styles: Arc::new(EditorStyles::default()),
            read_only: false,
        }
    }
}

/// Why a save target could not be read back. Any variant is a host-contract
/// violation: `save` must receive the subtree produced by `render` (or a
/// structurally compatible one). Nothing is merged when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SaveError {
    #[error("save target has no selector element")]
    MissingSelector,
    #[error("save target has no .{class} element")]
    MissingField { class: &'static str },
}

/// The resource block tool: a type selector plus editable title and message
/// regions, round-tripping a [`ResourceData`] record through the host's
/// document model.
pub struct ResourceBlock {
    data: ResourceData,
    styles: Arc<dyn StyleProvider>,
    read_only: bool,
    title_placeholder: String,
    message_placeholder: String,
}

impl ResourceBlock {
    /// Construction cannot fail: partial data and config have already been
    /// defaulted, and everything else is stored as-is.
    pub fn new(init: BlockInit) -> Self {
        let BlockInit {
            data,
            config,
            styles,
            read_only,
        } = init;

        Self {
            data,
            styles,
            read_only,
            title_placeholder: config
                .title_placeholder
                .unwrap_or_else(|| DEFAULT_TITLE_PLACEHOLDER.to_string()),
            message_placeholder: config
                .message_placeholder
                .unwrap_or_else(|| DEFAULT_MESSAGE_PLACEHOLDER.to_string()),
        }
    }

    /// The record this instance owns. `save` merges into this same record;
    /// the host only ever sees it through `render`/`save`.
    pub fn data(&self) -> &ResourceData {
        &self.data
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn title_placeholder(&self) -> &str {
        &self.title_placeholder
    }

    pub fn message_placeholder(&self) -> &str {
        &self.message_placeholder
    }

    /// Build the block's element subtree from the current record: the type
    /// selector, then the title region, then the message region.
    ///
    /// Does not mutate the record; rendering twice yields two independent,
    /// structurally identical subtrees. A stored type that matches none of
    /// the four options leaves the selector unselected, so an unedited save
    /// reports `""` rather than silently promoting the first option.
    pub fn render(&self) -> Element {
        log::debug!("rendering resource block");

        let input_class = self.styles.input_class();
        let mut root = Element::container([self.styles.block_class(), WRAPPER_CLASS]);

        root.append(Element::select(
            [input_class, TYPE_CLASS],
            ResourceType::ALL.map(|t| t.as_str()),
            &self.data.kind,
        ));
        root.append(Element::editable(
            [input_class, TITLE_CLASS],
            &self.data.title,
            !self.read_only,
            &self.title_placeholder,
        ));
        root.append(Element::editable(
            [input_class, MESSAGE_CLASS],
            &self.data.message,
            !self.read_only,
            &self.message_placeholder,
        ));

        root
    }

    /// Read the live element state back into the held record and return a
    /// borrow of it. All lookups happen before any merge, so a structurally
    /// incompatible target leaves the record untouched.
    pub fn save(&mut self, root: &Element) -> Result<&ResourceData, SaveError> {
        let select = root.find_select().ok_or(SaveError::MissingSelector)?;
        let title = root
            .find_class(TITLE_CLASS)
            .ok_or(SaveError::MissingField { class: TITLE_CLASS })?;
        let message = root.find_class(MESSAGE_CLASS).ok_or(SaveError::MissingField {
            class: MESSAGE_CLASS,
        })?;

        self.data.kind = select.value().unwrap_or_default().to_string();
        self.data.title = title.inner_html().unwrap_or_default().to_string();
        self.data.message = message.inner_html().unwrap_or_default().to_string();

        Ok(&self.data)
    }
}
