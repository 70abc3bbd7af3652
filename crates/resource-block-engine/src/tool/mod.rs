//! The resource block tool and the static metadata a host editor reads at
//! plugin-registration time.

pub mod descriptors;
pub mod resource_block;
pub mod styles;

pub use descriptors::{
    FieldRules, SanitizeConfig, ToolDescriptor, Toolbox, enable_line_breaks,
    is_read_only_supported, sanitize, toolbox,
};
pub use resource_block::{
    BlockInit, DEFAULT_MESSAGE_PLACEHOLDER, DEFAULT_TITLE_PLACEHOLDER, ResourceBlock, SaveError,
    ToolConfig,
};
pub use styles::{EditorStyles, StyleProvider};
