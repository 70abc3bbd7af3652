pub mod dom;
pub mod models;
pub mod tool;

// Re-export key types for easier usage
pub use dom::{Element, NodeKind};
pub use models::{ResourceData, ResourceType};
pub use tool::{
    BlockInit, EditorStyles, ResourceBlock, SanitizeConfig, SaveError, StyleProvider, ToolConfig,
    ToolDescriptor, Toolbox,
};
