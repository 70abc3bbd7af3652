mod editable_field;
mod resource_block;
mod type_selector;

pub use editable_field::EditableField;
pub use resource_block::ResourceBlockView;
pub use type_selector::TypeSelector;
