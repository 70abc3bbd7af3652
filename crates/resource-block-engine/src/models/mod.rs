pub mod resource_data;
pub mod resource_type;

pub use resource_data::ResourceData;
pub use resource_type::{ResourceType, UnknownResourceType};
