use serde::{Deserialize, Serialize};

use crate::models::ResourceType;

/// Saved data for one resource block.
///
/// This is the shape that round-trips through the host's document model:
/// `{"title": ..., "type": ..., "message": ...}`. Fields absent from the
/// input deserialize to empty strings, so a constructed record is always
/// fully populated. `title` and `message` hold raw markup; stripping it is
/// the host sanitizer's job (see [`crate::tool::sanitize`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceData {
    #[serde(default)]
    pub title: String,
    /// Resource type label. Kept as a string so unrecognized values are
    /// accepted on input rather than rejected; see [`Self::resource_type`]
    /// for the typed view.
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub message: String,
}

impl ResourceData {
    pub fn new(
        title: impl Into<String>,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// The typed resource type, or `None` when `kind` is empty or not one of
    /// the four known labels.
    pub fn resource_type(&self) -> Option<ResourceType> {
        self.kind.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::empty("{}", "", "", "")]
    #[case::title_only(r#"{"title":"Hi"}"#, "Hi", "", "")]
    #[case::type_only(r#"{"type":"Video"}"#, "", "Video", "")]
    #[case::message_only(r#"{"message":"<b>ok</b>"}"#, "", "", "<b>ok</b>")]
    #[case::title_and_type(r#"{"title":"Hi","type":"Audio"}"#, "Hi", "Audio", "")]
    #[case::all(
        r#"{"title":"Hi","type":"Image","message":"m"}"#,
        "Hi",
        "Image",
        "m"
    )]
    fn partial_input_fills_missing_fields(
        #[case] json: &str,
        #[case] title: &str,
        #[case] kind: &str,
        #[case] message: &str,
    ) {
        let data: ResourceData = serde_json::from_str(json).unwrap();
        assert_eq!(data, ResourceData::new(title, kind, message));
    }

    #[test]
    fn unrecognized_type_is_accepted() {
        let data: ResourceData = serde_json::from_str(r#"{"type":"Podcast"}"#).unwrap();
        assert_eq!(data.kind, "Podcast");
        assert_eq!(data.resource_type(), None);
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let data = ResourceData::new("Hi", "Video", "<b>ok</b>");
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"title": "Hi", "type": "Video", "message": "<b>ok</b>"})
        );
    }

    #[test]
    fn resource_type_parses_known_labels() {
        let data = ResourceData::new("", "Audio", "");
        assert_eq!(data.resource_type(), Some(ResourceType::Audio));
    }
}
