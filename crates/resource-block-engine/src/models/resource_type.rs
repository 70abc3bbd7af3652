use std::fmt;
use std::str::FromStr;

/// The kind of resource a block points at.
///
/// Saved data carries the type as a plain string so that unrecognized values
/// survive a load/save cycle; this enum is the typed view used to populate
/// the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
    Document,
    Video,
    Audio,
    Image,
}

impl ResourceType {
    /// Selector options, in the order they are rendered.
    pub const ALL: [ResourceType; 4] = [
        ResourceType::Document,
        ResourceType::Video,
        ResourceType::Audio,
        ResourceType::Image,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Document => "Document",
            ResourceType::Video => "Video",
            ResourceType::Audio => "Audio",
            ResourceType::Image => "Image",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown resource type: {0:?}")]
pub struct UnknownResourceType(pub String);

impl FromStr for ResourceType {
    type Err = UnknownResourceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownResourceType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_and_parse_agree() {
        for t in ResourceType::ALL {
            assert_eq!(t.to_string().parse::<ResourceType>(), Ok(t));
        }
    }

    #[test]
    fn options_are_ordered() {
        let labels: Vec<&str> = ResourceType::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(labels, ["Document", "Video", "Audio", "Image"]);
    }

    #[test]
    fn parse_rejects_unknown_and_case_variants() {
        assert!("Podcast".parse::<ResourceType>().is_err());
        assert!("video".parse::<ResourceType>().is_err());
        assert!("".parse::<ResourceType>().is_err());
    }
}
