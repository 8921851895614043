use std::fmt;

use serde::{Deserialize, Serialize};

/// Layout family of a starter template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateType {
    Standard,
    Partnership,
    ProductLaunch,
    Award,
    Event,
}

impl TemplateType {
    pub const ALL: [TemplateType; 5] = [
        TemplateType::Standard,
        TemplateType::Partnership,
        TemplateType::ProductLaunch,
        TemplateType::Award,
        TemplateType::Event,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateType::Standard => "standard",
            TemplateType::Partnership => "partnership",
            TemplateType::ProductLaunch => "product-launch",
            TemplateType::Award => "award",
            TemplateType::Event => "event",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TemplateType::Standard => "Standard",
            TemplateType::Partnership => "Partnership",
            TemplateType::ProductLaunch => "Product Launch",
            TemplateType::Award => "Award",
            TemplateType::Event => "Event",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

impl fmt::Display for TemplateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A static starter document. `content` is HTML with bracketed placeholders
/// such as `[Company Name]` that the author replaces by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub preview_image: &'static str,
    pub kind: TemplateType,
    pub content: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kebab_case_on_the_wire() {
        assert_eq!(
            serde_json::to_value(TemplateType::ProductLaunch).unwrap(),
            "product-launch"
        );
        assert_eq!(TemplateType::parse("award"), Some(TemplateType::Award));
        assert_eq!(TemplateType::parse("all"), None);
    }
}
