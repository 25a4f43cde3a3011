use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceCategory {
    Legal,
    Alternative,
}

impl ResourceCategory {
    pub fn badge_label(&self) -> &'static str {
        match self {
            ResourceCategory::Legal => "Oficial",
            ResourceCategory::Alternative => "Alternativo",
        }
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.badge_label())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResourceRecord {
    pub title: String,
    pub url: String,
    pub description: String,
    pub category: ResourceCategory,
}

impl ResourceRecord {
    pub fn display_host(&self) -> String {
        display_host(&self.url)
    }
}

/// Hostname of `raw_url` with a leading `www.` stripped. Falls back to the
/// raw string when the URL has no host or does not parse.
pub fn display_host(raw_url: &str) -> String {
    match Url::parse(raw_url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => host.strip_prefix("www.").unwrap_or(host).to_string(),
            None => raw_url.to_string(),
        },
        Err(_) => raw_url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_url(url: &str) -> ResourceRecord {
        ResourceRecord {
            title: "Serviço X".to_string(),
            url: url.to_string(),
            description: "Catálogo oficial".to_string(),
            category: ResourceCategory::Legal,
        }
    }

    #[test]
    fn test_display_host_strips_leading_www() {
        let record = record_with_url("https://www.example.com/path");
        assert_eq!(record.display_host(), "example.com");
    }

    #[test]
    fn test_display_host_keeps_subdomains() {
        let record = record_with_url("http://sub.example.org");
        assert_eq!(record.display_host(), "sub.example.org");
    }

    #[test]
    fn test_display_host_falls_back_to_raw_string_when_unparseable() {
        let record = record_with_url("not a url");
        assert_eq!(record.display_host(), "not a url");
    }

    #[test]
    fn test_category_deserializes_from_wire_tags() {
        let legal: ResourceCategory = serde_json::from_str("\"legal\"").unwrap();
        let alternative: ResourceCategory = serde_json::from_str("\"alternative\"").unwrap();

        assert_eq!(legal, ResourceCategory::Legal);
        assert_eq!(alternative, ResourceCategory::Alternative);
    }

    #[test]
    fn test_category_rejects_unknown_tags() {
        let result: Result<ResourceCategory, _> = serde_json::from_str("\"pirate\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_category_badge_labels() {
        assert_eq!(ResourceCategory::Legal.badge_label(), "Oficial");
        assert_eq!(ResourceCategory::Alternative.badge_label(), "Alternativo");
    }

    #[test]
    fn test_resource_record_deserializes_all_four_fields() {
        let json = r#"{
            "title": "Fórum Y",
            "url": "https://forum.example.com/thread",
            "description": "Discussões da comunidade",
            "category": "alternative"
        }"#;

        let record: ResourceRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.title, "Fórum Y");
        assert_eq!(record.url, "https://forum.example.com/thread");
        assert_eq!(record.category, ResourceCategory::Alternative);
    }

    #[test]
    fn test_resource_record_with_missing_field_fails_to_deserialize() {
        let json = r#"{"title": "Sem URL", "description": "x", "category": "legal"}"#;

        let result: Result<ResourceRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
