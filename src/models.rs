//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

use crate::listing::Keyed;

/// Feature record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub feature_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_active: bool,
}

impl Feature {
    pub fn status_label(&self) -> &'static str {
        if self.is_active {
            "Active"
        } else {
            "Inactive"
        }
    }

    /// Styling class for the status cell: green when active, red otherwise
    pub fn status_class(&self) -> &'static str {
        if self.is_active {
            "status-active"
        } else {
            "status-inactive"
        }
    }
}

impl Keyed for Feature {
    fn key(&self) -> &str {
        &self.feature_id
    }
}

/// Create/update payload for a feature
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureDraft {
    pub name: String,
    pub description: String,
    pub is_active: bool,
}

impl Default for FeatureDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            is_active: true,
        }
    }
}

impl From<&Feature> for FeatureDraft {
    fn from(feature: &Feature) -> Self {
        Self {
            name: feature.name.clone(),
            description: feature.description.clone(),
            is_active: feature.is_active,
        }
    }
}

/// Slug record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slug {
    #[serde(default, alias = "id")]
    pub slug_id: Option<String>,
    pub slug_name: String,
    pub slug: String,
}

impl Keyed for Slug {
    /// Older records carry no id; the path is unique server-side
    fn key(&self) -> &str {
        self.slug_id.as_deref().unwrap_or(&self.slug)
    }
}

/// Create payload for a slug
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SlugDraft {
    pub slug: String,
    pub slug_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_decodes_without_optional_fields() {
        let feature: Feature =
            serde_json::from_str(r#"{"feature_id":"f1","name":"Export"}"#).unwrap();
        assert_eq!(feature.description, "");
        assert!(!feature.is_active);
        assert_eq!(feature.key(), "f1");
    }

    #[test]
    fn test_feature_draft_payload_shape() {
        let feature = Feature {
            feature_id: "f9".into(),
            name: "Reports".into(),
            description: "Monthly reports".into(),
            is_active: false,
        };
        let payload = serde_json::to_value(FeatureDraft::from(&feature)).unwrap();
        assert_eq!(
            payload,
            serde_json::json!({"name": "Reports", "description": "Monthly reports", "is_active": false})
        );
    }

    #[test]
    fn test_status_label() {
        let mut feature: Feature =
            serde_json::from_str(r#"{"feature_id":"f1","name":"X","is_active":true}"#).unwrap();
        assert_eq!(feature.status_label(), "Active");
        assert_eq!(feature.status_class(), "status-active");
        feature.is_active = false;
        assert_eq!(feature.status_label(), "Inactive");
        assert_eq!(feature.status_class(), "status-inactive");
    }

    #[test]
    fn test_new_feature_draft_is_active() {
        assert!(FeatureDraft::default().is_active);
    }

    #[test]
    fn test_slug_key_falls_back_to_path() {
        let with_id: Slug =
            serde_json::from_str(r#"{"id":"s1","slug_name":"About","slug":"about"}"#).unwrap();
        assert_eq!(with_id.key(), "s1");

        let without_id: Slug =
            serde_json::from_str(r#"{"slug_name":"About","slug":"about"}"#).unwrap();
        assert_eq!(without_id.key(), "about");
    }

    #[test]
    fn test_slug_draft_payload_shape() {
        let draft = SlugDraft { slug: "my-page".into(), slug_name: "My Page".into() };
        let payload = serde_json::to_value(&draft).unwrap();
        assert_eq!(payload, serde_json::json!({"slug": "my-page", "slug_name": "My Page"}));
    }
}
