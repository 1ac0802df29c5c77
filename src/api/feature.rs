//! Feature Endpoints

use serde::Deserialize;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{Feature, FeatureDraft};

#[derive(Debug, Deserialize)]
struct FeatureList {
    #[serde(default)]
    feature: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct FeatureItem {
    feature: Feature,
}

impl ApiClient {
    pub async fn list_features(&self) -> Result<Vec<Feature>, ApiError> {
        let list: FeatureList = self.get_data(&self.url(&["features"])).await?;
        Ok(list.feature)
    }

    pub async fn get_feature(&self, feature_id: &str) -> Result<Feature, ApiError> {
        let item: FeatureItem = self.get_data(&self.url(&["features", feature_id])).await?;
        Ok(item.feature)
    }

    pub async fn create_feature(&self, draft: &FeatureDraft) -> Result<(), ApiError> {
        self.post_json(&self.url(&["features"]), draft).await
    }

    pub async fn update_feature(&self, feature_id: &str, draft: &FeatureDraft) -> Result<(), ApiError> {
        self.put_json(&self.url(&["features", feature_id]), draft).await
    }

    pub async fn delete_feature(&self, feature_id: &str) -> Result<(), ApiError> {
        self.delete(&self.url(&["features", feature_id])).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::DataEnvelope;

    #[test]
    fn test_list_body_decodes() {
        let json = r#"{"data":{"feature":[
            {"feature_id":"f1","name":"X","description":"d","is_active":true}
        ]}}"#;
        let envelope: DataEnvelope<FeatureList> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.data.feature.len(), 1);
        assert_eq!(envelope.data.feature[0].name, "X");
        assert!(envelope.data.feature[0].is_active);
    }

    #[test]
    fn test_list_body_without_features() {
        let envelope: DataEnvelope<FeatureList> = serde_json::from_str(r#"{"data":{}}"#).unwrap();
        assert!(envelope.data.feature.is_empty());
    }

    #[test]
    fn test_detail_body_decodes() {
        let json = r#"{"status":"success","data":{"feature":
            {"feature_id":"f2","name":"Audit","description":"Audit log","is_active":false}
        }}"#;
        let envelope: DataEnvelope<FeatureItem> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.data.feature.feature_id, "f2");
    }
}
