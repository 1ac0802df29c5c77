//! Slug Endpoints

use serde::Deserialize;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{Slug, SlugDraft};

#[derive(Debug, Deserialize)]
struct SlugList {
    #[serde(default)]
    slug: Vec<Slug>,
}

impl ApiClient {
    pub async fn list_slugs(&self) -> Result<Vec<Slug>, ApiError> {
        let list: SlugList = self.get_data(&self.url(&["slugs"])).await?;
        Ok(list.slug)
    }

    pub async fn create_slug(&self, draft: &SlugDraft) -> Result<(), ApiError> {
        self.post_json(&self.url(&["slugs"]), draft).await
    }

    pub async fn delete_slug(&self, slug_id: &str) -> Result<(), ApiError> {
        self.delete(&self.url(&["slugs", slug_id])).await
    }
}
