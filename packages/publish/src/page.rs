use chrono::{DateTime, Utc};
use pagesmith_model::{Document, SeoMetadata, Theme};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    #[default]
    Draft,
    Published,
}

impl PageStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PageStatus::Draft => "draft",
            PageStatus::Published => "published",
        }
    }
}

impl fmt::Display for PageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compiled output stored alongside a published page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedArtifact {
    pub slug: String,
    pub markup: String,
    pub stylesheet: String,
    pub published_at: DateTime<Utc>,
    pub url: String,
}

/// One stored page: the editable document plus its publication state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
    pub page_id: String,
    pub user_id: String,
    pub title: String,
    pub slug: String,
    pub template_id: String,
    #[serde(rename = "structure")]
    pub document: Document,
    pub theme: Theme,
    #[serde(default)]
    pub seo: SeoMetadata,
    #[serde(default)]
    pub status: PageStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact: Option<PublishedArtifact>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PageRecord {
    pub fn summary(&self) -> PageSummary {
        PageSummary {
            page_id: self.page_id.clone(),
            user_id: self.user_id.clone(),
            title: self.title.clone(),
            slug: self.slug.clone(),
            status: self.status,
            published_url: self.artifact.as_ref().map(|a| a.url.clone()),
            updated_at: self.updated_at,
        }
    }

    pub fn is_published(&self) -> bool {
        self.status == PageStatus::Published
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.artifact.as_ref().map(|a| a.published_at)
    }
}

/// Listing and lookup view of a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    pub page_id: String,
    pub user_id: String,
    pub title: String,
    pub slug: String,
    pub status: PageStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Request to seed a new page from a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPage {
    pub template_id: String,
    pub user_id: String,
    #[serde(default)]
    pub username: Option<String>,
    pub title: String,
}
