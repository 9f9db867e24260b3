//! The JSON export envelope.
//!
//! An export is a lossless snapshot of a document and its theme, distinct
//! from the compiled page. Import validates the whole envelope up front so
//! callers can refuse to persist anything that would not load back.

use crate::{Document, GlobalStyles, Locale, Section, Theme, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

pub const EXPORT_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    pub exported_at: DateTime<Utc>,
    #[serde(default, alias = "pageId", skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedPage {
    pub version: String,
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_styles: Option<GlobalStyles>,
    pub theme: Theme,
    pub metadata: ExportMetadata,
}

impl ExportedPage {
    pub fn new(
        document: &Document,
        theme: &Theme,
        document_id: Option<&str>,
        exported_at: DateTime<Utc>,
    ) -> Self {
        Self {
            version: EXPORT_VERSION.to_string(),
            sections: document.sections.clone(),
            global_styles: document.global_styles.clone(),
            theme: theme.clone(),
            metadata: ExportMetadata {
                exported_at,
                document_id: document_id.map(str::to_string),
            },
        }
    }

    /// Split into a normalized document and its theme
    pub fn into_parts(self) -> (Document, Theme) {
        let mut document = Document {
            sections: self.sections,
            global_styles: self.global_styles,
        };
        document.normalize();
        (document, self.theme)
    }
}

/// Pretty-printed export envelope stamped with the current time
pub fn export_to_json(
    document: &Document,
    theme: &Theme,
    document_id: Option<&str>,
) -> serde_json::Result<String> {
    let exported = ExportedPage::new(document, theme, document_id, Utc::now());
    serde_json::to_string_pretty(&exported)
}

/// Parse and fully validate an export envelope.
///
/// Checks, in order: valid JSON object, a `sections` array, a theme, and
/// for every section an `id`, `type`, `order` and non-null content for
/// both locales that fits the section type's schema. Section and element
/// ids must not repeat anywhere in the document.
pub fn import_from_json(json: &str) -> Result<ExportedPage, ValidationError> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| ValidationError::Malformed(e.to_string()))?;
    let Value::Object(mut envelope) = value else {
        return Err(ValidationError::Malformed("expected a JSON object".to_string()));
    };

    let raw_sections = match envelope.remove("sections") {
        Some(Value::Array(sections)) => sections,
        _ => return Err(ValidationError::MissingSections),
    };

    let theme = match envelope.remove("theme") {
        None | Some(Value::Null) => return Err(ValidationError::MissingTheme),
        Some(theme) => serde_json::from_value::<Theme>(theme)
            .map_err(|e| ValidationError::InvalidTheme(e.to_string()))?,
    };

    let mut sections = Vec::with_capacity(raw_sections.len());
    for (index, raw) in raw_sections.into_iter().enumerate() {
        check_section_fields(index, &raw)?;
        sections.push(Section::from_value(raw)?);
    }
    check_unique_ids(&sections)?;

    let global_styles = match envelope.remove("globalStyles") {
        None | Some(Value::Null) => None,
        Some(styles) => Some(
            serde_json::from_value(styles).map_err(|e| ValidationError::Malformed(e.to_string()))?,
        ),
    };

    let version = match envelope.remove("version") {
        Some(Value::String(version)) => version,
        _ => EXPORT_VERSION.to_string(),
    };

    let metadata = match envelope.remove("metadata") {
        Some(metadata) => serde_json::from_value(metadata)
            .map_err(|e| ValidationError::Malformed(format!("metadata: {}", e)))?,
        None => ExportMetadata {
            exported_at: Utc::now(),
            document_id: None,
        },
    };

    Ok(ExportedPage {
        version,
        sections,
        global_styles,
        theme,
        metadata,
    })
}

fn check_section_fields(index: usize, raw: &Value) -> Result<(), ValidationError> {
    let missing = |field| ValidationError::MissingSectionField { index, field };

    if !raw.is_object() {
        return Err(ValidationError::Malformed(format!(
            "section at index {} is not an object",
            index
        )));
    }

    for field in ["id", "type", "order"] {
        if raw.get(field).map_or(true, Value::is_null) {
            return Err(missing(field));
        }
    }

    let section_id = raw["id"].as_str().unwrap_or_default().to_string();
    for locale in Locale::ALL {
        let present = raw
            .get("content")
            .and_then(|c| c.get(locale.code()))
            .map_or(false, |v| !v.is_null());
        if !present {
            return Err(ValidationError::MissingLocale {
                section_id,
                locale,
            });
        }
    }

    Ok(())
}

fn check_unique_ids(sections: &[Section]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    let ids = sections.iter().flat_map(|section| {
        std::iter::once(&section.id).chain(section.elements.iter().map(|e| &e.id))
    });
    for id in ids {
        if !seen.insert(id.as_str()) {
            return Err(ValidationError::DuplicateId(id.clone()));
        }
    }
    Ok(())
}
