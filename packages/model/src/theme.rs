use crate::{Direction, Locale};
use serde::{Deserialize, Serialize};

/// Locale plus design tokens applied uniformly at compile time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(rename = "language")]
    pub locale: Locale,
    pub colors: ColorPalette,
    pub fonts: FontSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub text: String,
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSettings {
    pub heading: String,
    pub body: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            colors: ColorPalette {
                primary: "#3b82f6".to_string(),
                secondary: "#8b5cf6".to_string(),
                background: "#ffffff".to_string(),
                text: "#1f2937".to_string(),
                accent: "#f59e0b".to_string(),
            },
            fonts: FontSettings {
                heading: "Inter".to_string(),
                body: "Inter".to_string(),
            },
        }
    }
}

impl Theme {
    pub fn direction(&self) -> Direction {
        self.locale.direction()
    }

    /// Merge a partial update; colors and fonts merge field by field
    pub fn apply(&mut self, patch: ThemePatch) {
        if let Some(locale) = patch.locale {
            self.locale = locale;
        }

        if let Some(colors) = patch.colors {
            let palette = &mut self.colors;
            for (slot, value) in [
                (&mut palette.primary, colors.primary),
                (&mut palette.secondary, colors.secondary),
                (&mut palette.background, colors.background),
                (&mut palette.text, colors.text),
                (&mut palette.accent, colors.accent),
            ] {
                if let Some(value) = value {
                    *slot = value;
                }
            }
        }

        if let Some(fonts) = patch.fonts {
            if let Some(heading) = fonts.heading {
                self.fonts.heading = heading;
            }
            if let Some(body) = fonts.body {
                self.fonts.body = body;
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePatch {
    #[serde(rename = "language", default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fonts: Option<FontPatch>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FontPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}
