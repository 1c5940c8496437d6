use crate::constants::TRANSLATION_SEGMENTS;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a critical resource, decided by its extension and location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    Image,
    Font,
    Configuration,
    Translation,
    Stylesheet,
    Script,
}

impl AssetType {
    /// Infers the type from a resource identifier (path or URL).
    ///
    /// Query strings and fragments are ignored. JSON files below a `locales/`,
    /// `locale/` or `i18n/` segment are translations; other JSON is configuration.
    /// Returns `None` for unknown or missing extensions.
    ///
    /// ```rust
    /// use ignite_domain::asset::AssetType;
    ///
    /// assert_eq!(AssetType::infer("img/logo.svg?v=3"), Some(AssetType::Image));
    /// assert_eq!(AssetType::infer("locales/en.json"), Some(AssetType::Translation));
    /// assert_eq!(AssetType::infer("README"), None);
    /// ```
    #[must_use]
    pub fn infer(resource: &str) -> Option<Self> {
        let path = resource.split(['?', '#']).next().unwrap_or(resource);
        let file = path.rsplit('/').next().unwrap_or(path);
        let (_, ext) = file.rsplit_once('.')?;

        match ext.to_ascii_lowercase().as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "svg" | "avif" | "ico" => Some(Self::Image),
            "woff" | "woff2" | "ttf" | "otf" => Some(Self::Font),
            "css" => Some(Self::Stylesheet),
            "js" | "mjs" => Some(Self::Script),
            "json" if is_localized(path) => Some(Self::Translation),
            "json" | "toml" | "yaml" | "yml" => Some(Self::Configuration),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Font => "font",
            Self::Configuration => "configuration",
            Self::Translation => "translation",
            Self::Stylesheet => "stylesheet",
            Self::Script => "script",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_localized(path: &str) -> bool {
    path.split('/').any(|segment| TRANSLATION_SEGMENTS.contains(&segment))
}

/// A resource that must be fetched before the app is considered ready.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CriticalResource {
    pub id: String,
    pub kind: AssetType,
}

impl CriticalResource {
    #[must_use]
    pub fn new(id: impl Into<String>, kind: AssetType) -> Self {
        Self { id: id.into(), kind }
    }

    /// Builds a resource with an inferred type, or `None` when the type is unknown.
    #[must_use]
    pub fn inferred(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        AssetType::infer(&id).map(|kind| Self { id, kind })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// CSS `font-display` strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontDisplay {
    Auto,
    Block,
    #[default]
    Swap,
    Fallback,
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FontDescriptor {
    pub weight: u16,
    pub style: FontStyle,
    pub display: FontDisplay,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self { weight: 400, style: FontStyle::Normal, display: FontDisplay::Swap }
    }
}

/// A font face to register before first paint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontFace {
    pub family: String,
    pub url: String,
    #[serde(default)]
    pub descriptor: FontDescriptor,
}

impl FontFace {
    #[must_use]
    pub fn new(family: impl Into<String>, url: impl Into<String>) -> Self {
        Self { family: family.into(), url: url.into(), descriptor: FontDescriptor::default() }
    }

    /// Derives the family from the file stem (`fonts/Inter-Bold.woff2` -> `Inter-Bold`).
    #[must_use]
    pub fn from_url(url: impl Into<String>) -> Self {
        let url = url.into();
        let file = url.rsplit('/').next().unwrap_or(&url);
        let family = file.split_once('.').map_or(file, |(stem, _)| stem).to_owned();
        Self::new(family, url)
    }

    #[must_use]
    pub const fn with_weight(mut self, weight: u16) -> Self {
        self.descriptor.weight = weight;
        self
    }

    #[must_use]
    pub const fn with_style(mut self, style: FontStyle) -> Self {
        self.descriptor.style = style;
        self
    }

    #[must_use]
    pub const fn with_display(mut self, display: FontDisplay) -> Self {
        self.descriptor.display = display;
        self
    }
}
