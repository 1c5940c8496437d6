use ignite_domain::asset::{AssetType, FontFace};

pub const DEFAULT_SERVICE_WORKER: &str = "/service-worker.js";

/// Resources every web build needs before first paint.
#[must_use]
pub fn default_resources() -> Vec<(String, AssetType)> {
    [
        ("images/logo.svg", AssetType::Image),
        ("images/splash-background.webp", AssetType::Image),
        ("config/app.json", AssetType::Configuration),
        ("locales/en.json", AssetType::Translation),
        ("styles/critical.css", AssetType::Stylesheet),
    ]
    .into_iter()
    .map(|(id, kind)| (id.to_owned(), kind))
    .collect()
}

#[must_use]
pub fn default_fonts() -> Vec<FontFace> {
    vec![
        FontFace::new("Inter", "fonts/Inter-Regular.woff2"),
        FontFace::new("Inter", "fonts/Inter-SemiBold.woff2").with_weight(600),
    ]
}
