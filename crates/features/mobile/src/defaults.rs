use ignite_domain::asset::{AssetType, FontFace};

/// Bundled resources the first native screen needs.
#[must_use]
pub fn default_resources() -> Vec<(String, AssetType)> {
    [
        ("images/logo.png", AssetType::Image),
        ("config/app.json", AssetType::Configuration),
        ("locales/en.json", AssetType::Translation),
    ]
    .into_iter()
    .map(|(id, kind)| (id.to_owned(), kind))
    .collect()
}

#[must_use]
pub fn default_fonts() -> Vec<FontFace> {
    vec![FontFace::new("Inter", "fonts/Inter-Regular.ttf")]
}
