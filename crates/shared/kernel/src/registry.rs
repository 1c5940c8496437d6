use fxhash::FxHashMap;
use ignite_domain::asset::{AssetType, CriticalResource, FontFace};
use ignite_domain::options::AppInitializerOptions;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, Default)]
struct Entries {
    order: Vec<String>,
    kinds: FxHashMap<String, AssetType>,
}

/// Resources that must be fetched before first paint.
///
/// Iterates in insertion order. Re-adding an id replaces its type but keeps its
/// position. Entries are never removed.
#[derive(Debug, Clone, Default)]
pub struct ResourceRegistry {
    entries: Arc<RwLock<Entries>>,
}

impl ResourceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_resources<I, S>(resources: I) -> Self
    where
        I: IntoIterator<Item = (S, AssetType)>,
        S: Into<String>,
    {
        let registry = Self::new();
        for (id, kind) in resources {
            registry.add(id, kind);
        }
        registry
    }

    /// Inserts or overwrites `id`. Returns the previous type, if any.
    pub fn add(&self, id: impl Into<String>, kind: AssetType) -> Option<AssetType> {
        let id = id.into();
        let mut entries = self.entries.write();
        let previous = entries.kinds.insert(id.clone(), kind);
        if previous.is_none() {
            entries.order.push(id);
        }
        previous
    }

    /// Adds `id` with a type inferred from its extension; unknown types are skipped.
    pub fn add_inferred(&self, id: &str) -> Option<AssetType> {
        let Some(kind) = AssetType::infer(id) else {
            warn!(resource = id, "Skipping critical resource with unknown type");
            return None;
        };
        self.add(id, kind);
        debug!(resource = id, kind = %kind, "Critical resource registered");
        Some(kind)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<AssetType> {
        self.entries.read().kinds.get(id).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<CriticalResource> {
        let entries = self.entries.read();
        entries
            .order
            .iter()
            .filter_map(|id| entries.kinds.get(id).map(|kind| CriticalResource::new(id, *kind)))
            .collect()
    }

    /// Resources the asset phase should fetch under `options`.
    ///
    /// Fonts are left to the font phase; stylesheets and scripts are always planned.
    #[must_use]
    pub fn preload_plan(&self, options: &AppInitializerOptions) -> Vec<CriticalResource> {
        self.snapshot()
            .into_iter()
            .filter(|resource| match resource.kind {
                AssetType::Image => options.preload_images,
                AssetType::Configuration | AssetType::Translation => options.preload_config,
                AssetType::Stylesheet | AssetType::Script => true,
                AssetType::Font => false,
            })
            .collect()
    }

    /// Registered fonts as faces named after their file stem.
    #[must_use]
    pub fn font_faces(&self) -> Vec<FontFace> {
        self.snapshot()
            .into_iter()
            .filter(|resource| resource.kind == AssetType::Font)
            .map(|resource| FontFace::from_url(resource.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(resources: &[CriticalResource]) -> Vec<&str> {
        resources.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_last_write_wins_and_keeps_position() {
        let registry = ResourceRegistry::new();
        registry.add("a.png", AssetType::Image);
        registry.add("b.css", AssetType::Stylesheet);
        assert_eq!(registry.add("a.png", AssetType::Configuration), Some(AssetType::Image));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("a.png"), Some(AssetType::Configuration));
        assert_eq!(ids(&registry.snapshot()), ["a.png", "b.css"]);
    }

    #[test]
    fn test_preload_plan_applies_gates() {
        let registry = ResourceRegistry::with_resources([
            ("logo.png", AssetType::Image),
            ("Inter.woff2", AssetType::Font),
            ("app.json", AssetType::Configuration),
            ("locales/en.json", AssetType::Translation),
            ("app.css", AssetType::Stylesheet),
            ("boot.js", AssetType::Script),
        ]);

        let all = registry.preload_plan(&AppInitializerOptions::default());
        assert_eq!(ids(&all), ["logo.png", "app.json", "locales/en.json", "app.css", "boot.js"]);

        let no_images = AppInitializerOptions::default().with_images(false);
        assert_eq!(
            ids(&registry.preload_plan(&no_images)),
            ["app.json", "locales/en.json", "app.css", "boot.js"]
        );

        let idle = AppInitializerOptions::idle();
        assert_eq!(ids(&registry.preload_plan(&idle)), ["app.css", "boot.js"]);
    }

    #[test]
    fn test_add_inferred_skips_unknown() {
        let registry = ResourceRegistry::new();
        assert_eq!(registry.add_inferred("i18n/uk.json"), Some(AssetType::Translation));
        assert_eq!(registry.add_inferred("blob"), None);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_font_faces_from_registry() {
        let registry = ResourceRegistry::with_resources([
            ("fonts/Inter-Regular.woff2", AssetType::Font),
            ("logo.svg", AssetType::Image),
        ]);
        let faces = registry.font_faces();
        assert_eq!(faces.len(), 1);
        assert_eq!(faces[0].family, "Inter-Regular");
    }
}
