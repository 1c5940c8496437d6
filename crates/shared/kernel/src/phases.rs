//! Phase bodies shared by every platform strategy.

use crate::collaborators::{AssetLoader, FontLoader};
use crate::error::PhaseError;
use crate::registry::ResourceRegistry;
use ignite_domain::asset::FontFace;
use ignite_domain::options::AppInitializerOptions;
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, trace, warn};

/// Configured faces followed by registry fonts not already configured (by URL).
#[must_use]
pub fn font_plan(configured: &[FontFace], registry: &ResourceRegistry) -> Vec<FontFace> {
    let mut plan = configured.to_vec();
    for face in registry.font_faces() {
        if !plan.iter().any(|known| known.url == face.url) {
            plan.push(face);
        }
    }
    plan
}

/// Loads every face concurrently. A face that fails is logged and skipped; the
/// phase itself only reports how many faces loaded.
///
/// # Errors
/// Never fails today; the signature matches the other phase bodies.
pub async fn load_fonts(
    loader: Arc<dyn FontLoader>,
    faces: Vec<FontFace>,
) -> Result<usize, PhaseError> {
    let total = faces.len();
    let mut tasks = JoinSet::new();
    for face in faces {
        let loader = loader.clone();
        tasks.spawn(async move {
            let result = loader.load(&face).await;
            (face, result)
        });
    }

    let mut loaded = 0;
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((face, Ok(()))) => {
                loaded += 1;
                trace!(family = %face.family, "Font loaded");
            },
            Ok((face, Err(err))) => {
                warn!(
                    family = %face.family,
                    url = %face.url,
                    error = %err,
                    "Font failed; using fallback"
                );
            },
            Err(err) => warn!(error = %err, "Font task aborted"),
        }
    }

    debug!(loaded, total, "Fonts loaded");
    Ok(loaded)
}

/// Preloads the planned resources concurrently and waits for all of them.
///
/// # Errors
/// Returns one [`PhaseError::Partial`] listing every resource that failed.
pub async fn preload_assets(
    loader: Arc<dyn AssetLoader>,
    registry: &ResourceRegistry,
    options: &AppInitializerOptions,
) -> Result<usize, PhaseError> {
    let plan = registry.preload_plan(options);
    let total = plan.len();
    let mut tasks = JoinSet::new();
    for resource in plan {
        let loader = loader.clone();
        tasks.spawn(async move {
            let result = loader.preload(&resource).await;
            (resource, result)
        });
    }

    let mut failures = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((resource, Ok(()))) => {
                trace!(resource = %resource.id, kind = %resource.kind, "Preloaded");
            },
            Ok((resource, Err(err))) => failures.push(format!("{}: {err}", resource.id)),
            Err(err) => failures.push(format!("preload task: {err}")),
        }
    }

    if failures.is_empty() {
        debug!(total, "Critical assets preloaded");
        Ok(total)
    } else {
        failures.sort();
        Err(PhaseError::partial(failures.len(), total, &failures))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::{CollaboratorError, Noop};
    use async_trait::async_trait;
    use ignite_domain::asset::{AssetType, CriticalResource};

    #[derive(Debug)]
    struct RejectSvg;

    #[async_trait]
    impl AssetLoader for RejectSvg {
        async fn preload(&self, resource: &CriticalResource) -> Result<(), CollaboratorError> {
            if resource.id.ends_with(".svg") {
                return Err(CollaboratorError::rejected("unsupported"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl FontLoader for RejectSvg {
        async fn load(&self, face: &FontFace) -> Result<(), CollaboratorError> {
            if face.family == "Broken" {
                return Err(CollaboratorError::unavailable("offline"));
            }
            Ok(())
        }
    }

    #[test]
    fn test_font_plan_dedupes_by_url() {
        let registry = ResourceRegistry::with_resources([
            ("fonts/Inter.woff2", AssetType::Font),
            ("fonts/Mono.woff2", AssetType::Font),
        ]);
        let configured = [FontFace::new("Inter", "fonts/Inter.woff2")];
        let plan = font_plan(&configured, &registry);
        let families: Vec<_> = plan.iter().map(|f| f.family.as_str()).collect();
        assert_eq!(families, ["Inter", "Mono"]);
    }

    #[tokio::test]
    async fn test_font_failures_are_tolerated() {
        let faces = vec![FontFace::new("Inter", "a.woff2"), FontFace::new("Broken", "b.woff2")];
        let loaded = load_fonts(Arc::new(RejectSvg), faces).await.expect("never fails");
        assert_eq!(loaded, 1);
    }

    #[tokio::test]
    async fn test_preload_aggregates_failures() {
        let registry = ResourceRegistry::with_resources([
            ("logo.svg", AssetType::Image),
            ("hero.png", AssetType::Image),
            ("icon.svg", AssetType::Image),
        ]);
        let err = preload_assets(Arc::new(RejectSvg), &registry, &AppInitializerOptions::default())
            .await
            .expect_err("two images fail");
        let message = err.to_string();
        assert!(message.starts_with("Partial failure: 2 of 3 failed"), "{message}");
        assert!(message.contains("icon.svg: Rejected: unsupported"));
    }

    #[tokio::test]
    async fn test_empty_plan_succeeds() {
        let options = AppInitializerOptions::default();
        let loaded = preload_assets(Arc::new(Noop), &ResourceRegistry::new(), &options)
            .await
            .expect("nothing to do");
        assert_eq!(loaded, 0);
    }
}
