use crate::error::AssetError;
use std::path::{Component, Path, PathBuf};

/// Collapse `.` / `..` lexically without ever climbing above the root.
fn normalize_relative(path: &Path) -> Result<PathBuf, AssetError> {
    let mut out = PathBuf::new();

    for c in path.components() {
        match c {
            Component::CurDir => {},
            Component::Normal(seg) => out.push(seg),
            Component::ParentDir => {
                if !out.pop() {
                    return Err(AssetError::PathTraversalAttempt {
                        message: path.display().to_string().into(),
                        context: Some("Asset id escapes the asset root via '..'".into()),
                    });
                }
            },
            Component::RootDir | Component::Prefix(_) => {
                return Err(AssetError::PathTraversalAttempt {
                    message: path.display().to_string().into(),
                    context: Some("Absolute asset ids are not allowed".into()),
                });
            },
        }
    }

    Ok(out)
}

/// Strips URL decorations: a leading `/`, query string and fragment.
pub(crate) fn asset_path(id: &str) -> &str {
    let end = id.find(['?', '#']).unwrap_or(id.len());
    id[..end].trim_start_matches('/')
}

fn relative_path(id: &str) -> Result<PathBuf, AssetError> {
    let relative = normalize_relative(Path::new(asset_path(id)))?;
    if relative.as_os_str().is_empty() {
        return Err(AssetError::NotFound {
            message: id.to_owned().into(),
            context: Some("Asset id names the asset root".into()),
        });
    }
    Ok(relative)
}

/// Canonical cache key of `id`: the normalized relative path, `/`-separated.
pub(crate) fn cache_key(id: &str) -> Result<String, AssetError> {
    let relative = relative_path(id)?;
    let segments: Vec<_> =
        relative.components().map(|c| c.as_os_str().to_string_lossy()).collect();
    Ok(segments.join("/"))
}

/// Maps a resource id onto a file below `root` (already canonical).
pub(crate) fn resolve_path(root: &Path, id: &str) -> Result<PathBuf, AssetError> {
    let relative = relative_path(id)?;
    let joined = root.join(relative);
    match joined.canonicalize() {
        Ok(canonical) if canonical.starts_with(root) => Ok(canonical),
        Ok(canonical) => Err(AssetError::PathTraversalAttempt {
            message: canonical.display().to_string().into(),
            context: Some("Asset resolves outside the asset root".into()),
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(AssetError::NotFound { message: id.to_owned().into(), context: None })
        },
        Err(e) => Err(AssetError::Io { source: e, context: Some("Failed to resolve asset".into()) }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_decorations_are_stripped() {
        assert_eq!(asset_path("/images/logo.svg?v=3#top"), "images/logo.svg");
        assert_eq!(asset_path("fonts/Inter.woff2"), "fonts/Inter.woff2");
    }

    #[test]
    fn test_aliased_ids_share_a_cache_key() {
        let plain = cache_key("logo.svg").ok();
        assert_eq!(plain.as_deref(), Some("logo.svg"));
        assert_eq!(cache_key("images/../logo.svg").ok(), plain);
        assert_eq!(cache_key("/./logo.svg?v=2").ok(), plain);
        assert!(cache_key("../logo.svg").is_err());
    }

    #[test]
    fn test_inner_parent_segments_collapse() {
        let path = normalize_relative(Path::new("images/../fonts/./Inter.woff2"));
        assert_eq!(path.ok(), Some(PathBuf::from("fonts/Inter.woff2")));
    }

    #[test]
    fn test_escaping_ids_are_refused() {
        assert!(matches!(
            normalize_relative(Path::new("fonts/../../secret")),
            Err(AssetError::PathTraversalAttempt { .. })
        ));
    }
}
