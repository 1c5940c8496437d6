use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Platform family whose startup strategy should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    Web,
    Mobile,
}

impl PlatformKind {
    /// Platform of the current compilation target; desktop builds use the web strategy.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(any(target_os = "android", target_os = "ios")) { Self::Mobile } else { Self::Web }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Mobile => "mobile",
        }
    }
}

impl Default for PlatformKind {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the splash screen leaves the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SplashTransition {
    #[serde(with = "crate::duration::millis")]
    pub fade: Duration,
}

impl SplashTransition {
    pub const WEB_FADE: Duration = Duration::from_millis(300);

    #[must_use]
    pub const fn fade(duration: Duration) -> Self {
        Self { fade: duration }
    }

    /// Native splash screens are dismissed without animation.
    #[must_use]
    pub const fn immediate() -> Self {
        Self { fade: Duration::ZERO }
    }

    #[must_use]
    pub const fn for_platform(platform: PlatformKind) -> Self {
        match platform {
            PlatformKind::Web => Self::fade(Self::WEB_FADE),
            PlatformKind::Mobile => Self::immediate(),
        }
    }
}
