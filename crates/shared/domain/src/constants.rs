//! Phase and metric names shared by every platform strategy.
//!
//! These strings are the keys of [`crate::metrics::InitializationMetrics::phases`]
//! and the `phase` of recorded errors, so dashboards can rely on them.

/// Umbrella phase used for whole-run failures (errors, panics, timeouts).
pub const PHASE_INITIALIZE: &str = "initialize";
pub const PHASE_LOAD_FONTS: &str = "load_fonts";
pub const PHASE_PRELOAD_CRITICAL_ASSETS: &str = "preload_critical_assets";
pub const PHASE_INIT_WEB_VITALS: &str = "init_web_vitals";
pub const PHASE_REGISTER_SERVICE_WORKER: &str = "register_service_worker";
pub const PHASE_APPLY_NETWORK_OPTIMIZATIONS: &str = "apply_network_optimizations";
pub const PHASE_INIT_PERFORMANCE_MONITORING: &str = "init_performance_monitoring";
pub const PHASE_APPLY_PLATFORM_OPTIMIZATIONS: &str = "apply_platform_optimizations";

/// Metric emitted once per run when performance tracking is enabled.
pub const METRIC_APP_INITIALIZATION: &str = "app_initialization";

/// `component` attached to every metric emitted by the initializer.
pub const COMPONENT_APP_INITIALIZER: &str = "AppInitializer";

/// Directory segments that mark a JSON file as a translation bundle.
pub const TRANSLATION_SEGMENTS: [&str; 3] = ["locales", "locale", "i18n"];
