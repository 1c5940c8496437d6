use ignite::prelude::*;
use ignite_domain::config::BootstrapConfig;
use ignite_telemetry::MemorySink;
use std::sync::Arc;
use std::time::Duration;

fn quiet() -> Collaborators {
    Collaborators::default().with_telemetry(Arc::new(MemorySink::new()))
}

#[tokio::test(start_paused = true)]
async fn picks_strategy_per_platform() {
    let web = Orchestrator::for_platform(PlatformKind::Web, quiet());
    let mobile = Orchestrator::for_platform(PlatformKind::Mobile, quiet());

    web.initialize(AppInitializerOptions::default()).await;
    mobile.initialize(AppInitializerOptions::default()).await;

    assert_eq!(web.platform(), PlatformKind::Web);
    assert_eq!(mobile.platform(), PlatformKind::Mobile);
    assert!(web.initialization_metrics().phase(PHASE_INIT_WEB_VITALS).is_some());
    assert!(mobile.initialization_metrics().phase(PHASE_INIT_PERFORMANCE_MONITORING).is_some());
}

#[tokio::test(start_paused = true)]
async fn delegates_every_operation() {
    let orchestrator = Orchestrator::for_platform(PlatformKind::Web, quiet());
    assert_eq!(orchestrator.initialization_status(), InitializationStatus::NotStarted);
    assert!(!orchestrator.is_app_initialized());

    orchestrator.add_critical_resource("styles/theme.css", AssetType::Stylesheet);
    orchestrator.hide_splash_screen().await;

    assert!(orchestrator.is_app_initialized());
    assert_eq!(orchestrator.initialization_status(), InitializationStatus::Completed);
    assert!(orchestrator.initializer().is_app_initialized());
    assert_eq!(orchestrator.runtime_flags(), RuntimeFlags::empty());
}

#[tokio::test(start_paused = true)]
async fn config_overrides_detection() {
    let mut config = BootstrapConfig::default();
    config.platform = Some(PlatformKind::Mobile);

    let orchestrator = Orchestrator::from_config(&config, quiet());

    assert_eq!(orchestrator.platform(), PlatformKind::Mobile);
}

#[tokio::test(start_paused = true)]
async fn config_without_platform_uses_current_target() {
    let orchestrator = Orchestrator::from_config(&BootstrapConfig::default(), quiet());
    assert_eq!(orchestrator.platform(), PlatformKind::current());
}

#[tokio::test(start_paused = true)]
async fn clones_share_one_run() {
    let orchestrator = Orchestrator::detect(quiet());
    let twin = orchestrator.clone();
    let options = AppInitializerOptions::default().with_timeout(Duration::from_secs(1));

    tokio::join!(orchestrator.initialize(options.clone()), twin.initialize(options));

    assert!(twin.is_app_initialized());
    assert_eq!(twin.initialization_metrics(), orchestrator.initialization_metrics());
}
