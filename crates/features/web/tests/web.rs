mod support;

use ignite_domain::signals::{ConnectionType, NetworkQuality};
use ignite_kernel::prelude::*;
use ignite_telemetry::MemorySink;
use ignite_web::WebInitializer;
use std::sync::Arc;
use std::time::Duration;
use support::{CountingSplash, FailingAssets, FixedNetwork, Recorder, StalledFonts};

fn quiet() -> Collaborators {
    Collaborators::default().with_telemetry(Arc::new(MemorySink::new()))
}

#[tokio::test(start_paused = true)]
async fn disabled_fonts_leave_no_font_phase() {
    let fonts = Recorder::shared();
    let web = WebInitializer::builder().collaborators(quiet().with_fonts(fonts.clone())).build();

    web.initialize(AppInitializerOptions::default().with_fonts(false)).await;

    assert_eq!(web.initialization_status(), InitializationStatus::Completed);
    assert!(web.initialization_metrics().phase(PHASE_LOAD_FONTS).is_none());
    assert!(fonts.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn failing_preload_keeps_run_completed() {
    let web = WebInitializer::builder()
        .collaborators(quiet().with_assets(Arc::new(FailingAssets)))
        .resources(Vec::<(String, AssetType)>::new())
        .build();
    web.add_critical_resource("images/hero.png", AssetType::Image);

    web.initialize(AppInitializerOptions::default().with_fonts(false)).await;

    assert_eq!(web.initialization_status(), InitializationStatus::Completed);
    let metrics = web.initialization_metrics();
    assert_eq!(metrics.errors.len(), 1);
    assert_eq!(metrics.errors[0].phase, PHASE_PRELOAD_CRITICAL_ASSETS);
    assert!(metrics.errors[0].error.contains("images/hero.png"));
    let phase = metrics.phase(PHASE_PRELOAD_CRITICAL_ASSETS).expect("phase recorded");
    assert!(phase.duration.is_some());
    assert!(metrics.is_phase_complete(PHASE_APPLY_NETWORK_OPTIMIZATIONS));
}

#[tokio::test(start_paused = true)]
async fn idle_run_completes_with_no_phases() {
    let web = WebInitializer::builder().collaborators(quiet()).resources(Vec::<(String, AssetType)>::new()).build();

    web.initialize(AppInitializerOptions::idle()).await;

    assert_eq!(web.initialization_status(), InitializationStatus::Completed);
    let metrics = web.initialization_metrics();
    assert!(metrics.phases.is_empty());
    assert!(metrics.errors.is_empty());
    assert!(metrics.total_duration.is_some());
}

#[tokio::test(start_paused = true)]
async fn stalled_fonts_time_out() {
    let web = WebInitializer::builder()
        .collaborators(quiet().with_fonts(Arc::new(StalledFonts)))
        .build();
    let begun = tokio::time::Instant::now();

    web.initialize(AppInitializerOptions::default().with_timeout(Duration::from_millis(50))).await;

    assert!(begun.elapsed() < Duration::from_millis(100));
    assert!(web.is_app_initialized());
    assert_eq!(web.initialization_status(), InitializationStatus::TimedOut);
    assert_eq!(web.initialization_metrics().interrupted_phases(), vec![PHASE_LOAD_FONTS]);
}

#[tokio::test(start_paused = true)]
async fn concurrent_initialize_runs_phases_once() {
    let fonts = Recorder::shared();
    let web = WebInitializer::builder().collaborators(quiet().with_fonts(fonts.clone())).build();
    let options = AppInitializerOptions::default();

    tokio::join!(web.initialize(options.clone()), web.initialize(options.clone()));
    web.initialize(options).await;

    let mut loaded = fonts.calls();
    loaded.sort();
    assert_eq!(loaded, ["fonts/Inter-Regular.woff2", "fonts/Inter-SemiBold.woff2"]);
    assert_eq!(web.initialization_status(), InitializationStatus::Completed);
}

#[tokio::test(start_paused = true)]
async fn service_worker_registers_in_background() {
    let registrar = Recorder::shared();
    let web = WebInitializer::builder()
        .collaborators(quiet())
        .service_worker(registrar.clone())
        .service_worker_url(Some("/sw.js"))
        .build();

    web.initialize(AppInitializerOptions::default()).await;
    tokio::time::sleep(Duration::from_millis(1)).await;

    assert_eq!(registrar.calls(), ["/sw.js"]);
    assert!(web.initialization_metrics().is_phase_complete(PHASE_REGISTER_SERVICE_WORKER));
}

#[tokio::test(start_paused = true)]
async fn minimal_level_skips_optimizations() {
    let registrar = Recorder::shared();
    let web = WebInitializer::builder()
        .collaborators(quiet())
        .service_worker(registrar.clone())
        .network(Arc::new(FixedNetwork(NetworkQuality::new(ConnectionType::TwoG))))
        .build();

    let options =
        AppInitializerOptions::default().with_optimization_level(OptimizationLevel::Minimal);
    web.initialize(options).await;
    tokio::time::sleep(Duration::from_millis(1)).await;

    assert!(registrar.calls().is_empty());
    assert!(web.runtime_flags().is_empty());
    let metrics = web.initialization_metrics();
    assert!(metrics.phase(PHASE_APPLY_NETWORK_OPTIMIZATIONS).is_none());
    assert!(metrics.phase(PHASE_REGISTER_SERVICE_WORKER).is_none());
}

#[tokio::test(start_paused = true)]
async fn slow_network_sets_low_data_flags() {
    let web = WebInitializer::builder()
        .collaborators(quiet())
        .network(Arc::new(FixedNetwork(NetworkQuality::new(ConnectionType::Slow2g))))
        .build();

    web.initialize(AppInitializerOptions::default()).await;

    let flags = web.runtime_flags();
    assert!(flags.contains(RuntimeFlags::LOW_DATA | RuntimeFlags::DISABLE_PREFETCH));
    assert!(flags.contains(RuntimeFlags::REDUCED_IMAGE_QUALITY));
}

#[tokio::test(start_paused = true)]
async fn every_web_vital_is_observed() {
    let vitals = Recorder::shared();
    let web = WebInitializer::builder().collaborators(quiet()).vitals(vitals.clone()).build();

    web.initialize(AppInitializerOptions::default()).await;

    assert_eq!(vitals.calls(), ["LCP", "FID", "CLS", "TTFB", "FCP"]);
    assert!(web.initialization_metrics().is_phase_complete(PHASE_INIT_WEB_VITALS));
}

#[tokio::test(start_paused = true)]
async fn planned_assets_respect_gates() {
    let assets = Recorder::shared();
    let web = WebInitializer::builder().collaborators(quiet().with_assets(assets.clone())).build();

    web.initialize(AppInitializerOptions::default().with_images(false)).await;

    let mut loaded = assets.calls();
    loaded.sort();
    assert_eq!(loaded, ["config/app.json", "locales/en.json", "styles/critical.css"]);
}

#[tokio::test(start_paused = true)]
async fn splash_hides_once_after_initialization() {
    let splash = Arc::new(CountingSplash::default());
    let web = WebInitializer::builder().collaborators(quiet().with_splash(splash.clone())).build();

    web.hide_splash_screen().await;
    web.hide_splash_screen().await;

    assert!(web.is_app_initialized());
    assert_eq!(splash.count(), 1);
    assert_eq!(splash.last_fade_ms.load(std::sync::atomic::Ordering::SeqCst), 300);
}

#[tokio::test(start_paused = true)]
async fn late_resources_do_not_touch_finished_run() {
    let assets = Recorder::shared();
    let web = WebInitializer::builder()
        .collaborators(quiet().with_assets(assets.clone()))
        .service_worker_url(None::<String>)
        .build();
    web.initialize(AppInitializerOptions::default()).await;
    let before = web.initialization_metrics();
    let preloaded = assets.calls().len();

    web.add_critical_resource("images/late.png", AssetType::Image);
    web.initialize(AppInitializerOptions::default()).await;

    assert_eq!(web.initialization_metrics(), before);
    assert_eq!(assets.calls().len(), preloaded);
}
