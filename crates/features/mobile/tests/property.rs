mod support;

use ignite_kernel::prelude::*;
use ignite_mobile::MobileInitializer;
use ignite_telemetry::MemorySink;
use proptest::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use support::{BrokenDevice, FailingAssets, StalledFonts};
use tokio::time::Instant;

const MOBILE_PHASES: [&str; 4] = [
    PHASE_LOAD_FONTS,
    PHASE_PRELOAD_CRITICAL_ASSETS,
    PHASE_INIT_PERFORMANCE_MONITORING,
    PHASE_APPLY_PLATFORM_OPTIMIZATIONS,
];

fn options() -> impl Strategy<Value = AppInitializerOptions> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        prop_oneof![
            Just(OptimizationLevel::Minimal),
            Just(OptimizationLevel::Balanced),
            Just(OptimizationLevel::Aggressive),
        ],
        proptest::collection::vec("(images|config|locales)/[a-z]{1,8}\\.(png|json)", 0..4),
        20u64..200,
    )
        .prop_map(|(fonts, images, config, track, level, resources, timeout_ms)| {
            AppInitializerOptions::default()
                .with_fonts(fonts)
                .with_images(images)
                .with_config(config)
                .with_performance_tracking(track)
                .with_optimization_level(level)
                .with_critical_resources(resources)
                .with_timeout(Duration::from_millis(timeout_ms))
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn initialize_never_outlives_its_timeout(
        options in options(),
        stall_fonts in any::<bool>(),
        fail_assets in any::<bool>(),
        broken_device in any::<bool>(),
    ) {
        let mut collaborators =
            Collaborators::default().with_telemetry(Arc::new(MemorySink::new()));
        if stall_fonts {
            collaborators = collaborators.with_fonts(Arc::new(StalledFonts));
        }
        if fail_assets {
            collaborators = collaborators.with_assets(Arc::new(FailingAssets));
        }
        let mut builder = MobileInitializer::builder().collaborators(collaborators);
        if broken_device {
            builder = builder.device(Arc::new(BrokenDevice));
        }
        let mobile = builder.build();
        let timeout = options.initialization_timeout;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .start_paused(true)
            .build()
            .expect("test runtime");
        let elapsed = runtime.block_on(async {
            let begun = Instant::now();
            mobile.initialize(options).await;
            begun.elapsed()
        });

        prop_assert!(elapsed <= timeout + Duration::from_millis(10));
        prop_assert!(mobile.is_app_initialized());
        prop_assert!(mobile.initialization_status().is_terminal());

        let metrics = mobile.initialization_metrics();
        prop_assert!(metrics.phases.keys().all(|name| MOBILE_PHASES.contains(&name.as_str())));
        prop_assert!(metrics.errors_for(PHASE_INITIALIZE).count() <= 1);
        for phase in MOBILE_PHASES {
            prop_assert!(metrics.errors_for(phase).count() <= 1, "{} reported twice", phase);
        }
    }
}
