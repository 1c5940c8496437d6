use ignite::prelude::*;

// Own test binary: the process-wide orchestrator can be set only once.
#[tokio::test]
async fn installed_orchestrator_is_global() {
    let orchestrator = Orchestrator::for_platform(PlatformKind::Mobile, Collaborators::default());
    let installed = orchestrator.install().expect("first install wins");

    assert_eq!(installed.platform(), PlatformKind::Mobile);
    assert!(std::ptr::eq(installed, Orchestrator::global()));

    let second = Orchestrator::for_platform(PlatformKind::Web, Collaborators::default());
    assert!(second.install().is_err());
    assert_eq!(Orchestrator::global().platform(), PlatformKind::Mobile);
}
