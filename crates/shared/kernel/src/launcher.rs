use crate::error::PhaseError;
use crate::recorder::MetricsRecorder;
use crate::registry::ResourceRegistry;
use ignite_domain::constants::{METRIC_APP_INITIALIZATION, PHASE_INITIALIZE};
use ignite_domain::metrics::InitializationMetrics;
use ignite_domain::options::AppInitializerOptions;
use ignite_domain::platform::PlatformKind;
use ignite_domain::status::InitializationStatus;
use ignite_domain::telemetry::{MetricKind, PerformanceMetric};
use ignite_telemetry::SharedSink;
use std::any::Any;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, error, info, trace, warn};

/// Runs a platform's phase sequence at most once per instance.
///
/// The first [`Launcher::launch`] starts the run; every caller, including
/// concurrent ones, waits for the same terminal status. The run races the
/// phase work against `initialization_timeout`. Losing the race stops the
/// waiting, not the work: it keeps running and may still record.
#[ignite_derive::handle]
pub struct Launcher {
    platform: PlatformKind,
    recorder: MetricsRecorder,
    registry: ResourceRegistry,
    telemetry: SharedSink,
    started: AtomicBool,
    initialized: AtomicBool,
    status: watch::Sender<InitializationStatus>,
    options: OnceLock<AppInitializerOptions>,
}

impl Launcher {
    #[must_use]
    pub fn new(platform: PlatformKind, registry: ResourceRegistry, telemetry: SharedSink) -> Self {
        let (status, _) = watch::channel(InitializationStatus::NotStarted);
        Self::from_inner(LauncherInner {
            platform,
            recorder: MetricsRecorder::new(),
            registry,
            telemetry,
            started: AtomicBool::new(false),
            initialized: AtomicBool::new(false),
            status,
            options: OnceLock::new(),
        })
    }

    /// Starts the run if nobody has, then waits until it settles.
    ///
    /// `work` is only invoked by the first caller; the options of later callers
    /// are ignored. Returns immediately once the launcher is initialized.
    pub async fn launch<W, Fut>(&self, options: AppInitializerOptions, work: W)
    where
        W: FnOnce(RunContext) -> Fut,
        Fut: Future<Output = Result<(), PhaseError>> + Send + 'static,
    {
        if self.is_initialized() {
            trace!(platform = %self.platform, "Already initialized");
            self.wait().await;
            return;
        }

        if self.started.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire).is_ok()
        {
            self.start(options, work);
        } else {
            debug!(platform = %self.platform, "Initialization in flight; joining the current run");
        }

        self.wait().await;
    }

    fn start<W, Fut>(&self, options: AppInitializerOptions, work: W)
    where
        W: FnOnce(RunContext) -> Fut,
        Fut: Future<Output = Result<(), PhaseError>> + Send + 'static,
    {
        for resource in &options.critical_resources {
            self.registry.add_inferred(resource);
        }

        let options = self.options.get_or_init(|| options).clone();
        self.recorder.begin();
        self.status.send_replace(InitializationStatus::InProgress);
        info!(
            platform = %self.platform,
            timeout_ms = options.initialization_timeout.as_millis(),
            level = ?options.optimization_level,
            "Initialization started"
        );

        let timeout = options.initialization_timeout;
        let context = RunContext::new(
            options,
            self.recorder.clone(),
            self.registry.clone(),
            self.telemetry.clone(),
        );
        let work = work(context);
        let launcher = self.clone();
        tokio::spawn(async move { launcher.drive(work, timeout).await });
    }

    async fn drive<Fut>(self, work: Fut, timeout: Duration)
    where
        Fut: Future<Output = Result<(), PhaseError>> + Send + 'static,
    {
        let mut settlement = Settlement { launcher: self, settled: false };
        let handle = tokio::spawn(work);

        let (status, failure) = match tokio::time::timeout(timeout, handle).await {
            Ok(Ok(Ok(()))) => (InitializationStatus::Completed, None),
            Ok(Ok(Err(err))) => (InitializationStatus::Failed, Some(err.to_string())),
            Ok(Err(err)) => (InitializationStatus::Failed, Some(describe_join_error(err))),
            Err(_) => (
                InitializationStatus::TimedOut,
                Some(format!("initialization timed out after {}ms", timeout.as_millis())),
            ),
        };

        settlement.settle(status, failure);
    }

    fn settle(&self, status: InitializationStatus, failure: Option<String>) {
        if let Some(failure) = failure {
            let record = self.recorder.record_error(PHASE_INITIALIZE, &failure);
            self.telemetry.record_error(&record);
        }

        let total = self.recorder.finish();
        let changed = self.status.send_if_modified(|current| {
            if current.is_terminal() {
                return false;
            }
            *current = status;
            true
        });
        // Published after the status so `is_initialized` implies a terminal status.
        self.initialized.store(true, Ordering::Release);
        if !changed {
            return;
        }

        match status {
            InitializationStatus::Completed => info!(
                platform = %self.platform,
                total_ms = total.as_millis(),
                errors = self.recorder.snapshot().errors.len(),
                "Initialization completed"
            ),
            _ => warn!(
                platform = %self.platform,
                status = %status,
                total_ms = total.as_millis(),
                "Initialization ended without completing; continuing startup"
            ),
        }

        if self.options.get().is_some_and(|options| options.track_performance) {
            self.telemetry.record_metric(PerformanceMetric::new(
                METRIC_APP_INITIALIZATION,
                MetricKind::Initialization,
                total,
            ));
        }
    }

    /// Resolves once the current run reaches a terminal status.
    ///
    /// Waits forever if no run was ever launched.
    pub async fn wait(&self) -> InitializationStatus {
        let mut receiver = self.status.subscribe();
        match receiver.wait_for(|status| status.is_terminal()).await {
            Ok(status) => *status,
            Err(_) => self.status(),
        }
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn status(&self) -> InitializationStatus {
        *self.status.borrow()
    }

    /// Status updates as they happen.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<InitializationStatus> {
        self.status.subscribe()
    }

    #[must_use]
    pub fn metrics(&self) -> InitializationMetrics {
        self.recorder.snapshot()
    }

    #[must_use]
    pub fn platform(&self) -> PlatformKind {
        self.inner.platform
    }

    #[must_use]
    pub fn registry(&self) -> &ResourceRegistry {
        &self.inner.registry
    }

    #[must_use]
    pub fn telemetry(&self) -> &SharedSink {
        &self.inner.telemetry
    }

    /// Options of the run, once one has started.
    #[must_use]
    pub fn options(&self) -> Option<&AppInitializerOptions> {
        self.inner.options.get()
    }
}

/// Marks the launcher settled even if the driver unwinds or is dropped.
struct Settlement {
    launcher: Launcher,
    settled: bool,
}

impl Settlement {
    fn settle(&mut self, status: InitializationStatus, failure: Option<String>) {
        self.settled = true;
        self.launcher.settle(status, failure);
    }
}

impl Drop for Settlement {
    fn drop(&mut self) {
        if !self.settled {
            error!(platform = %self.launcher.platform, "Initialization driver stopped before settling");
            self.launcher.settle(
                InitializationStatus::Failed,
                Some("initialization driver stopped before settling".to_owned()),
            );
        }
    }
}

fn describe_join_error(err: JoinError) -> String {
    if err.is_panic() {
        format!("initialization panicked: {}", panic_message(err.into_panic().as_ref()))
    } else {
        "initialization task was cancelled".to_owned()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}

/// What phase code sees during a run.
#[derive(Debug, Clone)]
pub struct RunContext {
    options: Arc<AppInitializerOptions>,
    recorder: MetricsRecorder,
    registry: ResourceRegistry,
    telemetry: SharedSink,
}

impl RunContext {
    #[must_use]
    pub fn new(
        options: AppInitializerOptions,
        recorder: MetricsRecorder,
        registry: ResourceRegistry,
        telemetry: SharedSink,
    ) -> Self {
        Self { options: Arc::new(options), recorder, registry, telemetry }
    }

    #[must_use]
    pub fn options(&self) -> &AppInitializerOptions {
        &self.options
    }

    #[must_use]
    pub const fn recorder(&self) -> &MetricsRecorder {
        &self.recorder
    }

    #[must_use]
    pub const fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    #[must_use]
    pub const fn telemetry(&self) -> &SharedSink {
        &self.telemetry
    }

    /// Runs one named phase with best-effort semantics.
    ///
    /// The error, if any, is recorded, pushed to the sink's error hook and
    /// swallowed; the caller just gets `None`. A phase metric is emitted when
    /// performance tracking is on.
    pub async fn phase<F, T>(&self, name: &str, work: F) -> Option<T>
    where
        F: Future<Output = Result<T, PhaseError>>,
    {
        debug!(phase = name, "Phase started");
        let timed = self.recorder.timed(name, work).await;

        match &timed.result {
            Ok(_) => debug!(phase = name, duration = ?timed.duration, "Phase finished"),
            Err(record) => {
                warn!(phase = name, error = %record.error, "Phase failed; continuing startup");
                self.telemetry.record_error(record);
            },
        }

        if self.options.track_performance
            && let Some(duration) = timed.duration
        {
            self.telemetry.record_metric(PerformanceMetric::phase(name, duration));
        }

        timed.result.ok()
    }

    /// Runs a phase on a detached task that nobody awaits.
    pub fn spawn_background<F>(&self, name: &'static str, work: F) -> JoinHandle<()>
    where
        F: Future<Output = Result<(), PhaseError>> + Send + 'static,
    {
        let context = self.clone();
        trace!(phase = name, "Spawning background phase");
        tokio::spawn(async move {
            context.phase(name, work).await;
        })
    }
}
