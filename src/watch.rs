use crate::{
    context::Context,
    debug,
    error::ApplicationError,
    ir::{BuildReport, CompilationTarget, Configuration, DependencyPolicy},
    log,
    run::{build_targets, log_failures, resolve_targets},
};
use futures::FutureExt;
use std::sync::{
    Arc,
    atomic::{AtomicU8, Ordering},
};
use tokio::{select, spawn, sync::Notify, task::JoinHandle, time::sleep};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum WatcherState {
    Idle,
    Running,
    StopRequested,
}

impl From<u8> for WatcherState {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Idle,
            1 => Self::Running,
            _ => Self::StopRequested,
        }
    }
}

/// Recompiles stale stylesheets periodically until it is stopped.
///
/// At most one loop runs per watcher.
#[derive(Debug, Default)]
pub struct Watcher {
    state: AtomicU8,
    stop: Notify,
}

impl Watcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> WatcherState {
        self.state.load(Ordering::Acquire).into()
    }

    pub fn start(
        self: &Arc<Self>,
        context: Arc<Context>,
        configuration: Arc<Configuration>,
    ) -> Result<JoinHandle<Result<(), ApplicationError>>, ApplicationError> {
        if !self.transition(WatcherState::Idle, WatcherState::Running) {
            return Err(ApplicationError::WatcherRunning);
        }

        let watcher = self.clone();

        Ok(spawn(async move {
            let result = watcher.run(&context, &configuration).await;

            watcher
                .state
                .store(WatcherState::Idle as u8, Ordering::Release);

            result
        }))
    }

    /// Requests the loop to stop and wakes it up if it is sleeping.
    ///
    /// It returns `false` if no loop is running.
    pub fn stop(&self) -> bool {
        let stopped = self.transition(WatcherState::Running, WatcherState::StopRequested);

        if stopped {
            self.stop.notify_one();
        }

        stopped
    }

    fn transition(&self, from: WatcherState, to: WatcherState) -> bool {
        self.state
            .compare_exchange(from as u8, to as u8, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    async fn run(
        &self,
        context: &Context,
        configuration: &Configuration,
    ) -> Result<(), ApplicationError> {
        debug!(
            context,
            "watching {} every {:?}",
            configuration.source_directory().display(),
            configuration.interval()
        );

        let mut targets = None::<Vec<CompilationTarget>>;

        // Drop a wake-up left over by a stop of a previous run.
        self.stop.notified().now_or_never();

        while self.state() == WatcherState::Running {
            let mut build_report = BuildReport::new();

            if targets.is_none() || configuration.dependency_policy() == DependencyPolicy::Refresh
            {
                match resolve_targets(context, configuration, &mut build_report).await {
                    Ok(resolved) => targets = Some(resolved),
                    Err(error) => report(context, error).await?,
                }
            }

            if let Some(targets) = &targets {
                if let Err(error) =
                    build_targets(context, configuration, targets, &mut build_report).await
                {
                    report(context, error).await?;
                }
            }

            log_failures(context, configuration, &build_report).await?;

            select! {
                _ = sleep(configuration.interval()) => {}
                _ = self.stop.notified() => {}
            }
        }

        debug!(context, "watcher stopped");

        Ok(())
    }
}

async fn report(context: &Context, error: ApplicationError) -> Result<(), ApplicationError> {
    let mut console = context.console().lock().await;

    log!(context, console, "{}", error);

    Ok(())
}
