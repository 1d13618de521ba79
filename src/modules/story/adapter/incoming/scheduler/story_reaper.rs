use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{error, info};

use crate::story::application::ports::incoming::use_cases::ReapExpiredStoriesUseCase;

/// Periodic story reaping owned by the application lifecycle.
///
/// The first pass runs immediately on `start`. A failed pass is logged and the
/// schedule carries on. `stop` waits for an in-flight pass to finish.
pub struct StoryReaper {
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl StoryReaper {
    pub fn start(
        reap: Arc<dyn ReapExpiredStoriesUseCase + Send + Sync>,
        period: Duration,
    ) -> Self {
        let (shutdown, mut shutdown_rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    _ = ticker.tick() => {
                        if let Err(e) = reap.execute().await {
                            error!(error = %e, "Story reaping failed");
                        }
                    }
                }
            }
        });

        info!(period_secs = period.as_secs(), "Story reaper started");
        Self { shutdown, handle }
    }

    pub async fn stop(self) {
        let _ = self.shutdown.send(());
        if let Err(e) = self.handle.await {
            error!(error = %e, "Story reaper task ended abnormally");
            return;
        }
        info!("Story reaper stopped");
    }
}
