use std::collections::HashSet;
use std::future::Future;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::db::Message;

pub const POLL_INTERVAL: Duration = Duration::from_secs(30);
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug)]
pub enum InboxEvent {
    NewMessages(Vec<Message>),
}

// Polling stand-in for push delivery: fetch on an interval, diff the id set
// against the previous fetch, surface arrivals. The first successful fetch
// only seeds the set.
pub struct InboxWatcher {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl InboxWatcher {
    pub fn spawn<F, Fut>(interval: Duration, fetch: F) -> (InboxWatcher, mpsc::UnboundedReceiver<InboxEvent>)
    where
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = anyhow::Result<Vec<Message>>> + Send,
    {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (shutdown, mut shutdown_rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            let mut seen: Option<HashSet<String>> = None;
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = shutdown_rx.changed() => break,
                    _ = ticker.tick() => {}
                }

                let fetched = match tokio::time::timeout(FETCH_TIMEOUT, fetch()).await {
                    Ok(Ok(messages)) => messages,
                    Ok(Err(err)) => {
                        tracing::warn!("inbox fetch failed: {err}");
                        continue;
                    }
                    Err(_) => {
                        tracing::warn!("inbox fetch timed out");
                        continue;
                    }
                };

                let ids: HashSet<String> = fetched.iter().map(|message| message.id.clone()).collect();
                let Some(previous) = seen.replace(ids) else {
                    continue;
                };

                // pure set difference by id, no count or ordering heuristics
                let fresh: Vec<Message> = fetched
                    .into_iter()
                    .filter(|message| !previous.contains(&message.id))
                    .collect();

                if !fresh.is_empty() && event_tx.send(InboxEvent::NewMessages(fresh)).is_err() {
                    break;
                }
            }
        });

        (InboxWatcher { shutdown, task }, event_rx)
    }

    // the teardown point: no more ticks fire once this returns
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }
}
