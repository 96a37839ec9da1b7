//! Bridge between the synchronous UI loop and the async directory client.

use std::sync::mpsc as std_mpsc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::api::DirectoryClient;
use crate::ui::events::AppEvent;

const FETCH_CHANNEL_SIZE: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchCommand {
    Page {
        request_id: u64,
        page: u32,
        page_size: u32,
    },
    Total,
}

pub type FetchSender = mpsc::Sender<FetchCommand>;

/// Start the fetch dispatcher on `runtime`.
///
/// Each command runs as its own task and is never cancelled; completions
/// are posted to `events` in whatever order they finish.
pub fn spawn_fetcher(
    runtime: &Handle,
    client: DirectoryClient,
    events: std_mpsc::Sender<AppEvent>,
) -> FetchSender {
    let (tx, mut rx) = mpsc::channel::<FetchCommand>(FETCH_CHANNEL_SIZE);
    let spawner = runtime.clone();

    runtime.spawn(async move {
        while let Some(command) = rx.recv().await {
            let client = client.clone();
            let events = events.clone();
            spawner.spawn(async move {
                let event = match command {
                    FetchCommand::Page {
                        request_id,
                        page,
                        page_size,
                    } => AppEvent::PageFetched {
                        request_id,
                        result: client.fetch_page(page, page_size).await,
                    },
                    FetchCommand::Total => AppEvent::TotalFetched {
                        result: client.fetch_total_count().await,
                    },
                };
                if events.send(event).is_err() {
                    tracing::debug!("UI loop gone, dropping fetch result");
                }
            });
        }
    });

    tx
}
