//! Network actor - runs repository fetches in the Tokio async runtime

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::RepositoryFetcher;

/// Network actor that executes fetch commands
pub struct NetworkActor<F> {
    fetcher: Arc<F>,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl<F: RepositoryFetcher + 'static> NetworkActor<F> {
    pub fn new(fetcher: F, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            fetcher: Arc::new(fetcher),
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchRepositories { id, address, variant }) => {
                            let response_tx = self.response_tx.clone();
                            let fetcher = Arc::clone(&self.fetcher);

                            self.active_requests.spawn(async move {
                                tracing::info!(id, address = %address, ?variant, "Fetching repositories");
                                let start = Instant::now();
                                let result = fetcher.fetch_repository_list(&address, variant).await;
                                let time_ms = start.elapsed().as_millis() as u64;
                                match &result {
                                    Ok(records) => tracing::info!(id, count = records.len(), time_ms, "Repositories fetched"),
                                    Err(e) => tracing::warn!(id, error = %e, time_ms, "Repository fetch failed"),
                                }
                                let _ = response_tx.send(NetworkResponse::Repositories { id, result, time_ms });
                            });
                        }

                        Some(NetworkCommand::Shutdown) => {
                            self.active_requests.abort_all();
                            break;
                        }

                        None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}
