//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        state: AppState,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state,
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Mount hook: runs once, before any event is processed
        if let Some(cmd) = self.state.mount() {
            let _ = self.network_tx.send(cmd);
        }
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        self.state.unmount();
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Panel switcher
            UiEvent::SelectPanel(panel) => self.state.select_panel(panel),
            UiEvent::TogglePanel => self.state.toggle_panel(),

            // Repository table
            UiEvent::ScrollUp => self.state.scroll_up(),
            UiEvent::ScrollDown => self.state.scroll_down(),
            UiEvent::Reload => {
                if let Some(cmd) = self.state.reload() {
                    let _ = self.network_tx.send(cmd);
                }
            }

            // Dice roller
            UiEvent::RollDice(kind) => self.state.roll_dice(kind),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::messages::render::RepoListView;
    use crate::messages::ui_events::Panel;
    use crate::models::RepositoryRecord;
    use crate::network::client::FetchError;

    struct Harness {
        ui_tx: mpsc::UnboundedSender<UiEvent>,
        resp_tx: mpsc::UnboundedSender<NetworkResponse>,
        net_rx: mpsc::UnboundedReceiver<NetworkCommand>,
        render_rx: mpsc::UnboundedReceiver<RenderState>,
        handle: tokio::task::JoinHandle<()>,
    }

    fn spawn_actor() -> Harness {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (resp_tx, resp_rx) = mpsc::unbounded_channel();
        let (net_tx, net_rx) = mpsc::unbounded_channel();
        let (render_tx, render_rx) = mpsc::unbounded_channel();
        let actor = AppActor::new(AppState::new(&Config::default()), net_tx, render_tx);
        let handle = tokio::spawn(actor.run(ui_rx, resp_rx));
        Harness {
            ui_tx,
            resp_tx,
            net_rx,
            render_rx,
            handle,
        }
    }

    #[tokio::test]
    async fn test_fetch_issued_once_across_renders() {
        let mut h = spawn_actor();

        let id = match h.net_rx.recv().await {
            Some(NetworkCommand::FetchRepositories { id, .. }) => id,
            other => panic!("expected a fetch, got {:?}", other),
        };
        let initial = h.render_rx.recv().await.unwrap();
        assert_eq!(initial.repositories.content, RepoListView::Loading);

        // Every event triggers a render pass while the request is in flight
        for _ in 0..3 {
            h.ui_tx.send(UiEvent::TogglePanel).unwrap();
            h.render_rx.recv().await.unwrap();
        }

        h.resp_tx
            .send(NetworkResponse::Repositories {
                id,
                result: Ok(vec![RepositoryRecord::new("a", "https://github.com/o/a")]),
                time_ms: 5,
            })
            .unwrap();
        let rendered = h.render_rx.recv().await.unwrap();
        assert!(matches!(rendered.repositories.content, RepoListView::Rows { ref records, .. } if records.len() == 1));
        assert_eq!(rendered.active_panel, Panel::DiceRoller);

        h.ui_tx.send(UiEvent::Quit).unwrap();
        h.handle.await.unwrap();
        assert_eq!(h.net_rx.recv().await, Some(NetworkCommand::Shutdown));
        assert_eq!(h.net_rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_fetch_error_renders_message() {
        let mut h = spawn_actor();
        let id = match h.net_rx.recv().await {
            Some(NetworkCommand::FetchRepositories { id, .. }) => id,
            other => panic!("expected a fetch, got {:?}", other),
        };
        h.render_rx.recv().await.unwrap();

        h.resp_tx
            .send(NetworkResponse::Repositories {
                id,
                result: Err(FetchError::Network(String::from("connection refused"))),
                time_ms: 1,
            })
            .unwrap();
        let rendered = h.render_rx.recv().await.unwrap();
        assert_eq!(
            rendered.repositories.content,
            RepoListView::Error(String::from("Network error: connection refused"))
        );
        assert!(!rendered.is_loading);

        h.ui_tx.send(UiEvent::Quit).unwrap();
        h.handle.await.unwrap();
    }
}
