use crate::state::messages::{NetworkRequest, NetworkResponse, RequestKind, Ticket};
use log::{debug, error};
use mlb_api::client::{ApiError, MlbApi};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
pub const ERROR_CHAR: char = '!';

#[derive(Debug, Copy, Clone)]
pub struct LoadingState {
    pub is_loading: bool,
    pub spinner_char: char,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self { is_loading: false, spinner_char: ' ' }
    }
}

/// Runs every request in its own task so a slow cross-team search never holds
/// up a player load. Starting a request aborts the previous one of its kind.
pub struct NetworkWorker {
    client: MlbApi,
    requests: mpsc::Receiver<NetworkRequest>,
    responses: mpsc::Sender<NetworkResponse>,
    spinner: Spinner,
    running: HashMap<RequestKind, AbortHandle>,
}

impl NetworkWorker {
    pub fn new(
        client: MlbApi,
        requests: mpsc::Receiver<NetworkRequest>,
        responses: mpsc::Sender<NetworkResponse>,
    ) -> Self {
        Self {
            client,
            spinner: Spinner::new(responses.clone()),
            requests,
            responses,
            running: HashMap::new(),
        }
    }

    pub async fn run(mut self) {
        while let Some(request) = self.requests.recv().await {
            let ticket = request.ticket();
            let client = self.client.clone();
            self.spawn(ticket, async move {
                handle_request(&client, request)
                    .await
                    .unwrap_or_else(|err| NetworkResponse::Error { ticket, message: err.to_string() })
            });
        }
    }

    /// Track `work` under the spinner and replace any running task of the
    /// same kind.
    fn spawn<F>(&mut self, ticket: Ticket, work: F)
    where
        F: Future<Output = NetworkResponse> + Send + 'static,
    {
        let guard = self.spinner.start();
        if let Some(previous) = self.running.remove(&ticket.kind)
            && !previous.is_finished()
        {
            debug!("superseding in-flight {:?} request", ticket.kind);
            previous.abort();
        }

        let responses = self.responses.clone();
        let handle = tokio::spawn(async move {
            let response = work.await;
            debug!("network request {ticket:?} complete");
            let failed = matches!(response, NetworkResponse::Error { .. });

            if let Err(e) = responses.send(response).await {
                error!("Failed to send network response: {e}");
            }
            guard.finish(failed);
        });
        self.running.insert(ticket.kind, handle.abort_handle());
    }
}

async fn handle_request(client: &MlbApi, request: NetworkRequest) -> Result<NetworkResponse, ApiError> {
    match request {
        NetworkRequest::LoadTeams { ticket } => {
            debug!("loading teams");
            let teams = client.fetch_teams().await?;
            Ok(NetworkResponse::TeamsLoaded { ticket, teams })
        }
        NetworkRequest::LoadRoster { ticket, team, season } => {
            debug!("loading roster for team {team} ({season})");
            let players = client.fetch_roster_with_stats(team, season).await?;
            Ok(NetworkResponse::RosterLoaded { ticket, players })
        }
        NetworkRequest::SearchAllTeams { ticket, teams, season, query } => {
            debug!("searching {} rosters for '{query}' ({season})", teams.len());
            let players = client.search_all_teams(&teams, season, &query).await?;
            Ok(NetworkResponse::SearchLoaded { ticket, query, season, players })
        }
        NetworkRequest::LoadPlayer { ticket, player, name } => {
            debug!("loading player {name} ({player})");
            let detail = client.fetch_player_profile(player, &name).await?;
            Ok(NetworkResponse::PlayerLoaded { ticket, detail: Box::new(detail) })
        }
    }
}

#[derive(Debug, Default)]
struct Progress {
    in_flight: usize,
    last_failed: bool,
}

/// Shared loading indicator. Spins while any request is in flight; the last
/// request to finish decides between idle and the error marker.
#[derive(Clone)]
struct Spinner {
    responses: mpsc::Sender<NetworkResponse>,
    progress: Arc<Mutex<Progress>>,
}

impl Spinner {
    fn new(responses: mpsc::Sender<NetworkResponse>) -> Self {
        Self { responses, progress: Arc::new(Mutex::new(Progress::default())) }
    }

    fn progress(&self) -> std::sync::MutexGuard<'_, Progress> {
        self.progress.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn start(&self) -> LoadingGuard {
        let first = {
            let mut progress = self.progress();
            progress.in_flight += 1;
            progress.in_flight == 1
        };
        if first {
            self.spawn_animation();
        }
        LoadingGuard { spinner: self.clone(), failed: false }
    }

    fn frame(&self, spinner_index: usize) -> LoadingState {
        let progress = self.progress();
        if progress.in_flight == 0 {
            let spinner_char = if progress.last_failed { ERROR_CHAR } else { ' ' };
            LoadingState { is_loading: false, spinner_char }
        } else {
            LoadingState { is_loading: true, spinner_char: SPINNER_CHARS[spinner_index] }
        }
    }

    fn spawn_animation(&self) {
        let spinner = self.clone();

        tokio::spawn(async move {
            let mut spinner_index = 0;
            let mut interval = tokio::time::interval(Duration::from_millis(33));
            loop {
                interval.tick().await;
                let loading_state = spinner.frame(spinner_index);
                spinner_index = (spinner_index + 1) % SPINNER_CHARS.len();

                let done = !loading_state.is_loading;
                if spinner
                    .responses
                    .send(NetworkResponse::LoadingStateChanged { loading_state })
                    .await
                    .is_err()
                    || done
                {
                    break;
                }
            }
        });
    }
}

/// Held by a request task for its whole life. Dropping it, including when the
/// task is aborted, ends the request.
struct LoadingGuard {
    spinner: Spinner,
    failed: bool,
}

impl LoadingGuard {
    fn finish(mut self, failed: bool) {
        self.failed = failed;
        drop(self);
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        let mut progress = self.spinner.progress();
        progress.in_flight = progress.in_flight.saturating_sub(1);
        if progress.in_flight == 0 {
            progress.last_failed = self.failed;
        }
    }
}
