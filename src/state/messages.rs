use crate::state::network::LoadingState;
use crossterm::event::KeyEvent;
use mlb_api::{PlayerDetail, PlayerRecord, Team};

/// One independent stream of requests. A newer request of a kind supersedes
/// any older one still in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Teams,
    Roster,
    Search,
    Player,
}

/// Identifies the request a response answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub kind: RequestKind,
    pub generation: u64,
}

#[derive(Debug, Clone)]
pub enum NetworkRequest {
    LoadTeams { ticket: Ticket },
    LoadRoster { ticket: Ticket, team: u32, season: u16 },
    SearchAllTeams { ticket: Ticket, teams: Vec<Team>, season: u16, query: String },
    LoadPlayer { ticket: Ticket, player: u32, name: String },
}

impl NetworkRequest {
    pub fn ticket(&self) -> Ticket {
        match self {
            NetworkRequest::LoadTeams { ticket }
            | NetworkRequest::LoadRoster { ticket, .. }
            | NetworkRequest::SearchAllTeams { ticket, .. }
            | NetworkRequest::LoadPlayer { ticket, .. } => *ticket,
        }
    }
}

#[derive(Debug)]
pub enum NetworkResponse {
    LoadingStateChanged { loading_state: LoadingState },
    TeamsLoaded { ticket: Ticket, teams: Vec<Team> },
    RosterLoaded { ticket: Ticket, players: Vec<PlayerRecord> },
    SearchLoaded { ticket: Ticket, query: String, season: u16, players: Vec<PlayerRecord> },
    PlayerLoaded { ticket: Ticket, detail: Box<PlayerDetail> },
    Error { ticket: Ticket, message: String },
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyPressed(KeyEvent),
    Resize,
    AppStarted,
}
