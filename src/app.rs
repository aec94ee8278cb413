use crate::state::app_settings::AppSettings;
use crate::state::app_state::AppState;
use crate::state::messages::{NetworkRequest, RequestKind, Ticket};
use log::{debug, info};
use mlb_api::{MIN_SEARCH_CHARS, PlayerDetail, PlayerRecord, Team};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum MenuItem {
    #[default]
    Roster,
    Teams,
    Player,
    Help,
}

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
}

impl App {
    pub fn new(settings: AppSettings) -> Self {
        let mut state = AppState::new();
        state.roster.team_id = settings.team;
        state.roster.season = settings.season;

        let app = Self { state, settings };

        if let Some(level) = app.settings.log_level {
            log::set_max_level(level);
            tui_logger::set_default_level(level);
        }

        app
    }

    // -----------------------------------------------------------------------
    // Request builders: each issues a fresh ticket for its kind
    // -----------------------------------------------------------------------

    pub fn request_teams(&mut self) -> NetworkRequest {
        let ticket = self.state.tokens.issue(RequestKind::Teams);
        NetworkRequest::LoadTeams { ticket }
    }

    pub fn request_roster(&mut self) -> NetworkRequest {
        let ticket = self.state.tokens.issue(RequestKind::Roster);
        self.state.roster.loaded = false;
        self.state.roster.error = None;
        NetworkRequest::LoadRoster {
            ticket,
            team: self.state.roster.team_id,
            season: self.state.roster.season,
        }
    }

    /// Cross-team search for the current query. `None` when all-teams mode is
    /// off, the query is too short, or the team list isn't loaded yet.
    pub fn request_search(&mut self) -> Option<NetworkRequest> {
        let filter = &self.state.roster.filter;
        let query = filter.query.trim().to_string();
        if !filter.all_teams || query.chars().count() < MIN_SEARCH_CHARS {
            return None;
        }
        if self.state.teams.teams.is_empty() {
            self.state.roster.error = Some("Team list not loaded yet".to_string());
            return None;
        }
        let ticket = self.state.tokens.issue(RequestKind::Search);
        self.state.roster.search_results.clear();
        self.state.roster.searched_query = None;
        Some(NetworkRequest::SearchAllTeams {
            ticket,
            teams: self.state.teams.teams.clone(),
            season: self.state.roster.season,
            query,
        })
    }

    /// Open the highlighted roster card in the Player tab.
    pub fn request_selected_player(&mut self) -> Option<NetworkRequest> {
        let (player, name) = self
            .state
            .roster
            .selected_player()
            .map(|p| (p.id, p.name.clone()))?;
        let ticket = self.state.tokens.issue(RequestKind::Player);
        self.state.detail.player = Some((player, name.clone()));
        self.state.detail.detail = None;
        self.state.detail.error = None;
        self.state.detail.scroll_offset = 0;
        self.state.detail.max_scroll = 0;
        self.update_tab(MenuItem::Player);
        Some(NetworkRequest::LoadPlayer { ticket, player, name })
    }

    /// The roster or search request matching the current view.
    pub fn request_reload(&mut self) -> NetworkRequest {
        self.request_search().unwrap_or_else(|| self.request_roster())
    }

    // -----------------------------------------------------------------------
    // Network response handlers, called from main_ui_loop. Each returns
    // whether the response was current and applied.
    // -----------------------------------------------------------------------

    pub fn on_teams_loaded(&mut self, ticket: Ticket, teams: Vec<Team>) -> bool {
        if !self.accept(ticket) {
            return false;
        }
        info!("loaded {} teams", teams.len());
        self.state.teams.teams = teams;
        self.state.teams.error = None;
        self.state.teams.focus(self.state.roster.team_id);
        true
    }

    pub fn on_roster_loaded(&mut self, ticket: Ticket, players: Vec<PlayerRecord>) -> bool {
        if !self.accept(ticket) {
            return false;
        }
        info!("loaded {} players for team {}", players.len(), self.state.roster.team_id);
        self.state.last_error = None;
        self.state.roster.load(players);
        true
    }

    pub fn on_search_loaded(&mut self, ticket: Ticket, query: String, season: u16, players: Vec<PlayerRecord>) -> bool {
        if !self.accept(ticket) {
            return false;
        }
        info!("search '{query}' ({season}) returned {} players", players.len());
        let roster = &mut self.state.roster;
        roster.search_results = players;
        roster.searched_query = Some((query, season));
        roster.error = None;
        roster.selection.reset();
        true
    }

    pub fn on_player_loaded(&mut self, ticket: Ticket, detail: PlayerDetail) -> bool {
        if !self.accept(ticket) {
            return false;
        }
        self.state.detail.detail = Some(detail);
        self.state.detail.error = None;
        true
    }

    pub fn on_error(&mut self, ticket: Ticket, message: String) -> bool {
        if !self.accept(ticket) {
            return false;
        }
        match ticket.kind {
            RequestKind::Teams => self.state.teams.error = Some(message.clone()),
            RequestKind::Roster | RequestKind::Search => self.state.roster.error = Some(message.clone()),
            RequestKind::Player => self.state.detail.error = Some(message.clone()),
        }
        self.state.last_error = Some(message);
        true
    }

    fn accept(&self, ticket: Ticket) -> bool {
        let current = self.state.tokens.is_current(ticket);
        if !current {
            debug!("dropping stale {:?} response (generation {})", ticket.kind, ticket.generation);
        }
        current
    }

    // -----------------------------------------------------------------------
    // Tab management
    // -----------------------------------------------------------------------

    pub fn update_tab(&mut self, next: MenuItem) {
        if self.state.active_tab == next {
            return;
        }
        self.state.previous_tab = self.state.active_tab;
        self.state.active_tab = next;
        if next == MenuItem::Teams {
            self.state.teams.focus(self.state.roster.team_id);
        }
    }

    pub fn exit_help(&mut self) {
        if self.state.active_tab == MenuItem::Help {
            self.state.active_tab = self.state.previous_tab;
        }
    }

    pub fn toggle_show_logs(&mut self) {
        self.state.show_logs = !self.state.show_logs;
    }

    pub fn toggle_full_screen(&mut self) {
        self.settings.full_screen = !self.settings.full_screen;
    }

    // -----------------------------------------------------------------------
    // Roster navigation and filtering
    // -----------------------------------------------------------------------

    pub fn roster_down(&mut self) {
        self.state.roster.select_next();
    }

    pub fn roster_up(&mut self) {
        self.state.roster.select_prev();
    }

    pub fn cycle_position_filter(&mut self, forward: bool) {
        let filter = &mut self.state.roster.filter;
        filter.position = if forward { filter.position.next() } else { filter.position.prev() };
        self.state.roster.selection.reset();
    }

    pub fn toggle_all_teams(&mut self) -> Option<NetworkRequest> {
        let roster = &mut self.state.roster;
        roster.filter.all_teams = !roster.filter.all_teams;
        roster.selection.reset();
        if !roster.filter.all_teams {
            roster.error = None;
            return None;
        }
        let fresh = roster
            .searched_query
            .as_ref()
            .is_some_and(|(query, season)| query == roster.filter.query.trim() && *season == roster.season);
        if fresh { None } else { self.request_search() }
    }

    /// Step the season. The team roster always reloads, since all-teams mode
    /// falls back to it; a cross-team search is re-run alongside when active.
    pub fn step_season(&mut self, delta: i32) -> Vec<NetworkRequest> {
        if !self.state.roster.step_season(delta) {
            return Vec::new();
        }
        self.state.roster.players.clear();
        let mut requests = vec![self.request_roster()];
        requests.extend(self.request_search());
        requests
    }

    /// Switch the roster to the team `step` places away in name order.
    pub fn cycle_team(&mut self, step: isize) -> Option<NetworkRequest> {
        let next = self.state.teams.cycle_from(self.state.roster.team_id, step)?.id;
        Some(self.select_team(next))
    }

    pub fn select_team(&mut self, team: u32) -> NetworkRequest {
        self.state.roster.team_id = team;
        self.state.roster.players.clear();
        self.state.roster.selection.reset();
        self.state.teams.focus(team);
        self.request_roster()
    }

    // -----------------------------------------------------------------------
    // Search input
    // -----------------------------------------------------------------------

    pub fn start_search(&mut self) {
        self.state.roster.composing = true;
    }

    pub fn search_push(&mut self, c: char) {
        self.state.roster.filter.query.push(c);
        self.state.roster.refilter();
    }

    pub fn search_pop(&mut self) {
        self.state.roster.filter.query.pop();
        self.state.roster.refilter();
    }

    /// Finish typing. Local filtering is already live; in all-teams mode this
    /// is what issues the cross-team search.
    pub fn submit_search(&mut self) -> Option<NetworkRequest> {
        self.state.roster.composing = false;
        self.request_search()
    }

    pub fn cancel_search(&mut self) {
        let roster = &mut self.state.roster;
        roster.composing = false;
        roster.filter.query.clear();
        roster.search_results.clear();
        roster.searched_query = None;
        roster.selection.reset();
    }

    // -----------------------------------------------------------------------
    // Teams and player tabs
    // -----------------------------------------------------------------------

    pub fn teams_down(&mut self) {
        let len = self.state.teams.teams.len();
        self.state.teams.selection.next(len);
    }

    pub fn teams_up(&mut self) {
        self.state.teams.selection.prev();
    }

    pub fn teams_choose(&mut self) -> Option<NetworkRequest> {
        let team = self.state.teams.selected()?.id;
        let request = self.select_team(team);
        self.update_tab(MenuItem::Roster);
        Some(request)
    }

    pub fn detail_scroll(&mut self, down: bool) {
        self.state.detail.scroll(down);
    }
}
