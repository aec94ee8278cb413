mod app;
mod components;
mod draw;
mod keys;
mod state;
mod ui;

use crate::app::App;
use crate::state::app_settings::{AppSettings, clamp_season};
use crate::state::messages::{NetworkRequest, NetworkResponse, UiEvent};
use crate::state::network::{LoadingState, NetworkWorker};
use crossterm::event::{self as crossterm_event, Event};
use crossterm::{cursor, execute, terminal};
use log::error;
use mlb_api::PlayerRecord;
use mlb_api::client::MlbApi;
use serde::Serialize;
use std::io::Stdout;
use std::sync::Arc;
use std::{io, panic};
use tokio::sync::{Mutex, mpsc};
use tui::{Terminal, backend::CrosstermBackend};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Run,
    Dump,
    Help,
    Version,
}

#[derive(Debug, PartialEq, Eq)]
struct CliArgs {
    command: Command,
    team: Option<u32>,
    season: Option<u16>,
}

impl CliArgs {
    /// Flags win over environment settings.
    fn apply(&self, settings: &mut AppSettings) {
        if let Some(team) = self.team {
            settings.team = team;
        }
        if let Some(season) = self.season {
            settings.season = clamp_season(season);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = match parse_args(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(message) => {
            eprintln!("{message}\n\n{}", usage_text());
            std::process::exit(2);
        }
    };

    let mut settings = AppSettings::load();
    cli.apply(&mut settings);

    match cli.command {
        Command::Help => {
            println!("{}", usage_text());
            return Ok(());
        }
        Command::Version => {
            println!("mlbtui {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Command::Dump => return dump_roster(&settings).await,
        Command::Run => {}
    }

    better_panic::install();

    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;

    setup_panic_hook();
    setup_terminal()?;

    tui_logger::init_logger(log::LevelFilter::Trace)?;
    tui_logger::set_default_level(log::LevelFilter::Error);

    let client = MlbApi::with_base_url(&settings.api_base);
    let app = Arc::new(Mutex::new(App::new(settings)));

    let (ui_event_tx, ui_event_rx) = mpsc::channel::<UiEvent>(100);
    let (network_req_tx, network_req_rx) = mpsc::channel::<NetworkRequest>(100);
    let (network_resp_tx, network_resp_rx) = mpsc::channel::<NetworkResponse>(100);

    // Input handler thread
    let input_handler = tokio::spawn(input_handler_task(ui_event_tx.clone()));

    // Network thread
    let network_worker = NetworkWorker::new(client, network_req_rx, network_resp_tx);
    let network_task = tokio::spawn(network_worker.run());

    // Trigger team list + roster load on startup
    let _ = ui_event_tx.send(UiEvent::AppStarted).await;

    main_ui_loop(terminal, app, ui_event_rx, network_req_tx, network_resp_rx).await;

    input_handler.abort();
    network_task.abort();

    Ok(())
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs, String> {
    let mut cli = CliArgs { command: Command::Run, team: None, season: None };
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => cli.command = Command::Help,
            "-V" | "--version" => cli.command = Command::Version,
            "--dump" => cli.command = Command::Dump,
            "--team" => {
                let value = args.next().ok_or("--team needs a team id")?;
                cli.team = Some(value.parse().map_err(|_| format!("Invalid team id: {value}"))?);
            }
            "--season" => {
                let value = args.next().ok_or("--season needs a year")?;
                cli.season = Some(value.parse().map_err(|_| format!("Invalid season: {value}"))?);
            }
            _ => return Err(format!("Unknown argument: {arg}")),
        }
    }
    Ok(cli)
}

fn usage_text() -> &'static str {
    "mlbtui - MLB rosters and player stats in the terminal

Usage:
  mlbtui [--team <id>] [--season <year>]
  mlbtui --dump [--team <id>] [--season <year>]
  mlbtui --help
  mlbtui --version

Options:
  --team <id>       Team to open (default 142, Minnesota Twins)
  --season <year>   Season to open, 1910 through the current year
  --dump            Print the normalized roster as JSON and exit

Environment:
  MLBTUI_TEAM       Default team id
  MLBTUI_SEASON     Default season
  MLBTUI_LOG        Log level for the log pane (error, warn, info, debug, trace)
  MLBTUI_API_BASE   Stats API base URL (default https://statsapi.mlb.com/api/v1)"
}

#[derive(Serialize)]
struct RosterDump<'a> {
    team: u32,
    season: u16,
    players: &'a [PlayerRecord],
}

async fn dump_roster(settings: &AppSettings) -> anyhow::Result<()> {
    let client = MlbApi::with_base_url(&settings.api_base);
    let players = client.fetch_roster_with_stats(settings.team, settings.season).await?;
    let dump = RosterDump { team: settings.team, season: settings.season, players: &players };
    println!("{}", serde_json::to_string_pretty(&dump)?);
    Ok(())
}

async fn main_ui_loop(
    mut terminal: Terminal<CrosstermBackend<Stdout>>,
    app: Arc<Mutex<App>>,
    mut ui_events: mpsc::Receiver<UiEvent>,
    network_requests: mpsc::Sender<NetworkRequest>,
    mut network_responses: mpsc::Receiver<NetworkResponse>,
) {
    let mut loading = LoadingState::default();

    loop {
        tokio::select! {
            Some(ui_event) = ui_events.recv() => {
                handle_ui_event(ui_event, &app, &network_requests).await;
                let mut app_guard = app.lock().await;
                draw::draw(&mut terminal, &mut app_guard, loading);
            }

            Some(response) = network_responses.recv() => {
                let should_redraw = handle_network_response(response, &app, &mut loading).await;
                if should_redraw {
                    let mut app_guard = app.lock().await;
                    draw::draw(&mut terminal, &mut app_guard, loading);
                }
            }

            else => break,
        }
    }
}

async fn handle_ui_event(
    ui_event: UiEvent,
    app: &Arc<Mutex<App>>,
    network_requests: &mpsc::Sender<NetworkRequest>,
) {
    match ui_event {
        UiEvent::AppStarted => {
            let mut guard = app.lock().await;
            let requests = [guard.request_teams(), guard.request_roster()];
            drop(guard);
            for request in requests {
                let _ = network_requests.send(request).await;
            }
        }
        UiEvent::KeyPressed(key_event) => {
            keys::handle_key_bindings(key_event, app, network_requests).await;
        }
        UiEvent::Resize => {}
    }
}

/// Apply a worker response. Returns whether anything visible changed.
async fn handle_network_response(
    response: NetworkResponse,
    app: &Arc<Mutex<App>>,
    loading: &mut LoadingState,
) -> bool {
    let mut guard = app.lock().await;
    match response {
        NetworkResponse::LoadingStateChanged { loading_state } => {
            *loading = loading_state;
            true
        }
        NetworkResponse::TeamsLoaded { ticket, teams } => guard.on_teams_loaded(ticket, teams),
        NetworkResponse::RosterLoaded { ticket, players } => guard.on_roster_loaded(ticket, players),
        NetworkResponse::SearchLoaded { ticket, query, season, players } => {
            guard.on_search_loaded(ticket, query, season, players)
        }
        NetworkResponse::PlayerLoaded { ticket, detail } => guard.on_player_loaded(ticket, *detail),
        NetworkResponse::Error { ticket, message } => {
            error!("Network error ({:?}): {message}", ticket.kind);
            guard.on_error(ticket, message)
        }
    }
}

async fn input_handler_task(ui_events: mpsc::Sender<UiEvent>) {
    loop {
        let event = match tokio::task::spawn_blocking(crossterm_event::read).await {
            Ok(Ok(event)) => event,
            Ok(Err(e)) => {
                error!("terminal input error: {e}");
                continue;
            }
            Err(_) => break,
        };

        let ui_event = match event {
            Event::Key(key_event) => Some(UiEvent::KeyPressed(key_event)),
            Event::Resize(_, _) => Some(UiEvent::Resize),
            _ => None,
        };

        if let Some(ui_event) = ui_event
            && ui_events.send(ui_event).await.is_err()
        {
            break;
        }
    }
}

fn setup_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;
    execute!(stdout, terminal::EnterAlternateScreen)?;
    execute!(stdout, terminal::Clear(terminal::ClearType::All))?;
    terminal::enable_raw_mode()
}

/// Best effort; also runs from the panic hook.
pub fn cleanup_terminal() {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, cursor::MoveTo(0, 0));
    let _ = execute!(stdout, terminal::Clear(terminal::ClearType::All));
    let _ = execute!(stdout, terminal::LeaveAlternateScreen);
    let _ = execute!(stdout, cursor::Show);
    let _ = terminal::disable_raw_mode();
}

fn setup_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        cleanup_terminal();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));
}
