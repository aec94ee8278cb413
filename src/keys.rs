use crate::app::{App, MenuItem};
use crate::state::messages::NetworkRequest;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

pub async fn handle_key_bindings(
    key_event: KeyEvent,
    app: &Arc<Mutex<App>>,
    network_requests: &mpsc::Sender<NetworkRequest>,
) {
    let mut guard = app.lock().await;

    // Search input swallows everything but its own control keys.
    if guard.state.roster.composing {
        let requests: Vec<NetworkRequest> = match (key_event.code, key_event.modifiers) {
            (Char('c'), KeyModifiers::CONTROL) => {
                crate::cleanup_terminal();
                std::process::exit(0);
            }
            (KeyCode::Enter, _) => guard.submit_search().into_iter().collect(),
            (KeyCode::Esc, _) => {
                guard.cancel_search();
                Vec::new()
            }
            (KeyCode::Backspace, _) => {
                guard.search_pop();
                Vec::new()
            }
            (Char(c), _) => {
                guard.search_push(c);
                Vec::new()
            }
            _ => Vec::new(),
        };
        drop(guard);
        send(network_requests, requests).await;
        return;
    }

    let requests: Vec<NetworkRequest> = match (guard.state.active_tab, key_event.code, key_event.modifiers) {
        // Quit
        (_, Char('q'), _) | (_, Char('c'), KeyModifiers::CONTROL) => {
            crate::cleanup_terminal();
            std::process::exit(0);
        }

        // Tab switching
        (_, Char('1'), _) => {
            guard.update_tab(MenuItem::Roster);
            Vec::new()
        }
        (_, Char('2'), _) => {
            guard.update_tab(MenuItem::Teams);
            Vec::new()
        }
        (_, Char('3'), _) => {
            guard.update_tab(MenuItem::Player);
            Vec::new()
        }
        (_, Char('?'), _) => {
            guard.update_tab(MenuItem::Help);
            Vec::new()
        }
        (MenuItem::Help, KeyCode::Esc, _) => {
            guard.exit_help();
            Vec::new()
        }

        // Roster
        (MenuItem::Roster, Char('j') | KeyCode::Down, _) => {
            guard.roster_down();
            Vec::new()
        }
        (MenuItem::Roster, Char('k') | KeyCode::Up, _) => {
            guard.roster_up();
            Vec::new()
        }
        (MenuItem::Roster, KeyCode::Enter, _) => guard.request_selected_player().into_iter().collect(),
        (MenuItem::Roster, Char('/'), _) => {
            guard.start_search();
            Vec::new()
        }
        (MenuItem::Roster, KeyCode::Esc, _) => {
            guard.cancel_search();
            Vec::new()
        }
        (MenuItem::Roster, Char('a'), _) => guard.toggle_all_teams().into_iter().collect(),
        (MenuItem::Roster, Char('p'), _) => {
            guard.cycle_position_filter(true);
            Vec::new()
        }
        (MenuItem::Roster, Char('P'), _) => {
            guard.cycle_position_filter(false);
            Vec::new()
        }
        (MenuItem::Roster, Char('['), _) => guard.step_season(-1),
        (MenuItem::Roster, Char(']'), _) => guard.step_season(1),
        (MenuItem::Roster, Char('t'), _) => guard.cycle_team(1).into_iter().collect(),
        (MenuItem::Roster, Char('T'), _) => guard.cycle_team(-1).into_iter().collect(),
        (MenuItem::Roster, Char('r'), _) => vec![guard.request_reload()],

        // Teams
        (MenuItem::Teams, Char('j') | KeyCode::Down, _) => {
            guard.teams_down();
            Vec::new()
        }
        (MenuItem::Teams, Char('k') | KeyCode::Up, _) => {
            guard.teams_up();
            Vec::new()
        }
        (MenuItem::Teams, KeyCode::Enter, _) => guard.teams_choose().into_iter().collect(),
        (MenuItem::Teams, Char('r'), _) => vec![guard.request_teams()],

        // Player detail
        (MenuItem::Player, Char('j') | KeyCode::Down, _) => {
            guard.detail_scroll(true);
            Vec::new()
        }
        (MenuItem::Player, Char('k') | KeyCode::Up, _) => {
            guard.detail_scroll(false);
            Vec::new()
        }
        (MenuItem::Player, KeyCode::Esc, _) => {
            guard.update_tab(MenuItem::Roster);
            Vec::new()
        }

        // Global
        (_, Char('f'), _) => {
            guard.toggle_full_screen();
            Vec::new()
        }
        (_, Char('"'), _) => {
            guard.toggle_show_logs();
            Vec::new()
        }

        _ => Vec::new(),
    };

    drop(guard);
    send(network_requests, requests).await;
}

async fn send(network_requests: &mpsc::Sender<NetworkRequest>, requests: Vec<NetworkRequest>) {
    for request in requests {
        let _ = network_requests.send(request).await;
    }
}
