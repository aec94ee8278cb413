use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{Block, BorderType, Borders, Paragraph, Tabs, Wrap};
use tui::{Frame, Terminal};
use tui_logger::TuiLoggerWidget;

use crate::app::{App, MenuItem};
use crate::components::player_card::{CardGrid, PlayerCard};
use crate::components::team_colors::team_colors;
use crate::state::network::{ERROR_CHAR, LoadingState};
use crate::ui::layout::LayoutAreas;
use mlb_api::{HittingLine, PitchingLine, PlayerDetail, SeasonLine, StatGroup, StatLine, StatSection};

static TABS: &[&str; 4] = &["Roster", "Teams", "Player", "Help"];

const HELP_TEXT: &str = "\
Tabs        1 Roster   2 Teams   3 Player   ? Help (Esc to leave)

Roster      j/k or arrows  move between cards
            Enter          open player detail
            /              type a name (Enter to search, Esc to clear)
            a              toggle search across all teams
            p / P          next / previous position filter
            [ / ]          previous / next season
            t / T          next / previous team
            r              reload

Teams       j/k  move      Enter  show roster      r  reload list
Player      j/k  scroll    Esc    back to roster

Global      f  full screen    \"  log pane    q / Ctrl-c  quit";

pub fn draw<B>(terminal: &mut Terminal<B>, app: &mut App, loading: LoadingState)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    if current_size.width <= 10 || current_size.height <= 10 {
        return;
    }

    let mut layout = LayoutAreas::new(current_size);

    let result = terminal.draw(|f| {
        layout.update(f.area(), app.settings.full_screen, app.state.show_logs);

        if !app.settings.full_screen {
            draw_tabs(f, layout.tab_bar, app);
        }

        match app.state.active_tab {
            MenuItem::Roster => draw_roster(f, layout.main, app),
            MenuItem::Teams => draw_teams(f, layout.main, app),
            MenuItem::Player => draw_player(f, layout.main, app),
            MenuItem::Help => draw_help(f, layout.main),
        }

        if let Some(logs) = layout.logs {
            draw_logs(f, logs);
        }

        draw_loading_spinner(f, f.area(), app, loading);
    });
    if let Err(e) = result {
        log::error!("draw failed: {e}");
    }
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn draw_tabs(f: &mut Frame, tab_bar: [Rect; 2], app: &App) {
    let style = Style::default().fg(Color::White);
    let border_type = BorderType::Rounded;

    let tab_index = tab_index(app.state.active_tab);

    let titles: Vec<Line> = TABS.iter().map(|t| Line::from(*t)).collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .highlight_style(Style::default().add_modifier(Modifier::UNDERLINED))
        .select(tab_index)
        .style(style);
    f.render_widget(tabs, tab_bar[0]);

    let help = Paragraph::new("Help: ? ")
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .style(style);
    f.render_widget(help, tab_bar[1]);
}

fn tab_index(tab: MenuItem) -> usize {
    match tab {
        MenuItem::Roster => 0,
        MenuItem::Teams => 1,
        MenuItem::Player => 2,
        MenuItem::Help => 3,
    }
}

fn draw_roster(f: &mut Frame, area: Rect, app: &App) {
    let roster = &app.state.roster;
    let colors = team_colors(roster.team_id);
    let title = if roster.filter.searching_all_teams() {
        format!(" All teams | {} ", roster.season)
    } else {
        format!(" {} | {} ", app.state.team_name(), roster.season)
    };
    let block = default_border(colors.primary).title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [header, key_legend, content] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1), Constraint::Fill(1)]).areas(inner);

    let players = roster.visible_players();
    f.render_widget(Paragraph::new(filter_line(app, players.len())), header);
    f.render_widget(
        Paragraph::new("Keys: j/k=move  Enter=details  /=search  a=all teams  p=position  [/]=season  t=team  ?=help")
            .style(Style::default().fg(Color::DarkGray)),
        key_legend,
    );

    let message = if let Some(err) = roster.error.as_deref() {
        Some(format!("Load failed:\n{err}"))
    } else if roster.filter.search_query_too_short() {
        Some("Type at least 2 characters to search all teams".to_string())
    } else if roster.filter.searching_all_teams() && roster.searched_query.is_none() {
        Some("Press Enter to search every roster".to_string())
    } else if !roster.loaded && !roster.filter.searching_all_teams() {
        Some("Loading roster...".to_string())
    } else if players.is_empty() {
        Some("No players match".to_string())
    } else {
        None
    };
    if let Some(msg) = message {
        f.render_widget(
            Paragraph::new(msg)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            content,
        );
        return;
    }

    let grid = CardGrid::new(content);
    let selected = roster.selection.index;
    let first = grid.first_visible(selected);
    for (slot, (idx, player)) in players
        .iter()
        .copied()
        .enumerate()
        .skip(first)
        .take(grid.capacity())
        .enumerate()
    {
        let card_colors = player.team.as_ref().map_or(colors, |t| team_colors(t.id));
        f.render_widget(
            PlayerCard { player, colors: card_colors, selected: idx == selected },
            grid.cell(content, slot),
        );
    }
}

fn filter_line(app: &App, shown: usize) -> Line<'static> {
    let roster = &app.state.roster;
    let dim = Style::default().fg(Color::DarkGray);
    let bright = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);

    let position = if roster.filter.searching_all_teams() {
        Span::styled("position filter off", dim)
    } else {
        Span::styled(format!("{} ({shown}/{})", roster.filter.position.label(), roster.players.len()), bright)
    };
    let cursor = if roster.composing { "_" } else { "" };
    let search = format!("{}{cursor}", roster.filter.query);
    let scope = if roster.filter.all_teams { "all teams" } else { "this team" };

    Line::from(vec![
        Span::styled("Filter ", dim),
        position,
        Span::styled("  Search ", dim),
        Span::styled(search, if roster.composing { Style::default().fg(Color::Yellow) } else { bright }),
        Span::styled(format!("  [{scope}]"), dim),
    ])
}

fn draw_teams(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::White).title(" Teams ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let teams = &app.state.teams;
    if teams.teams.is_empty() {
        let msg = match teams.error.as_deref() {
            Some(err) => format!("Team list failed:\n{err}"),
            None => "Loading teams...".to_string(),
        };
        f.render_widget(
            Paragraph::new(msg)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let visible = inner.height as usize;
    let first = teams.selection.index.saturating_sub(visible.saturating_sub(1));
    let lines: Vec<Line> = teams
        .teams
        .iter()
        .enumerate()
        .skip(first)
        .take(visible)
        .map(|(idx, team)| {
            let marker = if idx == teams.selection.index { ">" } else { " " };
            let current = if team.id == app.state.roster.team_id { " *" } else { "" };
            let swatch = Span::styled("  ", Style::default().bg(team_colors(team.id).primary));
            Line::from(vec![
                Span::raw(format!("{marker} ")),
                swatch,
                Span::raw(format!(" {:<4} {}{current}", team.abbreviation, team.name)),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}

fn draw_player(f: &mut Frame, area: Rect, app: &mut App) {
    let block = default_border(Color::White).title(" Player ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let detail_state = &app.state.detail;
    let Some(detail) = detail_state.detail.as_ref() else {
        let msg = match (&detail_state.error, &detail_state.player) {
            (Some(err), _) => format!("Load failed:\n{err}"),
            (None, Some((_, name))) => format!("Loading {name}..."),
            (None, None) => "Select a player on the Roster tab and press Enter".to_string(),
        };
        f.render_widget(
            Paragraph::new(msg)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            inner,
        );
        return;
    };

    let paragraph = Paragraph::new(detail_lines(detail)).wrap(Wrap { trim: false });
    let content_lines = paragraph.line_count(inner.width);
    let detail_state = &mut app.state.detail;
    detail_state.fit_to(content_lines, inner.height);
    f.render_widget(paragraph.scroll((detail_state.scroll_offset, 0)), inner);
}

fn detail_lines(detail: &PlayerDetail) -> Vec<Line<'static>> {
    let heading = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{}  #{}  {}", detail.full_name, detail.primary_number, detail.primary_position),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(detail.current_team.clone()),
        Line::from(format!(
            "Born {}  Ht {}  Wt {} lbs  Bats {}  Throws {}",
            detail.birth_date, detail.height, detail.weight, detail.bats, detail.throws
        )),
        Line::from(vec![
            Span::styled("Highlights ", dim),
            Span::raw(detail.highlight_url.clone().unwrap_or_else(|| "none found".to_string())),
        ]),
    ];

    if detail.sections.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("No major league statistics", dim)));
    }

    for section in &detail.sections {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("── {} ──", section.group.label()), heading)));
        lines.extend(section_lines(section).into_iter().map(Line::from));
    }

    if !detail.awards.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("── Awards ──", heading)));
        for award in &detail.awards {
            lines.push(Line::from(format!("{:<6} {}", award.season, award.name)));
        }
    }

    if !detail.transactions.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("── Recent Transactions ──", heading)));
        for txn in &detail.transactions {
            lines.push(Line::from(format!("{:<12} {}", txn.date, txn.description)));
        }
    }

    lines
}

fn section_lines(section: &StatSection) -> Vec<String> {
    let mut out = Vec::new();
    out.push(stat_header(section.group));
    if let Some(career) = &section.career {
        out.push(stat_row("Career", "", career));
    }
    if !section.seasons.is_empty() {
        out.push(String::new());
        out.push("Season by season".to_string());
        out.extend(season_rows(&section.seasons));
    }
    if !section.postseason.is_empty() {
        out.push(String::new());
        out.push("Postseason".to_string());
        out.extend(season_rows(&section.postseason));
    }
    out
}

fn season_rows(lines: &[SeasonLine]) -> impl Iterator<Item = String> + '_ {
    lines.iter().map(|s| stat_row(&s.season, &s.team, &s.line))
}

fn stat_header(group: StatGroup) -> String {
    match group {
        StatGroup::Hitting => format!(
            "{:<6} {:<22} {:>4} {:>4} {:>4} {:>4} {:>3} {:>3} {:>3} {:>4} {:>3} {:>4} {:>4} {:>5} {:>5} {:>5} {:>5}",
            "", "Team", "G", "AB", "R", "H", "2B", "3B", "HR", "RBI", "SB", "BB", "SO", "AVG", "OBP", "SLG", "OPS"
        ),
        StatGroup::Pitching => format!(
            "{:<6} {:<22} {:>3} {:>3} {:>5} {:>4} {:>4} {:>3} {:>6} {:>4} {:>4} {:>4} {:>4} {:>4} {:>5}",
            "", "Team", "W", "L", "ERA", "G", "GS", "SV", "IP", "H", "R", "ER", "BB", "SO", "WHIP"
        ),
    }
}

fn stat_row(label: &str, team: &str, line: &StatLine) -> String {
    let team: String = team.chars().take(22).collect();
    match line {
        StatLine::Hitting(h) => hitting_row(label, &team, h),
        StatLine::Pitching(p) => pitching_row(label, &team, p),
    }
}

fn hitting_row(label: &str, team: &str, h: &HittingLine) -> String {
    format!(
        "{:<6} {:<22} {:>4} {:>4} {:>4} {:>4} {:>3} {:>3} {:>3} {:>4} {:>3} {:>4} {:>4} {:>5} {:>5} {:>5} {:>5}",
        label,
        team,
        h.games,
        h.at_bats,
        h.runs,
        h.hits,
        h.doubles,
        h.triples,
        h.home_runs,
        h.rbi,
        h.stolen_bases,
        h.walks,
        h.strikeouts,
        h.avg,
        h.obp,
        h.slg,
        h.ops
    )
}

fn pitching_row(label: &str, team: &str, p: &PitchingLine) -> String {
    format!(
        "{:<6} {:<22} {:>3} {:>3} {:>5} {:>4} {:>4} {:>3} {:>6} {:>4} {:>4} {:>4} {:>4} {:>4} {:>5}",
        label,
        team,
        p.wins,
        p.losses,
        p.era,
        p.games,
        p.games_started,
        p.saves,
        p.innings,
        p.hits,
        p.runs,
        p.earned_runs,
        p.walks,
        p.strikeouts,
        p.whip
    )
}

fn draw_help(f: &mut Frame, area: Rect) {
    let block = default_border(Color::DarkGray).title(" Help ");
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::Gray)), inner);
}

fn draw_logs(f: &mut Frame, area: Rect) {
    let logs = TuiLoggerWidget::default()
        .block(default_border(Color::DarkGray).title(" Logs "))
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(Color::Cyan))
        .style_debug(Style::default().fg(Color::Gray))
        .output_file(false)
        .output_line(false);
    f.render_widget(logs, area);
}

fn draw_loading_spinner(f: &mut Frame, area: Rect, app: &App, loading: LoadingState) {
    if !loading.is_loading && loading.spinner_char != ERROR_CHAR {
        return;
    }
    let style = match loading.spinner_char {
        ERROR_CHAR => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::White),
    };
    let spinner = Paragraph::new(loading.spinner_char.to_string())
        .alignment(Alignment::Right)
        .style(style);
    let area = if app.settings.full_screen {
        Rect::new(area.width.saturating_sub(3), area.height.saturating_sub(2), 1, 1)
    } else {
        Rect::new(area.width.saturating_sub(11), 1, 1, 1)
    };
    f.render_widget(spinner, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use mlb_api::{Award, Transaction};

    fn text(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn detail_lists_sections_awards_and_transactions_in_order() {
        let hitting = HittingLine {
            games: 92,
            at_bats: 350,
            runs: 70,
            hits: 100,
            doubles: 20,
            triples: 2,
            home_runs: 25,
            rbi: 60,
            stolen_bases: 9,
            walks: 30,
            strikeouts: 110,
            avg: ".286".into(),
            obp: ".340".into(),
            slg: ".525".into(),
            ops: ".865".into(),
        };
        let detail = PlayerDetail {
            full_name: "Byron Buxton".into(),
            primary_number: "25".into(),
            sections: vec![StatSection {
                group: StatGroup::Hitting,
                career: Some(StatLine::Hitting(hitting.clone())),
                seasons: vec![SeasonLine {
                    season: "2024".into(),
                    team: "Minnesota Twins".into(),
                    line: StatLine::Hitting(hitting),
                }],
                postseason: vec![],
            }],
            awards: vec![Award { name: "AL Gold Glove".into(), season: "2017".into() }],
            transactions: vec![Transaction { date: "Jan 5, 2024".into(), description: "Activated".into(), ..Default::default() }],
            ..Default::default()
        };

        let rendered = text(&detail_lines(&detail));
        let position = |needle: &str| {
            rendered
                .iter()
                .position(|l| l.contains(needle))
                .unwrap_or_else(|| panic!("missing {needle:?} in {rendered:#?}"))
        };

        assert!(position("Byron Buxton") < position("── Hitting ──"));
        assert!(position("── Hitting ──") < position("Career"));
        assert!(position("Career") < position("Season by season"));
        assert!(position("2024   Minnesota Twins") < position("── Awards ──"));
        assert!(position("── Awards ──") < position("── Recent Transactions ──"));
        assert!(rendered[position("Jan 5, 2024")].contains("Activated"));
        assert!(!rendered.iter().any(|l| l.contains("Postseason")));
        assert!(rendered[position("Highlights")].contains("none found"));
    }

    #[test]
    fn empty_detail_says_no_statistics() {
        let rendered = text(&detail_lines(&PlayerDetail::default()));
        assert!(rendered.iter().any(|l| l.contains("No major league statistics")));
    }

    #[test]
    fn stat_rows_line_up_with_headers() {
        let line = StatLine::Pitching(PitchingLine {
            wins: 10,
            losses: 5,
            era: "3.50".into(),
            games: 30,
            games_started: 30,
            saves: 0,
            innings: "180.1".into(),
            hits: 150,
            runs: 70,
            earned_runs: 70,
            walks: 40,
            strikeouts: 200,
            whip: "1.05".into(),
        });
        let row = stat_row("2024", "Minnesota Twins", &line);
        assert_eq!(row.chars().count(), stat_header(StatGroup::Pitching).chars().count());
    }

    #[test]
    fn help_has_its_own_tab() {
        assert_eq!(TABS[tab_index(MenuItem::Help)], "Help");
        assert_eq!(TABS[tab_index(MenuItem::Player)], "Player");
    }

    #[test]
    fn detail_scroll_is_bounded_by_rendered_lines() {
        let mut terminal = Terminal::new(tui::backend::TestBackend::new(80, 20)).expect("test terminal");
        let mut app = App::new(crate::state::app_settings::AppSettings::default());
        let awards = (0..40)
            .map(|i| Award { name: format!("Award {i}"), season: "2020".into() })
            .collect();
        app.state.detail.detail = Some(PlayerDetail { full_name: "Joe Mauer".into(), awards, ..Default::default() });
        app.state.detail.scroll_offset = 500;
        app.update_tab(MenuItem::Player);

        draw(&mut terminal, &mut app, LoadingState::default());

        // 48 detail lines in a 15-row pane.
        assert_eq!(app.state.detail.max_scroll, 33);
        assert_eq!(app.state.detail.scroll_offset, 33);
        app.detail_scroll(true);
        assert_eq!(app.state.detail.scroll_offset, 33);
    }
}
