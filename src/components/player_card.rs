use crate::components::team_colors::TeamColors;
use mlb_api::{HittingStats, PitchingStats, PlayerRecord, PlayerStats};
use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::{Color, Modifier, Style};
use tui::widgets::{Block, BorderType, Borders, Widget};

pub const CARD_WIDTH: u16 = 36;
pub const CARD_HEIGHT: u16 = 9;

/// One roster card: headshot stand-in, bio lines and the season stats block
/// matching the player's shape (hitter, pitcher or two-way).
pub struct PlayerCard<'a> {
    pub player: &'a PlayerRecord,
    pub colors: TeamColors,
    pub selected: bool,
}

impl<'a> Widget for PlayerCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 12 || area.height < 4 {
            return;
        }

        let border = if self.selected { Color::Yellow } else { self.colors.primary };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if self.selected { BorderType::Thick } else { BorderType::Rounded })
            .border_style(Style::default().fg(border))
            .title(format!(" #{} {} ", self.player.number, self.player.name));
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        let plain = Style::default().fg(Color::White);
        let dim = Style::default().fg(Color::DarkGray);
        let mut y = inner.y;
        let bottom = inner.y + inner.height;

        // Row 0: initials badge, position, team (search results only).
        let badge = format!(" {} ", self.player.initials());
        let badge_style = Style::default()
            .fg(self.colors.accent)
            .bg(self.colors.secondary)
            .add_modifier(Modifier::BOLD);
        buf.set_stringn(inner.x, y, &badge, width, badge_style);
        let offset = badge.chars().count() as u16 + 1;
        let mut heading = self.player.position.clone();
        if self.player.is_two_way {
            heading.push_str(" two-way");
        }
        if let Some(team) = &self.player.team {
            heading.push_str("  ");
            heading.push_str(&team.name);
        }
        buf.set_stringn(inner.x + offset, y, &heading, width.saturating_sub(offset as usize), plain);
        y += 1;

        let mut lines = bio_lines(self.player)
            .into_iter()
            .map(|l| (l, plain))
            .collect::<Vec<_>>();
        lines.push((format!("{} Stats", self.player.year), dim));
        lines.extend(stat_lines(&self.player.stats).into_iter().map(|l| (l, plain)));

        for (line, style) in lines {
            if y >= bottom {
                break;
            }
            buf.set_stringn(inner.x, y, &line, width, style);
            y += 1;
        }
    }
}

fn bio_lines(player: &PlayerRecord) -> Vec<String> {
    vec![
        format!("B/T {}/{}  {}, {} lbs", player.bats, player.throws, player.height, player.weight),
        format!("Born {} (Age {})", player.birth_date, player.age),
    ]
}

/// Stat rows for a card. Two-way players get both rows.
pub fn stat_lines(stats: &PlayerStats) -> Vec<String> {
    match stats {
        PlayerStats::Hitting(h) => vec![hitting_line(h)],
        PlayerStats::Pitching(p) => vec![pitching_line(p)],
        PlayerStats::TwoWay { hitting, pitching } => vec![hitting_line(hitting), pitching_line(pitching)],
    }
}

fn hitting_line(h: &HittingStats) -> String {
    format!("AVG {} HR {} RBI {} OPS {} G {}", h.avg, h.home_runs, h.rbi, h.ops, h.games)
}

fn pitching_line(p: &PitchingStats) -> String {
    format!("ERA {} W-L {}-{} K {} IP {} SV {}", p.era, p.wins, p.losses, p.strikeouts, p.innings, p.saves)
}

/// Fixed-size card grid that scrolls by whole rows to keep the selection on
/// screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardGrid {
    pub columns: usize,
    pub rows: usize,
}

impl CardGrid {
    pub fn new(area: Rect) -> Self {
        Self {
            columns: (area.width / CARD_WIDTH).max(1) as usize,
            rows: (area.height / CARD_HEIGHT).max(1) as usize,
        }
    }

    /// Index of the first card to draw so that `selected` is visible.
    pub fn first_visible(&self, selected: usize) -> usize {
        let selected_row = selected / self.columns;
        selected_row.saturating_sub(self.rows - 1) * self.columns
    }

    pub fn capacity(&self) -> usize {
        self.columns * self.rows
    }

    /// Screen rect of the `slot`th visible card.
    pub fn cell(&self, area: Rect, slot: usize) -> Rect {
        let col = (slot % self.columns) as u16;
        let row = (slot / self.columns) as u16;
        let rect = Rect::new(
            area.x + col * CARD_WIDTH,
            area.y + row * CARD_HEIGHT,
            CARD_WIDTH,
            CARD_HEIGHT,
        );
        rect.intersection(area)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::team_colors::team_colors;
    use mlb_api::TeamRef;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.x + buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    fn render(player: &PlayerRecord) -> Buffer {
        let area = Rect::new(0, 0, CARD_WIDTH, CARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        PlayerCard { player, colors: team_colors(142), selected: false }.render(area, &mut buf);
        buf
    }

    #[test]
    fn stat_rows_follow_record_shape() {
        assert_eq!(stat_lines(&PlayerStats::default()), vec!["AVG .000 HR 0 RBI 0 OPS .000 G 0"]);
        assert_eq!(
            stat_lines(&PlayerStats::Pitching(PitchingStats { era: "3.50".into(), wins: 10, losses: 5, ..Default::default() })),
            vec!["ERA 3.50 W-L 10-5 K 0 IP 0.0 SV 0"]
        );
        let two_way = PlayerStats::TwoWay { hitting: HittingStats::default(), pitching: PitchingStats::default() };
        assert_eq!(stat_lines(&two_way).len(), 2);
    }

    #[test]
    fn card_shows_title_badge_and_stats() {
        let player = PlayerRecord {
            name: "Byron Buxton".into(),
            number: "25".into(),
            position: "CF".into(),
            year: 2024,
            team: Some(TeamRef { id: 142, name: "Minnesota Twins".into() }),
            ..Default::default()
        };
        let buf = render(&player);

        assert!(row_text(&buf, 0).contains("#25 Byron Buxton"));
        let heading = row_text(&buf, 1);
        assert!(heading.contains(" BB "), "{heading}");
        assert!(heading.contains("CF  Minnesota Twins"), "{heading}");
        assert!(row_text(&buf, 4).contains("2024 Stats"));
        assert!(row_text(&buf, 5).contains("AVG .000"));
    }

    #[test]
    fn grid_scrolls_by_rows_to_keep_selection_visible() {
        let grid = CardGrid::new(Rect::new(0, 0, CARD_WIDTH * 3, CARD_HEIGHT * 2));
        assert_eq!(grid, CardGrid { columns: 3, rows: 2 });
        assert_eq!(grid.first_visible(4), 0);
        assert_eq!(grid.first_visible(6), 3);
        assert_eq!(grid.first_visible(11), 6);
    }

    #[test]
    fn grid_cells_are_clipped_to_area() {
        let area = Rect::new(2, 3, CARD_WIDTH + 10, CARD_HEIGHT);
        let grid = CardGrid::new(area);
        assert_eq!(grid.columns, 1);
        assert_eq!(grid.cell(area, 0), Rect::new(2, 3, CARD_WIDTH, CARD_HEIGHT));
    }
}
