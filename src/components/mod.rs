pub mod player_card;
pub mod team_colors;
