use chrono::{Datelike, Local};
use log::LevelFilter;
use mlb_api::client::MLB_STATS_API;

/// Earliest season the Stats API has 40-man rosters for.
pub const FIRST_SEASON: u16 = 1910;
pub const DEFAULT_TEAM: u32 = 142;

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub full_screen: bool,
    pub log_level: Option<LevelFilter>,
    pub team: u32,
    pub season: u16,
    pub api_base: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            full_screen: false,
            log_level: None,
            team: DEFAULT_TEAM,
            season: current_season(),
            api_base: MLB_STATS_API.to_string(),
        }
    }
}

impl AppSettings {
    /// Defaults overridden by `MLBTUI_*` environment variables.
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(team) = var("MLBTUI_TEAM").and_then(|v| v.parse().ok()) {
            settings.team = team;
        }
        if let Some(season) = var("MLBTUI_SEASON").and_then(|v| v.parse().ok()) {
            settings.season = clamp_season(season);
        }
        if let Some(level) = var("MLBTUI_LOG").and_then(|v| v.parse().ok()) {
            settings.log_level = Some(level);
        }
        if let Some(base) = var("MLBTUI_API_BASE") {
            settings.api_base = base;
        }
        settings
    }
}

pub fn current_season() -> u16 {
    u16::try_from(Local::now().year()).unwrap_or(FIRST_SEASON)
}

pub fn clamp_season(season: u16) -> u16 {
    season.clamp(FIRST_SEASON, current_season())
}
