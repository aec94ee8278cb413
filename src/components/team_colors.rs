use tui::style::Color;

/// Club colours used to tint the roster frame and player cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamColors {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
}

// team id -> [primary, secondary, accent]
const CLUB_COLORS: [(u32, [u32; 3]); 30] = [
    (109, [0xA71930, 0xE3D4AD, 0x000000]), // Arizona Diamondbacks
    (144, [0xCE1141, 0x13274F, 0xEAAA00]), // Atlanta Braves
    (110, [0xDF4601, 0x000000, 0xFFFFFF]), // Baltimore Orioles
    (111, [0xBD3039, 0x0C2340, 0xFFFFFF]), // Boston Red Sox
    (112, [0x0E3386, 0xCC3433, 0xFFFFFF]), // Chicago Cubs
    (145, [0x27251F, 0xC4CED4, 0xFFFFFF]), // Chicago White Sox
    (113, [0xC6011F, 0x000000, 0xFFFFFF]), // Cincinnati Reds
    (114, [0x00385D, 0xE50022, 0xFFFFFF]), // Cleveland Guardians
    (115, [0x33006F, 0xC4CED4, 0x000000]), // Colorado Rockies
    (116, [0x0C2340, 0xFA4616, 0xFFFFFF]), // Detroit Tigers
    (117, [0x002D62, 0xEB6E1F, 0xFFFFFF]), // Houston Astros
    (118, [0x004687, 0xBD9B60, 0xFFFFFF]), // Kansas City Royals
    (108, [0xBA0021, 0x003263, 0xC4CED4]), // Los Angeles Angels
    (119, [0x005A9C, 0xEF3E42, 0xFFFFFF]), // Los Angeles Dodgers
    (146, [0x00A3E0, 0xEF3340, 0x000000]), // Miami Marlins
    (158, [0x12284B, 0xFFC52F, 0xFFFFFF]), // Milwaukee Brewers
    (142, [0x002B5C, 0xD31145, 0xFFFFFF]), // Minnesota Twins
    (121, [0x002D72, 0xFF5910, 0xFFFFFF]), // New York Mets
    (147, [0x003087, 0x0C2340, 0xFFFFFF]), // New York Yankees
    (133, [0x003831, 0xEFB21E, 0xFFFFFF]), // Oakland Athletics
    (143, [0xE81828, 0x002D72, 0xFFFFFF]), // Philadelphia Phillies
    (134, [0x27251F, 0xFDB827, 0xFFFFFF]), // Pittsburgh Pirates
    (135, [0x2F241D, 0xFFC425, 0xFFFFFF]), // San Diego Padres
    (137, [0xFD5A1E, 0x27251F, 0xEFD19F]), // San Francisco Giants
    (136, [0x0C2C56, 0x005C5C, 0xC4CED4]), // Seattle Mariners
    (138, [0xC41E3A, 0x0C2340, 0xFEDB00]), // St. Louis Cardinals
    (139, [0x092C5C, 0x8FBCE6, 0xF5D130]), // Tampa Bay Rays
    (140, [0x003278, 0xC0111F, 0xFFFFFF]), // Texas Rangers
    (141, [0x134A8E, 0x1D2D5C, 0xE8291C]), // Toronto Blue Jays
    (120, [0xAB0003, 0x14225A, 0xFFFFFF]), // Washington Nationals
];

const DEFAULT_COLORS: [u32; 3] = [0x002B5C, 0xD31145, 0xFFFFFF];

pub fn team_colors(team: u32) -> TeamColors {
    let [primary, secondary, accent] = CLUB_COLORS
        .iter()
        .find(|(id, _)| *id == team)
        .map(|(_, colors)| *colors)
        .unwrap_or(DEFAULT_COLORS);
    TeamColors {
        primary: Color::from_u32(primary),
        secondary: Color::from_u32(secondary),
        accent: Color::from_u32(accent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_club_uses_its_palette() {
        let twins = team_colors(142);
        assert_eq!(twins.primary, Color::Rgb(0x00, 0x2B, 0x5C));
        assert_eq!(twins.secondary, Color::Rgb(0xD3, 0x11, 0x45));
    }

    #[test]
    fn unknown_club_falls_back_to_default() {
        assert_eq!(team_colors(4124), team_colors(142));
        assert_eq!(team_colors(0).accent, Color::Rgb(0xFF, 0xFF, 0xFF));
    }

    #[test]
    fn every_club_id_is_unique() {
        let mut ids: Vec<u32> = CLUB_COLORS.iter().map(|(id, _)| *id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CLUB_COLORS.len());
    }
}
