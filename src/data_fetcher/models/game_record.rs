use crate::constants::sentinel;

/// One row of the schedule table.
///
/// Every schedule row produces a record, including rows that carry no game.
/// Optional fields are `None` when the corresponding node was missing from
/// the row; the only always-present field is `home_team`, which holds the
/// "no game" sentinel for empty rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameRecord {
    /// Date label carried forward from the nearest preceding header cell in the same table body
    pub date: Option<String>,
    pub home_team: String,
    pub away_team: Option<String>,
    /// Score with all spaces and newlines removed, e.g. `3-2`
    pub score: Option<String>,
    /// Winning pitcher, or the "draw" sentinel for a played game without one
    pub winning_pitcher: Option<String>,
    pub losing_pitcher: Option<String>,
    pub stadium: Option<String>,
}

impl GameRecord {
    /// Returns true when the row carried no game at all.
    pub fn is_no_game(&self) -> bool {
        self.home_team == sentinel::NO_GAME
    }

    /// Returns true when a game was played without a winning pitcher.
    pub fn is_draw(&self) -> bool {
        self.winning_pitcher.as_deref() == Some(sentinel::DRAW)
    }

    /// Field values in CSV column order. Absent fields render as empty strings.
    pub fn csv_fields(&self) -> [&str; 7] {
        [
            self.date.as_deref().unwrap_or_default(),
            self.home_team.as_str(),
            self.away_team.as_deref().unwrap_or_default(),
            self.score.as_deref().unwrap_or_default(),
            self.winning_pitcher.as_deref().unwrap_or_default(),
            self.losing_pitcher.as_deref().unwrap_or_default(),
            self.stadium.as_deref().unwrap_or_default(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played_game() -> GameRecord {
        GameRecord {
            date: Some("3/10（月）".to_string()),
            home_team: "巨人".to_string(),
            away_team: Some("阪神".to_string()),
            score: Some("3-2".to_string()),
            winning_pitcher: Some("戸郷".to_string()),
            losing_pitcher: Some("才木".to_string()),
            stadium: Some("東京ドーム".to_string()),
        }
    }

    #[test]
    fn test_no_game_detection() {
        let record = GameRecord {
            home_team: sentinel::NO_GAME.to_string(),
            ..Default::default()
        };
        assert!(record.is_no_game());
        assert!(!played_game().is_no_game());
    }

    #[test]
    fn test_draw_detection() {
        let mut record = played_game();
        assert!(!record.is_draw());

        record.winning_pitcher = Some(sentinel::DRAW.to_string());
        assert!(record.is_draw());
    }

    #[test]
    fn test_csv_fields_blank_for_absent_values() {
        let record = GameRecord {
            date: Some("3/10（月）".to_string()),
            home_team: sentinel::NO_GAME.to_string(),
            ..Default::default()
        };

        assert_eq!(
            record.csv_fields(),
            ["3/10（月）", "no game", "", "", "", "", ""]
        );
    }

    #[test]
    fn test_csv_fields_order_matches_headers() {
        let game = played_game();
        let fields = game.csv_fields();
        assert_eq!(fields.len(), crate::constants::export::HEADERS.len());
        assert_eq!(fields[1], "巨人");
        assert_eq!(fields[6], "東京ドーム");
    }
}
