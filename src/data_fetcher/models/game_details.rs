use crate::constants::sentinel;

/// Pitching decisions and venue scraped from a single game's detail page.
///
/// Each field falls back to the "no information" sentinel independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameDetails {
    pub winning_pitcher: String,
    pub losing_pitcher: String,
    pub stadium: String,
}

impl GameDetails {
    /// Details for a page that could not be fetched or parsed.
    pub fn unavailable() -> Self {
        Self {
            winning_pitcher: sentinel::NO_INFORMATION.to_string(),
            losing_pitcher: sentinel::NO_INFORMATION.to_string(),
            stadium: sentinel::NO_INFORMATION.to_string(),
        }
    }

    /// Returns true when none of the fields were found.
    pub fn is_unavailable(&self) -> bool {
        *self == Self::unavailable()
    }
}

impl Default for GameDetails {
    fn default() -> Self {
        Self::unavailable()
    }
}
