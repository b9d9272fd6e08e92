pub mod game_details;
pub mod schedule;
pub mod text;

pub use game_details::{extract_game_details, fetch_game_details};
pub use schedule::{extract_game_records, parse_schedule_html};
pub use text::normalize_score;
