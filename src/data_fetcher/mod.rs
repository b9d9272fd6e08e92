pub mod api;
pub mod models;
pub mod processors;

pub use api::{create_http_client, fetch_page, fetch_schedule_page};
pub use models::{GameDetails, GameRecord};
pub use processors::{extract_game_details, extract_game_records, fetch_game_details, parse_schedule_html};
