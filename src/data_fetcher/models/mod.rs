pub mod game_details;
pub mod game_record;

pub use game_details::GameDetails;
pub use game_record::GameRecord;
