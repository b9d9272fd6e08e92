pub mod date_logic;
pub mod fetch_utils;
pub mod http_client;
pub mod urls;

pub use date_logic::{format_fetch_date, format_run_stamp, parse_fetch_date};
pub use fetch_utils::{fetch_page, fetch_schedule_page};
pub use http_client::create_http_client;
pub use urls::{build_export_file_name, build_schedule_url};
