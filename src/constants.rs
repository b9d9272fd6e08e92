//! Application-wide constants and configuration values
//!
//! This module centralizes the magic strings and default settings so the
//! extractor, exporter and scheduler agree on them.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// Default schedule page. The fetch date is appended as `?date=YYYY-MM-DD`.
pub const DEFAULT_SCHEDULE_BASE_URL: &str = "https://baseball.yahoo.co.jp/npb/schedule/";

/// Desktop browser user agent; the schedule site serves a different layout to unknown clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Default directory for exported CSV files (relative to the working directory)
pub const DEFAULT_OUTPUT_DIR: &str = "npb_results";

/// Date used by the `test` command when no `--date` is given
pub const DEFAULT_TEST_DATE: &str = "2025-03-10";

/// Default log file name inside the log directory
pub const LOG_FILE_NAME: &str = "npb_results.log";

/// Sentinel values substituted for missing nodes
pub mod sentinel {
    /// Home team placeholder for rows that carry no game
    pub const NO_GAME: &str = "no game";

    /// Winning pitcher placeholder for games that ended without a decision
    pub const DRAW: &str = "draw";

    /// Detail-page placeholder when a node or the fetch itself is missing
    pub const NO_INFORMATION: &str = "no information";
}

/// CSS selectors for the schedule page layout
pub mod selectors {
    pub const TABLE_BODY: &str = "tbody";
    pub const ROW: &str = "tr.bb-scheduleTable__row";
    pub const DATE_HEADER: &str = "th.bb-scheduleTable__head";
    pub const HOME_NAME: &str = ".bb-scheduleTable__homeName a";
    pub const AWAY_NAME: &str = ".bb-scheduleTable__awayName a";
    pub const SCORE: &str = ".bb-scheduleTable__score";
    pub const WINNING_PITCHER: &str = ".bb-scheduleTable__player--win";
    pub const LOSING_PITCHER: &str = ".bb-scheduleTable__player--lose";
    pub const STADIUM: &str = ".bb-scheduleTable__data--stadium";

    /// Game detail page
    pub mod detail {
        pub const PLAYER_BLOCK: &str = ".bb-gameDetail__data--player";
        pub const LABEL: &str = ".bb-gameDetail__data--label";
        pub const NAME: &str = ".bb-gameDetail__data--name";
        pub const STADIUM: &str = ".bb-gameDetail__data--stadium";

        /// Label text marking the winning pitcher block
        pub const WINNING_LABEL: &str = "勝利投手";

        /// Label text marking the losing pitcher block
        pub const LOSING_LABEL: &str = "敗戦投手";
    }
}

/// Weekly scheduler defaults
pub mod schedule {
    /// Default weekday the export job fires on
    pub const DEFAULT_WEEKDAY: &str = "sunday";

    /// Default local fire time (HH:MM)
    pub const DEFAULT_FIRE_TIME: &str = "18:00";

    /// How often the polling loop wakes up to check for a due job
    pub const DEFAULT_POLL_INTERVAL_SECONDS: u64 = 60;
}

/// Environment variable names
pub mod env_vars {
    /// Override for the schedule page base URL
    pub const SCHEDULE_URL: &str = "NPB_SCHEDULE_URL";

    /// Override for the CSV output directory
    pub const OUTPUT_DIR: &str = "NPB_OUTPUT_DIR";

    /// Override for the log file path
    pub const LOG_FILE: &str = "NPB_LOG_FILE";

    /// Override for the HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "NPB_HTTP_TIMEOUT";
}

/// CSV export settings
pub mod export {
    /// Prefix of every exported file name
    pub const FILE_PREFIX: &str = "npb_results_";

    /// UTF-8 byte-order mark written at the start of each file
    pub const UTF8_BOM: &str = "\u{feff}";

    /// Column headers, one per `GameRecord` field, in output order
    pub const HEADERS: [&str; 7] = [
        "date",
        "home_team",
        "away_team",
        "score",
        "winning_pitcher",
        "losing_pitcher",
        "stadium",
    ];
}
