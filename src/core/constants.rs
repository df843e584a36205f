// Tick and timing
pub const MAX_TICK_DELTA_SECONDS: f64 = 5.0;
pub const DEFAULT_MATCH_INTERVAL_SECONDS: f64 = 60.0;
pub const DEFAULT_AUTOSAVE_INTERVAL_SECONDS: f64 = 30.0;
/// Countdown window before kickoff during which a game is shown as in progress.
pub const GAME_DURATION_SECONDS: f64 = 17.0;

// Offline catch-up
pub const OFFLINE_TP_EFFICIENCY: f64 = 0.5;
pub const OFFLINE_CAP_SECONDS: f64 = 8.0 * 60.0 * 60.0;
pub const OFFLINE_MIN_ELAPSED_SECONDS: f64 = 10.0;
/// Absences shorter than this do not produce a welcome-back banner.
pub const OFFLINE_BANNER_MIN_SECONDS: f64 = 60.0;

// Season structure
pub const REGULAR_SEASON_WEEKS: u32 = 17;
pub const PLAYOFF_WIN_THRESHOLD: u32 = 9;
pub const FINAL_PLAYOFF_ROUND: u32 = 3;

// Awards
pub const PRO_BOWL_MIN_PERFORMANCE: f64 = 70.0;
pub const LEAGUE_MVP_MIN_PERFORMANCE: f64 = 85.0;
pub const LEAGUE_MVP_MIN_WIN_RATIO: f64 = 0.7;
pub const ROOKIE_MIN_PERFORMANCE: f64 = 55.0;
pub const CHAMPIONSHIP_MVP_MIN_PERFORMANCE: f64 = 75.0;

// Rating model
pub const RATING_MIN: f64 = 40.0;
pub const RATING_MAX: f64 = 99.0;
pub const RATING_FALLBACK: u32 = 50;
pub const BASE_ATTRIBUTE_VALUE: u32 = 40;
pub const MAX_ATTRIBUTE_VALUE: u32 = 99;
pub const POSITION_HEAD_START: f64 = 20.0;
pub const ATTRIBUTE_COST_GROWTH: f64 = 1.15;
pub const NUM_ATTRIBUTES: usize = 14;

// Match model
pub const WIN_THRESHOLD_BASE: f64 = 47.0;
pub const WIN_THRESHOLD_PER_SEASON: f64 = 2.0;
pub const WIN_JITTER_RANGE: f64 = 15.0;
pub const NOISE_SCALE: f64 = 20.0;
pub const MATCH_EQUIP_BONUS_CAP: f64 = 15.0;
pub const MONEY_PER_PERFORMANCE_POINT: f64 = 500.0;

// Training
pub const MAX_TRAINING_SLOTS: usize = 5;
pub const STARTING_TRAINING_SLOTS: usize = 3;

// Prestige
pub const RETIRE_MIN_SEASON: u32 = 3;
pub const PRESTIGE_TP_BONUS_PER_RANK: f64 = 0.2;
pub const PRESTIGE_MONEY_BONUS_PER_RANK: f64 = 0.15;
pub const PRESTIGE_RATING_BONUS_PER_RANK: u32 = 2;
pub const PRESTIGE_RATING_BONUS_CAP: u32 = 10;

// Career defaults
pub const PLAYER_STARTING_AGE: u32 = 22;
pub const STARTING_MONEY: f64 = 1000.0;
pub const STARTING_SALARY_PER_GAME: u64 = 50_000;
pub const STARTING_SIGNING_BONUS: u64 = 500_000;
pub const STARTING_CONTRACT_YEARS: u32 = 4;

// Persistence
pub const SAVE_VERSION: u32 = 2;
pub const SAVE_VERSION_MAGIC: u64 = 0x4752_4944_0000_0002;
pub const SAVE_FILE_NAME: &str = "career.sav";
