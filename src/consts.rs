/// Lower clamp applied to a derived smash factor.
pub const SMASH_MIN: f64 = 0.5;

/// Upper clamp applied to a derived smash factor.
/// Ratios above this are sensor misreads, not real strikes.
pub const SMASH_MAX: f64 = 1.95;

/// Milliseconds per spreadsheet day serial.
pub const MS_PER_DAY: f64 = 86_400_000.0;

/// Spreadsheet serial epoch (1899-12-30), the Lotus 1-2-3 leap-year convention.
pub const SERIAL_EPOCH_YMD: (i32, u32, u32) = (1899, 12, 30);

/// Decimal places each numeric fingerprint component is rounded to.
pub const FINGERPRINT_DECIMALS: i32 = 2;

/// Separator between fingerprint components.
pub const FINGERPRINT_SEPARATOR: char = '|';

/// Tokens treated as a missing numeric cell (compared case-insensitively).
pub const MISSING_TOKENS: [&str; 3] = ["", "#DIV/0!", "NAN"];

/// Rank offset for club labels outside every known category.
pub const UNKNOWN_CLUB_RANK_BASE: u32 = 1_000;

/// Number of hash slots used to order unknown club labels.
pub const UNKNOWN_CLUB_SLOTS: u64 = 4_096;
