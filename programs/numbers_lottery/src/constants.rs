use anchor_lang::prelude::*;

/// Smallest number a ticket may carry.
#[constant]
pub const MIN_NUMBER: u32 = 1;

/// Largest number a ticket may carry. Draw values use the same range.
#[constant]
pub const MAX_NUMBER: u32 = 999_999;

/// Basis-point denominator for fee rates (10_000 = 100%).
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Percent denominator for prize tiers and bonus multipliers.
pub const PERCENT_DENOMINATOR: u64 = 100;

/// Multiplier reported by every ticket except the most recently sold one.
pub const FULL_BONUS_PERCENT: u8 = 100;

/// Upper bound on entries in a prize table (winning tiers + rest tier).
pub const MAX_PRIZE_TIERS: usize = 8;

/// Hard cap on tickets per game; keeps the number table under the
/// 10 KiB account-creation limit.
pub const MAX_TICKETS_PER_GAME: u32 = 1_000;

/// Numbers returned per page by the number views; keeps return data under
/// the 1 KiB limit.
pub const MAX_VIEW_NUMBERS: usize = 200;

/// Maximum length of a game's advertisement text in bytes.
pub const MAX_AD_LEN: usize = 64;

// Defaults written by `initialize_config`. Amounts are in base units
// (lamports for native games).
pub const DEFAULT_INITIAL_POOL_AMOUNT: u64 = 5_000_000; // 0.005 SOL
pub const DEFAULT_TICKET_PRICE: u64 = 500_000; // 0.0005 SOL
pub const DEFAULT_TICKET_MAX_COUNT: u32 = 300;
pub const DEFAULT_OWNER_FEE_BPS: u16 = 1_000;
pub const DEFAULT_DEVELOP_FEE_BPS: u16 = 1_000;
pub const DEFAULT_VERIFY_FEE_BPS: u16 = 100;
pub const DEFAULT_LAST_TICKET_BONUS_PERCENT: u8 = 80;
pub const DEFAULT_MAX_ACTIVE_GAMES: u8 = 1;

/// Three winning tiers followed by the rest tier.
pub const DEFAULT_PRIZE_TIERS: [u8; 4] = [70, 15, 5, 10];
