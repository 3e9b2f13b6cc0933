use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryError {
    // Lookup
    #[msg("Lottery game not found.")]
    GameNotFound,
    #[msg("Lottery ticket not found.")]
    TicketNotFound,

    // Input validation
    #[msg("Lucky number must be between 1 and 999999.")]
    InvalidNumber,
    #[msg("Payment does not match the game's ticket price.")]
    InvalidPrice,
    #[msg("Initial stake does not match the configured pool amount.")]
    InvalidStake,
    #[msg("Amount must be greater than zero.")]
    ZeroAmount,
    #[msg("Target address must not be the zero address.")]
    InvalidTarget,
    #[msg("Game duration must be greater than zero.")]
    InvalidDuration,
    #[msg("Advertisement exceeds maximum length of 64 bytes.")]
    AdTooLong,
    #[msg("Fee basis points must sum to at most 10000 (100%).")]
    InvalidFeeBps,
    #[msg("Prize tiers need 2 to 8 entries summing to 100.")]
    InvalidPrizeTiers,
    #[msg("Ticket max count must be between 1 and 1000.")]
    InvalidTicketMaxCount,
    #[msg("Bonus percent must be between 1 and 100.")]
    InvalidBonusPercent,
    #[msg("At least one active game must be allowed.")]
    InvalidMaxActiveGames,
    #[msg("Account currency does not match the game currency.")]
    CurrencyMismatch,
    #[msg("Token accounts are required for token-denominated games.")]
    MissingTokenAccounts,
    #[msg("Tier is outside the game's prize table.")]
    InvalidTier,

    // Preconditions
    #[msg("Lottery game is not active.")]
    GameNotActive,
    #[msg("Lottery game has not ended.")]
    GameNotEnded,
    #[msg("Lottery game has already been verified.")]
    AlreadyVerified,
    #[msg("Lottery game has not been verified.")]
    GameNotVerified,
    #[msg("Buyer already holds a ticket for this game.")]
    DuplicatePurchase,
    #[msg("Ticket reward has already been claimed.")]
    AlreadyClaimed,
    #[msg("All tickets for this game have been sold.")]
    TicketsSoldOut,
    #[msg("Too many active games.")]
    TooManyActiveGames,
    #[msg("Wallet balance is insufficient.")]
    InsufficientBalance,
    #[msg("Bonus pool cannot cover the withdrawal.")]
    InsufficientPool,
    #[msg("Old value is not equal to current value.")]
    StaleConfig,

    // Access
    #[msg("Signer does not hold the required role.")]
    Unauthorized,
    #[msg("Only the ticket owner can perform this action.")]
    NotTicketOwner,

    #[msg("Arithmetic overflow.")]
    MathOverflow,
}
