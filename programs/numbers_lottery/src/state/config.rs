use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LotteryError;

/// Tunables applied to every game created after they are set.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ConfigParams {
    pub initial_pool_amount: u64,
    pub ticket_price: u64,
    pub ticket_max_count: u32,
    pub owner_fee_bps: u16,
    pub develop_fee_bps: u16,
    pub verify_fee_bps: u16,
    pub last_ticket_bonus_percent: u8,
    pub prize_tiers: Vec<u8>,
    pub max_active_games: u8,
}

impl Default for ConfigParams {
    fn default() -> Self {
        Self {
            initial_pool_amount: DEFAULT_INITIAL_POOL_AMOUNT,
            ticket_price: DEFAULT_TICKET_PRICE,
            ticket_max_count: DEFAULT_TICKET_MAX_COUNT,
            owner_fee_bps: DEFAULT_OWNER_FEE_BPS,
            develop_fee_bps: DEFAULT_DEVELOP_FEE_BPS,
            verify_fee_bps: DEFAULT_VERIFY_FEE_BPS,
            last_ticket_bonus_percent: DEFAULT_LAST_TICKET_BONUS_PERCENT,
            prize_tiers: DEFAULT_PRIZE_TIERS.to_vec(),
            max_active_games: DEFAULT_MAX_ACTIVE_GAMES,
        }
    }
}

impl ConfigParams {
    pub fn validate(&self) -> Result<()> {
        require!(self.initial_pool_amount > 0, LotteryError::InvalidStake);
        require!(self.ticket_price > 0, LotteryError::InvalidPrice);
        require!(
            self.ticket_max_count >= 1 && self.ticket_max_count <= MAX_TICKETS_PER_GAME,
            LotteryError::InvalidTicketMaxCount
        );

        let fee_sum = self.owner_fee_bps as u64
            + self.develop_fee_bps as u64
            + self.verify_fee_bps as u64;
        require!(fee_sum <= BPS_DENOMINATOR, LotteryError::InvalidFeeBps);

        require!(
            self.last_ticket_bonus_percent >= 1
                && self.last_ticket_bonus_percent as u64 <= PERCENT_DENOMINATOR,
            LotteryError::InvalidBonusPercent
        );

        // At least one winning tier plus the rest tier.
        require!(
            self.prize_tiers.len() >= 2 && self.prize_tiers.len() <= MAX_PRIZE_TIERS,
            LotteryError::InvalidPrizeTiers
        );
        let tier_sum: u64 = self.prize_tiers.iter().map(|p| *p as u64).sum();
        require!(tier_sum == PERCENT_DENOMINATOR, LotteryError::InvalidPrizeTiers);

        require!(self.max_active_games >= 1, LotteryError::InvalidMaxActiveGames);
        Ok(())
    }
}

#[account]
#[derive(InitSpace)]
pub struct Config {
    /// Admin who can update settings and roles.
    pub authority: Pubkey,
    /// Operator allowed to redirect claims and force withdrawals.
    pub operator: Pubkey,
    /// Receives the develop fee of every verified game.
    pub developer: Pubkey,
    /// Stake required to open a game, in the game currency's base units.
    pub initial_pool_amount: u64,
    pub ticket_price: u64,
    pub ticket_max_count: u32,
    /// Fee rates in basis points (100 = 1%).
    pub owner_fee_bps: u16,
    pub develop_fee_bps: u16,
    pub verify_fee_bps: u16,
    /// Payout percent of the most recently sold ticket.
    pub last_ticket_bonus_percent: u8,
    /// Winning tier percentages followed by the rest tier.
    #[max_len(MAX_PRIZE_TIERS)]
    pub prize_tiers: Vec<u8>,
    pub max_active_games: u8,
    /// Running count of games created (last issued game id).
    pub total_games: u64,
    /// Running count of tickets sold (last issued ticket id).
    pub total_tickets: u64,
    /// PDA bump seed.
    pub bump: u8,
}

impl Config {
    pub const SEED: &'static [u8] = b"config";

    pub fn apply(&mut self, params: ConfigParams) -> Result<()> {
        params.validate()?;
        self.initial_pool_amount = params.initial_pool_amount;
        self.ticket_price = params.ticket_price;
        self.ticket_max_count = params.ticket_max_count;
        self.owner_fee_bps = params.owner_fee_bps;
        self.develop_fee_bps = params.develop_fee_bps;
        self.verify_fee_bps = params.verify_fee_bps;
        self.last_ticket_bonus_percent = params.last_ticket_bonus_percent;
        self.prize_tiers = params.prize_tiers;
        self.max_active_games = params.max_active_games;
        Ok(())
    }

    pub fn params(&self) -> ConfigParams {
        ConfigParams {
            initial_pool_amount: self.initial_pool_amount,
            ticket_price: self.ticket_price,
            ticket_max_count: self.ticket_max_count,
            owner_fee_bps: self.owner_fee_bps,
            develop_fee_bps: self.develop_fee_bps,
            verify_fee_bps: self.verify_fee_bps,
            last_ticket_bonus_percent: self.last_ticket_bonus_percent,
            prize_tiers: self.prize_tiers.clone(),
            max_active_games: self.max_active_games,
        }
    }

    /// Applies `params` only if the current tunables still equal `expected`.
    pub fn update(&mut self, expected: &ConfigParams, params: ConfigParams) -> Result<()> {
        require!(self.params() == *expected, LotteryError::StaleConfig);
        self.apply(params)
    }

    pub fn next_game_id(&mut self) -> Result<u64> {
        self.total_games = self
            .total_games
            .checked_add(1)
            .ok_or(LotteryError::MathOverflow)?;
        Ok(self.total_games)
    }

    pub fn next_ticket_id(&mut self) -> Result<u64> {
        self.total_tickets = self
            .total_tickets
            .checked_add(1)
            .ok_or(LotteryError::MathOverflow)?;
        Ok(self.total_tickets)
    }

    pub fn is_operator(&self, key: &Pubkey) -> bool {
        self.operator == *key || self.authority == *key
    }
}
