use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LotteryError;
use crate::state::{BonusPool, FeeRates, FeeRelease, NumberEntry};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum CurrencyKind {
    /// Lamports held by the vault PDA.
    Native,
    /// SPL tokens held by the vault's token account for `mint`.
    Token,
}

impl CurrencyKind {
    pub fn seed(&self) -> &'static [u8] {
        match self {
            CurrencyKind::Native => b"native",
            CurrencyKind::Token => b"token",
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct Currency {
    pub kind: CurrencyKind,
    /// Token mint; the default key for native currency.
    pub mint: Pubkey,
}

impl Currency {
    pub fn native() -> Self {
        Self {
            kind: CurrencyKind::Native,
            mint: Pubkey::default(),
        }
    }

    pub fn token(mint: Pubkey) -> Self {
        Self {
            kind: CurrencyKind::Token,
            mint,
        }
    }

    pub fn is_native(&self) -> bool {
        self.kind == CurrencyKind::Native
    }

    /// Rejects token currencies without a mint and native ones carrying one.
    pub fn validate(&self) -> Result<()> {
        let has_mint = self.mint != Pubkey::default();
        require!(has_mint != self.is_native(), LotteryError::CurrencyMismatch);
        Ok(())
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum GameStatus {
    /// Accepting tickets until the end time.
    Active,
    /// End time reached, waiting for verification. Never stored.
    Ended,
    /// Winning number drawn, fees paid, rewards claimable.
    Verified,
}

/// Outcome of one ticket's claim.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RewardQuote {
    pub tier: u8,
    /// Share before the ticket's bonus multiplier.
    pub base: u64,
    /// Amount credited to the claimant.
    pub payout: u64,
}

impl RewardQuote {
    pub fn withheld(&self) -> u64 {
        self.base.saturating_sub(self.payout)
    }
}

/// What verification moved out of the pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settlement {
    pub fees: FeeRelease,
    /// Bonus returned to the owner for tiers nobody placed in.
    pub refund: u64,
}

#[account]
#[derive(InitSpace)]
pub struct Game {
    /// Sequential game identifier, starting at 1.
    pub game_id: u64,
    /// Creator who staked the initial pool and collects the owner fee.
    pub owner: Pubkey,
    /// Free-form text shown alongside the game.
    #[max_len(MAX_AD_LEN)]
    pub ad: String,
    /// Stored status. `Ended` is derived from the clock.
    pub status: GameStatus,
    /// Unix timestamp when sales open.
    pub start_time: i64,
    /// Sale window length in seconds.
    pub duration: i64,
    pub ticket_price: u64,
    pub ticket_max_count: u32,
    pub currency: Currency,
    pub fee_rates: FeeRates,
    pub last_ticket_bonus_percent: u8,
    /// Winning tier percentages followed by the rest tier.
    #[max_len(MAX_PRIZE_TIERS)]
    pub prize_tiers: Vec<u8>,
    pub pool: BonusPool,
    /// Running draw value, re-hashed on every sale.
    pub draw_seed: u32,
    /// Sum of every number sold.
    pub number_sum: u64,
    pub ticket_sold_count: u32,
    /// Ticket whose payout is cut to `last_ticket_bonus_percent`.
    pub last_sold_ticket_id: u64,
    /// Zero until verified.
    pub winning_number: u32,
    /// Number placed in each winning tier, closest first.
    #[max_len(MAX_PRIZE_TIERS)]
    pub tier_numbers: Vec<u32>,
    /// Tickets per tier; the last entry counts the rest tier.
    #[max_len(MAX_PRIZE_TIERS)]
    pub tier_ticket_counts: Vec<u32>,
    pub verifier: Pubkey,
    /// Unix timestamp of verification (0 if not yet).
    pub verified_at: i64,
    /// PDA bump seed.
    pub bump: u8,
}

impl Game {
    pub const SEED: &'static [u8] = b"game";

    pub fn end_time(&self) -> Result<i64> {
        Ok(self
            .start_time
            .checked_add(self.duration)
            .ok_or(LotteryError::MathOverflow)?)
    }

    pub fn status_at(&self, now: i64) -> Result<GameStatus> {
        if self.status == GameStatus::Active && now >= self.end_time()? {
            return Ok(GameStatus::Ended);
        }
        Ok(self.status)
    }

    /// Number of winning tiers; the rest tier sits at this index.
    pub fn tier_count(&self) -> usize {
        self.prize_tiers.len().saturating_sub(1)
    }

    pub fn bonus_percent(&self, ticket_id: u64) -> u8 {
        if ticket_id == self.last_sold_ticket_id {
            self.last_ticket_bonus_percent
        } else {
            FULL_BONUS_PERCENT
        }
    }

    pub fn check_on_sale(&self, now: i64) -> Result<()> {
        require!(
            now >= self.start_time && self.status_at(now)? == GameStatus::Active,
            LotteryError::GameNotActive
        );
        require!(
            self.ticket_sold_count < self.ticket_max_count,
            LotteryError::TicketsSoldOut
        );
        Ok(())
    }

    /// Books a sold ticket: pool split, number aggregate and the last-sold marker.
    pub fn record_sale(&mut self, ticket_id: u64, number: u32, draw_seed: u32) -> Result<()> {
        self.pool.credit_sale(self.ticket_price, self.fee_rates)?;
        self.number_sum = self
            .number_sum
            .checked_add(number as u64)
            .ok_or(LotteryError::MathOverflow)?;
        self.ticket_sold_count = self
            .ticket_sold_count
            .checked_add(1)
            .ok_or(LotteryError::MathOverflow)?;
        self.last_sold_ticket_id = ticket_id;
        self.draw_seed = draw_seed;
        Ok(())
    }

    pub fn check_verifiable(&self, now: i64) -> Result<()> {
        match self.status_at(now)? {
            GameStatus::Verified => err!(LotteryError::AlreadyVerified),
            GameStatus::Active => err!(LotteryError::GameNotEnded),
            GameStatus::Ended => Ok(()),
        }
    }

    /// Records the ranking, releases fees and refunds tiers nobody placed in.
    pub fn settle(
        &mut self,
        winning_number: u32,
        ranking: &[NumberEntry],
        verifier: Pubkey,
        now: i64,
    ) -> Result<Settlement> {
        let tier_count = self.tier_count();

        let mut counts = vec![0u32; tier_count + 1];
        let mut placed = 0u32;
        for (tier, entry) in ranking.iter().take(tier_count).enumerate() {
            counts[tier] = entry.count;
            placed = placed.checked_add(entry.count).ok_or(LotteryError::MathOverflow)?;
        }
        counts[tier_count] = self
            .ticket_sold_count
            .checked_sub(placed)
            .ok_or(LotteryError::MathOverflow)?;

        let fees = self.pool.release_fees();

        let refund = if self.ticket_sold_count == 0 {
            self.pool.remaining_bonus()
        } else {
            // Empty tiers are refunded as one share of their combined percent.
            let mut percent = 0u8;
            for (count, tier_percent) in counts.iter().zip(&self.prize_tiers) {
                if *count == 0 {
                    percent = percent
                        .checked_add(*tier_percent)
                        .ok_or(LotteryError::MathOverflow)?;
                }
            }
            self.pool.tier_share(percent)?
        };
        self.pool.withdraw_bonus(refund)?;

        self.winning_number = winning_number;
        self.tier_numbers = ranking.iter().take(tier_count).map(|e| e.number).collect();
        self.tier_ticket_counts = counts;
        self.verifier = verifier;
        self.verified_at = now;
        self.status = GameStatus::Verified;

        Ok(Settlement { fees, refund })
    }

    /// Reward of a ticket placed in `tier`, where `occurrences` is the number
    /// of tickets sharing its number.
    pub fn quote_reward(&self, ticket_id: u64, tier: usize, occurrences: u32) -> Result<RewardQuote> {
        let tier_count = self.tier_count();
        let tier = tier.min(tier_count);
        let share = self.pool.tier_share(self.prize_tiers[tier])?;

        let holders = if tier < tier_count {
            occurrences
        } else {
            self.tier_ticket_counts.get(tier_count).copied().unwrap_or(0)
        };
        let base = if holders == 0 { 0 } else { share / holders as u64 };

        let payout = (base as u128)
            .checked_mul(self.bonus_percent(ticket_id) as u128)
            .ok_or(LotteryError::MathOverflow)?
            / PERCENT_DENOMINATOR as u128;
        let payout = u64::try_from(payout).map_err(|_| LotteryError::MathOverflow)?;

        Ok(RewardQuote {
            tier: tier as u8,
            base,
            payout,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::state::NumberTable;

    pub(crate) fn game() -> Game {
        let mut pool = BonusPool::default();
        pool.seed(DEFAULT_INITIAL_POOL_AMOUNT).unwrap();
        Game {
            game_id: 1,
            owner: Pubkey::new_unique(),
            ad: String::new(),
            status: GameStatus::Active,
            start_time: 1_000,
            duration: 600,
            ticket_price: DEFAULT_TICKET_PRICE,
            ticket_max_count: DEFAULT_TICKET_MAX_COUNT,
            currency: Currency::native(),
            fee_rates: FeeRates {
                owner_fee_bps: DEFAULT_OWNER_FEE_BPS,
                develop_fee_bps: DEFAULT_DEVELOP_FEE_BPS,
                verify_fee_bps: DEFAULT_VERIFY_FEE_BPS,
            },
            last_ticket_bonus_percent: DEFAULT_LAST_TICKET_BONUS_PERCENT,
            prize_tiers: DEFAULT_PRIZE_TIERS.to_vec(),
            pool,
            draw_seed: 0,
            number_sum: 0,
            ticket_sold_count: 0,
            last_sold_ticket_id: 0,
            winning_number: 0,
            tier_numbers: vec![],
            tier_ticket_counts: vec![],
            verifier: Pubkey::default(),
            verified_at: 0,
            bump: 255,
        }
    }

    pub(crate) fn empty_table() -> NumberTable {
        NumberTable {
            game_id: 1,
            entries: vec![],
            bump: 255,
        }
    }

    /// Sells one ticket per number; ticket ids follow the slice order from 1.
    pub(crate) fn sell(game: &mut Game, table: &mut NumberTable, numbers: &[u32]) {
        for number in numbers {
            game.check_on_sale(1_100).unwrap();
            table.insert(*number).unwrap();
            let ticket_id = game.last_sold_ticket_id + 1;
            game.record_sale(ticket_id, *number, 42).unwrap();
        }
    }

    fn verify(game: &mut Game, table: &NumberTable, winning_number: u32) -> Settlement {
        game.check_verifiable(1_600).unwrap();
        let ranking = table.rank(winning_number, game.tier_count());
        game.settle(winning_number, &ranking, Pubkey::new_unique(), 1_600).unwrap()
    }

    #[test]
    fn status_follows_clock() {
        let game = game();
        assert_eq!(game.status_at(1_599).unwrap(), GameStatus::Active);
        assert_eq!(game.status_at(1_600).unwrap(), GameStatus::Ended);
        assert_eq!(game.check_verifiable(1_599).unwrap_err(), LotteryError::GameNotEnded.into());
    }

    #[test]
    fn sales_need_open_window() {
        let mut game = game();
        assert_eq!(game.check_on_sale(999).unwrap_err(), LotteryError::GameNotActive.into());
        assert_eq!(game.check_on_sale(1_600).unwrap_err(), LotteryError::GameNotActive.into());
        game.ticket_max_count = 1;
        let mut table = empty_table();
        sell(&mut game, &mut table, &[5]);
        assert_eq!(game.check_on_sale(1_100).unwrap_err(), LotteryError::TicketsSoldOut.into());
    }

    #[test]
    fn currency_mint_must_match_kind() {
        assert!(Currency::native().validate().is_ok());
        assert!(Currency::token(Pubkey::new_unique()).validate().is_ok());
        assert_eq!(
            Currency::token(Pubkey::default()).validate().unwrap_err(),
            LotteryError::CurrencyMismatch.into()
        );
    }

    #[test]
    fn only_latest_ticket_is_discounted() {
        let mut game = game();
        let mut table = empty_table();

        sell(&mut game, &mut table, &[10]);
        assert_eq!(game.bonus_percent(1), 80);

        sell(&mut game, &mut table, &[20]);
        assert_eq!(game.bonus_percent(1), 100);
        assert_eq!(game.bonus_percent(2), 80);

        sell(&mut game, &mut table, &[30]);
        assert_eq!(game.bonus_percent(1), 100);
        assert_eq!(game.bonus_percent(2), 100);
        assert_eq!(game.bonus_percent(3), 80);
    }

    #[test]
    fn one_sale_keeps_pool_balanced() {
        let mut game = game();
        let mut table = empty_table();
        sell(&mut game, &mut table, &[777]);
        assert_eq!(game.pool.total_amount, 5_500_000);
        assert_eq!(game.pool.owner_fee_amount, 50_000);
        assert_eq!(game.pool.develop_fee_amount, 50_000);
        assert_eq!(game.pool.verify_fee_amount, 5_000);
        assert!(game.pool.is_balanced());
        assert_eq!(game.number_sum, 777);
    }

    #[test]
    fn no_tickets_refunds_whole_bonus() {
        let mut game = game();
        let table = empty_table();
        let settlement = verify(&mut game, &table, 4_242);

        assert_eq!(settlement.refund, DEFAULT_INITIAL_POOL_AMOUNT);
        assert_eq!(game.pool.bonus_amount_withdrawn, game.pool.bonus_amount);
        assert_eq!(game.status, GameStatus::Verified);
        assert_eq!(game.check_verifiable(2_000).unwrap_err(), LotteryError::AlreadyVerified.into());
    }

    #[test]
    fn empty_tiers_are_refunded() {
        // Percent of the bonus refunded with 1, 2, 3 and 4 distinct tickets.
        for (tickets, refunded) in [(1usize, 30u64), (2, 15), (3, 10), (4, 0)] {
            let mut game = game();
            let mut table = empty_table();
            let numbers: Vec<u32> = (1..=tickets as u32).map(|n| n * 1_000).collect();
            sell(&mut game, &mut table, &numbers);

            let bonus = game.pool.bonus_amount;
            let settlement = verify(&mut game, &table, 1_000);
            assert_eq!(settlement.refund, bonus * refunded / 100, "{tickets} tickets");
            assert_eq!(game.pool.bonus_amount_withdrawn, settlement.refund);
        }
    }

    #[test]
    fn empty_tier_refund_rounds_once() {
        let mut game = game();
        game.pool = BonusPool::default();
        game.pool.seed(18).unwrap();
        game.ticket_price = 1;
        let mut table = empty_table();
        sell(&mut game, &mut table, &[7]);
        assert_eq!(game.pool.bonus_amount, 19);

        // Tiers 15 + 5 + 10 sit empty: 19 * 30 / 100, not 2 + 0 + 1.
        let settlement = verify(&mut game, &table, 7);
        assert_eq!(settlement.refund, 5);
        assert_eq!(game.pool.remaining_bonus(), 14);
    }

    #[test]
    fn eleven_buyers_verify() {
        let mut game = game();
        let mut table = empty_table();
        let numbers: Vec<u32> = (1..=11).map(|n| n * 37).collect();
        sell(&mut game, &mut table, &numbers);

        let bonus = game.pool.bonus_amount;
        let settlement = verify(&mut game, &table, 200);

        assert_eq!(game.pool.bonus_amount, bonus);
        assert_eq!(game.pool.owner_fee_amount, 0);
        assert_eq!(game.pool.develop_fee_amount, 0);
        assert_eq!(game.pool.verify_fee_amount, 0);
        assert_eq!(settlement.fees.owner, 11 * 50_000);
        assert_eq!(settlement.refund, 0);
        assert_eq!(game.status, GameStatus::Verified);
        assert_eq!(game.tier_ticket_counts, vec![1, 1, 1, 8]);
    }

    #[test]
    fn claims_drain_exactly_the_bonus() {
        let mut game = game();
        let mut table = empty_table();
        let numbers = [500, 505, 490, 10, 20, 30, 40];
        sell(&mut game, &mut table, &numbers);
        verify(&mut game, &table, 500);

        let tier_count = game.tier_count();
        let mut paid = 0u64;
        let mut withheld = 0u64;
        for (index, number) in numbers.iter().enumerate() {
            let tier = table.order_of(game.winning_number, *number, tier_count);
            let quote = game
                .quote_reward(index as u64 + 1, tier, table.occurrences(*number))
                .unwrap();
            game.pool.withdraw_bonus(quote.base).unwrap();
            paid += quote.payout;
            withheld += quote.withheld();
        }

        // Rest tier splits 10% across four tickets; the last one is cut to 80%.
        let rest_base = game.pool.tier_share(10).unwrap() / 4;
        assert_eq!(withheld, rest_base - rest_base * 80 / 100);
        assert!(game.pool.bonus_amount_withdrawn <= game.pool.bonus_amount);
        assert!(game.pool.bonus_amount - game.pool.bonus_amount_withdrawn < 4);
        assert_eq!(paid + withheld, game.pool.bonus_amount_withdrawn);
    }

    #[test]
    fn shared_number_splits_tier() {
        let mut game = game();
        let mut table = empty_table();
        sell(&mut game, &mut table, &[300, 300, 900]);
        verify(&mut game, &table, 301);

        let share = game.pool.tier_share(70).unwrap();
        let quote = game.quote_reward(1, 0, table.occurrences(300)).unwrap();
        assert_eq!(quote.base, share / 2);
        assert_eq!(quote.payout, share / 2);
    }

    #[test]
    fn zero_rest_share_pays_nothing() {
        let mut game = game();
        game.prize_tiers = vec![100, 0];
        let mut table = empty_table();
        sell(&mut game, &mut table, &[1, 2]);
        verify(&mut game, &table, 1);

        let quote = game.quote_reward(2, 1, 1).unwrap();
        assert_eq!(quote, RewardQuote { tier: 1, base: 0, payout: 0 });
    }
}
