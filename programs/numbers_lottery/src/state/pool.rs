use anchor_lang::prelude::*;

use crate::constants::{BPS_DENOMINATOR, PERCENT_DENOMINATOR};
use crate::errors::LotteryError;

/// Fee rates of a game in basis points, snapshotted from config at creation.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct FeeRates {
    pub owner_fee_bps: u16,
    pub develop_fee_bps: u16,
    pub verify_fee_bps: u16,
}

/// Fees paid out when a game is verified.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeeRelease {
    pub owner: u64,
    pub develop: u64,
    pub verify: u64,
}

/// Money held by a single game.
///
/// Before verification `total_amount` always equals the bonus plus the three
/// fee buckets. Verification zeroes the fee buckets; claims and refunds then
/// draw from `bonus_amount` through `bonus_amount_withdrawn`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct BonusPool {
    /// Stake plus every ticket payment.
    pub total_amount: u64,
    /// Prize money shared by the tiers.
    pub bonus_amount: u64,
    pub owner_fee_amount: u64,
    pub develop_fee_amount: u64,
    pub verify_fee_amount: u64,
    /// Bonus already paid out or refunded. Never exceeds `bonus_amount`.
    pub bonus_amount_withdrawn: u64,
    /// Multiplier penalties returned to the game owner.
    pub withheld_amount: u64,
}

fn bps_of(amount: u64, bps: u16) -> Result<u64> {
    let share = (amount as u128)
        .checked_mul(bps as u128)
        .ok_or(LotteryError::MathOverflow)?
        / BPS_DENOMINATOR as u128;
    u64::try_from(share).map_err(|_| LotteryError::MathOverflow.into())
}

impl BonusPool {
    /// Credits the creator's initial stake straight into the bonus.
    pub fn seed(&mut self, stake: u64) -> Result<()> {
        self.total_amount = self
            .total_amount
            .checked_add(stake)
            .ok_or(LotteryError::MathOverflow)?;
        self.bonus_amount = self
            .bonus_amount
            .checked_add(stake)
            .ok_or(LotteryError::MathOverflow)?;
        Ok(())
    }

    /// Splits a ticket payment into the fee buckets; the bonus takes the rest.
    pub fn credit_sale(&mut self, payment: u64, rates: FeeRates) -> Result<()> {
        let owner_fee = bps_of(payment, rates.owner_fee_bps)?;
        let develop_fee = bps_of(payment, rates.develop_fee_bps)?;
        let verify_fee = bps_of(payment, rates.verify_fee_bps)?;
        let bonus = payment
            .checked_sub(owner_fee)
            .and_then(|rest| rest.checked_sub(develop_fee))
            .and_then(|rest| rest.checked_sub(verify_fee))
            .ok_or(LotteryError::MathOverflow)?;

        self.owner_fee_amount = self
            .owner_fee_amount
            .checked_add(owner_fee)
            .ok_or(LotteryError::MathOverflow)?;
        self.develop_fee_amount = self
            .develop_fee_amount
            .checked_add(develop_fee)
            .ok_or(LotteryError::MathOverflow)?;
        self.verify_fee_amount = self
            .verify_fee_amount
            .checked_add(verify_fee)
            .ok_or(LotteryError::MathOverflow)?;
        self.bonus_amount = self
            .bonus_amount
            .checked_add(bonus)
            .ok_or(LotteryError::MathOverflow)?;
        self.total_amount = self
            .total_amount
            .checked_add(payment)
            .ok_or(LotteryError::MathOverflow)?;
        Ok(())
    }

    pub fn is_balanced(&self) -> bool {
        let parts = self.bonus_amount as u128
            + self.owner_fee_amount as u128
            + self.develop_fee_amount as u128
            + self.verify_fee_amount as u128;
        parts == self.total_amount as u128
    }

    /// Zeroes the fee buckets and returns what they held.
    pub fn release_fees(&mut self) -> FeeRelease {
        let release = FeeRelease {
            owner: self.owner_fee_amount,
            develop: self.develop_fee_amount,
            verify: self.verify_fee_amount,
        };
        self.owner_fee_amount = 0;
        self.develop_fee_amount = 0;
        self.verify_fee_amount = 0;
        release
    }

    pub fn remaining_bonus(&self) -> u64 {
        self.bonus_amount.saturating_sub(self.bonus_amount_withdrawn)
    }

    pub fn withdraw_bonus(&mut self, amount: u64) -> Result<()> {
        let withdrawn = self
            .bonus_amount_withdrawn
            .checked_add(amount)
            .ok_or(LotteryError::MathOverflow)?;
        require!(withdrawn <= self.bonus_amount, LotteryError::InsufficientPool);
        self.bonus_amount_withdrawn = withdrawn;
        Ok(())
    }

    pub fn withhold(&mut self, amount: u64) -> Result<()> {
        self.withheld_amount = self
            .withheld_amount
            .checked_add(amount)
            .ok_or(LotteryError::MathOverflow)?;
        Ok(())
    }

    /// Portion of the bonus owed to a tier paying `percent`.
    pub fn tier_share(&self, percent: u8) -> Result<u64> {
        let share = (self.bonus_amount as u128)
            .checked_mul(percent as u128)
            .ok_or(LotteryError::MathOverflow)?
            / PERCENT_DENOMINATOR as u128;
        u64::try_from(share).map_err(|_| LotteryError::MathOverflow.into())
    }
}
