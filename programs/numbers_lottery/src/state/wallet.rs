use anchor_lang::prelude::*;

use crate::errors::LotteryError;
use crate::state::Currency;

/// Balance a holder can withdraw in one currency.
#[account]
#[derive(InitSpace)]
pub struct WalletBalance {
    pub holder: Pubkey,
    pub currency: Currency,
    pub amount: u64,
    /// PDA bump seed.
    pub bump: u8,
}

impl WalletBalance {
    pub const SEED: &'static [u8] = b"wallet";

    /// Fills in a wallet created with `init_if_needed`; a no-op once set up.
    pub fn open(&mut self, holder: Pubkey, currency: Currency, bump: u8) -> Result<()> {
        if self.holder == Pubkey::default() {
            self.holder = holder;
            self.currency = currency;
            self.amount = 0;
            self.bump = bump;
        }
        require!(self.currency == currency, LotteryError::CurrencyMismatch);
        Ok(())
    }

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(LotteryError::MathOverflow)?;
        Ok(())
    }

    pub fn debit(&mut self, amount: u64) -> Result<()> {
        self.amount = self
            .amount
            .checked_sub(amount)
            .ok_or(LotteryError::InsufficientBalance)?;
        Ok(())
    }
}
