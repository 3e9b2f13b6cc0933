use anchor_lang::prelude::*;

use crate::errors::LotteryError;
use crate::state::RewardQuote;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct TicketReward {
    pub claimed: bool,
    /// Tier the ticket placed in; the rest tier index for non-winners.
    pub level: u8,
    /// Amount credited to the claimant.
    pub amount: u64,
    /// Unix timestamp of the claim (0 if unclaimed).
    pub claim_time: i64,
}

#[account]
#[derive(InitSpace)]
pub struct Ticket {
    /// Global sequential identifier, starting at 1.
    pub ticket_id: u64,
    pub game_id: u64,
    /// Current holder; changes on transfer.
    pub owner: Pubkey,
    /// Original purchaser; never changes.
    pub buyer: Pubkey,
    pub number: u32,
    pub buy_time: i64,
    pub reward: TicketReward,
    /// PDA bump seed.
    pub bump: u8,
}

impl Ticket {
    pub const SEED: &'static [u8] = b"ticket";

    pub fn mark_claimed(&mut self, quote: &RewardQuote, now: i64) -> Result<()> {
        require!(!self.reward.claimed, LotteryError::AlreadyClaimed);
        self.reward = TicketReward {
            claimed: true,
            level: quote.tier,
            amount: quote.payout,
            claim_time: now,
        };
        Ok(())
    }

    /// Moves the ticket to `new_owner` and returns the previous owner.
    pub fn transfer_to(&mut self, new_owner: Pubkey) -> Result<Pubkey> {
        require!(new_owner != Pubkey::default(), LotteryError::InvalidTarget);
        Ok(std::mem::replace(&mut self.owner, new_owner))
    }
}

/// Marks that `buyer` already holds a ticket in `game_id`.
#[account]
#[derive(InitSpace)]
pub struct BuyerEntry {
    pub game_id: u64,
    pub buyer: Pubkey,
    /// Zero until the purchase completes.
    pub ticket_id: u64,
    /// PDA bump seed.
    pub bump: u8,
}

impl BuyerEntry {
    pub const SEED: &'static [u8] = b"entry";
}
