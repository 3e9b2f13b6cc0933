use anchor_lang::prelude::*;

use crate::state::Currency;

#[event]
pub struct ConfigUpdated {
    pub authority: Pubkey,
    pub ticket_price: u64,
    pub initial_pool_amount: u64,
    pub ticket_max_count: u32,
}

#[event]
pub struct GameCreated {
    pub game_id: u64,
    pub owner: Pubkey,
    pub start_time: i64,
    pub end_time: i64,
}

#[event]
pub struct TicketPurchased {
    pub game_id: u64,
    pub buyer: Pubkey,
    pub ticket_id: u64,
    pub number: u32,
}

#[event]
pub struct TicketTransferred {
    pub ticket_id: u64,
    pub from: Pubkey,
    pub to: Pubkey,
}

#[event]
pub struct GameVerified {
    pub game_id: u64,
    pub winning_number: u32,
    pub verifier: Pubkey,
}

#[event]
pub struct RewardClaimed {
    pub ticket_id: u64,
    pub game_id: u64,
    /// Signer of the claim: the ticket owner, or the operator redirecting it.
    pub claimant: Pubkey,
    /// Holder whose wallet received the payout.
    pub recipient: Pubkey,
    pub tier: u8,
    pub amount: u64,
}

#[event]
pub struct Deposited {
    pub holder: Pubkey,
    pub currency: Currency,
    pub amount: u64,
}

#[event]
pub struct Withdrawn {
    pub holder: Pubkey,
    pub currency: Currency,
    pub amount: u64,
}
