use anchor_lang::prelude::*;

/// Program custody. Holds native lamports directly and is the authority of
/// the associated token account of every supported mint.
#[account]
#[derive(InitSpace)]
pub struct Vault {
    /// PDA bump seed.
    pub bump: u8,
}

impl Vault {
    pub const SEED: &'static [u8] = b"vault";
}
