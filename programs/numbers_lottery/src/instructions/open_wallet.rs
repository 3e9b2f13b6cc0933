use anchor_lang::prelude::*;

use crate::errors::LotteryError;
use crate::state::{Currency, WalletBalance};

#[derive(Accounts)]
#[instruction(holder: Pubkey, currency: Currency)]
pub struct OpenWallet<'info> {
    #[account(
        init,
        payer = payer,
        space = 8 + WalletBalance::INIT_SPACE,
        seeds = [
            WalletBalance::SEED,
            holder.as_ref(),
            currency.kind.seed(),
            currency.mint.as_ref(),
        ],
        bump,
    )]
    pub wallet: Account<'info, WalletBalance>,

    /// Anyone may fund the rent of someone else's wallet.
    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<OpenWallet>, holder: Pubkey, currency: Currency) -> Result<()> {
    require!(holder != Pubkey::default(), LotteryError::InvalidTarget);
    currency.validate()?;

    ctx.accounts
        .wallet
        .open(holder, currency, ctx.bumps.wallet)
}
