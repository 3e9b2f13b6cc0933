use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::custody::{self, TokenLeg};
use crate::errors::LotteryError;
use crate::events::Withdrawn;
use crate::state::{Config, Vault, WalletBalance};

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [
            WalletBalance::SEED,
            wallet.holder.as_ref(),
            wallet.currency.kind.seed(),
            wallet.currency.mint.as_ref(),
        ],
        bump = wallet.bump,
    )]
    pub wallet: Account<'info, WalletBalance>,

    /// CHECK: Receives the funds; pinned to the wallet's holder.
    #[account(
        mut,
        address = wallet.holder @ LotteryError::InvalidTarget,
    )]
    pub holder: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [Vault::SEED],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        mut,
        constraint = holder_token_account.owner == wallet.holder @ LotteryError::InvalidTarget,
    )]
    pub holder_token_account: Option<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = vault_token_account.owner == vault.key() @ LotteryError::Unauthorized,
    )]
    pub vault_token_account: Option<Account<'info, TokenAccount>>,

    /// The holder, or the operator forcing a withdrawal on the holder's behalf.
    #[account(
        constraint = authority.key() == wallet.holder
            || config.is_operator(&authority.key()) @ LotteryError::Unauthorized,
    )]
    pub authority: Signer<'info>,

    pub token_program: Option<Program<'info, Token>>,
}

/// Withdraws `amount`, or the whole balance when `None`, to the holder.
pub fn handler(ctx: Context<Withdraw>, amount: Option<u64>) -> Result<()> {
    let wallet = &mut ctx.accounts.wallet;
    let amount = amount.unwrap_or(wallet.amount);
    require!(amount > 0, LotteryError::ZeroAmount);
    wallet.debit(amount)?;

    let token = TokenLeg::resolve(
        &wallet.currency,
        &ctx.accounts.holder_token_account,
        &ctx.accounts.vault_token_account,
        &ctx.accounts.token_program,
    )?;
    custody::release(
        amount,
        &ctx.accounts.vault,
        &ctx.accounts.holder.to_account_info(),
        token,
    )?;

    emit!(Withdrawn {
        holder: wallet.holder,
        currency: wallet.currency,
        amount,
    });

    Ok(())
}
