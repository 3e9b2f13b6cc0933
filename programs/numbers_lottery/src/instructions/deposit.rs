use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::custody::{self, TokenLeg};
use crate::errors::LotteryError;
use crate::events::Deposited;
use crate::state::{Currency, Vault, WalletBalance};

#[derive(Accounts)]
#[instruction(holder: Pubkey, currency: Currency)]
pub struct Deposit<'info> {
    #[account(
        init_if_needed,
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

    #[account(
        mut,
        seeds = [Vault::SEED],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        mut,
        constraint = payer_token_account.owner == payer.key() @ LotteryError::Unauthorized,
    )]
    pub payer_token_account: Option<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = vault_token_account.owner == vault.key() @ LotteryError::Unauthorized,
    )]
    pub vault_token_account: Option<Account<'info, TokenAccount>>,

    /// Funds the deposit; may credit any holder.
    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Option<Program<'info, Token>>,
}

pub fn handler(
    ctx: Context<Deposit>,
    holder: Pubkey,
    currency: Currency,
    amount: u64,
) -> Result<()> {
    require!(amount > 0, LotteryError::ZeroAmount);
    require!(holder != Pubkey::default(), LotteryError::InvalidTarget);
    currency.validate()?;

    let wallet = &mut ctx.accounts.wallet;
    wallet.open(holder, currency, ctx.bumps.wallet)?;
    wallet.credit(amount)?;

    let token = TokenLeg::resolve(
        &currency,
        &ctx.accounts.payer_token_account,
        &ctx.accounts.vault_token_account,
        &ctx.accounts.token_program,
    )?;
    custody::collect(
        amount,
        &ctx.accounts.payer,
        &ctx.accounts.vault,
        &ctx.accounts.system_program,
        token,
    )?;

    emit!(Deposited {
        holder,
        currency,
        amount,
    });

    Ok(())
}
