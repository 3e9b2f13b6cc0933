use anchor_lang::prelude::*;

use crate::errors::LotteryError;
use crate::state::Config;

#[derive(Accounts)]
pub struct SetRoles<'info> {
    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ LotteryError::Unauthorized,
    )]
    pub config: Account<'info, Config>,

    pub authority: Signer<'info>,
}

pub fn handler(ctx: Context<SetRoles>, operator: Pubkey, developer: Pubkey) -> Result<()> {
    require!(operator != Pubkey::default(), LotteryError::InvalidTarget);
    require!(developer != Pubkey::default(), LotteryError::InvalidTarget);

    let config = &mut ctx.accounts.config;
    config.operator = operator;
    config.developer = developer;

    msg!("Roles updated: operator {} developer {}", operator, developer);

    Ok(())
}
