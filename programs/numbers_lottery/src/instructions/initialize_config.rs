use anchor_lang::prelude::*;

use crate::events::ConfigUpdated;
use crate::state::{Config, ConfigParams, GameRegistry, Vault};

#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + Config::INIT_SPACE,
        seeds = [Config::SEED],
        bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = authority,
        space = GameRegistry::space(0, 0),
        seeds = [GameRegistry::SEED],
        bump,
    )]
    pub registry: Account<'info, GameRegistry>,

    #[account(
        init,
        payer = authority,
        space = 8 + Vault::INIT_SPACE,
        seeds = [Vault::SEED],
        bump,
    )]
    pub vault: Account<'info, Vault>,

    /// Becomes admin, operator and developer until roles are reassigned.
    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeConfig>, params: ConfigParams) -> Result<()> {
    let authority = ctx.accounts.authority.key();

    let config = &mut ctx.accounts.config;
    config.authority = authority;
    config.operator = authority;
    config.developer = authority;
    config.total_games = 0;
    config.total_tickets = 0;
    config.bump = ctx.bumps.config;
    config.apply(params)?;

    let registry = &mut ctx.accounts.registry;
    registry.active_games = Vec::new();
    registry.history_games = Vec::new();
    registry.bump = ctx.bumps.registry;

    ctx.accounts.vault.bump = ctx.bumps.vault;

    emit!(ConfigUpdated {
        authority,
        ticket_price: config.ticket_price,
        initial_pool_amount: config.initial_pool_amount,
        ticket_max_count: config.ticket_max_count,
    });

    Ok(())
}
