use anchor_lang::prelude::*;

use crate::errors::LotteryError;
use crate::events::ConfigUpdated;
use crate::state::{Config, ConfigParams};

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.bump,
        has_one = authority @ LotteryError::Unauthorized,
    )]
    pub config: Account<'info, Config>,

    pub authority: Signer<'info>,
}

/// Running games keep the values snapshotted at their creation. `expected`
/// must equal the stored values.
pub fn handler(
    ctx: Context<UpdateConfig>,
    expected: ConfigParams,
    params: ConfigParams,
) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.update(&expected, params)?;

    emit!(ConfigUpdated {
        authority: config.authority,
        ticket_price: config.ticket_price,
        initial_pool_amount: config.initial_pool_amount,
        ticket_max_count: config.ticket_max_count,
    });

    Ok(())
}
