use anchor_lang::prelude::*;

use crate::errors::LotteryError;
use crate::instructions::claim_reward::{claim_event, pay_reward};
use crate::state::{Config, Game, GameStatus, NumberTable, Ticket, WalletBalance};

#[derive(Accounts)]
#[instruction(target: Pubkey)]
pub struct ClaimRewardTo<'info> {
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
        constraint = config.is_operator(&operator.key()) @ LotteryError::Unauthorized,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [Game::SEED, game.game_id.to_le_bytes().as_ref()],
        bump = game.bump,
        constraint = game.status == GameStatus::Verified @ LotteryError::GameNotVerified,
    )]
    pub game: Box<Account<'info, Game>>,

    #[account(
        seeds = [NumberTable::SEED, game.game_id.to_le_bytes().as_ref()],
        bump = number_table.bump,
    )]
    pub number_table: Account<'info, NumberTable>,

    #[account(
        mut,
        seeds = [Ticket::SEED, ticket.ticket_id.to_le_bytes().as_ref()],
        bump = ticket.bump,
        constraint = ticket.game_id == game.game_id @ LotteryError::TicketNotFound,
    )]
    pub ticket: Account<'info, Ticket>,

    #[account(
        init_if_needed,
        payer = operator,
        space = 8 + WalletBalance::INIT_SPACE,
        seeds = [
            WalletBalance::SEED,
            target.as_ref(),
            game.currency.kind.seed(),
            game.currency.mint.as_ref(),
        ],
        bump,
    )]
    pub target_wallet: Account<'info, WalletBalance>,

    #[account(
        mut,
        seeds = [
            WalletBalance::SEED,
            game.owner.as_ref(),
            game.currency.kind.seed(),
            game.currency.mint.as_ref(),
        ],
        bump = owner_wallet.bump,
    )]
    pub owner_wallet: Account<'info, WalletBalance>,

    #[account(mut)]
    pub operator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Operator-only claim paying a chosen target instead of the ticket owner.
pub fn handler(ctx: Context<ClaimRewardTo>, target: Pubkey) -> Result<()> {
    require!(target != Pubkey::default(), LotteryError::InvalidTarget);

    let now = Clock::get()?.unix_timestamp;
    let operator = ctx.accounts.operator.key();
    let accounts = ctx.accounts;
    accounts
        .target_wallet
        .open(target, accounts.game.currency, ctx.bumps.target_wallet)?;

    let quote = pay_reward(
        &mut accounts.game,
        &accounts.number_table,
        &mut accounts.ticket,
        &mut accounts.target_wallet,
        &mut accounts.owner_wallet,
        now,
    )?;

    emit!(claim_event(
        &accounts.game,
        &accounts.ticket,
        operator,
        &accounts.target_wallet,
        &quote,
    ));

    Ok(())
}
