use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{MAX_NUMBER, MIN_NUMBER};
use crate::custody::{self, TokenLeg};
use crate::draw;
use crate::errors::LotteryError;
use crate::events::TicketPurchased;
use crate::state::{BuyerEntry, Config, Game, NumberTable, Ticket, TicketReward, Vault};

#[derive(Accounts)]
pub struct BuyTicket<'info> {
    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [Game::SEED, game.game_id.to_le_bytes().as_ref()],
        bump = game.bump,
    )]
    pub game: Box<Account<'info, Game>>,

    #[account(
        mut,
        seeds = [NumberTable::SEED, game.game_id.to_le_bytes().as_ref()],
        bump = number_table.bump,
    )]
    pub number_table: Account<'info, NumberTable>,

    #[account(
        init,
        payer = buyer,
        space = 8 + Ticket::INIT_SPACE,
        seeds = [Ticket::SEED, (config.total_tickets + 1).to_le_bytes().as_ref()],
        bump,
    )]
    pub ticket: Account<'info, Ticket>,

    /// One per buyer per game; a non-zero ticket id means already bought.
    #[account(
        init_if_needed,
        payer = buyer,
        space = 8 + BuyerEntry::INIT_SPACE,
        seeds = [
            BuyerEntry::SEED,
            game.game_id.to_le_bytes().as_ref(),
            buyer.key().as_ref(),
        ],
        bump,
    )]
    pub buyer_entry: Account<'info, BuyerEntry>,

    #[account(
        mut,
        seeds = [Vault::SEED],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        mut,
        constraint = buyer_token_account.owner == buyer.key() @ LotteryError::Unauthorized,
    )]
    pub buyer_token_account: Option<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = vault_token_account.owner == vault.key() @ LotteryError::Unauthorized,
    )]
    pub vault_token_account: Option<Account<'info, TokenAccount>>,

    #[account(mut)]
    pub buyer: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Option<Program<'info, Token>>,
}

pub fn handler(ctx: Context<BuyTicket>, number: u32, payment: u64) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let buyer = ctx.accounts.buyer.key();

    let game = &mut ctx.accounts.game;
    game.check_on_sale(now)?;
    require!(
        (MIN_NUMBER..=MAX_NUMBER).contains(&number),
        LotteryError::InvalidNumber
    );
    require!(payment == game.ticket_price, LotteryError::InvalidPrice);

    let entry = &mut ctx.accounts.buyer_entry;
    require!(entry.ticket_id == 0, LotteryError::DuplicatePurchase);

    let ticket_id = ctx.accounts.config.next_ticket_id()?;
    ctx.accounts.number_table.insert(number)?;

    let sold_count = game
        .ticket_sold_count
        .checked_add(1)
        .ok_or(LotteryError::MathOverflow)?;
    let draw_seed = draw::sale_seed(
        game.game_id,
        game.draw_seed,
        now,
        clock.slot,
        &buyer,
        sold_count,
    );
    game.record_sale(ticket_id, number, draw_seed)?;

    entry.game_id = game.game_id;
    entry.buyer = buyer;
    entry.ticket_id = ticket_id;
    entry.bump = ctx.bumps.buyer_entry;

    let ticket = &mut ctx.accounts.ticket;
    ticket.ticket_id = ticket_id;
    ticket.game_id = game.game_id;
    ticket.owner = buyer;
    ticket.buyer = buyer;
    ticket.number = number;
    ticket.buy_time = now;
    ticket.reward = TicketReward::default();
    ticket.bump = ctx.bumps.ticket;

    let token = TokenLeg::resolve(
        &game.currency,
        &ctx.accounts.buyer_token_account,
        &ctx.accounts.vault_token_account,
        &ctx.accounts.token_program,
    )?;
    custody::collect(
        payment,
        &ctx.accounts.buyer,
        &ctx.accounts.vault,
        &ctx.accounts.system_program,
        token,
    )?;

    emit!(TicketPurchased {
        game_id: game.game_id,
        buyer,
        ticket_id,
        number,
    });

    Ok(())
}
