use anchor_lang::prelude::*;

use crate::constants::MAX_VIEW_NUMBERS;
use crate::state::{Game, NumberTable};

/// One page of a game's distinct numbers, ascending.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct NumbersPage {
    pub game_id: u64,
    /// Distinct numbers in the whole list, not just this page.
    pub total: u32,
    pub numbers: Vec<u32>,
}

#[derive(Accounts)]
pub struct ReadNumbers<'info> {
    #[account(
        seeds = [Game::SEED, game.game_id.to_le_bytes().as_ref()],
        bump = game.bump,
    )]
    pub game: Box<Account<'info, Game>>,

    #[account(
        seeds = [NumberTable::SEED, game.game_id.to_le_bytes().as_ref()],
        bump = number_table.bump,
    )]
    pub number_table: Account<'info, NumberTable>,
}

pub fn handler(ctx: Context<ReadNumbers>, offset: u32) -> Result<NumbersPage> {
    let numbers = ctx.accounts.number_table.sorted_numbers();
    Ok(NumbersPage {
        game_id: ctx.accounts.game.game_id,
        total: numbers.len() as u32,
        numbers: page(&numbers, offset),
    })
}

/// Up to `MAX_VIEW_NUMBERS` values starting at `offset`.
pub(crate) fn page(numbers: &[u32], offset: u32) -> Vec<u32> {
    numbers
        .iter()
        .skip(offset as usize)
        .take(MAX_VIEW_NUMBERS)
        .copied()
        .collect()
}
