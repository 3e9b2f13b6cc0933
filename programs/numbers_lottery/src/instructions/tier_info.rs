use anchor_lang::prelude::*;

use crate::errors::LotteryError;
use crate::instructions::lucky_numbers::{page, ReadNumbers};
use crate::state::{Game, GameStatus, NumberTable};

/// Numbers and ticket count of one tier of a verified game. Individual
/// tickets are found by matching `Ticket` accounts on these numbers.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct TierView {
    pub game_id: u64,
    pub tier: u8,
    pub winning_number: u32,
    /// Tickets placed in the tier.
    pub ticket_count: u32,
    /// Distinct numbers in the tier, not just this page.
    pub number_count: u32,
    pub numbers: Vec<u32>,
}

pub fn handler(ctx: Context<ReadNumbers>, tier: u8, offset: u32) -> Result<TierView> {
    view_tier(&ctx.accounts.game, &ctx.accounts.number_table, tier, offset)
}

pub(crate) fn view_tier(
    game: &Game,
    number_table: &NumberTable,
    tier: u8,
    offset: u32,
) -> Result<TierView> {
    require!(game.status == GameStatus::Verified, LotteryError::GameNotVerified);
    let tier_count = game.tier_count();
    require!((tier as usize) <= tier_count, LotteryError::InvalidTier);

    let numbers = number_table.numbers_at_order(game.winning_number, tier as usize, tier_count);
    Ok(TierView {
        game_id: game.game_id,
        tier,
        winning_number: game.winning_number,
        ticket_count: number_table.tickets_at_order(game.winning_number, tier as usize, tier_count),
        number_count: numbers.len() as u32,
        numbers: page(&numbers, offset),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::game::tests::{empty_table, game, sell};

    #[test]
    fn tiers_of_a_verified_game() {
        let mut game = game();
        let mut table = empty_table();
        sell(&mut game, &mut table, &[500, 520, 520, 900, 10, 40]);
        assert_eq!(
            view_tier(&game, &table, 0, 0).unwrap_err(),
            LotteryError::GameNotVerified.into()
        );

        let ranking = table.rank(500, game.tier_count());
        game.settle(500, &ranking, Pubkey::new_unique(), 1_600).unwrap();

        let first = view_tier(&game, &table, 0, 0).unwrap();
        assert_eq!((first.numbers, first.ticket_count), (vec![500], 1));

        let second = view_tier(&game, &table, 1, 0).unwrap();
        assert_eq!((second.numbers, second.ticket_count), (vec![520], 2));

        let rest = view_tier(&game, &table, 3, 0).unwrap();
        assert_eq!(rest.numbers, vec![10, 40]);
        assert_eq!(rest.ticket_count, 2);
        assert_eq!(rest.ticket_count, game.tier_ticket_counts[3]);

        let paged = view_tier(&game, &table, 3, 1).unwrap();
        assert_eq!((paged.numbers, paged.number_count), (vec![40], 2));

        assert_eq!(
            view_tier(&game, &table, 4, 0).unwrap_err(),
            LotteryError::InvalidTier.into()
        );
    }
}
