use anchor_lang::prelude::*;

use crate::errors::LotteryError;
use crate::state::{Game, GameStatus, NumberTable, Ticket};

/// Ticket joined with its game, returned to clients through return data.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct TicketView {
    pub game_id: u64,
    pub game_status: GameStatus,
    pub game_start_time: i64,
    pub game_duration: i64,
    pub ticket_id: u64,
    pub number: u32,
    pub owner: Pubkey,
    pub buyer: Pubkey,
    pub buy_time: i64,
    pub bonus_percent: u8,
    pub claimed: bool,
    /// Claimed tier, or the pending tier of a verified game.
    pub reward_level: u8,
    /// Claimed amount, or the pending payout of a verified game.
    pub reward_amount: u64,
    pub reward_time: i64,
}

#[derive(Accounts)]
pub struct ReadTicket<'info> {
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

    #[account(
        seeds = [Ticket::SEED, ticket.ticket_id.to_le_bytes().as_ref()],
        bump = ticket.bump,
        constraint = ticket.game_id == game.game_id @ LotteryError::TicketNotFound,
    )]
    pub ticket: Account<'info, Ticket>,
}

pub fn handler(ctx: Context<ReadTicket>) -> Result<TicketView> {
    let now = Clock::get()?.unix_timestamp;
    view_ticket(&ctx.accounts.game, &ctx.accounts.number_table, &ctx.accounts.ticket, now)
}

pub(crate) fn view_ticket(
    game: &Game,
    number_table: &NumberTable,
    ticket: &Ticket,
    now: i64,
) -> Result<TicketView> {
    let game_status = game.status_at(now)?;

    let (reward_level, reward_amount) = if ticket.reward.claimed {
        (ticket.reward.level, ticket.reward.amount)
    } else if game_status == GameStatus::Verified {
        let tier = number_table.order_of(game.winning_number, ticket.number, game.tier_count());
        let quote = game.quote_reward(
            ticket.ticket_id,
            tier,
            number_table.occurrences(ticket.number),
        )?;
        (quote.tier, quote.payout)
    } else {
        (0, 0)
    };

    Ok(TicketView {
        game_id: game.game_id,
        game_status,
        game_start_time: game.start_time,
        game_duration: game.duration,
        ticket_id: ticket.ticket_id,
        number: ticket.number,
        owner: ticket.owner,
        buyer: ticket.buyer,
        buy_time: ticket.buy_time,
        bonus_percent: game.bonus_percent(ticket.ticket_id),
        claimed: ticket.reward.claimed,
        reward_level,
        reward_amount,
        reward_time: ticket.reward.claim_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::game::tests::{empty_table, game, sell};
    use crate::state::{RewardQuote, TicketReward};

    fn ticket(ticket_id: u64, number: u32) -> Ticket {
        let owner = Pubkey::new_unique();
        Ticket {
            ticket_id,
            game_id: 1,
            owner,
            buyer: owner,
            number,
            buy_time: 1_100,
            reward: TicketReward::default(),
            bump: 255,
        }
    }

    #[test]
    fn shows_pending_reward_after_verification() {
        let mut game = game();
        let mut table = empty_table();
        sell(&mut game, &mut table, &[400, 800]);

        let before = view_ticket(&game, &table, &ticket(2, 800), 1_200).unwrap();
        assert_eq!(before.game_status, GameStatus::Active);
        assert_eq!(before.bonus_percent, 80);
        assert_eq!((before.reward_level, before.reward_amount), (0, 0));

        let ranking = table.rank(401, game.tier_count());
        game.settle(401, &ranking, Pubkey::new_unique(), 1_600).unwrap();

        let info = view_ticket(&game, &table, &ticket(1, 400), 1_700).unwrap();
        assert_eq!(info.game_status, GameStatus::Verified);
        assert_eq!(info.reward_level, 0);
        assert_eq!(info.reward_amount, game.pool.tier_share(70).unwrap());
        assert!(!info.claimed);

        let info = view_ticket(&game, &table, &ticket(2, 800), 1_700).unwrap();
        assert_eq!(info.reward_level, 1);
        assert_eq!(info.reward_amount, game.pool.tier_share(15).unwrap() * 80 / 100);
    }

    #[test]
    fn claimed_ticket_reports_recorded_reward() {
        let mut game = game();
        let mut table = empty_table();
        sell(&mut game, &mut table, &[400]);
        let ranking = table.rank(1, game.tier_count());
        game.settle(1, &ranking, Pubkey::new_unique(), 1_600).unwrap();

        let mut claimed = ticket(1, 400);
        let quote = RewardQuote { tier: 0, base: 10, payout: 8 };
        claimed.mark_claimed(&quote, 1_650).unwrap();

        let info = view_ticket(&game, &table, &claimed, 1_700).unwrap();
        assert!(info.claimed);
        assert_eq!((info.reward_level, info.reward_amount, info.reward_time), (0, 8, 1_650));
    }
}
