use anchor_lang::prelude::*;

use crate::errors::LotteryError;
use crate::events::RewardClaimed;
use crate::state::{Game, GameStatus, NumberTable, RewardQuote, Ticket, WalletBalance};

#[derive(Accounts)]
pub struct ClaimReward<'info> {
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
        constraint = ticket.owner == claimant.key() @ LotteryError::NotTicketOwner,
    )]
    pub ticket: Account<'info, Ticket>,

    #[account(
        init_if_needed,
        payer = claimant,
        space = 8 + WalletBalance::INIT_SPACE,
        seeds = [
            WalletBalance::SEED,
            claimant.key().as_ref(),
            game.currency.kind.seed(),
            game.currency.mint.as_ref(),
        ],
        bump,
    )]
    pub target_wallet: Account<'info, WalletBalance>,

    /// Game owner's wallet, credited with the multiplier penalty.
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
    pub claimant: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<ClaimReward>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let claimant = ctx.accounts.claimant.key();
    let accounts = ctx.accounts;
    accounts
        .target_wallet
        .open(claimant, accounts.game.currency, ctx.bumps.target_wallet)?;

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
        claimant,
        &accounts.target_wallet,
        &quote,
    ));

    Ok(())
}

/// Credits a ticket's reward to `target_wallet` and its multiplier penalty to
/// the game owner, then marks the ticket claimed.
pub(crate) fn pay_reward(
    game: &mut Game,
    number_table: &NumberTable,
    ticket: &mut Ticket,
    target_wallet: &mut WalletBalance,
    owner_wallet: &mut WalletBalance,
    now: i64,
) -> Result<RewardQuote> {
    require!(!ticket.reward.claimed, LotteryError::AlreadyClaimed);

    let tier = number_table.order_of(game.winning_number, ticket.number, game.tier_count());
    let quote = game.quote_reward(
        ticket.ticket_id,
        tier,
        number_table.occurrences(ticket.number),
    )?;

    game.pool.withdraw_bonus(quote.base)?;
    game.pool.withhold(quote.withheld())?;
    ticket.mark_claimed(&quote, now)?;

    // Target and owner may be the same wallet account; keep both copies equal.
    if target_wallet.holder == owner_wallet.holder {
        let total = quote
            .payout
            .checked_add(quote.withheld())
            .ok_or(LotteryError::MathOverflow)?;
        target_wallet.credit(total)?;
        owner_wallet.credit(total)?;
    } else {
        target_wallet.credit(quote.payout)?;
        owner_wallet.credit(quote.withheld())?;
    }

    Ok(quote)
}

/// `claimant` signed the claim; the recipient is the holder of the credited wallet.
pub(crate) fn claim_event(
    game: &Game,
    ticket: &Ticket,
    claimant: Pubkey,
    target_wallet: &WalletBalance,
    quote: &RewardQuote,
) -> RewardClaimed {
    RewardClaimed {
        ticket_id: ticket.ticket_id,
        game_id: game.game_id,
        claimant,
        recipient: target_wallet.holder,
        tier: quote.tier,
        amount: quote.payout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::game::tests::{empty_table, game, sell};
    use crate::state::{Currency, TicketReward};

    fn wallet(holder: Pubkey) -> WalletBalance {
        WalletBalance {
            holder,
            currency: Currency::native(),
            amount: 0,
            bump: 255,
        }
    }

    fn ticket(ticket_id: u64, number: u32, owner: Pubkey) -> Ticket {
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

    /// Verified game with tickets 1..=3; ticket 3 (number 900) is the last sold.
    fn verified() -> (Game, NumberTable) {
        let mut game = game();
        let mut table = empty_table();
        sell(&mut game, &mut table, &[500, 520, 900]);
        let ranking = table.rank(500, game.tier_count());
        game.settle(500, &ranking, Pubkey::new_unique(), 1_600).unwrap();
        (game, table)
    }

    #[test]
    fn pays_target_and_records_claim() {
        let (mut game, table) = verified();
        let holder = Pubkey::new_unique();
        let mut ticket = ticket(1, 500, holder);
        let mut target = wallet(holder);
        let mut owner = wallet(game.owner);

        let quote = pay_reward(&mut game, &table, &mut ticket, &mut target, &mut owner, 1_700).unwrap();

        assert_eq!(quote.tier, 0);
        assert_eq!(quote.payout, game.pool.tier_share(70).unwrap());
        assert_eq!(target.amount, quote.payout);
        assert_eq!(owner.amount, 0);
        assert_eq!(game.pool.bonus_amount_withdrawn, quote.base);
        assert!(ticket.reward.claimed);
        assert_eq!(ticket.reward.claim_time, 1_700);
    }

    #[test]
    fn redirected_claim_names_signer_and_recipient() {
        let (mut game, table) = verified();
        let operator = Pubkey::new_unique();
        let target_key = Pubkey::new_unique();
        let mut ticket = ticket(2, 520, Pubkey::new_unique());
        let mut target = wallet(target_key);
        let mut owner = wallet(game.owner);

        let quote = pay_reward(&mut game, &table, &mut ticket, &mut target, &mut owner, 1_700).unwrap();
        let event = claim_event(&game, &ticket, operator, &target, &quote);

        assert_eq!(event.claimant, operator);
        assert_eq!(event.recipient, target_key);
        assert_eq!((event.ticket_id, event.game_id), (2, 1));
        assert_eq!((event.tier, event.amount), (1, target.amount));
    }

    #[test]
    fn second_claim_leaves_wallets_unchanged() {
        let (mut game, table) = verified();
        let holder = Pubkey::new_unique();
        let mut ticket = ticket(3, 900, holder);
        let mut target = wallet(holder);
        let mut owner = wallet(game.owner);

        pay_reward(&mut game, &table, &mut ticket, &mut target, &mut owner, 1_700).unwrap();
        let (paid, withheld) = (target.amount, owner.amount);
        let withdrawn = game.pool.bonus_amount_withdrawn;
        assert!(withheld > 0);

        assert_eq!(
            pay_reward(&mut game, &table, &mut ticket, &mut target, &mut owner, 1_800).unwrap_err(),
            LotteryError::AlreadyClaimed.into()
        );
        assert_eq!((target.amount, owner.amount), (paid, withheld));
        assert_eq!(game.pool.bonus_amount_withdrawn, withdrawn);
        assert_eq!(ticket.reward.claim_time, 1_700);
    }

    #[test]
    fn owner_claiming_gets_payout_and_penalty_in_one_wallet() {
        let (mut game, table) = verified();
        let owner_key = game.owner;
        let mut ticket = ticket(3, 900, owner_key);
        // Both copies stand for the one wallet account the runtime hands over twice.
        let mut target = wallet(owner_key);
        let mut owner = wallet(owner_key);

        let quote = pay_reward(&mut game, &table, &mut ticket, &mut target, &mut owner, 1_700).unwrap();

        assert_eq!(quote.payout, quote.base * 80 / 100);
        assert!(quote.withheld() > 0);
        assert_eq!(target.amount, quote.payout + quote.withheld());
        assert_eq!(owner.amount, target.amount);
        assert_eq!(game.pool.withheld_amount, quote.withheld());
    }
}
