use anchor_lang::prelude::*;

use crate::draw;
use crate::errors::LotteryError;
use crate::events::GameVerified;
use crate::state::{Config, Game, GameRegistry, NumberTable, WalletBalance};

#[derive(Accounts)]
pub struct VerifyGame<'info> {
    #[account(
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [GameRegistry::SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, GameRegistry>,

    #[account(
        mut,
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

    /// Opened beforehand with `open_wallet`.
    #[account(
        mut,
        seeds = [
            WalletBalance::SEED,
            config.developer.as_ref(),
            game.currency.kind.seed(),
            game.currency.mint.as_ref(),
        ],
        bump = developer_wallet.bump,
    )]
    pub developer_wallet: Account<'info, WalletBalance>,

    #[account(
        init_if_needed,
        payer = verifier,
        space = 8 + WalletBalance::INIT_SPACE,
        seeds = [
            WalletBalance::SEED,
            verifier.key().as_ref(),
            game.currency.kind.seed(),
            game.currency.mint.as_ref(),
        ],
        bump,
    )]
    pub verifier_wallet: Account<'info, WalletBalance>,

    /// Anyone may verify once the sale window has closed.
    #[account(mut)]
    pub verifier: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<VerifyGame>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let verifier = ctx.accounts.verifier.key();

    let game = &mut ctx.accounts.game;
    game.check_verifiable(now)?;

    let winning_number = if game.ticket_sold_count > 0 {
        draw::winning_number(game.game_id, game.draw_seed, game.number_sum)
    } else {
        draw::unplayed_number(game.game_id, now, clock.slot, &verifier)
    };

    let ranking = ctx
        .accounts
        .number_table
        .rank(winning_number, game.tier_count());
    let settlement = game.settle(winning_number, &ranking, verifier, now)?;

    ctx.accounts
        .verifier_wallet
        .open(verifier, game.currency, ctx.bumps.verifier_wallet)?;

    let owner_credit = settlement
        .fees
        .owner
        .checked_add(settlement.refund)
        .ok_or(LotteryError::MathOverflow)?;
    let credits = [
        (game.owner, owner_credit),
        (ctx.accounts.config.developer, settlement.fees.develop),
        (verifier, settlement.fees.verify),
    ];

    credit_holders(
        &credits,
        &mut [
            &mut *ctx.accounts.owner_wallet,
            &mut *ctx.accounts.developer_wallet,
            &mut *ctx.accounts.verifier_wallet,
        ],
    )?;

    ctx.accounts.registry.retire(game.game_id)?;

    msg!(
        "Game {} verified by {}: winning number {}, refund {}",
        game.game_id,
        verifier,
        winning_number,
        settlement.refund
    );

    emit!(GameVerified {
        game_id: game.game_id,
        winning_number,
        verifier,
    });

    Ok(())
}

/// Credits each wallet with everything owed to its holder. Roles may share one
/// wallet account; every copy must end up with the same balance or the last
/// one serialized would drop the others' credit.
pub(crate) fn credit_holders(
    credits: &[(Pubkey, u64)],
    wallets: &mut [&mut WalletBalance],
) -> Result<()> {
    for wallet in wallets.iter_mut() {
        let total = credits
            .iter()
            .filter(|(holder, _)| *holder == wallet.holder)
            .try_fold(0u64, |sum, (_, amount)| sum.checked_add(*amount))
            .ok_or(LotteryError::MathOverflow)?;
        wallet.credit(total)?;
    }
    Ok(())
}
