use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::MAX_AD_LEN;
use crate::custody::{self, TokenLeg};
use crate::errors::LotteryError;
use crate::events::GameCreated;
use crate::state::{
    BonusPool, Config, Currency, FeeRates, Game, GameRegistry, GameStatus, NumberTable, Vault,
    WalletBalance,
};

#[derive(Accounts)]
#[instruction(ad: String, start_time: i64, duration: i64, currency: Currency)]
pub struct CreateGame<'info> {
    #[account(
        mut,
        seeds = [Config::SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    #[account(
        mut,
        seeds = [GameRegistry::SEED],
        bump = registry.bump,
        realloc = GameRegistry::space(
            registry.active_games.len() + 1,
            registry.history_games.len(),
        ),
        realloc::payer = owner,
        realloc::zero = false,
    )]
    pub registry: Account<'info, GameRegistry>,

    #[account(
        init,
        payer = owner,
        space = 8 + Game::INIT_SPACE,
        seeds = [Game::SEED, (config.total_games + 1).to_le_bytes().as_ref()],
        bump,
    )]
    pub game: Box<Account<'info, Game>>,

    #[account(
        init,
        payer = owner,
        space = NumberTable::space(config.ticket_max_count as usize),
        seeds = [NumberTable::SEED, (config.total_games + 1).to_le_bytes().as_ref()],
        bump,
    )]
    pub number_table: Account<'info, NumberTable>,

    /// Receives the owner fee and unclaimed-tier refunds of this game.
    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + WalletBalance::INIT_SPACE,
        seeds = [
            WalletBalance::SEED,
            owner.key().as_ref(),
            currency.kind.seed(),
            currency.mint.as_ref(),
        ],
        bump,
    )]
    pub owner_wallet: Account<'info, WalletBalance>,

    #[account(
        mut,
        seeds = [Vault::SEED],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        mut,
        constraint = owner_token_account.owner == owner.key() @ LotteryError::Unauthorized,
    )]
    pub owner_token_account: Option<Account<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = vault_token_account.owner == vault.key() @ LotteryError::Unauthorized,
    )]
    pub vault_token_account: Option<Account<'info, TokenAccount>>,

    /// Pays the initial stake and owns the game.
    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Option<Program<'info, Token>>,
}

pub fn handler(
    ctx: Context<CreateGame>,
    ad: String,
    start_time: i64,
    duration: i64,
    currency: Currency,
    initial_amount: u64,
) -> Result<()> {
    require!(ad.len() <= MAX_AD_LEN, LotteryError::AdTooLong);
    require!(duration > 0, LotteryError::InvalidDuration);
    currency.validate()?;

    let owner = ctx.accounts.owner.key();
    let config = &mut ctx.accounts.config;
    require!(
        initial_amount == config.initial_pool_amount,
        LotteryError::InvalidStake
    );

    let game_id = config.next_game_id()?;
    ctx.accounts
        .registry
        .activate(game_id, config.max_active_games)?;

    let mut pool = BonusPool::default();
    pool.seed(initial_amount)?;

    let game = &mut ctx.accounts.game;
    game.game_id = game_id;
    game.owner = owner;
    game.ad = ad;
    game.status = GameStatus::Active;
    game.start_time = start_time;
    game.duration = duration;
    game.ticket_price = config.ticket_price;
    game.ticket_max_count = config.ticket_max_count;
    game.currency = currency;
    game.fee_rates = FeeRates {
        owner_fee_bps: config.owner_fee_bps,
        develop_fee_bps: config.develop_fee_bps,
        verify_fee_bps: config.verify_fee_bps,
    };
    game.last_ticket_bonus_percent = config.last_ticket_bonus_percent;
    game.prize_tiers = config.prize_tiers.clone();
    game.pool = pool;
    game.draw_seed = 0;
    game.number_sum = 0;
    game.ticket_sold_count = 0;
    game.last_sold_ticket_id = 0;
    game.winning_number = 0;
    game.tier_numbers = Vec::new();
    game.tier_ticket_counts = Vec::new();
    game.verifier = Pubkey::default();
    game.verified_at = 0;
    game.bump = ctx.bumps.game;

    let number_table = &mut ctx.accounts.number_table;
    number_table.game_id = game_id;
    number_table.entries = Vec::new();
    number_table.bump = ctx.bumps.number_table;

    ctx.accounts
        .owner_wallet
        .open(owner, currency, ctx.bumps.owner_wallet)?;

    let token = TokenLeg::resolve(
        &currency,
        &ctx.accounts.owner_token_account,
        &ctx.accounts.vault_token_account,
        &ctx.accounts.token_program,
    )?;
    custody::collect(
        initial_amount,
        &ctx.accounts.owner,
        &ctx.accounts.vault,
        &ctx.accounts.system_program,
        token,
    )?;

    let end_time = game.end_time()?;
    msg!(
        "Game {} created by {}: stake {}, sales {}..{}",
        game_id,
        owner,
        initial_amount,
        start_time,
        end_time
    );

    emit!(GameCreated {
        game_id,
        owner,
        start_time,
        end_time,
    });

    Ok(())
}
