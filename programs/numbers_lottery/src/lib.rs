use anchor_lang::prelude::*;

pub mod constants;
pub mod custody;
pub mod draw;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;
use state::{ConfigParams, Currency};

declare_id!("NumLot1111111111111111111111111111111111111");

#[program]
pub mod numbers_lottery {
    use super::*;

    /// One-time setup of config, game registry and vault.
    pub fn initialize_config(ctx: Context<InitializeConfig>, params: ConfigParams) -> Result<()> {
        instructions::initialize_config::handler(ctx, params)
    }

    /// Admin replaces the tunables used by future games, given their current values.
    pub fn update_config(
        ctx: Context<UpdateConfig>,
        expected: ConfigParams,
        params: ConfigParams,
    ) -> Result<()> {
        instructions::update_config::handler(ctx, expected, params)
    }

    /// Admin reassigns the operator and developer roles.
    pub fn set_roles(ctx: Context<SetRoles>, operator: Pubkey, developer: Pubkey) -> Result<()> {
        instructions::set_roles::handler(ctx, operator, developer)
    }

    /// Create an empty balance for `holder` in `currency`.
    pub fn open_wallet(ctx: Context<OpenWallet>, holder: Pubkey, currency: Currency) -> Result<()> {
        instructions::open_wallet::handler(ctx, holder, currency)
    }

    /// Create the vault's token account for a mint.
    pub fn open_vault_token(ctx: Context<OpenVaultToken>) -> Result<()> {
        instructions::open_vault_token::handler(ctx)
    }

    /// Stake the initial pool and open a game.
    pub fn create_game(
        ctx: Context<CreateGame>,
        ad: String,
        start_time: i64,
        duration: i64,
        currency: Currency,
        initial_amount: u64,
    ) -> Result<()> {
        instructions::create_game::handler(ctx, ad, start_time, duration, currency, initial_amount)
    }

    /// Buy one ticket carrying `number` in an active game.
    pub fn buy_ticket(ctx: Context<BuyTicket>, number: u32, payment: u64) -> Result<()> {
        instructions::buy_ticket::handler(ctx, number, payment)
    }

    /// Draw the winning number of an ended game and pay out its fees.
    pub fn verify_game(ctx: Context<VerifyGame>) -> Result<()> {
        instructions::verify_game::handler(ctx)
    }

    /// Ticket owner claims the ticket's reward into their wallet.
    pub fn claim_reward(ctx: Context<ClaimReward>) -> Result<()> {
        instructions::claim_reward::handler(ctx)
    }

    /// Operator claims a ticket's reward into `target`'s wallet.
    pub fn claim_reward_to(ctx: Context<ClaimRewardTo>, target: Pubkey) -> Result<()> {
        instructions::claim_reward_to::handler(ctx, target)
    }

    /// Hand a ticket to a new owner.
    pub fn transfer_ticket(ctx: Context<TransferTicket>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ticket::handler(ctx, new_owner)
    }

    /// Fund a holder's wallet.
    pub fn deposit(
        ctx: Context<Deposit>,
        holder: Pubkey,
        currency: Currency,
        amount: u64,
    ) -> Result<()> {
        instructions::deposit::handler(ctx, holder, currency, amount)
    }

    /// Withdraw from a wallet to its holder; `None` empties it.
    pub fn withdraw(ctx: Context<Withdraw>, amount: Option<u64>) -> Result<()> {
        instructions::withdraw::handler(ctx, amount)
    }

    /// Read a ticket together with its game and pending reward.
    pub fn ticket_info(ctx: Context<ReadTicket>) -> Result<TicketView> {
        instructions::ticket_info::handler(ctx)
    }

    /// Read a page of a game's distinct numbers in ascending order.
    pub fn lucky_numbers(ctx: Context<ReadNumbers>, offset: u32) -> Result<NumbersPage> {
        instructions::lucky_numbers::handler(ctx, offset)
    }

    /// Read the numbers and ticket count of one tier of a verified game.
    pub fn tier_info(ctx: Context<ReadNumbers>, tier: u8, offset: u32) -> Result<TierView> {
        instructions::tier_info::handler(ctx, tier, offset)
    }
}
