use anchor_lang::prelude::*;

use crate::errors::LotteryError;
use crate::events::TicketTransferred;
use crate::state::Ticket;

#[derive(Accounts)]
pub struct TransferTicket<'info> {
    #[account(
        mut,
        seeds = [Ticket::SEED, ticket.ticket_id.to_le_bytes().as_ref()],
        bump = ticket.bump,
        constraint = ticket.owner == owner.key() @ LotteryError::NotTicketOwner,
    )]
    pub ticket: Account<'info, Ticket>,

    pub owner: Signer<'info>,
}

/// Hands the ticket and its future claim to `new_owner`. The buyer is kept.
pub fn handler(ctx: Context<TransferTicket>, new_owner: Pubkey) -> Result<()> {
    let ticket = &mut ctx.accounts.ticket;
    let from = ticket.transfer_to(new_owner)?;

    emit!(TicketTransferred {
        ticket_id: ticket.ticket_id,
        from,
        to: new_owner,
    });

    Ok(())
}
