//! Moves real funds in and out of the vault. Ledger balances are tracked
//! separately in `WalletBalance`; only stakes, ticket payments, deposits and
//! withdrawals touch custody.

use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::errors::LotteryError;
use crate::state::{Currency, Vault};

/// Token side of a custody move: the user's account and the vault's account
/// for the game currency's mint.
pub struct TokenLeg<'a, 'info> {
    pub user: &'a Account<'info, TokenAccount>,
    pub vault: &'a Account<'info, TokenAccount>,
    pub program: &'a Program<'info, Token>,
}

impl<'a, 'info> TokenLeg<'a, 'info> {
    /// Picks the token accounts a currency needs; native currency needs none.
    pub fn resolve(
        currency: &Currency,
        user: &'a Option<Account<'info, TokenAccount>>,
        vault: &'a Option<Account<'info, TokenAccount>>,
        program: &'a Option<Program<'info, Token>>,
    ) -> Result<Option<Self>> {
        if currency.is_native() {
            return Ok(None);
        }
        match (user, vault, program) {
            (Some(user), Some(vault), Some(program)) => {
                require_keys_eq!(user.mint, currency.mint, LotteryError::CurrencyMismatch);
                require_keys_eq!(vault.mint, currency.mint, LotteryError::CurrencyMismatch);
                Ok(Some(Self { user, vault, program }))
            }
            _ => err!(LotteryError::MissingTokenAccounts),
        }
    }
}

/// Pulls `amount` from `payer` into the vault.
pub fn collect<'info>(
    amount: u64,
    payer: &Signer<'info>,
    vault: &Account<'info, Vault>,
    system_program: &Program<'info, System>,
    token: Option<TokenLeg<'_, 'info>>,
) -> Result<()> {
    match token {
        None => system_program::transfer(
            CpiContext::new(
                system_program.to_account_info(),
                system_program::Transfer {
                    from: payer.to_account_info(),
                    to: vault.to_account_info(),
                },
            ),
            amount,
        ),
        Some(leg) => token::transfer(
            CpiContext::new(
                leg.program.to_account_info(),
                Transfer {
                    from: leg.user.to_account_info(),
                    to: leg.vault.to_account_info(),
                    authority: payer.to_account_info(),
                },
            ),
            amount,
        ),
    }
}

/// Pays `amount` out of the vault to `recipient` (or its token account).
pub fn release<'info>(
    amount: u64,
    vault: &Account<'info, Vault>,
    recipient: &AccountInfo<'info>,
    token: Option<TokenLeg<'_, 'info>>,
) -> Result<()> {
    match token {
        None => {
            // The vault is program-owned, so lamports move without a CPI.
            let vault_info = vault.to_account_info();
            let floor = Rent::get()?.minimum_balance(vault_info.data_len());
            let spendable = vault_info.lamports().saturating_sub(floor);
            require!(amount <= spendable, LotteryError::InsufficientPool);

            **vault_info.try_borrow_mut_lamports()? -= amount;
            **recipient.try_borrow_mut_lamports()? += amount;
            Ok(())
        }
        Some(leg) => {
            let bump = [vault.bump];
            let signer_seeds: &[&[&[u8]]] = &[&[Vault::SEED, &bump]];
            token::transfer(
                CpiContext::new_with_signer(
                    leg.program.to_account_info(),
                    Transfer {
                        from: leg.vault.to_account_info(),
                        to: leg.user.to_account_info(),
                        authority: vault.to_account_info(),
                    },
                    signer_seeds,
                ),
                amount,
            )
        }
    }
}
