//! Draw values in `[MIN_NUMBER, MAX_NUMBER]` derived from on-chain inputs.
//!
//! Every input is publicly observable, so draws are predictable by anyone
//! watching the chain.

use anchor_lang::prelude::*;

use crate::constants::{MAX_NUMBER, MIN_NUMBER};

/// Blake3 over `parts`, first 8 digest bytes reduced into the number range.
pub fn draw_number(parts: &[&[u8]]) -> u32 {
    let mut hasher = blake3::Hasher::new();
    for part in parts {
        hasher.update(part);
    }
    let digest = hasher.finalize();

    let mut head = [0u8; 8];
    head.copy_from_slice(&digest.as_bytes()[..8]);
    let value = u64::from_le_bytes(head) % MAX_NUMBER as u64;
    value as u32 + MIN_NUMBER
}

/// Running seed after a sale.
pub fn sale_seed(
    game_id: u64,
    previous: u32,
    timestamp: i64,
    slot: u64,
    buyer: &Pubkey,
    sold_count: u32,
) -> u32 {
    draw_number(&[
        &game_id.to_le_bytes(),
        &previous.to_le_bytes(),
        &timestamp.to_le_bytes(),
        &slot.to_le_bytes(),
        buyer.as_ref(),
        &sold_count.to_le_bytes(),
    ])
}

/// Winning number of a game that sold tickets.
pub fn winning_number(game_id: u64, draw_seed: u32, number_sum: u64) -> u32 {
    draw_number(&[
        &game_id.to_le_bytes(),
        &draw_seed.to_le_bytes(),
        &number_sum.to_le_bytes(),
    ])
}

/// Winning number of a game nobody played.
pub fn unplayed_number(game_id: u64, timestamp: i64, slot: u64, verifier: &Pubkey) -> u32 {
    draw_number(&[
        &game_id.to_le_bytes(),
        &timestamp.to_le_bytes(),
        &slot.to_le_bytes(),
        verifier.as_ref(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_in_range() {
        let buyer = Pubkey::new_unique();
        let mut seed = 0;
        for sold in 0..500u32 {
            seed = sale_seed(7, seed, 1_700_000_000 + sold as i64, 250_000 + sold as u64, &buyer, sold);
            assert!((MIN_NUMBER..=MAX_NUMBER).contains(&seed));
            let winner = winning_number(7, seed, sold as u64 * 999_999);
            assert!((MIN_NUMBER..=MAX_NUMBER).contains(&winner));
        }
    }

    #[test]
    fn equal_inputs_draw_equal_numbers() {
        let verifier = Pubkey::new_unique();
        assert_eq!(winning_number(1, 55, 1_234), winning_number(1, 55, 1_234));
        assert_eq!(
            unplayed_number(2, 1_700_000_000, 9, &verifier),
            unplayed_number(2, 1_700_000_000, 9, &verifier)
        );
    }

    #[test]
    fn inputs_change_the_draw() {
        let draws: Vec<u32> = (0..16u64).map(|id| winning_number(id, 55, 1_234)).collect();
        let mut distinct = draws.clone();
        distinct.sort_unstable();
        distinct.dedup();
        assert!(distinct.len() > 1);
    }
}
