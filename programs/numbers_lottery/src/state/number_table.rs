use anchor_lang::prelude::*;

use crate::constants::{MAX_NUMBER, MIN_NUMBER};
use crate::errors::LotteryError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct NumberEntry {
    pub number: u32,
    /// Tickets carrying this number.
    pub count: u32,
}

/// Distinct numbers submitted to one game, in first-insertion order.
///
/// The position of an entry in `entries` is its insertion index, which breaks
/// ties between numbers equally close to the winning value.
#[account]
pub struct NumberTable {
    pub game_id: u64,
    pub entries: Vec<NumberEntry>,
    /// PDA bump seed.
    pub bump: u8,
}

impl NumberTable {
    pub const SEED: &'static [u8] = b"numbers";

    /// Account size (discriminator included) holding up to `max_entries`.
    pub const fn space(max_entries: usize) -> usize {
        8 + 8 + (4 + max_entries * NumberEntry::INIT_SPACE) + 1
    }

    pub fn insert(&mut self, number: u32) -> Result<()> {
        require!(
            (MIN_NUMBER..=MAX_NUMBER).contains(&number),
            LotteryError::InvalidNumber
        );
        match self.entries.iter_mut().find(|e| e.number == number) {
            Some(entry) => {
                entry.count = entry.count.checked_add(1).ok_or(LotteryError::MathOverflow)?;
            }
            None => self.entries.push(NumberEntry { number, count: 1 }),
        }
        Ok(())
    }

    pub fn occurrences(&self, number: u32) -> u32 {
        self.entries
            .iter()
            .find(|e| e.number == number)
            .map_or(0, |e| e.count)
    }

    /// Up to `tier_count` entries closest to `target`, closest first.
    pub fn rank(&self, target: u32, tier_count: usize) -> Vec<NumberEntry> {
        // (distance, index) keys kept sorted; never longer than tier_count.
        let mut best: Vec<(u32, usize)> = Vec::with_capacity(tier_count);
        for (index, entry) in self.entries.iter().enumerate() {
            let key = (entry.number.abs_diff(target), index);
            let slot = best.partition_point(|k| *k < key);
            if slot < tier_count {
                best.insert(slot, key);
                best.truncate(tier_count);
            }
        }
        best.into_iter().map(|(_, index)| self.entries[index]).collect()
    }

    /// Tier of `number` against `target`; `tier_count` when it did not place
    /// or was never submitted.
    pub fn order_of(&self, target: u32, number: u32, tier_count: usize) -> usize {
        let Some(index) = self.entries.iter().position(|e| e.number == number) else {
            return tier_count;
        };
        let key = (number.abs_diff(target), index);
        let ahead = self
            .entries
            .iter()
            .enumerate()
            .filter(|(i, e)| (e.number.abs_diff(target), *i) < key)
            .count();
        ahead.min(tier_count)
    }

    /// Distinct submitted numbers in ascending order.
    pub fn sorted_numbers(&self) -> Vec<u32> {
        let mut numbers: Vec<u32> = self.entries.iter().map(|e| e.number).collect();
        numbers.sort_unstable();
        numbers
    }

    /// Numbers placed in `tier`, ascending. The rest tier (`tier_count`) holds
    /// every number outside the ranking; higher tiers hold nothing.
    pub fn numbers_at_order(&self, target: u32, tier: usize, tier_count: usize) -> Vec<u32> {
        let ranking = self.rank(target, tier_count);
        if tier < tier_count {
            return ranking.get(tier).map(|e| vec![e.number]).unwrap_or_default();
        }
        if tier > tier_count {
            return vec![];
        }
        let mut rest: Vec<u32> = self
            .entries
            .iter()
            .filter(|e| !ranking.contains(e))
            .map(|e| e.number)
            .collect();
        rest.sort_unstable();
        rest
    }

    /// Tickets placed in `tier`.
    pub fn tickets_at_order(&self, target: u32, tier: usize, tier_count: usize) -> u32 {
        self.numbers_at_order(target, tier, tier_count)
            .iter()
            .map(|number| self.occurrences(*number))
            .sum()
    }
}
