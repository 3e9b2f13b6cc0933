use anchor_lang::prelude::*;

use crate::errors::LotteryError;

/// Active and finished game ids, in creation / verification order.
#[account]
pub struct GameRegistry {
    pub active_games: Vec<u64>,
    pub history_games: Vec<u64>,
    /// PDA bump seed.
    pub bump: u8,
}

impl GameRegistry {
    pub const SEED: &'static [u8] = b"registry";

    /// Account size (discriminator included) for the given list lengths.
    pub const fn space(active: usize, history: usize) -> usize {
        8 + (4 + active * 8) + (4 + history * 8) + 1
    }

    pub fn activate(&mut self, game_id: u64, max_active_games: u8) -> Result<()> {
        require!(
            self.active_games.len() < max_active_games as usize,
            LotteryError::TooManyActiveGames
        );
        self.active_games.push(game_id);
        Ok(())
    }

    /// Moves a game from the active list to the end of the history list.
    pub fn retire(&mut self, game_id: u64) -> Result<()> {
        let position = self
            .active_games
            .iter()
            .position(|id| *id == game_id)
            .ok_or(LotteryError::GameNotFound)?;
        self.active_games.remove(position);
        self.history_games.push(game_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caps_active_games() {
        let mut registry = GameRegistry {
            active_games: vec![],
            history_games: vec![],
            bump: 0,
        };
        registry.activate(1, 1).unwrap();
        assert_eq!(
            registry.activate(2, 1).unwrap_err(),
            LotteryError::TooManyActiveGames.into()
        );
    }

    #[test]
    fn retire_moves_id_to_history() {
        let mut registry = GameRegistry {
            active_games: vec![4, 7],
            history_games: vec![1],
            bump: 0,
        };
        let before = GameRegistry::space(2, 1);
        registry.retire(4).unwrap();
        assert_eq!(registry.active_games, vec![7]);
        assert_eq!(registry.history_games, vec![1, 4]);
        assert_eq!(GameRegistry::space(1, 2), before);
        assert_eq!(registry.retire(4).unwrap_err(), LotteryError::GameNotFound.into());
    }
}
