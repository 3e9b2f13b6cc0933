pub mod buy_ticket;
pub mod claim_reward;
pub mod claim_reward_to;
pub mod create_game;
pub mod deposit;
pub mod initialize_config;
pub mod lucky_numbers;
pub mod open_vault_token;
pub mod open_wallet;
pub mod set_roles;
pub mod ticket_info;
pub mod tier_info;
pub mod transfer_ticket;
pub mod update_config;
pub mod verify_game;
pub mod withdraw;

pub use buy_ticket::*;
pub use claim_reward::*;
pub use claim_reward_to::*;
pub use create_game::*;
pub use deposit::*;
pub use initialize_config::*;
pub use lucky_numbers::*;
pub use open_vault_token::*;
pub use open_wallet::*;
pub use set_roles::*;
pub use ticket_info::*;
pub use tier_info::*;
pub use transfer_ticket::*;
pub use update_config::*;
pub use verify_game::*;
pub use withdraw::*;
