pub mod config;
pub mod game;
pub mod number_table;
pub mod pool;
pub mod registry;
pub mod ticket;
pub mod vault;
pub mod wallet;

pub use config::*;
pub use game::*;
pub use number_table::*;
pub use pool::*;
pub use registry::*;
pub use ticket::*;
pub use vault::*;
pub use wallet::*;
