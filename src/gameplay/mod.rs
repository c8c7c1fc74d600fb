pub mod bet;
pub use bet::*;

pub mod game;
pub use game::*;

pub mod table;
pub use table::*;
