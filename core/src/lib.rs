pub mod board;
pub mod check;
pub mod error;
pub mod fen;
pub mod game_state;
pub mod move_gen;
pub mod types;

pub use board::*;
pub use check::{is_attacked_by, is_in_check};
pub use error::EngineError;
pub use fen::{positions, FenError};
pub use game_state::*;
pub use move_gen::*;
pub use types::*;
