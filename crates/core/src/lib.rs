//! Rules core for the two-seat landlord card game. Keep this crate free of IO
//! and platform concerns.

pub mod beat;
pub mod cards;
pub mod combo;
pub mod deck;
pub mod rng;
pub mod session;

pub use beat::*;
pub use cards::*;
pub use combo::*;
pub use deck::*;
pub use rng::*;
pub use session::*;
