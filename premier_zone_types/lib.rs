pub mod errors;
pub mod player;

pub use errors::Result;
