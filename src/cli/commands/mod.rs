//! Subcommands of the `noughts` binary

pub mod evaluate;
pub mod inspect;
pub mod play;
pub mod train;
