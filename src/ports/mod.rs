//! Ports (trait boundaries) for external collaborators.
//!
//! The game core calls these traits and never the concrete console, storage
//! or training-loop implementations behind them.

pub mod observer;
pub mod player;
pub mod renderer;
pub mod repository;

pub use observer::Observer;
pub use player::Player;
pub use renderer::Renderer;
pub use repository::ValueTableRepository;
