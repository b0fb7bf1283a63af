//! Application layer with dependency injection container.
//!
//! The container owns infrastructure dependencies (the value table repository)
//! and provides factory methods for creating learning agents.
//!
//! # Usage
//!
//! ```
//! use noughts::app::{AgentConfig, App};
//!
//! let app = App::new();
//! let agent = app.create_agent("agent", AgentConfig::default().with_seed(42))?;
//! # Ok::<(), noughts::Error>(())
//! ```

pub mod config;
pub mod container;

pub use config::AgentConfig;
pub use container::{App, AppBuilder};
