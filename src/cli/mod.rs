//! CLI infrastructure for the noughts toolkit
//!
//! This module provides the command-line interface for training, playing
//! against, evaluating and inspecting learning agents.

pub mod commands;
pub mod config;
pub mod output;
