//! CLI infrastructure for the solver
//!
//! This module provides the command-line interface for solving positions,
//! analyzing the game tree and playing agents against each other.

pub mod commands;
pub mod config;
pub mod output;
