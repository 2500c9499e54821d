//! CLI infrastructure for the Tic-Tac-Toe agent
//!
//! This module provides the command-line interface for playing against
//! the agent, simulating games between policies, and analyzing positions.

pub mod commands;
pub mod output;
