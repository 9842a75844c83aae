//! # Pahtum
//!
//! A two-player territorial game on a 7x7 grid. Players score for the
//! longest horizontal and vertical chain of their marks in every line; the
//! game ends when the board is full. Includes a greedy computer opponent
//! and a terminal UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Board, players, chain scoring, game session
//! - [`ai`] — Agent trait, greedy opponent heuristic, random baseline
//! - [`arena`] — Headless agent-vs-agent series and result metrics
//! - [`ui`] — Terminal UI for playing against the computer
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types
//! - [`logging`] — `tracing` subscriber setup

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
