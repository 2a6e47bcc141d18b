//! Trivia GUI Client Library
//!
//! This crate provides the main application logic for the Trivia GUI
//! client, a native desktop app for managing and playing trivia decks.

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod state;
pub mod theme;
pub mod utils;
