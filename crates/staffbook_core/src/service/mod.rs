//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store and persistence calls into the API the interactive
//!   shell consumes.
//! - Keep the shell decoupled from file-format details.

pub mod roster;
