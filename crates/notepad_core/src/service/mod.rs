//! Note use-case orchestration.
//!
//! # Responsibility
//! - Own the in-memory collection and session state.
//! - Route every mutation through validation and full-collection persistence.
//! - Keep front ends decoupled from storage details.

pub mod clock;
pub mod error_clear;
pub mod note_controller;
