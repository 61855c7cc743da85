//! Note domain model.
//!
//! # Responsibility
//! - Define the persisted note record and its identity type.
//! - Define draft input and its validation rules.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId` that is never reassigned.
//! - Required-field rules live on `NoteDraft`, not on `Note` itself.

pub mod note;
