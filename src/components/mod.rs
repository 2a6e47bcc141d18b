//! Components - Reusable UI Components
//!
//! Pure UI components that don't depend on persistence or do I/O.

pub mod composite;
pub mod layout;
pub mod primitives;
