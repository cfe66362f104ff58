//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: they lay out `content` data and never read
//! each other's state. The background decoration is the only one with
//! browser-side behavior.

pub mod background;
pub mod hero;
pub mod nav_bar;
pub mod profile_grid;
