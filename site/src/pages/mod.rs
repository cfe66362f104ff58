//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The site is a single page; it owns composition and delegates rendering
//! details to `components`.

pub mod landing;
