//! Animated star-field background for the landing page.
//!
//! This crate is compiled to WebAssembly and runs in the browser behind all
//! other page content. It owns a fixed pool of particles that drift, fall
//! toward the viewer and respawn far away, and redraws them once per display
//! refresh with a fading trail. Everything except [`web`] is host-agnostic and
//! runs natively under `cargo test`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`animator`] | Frame-loop lifecycle over an abstract [`animator::Host`] |
//! | [`field`] | The particle pool and its seeded random source |
//! | [`particle`] | Per-particle spawn, integration, bounce and respawn |
//! | [`perspective`] | Depth scale and projection toward the surface center |
//! | [`surface`] | Drawing-surface trait, colors and glow descriptions |
//! | [`render`] | Draws one frame of a field onto a surface |
//! | [`web`] | `web-sys` canvas, `requestAnimationFrame` and `resize` binding |
//! | [`consts`] | Shared numeric constants (pool size, depth range, palette) |

pub mod animator;
pub mod consts;
pub mod field;
pub mod particle;
pub mod perspective;
pub mod render;
pub mod surface;
pub mod web;
