//! Wireframe Core Types and Definitions
//!
//! This crate provides the foundational types shared by the wireframe
//! converter crates. It includes:
//!
//! - **Model**: The deserialized wireframe document ([`model::Wireframe`], [`model::Control`])
//! - **Colors**: Packed color decoding and the named shade palettes ([`color`] module)
//! - **Geometry**: Points, sizes, viewports and lenient numeric parsing ([`geometry`] module)
//! - **Draw**: Stroke, font and rich-text primitives used by the renderer ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod model;
