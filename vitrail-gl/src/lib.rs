//! OpenGL backends for [vitrail](https://crates.io/crates/vitrail).
//!
//! This crate implements the `vitrail` backend traits over real OpenGL contexts. Currently a
//! single backend type is provided, [`GL33`], targeting OpenGL 3.3 core and above. It implements
//! both [`vitrail::backend::StateSink`] for applying tables and [`vitrail::backend::StateQuery`]
//! for seeding tables from a live context.

#[cfg(feature = "gl33")]
pub mod gl33;

#[cfg(feature = "gl33")]
pub use gl33::GL33;
