//! # Typed, diffable OpenGL render-state tables
//!
//! This crate tracks the global OpenGL render state (blending, depth and stencil testing, face
//! culling, scissoring, clear values and friends) as plain Rust values, and turns the difference
//! between two such snapshots into the minimal stream of state-setting calls.
//!
//! The central type is [`state::StateTable`]. Every state item it holds knows both its value and
//! whether it was explicitly set, which is what makes tables *composable*: a table that only
//! sets the line width says nothing about blending, and merging it into another table touches
//! nothing but the line width.
//!
//! The crate itself never talks to OpenGL. It emits through the [`backend::StateSink`] trait and
//! reads back through [`backend::StateQuery`]; the `vitrail-gl` crate provides implementations
//! over a real OpenGL 3.3+ context, and tests use an in-memory recorder. That split keeps the
//! diffing logic fully testable without a windowing system or a GPU.
//!
//! A typical frame looks like this:
//!
//! ```
//! use vitrail::region::Region;
//! use vitrail::state::{Capability, StateTable};
//!
//! // The save table caches what the context currently holds.
//! let mut save = StateTable::new(800, 600);
//!
//! // A pass describes only what it cares about.
//! let mut pass = StateTable::new(800, 600);
//! pass.enable(Capability::DepthTest, true);
//! pass.set_viewport(Region::new(0, 0, 800, 600));
//!
//! // update::update_from_state_table(&pass, &mut save, &mut sink) emits the difference,
//! // then the pass is merged into the save table:
//! save.merge_values_from(&pass, &pass);
//! ```
//!
//! Modules:
//!
//! - [`state`] holds [`state::StateTable`] and the [`state::Capability`] / [`state::StateValue`]
//!   item enumerations.
//! - [`update`] is the diff engine: applying tables, performing buffer clears, and seeding a
//!   table from live state.
//! - [`backend`] defines the sink and query traits a backend implements.
//! - [`blending`], [`depth_stencil`], [`face_culling`], [`hint`] and [`region`] hold the typed
//!   state values themselves.

pub mod backend;
pub mod blending;
pub mod depth_stencil;
pub mod face_culling;
pub mod hint;
pub mod region;
pub mod state;
pub mod update;
