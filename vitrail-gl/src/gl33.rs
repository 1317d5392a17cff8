//! OpenGL 3.3 backend.
//!
//! This module implements the vitrail backend traits for OpenGL 3.3 core and above. The backend
//! type is [`GL33`].

mod state;

pub use self::state::GL33;
pub use self::state::StateQueryError;
