//! Implementation hints.
//!
//! Hints let the application trade quality against speed for operations the OpenGL implementation
//! is free to perform either way.

/// Operations that accept a hint.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum HintTarget {
  /// Quality of filtering when generating mipmap images.
  GenerateMipmap,
}

/// The preference expressed by a hint.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum HintMode {
  /// Pick the most efficient option.
  Fastest,
  /// Pick the highest quality option.
  Nicest,
  /// No preference.
  DontCare,
}
