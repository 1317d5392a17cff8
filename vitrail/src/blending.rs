//! Blending-related types.
//!
//! Given two pixels *src* and *dst* – source and destination – blending combines them with two
//! factors – *srcK* and *dstK* – and an equation. *src* is the pixel being computed, and *dst* is
//! the pixel already stored in the framebuffer.
//!
//! OpenGL blends the RGB and alpha channels separately, so a state table carries one [`Equation`]
//! and one pair of [`Factor`]s for each.

/// Blending equation. Used to state how blending factors and pixel data should be blended.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Equation {
  /// `blended = src * srcK + dst * dstK`
  Additive,
  /// `blended = src * srcK - dst * dstK`
  Subtract,
  /// Because subtracting is not commutative, `ReverseSubtract` represents:
  ///
  /// > `blended = dst * dstK - src * srcK`
  ReverseSubtract,
  /// `blended = min(src, dst)`
  Min,
  /// `blended = max(src, dst)`
  Max,
}

/// Blending factors. Pixel data are multiplied by these factors to achieve several effects driven
/// by *blending equations*.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Factor {
  /// `1 * color`
  One,
  /// `0 * color = 0`
  Zero,
  /// `src * color`
  SrcColor,
  /// `(1 - src) * color`
  SrcColorComplement,
  /// `dst * color`
  DestColor,
  /// `(1 - dst) * color`
  DestColorComplement,
  /// `srcA * color`
  SrcAlpha,
  /// `(1 - srcA) * color`
  SrcAlphaComplement,
  /// `dstA * color`
  DstAlpha,
  /// `(1 - dstA) * color`
  DstAlphaComplement,
  /// `min(srcA, 1 - dstA) * color`, with `1` for the alpha channel.
  SrcAlphaSaturate,
  /// `constant * color`, where `constant` is the blend color.
  ConstantColor,
  /// `(1 - constant) * color`
  ConstantColorComplement,
  /// `constantA * color`
  ConstantAlpha,
  /// `(1 - constantA) * color`
  ConstantAlphaComplement,
}
