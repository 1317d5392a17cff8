//! Backend interfaces.
//!
//! [`StateSink`] is the outgoing half: the diff engine in [`crate::update`] funnels all state
//! mutations through it, one method per OpenGL call it may emit. [`StateQuery`] is the incoming
//! half, used to seed a [`crate::state::StateTable`] from the live state of a context. A real
//! backend (such as the one in the `vitrail-gl` crate) implements both over an actual OpenGL
//! context; tests implement [`StateSink`] with a recorder to assert on the exact call stream.

use crate::blending::{Equation, Factor};
use crate::depth_stencil::{Comparison, StencilFace, StencilOp};
use crate::face_culling::{FaceCullingMode, FaceCullingOrder};
use crate::hint::{HintMode, HintTarget};
use crate::region::Region;
use std::ops::{BitOr, BitOrAssign};

/// A bitwise combination of buffer kinds to clear, mirroring the `GL_*_BUFFER_BIT` mask passed to
/// `glClear`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ClearMask(u8);

impl ClearMask {
  /// Clear the color buffers.
  pub const COLOR: ClearMask = ClearMask(1);
  /// Clear the depth buffer.
  pub const DEPTH: ClearMask = ClearMask(1 << 1);
  /// Clear the stencil buffer.
  pub const STENCIL: ClearMask = ClearMask(1 << 2);

  /// A mask clearing nothing.
  pub fn empty() -> Self {
    ClearMask(0)
  }

  /// Whether the mask clears nothing.
  pub fn is_empty(self) -> bool {
    self.0 == 0
  }

  /// Whether every buffer kind in `other` is also in `self`.
  pub fn contains(self, other: ClearMask) -> bool {
    self.0 & other.0 == other.0
  }
}

impl BitOr for ClearMask {
  type Output = ClearMask;

  fn bitor(self, rhs: Self) -> Self {
    ClearMask(self.0 | rhs.0)
  }
}

impl BitOrAssign for ClearMask {
  fn bitor_assign(&mut self, rhs: Self) {
    self.0 |= rhs.0;
  }
}

/// The outgoing interface state updates are written through.
///
/// Each method corresponds to one OpenGL state-setting call and takes already-typed arguments;
/// translating them to `GLenum` values and raw calls is the implementor’s business. Methods are
/// only invoked by the update functions in [`crate::update`], which guarantee minimality: a
/// method is called only when the corresponding state group actually needs to change (or is
/// enforced).
pub trait StateSink {
  /// Enable a capability, as `glEnable`.
  fn enable(&mut self, capability: crate::state::Capability);

  /// Disable a capability, as `glDisable`.
  fn disable(&mut self, capability: crate::state::Capability);

  /// Whether the implementation supports a capability at all. Unsupported capabilities are
  /// silently skipped by the update functions instead of being enabled or disabled.
  ///
  /// The default accepts everything.
  fn is_capability_supported(&self, _capability: crate::state::Capability) -> bool {
    true
  }

  /// Set the constant blend color, as `glBlendColor`.
  fn blend_color(&mut self, red: f32, green: f32, blue: f32, alpha: f32);

  /// Set the blend equations, as `glBlendEquationSeparate`.
  fn blend_equation_separate(&mut self, rgb: Equation, alpha: Equation);

  /// Set the blend factors, as `glBlendFuncSeparate`.
  fn blend_func_separate(
    &mut self,
    rgb_src: Factor,
    rgb_dst: Factor,
    alpha_src: Factor,
    alpha_dst: Factor,
  );

  /// Set the color write masks, as `glColorMask`.
  fn color_mask(&mut self, red: bool, green: bool, blue: bool, alpha: bool);

  /// Set which faces to cull, as `glCullFace`.
  fn cull_face(&mut self, mode: FaceCullingMode);

  /// Set the front-facing winding order, as `glFrontFace`.
  fn front_face(&mut self, order: FaceCullingOrder);

  /// Set the depth comparison, as `glDepthFunc`.
  fn depth_func(&mut self, func: Comparison);

  /// Set the depth range, as `glDepthRangef`.
  fn depth_range(&mut self, near: f32, far: f32);

  /// Set the depth write mask, as `glDepthMask`.
  fn depth_mask(&mut self, mask: bool);

  /// Set an implementation hint, as `glHint`.
  fn hint(&mut self, target: HintTarget, mode: HintMode);

  /// Set the line width, as `glLineWidth`.
  fn line_width(&mut self, width: f32);

  /// Set the minimum sample shading fraction, as `glMinSampleShading`.
  fn min_sample_shading(&mut self, fraction: f32);

  /// Set the polygon offset, as `glPolygonOffset`.
  fn polygon_offset(&mut self, factor: f32, units: f32);

  /// Set the sample coverage, as `glSampleCoverage`.
  fn sample_coverage(&mut self, value: f32, inverted: bool);

  /// Set the scissor box, as `glScissor`.
  fn scissor(&mut self, x: i32, y: i32, width: i32, height: i32);

  /// Set one face’s stencil function, as `glStencilFuncSeparate`.
  fn stencil_func_separate(&mut self, face: StencilFace, func: Comparison, reference: i32, mask: u32);

  /// Set one face’s stencil operations, as `glStencilOpSeparate`.
  fn stencil_op_separate(
    &mut self,
    face: StencilFace,
    stencil_fail: StencilOp,
    depth_fail: StencilOp,
    depth_pass: StencilOp,
  );

  /// Set one face’s stencil write mask, as `glStencilMaskSeparate`.
  fn stencil_mask_separate(&mut self, face: StencilFace, mask: u32);

  /// Set the viewport, as `glViewport`.
  fn viewport(&mut self, x: i32, y: i32, width: i32, height: i32);

  /// Set the default inner tessellation levels, as `glPatchParameterfv`.
  fn default_inner_tess_level(&mut self, levels: [f32; 2]);

  /// Set the default outer tessellation levels, as `glPatchParameterfv`.
  fn default_outer_tess_level(&mut self, levels: [f32; 4]);

  /// Set the clear color, as `glClearColor`.
  fn clear_color(&mut self, red: f32, green: f32, blue: f32, alpha: f32);

  /// Set the clear depth, as `glClearDepth`.
  fn clear_depth(&mut self, depth: f32);

  /// Set the clear stencil, as `glClearStencil`.
  fn clear_stencil(&mut self, stencil: i32);

  /// Clear the selected buffers, as `glClear`. Never called with an empty mask.
  fn clear(&mut self, mask: ClearMask);
}

/// The incoming interface a table can be seeded from.
///
/// One getter per tracked state item. Getters are infallible: an implementation that cannot read
/// an item back (or reads an unrecognized value) returns the documented default instead, logging
/// the problem through whatever channel it has.
pub trait StateQuery {
  /// Whether a capability is enabled.
  fn is_enabled(&self, capability: crate::state::Capability) -> bool;

  /// Whether the implementation supports a capability at all. Unsupported capabilities are left
  /// untouched when seeding a table.
  ///
  /// The default accepts everything.
  fn is_capability_supported(&self, _capability: crate::state::Capability) -> bool {
    true
  }

  /// The constant blend color.
  fn blend_color(&self) -> [f32; 4];

  /// The RGB and alpha blend equations.
  fn blend_equations(&self) -> (Equation, Equation);

  /// The blend factors, as (RGB source, RGB destination, alpha source, alpha destination).
  fn blend_functions(&self) -> (Factor, Factor, Factor, Factor);

  /// The color buffers are cleared to this color.
  fn clear_color(&self) -> [f32; 4];

  /// The depth buffer is cleared to this value.
  fn clear_depth(&self) -> f32;

  /// The stencil buffer is cleared to this value.
  fn clear_stencil(&self) -> i32;

  /// The per-channel color write masks, in RGBA order.
  fn color_write_masks(&self) -> [bool; 4];

  /// Which faces are culled when culling is enabled.
  fn cull_face_mode(&self) -> FaceCullingMode;

  /// Which winding order is considered front-facing.
  fn front_face_order(&self) -> FaceCullingOrder;

  /// The default inner tessellation levels.
  fn default_inner_tess_level(&self) -> [f32; 2];

  /// The default outer tessellation levels.
  fn default_outer_tess_level(&self) -> [f32; 4];

  /// The depth comparison.
  fn depth_function(&self) -> Comparison;

  /// The depth range, as `[near, far]`.
  fn depth_range(&self) -> [f32; 2];

  /// Whether depth values are written.
  fn depth_write_mask(&self) -> bool;

  /// The hint value for a target.
  fn hint(&self, target: HintTarget) -> HintMode;

  /// The line width.
  fn line_width(&self) -> f32;

  /// The minimum sample shading fraction.
  fn min_sample_shading(&self) -> f32;

  /// The polygon offset, as (factor, units).
  fn polygon_offset(&self) -> (f32, f32);

  /// The sample coverage, as (value, inverted).
  fn sample_coverage(&self) -> (f32, bool);

  /// The scissor box.
  fn scissor_box(&self) -> Region;

  /// One face’s stencil function, as (comparison, reference, mask).
  fn stencil_function(&self, face: StencilFace) -> (Comparison, i32, u32);

  /// One face’s stencil operations, as (stencil fail, depth fail, depth pass).
  fn stencil_operations(&self, face: StencilFace) -> (StencilOp, StencilOp, StencilOp);

  /// One face’s stencil write mask.
  fn stencil_write_mask(&self, face: StencilFace) -> u32;

  /// The viewport rectangle.
  fn viewport(&self) -> Region;
}
