//! Tracked graphics state.
//!
//! A [`StateTable`] is a snapshot of the global OpenGL render state that affects drawing. State
//! items are divided into two broad categories: *capabilities* and *values*. Capabilities are
//! Boolean flags toggled with `glEnable` / `glDisable`; values are every other global state item,
//! arranged into meaningful groups that map one-to-one onto the OpenGL calls that set them.
//!
//! Each item stores its current value and an *is-set* flag. An item that was never set still
//! reads back its documented OpenGL default; the flag only records that the owner explicitly
//! assigned it since construction or since the last reset. The flags are what make a table
//! diffable: [`crate::update::update_from_state_table`] only looks at groups whose flag is set,
//! and [`StateTable::merge_values_from`] only pulls groups whose flag is set in a test table.
//!
//! A default-constructed table holds the documented OpenGL defaults with every flag cleared. The
//! viewport and scissor box defaults depend on the window size passed to [`StateTable::new`];
//! they are the only construction-parameterized items.

use crate::blending::{Equation, Factor};
use crate::depth_stencil::{Comparison, StencilOp};
use crate::face_culling::{FaceCullingMode, FaceCullingOrder};
use crate::hint::{HintMode, HintTarget};
use crate::region::Region;
use std::fmt;

/// Boolean render-state items toggled with `glEnable` / `glDisable`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Capability {
  /// Corresponds to `GL_BLEND`.
  Blend,
  /// Corresponds to `GL_CLIP_DISTANCE0`.
  ClipDistance0,
  /// Corresponds to `GL_CLIP_DISTANCE1`.
  ClipDistance1,
  /// Corresponds to `GL_CLIP_DISTANCE2`.
  ClipDistance2,
  /// Corresponds to `GL_CLIP_DISTANCE3`.
  ClipDistance3,
  /// Corresponds to `GL_CLIP_DISTANCE4`.
  ClipDistance4,
  /// Corresponds to `GL_CLIP_DISTANCE5`.
  ClipDistance5,
  /// Corresponds to `GL_CLIP_DISTANCE6`.
  ClipDistance6,
  /// Corresponds to `GL_CLIP_DISTANCE7`.
  ClipDistance7,
  /// Corresponds to `GL_CULL_FACE`.
  CullFace,
  /// Corresponds to `GL_DEBUG_OUTPUT_SYNCHRONOUS`.
  DebugOutputSynchronous,
  /// Corresponds to `GL_DEPTH_TEST`.
  DepthTest,
  /// Corresponds to `GL_DITHER`. Enabled by default.
  Dither,
  /// Corresponds to `GL_MULTISAMPLE`. Enabled by default.
  Multisample,
  /// Corresponds to `GL_POLYGON_OFFSET_FILL`.
  PolygonOffsetFill,
  /// Corresponds to `GL_RASTERIZER_DISCARD`.
  RasterizerDiscard,
  /// Corresponds to `GL_SAMPLE_ALPHA_TO_COVERAGE`.
  SampleAlphaToCoverage,
  /// Corresponds to `GL_SAMPLE_COVERAGE`.
  SampleCoverage,
  /// Corresponds to `GL_SAMPLE_SHADING`.
  SampleShading,
  /// Corresponds to `GL_SCISSOR_TEST`.
  ScissorTest,
  /// Corresponds to `GL_STENCIL_TEST`.
  StencilTest,
}

impl Capability {
  /// Number of capabilities.
  pub const COUNT: usize = 21;

  /// Every capability, in declaration order.
  pub const ALL: [Capability; Self::COUNT] = [
    Capability::Blend,
    Capability::ClipDistance0,
    Capability::ClipDistance1,
    Capability::ClipDistance2,
    Capability::ClipDistance3,
    Capability::ClipDistance4,
    Capability::ClipDistance5,
    Capability::ClipDistance6,
    Capability::ClipDistance7,
    Capability::CullFace,
    Capability::DebugOutputSynchronous,
    Capability::DepthTest,
    Capability::Dither,
    Capability::Multisample,
    Capability::PolygonOffsetFill,
    Capability::RasterizerDiscard,
    Capability::SampleAlphaToCoverage,
    Capability::SampleCoverage,
    Capability::SampleShading,
    Capability::ScissorTest,
    Capability::StencilTest,
  ];

  /// Whether the capability is enabled in a freshly created OpenGL context.
  pub fn default_enabled(self) -> bool {
    matches!(self, Capability::Dither | Capability::Multisample)
  }

  /// The display name of the capability, e.g. `"PolygonOffsetFill"`.
  pub fn name(self) -> &'static str {
    match self {
      Capability::Blend => "Blend",
      Capability::ClipDistance0 => "ClipDistance0",
      Capability::ClipDistance1 => "ClipDistance1",
      Capability::ClipDistance2 => "ClipDistance2",
      Capability::ClipDistance3 => "ClipDistance3",
      Capability::ClipDistance4 => "ClipDistance4",
      Capability::ClipDistance5 => "ClipDistance5",
      Capability::ClipDistance6 => "ClipDistance6",
      Capability::ClipDistance7 => "ClipDistance7",
      Capability::CullFace => "CullFace",
      Capability::DebugOutputSynchronous => "DebugOutputSynchronous",
      Capability::DepthTest => "DepthTest",
      Capability::Dither => "Dither",
      Capability::Multisample => "Multisample",
      Capability::PolygonOffsetFill => "PolygonOffsetFill",
      Capability::RasterizerDiscard => "RasterizerDiscard",
      Capability::SampleAlphaToCoverage => "SampleAlphaToCoverage",
      Capability::SampleCoverage => "SampleCoverage",
      Capability::SampleShading => "SampleShading",
      Capability::ScissorTest => "ScissorTest",
      Capability::StencilTest => "StencilTest",
    }
  }

  fn bit(self) -> u32 {
    1 << self as u32
  }
}

impl fmt::Display for Capability {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// Multi-field state groups. Each variant may cover several values that are passed in unison to a
/// single OpenGL call; setting any sub-field marks the whole group.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum StateValue {
  /// The constant blend color.
  BlendColor,
  /// The RGB and alpha blend equations.
  BlendEquations,
  /// The RGB and alpha source / destination blend factors.
  BlendFunctions,
  /// The color buffers are cleared to this color.
  ClearColor,
  /// The depth buffer is cleared to this value.
  ClearDepth,
  /// The stencil buffer is cleared to this value.
  ClearStencil,
  /// Per-channel color write masks.
  ColorWriteMasks,
  /// Which faces are culled when culling is enabled.
  CullFaceMode,
  /// Which winding order is considered front-facing.
  FrontFaceOrder,
  /// Default inner tessellation levels used without a tessellation control shader.
  DefaultInnerTessellationLevel,
  /// Default outer tessellation levels used without a tessellation control shader.
  DefaultOuterTessellationLevel,
  /// The depth test comparison.
  DepthFunction,
  /// The range depth values are mapped to.
  DepthRange,
  /// Whether depth values are written.
  DepthWriteMask,
  /// Implementation hints.
  Hints,
  /// Width of rasterized lines.
  LineWidth,
  /// Minimum fraction of samples the fragment shader runs for.
  MinSampleShading,
  /// Polygon offset factor and units.
  PolygonOffset,
  /// Sample coverage value and inversion flag.
  SampleCoverage,
  /// The scissor box.
  ScissorBox,
  /// Front and back stencil functions, references and masks.
  StencilFunctions,
  /// Front and back stencil operations.
  StencilOperations,
  /// Front and back stencil write masks.
  StencilWriteMasks,
  /// The viewport rectangle.
  Viewport,
}

impl StateValue {
  /// Number of value groups.
  pub const COUNT: usize = 24;

  /// Every value group, in declaration order.
  pub const ALL: [StateValue; Self::COUNT] = [
    StateValue::BlendColor,
    StateValue::BlendEquations,
    StateValue::BlendFunctions,
    StateValue::ClearColor,
    StateValue::ClearDepth,
    StateValue::ClearStencil,
    StateValue::ColorWriteMasks,
    StateValue::CullFaceMode,
    StateValue::FrontFaceOrder,
    StateValue::DefaultInnerTessellationLevel,
    StateValue::DefaultOuterTessellationLevel,
    StateValue::DepthFunction,
    StateValue::DepthRange,
    StateValue::DepthWriteMask,
    StateValue::Hints,
    StateValue::LineWidth,
    StateValue::MinSampleShading,
    StateValue::PolygonOffset,
    StateValue::SampleCoverage,
    StateValue::ScissorBox,
    StateValue::StencilFunctions,
    StateValue::StencilOperations,
    StateValue::StencilWriteMasks,
    StateValue::Viewport,
  ];

  /// Whether the group is one of the clear values, which ride a separate code path
  /// ([`crate::update::clear_from_state_table`]) with its own ordering relative to draws.
  pub fn is_clear_value(self) -> bool {
    matches!(
      self,
      StateValue::ClearColor | StateValue::ClearDepth | StateValue::ClearStencil
    )
  }

  /// The display name of the group, e.g. `"ScissorBox"`.
  pub fn name(self) -> &'static str {
    match self {
      StateValue::BlendColor => "BlendColor",
      StateValue::BlendEquations => "BlendEquations",
      StateValue::BlendFunctions => "BlendFunctions",
      StateValue::ClearColor => "ClearColor",
      StateValue::ClearDepth => "ClearDepth",
      StateValue::ClearStencil => "ClearStencil",
      StateValue::ColorWriteMasks => "ColorWriteMasks",
      StateValue::CullFaceMode => "CullFaceMode",
      StateValue::FrontFaceOrder => "FrontFaceOrder",
      StateValue::DefaultInnerTessellationLevel => "DefaultInnerTessellationLevel",
      StateValue::DefaultOuterTessellationLevel => "DefaultOuterTessellationLevel",
      StateValue::DepthFunction => "DepthFunction",
      StateValue::DepthRange => "DepthRange",
      StateValue::DepthWriteMask => "DepthWriteMask",
      StateValue::Hints => "Hints",
      StateValue::LineWidth => "LineWidth",
      StateValue::MinSampleShading => "MinSampleShading",
      StateValue::PolygonOffset => "PolygonOffset",
      StateValue::SampleCoverage => "SampleCoverage",
      StateValue::ScissorBox => "ScissorBox",
      StateValue::StencilFunctions => "StencilFunctions",
      StateValue::StencilOperations => "StencilOperations",
      StateValue::StencilWriteMasks => "StencilWriteMasks",
      StateValue::Viewport => "Viewport",
    }
  }

  fn bit(self) -> u32 {
    1 << self as u32
  }
}

impl fmt::Display for StateValue {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// All tracked fields of a table, separate from the construction parameters so that a pristine
/// instance can be built once and copied wholesale on reset.
#[derive(Clone, Debug, PartialEq)]
struct Data {
  // Bit per capability: current Boolean value, then explicitly-written flags.
  capabilities: u32,
  capabilities_set: u32,

  // One bit per value group, not per sub-field.
  values_set: u32,

  // When true, diffing emits every set item even if it matches the cached value.
  enforced: bool,

  // Blending state.
  blend_color: [f32; 4],
  rgb_blend_equation: Equation,
  alpha_blend_equation: Equation,
  rgb_blend_src_factor: Factor,
  rgb_blend_dst_factor: Factor,
  alpha_blend_src_factor: Factor,
  alpha_blend_dst_factor: Factor,

  // Clear state.
  clear_color: [f32; 4],
  clear_depth: f32,
  clear_stencil: i32,

  // Color state. Red, green, blue, alpha.
  color_write_masks: [bool; 4],

  // Face culling state.
  cull_face_mode: FaceCullingMode,
  front_face_order: FaceCullingOrder,

  // Default tessellation levels.
  inner_tess_level: [f32; 2],
  outer_tess_level: [f32; 4],

  // Depth buffer state.
  depth_function: Comparison,
  depth_range: [f32; 2],
  depth_write_mask: bool,

  // Hint state.
  generate_mipmap_hint: HintMode,

  // Rasterization state.
  line_width: f32,
  polygon_offset_factor: f32,
  polygon_offset_units: f32,

  // Multisampling state.
  sample_coverage_value: f32,
  sample_coverage_inverted: bool,
  min_sample_shading: f32,

  // Scissoring state.
  scissor_box: Region,

  // Stenciling state.
  front_stencil_function: Comparison,
  back_stencil_function: Comparison,
  front_stencil_reference: i32,
  back_stencil_reference: i32,
  front_stencil_mask: u32,
  back_stencil_mask: u32,
  front_stencil_fail_op: StencilOp,
  front_stencil_depth_fail_op: StencilOp,
  front_stencil_pass_op: StencilOp,
  back_stencil_fail_op: StencilOp,
  back_stencil_depth_fail_op: StencilOp,
  back_stencil_pass_op: StencilOp,
  front_stencil_write_mask: u32,
  back_stencil_write_mask: u32,

  // Viewport state.
  viewport: Region,
}

impl Data {
  /// The single source of truth for documented OpenGL defaults. Both [`StateTable::reset`] and
  /// [`StateTable::reset_value`] copy out of an instance built here, so the two cannot drift.
  fn with_defaults(width: i32, height: i32) -> Self {
    let mut capabilities = 0;
    for cap in Capability::ALL {
      if cap.default_enabled() {
        capabilities |= cap.bit();
      }
    }

    Data {
      capabilities,
      capabilities_set: 0,
      values_set: 0,
      enforced: false,
      blend_color: [0., 0., 0., 0.],
      rgb_blend_equation: Equation::Additive,
      alpha_blend_equation: Equation::Additive,
      rgb_blend_src_factor: Factor::One,
      rgb_blend_dst_factor: Factor::Zero,
      alpha_blend_src_factor: Factor::One,
      alpha_blend_dst_factor: Factor::Zero,
      clear_color: [0., 0., 0., 0.],
      clear_depth: 1.,
      clear_stencil: 0,
      color_write_masks: [true; 4],
      cull_face_mode: FaceCullingMode::Back,
      front_face_order: FaceCullingOrder::CCW,
      inner_tess_level: [1., 1.],
      outer_tess_level: [1., 1., 1., 1.],
      depth_function: Comparison::Less,
      depth_range: [0., 1.],
      depth_write_mask: true,
      generate_mipmap_hint: HintMode::DontCare,
      line_width: 1.,
      polygon_offset_factor: 0.,
      polygon_offset_units: 0.,
      sample_coverage_value: 1.,
      sample_coverage_inverted: false,
      min_sample_shading: 0.,
      scissor_box: Region::new(0, 0, width, height),
      front_stencil_function: Comparison::Always,
      back_stencil_function: Comparison::Always,
      front_stencil_reference: 0,
      back_stencil_reference: 0,
      front_stencil_mask: !0,
      back_stencil_mask: !0,
      front_stencil_fail_op: StencilOp::Keep,
      front_stencil_depth_fail_op: StencilOp::Keep,
      front_stencil_pass_op: StencilOp::Keep,
      back_stencil_fail_op: StencilOp::Keep,
      back_stencil_depth_fail_op: StencilOp::Keep,
      back_stencil_pass_op: StencilOp::Keep,
      front_stencil_write_mask: !0,
      back_stencil_write_mask: !0,
      viewport: Region::new(0, 0, width, height),
    }
  }

  /// Copy one value group’s fields from `from` into `self`, leaving every other field alone.
  ///
  /// This is the data-driven backbone shared by merging and per-group resets.
  fn copy_value_group(&mut self, from: &Data, value: StateValue) {
    match value {
      StateValue::BlendColor => self.blend_color = from.blend_color,

      StateValue::BlendEquations => {
        self.rgb_blend_equation = from.rgb_blend_equation;
        self.alpha_blend_equation = from.alpha_blend_equation;
      }

      StateValue::BlendFunctions => {
        self.rgb_blend_src_factor = from.rgb_blend_src_factor;
        self.rgb_blend_dst_factor = from.rgb_blend_dst_factor;
        self.alpha_blend_src_factor = from.alpha_blend_src_factor;
        self.alpha_blend_dst_factor = from.alpha_blend_dst_factor;
      }

      StateValue::ClearColor => self.clear_color = from.clear_color,

      StateValue::ClearDepth => self.clear_depth = from.clear_depth,

      StateValue::ClearStencil => self.clear_stencil = from.clear_stencil,

      StateValue::ColorWriteMasks => self.color_write_masks = from.color_write_masks,

      StateValue::CullFaceMode => self.cull_face_mode = from.cull_face_mode,

      StateValue::FrontFaceOrder => self.front_face_order = from.front_face_order,

      StateValue::DefaultInnerTessellationLevel => self.inner_tess_level = from.inner_tess_level,

      StateValue::DefaultOuterTessellationLevel => self.outer_tess_level = from.outer_tess_level,

      StateValue::DepthFunction => self.depth_function = from.depth_function,

      StateValue::DepthRange => self.depth_range = from.depth_range,

      StateValue::DepthWriteMask => self.depth_write_mask = from.depth_write_mask,

      StateValue::Hints => self.generate_mipmap_hint = from.generate_mipmap_hint,

      StateValue::LineWidth => self.line_width = from.line_width,

      StateValue::MinSampleShading => self.min_sample_shading = from.min_sample_shading,

      StateValue::PolygonOffset => {
        self.polygon_offset_factor = from.polygon_offset_factor;
        self.polygon_offset_units = from.polygon_offset_units;
      }

      StateValue::SampleCoverage => {
        self.sample_coverage_value = from.sample_coverage_value;
        self.sample_coverage_inverted = from.sample_coverage_inverted;
      }

      StateValue::ScissorBox => self.scissor_box = from.scissor_box,

      StateValue::StencilFunctions => {
        self.front_stencil_function = from.front_stencil_function;
        self.back_stencil_function = from.back_stencil_function;
        self.front_stencil_reference = from.front_stencil_reference;
        self.back_stencil_reference = from.back_stencil_reference;
        self.front_stencil_mask = from.front_stencil_mask;
        self.back_stencil_mask = from.back_stencil_mask;
      }

      StateValue::StencilOperations => {
        self.front_stencil_fail_op = from.front_stencil_fail_op;
        self.front_stencil_depth_fail_op = from.front_stencil_depth_fail_op;
        self.front_stencil_pass_op = from.front_stencil_pass_op;
        self.back_stencil_fail_op = from.back_stencil_fail_op;
        self.back_stencil_depth_fail_op = from.back_stencil_depth_fail_op;
        self.back_stencil_pass_op = from.back_stencil_pass_op;
      }

      StateValue::StencilWriteMasks => {
        self.front_stencil_write_mask = from.front_stencil_write_mask;
        self.back_stencil_write_mask = from.back_stencil_write_mask;
      }

      StateValue::Viewport => self.viewport = from.viewport,
    }
  }

  /// Whether one value group’s fields compare equal between `self` and `other`.
  fn value_group_eq(&self, other: &Data, value: StateValue) -> bool {
    match value {
      StateValue::BlendColor => self.blend_color == other.blend_color,

      StateValue::BlendEquations => {
        self.rgb_blend_equation == other.rgb_blend_equation
          && self.alpha_blend_equation == other.alpha_blend_equation
      }

      StateValue::BlendFunctions => {
        self.rgb_blend_src_factor == other.rgb_blend_src_factor
          && self.rgb_blend_dst_factor == other.rgb_blend_dst_factor
          && self.alpha_blend_src_factor == other.alpha_blend_src_factor
          && self.alpha_blend_dst_factor == other.alpha_blend_dst_factor
      }

      StateValue::ClearColor => self.clear_color == other.clear_color,

      StateValue::ClearDepth => self.clear_depth == other.clear_depth,

      StateValue::ClearStencil => self.clear_stencil == other.clear_stencil,

      StateValue::ColorWriteMasks => self.color_write_masks == other.color_write_masks,

      StateValue::CullFaceMode => self.cull_face_mode == other.cull_face_mode,

      StateValue::FrontFaceOrder => self.front_face_order == other.front_face_order,

      StateValue::DefaultInnerTessellationLevel => self.inner_tess_level == other.inner_tess_level,

      StateValue::DefaultOuterTessellationLevel => self.outer_tess_level == other.outer_tess_level,

      StateValue::DepthFunction => self.depth_function == other.depth_function,

      StateValue::DepthRange => self.depth_range == other.depth_range,

      StateValue::DepthWriteMask => self.depth_write_mask == other.depth_write_mask,

      StateValue::Hints => self.generate_mipmap_hint == other.generate_mipmap_hint,

      StateValue::LineWidth => self.line_width == other.line_width,

      StateValue::MinSampleShading => self.min_sample_shading == other.min_sample_shading,

      StateValue::PolygonOffset => {
        self.polygon_offset_factor == other.polygon_offset_factor
          && self.polygon_offset_units == other.polygon_offset_units
      }

      StateValue::SampleCoverage => {
        self.sample_coverage_value == other.sample_coverage_value
          && self.sample_coverage_inverted == other.sample_coverage_inverted
      }

      StateValue::ScissorBox => self.scissor_box == other.scissor_box,

      StateValue::StencilFunctions => {
        self.front_stencil_function == other.front_stencil_function
          && self.back_stencil_function == other.back_stencil_function
          && self.front_stencil_reference == other.front_stencil_reference
          && self.back_stencil_reference == other.back_stencil_reference
          && self.front_stencil_mask == other.front_stencil_mask
          && self.back_stencil_mask == other.back_stencil_mask
      }

      StateValue::StencilOperations => {
        self.front_stencil_fail_op == other.front_stencil_fail_op
          && self.front_stencil_depth_fail_op == other.front_stencil_depth_fail_op
          && self.front_stencil_pass_op == other.front_stencil_pass_op
          && self.back_stencil_fail_op == other.back_stencil_fail_op
          && self.back_stencil_depth_fail_op == other.back_stencil_depth_fail_op
          && self.back_stencil_pass_op == other.back_stencil_pass_op
      }

      StateValue::StencilWriteMasks => {
        self.front_stencil_write_mask == other.front_stencil_write_mask
          && self.back_stencil_write_mask == other.back_stencil_write_mask
      }

      StateValue::Viewport => self.viewport == other.viewport,
    }
  }
}

/// A snapshot of the OpenGL render state, with per-item tracking of what has been explicitly set.
///
/// This is a plain value type: copies are deep, there is no internal synchronization, and a given
/// instance is expected to be owned by a single thread (typically the render thread).
#[derive(Clone, Debug, PartialEq)]
pub struct StateTable {
  default_width: i32,
  default_height: i32,
  data: Data,
}

impl StateTable {
  /// Number of capabilities.
  pub const CAPABILITY_COUNT: usize = Capability::COUNT;

  /// Number of value groups.
  pub const VALUE_COUNT: usize = StateValue::COUNT;

  /// Create a table holding all documented defaults, with the viewport and scissor box sized to
  /// the given window dimensions.
  pub fn new(default_width: i32, default_height: i32) -> Self {
    StateTable {
      default_width,
      default_height,
      data: Data::with_defaults(default_width, default_height),
    }
  }

  /// Restore every item to its default value and clear all is-set flags.
  ///
  /// Calling this twice in a row is the same as calling it once.
  pub fn reset(&mut self) {
    self.data = Data::with_defaults(self.default_width, self.default_height);
  }

  /// Clear the is-set flags of every capability and value, leaving the values themselves alone.
  pub fn reset_set_state(&mut self) {
    self.data.capabilities_set = 0;
    self.data.values_set = 0;
  }

  /// Mark every capability and value as explicitly set.
  pub fn mark_all_set(&mut self) {
    self.data.capabilities_set = (1 << Capability::COUNT) - 1;
    self.data.values_set = (1 << StateValue::COUNT) - 1;
  }

  /// Copy all state, including the default width and height, from another table.
  pub fn copy_from(&mut self, other: &StateTable) {
    self.default_width = other.default_width;
    self.default_height = other.default_height;
    self.data = other.data.clone();
  }

  // ---------------------------------------------------------------------------------------------
  // Capability items.

  /// Set whether a capability is enabled, marking it as explicitly set.
  pub fn enable(&mut self, capability: Capability, enabled: bool) {
    if enabled {
      self.data.capabilities |= capability.bit();
    } else {
      self.data.capabilities &= !capability.bit();
    }

    self.data.capabilities_set |= capability.bit();
  }

  /// Whether a capability is currently enabled.
  pub fn is_enabled(&self, capability: Capability) -> bool {
    self.data.capabilities & capability.bit() != 0
  }

  /// Number of capabilities currently enabled.
  pub fn enabled_count(&self) -> usize {
    self.data.capabilities.count_ones() as usize
  }

  /// Restore a capability to its default and clear its is-set flag.
  pub fn reset_capability(&mut self, capability: Capability) {
    if capability.default_enabled() {
      self.data.capabilities |= capability.bit();
    } else {
      self.data.capabilities &= !capability.bit();
    }

    self.data.capabilities_set &= !capability.bit();
  }

  /// Whether a capability was explicitly set since construction or its last reset.
  pub fn is_capability_set(&self, capability: Capability) -> bool {
    self.data.capabilities_set & capability.bit() != 0
  }

  /// Number of capabilities explicitly set.
  pub fn set_capability_count(&self) -> usize {
    self.data.capabilities_set.count_ones() as usize
  }

  /// Whether two tables agree on the value of every capability, set or not.
  pub fn capabilities_same(st0: &StateTable, st1: &StateTable) -> bool {
    st0.data.capabilities == st1.data.capabilities
  }

  // ---------------------------------------------------------------------------------------------
  // Generic value items.

  /// Restore a value group to its construction-time default and clear its is-set flag.
  ///
  /// No other group is affected.
  pub fn reset_value(&mut self, value: StateValue) {
    let defaults = Data::with_defaults(self.default_width, self.default_height);
    self.data.copy_value_group(&defaults, value);
    self.data.values_set &= !value.bit();
  }

  /// Whether a value group was explicitly set since construction or its last reset.
  pub fn is_value_set(&self, value: StateValue) -> bool {
    self.data.values_set & value.bit() != 0
  }

  /// Number of value groups explicitly set.
  pub fn set_value_count(&self) -> usize {
    self.data.values_set.count_ones() as usize
  }

  pub(crate) fn value_group_eq(&self, other: &StateTable, value: StateValue) -> bool {
    self.data.value_group_eq(&other.data, value)
  }

  /// Copy one value group from `other` and mark it set.
  pub(crate) fn merge_value(&mut self, other: &StateTable, value: StateValue) {
    self.data.copy_value_group(&other.data, value);
    self.data.values_set |= value.bit();
  }

  // ---------------------------------------------------------------------------------------------
  // Enforcement.

  /// Set whether diffing should emit every set item even when it matches the cached state.
  ///
  /// Enforcement is the escape hatch for resynchronizing after something outside the tracker
  /// mutated the real GL state.
  pub fn set_enforced(&mut self, enforced: bool) {
    self.data.enforced = enforced;
  }

  /// Whether enforcement is enabled.
  pub fn is_enforced(&self) -> bool {
    self.data.enforced
  }

  // ---------------------------------------------------------------------------------------------
  // Merging.

  /// Merge all state set in `other` into this table, gated by the is-set flags of
  /// `state_to_test`.
  ///
  /// A group changes in `self` only if it is marked set in `state_to_test`, in which case its
  /// fields are copied from `other` and its flag is set here. This supports both partial copies
  /// and undoing the changes a table made:
  ///
  /// ```
  /// # use vitrail::state::StateTable;
  /// # let (mut current, new_state) = (StateTable::new(0, 0), StateTable::new(0, 0));
  /// let mut saved = StateTable::new(0, 0);
  /// saved.copy_from(&current); // Save the current state.
  /// current.merge_values_from(&new_state, &new_state); // Make some changes.
  /// // ...
  /// current.merge_values_from(&saved, &new_state); // Restore, with correct is-set flags.
  /// ```
  pub fn merge_values_from(&mut self, other: &StateTable, state_to_test: &StateTable) {
    self.merge_non_clear_values_from(other, state_to_test);

    if state_to_test.set_value_count() > 0 {
      for value in StateValue::ALL {
        if value.is_clear_value() && state_to_test.is_value_set(value) {
          self.data.copy_value_group(&other.data, value);
          self.data.values_set |= value.bit();
        }
      }
    }
  }

  /// The same as [`StateTable::merge_values_from`], except that the clear values (clear color,
  /// clear depth, clear stencil) are not merged.
  pub fn merge_non_clear_values_from(&mut self, other: &StateTable, state_to_test: &StateTable) {
    if state_to_test.set_capability_count() > 0
      && (!Self::capabilities_same(self, other) || state_to_test.is_enforced())
    {
      for cap in Capability::ALL {
        if state_to_test.is_capability_set(cap) {
          self.enable(cap, other.is_enabled(cap));
        }
      }
    }

    if state_to_test.set_value_count() > 0 {
      for value in StateValue::ALL {
        if !value.is_clear_value() && state_to_test.is_value_set(value) {
          self.data.copy_value_group(&other.data, value);
          self.data.values_set |= value.bit();
        }
      }
    }
  }

  // ---------------------------------------------------------------------------------------------
  // Blending state.

  /// Set the blend color. The default is `[0, 0, 0, 0]`.
  pub fn set_blend_color(&mut self, color: [f32; 4]) {
    self.data.blend_color = color;
    self.data.values_set |= StateValue::BlendColor.bit();
  }

  /// The blend color.
  pub fn blend_color(&self) -> [f32; 4] {
    self.data.blend_color
  }

  /// Set the RGB and alpha blend equations. The default is [`Equation::Additive`] for both.
  pub fn set_blend_equations(&mut self, rgb: Equation, alpha: Equation) {
    self.data.rgb_blend_equation = rgb;
    self.data.alpha_blend_equation = alpha;
    self.data.values_set |= StateValue::BlendEquations.bit();
  }

  /// The RGB blend equation.
  pub fn rgb_blend_equation(&self) -> Equation {
    self.data.rgb_blend_equation
  }

  /// The alpha blend equation.
  pub fn alpha_blend_equation(&self) -> Equation {
    self.data.alpha_blend_equation
  }

  /// Set the source and destination factors of the RGB and alpha blend functions. The default is
  /// [`Factor::One`] for sources and [`Factor::Zero`] for destinations.
  pub fn set_blend_functions(
    &mut self,
    rgb_src: Factor,
    rgb_dst: Factor,
    alpha_src: Factor,
    alpha_dst: Factor,
  ) {
    self.data.rgb_blend_src_factor = rgb_src;
    self.data.rgb_blend_dst_factor = rgb_dst;
    self.data.alpha_blend_src_factor = alpha_src;
    self.data.alpha_blend_dst_factor = alpha_dst;
    self.data.values_set |= StateValue::BlendFunctions.bit();
  }

  /// The RGB blend source factor.
  pub fn rgb_blend_src_factor(&self) -> Factor {
    self.data.rgb_blend_src_factor
  }

  /// The RGB blend destination factor.
  pub fn rgb_blend_dst_factor(&self) -> Factor {
    self.data.rgb_blend_dst_factor
  }

  /// The alpha blend source factor.
  pub fn alpha_blend_src_factor(&self) -> Factor {
    self.data.alpha_blend_src_factor
  }

  /// The alpha blend destination factor.
  pub fn alpha_blend_dst_factor(&self) -> Factor {
    self.data.alpha_blend_dst_factor
  }

  // ---------------------------------------------------------------------------------------------
  // Clear state.

  /// Set the color to clear color buffers to. The default is `[0, 0, 0, 0]`.
  pub fn set_clear_color(&mut self, color: [f32; 4]) {
    self.data.clear_color = color;
    self.data.values_set |= StateValue::ClearColor.bit();
  }

  /// The color buffers are cleared to this color.
  pub fn clear_color(&self) -> [f32; 4] {
    self.data.clear_color
  }

  /// Set the value to clear depth buffers to. The default is `1.0`.
  pub fn set_clear_depth(&mut self, depth: f32) {
    self.data.clear_depth = depth;
    self.data.values_set |= StateValue::ClearDepth.bit();
  }

  /// The depth buffer is cleared to this value.
  pub fn clear_depth(&self) -> f32 {
    self.data.clear_depth
  }

  /// Set the value to clear stencil buffers to. The default is `0`.
  pub fn set_clear_stencil(&mut self, stencil: i32) {
    self.data.clear_stencil = stencil;
    self.data.values_set |= StateValue::ClearStencil.bit();
  }

  /// The stencil buffer is cleared to this value.
  pub fn clear_stencil(&self) -> i32 {
    self.data.clear_stencil
  }

  // ---------------------------------------------------------------------------------------------
  // Color state.

  /// Set the per-channel masks used when writing colors. The default is `true` for every channel.
  pub fn set_color_write_masks(&mut self, red: bool, green: bool, blue: bool, alpha: bool) {
    self.data.color_write_masks = [red, green, blue, alpha];
    self.data.values_set |= StateValue::ColorWriteMasks.bit();
  }

  /// The per-channel color write masks, in RGBA order.
  pub fn color_write_masks(&self) -> [bool; 4] {
    self.data.color_write_masks
  }

  // ---------------------------------------------------------------------------------------------
  // Face culling state.

  /// Set which faces are culled when culling is enabled. The default is [`FaceCullingMode::Back`].
  pub fn set_cull_face_mode(&mut self, mode: FaceCullingMode) {
    self.data.cull_face_mode = mode;
    self.data.values_set |= StateValue::CullFaceMode.bit();
  }

  /// Which faces are culled when culling is enabled.
  pub fn cull_face_mode(&self) -> FaceCullingMode {
    self.data.cull_face_mode
  }

  /// Set which winding order is considered front-facing. The default is [`FaceCullingOrder::CCW`].
  pub fn set_front_face_order(&mut self, order: FaceCullingOrder) {
    self.data.front_face_order = order;
    self.data.values_set |= StateValue::FrontFaceOrder.bit();
  }

  /// Which winding order is considered front-facing.
  pub fn front_face_order(&self) -> FaceCullingOrder {
    self.data.front_face_order
  }

  // ---------------------------------------------------------------------------------------------
  // Tessellation state.

  /// Set the default inner tessellation levels. The default is `[1, 1]`.
  pub fn set_default_inner_tess_level(&mut self, levels: [f32; 2]) {
    self.data.inner_tess_level = levels;
    self.data.values_set |= StateValue::DefaultInnerTessellationLevel.bit();
  }

  /// The default inner tessellation levels.
  pub fn default_inner_tess_level(&self) -> [f32; 2] {
    self.data.inner_tess_level
  }

  /// Set the default outer tessellation levels. The default is `[1, 1, 1, 1]`.
  pub fn set_default_outer_tess_level(&mut self, levels: [f32; 4]) {
    self.data.outer_tess_level = levels;
    self.data.values_set |= StateValue::DefaultOuterTessellationLevel.bit();
  }

  /// The default outer tessellation levels.
  pub fn default_outer_tess_level(&self) -> [f32; 4] {
    self.data.outer_tess_level
  }

  // ---------------------------------------------------------------------------------------------
  // Depth buffer state.

  /// Set the comparison used for depth testing when enabled. The default is [`Comparison::Less`].
  pub fn set_depth_function(&mut self, func: Comparison) {
    self.data.depth_function = func;
    self.data.values_set |= StateValue::DepthFunction.bit();
  }

  /// The comparison used for depth testing when enabled.
  pub fn depth_function(&self) -> Comparison {
    self.data.depth_function
  }

  /// Set the range depth values are mapped to, as `[near, far]`. The default is `[0, 1]`.
  pub fn set_depth_range(&mut self, range: [f32; 2]) {
    self.data.depth_range = range;
    self.data.values_set |= StateValue::DepthRange.bit();
  }

  /// The range depth values are mapped to, as `[near, far]`.
  pub fn depth_range(&self) -> [f32; 2] {
    self.data.depth_range
  }

  /// Set whether depth values are written. The default is `true`.
  pub fn set_depth_write_mask(&mut self, mask: bool) {
    self.data.depth_write_mask = mask;
    self.data.values_set |= StateValue::DepthWriteMask.bit();
  }

  /// Whether depth values are written.
  pub fn depth_write_mask(&self) -> bool {
    self.data.depth_write_mask
  }

  // ---------------------------------------------------------------------------------------------
  // Hint state.

  /// Set a hint value. The default is [`HintMode::DontCare`] for every hint.
  pub fn set_hint(&mut self, target: HintTarget, mode: HintMode) {
    match target {
      HintTarget::GenerateMipmap => self.data.generate_mipmap_hint = mode,
    }

    self.data.values_set |= StateValue::Hints.bit();
  }

  /// The current hint value for a target.
  pub fn hint(&self, target: HintTarget) -> HintMode {
    match target {
      HintTarget::GenerateMipmap => self.data.generate_mipmap_hint,
    }
  }

  // ---------------------------------------------------------------------------------------------
  // Rasterization state.

  /// Set the width of rasterized lines, in pixels. The default is `1.0`.
  pub fn set_line_width(&mut self, width: f32) {
    self.data.line_width = width;
    self.data.values_set |= StateValue::LineWidth.bit();
  }

  /// The width of rasterized lines, in pixels.
  pub fn line_width(&self) -> f32 {
    self.data.line_width
  }

  /// Set the polygon offset factor and units. The default is `0.0` for both.
  pub fn set_polygon_offset(&mut self, factor: f32, units: f32) {
    self.data.polygon_offset_factor = factor;
    self.data.polygon_offset_units = units;
    self.data.values_set |= StateValue::PolygonOffset.bit();
  }

  /// The polygon offset factor.
  pub fn polygon_offset_factor(&self) -> f32 {
    self.data.polygon_offset_factor
  }

  /// The polygon offset units.
  pub fn polygon_offset_units(&self) -> f32 {
    self.data.polygon_offset_units
  }

  // ---------------------------------------------------------------------------------------------
  // Multisampling state.

  /// Set the sample coverage value and inversion flag. The default is `1.0` and `false`.
  pub fn set_sample_coverage(&mut self, value: f32, inverted: bool) {
    self.data.sample_coverage_value = value;
    self.data.sample_coverage_inverted = inverted;
    self.data.values_set |= StateValue::SampleCoverage.bit();
  }

  /// The sample coverage value.
  pub fn sample_coverage_value(&self) -> f32 {
    self.data.sample_coverage_value
  }

  /// Whether the sample coverage is inverted.
  pub fn is_sample_coverage_inverted(&self) -> bool {
    self.data.sample_coverage_inverted
  }

  /// Set the minimum fraction of samples the fragment shader runs for. `0.0` means once per
  /// pixel, `1.0` means once per sample. The default is `0.0`.
  pub fn set_min_sample_shading(&mut self, fraction: f32) {
    self.data.min_sample_shading = fraction;
    self.data.values_set |= StateValue::MinSampleShading.bit();
  }

  /// The minimum fraction of samples the fragment shader runs for.
  pub fn min_sample_shading(&self) -> f32 {
    self.data.min_sample_shading
  }

  // ---------------------------------------------------------------------------------------------
  // Scissoring state.

  /// Set the scissor box. The default covers the window dimensions passed at construction.
  pub fn set_scissor_box(&mut self, box_: Region) {
    self.data.scissor_box = box_;
    self.data.values_set |= StateValue::ScissorBox.bit();
  }

  /// The scissor box.
  pub fn scissor_box(&self) -> Region {
    self.data.scissor_box
  }

  // ---------------------------------------------------------------------------------------------
  // Stenciling state.

  /// Set the comparison, reference value and mask used for stenciling, per face. The default is
  /// [`Comparison::Always`], reference `0` and an all-ones mask for both faces.
  pub fn set_stencil_functions(
    &mut self,
    front_function: Comparison,
    front_reference: i32,
    front_mask: u32,
    back_function: Comparison,
    back_reference: i32,
    back_mask: u32,
  ) {
    self.data.front_stencil_function = front_function;
    self.data.front_stencil_reference = front_reference;
    self.data.front_stencil_mask = front_mask;
    self.data.back_stencil_function = back_function;
    self.data.back_stencil_reference = back_reference;
    self.data.back_stencil_mask = back_mask;
    self.data.values_set |= StateValue::StencilFunctions.bit();
  }

  /// The front-face stencil comparison.
  pub fn front_stencil_function(&self) -> Comparison {
    self.data.front_stencil_function
  }

  /// The back-face stencil comparison.
  pub fn back_stencil_function(&self) -> Comparison {
    self.data.back_stencil_function
  }

  /// The front-face stencil reference value.
  pub fn front_stencil_reference(&self) -> i32 {
    self.data.front_stencil_reference
  }

  /// The back-face stencil reference value.
  pub fn back_stencil_reference(&self) -> i32 {
    self.data.back_stencil_reference
  }

  /// The front-face stencil mask.
  pub fn front_stencil_mask(&self) -> u32 {
    self.data.front_stencil_mask
  }

  /// The back-face stencil mask.
  pub fn back_stencil_mask(&self) -> u32 {
    self.data.back_stencil_mask
  }

  /// Set the stencil operations taken on test outcomes, per face. The default is
  /// [`StencilOp::Keep`] for all six.
  pub fn set_stencil_operations(
    &mut self,
    front_fail: StencilOp,
    front_depth_fail: StencilOp,
    front_pass: StencilOp,
    back_fail: StencilOp,
    back_depth_fail: StencilOp,
    back_pass: StencilOp,
  ) {
    self.data.front_stencil_fail_op = front_fail;
    self.data.front_stencil_depth_fail_op = front_depth_fail;
    self.data.front_stencil_pass_op = front_pass;
    self.data.back_stencil_fail_op = back_fail;
    self.data.back_stencil_depth_fail_op = back_depth_fail;
    self.data.back_stencil_pass_op = back_pass;
    self.data.values_set |= StateValue::StencilOperations.bit();
  }

  /// The operation taken when the front-face stencil test fails.
  pub fn front_stencil_fail_op(&self) -> StencilOp {
    self.data.front_stencil_fail_op
  }

  /// The operation taken when the front-face stencil test passes but the depth test fails.
  pub fn front_stencil_depth_fail_op(&self) -> StencilOp {
    self.data.front_stencil_depth_fail_op
  }

  /// The operation taken when both front-face tests pass.
  pub fn front_stencil_pass_op(&self) -> StencilOp {
    self.data.front_stencil_pass_op
  }

  /// The operation taken when the back-face stencil test fails.
  pub fn back_stencil_fail_op(&self) -> StencilOp {
    self.data.back_stencil_fail_op
  }

  /// The operation taken when the back-face stencil test passes but the depth test fails.
  pub fn back_stencil_depth_fail_op(&self) -> StencilOp {
    self.data.back_stencil_depth_fail_op
  }

  /// The operation taken when both back-face tests pass.
  pub fn back_stencil_pass_op(&self) -> StencilOp {
    self.data.back_stencil_pass_op
  }

  /// Set the masks selecting which stencil bits are written, per face. The default is all ones
  /// for both.
  pub fn set_stencil_write_masks(&mut self, front_mask: u32, back_mask: u32) {
    self.data.front_stencil_write_mask = front_mask;
    self.data.back_stencil_write_mask = back_mask;
    self.data.values_set |= StateValue::StencilWriteMasks.bit();
  }

  /// The front-face stencil write mask.
  pub fn front_stencil_write_mask(&self) -> u32 {
    self.data.front_stencil_write_mask
  }

  /// The back-face stencil write mask.
  pub fn back_stencil_write_mask(&self) -> u32 {
    self.data.back_stencil_write_mask
  }

  // ---------------------------------------------------------------------------------------------
  // Viewport state.

  /// Set the viewport rectangle. The default covers the window dimensions passed at construction.
  pub fn set_viewport(&mut self, rect: Region) {
    self.data.viewport = rect;
    self.data.values_set |= StateValue::Viewport.bit();
  }

  /// The viewport rectangle.
  pub fn viewport(&self) -> Region {
    self.data.viewport
  }
}

impl Default for StateTable {
  /// A table with zero-sized viewport and scissor defaults.
  fn default() -> Self {
    StateTable::new(0, 0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  // A non-default sample assignment for each value group, so tests can exercise the groups
  // generically.
  fn apply_sample(st: &mut StateTable, value: StateValue) {
    match value {
      StateValue::BlendColor => st.set_blend_color([0.1, 0.2, 0.3, 0.4]),
      StateValue::BlendEquations => st.set_blend_equations(Equation::Min, Equation::Max),
      StateValue::BlendFunctions => st.set_blend_functions(
        Factor::SrcAlpha,
        Factor::SrcAlphaComplement,
        Factor::ConstantColor,
        Factor::DstAlpha,
      ),
      StateValue::ClearColor => st.set_clear_color([0.5, 0.5, 0.5, 1.]),
      StateValue::ClearDepth => st.set_clear_depth(0.25),
      StateValue::ClearStencil => st.set_clear_stencil(27),
      StateValue::ColorWriteMasks => st.set_color_write_masks(false, true, false, true),
      StateValue::CullFaceMode => st.set_cull_face_mode(FaceCullingMode::Both),
      StateValue::FrontFaceOrder => st.set_front_face_order(FaceCullingOrder::CW),
      StateValue::DefaultInnerTessellationLevel => st.set_default_inner_tess_level([4., 2.]),
      StateValue::DefaultOuterTessellationLevel => {
        st.set_default_outer_tess_level([4., 3., 2., 1.])
      }
      StateValue::DepthFunction => st.set_depth_function(Comparison::GreaterOrEqual),
      StateValue::DepthRange => st.set_depth_range([0.2, 0.7]),
      StateValue::DepthWriteMask => st.set_depth_write_mask(false),
      StateValue::Hints => st.set_hint(HintTarget::GenerateMipmap, HintMode::Nicest),
      StateValue::LineWidth => st.set_line_width(2.5),
      StateValue::MinSampleShading => st.set_min_sample_shading(0.5),
      StateValue::PolygonOffset => st.set_polygon_offset(1.5, 2.),
      StateValue::SampleCoverage => st.set_sample_coverage(0.25, true),
      StateValue::ScissorBox => st.set_scissor_box(Region::new(1, 2, 30, 40)),
      StateValue::StencilFunctions => st.set_stencil_functions(
        Comparison::Less,
        1,
        0x0f,
        Comparison::Greater,
        2,
        0xf0,
      ),
      StateValue::StencilOperations => st.set_stencil_operations(
        StencilOp::Invert,
        StencilOp::Increment,
        StencilOp::Replace,
        StencilOp::Zero,
        StencilOp::DecrementWrap,
        StencilOp::Keep,
      ),
      StateValue::StencilWriteMasks => st.set_stencil_write_masks(0x12, 0x34),
      StateValue::Viewport => st.set_viewport(Region::new(5, 6, 70, 80)),
    }
  }

  #[test]
  fn defaults() {
    let st = StateTable::new(300, 200);

    assert_eq!(st.enabled_count(), 2);
    assert!(st.is_enabled(Capability::Dither));
    assert!(st.is_enabled(Capability::Multisample));
    assert!(!st.is_enabled(Capability::Blend));
    assert_eq!(st.set_capability_count(), 0);
    assert_eq!(st.set_value_count(), 0);
    assert!(!st.is_enforced());

    assert_eq!(st.blend_color(), [0., 0., 0., 0.]);
    assert_eq!(st.rgb_blend_equation(), Equation::Additive);
    assert_eq!(st.alpha_blend_equation(), Equation::Additive);
    assert_eq!(st.rgb_blend_src_factor(), Factor::One);
    assert_eq!(st.rgb_blend_dst_factor(), Factor::Zero);
    assert_eq!(st.clear_color(), [0., 0., 0., 0.]);
    assert_eq!(st.clear_depth(), 1.);
    assert_eq!(st.clear_stencil(), 0);
    assert_eq!(st.color_write_masks(), [true; 4]);
    assert_eq!(st.cull_face_mode(), FaceCullingMode::Back);
    assert_eq!(st.front_face_order(), FaceCullingOrder::CCW);
    assert_eq!(st.depth_function(), Comparison::Less);
    assert_eq!(st.depth_range(), [0., 1.]);
    assert!(st.depth_write_mask());
    assert_eq!(st.hint(HintTarget::GenerateMipmap), HintMode::DontCare);
    assert_eq!(st.line_width(), 1.);
    assert_eq!(st.min_sample_shading(), 0.);
    assert_eq!(st.sample_coverage_value(), 1.);
    assert!(!st.is_sample_coverage_inverted());
    assert_eq!(st.front_stencil_function(), Comparison::Always);
    assert_eq!(st.front_stencil_mask(), !0);
    assert_eq!(st.front_stencil_write_mask(), !0);
    assert_eq!(st.front_stencil_pass_op(), StencilOp::Keep);

    // The only construction-parameterized defaults.
    assert_eq!(st.viewport(), Region::new(0, 0, 300, 200));
    assert_eq!(st.scissor_box(), Region::new(0, 0, 300, 200));
  }

  #[test]
  fn enable_and_reset_every_capability() {
    let mut st = StateTable::default();

    for cap in Capability::ALL {
      let flipped = !cap.default_enabled();

      st.enable(cap, flipped);
      assert_eq!(st.is_enabled(cap), flipped, "{}", cap);
      assert!(st.is_capability_set(cap), "{}", cap);

      st.reset_capability(cap);
      assert_eq!(st.is_enabled(cap), cap.default_enabled(), "{}", cap);
      assert!(!st.is_capability_set(cap), "{}", cap);
    }
  }

  #[test]
  fn capability_counts() {
    let mut st = StateTable::default();

    st.enable(Capability::Blend, true);
    st.enable(Capability::DepthTest, true);
    st.enable(Capability::Dither, false);

    // Dither was on by default and got disabled; blend and depth test joined multisample.
    assert_eq!(st.enabled_count(), 3);
    assert_eq!(st.set_capability_count(), 3);
  }

  #[test]
  fn set_get_and_reset_every_value_group() {
    let pristine = StateTable::new(300, 200);

    for value in StateValue::ALL {
      let mut st = pristine.clone();

      apply_sample(&mut st, value);
      assert!(st.is_value_set(value), "{}", value);
      assert_ne!(st, pristine, "{}", value);

      // Only that group changed.
      for other in StateValue::ALL {
        if other != value {
          assert!(
            st.value_group_eq(&pristine, other),
            "{} leaked into {}",
            value,
            other
          );
        }
      }

      // Resetting the group restores the construction-time state exactly.
      st.reset_value(value);
      assert_eq!(st, pristine, "{}", value);
    }
  }

  #[test]
  fn value_getters_round_trip() {
    let mut st = StateTable::default();

    st.set_blend_functions(
      Factor::SrcColor,
      Factor::DestColorComplement,
      Factor::ConstantAlpha,
      Factor::Zero,
    );
    assert_eq!(st.rgb_blend_src_factor(), Factor::SrcColor);
    assert_eq!(st.rgb_blend_dst_factor(), Factor::DestColorComplement);
    assert_eq!(st.alpha_blend_src_factor(), Factor::ConstantAlpha);
    assert_eq!(st.alpha_blend_dst_factor(), Factor::Zero);

    st.set_stencil_functions(Comparison::Equal, 7, 0xff, Comparison::NotEqual, 9, 0x7f);
    assert_eq!(st.front_stencil_function(), Comparison::Equal);
    assert_eq!(st.front_stencil_reference(), 7);
    assert_eq!(st.front_stencil_mask(), 0xff);
    assert_eq!(st.back_stencil_function(), Comparison::NotEqual);
    assert_eq!(st.back_stencil_reference(), 9);
    assert_eq!(st.back_stencil_mask(), 0x7f);

    st.set_stencil_operations(
      StencilOp::Replace,
      StencilOp::Invert,
      StencilOp::IncrementWrap,
      StencilOp::Decrement,
      StencilOp::Zero,
      StencilOp::Keep,
    );
    assert_eq!(st.front_stencil_fail_op(), StencilOp::Replace);
    assert_eq!(st.front_stencil_depth_fail_op(), StencilOp::Invert);
    assert_eq!(st.front_stencil_pass_op(), StencilOp::IncrementWrap);
    assert_eq!(st.back_stencil_fail_op(), StencilOp::Decrement);
    assert_eq!(st.back_stencil_depth_fail_op(), StencilOp::Zero);
    assert_eq!(st.back_stencil_pass_op(), StencilOp::Keep);
  }

  #[test]
  fn reset_is_idempotent() {
    let mut st = StateTable::new(640, 480);

    st.enable(Capability::StencilTest, true);
    st.set_line_width(3.);
    st.set_enforced(true);

    st.reset();
    let once = st.clone();
    st.reset();

    assert_eq!(st, once);
    assert_eq!(st, StateTable::new(640, 480));
  }

  #[test]
  fn reset_set_state_and_mark_all_set() {
    let mut st = StateTable::default();

    st.mark_all_set();
    assert_eq!(st.set_capability_count(), StateTable::CAPABILITY_COUNT);
    assert_eq!(st.set_value_count(), StateTable::VALUE_COUNT);

    st.reset_set_state();
    assert_eq!(st.set_capability_count(), 0);
    assert_eq!(st.set_value_count(), 0);

    // Values themselves were left alone.
    st.set_line_width(4.);
    st.reset_set_state();
    assert_eq!(st.line_width(), 4.);
  }

  #[test]
  fn copy_from_copies_everything() {
    let mut src = StateTable::new(800, 600);
    src.enable(Capability::Blend, true);
    src.set_blend_color([1., 0.5, 0.25, 1.]);
    src.set_enforced(true);

    let mut dst = StateTable::new(10, 10);
    dst.copy_from(&src);

    assert_eq!(dst, src);

    // The default dimensions came along: resetting both yields the same table.
    dst.reset();
    src.reset();
    assert_eq!(dst, src);
  }

  #[test]
  fn merge_copies_exactly_the_tested_groups() {
    let mut dst = StateTable::default();
    let mut other = StateTable::default();
    let mut test = StateTable::default();

    other.set_line_width(5.);
    other.set_clear_color([1., 0., 0., 1.]);
    other.set_depth_range([0.1, 0.9]);

    // Only line width is gated in; depth range must not come along.
    test.set_line_width(0.);
    dst.merge_values_from(&other, &test);

    assert_eq!(dst.line_width(), 5.);
    assert!(dst.is_value_set(StateValue::LineWidth));
    assert_eq!(dst.depth_range(), [0., 1.]);
    assert!(!dst.is_value_set(StateValue::DepthRange));
    assert!(!dst.is_value_set(StateValue::ClearColor));

    // Clear values merge through the full merge only.
    test.set_clear_color([0.; 4]);
    dst.merge_values_from(&other, &test);
    assert_eq!(dst.clear_color(), [1., 0., 0., 1.]);
    assert!(dst.is_value_set(StateValue::ClearColor));
  }

  #[test]
  fn merge_non_clear_excludes_clear_values() {
    let mut dst = StateTable::default();
    let mut other = StateTable::default();
    let mut test = StateTable::default();

    other.set_clear_depth(0.5);
    test.set_clear_depth(0.);

    dst.merge_non_clear_values_from(&other, &test);
    assert_eq!(dst.clear_depth(), 1.);
    assert!(!dst.is_value_set(StateValue::ClearDepth));

    dst.merge_values_from(&other, &test);
    assert_eq!(dst.clear_depth(), 0.5);
    assert!(dst.is_value_set(StateValue::ClearDepth));
  }

  #[test]
  fn merge_capabilities() {
    let mut dst = StateTable::default();
    let mut other = StateTable::default();
    let mut test = StateTable::default();

    other.enable(Capability::Blend, true);
    other.enable(Capability::CullFace, true);
    test.enable(Capability::Blend, true);

    dst.merge_values_from(&other, &test);

    assert!(dst.is_enabled(Capability::Blend));
    assert!(dst.is_capability_set(Capability::Blend));
    // Cull face was not in the test table.
    assert!(!dst.is_enabled(Capability::CullFace));
    assert!(!dst.is_capability_set(Capability::CullFace));
  }

  #[test]
  fn merge_capabilities_skipped_when_same_unless_enforced() {
    let mut dst = StateTable::default();
    let mut other = StateTable::default();
    let mut test = StateTable::default();

    // dst and other agree on every capability value, so nothing merges.
    other.enable(Capability::Dither, true);
    test.enable(Capability::Dither, true);
    dst.merge_values_from(&other, &test);
    assert!(!dst.is_capability_set(Capability::Dither));

    // Enforcement overrides the sameness short-circuit.
    test.set_enforced(true);
    dst.merge_values_from(&other, &test);
    assert!(dst.is_capability_set(Capability::Dither));
  }

  #[test]
  fn merge_save_restore_round_trip() {
    let mut current = StateTable::new(300, 200);
    current.set_line_width(2.);

    let mut saved = StateTable::default();
    saved.copy_from(&current);

    let mut new_state = StateTable::new(300, 200);
    new_state.set_line_width(8.);
    new_state.set_scissor_box(Region::new(0, 0, 5, 5));

    current.merge_values_from(&new_state, &new_state);
    assert_eq!(current.line_width(), 8.);
    assert_eq!(current.scissor_box(), Region::new(0, 0, 5, 5));

    current.merge_values_from(&saved, &new_state);
    assert_eq!(current.line_width(), 2.);
    assert_eq!(current.scissor_box(), Region::new(0, 0, 300, 200));
  }

  #[test]
  fn display_names() {
    assert_eq!(Capability::PolygonOffsetFill.to_string(), "PolygonOffsetFill");
    assert_eq!(StateValue::ScissorBox.to_string(), "ScissorBox");
  }
}
