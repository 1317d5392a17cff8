//! Graphics state I/O.

use gl::types::*;
use std::cell::RefCell;
use std::error;
use std::fmt;
use std::marker::PhantomData;

use vitrail::backend::{ClearMask, StateQuery, StateSink};
use vitrail::blending::{Equation, Factor};
use vitrail::depth_stencil::{Comparison, StencilFace, StencilOp};
use vitrail::face_culling::{FaceCullingMode, FaceCullingOrder};
use vitrail::hint::{HintMode, HintTarget};
use vitrail::region::Region;
use vitrail::state::Capability;

// TLS synchronization barrier for `GL33`.
thread_local!(static TLS_ACQUIRE_GFX_STATE: RefCell<Option<()>> = RefCell::new(Some(())));

// Absent from the core-profile bindings; value taken from OpenGL ES.
const GENERATE_MIPMAP_HINT: GLenum = 0x8192;

/// An OpenGL 3.3 backend.
///
/// A single instance may exist per thread, and an OpenGL context must be current on that thread
/// whenever one of the backend trait methods runs. The type is neither [`Send`] nor [`Sync`];
/// like the context it wraps, it stays where it was created.
#[derive(Debug)]
pub struct GL33 {
  _a: PhantomData<*const ()>, // !Send and !Sync
}

impl GL33 {
  /// Create a new OpenGL 3.3 backend.
  ///
  /// The thread must have an OpenGL context current. Fails if a backend already exists on this
  /// thread.
  pub fn new() -> Result<Self, StateQueryError> {
    TLS_ACQUIRE_GFX_STATE.with(|rc| {
      let mut inner = rc.borrow_mut();

      match inner.take() {
        Some(_) => Ok(GL33 { _a: PhantomData }),
        None => Err(StateQueryError::UnavailableGLState),
      }
    })
  }
}

impl Drop for GL33 {
  fn drop(&mut self) {
    TLS_ACQUIRE_GFX_STATE.with(|rc| {
      *rc.borrow_mut() = Some(());
    });
  }
}

/// An error that might happen when acquiring the backend.
#[non_exhaustive]
#[derive(Debug)]
pub enum StateQueryError {
  /// A [`GL33`] backend already exists on this thread.
  UnavailableGLState,
}

impl fmt::Display for StateQueryError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      StateQueryError::UnavailableGLState => write!(f, "unavailable graphics state"),
    }
  }
}

impl error::Error for StateQueryError {}

impl StateSink for GL33 {
  fn enable(&mut self, capability: Capability) {
    unsafe { gl::Enable(from_capability(capability)) };
  }

  fn disable(&mut self, capability: Capability) {
    unsafe { gl::Disable(from_capability(capability)) };
  }

  fn blend_color(&mut self, red: f32, green: f32, blue: f32, alpha: f32) {
    unsafe { gl::BlendColor(red, green, blue, alpha) };
  }

  fn blend_equation_separate(&mut self, rgb: Equation, alpha: Equation) {
    unsafe { gl::BlendEquationSeparate(from_blending_equation(rgb), from_blending_equation(alpha)) };
  }

  fn blend_func_separate(
    &mut self,
    rgb_src: Factor,
    rgb_dst: Factor,
    alpha_src: Factor,
    alpha_dst: Factor,
  ) {
    unsafe {
      gl::BlendFuncSeparate(
        from_blending_factor(rgb_src),
        from_blending_factor(rgb_dst),
        from_blending_factor(alpha_src),
        from_blending_factor(alpha_dst),
      )
    };
  }

  fn color_mask(&mut self, red: bool, green: bool, blue: bool, alpha: bool) {
    unsafe {
      gl::ColorMask(
        red as GLboolean,
        green as GLboolean,
        blue as GLboolean,
        alpha as GLboolean,
      )
    };
  }

  fn cull_face(&mut self, mode: FaceCullingMode) {
    unsafe { gl::CullFace(from_face_culling_mode(mode)) };
  }

  fn front_face(&mut self, order: FaceCullingOrder) {
    unsafe { gl::FrontFace(from_face_culling_order(order)) };
  }

  fn depth_func(&mut self, func: Comparison) {
    unsafe { gl::DepthFunc(from_comparison(func)) };
  }

  fn depth_range(&mut self, near: f32, far: f32) {
    unsafe { gl::DepthRange(near as GLdouble, far as GLdouble) };
  }

  fn depth_mask(&mut self, mask: bool) {
    unsafe { gl::DepthMask(mask as GLboolean) };
  }

  fn hint(&mut self, target: HintTarget, mode: HintMode) {
    unsafe { gl::Hint(from_hint_target(target), from_hint_mode(mode)) };
  }

  fn line_width(&mut self, width: f32) {
    unsafe { gl::LineWidth(width) };
  }

  fn min_sample_shading(&mut self, fraction: f32) {
    unsafe { gl::MinSampleShading(fraction) };
  }

  fn polygon_offset(&mut self, factor: f32, units: f32) {
    unsafe { gl::PolygonOffset(factor, units) };
  }

  fn sample_coverage(&mut self, value: f32, inverted: bool) {
    unsafe { gl::SampleCoverage(value, inverted as GLboolean) };
  }

  fn scissor(&mut self, x: i32, y: i32, width: i32, height: i32) {
    unsafe { gl::Scissor(x, y, width, height) };
  }

  fn stencil_func_separate(&mut self, face: StencilFace, func: Comparison, reference: i32, mask: u32) {
    unsafe {
      gl::StencilFuncSeparate(from_stencil_face(face), from_comparison(func), reference, mask)
    };
  }

  fn stencil_op_separate(
    &mut self,
    face: StencilFace,
    stencil_fail: StencilOp,
    depth_fail: StencilOp,
    depth_pass: StencilOp,
  ) {
    unsafe {
      gl::StencilOpSeparate(
        from_stencil_face(face),
        from_stencil_op(stencil_fail),
        from_stencil_op(depth_fail),
        from_stencil_op(depth_pass),
      )
    };
  }

  fn stencil_mask_separate(&mut self, face: StencilFace, mask: u32) {
    unsafe { gl::StencilMaskSeparate(from_stencil_face(face), mask) };
  }

  fn viewport(&mut self, x: i32, y: i32, width: i32, height: i32) {
    unsafe { gl::Viewport(x, y, width, height) };
  }

  fn default_inner_tess_level(&mut self, levels: [f32; 2]) {
    unsafe { gl::PatchParameterfv(gl::PATCH_DEFAULT_INNER_LEVEL, levels.as_ptr()) };
  }

  fn default_outer_tess_level(&mut self, levels: [f32; 4]) {
    unsafe { gl::PatchParameterfv(gl::PATCH_DEFAULT_OUTER_LEVEL, levels.as_ptr()) };
  }

  fn clear_color(&mut self, red: f32, green: f32, blue: f32, alpha: f32) {
    unsafe { gl::ClearColor(red, green, blue, alpha) };
  }

  fn clear_depth(&mut self, depth: f32) {
    unsafe { gl::ClearDepth(depth as GLdouble) };
  }

  fn clear_stencil(&mut self, stencil: i32) {
    unsafe { gl::ClearStencil(stencil) };
  }

  fn clear(&mut self, mask: ClearMask) {
    let mut bits = 0;

    if mask.contains(ClearMask::COLOR) {
      bits |= gl::COLOR_BUFFER_BIT;
    }

    if mask.contains(ClearMask::DEPTH) {
      bits |= gl::DEPTH_BUFFER_BIT;
    }

    if mask.contains(ClearMask::STENCIL) {
      bits |= gl::STENCIL_BUFFER_BIT;
    }

    unsafe { gl::Clear(bits) };
  }
}

impl StateQuery for GL33 {
  fn is_enabled(&self, capability: Capability) -> bool {
    unsafe { gl::IsEnabled(from_capability(capability)) == gl::TRUE }
  }

  fn blend_color(&self) -> [f32; 4] {
    unsafe { get_float_4(gl::BLEND_COLOR) }
  }

  fn blend_equations(&self) -> (Equation, Equation) {
    let rgb = unsafe { get_integer(gl::BLEND_EQUATION_RGB) } as GLenum;
    let alpha = unsafe { get_integer(gl::BLEND_EQUATION_ALPHA) } as GLenum;

    (
      to_blending_equation(rgb).unwrap_or_else(|e| {
        log::error!("unknown blending equation: {}", e);
        Equation::Additive
      }),
      to_blending_equation(alpha).unwrap_or_else(|e| {
        log::error!("unknown blending equation: {}", e);
        Equation::Additive
      }),
    )
  }

  fn blend_functions(&self) -> (Factor, Factor, Factor, Factor) {
    let src_rgb = unsafe { get_integer(gl::BLEND_SRC_RGB) } as GLenum;
    let dst_rgb = unsafe { get_integer(gl::BLEND_DST_RGB) } as GLenum;
    let src_alpha = unsafe { get_integer(gl::BLEND_SRC_ALPHA) } as GLenum;
    let dst_alpha = unsafe { get_integer(gl::BLEND_DST_ALPHA) } as GLenum;

    let src = |factor| {
      to_blending_factor(factor).unwrap_or_else(|e| {
        log::error!("unknown blending source factor: {}", e);
        Factor::One
      })
    };
    let dst = |factor| {
      to_blending_factor(factor).unwrap_or_else(|e| {
        log::error!("unknown blending destination factor: {}", e);
        Factor::Zero
      })
    };

    (src(src_rgb), dst(dst_rgb), src(src_alpha), dst(dst_alpha))
  }

  fn clear_color(&self) -> [f32; 4] {
    unsafe { get_float_4(gl::COLOR_CLEAR_VALUE) }
  }

  fn clear_depth(&self) -> f32 {
    unsafe { get_float(gl::DEPTH_CLEAR_VALUE) }
  }

  fn clear_stencil(&self) -> i32 {
    unsafe { get_integer(gl::STENCIL_CLEAR_VALUE) }
  }

  fn color_write_masks(&self) -> [bool; 4] {
    let mut data: [GLboolean; 4] = [gl::TRUE; 4];
    unsafe { gl::GetBooleanv(gl::COLOR_WRITEMASK, data.as_mut_ptr()) };
    [
      data[0] == gl::TRUE,
      data[1] == gl::TRUE,
      data[2] == gl::TRUE,
      data[3] == gl::TRUE,
    ]
  }

  fn cull_face_mode(&self) -> FaceCullingMode {
    let mode = unsafe { get_integer(gl::CULL_FACE_MODE) } as GLenum;

    match mode {
      gl::FRONT => FaceCullingMode::Front,
      gl::BACK => FaceCullingMode::Back,
      gl::FRONT_AND_BACK => FaceCullingMode::Both,
      _ => {
        log::error!("unknown face culling mode: {}", mode);
        FaceCullingMode::Back
      }
    }
  }

  fn front_face_order(&self) -> FaceCullingOrder {
    let order = unsafe { get_integer(gl::FRONT_FACE) } as GLenum;

    match order {
      gl::CCW => FaceCullingOrder::CCW,
      gl::CW => FaceCullingOrder::CW,
      _ => {
        log::error!("unknown face culling order: {}", order);
        FaceCullingOrder::CCW
      }
    }
  }

  fn default_inner_tess_level(&self) -> [f32; 2] {
    let mut data = [1.; 2];
    unsafe { gl::GetFloatv(gl::PATCH_DEFAULT_INNER_LEVEL, data.as_mut_ptr()) };
    data
  }

  fn default_outer_tess_level(&self) -> [f32; 4] {
    let mut data = [1.; 4];
    unsafe { gl::GetFloatv(gl::PATCH_DEFAULT_OUTER_LEVEL, data.as_mut_ptr()) };
    data
  }

  fn depth_function(&self) -> Comparison {
    let func = unsafe { get_integer(gl::DEPTH_FUNC) } as GLenum;

    to_comparison(func).unwrap_or_else(|e| {
      log::error!("unknown depth comparison: {}", e);
      Comparison::Less
    })
  }

  fn depth_range(&self) -> [f32; 2] {
    let mut data = [0., 1.];
    unsafe { gl::GetFloatv(gl::DEPTH_RANGE, data.as_mut_ptr()) };
    data
  }

  fn depth_write_mask(&self) -> bool {
    let mut data: GLboolean = gl::TRUE;
    unsafe { gl::GetBooleanv(gl::DEPTH_WRITEMASK, &mut data) };
    data == gl::TRUE
  }

  fn hint(&self, target: HintTarget) -> HintMode {
    let mode = unsafe { get_integer(from_hint_target(target)) } as GLenum;

    match mode {
      gl::FASTEST => HintMode::Fastest,
      gl::NICEST => HintMode::Nicest,
      gl::DONT_CARE => HintMode::DontCare,
      _ => {
        log::error!("unknown hint mode: {}", mode);
        HintMode::DontCare
      }
    }
  }

  fn line_width(&self) -> f32 {
    unsafe { get_float(gl::LINE_WIDTH) }
  }

  fn min_sample_shading(&self) -> f32 {
    unsafe { get_float(gl::MIN_SAMPLE_SHADING_VALUE) }
  }

  fn polygon_offset(&self) -> (f32, f32) {
    unsafe {
      (
        get_float(gl::POLYGON_OFFSET_FACTOR),
        get_float(gl::POLYGON_OFFSET_UNITS),
      )
    }
  }

  fn sample_coverage(&self) -> (f32, bool) {
    let value = unsafe { get_float(gl::SAMPLE_COVERAGE_VALUE) };
    let mut inverted: GLboolean = gl::FALSE;
    unsafe { gl::GetBooleanv(gl::SAMPLE_COVERAGE_INVERT, &mut inverted) };
    (value, inverted == gl::TRUE)
  }

  fn scissor_box(&self) -> Region {
    let [x, y, width, height] = unsafe { get_integer_4(gl::SCISSOR_BOX) };
    Region::new(x, y, width, height)
  }

  fn stencil_function(&self, face: StencilFace) -> (Comparison, i32, u32) {
    let (func_pname, ref_pname, mask_pname) = match face {
      StencilFace::Front => (gl::STENCIL_FUNC, gl::STENCIL_REF, gl::STENCIL_VALUE_MASK),
      StencilFace::Back => (
        gl::STENCIL_BACK_FUNC,
        gl::STENCIL_BACK_REF,
        gl::STENCIL_BACK_VALUE_MASK,
      ),
    };

    let func = unsafe { get_integer(func_pname) } as GLenum;
    let func = to_comparison(func).unwrap_or_else(|e| {
      log::error!("unknown stencil comparison: {}", e);
      Comparison::Always
    });
    let reference = unsafe { get_integer(ref_pname) };
    let mask = unsafe { get_integer(mask_pname) } as u32;

    (func, reference, mask)
  }

  fn stencil_operations(&self, face: StencilFace) -> (StencilOp, StencilOp, StencilOp) {
    let (fail_pname, depth_fail_pname, pass_pname) = match face {
      StencilFace::Front => (
        gl::STENCIL_FAIL,
        gl::STENCIL_PASS_DEPTH_FAIL,
        gl::STENCIL_PASS_DEPTH_PASS,
      ),
      StencilFace::Back => (
        gl::STENCIL_BACK_FAIL,
        gl::STENCIL_BACK_PASS_DEPTH_FAIL,
        gl::STENCIL_BACK_PASS_DEPTH_PASS,
      ),
    };

    let op = |pname| {
      let op = unsafe { get_integer(pname) } as GLenum;
      to_stencil_op(op).unwrap_or_else(|e| {
        log::error!("unknown stencil operation: {}", e);
        StencilOp::Keep
      })
    };

    (op(fail_pname), op(depth_fail_pname), op(pass_pname))
  }

  fn stencil_write_mask(&self, face: StencilFace) -> u32 {
    let pname = match face {
      StencilFace::Front => gl::STENCIL_WRITEMASK,
      StencilFace::Back => gl::STENCIL_BACK_WRITEMASK,
    };

    unsafe { get_integer(pname) as u32 }
  }

  fn viewport(&self) -> Region {
    let [x, y, width, height] = unsafe { get_integer_4(gl::VIEWPORT) };
    Region::new(x, y, width, height)
  }
}

unsafe fn get_integer(pname: GLenum) -> GLint {
  let mut data = 0;
  gl::GetIntegerv(pname, &mut data);
  data
}

unsafe fn get_integer_4(pname: GLenum) -> [GLint; 4] {
  let mut data = [0; 4];
  gl::GetIntegerv(pname, data.as_mut_ptr());
  data
}

unsafe fn get_float(pname: GLenum) -> GLfloat {
  let mut data = 0.;
  gl::GetFloatv(pname, &mut data);
  data
}

unsafe fn get_float_4(pname: GLenum) -> [GLfloat; 4] {
  let mut data = [0.; 4];
  gl::GetFloatv(pname, data.as_mut_ptr());
  data
}

#[inline]
fn from_capability(capability: Capability) -> GLenum {
  match capability {
    Capability::Blend => gl::BLEND,
    Capability::ClipDistance0 => gl::CLIP_DISTANCE0,
    Capability::ClipDistance1 => gl::CLIP_DISTANCE1,
    Capability::ClipDistance2 => gl::CLIP_DISTANCE2,
    Capability::ClipDistance3 => gl::CLIP_DISTANCE3,
    Capability::ClipDistance4 => gl::CLIP_DISTANCE4,
    Capability::ClipDistance5 => gl::CLIP_DISTANCE5,
    Capability::ClipDistance6 => gl::CLIP_DISTANCE6,
    Capability::ClipDistance7 => gl::CLIP_DISTANCE7,
    Capability::CullFace => gl::CULL_FACE,
    Capability::DebugOutputSynchronous => gl::DEBUG_OUTPUT_SYNCHRONOUS,
    Capability::DepthTest => gl::DEPTH_TEST,
    Capability::Dither => gl::DITHER,
    Capability::Multisample => gl::MULTISAMPLE,
    Capability::PolygonOffsetFill => gl::POLYGON_OFFSET_FILL,
    Capability::RasterizerDiscard => gl::RASTERIZER_DISCARD,
    Capability::SampleAlphaToCoverage => gl::SAMPLE_ALPHA_TO_COVERAGE,
    Capability::SampleCoverage => gl::SAMPLE_COVERAGE,
    Capability::SampleShading => gl::SAMPLE_SHADING,
    Capability::ScissorTest => gl::SCISSOR_TEST,
    Capability::StencilTest => gl::STENCIL_TEST,
  }
}

#[inline]
fn from_blending_equation(equation: Equation) -> GLenum {
  match equation {
    Equation::Additive => gl::FUNC_ADD,
    Equation::Subtract => gl::FUNC_SUBTRACT,
    Equation::ReverseSubtract => gl::FUNC_REVERSE_SUBTRACT,
    Equation::Min => gl::MIN,
    Equation::Max => gl::MAX,
  }
}

#[inline]
fn to_blending_equation(equation: GLenum) -> Result<Equation, GLenum> {
  match equation {
    gl::FUNC_ADD => Ok(Equation::Additive),
    gl::FUNC_SUBTRACT => Ok(Equation::Subtract),
    gl::FUNC_REVERSE_SUBTRACT => Ok(Equation::ReverseSubtract),
    gl::MIN => Ok(Equation::Min),
    gl::MAX => Ok(Equation::Max),
    _ => Err(equation),
  }
}

#[inline]
fn from_blending_factor(factor: Factor) -> GLenum {
  match factor {
    Factor::One => gl::ONE,
    Factor::Zero => gl::ZERO,
    Factor::SrcColor => gl::SRC_COLOR,
    Factor::SrcColorComplement => gl::ONE_MINUS_SRC_COLOR,
    Factor::DestColor => gl::DST_COLOR,
    Factor::DestColorComplement => gl::ONE_MINUS_DST_COLOR,
    Factor::SrcAlpha => gl::SRC_ALPHA,
    Factor::SrcAlphaComplement => gl::ONE_MINUS_SRC_ALPHA,
    Factor::DstAlpha => gl::DST_ALPHA,
    Factor::DstAlphaComplement => gl::ONE_MINUS_DST_ALPHA,
    Factor::SrcAlphaSaturate => gl::SRC_ALPHA_SATURATE,
    Factor::ConstantColor => gl::CONSTANT_COLOR,
    Factor::ConstantColorComplement => gl::ONE_MINUS_CONSTANT_COLOR,
    Factor::ConstantAlpha => gl::CONSTANT_ALPHA,
    Factor::ConstantAlphaComplement => gl::ONE_MINUS_CONSTANT_ALPHA,
  }
}

#[inline]
fn to_blending_factor(factor: GLenum) -> Result<Factor, GLenum> {
  match factor {
    gl::ONE => Ok(Factor::One),
    gl::ZERO => Ok(Factor::Zero),
    gl::SRC_COLOR => Ok(Factor::SrcColor),
    gl::ONE_MINUS_SRC_COLOR => Ok(Factor::SrcColorComplement),
    gl::DST_COLOR => Ok(Factor::DestColor),
    gl::ONE_MINUS_DST_COLOR => Ok(Factor::DestColorComplement),
    gl::SRC_ALPHA => Ok(Factor::SrcAlpha),
    gl::ONE_MINUS_SRC_ALPHA => Ok(Factor::SrcAlphaComplement),
    gl::DST_ALPHA => Ok(Factor::DstAlpha),
    gl::ONE_MINUS_DST_ALPHA => Ok(Factor::DstAlphaComplement),
    gl::SRC_ALPHA_SATURATE => Ok(Factor::SrcAlphaSaturate),
    gl::CONSTANT_COLOR => Ok(Factor::ConstantColor),
    gl::ONE_MINUS_CONSTANT_COLOR => Ok(Factor::ConstantColorComplement),
    gl::CONSTANT_ALPHA => Ok(Factor::ConstantAlpha),
    gl::ONE_MINUS_CONSTANT_ALPHA => Ok(Factor::ConstantAlphaComplement),
    _ => Err(factor),
  }
}

#[inline]
fn from_comparison(comparison: Comparison) -> GLenum {
  match comparison {
    Comparison::Never => gl::NEVER,
    Comparison::Always => gl::ALWAYS,
    Comparison::Equal => gl::EQUAL,
    Comparison::NotEqual => gl::NOTEQUAL,
    Comparison::Less => gl::LESS,
    Comparison::LessOrEqual => gl::LEQUAL,
    Comparison::Greater => gl::GREATER,
    Comparison::GreaterOrEqual => gl::GEQUAL,
  }
}

#[inline]
fn to_comparison(comparison: GLenum) -> Result<Comparison, GLenum> {
  match comparison {
    gl::NEVER => Ok(Comparison::Never),
    gl::ALWAYS => Ok(Comparison::Always),
    gl::EQUAL => Ok(Comparison::Equal),
    gl::NOTEQUAL => Ok(Comparison::NotEqual),
    gl::LESS => Ok(Comparison::Less),
    gl::LEQUAL => Ok(Comparison::LessOrEqual),
    gl::GREATER => Ok(Comparison::Greater),
    gl::GEQUAL => Ok(Comparison::GreaterOrEqual),
    _ => Err(comparison),
  }
}

#[inline]
fn from_stencil_op(op: StencilOp) -> GLenum {
  match op {
    StencilOp::Keep => gl::KEEP,
    StencilOp::Zero => gl::ZERO,
    StencilOp::Replace => gl::REPLACE,
    StencilOp::Increment => gl::INCR,
    StencilOp::IncrementWrap => gl::INCR_WRAP,
    StencilOp::Decrement => gl::DECR,
    StencilOp::DecrementWrap => gl::DECR_WRAP,
    StencilOp::Invert => gl::INVERT,
  }
}

#[inline]
fn to_stencil_op(op: GLenum) -> Result<StencilOp, GLenum> {
  match op {
    gl::KEEP => Ok(StencilOp::Keep),
    gl::ZERO => Ok(StencilOp::Zero),
    gl::REPLACE => Ok(StencilOp::Replace),
    gl::INCR => Ok(StencilOp::Increment),
    gl::INCR_WRAP => Ok(StencilOp::IncrementWrap),
    gl::DECR => Ok(StencilOp::Decrement),
    gl::DECR_WRAP => Ok(StencilOp::DecrementWrap),
    gl::INVERT => Ok(StencilOp::Invert),
    _ => Err(op),
  }
}

#[inline]
fn from_stencil_face(face: StencilFace) -> GLenum {
  match face {
    StencilFace::Front => gl::FRONT,
    StencilFace::Back => gl::BACK,
  }
}

#[inline]
fn from_face_culling_mode(mode: FaceCullingMode) -> GLenum {
  match mode {
    FaceCullingMode::Front => gl::FRONT,
    FaceCullingMode::Back => gl::BACK,
    FaceCullingMode::Both => gl::FRONT_AND_BACK,
  }
}

#[inline]
fn from_face_culling_order(order: FaceCullingOrder) -> GLenum {
  match order {
    FaceCullingOrder::CW => gl::CW,
    FaceCullingOrder::CCW => gl::CCW,
  }
}

#[inline]
fn from_hint_target(target: HintTarget) -> GLenum {
  match target {
    HintTarget::GenerateMipmap => GENERATE_MIPMAP_HINT,
  }
}

#[inline]
fn from_hint_mode(mode: HintMode) -> GLenum {
  match mode {
    HintMode::Fastest => gl::FASTEST,
    HintMode::Nicest => gl::NICEST,
    HintMode::DontCare => gl::DONT_CARE,
  }
}
