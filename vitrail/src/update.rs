//! Applying tables to a backend.
//!
//! The functions here turn pairs of [`StateTable`]s into a minimal stream of [`StateSink`] calls.
//! The protocol is always the same: a *new* table describes what should hold, a *save* table
//! caches what already holds, and only set items whose values differ (or everything set, under
//! enforcement) are emitted. Whoever owns the save table is responsible for merging the new
//! table into it afterwards, with one exception: items that affect how buffer clears behave are
//! written back into the save table here, so that a following clear sees them.
//!
//! The reverse direction, seeding a table from a live context, goes through [`StateQuery`].

use crate::backend::{ClearMask, StateQuery, StateSink};
use crate::depth_stencil::StencilFace;
use crate::state::{Capability, StateTable, StateValue};

/// Send the state set in `new_state` to `sink`, skipping anything that already holds per
/// `save_state`.
///
/// Clear values (clear color, depth, stencil) are not handled here; they belong to
/// [`clear_from_state_table`]. Write masks and the scissor box are written back into
/// `save_state` as they are emitted, since buffer clears depend on them; everything else in
/// `save_state` is left for the caller to merge.
pub fn update_from_state_table<S>(new_state: &StateTable, save_state: &mut StateTable, sink: &mut S)
where
  S: StateSink,
{
  if new_state.set_capability_count() > 0
    && (new_state.is_enforced() || !StateTable::capabilities_same(new_state, save_state))
  {
    update_capabilities(new_state, save_state, sink);
  }

  for value in StateValue::ALL {
    if value.is_clear_value() || !new_state.is_value_set(value) {
      continue;
    }

    if new_state.is_enforced() || !new_state.value_group_eq(save_state, value) {
      send_value(new_state, sink, value);

      if affects_buffer_clears(value) {
        save_state.merge_value(new_state, value);
      }
    }
  }
}

/// Send the clear values set in `new_state` to `sink` and clear the corresponding buffers with a
/// single [`StateSink::clear`] call, or none at all if no clear value is set.
///
/// The state items that change what a clear writes (the scissor test and box, dithering,
/// rasterizer discard, and the relevant write masks) are updated first and written back into
/// `save_state`, as are the clear values themselves.
pub fn clear_from_state_table<S>(new_state: &StateTable, save_state: &mut StateTable, sink: &mut S)
where
  S: StateSink,
{
  // These change which pixels and buffers a clear touches, whether or not any clear value is
  // set alongside them.
  update_and_set_capability(new_state, save_state, sink, Capability::ScissorTest);
  update_and_set_capability(new_state, save_state, sink, Capability::Dither);
  update_and_set_capability(new_state, save_state, sink, Capability::RasterizerDiscard);
  update_and_set_value(new_state, save_state, sink, StateValue::ScissorBox);

  let mut mask = ClearMask::empty();

  if new_state.is_value_set(StateValue::ClearColor) {
    update_and_set_value(new_state, save_state, sink, StateValue::ColorWriteMasks);

    if new_state.is_enforced() || new_state.clear_color() != save_state.clear_color() {
      let [r, g, b, a] = new_state.clear_color();
      sink.clear_color(r, g, b, a);
    }

    save_state.merge_value(new_state, StateValue::ClearColor);
    mask |= ClearMask::COLOR;
  }

  if new_state.is_value_set(StateValue::ClearDepth) {
    update_and_set_value(new_state, save_state, sink, StateValue::DepthWriteMask);

    if new_state.is_enforced() || new_state.clear_depth() != save_state.clear_depth() {
      sink.clear_depth(new_state.clear_depth());
    }

    save_state.merge_value(new_state, StateValue::ClearDepth);
    mask |= ClearMask::DEPTH;
  }

  if new_state.is_value_set(StateValue::ClearStencil) {
    update_and_set_value(new_state, save_state, sink, StateValue::StencilWriteMasks);

    if new_state.is_enforced() || new_state.clear_stencil() != save_state.clear_stencil() {
      sink.clear_stencil(new_state.clear_stencil());
    }

    save_state.merge_value(new_state, StateValue::ClearStencil);
    mask |= ClearMask::STENCIL;
  }

  if !mask.is_empty() {
    sink.clear(mask);
  }
}

/// Reset `table` and load it with the live state read from `query`, using `default_width` and
/// `default_height` as the table’s construction defaults.
///
/// Only items that differ from the documented defaults end up marked as set, so the resulting
/// table diffs cleanly against a freshly constructed one.
pub fn update_state_table<Q>(default_width: i32, default_height: i32, query: &Q, table: &mut StateTable)
where
  Q: StateQuery,
{
  table.reset();

  for cap in Capability::ALL {
    if !query.is_capability_supported(cap) {
      continue;
    }

    let enabled = query.is_enabled(cap);
    if enabled != table.is_enabled(cap) {
      table.enable(cap, enabled);
    }
  }

  for value in StateValue::ALL {
    load_value(table, query, value);
  }

  // Drop the set flag of everything that read back as the default.
  let defaults = StateTable::new(default_width, default_height);
  for value in StateValue::ALL {
    if table.value_group_eq(&defaults, value) {
      table.reset_value(value);
    }
  }
}

/// Re-read from `query` exactly the items already marked set in `table`, refreshing their values
/// without touching anything else.
pub fn update_settings_in_state_table<Q>(table: &mut StateTable, query: &Q)
where
  Q: StateQuery,
{
  for cap in Capability::ALL {
    if table.is_capability_set(cap) && query.is_capability_supported(cap) {
      table.enable(cap, query.is_enabled(cap));
    }
  }

  for value in StateValue::ALL {
    if table.is_value_set(value) {
      load_value(table, query, value);
    }
  }
}

fn update_capabilities<S>(new_state: &StateTable, save_state: &StateTable, sink: &mut S)
where
  S: StateSink,
{
  for cap in Capability::ALL {
    if !new_state.is_capability_set(cap) {
      continue;
    }

    let enabled = new_state.is_enabled(cap);
    if (new_state.is_enforced() || enabled != save_state.is_enabled(cap))
      && sink.is_capability_supported(cap)
    {
      if enabled {
        sink.enable(cap);
      } else {
        sink.disable(cap);
      }
    }
  }
}

// A capability update that also records the new value in the save table, for the items clears
// depend on.
fn update_and_set_capability<S>(
  new_state: &StateTable,
  save_state: &mut StateTable,
  sink: &mut S,
  cap: Capability,
) where
  S: StateSink,
{
  if !new_state.is_capability_set(cap) {
    return;
  }

  let enabled = new_state.is_enabled(cap);
  if (new_state.is_enforced() || enabled != save_state.is_enabled(cap))
    && sink.is_capability_supported(cap)
  {
    if enabled {
      sink.enable(cap);
    } else {
      sink.disable(cap);
    }
  }

  save_state.enable(cap, enabled);
}

// A value update that also records the new value in the save table.
fn update_and_set_value<S>(
  new_state: &StateTable,
  save_state: &mut StateTable,
  sink: &mut S,
  value: StateValue,
) where
  S: StateSink,
{
  if !new_state.is_value_set(value) {
    return;
  }

  if new_state.is_enforced() || !new_state.value_group_eq(save_state, value) {
    send_value(new_state, sink, value);
  }

  save_state.merge_value(new_state, value);
}

fn affects_buffer_clears(value: StateValue) -> bool {
  matches!(
    value,
    StateValue::ColorWriteMasks
      | StateValue::DepthWriteMask
      | StateValue::StencilWriteMasks
      | StateValue::ScissorBox
  )
}

/// Emit the sink call(s) for one value group, unconditionally.
fn send_value<S>(st: &StateTable, sink: &mut S, value: StateValue)
where
  S: StateSink,
{
  match value {
    StateValue::BlendColor => {
      let [r, g, b, a] = st.blend_color();
      sink.blend_color(r, g, b, a);
    }

    StateValue::BlendEquations => {
      sink.blend_equation_separate(st.rgb_blend_equation(), st.alpha_blend_equation());
    }

    StateValue::BlendFunctions => {
      sink.blend_func_separate(
        st.rgb_blend_src_factor(),
        st.rgb_blend_dst_factor(),
        st.alpha_blend_src_factor(),
        st.alpha_blend_dst_factor(),
      );
    }

    StateValue::ClearColor | StateValue::ClearDepth | StateValue::ClearStencil => {
      // Clear values only flow through clear_from_state_table.
    }

    StateValue::ColorWriteMasks => {
      let [r, g, b, a] = st.color_write_masks();
      sink.color_mask(r, g, b, a);
    }

    StateValue::CullFaceMode => sink.cull_face(st.cull_face_mode()),

    StateValue::FrontFaceOrder => sink.front_face(st.front_face_order()),

    StateValue::DefaultInnerTessellationLevel => {
      sink.default_inner_tess_level(st.default_inner_tess_level());
    }

    StateValue::DefaultOuterTessellationLevel => {
      sink.default_outer_tess_level(st.default_outer_tess_level());
    }

    StateValue::DepthFunction => sink.depth_func(st.depth_function()),

    StateValue::DepthRange => {
      let [near, far] = st.depth_range();
      sink.depth_range(near, far);
    }

    StateValue::DepthWriteMask => sink.depth_mask(st.depth_write_mask()),

    StateValue::Hints => {
      sink.hint(
        crate::hint::HintTarget::GenerateMipmap,
        st.hint(crate::hint::HintTarget::GenerateMipmap),
      );
    }

    StateValue::LineWidth => sink.line_width(st.line_width()),

    StateValue::MinSampleShading => sink.min_sample_shading(st.min_sample_shading()),

    StateValue::PolygonOffset => {
      sink.polygon_offset(st.polygon_offset_factor(), st.polygon_offset_units());
    }

    StateValue::SampleCoverage => {
      sink.sample_coverage(st.sample_coverage_value(), st.is_sample_coverage_inverted());
    }

    StateValue::ScissorBox => {
      let box_ = st.scissor_box();
      sink.scissor(box_.x, box_.y, box_.width, box_.height);
    }

    StateValue::StencilFunctions => {
      sink.stencil_func_separate(
        StencilFace::Front,
        st.front_stencil_function(),
        st.front_stencil_reference(),
        st.front_stencil_mask(),
      );
      sink.stencil_func_separate(
        StencilFace::Back,
        st.back_stencil_function(),
        st.back_stencil_reference(),
        st.back_stencil_mask(),
      );
    }

    StateValue::StencilOperations => {
      sink.stencil_op_separate(
        StencilFace::Front,
        st.front_stencil_fail_op(),
        st.front_stencil_depth_fail_op(),
        st.front_stencil_pass_op(),
      );
      sink.stencil_op_separate(
        StencilFace::Back,
        st.back_stencil_fail_op(),
        st.back_stencil_depth_fail_op(),
        st.back_stencil_pass_op(),
      );
    }

    StateValue::StencilWriteMasks => {
      sink.stencil_mask_separate(StencilFace::Front, st.front_stencil_write_mask());
      sink.stencil_mask_separate(StencilFace::Back, st.back_stencil_write_mask());
    }

    StateValue::Viewport => {
      let vp = st.viewport();
      sink.viewport(vp.x, vp.y, vp.width, vp.height);
    }
  }
}

/// Load one value group from `query` into `table`, marking it set.
fn load_value<Q>(table: &mut StateTable, query: &Q, value: StateValue)
where
  Q: StateQuery,
{
  match value {
    StateValue::BlendColor => table.set_blend_color(query.blend_color()),

    StateValue::BlendEquations => {
      let (rgb, alpha) = query.blend_equations();
      table.set_blend_equations(rgb, alpha);
    }

    StateValue::BlendFunctions => {
      let (rgb_src, rgb_dst, alpha_src, alpha_dst) = query.blend_functions();
      table.set_blend_functions(rgb_src, rgb_dst, alpha_src, alpha_dst);
    }

    StateValue::ClearColor => table.set_clear_color(query.clear_color()),

    StateValue::ClearDepth => table.set_clear_depth(query.clear_depth()),

    StateValue::ClearStencil => table.set_clear_stencil(query.clear_stencil()),

    StateValue::ColorWriteMasks => {
      let [r, g, b, a] = query.color_write_masks();
      table.set_color_write_masks(r, g, b, a);
    }

    StateValue::CullFaceMode => table.set_cull_face_mode(query.cull_face_mode()),

    StateValue::FrontFaceOrder => table.set_front_face_order(query.front_face_order()),

    StateValue::DefaultInnerTessellationLevel => {
      table.set_default_inner_tess_level(query.default_inner_tess_level());
    }

    StateValue::DefaultOuterTessellationLevel => {
      table.set_default_outer_tess_level(query.default_outer_tess_level());
    }

    StateValue::DepthFunction => table.set_depth_function(query.depth_function()),

    StateValue::DepthRange => table.set_depth_range(query.depth_range()),

    StateValue::DepthWriteMask => table.set_depth_write_mask(query.depth_write_mask()),

    StateValue::Hints => {
      table.set_hint(
        crate::hint::HintTarget::GenerateMipmap,
        query.hint(crate::hint::HintTarget::GenerateMipmap),
      );
    }

    StateValue::LineWidth => table.set_line_width(query.line_width()),

    StateValue::MinSampleShading => table.set_min_sample_shading(query.min_sample_shading()),

    StateValue::PolygonOffset => {
      let (factor, units) = query.polygon_offset();
      table.set_polygon_offset(factor, units);
    }

    StateValue::SampleCoverage => {
      let (value, inverted) = query.sample_coverage();
      table.set_sample_coverage(value, inverted);
    }

    StateValue::ScissorBox => table.set_scissor_box(query.scissor_box()),

    StateValue::StencilFunctions => {
      let (front_fn, front_ref, front_mask) = query.stencil_function(StencilFace::Front);
      let (back_fn, back_ref, back_mask) = query.stencil_function(StencilFace::Back);
      table.set_stencil_functions(front_fn, front_ref, front_mask, back_fn, back_ref, back_mask);
    }

    StateValue::StencilOperations => {
      let (ff, fdf, fp) = query.stencil_operations(StencilFace::Front);
      let (bf, bdf, bp) = query.stencil_operations(StencilFace::Back);
      table.set_stencil_operations(ff, fdf, fp, bf, bdf, bp);
    }

    StateValue::StencilWriteMasks => {
      table.set_stencil_write_masks(
        query.stencil_write_mask(StencilFace::Front),
        query.stencil_write_mask(StencilFace::Back),
      );
    }

    StateValue::Viewport => table.set_viewport(query.viewport()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::blending::{Equation, Factor};
  use crate::depth_stencil::{Comparison, StencilOp};
  use crate::face_culling::{FaceCullingMode, FaceCullingOrder};
  use crate::hint::{HintMode, HintTarget};
  use crate::region::Region;

  #[derive(Clone, Debug, PartialEq)]
  enum Call {
    Enable(Capability),
    Disable(Capability),
    BlendColor(f32, f32, f32, f32),
    BlendEquationSeparate(Equation, Equation),
    BlendFuncSeparate(Factor, Factor, Factor, Factor),
    ColorMask(bool, bool, bool, bool),
    CullFace(FaceCullingMode),
    FrontFace(FaceCullingOrder),
    DepthFunc(Comparison),
    DepthRange(f32, f32),
    DepthMask(bool),
    Hint(HintTarget, HintMode),
    LineWidth(f32),
    MinSampleShading(f32),
    PolygonOffset(f32, f32),
    SampleCoverage(f32, bool),
    Scissor(i32, i32, i32, i32),
    StencilFuncSeparate(StencilFace, Comparison, i32, u32),
    StencilOpSeparate(StencilFace, StencilOp, StencilOp, StencilOp),
    StencilMaskSeparate(StencilFace, u32),
    Viewport(i32, i32, i32, i32),
    InnerTessLevel([f32; 2]),
    OuterTessLevel([f32; 4]),
    ClearColor(f32, f32, f32, f32),
    ClearDepth(f32),
    ClearStencil(i32),
    Clear(ClearMask),
  }

  #[derive(Default)]
  struct RecordingSink {
    calls: Vec<Call>,
    unsupported: Vec<Capability>,
  }

  impl StateSink for RecordingSink {
    fn enable(&mut self, capability: Capability) {
      self.calls.push(Call::Enable(capability));
    }

    fn disable(&mut self, capability: Capability) {
      self.calls.push(Call::Disable(capability));
    }

    fn is_capability_supported(&self, capability: Capability) -> bool {
      !self.unsupported.contains(&capability)
    }

    fn blend_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
      self.calls.push(Call::BlendColor(r, g, b, a));
    }

    fn blend_equation_separate(&mut self, rgb: Equation, alpha: Equation) {
      self.calls.push(Call::BlendEquationSeparate(rgb, alpha));
    }

    fn blend_func_separate(
      &mut self,
      rgb_src: Factor,
      rgb_dst: Factor,
      alpha_src: Factor,
      alpha_dst: Factor,
    ) {
      self
        .calls
        .push(Call::BlendFuncSeparate(rgb_src, rgb_dst, alpha_src, alpha_dst));
    }

    fn color_mask(&mut self, r: bool, g: bool, b: bool, a: bool) {
      self.calls.push(Call::ColorMask(r, g, b, a));
    }

    fn cull_face(&mut self, mode: FaceCullingMode) {
      self.calls.push(Call::CullFace(mode));
    }

    fn front_face(&mut self, order: FaceCullingOrder) {
      self.calls.push(Call::FrontFace(order));
    }

    fn depth_func(&mut self, func: Comparison) {
      self.calls.push(Call::DepthFunc(func));
    }

    fn depth_range(&mut self, near: f32, far: f32) {
      self.calls.push(Call::DepthRange(near, far));
    }

    fn depth_mask(&mut self, mask: bool) {
      self.calls.push(Call::DepthMask(mask));
    }

    fn hint(&mut self, target: HintTarget, mode: HintMode) {
      self.calls.push(Call::Hint(target, mode));
    }

    fn line_width(&mut self, width: f32) {
      self.calls.push(Call::LineWidth(width));
    }

    fn min_sample_shading(&mut self, fraction: f32) {
      self.calls.push(Call::MinSampleShading(fraction));
    }

    fn polygon_offset(&mut self, factor: f32, units: f32) {
      self.calls.push(Call::PolygonOffset(factor, units));
    }

    fn sample_coverage(&mut self, value: f32, inverted: bool) {
      self.calls.push(Call::SampleCoverage(value, inverted));
    }

    fn scissor(&mut self, x: i32, y: i32, width: i32, height: i32) {
      self.calls.push(Call::Scissor(x, y, width, height));
    }

    fn stencil_func_separate(
      &mut self,
      face: StencilFace,
      func: Comparison,
      reference: i32,
      mask: u32,
    ) {
      self
        .calls
        .push(Call::StencilFuncSeparate(face, func, reference, mask));
    }

    fn stencil_op_separate(
      &mut self,
      face: StencilFace,
      stencil_fail: StencilOp,
      depth_fail: StencilOp,
      depth_pass: StencilOp,
    ) {
      self
        .calls
        .push(Call::StencilOpSeparate(face, stencil_fail, depth_fail, depth_pass));
    }

    fn stencil_mask_separate(&mut self, face: StencilFace, mask: u32) {
      self.calls.push(Call::StencilMaskSeparate(face, mask));
    }

    fn viewport(&mut self, x: i32, y: i32, width: i32, height: i32) {
      self.calls.push(Call::Viewport(x, y, width, height));
    }

    fn default_inner_tess_level(&mut self, levels: [f32; 2]) {
      self.calls.push(Call::InnerTessLevel(levels));
    }

    fn default_outer_tess_level(&mut self, levels: [f32; 4]) {
      self.calls.push(Call::OuterTessLevel(levels));
    }

    fn clear_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
      self.calls.push(Call::ClearColor(r, g, b, a));
    }

    fn clear_depth(&mut self, depth: f32) {
      self.calls.push(Call::ClearDepth(depth));
    }

    fn clear_stencil(&mut self, stencil: i32) {
      self.calls.push(Call::ClearStencil(stencil));
    }

    fn clear(&mut self, mask: ClearMask) {
      self.calls.push(Call::Clear(mask));
    }
  }

  /// A query implementation that answers from another table, for seeding tests.
  struct TableQuery<'a>(&'a StateTable);

  impl StateQuery for TableQuery<'_> {
    fn is_enabled(&self, capability: Capability) -> bool {
      self.0.is_enabled(capability)
    }

    fn blend_color(&self) -> [f32; 4] {
      self.0.blend_color()
    }

    fn blend_equations(&self) -> (Equation, Equation) {
      (self.0.rgb_blend_equation(), self.0.alpha_blend_equation())
    }

    fn blend_functions(&self) -> (Factor, Factor, Factor, Factor) {
      (
        self.0.rgb_blend_src_factor(),
        self.0.rgb_blend_dst_factor(),
        self.0.alpha_blend_src_factor(),
        self.0.alpha_blend_dst_factor(),
      )
    }

    fn clear_color(&self) -> [f32; 4] {
      self.0.clear_color()
    }

    fn clear_depth(&self) -> f32 {
      self.0.clear_depth()
    }

    fn clear_stencil(&self) -> i32 {
      self.0.clear_stencil()
    }

    fn color_write_masks(&self) -> [bool; 4] {
      self.0.color_write_masks()
    }

    fn cull_face_mode(&self) -> FaceCullingMode {
      self.0.cull_face_mode()
    }

    fn front_face_order(&self) -> FaceCullingOrder {
      self.0.front_face_order()
    }

    fn default_inner_tess_level(&self) -> [f32; 2] {
      self.0.default_inner_tess_level()
    }

    fn default_outer_tess_level(&self) -> [f32; 4] {
      self.0.default_outer_tess_level()
    }

    fn depth_function(&self) -> Comparison {
      self.0.depth_function()
    }

    fn depth_range(&self) -> [f32; 2] {
      self.0.depth_range()
    }

    fn depth_write_mask(&self) -> bool {
      self.0.depth_write_mask()
    }

    fn hint(&self, target: HintTarget) -> HintMode {
      self.0.hint(target)
    }

    fn line_width(&self) -> f32 {
      self.0.line_width()
    }

    fn min_sample_shading(&self) -> f32 {
      self.0.min_sample_shading()
    }

    fn polygon_offset(&self) -> (f32, f32) {
      (self.0.polygon_offset_factor(), self.0.polygon_offset_units())
    }

    fn sample_coverage(&self) -> (f32, bool) {
      (
        self.0.sample_coverage_value(),
        self.0.is_sample_coverage_inverted(),
      )
    }

    fn scissor_box(&self) -> Region {
      self.0.scissor_box()
    }

    fn stencil_function(&self, face: StencilFace) -> (Comparison, i32, u32) {
      match face {
        StencilFace::Front => (
          self.0.front_stencil_function(),
          self.0.front_stencil_reference(),
          self.0.front_stencil_mask(),
        ),
        StencilFace::Back => (
          self.0.back_stencil_function(),
          self.0.back_stencil_reference(),
          self.0.back_stencil_mask(),
        ),
      }
    }

    fn stencil_operations(&self, face: StencilFace) -> (StencilOp, StencilOp, StencilOp) {
      match face {
        StencilFace::Front => (
          self.0.front_stencil_fail_op(),
          self.0.front_stencil_depth_fail_op(),
          self.0.front_stencil_pass_op(),
        ),
        StencilFace::Back => (
          self.0.back_stencil_fail_op(),
          self.0.back_stencil_depth_fail_op(),
          self.0.back_stencil_pass_op(),
        ),
      }
    }

    fn stencil_write_mask(&self, face: StencilFace) -> u32 {
      match face {
        StencilFace::Front => self.0.front_stencil_write_mask(),
        StencilFace::Back => self.0.back_stencil_write_mask(),
      }
    }

    fn viewport(&self) -> Region {
      self.0.viewport()
    }
  }

  #[test]
  fn nothing_set_emits_nothing() {
    let new_state = StateTable::new(300, 200);
    let mut save_state = StateTable::new(300, 200);
    let mut sink = RecordingSink::default();

    update_from_state_table(&new_state, &mut save_state, &mut sink);
    clear_from_state_table(&new_state, &mut save_state, &mut sink);

    assert!(sink.calls.is_empty());
  }

  #[test]
  fn redundant_set_values_are_suppressed() {
    // Setting an item to its current value marks it set but must not emit anything.
    let mut new_state = StateTable::new(300, 200);
    new_state.set_line_width(1.);
    new_state.enable(Capability::Dither, true);

    let mut save_state = StateTable::new(300, 200);
    let mut sink = RecordingSink::default();

    update_from_state_table(&new_state, &mut save_state, &mut sink);
    assert!(sink.calls.is_empty());
  }

  #[test]
  fn capabilities_diff() {
    let mut new_state = StateTable::default();
    new_state.enable(Capability::Blend, true);
    new_state.enable(Capability::DepthTest, true);
    new_state.enable(Capability::Dither, false);
    new_state.enable(Capability::Multisample, true); // Already on; must not emit.

    let mut save_state = StateTable::default();
    let mut sink = RecordingSink::default();
    update_from_state_table(&new_state, &mut save_state, &mut sink);

    assert_eq!(
      sink.calls,
      vec![
        Call::Enable(Capability::Blend),
        Call::Enable(Capability::DepthTest),
        Call::Disable(Capability::Dither),
      ]
    );
  }

  #[test]
  fn unsupported_capability_is_skipped_without_suppressing_the_rest() {
    let mut new_state = StateTable::default();
    new_state.enable(Capability::SampleShading, true);
    new_state.enable(Capability::StencilTest, true);

    let mut save_state = StateTable::default();
    let mut sink = RecordingSink {
      unsupported: vec![Capability::SampleShading],
      ..RecordingSink::default()
    };
    update_from_state_table(&new_state, &mut save_state, &mut sink);

    assert_eq!(sink.calls, vec![Call::Enable(Capability::StencilTest)]);
  }

  #[test]
  fn values_diff_emits_only_changed_groups() {
    let mut new_state = StateTable::new(300, 200);
    new_state.set_line_width(4.);
    new_state.set_depth_range([0., 1.]); // Default value; set but unchanged.
    new_state.set_blend_equations(Equation::ReverseSubtract, Equation::Additive);

    let mut save_state = StateTable::new(300, 200);
    let mut sink = RecordingSink::default();
    update_from_state_table(&new_state, &mut save_state, &mut sink);

    assert_eq!(
      sink.calls,
      vec![
        Call::BlendEquationSeparate(Equation::ReverseSubtract, Equation::Additive),
        Call::LineWidth(4.),
      ]
    );
  }

  #[test]
  fn enforced_reemits_set_items_even_when_equal() {
    let mut new_state = StateTable::new(300, 200);
    new_state.set_line_width(1.); // Default value.
    new_state.enable(Capability::Dither, true); // Default value.
    new_state.set_enforced(true);

    let mut save_state = StateTable::new(300, 200);
    let mut sink = RecordingSink::default();
    update_from_state_table(&new_state, &mut save_state, &mut sink);

    assert_eq!(
      sink.calls,
      vec![Call::Enable(Capability::Dither), Call::LineWidth(1.)]
    );
  }

  #[test]
  fn viewport_from_corner_points() {
    let mut new_state = StateTable::new(300, 200);
    new_state.set_viewport(Region::from_corners((10, 20), (200, 100)));

    let mut save_state = StateTable::new(300, 200);
    let mut sink = RecordingSink::default();
    update_from_state_table(&new_state, &mut save_state, &mut sink);

    assert_eq!(sink.calls, vec![Call::Viewport(10, 20, 190, 80)]);
  }

  #[test]
  fn stencil_groups_emit_both_faces() {
    let mut new_state = StateTable::default();
    new_state.set_stencil_write_masks(0x0f, 0xf0);

    let mut save_state = StateTable::default();
    let mut sink = RecordingSink::default();
    update_from_state_table(&new_state, &mut save_state, &mut sink);

    assert_eq!(
      sink.calls,
      vec![
        Call::StencilMaskSeparate(StencilFace::Front, 0x0f),
        Call::StencilMaskSeparate(StencilFace::Back, 0xf0),
      ]
    );
  }

  #[test]
  fn write_masks_and_scissor_are_written_back() {
    let mut new_state = StateTable::new(300, 200);
    new_state.set_color_write_masks(false, false, true, true);
    new_state.set_depth_write_mask(false);
    new_state.set_scissor_box(Region::new(1, 1, 8, 8));
    new_state.set_cull_face_mode(FaceCullingMode::Front);

    let mut save_state = StateTable::new(300, 200);
    let mut sink = RecordingSink::default();
    update_from_state_table(&new_state, &mut save_state, &mut sink);

    // The clear-affecting groups landed in the save table.
    assert_eq!(save_state.color_write_masks(), [false, false, true, true]);
    assert!(save_state.is_value_set(StateValue::ColorWriteMasks));
    assert!(!save_state.depth_write_mask());
    assert_eq!(save_state.scissor_box(), Region::new(1, 1, 8, 8));

    // Everything else in the save table is the caller's to merge.
    assert_eq!(save_state.cull_face_mode(), FaceCullingMode::Back);
    assert!(!save_state.is_value_set(StateValue::CullFaceMode));
  }

  #[test]
  fn clear_color_only() {
    let mut new_state = StateTable::default();
    new_state.set_clear_color([1., 0., 0., 1.]);

    let mut save_state = StateTable::default();
    let mut sink = RecordingSink::default();
    clear_from_state_table(&new_state, &mut save_state, &mut sink);

    assert_eq!(
      sink.calls,
      vec![Call::ClearColor(1., 0., 0., 1.), Call::Clear(ClearMask::COLOR)]
    );
    assert_eq!(save_state.clear_color(), [1., 0., 0., 1.]);
    assert!(save_state.is_value_set(StateValue::ClearColor));
  }

  #[test]
  fn clear_all_buffers_with_masks_and_scissor() {
    let mut new_state = StateTable::new(300, 200);
    new_state.enable(Capability::ScissorTest, true);
    new_state.set_scissor_box(Region::new(2, 2, 16, 16));
    new_state.set_clear_color([0.5; 4]);
    new_state.set_color_write_masks(true, true, false, false);
    new_state.set_clear_depth(0.);
    new_state.set_clear_stencil(3);
    new_state.set_stencil_write_masks(0xff, 0xff);

    let mut save_state = StateTable::new(300, 200);
    let mut sink = RecordingSink::default();
    clear_from_state_table(&new_state, &mut save_state, &mut sink);

    assert_eq!(
      sink.calls,
      vec![
        Call::Enable(Capability::ScissorTest),
        Call::Scissor(2, 2, 16, 16),
        Call::ColorMask(true, true, false, false),
        Call::ClearColor(0.5, 0.5, 0.5, 0.5),
        Call::ClearDepth(0.),
        Call::StencilMaskSeparate(StencilFace::Front, 0xff),
        Call::StencilMaskSeparate(StencilFace::Back, 0xff),
        Call::ClearStencil(3),
        Call::Clear(ClearMask::COLOR | ClearMask::DEPTH | ClearMask::STENCIL),
      ]
    );

    // Scissor state and clear values were written back so later diffs stay minimal.
    assert!(save_state.is_enabled(Capability::ScissorTest));
    assert!(save_state.is_capability_set(Capability::ScissorTest));
    assert_eq!(save_state.scissor_box(), Region::new(2, 2, 16, 16));
    assert_eq!(save_state.clear_depth(), 0.);
    assert_eq!(save_state.clear_stencil(), 3);
  }

  #[test]
  fn clear_suppresses_redundant_clear_values() {
    let mut new_state = StateTable::default();
    new_state.set_clear_depth(1.); // Matches the save state.

    let mut save_state = StateTable::default();
    let mut sink = RecordingSink::default();
    clear_from_state_table(&new_state, &mut save_state, &mut sink);

    // The buffer is still cleared, but the clear value is not re-sent.
    assert_eq!(sink.calls, vec![Call::Clear(ClearMask::DEPTH)]);
  }

  #[test]
  fn clear_write_mask_only_rides_along_its_clear_value() {
    // A color write mask without a set clear color is not a clear concern here.
    let mut new_state = StateTable::default();
    new_state.set_color_write_masks(false, false, false, false);
    new_state.set_clear_depth(0.5);

    let mut save_state = StateTable::default();
    let mut sink = RecordingSink::default();
    clear_from_state_table(&new_state, &mut save_state, &mut sink);

    assert_eq!(
      sink.calls,
      vec![Call::ClearDepth(0.5), Call::Clear(ClearMask::DEPTH)]
    );
  }

  #[test]
  fn seeding_marks_only_non_defaults() {
    let mut live = StateTable::new(300, 200);
    live.enable(Capability::CullFace, true);
    live.set_line_width(3.);
    live.set_viewport(Region::new(0, 0, 300, 200)); // Default for these dimensions.

    let mut table = StateTable::default();
    update_state_table(300, 200, &TableQuery(&live), &mut table);

    assert!(table.is_enabled(Capability::CullFace));
    assert!(table.is_capability_set(Capability::CullFace));
    assert!(!table.is_capability_set(Capability::Dither));

    assert_eq!(table.line_width(), 3.);
    assert!(table.is_value_set(StateValue::LineWidth));
    assert!(!table.is_value_set(StateValue::Viewport));
    assert!(!table.is_value_set(StateValue::DepthFunction));
  }

  #[test]
  fn seeding_resets_stale_state_first() {
    let live = StateTable::new(300, 200);

    let mut table = StateTable::new(300, 200);
    table.set_line_width(9.);
    table.enable(Capability::Blend, true);

    update_state_table(300, 200, &TableQuery(&live), &mut table);

    assert_eq!(table, StateTable::new(300, 200));
  }

  #[test]
  fn refreshing_touches_only_set_items() {
    let mut live = StateTable::new(300, 200);
    live.set_line_width(7.);
    live.set_depth_function(Comparison::Always);
    live.enable(Capability::Blend, true);

    let mut table = StateTable::new(300, 200);
    table.set_line_width(2.);
    table.enable(Capability::Blend, false);

    update_settings_in_state_table(&mut table, &TableQuery(&live));

    // Set items were refreshed from the live state.
    assert_eq!(table.line_width(), 7.);
    assert!(table.is_enabled(Capability::Blend));

    // Unset items stayed at their defaults, still unset.
    assert_eq!(table.depth_function(), Comparison::Less);
    assert!(!table.is_value_set(StateValue::DepthFunction));
  }
}
