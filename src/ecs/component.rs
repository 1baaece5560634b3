//! Component authoring contract

use std::any::Any;

use super::entity::EntityContext;

/// A behavioral unit attached to exactly one entity.
///
/// Implementors override any subset of the lifecycle hooks: `init` runs once
/// right after attachment, `update` and `draw` run once per frame for as long
/// as the owning entity is held by the manager. The context passed to each
/// hook carries the owner's id, typed access to sibling components, and the
/// cooperative `destroy` switch; it grants no structural mutation, so an
/// in-progress pass can never grow or shrink the population under itself.
///
/// `as_any`/`as_any_mut` recover the concrete type from behind
/// `dyn Component`:
///
/// ```ignore
/// impl Component for Spin {
///     fn as_any(&self) -> &dyn Any { self }
///     fn as_any_mut(&mut self) -> &mut dyn Any { self }
///     fn update(&mut self, ctx: &mut EntityContext<'_>) {
///         if let Some(t) = ctx.get_mut::<Transform>() {
///             t.x += 1.0;
///         }
///     }
/// }
/// ```
pub trait Component: 'static {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Runs once, immediately after the component is attached to its entity.
    fn init(&mut self, _ctx: &mut EntityContext<'_>) {}

    /// Per-frame behavior.
    fn update(&mut self, _ctx: &mut EntityContext<'_>) {}

    /// Per-frame presentation.
    fn draw(&mut self, _ctx: &mut EntityContext<'_>) {}
}
