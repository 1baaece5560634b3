//! Entity - an aggregate of owned components
//!
//! Components live in a `Vec` in attachment order (which is also hook
//! execution order). Two parallel fixed-capacity structures give O(1) typed
//! lookup: a slot table mapping kind id to position in the vec, and a
//! presence bitset with one bit per kind.

use std::any::type_name;
use std::fmt;

use super::component::Component;
use super::error::EcsError;
use super::registry::{TypeRegistry, MAX_COMPONENT_KINDS};

/// Identity of an entity, unique within its manager for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub(crate) u64);

impl EntityId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

type Slot = Option<Box<dyn Component>>;

pub struct Entity {
    id: EntityId,
    active: bool,
    // A slot is `None` only while that component's own hook is running.
    components: Vec<Slot>,
    slots: [Option<usize>; MAX_COMPONENT_KINDS],
    mask: u32,
}

impl Entity {
    pub(crate) fn new(id: EntityId) -> Self {
        Self {
            id,
            active: true,
            components: Vec::new(),
            slots: [None; MAX_COMPONENT_KINDS],
            mask: 0,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Attaches `component`, runs its `init` hook, and returns a reference to
    /// it. A kind may be attached at most once per entity; a second add of
    /// the same kind is rejected and the entity is left untouched.
    pub fn add_component<C: Component>(
        &mut self,
        registry: &mut TypeRegistry,
        component: C,
    ) -> Result<&mut C, EcsError> {
        let kind = registry.id_of::<C>()?;
        let bit = 1u32 << kind.index();
        if self.mask & bit != 0 {
            return Err(EcsError::DuplicateComponent {
                kind: type_name::<C>(),
                entity: self.id,
            });
        }

        let index = self.components.len();
        self.components.push(Some(Box::new(component)));
        self.slots[kind.index()] = Some(index);
        self.mask |= bit;

        self.visit_one(index, registry, |component, ctx| component.init(ctx));

        Ok(self.components[index]
            .as_mut()
            .expect("slot filled by this add")
            .as_any_mut()
            .downcast_mut::<C>()
            .expect("slot holds the kind registered by this add"))
    }

    /// O(1) presence-bit test.
    pub fn has_component<C: Component>(&self, registry: &TypeRegistry) -> bool {
        match registry.lookup::<C>() {
            Some(kind) => self.mask & (1u32 << kind.index()) != 0,
            None => false,
        }
    }

    /// O(1) slot dereference; absence is a reported error, not a panic.
    pub fn get_component<C: Component>(&self, registry: &TypeRegistry) -> Result<&C, EcsError> {
        self.slot_of::<C>(registry)
            .and_then(|index| self.components[index].as_deref())
            .and_then(|component| component.as_any().downcast_ref::<C>())
            .ok_or(EcsError::ComponentNotFound {
                kind: type_name::<C>(),
                entity: self.id,
            })
    }

    pub fn get_component_mut<C: Component>(
        &mut self,
        registry: &TypeRegistry,
    ) -> Result<&mut C, EcsError> {
        let id = self.id;
        self.slot_of::<C>(registry)
            .and_then(|index| self.components[index].as_deref_mut())
            .and_then(|component| component.as_any_mut().downcast_mut::<C>())
            .ok_or(EcsError::ComponentNotFound {
                kind: type_name::<C>(),
                entity: id,
            })
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Runs `update` on every owned component in attachment order. Runs even
    /// when the entity has already been marked inactive; deactivation only
    /// affects the next `refresh`, never the current pass.
    pub fn update(&mut self, registry: &TypeRegistry) {
        self.visit_all(registry, |component, ctx| component.update(ctx));
    }

    /// Runs `draw` on every owned component in attachment order.
    pub fn draw(&mut self, registry: &TypeRegistry) {
        self.visit_all(registry, |component, ctx| component.draw(ctx));
    }

    /// Marks the entity for removal at the next `refresh`. Idempotent; the
    /// flag is never reset.
    pub fn destroy(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    fn slot_of<C: Component>(&self, registry: &TypeRegistry) -> Option<usize> {
        registry
            .lookup::<C>()
            .and_then(|kind| self.slots[kind.index()])
    }

    fn visit_all(
        &mut self,
        registry: &TypeRegistry,
        mut hook: impl FnMut(&mut dyn Component, &mut EntityContext<'_>),
    ) {
        for index in 0..self.components.len() {
            self.visit_one(index, registry, &mut hook);
        }
    }

    // Lifts the component out of its slot for the duration of the hook, so
    // the context can hand out sibling access without aliasing it. Its own
    // kind reads as absent from inside the hook.
    fn visit_one(
        &mut self,
        index: usize,
        registry: &TypeRegistry,
        mut hook: impl FnMut(&mut dyn Component, &mut EntityContext<'_>),
    ) {
        let Some(mut component) = self.components[index].take() else {
            return;
        };
        let mut ctx = EntityContext {
            owner: self.id,
            active: &mut self.active,
            registry,
            slots: &self.slots,
            components: &mut self.components,
        };
        hook(component.as_mut(), &mut ctx);
        self.components[index] = Some(component);
    }
}

/// The view of an entity handed to component hooks: owner identity, typed
/// sibling access, and the cooperative destroy switch. Deliberately exposes
/// no way to attach components or spawn entities.
pub struct EntityContext<'a> {
    owner: EntityId,
    active: &'a mut bool,
    registry: &'a TypeRegistry,
    slots: &'a [Option<usize>; MAX_COMPONENT_KINDS],
    components: &'a mut Vec<Slot>,
}

impl EntityContext<'_> {
    /// Id of the entity owning the component whose hook is running.
    pub fn owner(&self) -> EntityId {
        self.owner
    }

    pub fn is_active(&self) -> bool {
        *self.active
    }

    /// Marks the owning entity for removal at the next `refresh`.
    pub fn destroy(&mut self) {
        *self.active = false;
    }

    pub fn has<C: Component>(&self) -> bool {
        self.lookup::<C>().is_some()
    }

    /// Sibling component of kind `C`, if attached. The component whose hook
    /// is currently running is not visible through its own context.
    pub fn get<C: Component>(&self) -> Option<&C> {
        self.lookup::<C>()
            .and_then(|component| component.as_any().downcast_ref::<C>())
    }

    pub fn get_mut<C: Component>(&mut self) -> Option<&mut C> {
        let index = self.slot_of::<C>()?;
        self.components[index]
            .as_deref_mut()
            .and_then(|component| component.as_any_mut().downcast_mut::<C>())
    }

    fn lookup<C: Component>(&self) -> Option<&dyn Component> {
        let index = self.slot_of::<C>()?;
        self.components[index].as_deref()
    }

    fn slot_of<C: Component>(&self) -> Option<usize> {
        self.registry
            .lookup::<C>()
            .and_then(|kind| self.slots[kind.index()])
    }
}
