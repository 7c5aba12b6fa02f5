use sticky_header_footer::StickyOptions;

use crate::{Dom, Instance, ListenerId};

/// A node handle usable as a registry key.
///
/// Containers are hashed with `std`, ordered without it.
#[cfg(feature = "std")]
pub trait ContainerKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<N: core::hash::Hash + Eq + Clone> ContainerKey for N {}

#[cfg(not(feature = "std"))]
pub trait ContainerKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<N: Ord + Clone> ContainerKey for N {}

#[cfg(feature = "std")]
type Instances<N> = std::collections::HashMap<N, Instance<N>>;
#[cfg(not(feature = "std"))]
type Instances<N> = alloc::collections::BTreeMap<N, Instance<N>>;

/// An operation applied to containers through [`Registry::run`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    Setup(StickyOptions),
    Teardown,
}

/// Owns every managed container's [`Instance`], keyed by container identity.
///
/// Keep one registry per document. It makes setup idempotent (a container is decorated at most
/// once) and routes platform events and timer ticks to the owning instance.
#[derive(Clone, Debug)]
pub struct Registry<N: ContainerKey> {
    instances: Instances<N>,
}

impl<N: ContainerKey> Default for Registry<N> {
    fn default() -> Self {
        Self {
            instances: Instances::default(),
        }
    }
}

impl<N: ContainerKey> Registry<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets up `container` unless it is already managed, in which case the call is a no-op and
    /// the existing instance is returned unchanged.
    pub fn setup<D: Dom<Node = N> + ?Sized>(
        &mut self,
        dom: &mut D,
        container: &N,
        options: StickyOptions,
        now_ms: u64,
    ) -> &Instance<N> {
        if self.instances.contains_key(container) {
            sdebug!("container already managed; setup ignored");
        }
        self.instances
            .entry(container.clone())
            .or_insert_with(|| Instance::setup(dom, container.clone(), options, now_ms))
    }

    /// Reverses setup for `container`. Returns `false` (and does nothing) if it is not managed.
    pub fn teardown<D: Dom<Node = N> + ?Sized>(&mut self, dom: &mut D, container: &N) -> bool {
        let Some(instance) = self.instances.remove(container) else {
            return false;
        };
        instance.teardown(dom);
        true
    }

    /// Applies `command` to each container in turn.
    pub fn run<D: Dom<Node = N> + ?Sized>(
        &mut self,
        dom: &mut D,
        containers: impl IntoIterator<Item = N>,
        command: &Command,
        now_ms: u64,
    ) {
        for container in containers {
            match command {
                Command::Setup(options) => {
                    self.setup(dom, &container, options.clone(), now_ms);
                }
                Command::Teardown => {
                    self.teardown(dom, &container);
                }
            }
        }
    }

    pub fn get(&self, container: &N) -> Option<&Instance<N>> {
        self.instances.get(container)
    }

    pub fn contains(&self, container: &N) -> bool {
        self.instances.contains_key(container)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Delivers a platform event to the instance that subscribed `id`.
    ///
    /// Returns `false` if no instance owns the listener (e.g. it was torn down already).
    pub fn dispatch<D: Dom<Node = N> + ?Sized>(
        &mut self,
        dom: &mut D,
        id: ListenerId,
        now_ms: u64,
    ) -> bool {
        self.instances
            .values_mut()
            .find(|instance| instance.owns_listener(id))
            .is_some_and(|instance| instance.handle(dom, id, now_ms))
    }

    /// Runs deferred work that has come due on every instance.
    pub fn tick<D: Dom<Node = N> + ?Sized>(&mut self, dom: &mut D, now_ms: u64) {
        for instance in self.instances.values_mut() {
            instance.tick(dom, now_ms);
        }
    }

    /// Earliest time at which [`Registry::tick`] has work to do.
    pub fn next_deadline(&self) -> Option<u64> {
        self.instances
            .values()
            .filter_map(Instance::next_deadline)
            .min()
    }
}
