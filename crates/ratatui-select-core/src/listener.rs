//! Host-wide pointer-down notifications, used for outside-click dismissal.
//!
//! A host owns one [`PointerListeners`] registry and feeds it every pointer press before routing
//! the press anywhere else. Widgets subscribe while mounted and get told, for each press, whether
//! they were the press target. The [`Subscription`] returned by [`PointerListeners::subscribe`]
//! deregisters on drop, so an unmounted widget can never keep a handler alive.
//!
//! Everything here is single-threaded (`Rc`), matching the host event loop.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::rc::Weak;

use ratatui::layout::Position;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

/// Stacking class of a rendered region. Overlays (open popups) sit above base content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum HitLayer {
    Base,
    Overlay,
}

pub trait PointerDownListener {
    /// The layer at which `position` falls inside this listener's rendered boundary, if it does.
    fn hit(&self, position: Position) -> Option<HitLayer>;

    /// Called for every pointer press. `inside` is `true` only for the resolved press target.
    fn on_pointer_down(&self, inside: bool);
}

struct Entry {
    id: SubscriptionId,
    listener: Rc<dyn PointerDownListener>,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<Entry>,
}

/// Cheaply clonable handle to a registry; clones observe the same subscribers.
#[derive(Clone, Default)]
pub struct PointerListeners {
    inner: Rc<RefCell<Registry>>,
}

impl fmt::Debug for PointerListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerListeners")
            .field("len", &self.len())
            .finish()
    }
}

impl PointerListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: Rc<dyn PointerDownListener>) -> Subscription {
        let mut registry = self.inner.borrow_mut();
        let id = SubscriptionId(registry.next_id);
        registry.next_id += 1;
        registry.entries.push(Entry { id, listener });
        tracing::trace!(event = "listener.subscribed", id = id.0);
        Subscription {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The subscriber a press at `position` would land on, without notifying anyone.
    ///
    /// The highest [`HitLayer`] wins; among equal layers the most recent subscriber wins.
    pub fn target_at(&self, position: Position) -> Option<SubscriptionId> {
        resolve_target(&self.snapshot(), position)
    }

    /// Notifies every subscriber of a press at `position` and returns the press target.
    pub fn pointer_down(&self, position: Position) -> Option<SubscriptionId> {
        // Listeners run without the registry borrowed, so they may freely subscribe or drop
        // subscriptions while being notified.
        let entries = self.snapshot();
        let target = resolve_target(&entries, position);
        for (id, listener) in &entries {
            listener.on_pointer_down(Some(*id) == target);
        }
        target
    }

    fn snapshot(&self) -> Vec<(SubscriptionId, Rc<dyn PointerDownListener>)> {
        self.inner
            .borrow()
            .entries
            .iter()
            .map(|e| (e.id, e.listener.clone()))
            .collect()
    }
}

fn resolve_target(
    entries: &[(SubscriptionId, Rc<dyn PointerDownListener>)],
    position: Position,
) -> Option<SubscriptionId> {
    entries
        .iter()
        .enumerate()
        .filter_map(|(order, (id, l))| l.hit(position).map(|layer| (layer, order, *id)))
        .max_by_key(|(layer, order, _)| (*layer, *order))
        .map(|(_, _, id)| id)
}

/// Keeps a listener registered; dropping it deregisters.
#[must_use = "dropping a Subscription deregisters the listener immediately"]
pub struct Subscription {
    id: SubscriptionId,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        registry.borrow_mut().entries.retain(|e| e.id != self.id);
        tracing::trace!(event = "listener.unsubscribed", id = self.id.0);
    }
}
