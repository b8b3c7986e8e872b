//! Behavior host: explicit subscriptions with deterministic teardown.

use scenekit_core::{ElementHandle, Scene};
use scenekit_input::PointerSample;
use serde::Serialize;
use std::collections::BTreeMap;

/// Event delivered by the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum SceneEvent {
    /// A selectable element was clicked.
    Click {
        /// Element that received the click.
        target: ElementHandle,
    },
    /// Scene-level pointer input (mouse or touch).
    Pointer(PointerSample),
}

/// Where a subscription listens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerScope {
    /// Every event dispatched to the scene.
    Scene,
    /// Only clicks targeting this element.
    Element(ElementHandle),
}

impl ListenerScope {
    fn accepts(&self, event: &SceneEvent) -> bool {
        match (self, event) {
            (ListenerScope::Scene, _) => true,
            (ListenerScope::Element(handle), SceneEvent::Click { target }) => handle == target,
            (ListenerScope::Element(_), SceneEvent::Pointer(_)) => false,
        }
    }
}

/// Something that reacts to scene events.
pub trait Behavior {
    /// Short label for logs.
    fn name(&self) -> &str;

    /// React to one event. Handlers run to completion, one at a time.
    fn handle(&mut self, scene: &mut Scene, event: &SceneEvent);

    /// Release any in-flight state before the behavior is dropped.
    fn teardown(&mut self, _scene: &mut Scene) {}
}

/// Handle returned by [`BehaviorHost::attach`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionHandle(u64);

struct Subscription {
    scope: ListenerScope,
    behavior: Box<dyn Behavior>,
}

/// Owns attached behaviors and routes events to them in attach order.
pub struct BehaviorHost {
    subscriptions: BTreeMap<SubscriptionHandle, Subscription>,
    next_handle: u64,
}

impl Default for BehaviorHost {
    fn default() -> Self {
        Self::new()
    }
}

impl BehaviorHost {
    /// Create a host with no subscriptions.
    pub fn new() -> Self {
        Self {
            subscriptions: BTreeMap::new(),
            next_handle: 1,
        }
    }

    /// Attach a behavior under `scope`.
    pub fn attach(&mut self, scope: ListenerScope, behavior: Box<dyn Behavior>) -> SubscriptionHandle {
        let handle = SubscriptionHandle(self.next_handle);
        self.next_handle += 1;

        tracing::debug!(behavior = behavior.name(), ?scope, handle = handle.0, "attached");
        self.subscriptions
            .insert(handle, Subscription { scope, behavior });
        handle
    }

    /// Tear down and remove a behavior. Returns `false` for unknown handles.
    pub fn detach(&mut self, scene: &mut Scene, handle: SubscriptionHandle) -> bool {
        match self.subscriptions.remove(&handle) {
            Some(mut subscription) => {
                subscription.behavior.teardown(scene);
                tracing::debug!(behavior = subscription.behavior.name(), handle = handle.0, "detached");
                true
            }
            None => false,
        }
    }

    /// Tear down every behavior.
    pub fn detach_all(&mut self, scene: &mut Scene) {
        let handles: Vec<_> = self.subscriptions.keys().copied().collect();
        for handle in handles {
            self.detach(scene, handle);
        }
    }

    /// Deliver `event` to every matching subscription.
    pub fn dispatch(&mut self, scene: &mut Scene, event: &SceneEvent) {
        for subscription in self.subscriptions.values_mut() {
            if subscription.scope.accepts(event) {
                subscription.behavior.handle(scene, event);
            }
        }
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    /// Whether nothing is attached.
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}

impl std::fmt::Debug for BehaviorHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.subscriptions
                    .iter()
                    .map(|(handle, sub)| (handle.0, sub.behavior.name())),
            )
            .finish()
    }
}
