// Copyright 2026 The sandbox-engine Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Typed publish/subscribe event bus
//!
//! The [`EventBus`] decouples engine collaborators (window layer, game
//! logic, scene scripts) without any global state: it is a plain value
//! the application owns and passes where needed. Events are ordinary
//! types; handlers subscribe per event type and receive only matching
//! dispatches.
//!
//! Two delivery modes exist: [`dispatch`](EventBus::dispatch) calls
//! handlers synchronously, while [`queue`](EventBus::queue) defers the
//! event until the next [`process_queue`](EventBus::process_queue),
//! typically at a frame boundary.

use crate::ecs::Entity;
use glam::Vec3;
use std::any::{Any, TypeId};
use std::collections::HashMap;

/// Marker trait for event payloads
///
/// Any `'static` type can be dispatched; there is nothing to implement.
pub trait Event: 'static {}

impl<T: 'static> Event for T {}

/// Handle identifying one subscription, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

struct Subscriber {
    id: SubscriptionId,
    callback: Box<dyn FnMut(&dyn Any)>,
}

struct QueuedEvent {
    type_id: TypeId,
    payload: Box<dyn Any>,
}

/// Publish/subscribe hub for typed events
///
/// Handlers for one event type run in subscription order. The bus is a
/// frame-loop object, not a synchronization primitive; it is neither
/// `Send` nor `Sync` and expects to live on the thread driving the
/// engine.
///
/// # Examples
///
/// ```
/// use sandbox_engine::events::EventBus;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// struct Damage {
///     amount: i32,
/// }
///
/// let mut bus = EventBus::new();
/// let total = Rc::new(Cell::new(0));
///
/// let seen = Rc::clone(&total);
/// bus.subscribe(move |event: &Damage| seen.set(seen.get() + event.amount));
///
/// bus.dispatch(&Damage { amount: 3 });
/// bus.dispatch(&Damage { amount: 4 });
/// assert_eq!(total.get(), 7);
/// ```
#[derive(Default)]
pub struct EventBus {
    subscribers: HashMap<TypeId, Vec<Subscriber>>,
    queued: Vec<QueuedEvent>,
    next_id: u32,
}

impl EventBus {
    /// Create a new bus with no subscribers
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a handler to every dispatch of event type `E`
    ///
    /// Returns the id to pass to [`unsubscribe`](EventBus::unsubscribe).
    pub fn subscribe<E: Event>(&mut self, mut handler: impl FnMut(&E) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        let callback = Box::new(move |event: &dyn Any| {
            if let Some(event) = event.downcast_ref::<E>() {
                handler(event);
            }
        });
        self.subscribers
            .entry(TypeId::of::<E>())
            .or_default()
            .push(Subscriber { id, callback });
        id
    }

    /// Drop the subscription with the given id
    ///
    /// Returns whether a subscription was actually removed; a stale or
    /// foreign id is a no-op.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let mut removed = false;
        for subscribers in self.subscribers.values_mut() {
            let before = subscribers.len();
            subscribers.retain(|subscriber| subscriber.id != id);
            removed |= subscribers.len() != before;
        }
        removed
    }

    /// Synchronously deliver an event to all matching subscribers
    pub fn dispatch<E: Event>(&mut self, event: &E) {
        if let Some(subscribers) = self.subscribers.get_mut(&TypeId::of::<E>()) {
            for subscriber in subscribers.iter_mut() {
                (subscriber.callback)(event);
            }
        }
    }

    /// Defer an event until the next [`process_queue`](EventBus::process_queue)
    pub fn queue<E: Event>(&mut self, event: E) {
        self.queued.push(QueuedEvent {
            type_id: TypeId::of::<E>(),
            payload: Box::new(event),
        });
    }

    /// Deliver all queued events in queue order
    ///
    /// Events queued by handlers during this call are held for the
    /// next call, so one invocation always terminates.
    pub fn process_queue(&mut self) {
        let queued = std::mem::take(&mut self.queued);
        for event in queued {
            if let Some(subscribers) = self.subscribers.get_mut(&event.type_id) {
                for subscriber in subscribers.iter_mut() {
                    (subscriber.callback)(event.payload.as_ref());
                }
            }
        }
    }

    /// Number of handlers subscribed to event type `E`
    pub fn subscriber_count<E: Event>(&self) -> usize {
        self.subscribers
            .get(&TypeId::of::<E>())
            .map_or(0, Vec::len)
    }

    /// Number of events waiting in the queue
    pub fn queued_event_count(&self) -> usize {
        self.queued.len()
    }

    /// Drop every subscription and queued event
    pub fn clear(&mut self) {
        self.subscribers.clear();
        self.queued.clear();
    }
}

/// Two solid colliders overlapped during a physics step
///
/// Declared for scene-level collision wiring; the physics step itself
/// resolves contacts without publishing them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    /// First entity of the contact pair
    pub entity_a: Entity,
    /// Second entity of the contact pair
    pub entity_b: Entity,
    /// Approximate world-space contact location
    pub contact_point: Vec3,
}

/// A body entered a trigger volume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerEnterEvent {
    /// The trigger collider's entity
    pub trigger: Entity,
    /// The entity that entered the trigger
    pub other: Entity,
}
