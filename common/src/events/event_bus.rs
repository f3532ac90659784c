use crate::identifiers::InstanceId;
use super::{EventKind, GameEvent};

type Handler = Box<dyn FnMut(&GameEvent)>;

struct Subscription {
    kind: EventKind,
    handler: Handler,
}

/// Publish/subscribe channel owned by a single widget instance.
///
/// Dispatch is synchronous and in subscription order. Handlers cannot reach
/// the bus they are registered on, so a handler never re-enters `send`.
pub struct EventBus {
    instance_id: InstanceId,
    subscriptions: Vec<Subscription>,
}

impl EventBus {
    pub fn new(instance_id: InstanceId) -> Self {
        Self {
            instance_id,
            subscriptions: Vec::new(),
        }
    }

    pub fn instance_id(&self) -> &InstanceId {
        &self.instance_id
    }

    pub fn on(&mut self, kind: EventKind, handler: impl FnMut(&GameEvent) + 'static) {
        self.subscriptions.push(Subscription {
            kind,
            handler: Box::new(handler),
        });
    }

    /// Delivers `event` to every handler of its kind and returns how many ran.
    pub fn send(&mut self, event: &GameEvent) -> usize {
        let kind = event.kind();
        let mut delivered = 0;
        for subscription in self.subscriptions.iter_mut().filter(|s| s.kind == kind) {
            (subscription.handler)(event);
            delivered += 1;
        }
        delivered
    }

    pub fn send_all<'a>(&mut self, events: impl IntoIterator<Item = &'a GameEvent>) {
        for event in events {
            self.send(event);
        }
    }

    pub fn clear(&mut self, kind: EventKind) {
        self.subscriptions.retain(|s| s.kind != kind);
    }

    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.subscriptions.iter().filter(|s| s.kind == kind).count()
    }
}
