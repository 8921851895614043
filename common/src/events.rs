//! Typed publish/subscribe channel between components that do not share a
//! parent, e.g. the sidebar opening a modal mounted by the page shell.
//!
//! The bus lives in the application context for the whole session. Each
//! component keeps the [`Subscription`]s it registers in its own state;
//! dropping them on unmount removes the handlers, so a destroyed component is
//! never called back.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::model::press_release::PressRelease;

/// What a delete-confirmation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    PressRelease,
    Client,
    Journalist,
    PublishedLink,
}

impl ResourceKind {
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::PressRelease => "press release",
            ResourceKind::Client => "client",
            ResourceKind::Journalist => "journalist",
            ResourceKind::PublishedLink => "published link",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeleteTarget {
    pub id: String,
    pub kind: ResourceKind,
}

impl DeleteTarget {
    pub fn new(id: impl Into<String>, kind: ResourceKind) -> Self {
        Self { id: id.into(), kind }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Open the AI generation modal for a (usually empty) press release.
    OpenGenerateModal(PressRelease),
    OpenTemplateSelector,
    /// Open the distribution modal for a press release id.
    OpenShareModal(String),
    OpenDeleteModal(DeleteTarget),
    /// A delete confirmed by the server.
    Deleted(DeleteTarget),
    ReloadData,
    ReloadPressReleases,
    ReloadDashboard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    OpenGenerateModal,
    OpenTemplateSelector,
    OpenShareModal,
    OpenDeleteModal,
    Deleted,
    ReloadData,
    ReloadPressReleases,
    ReloadDashboard,
}

/// Events routed by a discriminant.
pub trait Event {
    type Kind: Copy + Eq;

    fn kind(&self) -> Self::Kind;
}

impl Event for AppEvent {
    type Kind = EventKind;

    fn kind(&self) -> EventKind {
        match self {
            AppEvent::OpenGenerateModal(_) => EventKind::OpenGenerateModal,
            AppEvent::OpenTemplateSelector => EventKind::OpenTemplateSelector,
            AppEvent::OpenShareModal(_) => EventKind::OpenShareModal,
            AppEvent::OpenDeleteModal(_) => EventKind::OpenDeleteModal,
            AppEvent::Deleted(_) => EventKind::Deleted,
            AppEvent::ReloadData => EventKind::ReloadData,
            AppEvent::ReloadPressReleases => EventKind::ReloadPressReleases,
            AppEvent::ReloadDashboard => EventKind::ReloadDashboard,
        }
    }
}

type Handler<E> = Rc<dyn Fn(&E)>;

struct Entry<E: Event> {
    id: u64,
    kind: E::Kind,
    handler: Handler<E>,
}

struct Registry<E: Event> {
    next_id: u64,
    entries: Vec<Entry<E>>,
}

impl<E: Event> Registry<E> {
    fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        before != self.entries.len()
    }
}

pub struct EventBus<E: Event> {
    registry: Rc<RefCell<Registry<E>>>,
}

impl<E: Event> EventBus<E> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Registers `handler` for events of `kind`. The handler stays registered
    /// until the returned subscription is dropped or passed to [`off`].
    ///
    /// [`off`]: EventBus::off
    #[must_use = "dropping the subscription unregisters the handler"]
    pub fn on(&self, kind: E::Kind, handler: impl Fn(&E) + 'static) -> Subscription
    where
        E: 'static,
    {
        let id = {
            let mut registry = self.registry.borrow_mut();
            registry.next_id += 1;
            let id = registry.next_id;
            registry.entries.push(Entry {
                id,
                kind,
                handler: Rc::new(handler),
            });
            id
        };
        let weak: Weak<RefCell<Registry<E>>> = Rc::downgrade(&self.registry);
        Subscription {
            id,
            release: Some(Box::new(move |id| {
                if let Some(registry) = weak.upgrade() {
                    registry.borrow_mut().remove(id);
                }
            })),
        }
    }

    /// Unregisters a handler before its subscription is dropped.
    pub fn off(&self, subscription: &mut Subscription) {
        self.registry.borrow_mut().remove(subscription.id);
        subscription.release = None;
    }

    /// Delivers `event` to every handler registered for its kind, in
    /// registration order. Handlers may subscribe, unsubscribe or emit again;
    /// those changes apply from the next emit on.
    pub fn emit(&self, event: E) {
        let kind = event.kind();
        let handlers: Vec<Handler<E>> = self
            .registry
            .borrow()
            .entries
            .iter()
            .filter(|entry| entry.kind == kind)
            .map(|entry| Rc::clone(&entry.handler))
            .collect();
        for handler in handlers {
            handler(&event);
        }
    }

    pub fn handler_count(&self) -> usize {
        self.registry.borrow().entries.len()
    }
}

impl<E: Event> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event> Clone for EventBus<E> {
    fn clone(&self) -> Self {
        Self {
            registry: Rc::clone(&self.registry),
        }
    }
}

/// Buses compare by identity, which is what context consumers need.
impl<E: Event> PartialEq for EventBus<E> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.registry, &other.registry)
    }
}

impl<E: Event> fmt::Debug for EventBus<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &self.handler_count())
            .finish()
    }
}

/// Handle to a registered handler. Dropping it unregisters the handler.
pub struct Subscription {
    id: u64,
    release: Option<Box<dyn FnOnce(u64)>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release(self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn routes_events_by_kind() {
        let bus = EventBus::<AppEvent>::new();
        let opened = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&opened);
        let _share = bus.on(EventKind::OpenShareModal, move |event| {
            if let AppEvent::OpenShareModal(id) = event {
                sink.borrow_mut().push(id.clone());
            }
        });

        bus.emit(AppEvent::ReloadData);
        bus.emit(AppEvent::OpenShareModal("pr1".into()));
        assert_eq!(*opened.borrow(), vec!["pr1".to_string()]);
    }

    #[test]
    fn dropping_subscription_unregisters() {
        let bus = EventBus::<AppEvent>::new();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let subscription = bus.on(EventKind::ReloadData, move |_| counter.set(counter.get() + 1));

        bus.emit(AppEvent::ReloadData);
        drop(subscription);
        bus.emit(AppEvent::ReloadData);
        assert_eq!(calls.get(), 1);
        assert_eq!(bus.handler_count(), 0);
    }

    #[test]
    fn off_unregisters_and_drop_is_then_a_no_op() {
        let bus = EventBus::<AppEvent>::new();
        let mut subscription = bus.on(EventKind::ReloadDashboard, |_| {});
        bus.off(&mut subscription);
        assert_eq!(bus.handler_count(), 0);
        drop(subscription);
        assert_eq!(bus.handler_count(), 0);
    }

    #[test]
    fn handler_may_subscribe_and_emit_while_dispatching() {
        let bus = EventBus::<AppEvent>::new();
        let late = Rc::new(RefCell::new(Vec::new()));
        let reloads = Rc::new(Cell::new(0));

        let inner_bus = bus.clone();
        let keep = Rc::clone(&late);
        let _deleted = bus.on(EventKind::Deleted, move |_| {
            keep.borrow_mut().push(inner_bus.on(EventKind::ReloadData, |_| {}));
            inner_bus.emit(AppEvent::ReloadPressReleases);
        });
        let counter = Rc::clone(&reloads);
        let _reload = bus.on(EventKind::ReloadPressReleases, move |_| counter.set(counter.get() + 1));

        bus.emit(AppEvent::Deleted(DeleteTarget::new("pr1", ResourceKind::PressRelease)));
        assert_eq!(reloads.get(), 1);
        assert_eq!(late.borrow().len(), 1);
        assert_eq!(bus.handler_count(), 3);
    }

    #[test]
    fn subscription_outliving_bus_is_harmless() {
        let bus = EventBus::<AppEvent>::new();
        let subscription = bus.on(EventKind::ReloadData, |_| {});
        drop(bus);
        drop(subscription);
    }
}
