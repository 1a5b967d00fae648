//! Subject/observer notification mechanism.
//!
//! A `Subject` keeps an ordered list of observers and notifies them
//! synchronously, in attachment order. The association is by shared reference
//! (`Rc`): the subject does not control observer lifetimes, and the same
//! observer can be attached to many subjects.

use std::fmt;
use std::rc::Rc;

/// Interface for parties interested in state changes of a subject.
pub trait Observer {
    /// Receives a notification message from the subject.
    fn update(&self, message: &str);
}

/// Maintains a list of observers and delivers notifications to them.
///
/// There is no duplicate check on attach: an observer attached twice receives
/// two updates per notification. Detaching an observer that is not attached is
/// a no-op.
#[derive(Default)]
pub struct Subject {
    observers: Vec<Rc<dyn Observer>>,
}

impl Subject {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Appends an observer to the notification list.
    pub fn attach(&mut self, observer: Rc<dyn Observer>) {
        self.observers.push(observer);
    }

    /// Removes the first matching observer, by reference identity.
    pub fn detach(&mut self, observer: &Rc<dyn Observer>) {
        if let Some(position) = self
            .observers
            .iter()
            .position(|existing| Rc::ptr_eq(existing, observer))
        {
            self.observers.remove(position);
        }
    }

    /// Delivers the message to every attached observer, in attachment order.
    pub fn notify(&self, message: &str) {
        for observer in &self.observers {
            observer.update(message);
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl fmt::Debug for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject")
            .field("observers", &self.observers.len())
            .finish()
    }
}
