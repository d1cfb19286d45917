//! Observable state cells shared between the dashboard core and the view.
//!
//! An [`Observable`] is a thin handle over a Leptos [`RwSignal`]: reads inside
//! a memo or effect are tracked, and every write re-runs the dependents
//! synchronously on the current thread.

use leptos::*;

/// A value holder with `get`, `set` and `subscribe`.
pub struct Observable<T: 'static> {
    signal: RwSignal<T>,
}

impl<T: 'static> Clone for Observable<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Observable<T> {}

impl<T: 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self { signal: create_rw_signal(value) }
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.signal.get()
    }

    /// Read without registering a dependency
    pub fn get_untracked(&self) -> T
    where
        T: Clone,
    {
        self.signal.get_untracked()
    }

    /// Replace the value and notify dependents. Always notifies, even when the
    /// new value equals the old one.
    pub fn set(&self, value: T) {
        self.signal.set(value);
    }

    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.signal.update(f);
    }

    pub fn with<U>(&self, f: impl FnOnce(&T) -> U) -> U {
        self.signal.with(f)
    }

    /// Run `callback` with the current value now and after every write.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Effect<()> {
        let signal = self.signal;
        create_effect(move |_| signal.with(|value| callback(value)))
    }

    /// Underlying signal, for binding in views
    pub fn signal(&self) -> RwSignal<T> {
        self.signal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn subscriber_sees_initial_value_and_every_write() {
        let cell = Observable::new(1);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _effect = cell.subscribe(move |v| sink.borrow_mut().push(*v));

        cell.set(2);
        cell.update(|v| *v += 10);

        assert_eq!(*seen.borrow(), vec![1, 2, 12]);
    }

    #[test]
    fn memo_over_observable_recomputes_on_write() {
        let cell = Observable::new(String::from("a"));
        let upper = create_memo(move |_| cell.with(|s| s.to_uppercase()));
        assert_eq!(upper.get(), "A");
        cell.set("b".to_string());
        assert_eq!(upper.get(), "B");
    }
}
