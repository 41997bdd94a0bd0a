//! Release handles for observer registrations.

use std::fmt;

/// Keeps an observer registration alive; dropping it unsubscribes.
///
/// The release hook runs at most once, whether through [`Subscription::release`]
/// or `Drop`.
#[must_use = "dropping a Subscription releases it immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

/// Holds at most one subscription for a component; replacing or clearing the
/// slot releases the previous one.
#[derive(Debug, Default)]
pub struct SubscriptionSlot {
    current: Option<Subscription>,
}

impl SubscriptionSlot {
    pub fn replace(&mut self, subscription: Subscription) {
        self.current = Some(subscription);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn is_occupied(&self) -> bool {
        self.current.is_some()
    }
}
