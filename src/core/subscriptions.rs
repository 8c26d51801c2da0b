//! Handles owned by the currently mounted page

/// Handles, such as event listeners, acquired by one mount of the page.
///
/// Releasing hands every handle back to the caller and leaves the set empty,
/// so a remount starts from nothing instead of stacking on the old handles.
#[derive(Debug)]
pub struct Subscriptions<T> {
    active: Vec<T>,
}

impl<T> Default for Subscriptions<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Subscriptions<T> {
    pub const fn new() -> Self {
        Self { active: Vec::new() }
    }

    pub fn add(&mut self, handle: T) {
        self.active.push(handle);
    }

    /// Take every handle, oldest first
    pub fn release(&mut self) -> Vec<T> {
        std::mem::take(&mut self.active)
    }
}
