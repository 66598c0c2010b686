use company_registry_domain::{Entity, ID};
use std::sync::{
    atomic::{AtomicI64, Ordering},
    Mutex,
};

/// Entities kept in insertion order for inmemory repositories.
/// Ids are handed out once, like a serial column.
pub struct Collection<T> {
    items: Mutex<Vec<T>>,
    next_id: AtomicI64,
}

impl<T: Clone + Entity> Collection<T> {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn next_id(&self) -> ID {
        self.next_id.fetch_add(1, Ordering::SeqCst).into()
    }

    pub fn insert(&self, val: &T) {
        self.items.lock().unwrap().push(val.clone());
    }

    pub fn find(&self, val_id: &ID) -> Option<T> {
        let items = self.items.lock().unwrap();
        items.iter().find(|item| item.id() == val_id).cloned()
    }

    pub fn filter<F: FnMut(&T) -> bool>(&self, mut compare: F) -> Vec<T> {
        let items = self.items.lock().unwrap();
        items.iter().filter(|item| compare(item)).cloned().collect()
    }

    /// Returns the number of updated items
    pub fn update_where<F: Fn(&T) -> bool, U: Fn(&mut T)>(&self, compare: F, update: U) -> u64 {
        let mut items = self.items.lock().unwrap();
        let mut updated = 0;
        for item in items.iter_mut().filter(|item| compare(item)) {
            update(item);
            updated += 1;
        }
        updated
    }

    pub fn remove(&self, val_id: &ID) -> Option<T> {
        let mut items = self.items.lock().unwrap();
        let pos = items.iter().position(|item| item.id() == val_id)?;
        Some(items.remove(pos))
    }
}

impl<T: Clone + Entity> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}
