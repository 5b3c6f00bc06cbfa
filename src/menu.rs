use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::AppError;

pub const SEED_ITEMS: [&str; 3] = ["Paneer Tikka Pizza", "Cheese Burger", "Veg Biryani"];

// In-memory menu, insertion ordered, names unique ignoring case
pub struct MenuStore {
    items: Mutex<Vec<String>>,
}

impl MenuStore {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }

    pub fn seeded() -> Self {
        Self {
            items: Mutex::new(SEED_ITEMS.iter().map(|s| s.to_string()).collect()),
        }
    }

    // a panic mid-push cannot leave the Vec half written, so poison is ignored
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn list(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Appends `name` and returns the list as it stands afterwards.
    pub fn add(&self, name: String) -> Result<Vec<String>, AppError> {
        let mut items = self.lock();
        let lowered = name.to_lowercase();

        if items.iter().any(|i| i.to_lowercase() == lowered) {
            return Err(AppError::DuplicateItem);
        }

        items.push(name);
        Ok(items.clone())
    }
}

impl Default for MenuStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_store_keeps_order() {
        let store = MenuStore::seeded();
        assert_eq!(store.list(), SEED_ITEMS.to_vec());
    }

    #[test]
    fn add_appends_at_end() {
        let store = MenuStore::seeded();
        let items = store.add("Masala Dosa".to_string()).unwrap();
        assert_eq!(items.last().map(String::as_str), Some("Masala Dosa"));
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn duplicate_in_any_case_is_rejected() {
        let store = MenuStore::new();
        store.add("Garlic Naan".to_string()).unwrap();
        let err = store.add("GARLIC naan".to_string()).unwrap_err();
        assert!(matches!(err, AppError::DuplicateItem));
        assert_eq!(store.list(), vec!["Garlic Naan".to_string()]);
    }

    #[test]
    fn concurrent_adds_of_same_name_admit_one() {
        let store = std::sync::Arc::new(MenuStore::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                std::thread::spawn(move || {
                    let name = if i % 2 == 0 { "Lassi" } else { "LASSI" };
                    store.add(name.to_string()).is_ok()
                })
            })
            .collect();

        let admitted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(admitted, 1);
        assert_eq!(store.len(), 1);
    }
}
