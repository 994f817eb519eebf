//! Address book
//!
//! Labeled address records keyed by the address string. Accessed only from
//! the command path, so a plain map is enough.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::error::{WalletError, WalletResult};

#[derive(Debug, Clone)]
pub struct AddressBookEntry {
    pub address: String,
    pub label: String,
    pub description: String,
    pub created_time: DateTime<Utc>,
    pub last_used_time: Option<DateTime<Utc>>,
    pub use_count: u32,
}

#[derive(Debug, Default)]
pub struct AddressBook {
    entries: BTreeMap<String, AddressBookEntry>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new entry; duplicate addresses are rejected
    pub fn add(&mut self, address: &str, label: &str, description: &str) -> WalletResult<()> {
        if self.entries.contains_key(address) {
            return Err(WalletError::AlreadyExists(address.to_string()));
        }
        self.entries.insert(
            address.to_string(),
            AddressBookEntry {
                address: address.to_string(),
                label: label.to_string(),
                description: description.to_string(),
                created_time: Utc::now(),
                last_used_time: None,
                use_count: 0,
            },
        );
        Ok(())
    }

    pub fn remove(&mut self, address: &str) -> WalletResult<()> {
        self.entries
            .remove(address)
            .map(|_| ())
            .ok_or_else(|| WalletError::NotFound(format!("address book entry {address}")))
    }

    /// Update label and/or description, leaving omitted fields untouched
    pub fn update(
        &mut self,
        address: &str,
        label: Option<&str>,
        description: Option<&str>,
    ) -> WalletResult<()> {
        let entry = self.entry_mut(address)?;
        if let Some(label) = label {
            entry.label = label.to_string();
        }
        if let Some(description) = description {
            entry.description = description.to_string();
        }
        Ok(())
    }

    /// Bump the use counter and stamp the last-used time
    pub fn mark_used(&mut self, address: &str) -> WalletResult<()> {
        let entry = self.entry_mut(address)?;
        entry.use_count += 1;
        entry.last_used_time = Some(Utc::now());
        Ok(())
    }

    pub fn get(&self, address: &str) -> Option<&AddressBookEntry> {
        self.entries.get(address)
    }

    pub fn list(&self) -> Vec<&AddressBookEntry> {
        self.entries.values().collect()
    }

    fn entry_mut(&mut self, address: &str) -> WalletResult<&mut AddressBookEntry> {
        self.entries
            .get_mut(address)
            .ok_or_else(|| WalletError::NotFound(format!("address book entry {address}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_duplicate() {
        let mut book = AddressBook::new();
        book.add("fire1", "alice", "rent").unwrap();
        assert!(matches!(
            book.add("fire1", "bob", ""),
            Err(WalletError::AlreadyExists(_))
        ));
        assert_eq!(book.list().len(), 1);
    }

    #[test]
    fn update_is_partial() {
        let mut book = AddressBook::new();
        book.add("fire1", "alice", "rent").unwrap();
        book.update("fire1", Some("alice2"), None).unwrap();

        let entry = book.get("fire1").unwrap();
        assert_eq!(entry.label, "alice2");
        assert_eq!(entry.description, "rent");
    }

    #[test]
    fn mark_used_counts_and_stamps() {
        let mut book = AddressBook::new();
        book.add("fire1", "alice", "").unwrap();
        book.mark_used("fire1").unwrap();
        book.mark_used("fire1").unwrap();

        let entry = book.get("fire1").unwrap();
        assert_eq!(entry.use_count, 2);
        assert!(entry.last_used_time.is_some());
    }

    #[test]
    fn missing_entries_fail_with_not_found() {
        let mut book = AddressBook::new();
        assert!(matches!(book.remove("x"), Err(WalletError::NotFound(_))));
        assert!(matches!(book.mark_used("x"), Err(WalletError::NotFound(_))));
        assert!(book.get("x").is_none());
    }
}
