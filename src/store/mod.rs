//! In-memory repositories
//!
//! Accounts and customers live in process memory for the lifetime of the
//! store. The account store keeps a primary index by account id and a
//! secondary index from customer id to account ids in insertion order.

use std::collections::{HashMap, HashSet};

use crate::domain::{Account, AccountId, AccountNumber, Customer, CustomerId};

/// Repository of all created accounts.
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: HashMap<AccountId, Account>,
    by_customer: HashMap<CustomerId, Vec<AccountId>>,
    numbers: HashSet<AccountNumber>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an account, indexing it by id and by customer.
    ///
    /// Map semantics on id collision: the previous entry is replaced. The
    /// account factory is the component that keeps generated ids unique.
    pub fn insert(&mut self, account: Account) {
        let id = account.account_id().clone();

        self.numbers.insert(account.account_number().clone());

        let ids = self
            .by_customer
            .entry(account.customer_id().clone())
            .or_default();
        if !ids.contains(&id) {
            ids.push(id.clone());
        }

        self.accounts.insert(id, account);
    }

    /// Look up one account by its id.
    pub fn find_by_id(&self, account_id: &AccountId) -> Option<&Account> {
        self.accounts.get(account_id)
    }

    /// Mutable lookup, used to apply transactions to a stored account.
    pub fn find_by_id_mut(&mut self, account_id: &AccountId) -> Option<&mut Account> {
        self.accounts.get_mut(account_id)
    }

    /// All accounts belonging to a customer, in insertion order.
    pub fn find_by_customer(&self, customer_id: &CustomerId) -> Vec<&Account> {
        self.by_customer
            .get(customer_id)
            .map(|ids| ids.iter().filter_map(|id| self.accounts.get(id)).collect())
            .unwrap_or_default()
    }

    pub fn contains_id(&self, account_id: &AccountId) -> bool {
        self.accounts.contains_key(account_id)
    }

    pub fn contains_number(&self, account_number: &AccountNumber) -> bool {
        self.numbers.contains(account_number)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

/// Repository of customer records.
///
/// The account factory constructs customers but persists nothing; this store
/// is the explicit collaborator callers use to keep those records.
#[derive(Debug, Default)]
pub struct CustomerStore {
    customers: HashMap<CustomerId, Customer>,
}

impl CustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, customer: Customer) {
        self.customers
            .insert(customer.customer_id().clone(), customer);
    }

    pub fn find_by_id(&self, customer_id: &CustomerId) -> Option<&Customer> {
        self.customers.get(customer_id)
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Account;
    use rust_decimal_macros::dec;

    fn account(id: &str, customer: &str, number: &str) -> Account {
        Account::open(
            AccountId::new(id),
            CustomerId::new(customer),
            AccountNumber::new(number),
        )
    }

    #[test]
    fn test_empty_store_finds_nothing() {
        let store = AccountStore::new();

        assert!(store.is_empty());
        assert!(store.find_by_id(&AccountId::new("1000000000000000")).is_none());
        assert!(store.find_by_customer(&CustomerId::new("1")).is_empty());
    }

    #[test]
    fn test_insert_then_find_by_id() {
        let mut store = AccountStore::new();
        store.insert(account("1000000000000000", "1", "2000000000000000"));

        let found = store.find_by_id(&AccountId::new("1000000000000000"));
        assert!(found.is_some());
        assert_eq!(found.unwrap().customer_id().as_str(), "1");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_find_by_id_for_unknown_id() {
        let mut store = AccountStore::new();
        store.insert(account("1000000000000000", "1", "2000000000000000"));

        assert!(store.find_by_id(&AccountId::new("9999999999999999")).is_none());
    }

    #[test]
    fn test_find_by_customer_preserves_insertion_order() {
        let mut store = AccountStore::new();
        store.insert(account("1000000000000003", "7", "2000000000000003"));
        store.insert(account("1000000000000001", "7", "2000000000000001"));
        store.insert(account("1000000000000002", "8", "2000000000000002"));

        let accounts = store.find_by_customer(&CustomerId::new("7"));
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].account_id().as_str(), "1000000000000003");
        assert_eq!(accounts[1].account_id().as_str(), "1000000000000001");

        let accounts = store.find_by_customer(&CustomerId::new("8"));
        assert_eq!(accounts.len(), 1);
    }

    #[test]
    fn test_contains_id_and_number() {
        let mut store = AccountStore::new();
        store.insert(account("1000000000000000", "1", "2000000000000000"));

        assert!(store.contains_id(&AccountId::new("1000000000000000")));
        assert!(!store.contains_id(&AccountId::new("2000000000000000")));
        assert!(store.contains_number(&AccountNumber::new("2000000000000000")));
        assert!(!store.contains_number(&AccountNumber::new("1000000000000000")));
    }

    #[test]
    fn test_mutation_through_store_is_visible() {
        let mut store = AccountStore::new();
        store.insert(account("1000000000000000", "1", "2000000000000000"));
        let id = AccountId::new("1000000000000000");

        store.find_by_id_mut(&id).unwrap().deposit(dec!(75)).unwrap();

        assert_eq!(store.find_by_id(&id).unwrap().balance(), dec!(75));
    }

    #[test]
    fn test_customer_store_roundtrip() {
        let mut store = CustomerStore::new();
        assert!(store.is_empty());

        let customer =
            Customer::new(CustomerId::new("1"), "A", "a@x.com", "555").unwrap();
        store.insert(customer);

        let found = store.find_by_id(&CustomerId::new("1"));
        assert!(found.is_some());
        assert_eq!(found.unwrap().name(), "A");
        assert_eq!(store.len(), 1);
        assert!(store.find_by_id(&CustomerId::new("2")).is_none());
    }
}
