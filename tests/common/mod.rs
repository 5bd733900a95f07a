//! Common test utilities

use bank_ledger::{
    AccountFactory, AccountId, AccountStore, CustomerId, CustomerStore, OpenAccountCommand,
    SequentialIdGenerator,
};

/// Factory backed by a deterministic identifier source.
pub fn deterministic_factory() -> AccountFactory {
    AccountFactory::new(Box::new(SequentialIdGenerator::new()))
}

/// Open-account command with valid demo fields.
pub fn open_command(customer_id: &str) -> OpenAccountCommand {
    OpenAccountCommand::new(CustomerId::new(customer_id), "A", "a@x.com", "555")
}

/// Open an account for the customer and insert it into both stores.
pub fn open_and_insert(
    factory: &mut AccountFactory,
    accounts: &mut AccountStore,
    customers: &mut CustomerStore,
    customer_id: &str,
) -> AccountId {
    let (account, customer) = factory
        .create_account(open_command(customer_id), accounts)
        .expect("account creation should succeed");

    let id = account.account_id().clone();
    customers.insert(customer);
    accounts.insert(account);
    id
}
