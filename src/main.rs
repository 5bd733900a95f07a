//! bank_ledger - demonstration harness
//!
//! Walks the ledger through the full account lifecycle: open an account,
//! store it, move money, and print a statement. This binary is the only
//! place that logs, prints, or catches errors; the core stays silent.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bank_ledger::{
    AccountFactory, AccountStore, Config, CustomerId, CustomerStore, IdGenerator,
    OpenAccountCommand, RandomIdGenerator, StatementGenerator, TransactionCommand,
    TransactionProcessor,
};

/// Initialize tracing/logging
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bank_ledger=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing();

    let config = Config::from_env()?;
    tracing::info!(environment = %config.environment, "Starting bank_ledger demo");

    let generator: Box<dyn IdGenerator> = match config.rng_seed {
        Some(seed) => {
            tracing::info!(seed, "Using seeded identifier generator");
            Box::new(RandomIdGenerator::from_seed(seed))
        }
        None => Box::new(RandomIdGenerator::new()),
    };

    let mut factory = AccountFactory::new(generator).with_id_max_attempts(config.id_max_attempts);
    let processor = TransactionProcessor::new();
    let statements = StatementGenerator::new();
    let mut accounts = AccountStore::new();
    let mut customers = CustomerStore::new();

    // Open an account for the demo customer.
    let customer_id = CustomerId::new("1");
    let command = OpenAccountCommand::new(
        customer_id.clone(),
        "deshdeepak",
        "desh13031992@gmail.com",
        "8756166528",
    );

    let (account, customer) = factory.create_account(command, &accounts)?;
    let account_id = account.account_id().clone();

    tracing::info!(
        account_id = %account_id,
        account_number = %account.account_number(),
        "Account opened"
    );

    customers.insert(customer);
    accounts.insert(account);

    // Make a deposit through the processor.
    {
        let account = accounts
            .find_by_id_mut(&account_id)
            .context("account disappeared from the store")?;
        processor.make_transaction(account, &TransactionCommand::deposit("1000"))?;
    }
    tracing::info!(account_id = %account_id, amount = 1000, "Deposit applied");

    let statement = statements.generate(&accounts, &account_id)?;

    // Display results
    let account = accounts
        .find_by_id(&account_id)
        .context("account disappeared from the store")?;

    println!("==================== Account Details ==========================");
    if let Some(customer) = customers.find_by_id(&customer_id) {
        println!("name:  {}", customer.name());
        println!("email: {}", customer.email());
        println!("phone: {}", customer.phone_number());
    }
    println!("Balance after transactions: {}", account.balance());
    println!("{}", serde_json::to_string_pretty(account)?);
    println!("{statement}");
    println!("===============================================================");

    Ok(())
}
