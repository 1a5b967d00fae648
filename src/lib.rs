// Pixell Bank - Core Library
// Exposes all modules for use in the lookup UI, demo driver, and tests

pub mod account;
pub mod alerts;
pub mod client;
pub mod errors;
pub mod money;
pub mod observer;
pub mod persistence;
pub mod strategy;

// Re-export commonly used types
pub use account::{
    Account, AccountCore, AccountType, ChequingAccount, InvestmentAccount, SavingsAccount,
    LARGE_TRANSACTION_THRESHOLD, LOW_BALANCE_LEVEL,
};
pub use client::{Client, DEFAULT_EMAIL_ADDRESS};
pub use errors::{ClientError, TransactionError, TransactionKind};
pub use observer::{Observer, Subject};
pub use persistence::{load_data, update_account_balance};
pub use strategy::{
    fee_waiver_cutoff, ManagementFeeStrategy, MinimumBalanceStrategy, OverdraftStrategy,
    ServiceChargeStrategy, BASE_SERVICE_CHARGE,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
