//! Account family: shared core, three concrete variants, and a closed sum
//! type for heterogeneous collections.

mod chequing;
mod core;
mod investment;
mod savings;

pub use chequing::{ChequingAccount, DEFAULT_OVERDRAFT_LIMIT, DEFAULT_OVERDRAFT_RATE};
pub use core::{AccountCore, LARGE_TRANSACTION_THRESHOLD, LOW_BALANCE_LEVEL};
pub use investment::{InvestmentAccount, DEFAULT_MANAGEMENT_FEE};
pub use savings::{SavingsAccount, DEFAULT_MINIMUM_BALANCE};

use crate::errors::TransactionError;
use crate::observer::Observer;
use chrono::NaiveDate;
use std::fmt;
use std::rc::Rc;

/// Discriminates the account variants; also parses the persisted
/// account_type column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountType {
    Chequing,
    Savings,
    Investment,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Chequing => "Chequing",
            AccountType::Savings => "Savings",
            AccountType::Investment => "Investment",
        }
    }

    /// Parses the stored account_type value. Unknown values are rejected.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim() {
            "ChequingAccount" => Some(AccountType::Chequing),
            "SavingsAccount" => Some(AccountType::Savings),
            "InvestmentAccount" => Some(AccountType::Investment),
            _ => None,
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Any bank account. Transactions, notifications and service charges
/// dispatch to the variant, which delegates shared behavior to its core.
pub enum Account {
    Chequing(ChequingAccount),
    Savings(SavingsAccount),
    Investment(InvestmentAccount),
}

impl Account {
    pub fn account_type(&self) -> AccountType {
        match self {
            Account::Chequing(_) => AccountType::Chequing,
            Account::Savings(_) => AccountType::Savings,
            Account::Investment(_) => AccountType::Investment,
        }
    }

    pub fn core(&self) -> &AccountCore {
        match self {
            Account::Chequing(account) => account.core(),
            Account::Savings(account) => account.core(),
            Account::Investment(account) => account.core(),
        }
    }

    pub fn core_mut(&mut self) -> &mut AccountCore {
        match self {
            Account::Chequing(account) => account.core_mut(),
            Account::Savings(account) => account.core_mut(),
            Account::Investment(account) => account.core_mut(),
        }
    }

    pub fn account_number(&self) -> u32 {
        self.core().account_number()
    }

    pub fn client_number(&self) -> u32 {
        self.core().client_number()
    }

    pub fn balance(&self) -> f64 {
        self.core().balance()
    }

    pub fn date_created(&self) -> NaiveDate {
        self.core().date_created()
    }

    pub fn deposit(&mut self, amount: f64) -> Result<(), TransactionError> {
        self.core_mut().deposit(amount)
    }

    pub fn withdraw(&mut self, amount: f64) -> Result<(), TransactionError> {
        self.core_mut().withdraw(amount)
    }

    /// Service charges computed by the variant's bound strategy.
    pub fn service_charges(&self) -> f64 {
        match self {
            Account::Chequing(account) => account.service_charges(),
            Account::Savings(account) => account.service_charges(),
            Account::Investment(account) => account.service_charges(),
        }
    }

    pub fn attach(&mut self, observer: Rc<dyn Observer>) {
        self.core_mut().attach(observer);
    }

    pub fn detach(&mut self, observer: &Rc<dyn Observer>) {
        self.core_mut().detach(observer);
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Account::Chequing(account) => account.fmt(f),
            Account::Savings(account) => account.fmt(f),
            Account::Investment(account) => account.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_type_round_trip() {
        assert_eq!(
            AccountType::from_str("ChequingAccount"),
            Some(AccountType::Chequing)
        );
        assert_eq!(
            AccountType::from_str("SavingsAccount"),
            Some(AccountType::Savings)
        );
        assert_eq!(
            AccountType::from_str("InvestmentAccount"),
            Some(AccountType::Investment)
        );
        assert_eq!(AccountType::from_str("CreditAccount"), None);
    }

    #[test]
    fn test_enum_dispatches_transactions_and_charges() {
        let date_created = NaiveDate::from_ymd_opt(2024, 1, 1);
        let mut account = Account::Savings(SavingsAccount::new(
            4321,
            1,
            1000.0,
            date_created,
            Some(500.0),
        ));

        assert_eq!(account.account_type(), AccountType::Savings);
        assert_eq!(account.service_charges(), 0.50);

        account.withdraw(750.0).unwrap();
        assert_eq!(account.balance(), 250.0);
        assert_eq!(account.service_charges(), 1.0);

        account.deposit(500.0).unwrap();
        assert_eq!(account.balance(), 750.0);
        assert_eq!(account.service_charges(), 0.50);
    }

    #[test]
    fn test_enum_display_delegates_to_variant() {
        let date_created = NaiveDate::from_ymd_opt(2024, 1, 1);
        let account = Account::Chequing(ChequingAccount::new(
            1234,
            1,
            1000.0,
            date_created,
            Some(-100.0),
            Some(0.05),
        ));

        assert!(account.to_string().contains("Account Type: Chequing"));
    }
}
