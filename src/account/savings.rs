//! Savings account: minimum balance with a doubled charge below it.

use crate::account::core::AccountCore;
use crate::money::format_amount;
use crate::strategy::{MinimumBalanceStrategy, ServiceChargeStrategy};
use chrono::NaiveDate;
use std::fmt;

/// Default minimum balance when the supplied value is missing or invalid.
pub const DEFAULT_MINIMUM_BALANCE: f64 = 50.0;

/// A savings account with a minimum balance requirement.
pub struct SavingsAccount {
    core: AccountCore,
    minimum_balance: f64,
    strategy: Box<dyn ServiceChargeStrategy>,
}

impl SavingsAccount {
    /// Creates a savings account, binding a minimum-balance strategy. A
    /// missing or non-finite minimum falls back to the documented default.
    pub fn new(
        account_number: u32,
        client_number: u32,
        balance: f64,
        date_created: Option<NaiveDate>,
        minimum_balance: Option<f64>,
    ) -> Self {
        let minimum_balance = minimum_balance
            .filter(|value| value.is_finite())
            .unwrap_or(DEFAULT_MINIMUM_BALANCE);

        Self {
            core: AccountCore::new(account_number, client_number, balance, date_created),
            minimum_balance,
            strategy: Box::new(MinimumBalanceStrategy::new(minimum_balance)),
        }
    }

    pub fn core(&self) -> &AccountCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut AccountCore {
        &mut self.core
    }

    pub fn minimum_balance(&self) -> f64 {
        self.minimum_balance
    }

    /// Service charges for the account's current state, delegated to the
    /// bound strategy.
    pub fn service_charges(&self) -> f64 {
        self.strategy.calculate_service_charges(&self.core)
    }
}

impl fmt::Display for SavingsAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\nMinimum Balance: ${} Account Type: Savings",
            self.core,
            format_amount(self.minimum_balance)
        )
    }
}
