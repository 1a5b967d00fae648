//! Chequing account: overdraft limit and rate, overdraft service charges.

use crate::account::core::AccountCore;
use crate::money::{format_amount, format_percent};
use crate::strategy::{OverdraftStrategy, ServiceChargeStrategy};
use chrono::NaiveDate;
use std::fmt;

/// Default overdraft limit when the supplied value is missing or invalid.
pub const DEFAULT_OVERDRAFT_LIMIT: f64 = -100.0;

/// Default overdraft rate when the supplied value is missing or invalid.
pub const DEFAULT_OVERDRAFT_RATE: f64 = 0.05;

/// A chequing account with an overdraft arrangement.
pub struct ChequingAccount {
    core: AccountCore,
    overdraft_limit: f64,
    overdraft_rate: f64,
    strategy: Box<dyn ServiceChargeStrategy>,
}

impl ChequingAccount {
    /// Creates a chequing account, binding an overdraft strategy to the
    /// resolved limit and rate. Missing or non-finite limit/rate values fall
    /// back to the documented defaults.
    pub fn new(
        account_number: u32,
        client_number: u32,
        balance: f64,
        date_created: Option<NaiveDate>,
        overdraft_limit: Option<f64>,
        overdraft_rate: Option<f64>,
    ) -> Self {
        let overdraft_limit = overdraft_limit
            .filter(|value| value.is_finite())
            .unwrap_or(DEFAULT_OVERDRAFT_LIMIT);
        let overdraft_rate = overdraft_rate
            .filter(|value| value.is_finite())
            .unwrap_or(DEFAULT_OVERDRAFT_RATE);

        Self {
            core: AccountCore::new(account_number, client_number, balance, date_created),
            overdraft_limit,
            overdraft_rate,
            strategy: Box::new(OverdraftStrategy::new(overdraft_limit, overdraft_rate)),
        }
    }

    pub fn core(&self) -> &AccountCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut AccountCore {
        &mut self.core
    }

    pub fn overdraft_limit(&self) -> f64 {
        self.overdraft_limit
    }

    pub fn overdraft_rate(&self) -> f64 {
        self.overdraft_rate
    }

    /// Service charges for the account's current state, delegated to the
    /// bound strategy.
    pub fn service_charges(&self) -> f64 {
        self.strategy.calculate_service_charges(&self.core)
    }
}

impl fmt::Display for ChequingAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\nOverdraft Limit: ${} Overdraft Rate: {} Account Type: Chequing",
            self.core,
            format_amount(self.overdraft_limit),
            format_percent(self.overdraft_rate)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, month, day)
    }

    #[test]
    fn test_new_binds_supplied_values() {
        let account =
            ChequingAccount::new(1234, 1, 1000.0, date(2024, 1, 1), Some(-500.0), Some(0.1));

        assert_eq!(account.overdraft_limit(), -500.0);
        assert_eq!(account.overdraft_rate(), 0.1);
        assert_eq!(account.core().balance(), 1000.0);
    }

    #[test]
    fn test_new_invalid_limit_and_rate_default() {
        let account =
            ChequingAccount::new(1234, 1, 1000.0, date(2024, 1, 1), None, Some(f64::NAN));

        assert_eq!(account.overdraft_limit(), -100.0);
        assert_eq!(account.overdraft_rate(), 0.05);
    }

    #[test]
    fn test_service_charges_overdrawn_past_limit() {
        let account =
            ChequingAccount::new(1234, 1, -600.0, date(2024, 1, 1), Some(-500.0), Some(0.1));

        // 0.50 base + (-500 - -600) * 0.1
        assert!((account.service_charges() - 10.5).abs() < 1e-9);
    }

    #[test]
    fn test_service_charges_within_limit() {
        let account =
            ChequingAccount::new(1234, 1, 1000.0, date(2024, 1, 1), Some(-500.0), Some(0.1));

        assert_eq!(account.service_charges(), 0.50);
    }

    #[test]
    fn test_display() {
        let account =
            ChequingAccount::new(1234, 1, 1000.0, date(2024, 1, 1), Some(-100.0), Some(0.05));

        assert_eq!(
            account.to_string(),
            "Account Number: 1234 Balance: $1,000.00\n\
             Overdraft Limit: $-100.00 Overdraft Rate: 5.00% Account Type: Chequing"
        );
    }
}
