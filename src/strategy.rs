//! Service charge strategies.
//!
//! Every account binds one strategy at construction time and delegates its
//! service charge calculation to it. Strategies are pure over the account
//! state passed in plus their own bound parameters.

use crate::account::AccountCore;
use chrono::{Duration, NaiveDate};

/// Base charge shared by every strategy, in currency units.
pub const BASE_SERVICE_CHARGE: f64 = 0.50;

/// Multiplier applied to the base charge when a savings balance dips below
/// its minimum.
pub const SERVICE_CHARGE_PREMIUM: f64 = 2.0;

/// Cutoff date for management fee waivers: ten years before `today`.
///
/// Ten years is 10 x 365.25 days; the half day is truncated since calendar
/// dates carry no sub-day precision. Accounts created strictly after this
/// date pay the management fee, older accounts (including the cutoff day
/// itself) have it waived. Computed once per account and shared with the
/// bound strategy so charge and display can never disagree.
pub fn fee_waiver_cutoff(today: NaiveDate) -> NaiveDate {
    today - Duration::days((10.0 * 365.25) as i64)
}

/// Interchangeable service charge calculation bound to an account.
pub trait ServiceChargeStrategy {
    /// Returns the service charges the given account will incur.
    fn calculate_service_charges(&self, account: &AccountCore) -> f64;
}

/// Charges overdraft interest on balances below the overdraft limit.
pub struct OverdraftStrategy {
    overdraft_limit: f64,
    overdraft_rate: f64,
}

impl OverdraftStrategy {
    pub fn new(overdraft_limit: f64, overdraft_rate: f64) -> Self {
        Self {
            overdraft_limit,
            overdraft_rate,
        }
    }
}

impl ServiceChargeStrategy for OverdraftStrategy {
    fn calculate_service_charges(&self, account: &AccountCore) -> f64 {
        let mut service_charges = BASE_SERVICE_CHARGE;

        // Balance exactly at the limit incurs no surcharge.
        if account.balance() < self.overdraft_limit {
            service_charges += (self.overdraft_limit - account.balance()) * self.overdraft_rate;
        }

        service_charges
    }
}

/// Doubles the base charge when the balance falls below a minimum.
pub struct MinimumBalanceStrategy {
    minimum_balance: f64,
}

impl MinimumBalanceStrategy {
    pub fn new(minimum_balance: f64) -> Self {
        Self { minimum_balance }
    }
}

impl ServiceChargeStrategy for MinimumBalanceStrategy {
    fn calculate_service_charges(&self, account: &AccountCore) -> f64 {
        let mut service_charges = BASE_SERVICE_CHARGE;

        if account.balance() < self.minimum_balance {
            service_charges *= SERVICE_CHARGE_PREMIUM;
        }

        service_charges
    }
}

/// Adds a flat management fee unless the account is old enough to waive it.
pub struct ManagementFeeStrategy {
    date_created: NaiveDate,
    management_fee: f64,
    waiver_cutoff: NaiveDate,
}

impl ManagementFeeStrategy {
    pub fn new(date_created: NaiveDate, management_fee: f64, waiver_cutoff: NaiveDate) -> Self {
        Self {
            date_created,
            management_fee,
            waiver_cutoff,
        }
    }
}

impl ServiceChargeStrategy for ManagementFeeStrategy {
    fn calculate_service_charges(&self, _account: &AccountCore) -> f64 {
        let mut service_charges = BASE_SERVICE_CHARGE;

        // Strictly after the cutoff: the fee applies. Equality waives.
        if self.waiver_cutoff < self.date_created {
            service_charges += self.management_fee;
        }

        service_charges
    }
}
