//! Investment account: flat management fee, waived for accounts older than
//! ten years.

use crate::account::core::AccountCore;
use crate::money::format_amount;
use crate::strategy::{fee_waiver_cutoff, ManagementFeeStrategy, ServiceChargeStrategy};
use chrono::{Local, NaiveDate};
use std::fmt;

/// Default management fee when the supplied value is missing or invalid.
pub const DEFAULT_MANAGEMENT_FEE: f64 = 2.55;

/// An investment account carrying a management fee.
pub struct InvestmentAccount {
    core: AccountCore,
    management_fee: f64,
    waiver_cutoff: NaiveDate,
    strategy: Box<dyn ServiceChargeStrategy>,
}

impl InvestmentAccount {
    /// Creates an investment account. The fee-waiver cutoff is computed once
    /// here and shared with the bound strategy, so the displayed fee status
    /// and the charged amount always agree.
    pub fn new(
        account_number: u32,
        client_number: u32,
        balance: f64,
        date_created: Option<NaiveDate>,
        management_fee: Option<f64>,
    ) -> Self {
        let management_fee = management_fee
            .filter(|value| value.is_finite())
            .unwrap_or(DEFAULT_MANAGEMENT_FEE);
        let waiver_cutoff = fee_waiver_cutoff(Local::now().date_naive());
        let core = AccountCore::new(account_number, client_number, balance, date_created);
        let strategy = Box::new(ManagementFeeStrategy::new(
            core.date_created(),
            management_fee,
            waiver_cutoff,
        ));

        Self {
            core,
            management_fee,
            waiver_cutoff,
            strategy,
        }
    }

    pub fn core(&self) -> &AccountCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut AccountCore {
        &mut self.core
    }

    pub fn management_fee(&self) -> f64 {
        self.management_fee
    }

    /// Whether the management fee is waived. Accounts created on or before
    /// the cutoff (ten years ago) qualify; strictly newer accounts pay.
    pub fn fee_waived(&self) -> bool {
        self.core.date_created() <= self.waiver_cutoff
    }

    /// Service charges for the account's current state, delegated to the
    /// bound strategy.
    pub fn service_charges(&self) -> f64 {
        self.strategy.calculate_service_charges(&self.core)
    }
}

impl fmt::Display for InvestmentAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fee_text = if self.fee_waived() {
            "Waived".to_string()
        } else {
            format!("${}", format_amount(self.management_fee))
        };

        write!(
            f,
            "{}\nDate Created: {} Management Fee: {} Account Type: Investment",
            self.core,
            self.core.date_created(),
            fee_text
        )
    }
}
