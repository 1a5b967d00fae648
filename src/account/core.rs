//! Shared account state and the validated transaction path.
//!
//! Every account variant composes an `AccountCore`. The core owns identity,
//! balance, creation date, and the observer list; the balance can only change
//! through `update_balance`, which every validated transaction funnels into.

use crate::errors::{TransactionError, TransactionKind};
use crate::money::format_amount;
use crate::observer::{Observer, Subject};
use chrono::{Local, NaiveDate};
use std::fmt;
use std::rc::Rc;

/// Balance below this level triggers a low-balance notification.
pub const LOW_BALANCE_LEVEL: f64 = 50.0;

/// Signed transaction amounts above this level trigger a large-transaction
/// notification.
pub const LARGE_TRANSACTION_THRESHOLD: f64 = 9999.99;

/// Identity, balance and notification state shared by all account variants.
#[derive(Debug)]
pub struct AccountCore {
    account_number: u32,
    client_number: u32,
    balance: f64,
    date_created: NaiveDate,
    subject: Subject,
}

impl AccountCore {
    /// Creates the core state for an account.
    ///
    /// A non-finite balance silently defaults to 0.0 and a missing creation
    /// date defaults to today; neither is an error.
    pub fn new(
        account_number: u32,
        client_number: u32,
        balance: f64,
        date_created: Option<NaiveDate>,
    ) -> Self {
        let balance = if balance.is_finite() { balance } else { 0.0 };
        let date_created = date_created.unwrap_or_else(|| Local::now().date_naive());

        Self {
            account_number,
            client_number,
            balance,
            date_created,
            subject: Subject::new(),
        }
    }

    pub fn account_number(&self) -> u32 {
        self.account_number
    }

    pub fn client_number(&self) -> u32 {
        self.client_number
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn date_created(&self) -> NaiveDate {
        self.date_created
    }

    /// Deposits the amount into the balance.
    pub fn deposit(&mut self, amount: f64) -> Result<(), TransactionError> {
        if !amount.is_finite() {
            return Err(TransactionError::NonNumericAmount {
                kind: TransactionKind::Deposit,
                amount,
            });
        }

        if amount < 0.0 {
            return Err(TransactionError::NegativeAmount {
                kind: TransactionKind::Deposit,
                amount,
            });
        }

        self.update_balance(amount);
        Ok(())
    }

    /// Withdraws the amount from the balance.
    pub fn withdraw(&mut self, amount: f64) -> Result<(), TransactionError> {
        if !amount.is_finite() {
            return Err(TransactionError::NonNumericAmount {
                kind: TransactionKind::Withdrawal,
                amount,
            });
        }

        if amount < 0.0 {
            return Err(TransactionError::NegativeAmount {
                kind: TransactionKind::Withdrawal,
                amount,
            });
        }

        if amount > self.balance {
            return Err(TransactionError::ExceedsBalance {
                amount,
                balance: self.balance,
            });
        }

        self.update_balance(-amount.abs());
        Ok(())
    }

    /// Single point of balance mutation.
    ///
    /// Non-finite amounts are silently ignored (balance unchanged). The two
    /// threshold checks still run unconditionally against the resulting
    /// balance, low-balance first. The large-transaction check compares the
    /// SIGNED amount against the positive threshold, so only large deposits
    /// trip it; large withdrawals intentionally do not.
    pub fn update_balance(&mut self, amount: f64) {
        if amount.is_finite() {
            self.balance += amount;
        }

        if self.balance < LOW_BALANCE_LEVEL {
            let message = format!(
                "Low balance warning ${}: on account {}.",
                format_amount(self.balance),
                self.account_number
            );
            self.subject.notify(&message);
        }

        if amount > LARGE_TRANSACTION_THRESHOLD {
            let message = format!(
                "Large transaction {}: on account {}.",
                amount, self.account_number
            );
            self.subject.notify(&message);
        }
    }

    pub fn attach(&mut self, observer: Rc<dyn Observer>) {
        self.subject.attach(observer);
    }

    pub fn detach(&mut self, observer: &Rc<dyn Observer>) {
        self.subject.detach(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.subject.observer_count()
    }
}

impl fmt::Display for AccountCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account Number: {} Balance: ${}",
            self.account_number,
            format_amount(self.balance)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct Recorder {
        received: RefCell<Vec<String>>,
    }

    impl Recorder {
        fn new() -> Rc<Self> {
            Rc::new(Self {
                received: RefCell::new(Vec::new()),
            })
        }
    }

    impl Observer for Recorder {
        fn update(&self, message: &str) {
            self.received.borrow_mut().push(message.to_string());
        }
    }

    fn core_with_balance(balance: f64) -> AccountCore {
        AccountCore::new(1234, 1, balance, NaiveDate::from_ymd_opt(2024, 1, 1))
    }

    #[test]
    fn test_new_initializes_state() {
        let core = core_with_balance(1000.0);

        assert_eq!(core.account_number(), 1234);
        assert_eq!(core.client_number(), 1);
        assert_eq!(core.balance(), 1000.0);
        assert_eq!(
            core.date_created(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_new_non_finite_balance_defaults_to_zero() {
        let core = core_with_balance(f64::NAN);
        assert_eq!(core.balance(), 0.0);
    }

    #[test]
    fn test_deposit_increases_balance() {
        let mut core = core_with_balance(1000.0);
        core.deposit(250.5).unwrap();

        assert_eq!(core.balance(), 1250.5);
    }

    #[test]
    fn test_deposit_negative_fails() {
        let mut core = core_with_balance(1000.0);
        let err = core.deposit(-10.0).unwrap_err();

        assert_eq!(err.to_string(), "Deposit amount: -10.00 must be positive.");
        assert_eq!(core.balance(), 1000.0);
    }

    #[test]
    fn test_deposit_non_numeric_fails() {
        let mut core = core_with_balance(1000.0);
        assert!(matches!(
            core.deposit(f64::NAN),
            Err(TransactionError::NonNumericAmount { .. })
        ));
        assert_eq!(core.balance(), 1000.0);
    }

    #[test]
    fn test_withdraw_decreases_balance() {
        let mut core = core_with_balance(1000.0);
        core.withdraw(300.0).unwrap();

        assert_eq!(core.balance(), 700.0);
    }

    #[test]
    fn test_withdraw_negative_fails() {
        let mut core = core_with_balance(1000.0);
        assert!(matches!(
            core.withdraw(-1.0),
            Err(TransactionError::NegativeAmount { .. })
        ));
    }

    #[test]
    fn test_withdraw_exceeding_balance_fails_with_both_values() {
        let mut core = core_with_balance(1234.5);
        let err = core.withdraw(5000.0).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Withdrawal amount: $5,000.00 must not exceed the account balance: $1,234.50."
        );
        assert_eq!(core.balance(), 1234.5);
    }

    #[test]
    fn test_low_balance_notification_fires_once_per_observer() {
        let mut core = core_with_balance(40.0);
        let recorder = Recorder::new();
        core.attach(recorder.clone());

        core.deposit(5.0).unwrap();

        let received = recorder.received.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0], "Low balance warning $45.00: on account 1234.");
    }

    #[test]
    fn test_large_deposit_notification() {
        let mut core = core_with_balance(1000.0);
        let recorder = Recorder::new();
        core.attach(recorder.clone());

        core.deposit(10000.0).unwrap();

        let received = recorder.received.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0], "Large transaction 10000: on account 1234.");
    }

    #[test]
    fn test_large_withdrawal_does_not_notify() {
        let mut core = core_with_balance(50000.0);
        let recorder = Recorder::new();
        core.attach(recorder.clone());

        core.withdraw(20000.0).unwrap();

        assert!(recorder.received.borrow().is_empty());
    }

    #[test]
    fn test_low_balance_fires_before_large_transaction() {
        // Deposit large enough to trip the large-transaction threshold into
        // an account deep enough in the red to stay under the low level.
        let mut core = AccountCore::new(1234, 1, 0.0, NaiveDate::from_ymd_opt(2024, 1, 1));
        core.update_balance(-20000.0);

        let recorder = Recorder::new();
        core.attach(recorder.clone());
        core.deposit(10000.0).unwrap();

        let received = recorder.received.borrow();
        assert_eq!(received.len(), 2);
        assert!(received[0].starts_with("Low balance warning"));
        assert!(received[1].starts_with("Large transaction"));
    }

    #[test]
    fn test_duplicate_attach_notifies_twice() {
        let mut core = core_with_balance(10.0);
        let recorder = Recorder::new();
        core.attach(recorder.clone());
        core.attach(recorder.clone());

        core.deposit(1.0).unwrap();

        assert_eq!(recorder.received.borrow().len(), 2);
    }

    #[test]
    fn test_detach_stops_notifications() {
        let mut core = core_with_balance(10.0);
        let recorder = Recorder::new();
        core.attach(recorder.clone());

        let handle: Rc<dyn Observer> = recorder.clone();
        core.detach(&handle);
        core.deposit(1.0).unwrap();

        assert!(recorder.received.borrow().is_empty());
    }

    #[test]
    fn test_display_formats_balance() {
        let core = core_with_balance(1000.0);
        assert_eq!(
            core.to_string(),
            "Account Number: 1234 Balance: $1,000.00"
        );
    }
}
