//! Domain errors.
//!
//! Transaction errors are always raised and carry a display-ready message the
//! presentation layer can show as-is. Construction errors only exist for the
//! fields that fail hard (client names); bad numeric value fields fall back to
//! documented defaults instead of erroring.

use crate::money::format_amount;
use std::fmt;
use thiserror::Error;

/// Which transaction produced the error, for message wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors raised by deposit/withdraw validation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransactionError {
    #[error("{kind} amount: {amount} must be numeric.")]
    NonNumericAmount { kind: TransactionKind, amount: f64 },

    #[error("{kind} amount: {} must be positive.", fmt_amount(.amount))]
    NegativeAmount { kind: TransactionKind, amount: f64 },

    #[error(
        "Withdrawal amount: ${} must not exceed the account balance: ${}.",
        fmt_amount(.amount),
        fmt_amount(.balance)
    )]
    ExceedsBalance { amount: f64, balance: f64 },
}

/// Errors raised when constructing a client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("First name cannot be blank.")]
    FirstNameBlank,

    #[error("Last name cannot be blank.")]
    LastNameBlank,
}

fn fmt_amount(value: &f64) -> String {
    format_amount(*value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_numeric_message() {
        let err = TransactionError::NonNumericAmount {
            kind: TransactionKind::Deposit,
            amount: f64::NAN,
        };
        assert_eq!(err.to_string(), "Deposit amount: NaN must be numeric.");
    }

    #[test]
    fn test_negative_message() {
        let err = TransactionError::NegativeAmount {
            kind: TransactionKind::Withdrawal,
            amount: -1500.0,
        };
        assert_eq!(
            err.to_string(),
            "Withdrawal amount: -1,500.00 must be positive."
        );
    }

    #[test]
    fn test_exceeds_balance_message() {
        let err = TransactionError::ExceedsBalance {
            amount: 5000.0,
            balance: 1234.5,
        };
        assert_eq!(
            err.to_string(),
            "Withdrawal amount: $5,000.00 must not exceed the account balance: $1,234.50."
        );
    }

    #[test]
    fn test_client_error_messages() {
        assert_eq!(
            ClientError::FirstNameBlank.to_string(),
            "First name cannot be blank."
        );
        assert_eq!(
            ClientError::LastNameBlank.to_string(),
            "Last name cannot be blank."
        );
    }
}
