//! Client entity.
//!
//! A client is an identity/contact record that also acts as an observer:
//! account notifications reach it through `update`, which emits a simulated
//! email alert.

use crate::alerts;
use crate::errors::ClientError;
use crate::observer::Observer;
use chrono::Local;
use std::fmt;

/// Sentinel address substituted when the supplied email fails validation.
pub const DEFAULT_EMAIL_ADDRESS: &str = "email@pixell-river.com";

/// A client of the bank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    client_number: u32,
    first_name: String,
    last_name: String,
    email_address: String,
}

impl Client {
    /// Creates a client.
    ///
    /// Names are trimmed and must not be blank. An invalid email address is
    /// not an error: it falls back to the sentinel address.
    pub fn new(
        client_number: u32,
        first_name: &str,
        last_name: &str,
        email_address: &str,
    ) -> Result<Self, ClientError> {
        let first_name = first_name.trim();
        let last_name = last_name.trim();

        if first_name.is_empty() {
            return Err(ClientError::FirstNameBlank);
        }

        if last_name.is_empty() {
            return Err(ClientError::LastNameBlank);
        }

        let email_address = email_address.trim();
        let email_address = if is_valid_email(email_address) {
            email_address.to_string()
        } else {
            DEFAULT_EMAIL_ADDRESS.to_string()
        };

        Ok(Self {
            client_number,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email_address,
        })
    }

    pub fn client_number(&self) -> u32 {
        self.client_number
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email_address(&self) -> &str {
        &self.email_address
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} [{}] - {}",
            self.last_name, self.first_name, self.client_number, self.email_address
        )
    }
}

impl Observer for Client {
    /// Reacts to an account notification by sending a simulated alert email.
    /// No record of the message is kept on the client.
    fn update(&self, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let subject = format!("ALERT: Unusual Activity: {}", timestamp);
        let body = format!(
            "Notification for {}: {} {}: {}",
            self.client_number, self.first_name, self.last_name, message
        );

        alerts::simulate_send_email(&self.email_address, &subject, &body);
    }
}

/// Minimal structural email check: one `@`, non-empty local part, dotted
/// domain, no whitespace.
fn is_valid_email(candidate: &str) -> bool {
    if candidate.contains(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_names() {
        let client = Client::new(1001, "  Susan ", " Chan  ", "schan@pixell-river.com").unwrap();

        assert_eq!(client.first_name(), "Susan");
        assert_eq!(client.last_name(), "Chan");
        assert_eq!(client.email_address(), "schan@pixell-river.com");
    }

    #[test]
    fn test_blank_first_name_fails() {
        let result = Client::new(1001, "   ", "Chan", "schan@pixell-river.com");
        assert_eq!(result.unwrap_err(), ClientError::FirstNameBlank);
    }

    #[test]
    fn test_blank_last_name_fails() {
        let result = Client::new(1001, "Susan", "", "schan@pixell-river.com");
        assert_eq!(result.unwrap_err(), ClientError::LastNameBlank);
    }

    #[test]
    fn test_invalid_email_falls_back_to_sentinel() {
        for bad in ["not-an-email", "a@b", "@pixell-river.com", "a b@c.com", ""] {
            let client = Client::new(1001, "Susan", "Chan", bad).unwrap();
            assert_eq!(client.email_address(), DEFAULT_EMAIL_ADDRESS, "{:?}", bad);
        }
    }

    #[test]
    fn test_display() {
        let client = Client::new(1001, "Susan", "Chan", "schan@pixell-river.com").unwrap();

        assert_eq!(
            client.to_string(),
            "Chan, Susan [1001] - schan@pixell-river.com"
        );
    }
}
