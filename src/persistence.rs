//! CSV-backed persistence for clients and accounts.
//!
//! Two tabular files back the system: `clients.csv` and `accounts.csv`.
//! Loading is row-by-row and forgiving at the file level: a row that cannot
//! produce a valid entity is dropped with a logged diagnostic, it never
//! aborts the load. Identity fields parse strictly; numeric value fields
//! fall back to the entity defaults.

use crate::account::{Account, AccountType, ChequingAccount, InvestmentAccount, SavingsAccount};
use crate::client::Client;
use crate::money::parse_amount_or;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

#[derive(Debug, Deserialize)]
struct ClientRecord {
    client_number: String,
    first_name: String,
    last_name: String,
    email_address: String,
}

/// One row of accounts.csv. Variant columns are blank for account types
/// that do not use them.
#[derive(Debug, Deserialize, Serialize)]
struct AccountRecord {
    account_number: String,
    client_number: String,
    account_type: String,
    balance: String,
    date_created: String,
    #[serde(default)]
    overdraft_limit: String,
    #[serde(default)]
    overdraft_rate: String,
    #[serde(default)]
    minimum_balance: String,
    #[serde(default)]
    management_fee: String,
}

/// Loads clients keyed by client number.
pub fn load_clients(path: &Path) -> Result<HashMap<u32, Rc<Client>>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut clients = HashMap::new();

    for row in reader.deserialize::<ClientRecord>() {
        let record = match row {
            Ok(record) => record,
            Err(error) => {
                tracing::error!(%error, "unable to read client row");
                continue;
            }
        };

        let client_number = match record.client_number.trim().parse::<u32>() {
            Ok(number) => number,
            Err(_) => {
                tracing::error!(
                    client_number = %record.client_number,
                    "unable to create client: client number must be numeric"
                );
                continue;
            }
        };

        match Client::new(
            client_number,
            &record.first_name,
            &record.last_name,
            &record.email_address,
        ) {
            Ok(client) => {
                clients.insert(client_number, Rc::new(client));
            }
            Err(error) => {
                tracing::error!(%error, client_number, "unable to create client");
            }
        }
    }

    Ok(clients)
}

/// Loads accounts keyed by account number. Rows with an unknown account type
/// or a client number absent from `clients` are dropped with a diagnostic.
pub fn load_accounts(
    path: &Path,
    clients: &HashMap<u32, Rc<Client>>,
) -> Result<HashMap<u32, Account>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut accounts = HashMap::new();

    for row in reader.deserialize::<AccountRecord>() {
        let record = match row {
            Ok(record) => record,
            Err(error) => {
                tracing::error!(%error, "unable to read account row");
                continue;
            }
        };

        let Ok(account_number) = record.account_number.trim().parse::<u32>() else {
            tracing::error!(
                account_number = %record.account_number,
                "unable to create bank account: account number must be numeric"
            );
            continue;
        };

        let Ok(client_number) = record.client_number.trim().parse::<u32>() else {
            tracing::error!(
                account_number,
                client_number = %record.client_number,
                "unable to create bank account: client number must be numeric"
            );
            continue;
        };

        let Some(account_type) = AccountType::from_str(&record.account_type) else {
            tracing::error!(
                account_number,
                account_type = %record.account_type,
                "unable to create bank account: not a valid account type"
            );
            continue;
        };

        if !clients.contains_key(&client_number) {
            tracing::error!(
                account_number,
                client_number,
                "bank account references unknown client number"
            );
            continue;
        }

        let balance = parse_amount_or(&record.balance, 0.0);
        let date_created = NaiveDate::parse_from_str(record.date_created.trim(), "%Y-%m-%d").ok();

        let account = match account_type {
            AccountType::Chequing => Account::Chequing(ChequingAccount::new(
                account_number,
                client_number,
                balance,
                date_created,
                record.overdraft_limit.trim().parse().ok(),
                record.overdraft_rate.trim().parse().ok(),
            )),
            AccountType::Savings => Account::Savings(SavingsAccount::new(
                account_number,
                client_number,
                balance,
                date_created,
                record.minimum_balance.trim().parse().ok(),
            )),
            AccountType::Investment => Account::Investment(InvestmentAccount::new(
                account_number,
                client_number,
                balance,
                date_created,
                record.management_fee.trim().parse().ok(),
            )),
        };

        accounts.insert(account_number, account);
    }

    Ok(accounts)
}

/// Loads both keyed collections.
pub fn load_data(
    clients_path: &Path,
    accounts_path: &Path,
) -> Result<(HashMap<u32, Rc<Client>>, HashMap<u32, Account>)> {
    let clients = load_clients(clients_path)?;
    let accounts = load_accounts(accounts_path, &clients)?;
    Ok((clients, accounts))
}

/// Rewrites the balance of the matching row in accounts.csv, preserving all
/// other rows and columns.
pub fn update_account_balance(path: &Path, account_number: u32, balance: f64) -> Result<()> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut records = Vec::new();
    for row in reader.deserialize::<AccountRecord>() {
        let mut record = row.with_context(|| format!("failed to read {}", path.display()))?;
        if record.account_number.trim().parse::<u32>() == Ok(account_number) {
            record.balance = balance.to_string();
        }
        records.push(record);
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    for record in &records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}
