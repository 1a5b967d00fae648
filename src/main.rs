// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::Result;
use std::env;

use pixell_bank::money::format_dollars;
use pixell_bank::{Account, ChequingAccount, Client, InvestmentAccount, Observer, SavingsAccount};

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "demo" {
        // Console walkthrough mode
        run_demo()?;
    } else {
        // UI mode (default)
        run_ui_mode()?;
    }

    Ok(())
}

/// Exercises the account types, strategies and observer notifications from
/// the console, without the UI.
fn run_demo() -> Result<()> {
    use chrono::NaiveDate;
    use std::rc::Rc;

    println!("🏦 Pixell Bank — account and notification walkthrough");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let client = Rc::new(Client::new(1234, "Susan", "Chan", "schan@pixell-river.com")?);
    println!("\n👤 Client: {}", client);

    // Chequing account overdrawn past its limit
    let mut chequing = Account::Chequing(ChequingAccount::new(
        20017,
        1234,
        -600.0,
        NaiveDate::from_ymd_opt(2024, 1, 1),
        Some(-500.0),
        Some(0.10),
    ));
    let observer: Rc<dyn Observer> = client.clone();
    chequing.attach(observer.clone());

    println!("\n{}", chequing);
    println!("Service charges: {}", format_dollars(chequing.service_charges()));

    chequing.deposit(1500.0)?;
    println!("\nAfter depositing $1,500.00:\n{}", chequing);
    println!("Service charges: {}", format_dollars(chequing.service_charges()));

    // Savings account dropping below its minimum balance
    let mut savings = Account::Savings(SavingsAccount::new(
        20018,
        1234,
        1000.0,
        NaiveDate::from_ymd_opt(2025, 1, 1),
        Some(500.0),
    ));
    savings.attach(observer.clone());

    println!("\n{}", savings);
    println!("Service charges: {}", format_dollars(savings.service_charges()));

    savings.withdraw(980.0)?;
    println!(
        "\nAfter withdrawing $980.00 (low balance alert emitted):\n{}",
        savings
    );
    println!("Service charges: {}", format_dollars(savings.service_charges()));

    // Investment accounts on both sides of the fee waiver cutoff
    let recent_investment = Account::Investment(InvestmentAccount::new(
        20019,
        1234,
        1000.0,
        NaiveDate::from_ymd_opt(2020, 1, 1),
        Some(0.50),
    ));
    let old_investment = Account::Investment(InvestmentAccount::new(
        20020,
        1234,
        1000.0,
        NaiveDate::from_ymd_opt(1980, 1, 1),
        Some(0.50),
    ));

    for account in [&recent_investment, &old_investment] {
        println!("\n{}", account);
        println!("Service charges: {}", format_dollars(account.service_charges()));
    }

    // Large deposit trips the large-transaction alert
    let mut flush = Account::Chequing(ChequingAccount::new(
        20021,
        1234,
        5000.0,
        NaiveDate::from_ymd_opt(2024, 6, 1),
        None,
        None,
    ));
    flush.attach(observer);
    flush.deposit(10000.0)?;
    println!(
        "\nAfter a $10,000.00 deposit (large transaction alert emitted):\n{}",
        flush
    );

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("✓ Simulated alerts appended to output/observer_emails.txt");

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode() -> Result<()> {
    use pixell_bank::load_data;
    use std::path::Path;

    println!("🖥️  Loading Pixell Bank lookup UI...\n");

    let clients_path = Path::new("data/clients.csv");
    let accounts_path = Path::new("data/accounts.csv");

    if !clients_path.exists() || !accounts_path.exists() {
        eprintln!("❌ Data files not found!");
        eprintln!("   Expected data/clients.csv and data/accounts.csv");
        eprintln!("   Run: cargo run demo");
        eprintln!("   for a console walkthrough without data files.");
        std::process::exit(1);
    }

    println!("📊 Loading clients and accounts...");
    let (clients, accounts) = load_data(clients_path, accounts_path)?;
    println!(
        "✓ Loaded {} clients, {} accounts\n",
        clients.len(),
        accounts.len()
    );
    println!("Starting UI... (Press 'q' to quit)\n");

    let mut app = ui::App::new(clients, accounts, accounts_path.to_path_buf());
    ui::run_ui(&mut app)?;

    println!("\n✅ UI closed successfully");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode() -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or run the console walkthrough: cargo run demo");
    std::process::exit(1);
}
