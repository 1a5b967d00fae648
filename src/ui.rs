use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pixell_bank::money::format_dollars;
use pixell_bank::{update_account_balance, Account, Client, TransactionKind};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Lookup,
    Details,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Query,
    Accounts,
}

pub struct App {
    pub clients: HashMap<u32, Rc<Client>>,
    pub accounts: HashMap<u32, Account>,
    pub accounts_path: PathBuf,
    pub page: Page,
    pub focus: Focus,
    pub query: String,
    pub client_banner: String,
    pub listed_accounts: Vec<u32>,
    pub table_state: TableState,
    pub selected_account: Option<u32>,
    pub amount_input: String,
    pub status: String,
}

impl App {
    pub fn new(
        clients: HashMap<u32, Rc<Client>>,
        accounts: HashMap<u32, Account>,
        accounts_path: PathBuf,
    ) -> Self {
        Self {
            clients,
            accounts,
            accounts_path,
            page: Page::Lookup,
            focus: Focus::Query,
            query: String::new(),
            client_banner: String::new(),
            listed_accounts: Vec::new(),
            table_state: TableState::default(),
            selected_account: None,
            amount_input: String::new(),
            status: String::from("Enter a client number and press Enter."),
        }
    }

    /// Looks up the client for the current query and lists their accounts.
    pub fn lookup_client(&mut self) {
        self.clear_listing();

        let client_number = match self.query.trim().parse::<u32>() {
            Ok(number) => number,
            Err(_) => {
                self.status = String::from("The client number must be a numeric value.");
                return;
            }
        };

        let Some(client) = self.clients.get(&client_number) else {
            self.status = format!("Client number: {} not found.", client_number);
            return;
        };

        self.client_banner =
            format!("Client Name: {} {}", client.first_name(), client.last_name());

        self.listed_accounts = self
            .accounts
            .values()
            .filter(|account| account.client_number() == client_number)
            .map(|account| account.account_number())
            .collect();
        self.listed_accounts.sort_unstable();

        if self.listed_accounts.is_empty() {
            self.status = format!("Client {} has no accounts.", client_number);
        } else {
            self.table_state.select(Some(0));
            self.focus = Focus::Accounts;
            self.status = format!(
                "{} account(s) found. Enter opens the selected account.",
                self.listed_accounts.len()
            );
        }
    }

    fn clear_listing(&mut self) {
        self.client_banner.clear();
        self.listed_accounts.clear();
        self.table_state.select(None);
        self.focus = Focus::Query;
    }

    pub fn next_account(&mut self) {
        let len = self.listed_accounts.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn previous_account(&mut self) {
        let len = self.listed_accounts.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    /// Opens the details page for the selected table row.
    pub fn open_details(&mut self) {
        let Some(index) = self.table_state.selected() else {
            self.status = String::from("Please select a valid record.");
            return;
        };
        let Some(&account_number) = self.listed_accounts.get(index) else {
            self.status = String::from("Please select a valid record.");
            return;
        };
        if !self.accounts.contains_key(&account_number) {
            self.status = String::from("Bank Account selected does not exist.");
            return;
        }

        self.selected_account = Some(account_number);
        self.amount_input.clear();
        self.page = Page::Details;
        self.status = String::from("Type an amount, then 'd' to deposit or 'w' to withdraw.");
    }

    pub fn back_to_lookup(&mut self) {
        self.page = Page::Lookup;
        self.selected_account = None;
        self.amount_input.clear();
        self.status = String::from("Enter a client number and press Enter.");
    }

    /// Applies a deposit or withdrawal to the selected account. Errors are
    /// shown in the status line; successes are persisted.
    pub fn apply_transaction(&mut self, kind: TransactionKind) {
        let Some(account_number) = self.selected_account else {
            return;
        };

        let amount = match self.amount_input.trim().parse::<f64>() {
            Ok(amount) => amount,
            Err(_) => {
                self.status = String::from("Amount must be numeric.");
                self.amount_input.clear();
                return;
            }
        };

        let Some(account) = self.accounts.get_mut(&account_number) else {
            return;
        };

        let result = match kind {
            TransactionKind::Deposit => account.deposit(amount),
            TransactionKind::Withdrawal => account.withdraw(amount),
        };

        match result {
            Ok(()) => {
                let balance = account.balance();
                self.status = format!(
                    "{} of {} applied. New balance: {}.",
                    kind,
                    format_dollars(amount),
                    format_dollars(balance)
                );
                self.amount_input.clear();

                if let Err(error) =
                    update_account_balance(&self.accounts_path, account_number, balance)
                {
                    tracing::error!(%error, account_number, "failed to persist balance");
                    self.status.push_str(" (warning: balance not saved)");
                }
            }
            Err(error) => {
                self.status = format!("{} failed: {}", kind, error);
                self.amount_input.clear();
            }
        }
    }

    pub fn selected_account_text(&self) -> Option<String> {
        let account = self.accounts.get(&self.selected_account?)?;
        Some(format!(
            "{}\nService Charges: {}",
            account,
            format_dollars(account.service_charges())
        ))
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match app.page {
                Page::Lookup => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Enter => match app.focus {
                        Focus::Query => app.lookup_client(),
                        Focus::Accounts => app.open_details(),
                    },
                    KeyCode::Tab => {
                        app.focus = match app.focus {
                            Focus::Query => Focus::Accounts,
                            Focus::Accounts => Focus::Query,
                        };
                    }
                    KeyCode::Down | KeyCode::Char('j') => app.next_account(),
                    KeyCode::Up | KeyCode::Char('k') => app.previous_account(),
                    KeyCode::Backspace => {
                        app.query.pop();
                        app.clear_listing();
                    }
                    KeyCode::Char(c) if c.is_ascii_digit() => {
                        if app.query.len() < 12 {
                            app.query.push(c);
                            app.clear_listing();
                        }
                    }
                    _ => {}
                },
                Page::Details => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Esc => app.back_to_lookup(),
                    KeyCode::Char('d') => app.apply_transaction(TransactionKind::Deposit),
                    KeyCode::Char('w') => app.apply_transaction(TransactionKind::Withdrawal),
                    KeyCode::Backspace => {
                        app.amount_input.pop();
                    }
                    KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => {
                        if app.amount_input.len() < 16 {
                            app.amount_input.push(c);
                        }
                    }
                    _ => {}
                },
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    match app.page {
        Page::Lookup => render_lookup(f, chunks[1], app),
        Page::Details => render_details(f, chunks[1], app),
    }

    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let title = match app.page {
        Page::Lookup => "Client Lookup",
        Page::Details => "Account Details",
    };

    let spans = vec![
        Span::styled(
            "Pixell Bank",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  │  "),
        Span::styled(title, Style::default().fg(Color::White)),
        Span::raw("  |  "),
        Span::styled(
            format!(
                "Clients: {}  Accounts: {}",
                app.clients.len(),
                app.accounts.len()
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let header = Paragraph::new(vec![Line::from(spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(header, area);
}

fn render_lookup(f: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Client number input
            Constraint::Length(1), // Client banner
            Constraint::Min(0),    // Account table
        ])
        .split(area);

    let input_style = if app.focus == Focus::Query {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let input = Paragraph::new(app.query.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Client Number")
            .border_style(input_style),
    );
    f.render_widget(input, chunks[0]);

    let banner = Paragraph::new(app.client_banner.as_str()).style(
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(banner, chunks[1]);

    let header_cells = ["Account #", "Balance", "Date Created", "Type"]
        .iter()
        .map(|h| {
            Cell::from(*h).style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        });
    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows = app.listed_accounts.iter().filter_map(|account_number| {
        let account = app.accounts.get(account_number)?;
        Some(Row::new(vec![
            Cell::from(account.account_number().to_string()),
            Cell::from(format_dollars(account.balance())),
            Cell::from(account.date_created().to_string()),
            Cell::from(account.account_type().as_str()),
        ]))
    });

    let table_style = if app.focus == Focus::Accounts {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(16),
            Constraint::Length(14),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Accounts")
            .border_style(table_style),
    )
    .highlight_style(
        Style::default()
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD),
    );

    f.render_stateful_widget(table, chunks[2], &mut app.table_state);
}

fn render_details(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Account summary
            Constraint::Length(3), // Amount input
        ])
        .split(area);

    let summary = app
        .selected_account_text()
        .unwrap_or_else(|| String::from("Bank Account selected does not exist."));
    let details = Paragraph::new(summary).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Account")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(details, chunks[0]);

    let amount = Paragraph::new(app.amount_input.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Transaction Amount")
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(amount, chunks[1]);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let hints = match app.page {
        Page::Lookup => "Enter: lookup/open │ Tab: switch focus │ ↑/↓: select │ q: quit",
        Page::Details => "d: deposit │ w: withdraw │ Esc: back │ q: quit",
    };

    let spans = vec![
        Span::styled(app.status.clone(), Style::default().fg(Color::White)),
        Span::raw("   "),
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
    ];

    let status = Paragraph::new(vec![Line::from(spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(status, area);
}
