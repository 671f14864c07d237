use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{BarChart, Block, Borders, Paragraph, Row, Table},
    Frame, Terminal,
};

use super::app::{App, InputMode};
use crate::stat::ExpenseRecord;

/// Entry point for the TUI. Called from main.rs.
pub fn run_tui(expenses: Vec<ExpenseRecord>) -> Result<()> {
    let mut app = App::new(expenses);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    loop {
        terminal.draw(|f| ui(f, &app))?;

        if app.should_quit {
            break;
        }

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                handle_key_event(&mut app, key);
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Dispatch keyboard events depending on input mode.
fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_key_normal(app, key),
        InputMode::EditingExpense => handle_key_expense_form(app, key),
    }
}

/// Key handling in normal mode.
fn handle_key_normal(app: &mut App, key: KeyEvent) {
    use KeyCode::*;

    match key.code {
        // Quit
        Char('q') => app.should_quit = true,

        // Open the add-expense form
        Char('n') => app.toggle_panel(),

        // Cycle the year filter
        Left => app.prev_year(),
        Right => app.next_year(),

        // Clear the year filter
        Char('c') => app.select_year(None),

        _ => {}
    }
}

/// Editing the add-expense form: title, amount, date.
fn handle_key_expense_form(app: &mut App, key: KeyEvent) {
    use KeyCode::*;

    match key.code {
        Esc => {
            app.toggle_panel();
        }

        Enter => {
            app.add_expense();
        }

        Tab | Down => app.next_field(),
        BackTab | Up => app.prev_field(),

        Backspace => {
            app.focused_field_mut().pop();
        }
        Char(c) => {
            let accept = match app.new_field_idx {
                // amount: signed decimal digits only
                1 => c.is_ascii_digit() || c == '.' || c == '-',
                // date: YYYY-MM-DD
                2 => c.is_ascii_digit() || c == '-',
                // title: free text
                _ => true,
            };
            if accept {
                app.focused_field_mut().push(c);
            }
        }
        _ => {}
    }
}

/// Top-level UI layout: header, main content, footer.
fn ui(f: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(0),    // main
            Constraint::Length(3), // footer
        ])
        .split(f.area());

    // Header
    let year_text = match &app.selected_year {
        Some(y) => y.clone(),
        None => "none".to_string(),
    };
    let header_text = format!(
        "Expense Tracker   |   Year filter: {year_text}   |   {} expense(s) recorded",
        app.expenses.len()
    );
    let header = Paragraph::new(header_text).block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    // Main content
    let main_chunks = if app.show_input {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(0)])
            .split(chunks[1])
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(0), Constraint::Min(0)])
            .split(chunks[1])
    };

    if app.show_input {
        draw_expense_form(f, main_chunks[0], app);
    }
    draw_filtered_view(f, main_chunks[1], app);

    // Footer
    let footer_text = match app.input_mode {
        InputMode::Normal => {
            "n: add expense  |  ←/→: cycle year filter  |  c: clear filter  |  q: quit"
        }
        InputMode::EditingExpense => {
            "Tab/Shift+Tab: switch field, Enter to submit, Esc to close the form"
        }
    };
    let footer = Paragraph::new(footer_text).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, chunks[2]);
}

// Add-expense form, fields marked with > when focused.
fn draw_expense_form(f: &mut Frame<'_>, area: Rect, app: &App) {
    let fields = [
        ("Title", &app.new_title),
        ("Amount", &app.new_amount),
        ("Date (YYYY-MM-DD)", &app.new_date),
    ];

    let mut text = String::new();
    for (idx, (label, value)) in fields.iter().enumerate() {
        let marker = if idx == app.new_field_idx { "> " } else { "  " };
        text.push_str(&format!("{}{}: {}\n", marker, label, value));
    }

    let block = Block::default()
        .title("Add New Expense (Enter to submit, Esc to cancel)")
        .borders(Borders::ALL);
    let p = Paragraph::new(text).block(block);
    f.render_widget(p, area);
}

// Chart plus month-grouped list for the selected year, or a hint when no
// year is selected.
fn draw_filtered_view(f: &mut Frame<'_>, area: Rect, app: &App) {
    if app.selected_year.is_none() {
        let block = Block::default()
            .title(Span::raw("Monthly Total Expenses"))
            .borders(Borders::ALL);
        let p = Paragraph::new("Please select a year to view the monthly total expenses.")
            .block(block);
        f.render_widget(p, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(12), Constraint::Min(0)])
        .split(area);

    draw_monthly_chart(f, chunks[0], app);
    draw_grouped_list(f, chunks[1], app);
}

// Bar chart bound to the live chart instance.
fn draw_monthly_chart(f: &mut Frame<'_>, area: Rect, app: &App) {
    let Some(data) = app.chart.renderer().data() else {
        return;
    };

    let bars: Vec<(&str, u64)> = data.bars.iter().map(|(l, v)| (l.as_str(), *v)).collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(Span::raw(data.title.clone()))
                .borders(Borders::ALL),
        )
        .data(bars.as_slice())
        .bar_width(4)
        .bar_gap(1)
        .max(data.axis_max);

    f.render_widget(chart, area);
}

// Filtered expenses grouped by month, one bold label row per group.
fn draw_grouped_list(f: &mut Frame<'_>, area: Rect, app: &App) {
    let groups = app.grouped();

    let mut rows: Vec<Row> = Vec::new();
    for group in &groups {
        rows.push(
            Row::new(vec![group.label.clone(), String::new(), String::new()])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        );
        for e in &group.expenses {
            let date = e.display_label().unwrap_or_else(|| e.date.clone());
            rows.push(Row::new(vec![
                format!("  {}", date),
                e.title.clone(),
                e.amount.clone(),
            ]));
        }
    }

    if rows.is_empty() {
        let block = Block::default().title("Expenses").borders(Borders::ALL);
        let p = Paragraph::new("Found no expenses.").block(block);
        f.render_widget(p, area);
        return;
    }

    let widths = [
        Constraint::Length(16),
        Constraint::Min(20),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["Date", "Title", "Amount"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(Block::default().title("Expenses").borders(Borders::ALL));

    f.render_widget(table, area);
}
