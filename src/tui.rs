// tui.rs

use crate::app::{App, InputMode, MessageKind};
use crate::todo::FilterMode;
use crossterm::event::{self, Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Terminal,
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs, Wrap},
};
use std::{io, time::Duration};
use textwrap::wrap;
use tracing::debug;

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()>
where
    std::io::Error: From<<B as Backend>::Error>,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(250))? {
            if let CEvent::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key(app, key) {
                    debug!("quit requested");
                    return Ok(());
                }
            }
        }
    }
}

/// Applies one key press to the app. Returns `true` when the user asked to
/// quit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match app.input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('a') | KeyCode::Char('i') => app.begin_input(),
            KeyCode::Char(' ') | KeyCode::Char('d') => app.toggle_selected(),
            // Delete selected todo (Shift+R only)
            KeyCode::Char('R') => app.delete_selected(),
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::SHIFT) => {
                app.delete_selected()
            }
            KeyCode::Char('x') => app.delete_completed(),
            KeyCode::Char('X') => app.clear_all(),
            KeyCode::Tab | KeyCode::Char('f') => app.next_filter(),
            KeyCode::BackTab => app.prev_filter(),
            KeyCode::Char('1') => app.set_filter(FilterMode::All),
            KeyCode::Char('2') => app.set_filter(FilterMode::Pending),
            KeyCode::Char('3') => app.set_filter(FilterMode::Completed),
            KeyCode::Down | KeyCode::Char('j') => app.select_next(),
            KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
            _ => {}
        },
        InputMode::Editing => match key.code {
            KeyCode::Enter => app.submit_input(),
            KeyCode::Esc => app.cancel_input(),
            KeyCode::Char(c) => app.input_text.push(c),
            KeyCode::Backspace => {
                app.input_text.pop();
            }
            _ => {}
        },
    }
    false
}

fn message_style(kind: MessageKind) -> Style {
    let color = match kind {
        MessageKind::Success => Color::Green,
        MessageKind::Error => Color::Red,
        MessageKind::Warning => Color::Yellow,
        MessageKind::Info => Color::Cyan,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn ui(f: &mut ratatui::Frame<'_>, app: &App) {
    let size = f.area();

    let mut constraints = vec![
        Constraint::Length(1), // title
        Constraint::Length(3), // metrics
        Constraint::Length(3), // filter tabs
        Constraint::Min(3),    // todo list
    ];
    let needs_input = app.input_mode == InputMode::Editing;
    if needs_input {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Length(1)); // help
    constraints.push(Constraint::Length(1)); // status
    constraints.push(Constraint::Length(1)); // footer

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(size);

    let title = Paragraph::new(Line::from(Span::styled(
        "✅ Todo",
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    render_metrics(f, app, chunks[1]);

    let tabs = Tabs::new(FilterMode::ALL.iter().map(|m| m.label()))
        .block(Block::default().borders(Borders::ALL).title("Filter"))
        .select(app.filter.index())
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, chunks[2]);

    render_list(f, app, chunks[3]);

    let mut next = 4;
    if needs_input {
        let caret = "|";
        let text = if app.input_text.is_empty() {
            caret.to_string()
        } else {
            format!("{}{}", app.input_text, caret)
        };
        let widget = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title("New task"))
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: true });
        f.render_widget(widget, chunks[next]);
        next += 1;
    }

    let b = Style::default().add_modifier(Modifier::BOLD);
    let help_line = if needs_input {
        Line::from(vec![
            Span::styled("Enter", b),
            Span::raw(" add, "),
            Span::styled("Esc", b),
            Span::raw(" cancel"),
        ])
    } else {
        Line::from(vec![
            Span::styled("a", b),
            Span::raw(" add, "),
            Span::styled("Space", b),
            Span::raw(" toggle, "),
            Span::raw("Shift+"),
            Span::styled("R", b),
            Span::raw(" delete, "),
            Span::styled("x", b),
            Span::raw(" delete completed, "),
            Span::styled("X", b),
            Span::raw(" delete all, "),
            Span::styled("Tab", b),
            Span::raw(" filter, "),
            Span::styled("q", b),
            Span::raw(" quit"),
        ])
    };
    f.render_widget(
        Paragraph::new(help_line).alignment(Alignment::Center),
        chunks[next],
    );
    next += 1;

    if let Some(ref msg) = app.message {
        let status = Paragraph::new(msg.text.as_str())
            .style(message_style(msg.kind))
            .alignment(Alignment::Center);
        f.render_widget(status, chunks[next]);
    }
    next += 1;

    let footer = Paragraph::new("Made with ❤️ using ratatui")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(footer, chunks[next]);
}

fn render_metrics(f: &mut ratatui::Frame<'_>, app: &App, area: Rect) {
    let counts = app.counts();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let metrics = [
        ("Total", counts.total),
        ("Completed", counts.completed),
        ("Pending", counts.pending),
    ];
    for ((label, value), col) in metrics.into_iter().zip(cols.iter()) {
        let widget = Paragraph::new(Line::from(Span::styled(
            value.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().borders(Borders::ALL).title(label))
        .alignment(Alignment::Center);
        f.render_widget(widget, *col);
    }
}

fn render_list(f: &mut ratatui::Frame<'_>, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Tasks");

    if app.store.is_empty() {
        let info = Paragraph::new("Add a new task with [a]")
            .style(message_style(MessageKind::Info))
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(info, area);
        return;
    }

    let visible = app.visible_tasks();
    if visible.is_empty() {
        let info = Paragraph::new(format!("No tasks match \"{}\"", app.filter.label()))
            .style(message_style(MessageKind::Info))
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(info, area);
        return;
    }

    // minus borders and the highlight symbol
    let inner_width = (area.width.saturating_sub(2 + 3) as usize).max(1);

    let items: Vec<ListItem> = visible
        .iter()
        .map(|t| {
            let (mark, style) = if t.completed {
                (
                    "[x]",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::CROSSED_OUT),
                )
            } else {
                ("[ ]", Style::default().add_modifier(Modifier::BOLD))
            };
            let mut lines: Vec<Line> = wrap(&format!("{} {}", mark, t.text), inner_width)
                .iter()
                .map(|w| Line::from(Span::styled(w.to_string(), style)))
                .collect();
            lines.push(Line::from(Span::styled(
                format!("    Created: {}", t.created_at),
                Style::default().fg(Color::Gray),
            )));
            ListItem::new(lines)
        })
        .collect();

    let mut list_state = ratatui::widgets::ListState::default();
    list_state.select(Some(app.selected.min(items.len() - 1)));

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, &mut list_state);
}
