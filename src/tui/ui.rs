use crate::store::RecipeStore;
use crate::tui::app::{App, EMPTY_MESSAGE};
use crate::tui::edit::EditField;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

pub fn draw<S: RecipeStore>(frame: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Footer
        ])
        .split(frame.size());

    draw_header(frame, chunks[0], app);
    if app.list.is_empty() {
        draw_empty_state(frame, chunks[1]);
    } else {
        draw_recipe_list(frame, chunks[1], app);
    }
    draw_footer(frame, chunks[2], app);

    if app.editor.is_active() {
        draw_editor(frame, app);
    } else if app.help_mode {
        draw_help_window(frame);
    }
}

fn draw_header<S: RecipeStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let chrome = app.list.host();
    let (text, color) = match chrome.subtitle() {
        Some(subtitle) => (format!("{} - {}", chrome.title(), subtitle), Color::Yellow),
        None => (chrome.title().to_string(), Color::Cyan),
    };

    let header = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Brewshop"))
        .style(Style::default().fg(color));

    frame.render_widget(header, area);
}

fn draw_empty_state(frame: &mut Frame, area: Rect) {
    let message = Paragraph::new(EMPTY_MESSAGE)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Recipes"))
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(message, area);
}

fn draw_recipe_list<S: RecipeStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let selecting = app.is_selecting();
    let items: Vec<ListItem> = app
        .list
        .items()
        .iter()
        .enumerate()
        .map(|(i, summary)| {
            let is_marked = app.list.is_selected(i);
            let marker = match (selecting, is_marked) {
                (false, _) => "  ",
                (true, true) => "☑ ",
                (true, false) => "☐ ",
            };
            let style = if is_marked {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(
                format!("{}{}", marker, summary.display_label),
                style,
            )))
        })
        .collect();

    let title = format!("Recipes ({}/{})", app.list.len(), app.list.max_recipes());
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default();
    list_state.select(Some(app.cursor));

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_footer<S: RecipeStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let (footer_text, color) = if let Some(notification) = &app.notification {
        (notification.clone(), Color::Magenta)
    } else if app.editor.is_active() {
        (
            "EDIT | Enter: save | Esc: cancel | Tab: switch field | ←→: cursor".to_string(),
            Color::Yellow,
        )
    } else if app.is_selecting() {
        let bar = app.list.action_bar();
        let mut hints = vec![
            "Enter/Space: toggle",
            if bar.all_selected() { "a: none" } else { "a: all" },
        ];
        if bar.delete_visible {
            hints.push("d: delete");
        }
        hints.push("Esc: done");
        (hints.join(" | "), Color::Yellow)
    } else {
        (
            "↑↓/j/k: navigate | Enter: edit | Space: select | n: new | ?: help | q: quit"
                .to_string(),
            Color::Yellow,
        )
    };

    let footer = Paragraph::new(footer_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(color));

    frame.render_widget(footer, area);
}

fn draw_editor<S: RecipeStore>(frame: &mut Frame, app: &App<S>) {
    let Some(recipe) = app.editor.recipe() else {
        return;
    };

    let field_line = |field: EditField, value: &str| {
        if app.editor.field == field {
            let (before_cursor, after_cursor) = app.editor.buffer.split_at(app.editor.cursor);
            Line::from(vec![
                Span::styled(format!("{:>6}: ", field.label()), Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!("{}█{}", before_cursor, after_cursor),
                    Style::default().bg(Color::Blue).fg(Color::White),
                ),
            ])
        } else {
            Line::from(format!("{:>6}: {}", field.label(), value))
        }
    };

    let lines = vec![
        field_line(EditField::Name, &recipe.name),
        field_line(EditField::Style, &recipe.style),
    ];

    let editor = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Edit recipe {} ", recipe.id))
            .style(Style::default().fg(Color::White)),
    );

    let area = centered_rect(60, 20, frame.size());
    frame.render_widget(Clear, area);
    frame.render_widget(editor, area);
}

fn draw_help_window(frame: &mut Frame) {
    let help_text = [
        "Brewshop - Keyboard Commands",
        "",
        "BROWSING:",
        "  ↑↓ / j/k          Move cursor",
        "  Enter             Edit recipe",
        "  Space / v         Start selecting",
        "  n                 New recipe",
        "",
        "SELECTING:",
        "  Enter / Space     Toggle recipe",
        "  a                 Select all / none",
        "  d                 Delete selected",
        "  Esc               Stop selecting",
        "",
        "EDITING:",
        "  Tab               Switch between name and style",
        "  Enter / Esc       Save / cancel",
        "",
        "  ?                 Show this help (press ? or Esc to close)",
        "  q / Ctrl+C        Quit application",
    ];

    let help_paragraph = Paragraph::new(help_text.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help - Keyboard Commands ")
                .style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false });

    let area = centered_rect(70, 70, frame.size());
    frame.render_widget(Clear, area);
    frame.render_widget(help_paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
