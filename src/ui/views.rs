use crate::app::state::{App, SearchMode};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

/// Draws the search view: input, option toggles, suggestions and status bar.
pub fn draw_search(frame: &mut Frame, app: &mut App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Length(1), // Options
            Constraint::Min(1),    // Suggestions
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_search_input(frame, app, layout[0]);
    draw_options(frame, app, layout[1]);
    draw_suggestions(frame, app, layout[2]);
    draw_status_bar(frame, app, layout[3]);
}

fn draw_search_input(frame: &mut Frame, app: &App, area: Rect) {
    let input_line = if app.search.input.is_empty() {
        Line::from(vec![Span::styled(
            "Type a fruit…",
            Style::default().fg(Color::DarkGray),
        )])
    } else if app.is_previewing() {
        Line::from(Span::styled(
            app.search.input.as_str(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(Span::raw(app.search.input.as_str()))
    };

    let input_block = Block::default().title("Fruit").borders(Borders::ALL);
    let input = Paragraph::new(input_line)
        .block(input_block.clone())
        .wrap(Wrap { trim: true });

    frame.render_widget(input, area);

    if app.search.mode == SearchMode::Insert && !app.is_previewing() {
        let inner = input_block.inner(area);
        let typed = app.search.input.chars().count() as u16;
        let x = inner.x.saturating_add(typed);
        let y = inner.y;
        frame.set_cursor_position((x, y));
    }
}

fn checkbox(label: &str, checked: bool, key: &str) -> Vec<Span<'static>> {
    let mark = if checked { "[x] " } else { "[ ] " };
    let style = if checked {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };
    vec![
        Span::styled(format!("{mark}{label}"), style),
        Span::styled(format!(" ({key})"), Style::default().fg(Color::DarkGray)),
    ]
}

fn draw_options(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    spans.extend(checkbox("Relevance", app.search.show_relevance, "Ctrl+R"));
    spans.push(Span::raw("   "));
    spans.extend(checkbox("Extended", app.search.extended, "Ctrl+E"));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_suggestions(frame: &mut Frame, app: &mut App, area: Rect) {
    let count = app.search.suggestions.len();
    let block = Block::default()
        .title(Line::from(vec![
            Span::styled("Suggestions ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("(Enter or click to use) – "),
            Span::styled(format!("{count} results"), Style::default().fg(Color::Gray)),
        ]))
        .borders(Borders::ALL);
    app.search.results_area = block.inner(area);

    if count == 0 {
        let hint = if app.search.input.is_empty() { "" } else { "No matches" };
        let msg = Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray))).block(block);
        frame.render_widget(msg, area);
        return;
    }

    let items: Vec<ListItem> = app
        .search
        .suggestions
        .iter()
        .map(|s| {
            let line = match s.label.strip_prefix(s.value.as_str()) {
                Some(annotation) if !annotation.is_empty() => Line::from(vec![
                    Span::styled(
                        s.value.clone(),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(annotation.to_string(), Style::default().fg(Color::DarkGray)),
                ]),
                _ => Line::from(Span::styled(
                    s.label.clone(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )),
            };
            ListItem::new(line)
        })
        .collect();

    app.search.list_state.select(Some(app.search.selected_index));

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
        .highlight_symbol("▸ ");

    frame.render_stateful_widget(list, area, &mut app.search.list_state);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mode = if app.search.mode == SearchMode::Insert { "Insert" } else { "Navigate" };
    let hints = "Esc clear/quit • Enter use • ↑/↓ preview";
    let status_line = Line::from(vec![
        Span::styled(app.status.clone(), Style::default().fg(Color::Gray)),
        Span::raw("   "),
        Span::styled(hints, Style::default().fg(Color::DarkGray)),
        Span::raw("   |  Mode: "),
        Span::styled(mode, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
    ]);

    let status = Paragraph::new(status_line).wrap(Wrap { trim: true });
    frame.render_widget(status, area);
}
