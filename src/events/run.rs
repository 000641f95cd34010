use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tokio::time::{self, Duration};

use crate::app::state::{App, SearchMode};
use crate::ui::views::draw_search;

/// Timing knobs for the event loop.
#[derive(Debug, Clone, Copy)]
pub struct LoopTiming {
    pub tick: Duration,
    pub debounce: Duration,
}

pub async fn run_app(app: &mut App, timing: LoopTiming) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    tracing::info!(?timing, "terminal ready");

    let res = run_loop(app, &mut terminal, timing).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    if let Err(e) = &res {
        tracing::error!(error = %e, "event loop failed");
    }
    res
}

async fn run_loop(
    app: &mut App,
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    timing: LoopTiming,
) -> io::Result<()> {
    let mut tick = time::interval(timing.tick);

    loop {
        terminal.draw(|f| draw_search(f, app))?;

        tokio::select! {
            _ = tick.tick() => {
                app.maybe_apply_filter(timing.debounce);
            }
            Ok(should_quit) = handle_event(app) => {
                if should_quit { break; }
            }
        }
    }
    Ok(())
}

async fn handle_event(app: &mut App) -> io::Result<bool> {
    if event::poll(std::time::Duration::from_millis(16))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                // Global quit
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(true);
                }
                return Ok(handle_key(app, key));
            }
            Event::Mouse(mouse) => handle_mouse(app, mouse),
            _ => {}
        }
    }
    Ok(false)
}

/// Applies one key press. Returns true when the app should quit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('r') if ctrl => app.toggle_relevance(),
        KeyCode::Char('e') if ctrl => app.toggle_extended(),
        KeyCode::Enter => {
            app.use_selected();
        }
        _ => {
            return match app.search.mode {
                SearchMode::Insert => handle_insert_key(app, key),
                SearchMode::Navigate => handle_navigate_key(app, key),
            };
        }
    }
    false
}

fn handle_insert_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            if app.search.input.is_empty() {
                return true; // quit
            } else {
                app.on_delete();
            }
        }
        KeyCode::Up | KeyCode::Down => app.start_navigation(),
        KeyCode::PageUp | KeyCode::Home => app.jump_to_top(),
        KeyCode::PageDown | KeyCode::End => app.jump_to_bottom(),
        KeyCode::Backspace => app.on_backspace(),
        KeyCode::Delete => app.on_delete(),
        KeyCode::Char(ch) => app.on_input(ch),
        _ => {}
    }
    false
}

fn handle_navigate_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => app.cancel_navigation(),
        KeyCode::Up => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                app.jump_to_top();
            } else {
                app.move_selection(-1);
            }
        }
        KeyCode::Down => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                app.jump_to_bottom();
            } else {
                app.move_selection(1);
            }
        }
        KeyCode::PageUp | KeyCode::Home => app.jump_to_top(),
        KeyCode::PageDown | KeyCode::End => app.jump_to_bottom(),
        KeyCode::Backspace => app.on_backspace(),
        KeyCode::Delete => app.on_delete(),
        KeyCode::Char(ch) => app.on_input(ch),
        _ => {}
    }
    false
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Moved => app.on_mouse_move(mouse.column, mouse.row),
        MouseEventKind::Down(MouseButton::Left) => app.on_mouse_click(mouse.column, mouse.row),
        MouseEventKind::ScrollUp => app.move_selection(-1),
        MouseEventKind::ScrollDown => app.move_selection(1),
        _ => {}
    }
}
