//! Terminal setup, teardown, and main event loop.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use td_dice::Category;

use crate::app::DiceApp;
use crate::error::TuiResult;

/// How long to wait for input before advancing queued speech.
const TICK: Duration = Duration::from_millis(50);

/// Launch the roller and block until the user quits.
pub fn run(mut app: DiceApp) -> TuiResult<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    app.greet();
    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Main event loop.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut DiceApp,
) -> TuiResult<()> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;

        if app.should_quit {
            return Ok(());
        }

        app.tick();
        if !event::poll(TICK)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            _ => {}
        }
    }
}

/// Main draw function.
fn draw(frame: &mut Frame, app: &DiceApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Category bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_category_bar(frame, app.board.category(), chunks[0]);
    draw_board(frame, app, chunks[1]);

    let status =
        Paragraph::new(STATUS_HINT).style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, chunks[2]);

    if app.show_help {
        draw_help_popup(frame);
    }
}

const STATUS_HINT: &str = "\u{2190}/\u{2192}:category  \u{2191}/\u{2193}:history  Enter:roll  Space:repeat  c:copy  -/=:rate  ?:help  Esc:quit";

/// Draw the category bar.
fn draw_category_bar(frame: &mut Frame, active: Category, area: Rect) {
    let mut spans = Vec::new();
    for (i, category) in Category::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        let title = match category {
            Category::Coin => "coin".to_string(),
            Category::Die(die) => die.to_string(),
            Category::Abilities => "abilities".to_string(),
        };
        let style = if *category == active {
            Style::default().fg(Color::White).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(title, style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the selected roll, the history position, and the last spoken line.
fn draw_board(frame: &mut Frame, app: &DiceApp, area: Rect) {
    let block = Block::default()
        .title(" True Random Dice Roller ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let category = app.board.category();
    let history = app.board.history(category);
    let mut lines: Vec<Line<'static>> = vec![
        Line::from(vec![
            Span::styled("Category: ", Style::default().fg(Color::DarkGray)),
            Span::styled(category.label(), Style::default().fg(Color::Yellow).bold()),
        ]),
        Line::from(""),
    ];

    match (app.board.row(), app.board.selected()) {
        (Some(row), Some(value)) => {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("Roll {} of {}: ", row + 1, history.len()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(value.to_string(), Style::default().fg(Color::Green).bold()),
            ]));
        }
        _ => lines.push(Line::from(Span::styled(
            "Press Enter to roll!",
            Style::default().fg(Color::Green),
        ))),
    }
    lines.push(Line::from(""));

    if let Some(alert) = &app.last_alert {
        lines.push(Line::from(Span::styled(
            alert.clone(),
            Style::default().fg(Color::Yellow),
        )));
        lines.push(Line::from(""));
    }

    if let Some(spoken) = &app.last_spoken {
        lines.push(Line::from(vec![
            Span::styled("Said: ", Style::default().fg(Color::DarkGray)),
            Span::raw(spoken.clone()),
        ]));
    }
    lines.push(Line::from(Span::styled(
        format!("Speech rate: {}", app.board.speech_rate()),
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

/// Create a centered rectangle as a percentage of the given area.
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

/// Draw the help popup overlay.
fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("  Left / Right  Previous / next category"),
        Line::from("  Up / Down     Previous / next roll"),
        Line::from("  Enter         Roll"),
        Line::from("  Space         Repeat the selected roll"),
        Line::from("  c             Copy the selected roll"),
        Line::from("  - / =         Slower / faster speech"),
        Line::from(""),
        Line::from("  ?             Toggle this help"),
        Line::from("  Esc / Ctrl+C  Quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use td_dice::{Action, DiceBoard};
    use td_random::{RandomSource, SourceConfig};

    use crate::clipboard::NoClipboard;
    use crate::cues::SilentCues;
    use crate::speech::TranscriptSpeaker;

    fn app() -> DiceApp {
        let source = RandomSource::new(SourceConfig::default().with_seed(4).offline()).unwrap();
        DiceApp::new(
            DiceBoard::new(source, 5),
            Box::new(TranscriptSpeaker::default()),
            Box::new(SilentCues),
            Box::new(NoClipboard),
        )
    }

    fn render(app: &DiceApp) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn empty_board_prompts() {
        let screen = render(&app());
        assert!(screen.contains("coin | d4 | d6"));
        assert!(screen.contains("Category: coin toss"));
        assert!(screen.contains("Press Enter to roll!"));
    }

    #[test]
    fn shows_roll_and_spoken_line() {
        let mut app = app();
        app.dispatch(Action::Roll);
        let screen = render(&app);
        assert!(screen.contains("Roll 1 of 1: "));
        assert!(screen.contains("Said: roll number 1: "));
    }

    #[test]
    fn help_popup() {
        let mut app = app();
        app.show_help = true;
        assert!(render(&app).contains("Keyboard Shortcuts"));
    }

    #[test]
    fn centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 70, outer);
        assert!(inner.x >= outer.x && inner.right() <= outer.right());
        assert!(inner.y >= outer.y && inner.bottom() <= outer.bottom());
    }
}
