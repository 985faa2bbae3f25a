use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use scoreboard_terminal::app::App;
use scoreboard_terminal::config::Config;
use scoreboard_terminal::ui::ui;

fn render(app: &App) -> String {
    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal.draw(|f| ui(f, app)).expect("draw");
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer.get(x, y).symbol());
        }
        out.push('\n');
    }
    out
}

fn add_team(app: &mut App, name: &str, code: &str, score: &str) {
    let text = format!("{name}\t{code}\t{score}");
    for ch in text.chars() {
        let code = if ch == '\t' { KeyCode::Tab } else { KeyCode::Char(ch) };
        app.on_key(KeyEvent::new(code, KeyModifiers::NONE));
    }
    app.on_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
}

#[test]
fn empty_board_shows_hint() {
    let app = App::new(Config::default());
    let screen = render(&app);
    assert!(screen.contains("No teams added yet"));
    assert!(screen.contains("GDG Scoreboard"));
}

#[test]
fn ranked_rows_render_in_score_order() {
    let mut app = App::new(Config::default());
    add_team(&mut app, "Team A", "TA", "5");
    add_team(&mut app, "Team B", "TB", "10");
    let screen = render(&app);

    let b = screen.find("Team B").expect("Team B rendered");
    let a = screen.find("Team A").expect("Team A rendered");
    assert!(b < a);
    assert!(screen.contains("Code: TB"));
    assert!(screen.contains("GOLD"));
    assert!(screen.contains("SILVER"));
    assert!(!screen.contains("No teams added yet"));
}

#[test]
fn help_overlay_renders() {
    let mut app = App::new(Config::default());
    app.help_overlay = true;
    let screen = render(&app);
    assert!(screen.contains("Scoreboard - Help"));
}
