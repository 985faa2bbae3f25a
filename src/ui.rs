use std::ops::Range;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::{App, Focus};
use crate::form::FormField;
use crate::ranking::{RankTier, RankedTeam, tier_label};

const ROW_HEIGHT: u16 = 3;
const EMPTY_BOARD: &str = "No teams added yet. Add your first team above!";

pub fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let header = Paragraph::new(header_text(app)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    render_form(frame, chunks[1], app);
    render_board(frame, chunks[2], app);

    let console = Paragraph::new(console_text(app))
        .block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, chunks[3]);

    let footer = Paragraph::new(footer_text(app.focus)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[4]);

    if app.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text(app: &App) -> String {
    let line1 = format!("  .-.  {}", app.config.title);
    let line2 = format!(" (GDG) {}", app.config.link);
    let line3 = "  '-'".to_string();
    format!("{line1}\n{line2}\n{line3}")
}

fn footer_text(focus: Focus) -> &'static str {
    match focus {
        Focus::Form => "Type to edit | Tab Next field | Enter Add Team | Esc Board | Ctrl-C Quit",
        Focus::Board => {
            "j/k/↑/↓ Move | +/→ Score up | -/← Score down | x Delete | a Add | ? Help | q Quit"
        }
    }
}

fn render_form(frame: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(20),
            Constraint::Percentage(15),
            Constraint::Percentage(30),
        ])
        .split(area);

    let draft = &app.draft;
    let form_active = app.focus == Focus::Form;
    let fields = [
        (FormField::Name, "Team Name", draft.name.as_str()),
        (FormField::Code, "Team Code", draft.code.as_str()),
        (FormField::Score, "Score", draft.score.as_str()),
    ];

    for (idx, (field, title, value)) in fields.into_iter().enumerate() {
        let focused = form_active && draft.field == field;
        let border_style = if focused {
            Style::default().fg(Color::Indexed(99))
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let (text, text_style) = if value.is_empty() && !focused {
            (placeholder(field).to_string(), Style::default().fg(Color::DarkGray))
        } else if focused {
            (format!("{value}_"), Style::default())
        } else {
            (value.to_string(), Style::default())
        };
        let input = Paragraph::new(text).style(text_style).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        frame.render_widget(input, cols[idx]);
    }

    let button_style = if form_active {
        Style::default()
            .fg(Color::White)
            .bg(Color::Indexed(62))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Indexed(62))
    };
    let button = Paragraph::new("+ Add Team (Enter)")
        .alignment(Alignment::Center)
        .style(button_style)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, cols[3]);
}

fn placeholder(field: FormField) -> &'static str {
    match field {
        FormField::Name => "Team Name",
        FormField::Code => "Team Code",
        FormField::Score => "0",
    }
}

fn render_board(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().title("Teams").borders(Borders::ALL);
    let list_area = block.inner(area);
    frame.render_widget(block, area);

    if app.ranking.is_empty() {
        let empty = Paragraph::new(EMPTY_BOARD)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, list_area);
        return;
    }

    if list_area.height < ROW_HEIGHT {
        let empty = Paragraph::new("Board needs more height")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, list_area);
        return;
    }

    let rows = (list_area.height / ROW_HEIGHT) as usize;
    let window = board_window(app.selected, app.ranking.len(), rows);

    for (i, idx) in window.enumerate() {
        let row_area = Rect {
            x: list_area.x,
            y: list_area.y + (i as u16) * ROW_HEIGHT,
            width: list_area.width,
            height: ROW_HEIGHT,
        };
        let selected = app.focus == Focus::Board && idx == app.selected;
        render_team_row(frame, row_area, &app.ranking[idx], selected);
    }
}

fn render_team_row(frame: &mut Frame, area: Rect, row: &RankedTeam, selected: bool) {
    let row_style = if selected {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    } else {
        Style::default()
    };
    if selected {
        frame.render_widget(Block::default().style(row_style), area);
    }

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(8),
            Constraint::Min(20),
            Constraint::Length(9),
            Constraint::Length(18),
        ])
        .split(area);

    let badge = Paragraph::new(format!("({})", row.rank))
        .alignment(Alignment::Center)
        .style(tier_style(row.tier).add_modifier(Modifier::BOLD));
    frame.render_widget(badge, middle_line(cols[0]));

    let code = Paragraph::new(format!("[{}]", row.team.code))
        .style(row_style.fg(Color::Indexed(99)).add_modifier(Modifier::BOLD));
    frame.render_widget(code, middle_line(cols[1]));

    let name = Paragraph::new(format!("{}\nCode: {}", row.team.name, row.team.code))
        .style(row_style);
    let name_area = Rect {
        height: cols[2].height.min(2),
        ..cols[2]
    };
    frame.render_widget(name, name_area);

    let medal = Paragraph::new(tier_label(row.tier)).style(tier_style(row.tier));
    frame.render_widget(medal, middle_line(cols[3]));

    let score = Paragraph::new(format!("[-] {:>5} [+]", row.team.score))
        .style(row_style.add_modifier(Modifier::BOLD));
    frame.render_widget(score, middle_line(cols[4]));
}

pub fn tier_style(tier: RankTier) -> Style {
    match tier {
        RankTier::Gold => Style::default().fg(Color::Yellow),
        RankTier::Silver => Style::default().fg(Color::Gray),
        RankTier::Bronze => Style::default().fg(Color::Rgb(205, 127, 50)),
        RankTier::Default => Style::default().fg(Color::Blue),
    }
}

fn middle_line(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y + (area.height / 2),
        width: area.width,
        height: area.height.min(1),
    }
}

/// Rows of the board that fit in `rows` slots, keeping `selected` near the
/// middle once the list overflows.
fn board_window(selected: usize, total: usize, rows: usize) -> Range<usize> {
    let rows = rows.min(total);
    let max_start = total - rows;
    let start = selected.saturating_sub(rows / 2).min(max_start);
    start..start + rows
}

fn console_text(app: &App) -> String {
    if app.logs.is_empty() {
        return "No activity yet".to_string();
    }
    let skip = app.logs.len().saturating_sub(3);
    app.logs
        .iter()
        .skip(skip)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup = popup_area(area, 60, 60);
    frame.render_widget(Clear, popup);

    let text = [
        "Scoreboard - Help",
        "",
        "Form:",
        "  type         Edit focused field",
        "  Tab          Next field / board",
        "  Enter        Add team",
        "  Esc          Board",
        "",
        "Board:",
        "  j/k or ↑/↓   Move",
        "  + or →       Score +1",
        "  - or ←       Score -1 (never below 0)",
        "  x / Delete   Delete team",
        "  a            Add team",
        "  ?            Toggle help",
        "  q / Ctrl-C   Quit",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup);
}

fn popup_area(area: Rect, width_pct: u16, height_pct: u16) -> Rect {
    let width = (u32::from(area.width) * u32::from(width_pct.min(100)) / 100) as u16;
    let height = (u32::from(area.height) * u32::from(height_pct.min(100)) / 100) as u16;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
