use crate::tui::{app::Field, theme::{style, Role}};
use quickcards_core::{Mode, SessionController, TestRun, NO_MORE_CARDS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_ui(f: &mut Frame, area: Rect, session: &SessionController, focus: Field) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(7),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(area);

    let header = Paragraph::new(Line::from(Span::raw("Select any option below:").style(style(Role::Title))));
    f.render_widget(header, chunks[0]);

    draw_main(f, chunks[1], session.mode(), focus);

    let status = Paragraph::new(session.status())
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Status").borders(Borders::ALL));
    f.render_widget(status, chunks[2]);

    if let Some(list) = session.card_list() {
        let cards = Paragraph::new(list)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(cards, chunks[3]);
    }

    let foot = Paragraph::new(Line::from(footer_hints(session.mode())))
        .style(style(Role::Footer));
    f.render_widget(foot, chunks[4]);
}

fn footer_hints(mode: &Mode) -> Vec<Span<'static>> {
    let hints: &[&str] = match mode {
        Mode::Idle => &[" a add  ", " r remove  ", " t test  ", " q quit "],
        Mode::Adding { .. } => &[" tab switch field  ", " enter submit  ", " ^r remove  ", " esc cancel "],
        Mode::Removing { .. } => &[" enter submit  ", " ^a add  ", " esc cancel "],
        Mode::Testing(_) => &[" space/enter reveal  ", " n next  ", " q quit "],
    };
    hints.iter().map(|h| Span::raw(*h)).collect()
}

fn draw_main(f: &mut Frame, area: Rect, mode: &Mode, focus: Field) {
    match mode {
        Mode::Idle => {
            let p = Paragraph::new(vec![
                Line::from("[a] Add Card"),
                Line::from("[r] Remove Card"),
                Line::from("[t] Test"),
            ])
            .block(Block::default().title("Cards").borders(Borders::ALL));
            f.render_widget(p, area);
        }
        Mode::Adding { term, definition } => {
            let rows = form_rows(area, 2);
            draw_input(f, rows[0], "Enter Term", term, focus == Field::Term);
            draw_input(f, rows[1], "Enter Definition", definition, focus == Field::Definition);
            draw_submit(f, rows[2], "Submit Card");
        }
        Mode::Removing { term } => {
            let rows = form_rows(area, 1);
            draw_input(f, rows[0], "Enter Term", term, true);
            draw_submit(f, rows[1], "Submit");
        }
        Mode::Testing(run) => draw_test(f, area, run),
    }
}

fn form_rows(area: Rect, inputs: usize) -> std::rc::Rc<[Rect]> {
    let mut constraints = vec![Constraint::Length(3); inputs];
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0));
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area)
}

fn draw_input(f: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let block = Block::default().title(label.to_string()).borders(Borders::ALL);
    let block = if focused { block.border_style(style(Role::Focused)) } else { block };
    f.render_widget(Paragraph::new(value.to_string()).block(block), area);
    if focused {
        let x = area.x + 1 + value.chars().count().min(area.width.saturating_sub(3) as usize) as u16;
        f.set_cursor(x, area.y + 1);
    }
}

fn draw_submit(f: &mut Frame, area: Rect, label: &str) {
    let line = Line::from(vec![
        Span::raw(format!(" {label} ")).style(style(Role::Button)),
        Span::raw("  enter").style(style(Role::Hint)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_test(f: &mut Frame, area: Rect, run: &TestRun) {
    let block = Block::default()
        .title(format!("Test {}/{}", run.position + 1, run.deck.len()))
        .borders(Borders::ALL);

    let Some(card) = run.current() else {
        f.render_widget(Paragraph::new(NO_MORE_CARDS).block(block), area);
        return;
    };

    let mut text = vec![
        Line::from(vec![Span::raw("Term: ").style(style(Role::Title)), Span::raw(card.term.clone())]),
        Line::from(""),
    ];
    if run.answer_shown {
        text.push(Line::from(vec![
            Span::raw("Definition: ").style(style(Role::Title)),
            Span::raw(card.definition.clone()),
        ]));
        text.push(Line::from(""));
        text.push(Line::from(Span::raw(" Next Flashcard ").style(style(Role::Button))));
    } else {
        text.push(Line::from(Span::raw(" Show Answer ").style(style(Role::Button))));
    }
    f.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }).block(block), area);
}
