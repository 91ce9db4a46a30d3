use anyhow::Result;
use quickcards_core::{Intent, Mode, SessionController, NO_MORE_CARDS};
use std::io::{BufRead, Write};
use tracing::debug;

const HELP: &str = "\
commands:
  add                      open/close the add form
  add TERM = DEFINITION    add a card
  rm                       open/close the remove form
  rm TERM                  remove the first card with TERM
  term TEXT | def TEXT     fill the open form
  submit                   submit the open form
  test | show | next       run a test
  list | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Intent(Intent),
    List,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_line(line: &str) -> Line {
    let line = line.trim();
    let (cmd, rest) = line
        .split_once(char::is_whitespace)
        .map(|(c, r)| (c, r.trim()))
        .unwrap_or((line, ""));

    match cmd.to_lowercase().as_str() {
        "" => Line::Empty,
        "add" if rest.is_empty() => Line::Intent(Intent::ToggleAdd),
        "add" => match rest.split_once('=') {
            Some((term, definition)) => Line::Intent(Intent::SubmitAdd {
                term: term.trim().to_string(),
                definition: definition.trim().to_string(),
            }),
            None => Line::Unknown("usage: add TERM = DEFINITION".into()),
        },
        "rm" | "remove" if rest.is_empty() => Line::Intent(Intent::ToggleRemove),
        "rm" | "remove" => Line::Intent(Intent::SubmitRemove { term: rest.to_string() }),
        "term" => Line::Intent(Intent::EditTerm(rest.to_string())),
        "def" => Line::Intent(Intent::EditDefinition(rest.to_string())),
        "submit" => Line::Intent(Intent::SubmitPending),
        "test" => Line::Intent(Intent::StartTest),
        "show" => Line::Intent(Intent::ShowAnswer),
        "next" => Line::Intent(Intent::NextCard),
        "list" => Line::List,
        "help" | "?" => Line::Help,
        "q" | "quit" | "exit" => Line::Quit,
        other => Line::Unknown(format!("unknown command '{other}' (try help)")),
    }
}

pub fn run<R: BufRead, W: Write>(
    session: &mut SessionController,
    input: R,
    out: &mut W,
    json: bool,
) -> Result<()> {
    render(session, out, json)?;
    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            Line::Quit => break,
            Line::Empty => continue,
            Line::Help => writeln!(out, "{HELP}")?,
            Line::Unknown(msg) => writeln!(out, "{msg}")?,
            Line::List => {
                for c in session.cards() {
                    writeln!(out, "{c}")?;
                }
            }
            Line::Intent(intent) => {
                debug!(?intent, "console intent");
                session.apply(intent);
                render(session, out, json)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn render<W: Write>(session: &SessionController, out: &mut W, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string(session.state())?)?;
        return Ok(());
    }
    if !session.status().is_empty() {
        writeln!(out, "{}", session.status())?;
    }
    match session.mode() {
        Mode::Adding { term, definition } => {
            writeln!(out, "[add] term='{term}' definition='{definition}'")?
        }
        Mode::Removing { term } => writeln!(out, "[remove] term='{term}'")?,
        Mode::Testing(run) => match run.current() {
            Some(card) => {
                writeln!(out, "[{}/{}] Term: {}", run.position + 1, run.deck.len(), card.term)?;
                if run.answer_shown {
                    writeln!(out, "Definition: {}", card.definition)?;
                }
            }
            None => writeln!(out, "{NO_MORE_CARDS}")?,
        },
        Mode::Idle => {}
    }
    if let Some(list) = session.card_list() {
        writeln!(out, "{list}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_add_forms() {
        assert_eq!(parse_line("add"), Line::Intent(Intent::ToggleAdd));
        assert_eq!(
            parse_line("add Capital of France = Paris"),
            Line::Intent(Intent::SubmitAdd {
                term: "Capital of France".into(),
                definition: "Paris".into()
            })
        );
        assert_eq!(
            parse_line("add = x"),
            Line::Intent(Intent::SubmitAdd { term: "".into(), definition: "x".into() })
        );
        assert!(matches!(parse_line("add nothing"), Line::Unknown(_)));
    }

    #[test]
    fn parses_remaining_commands() {
        assert_eq!(parse_line("rm"), Line::Intent(Intent::ToggleRemove));
        assert_eq!(parse_line("rm X"), Line::Intent(Intent::SubmitRemove { term: "X".into() }));
        assert_eq!(parse_line("  "), Line::Empty);
        assert_eq!(parse_line("NEXT"), Line::Intent(Intent::NextCard));
        assert_eq!(parse_line("quit"), Line::Quit);
        assert!(matches!(parse_line("fly"), Line::Unknown(_)));
    }

    #[test]
    fn scripted_session() {
        let mut s = SessionController::with_seed(1);
        let script = "add Capital of France = Paris\nadd = x\ntest\nshow\nnext\nrm X\nquit\nadd never = run\n";
        let mut out = Vec::new();
        run(&mut s, Cursor::new(script), &mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("No Cards Created.\nCards: \n"));
        assert!(text.contains("Card Added. Total Cards: 1"));
        assert!(text.contains("Please enter both term and value."));
        assert!(text.contains("[1/1] Term: Capital of France\nDefinition: Paris"));
        assert!(text.contains("Test completed."));
        assert!(text.contains("No card found with term 'X'."));
        assert_eq!(s.cards().len(), 1);
    }

    #[test]
    fn json_snapshots() {
        let mut s = SessionController::with_seed(1);
        let mut out = Vec::new();
        run(&mut s, Cursor::new("add\nterm hola\n"), &mut out, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        let last: serde_json::Value =
            serde_json::from_str(text.lines().last().unwrap()).unwrap();
        assert_eq!(last["mode"]["mode"], "adding");
        assert_eq!(last["mode"]["term"], "hola");
    }
}
