use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use morph_core::config::Config;
use morph_core::core::types::UserJudgment;
use morph_core::error::SaveError;
use morph_core::persistence::{CorrectionStore, FileCorrectionStore};
use morph_core::tagger::{LexiconTagger, Tagger};
use morph_core::ReviewEngine;
use std::io::{self, stdin, stdout, Write};
use std::process::ExitCode;

const SEPARATOR: &str = "---------------------------------------------";

fn main() -> ExitCode {
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[ERROR] {e}: {}", source_of(&e));
            return ExitCode::FAILURE;
        }
    };

    let tagger = match &config.lexicon_path {
        Some(path) => match LexiconTagger::from_file(path) {
            Ok(tagger) => tagger,
            Err(e) => {
                eprintln!("[ERROR] {e}: {}", source_of(&e));
                return ExitCode::FAILURE;
            }
        },
        None => LexiconTagger::default(),
    };
    if tagger.is_empty() {
        log::warn!("Lexicon is empty; every word will be untagged");
    }
    let store = FileCorrectionStore::open(&config.store_path);

    let mut engine = ReviewEngine::new(tagger, store);
    match run(&mut engine) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[ERROR] {e}");
            ExitCode::FAILURE
        }
    }
}

fn source_of(e: &dyn std::error::Error) -> String {
    e.source().map(|s| s.to_string()).unwrap_or_default()
}

fn run<T: Tagger, S: CorrectionStore>(engine: &mut ReviewEngine<T, S>) -> io::Result<()> {
    let mut status = String::from("Enter an Arabic sentence to analyze.");

    loop {
        print_ui(engine, &status)?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let cmd = input.trim();

        status = match cmd {
            "exit" => break,
            ":n" => {
                engine.advance(1);
                String::new()
            }
            ":p" => {
                engine.advance(-1);
                String::new()
            }
            ":r" => {
                engine.refresh();
                "Corrections reloaded.".to_string()
            }
            ":j" => session_json(engine),
            ":s" => save(engine, ""),
            s if s.starts_with(":s ") => save(engine, &s[3..]),
            "" => "Enter an Arabic sentence to analyze.".to_string(),
            sentence => match engine.analyze(sentence) {
                Ok(words) => format!("Analyzed {} words.", words.len()),
                Err(e) => format!("{}", e.to_string().red()),
            },
        };
    }
    Ok(())
}

/// `pos|i3rab|gender`. Missing, blank or `_` fields keep the value shown.
fn parse_edit(fields: &str) -> Result<UserJudgment, String> {
    let parts: Vec<&str> = fields.split('|').collect();
    if parts.len() > 3 {
        return Err(format!(
            "expected at most 3 fields (pos|i3rab|gender), got {}",
            parts.len()
        ));
    }
    let field = |i: usize| parts.get(i).copied().unwrap_or("");
    Ok(UserJudgment::new(field(0), field(1), field(2)))
}

fn save<T: Tagger, S: CorrectionStore>(engine: &mut ReviewEngine<T, S>, fields: &str) -> String {
    let edits = match parse_edit(fields) {
        Ok(edits) => edits,
        Err(e) => return e.yellow().to_string(),
    };
    match engine.amend_current(&edits) {
        Ok(()) => "Saved.".green().to_string(),
        Err(e @ SaveError::Store(_)) => format!("{}: {}", e, source_of(&e)).red().to_string(),
        Err(e) => e.to_string().yellow().to_string(),
    }
}

fn session_json<T: Tagger, S: CorrectionStore>(engine: &ReviewEngine<T, S>) -> String {
    serde_json::to_string_pretty(engine.session().words())
        .unwrap_or_else(|e| format!("could not encode session: {e}"))
}

fn print_ui<T: Tagger, S: CorrectionStore>(engine: &ReviewEngine<T, S>, status: &str) -> io::Result<()> {
    let mut out = stdout();
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    writeln!(out, "{}", "Arabic Morphology Review".bold().cyan())?;
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "Type a sentence and press [Enter] to analyze.")?;
    writeln!(out, "':n' / ':p' next / previous word, ':s pos|i3rab|gender' save ('_' keeps a field),")?;
    writeln!(out, "':r' reload corrections, ':j' dump JSON, 'exit' to quit.\n")?;

    let words = engine.session().words();
    if engine.session().is_empty() {
        writeln!(out, "{}", "No results.".dark_grey())?;
    }
    for (i, word) in words.iter().enumerate() {
        let view = word.view();
        let marker = if i == engine.session().position() { ">" } else { " " };
        let text = if word.is_corrected() {
            format!("{} *", word.word).green()
        } else {
            word.word.clone().bold()
        };
        writeln!(out, "{marker} {text}")?;
        writeln!(out, "    • النوع: {}", view.pos)?;
        writeln!(out, "    • الإعراب: {}", view.i3rab)?;
        writeln!(out, "    • الجنس: {}", view.gender)?;
        writeln!(out, "{}", SEPARATOR.dark_grey())?;
    }

    let store_status = if engine.is_store_available() {
        "store: online".green()
    } else {
        "store: offline".red()
    };
    writeln!(out, "\nwords: {}  {}", engine.word_count(), store_status)?;
    if !status.is_empty() {
        writeln!(out, "{status}")?;
    }
    write!(out, "\n> ")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_fields_are_positional() {
        assert_eq!(
            parse_edit("|منصوب|").unwrap(),
            UserJudgment::new("", "منصوب", "")
        );
        assert_eq!(parse_edit("حرف").unwrap(), UserJudgment::new("حرف", "", ""));
        assert!(parse_edit("").unwrap().is_unedited());
    }

    #[test]
    fn extra_fields_are_rejected() {
        assert!(parse_edit("اسم|مرفوع|مذكر|مفرد").is_err());
    }
}
