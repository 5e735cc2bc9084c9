// --- File: src/bin/main.rs
use clap::Parser;
use crossterm::{
    cursor::MoveTo,
    execute,
    style::Stylize,
    terminal::{Clear, ClearType},
};
use romanizer_core::config::load_words_file;
use romanizer_core::{Preview, Romanizer};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "romanizer", about = "Romanized Nepali to Devanagari preview")]
struct Cli {
    /// Custom word list (TOML) added to the built-in shop vocabulary
    #[arg(long)]
    words: Option<PathBuf>,
    /// Print JSON previews instead of the interactive screen
    #[arg(long)]
    json: bool,
    /// Text to convert once; starts the interactive preview when omitted
    text: Vec<String>,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let engine = match &cli.words {
        Some(path) => match load_words_file(path) {
            Ok(config) => Romanizer::from_config(&config),
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
        None => Romanizer::new(),
    };
    tracing::debug!(words = engine.lexicon().len(), "lexicon ready");

    let mut stdout = io::stdout();
    if !cli.text.is_empty() {
        let text = cli.text.join(" ");
        if cli.json {
            print_json(&engine.preview(text.as_str()), &mut stdout)?;
        } else {
            writeln!(stdout, "{}", engine.convert(text.as_str()))?;
        }
        return Ok(());
    }

    if cli.json {
        // One JSON preview per input line, for piping.
        for line in io::stdin().lock().lines() {
            print_json(&engine.preview(line?.as_str()), &mut stdout)?;
        }
        return Ok(());
    }

    run_interactive(&engine, &mut stdout)
}

fn run_interactive(engine: &Romanizer, stdout: &mut io::Stdout) -> io::Result<()> {
    let mut preedit = String::new();
    let mut committed: Vec<String> = Vec::new();
    let stdin = io::stdin();

    loop {
        let preview = engine.preview(preedit.as_str());
        print_ui(&preview, &committed, stdout)?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }
        let cmd = input.trim();

        match cmd {
            "exit" => break,
            "" => {
                // Enter on an empty line commits the transliteration.
                if !preview.nepali.is_empty() {
                    committed.push(preview.nepali.clone());
                }
                preedit.clear();
            }
            s if s.starts_with(':') && s.len() > 1 => {
                if let Ok(n) = s[1..].parse::<usize>() {
                    if let Some(choice) = n.checked_sub(1).and_then(|i| preview.suggestions.get(i)) {
                        replace_last_word(&mut preedit, &choice.romanized);
                    }
                }
            }
            s => {
                if !preedit.is_empty() {
                    preedit.push(' ');
                }
                preedit.push_str(s);
            }
        }
    }

    if !committed.is_empty() {
        writeln!(stdout, "\n{}", committed.join(" "))?;
    }
    Ok(())
}

fn replace_last_word(preedit: &mut String, word: &str) {
    let keep = preedit.trim_end().rfind(char::is_whitespace).map_or(0, |i| i + 1);
    preedit.truncate(keep);
    preedit.push_str(word);
}

fn print_json(preview: &Preview, stdout: &mut io::Stdout) -> io::Result<()> {
    let json = serde_json::to_string(preview).map_err(io::Error::other)?;
    writeln!(stdout, "{json}")
}

fn print_ui(preview: &Preview, committed: &[String], stdout: &mut io::Stdout) -> io::Result<()> {
    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    writeln!(stdout, "{}", "Nepali Romanizer".bold())?;
    writeln!(stdout, "---------------------------------------------------------------")?;
    writeln!(stdout, "Type words and press [Enter]; an empty line commits.")?;
    writeln!(stdout, "Pick a suggestion with ':1', ':2'. 'exit' to quit.\n")?;

    if !committed.is_empty() {
        writeln!(stdout, "Committed: {}", committed.join(" ").green())?;
    }
    writeln!(stdout, "Pre-edit: [{}]", preview.input)?;
    writeln!(stdout, "Nepali  -> {}", preview.nepali.as_str().cyan())?;
    if preview.looks_romanized {
        writeln!(stdout, "{}", "(looks like romanized Nepali)".dim())?;
    }

    if preview.suggestions.is_empty() {
        writeln!(stdout, "\nNo suggestions.")?;
    } else {
        writeln!(stdout, "\nSuggestions:")?;
        for (i, s) in preview.suggestions.iter().enumerate() {
            writeln!(stdout, "  :{}: {} ({})", i + 1, s.nepali, s.romanized)?;
        }
    }
    write!(stdout, "\n> ")?;
    stdout.flush()
}
