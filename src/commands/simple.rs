//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::dictionary::Dictionary;
use crate::game::Session;
use crate::output::formatters::{length_badge, points, rejection_line};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: Rng, D: Dictionary + ?Sized>(
    session: &mut Session<R>,
    dictionary: &D,
    language: &str,
) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(session, dictionary, language, stdin.lock(), stdout.lock())
}

/// Run the game loop over arbitrary input and output streams
///
/// Ends on `:quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<R, D, I, O>(
    session: &mut Session<R>,
    dictionary: &D,
    language: &str,
    mut input: I,
    mut output: O,
) -> Result<()>
where
    R: Rng,
    D: Dictionary + ?Sized,
    I: BufRead,
    O: Write,
{
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                 Word Scramble - Simple Mode                  ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Make as many words as you can from the root word's letters.")?;
    writeln!(output, "Words need 3+ letters; longer words score more.\n")?;
    writeln!(output, "Commands: ':new' for a new root word, ':quit' to exit\n")?;

    print_round_header(session, &mut output)?;

    let mut line = String::new();
    loop {
        write!(output, "Your word: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        match line.trim() {
            ":quit" | ":q" => break,
            ":new" | ":n" => {
                print_round_summary(session, &mut output)?;
                session.new_round();
                writeln!(output, "\n🔄 New round started!\n")?;
                print_round_header(session, &mut output)?;
            }
            candidate => match session.submit(candidate, dictionary, language) {
                Ok(accepted) => {
                    writeln!(
                        output,
                        "{} {} {} (+{}, total {})",
                        "✓".green().bold(),
                        length_badge(&accepted.word),
                        accepted.word.bright_white().bold(),
                        points(accepted.score),
                        session.round().score()
                    )?;
                }
                Err(rejection) if rejection.is_silent() => {}
                Err(rejection) => {
                    writeln!(output, "{} {}", "✗".red().bold(), rejection_line(rejection))?;
                }
            },
        }
    }

    print_round_summary(session, &mut output)?;
    writeln!(output, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

fn print_round_header<R: Rng, O: Write>(session: &Session<R>, output: &mut O) -> Result<()> {
    writeln!(output, "────────────────────────────────────────────────────────────")?;
    writeln!(
        output,
        "Root word: {}",
        session.round().root_word().to_uppercase().bright_yellow().bold()
    )?;
    writeln!(output, "────────────────────────────────────────────────────────────")?;
    Ok(())
}

fn print_round_summary<R: Rng, O: Write>(session: &Session<R>, output: &mut O) -> Result<()> {
    let round = session.round();
    writeln!(
        output,
        "\nRound over: {} words, {}",
        round.used_words().len(),
        points(round.score())
    )?;
    for word in round.used_words() {
        writeln!(output, "  {} {word}", length_badge(word))?;
    }
    Ok(())
}
