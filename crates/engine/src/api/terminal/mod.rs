//! Terminal driver - one command per line in, one screen per command out.

pub mod commands;
pub mod render;

use std::io::{self, BufRead, Write};

use tribunal_shared::ActionResponse;

use crate::infrastructure::config::OutputFormat;
use crate::use_cases::session::PresentationSession;

pub use commands::{Command, CommandParseError, HELP};

/// Read commands from `input` until EOF or `quit`, writing screens to `output`.
///
/// In JSON mode every line written is one `ActionResponse`; `view` produces an
/// accepted response for the current screen, and `help` and bad commands
/// produce rejected ones so the stream stays machine-readable.
pub fn run<R: BufRead, W: Write>(
    session: &mut PresentationSession,
    input: R,
    mut output: W,
    format: OutputFormat,
) -> io::Result<()> {
    write_response(
        &mut output,
        format,
        &ActionResponse::accepted(session.view()),
    )?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match line.parse::<Command>() {
            Ok(Command::Quit) => {
                tracing::debug!("Quit requested");
                break;
            }
            Ok(Command::Action(action)) => session.dispatch(action),
            Ok(Command::View) => ActionResponse::accepted(session.view()),
            Ok(Command::Help) => match format {
                OutputFormat::Text => {
                    writeln!(output, "{HELP}")?;
                    output.flush()?;
                    continue;
                }
                OutputFormat::Json => ActionResponse::rejected(HELP, session.view()),
            },
            Err(err) => {
                tracing::debug!(error = %err, "Unparseable command");
                match format {
                    OutputFormat::Text => {
                        writeln!(output, "? {err}")?;
                        output.flush()?;
                        continue;
                    }
                    OutputFormat::Json => ActionResponse::rejected(err.to_string(), session.view()),
                }
            }
        };

        write_response(&mut output, format, &response)?;
    }

    Ok(())
}

fn write_response<W: Write>(
    output: &mut W,
    format: OutputFormat,
    response: &ActionResponse,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(output, "{}", render::render_response(response))?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *output, response)?;
            writeln!(output)?;
        }
    }
    output.flush()
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Arc;

    use super::*;
    use crate::infrastructure::content_sources::BuiltinContent;
    use crate::infrastructure::ports::ContentSource;
    use tribunal_domain::Stage;

    fn session() -> PresentationSession {
        let pack = BuiltinContent::new().load().expect("built-in pack");
        PresentationSession::new(Arc::new(pack))
    }

    fn drive(session: &mut PresentationSession, script: &str, format: OutputFormat) -> String {
        let mut output = Vec::new();
        run(session, Cursor::new(script), &mut output, format).expect("run");
        String::from_utf8(output).expect("utf-8")
    }

    mod text {
        use super::*;

        #[test]
        fn script_walks_to_the_quiz() {
            let mut session = session();

            let output = drive(
                &mut session,
                "next\nselect judge\nnext\nnext\nnext\nnext\n",
                OutputFormat::Text,
            );

            assert_eq!(session.playthrough().stage(), Stage::Quiz);
            assert!(output.contains("== Question 1 of 4 =="));
        }

        #[test]
        fn answer_rejections_read_without_option_indices() {
            let mut session = session();

            let output = drive(
                &mut session,
                "next\nselect judge\nnext\nnext\nnext\nnext\nanswer 9\nanswer 2\nanswer 3\n",
                OutputFormat::Text,
            );
            let lines: Vec<&str> = output.lines().collect();

            assert!(lines.contains(&"! no such option; the question has 4 options"));
            assert!(lines
                .contains(&"! this question is already answered; the answer cannot be changed"));
            assert_eq!(session.playthrough().quiz().answers()[0], Some(1));
        }

        #[test]
        fn bad_command_prints_hint_and_keeps_state() {
            let mut session = session();

            let output = drive(&mut session, "objection\n", OutputFormat::Text);

            assert!(output.contains("? unknown command 'objection'"));
            assert_eq!(session.playthrough().stage(), Stage::Intro);
        }

        #[test]
        fn quit_stops_reading() {
            let mut session = session();

            drive(&mut session, "quit\nnext\n", OutputFormat::Text);

            assert_eq!(session.playthrough().stage(), Stage::Intro);
        }

        #[test]
        fn help_lists_commands() {
            let mut session = session();

            let output = drive(&mut session, "help\n", OutputFormat::Text);

            assert!(output.contains("answer <n>"));
        }
    }

    mod json {
        use super::*;

        fn responses(output: &str) -> Vec<ActionResponse> {
            output
                .lines()
                .map(|line| serde_json::from_str(line).expect("one response per line"))
                .collect()
        }

        #[test]
        fn every_line_is_an_action_response() {
            let mut session = session();

            let output = drive(&mut session, "next\nnext\nview\n", OutputFormat::Json);
            let responses = responses(&output);

            assert_eq!(responses.len(), 4);
            assert!(responses[0].accepted);
            assert_eq!(responses[1].view.stage_name(), "character-select");
            assert!(!responses[2].accepted);
            assert_eq!(
                responses[2].rejection.as_deref(),
                Some("select a role to continue")
            );
            assert!(responses[3].accepted);
        }

        #[test]
        fn bad_command_becomes_rejected_response() {
            let mut session = session();

            let output = drive(&mut session, "answer zero\n", OutputFormat::Json);
            let responses = responses(&output);

            assert_eq!(responses.len(), 2);
            assert!(!responses[1].accepted);
            assert_eq!(responses[1].view.stage_name(), "intro");
        }
    }
}
