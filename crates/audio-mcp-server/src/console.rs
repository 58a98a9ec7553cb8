//! Interactive console for exercising the tools by hand.
//!
//! Commands are read one per line. Prompts, tool results and diagnostics are
//! written to the supplied output (stderr in the binary), never to stdout.

use std::io::{BufRead, Write};

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::error;

use crate::context::ServerContext;
use crate::dispatch::{ToolResult, execute};
use crate::registry::ToolName;

const CONSOLE_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::console");

const BANNER: &str = "\
MCP Audio Server - Interactive Mode
Available commands:
  list - List available tools
  speak <text> - Speak text
  play <file_path> - Play audio file
  stop - Stop audio playback
  status - Get audio status
  quit - Exit
";

const PROMPT: &str = "audio> ";

/// Failures that end a console session.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Writing to the console output failed.
    #[error("failed to write console output: {source}")]
    Write {
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// A result could not be rendered.
    #[error("failed to render console output: {source}")]
    Render {
        /// Underlying serialisation error.
        #[source]
        source: serde_json::Error,
    },
}

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand<'a> {
    /// List the tool catalogue.
    List,
    /// Speak the rest of the line.
    Speak(&'a str),
    /// Play the file named by the rest of the line.
    Play(&'a str),
    /// Stop audio.
    Stop,
    /// Show audio status.
    Status,
    /// End the session.
    Quit,
    /// Blank input.
    Empty,
    /// Anything else.
    Unknown(&'a str),
}

impl<'a> ConsoleCommand<'a> {
    /// Parses one input line. Surrounding whitespace is ignored.
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        let command = line.trim();
        match command {
            "" => Self::Empty,
            "list" => Self::List,
            "stop" => Self::Stop,
            "status" => Self::Status,
            "quit" => Self::Quit,
            _ => {
                if let Some(text) = command.strip_prefix("speak ") {
                    Self::Speak(text)
                } else if let Some(path) = command.strip_prefix("play ") {
                    Self::Play(path)
                } else {
                    Self::Unknown(command)
                }
            }
        }
    }
}

fn single_argument(name: &str, value: &str) -> Value {
    let mut arguments = Map::new();
    arguments.insert(name.to_owned(), Value::String(value.to_owned()));
    Value::Object(arguments)
}

/// Runs the console until `quit` or end of input.
///
/// A failure to read input ends the session like end of input.
///
/// # Errors
///
/// Returns [`ConsoleError`] when output cannot be written.
pub fn run_console<R, W>(
    reader: &mut R,
    output: &mut W,
    context: &mut ServerContext,
) -> Result<(), ConsoleError>
where
    R: BufRead,
    W: Write,
{
    write_text(output, BANNER)?;
    write_text(output, "\n")?;

    let mut line = String::new();
    loop {
        write_text(output, PROMPT)?;
        output
            .flush()
            .map_err(|source| ConsoleError::Write { source })?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => return Ok(()),
            Ok(_) => {}
            Err(source) => {
                error!(target: CONSOLE_TARGET, error = %source, "failed to read console input");
                return Ok(());
            }
        }

        match ConsoleCommand::parse(&line) {
            ConsoleCommand::Quit => return Ok(()),
            ConsoleCommand::Empty => {}
            ConsoleCommand::List => {
                let tools = context.registry.describe();
                write_json(output, &serde_json::json!({ "tools": tools }))?;
            }
            ConsoleCommand::Speak(text) => {
                let arguments = single_argument("text", text);
                let result = invoke(context, ToolName::SpeakText, Some(&arguments));
                write_json(output, &result)?;
            }
            ConsoleCommand::Play(path) => {
                let arguments = single_argument("file_path", path);
                let result = invoke(context, ToolName::PlayAudioFile, Some(&arguments));
                write_json(output, &result)?;
            }
            ConsoleCommand::Stop => write_json(output, &invoke(context, ToolName::StopAudio, None))?,
            ConsoleCommand::Status => {
                write_json(output, &invoke(context, ToolName::GetAudioStatus, None))?;
            }
            ConsoleCommand::Unknown(command) => {
                write_text(output, &format!("Unknown command: {command}\n"))?;
            }
        }
    }
}

fn invoke(context: &mut ServerContext, tool: ToolName, arguments: Option<&Value>) -> ToolResult {
    match context.registry.validate(tool.as_str(), arguments) {
        Ok(call) => execute(&mut context.audio, &call),
        Err(error) => ToolResult::failure(&error),
    }
}

fn write_text(output: &mut impl Write, text: &str) -> Result<(), ConsoleError> {
    output
        .write_all(text.as_bytes())
        .map_err(|source| ConsoleError::Write { source })
}

fn write_json(output: &mut impl Write, value: &impl serde::Serialize) -> Result<(), ConsoleError> {
    let rendered =
        serde_json::to_string_pretty(value).map_err(|source| ConsoleError::Render { source })?;
    write_text(output, &rendered)?;
    write_text(output, "\n")
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use audio_mcp_playback::AudioController;
    use audio_mcp_playback::testing::{AudioCall, CallLog, ScriptedMixer, ScriptedSpeech};
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("list", ConsoleCommand::List)]
    #[case("  status \n", ConsoleCommand::Status)]
    #[case("speak hello world", ConsoleCommand::Speak("hello world"))]
    #[case("play /tmp/a.wav\n", ConsoleCommand::Play("/tmp/a.wav"))]
    #[case("speak", ConsoleCommand::Unknown("speak"))]
    #[case("", ConsoleCommand::Empty)]
    #[case("dance", ConsoleCommand::Unknown("dance"))]
    fn commands_are_parsed(#[case] line: &str, #[case] expected: ConsoleCommand<'static>) {
        assert_eq!(ConsoleCommand::parse(line), expected);
    }

    fn session(input: &str, log: &CallLog) -> String {
        let audio = AudioController::from_backends(
            Some(ScriptedSpeech::new(log.clone())),
            Some(ScriptedMixer::new(log.clone())),
        );
        let mut context = ServerContext::new(audio);
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        run_console(&mut reader, &mut output, &mut context).expect("console session");
        String::from_utf8(output).expect("utf-8 output")
    }

    #[test]
    fn speak_command_reaches_the_engine() {
        let log = CallLog::new();
        let output = session("speak good morning\nquit\n", &log);

        assert!(output.starts_with("MCP Audio Server - Interactive Mode"));
        assert!(output.contains("Successfully spoke text: 'good morning'"));
        assert!(log.calls().contains(&AudioCall::Say(String::from("good morning"))));
    }

    #[test]
    fn quit_stops_reading() {
        let log = CallLog::new();
        let output = session("quit\nspeak never\n", &log);
        assert!(!output.contains("never"));
        assert!(log.calls().is_empty());
    }

    #[test]
    fn unknown_commands_are_reported() {
        let output = session("dance\n", &CallLog::new());
        assert!(output.contains("Unknown command: dance"));
    }

    #[test]
    fn list_prints_the_catalogue() {
        let output = session("list\n", &CallLog::new());
        assert!(output.contains("\"speak_text\""));
        assert!(output.contains("\"get_audio_status\""));
    }

    #[test]
    fn missing_file_is_reported_as_tool_error() {
        let output = session("play /no/such/file.mp3\n", &CallLog::new());
        assert!(output.contains("Error: Audio file not found: /no/such/file.mp3"));
        assert!(output.contains("\"isError\": true"));
    }
}
