//! Binary entry point for the audio MCP server.

use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    match audio_mcp_server::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            writeln!(io::stderr().lock(), "{error}").ok();
            ExitCode::FAILURE
        }
    }
}
