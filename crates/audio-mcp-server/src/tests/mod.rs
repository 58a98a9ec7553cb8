//! Test suites for the audio MCP server.

mod support;
