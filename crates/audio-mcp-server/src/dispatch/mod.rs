//! JSON-RPC request dispatch.
//!
//! Each input line is handled on its own:
//!
//! 1. The line is parsed as a JSON object. Anything else produces an
//!    `Internal error` envelope (code `-32603`) whose `data` carries the
//!    parser diagnostic.
//! 2. Methods under `notifications/` are logged and produce no output.
//! 3. Known methods are routed to their handler. Unknown methods receive a
//!    soft failure result rather than an error envelope:
//!
//! ```json
//! {"jsonrpc":"2.0","id":3,"result":{"success":false,"error":"Unknown method: foo/bar"}}
//! ```
//!
//! Tool failures, including validation failures, are reported as tool
//! results with `isError: true` and never as envelope-level errors.

mod errors;
mod handler;
mod request;
mod router;
mod tools;

pub use self::errors::DispatchError;
pub use self::handler::Dispatcher;
pub(crate) use self::request::trim_trailing_whitespace;
pub use self::router::Method;
pub use self::tools::{Content, ToolResult, call_tool, execute, render_status};
