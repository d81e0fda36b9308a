//! Small helpers around `serde_json`: print any serializable value as
//! indented JSON, and load a JSON file into a typed value.

pub mod config;
pub mod loader;
pub mod util;

pub use loader::{load_json, load_json_async, load_json_or_default, LoadError, LoadErrorKind};
pub use util::{serde_print, serde_write, to_pretty_string, try_serde_write, PrintError};
