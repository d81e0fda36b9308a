use serde::Serialize;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrintError {
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Pretty-print a value as two-space indented JSON to stdout.
///
/// Fields come out in declaration order, named by their serde rename if one
/// is set. No trailing newline is written. If the value can't be serialized,
/// a diagnostic line is printed instead and the failure is swallowed; use
/// [`try_serde_write`] when the caller needs to know.
///
/// ```
/// #[derive(serde::Serialize)]
/// struct Person {
///     name: String,
///     age: i64,
/// }
///
/// json_helpers::serde_print(&Person { name: "Alice".into(), age: 25 });
/// ```
pub fn serde_print<T>(value: &T)
where
    T: Serialize + ?Sized,
{
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    serde_write(&mut lock, value);
}

/// Same as [`serde_print`], but writes to any sink.
pub fn serde_write<W, T>(writer: &mut W, value: &T)
where
    W: Write + ?Sized,
    T: Serialize + ?Sized,
{
    match try_serde_write(writer, value) {
        Ok(()) => {}
        Err(PrintError::Serialize(e)) => {
            if let Err(e) = writeln!(writer, "Failed to serialize for print: {e}") {
                eprintln!("Failed to write print diagnostic: {e}");
            }
        }
        Err(PrintError::Io(e)) => eprintln!("Failed to write for print: {e}"),
    }
}

/// Write a value as pretty JSON, reporting serialization and write failures.
pub fn try_serde_write<W, T>(writer: &mut W, value: &T) -> Result<(), PrintError>
where
    W: Write + ?Sized,
    T: Serialize + ?Sized,
{
    // Serialize up front so a failing value never leaves partial output behind
    let s = to_pretty_string(value)?;
    writer.write_all(s.as_bytes())?;
    writer.flush()?;
    Ok(())
}

pub fn to_pretty_string<T>(value: &T) -> Result<String, PrintError>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_string_pretty(value)?)
}
