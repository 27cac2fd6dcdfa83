// src/printer/printers.rs

//! Functions to print the rewritten lines to stdout and colored error
//! messages to stderr.
//!
//! `lia.rs` should be the only caller that prints to STDOUT.

use crate::debug::printers::de_err;

use std::io::Write; // for `std::io::Stdout.flush`

extern crate termcolor;
#[doc(hidden)]
pub use termcolor::{Color, ColorChoice};
use termcolor::{ColorSpec, StandardStream, WriteColor};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// stdout, stderr printing
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Color for printed errors.
pub const COLOR_ERROR: Color = Color::Red;

/// Print colored `value` to `out`.
fn print_colored(
    color: Color,
    value: &[u8],
    out: &mut StandardStream,
) -> std::io::Result<()> {
    match out.set_color(ColorSpec::new().set_fg(Some(color))) {
        Ok(_) => {}
        Err(err) => {
            de_err!("print_colored: out.set_color({:?}) returned error {}", color, err);
            return Err(err);
        }
    };
    match out.write(value) {
        Ok(_) => {}
        Err(err) => {
            de_err!("print_colored: out.write(…) returned error {}", err);
            return Err(err);
        }
    }
    match out.reset() {
        Ok(_) => {}
        Err(err) => {
            de_err!("print_colored: out.reset() returned error {}", err);
            return Err(err);
        }
    }
    out.flush()?;

    Ok(())
}

/// Print colored output to terminal on stderr.
///
/// See an example <https://docs.rs/termcolor/1.4.1/termcolor/#detecting-presence-of-a-terminal>.
pub fn print_colored_stderr(
    color: Color,
    color_choice_opt: Option<ColorChoice>,
    value: &[u8],
) -> std::io::Result<()> {
    let choice: ColorChoice = match color_choice_opt {
        Some(choice_) => choice_,
        None => ColorChoice::Auto,
    };
    let mut stderr = StandardStream::stderr(choice);
    let _stdout_lock = std::io::stdout().lock();
    let _stderr_lock = std::io::stderr().lock();

    print_colored(color, value, &mut stderr)
}

/// Safely write the `buffer` to stdout with help of [`StdoutLock`].
///
/// [`StdoutLock`]: std::io::StdoutLock
pub fn write_stdout(buffer: &[u8]) {
    let stdout = std::io::stdout();
    let mut stdout_lock = stdout.lock();
    let _stderr_lock = std::io::stderr().lock();
    match stdout_lock.write(buffer) {
        Ok(_) => {}
        Err(_err) => {
            // XXX: this will print when this program stdout is truncated, like due to `head`
            //          Broken pipe (os error 32)
            //      Not sure if anything should be done about it
            de_err!("stdout_lock.write(buffer@{:p} (len {})) error {}", buffer, buffer.len(), _err);
        }
    }
    match stdout_lock.flush() {
        Ok(_) => {}
        Err(_err) => {
            // XXX: this will print when this program stdout is truncated, like due to `head`
            //          Broken pipe (os error 32)
            //      Not sure if anything should be done about it
            de_err!("stdout_lock.flush() error {}", _err);
        }
    }
}
