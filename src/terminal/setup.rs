//! Entering and leaving full-screen mode, including on panic.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use std::panic;

/// Switch to the alternate screen so the browser does not scroll away the
/// user's shell output.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen)
}

/// Undo [`enter_tui_mode`] and raw mode. Errors are ignored, so this is safe
/// to call more than once and from a panic hook.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Best-effort restore of stdout, used when the normal drop path may not run.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}

/// Chain a hook that leaves full-screen mode before the current one prints
/// the report. Install after `color_eyre::install()`.
pub fn setup_panic_hook() {
    let report = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        emergency_restore();
        report(info);
    }));
}
