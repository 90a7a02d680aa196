//! Panic hook that puts the terminal back before the message is printed.

use super::setup::emergency_restore;
use std::panic;

/// Install the hook. Call before creating a [`TerminalManager`](super::TerminalManager).
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}
