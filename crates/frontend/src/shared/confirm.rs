//! Blocking yes/no prompt used before destructive actions.

/// Ask the user to confirm via the browser dialog. Returns `false` when the
/// window is unavailable, so a headless host never confirms a destructive
/// action.
pub fn confirm(message: &str) -> bool {
    match web_sys::window() {
        Some(win) => win.confirm_with_message(message).unwrap_or(false),
        None => false,
    }
}
