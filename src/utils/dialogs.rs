use rfd::{MessageButtons, MessageDialog, MessageLevel};
use std::fmt::Display;
use std::process::exit;

/// Reports a startup failure in a native dialog, since no window exists yet.
pub fn popup_error_and_exit(error: impl Display) -> ! {
    let description = error.to_string();
    log::error!("Cannot start Loop: {description}");

    let _ = MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Loop could not start")
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show();
    exit(1)
}
