//! Transient status messages.

use crate::config::MESSAGE_CLEAR_DELAY_MS;
use crate::page::LeavePage;
use crate::types::MessageKind;

/// Show `text` in the message region and clear it after the configured delay.
///
/// A later message does not cancel an earlier one's pending clear, so the
/// earlier timer may wipe the later text.
pub fn show_message<P: LeavePage>(page: &P, text: &str, kind: MessageKind) {
    page.write_message(text, kind.css_class());

    let region = page.clone();
    page.schedule(
        MESSAGE_CLEAR_DELAY_MS,
        Box::new(move || region.clear_message()),
    );
}
