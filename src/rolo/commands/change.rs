use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Replace `old` with `new` in `name`'s phone list.
pub fn run(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match book.find_mut(name) {
        None => {
            result.add_message(CmdMessage::warning(format!(
                "Record for {} not found.",
                name
            )));
        }
        Some(record) if record.find_phone(old).is_none() => {
            result.add_message(CmdMessage::warning(format!(
                "Phone number {} not found in {}'s record.",
                old, name
            )));
        }
        Some(record) => {
            record.edit_phone(old, new)?;
            result.add_message(CmdMessage::success(format!(
                "Phone number for {} changed to {}",
                name, new
            )));
        }
    }
    Ok(result)
}
