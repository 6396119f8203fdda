use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Report the days until `name`'s next birthday.
pub fn run(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match book.find(name) {
        None => {
            result.add_message(CmdMessage::warning(format!(
                "Record for {} not found.",
                name
            )));
        }
        Some(record) => match record.days_to_birthday() {
            Some(days) => {
                result.add_message(CmdMessage::info(format!(
                    "Days until {}'s next birthday: {}",
                    name, days
                )));
            }
            None => {
                result.add_message(CmdMessage::info(format!(
                    "{} doesn't have a birthday date set.",
                    name
                )));
            }
        },
    }
    Ok(result)
}
