use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// List every record in the book, in insertion order.
pub fn run(book: &AddressBook) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if book.is_empty() {
        result.add_message(CmdMessage::info("The contact book is empty."));
        return Ok(result);
    }
    result.add_message(CmdMessage::info("All contacts:"));
    Ok(result.with_listed_records(book.records().cloned().collect()))
}
