use crate::book::AddressBook;
use crate::commands::CmdResult;
use crate::error::Result;

/// Collect the book's paginated listing.
pub fn run(book: &AddressBook) -> Result<CmdResult> {
    Ok(CmdResult::default().with_pages(book.pages().collect()))
}
