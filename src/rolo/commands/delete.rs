use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Delete the record for `name`, reporting when it does not exist.
pub fn run(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if book.contains(name) {
        book.delete(name);
        result.add_message(CmdMessage::success(format!(
            "Record for {} deleted.",
            name
        )));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "Record for {} not found.",
            name
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, MessageLevel};

    #[test]
    fn deletes_an_existing_record() {
        let mut book = AddressBook::new();
        add::run(&mut book, "anna", &[], None).unwrap();

        let result = run(&mut book, "anna").unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Success));
        assert!(book.is_empty());
    }

    #[test]
    fn missing_record_is_a_reported_no_op() {
        let mut book = AddressBook::new();
        let result = run(&mut book, "ghost").unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Warning));
        assert!(book.is_empty());
    }
}
