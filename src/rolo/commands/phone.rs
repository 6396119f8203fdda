use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// List the phone numbers stored for `name`.
pub fn run(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match book.find(name) {
        None => {
            result.add_message(CmdMessage::warning(format!(
                "Record for {} not found.",
                name
            )));
        }
        Some(record) if record.phones().is_empty() => {
            result.add_message(CmdMessage::info(format!(
                "No phone numbers found for {}.",
                name
            )));
        }
        Some(record) => {
            result.add_message(CmdMessage::info(format!(
                "The phone numbers for {} are:",
                name
            )));
            for phone in record.phones() {
                if let Some(value) = phone.value() {
                    result.add_message(CmdMessage::info(value));
                }
            }
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, MessageLevel};

    #[test]
    fn lists_all_phones() {
        let mut book = AddressBook::new();
        add::run(
            &mut book,
            "anna",
            &["1111111111".into(), "2222222222".into()],
            None,
        )
        .unwrap();

        let result = run(&book, "anna").unwrap();
        let contents: Vec<_> = result.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(
            contents,
            ["The phone numbers for anna are:", "1111111111", "2222222222"]
        );
    }

    #[test]
    fn reports_a_record_without_phones() {
        let mut book = AddressBook::new();
        add::run(&mut book, "anna", &[], None).unwrap();

        let result = run(&book, "anna").unwrap();
        assert_eq!(result.messages[0].content, "No phone numbers found for anna.");
    }

    #[test]
    fn warns_on_missing_record() {
        let book = AddressBook::new();
        let result = run(&book, "ghost").unwrap();
        assert!(matches!(result.messages[0].level, MessageLevel::Warning));
    }
}
