use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::record::Record;

/// Add phones (and optionally a birthday) to `name`, creating the record
/// when it does not exist yet.
pub fn run(
    book: &mut AddressBook,
    name: &str,
    phones: &[String],
    birthday: Option<&str>,
) -> Result<CmdResult> {
    if let Some(record) = book.find_mut(name) {
        for phone in phones {
            record.add_phone(phone)?;
        }
        if let Some(value) = birthday {
            record.set_birthday(value)?;
        }
    } else {
        let mut record = Record::new(name, birthday)?;
        for phone in phones {
            record.add_phone(phone)?;
        }
        book.add_record(record);
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Record for {} added.", name)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RoloError;

    #[test]
    fn creates_a_new_record_with_phones_and_birthday() {
        let mut book = AddressBook::new();
        run(
            &mut book,
            "anna",
            &["1234567890".into()],
            Some("1990-05-01"),
        )
        .unwrap();

        let anna = book.find("anna").unwrap();
        assert_eq!(anna.phones()[0].value(), Some("1234567890"));
        assert_eq!(anna.birthday(), Some("1990-05-01"));
    }

    #[test]
    fn merges_into_an_existing_record() {
        let mut book = AddressBook::new();
        run(&mut book, "anna", &["1111111111".into()], None).unwrap();
        run(
            &mut book,
            "anna",
            &["2222222222".into()],
            Some("1990-05-01"),
        )
        .unwrap();

        let anna = book.find("anna").unwrap();
        assert_eq!(anna.phones().len(), 2);
        assert_eq!(anna.birthday(), Some("1990-05-01"));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn propagates_invalid_phone() {
        let mut book = AddressBook::new();
        let err = run(&mut book, "anna", &["123".into()], None).unwrap_err();
        assert!(matches!(err, RoloError::InvalidPhone(_)));
    }

    #[test]
    fn propagates_invalid_birthday() {
        let mut book = AddressBook::new();
        let err = run(&mut book, "anna", &[], Some("2023-13-01")).unwrap_err();
        assert!(matches!(err, RoloError::InvalidBirthday(_)));
        assert!(book.find("anna").is_none());
    }
}
