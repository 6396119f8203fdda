//! Free-text command parsing for the interactive loop.
//!
//! Lines are trimmed and lowercased, then split on whitespace. A handful
//! of commands match the whole line (`show all`, `good bye`, ...); the
//! rest dispatch on the first token. Anything malformed becomes
//! [`Command::Invalid`] with a message — parsing never fails hard.

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add {
        name: String,
        phones: Vec<String>,
        birthday: Option<String>,
    },
    Change {
        name: String,
        old: String,
        new: String,
    },
    Phone {
        name: String,
    },
    ShowAll,
    Delete {
        name: String,
    },
    Birthday {
        name: String,
    },
    ShowPages,
    Exit,
    Invalid(String),
}

const INVALID: &str = "Invalid command. Please try again.";

pub fn parse_line(line: &str) -> Command {
    let line = line.trim().to_lowercase();
    match line.as_str() {
        "hello" => return Command::Hello,
        "show all" => return Command::ShowAll,
        "show pages" => return Command::ShowPages,
        "good bye" | "close" | "exit" => return Command::Exit,
        _ => {}
    }

    let mut tokens = line.split_whitespace();
    let Some(head) = tokens.next() else {
        return Command::Invalid(INVALID.to_string());
    };
    let args: Vec<String> = tokens.map(str::to_string).collect();

    match head {
        "add" => parse_add(&args),
        "change" => match args.as_slice() {
            [name, old, new] => Command::Change {
                name: name.clone(),
                old: old.clone(),
                new: new.clone(),
            },
            _ => Command::Invalid("Usage: change <name> <old phone> <new phone>".to_string()),
        },
        "phone" => parse_single_name(&args, "Usage: phone <name>", |name| Command::Phone { name }),
        "delete" => {
            parse_single_name(&args, "Usage: delete <name>", |name| Command::Delete { name })
        }
        "birthday" => parse_single_name(&args, "Usage: birthday <name>", |name| {
            Command::Birthday { name }
        }),
        _ => Command::Invalid(INVALID.to_string()),
    }
}

fn parse_add(args: &[String]) -> Command {
    let Some((name, rest)) = args.split_first() else {
        return Command::Invalid("Usage: add <name> [phones...] [birthday]".to_string());
    };

    // Token-shape heuristic: the first trailing token containing a dash is
    // the birthday; everything else is a phone number.
    let mut phones = Vec::new();
    let mut birthday = None;
    for token in rest {
        if birthday.is_none() && token.contains('-') {
            birthday = Some(token.clone());
        } else {
            phones.push(token.clone());
        }
    }

    Command::Add {
        name: name.clone(),
        phones,
        birthday,
    }
}

fn parse_single_name(
    args: &[String],
    usage: &str,
    build: impl FnOnce(String) -> Command,
) -> Command {
    match args {
        [name] => build(name.clone()),
        _ => Command::Invalid(usage.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_line_commands() {
        assert_eq!(parse_line("hello"), Command::Hello);
        assert_eq!(parse_line("show all"), Command::ShowAll);
        assert_eq!(parse_line("show pages"), Command::ShowPages);
        assert_eq!(parse_line("good bye"), Command::Exit);
        assert_eq!(parse_line("close"), Command::Exit);
        assert_eq!(parse_line("exit"), Command::Exit);
    }

    #[test]
    fn input_is_trimmed_and_lowercased() {
        assert_eq!(parse_line("  EXIT  "), Command::Exit);
        assert_eq!(
            parse_line("Delete Anna"),
            Command::Delete {
                name: "anna".to_string()
            }
        );
    }

    #[test]
    fn add_splits_phones_and_birthday_by_token_shape() {
        assert_eq!(
            parse_line("add anna 1234567890 1990-05-01 0987654321"),
            Command::Add {
                name: "anna".to_string(),
                phones: vec!["1234567890".to_string(), "0987654321".to_string()],
                birthday: Some("1990-05-01".to_string()),
            }
        );
    }

    #[test]
    fn add_first_dashed_token_wins_as_birthday() {
        assert_eq!(
            parse_line("add anna 1990-05-01 1991-06-02"),
            Command::Add {
                name: "anna".to_string(),
                phones: vec!["1991-06-02".to_string()],
                birthday: Some("1990-05-01".to_string()),
            }
        );
    }

    #[test]
    fn add_with_name_only() {
        assert_eq!(
            parse_line("add anna"),
            Command::Add {
                name: "anna".to_string(),
                phones: vec![],
                birthday: None,
            }
        );
    }

    #[test]
    fn change_requires_three_arguments() {
        assert_eq!(
            parse_line("change anna 1111111111 2222222222"),
            Command::Change {
                name: "anna".to_string(),
                old: "1111111111".to_string(),
                new: "2222222222".to_string(),
            }
        );
        assert!(matches!(
            parse_line("change anna 1111111111"),
            Command::Invalid(_)
        ));
    }

    #[test]
    fn single_name_commands_reject_wrong_arity() {
        assert!(matches!(parse_line("phone"), Command::Invalid(_)));
        assert!(matches!(parse_line("delete a b"), Command::Invalid(_)));
        assert!(matches!(
            parse_line("birthday anna"),
            Command::Birthday { .. }
        ));
    }

    #[test]
    fn garbage_and_blank_lines_are_invalid() {
        assert!(matches!(parse_line("frobnicate"), Command::Invalid(_)));
        assert!(matches!(parse_line(""), Command::Invalid(_)));
        assert!(matches!(parse_line("   "), Command::Invalid(_)));
    }
}
