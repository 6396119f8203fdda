use crate::commands::{CmdMessage, CmdResult, MessageLevel};
use crate::record::Record;
use colored::*;
use unicode_width::UnicodeWidthStr;

pub fn print_result(result: &CmdResult) {
    print_messages(&result.messages);
    print_records(&result.listed_records);
    print_pages(&result.pages);
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_records(records: &[Record]) {
    if records.is_empty() {
        return;
    }

    let name_width = records
        .iter()
        .map(|record| record.name().width())
        .max()
        .unwrap_or(0);

    for record in records {
        println!("{}", record_line(record, name_width));
    }
}

pub fn print_pages(pages: &[Vec<Record>]) {
    for (i, page) in pages.iter().enumerate() {
        println!("{}", format!("Page {}:", i + 1).bold());
        for record in page {
            println!("  {}", record.name());
        }
    }
}

fn record_line(record: &Record, name_width: usize) -> String {
    let phones: Vec<&str> = record
        .phones()
        .iter()
        .filter_map(|phone| phone.value())
        .collect();
    let phones = if phones.is_empty() {
        "-".to_string()
    } else {
        phones.join(", ")
    };

    let padding = name_width.saturating_sub(record.name().width());
    let mut line = format!("  {}{}  {}", record.name(), " ".repeat(padding), phones);
    if let Some(birthday) = record.birthday() {
        line.push_str(&format!("  Birthday: {}", birthday));
    }
    line
}
