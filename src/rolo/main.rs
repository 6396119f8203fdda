use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use rolo::api::RoloApi;
use rolo::cli::parse::{parse_line, Command};
use rolo::cli::print::print_result;
use rolo::commands::{CmdMessage, CmdResult};
use rolo::config::RoloConfig;
use rolo::error::Result;
use rolo::store::fs::FileStore;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

mod args;
use args::Cli;

const SNAPSHOT_FILENAME: &str = "address_book.json";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let (snapshot_path, data_dir) = resolve_paths(&cli);

    let config = RoloConfig::load(&data_dir).unwrap_or_default();
    let store = FileStore::new(snapshot_path);
    let (mut api, opened) = RoloApi::open(store);
    print_result(&opened);

    let page_size = cli.page_size.unwrap_or_else(|| config.page_size());
    api.set_page_size(page_size);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Enter a command: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            // stdin closed; shut down as if a terminal command arrived
            say_goodbye(&mut api);
            break;
        };

        match parse_line(&line?) {
            Command::Exit => {
                say_goodbye(&mut api);
                break;
            }
            Command::Invalid(message) => println!("{}", message.red()),
            command => match dispatch(&mut api, command) {
                Ok(result) => print_result(&result),
                Err(e) => println!("{}", e.to_string().red()),
            },
        }
    }

    Ok(())
}

fn say_goodbye(api: &mut RoloApi<FileStore>) {
    print_result(&api.save());
    println!("Good bye!");
}

fn dispatch(api: &mut RoloApi<FileStore>, command: Command) -> Result<CmdResult> {
    match command {
        Command::Hello => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info("How can I help you?"));
            Ok(result)
        }
        Command::Add {
            name,
            phones,
            birthday,
        } => api.add(&name, &phones, birthday.as_deref()),
        Command::Change { name, old, new } => api.change(&name, &old, &new),
        Command::Phone { name } => api.phones(&name),
        Command::ShowAll => api.show_all(),
        Command::Delete { name } => api.delete(&name),
        Command::Birthday { name } => api.birthday(&name),
        Command::ShowPages => api.show_pages(),
        // Handled by the loop before dispatch
        Command::Exit | Command::Invalid(_) => Ok(CmdResult::default()),
    }
}

fn resolve_paths(cli: &Cli) -> (PathBuf, PathBuf) {
    if let Some(file) = &cli.file {
        let dir = file
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        (file.clone(), dir)
    } else {
        let proj_dirs =
            ProjectDirs::from("com", "rolo", "rolo").expect("Could not determine data dir");
        let dir = proj_dirs.data_dir().to_path_buf();
        (dir.join(SNAPSHOT_FILENAME), dir)
    }
}
