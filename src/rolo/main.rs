use chrono::Local;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use rolo::api::ContactsApi;
use rolo::commands::{CmdMessage, CmdResult, MessageLevel};
use rolo::config::RoloConfig;
use rolo::error::Result;
use rolo::store::fs::FileStore;
use rolo::store::DirectoryStore;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

mod repl;
use repl::ReplCommand;

#[derive(Parser, Debug)]
#[command(name = "rolo")]
#[command(about = "A personal contact directory for the command line", long_about = None)]
struct Cli {
    /// Path to the contacts file (defaults to the user data directory)
    #[arg(short, long)]
    file: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let (store, page_size) = init_store(&cli)?;
    let mut api = ContactsApi::open(store)?;

    if api.had_prior_data() {
        println!(
            "{}",
            format!("Loaded {} contact(s).", api.directory().len()).dimmed()
        );
    } else {
        println!("{}", "No saved contacts found, starting fresh.".dimmed());
    }

    let stdin = io::stdin();
    repl_loop(&mut api, stdin.lock(), page_size)?;

    api.save()?;
    println!("Good bye");
    Ok(())
}

fn init_store(cli: &Cli) -> Result<(FileStore, usize)> {
    match &cli.file {
        Some(path) => {
            let config_dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."));
            let config = RoloConfig::load(config_dir).unwrap_or_default();
            Ok((FileStore::new(path.clone()), config.effective_page_size()))
        }
        None => {
            let proj_dirs =
                ProjectDirs::from("com", "rolo", "rolo").expect("Could not determine data dir");
            let data_dir = proj_dirs.data_dir().to_path_buf();
            let config = RoloConfig::load(&data_dir).unwrap_or_default();
            Ok((
                FileStore::new(data_dir.join(&config.data_file)),
                config.effective_page_size(),
            ))
        }
    }
}

fn repl_loop<S: DirectoryStore, R: BufRead>(
    api: &mut ContactsApi<S>,
    reader: R,
    default_page_size: usize,
) -> Result<()> {
    let mut lines = reader.lines();
    loop {
        print!(">>> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match repl::parse(&line) {
            ReplCommand::Exit => break,
            ReplCommand::Hello => println!("How can I help you?"),
            ReplCommand::Help => println!("{}", repl::HELP_TEXT),
            ReplCommand::Unknown => {
                println!("{}", "Invalid command, enter help for help".yellow())
            }
            ReplCommand::ShowAll { page_size } => {
                show_all(api, page_size.unwrap_or(default_page_size), &mut lines)?
            }
            command => match execute(api, command) {
                Ok(result) => print_result(&result),
                Err(e) => println!("{}", e.to_string().red()),
            },
        }
    }
    Ok(())
}

fn execute<S: DirectoryStore>(api: &mut ContactsApi<S>, command: ReplCommand) -> Result<CmdResult> {
    match command {
        ReplCommand::Add { name, phone } => api.add(&name, &phone),
        ReplCommand::Change { name, phone } => api.change(&name, &phone),
        ReplCommand::DeletePhone { name, index } => api.delete_phone(&name, index),
        ReplCommand::Phones { name } => api.lookup_phones(&name),
        ReplCommand::SetBirthday { name, date } => api.set_birthday(&name, &date),
        ReplCommand::Birthday { name } => {
            api.days_until_birthday(&name, Local::now().date_naive())
        }
        ReplCommand::Search { term } => api.search(&term),
        ReplCommand::Remove { name } => api.remove(&name),
        // Handled before dispatch; nothing to do here.
        _ => Ok(CmdResult::default()),
    }
}

fn show_all<S: DirectoryStore, R: BufRead>(
    api: &mut ContactsApi<S>,
    page_size: usize,
    lines: &mut io::Lines<R>,
) -> Result<()> {
    if api.directory().is_empty() {
        println!("No contacts yet.");
        return Ok(());
    }

    loop {
        let result = api.list_page(page_size.max(1))?;
        for record in &result.listed {
            println!("{}", record);
        }
        if !result.more_pages {
            break;
        }
        print!("{}", "Press Enter for the next page ".dimmed());
        io::stdout().flush()?;
        if lines.next().transpose()?.is_none() {
            break;
        }
    }
    println!("{}", "End of list".dimmed());
    Ok(())
}

fn print_result(result: &CmdResult) {
    print_messages(&result.messages);

    if !result.phones.is_empty() {
        let phones: Vec<String> = result.phones.iter().map(|p| format!("+{}", p)).collect();
        println!("{}", phones.join(", "));
    }

    for record in &result.listed {
        println!("{}", record);
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
