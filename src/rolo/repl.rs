//! Parsing of typed REPL lines into commands. Pure string work; the
//! loop itself lives in main.rs.

pub const HELP_TEXT: &str = "\
    hello -- just hello
    add NAME PHONE -- add a contact, or another phone for an existing one
    change NAME PHONE -- replace the contact's first phone
    del phone NAME INDEX -- delete the phone at INDEX (as shown, from 1)
    phone NAME -- print the contact's phones
    search TERM -- find contacts by part of the name
    set birthday NAME DD-MM-YYYY -- set the birthday
    birthday NAME -- days until the next birthday
    remove NAME -- delete the whole contact
    show all [PAGE_SIZE] -- list contacts page by page
    exit, goodbye, close -- save and quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Hello,
    Help,
    Add { name: String, phone: String },
    Change { name: String, phone: String },
    /// Index is 0-based here; the typed form is 1-based.
    DeletePhone { name: String, index: usize },
    Phones { name: String },
    SetBirthday { name: String, date: String },
    Birthday { name: String },
    Search { term: String },
    ShowAll { page_size: Option<usize> },
    Remove { name: String },
    Exit,
    Unknown,
}

/// Keywords are matched case-insensitively; arguments keep their case.
/// Missing arguments come through as empty strings so the core can
/// report them as the missing-input failures they are.
pub fn parse(line: &str) -> ReplCommand {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(first) = tokens.first() else {
        return ReplCommand::Unknown;
    };
    let first = first.to_lowercase();
    let second = tokens.get(1).map(|t| t.to_lowercase());

    match (first.as_str(), second.as_deref()) {
        ("exit" | "goodbye" | "close", _) if tokens.len() == 1 => ReplCommand::Exit,
        ("hello", _) => ReplCommand::Hello,
        ("help", _) => ReplCommand::Help,
        ("del", Some("phone")) => match parse_index(tokens.get(3)) {
            Some(index) => ReplCommand::DeletePhone {
                name: arg(&tokens, 2),
                index,
            },
            None => ReplCommand::Unknown,
        },
        ("set", Some("birthday")) => ReplCommand::SetBirthday {
            name: arg(&tokens, 2),
            date: arg(&tokens, 3),
        },
        ("show", Some("all")) => ReplCommand::ShowAll {
            page_size: tokens.get(2).and_then(|t| t.parse().ok()),
        },
        ("add", _) => ReplCommand::Add {
            name: arg(&tokens, 1),
            phone: arg(&tokens, 2),
        },
        ("change", _) => ReplCommand::Change {
            name: arg(&tokens, 1),
            phone: arg(&tokens, 2),
        },
        ("phone", _) => ReplCommand::Phones {
            name: arg(&tokens, 1),
        },
        ("birthday", _) => ReplCommand::Birthday {
            name: arg(&tokens, 1),
        },
        ("search", _) => ReplCommand::Search {
            term: tokens[1..].join(" "),
        },
        ("remove", _) => ReplCommand::Remove {
            name: arg(&tokens, 1),
        },
        _ => ReplCommand::Unknown,
    }
}

fn arg(tokens: &[&str], position: usize) -> String {
    tokens.get(position).unwrap_or(&"").to_string()
}

// Typed indexes are 1-based; "0" and non-numbers are not a command.
fn parse_index(token: Option<&&str>) -> Option<usize> {
    token?.parse::<usize>().ok()?.checked_sub(1)
}
