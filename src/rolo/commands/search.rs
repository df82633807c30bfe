use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::Result;

pub fn run(directory: &Directory, term: &str) -> Result<CmdResult> {
    let listed: Vec<_> = directory
        .search(term)
        .into_iter()
        .cloned()
        .collect();

    let mut result = CmdResult::default().with_listed(listed);
    if result.listed.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No contacts match {:?}.",
            term
        )));
    }
    Ok(result)
}
