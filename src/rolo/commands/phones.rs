use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::{Result, RoloError};

pub fn run(directory: &Directory, name: &str) -> Result<CmdResult> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RoloError::EmptyInput("name"));
    }

    let record = directory
        .get(name)
        .ok_or_else(|| RoloError::NotFound(name.to_string()))?;

    let mut result = CmdResult::default().with_phones(record.phones().to_vec());
    if result.phones.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No phones recorded for {}.",
            name
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;

    #[test]
    fn returns_the_phone_list_in_order() {
        let mut directory = Directory::new();
        add::run(&mut directory, "Anna", "380501111111").unwrap();
        add::run(&mut directory, "Anna", "380502222222").unwrap();

        let result = run(&directory, "Anna").unwrap();
        let phones: Vec<&str> = result.phones.iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["380501111111", "380502222222"]);
    }

    #[test]
    fn unknown_name_is_not_found() {
        let directory = Directory::new();
        assert!(matches!(
            run(&directory, "Anna"),
            Err(RoloError::NotFound(_))
        ));
    }
}
