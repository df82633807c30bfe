use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::{Result, RoloError};
use crate::model::PhoneNumber;

/// Replaces the first phone on the record, matching the classic
/// `change NAME PHONE` behavior. A record with no phones is an index error.
pub fn run(directory: &mut Directory, name: &str, phone: &str) -> Result<CmdResult> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RoloError::EmptyInput("name"));
    }
    if phone.is_empty() {
        return Err(RoloError::EmptyInput("phone"));
    }

    let phone = PhoneNumber::new(phone)?;
    let record = directory
        .get_mut(name)
        .ok_or_else(|| RoloError::NotFound(name.to_string()))?;
    record.replace_phone(phone, 0)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact {} modified.",
        name
    )));
    if let Some(record) = directory.get(name) {
        result.affected.push(record.clone());
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;

    #[test]
    fn replaces_the_first_phone() {
        let mut directory = Directory::new();
        add::run(&mut directory, "Anna", "380501111111").unwrap();
        add::run(&mut directory, "Anna", "380502222222").unwrap();

        run(&mut directory, "Anna", "380509999999").unwrap();

        let phones = directory.get("Anna").unwrap().phones();
        assert_eq!(phones[0].as_str(), "380509999999");
        assert_eq!(phones[1].as_str(), "380502222222");
    }

    #[test]
    fn unknown_name_is_not_found() {
        let mut directory = Directory::new();
        assert!(matches!(
            run(&mut directory, "Anna", "380501234567"),
            Err(RoloError::NotFound(_))
        ));
    }

    #[test]
    fn record_without_phones_is_an_index_error() {
        let mut directory = Directory::new();
        add::run(&mut directory, "Anna", "380501111111").unwrap();
        directory
            .get_mut("Anna")
            .unwrap()
            .remove_phone(0)
            .unwrap();

        assert!(matches!(
            run(&mut directory, "Anna", "380502222222"),
            Err(RoloError::PhoneIndexOutOfRange { index: 0, len: 0 })
        ));
    }
}
