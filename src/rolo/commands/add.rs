use crate::commands::{CmdMessage, CmdResult};
use crate::directory::{AddOutcome, Directory};
use crate::error::{Result, RoloError};
use crate::model::{PhoneNumber, Record};

pub fn run(directory: &mut Directory, name: &str, phone: &str) -> Result<CmdResult> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RoloError::EmptyInput("name"));
    }
    if phone.is_empty() {
        return Err(RoloError::EmptyInput("phone"));
    }

    let phone = PhoneNumber::new(phone)?;
    let record = Record::new(name, Some(phone))?;

    let mut result = CmdResult::default();
    match directory.add_record(record) {
        AddOutcome::Added => result.add_message(CmdMessage::success(format!(
            "Contact {} added.",
            name
        ))),
        AddOutcome::Augmented => result.add_message(CmdMessage::success(format!(
            "Another phone for contact {} recorded.",
            name
        ))),
    }
    if let Some(record) = directory.get(name) {
        result.affected.push(record.clone());
    }
    Ok(result)
}
