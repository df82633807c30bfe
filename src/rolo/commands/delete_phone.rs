use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::{Result, RoloError};

/// Removes the phone at `index` (0-based) from the named record.
pub fn run(directory: &mut Directory, name: &str, index: usize) -> Result<CmdResult> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RoloError::EmptyInput("name"));
    }

    let record = directory
        .get_mut(name)
        .ok_or_else(|| RoloError::NotFound(name.to_string()))?;
    let removed = record.remove_phone(index)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Phone {} removed from contact {}.",
        removed, name
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
    fn removes_the_phone_at_the_index() {
        let mut directory = Directory::new();
        add::run(&mut directory, "Anna", "380501111111").unwrap();
        add::run(&mut directory, "Anna", "380502222222").unwrap();

        run(&mut directory, "Anna", 0).unwrap();

        let phones = directory.get("Anna").unwrap().phones();
        assert_eq!(phones.len(), 1);
        assert_eq!(phones[0].as_str(), "380502222222");
    }

    #[test]
    fn out_of_range_index_leaves_the_list_unchanged() {
        let mut directory = Directory::new();
        add::run(&mut directory, "Anna", "380501111111").unwrap();

        assert!(matches!(
            run(&mut directory, "Anna", 3),
            Err(RoloError::PhoneIndexOutOfRange { index: 3, len: 1 })
        ));
        assert_eq!(directory.get("Anna").unwrap().phones().len(), 1);
    }

    #[test]
    fn unknown_name_is_not_found() {
        let mut directory = Directory::new();
        assert!(matches!(
            run(&mut directory, "Anna", 0),
            Err(RoloError::NotFound(_))
        ));
    }
}
