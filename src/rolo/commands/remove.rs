use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::{Result, RoloError};

pub fn run(directory: &mut Directory, name: &str) -> Result<CmdResult> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RoloError::EmptyInput("name"));
    }

    let removed = directory.remove_record(name)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Contact {} removed.", name)));
    result.affected.push(removed);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;

    #[test]
    fn removes_the_record() {
        let mut directory = Directory::new();
        add::run(&mut directory, "Anna", "380501234567").unwrap();

        let result = run(&mut directory, "Anna").unwrap();
        assert!(directory.is_empty());
        assert_eq!(result.affected[0].name(), "Anna");
    }

    #[test]
    fn unknown_name_is_not_found() {
        let mut directory = Directory::new();
        assert!(matches!(
            run(&mut directory, "Anna"),
            Err(RoloError::NotFound(_))
        ));
    }
}
