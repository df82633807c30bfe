use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::{Result, RoloError};
use crate::model::Birthday;
use chrono::NaiveDate;

pub fn set(directory: &mut Directory, name: &str, raw_date: &str) -> Result<CmdResult> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RoloError::EmptyInput("name"));
    }
    if raw_date.is_empty() {
        return Err(RoloError::EmptyInput("birthday"));
    }

    let birthday = Birthday::parse(raw_date)?;
    let record = directory
        .get_mut(name)
        .ok_or_else(|| RoloError::NotFound(name.to_string()))?;
    record.set_birthday(birthday);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Birthday for {} set to {}.",
        name, birthday
    )));
    if let Some(record) = directory.get(name) {
        result.affected.push(record.clone());
    }
    Ok(result)
}

/// Whole days until the next occurrence of the stored birthday, seen
/// from `today`. A record without a birthday is not an error; the result
/// carries an info message instead of a day count.
pub fn days_until(directory: &Directory, name: &str, today: NaiveDate) -> Result<CmdResult> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RoloError::EmptyInput("name"));
    }

    let record = directory
        .get(name)
        .ok_or_else(|| RoloError::NotFound(name.to_string()))?;

    let mut result = CmdResult::default();
    match record.days_until_birthday(today) {
        Some(days) => {
            result.days_until = Some(days);
            result.add_message(CmdMessage::info(format!(
                "{} day(s) until {}'s birthday.",
                days, name
            )));
        }
        None => result.add_message(CmdMessage::info(format!(
            "No birthday recorded for {}.",
            name
        ))),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;

    fn date(raw: &str) -> NaiveDate {
        NaiveDate::parse_from_str(raw, "%d-%m-%Y").unwrap()
    }

    #[test]
    fn sets_and_overwrites_the_birthday() {
        let mut directory = Directory::new();
        add::run(&mut directory, "Anna", "380501234567").unwrap();

        set(&mut directory, "Anna", "01-06-1990").unwrap();
        set(&mut directory, "Anna", "02-06-1990").unwrap();

        let birthday = directory.get("Anna").unwrap().birthday().unwrap();
        assert_eq!(birthday.to_string(), "02-06-1990");
    }

    #[test]
    fn rejects_impossible_dates() {
        let mut directory = Directory::new();
        add::run(&mut directory, "Anna", "380501234567").unwrap();

        assert!(matches!(
            set(&mut directory, "Anna", "31-02-2024"),
            Err(RoloError::InvalidBirthday(_))
        ));
        assert!(directory.get("Anna").unwrap().birthday().is_none());
    }

    #[test]
    fn counts_days_across_the_year_boundary() {
        let mut directory = Directory::new();
        add::run(&mut directory, "Anna", "380501234567").unwrap();
        set(&mut directory, "Anna", "01-01-1990").unwrap();

        let result = days_until(&directory, "Anna", date("31-12-2023")).unwrap();
        assert_eq!(result.days_until, Some(1));

        let result = days_until(&directory, "Anna", date("01-01-2024")).unwrap();
        assert_eq!(result.days_until, Some(0));
    }

    #[test]
    fn missing_birthday_is_a_message_not_an_error() {
        let mut directory = Directory::new();
        add::run(&mut directory, "Anna", "380501234567").unwrap();

        let result = days_until(&directory, "Anna", date("01-01-2024")).unwrap();
        assert_eq!(result.days_until, None);
        assert!(result.messages[0].content.contains("No birthday"));
    }
}
