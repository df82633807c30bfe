use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::Result;

/// Returns one page of the directory listing. Pages are counted from 0;
/// a `page_index` past the end produces an empty result with an info
/// message, so a caller walking pages knows it has run off the list.
pub fn run(directory: &Directory, page_size: usize, page_index: usize) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match directory.pages(page_size).nth(page_index) {
        Some(page) => {
            result.listed = page.records().iter().map(|r| (*r).clone()).collect();
            result.more_pages = (page_index + 1) * page_size < directory.len();
        }
        None => result.add_message(CmdMessage::info("End of list.")),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;

    fn directory_of(count: usize) -> Directory {
        let mut directory = Directory::new();
        for i in 0..count {
            let name = format!("Contact {:02}", i + 1);
            let phone = format!("38050000{:04}", i + 1);
            add::run(&mut directory, &name, &phone).unwrap();
        }
        directory
    }

    #[test]
    fn pages_have_the_requested_size_with_a_short_tail() {
        let directory = directory_of(5);

        let first = run(&directory, 2, 0).unwrap();
        assert_eq!(first.listed.len(), 2);
        assert!(first.more_pages);

        let last = run(&directory, 2, 2).unwrap();
        assert_eq!(last.listed.len(), 1);
        assert!(!last.more_pages);
    }

    #[test]
    fn walking_pages_covers_every_record_once() {
        let directory = directory_of(5);
        let mut names = Vec::new();
        for page_index in 0..3 {
            let result = run(&directory, 2, page_index).unwrap();
            names.extend(result.listed.iter().map(|r| r.name().to_string()));
        }
        assert_eq!(names.len(), 5);
        let expected: Vec<String> = directory.records().map(|r| r.name().to_string()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn past_the_end_is_empty_with_a_message() {
        let directory = directory_of(2);
        let result = run(&directory, 2, 5).unwrap();
        assert!(result.listed.is_empty());
        assert!(result.messages[0].content.contains("End of list"));
    }
}
