use colored::Colorize;

use super::types::StatusLevel;

/// Helper function to print a status line with semantic level
pub fn set_status(text: impl AsRef<str>, level: StatusLevel) {
    let text = text.as_ref();
    match level {
        StatusLevel::Success => eprintln!("{}", text.green()),
        StatusLevel::Warning => eprintln!("{}", text.yellow()),
    }
}

/// Format the error banner shown when the session cannot continue
pub fn format_error(title: &str, message: &str, details: &str) -> String {
    let mut banner = format!("{}\n{}", format!("Error: {}", title).red().bold(), message);
    if !details.is_empty() {
        banner.push_str("\n\n");
        banner.push_str(details);
    }
    banner
}

/// Helper function to show the error banner on stderr
pub fn show_error(title: impl AsRef<str>, message: impl AsRef<str>, details: impl AsRef<str>) {
    eprintln!(
        "{}",
        format_error(title.as_ref(), message.as_ref(), details.as_ref())
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error() {
        colored::control::set_override(false);
        let banner = format_error("File Not Found", "The catalog file could not be found.", "");
        assert_eq!(
            banner,
            "Error: File Not Found\nThe catalog file could not be found."
        );

        let detailed = format_error("Invalid JSON", "Bad.", "line 1");
        assert!(detailed.ends_with("Bad.\n\nline 1"));
    }
}
