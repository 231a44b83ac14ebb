//! Parsing of picker commands typed on stdin.
use stocks_common::{Company, CompanyDirectory};

/// One line of user input, interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCommand {
    /// Select a company and refresh its quote.
    Select(&'static Company),
    /// Print the picker rows.
    List,
    /// Show the greeting.
    Info,
    /// End the session.
    Quit,
}

/// Short usage hint printed for unrecognised input.
pub const HELP: &str =
    "Type a row number, company name or ticker to select; `list`, `info` or `quit`.";

/// Interpret a line: a 1-based row number, a company name, a ticker, or a keyword.
///
/// Returns `None` for blank or unrecognised input.
pub fn parse_command(line: &str, directory: &CompanyDirectory) -> Option<UserCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    match line.to_ascii_lowercase().as_str() {
        "list" | "ls" => return Some(UserCommand::List),
        "info" | "?" => return Some(UserCommand::Info),
        "quit" | "exit" | "q" => return Some(UserCommand::Quit),
        _ => {}
    }
    if let Ok(row) = line.parse::<usize>() {
        return row
            .checked_sub(1)
            .and_then(|index| directory.get(index))
            .map(UserCommand::Select);
    }
    directory.resolve(line).ok().map(UserCommand::Select)
}
