//! Parsing of the shopper's command lines.

use crate::error::StorefrontError;

/// One shopper action. Selections are 0-based; `None` means nothing was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Add(Option<usize>),
    Remove(Option<usize>),
    ShowCart,
    Total,
    Checkout,
    Help,
    Quit,
}

impl Action {
    /// Parse a line such as `add 3`. Positions are typed 1-based.
    ///
    /// Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Action>, StorefrontError> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(None);
        };
        let argument = words.next();

        let action = match command.to_ascii_lowercase().as_str() {
            "list" | "ls" | "catalog" => Action::List,
            "add" | "a" => Action::Add(parse_position(argument)?),
            "remove" | "rm" | "r" => Action::Remove(parse_position(argument)?),
            "cart" | "c" => Action::ShowCart,
            "total" | "t" => Action::Total,
            "checkout" => Action::Checkout,
            "help" | "h" | "?" => Action::Help,
            "quit" | "q" | "exit" => Action::Quit,
            other => return Err(StorefrontError::InvalidCommand(other.to_string())),
        };

        Ok(Some(action))
    }
}

fn parse_position(argument: Option<&str>) -> Result<Option<usize>, StorefrontError> {
    let Some(raw) = argument else {
        return Ok(None);
    };

    match raw.parse::<usize>() {
        Ok(position) if position >= 1 => Ok(Some(position - 1)),
        _ => Err(StorefrontError::InvalidPosition(raw.to_string())),
    }
}
