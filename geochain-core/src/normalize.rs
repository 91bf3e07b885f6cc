use itertools::Itertools;

use crate::entities::{Address, AddressInput};

const VERTICAL_TAB: char = '\u{0B}';
const FIELD_SEPARATOR: &str = "\n";

/// Turns an address into the single line of text that is
/// sent to the providers and used for full-text search.
pub fn normalize_address(input: &AddressInput) -> String {
    match input {
        AddressInput::Text(text) => normalize_text(text),
        AddressInput::Structured(addr) => join_address_parts(addr),
    }
}

/// Removes vertical tabs and collapses all whitespace
/// (including line breaks) into single spaces.
pub fn normalize_text(text: &str) -> String {
    text.replace(VERTICAL_TAB, "").split_whitespace().join(" ")
}

fn join_address_parts(addr: &Address) -> String {
    addr.parts()
        .filter_map(|(_, value)| value.map(str::trim))
        .filter(|value| !value.is_empty())
        .join(FIELD_SEPARATOR)
}
