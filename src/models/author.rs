//! Author model and name parsing

/// Author row from database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub author_id: i32,
    pub name: String,
}

/// Split a CSV `authors` field into individual author names.
///
/// The field is split on every comma and each piece is trimmed. There is no
/// quoting or escaping, so a name containing a comma ends up as two names.
/// Duplicates are kept; linking absorbs them.
pub fn parse_author_names(field: &str) -> Vec<String> {
    field.split(',').map(|name| name.trim().to_string()).collect()
}
