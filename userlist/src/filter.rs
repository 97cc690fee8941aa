use crate::DisplayRecord;

/// How a filter term is compared against user names
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum FilterMode {
    /// Lower-case both the name and the term.
    #[default]
    CaseInsensitive,

    /// Lower-case the name, but use the term as typed.
    ///
    /// A term with upper-case letters never matches in this mode.
    /// This only exists for compatibility with older clients.
    LowercaseNameOnly,
}

/// Check whether a name matches a filter term.
///
/// An empty term matches every name.
pub fn matches(name: &str, term: &str, mode: FilterMode) -> bool {
    if term.is_empty() {
        return true;
    }

    let name = name.to_lowercase();
    match mode {
        FilterMode::CaseInsensitive => name.contains(&term.to_lowercase()),
        FilterMode::LowercaseNameOnly => name.contains(term),
    }
}

/// Keep the records whose name matches the term, preserving order.
pub fn filter_records(
    records: &[DisplayRecord],
    term: &str,
    mode: FilterMode,
) -> Vec<DisplayRecord> {
    if term.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| matches(&record.name, term, mode))
        .cloned()
        .collect()
}
