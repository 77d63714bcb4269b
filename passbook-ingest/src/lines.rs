//! Line splitting and transaction-section location.

/// Marks the opening-balance row; transaction data starts here.
pub const START_MARKER: &str = "BALANCE B/F";

/// Split rendered text into trimmed lines, preserving order.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(|line| line.trim().to_string()).collect()
}

/// Return the lines from the first one containing [`START_MARKER`]
/// (case-insensitive) onwards.
///
/// An empty slice means no transaction section was found. That is a normal
/// outcome (zero transactions), not an error.
pub fn locate_start<S: AsRef<str>>(lines: &[S]) -> &[S] {
    lines
        .iter()
        .position(|line| line.as_ref().to_uppercase().contains(START_MARKER))
        .map(|idx| &lines[idx..])
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_trims() {
        let lines = split_lines("  a  \r\n\tb\n\n c");
        assert_eq!(lines, vec!["a", "b", "", "c"]);
    }

    #[test]
    fn test_locate_start_case_insensitive() {
        let lines = split_lines("HEADER\nAccount 1234\nOpening Balance b/f 100.00\nrow");
        let section = locate_start(&lines);
        assert_eq!(section.len(), 2);
        assert_eq!(section[0], "Opening Balance b/f 100.00");
    }

    #[test]
    fn test_locate_start_missing_marker() {
        let lines = split_lines("HEADER\n01/01/2024 01/01/2024 X 1.00  2.00CR");
        assert!(locate_start(&lines).is_empty());
    }

    #[test]
    fn test_locate_start_first_occurrence() {
        let lines = vec!["BALANCE B/F", "x", "balance b/f", "y"];
        assert_eq!(locate_start(&lines).len(), 4);
    }
}
