//! Per-category fund-code lists
//!
//! Each category (e.g. "FX" flexi-cap, "LC" large-cap, "MC" mid-cap,
//! "SC" small-cap) is a flat `<category>.txt` file with one fund code per
//! line.

use std::error::Error;
use std::path::Path;

/// Load the fund codes for a category from `<dir>/<category>.txt`.
pub fn load_ticker_list<P: AsRef<Path>>(
    category: &str,
    dir: P,
) -> Result<Vec<String>, Box<dyn Error>> {
    let path = dir.as_ref().join(format!("{}.txt", category));
    let contents = std::fs::read_to_string(path)?;
    Ok(parse_ticker_lines(&contents))
}

/// Split ticker-file contents into trimmed, non-empty codes.
pub fn parse_ticker_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_blank_lines() {
        let contents = "120503\n\n  118989  \n\n100356\n";
        assert_eq!(
            parse_ticker_lines(contents),
            vec!["120503", "118989", "100356"]
        );
    }

    #[test]
    fn test_parse_empty_file() {
        assert!(parse_ticker_lines("\n\n").is_empty());
    }
}
