/// Characters that separate a company symbol from its share class.
pub const SYMBOL_DELIMITERS: [char; 4] = ['.', '/', '-', '_'];

/// Splits a symbol such as `BRK.A` into its company and share class parts.
///
/// The symbol is upper-cased and split at the first delimiter only. The
/// share class is empty when there is no delimiter; a blank symbol yields
/// two empty parts.
pub fn split_delimited_symbol(symbol: &str) -> (String, String) {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return (String::new(), String::new());
    }

    let symbol = symbol.to_uppercase();
    match symbol.split_once(|c: char| SYMBOL_DELIMITERS.contains(&c)) {
        Some((company, share_class)) => (company.to_string(), share_class.to_string()),
        None => (symbol, String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_symbol_has_no_share_class() {
        assert_eq!(
            split_delimited_symbol("AAPL"),
            ("AAPL".to_string(), String::new())
        );
    }

    #[test]
    fn test_each_delimiter() {
        for delimited in ["BRK.A", "BRK/A", "BRK-A", "BRK_A"] {
            assert_eq!(
                split_delimited_symbol(delimited),
                ("BRK".to_string(), "A".to_string()),
                "{}",
                delimited
            );
        }
    }

    #[test]
    fn test_splits_once() {
        assert_eq!(
            split_delimited_symbol("ab.c-d"),
            ("AB".to_string(), "C-D".to_string())
        );
    }

    #[test]
    fn test_blank_symbol() {
        assert_eq!(split_delimited_symbol("  "), (String::new(), String::new()));
    }
}
