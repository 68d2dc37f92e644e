//! Plain-text decklists.
//!
//! One line per distinct card name: `<count> <name>`. There is no header
//! and no quoting; the name is everything after the first token.
//!
//! ```text
//! 1 Ezuri, Renegade Leader
//! 30 Forest
//! 1 Sol Ring
//! ```

use rustc_hash::FxHashMap;

/// Count names and render one `<count> <name>` line per distinct name,
/// in first-seen order.
#[must_use]
pub fn export_decklist<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();

    for name in names {
        let count = counts.entry(name).or_insert(0);
        if *count == 0 {
            order.push(name);
        }
        *count += 1;
    }

    let mut text = String::new();
    for name in order {
        text.push_str(&format!("{} {}\n", counts[name], name));
    }
    text
}

/// One parsed decklist line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecklistLine {
    /// 1-based line number in the source text.
    pub line: usize,
    /// Copy count, or the offending token if it is not a count.
    pub count: Result<u32, String>,
    pub name: String,
}

/// Parse decklist text.
///
/// Blank lines and lines with no name after the count are skipped. The
/// count may carry an `x` suffix (`2x Forest`).
#[must_use]
pub fn parse_decklist(text: &str) -> Vec<DecklistLine> {
    text.lines()
        .enumerate()
        .filter_map(|(index, raw)| {
            let mut words = raw.split_whitespace();
            let token = words.next()?;
            let name = words.collect::<Vec<_>>().join(" ");
            if name.is_empty() {
                return None;
            }
            Some(DecklistLine {
                line: index + 1,
                count: parse_count(token),
                name,
            })
        })
        .collect()
}

fn parse_count(token: &str) -> Result<u32, String> {
    let digits = token
        .strip_suffix('x')
        .or_else(|| token.strip_suffix('X'))
        .unwrap_or(token);
    digits.parse().map_err(|_| token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_counts_in_first_seen_order() {
        let text = export_decklist(["Ezuri", "Forest", "Sol Ring", "Forest"]);
        assert_eq!(text, "1 Ezuri\n2 Forest\n1 Sol Ring\n");
    }

    #[test]
    fn test_export_empty() {
        assert_eq!(export_decklist(Vec::<&str>::new()), "");
    }

    #[test]
    fn test_parse_lines() {
        let lines = parse_decklist("2 Forest\n\n1   Sol  Ring\r\n3x Island\n");
        assert_eq!(
            lines,
            vec![
                DecklistLine { line: 1, count: Ok(2), name: "Forest".to_string() },
                DecklistLine { line: 3, count: Ok(1), name: "Sol Ring".to_string() },
                DecklistLine { line: 4, count: Ok(3), name: "Island".to_string() },
            ]
        );
    }

    #[test]
    fn test_parse_skips_nameless_lines() {
        assert!(parse_decklist("4\n   \n").is_empty());
    }

    #[test]
    fn test_parse_bad_count() {
        let lines = parse_decklist("Sol Ring");
        assert_eq!(lines[0].count, Err("Sol".to_string()));
        assert_eq!(lines[0].name, "Ring");
    }

    #[test]
    fn test_parse_names_with_commas() {
        let lines = parse_decklist("1 Ezuri, Renegade Leader");
        assert_eq!(lines[0].name, "Ezuri, Renegade Leader");
    }
}
