//! Render a [`SortedDocument`] into the lines of the sorted changelog.

use crate::sort::SortedDocument;

/// Width of the `=` rule between sections unless configured otherwise.
pub const DEFAULT_SEPARATOR_WIDTH: usize = 82;

/// What goes into the title block at the top of the output.
#[derive(Debug, Clone, Copy)]
pub struct Header<'a> {
    /// Product name shown before the version, e.g. `GT++`
    pub product: &'a str,

    pub version: &'a str,

    /// Already formatted generation time
    pub generated_at: &'a str,
}

/// Produce the output lines, without line terminators.
///
/// Every category gets a section, even when it has no entries. The result
/// depends only on the arguments.
pub fn render(
    document: &SortedDocument,
    header: &Header<'_>,
    separator_width: usize,
) -> Vec<String> {
    let separator = "=".repeat(separator_width);
    let mut out = vec![
        format!("{} {} | Sorted Changelog", header.product, header.version),
        format!("Generated at: {}", header.generated_at),
        String::new(),
        String::new(),
    ];

    for (category, entries) in document.sections() {
        push_rule(&mut out, &separator);
        out.push(category.title().to_string());
        push_rule(&mut out, &separator);
        out.extend(entries.iter().cloned());
    }
    push_rule(&mut out, &separator);

    out
}

fn push_rule(out: &mut Vec<String>, separator: &str) {
    out.push(String::new());
    out.push(separator.to_string());
    out.push(String::new());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::sort::classify;

    const HEADER: Header<'static> = Header {
        product: "GT++",
        version: "1.7.02.89",
        generated_at: "2026-10-15 12:00:00",
    };

    fn sample() -> SortedDocument {
        classify([
            "+ Added feature X",
            "- Removed old API",
            "% Changed default value",
            "$ Fixed crash on load",
            "+ Added feature A",
            "random note with no marker",
        ])
    }

    #[test]
    fn header_block() {
        let lines = render(&sample(), &HEADER, DEFAULT_SEPARATOR_WIDTH);
        assert_eq!(lines[0], "GT++ 1.7.02.89 | Sorted Changelog");
        assert_eq!(lines[1], "Generated at: 2026-10-15 12:00:00");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "");
        assert_eq!(lines[5].len(), 82);
        assert!(lines[5].chars().all(|c| c == '='));
    }

    #[test]
    fn full_layout() {
        let lines = render(&sample(), &HEADER, 3);
        let expected = [
            "GT++ 1.7.02.89 | Sorted Changelog",
            "Generated at: 2026-10-15 12:00:00",
            "",
            "",
            "", "===", "", "Additions", "", "===", "",
            "Added feature A",
            "Added feature X",
            "", "===", "", "Removals", "", "===", "",
            "Removed old API",
            "", "===", "", "Changes", "", "===", "",
            "Changed default value",
            "", "===", "", "Fixes", "", "===", "",
            "Fixed crash on load",
            "", "===", "", "Other", "", "===", "",
            "random note with no marker",
            "", "===", "",
        ];
        assert_eq!(lines, expected);
    }

    #[test]
    fn empty_categories_keep_their_section() {
        let doc = classify(["$ only a fix"]);
        let lines = render(&doc, &HEADER, 4);
        let titles: Vec<_> = lines
            .iter()
            .filter(|l| Category::ALL.iter().any(|c| c.title() == l.as_str()))
            .map(String::as_str)
            .collect();
        assert_eq!(titles, ["Additions", "Removals", "Changes", "Fixes", "Other"]);
        // header (4) + 5 sections of 7 + 1 entry + trailer (3)
        assert_eq!(lines.len(), 4 + 5 * 7 + 1 + 3);
    }

    #[test]
    fn deterministic() {
        let doc = sample();
        assert_eq!(
            render(&doc, &HEADER, DEFAULT_SEPARATOR_WIDTH),
            render(&doc, &HEADER, DEFAULT_SEPARATOR_WIDTH)
        );
    }
}
