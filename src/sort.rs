//! Classify changelog lines and sort them within their category.

use std::borrow::Cow;

use crate::category::Category;

/// HTML escapes left behind by the changelog generator.
const ENTITIES: [(&str, &str); 3] = [("&#39;", "'"), ("&gt;", ">"), ("&amp;", "&")];

/// Changelog entries bucketed by [`Category`], each bucket sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedDocument {
    buckets: [Vec<String>; 5],
}

impl SortedDocument {
    /// Sorted entries for one category.
    pub fn entries(&self, category: Category) -> &[String] {
        &self.buckets[category.index()]
    }

    /// Categories with their entries, in display order.
    pub fn sections(&self) -> impl Iterator<Item = (Category, &[String])> {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.entries(category)))
    }

    /// Total entries across all categories.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }
}

/// Classify every non-blank line and sort each category.
///
/// Blank lines are dropped. Sorting is by code point and stable, so duplicate
/// entries are kept.
pub fn classify<I, S>(lines: I) -> SortedDocument
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut document = SortedDocument::default();
    for line in lines {
        if let Some((category, text)) = classify_line(line.as_ref()) {
            document.buckets[category.index()].push(text);
        }
    }
    for bucket in &mut document.buckets {
        bucket.sort();
    }
    document
}

/// Classify a single line, returning `None` if it is blank.
///
/// Marker lines lose the marker and the one character after it. A marker line
/// too short for that becomes an empty entry.
pub fn classify_line(line: &str) -> Option<(Category, String)> {
    let line = unescape_entities(line.trim());
    let first = line.chars().next()?;

    let category = Category::from_marker(first);
    let text = match category {
        Category::Other => line.into_owned(),
        _ => line.chars().skip(2).collect(),
    };
    Some((category, text))
}

/// Resolve `&#39;`, `&gt;` and `&amp;` in a single left-to-right pass.
///
/// Text produced by a substitution is never rescanned.
pub fn unescape_entities(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match ENTITIES
            .iter()
            .find(|(escaped, _)| rest.starts_with(escaped))
        {
            Some((escaped, plain)) => {
                out.push_str(plain);
                rest = &rest[escaped.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}
