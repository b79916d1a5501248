//! Output formatting utilities

use crate::application::DocumentListing;
use std::collections::BTreeMap;

/// Format tag counts for display, most frequent first.
///
/// The mapping itself is unordered; ordering here is display-only.
pub fn format_tag_counts(counts: &BTreeMap<String, u64>) -> String {
    if counts.is_empty() {
        return "No tags found".to_string();
    }

    let mut entries: Vec<(&str, u64)> = counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    let width = entries
        .iter()
        .map(|(_, count)| count.to_string().len())
        .max()
        .unwrap_or(1);

    let mut output = String::new();
    for (tag, count) in entries {
        output.push_str(&format!("{:>width$}  #{}\n", count, tag));
    }
    output
}

/// Format a list of documents for display
pub fn format_document_list(documents: &[DocumentListing]) -> String {
    if documents.is_empty() {
        return "No documents found".to_string();
    }

    let mut output = String::new();
    for doc in documents {
        if let Some(date) = doc.date {
            output.push_str(&format!("{}  {}", date.format("%d-%m-%Y"), doc.filename));
        } else {
            // No date - use spacing for alignment
            output.push_str(&format!("            {}", doc.filename));
        }
        if let Some(title) = &doc.title {
            output.push_str(&format!("  {}", title));
        }
        if doc.draft {
            output.push_str("  [draft]");
        }
        output.push('\n');
    }
    output
}

/// Format a list of content types for display
pub fn format_type_list(types: &[String]) -> String {
    if types.is_empty() {
        return "No content types found".to_string();
    }

    let mut output = String::new();
    for type_name in types {
        output.push_str(type_name);
        output.push('\n');
    }
    output
}
