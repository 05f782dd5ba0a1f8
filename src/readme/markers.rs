// src/readme/markers.rs
// =============================================================================
// This module replaces the body of named regions inside the README.
//
// A region looks like:
//   <!-- recent_releases starts -->
//   ...old content...
//   <!-- recent_releases ends -->
//
// The markers survive every rewrite, so the region stays discoverable on the
// next run. Substitution is pure string-to-string: no I/O, no side effects.
// =============================================================================

use regex::{NoExpand, Regex};

// Replaces the content between `<!-- {marker} starts -->` and
// `<!-- {marker} ends -->` with `chunk`.
//
// Parameters:
//   content: the full document text
//   marker: the region name (matched case-sensitively)
//   chunk: the new region body
//   inline: when false, the chunk is wrapped in newlines before insertion
//
// Only the first matching region is replaced; documents are assumed to carry
// one contiguous region per name. If no region matches, the document comes
// back unchanged.
pub fn replace_chunk(content: &str, marker: &str, chunk: &str, inline: bool) -> String {
    tracing::info!("replacing marker region: {}", marker);

    // (?s) lets . cross newlines; the marker comments tolerate extra
    // whitespace around the region name
    let pattern = Regex::new(&format!(
        r"(?s)<!--\s*{name}\s*starts\s*-->.*?<!--\s*{name}\s*ends\s*-->",
        name = regex::escape(marker)
    ))
    .expect("marker pattern is valid");

    let body = if inline {
        chunk.to_string()
    } else {
        format!("\n{}\n", chunk)
    };

    let replacement = format!("<!-- {marker} starts -->{body}<!-- {marker} ends -->");

    // NoExpand keeps $ sequences in the chunk literal instead of treating
    // them as capture-group references
    pattern.replace(content, NoExpand(&replacement)).into_owned()
}
