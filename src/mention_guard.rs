/*!
 * Mention token protection around the translation call.
 *
 * Platform user mentions (`<@123>` or `<@!123>`) are structured markup that
 * drives notifications; sending them through a natural-language translator
 * corrupts or mistranslates them. This module swaps each mention for an
 * opaque placeholder before translation and swaps the originals back in
 * afterward.
 *
 * Residual risk: if a message body already contains the literal placeholder
 * text `[[[MENTIONn]]]` for an index that this same message also generates,
 * restoration rewrites it. The bracket-heavy format makes that collision
 * unlikely in ordinary text; restoration is driven only by the map built for
 * the current message, so any other bracketed text passes through untouched.
 */

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// Mapping from placeholder token to the original mention text.
///
/// Built and consumed within a single pipeline invocation; never persisted.
pub type MentionMap = HashMap<String, String>;

static MENTION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<@!?\d+>").expect("Invalid mention regex"));

/// Replace each mention in `text` with a unique placeholder.
///
/// Placeholders are numbered left-to-right starting at 1 for each call, and
/// the returned map records the exact matched substring (bang form preserved)
/// for each placeholder.
pub fn protect(text: &str) -> (String, MentionMap) {
    let mut map = MentionMap::new();
    let mut counter = 0usize;

    let guarded = MENTION_REGEX
        .replace_all(text, |caps: &regex::Captures| {
            counter += 1;
            let placeholder = format!("[[[MENTION{}]]]", counter);
            map.insert(placeholder.clone(), caps[0].to_string());
            placeholder
        })
        .into_owned();

    (guarded, map)
}

/// Replace every placeholder from `map` back with its original mention.
///
/// Placeholder matching is case-insensitive because translation providers
/// sometimes re-case literal tokens; the replacement is always the exact
/// original mention text.
pub fn restore(text: &str, map: &MentionMap) -> String {
    let mut restored = text.to_string();

    for (placeholder, original) in map {
        let pattern = RegexBuilder::new(&regex::escape(placeholder))
            .case_insensitive(true)
            .build()
            .expect("Invalid placeholder regex");
        restored = pattern
            .replace_all(&restored, regex::NoExpand(original))
            .into_owned();
    }

    restored
}
