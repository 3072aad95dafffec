//! Generic text cleaning applied to record text before export.
//! Keeps URLs, case, digits and punctuation; only whitespace and emoji go.

use once_cell::sync::OnceCell;
use regex::Regex;

/// Fold line breaks and whitespace runs into single spaces, strip
/// emoji/pictographs, trim.
pub fn clean_text(text: &str) -> String {
    static RE_EMOJI: OnceCell<Regex> = OnceCell::new();
    static RE_WS: OnceCell<Regex> = OnceCell::new();

    let re_emoji = RE_EMOJI.get_or_init(|| {
        // pictographs, misc symbols, variation selectors, ZWJ
        Regex::new("[\u{1F000}-\u{1FAFF}\u{2600}-\u{27BF}\u{2B00}-\u{2BFF}\u{FE0F}\u{200D}]")
            .unwrap()
    });
    let re_ws = RE_WS.get_or_init(|| Regex::new(r"\s+").unwrap());

    let no_emoji = re_emoji.replace_all(text, "");
    let folded = re_ws.replace_all(&no_emoji, " ");
    folded.trim().to_string()
}
