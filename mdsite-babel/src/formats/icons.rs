//! Icon mapping for tree visualization
//!
//! Maps render-node tags to a single Unicode character so block and span
//! structure can be told apart at a glance in treeviz output.

/// Get the Unicode icon for a render-node tag
///
/// Untagged leaves (raw text) are looked up as `#text`.
pub fn get_icon(tag: &str) -> &'static str {
    match tag {
        "div" => "⧉",
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => "§",
        "p" => "¶",
        "pre" => "𝒱",
        "code" => "ƒ",
        "blockquote" => "\"",
        "ul" | "ol" => "☰",
        "li" => "•",
        "b" => "𝐁",
        "i" => "𝐼",
        "a" => "⊕",
        "img" => "◫",
        "#text" => "◦",
        _ => "○",
    }
}
