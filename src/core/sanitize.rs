// src/core/sanitize.rs

/// Collapse whitespace runs into single spaces and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Keep ASCII digits only and parse them: "1,200pt" → 1200.
/// `None` when no digits remain or the number overflows.
pub fn digits_only(s: &str) -> Option<u64> {
    let digits: String = s.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() { return None; }
    digits.parse().ok()
}

/// Leading integer of a trimmed cell: "3体" → 3, "x3" → None.
pub fn leading_int(s: &str) -> Option<u64> {
    let s = s.trim();
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 { return None; }
    s[..end].parse().ok()
}

const CIRCLED: &str = "②③④⑤⑥⑦⑧⑨⑩⑪⑫⑬⑭⑮⑯⑰⑱⑲⑳";

/// Split a behavior pattern before each circled step number from ② on.
/// "①こうげき②ベホマ" → ["①こうげき", "②ベホマ"]
pub fn pattern_lines(raw: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut cur = s!();
    for ch in raw.trim().chars() {
        if CIRCLED.contains(ch) && !cur.trim().is_empty() {
            lines.push(s!(cur.trim()));
            cur.clear();
        }
        cur.push(ch);
    }
    if !cur.trim().is_empty() {
        lines.push(s!(cur.trim()));
    }
    lines
}
