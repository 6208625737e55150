use unicode_script::{Script, UnicodeScript};

use super::dom::Element;

pub(super) fn is_cjk(ch: char) -> bool {
    matches!(
        ch.script(),
        Script::Han | Script::Hiragana | Script::Katakana | Script::Hangul | Script::Bopomofo
    )
}

/// Gap inserted between East Asian and other text: half an em.
const HALF_WIDTH_SPACE: char = '\u{2002}';

fn is_punctuation_or_separator(ch: char) -> bool {
    ch.is_whitespace()
        || ch.is_control()
        || matches!(
            ch,
            '.' | ',' | ';' | ':' | '!' | '?' | '\'' | '"' | '(' | ')' | '[' | ']' | '{' | '}' | '-'
                | '_' | '/' | '\\'
        )
        || ('\u{2010}'..='\u{205E}').contains(&ch)
        || ('\u{3000}'..='\u{303F}').contains(&ch)
        || ('\u{FE30}'..='\u{FE4F}').contains(&ch)
        || ('\u{FF01}'..='\u{FF0F}').contains(&ch)
        || ('\u{FF1A}'..='\u{FF20}').contains(&ch)
}

/// Whether a gap belongs between `before` and `after` (`w:autoSpaceDE`/`DN`):
/// exactly one side is East Asian and the other is neither punctuation nor a
/// separator.
fn needs_space(before: char, after: char) -> bool {
    let plain = |ch: char| !is_cjk(ch) && !is_punctuation_or_separator(ch);
    (is_cjk(before) && plain(after)) || (plain(before) && is_cjk(after))
}

/// Insert a half-width space at each boundary between adjacent text nodes
/// where East Asian text meets other text. Text inside a single node is
/// left alone.
pub(super) fn autospace(el: &mut Element) {
    let mut nodes = Vec::new();
    el.text_nodes_mut(&mut nodes);
    for i in 1..nodes.len() {
        let (head, tail) = nodes.split_at_mut(i);
        let before = head.iter().rev().find_map(|t| t.chars().last());
        let after = tail[0].chars().next();
        if let (Some(b), Some(a)) = (before, after)
            && needs_space(b, a)
            && let Some(last) = head.iter_mut().rev().find(|t| !t.is_empty())
        {
            last.push(HALF_WIDTH_SPACE);
        }
    }
}

/// Rough advance of a run of text in em, for page-height estimation.
pub(super) fn text_width_em(text: &str) -> f64 {
    text.chars()
        .map(|ch| match ch {
            '\t' => 2.0,
            c if is_cjk(c) => 1.0,
            c if c.is_whitespace() => 0.3,
            _ => 0.5,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spaced(fragments: &[&str]) -> String {
        let mut p = Element::new("p");
        for text in fragments {
            p.push(Element::new("span").with_text(*text));
        }
        autospace(&mut p);
        p.text_content()
    }

    #[test]
    fn spaces_only_between_nodes() {
        assert_eq!(spaced(&["中文English"]), "中文English");
        assert_eq!(spaced(&["中文", "English"]), "中文\u{2002}English");
        assert_eq!(spaced(&["plain ", "text"]), "plain text");
    }

    #[test]
    fn spaces_across_runs() {
        assert_eq!(spaced(&["価格", "100", "円"]), "価格\u{2002}100\u{2002}円");
    }

    #[test]
    fn symbols_count_as_other_text() {
        assert_eq!(spaced(&["$", "百"]), "$\u{2002}百");
        assert_eq!(spaced(&["五十", "%"]), "五十\u{2002}%");
        assert_eq!(spaced(&["中文", "+1"]), "中文\u{2002}+1");
    }

    #[test]
    fn punctuation_and_separators_get_no_gap() {
        assert_eq!(spaced(&["中文", "."]), "中文.");
        assert_eq!(spaced(&["(", "中文", ")"]), "(中文)");
        assert_eq!(spaced(&["中文", " x"]), "中文 x");
        assert_eq!(spaced(&["中文", "。"]), "中文。");
        assert_eq!(spaced(&["中", "文"]), "中文");
    }

    #[test]
    fn cjk_counts_as_full_width() {
        assert_eq!(text_width_em("ab"), 1.0);
        assert_eq!(text_width_em("漢字"), 2.0);
    }
}
