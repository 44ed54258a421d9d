use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Cut `value` so it occupies at most `max_width` terminal cells, marking the cut with an ellipsis
pub fn truncate_to_width(value: &str, max_width: usize) -> String {
    if value.width() <= max_width {
        return value.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in value.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_values_untouched() {
        assert_eq!(truncate_to_width("Kerámia", 20), "Kerámia");
    }

    #[test]
    fn test_long_values_cut_with_ellipsis() {
        let url = "https://picsum.photos/seed/art/800/600";
        let cut = truncate_to_width(url, 10);
        assert_eq!(cut, "https://p…");
        assert_eq!(cut.width(), 10);
    }

    #[test]
    fn test_zero_width() {
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
