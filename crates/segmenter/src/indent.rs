/// Default tab stop width used when measuring indentation.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Indentation depth of `line` in columns, with tabs expanded to `tab_width` stops.
///
/// Whitespace-only lines measure 0 so they never compare as more or less
/// indented than a real line.
#[must_use]
pub fn indent_depth(line: &str, tab_width: usize) -> usize {
    let mut column = 0;
    for ch in line.chars() {
        match ch {
            '\t' => {
                if tab_width > 0 {
                    column += tab_width - column % tab_width;
                }
            }
            c if c.is_whitespace() => column += 1,
            _ => return column,
        }
    }
    0
}

/// True for empty and whitespace-only lines.
#[must_use]
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_depth() {
        assert_eq!(indent_depth("a.", 4), 0);
        assert_eq!(indent_depth("  a\t", 4), 2);
        assert_eq!(indent_depth("   a", 4), 3);
        assert_eq!(indent_depth("    a ", 4), 4);
        assert_eq!(indent_depth("\ta  ", 5), 5);
    }

    #[test]
    fn test_tab_stops_after_spaces() {
        // two spaces then a tab lands on the next stop, not two columns further
        assert_eq!(indent_depth("  \tx", 4), 4);
        assert_eq!(indent_depth("    \tx", 4), 8);
        assert_eq!(indent_depth("\t\tx", 8), 16);
        assert_eq!(indent_depth(" \t x", 2), 3);
    }

    #[test]
    fn test_whitespace_only_is_zero() {
        for tab_width in 0..=8 {
            assert_eq!(indent_depth("", tab_width), 0);
            assert_eq!(indent_depth("    ", tab_width), 0);
            assert_eq!(indent_depth("\t\t", tab_width), 0);
            assert_eq!(indent_depth(" \t \r", tab_width), 0);
        }
    }

    #[test]
    fn test_mixed_tabs_and_spaces_compare_equal() {
        assert_eq!(indent_depth("\tpass", 4), indent_depth("    pass", 4));
        assert!(indent_depth("\tpass", 4) < indent_depth("\t  pass", 4));
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t "));
        assert!(!is_blank("  a"));
    }
}
