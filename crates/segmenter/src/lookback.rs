use crate::indent::{indent_depth, is_blank};

/// First line of the segment headed by `lines[header_index]`.
///
/// Walks backward over the contiguous non-blank lines indented at least as far
/// as the header, absorbing decorators and wrapped-signature lines. Stops at
/// the first blank or strictly less indented line.
pub fn lookback_start<S: AsRef<str>>(lines: &[S], header_index: usize, tab_width: usize) -> usize {
    let Some(header) = lines.get(header_index) else {
        return header_index.min(lines.len());
    };
    let header_indent = indent_depth(header.as_ref(), tab_width);

    let mut start = header_index;
    while start > 0 {
        let previous = lines[start - 1].as_ref();
        if is_blank(previous) || indent_depth(previous, tab_width) < header_indent {
            break;
        }
        start -= 1;
    }
    start
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_lookback() {
        assert_eq!(lookback_start(&["  ", "b"], 1, 4), 1);
        assert_eq!(lookback_start(&[" \t ", "b"], 1, 4), 1);
        assert_eq!(lookback_start(&["A", " \t ", "b"], 2, 4), 2);
        assert_eq!(lookback_start(&["  ", " a ", "b"], 2, 4), 1);
        assert_eq!(lookback_start(&["  a", "b"], 1, 4), 0);
        assert_eq!(lookback_start(&["@a(", "   b", ")", "c"], 3, 4), 0);
    }

    #[test]
    fn test_lookback_stops_at_shallower_line() {
        let lines = [
            "class C:",
            "    @property",
            "    @cached",
            "    def value(self):",
            "        return 1",
        ];
        assert_eq!(lookback_start(&lines, 3, 4), 1);
    }

    #[test]
    fn test_lookback_at_first_line_and_out_of_range() {
        assert_eq!(lookback_start(&["def f():"], 0, 4), 0);
        assert_eq!(lookback_start(&["a", "b"], 7, 4), 2);
    }
}
