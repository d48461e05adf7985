use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-open line range `[start, end)` naming one logical unit of a document
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    /// First line (0-indexed, inclusive)
    pub start: usize,

    /// Line after the last one (0-indexed, exclusive)
    pub end: usize,

    /// Identifier of the document the range belongs to
    pub document_name: String,
}

impl Segment {
    /// Create a new segment
    #[must_use]
    pub fn new(start: usize, end: usize, document_name: impl Into<String>) -> Self {
        Self {
            start,
            end,
            document_name: document_name.into(),
        }
    }

    /// Number of lines covered
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Check if the segment covers a 0-indexed line
    #[must_use]
    pub const fn contains_line(&self, line: usize) -> bool {
        line >= self.start && line < self.end
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}..{})", self.document_name, self.start, self.end)
    }
}

/// Segmentation result for one source text.
///
/// Segments are stored in emission order: nested definitions before the
/// definitions containing them, with the whole-file segment last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    document_name: String,
    lines: Vec<String>,
    segments: Vec<Segment>,
}

impl Document {
    pub(crate) fn new(document_name: String, lines: Vec<String>, segments: Vec<Segment>) -> Self {
        Self {
            document_name,
            lines,
            segments,
        }
    }

    #[must_use]
    pub fn document_name(&self) -> &str {
        &self.document_name
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// True when the document has no segments at all (empty input)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Lines covered by `segment`, clamped to the document
    #[must_use]
    pub fn text(&self, segment: &Segment) -> &[String] {
        let end = segment.end.min(self.lines.len());
        let start = segment.start.min(end);
        &self.lines[start..end]
    }

    /// Line slices for every segment, in stored order
    pub fn iter(&self) -> impl Iterator<Item = &[String]> + '_ {
        self.segments.iter().map(|segment| self.text(segment))
    }

    /// The trailing segment spanning the whole document
    #[must_use]
    pub fn whole_file(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// Class and function segments, without the trailing whole-file segment
    #[must_use]
    pub fn definitions(&self) -> &[Segment] {
        match self.segments.split_last() {
            Some((_, rest)) => rest,
            None => &[],
        }
    }

    /// Summary numbers for logging and reports
    #[must_use]
    pub fn stats(&self) -> SegmentationStats {
        let definitions = self.definitions();
        let mut covered = vec![false; self.lines.len()];
        for segment in definitions {
            let end = segment.end.min(covered.len());
            let start = segment.start.min(end);
            covered[start..end].iter_mut().for_each(|line| *line = true);
        }

        SegmentationStats {
            total_lines: self.lines.len(),
            total_segments: self.segments.len(),
            definition_segments: definitions.len(),
            covered_lines: covered.iter().filter(|line| **line).count(),
            largest_definition: definitions.iter().map(Segment::len).max().unwrap_or(0),
        }
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a [String];
    type IntoIter = Box<dyn Iterator<Item = &'a [String]> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// Statistics about one segmented document, or a batch of them after [`SegmentationStats::merge`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SegmentationStats {
    pub total_lines: usize,
    pub total_segments: usize,
    pub definition_segments: usize,
    /// Lines inside at least one definition segment
    pub covered_lines: usize,
    pub largest_definition: usize,
}

impl SegmentationStats {
    /// Fold another document's numbers into a running total
    pub fn merge(&mut self, other: &SegmentationStats) {
        self.total_lines += other.total_lines;
        self.total_segments += other.total_segments;
        self.definition_segments += other.definition_segments;
        self.covered_lines += other.covered_lines;
        self.largest_definition = self.largest_definition.max(other.largest_definition);
    }
}

impl fmt::Display for SegmentationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lines: {} | Segments: {} | Definitions: {} | Covered: {} | Largest: {}",
            self.total_lines,
            self.total_segments,
            self.definition_segments,
            self.covered_lines,
            self.largest_definition
        )
    }
}
