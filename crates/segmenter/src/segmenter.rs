use crate::config::SegmenterConfig;
use crate::continuation::LineLayout;
use crate::error::{Result, SegmenterError};
use crate::indent::{indent_depth, is_blank};
use crate::lookback::lookback_start;
use crate::types::{Document, Segment};
use std::path::Path;

/// Main segmenter interface for splitting source text into definition blocks
#[derive(Debug, Clone)]
pub struct Segmenter {
    config: SegmenterConfig,
}

impl Segmenter {
    /// Create a new segmenter with configuration
    pub fn new(config: SegmenterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Segment an already split sequence of lines.
    ///
    /// `document_name` only tags the produced segments.
    pub fn segment<I, S>(&self, document_name: impl Into<String>, lines: I) -> Document
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let document_name = document_name.into();
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        let segments = Scan::new(&self.config, &lines, &document_name).run();
        let doc = Document::new(document_name, lines, segments);
        log::debug!("Segmented {}: {}", doc.document_name(), doc.stats());
        doc
    }

    /// Segment source text held in memory
    pub fn segment_str(&self, document_name: impl Into<String>, content: &str) -> Document {
        self.segment(document_name, content.lines())
    }

    /// Segment a file from disk, named by its path
    pub fn segment_file(&self, path: impl AsRef<Path>) -> Result<Document> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let content = String::from_utf8(bytes)
            .map_err(|_| SegmenterError::InvalidUtf8(path.display().to_string()))?;
        Ok(self.segment_str(path.display().to_string(), &content))
    }

    /// Get configuration
    #[must_use]
    pub const fn config(&self) -> &SegmenterConfig {
        &self.config
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self {
            config: SegmenterConfig::default(),
        }
    }
}

/// Segment `lines` with the default configuration
pub fn segment<I, S>(document_name: impl Into<String>, lines: I) -> Document
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Segmenter::default().segment(document_name, lines)
}

/// An indentation block still open on the nesting stack
#[derive(Debug, Clone, Copy)]
struct OpenBlock {
    line_index: usize,
    indent: usize,
    /// Line that introduced the block; the seed entry has none
    header: Option<usize>,
}

/// Working state of one segmentation pass
struct Scan<'a> {
    config: &'a SegmenterConfig,
    lines: &'a [String],
    document_name: &'a str,
    layout: LineLayout,
    stack: Vec<OpenBlock>,
    non_blank_index: usize,
    segments: Vec<Segment>,
}

impl<'a> Scan<'a> {
    fn new(config: &'a SegmenterConfig, lines: &'a [String], document_name: &'a str) -> Self {
        Self {
            config,
            lines,
            document_name,
            layout: LineLayout::new(lines, config.continuation),
            stack: Vec::new(),
            non_blank_index: 0,
            segments: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Segment> {
        let lines = self.lines;
        let Some(first) = lines.first() else {
            return self.segments;
        };
        let first_indent = self.indent(first);
        log::debug!("Indent {first_indent} at 0");
        self.stack.push(OpenBlock {
            line_index: 0,
            indent: first_indent,
            header: None,
        });

        for (index, line) in lines.iter().enumerate().skip(1) {
            if is_blank(line) {
                continue;
            }
            if self.layout.is_inside_statement(index) {
                self.non_blank_index = index;
                continue;
            }

            let depth = self.indent(line);
            let top_indent = self.stack.last().map_or(0, |block| block.indent);
            if depth > top_indent {
                let header = self.layout.header_for_block(index, self.non_blank_index);
                log::debug!("Indent {depth} at {index}");
                self.stack.push(OpenBlock {
                    line_index: index,
                    indent: depth,
                    header: Some(header),
                });
            } else if !self.layout.suppresses_close(index) {
                self.close_inline(Some(depth));
                while let Some(&block) = self.stack.last() {
                    if depth >= block.indent {
                        break;
                    }
                    self.stack.pop();
                    self.close(block);
                }
            }
            self.non_blank_index = index;
        }

        self.close_inline(None);
        while let Some(block) = self.stack.pop() {
            self.close(block);
        }

        self.segments
            .push(Segment::new(0, self.non_blank_index, self.document_name));
        self.segments
    }

    fn indent(&self, line: &str) -> usize {
        indent_depth(line, self.config.tab_width)
    }

    /// Close a popped block, keeping it only when its header is a definition.
    fn close(&mut self, block: OpenBlock) {
        let Some(header) = block.header else {
            return;
        };
        let header_line = &self.lines[header];
        if !self.config.is_definition_header(header_line) {
            log::debug!(
                "Skipping block at {} opened by '{}'",
                block.line_index,
                header_line.trim()
            );
            return;
        }
        self.emit(header);
    }

    /// Report the previous statement if it is a definition whose body shares its line.
    ///
    /// `depth` is the indent of the line that follows it, `None` at end of input.
    fn close_inline(&mut self, depth: Option<usize>) {
        if !self.config.inline_definitions {
            return;
        }
        let header = self.layout.logical_start(self.non_blank_index);
        let header_line = &self.lines[header];
        if !self.config.is_definition_header(header_line) {
            return;
        }
        if depth.is_some_and(|depth| depth > self.indent(header_line)) {
            return;
        }

        // only lines at the header's own column belong to it, unless they continue a wrapped
        // statement; a sibling definition or its deeper body ends the lookback
        let lines = self.lines;
        let header_indent = self.indent(header_line);
        let start = lookback_start(lines, header, self.config.tab_width);
        let start = (start..header)
            .rev()
            .find(|&index| {
                self.config.is_definition_header(&lines[index])
                    || (self.indent(&lines[index]) > header_indent
                        && !self.layout.is_inside_statement(index))
            })
            .map_or(start, |boundary| boundary + 1);
        self.push_segment(start);
    }

    fn emit(&mut self, header: usize) {
        let start = lookback_start(self.lines, header, self.config.tab_width);
        self.push_segment(start);
    }

    fn push_segment(&mut self, start: usize) {
        let segment = Segment::new(start, self.non_blank_index + 1, self.document_name);
        log::debug!("Creating segment: {segment}");
        self.segments.push(segment);
    }
}
