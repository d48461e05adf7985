//! # gitspect segmenter
//!
//! Splits indentation-structured source files (Python and friends) into
//! addressable definition segments without parsing the grammar.
//!
//! ## Architecture
//!
//! ```text
//! Lines
//!     │
//!     ├──> Indent Measurer (tab-aware depth per line)
//!     │
//!     ├──> Nesting Stack (single top-to-bottom scan)
//!     │    ├─> push on indent increase
//!     │    └─> pop on decrease, unless the line continues a wrapped header
//!     │
//!     ├──> Close events
//!     │    ├─> Lookback: absorb decorators above the header
//!     │    └─> Validation: keep class/def blocks, drop if/for/while
//!     │
//!     └──> Document
//!          └─> segments deepest-first, whole-file segment last
//! ```
//!
//! ## Example
//!
//! ```rust
//! use gitspect_segmenter::{segment, Segment};
//!
//! let doc = segment("example.py", ["@cache", "def f():", "    return 1"]);
//!
//! assert_eq!(doc.segments()[0], Segment::new(0, 3, "example.py"));
//! for lines in &doc {
//!     println!("{}", lines.join("\n"));
//! }
//! ```

mod config;
mod continuation;
mod error;
mod indent;
mod language;
mod lookback;
mod segmenter;
mod types;

pub use config::{ContinuationMode, SegmenterConfig};
pub use continuation::is_continuation_tail;
pub use error::{Result, SegmenterError};
pub use indent::{indent_depth, is_blank, DEFAULT_TAB_WIDTH};
pub use language::Language;
pub use lookback::lookback_start;
pub use segmenter::{segment, Segmenter};
pub use types::{Document, Segment, SegmentationStats};
