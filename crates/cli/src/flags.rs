use clap::ValueEnum;
use gitspect_segmenter::ContinuationMode;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub(crate) enum ContinuationFlag {
    TrailingParen,
    BracketDepth,
}

impl ContinuationFlag {
    pub(crate) const fn as_domain(self) -> ContinuationMode {
        match self {
            ContinuationFlag::TrailingParen => ContinuationMode::TrailingParen,
            ContinuationFlag::BracketDepth => ContinuationMode::BracketDepth,
        }
    }
}
