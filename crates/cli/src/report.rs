use anyhow::Result;
use gitspect_repository::Commit;
use gitspect_segmenter::Document;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct SpanReport {
    pub start: usize,
    pub end: usize,
}

/// One segmented document as printed by `segment` and `history`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct DocumentReport {
    pub document_name: String,
    pub line_count: usize,
    pub segments: Vec<SpanReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DocumentReport {
    pub(crate) fn from_document(doc: &Document) -> Self {
        Self {
            document_name: doc.document_name().to_string(),
            line_count: doc.line_count(),
            segments: doc
                .segments()
                .iter()
                .map(|s| SpanReport {
                    start: s.start,
                    end: s.end,
                })
                .collect(),
            commit_id: None,
            message: None,
        }
    }

    pub(crate) fn at_commit(doc: &Document, commit: &Commit) -> Self {
        Self {
            commit_id: Some(commit.commit_id.clone()),
            message: Some(commit.message.clone()),
            ..Self::from_document(doc)
        }
    }
}

/// `name<TAB>start<TAB>end`, one line per segment
pub(crate) fn render_documents_text(reports: &[DocumentReport]) -> String {
    let mut out = String::new();
    for report in reports {
        for span in &report.segments {
            out.push_str(&format!(
                "{}\t{}\t{}\n",
                report.document_name, span.start, span.end
            ));
        }
    }
    out
}

/// `commit_id<TAB>message`, one line per commit
pub(crate) fn render_commits_text(commits: &[Commit]) -> String {
    let mut out = String::new();
    for commit in commits {
        out.push_str(&format!("{}\t{}\n", commit.commit_id, commit.message));
    }
    out
}

pub(crate) fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
