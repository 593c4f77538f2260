//! Core domain types for notebank chapters.
//!
//! All of these are transient: they exist only while one chapter file is
//! being converted. Nothing is persisted across files.

/// One parsed chapter file, ready for rendering.
#[derive(Debug, Clone)]
pub struct Document {
    /// Chapter label taken verbatim from the filename's leading digit run
    /// (zero padding preserved, so `01_intro.html` labels as `01-1`, `01-2`, ...).
    pub chapter: String,
    /// Display title: the first `<h1>` flattened to text, else the filename.
    pub title: String,
    /// Heading-delimited groups of questions, in reading order.
    pub sections: Vec<Section>,
}

/// A run of questions introduced by a second-level heading.
///
/// The questions before the first heading live in an implicit section with
/// `heading: None`.
#[derive(Debug, Clone)]
pub struct Section {
    /// Heading text, already flattened. `None` for the implicit lead section.
    pub heading: Option<String>,
    /// Questions in document order.
    pub questions: Vec<Question>,
}

/// One question block extracted from a chapter.
///
/// Every field except `seq` tolerates absence: a block that carries none of
/// the recognized markers still consumes a sequence number and renders as a
/// bare numbered label.
#[derive(Debug, Clone)]
pub struct Question {
    /// 1-based sequence number, assigned in document order across all
    /// sections and reset for each document.
    pub seq: usize,
    /// Short type label (e.g. "选择", "MC"), without brackets.
    pub badge: Option<String>,
    /// Main question text. Empty when the block has no text marker.
    pub text: String,
    /// Secondary block, typically blank-fill prompts.
    pub extra: Option<String>,
    /// Whether the block contained a free-response input area.
    pub has_response_area: bool,
    /// Answer text, rendered collapsed.
    pub answer: Option<String>,
}

impl Document {
    /// Total number of questions across all sections.
    pub fn question_count(&self) -> usize {
        self.sections.iter().map(|s| s.questions.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_count_spans_sections() {
        let q = |seq| Question {
            seq,
            badge: None,
            text: String::new(),
            extra: None,
            has_response_area: false,
            answer: None,
        };
        let doc = Document {
            chapter: "3".into(),
            title: "Interpolation".into(),
            sections: vec![
                Section {
                    heading: None,
                    questions: vec![q(1)],
                },
                Section {
                    heading: Some("Review".into()),
                    questions: vec![q(2), q(3)],
                },
            ],
        };
        assert_eq!(doc.question_count(), 3);
    }
}
