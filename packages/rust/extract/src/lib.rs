//! Typed extraction of question-bank chapters from HTML.
//!
//! Parses one chapter file with `scraper` and reduces it to the
//! [`Document`] / [`Section`] / [`Question`] model. Every question field is
//! looked up independently with a CSS selector, so an absent marker is an
//! explicit `None` rather than a failed pattern match.

mod text;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use notebank_shared::{Document, Question, Section};

pub use text::{BLANK_RUN, flatten};

/// Parse one chapter's HTML into a [`Document`].
///
/// `filename` is the title fallback when the chapter has no `<h1>`;
/// `chapter` is the label prefix for question numbering.
pub fn parse_document(html: &str, filename: &str, chapter: &str) -> Document {
    let doc = Html::parse_document(html);

    let title = extract_title(&doc).unwrap_or_else(|| filename.to_string());
    let sections = extract_sections(&doc);

    let document = Document {
        chapter: chapter.to_string(),
        title,
        sections,
    };

    debug!(
        title = %document.title,
        sections = document.sections.len(),
        questions = document.question_count(),
        "chapter extracted"
    );

    document
}

/// Title from the first `<h1>`, flattened. `None` when absent or empty.
fn extract_title(doc: &Html) -> Option<String> {
    let h1_sel = Selector::parse("h1").unwrap();
    doc.select(&h1_sel)
        .next()
        .map(flatten)
        .filter(|t| !t.is_empty())
}

/// Walk headings and question blocks in document order, grouping questions
/// under the most recent `<h2>`. Questions before the first heading land in
/// an implicit lead section with no heading.
fn extract_sections(doc: &Html) -> Vec<Section> {
    let walk_sel = Selector::parse("h2, div.question").unwrap();

    let mut sections: Vec<Section> = Vec::new();
    let mut current = Section {
        heading: None,
        questions: Vec::new(),
    };
    let mut seq = 0;

    for el in doc.select(&walk_sel) {
        if el.value().name() == "h2" {
            sections.push(std::mem::replace(
                &mut current,
                Section {
                    heading: Some(flatten(el)),
                    questions: Vec::new(),
                },
            ));
            continue;
        }

        // Nested question containers are unsupported: only the outermost
        // block of a run counts, and inner ones feed its fields.
        if inside_question(el) {
            continue;
        }

        seq += 1;
        current.questions.push(extract_question(el, seq));
    }

    sections.push(current);
    sections
}

/// Extract one question block. Each field lookup tolerates absence.
fn extract_question(block: ElementRef<'_>, seq: usize) -> Question {
    let badge_sel = Selector::parse(r#"span[class^="q-type"]"#).unwrap();
    let text_sel = Selector::parse("span.q-text").unwrap();
    let extra_sel = Selector::parse(r#"div[style^="margin"]"#).unwrap();
    let answer_sel = Selector::parse("div.answer").unwrap();
    let textarea_sel = Selector::parse("textarea").unwrap();

    let badge = block
        .select(&badge_sel)
        .next()
        .map(flatten)
        .filter(|s| !s.is_empty());

    let text = block
        .select(&text_sel)
        .next()
        .map(flatten)
        .unwrap_or_default();

    let extra = block
        .select(&extra_sel)
        .next()
        .map(flatten)
        .filter(|s| !s.is_empty());

    let answer = block
        .select(&answer_sel)
        .next()
        .map(flatten)
        .filter(|s| !s.is_empty());

    let has_response_area = block.select(&textarea_sel).next().is_some();

    Question {
        seq,
        badge,
        text,
        extra,
        has_response_area,
        answer,
    }
}

/// Whether `el` sits inside another `div.question`.
fn inside_question(el: ElementRef<'_>) -> bool {
    el.ancestors().any(|a| {
        ElementRef::wrap(a).is_some_and(|e| {
            e.value().name() == "div" && e.value().classes().any(|c| c == "question")
        })
    })
}
