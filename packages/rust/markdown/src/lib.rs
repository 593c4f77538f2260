//! Markdown rendering for extracted question-bank chapters.
//!
//! Turns a typed [`Document`] into the final study-notes Markdown: a level-1
//! title, level-2 section headings, numbered question paragraphs, and
//! collapsible answer regions, then runs a small cleanup pipeline.
//!
//! Field order in the output is fixed by this renderer (label, extra text,
//! response placeholder, answer, rule) regardless of where the pieces sat in
//! the source block.

mod cleanup;

use tracing::debug;

use notebank_shared::{Document, Question};

/// Quoted line emitted where a question had a free-response input area.
pub const RESPONSE_PLACEHOLDER: &str = "> （作答区）";

/// Label shown on the collapsible answer region.
pub const ANSWER_SUMMARY: &str = "答案";

/// Render a whole chapter document to Markdown.
pub fn render_document(doc: &Document) -> String {
    let mut blocks: Vec<String> = Vec::new();

    blocks.push(format!("# {}", doc.title));

    for section in &doc.sections {
        if let Some(heading) = &section.heading {
            blocks.push(format!("## {heading}"));
        }
        for question in &section.questions {
            render_question(&doc.chapter, question, &mut blocks);
        }
    }

    debug!(
        chapter = %doc.chapter,
        blocks = blocks.len(),
        "chapter rendered"
    );

    cleanup::run_pipeline(&blocks.join("\n\n"))
}

/// Emit one question: numbered label, extra text, placeholder, collapsed
/// answer, then a rule. Each piece becomes its own paragraph.
fn render_question(chapter: &str, q: &Question, blocks: &mut Vec<String>) {
    let badge = q.badge.as_deref().unwrap_or("");
    let label = format!("**{chapter}-{}** [{badge}] {}", q.seq, q.text);
    blocks.push(label.trim_end().to_string());

    if let Some(extra) = &q.extra {
        blocks.push(extra.clone());
    }

    if q.has_response_area {
        blocks.push(RESPONSE_PLACEHOLDER.to_string());
    }

    if let Some(answer) = &q.answer {
        blocks.push(format!(
            "<details><summary>{ANSWER_SUMMARY}</summary>\n\n{answer}\n\n</details>"
        ));
    }

    blocks.push("---".to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use notebank_shared::Section;

    fn question(seq: usize) -> Question {
        Question {
            seq,
            badge: None,
            text: String::new(),
            extra: None,
            has_response_area: false,
            answer: None,
        }
    }

    fn single_question_doc(q: Question) -> Document {
        Document {
            chapter: "1".into(),
            title: "Intro".into(),
            sections: vec![Section {
                heading: None,
                questions: vec![q],
            }],
        }
    }

    #[test]
    fn full_question_renders_in_fixed_order() {
        let md = render_document(&single_question_doc(Question {
            seq: 1,
            badge: Some("MC".into()),
            text: "What is 2+2?".into(),
            extra: Some("提示：整数。".into()),
            has_response_area: true,
            answer: Some("4".into()),
        }));

        assert_eq!(
            md,
            "# Intro\n\n\
             **1-1** [MC] What is 2+2?\n\n\
             提示：整数。\n\n\
             > （作答区）\n\n\
             <details><summary>答案</summary>\n\n4\n\n</details>\n\n\
             ---\n"
        );
    }

    #[test]
    fn missing_badge_renders_empty_brackets() {
        let md = render_document(&single_question_doc(Question {
            text: "q".into(),
            ..question(1)
        }));
        assert!(md.contains("**1-1** [] q"));
    }

    #[test]
    fn missing_text_trims_label_line() {
        let md = render_document(&single_question_doc(question(1)));
        assert!(md.contains("**1-1** []\n"));
        assert!(!md.contains("**1-1** [] \n"));
    }

    #[test]
    fn no_answer_means_no_details_region() {
        let md = render_document(&single_question_doc(Question {
            text: "q".into(),
            ..question(1)
        }));
        assert!(!md.contains("<details>"));
    }

    #[test]
    fn placeholder_emitted_once() {
        let md = render_document(&single_question_doc(Question {
            text: "q".into(),
            has_response_area: true,
            ..question(1)
        }));
        assert_eq!(md.matches(RESPONSE_PLACEHOLDER).count(), 1);
    }

    #[test]
    fn every_question_followed_by_rule() {
        let doc = Document {
            chapter: "2".into(),
            title: "t".into(),
            sections: vec![Section {
                heading: Some("复习".into()),
                questions: vec![
                    Question {
                        text: "a".into(),
                        ..question(1)
                    },
                    Question {
                        text: "b".into(),
                        ..question(2)
                    },
                ],
            }],
        };
        let md = render_document(&doc);
        assert_eq!(md.matches("\n---\n").count(), 2);
        assert!(md.contains("## 复习"));
        assert!(md.contains("**2-1** [] a"));
        assert!(md.contains("**2-2** [] b"));
    }

    #[test]
    fn empty_document_is_title_only() {
        let doc = Document {
            chapter: "3".into(),
            title: "3_blank.html".into(),
            sections: vec![Section {
                heading: None,
                questions: Vec::new(),
            }],
        };
        assert_eq!(render_document(&doc), "# 3_blank.html\n");
    }

    #[test]
    fn multiline_answer_kept_inside_details() {
        let md = render_document(&single_question_doc(Question {
            text: "q".into(),
            answer: Some("第一步\n第二步".into()),
            ..question(1)
        }));
        assert!(md.contains("<details><summary>答案</summary>\n\n第一步\n第二步\n\n</details>"));
    }
}
