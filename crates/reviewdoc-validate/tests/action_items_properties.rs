//! Property tests for the action items structure rule
//!
//! Documents are generated from a small vocabulary of lines that exercise
//! every branch of the scanner: section headings, the two required labels,
//! stray bold labels, near-miss labels and plain content.

use proptest::prelude::*;
use reviewdoc_core::{apply_fixes, Document};
use reviewdoc_validate::{ActionItemsValidator, ValidationEngine, Validator};

const HEADING: &str = "## 🎯 ACTION ITEMS";
const IMMEDIATE: &str = "**Immediate Actions Required:**";
const RECOMMENDED: &str = "**Recommended Improvements:**";

fn line_strategy() -> impl Strategy<Value = String> {
    let fixed = vec![
        HEADING.to_string(),
        IMMEDIATE.to_string(),
        RECOMMENDED.to_string(),
        format!("  {}  ", RECOMMENDED),
        "## NEXT".to_string(),
        "# Title".to_string(),
        "### Detail".to_string(),
        "**Notes:**".to_string(),
        "**Extra Section:**".to_string(),
        "**Immediate Actions Required**".to_string(),
        "  **Indented:**".to_string(),
        "- item".to_string(),
        String::new(),
    ];

    prop_oneof![
        3 => proptest::sample::select(fixed),
        1 => "[a-z ]{0,12}",
        1 => "\\*\\*[A-Za-z ]{1,10}:\\*\\*",
    ]
}

fn document_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(line_strategy(), 0..40)
}

proptest! {
    #[test]
    fn applying_fixes_leaves_nothing_to_fix(lines in document_strategy()) {
        let validator = ActionItemsValidator::default();
        let doc = Document::from_lines(lines);

        let diagnostics = validator.validate(&doc);
        let fixed = apply_fixes(&doc, &diagnostics);

        prop_assert_eq!(fixed.applied, diagnostics.len());
        prop_assert!(validator.validate(&fixed.document).is_empty());
    }

    #[test]
    fn violations_are_strictly_increasing_lines(lines in document_strategy()) {
        let doc = Document::from_lines(lines);
        let found: Vec<usize> = ActionItemsValidator::default()
            .validate(&doc)
            .iter()
            .filter_map(|d| d.line())
            .collect();

        prop_assert!(found.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn every_violation_points_at_a_bold_label(lines in document_strategy()) {
        let doc = Document::from_lines(lines);

        for diag in ActionItemsValidator::default().validate(&doc) {
            let line = diag.line().and_then(|n| doc.line(n)).expect("line in range");
            prop_assert_eq!(diag.context.as_deref(), Some(line.trimmed()));
            prop_assert_ne!(line.trimmed(), IMMEDIATE);
            prop_assert_ne!(line.trimmed(), RECOMMENDED);
            prop_assert_eq!(diag.fix.map(|f| f.line), diag.line());
        }
    }

    #[test]
    fn documents_without_the_section_are_clean(lines in document_strategy()) {
        let lines: Vec<String> = lines.into_iter().filter(|l| l.trim() != HEADING).collect();
        let doc = Document::from_lines(lines);

        prop_assert!(ValidationEngine::with_defaults().validate(&doc).is_empty());
    }

    #[test]
    fn content_after_section_close_is_ignored(
        before in document_strategy(),
        after in document_strategy(),
    ) {
        let validator = ActionItemsValidator::default();
        let head: Vec<String> = before.into_iter().filter(|l| !l.starts_with('#')).collect();

        let mut lines = vec![HEADING.to_string()];
        lines.extend(head);
        lines.push("## NEXT".to_string());
        let closed_len = lines.len();
        lines.extend(after);

        let full = validator.validate(&Document::from_lines(lines.clone()));
        let truncated = validator.validate(&Document::from_lines(lines[..closed_len].to_vec()));

        prop_assert_eq!(full, truncated);
    }
}

#[test]
fn stray_label_after_both_required_labels() {
    let doc = Document::from_lines([
        HEADING,
        IMMEDIATE,
        RECOMMENDED,
        "**Something Else:**",
    ]);

    let diagnostics = ActionItemsValidator::default().validate(&doc);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].line(), Some(4));
}

#[test]
fn parsed_text_matches_line_list() {
    let text = "# Weekly Review\n\n## 🎯 ACTION ITEMS\n**Immediate Actions Required:**\n- rotate keys\n\n**Recommended Improvements:**\n- add alerts\n**Extra Section:**\n- z\n## NEXT\n**Outside:**\n";
    let doc = Document::parse(text);

    let diagnostics = ValidationEngine::with_defaults().validate(&doc);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].line(), Some(9));

    let fixed = apply_fixes(&doc, &diagnostics);
    assert_eq!(
        fixed.document.to_text(),
        "# Weekly Review\n\n## 🎯 ACTION ITEMS\n**Immediate Actions Required:**\n- rotate keys\n\n**Recommended Improvements:**\n- add alerts\n- z\n## NEXT\n**Outside:**\n"
    );
}
