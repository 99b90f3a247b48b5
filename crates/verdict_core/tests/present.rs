use verdict_core::{classify, present, AnalysisResult, DisplayCategory};

#[test]
fn verdicts_containing_marker_are_warn() {
    for verdict in [
        "Potential Misinformation",
        "Potentially misleading",
        "Not Potential",
    ] {
        assert_eq!(classify(verdict), DisplayCategory::Warn, "{verdict}");
    }
}

#[test]
fn other_verdicts_are_ok() {
    for verdict in ["Likely Real", "", "potential misinformation", "Unverified"] {
        assert_eq!(classify(verdict), DisplayCategory::Ok, "{verdict}");
    }
}

#[test]
fn present_renders_fields_verbatim() {
    let result = AnalysisResult {
        verdict: "Likely Real".to_string(),
        confidence: 64,
        notes: "  Checked headline structure and domain reputation. ".to_string(),
    };
    let view = present(&result);

    assert_eq!(view.category, DisplayCategory::Ok);
    assert_eq!(view.category.css_class(), "ok");
    assert_eq!(view.confidence, 64);
    assert_eq!(view.notes, result.notes);
    assert_eq!(view.badge(), "Likely Real • 64% confidence");
    assert_eq!(DisplayCategory::Warn.css_class(), "warn");
}
