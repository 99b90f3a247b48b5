use verdict_core::{DisplayCategory, InputMode, UiViewModel, ACCEPTED_EXTENSIONS};

/// Renders the view model as a plain-text screen.
pub fn render(view: &UiViewModel) -> String {
    let mut lines = Vec::new();

    let tabs = InputMode::ALL
        .iter()
        .map(|mode| {
            if *mode == view.active_mode {
                format!("[{}]", mode.label())
            } else {
                format!(" {} ", mode.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    lines.push(tabs);

    match view.active_mode {
        InputMode::Text => lines.push(field_line(
            "Text",
            &view.text,
            "Paste or type the content you want to analyze...",
        )),
        InputMode::Url => lines.push(field_line(
            "URL",
            &view.url,
            "Paste the article or media URL to analyze...",
        )),
        InputMode::File => {
            let zone = if view.drag_over {
                "Drop zone (release to drop)"
            } else {
                "Drop zone"
            };
            lines.push(zone.to_string());
            match &view.file {
                Some(file) => {
                    lines.push(format!(
                        "  {} ({} bytes, {})  [remove]",
                        file.name, file.size, file.mime_type
                    ));
                    if !file.accepted_type {
                        lines.push(format!(
                            "  note: expected one of .{}",
                            ACCEPTED_EXTENSIONS.join(", .")
                        ));
                    }
                    if file.over_size_hint {
                        lines.push("  note: larger than the 10MB guideline".to_string());
                    }
                }
                None => {
                    lines.push("  Drag & drop a file here, or `pick <path>` to browse".to_string());
                    lines.push("  Images, PDFs, or text files up to 10MB".to_string());
                }
            }
        }
    }

    let button = if view.analyze_enabled {
        format!("< {} >", view.analyze_label)
    } else {
        format!("( {} )", view.analyze_label)
    };
    lines.push(button);

    if let Some(message) = view.validation_message {
        lines.push(format!("! {message}"));
    }
    if let Some(message) = &view.failure_message {
        lines.push(format!("x Analysis failed: {message}"));
    }
    if let Some(result) = &view.result {
        let marker = match result.category {
            DisplayCategory::Warn => "!!",
            DisplayCategory::Ok => "ok",
        };
        lines.push(format!("{marker} {}", result.badge()));
        lines.push(format!("   {}", result.notes));
    }

    lines.join("\n")
}

fn field_line(label: &str, value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        format!("{label}: ({placeholder})")
    } else {
        format!("{label}: {value}")
    }
}
