//! Server-rendered HTML for the prediction page

use crate::templates::Templates;
use sentiscope_classifiers::Prediction;

pub const PAGE_TITLE: &str = "Sentiment Analyzer";
pub const WARNING_MESSAGE: &str = "⚠ Please enter at least one non-empty line.";
pub const INPUT_LABEL: &str = "📝 Enter multiple texts (one per line):";
pub const BUTTON_LABEL: &str = "🔍 Predict Sentiments";
pub const RESULTS_HEADING: &str = "📊 Prediction Results";

const DEFAULT_HEADER: &str = "<h2>💬 Simple Sentiment Analyzer</h2>\n<p>Made with ❤ using Rust</p>\n";

const BASE_STYLE: &str = r#"
body { font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif; color: #262730; }
main { max-width: 730px; margin: 2rem auto; padding: 0 1rem; }
label { display: block; margin-bottom: 0.5rem; }
textarea { width: 100%; height: 200px; box-sizing: border-box; padding: 0.5rem; font: inherit; }
button { margin-top: 0.75rem; padding: 0.5rem 1rem; font: inherit; cursor: pointer; }
.warning { background: #fffbe6; border: 1px solid #ffe58f; padding: 10px; margin-top: 1rem; }
.error { background: #fff1f0; border: 1px solid #ffa39e; padding: 10px; margin-top: 1rem; }
"#;

/// What the page shows below the input form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Waiting for input
    Idle,
    /// Submitted text had no non-empty lines
    Warning,
    /// One block per classified line
    Results(Vec<Prediction>),
    /// Prediction failed
    Failed(String),
}

/// Render the full page
pub fn render_page(templates: &Templates, input: &str, outcome: &Outcome) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html.push_str(&format!("<title>{}</title>\n", PAGE_TITLE));
    html.push_str(&format!("<style>{}</style>\n", BASE_STYLE));
    if !templates.style.is_empty() {
        html.push_str(&format!("<style>{}</style>\n", templates.style));
    }
    html.push_str("</head>\n<body>\n<main>\n");

    if templates.markup.is_empty() {
        html.push_str(DEFAULT_HEADER);
    } else {
        html.push_str(&templates.markup);
        html.push('\n');
    }

    html.push_str(&render_form(input));
    html.push_str(&render_outcome(outcome));

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn render_form(input: &str) -> String {
    format!(
        r#"<form method="post" action="/predict">
<label for="text">{label}</label>
<textarea id="text" name="text" placeholder="Type here...">{input}</textarea>
<button type="submit">{button}</button>
</form>
"#,
        label = INPUT_LABEL,
        input = escape_html(input),
        button = BUTTON_LABEL,
    )
}

fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Idle => String::new(),
        Outcome::Warning => format!(
            "<div class=\"warning\" role=\"alert\">{}</div>\n",
            WARNING_MESSAGE
        ),
        Outcome::Failed(message) => format!(
            "<div class=\"error\" role=\"alert\">Prediction failed: {}</div>\n",
            escape_html(message)
        ),
        Outcome::Results(predictions) => {
            let mut section = format!("<h3>{}</h3>\n", RESULTS_HEADING);
            for prediction in predictions {
                section.push_str(&render_result(prediction));
            }
            section
        }
    }
}

/// One labeled, colored block for a classified line
pub fn render_result(prediction: &Prediction) -> String {
    format!(
        r#"<div class="result-box" style="border-left: 5px solid {color}; padding: 10px; margin-bottom: 10px;">
    <strong>{index}. {text}</strong><br>
    Sentiment: <span style="color: {color}; font-weight: bold;">{label}</span> ({code})
</div>
"#,
        color = prediction.color(),
        index = prediction.index,
        text = escape_html(&prediction.text),
        label = prediction.label(),
        code = prediction.code,
    )
}

/// Escape text for use in HTML content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
