//! HTML page generation for the web form.
//!
//! Server-rendered pages; every dynamic value goes through `html_escape`.

use numlookup_core::utils::html_escape;
use numlookup_core::LookupOutcome;

const CSS: &str = r#"
        body { font-family: system-ui, sans-serif; max-width: 640px; margin: 40px auto; padding: 0 20px; color: #222; }
        h1 { border-bottom: 2px solid #333; padding-bottom: 10px; }
        form { display: flex; gap: 8px; }
        input[type=text] { flex: 1; padding: 8px; font-size: 1rem; }
        button { padding: 8px 16px; font-size: 1rem; cursor: pointer; }
        dl { display: grid; grid-template-columns: max-content 1fr; gap: 6px 16px; }
        dt { font-weight: bold; }
        dd { margin: 0; }
        .error { background: #fdecea; border: 1px solid #f5c2c0; color: #a12622; padding: 12px; }
        a { color: #0066cc; }
"#;

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
{body}
</body>
</html>"#,
        title = html_escape(title),
        css = CSS,
        body = body,
    )
}

/// The lookup form.
pub fn index_page() -> String {
    layout(
        "Phone Number Lookup",
        r#"    <h1>Phone Number Lookup</h1>
    <form method="post" action="/lookup">
        <input type="text" name="number" placeholder="+15555555555" autofocus>
        <button type="submit">Lookup</button>
    </form>"#,
    )
}

/// The result of one lookup: six labeled fields or the error message.
pub fn result_page(number: &str, outcome: &LookupOutcome) -> String {
    let content = match outcome {
        LookupOutcome::Details(details) => {
            let rows: String = details
                .fields()
                .iter()
                .map(|(label, value)| {
                    format!(
                        "        <dt>{}</dt><dd>{}</dd>\n",
                        html_escape(label),
                        html_escape(value)
                    )
                })
                .collect();
            format!("    <dl>\n{rows}    </dl>")
        }
        LookupOutcome::Error { error } => {
            format!(r#"    <p class="error">{}</p>"#, html_escape(error))
        }
    };

    layout(
        "Lookup Result",
        &format!(
            r#"    <h1>Results for {number}</h1>
{content}
    <p><a href="/">Lookup another number</a></p>"#,
            number = html_escape(number),
            content = content,
        ),
    )
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
