//! The single upload form page.

use crate::editing::color::Mood;
use crate::editing::resolution::Resolution;

const STYLES: [&str; 3] = ["heroic", "glitch", "chill"];
const RESOLUTIONS: [Resolution; 4] = [
    Resolution::P720,
    Resolution::P1080,
    Resolution::P1440,
    Resolution::Uhd4k,
];

#[derive(Debug, Default)]
pub struct PageView<'a> {
    pub message: &'a str,
    pub reel_url: Option<&'a str>,
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn options<'a>(values: impl IntoIterator<Item = &'a str>, selected: &str) -> String {
    values
        .into_iter()
        .map(|v| {
            let mark = if v == selected { " selected" } else { "" };
            format!("<option value=\"{v}\"{mark}>{v}</option>")
        })
        .collect::<Vec<_>>()
        .join("")
}

pub fn render_index(view: &PageView<'_>) -> String {
    let message = if view.message.is_empty() {
        String::new()
    } else {
        format!("<p class=\"message\">{}</p>", escape_html(view.message))
    };

    let reel = match view.reel_url {
        Some(url) => {
            let url = escape_html(url);
            format!(
                "<video controls src=\"{url}\"></video><p><a href=\"{url}\" download>Download reel</a></p>"
            )
        }
        None => String::new(),
    };

    format!(
        r#"<!doctype html>
<html lang="en">
<head><meta charset="utf-8"><title>Reel Maker</title></head>
<body>
<h1>Reel Maker</h1>
{message}
<form method="post" enctype="multipart/form-data">
<label>Video <input type="file" name="video" accept="video/*"></label>
<label>Music <input type="file" name="music" accept="audio/*"></label>
<label>Style <select name="style">{styles}</select></label>
<label>Mood <select name="mood">{moods}</select></label>
<label>Resolution <select name="resolution">{resolutions}</select></label>
<button type="submit">Create reel</button>
</form>
{reel}
</body>
</html>
"#,
        styles = options(STYLES, "heroic"),
        moods = options(Mood::ALL.iter().map(Mood::as_str), "none"),
        resolutions = options(RESOLUTIONS.iter().map(Resolution::as_str), "1080p"),
    )
}
