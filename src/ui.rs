// src/ui.rs

use crate::config::{PAGE_CAPTION, PAGE_HEADING, PAGE_ICON, PAGE_TITLE};
use crate::page::{PlaybackRegion, RenderPlan, RenderedPage, Sidebar};

const STYLE: &str = r#"
body { margin: 0; font-family: sans-serif; display: flex; min-height: 100vh; }
aside { width: 18rem; padding: 1.5rem; background: #f0f2f6; box-sizing: border-box; }
aside label { display: block; margin: 0.6rem 0; }
aside code { display: block; padding: 0.4rem; background: #fff; overflow-wrap: anywhere; }
main { flex: 1; padding: 2rem 3rem; }
.caption { color: #6b6b6b; }
.columns { display: flex; gap: 3rem; }
.region { flex: 1; min-width: 0; }
.region video { width: 100%; }
.banner { padding: 1rem; border-radius: 0.5rem; margin-top: 1.5rem; }
.banner.error { background: #ffe4e4; color: #7d0000; }
.banner.success { background: #dff5e3; color: #14532d; }
"#;

/// Renders the complete HTML document for a render pass.
pub fn render_html(plan: &RenderPlan) -> String {
    let mut html = format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n\
         <link rel=\"icon\" href=\"data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>{}</text></svg>\">\n\
         <style>{}</style>\n</head>\n<body>\n",
        escape_html(PAGE_TITLE),
        PAGE_ICON,
        STYLE
    );

    match plan {
        RenderPlan::Halted { message, .. } => {
            html.push_str("<main>\n");
            push_header(&mut html);
            html.push_str(&format!(
                "<div class=\"banner error\" role=\"alert\">{}</div>\n",
                escape_html(message)
            ));
            html.push_str("</main>\n");
        }
        RenderPlan::Rendered(page) => push_rendered(&mut html, page),
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn push_header(html: &mut String) {
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(PAGE_HEADING)));
    html.push_str(&format!(
        "<p class=\"caption\">{}</p>\n",
        escape_html(PAGE_CAPTION)
    ));
}

fn push_rendered(html: &mut String, page: &RenderedPage) {
    push_sidebar(html, &page.sidebar);

    html.push_str("<main>\n");
    push_header(html);
    html.push_str("<div class=\"columns\">\n");
    for region in &page.regions {
        push_region(html, region);
    }
    html.push_str("</div>\n");
    html.push_str(&format!(
        "<div class=\"banner success\">{}</div>\n",
        escape_html(page.success_message)
    ));
    html.push_str("</main>\n");
}

fn push_sidebar(html: &mut String, sidebar: &Sidebar) {
    let options = &sidebar.options;
    html.push_str("<aside>\n<h2>Settings</h2>\n<form method=\"get\" action=\"/\">\n");
    html.push_str(&format!(
        "<label>Start time (seconds) <input type=\"number\" name=\"start_time\" min=\"0\" step=\"1\" value=\"{}\" required></label>\n",
        options.start_time
    ));
    push_checkbox(html, "autoplay", "Autoplay", options.autoplay);
    push_checkbox(html, "loop", "Loop", options.loop_playback);
    push_checkbox(html, "muted", "Muted", options.muted);
    html.push_str("<button type=\"submit\">Apply</button>\n</form>\n<hr>\n<p><strong>Files:</strong></p>\n");
    for path in &sidebar.file_paths {
        html.push_str(&format!(
            "<code>{}</code>\n",
            escape_html(&path.to_string_lossy())
        ));
    }
    html.push_str("</aside>\n");
}

fn push_checkbox(html: &mut String, name: &str, label: &str, checked: bool) {
    html.push_str(&format!(
        "<label><input type=\"checkbox\" name=\"{}\"{}> {}</label>\n",
        name,
        if checked { " checked" } else { "" },
        label
    ));
}

fn push_region(html: &mut String, region: &PlaybackRegion) {
    let options = &region.options;
    let mut attributes = String::from(" controls");
    for (enabled, attribute) in [
        (options.autoplay, " autoplay"),
        (options.loop_playback, " loop"),
        (options.muted, " muted"),
    ] {
        if enabled {
            attributes.push_str(attribute);
        }
    }

    html.push_str(&format!(
        "<section class=\"region\" data-slot=\"{slot}\">\n<h3>{label}</h3>\n\
         <video src=\"/media/{slot}?v={size}{fragment}\"{attributes} preload=\"metadata\"></video>\n</section>\n",
        slot = region.slot,
        label = escape_html(region.label),
        size = region.content.len(),
        fragment = options.media_fragment(),
        attributes = attributes,
    ));
}

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
