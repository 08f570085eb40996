// ============================================================
// HTML RENDERER
// ============================================================
// Turn the ordered group structure into the dashboard document.
// All user-controlled strings are escaped here and only here.

use crate::application::use_cases::dashboard::DashboardView;
use crate::domain::group::TileGroup;
use crate::domain::tile::Tile;

const STYLE: &str = r#"
  :root { color-scheme: light dark; }
  body { font-family: system-ui, sans-serif; margin: 0; padding: 1.5rem; background: #f4f5f7; color: #1d2330; }
  h1 { margin: 0 0 0.25rem; font-size: 1.4rem; }
  .status { color: #6b7280; font-size: 0.85rem; margin-bottom: 1.5rem; }
  section { margin-bottom: 2rem; }
  h2 { font-size: 1.05rem; border-bottom: 1px solid #d6d9e0; padding-bottom: 0.3rem; }
  .tiles { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 0.75rem; }
  .tile { background: #fff; border: 1px solid #e0e3ea; border-radius: 8px; padding: 0.75rem 1rem; }
  .tile .icon { margin-right: 0.4rem; }
  .tile a { color: #1a56b0; text-decoration: none; font-weight: 600; }
  .tile a:hover { text-decoration: underline; }
  .tile .reference { display: block; font-size: 0.8rem; margin-top: 0.3rem; }
  .tile p { margin: 0.4rem 0 0; font-size: 0.85rem; color: #4b5563; }
"#;

/// Escape a user-controlled string for embedding in markup or attributes.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the full dashboard document from one pipeline pass.
pub fn render_dashboard(view: &DashboardView) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(&view.page_title)));
    html.push_str(&format!("<style>{}</style>\n", STYLE));
    html.push_str("</head>\n<body>\n");

    html.push_str(&format!("<h1>{}</h1>\n", escape(&view.page_title)));
    html.push_str(&format!(
        "<div class=\"status\">{} &middot; {} tiles{} &middot; generated {}</div>\n",
        escape(&view.source_name),
        view.tiles.len(),
        if view.fallback_active {
            " (fallback dataset)"
        } else {
            ""
        },
        escape(&view.generated_at),
    ));

    for group in view.groups() {
        render_group(&mut html, &group);
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_group(html: &mut String, group: &TileGroup<'_>) {
    html.push_str("<section>\n");
    html.push_str(&format!("<h2>{}</h2>\n", escape(&group.tag)));
    html.push_str("<div class=\"tiles\">\n");
    for tile in &group.members {
        render_tile(html, tile);
    }
    html.push_str("</div>\n</section>\n");
}

fn render_tile(html: &mut String, tile: &Tile) {
    html.push_str("<div class=\"tile\">");

    if !tile.icon.is_empty() {
        html.push_str(&format!("<span class=\"icon\">{}</span>", escape(&tile.icon)));
    }

    let title = escape(tile.title());
    if tile.url.is_empty() {
        html.push_str(&format!("<span>{}</span>", title));
    } else {
        html.push_str(&format!(
            "<a href=\"{}\">{}</a>",
            escape(&tile.url),
            title
        ));
    }

    if !tile.reference_url.is_empty() {
        html.push_str(&format!(
            "<a class=\"reference\" href=\"{}\">Reference</a>",
            escape(&tile.reference_url)
        ));
    }

    if !tile.description().is_empty() {
        html.push_str(&format!("<p>{}</p>", escape(tile.description())));
    }

    html.push_str("</div>\n");
}
