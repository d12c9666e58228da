//! Standalone HTML page around a rendered fragment.
//!
//! The renderer only ever produces a fragment meant for embedding. This
//! wrapper is for the CLI's `--standalone` mode: a self-contained page
//! that opens in a browser or prints to PDF with the report styling.

/// Stylesheet for report tables, quotes, citations and severity badges.
pub const REPORT_CSS: &str = r#"body { font-family: system-ui, sans-serif; line-height: 1.6; color: #1f2933; margin: 0; background: #f5f7fa; }
.report { max-width: 960px; margin: 2rem auto; padding: 2rem 3rem; background: #fff; border-radius: 8px; }
.report h1 { border-bottom: 2px solid #e4e7eb; padding-bottom: .4rem; }
.report h2 { margin-top: 2rem; color: #243b53; }
.table-wrapper { overflow-x: auto; margin: 1rem 0; }
.table-wrapper table { border-collapse: collapse; width: 100%; }
.table-wrapper th, .table-wrapper td { border: 1px solid #d9e2ec; padding: .5rem .75rem; text-align: left; vertical-align: top; }
.table-wrapper th { background: #f0f4f8; }
blockquote { border-left: 4px solid #9fb3c8; margin: 1rem 0; padding: .25rem 1rem; color: #486581; }
p.citation { color: #627d98; font-size: .9rem; margin-top: 2rem; }
code { background: #f0f4f8; padding: 0 .25rem; border-radius: 3px; }
.severity-badge { display: inline-block; padding: .1rem .6rem; border-radius: 999px; font-size: .8rem; font-weight: 600; text-transform: uppercase; }
.severity-high { background: #fde8e8; color: #b42318; }
.severity-medium { background: #fef3c7; color: #b45309; }
.severity-low { background: #dcfce7; color: #15803d; }
@media print { body { background: #fff; } .report { margin: 0; padding: 0; max-width: none; } }
"#;

/// Embed `fragment` in a complete HTML page titled `title`.
///
/// The title is escaped; the fragment is inserted as-is.
pub fn wrap_document(fragment: &str, title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>\n{}</style>\n</head>\n<body>\n\
         <article class=\"report\">\n{}\n</article>\n</body>\n</html>\n",
        escape_text(title),
        REPORT_CSS,
        fragment
    )
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_fragment_in_article() {
        let page = wrap_document("<h1>DDR</h1>", "Report");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Report</title>"));
        assert!(page.contains("<article class=\"report\">\n<h1>DDR</h1>\n</article>"));
        assert!(page.contains(".severity-high"));
    }

    #[test]
    fn title_is_escaped() {
        let page = wrap_document("", "Flat <103> & \"B\"");
        assert!(page.contains("<title>Flat &lt;103&gt; &amp; &quot;B&quot;</title>"));
    }
}
