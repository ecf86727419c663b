use std::sync::OnceLock;

use regex::Regex;

use super::SiteError;

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Text of the first `# ` heading line in the document.
pub fn extract_title(markdown: &str) -> Result<String, SiteError> {
    static TITLE: OnceLock<Regex> = OnceLock::new();
    let title = TITLE.get_or_init(|| Regex::new(r"(?m)^# (.*)$").expect("Invalid title regex"));

    title
        .captures(markdown)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim_end_matches('\r').to_string())
        .ok_or(SiteError::MissingTitle)
}

/// Fills the title and content placeholders of a page template.
pub fn render_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
}

/// Points root-relative `href` and `src` attributes at `base_path`.
pub fn rewrite_base_path(html: &str, base_path: &str) -> String {
    if base_path == "/" {
        return html.to_string();
    }
    html.replace(r#"href="/"#, &format!(r#"href="{base_path}"#))
        .replace(r#"src="/"#, &format!(r#"src="{base_path}"#))
}
