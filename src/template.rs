//! Template interpolation for page links
//!
//! Renders each link through a `{{ variable }}` template so pages can keep
//! their own markup. Available variables:
//!
//! | variable     | value                                             |
//! |--------------|---------------------------------------------------|
//! | `label`      | display text                                      |
//! | `href`       | target link                                       |
//! | `kind`       | `first`, `previous`, `page`, `next` or `last`     |
//! | `class`      | link class, empty when none                       |
//! | `current`    | `true` or `false`                                 |
//! | `class_attr` | ` class="…"` when the link has a class, else empty |

use crate::error::{Error, Result};
use crate::pagination::PageLink;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Regex for matching template variables: {{ variable }}
static TEMPLATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([a-zA-Z_][a-zA-Z0-9_]*)\s*\}\}").expect("template regex is valid")
});

/// Variables a link template may reference
pub const VARIABLES: &[&str] = &["label", "href", "kind", "class", "current", "class_attr"];

/// A validated per-link template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTemplate {
    source: String,
}

impl LinkTemplate {
    /// Parse a template, rejecting unknown variables
    pub fn new(source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        let unknown: Vec<String> = extract_variables(&source)
            .into_iter()
            .filter(|var| !VARIABLES.contains(&var.as_str()))
            .collect();

        if !unknown.is_empty() {
            return Err(Error::undefined_var(unknown.join(", ")));
        }
        if source.matches("{{").count() != TEMPLATE_REGEX.find_iter(&source).count() {
            return Err(Error::template(format!(
                "Malformed placeholder in template: {source}"
            )));
        }

        Ok(Self { source })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Render a single link
    pub fn render_link(&self, link: &PageLink) -> String {
        TEMPLATE_REGEX
            .replace_all(&self.source, |caps: &Captures| {
                link_variable(link, &caps[1]).unwrap_or_default()
            })
            .into_owned()
    }

    /// Render every link and concatenate the results
    pub fn render_all(&self, links: &[PageLink]) -> String {
        links.iter().map(|link| self.render_link(link)).collect()
    }
}

/// Look up a template variable for a link
fn link_variable(link: &PageLink, name: &str) -> Option<String> {
    let value = match name {
        "label" => link.label().to_string(),
        "href" => link.href().to_string(),
        "kind" => link.kind().as_str().to_string(),
        "class" => link.class().unwrap_or_default().to_string(),
        "current" => link.is_current().to_string(),
        "class_attr" => link
            .class()
            .map(|class| format!(" class=\"{class}\""))
            .unwrap_or_default(),
        _ => return None,
    };
    Some(value)
}

/// Render links between an opening and closing fragment
///
/// ```
/// use pagelinks::pagination::PageSet;
/// use pagelinks::template::render_list;
///
/// let mut pages = PageSet::new(10)?;
/// pages.build();
/// let html = render_list(
///     "<ul class=\"pagination\">",
///     "\n\t<li{{ class_attr }}><a href=\"{{ href }}\">{{ label }}</a></li>",
///     "\n</ul>",
///     pages.links(),
/// )?;
/// assert_eq!(
///     html,
///     "<ul class=\"pagination\">\n\t<li class=\"actual\"><a href=\"\">1</a></li>\n</ul>"
/// );
/// # Ok::<(), pagelinks::Error>(())
/// ```
pub fn render_list(open: &str, item: &str, close: &str, links: &[PageLink]) -> Result<String> {
    let template = LinkTemplate::new(item)?;
    let mut out = String::from(open);
    out.push_str(&template.render_all(links));
    out.push_str(close);
    Ok(out)
}

/// Extract all variable names from a template
pub fn extract_variables(template: &str) -> Vec<String> {
    TEMPLATE_REGEX
        .captures_iter(template)
        .map(|cap| cap[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LinkKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_simple_substitution() {
        let template = LinkTemplate::new("<a href=\"{{ href }}\">{{ label }}</a>").unwrap();
        let link = PageLink::page(3, "/posts/page/3", false);
        assert_eq!(
            template.render_link(&link),
            "<a href=\"/posts/page/3\">3</a>"
        );
    }

    #[test]
    fn test_class_attr() {
        let template = LinkTemplate::new("<li{{ class_attr }}>{{ label }}</li>").unwrap();

        let current = PageLink::page(2, "page/2", true);
        assert_eq!(template.render_link(&current), "<li class=\"actual\">2</li>");

        let plain = PageLink::page(3, "page/3", false);
        assert_eq!(template.render_link(&plain), "<li>3</li>");

        let next = PageLink::navigation(LinkKind::Next, "→", "page/3");
        assert_eq!(template.render_link(&next), "<li class=\"next\">→</li>");
    }

    #[test]
    fn test_kind_current_and_class() {
        let template = LinkTemplate::new("{{kind}}|{{ current }}|{{  class  }}").unwrap();
        assert_eq!(
            template.render_link(&PageLink::page(1, "", true)),
            "page|true|actual"
        );
        assert_eq!(
            template.render_link(&PageLink::navigation(LinkKind::First, "⇤", "")),
            "first|false|first"
        );
        assert_eq!(template.render_link(&PageLink::page(4, "", false)), "page|false|");
    }

    #[test]
    fn test_undefined_variable() {
        let err = LinkTemplate::new("{{ title }} {{ link }} {{ label }}").unwrap_err();
        assert!(matches!(err, Error::UndefinedVariable { .. }));
        assert!(err.to_string().contains("title, link"));
    }

    #[test]
    fn test_malformed_placeholder() {
        let err = LinkTemplate::new("<a>{{ label</a>").unwrap_err();
        assert!(matches!(err, Error::Template { .. }));
    }

    #[test]
    fn test_malformed_after_valid_placeholder() {
        assert!(LinkTemplate::new("{{ label }} {{ href").is_err());
    }

    #[test]
    fn test_no_templates() {
        let template = LinkTemplate::new("<hr>").unwrap();
        assert_eq!(template.render_link(&PageLink::page(1, "", true)), "<hr>");
        assert!(extract_variables(template.source()).is_empty());
    }

    #[test]
    fn test_render_all_preserves_order() {
        let template = LinkTemplate::new("[{{ label }}]").unwrap();
        let links = vec![
            PageLink::navigation(LinkKind::Previous, "←", ""),
            PageLink::page(1, "", false),
            PageLink::page(2, "page/2", true),
        ];
        assert_eq!(template.render_all(&links), "[←][1][2]");
        assert_eq!(template.render_all(&[]), "");
    }

    #[test]
    fn test_extract_variables() {
        let vars = extract_variables("{{ href }} and {{label}}");
        assert_eq!(vars, vec!["href", "label"]);
    }
}
