//! Integration tests for the public API
//!
//! Exercises the full flow: configuration → build → structured/HTML/template output

use pagelinks::config::load_config_from_str;
use pagelinks::output::{to_json_pretty, HtmlRenderer};
use pagelinks::template::LinkTemplate;
use pagelinks::{BoundaryMode, LinkKind, PageSet};
use pretty_assertions::assert_eq;
use test_case::test_case;

fn admin_posts() -> PageSet {
    let mut pages = PageSet::new(256).unwrap();
    pages
        .set_current_page(7)
        .set_page_size(10)
        .set_neighbor_range(5)
        .set_path_segment("page/")
        .set_link_prefix("/admin/posts/");
    pages.build();
    pages
}

// ============================================================================
// End-to-end rendering
// ============================================================================

#[test]
fn test_admin_posts_html() {
    let html = admin_posts().to_html();

    let mut expected = String::from("<ul class=\"paginator\">");
    expected.push_str("\n\t<li class=\"first\"><a href=\"/admin/posts/\">⇤</a></li>");
    expected.push_str("\n\t<li class=\"previous\"><a href=\"/admin/posts/page/6\">←</a></li>");
    for n in 2..=12 {
        let class = if n == 7 { " class=\"actual\"" } else { "" };
        expected.push_str(&format!(
            "\n\t<li{class}><a href=\"/admin/posts/page/{n}\">{n}</a></li>"
        ));
    }
    expected.push_str("\n\t<li class=\"next\"><a href=\"/admin/posts/page/8\">→</a></li>");
    expected.push_str("\n\t<li class=\"last\"><a href=\"/admin/posts/page/26\">⇥</a></li>");
    expected.push_str("\n</ul>\n");

    assert_eq!(html, expected);
}

#[test]
fn test_admin_posts_json() {
    let json = to_json_pretty(&admin_posts()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let pages = value["pages"].as_array().unwrap();

    assert_eq!(pages.len(), 15);
    assert_eq!(pages[0]["label"], "⇤");
    assert_eq!(pages[0]["href"], "/admin/posts/");
    assert_eq!(pages[0]["class"], "first");
    assert!(pages[2].get("class").is_none());
    assert_eq!(pages[7]["class"], "actual");
}

#[test]
fn test_admin_posts_template() {
    let template =
        LinkTemplate::new("<li{{ class_attr }}><a href=\"{{ href }}\">{{ label }}</a></li>")
            .unwrap();
    let pages = admin_posts();

    // The template reproduces the built-in item markup
    let items = pages
        .links()
        .iter()
        .map(|link| format!("\n\t{}", template.render_link(link)))
        .collect::<String>();
    let wrapped = format!("<ul class=\"paginator\">{items}\n</ul>\n");
    assert_eq!(wrapped, pages.to_html());
}

#[test]
fn test_custom_renderer_on_built_links() {
    let mut pages = PageSet::new(3).unwrap();
    pages.build();

    let html = HtmlRenderer::new()
        .with_list_class(Some("pagination"))
        .with_current_class("active")
        .render(pages.links());
    assert_eq!(
        html,
        "<ul class=\"pagination\">\n\t<li class=\"active\"><a href=\"\">1</a></li>\n</ul>\n"
    );
}

// ============================================================================
// Properties
// ============================================================================

#[test_case(1, 1, 5; "single page")]
#[test_case(256, 1, 5; "first page")]
#[test_case(256, 26, 5; "last page")]
#[test_case(256, 13, 3; "middle page")]
#[test_case(99, 4, 1; "narrow range")]
#[test_case(1000, 50, 100; "range wider than page count")]
fn test_structural_invariants(total: i64, current: i64, range: i64) {
    let mut pages = PageSet::new(total).unwrap();
    pages.set_current_page(current).set_neighbor_range(range);
    pages.build();

    let count = pages.page_count();
    let current = pages.current_page();
    let kinds: Vec<LinkKind> = pages.links().iter().map(|l| l.kind()).collect();

    assert_eq!(kinds.contains(&LinkKind::First), current > 1);
    assert_eq!(kinds.contains(&LinkKind::Previous), current > 1);
    assert_eq!(kinds.contains(&LinkKind::Next), current < count);
    assert_eq!(kinds.contains(&LinkKind::Last), current < count);

    let numbers: Vec<u64> = pages
        .links()
        .iter()
        .filter(|l| l.kind() == LinkKind::Page)
        .map(|l| l.label().parse().unwrap())
        .collect();
    assert!(numbers.windows(2).all(|w| w[1] == w[0] + 1));
    assert!(numbers.iter().all(|n| (1..=count).contains(n)));

    for link in pages.links() {
        if link.label() == "1" {
            assert_eq!(link.href(), "");
        }
    }
}

#[test]
fn test_rebuild_after_reconfiguration() {
    let mut pages = admin_posts();
    pages.set_current_page(1).set_boundary(BoundaryMode::Exclusive);
    pages.build();

    let labels: Vec<&str> = pages.links().iter().map(|l| l.label()).collect();
    assert_eq!(labels, vec!["1", "2", "3", "4", "5", "→", "⇥"]);
    assert_eq!(pages.links()[6].href(), "/admin/posts/page/26");
}

#[test]
fn test_config_driven_page_set() {
    let config = load_config_from_str(
        "total_items: 95\npage_size: 20\ncurrent_page: 3\nneighbor_range: 1\nlink_prefix: /shop/\npath_segment: \"?page=\"\n",
    )
    .unwrap();
    let mut pages = PageSet::with_config(config).unwrap();
    pages.build();

    let hrefs: Vec<&str> = pages.links().iter().map(|l| l.href()).collect();
    assert_eq!(
        hrefs,
        vec![
            "/shop/",
            "/shop/?page=2",
            "/shop/?page=2",
            "/shop/?page=3",
            "/shop/?page=4",
            "/shop/?page=4",
            "/shop/?page=5",
        ]
    );
}
