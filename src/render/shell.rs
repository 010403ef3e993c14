//! Document shell: the static chrome wrapped around every route.

use crate::config::{NavLink, SiteConfig};
use crate::render::markup::{el, Node};

#[derive(Debug, Clone)]
pub struct DocumentShell {
    title: String,
    nav: Vec<NavLink>,
}

impl DocumentShell {
    pub fn new(title: impl Into<String>, nav: Vec<NavLink>) -> Self {
        Self {
            title: title.into(),
            nav,
        }
    }

    pub fn from_config(site: &SiteConfig) -> Self {
        Self::new(site.title.clone(), site.nav.clone())
    }

    /// Wrap `content` in the document root. `content` lands verbatim in the
    /// single `<main>` slot.
    pub fn render(&self, content: Node) -> Node {
        let nav = if self.nav.is_empty() {
            Node::empty()
        } else {
            el("nav")
                .children(
                    self.nav
                        .iter()
                        .map(|link| el("a").attr("href", link.href.as_str()).text(link.label.as_str())),
                )
                .into()
        };

        el("html")
            .child(
                el("head")
                    .child(el("meta").attr("charset", "utf-8"))
                    .child(el("title").text(self.title.as_str())),
            )
            .child(
                el("body")
                    .child(el("header").child(el("h1").text(self.title.as_str())).child(nav))
                    .child(el("main").child(content)),
            )
            .into()
    }
}

impl Default for DocumentShell {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::markup::text;

    #[test]
    fn test_wraps_content_in_main_slot() {
        let shell = DocumentShell::new("Back office", vec![NavLink::new("Admin", "/admin")]);
        let html = shell.render(el("p").text("hello").into()).to_html();

        assert_eq!(
            html,
            "<html><head><meta charset=\"utf-8\"><title>Back office</title></head>\
             <body><header><h1>Back office</h1><nav><a href=\"/admin\">Admin</a></nav></header>\
             <main><p>hello</p></main></body></html>"
        );
    }

    #[test]
    fn test_no_nav_when_empty() {
        let shell = DocumentShell::new("T", Vec::new());
        let html = shell.render(text("x")).to_html();
        assert!(!html.contains("<nav>"));
        assert!(html.contains("<main>x</main>"));
    }
}
