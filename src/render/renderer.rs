//! Static renderer: one synchronous pass from resolved module + data to HTML.

use std::fmt;
use std::time::Instant;

use crate::observability::metrics;
use crate::render::context::RenderContext;
use crate::render::data::RouteData;
use crate::render::markup::{el, Node};
use crate::render::shell::DocumentShell;
use crate::render::RenderError;
use crate::routing::RouteModule;

const DOCTYPE: &str = "<!DOCTYPE html>";

/// A complete serialized document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    fn document(root: &Node) -> Self {
        let mut out = String::from(DOCTYPE);
        root.write_html(&mut out);
        Self(out)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticRenderer {
    shell: DocumentShell,
}

impl StaticRenderer {
    pub fn new(shell: DocumentShell) -> Self {
        Self { shell }
    }

    /// Render `module` with `data` into a full document.
    ///
    /// Every call gets its own [`RenderContext`]; the result depends only on
    /// the module, the data and the shell. Any failure fails the whole pass.
    pub fn render(&self, module: &RouteModule, data: RouteData) -> Result<Markup, RenderError> {
        let start = Instant::now();
        let view = module.view();

        let result = self.render_pass(module, data);

        metrics::record_render(view.name(), result.is_ok(), start);
        match &result {
            Ok(markup) => tracing::debug!(
                location = %module.location(),
                view = view.name(),
                bytes = markup.as_str().len(),
                elapsed = ?start.elapsed(),
                "Render complete"
            ),
            Err(e) => tracing::warn!(
                location = %module.location(),
                view = view.name(),
                error = %e,
                "Render failed"
            ),
        }
        result
    }

    fn render_pass(&self, module: &RouteModule, data: RouteData) -> Result<Markup, RenderError> {
        let view = module.view();
        if data.kind() != view.accepts() {
            return Err(RenderError::RenderFailure(format!(
                "view `{}` expects {} data, received {}",
                view.name(),
                view.accepts(),
                data.kind()
            )));
        }

        let ctx = RenderContext::new();
        ctx.publish(data)?;

        let content = view.render(&ctx)?;
        Ok(Markup::document(&self.shell.render(content)))
    }

    /// A plain status document (404, 500, ...) in the same shell.
    pub fn render_status(&self, status: u16, message: &str) -> Markup {
        let content: Node = el("div")
            .attr("class", "status")
            .child(el("h2").text(status.to_string()))
            .child(el("p").text(message))
            .into();
        Markup::document(&self.shell.render(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::models::{Post, PostType};
    use crate::render::data::PostListing;
    use crate::routing::ModuleLocation;
    use crate::views::ViewId;

    fn module(location: &str, view: ViewId) -> RouteModule {
        RouteModule::new(ModuleLocation::parse(location).unwrap(), view)
    }

    fn listing(type_id: &str, titles: &[&str]) -> RouteData {
        RouteData::PostList(PostListing {
            post_type: PostType::new(type_id, "Post", "Posts"),
            posts: titles
                .iter()
                .enumerate()
                .map(|(i, title)| Post {
                    id: i.to_string(),
                    title: title.to_string(),
                    content: String::new(),
                    slug: title.to_lowercase(),
                    status: "published".into(),
                    post_type: type_id.into(),
                })
                .collect(),
        })
    }

    #[test]
    fn test_render_is_repeatable() {
        let renderer = StaticRenderer::default();
        let module = module("admin/posts", ViewId::PostList);

        let first = renderer.render(&module, listing("blog", &["One", "Two"])).unwrap();
        let second = renderer.render(&module, listing("blog", &["One", "Two"])).unwrap();

        assert_eq!(first, second);
        assert!(first.as_str().starts_with("<!DOCTYPE html><html>"));
    }

    #[test]
    fn test_kind_mismatch_fails_whole_pass() {
        let renderer = StaticRenderer::default();
        let err = renderer
            .render(&module("admin", ViewId::Admin), listing("blog", &[]))
            .unwrap_err();

        assert_eq!(
            err,
            RenderError::RenderFailure(
                "view `admin` expects post_type_catalog data, received post_list".into()
            )
        );
    }

    #[test]
    fn test_concurrent_passes_are_isolated() {
        let renderer = StaticRenderer::default();
        let module = module("admin/posts", ViewId::PostList);

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    let renderer = &renderer;
                    let module = &module;
                    scope.spawn(move || {
                        let type_id = format!("type{i}");
                        let title = format!("Title{i}");
                        let markup = renderer
                            .render(module, listing(&type_id, &[title.as_str()]))
                            .unwrap();
                        (i, markup)
                    })
                })
                .collect();

            for handle in handles {
                let (i, markup) = handle.join().unwrap();
                assert!(markup.as_str().contains(&format!("type=type{i}\"")));
                assert!(markup.as_str().contains(&format!(">Title{i}<")));
                for other in (0..8).filter(|o| *o != i) {
                    assert!(!markup.as_str().contains(&format!(">Title{other}<")));
                }
            }
        });
    }

    #[test]
    fn test_status_document() {
        let renderer = StaticRenderer::default();
        let markup = renderer.render_status(404, "Not found");
        assert!(markup.as_str().contains("<h2>404</h2><p>Not found</p>"));
        assert!(markup.as_str().contains("<title>Admin</title>"));
    }
}
