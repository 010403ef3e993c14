//! Admin overview: one link per post type.

use crate::content::models::PostType;
use crate::render::{el, Node, RenderContext, RenderError};
use crate::views::href_with_query;

pub fn render(ctx: &RenderContext) -> Result<Node, RenderError> {
    let types = ctx.read_as::<Vec<PostType>>()?;

    Ok(el("div")
        .attr("class", "post-types")
        .children(types.iter().map(type_link))
        .into())
}

fn type_link(post_type: &PostType) -> Node {
    el("div")
        .attr("class", "admin-link")
        .child(
            el("a")
                .attr("href", href_with_query("/admin/posts", &[("type", post_type.id.as_str())]))
                .text(format!("{} - {}", post_type.singular, post_type.plural)),
        )
        .into()
}
