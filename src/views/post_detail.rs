//! A single post.

use crate::content::models::Post;
use crate::render::{el, Node, RenderContext, RenderError};

pub fn render(ctx: &RenderContext) -> Result<Node, RenderError> {
    let post = ctx.read_as::<Post>()?;

    let body = (!post.content.is_empty())
        .then(|| el("div").attr("class", "content").text(post.content.as_str()));

    Ok(el("article")
        .attr("class", "post")
        .child(el("h1").text(post.title.as_str()))
        .child(body)
        .into())
}
