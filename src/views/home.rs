//! Landing page.

use crate::render::{el, Node, RenderContext, RenderError};

pub fn render(ctx: &RenderContext) -> Result<Node, RenderError> {
    ctx.read()?;

    Ok(el("div")
        .child(el("h1").text("Home"))
        .child(el("a").attr("href", "/admin").text("Go to admin"))
        .into())
}
