//! Post creation form.

use crate::content::models::FlashMessage;
use crate::render::{el, Node, PostCreateForm, RenderContext, RenderError};

const FORM_STYLE: &str = "display:flex;flex-direction:column;align-items:start";

pub fn render(ctx: &RenderContext) -> Result<Node, RenderError> {
    let form = ctx.read_as::<PostCreateForm>()?;

    let errors = (!form.errors.is_empty())
        .then(|| el("ul").attr("class", "errors").children(form.errors.iter().map(error_item)));

    Ok(el("div")
        .child(el("h1").text(format!("Create {}", form.post_type.singular)))
        .child(
            el("form")
                .attr("action", "/admin/posts")
                .attr("method", "post")
                .attr("style", FORM_STYLE)
                .child(
                    el("input")
                        .attr("type", "hidden")
                        .attr("name", "post_type")
                        .attr("value", form.post_type.id.as_str()),
                )
                .child(
                    el("input")
                        .attr("type", "text")
                        .attr("name", "title")
                        .attr("placeholder", "Title"),
                )
                .child(el("textarea").attr("name", "content").attr("placeholder", "Content"))
                .child(errors)
                .child(el("button").attr("type", "submit").text("Add")),
        )
        .into())
}

fn error_item(error: &FlashMessage) -> Node {
    el("li")
        .child(el("b").text(error.level.to_string()))
        .text(format!(": {}", error.message))
        .into()
}
