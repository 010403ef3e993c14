//! Posts of one type, with a link to create another.

use crate::content::models::{Post, PostType};
use crate::render::{el, Node, PostListing, RenderContext, RenderError};
use crate::views::href_with_query;

pub fn render(ctx: &RenderContext) -> Result<Node, RenderError> {
    let listing = ctx.read_as::<PostListing>()?;
    let post_type = &listing.post_type;

    Ok(el("div")
        .child(el("a").attr("href", "/admin").text("Back to overview"))
        .child(
            el("h1")
                .text(format!("{} - ", post_type.plural))
                .child(
                    el("a")
                        .attr(
                            "href",
                            href_with_query("/admin/posts/create", &[("type", post_type.id.as_str())]),
                        )
                        .text(format!("Create {}", post_type.singular)),
                ),
        )
        .child(
            el("div")
                .attr("class", "posts")
                .children(listing.posts.iter().map(|post| post_item(post_type, post))),
        )
        .into())
}

fn post_item(post_type: &PostType, post: &Post) -> Node {
    // Public URL only when the type is published under a prefix.
    let public_url = post_type
        .path_prefix
        .as_deref()
        .filter(|_| !post.slug.is_empty())
        .map(|prefix| el("code").text(format!("{prefix}{}", post.slug)));

    // Without a slug there is no detail page to link to.
    let title: Node = if post.slug.is_empty() {
        el("span").attr("class", "title").text(post.title.as_str()).into()
    } else {
        el("a")
            .attr("href", href_with_query("/post", &[("slug", post.slug.as_str())]))
            .text(post.title.as_str())
            .into()
    };

    let status = (!post.status.is_empty())
        .then(|| el("span").attr("class", "status").text(post.status.as_str()));

    el("div")
        .attr("class", "post-item")
        .attr("data-id", post.id.as_str())
        .child(title)
        .child(status)
        .child(public_url)
        .into()
}
