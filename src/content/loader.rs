//! Route data loading from the content store.

use url::form_urlencoded;

use crate::content::models::{FlashMessage, PostType};
use crate::content::store::ContentStore;
use crate::content::LoadError;
use crate::render::{PostCreateForm, PostListing, RouteData};
use crate::views::ViewId;

/// Post type listed when a request names none.
pub const DEFAULT_POST_TYPE: &str = "post";

/// Query parameters the loader understands. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteQuery {
    pub post_type: Option<String>,
    pub slug: Option<String>,
}

impl RouteQuery {
    /// Parse a raw query string (`type=blog&slug=...`). Empty values count
    /// as absent; the first occurrence of a key wins.
    pub fn parse(query: &str) -> Self {
        let mut parsed = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            let slot = match &*key {
                "type" => &mut parsed.post_type,
                "slug" => &mut parsed.slug,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        parsed
    }
}

/// Build the payload `view` expects. `flashes` are the messages carried over
/// from the previous request; only the create form shows them.
pub fn load_route_data(
    view: ViewId,
    query: &RouteQuery,
    flashes: &[FlashMessage],
    store: &ContentStore,
) -> Result<RouteData, LoadError> {
    let data = match view {
        ViewId::Home => RouteData::Home,
        ViewId::Admin => RouteData::PostTypeCatalog(store.post_types()),
        ViewId::PostList => {
            let post_type = requested_post_type(query, store)?;
            let posts = store.posts_of_type(&post_type.id);
            RouteData::PostList(PostListing { post_type, posts })
        }
        ViewId::PostCreate => {
            let post_type = requested_post_type(query, store)?;
            let errors = flashes.to_vec();
            RouteData::PostCreateForm(PostCreateForm { post_type, errors })
        }
        ViewId::PostDetail => {
            let slug = query
                .slug
                .as_deref()
                .ok_or_else(|| LoadError::Invalid("missing `slug` query parameter".into()))?;
            let post = store
                .post_by_slug(slug)
                .ok_or_else(|| LoadError::PostNotFound(slug.to_string()))?;
            RouteData::PostDetail(post)
        }
    };

    tracing::debug!(view = view.name(), kind = %data.kind(), "Route data loaded");
    Ok(data)
}

fn requested_post_type(
    query: &RouteQuery,
    store: &ContentStore,
) -> Result<PostType, LoadError> {
    let id = query.post_type.as_deref().unwrap_or(DEFAULT_POST_TYPE);
    store
        .post_type(id)
        .ok_or_else(|| LoadError::UnknownPostType(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::models::{FlashLevel, NewPost};
    use crate::render::RouteDataKind;

    fn seeded() -> ContentStore {
        let store = ContentStore::new();
        store.seed_defaults();
        store
    }

    #[test]
    fn test_parse_query() {
        let query = RouteQuery::parse("type=page&error=Title+is+required&type=post&x=1&slug=");
        assert_eq!(
            query,
            RouteQuery {
                post_type: Some("page".into()),
                slug: None,
            }
        );
        assert_eq!(RouteQuery::parse(""), RouteQuery::default());
    }

    #[test]
    fn test_each_view_gets_its_kind() {
        let store = seeded();
        store
            .create_post(NewPost {
                title: "Hello".into(),
                content: String::new(),
                post_type: "post".into(),
            })
            .unwrap();
        let query = RouteQuery::parse("slug=hello");

        for view in ViewId::ALL {
            let data = load_route_data(view, &query, &[], &store).unwrap();
            assert_eq!(data.kind(), view.accepts());
        }
    }

    #[test]
    fn test_post_list_defaults_to_post_type() {
        let data = load_route_data(ViewId::PostList, &RouteQuery::default(), &[], &seeded()).unwrap();
        match data {
            RouteData::PostList(listing) => assert_eq!(listing.post_type.id, "post"),
            other => panic!("unexpected {:?}", other.kind()),
        }
    }

    #[test]
    fn test_unknown_post_type() {
        let query = RouteQuery::parse("type=gallery");
        assert_eq!(
            load_route_data(ViewId::PostCreate, &query, &[], &seeded()).unwrap_err(),
            LoadError::UnknownPostType("gallery".into())
        );
    }

    #[test]
    fn test_create_form_carries_flashes() {
        let flashes = [
            FlashMessage::error("Title is required"),
            FlashMessage::new(FlashLevel::Warning, "Draft not saved"),
        ];
        let query = RouteQuery::parse("type=page&error=Injected");
        let data = load_route_data(ViewId::PostCreate, &query, &flashes, &seeded()).unwrap();
        assert_eq!(data.kind(), RouteDataKind::PostCreateForm);
        let RouteData::PostCreateForm(form) = data else {
            unreachable!()
        };
        assert_eq!(form.errors, flashes);
    }

    #[test]
    fn test_flashes_ignored_by_other_views() {
        let flashes = [FlashMessage::error("Title is required")];
        let data = load_route_data(ViewId::PostList, &RouteQuery::default(), &flashes, &seeded()).unwrap();
        assert_eq!(data.kind(), RouteDataKind::PostList);
    }

    #[test]
    fn test_post_detail_requires_known_slug() {
        let store = seeded();
        assert!(matches!(
            load_route_data(ViewId::PostDetail, &RouteQuery::default(), &[], &store),
            Err(LoadError::Invalid(_))
        ));
        assert_eq!(
            load_route_data(ViewId::PostDetail, &RouteQuery::parse("slug=nope"), &[], &store).unwrap_err(),
            LoadError::PostNotFound("nope".into())
        );
    }
}
