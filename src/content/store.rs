//! In-memory content store.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use slugify::slugify;
use uuid::Uuid;

use crate::content::models::{NewPost, Post, PostType};
use crate::content::LoadError;

#[derive(Debug, Clone)]
struct StoredPost {
    sequence: u64,
    post: Post,
}

/// A thread-safe store of post types and posts.
///
/// Cloning is cheap; clones share the same maps.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    post_types: Arc<DashMap<String, PostType>>,
    posts: Arc<DashMap<String, StoredPost>>,
    /// slug -> post id
    slugs: Arc<DashMap<String, String>>,
    sequence: Arc<AtomicU64>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the default `page` and `post` types unless types already exist.
    pub fn seed_defaults(&self) {
        if !self.post_types.is_empty() {
            return;
        }

        self.insert_post_type(PostType::new("page", "Page", "Pages"));
        self.insert_post_type(PostType::new("post", "Post", "Posts").with_path_prefix("/posts/"));

        tracing::info!(post_types = self.post_types.len(), "Seeded default post types");
    }

    pub fn insert_post_type(&self, post_type: PostType) {
        self.post_types.insert(post_type.id.clone(), post_type);
    }

    /// All post types ordered by id.
    pub fn post_types(&self) -> Vec<PostType> {
        let mut types: Vec<_> = self.post_types.iter().map(|e| e.value().clone()).collect();
        types.sort_by(|a, b| a.id.cmp(&b.id));
        types
    }

    pub fn post_type(&self, id: &str) -> Option<PostType> {
        self.post_types.get(id).map(|e| e.value().clone())
    }

    /// Posts of one type in creation order.
    pub fn posts_of_type(&self, post_type: &str) -> Vec<Post> {
        let mut posts: Vec<_> = self
            .posts
            .iter()
            .filter(|e| e.value().post.post_type == post_type)
            .map(|e| (e.value().sequence, e.value().post.clone()))
            .collect();
        posts.sort_by_key(|(sequence, _)| *sequence);
        posts.into_iter().map(|(_, post)| post).collect()
    }

    pub fn post_by_slug(&self, slug: &str) -> Option<Post> {
        let id = self.slugs.get(slug)?.value().clone();
        self.posts.get(&id).map(|e| e.value().post.clone())
    }

    /// Validate and store a new published post.
    pub fn create_post(&self, input: NewPost) -> Result<Post, LoadError> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(LoadError::Invalid("Title is required".into()));
        }
        if !self.post_types.contains_key(&input.post_type) {
            return Err(LoadError::UnknownPostType(input.post_type));
        }

        let id = Uuid::new_v4().to_string();
        let slug = self.reserve_slug(&slugify!(title), &id);
        let post = Post {
            id,
            title: title.to_string(),
            content: input.content,
            slug,
            status: "published".to_string(),
            post_type: input.post_type,
        };

        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
        self.posts.insert(
            post.id.clone(),
            StoredPost {
                sequence,
                post: post.clone(),
            },
        );

        tracing::info!(id = %post.id, slug = %post.slug, post_type = %post.post_type, "Post created");
        Ok(post)
    }

    /// Claim the first free slug of `base`, `base-2`, `base-3`, ... for `id`.
    fn reserve_slug(&self, base: &str, id: &str) -> String {
        let base = if base.is_empty() { "post" } else { base };
        let mut candidate = base.to_string();
        let mut suffix = 2;
        loop {
            match self.slugs.entry(candidate) {
                Entry::Vacant(slot) => {
                    let slug = slot.key().clone();
                    slot.insert(id.to_string());
                    return slug;
                }
                Entry::Occupied(_) => {
                    candidate = format!("{base}-{suffix}");
                    suffix += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Barrier;
    use std::thread;

    use super::*;

    fn new_post(title: &str, post_type: &str) -> NewPost {
        NewPost {
            title: title.into(),
            content: "body".into(),
            post_type: post_type.into(),
        }
    }

    #[test]
    fn test_slugs_transliterate_titles() {
        let store = ContentStore::new();
        store.seed_defaults();

        let accented = store.create_post(new_post("Café Über", "post")).unwrap();
        let punctuated = store.create_post(new_post("Hello, World!", "post")).unwrap();
        let symbols = store.create_post(new_post("???", "post")).unwrap();

        assert_eq!(accented.slug, "cafe-uber");
        assert_eq!(punctuated.slug, "hello-world");
        assert_eq!(symbols.slug, "post");
        assert_eq!(store.post_by_slug("cafe-uber").unwrap().id, accented.id);
    }

    #[test]
    fn test_concurrent_creates_get_distinct_slugs() {
        const WRITERS: usize = 8;

        for _ in 0..50 {
            let store = ContentStore::new();
            store.seed_defaults();
            let barrier = Barrier::new(WRITERS);

            let posts: Vec<Post> = thread::scope(|scope| {
                let handles: Vec<_> = (0..WRITERS)
                    .map(|_| {
                        scope.spawn(|| {
                            barrier.wait();
                            store.create_post(new_post("Same", "post")).unwrap()
                        })
                    })
                    .collect();
                handles.into_iter().map(|h| h.join().unwrap()).collect()
            });

            let slugs: HashSet<_> = posts.iter().map(|p| p.slug.as_str()).collect();
            assert_eq!(slugs.len(), WRITERS);
            for post in &posts {
                assert_eq!(store.post_by_slug(&post.slug).unwrap().id, post.id);
            }
        }
    }

    #[test]
    fn test_seed_is_idempotent() {
        let store = ContentStore::new();
        store.seed_defaults();
        store.insert_post_type(PostType::new("news", "News item", "News"));
        store.seed_defaults();

        let ids: Vec<_> = store.post_types().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, ["news", "page", "post"]);
        assert_eq!(
            store.post_type("post").unwrap().path_prefix.as_deref(),
            Some("/posts/")
        );
    }

    #[test]
    fn test_create_and_list_posts() {
        let store = ContentStore::new();
        store.seed_defaults();

        let first = store.create_post(new_post("First post", "post")).unwrap();
        store.create_post(new_post("About", "page")).unwrap();
        let second = store.create_post(new_post("First post", "post")).unwrap();

        assert_eq!(first.status, "published");
        assert_eq!(first.slug, "first-post");
        assert_eq!(second.slug, "first-post-2");

        let titles: Vec<_> = store.posts_of_type("post").into_iter().map(|p| p.id).collect();
        assert_eq!(titles, [first.id.clone(), second.id]);
        assert_eq!(store.post_by_slug("first-post").unwrap().id, first.id);
    }

    #[test]
    fn test_create_post_validation() {
        let store = ContentStore::new();
        store.seed_defaults();

        assert_eq!(
            store.create_post(new_post("   ", "post")).unwrap_err(),
            LoadError::Invalid("Title is required".into())
        );
        assert_eq!(
            store.create_post(new_post("Hi", "gallery")).unwrap_err(),
            LoadError::UnknownPostType("gallery".into())
        );
        assert!(store.posts_of_type("post").is_empty());
    }
}
