//! Post workflow commands that go beyond generic CRUD.

use anyhow::Result;
use openshop_api::{
    ListQuery, PostsByAuthorData, PostsPublishData, PostsPublishedData, PostsUnpublishData,
    PublicApi,
};

use super::{connect, print_json};

/// Flip a post to published.
pub fn publish(
    id: i64,
    config_path: &std::path::Path,
    context_override: Option<&str>,
) -> Result<()> {
    let (_, _, client) = connect(config_path, context_override)?;
    let post = PublicApi::new(client).posts_publish(&PostsPublishData { id })?;
    println!("post {} published.", id);
    print_json(&post)
}

/// Flip a post back to draft.
pub fn unpublish(
    id: i64,
    config_path: &std::path::Path,
    context_override: Option<&str>,
) -> Result<()> {
    let (_, _, client) = connect(config_path, context_override)?;
    let post = PublicApi::new(client).posts_unpublish(&PostsUnpublishData { id })?;
    println!("post {} unpublished.", id);
    print_json(&post)
}

/// List only published posts.
pub fn published(
    query: ListQuery,
    config_path: &std::path::Path,
    context_override: Option<&str>,
) -> Result<()> {
    let (_, _, client) = connect(config_path, context_override)?;
    let page = PublicApi::new(client).posts_published(&PostsPublishedData {
        ordering: query.ordering,
        page: query.page,
        search: query.search,
    })?;
    print_json(&page)
}

/// List posts by a single author.
pub fn by_author(
    author_id: i64,
    query: ListQuery,
    config_path: &std::path::Path,
    context_override: Option<&str>,
) -> Result<()> {
    let (_, _, client) = connect(config_path, context_override)?;
    let page = PublicApi::new(client).posts_by_author(&PostsByAuthorData {
        author_id: Some(author_id),
        ordering: query.ordering,
        page: query.page,
        search: query.search,
    })?;
    print_json(&page)
}
