//! Typed operations for the posts resource.
//!
//! Each endpoint has a request-shape (`…Data`) / response-shape (`…Response`)
//! pair; [`PublicApi`] methods take the Data struct and return the Response
//! type. Query-only shapes derive `Serialize` so they go straight to the
//! transport's query encoder.

use openshop_client::Client;
use openshop_core::ApiError;
use serde::Serialize;

use crate::model::{PaginatedPostList, PatchedPost, Post, PostWritable};

// ── Request / response shapes ───────────────────────────────────────

/// Request shape for the post list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PostsListData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

pub type PostsListResponse = PaginatedPostList;

/// Request shape for post creation.
#[derive(Debug, Clone, PartialEq)]
pub struct PostsCreateData {
    pub body: PostWritable,
}

pub type PostsCreateResponse = Post;

/// Request shape for fetching a single post.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostsRetrieveData {
    pub id: i64,
}

pub type PostsRetrieveResponse = Post;

/// Request shape for replacing a post.
#[derive(Debug, Clone, PartialEq)]
pub struct PostsUpdateData {
    pub id: i64,
    pub body: PostWritable,
}

pub type PostsUpdateResponse = Post;

/// Request shape for partially updating a post.
#[derive(Debug, Clone, PartialEq)]
pub struct PostsPartialUpdateData {
    pub id: i64,
    pub body: PatchedPost,
}

pub type PostsPartialUpdateResponse = Post;

/// Request shape for deleting a post.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostsDestroyData {
    pub id: i64,
}

pub type PostsDestroyResponse = ();

/// Request shape for the publish action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostsPublishData {
    pub id: i64,
}

pub type PostsPublishResponse = Post;

/// Request shape for the unpublish action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostsUnpublishData {
    pub id: i64,
}

pub type PostsUnpublishResponse = Post;

/// Request shape for listing posts by author.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PostsByAuthorData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

pub type PostsByAuthorResponse = PaginatedPostList;

/// Request shape for listing published posts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PostsPublishedData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

pub type PostsPublishedResponse = PaginatedPostList;

// ── PublicApi ───────────────────────────────────────────────────────

/// Typed client for the public module.
#[derive(Debug, Clone)]
pub struct PublicApi {
    client: Client,
}

impl PublicApi {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// `GET /api/public_api/posts/`
    pub fn posts_list(&self, data: &PostsListData) -> Result<PostsListResponse, ApiError> {
        self.client.get("/api/public_api/posts/", Some(data))
    }

    /// `POST /api/public_api/posts/`
    pub fn posts_create(&self, data: &PostsCreateData) -> Result<PostsCreateResponse, ApiError> {
        self.client.post("/api/public_api/posts/", &data.body)
    }

    /// `GET /api/public_api/posts/{id}/`
    pub fn posts_retrieve(
        &self,
        data: &PostsRetrieveData,
    ) -> Result<PostsRetrieveResponse, ApiError> {
        self.client
            .get(&format!("/api/public_api/posts/{}/", data.id), None::<&()>)
    }

    /// `PUT /api/public_api/posts/{id}/`
    pub fn posts_update(&self, data: &PostsUpdateData) -> Result<PostsUpdateResponse, ApiError> {
        self.client
            .put(&format!("/api/public_api/posts/{}/", data.id), &data.body)
    }

    /// `PATCH /api/public_api/posts/{id}/`
    pub fn posts_partial_update(
        &self,
        data: &PostsPartialUpdateData,
    ) -> Result<PostsPartialUpdateResponse, ApiError> {
        self.client
            .patch(&format!("/api/public_api/posts/{}/", data.id), &data.body)
    }

    /// `DELETE /api/public_api/posts/{id}/`
    pub fn posts_destroy(&self, data: &PostsDestroyData) -> Result<PostsDestroyResponse, ApiError> {
        self.client.delete(&format!("/api/public_api/posts/{}/", data.id))
    }

    /// `POST /api/public_api/posts/{id}/publish/` — body-less action.
    pub fn posts_publish(&self, data: &PostsPublishData) -> Result<PostsPublishResponse, ApiError> {
        self.client
            .post_empty(&format!("/api/public_api/posts/{}/publish/", data.id))
    }

    /// `POST /api/public_api/posts/{id}/unpublish/` — body-less action.
    pub fn posts_unpublish(
        &self,
        data: &PostsUnpublishData,
    ) -> Result<PostsUnpublishResponse, ApiError> {
        self.client
            .post_empty(&format!("/api/public_api/posts/{}/unpublish/", data.id))
    }

    /// `GET /api/public_api/posts/by_author/`
    pub fn posts_by_author(
        &self,
        data: &PostsByAuthorData,
    ) -> Result<PostsByAuthorResponse, ApiError> {
        self.client.get("/api/public_api/posts/by_author/", Some(data))
    }

    /// `GET /api/public_api/posts/published/`
    pub fn posts_published(
        &self,
        data: &PostsPublishedData,
    ) -> Result<PostsPublishedResponse, ApiError> {
        self.client.get("/api/public_api/posts/published/", Some(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_data_serializes_only_set_fields() {
        let data = PostsListData {
            page: Some(2),
            search: Some("launch".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&data).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["page"], 2);
        assert_eq!(obj["search"], "launch");
    }

    #[test]
    fn by_author_data_carries_author_filter() {
        let data = PostsByAuthorData {
            author_id: Some(9),
            ..Default::default()
        };
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value.as_object().unwrap()["author_id"], 9);
    }

    #[test]
    fn published_data_default_is_empty() {
        let value = serde_json::to_value(PostsPublishedData::default()).unwrap();
        assert!(value.as_object().unwrap().is_empty());
    }

    #[test]
    fn response_aliases_name_the_model_types() {
        // Response aliases must stay interchangeable with the underlying
        // model types wherever a type is expected.
        fn takes_post(_p: &Post) {}
        fn gives_retrieve_response() -> Option<PostsRetrieveResponse> {
            None
        }
        if let Some(resp) = gives_retrieve_response() {
            takes_post(&resp);
        }

        let page: PostsListResponse = PaginatedPostList {
            count: 0,
            next: None,
            previous: None,
            results: vec![],
        };
        assert!(page.is_empty());
    }
}
