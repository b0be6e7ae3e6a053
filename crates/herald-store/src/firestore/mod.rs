//! Firestore REST client for the announcement collection.

pub mod auth;
pub mod value;

use std::time::Duration;

use herald_config::{ServiceAccount, StoreConfig};
use herald_core::{Announcement, AnnouncementField};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::{AnnouncementStore, StoreError};
use auth::TokenProvider;
use value::Document;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListResponse {
    #[serde(default)]
    documents: Vec<Document>,
    #[serde(default)]
    next_page_token: String,
}

/// One element of the streamed `runQuery` response array.
#[derive(Deserialize)]
struct QueryItem {
    document: Option<Document>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RunQuery<'a> {
    structured_query: StructuredQuery<'a>,
}

#[derive(Serialize)]
struct StructuredQuery<'a> {
    from: [CollectionSelector<'a>; 1],
    #[serde(rename = "where")]
    filter: Filter<'a>,
    limit: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CollectionSelector<'a> {
    collection_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Filter<'a> {
    field_filter: FieldFilter<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldFilter<'a> {
    field: FieldReference<'a>,
    op: &'static str,
    value: StringValue<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldReference<'a> {
    field_path: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StringValue<'a> {
    string_value: &'a str,
}

impl<'a> RunQuery<'a> {
    fn equality(collection: &'a str, field: AnnouncementField, value: &'a str) -> Self {
        Self {
            structured_query: StructuredQuery {
                from: [CollectionSelector {
                    collection_id: collection,
                }],
                filter: Filter {
                    field_filter: FieldFilter {
                        field: FieldReference {
                            field_path: field.store_name(),
                        },
                        op: "EQUAL",
                        value: StringValue {
                            string_value: value,
                        },
                    },
                },
                limit: 1,
            },
        }
    }
}

/// `{base}/projects/{project}/databases/(default)/documents`
fn documents_root(base_url: &str, project_id: &str) -> String {
    format!(
        "{}/projects/{}/databases/(default)/documents",
        base_url.trim_end_matches('/'),
        urlencoding::encode(project_id)
    )
}

/// Read-only client for one collection.
pub struct FirestoreStore {
    http: reqwest::Client,
    auth: TokenProvider,
    root: String,
    collection: String,
    page_size: u32,
}

impl FirestoreStore {
    /// Build a client from the store section and the decoded service account.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Http`] if the HTTP client fails to build and
    /// [`StoreError::Auth`] if the service account key is unusable.
    pub fn new(config: &StoreConfig, account: ServiceAccount) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .user_agent("herald/0.1")
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let root = documents_root(&config.base_url, config.project_id(&account));
        let auth = TokenProvider::new(http.clone(), account)?;
        Ok(Self {
            http,
            auth,
            root,
            collection: config.collection.clone(),
            page_size: config.page_size.max(1),
        })
    }

    fn list_url(&self, page_token: &str) -> String {
        let mut url = format!(
            "{}/{}?pageSize={}",
            self.root,
            urlencoding::encode(&self.collection),
            self.page_size
        );
        if !page_token.is_empty() {
            url.push_str("&pageToken=");
            url.push_str(&urlencoding::encode(page_token));
        }
        url
    }

    /// Pass successful responses through.
    ///
    /// A 401 means the cached token was revoked or expired early, so it is
    /// dropped and the next request exchanges a fresh one. Quota and
    /// availability failures are kept apart from other API errors.
    async fn check(&self, resp: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let message = resp.text().await.unwrap_or_default();
        match status {
            StatusCode::UNAUTHORIZED => {
                self.auth.invalidate().await;
                Err(StoreError::Auth(format!("access token rejected: {}", message.trim())))
            }
            StatusCode::TOO_MANY_REQUESTS | StatusCode::SERVICE_UNAVAILABLE => {
                Err(StoreError::Unavailable {
                    status: status.as_u16(),
                })
            }
            _ => Err(StoreError::Api {
                status: status.as_u16(),
                message,
            }),
        }
    }
}

#[async_trait::async_trait]
impl AnnouncementStore for FirestoreStore {
    async fn list_all(&self) -> Result<Vec<Announcement>, StoreError> {
        let token = self.auth.token().await?;
        let mut records = Vec::new();
        let mut page_token = String::new();

        loop {
            let resp = self
                .http
                .get(self.list_url(&page_token))
                .bearer_auth(&token)
                .send()
                .await?;
            let page: ListResponse = self.check(resp).await?.json().await?;
            records.extend(page.documents.into_iter().map(Document::into_announcement));

            if page.next_page_token.is_empty() {
                break;
            }
            page_token = page.next_page_token;
        }

        tracing::debug!(collection = %self.collection, records = records.len(), "listed announcements");
        Ok(records)
    }

    async fn find_by_field(
        &self,
        field: AnnouncementField,
        value: &str,
    ) -> Result<Option<Announcement>, StoreError> {
        let token = self.auth.token().await?;
        let body = RunQuery::equality(&self.collection, field, value);
        let resp = self
            .http
            .post(format!("{}:runQuery", self.root))
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await?;
        let items: Vec<QueryItem> = self.check(resp).await?.json().await?;

        Ok(items
            .into_iter()
            .find_map(|item| item.document)
            .map(Document::into_announcement))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn documents_root_trims_trailing_slash() {
        assert_eq!(
            documents_root("https://firestore.googleapis.com/v1/", "campus-bot"),
            "https://firestore.googleapis.com/v1/projects/campus-bot/databases/(default)/documents"
        );
    }

    #[test]
    fn equality_query_shape() {
        let body = RunQuery::equality("announcements", AnnouncementField::AuthorName, "dr. rao");
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "structuredQuery": {
                    "from": [{"collectionId": "announcements"}],
                    "where": {
                        "fieldFilter": {
                            "field": {"fieldPath": "authorName"},
                            "op": "EQUAL",
                            "value": {"stringValue": "dr. rao"}
                        }
                    },
                    "limit": 1
                }
            })
        );
    }

    #[test]
    fn parses_paged_list_response() {
        let page: ListResponse = serde_json::from_str(
            r#"{
                "documents": [
                    {"name": "projects/p/databases/(default)/documents/announcements/a",
                     "fields": {"title": {"stringValue": "AI Workshop"}}}
                ],
                "nextPageToken": "tok=="
            }"#,
        )
        .unwrap();
        assert_eq!(page.documents.len(), 1);
        assert_eq!(page.next_page_token, "tok==");

        let last: ListResponse = serde_json::from_str("{}").unwrap();
        assert!(last.documents.is_empty());
        assert!(last.next_page_token.is_empty());
    }

    #[test]
    fn run_query_response_skips_read_time_only_items() {
        let items: Vec<QueryItem> = serde_json::from_str(
            r#"[
                {"readTime": "2024-03-05T14:30:00Z"},
                {"document": {"name": "x/announcements/b", "fields": {"title": {"stringValue": "Sports Day"}}},
                 "readTime": "2024-03-05T14:30:00Z"}
            ]"#,
        )
        .unwrap();
        let found = items
            .into_iter()
            .find_map(|item| item.document)
            .map(Document::into_announcement)
            .unwrap();
        assert_eq!(found.id, "b");
        assert_eq!(found.title, "Sports Day");
    }
}
