use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, sqlx::FromRow, Clone, PartialEq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /posts` and `PUT /posts/{id}`. Absent and null fields
/// decode as empty strings so they fail validation rather than parsing.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct PostPayload {
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Title is required."))]
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Content is required."))]
    pub content: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PostsPage {
    pub posts: Vec<Post>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fail_validation_not_parsing() {
        let payload: PostPayload = serde_json::from_str(r#"{"title":"Hello"}"#).unwrap();

        assert_eq!(payload.title, "Hello");
        assert!(payload.content.is_empty());
        assert!(payload.validate().is_err());
    }

    #[test]
    fn null_fields_fail_validation_not_parsing() {
        let payload: PostPayload =
            serde_json::from_str(r#"{"title":null,"content":"B"}"#).unwrap();

        assert!(payload.title.is_empty());
        assert_eq!(payload.content, "B");
        assert!(payload.validate().is_err());
    }

    #[test]
    fn accepts_filled_payload() {
        let payload = PostPayload {
            title: "A".into(),
            content: "B".into(),
        };
        assert!(payload.validate().is_ok());
    }
}
