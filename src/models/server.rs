use serde::{Deserialize, Serialize};

use crate::constants::SERVER_CATEGORY;
use crate::models::quotes::Quote;

/// a post as served by the placeholder endpoint.
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerPost {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub body: String,
}

impl From<ServerPost> for Quote {
    fn from(post: ServerPost) -> Self {
        Quote {
            text: post.title,
            category: SERVER_CATEGORY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posts_decode_from_camel_case_and_map_to_server_quotes() {
        let raw = r#"{"userId": 1, "id": 7, "title": "some title", "body": "some body"}"#;
        let post: ServerPost = serde_json::from_str(raw).unwrap();

        assert_eq!(post.user_id, 1);

        let quote = Quote::from(post);
        assert_eq!(quote.text, "some title");
        assert_eq!(quote.category, "Server");
    }
}
