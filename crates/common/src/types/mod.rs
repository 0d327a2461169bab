use serde::{Deserialize, Serialize};

/// A stored book. Serialized as `{id, name, description, content}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub content: String,
}

/// Body of `POST /books`. Fields are optional so presence can be checked after decoding.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CreateBookRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Body of `PUT /books/{id}`. `description` is not updatable.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct UpdateBookRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateBookResponse {
    pub message: String,
    pub book: Book,
}

impl CreateBookResponse {
    pub fn created(book: Book) -> Self {
        Self { message: "Book created".to_string(), book }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_serializes_all_four_fields() {
        let book = Book {
            id: 1,
            name: "Dune".into(),
            description: "Sci-fi".into(),
            content: "...".into(),
        };
        let v = serde_json::to_value(&book).unwrap();
        assert_eq!(
            v,
            serde_json::json!({"id": 1, "name": "Dune", "description": "Sci-fi", "content": "..."})
        );
    }

    #[test]
    fn null_and_missing_fields_decode_to_none() {
        let req: CreateBookRequest =
            serde_json::from_str(r#"{"name": null, "content": "x", "extra": 1}"#).unwrap();
        assert!(req.name.is_none());
        assert!(req.description.is_none());
        assert_eq!(req.content.as_deref(), Some("x"));
    }

    #[test]
    fn non_string_field_is_rejected() {
        let res = serde_json::from_str::<UpdateBookRequest>(r#"{"name": 5, "content": "x"}"#);
        assert!(res.is_err());
    }
}
