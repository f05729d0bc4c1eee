//! The movie metadata record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Poster image carried by the locally synthesized placeholder records.
const PLACEHOLDER_POSTER: &str = "https://img.freepik.com/vector-premium/lindo-gato-triste-sentado-lluvia-nube-dibujos-animados-vector-icono-ilustracion-animal-naturaleza-icono-aislado_138676-5215.jpg?w=826";

/// A semi-structured movie metadata record.
///
/// Wraps the JSON object a lookup returns. The known fields are Title, Year,
/// Rated, Released, Runtime, Genre, Director, Plot, imdbRating, and Poster,
/// but any of them may be absent; [`MovieRecord::field`] substitutes the
/// empty string so consumers never deal with missing keys.
///
/// # Examples
///
/// ```
/// use cinefront::movies::MovieRecord;
///
/// let record: MovieRecord =
///     serde_json::from_str(r#"{"Title": "Dune", "Year": "2021"}"#).unwrap();
/// assert_eq!(record.field("Title"), "Dune");
/// assert_eq!(record.field("Plot"), "");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieRecord {
    fields: Map<String, Value>,
}

impl MovieRecord {
    /// Returns the value of `name`, or `""` when the field is absent or not
    /// a string.
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).and_then(Value::as_str).unwrap_or("")
    }

    /// Substitute record for lookups that failed or could not be attempted.
    pub fn not_found() -> Self {
        Self::placeholder("Resource not found")
    }

    /// Fixed record answering the unimplemented POST path.
    pub fn not_implemented() -> Self {
        Self::placeholder("Not implemented yet")
    }

    /// Body-only 405 signal for unsupported verbs.
    ///
    /// The refusal lives in the record text; the wire status line still says
    /// 200 when this record is sent.
    pub fn method_not_allowed() -> Self {
        let mut fields = Map::new();
        fields.insert(
            "Title".to_owned(),
            "HTTP/1.1 405 Method Not Allowed".into(),
        );
        Self { fields }
    }

    fn placeholder(title: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("Title".to_owned(), title.into());
        fields.insert("Year".to_owned(), "Sorry".into());
        fields.insert("Poster".to_owned(), PLACEHOLDER_POSTER.into());
        Self { fields }
    }

    /// Serializes the record back to its JSON object text.
    pub fn to_json(&self) -> String {
        Value::Object(self.fields.clone()).to_string()
    }
}

impl From<Map<String, Value>> for MovieRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> MovieRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn absent_field_is_empty_string() {
        let r = record(json!({"Title": "Dune"}));
        assert_eq!(r.field("Title"), "Dune");
        assert_eq!(r.field("Plot"), "");
        assert_eq!(r.field("imdbRating"), "");
    }

    #[test]
    fn non_string_field_is_empty_string() {
        let r = record(json!({"Year": 2021}));
        assert_eq!(r.field("Year"), "");
    }

    #[test]
    fn not_found_placeholder() {
        let r = MovieRecord::not_found();
        assert_eq!(r.field("Title"), "Resource not found");
        assert_eq!(r.field("Year"), "Sorry");
        assert!(r.field("Poster").starts_with("https://"));
    }

    #[test]
    fn not_implemented_placeholder() {
        let r = MovieRecord::not_implemented();
        assert_eq!(r.field("Title"), "Not implemented yet");
        assert_eq!(r.field("Year"), "Sorry");
    }

    #[test]
    fn method_not_allowed_carries_only_the_refusal() {
        let r = MovieRecord::method_not_allowed();
        assert_eq!(r.field("Title"), "HTTP/1.1 405 Method Not Allowed");
        assert_eq!(r.field("Year"), "");
        assert_eq!(r.field("Poster"), "");
    }

    #[test]
    fn to_json_round_trips() {
        let r = record(json!({"Title": "Dune", "Year": "2021"}));
        let text = r.to_json();
        let back: MovieRecord = serde_json::from_str(&text).unwrap();
        assert_eq!(back, r);
    }
}
