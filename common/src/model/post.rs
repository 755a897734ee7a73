//! Blog post data model: the shape the view works with, the shape the
//! backend speaks, and the single mapping between them.
//!
//! The backend's JSON field names (`blogId`, `Title`, `Discription`,
//! `Author`, `timestamp`) are confined to [`BlogPostWire`] and
//! [`DraftWire`]; nothing outside this module sees them. Every fetch goes
//! through the same `From<BlogPostWire>` conversion so the transform is
//! never inlined ad hoc at a call site.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A blog post as the view renders it.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub date: DateTime<Utc>,
}

/// A blog post as the backend serializes it.
///
/// Field names follow the backend contract, including its spelling of
/// `Discription`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BlogPostWire {
    #[serde(rename = "blogId")]
    pub blog_id: i64,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Discription")]
    pub description: String,
    #[serde(rename = "Author")]
    pub author: String,
    pub timestamp: String,
}

/// Mutation body for create and update requests. The backend assigns
/// `blogId` and `timestamp` itself, so neither is sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftWire {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "Discription")]
    pub description: String,
}

impl From<BlogPostWire> for BlogPost {
    fn from(wire: BlogPostWire) -> Self {
        BlogPost {
            id: wire.blog_id,
            title: wire.title,
            content: wire.description,
            author: wire.author,
            date: parse_timestamp(&wire.timestamp),
        }
    }
}

/// Parses the backend's timestamp string.
///
/// The backend emits either RFC 3339 with an offset or a naive
/// `datetime.utcnow()` rendering without one; the naive form is taken as
/// UTC. A string that matches neither maps to the Unix epoch so one bad
/// record cannot sink the whole list.
pub fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Utc);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.and_utc();
    }
    DateTime::UNIX_EPOCH
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn wire(timestamp: &str) -> BlogPostWire {
        BlogPostWire {
            blog_id: 1,
            title: "Hi".to_string(),
            description: "World".to_string(),
            author: "Ann".to_string(),
            timestamp: timestamp.to_string(),
        }
    }

    #[test]
    fn maps_wire_fields_to_client_shape() {
        let post = BlogPost::from(wire("2024-01-01T00:00:00Z"));
        assert_eq!(post.id, 1);
        assert_eq!(post.title, "Hi");
        assert_eq!(post.content, "World");
        assert_eq!(post.author, "Ann");
        assert_eq!(post.date, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let parsed = parse_timestamp("2024-06-15T10:30:00+02:00");
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 6, 15, 8, 30, 0).unwrap());
    }

    #[test]
    fn parses_naive_backend_timestamp_as_utc() {
        let parsed = parse_timestamp("2024-06-15T10:30:00.123456");
        assert_eq!(
            parsed.format("%Y-%m-%d %H:%M:%S").to_string(),
            "2024-06-15 10:30:00"
        );
    }

    #[test]
    fn unparseable_timestamp_falls_back_to_epoch() {
        assert_eq!(parse_timestamp("not a date"), DateTime::UNIX_EPOCH);
    }

    #[test]
    fn wire_deserializes_backend_field_names() {
        let json = r#"{
            "blogId": 7,
            "Title": "First",
            "Discription": "Body",
            "Author": "Bea",
            "timestamp": "2024-01-01T00:00:00Z"
        }"#;
        let wire: BlogPostWire = serde_json::from_str(json).unwrap();
        assert_eq!(wire.blog_id, 7);
        assert_eq!(wire.description, "Body");
    }

    #[test]
    fn draft_serializes_backend_field_names() {
        let draft = DraftWire {
            title: "T".to_string(),
            author: "A".to_string(),
            description: "C".to_string(),
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["Title"], "T");
        assert_eq!(value["Author"], "A");
        assert_eq!(value["Discription"], "C");
        assert!(value.get("blogId").is_none());
    }
}
