//! Conversion functions between Protocol Buffer and domain models

use crate::db::models::{Todo, TodoSummary};
use crate::proto::todo as pb;
use chrono::{DateTime, Utc};
use prost_types::Timestamp;

/// Convert a UTC instant to a protobuf timestamp
pub fn timestamp_to_proto(time: &DateTime<Utc>) -> Timestamp {
    Timestamp {
        seconds: time.timestamp(),
        nanos: time.timestamp_subsec_nanos() as i32,
    }
}

/// Convert a protobuf timestamp back to a UTC instant
///
/// Returns `None` when the timestamp is outside the range chrono can represent
/// or carries a negative nanosecond field.
pub fn timestamp_from_proto(timestamp: &Timestamp) -> Option<DateTime<Utc>> {
    let nanos = u32::try_from(timestamp.nanos).ok()?;
    DateTime::from_timestamp(timestamp.seconds, nanos)
}

/// Convert a list row to its proto message
pub fn summary_to_proto(todo: &TodoSummary) -> pb::Todo {
    pb::Todo {
        id: todo.id,
        title: todo.title.clone(),
        done: todo.done,
        created_at: Some(timestamp_to_proto(&todo.created_at)),
        updated_at: Some(timestamp_to_proto(&todo.updated_at)),
    }
}

/// Convert a full row to the detail response
pub fn todo_to_proto(todo: &Todo) -> pb::TodoDetailResponse {
    pb::TodoDetailResponse {
        id: todo.id,
        title: todo.title.clone(),
        content: todo.content.clone().unwrap_or_default(),
        done: todo.done,
        created_at: Some(timestamp_to_proto(&todo.created_at)),
        updated_at: Some(timestamp_to_proto(&todo.updated_at)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 12, 30, 45).unwrap() + chrono::Duration::milliseconds(250)
    }

    #[test]
    fn test_timestamp_to_proto() {
        let ts = timestamp_to_proto(&sample_time());
        assert_eq!(ts.seconds, 1_709_987_445);
        assert_eq!(ts.nanos, 250_000_000);
    }

    #[test]
    fn test_timestamp_from_proto_preserves_instant() {
        let time = sample_time();
        assert_eq!(timestamp_from_proto(&timestamp_to_proto(&time)), Some(time));
    }

    #[test]
    fn test_timestamp_from_proto_rejects_negative_nanos() {
        let ts = Timestamp {
            seconds: 0,
            nanos: -1,
        };
        assert_eq!(timestamp_from_proto(&ts), None);
    }

    #[test]
    fn test_todo_to_proto() {
        let now = sample_time();
        let todo = Todo {
            id: 1,
            title: "Buy milk".to_string(),
            content: None,
            done: false,
            created_at: now,
            updated_at: now,
        };

        let proto = todo_to_proto(&todo);
        assert_eq!(proto.id, 1);
        assert_eq!(proto.title, "Buy milk");
        assert_eq!(proto.content, "");
        assert!(!proto.done);
        assert_eq!(proto.created_at, proto.updated_at);
    }

    #[test]
    fn test_summary_to_proto() {
        let now = sample_time();
        let summary = TodoSummary {
            id: 3,
            title: "Walk dog".to_string(),
            done: true,
            created_at: now,
            updated_at: now,
        };

        let proto = summary_to_proto(&summary);
        assert_eq!(proto.id, 3);
        assert!(proto.done);
        assert_eq!(proto.updated_at, Some(timestamp_to_proto(&now)));
    }
}
