use std::collections::HashSet;

use serde_json::Value;
use tracing::warn;

use crate::{
    domain::{Member, MemberId},
    error::PayloadError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    Malformed(String),
    DuplicateId(MemberId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEntry {
    /// Position of the entry in the payload array.
    pub index: usize,
    pub reason: RejectReason,
}

#[derive(Debug, Clone, Default)]
pub struct ParsedMembers {
    pub members: Vec<Member>,
    pub rejected: Vec<RejectedEntry>,
}

/// Parses a members feed body.
///
/// The body must be a JSON array. Entries that do not match the `Member`
/// schema, or that repeat an id seen earlier in the array, are dropped and
/// reported in [`ParsedMembers::rejected`]; accepted entries keep their order.
pub fn parse_members(body: &[u8]) -> Result<ParsedMembers, PayloadError> {
    let value: Value = serde_json::from_slice(body)?;
    let entries = match value {
        Value::Array(entries) => entries,
        other => {
            return Err(PayloadError::NotAnArray {
                found: json_kind(&other),
            })
        }
    };

    let mut parsed = ParsedMembers {
        members: Vec::with_capacity(entries.len()),
        rejected: Vec::new(),
    };
    let mut seen = HashSet::with_capacity(entries.len());

    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<Member>(entry) {
            Ok(member) => {
                if seen.insert(member.id.clone()) {
                    parsed.members.push(member);
                } else {
                    warn!(index, id = %member.id, "dropping member entry with duplicate id");
                    parsed.rejected.push(RejectedEntry {
                        index,
                        reason: RejectReason::DuplicateId(member.id),
                    });
                }
            }
            Err(err) => {
                warn!(index, error = %err, "dropping malformed member entry");
                parsed.rejected.push(RejectedEntry {
                    index,
                    reason: RejectReason::Malformed(err.to_string()),
                });
            }
        }
    }

    Ok(parsed)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_members_feed_in_order() {
        let body = br#"[
            {"id":"1","name":"Aaron Miles","email":"aaron@mailinator.com","role":"member"},
            {"id":"2","name":"Aishwarya Naik","email":"aishwarya@mailinator.com","role":"member"},
            {"id":"3","name":"Arvind Kumar","email":"arvind@mailinator.com","role":"admin"}
        ]"#;

        let parsed = parse_members(body).expect("parse");
        assert!(parsed.rejected.is_empty());
        let ids: Vec<&str> = parsed.members.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(parsed.members[2].role, "admin");
    }

    #[test]
    fn rejects_payload_that_is_not_an_array() {
        let err = parse_members(br#"{"members":[]}"#).expect_err("object payload");
        assert!(matches!(err, PayloadError::NotAnArray { found: "object" }));

        let err = parse_members(b"<html>").expect_err("not json");
        assert!(matches!(err, PayloadError::Json(_)));
    }

    #[test]
    fn isolates_malformed_and_duplicate_entries() {
        let body = br#"[
            {"id":"1","name":"Ann","email":"a@x.com","role":"member"},
            {"id":"2","name":"Bo","email":"b@x.com"},
            {"id":"3","name":7,"email":"c@x.com","role":"member"},
            {"id":"1","name":"Ann again","email":"a2@x.com","role":"admin"},
            {"id":4,"name":"Di","email":"d@x.com","role":"admin"}
        ]"#;

        let parsed = parse_members(body).expect("parse");
        let ids: Vec<&str> = parsed.members.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
        assert_eq!(parsed.members[0].name, "Ann");

        let rejected: Vec<usize> = parsed.rejected.iter().map(|r| r.index).collect();
        assert_eq!(rejected, vec![1, 2, 3]);
        assert_eq!(
            parsed.rejected[2].reason,
            RejectReason::DuplicateId(MemberId::from("1"))
        );
        assert!(matches!(parsed.rejected[0].reason, RejectReason::Malformed(_)));
    }

    #[test]
    fn empty_array_is_an_empty_feed() {
        let parsed = parse_members(b"[]").expect("parse");
        assert!(parsed.members.is_empty());
        assert!(parsed.rejected.is_empty());
    }
}
