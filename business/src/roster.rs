//! A roster is what the parent page owns: the viewer plus the ordered member
//! list it hands to the table every frame.

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{MembersError, Result};
use crate::member::{CurrentUser, EntityId, Member, MemberRole, MemberStatus, MemberUser, RowKey};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roster {
    pub current_user: CurrentUser,
    #[serde(default)]
    pub members: Vec<Member>,
}

impl Roster {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| MembersError::io(path, e))?;
        let roster = Self::from_json(&json)?;
        info!(
            "Loaded roster with {} members from {}",
            roster.members.len(),
            path.display()
        );
        Ok(roster)
    }

    /// Drops the member with the given row key, keeping the order of the rest.
    pub fn remove_member(&mut self, key: RowKey) -> Option<Member> {
        let index = self.members.iter().position(|m| m.row_key() == key)?;
        Some(self.members.remove(index))
    }

    pub fn find(&self, key: RowKey) -> Option<&Member> {
        self.members.iter().find(|m| m.row_key() == key)
    }

    /// A small built-in organization used when no roster file is configured.
    pub fn sample() -> Self {
        let member = |id: u64, email: &str, first: &str, roles: Vec<MemberRole>, status| Member {
            id: Some(EntityId::from(id)),
            user_id: EntityId::from(100 + id),
            user: Some(MemberUser {
                email: Some(email.to_owned()),
                first_name: Some(first.to_owned()),
                last_name: None,
            }),
            roles,
            member_status: status,
        };

        Self {
            current_user: CurrentUser::new(1_u64),
            members: vec![
                member(
                    1,
                    "owner@example.com",
                    "Olivia",
                    vec![MemberRole::Admin],
                    Some(MemberStatus::Active),
                ),
                member(
                    2,
                    "admin@example.com",
                    "Aiden",
                    vec![MemberRole::Admin],
                    Some(MemberStatus::Active),
                ),
                member(
                    3,
                    "pending@example.com",
                    "Priya",
                    vec![MemberRole::Admin],
                    Some(MemberStatus::Invited),
                ),
                member(
                    4,
                    "viewer@example.com",
                    "Mateo",
                    vec![MemberRole::Member],
                    Some(MemberStatus::Active),
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_roster_json() {
        let roster = Roster::from_json(
            r#"{
                "currentUser": { "_id": 1 },
                "members": [
                    { "_id": 1, "_userId": 1, "user": { "email": "test@email.com" }, "roles": ["admin"] },
                    { "_id": 2, "_userId": 2, "user": { "email": "another-test@email.com" }, "roles": ["admin"], "memberStatus": "invited" }
                ]
            }"#,
        )
        .expect("roster should parse");

        assert_eq!(roster.current_user, CurrentUser::new(1_u64));
        assert_eq!(roster.members.len(), 2);
        assert_eq!(roster.members[1].email(), "another-test@email.com");
    }

    #[test]
    fn rejects_malformed_json() {
        let err = Roster::from_json("{ not json").expect_err("should fail");
        assert!(matches!(err, MembersError::Parse(_)));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Roster::load("/definitely/not/here.json").expect_err("should fail");
        assert!(matches!(err, MembersError::Io { .. }));
        assert!(err.to_string().contains("not/here.json"));
    }

    #[test]
    fn remove_member_keeps_order() {
        let mut roster = Roster::sample();
        let key = roster.members[1].row_key();

        let removed = roster.remove_member(key).expect("member exists");
        assert_eq!(removed.email(), "admin@example.com");

        let emails: Vec<_> = roster.members.iter().map(Member::email).collect();
        assert_eq!(
            emails,
            vec![
                "owner@example.com",
                "pending@example.com",
                "viewer@example.com"
            ]
        );
        assert!(roster.find(key).is_none());
    }
}
