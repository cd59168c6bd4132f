//! Organization membership records as supplied by the parent page.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ustr::Ustr;

/// Opaque identifier for memberships and users.
///
/// Upstream payloads are not consistent about identifier types, so this
/// accepts both JSON strings and integers and always compares as a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(Ustr);

impl EntityId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Ustr::from(id.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<u64> for EntityId {
    fn from(value: u64) -> Self {
        Self::new(value.to_string())
    }
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

struct EntityIdVisitor;

impl Visitor<'_> for EntityIdVisitor {
    type Value = EntityId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or integer identifier")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(EntityId::new(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(EntityId::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(EntityId::new(v.to_string()))
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(EntityIdVisitor)
    }
}

/// A capability grouping attached to a membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Admin,
    Member,
    /// Any role this view does not know about.
    #[serde(other)]
    Other,
}

impl MemberRole {
    /// Whether the role grants administrative capability.
    #[inline]
    pub const fn is_elevated(self) -> bool {
        matches!(self, Self::Admin)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Member => "Member",
            Self::Other => "Other",
        }
    }
}

/// Invite status of a membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    New,
    Active,
    Invited,
}

/// Display data of the user behind a membership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberUser {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// An organization-membership record pairing a user with roles and a status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Membership identifier. Optional: invite payloads may not carry one yet.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(rename = "_userId")]
    pub user_id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<MemberUser>,
    #[serde(default)]
    pub roles: Vec<MemberRole>,
    #[serde(
        rename = "memberStatus",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub member_status: Option<MemberStatus>,
}

impl Member {
    /// Email of the user, or an empty string when the payload has none.
    pub fn email(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|user| user.email.as_deref())
            .unwrap_or_default()
    }

    /// "First Last" when either part is present.
    pub fn display_name(&self) -> Option<String> {
        let user = self.user.as_ref()?;
        let parts: Vec<&str> = [user.first_name.as_deref(), user.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    pub fn has_elevated_role(&self) -> bool {
        self.roles.iter().any(|role| role.is_elevated())
    }

    pub fn is_invited(&self) -> bool {
        self.member_status == Some(MemberStatus::Invited)
    }

    pub fn row_key(&self) -> RowKey {
        RowKey::of(self)
    }
}

/// The viewer's identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(rename = "_id")]
    pub id: EntityId,
}

impl CurrentUser {
    pub fn new(id: impl Into<EntityId>) -> Self {
        Self { id: id.into() }
    }
}

/// Stable key of a table row, derived from the membership identifier.
///
/// Rendered as `member-row-{id}`; rows without a membership id fall back to
/// `member-row-user-{userId}` so keys stay unique within a roster. Two records
/// sharing an `_id` share a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowKey(Ustr);

impl RowKey {
    pub fn of(member: &Member) -> Self {
        let key = match member.id {
            Some(id) => format!("member-row-{id}"),
            None => format!("member-row-user-{}", member.user_id),
        };
        Self(Ustr::from(&key))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_numeric_and_string_ids() {
        let member: Member = serde_json::from_value(serde_json::json!({
            "_id": 1,
            "_userId": "abc",
            "user": { "email": "test@email.com" },
            "roles": ["admin"]
        }))
        .expect("member should deserialize");

        assert_eq!(member.id, Some(EntityId::new("1")));
        assert_eq!(member.user_id, EntityId::new("abc"));
        assert_eq!(member.email(), "test@email.com");
        assert_eq!(member.roles, vec![MemberRole::Admin]);
        assert_eq!(member.member_status, None);
    }

    #[test]
    fn unknown_roles_become_other() {
        let member: Member = serde_json::from_value(serde_json::json!({
            "_userId": 2,
            "roles": ["owner", "member"]
        }))
        .expect("member should deserialize");

        assert_eq!(member.roles, vec![MemberRole::Other, MemberRole::Member]);
        assert!(!member.has_elevated_role());
    }

    #[test]
    fn missing_user_renders_blank_email() {
        let member: Member =
            serde_json::from_value(serde_json::json!({ "_userId": 3 })).expect("valid");

        assert_eq!(member.email(), "");
        assert_eq!(member.display_name(), None);
        assert!(member.roles.is_empty());
    }

    #[test]
    fn display_name_joins_present_parts() {
        let member: Member = serde_json::from_value(serde_json::json!({
            "_userId": 4,
            "user": { "firstName": "Ada", "lastName": " " }
        }))
        .expect("valid");

        assert_eq!(member.display_name().as_deref(), Some("Ada"));
    }

    #[test]
    fn invite_status_parses_lowercase() {
        let member: Member = serde_json::from_value(serde_json::json!({
            "_userId": 5,
            "memberStatus": "invited"
        }))
        .expect("valid");

        assert!(member.is_invited());
    }

    #[test]
    fn row_key_prefers_membership_id() {
        let mut member: Member =
            serde_json::from_value(serde_json::json!({ "_id": 7, "_userId": 9 })).expect("valid");
        assert_eq!(member.row_key().as_str(), "member-row-7");

        member.id = None;
        assert_eq!(member.row_key().as_str(), "member-row-user-9");
    }
}
