use serde::{Deserialize, Serialize};

/// Access class carried by a session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Admin,
}

/// The record produced by login, binding a token to an identity, role and
/// an optional client ownership. Never mutated after issue; there is no
/// expiry or revocation in this demo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub role: Role,
    #[serde(rename = "clientId")]
    pub client_id: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_wire_names_are_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Client).unwrap(), "\"client\"");
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let r: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(r, Role::Admin);
    }

    #[test]
    fn session_omits_nothing_and_keeps_null_client() {
        let s = Session { email: "a@a.com".into(), role: Role::Admin, client_id: None };
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["clientId"], serde_json::Value::Null);
    }
}
