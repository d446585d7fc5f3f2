use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub role: Role,
}

impl User {
    /// Landing path for the user after a successful authentication.
    pub fn home_path(&self) -> String {
        self.role.home_path()
    }
}

#[derive(
    Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Teacher,
    Admin,
    Superadmin,
}

impl Role {
    pub fn home_path(&self) -> String {
        format!("/{}", self.as_ref())
    }

    pub fn name(&self) -> &'static str {
        match self {
            Role::Teacher => "Багш",
            Role::Admin => "Админ",
            Role::Superadmin => "Супер админ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use strum::IntoEnumIterator as _;

    #[test]
    fn test_role_paths() {
        let paths = Role::iter().map(|role| role.home_path()).collect::<Vec<_>>();
        assert_eq!(paths, vec!["/teacher", "/admin", "/superadmin"]);
    }

    #[test]
    fn test_decode_user() {
        let user: User = serde_json::from_value(json!({
            "_id": "u1",
            "username": "admin@enjoy.mn",
            "role": "admin"
        }))
        .unwrap();
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.home_path(), "/admin");
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let result = serde_json::from_value::<User>(json!({
            "_id": "u1",
            "username": "x",
            "role": "parent"
        }));
        assert!(result.is_err());
        assert!("parent".parse::<Role>().is_err());
        assert_eq!("superadmin".parse::<Role>().unwrap(), Role::Superadmin);
    }
}
