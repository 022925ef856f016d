use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::common::{Error, ErrorKind};

// Role of an authenticated user on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Student, Role::Teacher, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = crate::EdrakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            "admin" => Ok(Role::Admin),
            _ => Err(Error::from(ErrorKind::InvalidRole { name: s.to_owned() }).into()),
        }
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!("Teacher".parse::<Role>().unwrap(), Role::Teacher);
        assert_eq!(" admin ".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("STUDENT".parse::<Role>().unwrap(), Role::Student);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "owner".parse::<Role>().unwrap_err();
        assert!(matches!(err, crate::EdrakError::InvalidRole { ref name } if name == "owner"));
    }

    #[test]
    fn deserialize_ignores_case() {
        let roles: Vec<Role> = serde_yaml::from_str("[Teacher, ADMIN, student]").unwrap();
        assert_eq!(roles, vec![Role::Teacher, Role::Admin, Role::Student]);

        let err = serde_yaml::from_str::<Role>("owner").unwrap_err();
        assert!(err.to_string().contains("unknown role 'owner'"), "{}", err);
    }

    #[test]
    fn serde_lowercase() {
        let roles: Vec<Role> = serde_yaml::from_str("[student, teacher, admin]").unwrap();
        assert_eq!(roles, Role::ALL.to_vec());
        assert_eq!(serde_json::to_string(&Role::Teacher).unwrap(), "\"teacher\"");
    }
}
