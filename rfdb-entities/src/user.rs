use num_derive::{FromPrimitive, ToPrimitive};

use crate::id::*;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id    : Id,
    pub name  : String,
    pub email : String,
    pub role  : Role,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name  : String,
    pub email : String,
    pub role  : Role,
}

impl NewUser {
    pub fn into_user(self, id: Id) -> User {
        let Self { name, email, role } = self;
        User {
            id,
            name,
            email,
            role,
        }
    }
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive)]
pub enum Role {
    #[default]
    User  = 0,
    Admin = 1,
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown role")]
pub struct RoleParseError;

impl std::str::FromStr for Role {
    type Err = RoleParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            _ => Err(RoleParseError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::FromPrimitive;

    #[test]
    fn role_from_primitive() {
        assert_eq!(Some(Role::User), Role::from_i16(0));
        assert_eq!(Some(Role::Admin), Role::from_i16(1));
        assert_eq!(None, Role::from_i16(2));
    }

    #[test]
    fn parse_role() {
        assert_eq!(Role::Admin, "Admin".parse().unwrap());
        assert_eq!(Role::User, " user ".parse().unwrap());
        assert!("scout".parse::<Role>().is_err());
    }
}
