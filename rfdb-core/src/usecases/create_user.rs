use super::prelude::*;

pub fn create_user<R: UserRepo>(repo: &R, new_user: NewUser) -> Result<User> {
    let NewUser { name, email, role } = new_user;
    let name = name.trim().to_owned();
    if name.is_empty() {
        return Err(Error::EmptyName);
    }
    let email = email.trim().to_lowercase();
    if !fast_chemail::is_valid_email(&email) {
        return Err(Error::Email);
    }
    let new_user = NewUser { name, email, role };
    log::debug!("Creating new user {}", new_user.email);
    let id = repo.create_user(new_user.clone()).map_err(|err| match err {
        RepoError::AlreadyExists => Error::Email,
        err => err.into(),
    })?;
    Ok(new_user.into_user(id))
}

#[cfg(test)]
mod tests {
    use super::super::tests::MockDb;
    use super::*;

    fn new_user(name: &str, email: &str) -> NewUser {
        NewUser {
            name: name.into(),
            email: email.into(),
            role: Role::User,
        }
    }

    #[test]
    fn create_user_with_normalized_email() {
        let db = MockDb::default();
        let user = create_user(&db, new_user(" Ann ", "Ann@Example.com")).unwrap();
        assert_eq!("Ann", user.name);
        assert_eq!("ann@example.com", user.email);
        assert_eq!(Some(user), db.try_get_user(db.users.borrow()[0].id).unwrap());
    }

    #[test]
    fn reject_blank_name() {
        let db = MockDb::default();
        assert!(matches!(
            create_user(&db, new_user("  ", "ann@example.com")),
            Err(Error::EmptyName)
        ));
    }

    #[test]
    fn reject_invalid_email() {
        let db = MockDb::default();
        for email in ["", "ann", "@example.com", "ann@", "a@b@c", "an n@example.com"] {
            assert!(matches!(
                create_user(&db, new_user("Ann", email)),
                Err(Error::Email)
            ));
        }
        assert!(db.users.borrow().is_empty());
    }

    #[test]
    fn reject_email_without_valid_domain() {
        let db = MockDb::default();
        for email in ["foo@bar", ".@."] {
            assert!(matches!(
                create_user(&db, new_user("Ann", email)),
                Err(Error::Email)
            ));
        }
        assert!(db.users.borrow().is_empty());
    }

    #[test]
    fn reject_duplicate_email() {
        let db = MockDb::default();
        create_user(&db, new_user("Ann", "ann@example.com")).unwrap();
        assert!(matches!(
            create_user(&db, new_user("Bob", "ANN@example.com")),
            Err(Error::Email)
        ));
    }
}
