use super::*;

pub fn create_user(connections: &sqlite::Connections, new_user: NewUser) -> Result<User> {
    let email = new_user.email.clone();
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::create_user(conn, new_user).map_err(|err| {
            warn!("Failed to create user with email {}: {}", email, err);
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn create_a_new_user() {
        let fixture = BackendFixture::new();
        let user = flows::create_user(
            &fixture.db_connections,
            NewUser {
                name: "Alice".into(),
                email: "Alice@Example.com".into(),
                role: Role::User,
            },
        )
        .unwrap();
        assert_eq!("alice@example.com", user.email);
        assert_eq!(Some(user.clone()), fixture.try_get_user(user.id));
    }

    #[test]
    fn reject_an_email_address_that_is_already_taken() {
        let fixture = BackendFixture::new();
        fixture.create_user("alice@example.com", Role::User);
        let err = flows::create_user(
            &fixture.db_connections,
            NewUser {
                name: "Bob".into(),
                email: "alice@example.com".into(),
                role: Role::User,
            },
        )
        .unwrap_err();
        assert!(matches!(
            err.parameter_error(),
            Some(usecases::Error::Email)
        ));
    }
}
