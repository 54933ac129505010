pub mod store;

use crate::error::{Error, Result};
use chrono::Utc;
use store::{UserRecord, UserStore};

/// Registration input, plain secrets included. Lives only for the
/// duration of the sign-up call.
#[derive(Debug)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

/// Who logged in. This is all the extraction engine ever sees of the
/// gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

const MIN_PASSWORD_LEN: usize = 8;
const MIN_USERNAME_LEN: usize = 6;

/// Register a new account.
pub fn sign_up(store: &UserStore, new: &NewUser) -> Result<()> {
    validate_new_user(new)?;

    let mut users = store.load()?;
    if users.iter().any(|u| u.username == new.username) {
        return Err(Error::DuplicateUser(new.username.clone()));
    }

    let password_hash = bcrypt::hash(&new.password, bcrypt::DEFAULT_COST)?;
    users.push(UserRecord {
        username: new.username.clone(),
        email: new.email.clone(),
        first_name: new.first_name.clone(),
        last_name: new.last_name.clone(),
        password_hash,
        created_at: Utc::now(),
    });
    store.save(&users)
}

/// Verify credentials. Unknown user and wrong password are both
/// `None`; only store trouble is an error.
pub fn login(store: &UserStore, username: &str, password: &str) -> Result<Option<UserIdentity>> {
    let users = store.load()?;
    let Some(user) = users.iter().find(|u| u.username == username) else {
        return Ok(None);
    };
    if !bcrypt::verify(password, &user.password_hash)? {
        return Ok(None);
    }
    Ok(Some(UserIdentity {
        username: user.username.clone(),
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
    }))
}

/// Reset a password. The username + email pair is the recovery proof.
pub fn reset_password(
    store: &UserStore,
    username: &str,
    email: &str,
    new_password: &str,
    confirm_password: &str,
) -> Result<()> {
    validate_password(new_password, confirm_password)?;

    let mut users = store.load()?;
    let Some(user) = users
        .iter_mut()
        .find(|u| u.username == username && u.email == email)
    else {
        return Err(Error::UnknownAccount);
    };
    user.password_hash = bcrypt::hash(new_password, bcrypt::DEFAULT_COST)?;
    store.save(&users)
}

fn validate_new_user(new: &NewUser) -> Result<()> {
    let all = [
        &new.first_name,
        &new.last_name,
        &new.email,
        &new.username,
        &new.password,
        &new.confirm_password,
    ];
    if all.iter().any(|f| f.trim().is_empty()) {
        return Err(Error::Validation("all fields are required".into()));
    }

    for name in [&new.first_name, &new.last_name] {
        if !name.chars().next().is_some_and(|c| c.is_uppercase()) {
            return Err(Error::Validation(
                "first and last name must start with a capital letter".into(),
            ));
        }
    }

    validate_email(&new.email)?;
    validate_username(&new.username)?;
    validate_password(&new.password, &new.confirm_password)
}

fn validate_email(email: &str) -> Result<()> {
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if !valid {
        return Err(Error::Validation(format!("not a valid email: {}", email)));
    }
    Ok(())
}

/// Usernames must mix letters, digits, and at least one symbol.
fn validate_username(username: &str) -> Result<()> {
    let has_letter = username.chars().any(|c| c.is_alphabetic());
    let has_digit = username.chars().any(|c| c.is_ascii_digit());
    let has_symbol = username.chars().any(|c| !c.is_alphanumeric());
    if username.len() < MIN_USERNAME_LEN || !has_letter || !has_digit || !has_symbol {
        return Err(Error::Validation(format!(
            "username must be at least {} characters and mix letters, numbers, and special characters",
            MIN_USERNAME_LEN
        )));
    }
    Ok(())
}

fn validate_password(password: &str, confirm: &str) -> Result<()> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(Error::Validation(format!(
            "password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    if password != confirm {
        return Err(Error::Validation(
            "password and confirmation do not match".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store() -> (TempDir, UserStore) {
        let tmp = tempfile::tempdir().unwrap();
        let store = UserStore::open(tmp.path().join("users.json")).unwrap();
        (tmp, store)
    }

    fn alice() -> NewUser {
        NewUser {
            first_name: "Alice".into(),
            last_name: "Smith".into(),
            email: "alice@example.com".into(),
            username: "alice#01".into(),
            password: "correct-horse".into(),
            confirm_password: "correct-horse".into(),
        }
    }

    #[test]
    fn test_sign_up_then_login() {
        let (_tmp, store) = test_store();
        sign_up(&store, &alice()).unwrap();

        let identity = login(&store, "alice#01", "correct-horse").unwrap().unwrap();
        assert_eq!(identity.username, "alice#01");
        assert_eq!(identity.first_name, "Alice");
    }

    #[test]
    fn test_login_wrong_password_is_none() {
        let (_tmp, store) = test_store();
        sign_up(&store, &alice()).unwrap();
        assert!(login(&store, "alice#01", "wrong").unwrap().is_none());
        assert!(login(&store, "nobody#99", "whatever").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let (_tmp, store) = test_store();
        sign_up(&store, &alice()).unwrap();
        assert!(matches!(
            sign_up(&store, &alice()).unwrap_err(),
            Error::DuplicateUser(_)
        ));
    }

    #[test]
    fn test_reset_password_changes_accepted_secret() {
        let (_tmp, store) = test_store();
        sign_up(&store, &alice()).unwrap();

        reset_password(
            &store,
            "alice#01",
            "alice@example.com",
            "new-secret-99",
            "new-secret-99",
        )
        .unwrap();

        assert!(login(&store, "alice#01", "correct-horse").unwrap().is_none());
        assert!(login(&store, "alice#01", "new-secret-99").unwrap().is_some());
    }

    #[test]
    fn test_reset_with_wrong_email_rejected() {
        let (_tmp, store) = test_store();
        sign_up(&store, &alice()).unwrap();
        let err = reset_password(
            &store,
            "alice#01",
            "mallory@example.com",
            "new-secret-99",
            "new-secret-99",
        )
        .unwrap_err();
        assert!(matches!(err, Error::UnknownAccount));
    }

    #[test]
    fn test_validation_rules() {
        let mut bad = alice();
        bad.first_name = "alice".into();
        assert!(matches!(
            validate_new_user(&bad).unwrap_err(),
            Error::Validation(_)
        ));

        let mut bad = alice();
        bad.username = "alice".into(); // no digit, no symbol
        assert!(validate_new_user(&bad).is_err());

        let mut bad = alice();
        bad.email = "not-an-email".into();
        assert!(validate_new_user(&bad).is_err());

        let mut bad = alice();
        bad.password = "short".into();
        bad.confirm_password = "short".into();
        assert!(validate_new_user(&bad).is_err());

        let mut bad = alice();
        bad.confirm_password = "different-secret".into();
        assert!(validate_new_user(&bad).is_err());

        assert!(validate_new_user(&alice()).is_ok());
    }
}
