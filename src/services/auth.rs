use validator::Validate;

use crate::auth::{self, SessionStore};
use crate::forms::auth::LoginForm;
use crate::repository::{AdminReader, AdminWriter};

use super::{ServiceError, ServiceResult};

/// Authenticate an administrator and issue a session token.
///
/// Unknown usernames and wrong passwords are indistinguishable to the
/// caller.
pub fn login<R>(form: LoginForm, repo: &R, sessions: &SessionStore) -> ServiceResult<String>
where
    R: AdminReader,
{
    form.validate()?;

    let user = match repo.get_admin_by_username(&form.username) {
        Ok(Some(user)) => user,
        Ok(None) => return Err(ServiceError::Unauthorized),
        Err(e) => {
            log::error!("Failed to look up admin {}: {e}", form.username);
            return Err(ServiceError::Internal);
        }
    };

    if !auth::verify_password(&form.password, &user.password_hash) {
        return Err(ServiceError::Unauthorized);
    }

    Ok(sessions.issue(&user.username))
}

/// Seed the configured administrator account if it does not exist yet.
pub fn ensure_default_admin<R>(username: &str, password: &str, repo: &R) -> ServiceResult<()>
where
    R: AdminReader + AdminWriter,
{
    match repo.get_admin_by_username(username) {
        Ok(Some(_)) => Ok(()),
        Ok(None) => {
            let hash = auth::hash_password(password);
            match repo.create_admin(username, &hash) {
                Ok(_) => {
                    log::info!("Seeded default admin account '{username}'");
                    Ok(())
                }
                Err(e) => {
                    log::error!("Failed to seed admin {username}: {e}");
                    Err(ServiceError::Internal)
                }
            }
        }
        Err(e) => {
            log::error!("Failed to look up admin {username}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::hash_password;
    use crate::repository::test::TestRepository;
    use chrono::Duration;

    fn sessions() -> SessionStore {
        SessionStore::new(Duration::minutes(5))
    }

    fn form(username: &str, password: &str) -> LoginForm {
        LoginForm {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn correct_credentials_yield_a_usable_token() {
        let repo = TestRepository::with_admin("admin", &hash_password("randy1007"));
        let store = sessions();

        let token = login(form("admin", "randy1007"), &repo, &store).unwrap();
        assert!(store.authorize(&token));
    }

    #[test]
    fn wrong_password_always_fails() {
        let repo = TestRepository::with_admin("admin", &hash_password("randy1007"));
        let result = login(form("admin", "randy1008"), &repo, &sessions());
        assert_eq!(result, Err(ServiceError::Unauthorized));
    }

    #[test]
    fn unknown_username_fails_the_same_way() {
        let repo = TestRepository::with_admin("admin", &hash_password("randy1007"));
        let result = login(form("nobody", "randy1007"), &repo, &sessions());
        assert_eq!(result, Err(ServiceError::Unauthorized));
    }

    #[test]
    fn missing_fields_are_a_validation_error() {
        let repo = TestRepository::new();
        let result = login(form("", ""), &repo, &sessions());
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[test]
    fn seeding_is_idempotent() {
        let repo = TestRepository::new();
        ensure_default_admin("admin", "randy1007", &repo).unwrap();
        ensure_default_admin("admin", "randy1007", &repo).unwrap();

        let store = sessions();
        assert!(login(form("admin", "randy1007"), &repo, &store).is_ok());
    }
}
