//! Tests for the in-memory identity provider.

use crate::auth::{AuthError, AuthProvider, InMemoryAuthProvider, MIN_PASSWORD_LEN};
use rstest::{fixture, rstest};

#[fixture]
fn provider() -> InMemoryAuthProvider {
    InMemoryAuthProvider::new()
}

#[rstest]
#[tokio::test]
async fn sign_up_signs_the_user_in(provider: InMemoryAuthProvider) {
    let mut session = provider.session();

    let created = provider
        .sign_up(" Anna@Example.com ", "secret1", "Anna Bell")
        .await
        .expect("sign-up succeeds");

    assert_eq!(created.email.as_deref(), Some("Anna@Example.com"));
    assert_eq!(created.display_name.as_deref(), Some("Anna Bell"));
    assert!(!created.is_anonymous);
    assert!(session.has_changed().expect("provider alive"));
    assert_eq!(session.borrow_and_update().as_ref(), Some(&created));
}

#[rstest]
#[tokio::test]
async fn sign_in_matches_email_case_insensitively(provider: InMemoryAuthProvider) {
    let created = provider
        .sign_up("anna@example.com", "secret1", "Anna")
        .await
        .expect("sign-up succeeds");
    provider.sign_out().await.expect("sign-out succeeds");

    let session = provider
        .sign_in("ANNA@example.COM", "secret1")
        .await
        .expect("sign-in succeeds");

    assert_eq!(session.user_id, created.user_id);
}

#[rstest]
#[case("anna@example.com", "wrong-password")]
#[case("nobody@example.com", "secret1")]
#[tokio::test]
async fn wrong_credentials_are_rejected(
    provider: InMemoryAuthProvider,
    #[case] email: &str,
    #[case] password: &str,
) {
    provider
        .sign_up("anna@example.com", "secret1", "Anna")
        .await
        .expect("sign-up succeeds");

    assert!(matches!(
        provider.sign_in(email, password).await,
        Err(AuthError::InvalidCredentials)
    ));
}

#[rstest]
#[tokio::test]
async fn sign_up_validates_input(provider: InMemoryAuthProvider) {
    assert!(matches!(
        provider.sign_up("not-an-email", "secret1", "X").await,
        Err(AuthError::InvalidEmail(_))
    ));
    assert!(matches!(
        provider.sign_up("a@b.c", "12345", "X").await,
        Err(AuthError::WeakPassword { min_len }) if min_len == MIN_PASSWORD_LEN
    ));

    provider
        .sign_up("a@b.c", "123456", "X")
        .await
        .expect("first sign-up succeeds");
    assert!(matches!(
        provider.sign_up("A@B.C", "abcdef", "Y").await,
        Err(AuthError::EmailInUse(_))
    ));
    assert_eq!(provider.account_count(), 1);
}

#[rstest]
#[tokio::test]
async fn guests_and_sign_out_update_the_session(provider: InMemoryAuthProvider) {
    let guest = provider
        .sign_in_anonymously()
        .await
        .expect("guest sign-in succeeds");
    assert!(guest.is_anonymous);
    assert_eq!(guest.email, None);
    assert_eq!(guest.greeting_name(), "Guest");

    provider.sign_out().await.expect("sign-out succeeds");

    assert_eq!(*provider.session().borrow(), None);
}
