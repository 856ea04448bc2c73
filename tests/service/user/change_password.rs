use arsenal::{
    model::user::ChangePasswordDto,
    server::{
        error::{user::UserError, Error},
        service::user::{verify_password, UserService},
    },
};
use arsenal_test_utils::prelude::*;
use sea_orm::EntityTrait;

/// Expect the new password to verify against the stored hash after a change
/// with the correct current password
#[tokio::test]
async fn changes_password_with_correct_current() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let user = test
        .user()
        .insert_user_with_password("qm", "old-password")
        .await?;

    let service = UserService::new(&test.db);
    let result = service
        .change_password(&ChangePasswordDto {
            user_id: user.id,
            current_password: "old-password".to_string(),
            new_password: "new-password".to_string(),
        })
        .await;

    assert!(result.is_ok());

    let stored = entity::prelude::ArsenalUser::find_by_id(user.id)
        .one(&test.db)
        .await?
        .unwrap();

    // Salted one-way hash, never the plaintext
    assert!(stored.password_hash.starts_with("$argon2"));
    assert_ne!(stored.password_hash, "new-password");
    assert!(verify_password("new-password", &stored.password_hash).unwrap());
    assert!(!verify_password("old-password", &stored.password_hash).unwrap());

    Ok(())
}

/// Expect InvalidCredentials and an unchanged hash for a wrong current
/// password
#[tokio::test]
async fn rejects_wrong_current_password() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let user = test
        .user()
        .insert_user_with_password("qm", "old-password")
        .await?;

    let service = UserService::new(&test.db);
    let result = service
        .change_password(&ChangePasswordDto {
            user_id: user.id,
            current_password: "guess".to_string(),
            new_password: "new-password".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(Error::UserError(UserError::InvalidCredentials))
    ));

    let stored = entity::prelude::ArsenalUser::find_by_id(user.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(stored.password_hash, user.password_hash);

    Ok(())
}

/// Expect NotFound for a user that does not exist
#[tokio::test]
async fn fails_for_nonexistent_user() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;

    let service = UserService::new(&test.db);
    let result = service
        .change_password(&ChangePasswordDto {
            user_id: 999,
            current_password: "whatever".to_string(),
            new_password: "new-password".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(Error::UserError(UserError::NotFound(999)))
    ));

    Ok(())
}
