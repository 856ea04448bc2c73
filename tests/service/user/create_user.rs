use arsenal::{
    model::user::CreateUserDto,
    server::{
        error::{user::UserError, Error},
        service::user::{verify_password, UserService},
    },
};
use arsenal_test_utils::prelude::*;

fn user_dto(username: &str) -> CreateUserDto {
    CreateUserDto {
        username: username.to_string(),
        name: "Refa Jahan".to_string(),
        rank: "Captain".to_string(),
        role: "QM".to_string(),
        appointment: Some("Quartermaster".to_string()),
        password: "initial-password".to_string(),
    }
}

/// Expect the created user to carry an argon2 hash that verifies the supplied
/// password
#[tokio::test]
async fn stores_hashed_password() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;

    let service = UserService::new(&test.db);
    let user = service.create_user(&user_dto("qm")).await.unwrap();

    assert!(user.password_hash.starts_with("$argon2"));
    assert_ne!(user.password_hash, "initial-password");
    assert!(verify_password("initial-password", &user.password_hash).unwrap());

    Ok(())
}

/// Expect UsernameTaken for a duplicate username
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;

    let service = UserService::new(&test.db);
    service.create_user(&user_dto("qm")).await.unwrap();

    let result = service.create_user(&user_dto("qm")).await;

    assert!(matches!(
        result,
        Err(Error::UserError(UserError::UsernameTaken(_)))
    ));

    Ok(())
}
