/// Expiry warning window used when tests build an `AppState`
pub const TEST_EXPIRY_WARNING_DAYS: i64 = 30;

/// Password every fixture user is created with unless a test supplies one
pub const TEST_PASSWORD: &str = "correct-horse-battery";
