mod change_password;
mod create_user;
