mod get_current_user;
mod login_user;
mod register_user;
mod update_profile;
mod user_directory;

pub use get_current_user::{GetCurrentUserError, GetCurrentUserUseCase};
pub use login_user::{LoginCommand, LoginCommandError, LoginError, LoginUserUseCase};
pub use register_user::{
    AuthSession, RegisterUserCommand, RegisterUserCommandError, RegisterUserError,
    RegisterUserUseCase, MIN_PASSWORD_LENGTH,
};
pub use update_profile::{
    UpdateProfileCommand, UpdateProfileCommandError, UpdateProfileError, UpdateProfileUseCase,
    MAX_FULL_NAME_LENGTH, MAX_PHONE_LENGTH,
};
pub use user_directory::{
    GetUserUseCase, ListUsersUseCase, UserDirectoryError, DEFAULT_USER_LIST_LIMIT,
    MAX_USER_LIST_LIMIT,
};
