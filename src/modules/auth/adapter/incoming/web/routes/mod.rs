mod current_user;
mod login_user;
mod register_user;
mod update_profile;
mod users;

pub use current_user::get_current_user_handler;
pub use login_user::{login_user_handler, LoginRequestDto};
pub use register_user::{register_user_handler, AuthSessionResponse, RegisterUserRequest};
pub use update_profile::{update_profile_handler, UpdateProfileRequest};
pub use users::{get_user_handler, list_users_handler, UserListQuery};
pub use current_user::__path_get_current_user_handler;
pub use login_user::__path_login_user_handler;
pub use register_user::__path_register_user_handler;
pub use update_profile::__path_update_profile_handler;
pub use users::{__path_get_user_handler, __path_list_users_handler};
