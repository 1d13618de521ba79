mod get_current_user_service;
mod login_user_service;
mod register_user_service;
mod staff_bootstrap;
mod update_profile_service;
mod user_directory_service;

pub use get_current_user_service::GetCurrentUserService;
pub use login_user_service::LoginUserService;
pub use register_user_service::RegisterUserService;
pub use staff_bootstrap::{
    StaffAccountBootstrap, StaffAccountSpec, StaffBootstrapError, StaffBootstrapOutcome,
};
pub use update_profile_service::UpdateProfileService;
pub use user_directory_service::UserDirectoryService;
