use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    GetCurrentUserUseCase, GetUserUseCase, ListUsersUseCase, LoginUserUseCase,
    RegisterUserUseCase, UpdateProfileUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub login: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub current_user: Arc<dyn GetCurrentUserUseCase + Send + Sync>,
    pub list_users: Arc<dyn ListUsersUseCase + Send + Sync>,
    pub get_user: Arc<dyn GetUserUseCase + Send + Sync>,
    pub update_profile: Arc<dyn UpdateProfileUseCase + Send + Sync>,
}
