use std::sync::Arc;

use actix_web::web;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::TokenProvider;
use stubs::StaticTokenProvider;

pub mod app_state_builder;
pub mod clock;
pub mod memory;
pub mod stubs;

/// Any bearer other than the rejected one authenticates as the provider's user.
pub const TEST_BEARER: &str = "Bearer test-token";

pub fn token_provider_for(user_id: Uuid) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(StaticTokenProvider::new(user_id));
    web::Data::new(provider)
}
