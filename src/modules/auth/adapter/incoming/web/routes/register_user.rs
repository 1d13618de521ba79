use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::UserProfile;
use crate::auth::application::ports::incoming::use_cases::{
    AuthSession, RegisterUserCommand, RegisterUserCommandError, RegisterUserError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Request body for user registration
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    /// 3-50 letters, digits, '_' or '.'
    #[schema(example = "ana.lopez")]
    pub username: String,

    #[schema(example = "ana@example.com")]
    pub email: String,

    /// Minimum 8 characters
    #[schema(example = "SecurePass123!")]
    pub password: String,

    #[schema(example = "Ana Lopez")]
    pub full_name: String,

    #[schema(example = "+62 812 3456 7890")]
    pub phone: Option<String>,

    pub invitation_code: Option<String>,

    pub profile_image: Option<String>,
}

/// Token plus the account it was issued for.
#[derive(Serialize, ToSchema)]
pub struct AuthSessionResponse {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    pub user: UserProfile,
}

impl From<AuthSession> for AuthSessionResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            token: session.token,
            user: session.user,
        }
    }
}

fn map_command_error(err: RegisterUserCommandError) -> HttpResponse {
    let code = match err {
        RegisterUserCommandError::InvalidUsername => "INVALID_USERNAME",
        RegisterUserCommandError::InvalidEmail => "INVALID_EMAIL",
        RegisterUserCommandError::PasswordTooShort => "INVALID_PASSWORD",
        RegisterUserCommandError::EmptyFullName | RegisterUserCommandError::FullNameTooLong => {
            "INVALID_FULL_NAME"
        }
    };
    ApiResponse::bad_request(code, &err.to_string())
}

/// Register a new member
///
/// Creates a verified account and returns a bearer token for it.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<AuthSessionResponse>)),
        (
            status = 400,
            description = "Invalid registration input",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_PASSWORD", "message": "Password must be at least 8 characters" }
            })
        ),
        (
            status = 409,
            description = "Email or username already in use",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "EMAIL_TAKEN", "message": "Email already registered" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match RegisterUserCommand::new(
        dto.username,
        dto.email,
        dto.password,
        dto.full_name,
        dto.phone,
        dto.profile_image,
        dto.invitation_code,
    ) {
        Ok(cmd) => cmd,
        Err(e) => {
            warn!(error = %e, "Invalid registration input");
            return map_command_error(e);
        }
    };

    let username = command.username().to_string();

    match data.auth.register.execute(command).await {
        Ok(session) => {
            info!(user_id = %session.user.id, username = %username, "User registered");
            ApiResponse::created(AuthSessionResponse::from(session))
        }
        Err(RegisterUserError::EmailAlreadyExists) => {
            warn!(username = %username, "Registration rejected: email taken");
            ApiResponse::conflict("EMAIL_TAKEN", "Email already registered")
        }
        Err(RegisterUserError::UsernameAlreadyExists) => {
            warn!(username = %username, "Registration rejected: username taken");
            ApiResponse::conflict("USERNAME_TAKEN", "Username already taken")
        }
        Err(e) => {
            error!(username = %username, error = %e, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}
