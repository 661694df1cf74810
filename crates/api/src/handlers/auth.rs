//! Handlers for the `/auth` resource (student login, staff login, token
//! introspection).

use axum::extract::State;
use axum::Json;
use dineflow_core::error::CoreError;
use dineflow_core::password::verify_password;
use dineflow_core::roles::ROLE_STUDENT;
use dineflow_core::validation::require_fields;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for both login endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub role: String,
    pub user: UserInfo,
}

/// Public identity of the caller.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Response for `GET /auth/me`.
#[derive(Debug, Serialize)]
pub struct SessionInfo {
    pub role: String,
    pub user: UserInfo,
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
}

fn issue_token(state: &AppState, subject: &str, role: &str) -> AppResult<String> {
    generate_access_token(subject, role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/student/login
///
/// Authenticate a student by email + password. Registrations still awaiting
/// approval are refused with 403.
pub async fn student_login(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<LoginRequest>,
) -> AppResult<Json<ApiResponse<AuthResponse>>> {
    require_fields(&[
        ("email", input.email.as_deref()),
        ("password", input.password.as_deref()),
    ])?;
    let email = input.email.as_deref().unwrap_or_default().trim();
    let password = input.password.as_deref().unwrap_or_default();

    let Some(student) = state.repos.find_student_by_email(email).await? else {
        if state.repos.find_request_by_email(email).await?.is_some() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Your registration is pending approval".into(),
            )));
        }
        return Err(invalid_credentials());
    };

    let valid = verify_password(password, &student.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !valid {
        return Err(invalid_credentials());
    }

    let token = issue_token(&state, &student.id, ROLE_STUDENT)?;
    tracing::info!(student_id = %student.id, "Student logged in");

    Ok(Json(ApiResponse::ok(AuthResponse {
        token,
        role: ROLE_STUDENT.to_string(),
        user: UserInfo {
            id: student.id,
            name: student.name,
            email: student.email,
        },
    })))
}

/// POST /api/auth/login
///
/// Staff login against the configured manager and admin accounts.
pub async fn staff_login(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<LoginRequest>,
) -> AppResult<Json<ApiResponse<AuthResponse>>> {
    require_fields(&[
        ("email", input.email.as_deref()),
        ("password", input.password.as_deref()),
    ])?;
    let email = input.email.as_deref().unwrap_or_default();
    let password = input.password.as_deref().unwrap_or_default();

    let account = state
        .config
        .find_staff(email, password)
        .ok_or_else(invalid_credentials)?;

    let token = issue_token(&state, account.role, account.role)?;
    tracing::info!(role = account.role, "Staff logged in");

    Ok(Json(ApiResponse::ok(AuthResponse {
        token,
        role: account.role.to_string(),
        user: UserInfo {
            id: account.role.to_string(),
            name: account.name.clone(),
            email: account.email.clone(),
        },
    })))
}

/// GET /api/auth/me
///
/// Describe the caller of a valid token.
pub async fn me(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<SessionInfo>>> {
    let info = if user.role == ROLE_STUDENT {
        let student = state
            .repos
            .students
            .find(&user.user_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Student", &user.user_id))?;
        UserInfo {
            id: student.id,
            name: student.name,
            email: student.email,
        }
    } else {
        let account = state.config.staff_for_role(&user.role).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Unknown account role".into()))
        })?;
        UserInfo {
            id: account.role.to_string(),
            name: account.name.clone(),
            email: account.email.clone(),
        }
    };

    Ok(Json(ApiResponse::ok(SessionInfo {
        role: user.role,
        user: info,
    })))
}
