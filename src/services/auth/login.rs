use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::users::entities::{User, UserStatus};
use crate::models::{
    ApiResponse, ErrorCode,
    auth::{LoginRequest, LoginResponse},
};
use crate::utils::jwt;
use crate::utils::password::verify_password;

use super::AuthService;

// Deactivated accounts keep their credentials but cannot open a session
fn inactive_account_response(user: &User) -> Option<HttpResponse> {
    if user.status == UserStatus::Active {
        return None;
    }
    Some(HttpResponse::Forbidden().json(ApiResponse::error_empty(
        ErrorCode::AccountInactive,
        "Account is inactive",
    )))
}

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    match storage.get_user_by_email(&login_request.email).await {
        Ok(Some(user)) => {
            if let Some(response) = inactive_account_response(&user) {
                tracing::warn!("Login attempt on inactive account {}", user.email);
                return Ok(response);
            }

            if verify_password(&login_request.password, &user.password_hash) {
                let _ = storage.update_last_login(user.id).await;

                match user
                    .generate_token_pair(login_request.remember_me.then(|| {
                        chrono::Duration::days(config.jwt.refresh_token_remember_me_expiry)
                    }))
                    .await
                {
                    Ok(token_pair) => {
                        tracing::info!("User {} logged in successfully", user.email);

                        let response = LoginResponse {
                            access_token: token_pair.access_token,
                            expires_in: config.jwt.access_token_expiry * 60,
                            user,
                            created_at: chrono::Utc::now(),
                        };

                        let refresh_cookie =
                            jwt::JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token);

                        Ok(HttpResponse::Ok()
                            .cookie(refresh_cookie)
                            .json(ApiResponse::success(response, "Login successful")))
                    }
                    Err(e) => {
                        tracing::error!("Failed to generate JWT token: {}", e);
                        Ok(
                            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                                ErrorCode::InternalServerError,
                                "Login failed, unable to generate token",
                            )),
                        )
                    }
                }
            } else {
                Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::AuthFailed,
                    "Email or password is incorrect",
                )))
            }
        }
        Ok(None) => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Email or password is incorrect",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Login failed: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::UserRole;
    use actix_web::http::StatusCode;

    fn user_with_status(status: UserStatus) -> User {
        User {
            id: 1,
            email: "student@example.com".to_string(),
            password_hash: String::new(),
            first_name: "Alice".to_string(),
            last_name: "Martin".to_string(),
            role: UserRole::Student,
            status,
            last_login: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_inactive_account_is_rejected_with_403() {
        let response = inactive_account_response(&user_with_status(UserStatus::Inactive))
            .expect("inactive account must be refused");
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_active_account_passes_the_gate() {
        assert!(inactive_account_response(&user_with_status(UserStatus::Active)).is_none());
    }
}
