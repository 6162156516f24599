use serde::Deserialize;

// Login request (from HTTP request)
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Account email
    pub email: String,
    /// Password
    pub password: String,
    /// Extend the refresh token lifetime
    #[serde(default)]
    pub remember_me: bool,
}

// Profile update for the authenticated account
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}
