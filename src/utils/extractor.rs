//! Typed path extractors that reject malformed ids with a JSON error
//! body instead of actix's default plain-text 404/400.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, HttpResponse, error::InternalError};
use std::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

fn bad_path_error(message: &str) -> actix_web::Error {
    let response = HttpResponse::BadRequest()
        .json(ApiResponse::<()>::error_empty(ErrorCode::InvalidParameter, message));
    InternalError::from_response(message.to_string(), response).into()
}

macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok())
                    .filter(|id| *id > 0);
                ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => Err(bad_path_error(concat!(
                        "Path parameter '",
                        $param,
                        "' must be a positive integer"
                    ))),
                })
            }
        }
    };
}

define_safe_i64_extractor!(SafeUserIdI64, "user_id");
define_safe_i64_extractor!(SafeFacultyIdI64, "faculty_id");
define_safe_i64_extractor!(SafePromotionIdI64, "promotion_id");
define_safe_i64_extractor!(SafeCourseIdI64, "course_id");
define_safe_i64_extractor!(SafeAssignmentIdI64, "assignment_id");
define_safe_i64_extractor!(SafeGroupIdI64, "group_id");
define_safe_i64_extractor!(SafeContributionIdI64, "contribution_id");
define_safe_i64_extractor!(SafeTopicIdI64, "topic_id");

/// Download tokens are opaque but constrained to a safe alphabet so
/// they can never traverse the upload directory.
#[derive(Debug, Clone)]
pub struct SafeFileToken(pub String);

impl FromRequest for SafeFileToken {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = req.match_info().get("file_token").unwrap_or_default();
        let valid = !token.is_empty()
            && token.len() <= 64
            && token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-');
        ready(if valid {
            Ok(SafeFileToken(token.to_string()))
        } else {
            Err(bad_path_error("Path parameter 'file_token' is malformed"))
        })
    }
}
