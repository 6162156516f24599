use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use crate::middlewares::RequireJWT;
use crate::models::PaginationInfo;
use crate::models::assignments::requests::AssignmentListQuery;
use crate::models::assignments::responses::AssignmentListResponse;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

use super::AssignmentService;

// Students only ever see their own promotion's assignments; the query
// parameter is overridden, never trusted. A student without a promotion
// has nothing visible yet.
fn scope_query_to_promotion(
    mut query: AssignmentListQuery,
    promotion_id: Option<i64>,
) -> Option<AssignmentListQuery> {
    query.promotion_id = Some(promotion_id?);
    Some(query)
}

fn empty_page(query: &AssignmentListQuery) -> AssignmentListResponse {
    AssignmentListResponse {
        items: vec![],
        pagination: PaginationInfo {
            page: query.page.unwrap_or(1).max(1),
            page_size: query.size.unwrap_or(20),
            total: 0,
            total_pages: 0,
        },
    }
}

pub async fn handle_list_assignments(
    service: &AssignmentService,
    query: AssignmentListQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = if RequireJWT::extract_user_role(request) == Some(UserRole::Student) {
        let Some(user_id) = RequireJWT::extract_user_id(request) else {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        };

        let profile = match storage.get_student_profile_by_user_id(user_id).await {
            Ok(Some(profile)) => profile,
            Ok(None) => {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::ProfileNotProvisioned,
                    "No student profile for this account",
                )));
            }
            Err(e) => {
                error!("Failed to resolve student profile: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Failed to list assignments",
                    )),
                );
            }
        };

        match scope_query_to_promotion(query.clone(), profile.promotion_id) {
            Some(scoped) => scoped,
            None => {
                return Ok(HttpResponse::Ok().json(ApiResponse::success(
                    empty_page(&query),
                    "Assignments retrieved",
                )));
            }
        }
    } else {
        query
    };

    match storage.list_assignments_with_pagination(query).await {
        Ok(list) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            list,
            "Assignments retrieved",
        ))),
        Err(e) => {
            tracing::error!("Failed to list assignments: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list assignments",
                )),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_with_promotion(promotion_id: Option<i64>) -> AssignmentListQuery {
        AssignmentListQuery {
            page: Some(1),
            size: Some(20),
            promotion_id,
            author_id: None,
            search: None,
        }
    }

    #[test]
    fn test_student_query_is_forced_onto_own_promotion() {
        // A student asking for another promotion still gets their own
        let scoped = scope_query_to_promotion(query_with_promotion(Some(99)), Some(3))
            .expect("promotion assigned");
        assert_eq!(scoped.promotion_id, Some(3));
    }

    #[test]
    fn test_student_without_promotion_sees_nothing() {
        assert!(scope_query_to_promotion(query_with_promotion(None), None).is_none());

        let page = empty_page(&query_with_promotion(None));
        assert!(page.items.is_empty());
        assert_eq!(page.pagination.total, 0);
    }
}
