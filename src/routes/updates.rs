use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::forum::requests::UpdatesQueryParams;
use crate::services::ForumService;
use crate::utils::SafeAssignmentIdI64;

static FORUM_SERVICE: Lazy<ForumService> = Lazy::new(ForumService::new_lazy);

// Polled by clients; `since` is the previous poll's `now`
pub async fn get_updates(
    req: HttpRequest,
    assignment_id: SafeAssignmentIdI64,
    query: web::Query<UpdatesQueryParams>,
) -> ActixResult<HttpResponse> {
    FORUM_SERVICE
        .get_updates(assignment_id.0, query.into_inner(), &req)
        .await
}

pub fn configure_updates_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/updates")
            .wrap(middlewares::RequireJWT)
            .route("/{assignment_id}", web::get().to(get_updates)),
    );
}
