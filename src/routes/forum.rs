use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::forum::entities::ContributionScope;
use crate::models::forum::requests::{
    CreateCommentRequest, CreateContributionRequest, ReactRequest,
};
use crate::services::ForumService;
use crate::utils::{SafeAssignmentIdI64, SafeContributionIdI64};

static FORUM_SERVICE: Lazy<ForumService> = Lazy::new(ForumService::new_lazy);

pub async fn list_contributions(
    req: HttpRequest,
    assignment_id: SafeAssignmentIdI64,
) -> ActixResult<HttpResponse> {
    FORUM_SERVICE
        .list_contributions(ContributionScope::Assignment(assignment_id.0), &req)
        .await
}

pub async fn create_contribution(
    req: HttpRequest,
    assignment_id: SafeAssignmentIdI64,
    contribution_data: web::Json<CreateContributionRequest>,
) -> ActixResult<HttpResponse> {
    FORUM_SERVICE
        .create_contribution(
            ContributionScope::Assignment(assignment_id.0),
            contribution_data.into_inner(),
            &req,
        )
        .await
}

pub async fn get_contribution_thread(
    req: HttpRequest,
    contribution_id: SafeContributionIdI64,
) -> ActixResult<HttpResponse> {
    FORUM_SERVICE
        .get_contribution_thread(contribution_id.0, &req)
        .await
}

pub async fn create_comment(
    req: HttpRequest,
    contribution_id: SafeContributionIdI64,
    comment_data: web::Json<CreateCommentRequest>,
) -> ActixResult<HttpResponse> {
    FORUM_SERVICE
        .create_comment(contribution_id.0, comment_data.into_inner(), &req)
        .await
}

pub async fn toggle_reaction(
    req: HttpRequest,
    contribution_id: SafeContributionIdI64,
    react_data: web::Json<ReactRequest>,
) -> ActixResult<HttpResponse> {
    FORUM_SERVICE
        .toggle_reaction(contribution_id.0, react_data.into_inner(), &req)
        .await
}

pub fn configure_forum_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/assignments/{assignment_id}/contributions")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_contributions))
                    .route(web::post().to(create_contribution)),
            ),
    );

    cfg.service(
        web::scope("/api/contributions")
            .wrap(middlewares::RequireJWT)
            .route(
                "/{contribution_id}",
                web::get().to(get_contribution_thread),
            )
            .route("/{contribution_id}/comments", web::post().to(create_comment))
            .route(
                "/{contribution_id}/reactions",
                web::post().to(toggle_reaction),
            ),
    );
}
