use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::forum::entities::ContributionScope;
use crate::models::forum::requests::{CreateContributionRequest, CreateTopicRequest};
use crate::models::users::entities::UserRole;
use crate::services::{ForumService, TopicService};
use crate::utils::SafeTopicIdI64;

static TOPIC_SERVICE: Lazy<TopicService> = Lazy::new(TopicService::new_lazy);
static FORUM_SERVICE: Lazy<ForumService> = Lazy::new(ForumService::new_lazy);

pub async fn list_topics(req: HttpRequest) -> ActixResult<HttpResponse> {
    TOPIC_SERVICE.list_topics(&req).await
}

pub async fn create_topic(
    req: HttpRequest,
    topic_data: web::Json<CreateTopicRequest>,
) -> ActixResult<HttpResponse> {
    TOPIC_SERVICE.create_topic(topic_data.into_inner(), &req).await
}

pub async fn get_topic_detail(
    req: HttpRequest,
    topic_id: SafeTopicIdI64,
) -> ActixResult<HttpResponse> {
    TOPIC_SERVICE.get_topic_detail(topic_id.0, &req).await
}

pub async fn list_topic_contributions(
    req: HttpRequest,
    topic_id: SafeTopicIdI64,
) -> ActixResult<HttpResponse> {
    FORUM_SERVICE
        .list_contributions(ContributionScope::Topic(topic_id.0), &req)
        .await
}

pub async fn create_topic_contribution(
    req: HttpRequest,
    topic_id: SafeTopicIdI64,
    contribution_data: web::Json<CreateContributionRequest>,
) -> ActixResult<HttpResponse> {
    FORUM_SERVICE
        .create_contribution(
            ContributionScope::Topic(topic_id.0),
            contribution_data.into_inner(),
            &req,
        )
        .await
}

pub fn configure_topic_routes(cfg: &mut web::ServiceConfig) {
    // Nested scope first so "/{topic_id}" does not shadow it
    cfg.service(
        web::scope("/api/topics/{topic_id}/contributions")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_topic_contributions))
                    .route(web::post().to(create_topic_contribution)),
            ),
    );

    cfg.service(
        web::scope("/api/topics")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_topics))
                    .route(
                        web::post()
                            .to(create_topic)
                            .wrap(middlewares::RequireRole::new_any(UserRole::student_roles())),
                    ),
            )
            .route("/{topic_id}", web::get().to(get_topic_detail)),
    );
}
