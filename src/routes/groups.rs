use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::groups::requests::{
    AddMemberRequest, CreateGroupRequest, SubmitReportRequest, UpdateGroupRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::GroupService;
use crate::utils::{SafeAssignmentIdI64, SafeGroupIdI64};

static GROUP_SERVICE: Lazy<GroupService> = Lazy::new(GroupService::new_lazy);

pub async fn list_groups(
    req: HttpRequest,
    assignment_id: SafeAssignmentIdI64,
) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.list_groups(assignment_id.0, &req).await
}

pub async fn create_group(
    req: HttpRequest,
    group_data: web::Json<CreateGroupRequest>,
) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.create_group(group_data.into_inner(), &req).await
}

pub async fn join_group(req: HttpRequest, group_id: SafeGroupIdI64) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.join_group(group_id.0, &req).await
}

pub async fn leave_group(req: HttpRequest, group_id: SafeGroupIdI64) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.leave_group(group_id.0, &req).await
}

pub async fn list_members(
    req: HttpRequest,
    group_id: SafeGroupIdI64,
) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.list_members(group_id.0, &req).await
}

pub async fn add_member(
    req: HttpRequest,
    group_id: SafeGroupIdI64,
    member_data: web::Json<AddMemberRequest>,
) -> ActixResult<HttpResponse> {
    GROUP_SERVICE
        .add_member(group_id.0, member_data.into_inner(), &req)
        .await
}

pub async fn list_eligible_students(
    req: HttpRequest,
    group_id: SafeGroupIdI64,
) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.list_eligible_students(group_id.0, &req).await
}

pub async fn submit_report(
    req: HttpRequest,
    group_id: SafeGroupIdI64,
    report_data: web::Json<SubmitReportRequest>,
) -> ActixResult<HttpResponse> {
    GROUP_SERVICE
        .submit_report(group_id.0, report_data.into_inner(), &req)
        .await
}

pub async fn list_reports(req: HttpRequest, group_id: SafeGroupIdI64) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.list_reports(group_id.0, &req).await
}

pub async fn update_group(
    req: HttpRequest,
    group_id: SafeGroupIdI64,
    update_data: web::Json<UpdateGroupRequest>,
) -> ActixResult<HttpResponse> {
    GROUP_SERVICE
        .update_group(group_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_group(req: HttpRequest, group_id: SafeGroupIdI64) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.delete_group(group_id.0, &req).await
}

pub fn configure_group_routes(cfg: &mut web::ServiceConfig) {
    // The join-page listing hangs off the assignment scope
    cfg.service(
        web::scope("/api/assignments/{assignment_id}/groups")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_groups)),
    );

    cfg.service(
        web::scope("/api/groups")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(
                    web::post()
                        .to(create_group)
                        .wrap(middlewares::RequireRole::new_any(
                            UserRole::professor_roles(),
                        )),
                ),
            )
            .route("/{group_id}/join", web::post().to(join_group))
            .route("/{group_id}/leave", web::post().to(leave_group))
            .service(
                web::resource("/{group_id}/members")
                    .route(web::get().to(list_members))
                    .route(
                        web::post().to(add_member).wrap(
                            middlewares::RequireRole::new_any(UserRole::professor_roles()),
                        ),
                    ),
            )
            .service(
                web::resource("/{group_id}/reports")
                    .route(web::get().to(list_reports))
                    .route(web::post().to(submit_report)),
            )
            .service(
                web::resource("/{group_id}/eligible-students").route(
                    web::get().to(list_eligible_students).wrap(
                        middlewares::RequireRole::new_any(UserRole::professor_roles()),
                    ),
                ),
            )
            .service(
                web::resource("/{group_id}")
                    .route(
                        web::put().to(update_group).wrap(
                            middlewares::RequireRole::new_any(UserRole::professor_roles()),
                        ),
                    )
                    .route(
                        web::delete().to(delete_group).wrap(
                            middlewares::RequireRole::new_any(UserRole::professor_roles()),
                        ),
                    ),
            ),
    );
}
