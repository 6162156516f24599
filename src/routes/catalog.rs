use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::catalog::requests::{
    CourseQueryParams, CreateCourseRequest, CreateFacultyRequest, CreatePromotionRequest,
    PromotionQueryParams, UpdateCourseRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::CatalogService;
use crate::utils::SafeCourseIdI64;

static CATALOG_SERVICE: Lazy<CatalogService> = Lazy::new(CatalogService::new_lazy);

pub async fn list_faculties(req: HttpRequest) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.list_faculties(&req).await
}

pub async fn create_faculty(
    req: HttpRequest,
    faculty_data: web::Json<CreateFacultyRequest>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE
        .create_faculty(faculty_data.into_inner(), &req)
        .await
}

pub async fn list_promotions(
    req: HttpRequest,
    query: web::Query<PromotionQueryParams>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE
        .list_promotions(query.into_inner().faculty_id, &req)
        .await
}

pub async fn create_promotion(
    req: HttpRequest,
    promotion_data: web::Json<CreatePromotionRequest>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE
        .create_promotion(promotion_data.into_inner(), &req)
        .await
}

pub async fn list_courses(
    req: HttpRequest,
    query: web::Query<CourseQueryParams>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE
        .list_courses(query.into_inner().promotion_id, &req)
        .await
}

pub async fn create_course(
    req: HttpRequest,
    course_data: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE
        .create_course(course_data.into_inner(), &req)
        .await
}

pub async fn get_course(req: HttpRequest, course_id: SafeCourseIdI64) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.get_course(course_id.0, &req).await
}

pub async fn update_course(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    update_data: web::Json<UpdateCourseRequest>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE
        .update_course(course_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_course(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.delete_course(course_id.0, &req).await
}

pub fn configure_catalog_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/catalog")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/faculties")
                    .route(web::get().to(list_faculties))
                    .route(
                        web::post()
                            .to(create_faculty)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/promotions")
                    .route(web::get().to(list_promotions))
                    .route(
                        web::post()
                            .to(create_promotion)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/courses")
                    .route(web::get().to(list_courses))
                    .route(
                        web::post().to(create_course).wrap(
                            middlewares::RequireRole::new_any(UserRole::professor_roles()),
                        ),
                    ),
            )
            .service(
                web::resource("/courses/{course_id}")
                    .route(web::get().to(get_course))
                    .route(
                        web::put().to(update_course).wrap(
                            middlewares::RequireRole::new_any(UserRole::professor_roles()),
                        ),
                    )
                    .route(
                        web::delete().to(delete_course).wrap(
                            middlewares::RequireRole::new_any(UserRole::professor_roles()),
                        ),
                    ),
            ),
    );
}
