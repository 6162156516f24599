use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::services::FileService;
use crate::utils::SafeFileToken;

static FILE_SERVICE: Lazy<FileService> = Lazy::new(FileService::new_lazy);

pub async fn upload_file(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    FILE_SERVICE.handle_upload(&req, payload).await
}

pub async fn download_file(
    req: HttpRequest,
    file_token: SafeFileToken,
) -> ActixResult<HttpResponse> {
    FILE_SERVICE.handle_download(&req, file_token.0).await
}

pub fn configure_file_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/files")
            .wrap(middlewares::RequireJWT)
            .route("/upload", web::post().to(upload_file))
            .route("/{file_token}", web::get().to(download_file)),
    );
}
