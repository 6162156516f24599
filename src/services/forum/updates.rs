use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::{DateTime, Utc};
use tracing::error;

use crate::config::AppConfig;
use crate::models::forum::requests::UpdatesQueryParams;
use crate::models::{ApiResponse, ErrorCode};

use super::ForumService;

// A missing or unparsable `since` falls back to a short sliding window,
// which matches the polling interval of the feed consumers.
fn resolve_since(raw: Option<&str>, fallback_window: i64, now: DateTime<Utc>) -> DateTime<Utc> {
    raw.and_then(|raw| {
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
    })
    .unwrap_or_else(|| now - chrono::Duration::seconds(fallback_window))
}

pub async fn handle_get_updates(
    service: &ForumService,
    assignment_id: i64,
    params: UpdatesQueryParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "Assignment not found",
            )));
        }
        Err(e) => {
            error!("Failed to check assignment: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to load updates",
                )),
            );
        }
    }

    let since = resolve_since(
        params.since.as_deref(),
        AppConfig::get().forum.updates_fallback_window,
        chrono::Utc::now(),
    );

    match storage.get_updates(assignment_id, since).await {
        Ok(updates) => Ok(HttpResponse::Ok().json(ApiResponse::success(updates, "Updates retrieved"))),
        Err(e) => {
            error!("Failed to load updates for {}: {}", assignment_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to load updates",
                )),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: i64 = 5;

    #[test]
    fn test_valid_since_is_parsed_exactly() {
        let now = Utc::now();
        let earlier = now - chrono::Duration::seconds(42);
        let since = resolve_since(Some(&earlier.to_rfc3339()), WINDOW, now);
        assert_eq!(since, earlier);
    }

    #[test]
    fn test_missing_since_falls_back_to_window() {
        let now = Utc::now();
        let since = resolve_since(None, WINDOW, now);
        assert_eq!(since, now - chrono::Duration::seconds(WINDOW));
    }

    #[test]
    fn test_unparsable_since_falls_back_to_window() {
        let now = Utc::now();
        for raw in ["yesterday", "1690000000", "2024-13-40T99:99:99Z", ""] {
            let since = resolve_since(Some(raw), WINDOW, now);
            assert_eq!(since, now - chrono::Duration::seconds(WINDOW));
        }
    }

    // The feed filters strictly after `since` and hands back `now` for
    // the next poll; chaining `since = previous now` must partition the
    // timeline with no duplicates and no gaps.
    #[test]
    fn test_chained_polls_partition_the_timeline() {
        let t0 = Utc::now();
        let posted_at: Vec<i64> = (1..=10).map(|n| t0.timestamp() + n).collect();

        let window = |since: DateTime<Utc>, now: DateTime<Utc>| -> Vec<i64> {
            posted_at
                .iter()
                .copied()
                .filter(|ts| *ts > since.timestamp() && *ts <= now.timestamp())
                .collect()
        };

        let now1 = t0 + chrono::Duration::seconds(4);
        let now2 = t0 + chrono::Duration::seconds(10);

        let first = window(resolve_since(Some(&t0.to_rfc3339()), WINDOW, now1), now1);
        let second = window(resolve_since(Some(&now1.to_rfc3339()), WINDOW, now2), now2);

        for ts in &first {
            assert!(!second.contains(ts), "duplicate item across polls");
        }
        let mut all = first;
        all.extend(&second);
        assert_eq!(all, posted_at, "gap or reordering across polls");
    }
}
