use crate::AppState;
use actix_web::{http::StatusCode, web, web::Json, HttpResponse, Responder};
use application::command::playback::{
    ActivePlaybackTracker, PlaybackRecordingService, PlaybackRegistry, PlaybackSummary,
    ReportPlaybackCmd,
};
use application::error::AppError;
use domain::playback::LocationDedupPolicy;
use domain::value::{GeoPoint, ListenerId, TrackId};
use infra::repository::postgres::command::active_playback::ActivePlaybackRepositoryImpl;
use infra::repository::postgres::command::listener::ListenerRepositoryImpl;
use infra::repository::postgres::command::playback::PlaybackRepositoryImpl;
use infra::repository::postgres::command::recorded_location::RecordedLocationRepositoryImpl;
use infra::repository::postgres::command::track::TrackRepositoryImpl;
use log::info;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0} {1} not found")]
    ResourceNotFound(String, String),
    #[error("{0}")]
    Internal(String),
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::AggregateNotFound(entity, id) => ApiError::ResourceNotFound(entity, id),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl actix_web::error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::ResourceNotFound(_, _) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        let message = self.to_string();
        HttpResponse::build(self.status_code()).body(message)
    }
}

#[derive(Debug, Deserialize)]
pub struct ReportPlaybackRequest {
    pub listener_id: i64,
    pub track_id: i64,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Serialize)]
pub struct PlaybackReportResponse {
    pub track_id: i64,
    pub title: String,
    pub artist: String,
    pub image_url: String,
    pub external_url: String,
    pub preview_url: Option<String>,
    pub listener_id: i64,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<PlaybackSummary> for PlaybackReportResponse {
    fn from(summary: PlaybackSummary) -> Self {
        Self {
            track_id: summary.track_id.as_i64(),
            title: summary.title,
            artist: summary.artist,
            image_url: summary.image_url,
            external_url: summary.external_url,
            preview_url: summary.preview_url,
            listener_id: summary.listener_id.as_i64(),
            latitude: summary.latitude,
            longitude: summary.longitude,
        }
    }
}

/// 上报一次播放位置
pub async fn report_playback(
    state: web::Data<AppState>,
    Json(body): Json<ReportPlaybackRequest>,
) -> Result<HttpResponse, ApiError> {
    let service = build_service(&state);
    let summary = service
        .report_playback(ReportPlaybackCmd {
            listener_id: ListenerId::from(body.listener_id),
            track_id: TrackId::from(body.track_id),
            point: GeoPoint::new(body.latitude, body.longitude),
        })
        .await?;
    Ok(HttpResponse::Created().json(PlaybackReportResponse::from(summary)))
}

/// ping - 测试服务器连接
pub async fn ping() -> impl Responder {
    info!("ping");
    static PING_RESPONSE: &str = r#"{"status":"ok"}"#;
    HttpResponse::Ok()
        .content_type("application/json")
        .body(PING_RESPONSE)
}

// 仓储和服务按请求构建，连接池在 AppState 里共享
fn build_service(state: &AppState) -> PlaybackRecordingService {
    let playback_repo = Arc::new(PlaybackRepositoryImpl::new(state.db.clone()));
    let listener_repo = Arc::new(ListenerRepositoryImpl::new(state.db.clone()));
    let track_repo = Arc::new(TrackRepositoryImpl::new(state.db.clone()));
    let location_repo = Arc::new(RecordedLocationRepositoryImpl::new(state.db.clone()));
    let active_repo = Arc::new(ActivePlaybackRepositoryImpl::new(state.db.clone()));

    let registry = PlaybackRegistry::new(
        playback_repo,
        listener_repo,
        track_repo.clone(),
        state.id_generator.clone(),
    );
    let tracker = ActivePlaybackTracker::new(active_repo, state.id_generator.clone());
    let dedup_policy = LocationDedupPolicy::new(state.app_cfg.dedup().radius_degrees);

    PlaybackRecordingService::new(
        registry,
        tracker,
        location_repo,
        track_repo,
        dedup_policy,
        state.id_generator.clone(),
    )
}

pub fn configure_service(svc: &mut web::ServiceConfig) {
    svc.route("/playback", web::post().to(report_playback))
        .route("/ping", web::get().to(ping));
}
