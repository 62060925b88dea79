#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::{DateTime, Utc};
use hiremate_backend::{
    config::{Config, LogFormat},
    database::store::{InMemoryStore, Snapshot},
    models::{
        application::{ApplicationRecord, ApplicationStatus},
        candidate::{CandidateRecord, EmploymentPreference, JobPreferences, WorkModePreference},
        job::{EmploymentType, JobRecord, JobStatus, WorkMode},
    },
    routes::build_router,
    AppState,
};
use serde_json::Value as JsonValue;
use tower::ServiceExt;
use uuid::Uuid;

pub fn test_config() -> Config {
    Config {
        server_address: "127.0.0.1:0".into(),
        seed_data_path: None,
        cors_allowed_origin: None,
        default_trend_period: "6months".into(),
        log_level: "debug".into(),
        log_format: LogFormat::Pretty,
    }
}

pub fn app(snapshot: Snapshot) -> Router {
    let store = InMemoryStore::from_snapshot(snapshot).expect("seed snapshot");
    build_router(AppState::new(test_config(), Arc::new(store)))
}

pub fn request(
    method: &str,
    uri: &str,
    actor: Option<(Uuid, &str)>,
    body: Option<JsonValue>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some((id, role)) = actor {
        builder = builder
            .header("x-user-id", id.to_string())
            .header("x-user-role", role);
    }
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, JsonValue) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub fn candidate(
    name: &str,
    age: Option<u32>,
    skills: &[&str],
    experience: Option<u32>,
    work_mode: WorkModePreference,
) -> CandidateRecord {
    CandidateRecord {
        id: Uuid::new_v4(),
        name: name.to_string(),
        age,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        experience,
        job_preferences: JobPreferences {
            employment_type: EmploymentPreference::Both,
            work_mode,
        },
        created_at: None,
        updated_at: None,
    }
}

pub fn job(employer_id: Uuid, title: &str, status: JobStatus, created_at: DateTime<Utc>) -> JobRecord {
    JobRecord {
        id: Uuid::new_v4(),
        employer_id,
        title: title.to_string(),
        description: format!("{title} role"),
        company_name: "Acme".into(),
        required_skills: vec!["Rust".into()],
        experience_required: 2,
        employment_type: EmploymentType::FullTime,
        work_mode: WorkMode::Remote,
        location: None,
        status,
        created_at,
        updated_at: None,
    }
}

pub fn application(
    job_id: Uuid,
    candidate_id: Uuid,
    status: ApplicationStatus,
    created_at: DateTime<Utc>,
) -> ApplicationRecord {
    ApplicationRecord {
        id: Uuid::new_v4(),
        job_id,
        candidate_id,
        status,
        cover_letter: None,
        notes: None,
        created_at,
        reviewed_at: None,
    }
}
