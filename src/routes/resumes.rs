use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entities::resume;
use crate::error::AppError;
use crate::resume::ParsedResume;
use crate::AppState;

const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];

/// Stored resume record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResumeRecord {
    /// Internal numeric id
    pub id: i32,
    /// Identifier used in public routes
    pub public_id: Uuid,
    /// Original name of the uploaded file
    pub file_name: String,
    pub candidate_name: String,
    pub candidate_title: String,
    pub uploaded_at: DateTime<Utc>,
    /// Full structured resume
    pub parsed: ParsedResume,
}

impl From<resume::Model> for ResumeRecord {
    fn from(model: resume::Model) -> Self {
        // Defensive: a malformed JSON column degrades to defaults rather
        // than failing the request.
        let parsed = serde_json::from_value(model.parsed).unwrap_or_default();
        ResumeRecord {
            id: model.id,
            public_id: model.public_id,
            file_name: model.file_name,
            candidate_name: model.candidate_name,
            candidate_title: model.candidate_title,
            uploaded_at: model.uploaded_at,
            parsed,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ParseResumeResponse {
    pub message: String,
    pub record: ResumeRecord,
}

/// Upload a resume document and store its parsed structure
#[utoipa::path(
    post,
    path = "/resumes/parse",
    request_body(content = Vec<u8>, content_type = "multipart/form-data", description = "Form with a single `file` field (pdf, doc or docx, max 10 MB)"),
    responses(
        (status = 200, description = "Resume parsed and stored", body = ParseResumeResponse),
        (status = 400, description = "Missing file field or invalid document"),
        (status = 502, description = "Resume parser API failure"),
        (status = 500, description = "Database failure")
    )
)]
#[tracing::instrument(skip(state, multipart))]
pub async fn parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParseResumeResponse>, AppError> {
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            // Drain unrelated fields so the stream stays consumable.
            let _ = field.bytes().await?;
            continue;
        }
        let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
        let data = field.bytes().await?;

        let extension = std::path::Path::new(&file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();
        if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
            return Err(AppError::InvalidDocument(
                "only PDF, DOC and DOCX files are allowed".to_string(),
            ));
        }
        if data.len() > MAX_UPLOAD_BYTES {
            return Err(AppError::InvalidDocument(
                "file too large, maximum size is 10MB".to_string(),
            ));
        }
        file = Some((file_name, data.to_vec()));
    }

    let (file_name, data) = file.ok_or(AppError::MissingFile)?;
    tracing::info!("Parsing uploaded resume: {} ({} bytes)", file_name, data.len());

    let mut parsed = state.parser.parse(&file_name, data).await?;
    parsed.ensure_derived();

    let record = resume::ActiveModel {
        public_id: Set(Uuid::new_v4()),
        file_name: Set(file_name),
        candidate_name: Set(parsed.name.clone()),
        candidate_title: Set(parsed.title.clone()),
        parsed: Set(serde_json::to_value(&parsed)?),
        uploaded_at: Set(Utc::now()),
        ..Default::default()
    };
    let stored = record.insert(&state.db).await?;
    tracing::info!("Stored resume {} for {}", stored.public_id, stored.candidate_name);

    Ok(Json(ParseResumeResponse {
        message: "Resume parsed and stored successfully".to_string(),
        record: stored.into(),
    }))
}

/// List all stored resumes, newest upload first
#[utoipa::path(
    get,
    path = "/resumes",
    responses(
        (status = 200, description = "Stored resume records", body = Vec<ResumeRecord>),
        (status = 500, description = "Database failure")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn list_resumes(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResumeRecord>>, AppError> {
    let records = resume::Entity::find()
        .order_by_desc(resume::Column::UploadedAt)
        .order_by_desc(resume::Column::Id)
        .all(&state.db)
        .await?;
    Ok(Json(records.into_iter().map(ResumeRecord::from).collect()))
}

/// Fetch one stored resume by its public id
#[utoipa::path(
    get,
    path = "/resumes/{public_id}",
    params(("public_id" = Uuid, Path, description = "Public id of the stored resume")),
    responses(
        (status = 200, description = "Stored resume record", body = ResumeRecord),
        (status = 404, description = "No resume with this id")
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get_resume(
    State(state): State<AppState>,
    Path(public_id): Path<Uuid>,
) -> Result<Json<ResumeRecord>, AppError> {
    let record = find_by_public_id(&state, public_id).await?;
    Ok(Json(record.into()))
}

pub(crate) async fn find_by_public_id(
    state: &AppState,
    public_id: Uuid,
) -> Result<resume::Model, AppError> {
    resume::Entity::find()
        .filter(resume::Column::PublicId.eq(public_id))
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(public_id.to_string()))
}
