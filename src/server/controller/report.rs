use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        report::ReportDto,
    },
    server::{
        error::{report::ReportError, Error},
        model::{app::AppState, db::ReportModel},
        service::report::{ReportService, ReportUpload},
    },
};

pub static REPORT_TAG: &str = "report";

fn to_dto(report: ReportModel) -> ReportDto {
    ReportDto {
        id: report.id,
        name: report.name,
        report_type: report.report_type,
        period: report.period,
        description: report.description,
        file_size: report.file_size,
        uploaded_by: report.uploaded_by,
        download_count: report.download_count,
        last_accessed: report.last_accessed,
        created_at: report.created_at,
    }
}

/// Get all report metadata, newest first
#[utoipa::path(
    get,
    path = "/api/reports",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "All reports", body = Vec<ReportDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reports(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let reports = ReportService::new(&state.db, &state.report_dir)
        .list_reports()
        .await?;

    let dtos: Vec<ReportDto> = reports.into_iter().map(to_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Upload a report PDF with its metadata as multipart form data
///
/// Expected fields: `name`, `report_type`, `period`, optional `description`,
/// optional `uploaded_by` (user ID), and the PDF as `file`.
#[utoipa::path(
    post,
    path = "/api/reports",
    tag = REPORT_TAG,
    responses(
        (status = 201, description = "Report stored", body = ReportDto),
        (status = 400, description = "Missing file or not a PDF", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_report(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let mut name = None;
    let mut report_type = None;
    let mut period = None;
    let mut description = None;
    let mut uploaded_by = None;
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ReportError::MalformedField {
            field: "body".to_string(),
            reason: e.to_string(),
        })?
    {
        let field_name = field.name().unwrap_or_default().to_string();

        match field_name.as_str() {
            "name" => name = Some(text_field(field, "name").await?),
            "report_type" => report_type = Some(text_field(field, "report_type").await?),
            "period" => period = Some(text_field(field, "period").await?),
            "description" => description = Some(text_field(field, "description").await?),
            "uploaded_by" => {
                let raw = text_field(field, "uploaded_by").await?;
                let id = raw
                    .parse::<i32>()
                    .map_err(|e| ReportError::MalformedField {
                        field: "uploaded_by".to_string(),
                        reason: e.to_string(),
                    })?;
                uploaded_by = Some(id);
            }
            "file" => {
                let file_name = field.file_name().unwrap_or("report.pdf").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ReportError::MalformedField {
                        field: "file".to_string(),
                        reason: e.to_string(),
                    })?
                    .to_vec();
                file = Some((file_name, bytes));
            }
            _ => {}
        }
    }

    let (original_file_name, bytes) = file.ok_or(ReportError::MissingFile)?;

    let upload = ReportUpload {
        name: name.unwrap_or_else(|| original_file_name.clone()),
        report_type: report_type.unwrap_or_else(|| "uploaded".to_string()),
        period: period.unwrap_or_default(),
        description,
        uploaded_by,
        original_file_name,
        bytes,
    };

    let report = ReportService::new(&state.db, &state.report_dir)
        .store(upload)
        .await?;

    Ok((StatusCode::CREATED, Json(to_dto(report))))
}

/// Download a report's PDF, bumping its download counter
#[utoipa::path(
    get,
    path = "/api/reports/{id}/download",
    tag = REPORT_TAG,
    params(("id" = i32, Path, description = "Report ID")),
    responses(
        (status = 200, description = "PDF bytes"),
        (status = 404, description = "Report not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn download_report(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let (report, bytes) = ReportService::new(&state.db, &state.report_dir)
        .download(id)
        .await?;

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", report.file_name),
        ),
    ];

    Ok((StatusCode::OK, headers, bytes))
}

/// Delete a report's metadata and file
#[utoipa::path(
    delete,
    path = "/api/reports/{id}",
    tag = REPORT_TAG,
    params(("id" = i32, Path, description = "Report ID")),
    responses(
        (status = 200, description = "Report deleted", body = MessageDto),
        (status = 404, description = "Report not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_report(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    ReportService::new(&state.db, &state.report_dir)
        .delete(id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Report deleted successfully".to_string(),
        }),
    ))
}

async fn text_field(
    field: axum::extract::multipart::Field<'_>,
    name: &str,
) -> Result<String, ReportError> {
    field.text().await.map_err(|e| ReportError::MalformedField {
        field: name.to_string(),
        reason: e.to_string(),
    })
}
