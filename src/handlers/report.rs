use crate::error::{AppError, AppResult};
use crate::models::{Category, EmergencyReport, NewReport, ReportPatch, Severity, Status};
use crate::response::{ApiResponse, PaginatedResponse};
use crate::services::report::{ReportFilter, ReportQuery, SortKey};
use crate::services::SharedReportStore;
use axum::{extract::Path, extract::Query, response::IntoResponse, Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

const MAX_TAGS: usize = 10;
const MAX_TAG_LEN: usize = 30;
const DEFAULT_PER_PAGE: u64 = 20;
const MAX_PER_PAGE: u64 = 100;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReportRequest {
    /// Short headline (1-200 characters)
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    /// What is happening
    #[validate(length(min = 1))]
    pub description: String,
    /// Free-text location (1-200 characters)
    #[validate(length(min = 1, max = 200))]
    pub location: String,
    /// Optional coordinates, e.g. "-33.4269, -70.6344"
    #[validate(length(max = 100))]
    pub coordinates: Option<String>,
    /// Kind of disaster
    pub category: Category,
    /// Urgency level
    pub severity: Severity,
    /// Role of the person filing the report
    #[validate(length(max = 100))]
    pub reporter_role: Option<String>,
    /// Contact phone or address
    #[validate(length(max = 100))]
    pub contact: Option<String>,
    /// Number of people affected (defaults to 0)
    pub affected: Option<i64>,
    /// Free-text tags (up to 10, each max 30 characters)
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateReportRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub location: Option<String>,
    /// Empty string clears the coordinates
    #[validate(length(max = 100))]
    pub coordinates: Option<String>,
    pub category: Option<Category>,
    pub severity: Option<Severity>,
    pub status: Option<Status>,
    #[validate(length(max = 100))]
    pub reporter_role: Option<String>,
    /// Empty string clears the contact
    #[validate(length(max = 100))]
    pub contact: Option<String>,
    pub affected: Option<i64>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SetStatusRequest {
    /// New status; any status may follow any other
    pub status: Status,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ListReportsQuery {
    /// Filter by category
    pub category: Option<Category>,
    /// Filter by severity
    pub severity: Option<Severity>,
    /// Filter by status
    pub status: Option<Status>,
    /// Sort order
    pub sort: Option<SortKey>,
    /// Case-insensitive search over title, description and location
    pub q: Option<String>,
    /// Page number
    pub page: Option<u64>,
    /// Items per page
    pub per_page: Option<u64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReportResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    pub coordinates: Option<String>,
    /// Display date (dd/mm/YYYY)
    pub report_date: String,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
    pub category: Category,
    pub category_label: String,
    pub severity: Severity,
    pub severity_priority: u8,
    pub status: Status,
    pub status_label: String,
    pub reporter_role: String,
    pub contact: Option<String>,
    pub affected: u32,
    pub image_ref: String,
    pub tags: Vec<String>,
}

impl From<EmergencyReport> for ReportResponse {
    fn from(r: EmergencyReport) -> Self {
        Self {
            id: r.id,
            title: r.title,
            description: r.description,
            location: r.location,
            coordinates: r.coordinates,
            report_date: r.report_date,
            created_at: r.created_at.to_rfc3339(),
            category: r.category,
            category_label: r.category.label().to_string(),
            severity: r.severity,
            severity_priority: r.severity.priority(),
            status: r.status,
            status_label: r.status.label().to_string(),
            reporter_role: r.reporter_role,
            contact: r.contact,
            affected: r.affected,
            image_ref: r.image_ref,
            tags: r.tags,
        }
    }
}

fn affected_count(raw: Option<i64>) -> AppResult<Option<u32>> {
    raw.map(|n| {
        u32::try_from(n).map_err(|_| {
            AppError::Validation("affected must be a non-negative whole number".to_string())
        })
    })
    .transpose()
}

fn check_tags(tags: &[String]) -> AppResult<()> {
    if tags.len() > MAX_TAGS {
        return Err(AppError::Validation(format!(
            "Maximum {} tags allowed",
            MAX_TAGS
        )));
    }
    for tag in tags {
        if tag.trim().is_empty() || tag.chars().count() > MAX_TAG_LEN {
            return Err(AppError::Validation(format!(
                "Each tag must be 1-{} characters",
                MAX_TAG_LEN
            )));
        }
    }
    Ok(())
}

#[utoipa::path(
    get,
    path = "/api/v1/reports",
    params(
        ("category" = Option<Category>, Query, description = "Filter by category"),
        ("severity" = Option<Severity>, Query, description = "Filter by severity"),
        ("status" = Option<Status>, Query, description = "Filter by status"),
        ("sort" = Option<SortKey>, Query, description = "created_desc, created_asc, severity_desc, severity_asc, category"),
        ("q" = Option<String>, Query, description = "Search text"),
        ("page" = Option<u64>, Query, description = "Page number"),
        ("per_page" = Option<u64>, Query, description = "Items per page (1-100)"),
    ),
    responses(
        (status = 200, description = "Matching reports", body = PaginatedResponse<ReportResponse>),
    ),
    tag = "reports"
)]
pub async fn list_reports(
    Extension(store): Extension<SharedReportStore>,
    Query(params): Query<ListReportsQuery>,
) -> AppResult<impl IntoResponse> {
    let page = params.page.unwrap_or(1);
    let per_page = params
        .per_page
        .unwrap_or(DEFAULT_PER_PAGE)
        .clamp(1, MAX_PER_PAGE);

    let query = ReportQuery {
        filter: ReportFilter {
            category: params.category,
            severity: params.severity,
            status: params.status,
        },
        sort: params.sort.unwrap_or_default(),
        search: params.q.unwrap_or_default(),
    };

    let reports = store.read().await.query(&query);
    let items = reports.into_iter().map(ReportResponse::from).collect();
    let result = PaginatedResponse::from_all(items, page, per_page);

    if result.total == 0 {
        let message = if query.is_constrained() {
            "No reports match the applied filters"
        } else {
            "No reports registered"
        };
        return Ok(ApiResponse::with_message(result, message.to_string()));
    }

    Ok(ApiResponse::ok(result))
}

#[utoipa::path(
    get,
    path = "/api/v1/reports/{id}",
    params(("id" = Uuid, Path, description = "Report ID")),
    responses(
        (status = 200, description = "Report details", body = ReportResponse),
        (status = 404, description = "Report not found", body = AppError),
    ),
    tag = "reports"
)]
pub async fn get_report(
    Extension(store): Extension<SharedReportStore>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let report = store.read().await.get(id)?;
    Ok(ApiResponse::ok(ReportResponse::from(report)))
}

#[utoipa::path(
    post,
    path = "/api/v1/reports",
    request_body = CreateReportRequest,
    responses(
        (status = 200, description = "Report created", body = ReportResponse),
        (status = 400, description = "Validation error", body = AppError),
    ),
    tag = "reports"
)]
pub async fn create_report(
    Extension(store): Extension<SharedReportStore>,
    Json(payload): Json<CreateReportRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    let tags = payload.tags.unwrap_or_default();
    check_tags(&tags)?;

    let input = NewReport {
        title: payload.title,
        description: payload.description,
        location: payload.location,
        coordinates: payload.coordinates,
        category: payload.category,
        severity: payload.severity,
        reporter_role: payload.reporter_role.unwrap_or_default(),
        contact: payload.contact,
        affected: affected_count(payload.affected)?.unwrap_or(0),
        tags,
    };

    let report = store.write().await.create(input)?;
    Ok(ApiResponse::with_message(
        ReportResponse::from(report),
        "Report created".to_string(),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/reports/{id}",
    params(("id" = Uuid, Path, description = "Report ID")),
    request_body = UpdateReportRequest,
    responses(
        (status = 200, description = "Report updated", body = ReportResponse),
        (status = 400, description = "Validation error", body = AppError),
        (status = 404, description = "Report not found", body = AppError),
    ),
    tag = "reports"
)]
pub async fn update_report(
    Extension(store): Extension<SharedReportStore>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateReportRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;
    if let Some(tags) = &payload.tags {
        check_tags(tags)?;
    }

    let patch = ReportPatch {
        title: payload.title,
        description: payload.description,
        location: payload.location,
        coordinates: payload.coordinates,
        category: payload.category,
        severity: payload.severity,
        status: payload.status,
        reporter_role: payload.reporter_role,
        contact: payload.contact,
        affected: affected_count(payload.affected)?,
        tags: payload.tags,
    };

    let report = store.write().await.update(id, patch)?;
    Ok(ApiResponse::with_message(
        ReportResponse::from(report),
        "Report updated".to_string(),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/reports/{id}/status",
    params(("id" = Uuid, Path, description = "Report ID")),
    request_body = SetStatusRequest,
    responses(
        (status = 200, description = "Status changed", body = ReportResponse),
        (status = 404, description = "Report not found", body = AppError),
    ),
    tag = "reports"
)]
pub async fn set_report_status(
    Extension(store): Extension<SharedReportStore>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SetStatusRequest>,
) -> AppResult<impl IntoResponse> {
    let report = store.write().await.set_status(id, payload.status)?;
    let message = format!("Status updated to {}", report.status.label());
    Ok(ApiResponse::with_message(ReportResponse::from(report), message))
}

#[utoipa::path(
    delete,
    path = "/api/v1/reports/{id}",
    params(("id" = Uuid, Path, description = "Report ID")),
    responses(
        (status = 200, description = "Report deleted"),
        (status = 404, description = "Report not found", body = AppError),
    ),
    tag = "reports"
)]
pub async fn delete_report(
    Extension(store): Extension<SharedReportStore>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    store.write().await.delete(id)?;
    Ok(ApiResponse::ok("Report deleted"))
}
