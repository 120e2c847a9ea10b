use crate::{
    error::{AppError, AppResult},
    models::{Category, EmergencyReport, NewReport, ReportPatch, Severity, Status},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Ordering applied to query results. Exactly one key is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Newest first; reports created at the same instant keep insertion order.
    #[default]
    CreatedDesc,
    CreatedAsc,
    SeverityDesc,
    SeverityAsc,
    /// Lexicographic by category display label.
    Category,
}

/// Exact-match predicates. Every supplied field must match; `None` means no
/// constraint on that field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReportFilter {
    pub category: Option<Category>,
    pub severity: Option<Severity>,
    pub status: Option<Status>,
}

impl ReportFilter {
    fn matches(&self, report: &EmergencyReport) -> bool {
        self.category.map_or(true, |c| report.category == c)
            && self.severity.map_or(true, |s| report.severity == s)
            && self.status.map_or(true, |s| report.status == s)
    }
}

#[derive(Clone, Debug, Default)]
pub struct ReportQuery {
    pub filter: ReportFilter,
    pub sort: SortKey,
    pub search: String,
}

impl ReportQuery {
    /// True when anything narrows the result set (search text or a filter).
    pub fn is_constrained(&self) -> bool {
        !self.search.is_empty() || self.filter != ReportFilter::default()
    }
}

struct Entry {
    /// Insertion counter, breaks ties between equal timestamps.
    seq: u64,
    report: EmergencyReport,
}

impl Entry {
    fn created_key(&self) -> (DateTime<Utc>, u64) {
        (self.report.created_at, self.seq)
    }
}

/// In-memory collection of emergency reports, most recent first.
///
/// The store is plain owned data: mutators take `&mut self` and callers that
/// share it across tasks must serialize access themselves.
#[derive(Default)]
pub struct ReportStore {
    entries: Vec<Entry>,
    next_seq: u64,
    last_created_at: Option<DateTime<Utc>>,
}

impl ReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the example reports shown on first launch.
    pub fn with_sample_data() -> Self {
        let mut store = Self::new();
        // Oldest first so the head of the list ends up as the first sample.
        for (input, status, report_date) in sample_reports().into_iter().rev() {
            match store.create(input) {
                Ok(report) => {
                    if let Some(idx) = store.position(report.id) {
                        let seeded = &mut store.entries[idx].report;
                        seeded.status = status;
                        seeded.report_date = report_date.to_string();
                    }
                }
                Err(e) => tracing::warn!("Skipping invalid sample report: {}", e),
            }
        }
        tracing::debug!("Seeded {} sample reports", store.len());
        store
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn create(&mut self, input: NewReport) -> AppResult<EmergencyReport> {
        require_text("title", &input.title)?;
        require_text("description", &input.description)?;
        require_text("location", &input.location)?;

        let mut id = Uuid::new_v4();
        while self.position(id).is_some() {
            id = Uuid::new_v4();
        }

        let created_at = self.next_timestamp();
        let report = EmergencyReport {
            id,
            title: input.title,
            description: input.description,
            location: input.location,
            coordinates: input.coordinates.and_then(non_blank),
            report_date: created_at.format("%d/%m/%Y").to_string(),
            created_at,
            category: input.category,
            severity: input.severity,
            status: Status::Active,
            reporter_role: input.reporter_role,
            contact: input.contact.and_then(non_blank),
            affected: input.affected,
            image_ref: input.category.image_ref().to_string(),
            tags: input.tags,
        };

        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.insert(
            0,
            Entry {
                seq,
                report: report.clone(),
            },
        );

        tracing::info!(
            report_id = %report.id,
            category = report.category.label(),
            severity = report.severity.label(),
            "Emergency report created"
        );
        Ok(report)
    }

    pub fn get(&self, id: Uuid) -> AppResult<EmergencyReport> {
        self.entries
            .iter()
            .find(|e| e.report.id == id)
            .map(|e| e.report.clone())
            .ok_or(AppError::NotFound)
    }

    /// Replace the supplied fields. The identifier and creation timestamp are
    /// never touched, and nothing changes unless every supplied field is valid.
    pub fn update(&mut self, id: Uuid, patch: ReportPatch) -> AppResult<EmergencyReport> {
        let idx = self.position(id).ok_or(AppError::NotFound)?;

        if let Some(title) = &patch.title {
            require_text("title", title)?;
        }
        if let Some(description) = &patch.description {
            require_text("description", description)?;
        }
        if let Some(location) = &patch.location {
            require_text("location", location)?;
        }

        let report = &mut self.entries[idx].report;
        if let Some(title) = patch.title {
            report.title = title;
        }
        if let Some(description) = patch.description {
            report.description = description;
        }
        if let Some(location) = patch.location {
            report.location = location;
        }
        if let Some(coordinates) = patch.coordinates {
            report.coordinates = non_blank(coordinates);
        }
        if let Some(category) = patch.category {
            report.category = category;
            report.image_ref = category.image_ref().to_string();
        }
        if let Some(severity) = patch.severity {
            report.severity = severity;
        }
        if let Some(status) = patch.status {
            report.status = status;
        }
        if let Some(reporter_role) = patch.reporter_role {
            report.reporter_role = reporter_role;
        }
        if let Some(contact) = patch.contact {
            report.contact = non_blank(contact);
        }
        if let Some(affected) = patch.affected {
            report.affected = affected;
        }
        if let Some(tags) = patch.tags {
            report.tags = tags;
        }

        tracing::debug!(report_id = %id, "Emergency report updated");
        Ok(report.clone())
    }

    /// Overwrite the status. No transition table is enforced.
    pub fn set_status(&mut self, id: Uuid, status: Status) -> AppResult<EmergencyReport> {
        let idx = self.position(id).ok_or(AppError::NotFound)?;
        let report = &mut self.entries[idx].report;
        let previous = report.status;
        report.status = status;

        tracing::info!(
            report_id = %id,
            from = previous.label(),
            to = status.label(),
            "Emergency report status changed"
        );
        Ok(report.clone())
    }

    pub fn delete(&mut self, id: Uuid) -> AppResult<()> {
        let idx = self.position(id).ok_or(AppError::NotFound)?;
        self.entries.remove(idx);
        tracing::info!(report_id = %id, "Emergency report deleted");
        Ok(())
    }

    /// Filter, search and sort without touching the stored order.
    pub fn query(&self, query: &ReportQuery) -> Vec<EmergencyReport> {
        let needle = query.search.to_lowercase();

        let mut matched: Vec<&Entry> = self
            .entries
            .iter()
            .filter(|e| query.filter.matches(&e.report))
            .filter(|e| e.report.matches_text(&needle))
            .collect();

        // Stable sorts: equal keys keep the most-recent-first storage order.
        match query.sort {
            SortKey::CreatedDesc => matched.sort_by_key(|e| std::cmp::Reverse(e.created_key())),
            SortKey::CreatedAsc => matched.sort_by_key(|e| e.created_key()),
            SortKey::SeverityDesc => {
                matched.sort_by_key(|e| std::cmp::Reverse(e.report.severity.priority()))
            }
            SortKey::SeverityAsc => matched.sort_by_key(|e| e.report.severity.priority()),
            SortKey::Category => matched.sort_by_key(|e| e.report.category.label()),
        }

        matched.into_iter().map(|e| e.report.clone()).collect()
    }

    fn position(&self, id: Uuid) -> Option<usize> {
        self.entries.iter().position(|e| e.report.id == id)
    }

    // Wall clock can step backwards; creation stamps must not.
    fn next_timestamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let stamp = match self.last_created_at {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last_created_at = Some(stamp);
        stamp
    }
}

fn require_text(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn sample_reports() -> Vec<(NewReport, Status, &'static str)> {
    vec![
        (
            NewReport {
                title: "Incendio Forestal Activo".to_string(),
                description: "Gran incendio forestal en expansión. Evacuación inmediata requerida en sectores aledaños.".to_string(),
                location: "Cerro San Cristóbal, Santiago".to_string(),
                coordinates: Some("-33.4269, -70.6344".to_string()),
                category: Category::Fire,
                severity: Severity::Critical,
                reporter_role: "Bomberos".to_string(),
                contact: Some("+56 9 1234 5678".to_string()),
                affected: 150,
                tags: vec![
                    "evacuación".to_string(),
                    "humo".to_string(),
                    "viento-fuerte".to_string(),
                ],
            },
            Status::Active,
            "14/08/2025",
        ),
        (
            NewReport {
                title: "Inundación Urbana".to_string(),
                description: "Calles anegadas por desborde del río. Tráfico interrumpido en varios sectores.".to_string(),
                location: "Avenida Providencia con Manuel Montt".to_string(),
                coordinates: Some("-33.4372, -70.6054".to_string()),
                category: Category::Flood,
                severity: Severity::High,
                reporter_role: "Defensa Civil".to_string(),
                contact: Some("+56 9 8765 4321".to_string()),
                affected: 80,
                tags: vec![
                    "lluvia".to_string(),
                    "desborde".to_string(),
                    "transito".to_string(),
                ],
            },
            Status::InProgress,
            "14/08/2025",
        ),
        (
            NewReport {
                title: "Deslizamiento de Tierra".to_string(),
                description: "Deslizamiento menor en ladera de cerro. Ruta cortada preventivamente.".to_string(),
                location: "Camino a Farellones, Km 12".to_string(),
                coordinates: Some("-33.3506, -70.3436".to_string()),
                category: Category::Landslide,
                severity: Severity::Medium,
                reporter_role: "Ciudadano".to_string(),
                contact: Some("+56 9 5555 1234".to_string()),
                affected: 5,
                tags: vec!["lluvia".to_string(), "preventivo".to_string()],
            },
            Status::Resolved,
            "13/08/2025",
        ),
    ]
}
