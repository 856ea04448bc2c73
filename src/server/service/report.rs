//! Report file storage.
//!
//! Report PDFs live on disk under the configured storage directory; only
//! metadata is kept in the database. Stored file names are derived from the
//! upload timestamp plus a sanitized original name so concurrent uploads
//! never clobber each other.

use std::path::{Path, PathBuf};

use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::report::{NewReport, ReportRepository},
    error::{report::ReportError, Error},
};

/// A validated multipart upload, decoded by the controller.
pub struct ReportUpload {
    pub name: String,
    pub report_type: String,
    pub period: String,
    pub description: Option<String>,
    pub uploaded_by: Option<i32>,
    pub original_file_name: String,
    pub bytes: Vec<u8>,
}

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
    report_dir: &'a Path,
}

impl<'a> ReportService<'a> {
    /// Creates a new instance of [`ReportService`]
    pub fn new(db: &'a DatabaseConnection, report_dir: &'a Path) -> Self {
        Self { db, report_dir }
    }

    pub async fn list_reports(&self) -> Result<Vec<entity::report::Model>, Error> {
        Ok(ReportRepository::new(self.db).get_all().await?)
    }

    /// Stores an uploaded PDF and its metadata row.
    ///
    /// Rejects non-PDF uploads. If the metadata insert fails after the file
    /// was written, the file is removed again so the directory does not
    /// accumulate orphans.
    pub async fn store(&self, upload: ReportUpload) -> Result<entity::report::Model, Error> {
        if !upload
            .original_file_name
            .to_ascii_lowercase()
            .ends_with(".pdf")
        {
            return Err(ReportError::NotAPdf.into());
        }

        let file_name = format!(
            "{}-{}",
            Utc::now().format("%Y%m%d%H%M%S%3f"),
            sanitize_file_name(&upload.original_file_name)
        );
        let path = self.report_dir.join(&file_name);

        let file_size = upload.bytes.len() as i64;

        tokio::fs::write(&path, &upload.bytes)
            .await
            .map_err(ReportError::Io)?;

        let result = ReportRepository::new(self.db)
            .create(NewReport {
                name: upload.name,
                report_type: upload.report_type,
                period: upload.period,
                description: upload.description,
                file_name,
                file_size,
                uploaded_by: upload.uploaded_by,
            })
            .await;

        match result {
            Ok(report) => Ok(report),
            Err(e) => {
                if let Err(cleanup) = tokio::fs::remove_file(&path).await {
                    tracing::warn!(
                        "Failed to remove report file {:?} after insert error: {}",
                        path,
                        cleanup
                    );
                }

                Err(e.into())
            }
        }
    }

    /// Reads a report's PDF bytes and records the download.
    pub async fn download(
        &self,
        report_id: i32,
    ) -> Result<(entity::report::Model, Vec<u8>), Error> {
        let report_repo = ReportRepository::new(self.db);

        let report = report_repo
            .get(report_id)
            .await?
            .ok_or(ReportError::NotFound(report_id))?;

        let bytes = tokio::fs::read(self.file_path(&report.file_name))
            .await
            .map_err(ReportError::Io)?;

        report_repo.record_download(report.id).await?;

        Ok((report, bytes))
    }

    /// Deletes a report's metadata row and its file. A missing file is not an
    /// error; the row is the source of truth.
    pub async fn delete(&self, report_id: i32) -> Result<(), Error> {
        let report_repo = ReportRepository::new(self.db);

        let report = report_repo
            .get(report_id)
            .await?
            .ok_or(ReportError::NotFound(report_id))?;

        report_repo.delete(report.id).await?;

        if let Err(e) = tokio::fs::remove_file(self.file_path(&report.file_name)).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                return Err(ReportError::Io(e).into());
            }
        }

        Ok(())
    }

    fn file_path(&self, file_name: &str) -> PathBuf {
        self.report_dir.join(file_name)
    }
}

/// Strips path separators and anything else that has no business in a file
/// name written to the storage directory.
fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
