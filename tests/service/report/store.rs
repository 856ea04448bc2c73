use arsenal::server::{
    error::{report::ReportError, Error},
    service::report::{ReportService, ReportUpload},
};
use arsenal_test_utils::prelude::*;

fn pdf_upload(name: &str, file_name: &str) -> ReportUpload {
    ReportUpload {
        name: name.to_string(),
        report_type: "expenditure".to_string(),
        period: "2025-01".to_string(),
        description: None,
        uploaded_by: None,
        original_file_name: file_name.to_string(),
        bytes: b"%PDF-1.4 test".to_vec(),
    }
}

/// Expect the stored report to round-trip through download, bumping the
/// counter
#[tokio::test]
async fn stores_and_downloads_pdf() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;

    let service = ReportService::new(&test.db, &test.report_dir);
    let report = service
        .store(pdf_upload("Monthly Expenditure", "january.pdf"))
        .await
        .unwrap();

    assert_eq!(report.file_size, b"%PDF-1.4 test".len() as i64);
    assert_eq!(report.download_count, 0);

    let (downloaded, bytes) = service.download(report.id).await.unwrap();
    assert_eq!(bytes, b"%PDF-1.4 test");
    assert_eq!(downloaded.id, report.id);

    let reports = service.list_reports().await.unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].download_count, 1);
    assert!(reports[0].last_accessed.is_some());

    Ok(())
}

/// Expect non-PDF uploads to be rejected with nothing stored
#[tokio::test]
async fn rejects_non_pdf_upload() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;

    let service = ReportService::new(&test.db, &test.report_dir);
    let result = service.store(pdf_upload("Nope", "virus.exe")).await;

    assert!(matches!(
        result,
        Err(Error::ReportError(ReportError::NotAPdf))
    ));
    assert!(service.list_reports().await.unwrap().is_empty());

    Ok(())
}

/// Expect delete to remove both the metadata row and the file
#[tokio::test]
async fn deletes_report_and_file() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;

    let service = ReportService::new(&test.db, &test.report_dir);
    let report = service
        .store(pdf_upload("Monthly Expenditure", "january.pdf"))
        .await
        .unwrap();

    service.delete(report.id).await.unwrap();

    assert!(service.list_reports().await.unwrap().is_empty());

    let result = service.download(report.id).await;
    assert!(matches!(
        result,
        Err(Error::ReportError(ReportError::NotFound(_)))
    ));

    Ok(())
}
