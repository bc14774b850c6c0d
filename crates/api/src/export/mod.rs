//! Roster report exporters.

pub mod pdf;
pub mod xlsx;

use enrollment_core::report::TrackReport;

/// Downloadable report formats offered on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Excel,
    Pdf,
}

impl ExportFormat {
    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Pdf => "application/pdf",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Excel => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// Download filename, e.g. `relatorio_equipes.xlsx`.
    pub fn filename(self) -> String {
        format!("relatorio_equipes.{}", self.extension())
    }

    /// `Content-Disposition` header value.
    pub fn content_disposition(self) -> String {
        format!("attachment; filename=\"{}\"", self.filename())
    }

    /// Render `report` into this format.
    pub fn render(self, report: &[TrackReport]) -> Result<Vec<u8>, ExportError> {
        match self {
            ExportFormat::Excel => xlsx::render_xlsx(report),
            ExportFormat::Pdf => pdf::render_pdf(report),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("spreadsheet generation failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("pdf generation failed: {0}")]
    Pdf(String),
}
