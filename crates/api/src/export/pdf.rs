//! Paginated A4 roster in the built-in Helvetica faces.

use enrollment_core::assignment::GROUP_CAPACITY;
use enrollment_core::report::{
    or_placeholder, StudentSummary, TrackReport, EMPTY_GROUP, EMPTY_TRACK, PLACEHOLDER,
};
use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};

use super::ExportError;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 15.0;
const LINE_HEIGHT: f32 = 6.0;

const TITLE: &str = "Relatório de Equipes";

/// Writes lines top to bottom, starting a new page at the bottom margin.
struct PageCursor {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f32,
    pages: usize,
}

impl PageCursor {
    fn new() -> Result<Self, ExportError> {
        let (doc, page, layer) =
            PdfDocument::new(TITLE, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Página 1");
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_err)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(pdf_err)?;
        let layer = doc.get_page(page).get_layer(layer);
        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            y: PAGE_HEIGHT - MARGIN,
            pages: 1,
        })
    }

    fn line(&mut self, text: &str, size: f32, indent: f32, bold: bool) {
        if self.y < MARGIN {
            self.new_page();
        }
        let font = if bold { &self.bold } else { &self.regular };
        self.layer
            .use_text(text, size, Mm(MARGIN + indent), Mm(self.y), font);
        self.y -= LINE_HEIGHT * (size / 10.0).max(1.0);
    }

    fn gap(&mut self) {
        self.y -= LINE_HEIGHT / 2.0;
    }

    fn new_page(&mut self) {
        self.pages += 1;
        let (page, layer) = self.doc.add_page(
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            format!("Página {}", self.pages),
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = PAGE_HEIGHT - MARGIN;
    }

    fn finish(self) -> Result<Vec<u8>, ExportError> {
        self.doc.save_to_bytes().map_err(pdf_err)
    }
}

fn pdf_err(err: impl std::fmt::Display) -> ExportError {
    ExportError::Pdf(err.to_string())
}

fn student_line(s: &StudentSummary) -> String {
    let period = s
        .period
        .map(|p| format!("{p}º período"))
        .unwrap_or_else(|| PLACEHOLDER.to_string());
    format!(
        "{} | {} | {} | {} | {} | {}",
        or_placeholder(Some(s.name.as_str())),
        or_placeholder(s.email.as_deref()),
        or_placeholder(s.phone.as_deref()),
        or_placeholder(s.course.as_deref()),
        or_placeholder(s.shift.as_deref()),
        period,
    )
}

pub fn render_pdf(report: &[TrackReport]) -> Result<Vec<u8>, ExportError> {
    let mut cursor = PageCursor::new()?;
    cursor.line(TITLE, 18.0, 0.0, true);
    cursor.gap();

    for track in report {
        cursor.line(&format!("Eixo: {}", track.name), 14.0, 0.0, true);
        if let Some(description) = track.description.as_deref().filter(|d| !d.trim().is_empty()) {
            cursor.line(description, 10.0, 0.0, false);
        }

        if track.groups.is_empty() {
            cursor.line(EMPTY_TRACK, 10.0, 5.0, false);
        }

        for group in &track.groups {
            cursor.line(
                &format!("{} ({}/{})", group.name, group.total, GROUP_CAPACITY),
                11.0,
                5.0,
                true,
            );
            if group.students.is_empty() {
                cursor.line(EMPTY_GROUP, 9.0, 10.0, false);
            }
            for student in &group.students {
                cursor.line(&student_line(student), 9.0, 10.0, false);
            }
        }
        cursor.gap();
    }

    cursor.finish()
}
