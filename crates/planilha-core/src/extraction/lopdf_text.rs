use crate::error::PlanilhaError;
use crate::extraction::layout::{assemble_lines, TextRun};
use crate::extraction::{PageContent, PdfExtractor};
use lopdf::content::Operation;
use lopdf::{Document, Object, ObjectId};
use std::collections::BTreeMap;

/// TJ adjustments below this (thousandths of an em) read as a word break.
const WORD_GAP: f32 = -200.0;

type Matrix = [f32; 6];

const IDENTITY: Matrix = [1.0, 0.0, 0.0, 1.0, 0.0, 0.0];

/// In-process PDF extraction backend built on `lopdf`.
///
/// Lines are rebuilt from text positions (`Td`, `TD`, `Tm`, `T*`, `TJ`
/// offsets), so columns placed side by side and several rows inside one text
/// object come out as separate, space-separated lines. The parsed document
/// lives only for the duration of `extract_pages`.
pub struct LopdfExtractor;

impl LopdfExtractor {
    pub fn new() -> Self {
        LopdfExtractor
    }
}

impl Default for LopdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for LopdfExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, PlanilhaError> {
        let document = Document::load_mem(pdf_bytes)
            .map_err(|e| PlanilhaError::DocumentParse(e.to_string()))?;

        // get_pages is keyed by page number, so iteration is in document order.
        let page_ids = document.get_pages();
        log::debug!("lopdf opened document with {} page(s)", page_ids.len());

        let mut pages = Vec::with_capacity(page_ids.len());
        for (page_number, page_id) in page_ids {
            let lines = page_lines(&document, page_id).map_err(|e| {
                PlanilhaError::DocumentParse(format!("page {page_number}: {e}"))
            })?;
            if lines.is_empty() {
                log::warn!("page {page_number} has no extractable text");
            }
            pages.push(PageContent {
                page_number: page_number as usize,
                lines,
            });
        }

        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "lopdf"
    }
}

fn page_lines(document: &Document, page_id: ObjectId) -> lopdf::Result<Vec<String>> {
    let encodings = document
        .get_page_fonts(page_id)
        .into_iter()
        .map(|(name, font)| (name, font.get_font_encoding()))
        .collect();
    let content = document.get_and_decode_page_content(page_id)?;

    let mut cursor = TextCursor::new(encodings);
    for operation in &content.operations {
        cursor.apply(operation);
    }
    Ok(assemble_lines(cursor.finish()))
}

/// Text state tracked while walking one page's content stream.
struct TextCursor<'a> {
    encodings: BTreeMap<Vec<u8>, &'a str>,
    encoding: Option<&'a str>,
    font_size: f32,
    leading: f32,
    line_matrix: Matrix,
    current: Option<TextRun>,
    runs: Vec<TextRun>,
}

impl<'a> TextCursor<'a> {
    fn new(encodings: BTreeMap<Vec<u8>, &'a str>) -> Self {
        TextCursor {
            encodings,
            encoding: None,
            font_size: 0.0,
            leading: 0.0,
            line_matrix: IDENTITY,
            current: None,
            runs: Vec::new(),
        }
    }

    fn apply(&mut self, operation: &Operation) {
        let operands = &operation.operands;
        match operation.operator.as_str() {
            "BT" => self.set_matrix(IDENTITY),
            "ET" => self.finish_run(),
            "Tf" => {
                self.encoding = operands
                    .first()
                    .and_then(|o| o.as_name().ok())
                    .and_then(|name| self.encodings.get(name).copied());
                if let Some(size) = number(operands, 1) {
                    self.font_size = size;
                }
            }
            "TL" => {
                if let Some(leading) = number(operands, 0) {
                    self.leading = leading;
                }
            }
            "Td" => {
                if let (Some(tx), Some(ty)) = (number(operands, 0), number(operands, 1)) {
                    self.move_line(tx, ty);
                }
            }
            "TD" => {
                if let (Some(tx), Some(ty)) = (number(operands, 0), number(operands, 1)) {
                    self.leading = -ty;
                    self.move_line(tx, ty);
                }
            }
            "Tm" => {
                let values: Option<Vec<f32>> = (0..6).map(|i| number(operands, i)).collect();
                if let Some(v) = values {
                    self.set_matrix([v[0], v[1], v[2], v[3], v[4], v[5]]);
                }
            }
            "T*" => self.move_line(0.0, -self.leading),
            "Tj" => {
                if let Some(Object::String(bytes, _)) = operands.first() {
                    self.show(bytes);
                }
            }
            "'" => {
                self.move_line(0.0, -self.leading);
                if let Some(Object::String(bytes, _)) = operands.first() {
                    self.show(bytes);
                }
            }
            "\"" => {
                self.move_line(0.0, -self.leading);
                if let Some(Object::String(bytes, _)) = operands.get(2) {
                    self.show(bytes);
                }
            }
            "TJ" => {
                if let Some(Object::Array(items)) = operands.first() {
                    self.show_array(items);
                }
            }
            _ => {}
        }
    }

    /// `Td`: translate the start of the line, expressed in line-matrix space.
    fn move_line(&mut self, tx: f32, ty: f32) {
        let [a, b, c, d, e, f] = self.line_matrix;
        self.set_matrix([a, b, c, d, tx * a + ty * c + e, tx * b + ty * d + f]);
    }

    fn set_matrix(&mut self, matrix: Matrix) {
        self.finish_run();
        self.line_matrix = matrix;
    }

    fn show(&mut self, bytes: &[u8]) {
        let text = Document::decode_text(self.encoding, bytes);
        let [_, _, _, d, e, f] = self.line_matrix;
        let font_size = self.font_size * d;
        self.current
            .get_or_insert_with(|| TextRun::new(e, f, font_size))
            .text
            .push_str(&text);
    }

    fn show_array(&mut self, items: &[Object]) {
        for item in items {
            match item {
                Object::String(bytes, _) => self.show(bytes),
                other => {
                    let gap_is_word_break = other.as_float().is_ok_and(|gap| gap < WORD_GAP);
                    if let (true, Some(run)) = (gap_is_word_break, self.current.as_mut()) {
                        run.text.push(' ');
                    }
                }
            }
        }
    }

    fn finish_run(&mut self) {
        if let Some(run) = self.current.take() {
            self.runs.push(run);
        }
    }

    fn finish(mut self) -> Vec<TextRun> {
        self.finish_run();
        self.runs
    }
}

fn number(operands: &[Object], index: usize) -> Option<f32> {
    operands.get(index).and_then(|o| o.as_float().ok())
}
