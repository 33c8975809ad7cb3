//! Minimal Office Open XML workbook writer.
//!
//! Produces a single-sheet `.xlsx` package: text cells are written as inline
//! strings so no shared-string table is needed.

use crate::error::PlanilhaError;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use rust_decimal::Decimal;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

pub const SHEET_NAME: &str = "Sheet1";

const SPREADSHEET_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;

/// A single worksheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell<'a> {
    Text(&'a str),
    Number(Decimal),
}

/// Write a one-sheet workbook with `header` as row 1 followed by `rows`.
pub fn write_workbook<'a>(
    header: &[&'a str],
    rows: &[Vec<Cell<'a>>],
) -> Result<Vec<u8>, PlanilhaError> {
    let header_cells: Vec<Cell<'a>> = header.iter().map(|&h| Cell::Text(h)).collect();
    let sheet = sheet_xml(std::iter::once(&header_cells).chain(rows))?;
    let workbook = workbook_xml();

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    let parts: [(&str, &[u8]); 5] = [
        ("[Content_Types].xml", CONTENT_TYPES.as_bytes()),
        ("_rels/.rels", ROOT_RELS.as_bytes()),
        ("xl/workbook.xml", workbook.as_bytes()),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS.as_bytes()),
        ("xl/worksheets/sheet1.xml", &sheet),
    ];
    for (path, bytes) in parts {
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        zip.start_file(path, options)?;
        zip.write_all(bytes).map_err(serialization_error)?;
    }

    Ok(zip.finish()?.into_inner())
}

fn workbook_xml() -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            "\n",
            r#"<workbook xmlns="{ns}" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
            r#"<sheets><sheet name="{name}" sheetId="1" r:id="rId1"/></sheets></workbook>"#
        ),
        ns = SPREADSHEET_NS,
        name = SHEET_NAME
    )
}

fn sheet_xml<'r, 'a: 'r, I>(rows: I) -> Result<Vec<u8>, PlanilhaError>
where
    I: IntoIterator<Item = &'r Vec<Cell<'a>>>,
{
    let mut writer = Writer::new(Vec::new());

    write(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))),
    )?;
    write(
        &mut writer,
        Event::Start(BytesStart::new("worksheet").with_attributes([("xmlns", SPREADSHEET_NS)])),
    )?;
    write(&mut writer, Event::Start(BytesStart::new("sheetData")))?;

    for (row_index, row) in rows.into_iter().enumerate() {
        let row_number = (row_index + 1).to_string();
        write(
            &mut writer,
            Event::Start(BytesStart::new("row").with_attributes([("r", row_number.as_str())])),
        )?;

        for (col_index, cell) in row.iter().enumerate() {
            let reference = format!("{}{}", column_name(col_index), row_number);
            write_cell(&mut writer, &reference, cell)?;
        }

        write(&mut writer, Event::End(BytesEnd::new("row")))?;
    }

    write(&mut writer, Event::End(BytesEnd::new("sheetData")))?;
    write(&mut writer, Event::End(BytesEnd::new("worksheet")))?;

    Ok(writer.into_inner())
}

fn write_cell(
    writer: &mut Writer<Vec<u8>>,
    reference: &str,
    cell: &Cell<'_>,
) -> Result<(), PlanilhaError> {
    match cell {
        Cell::Text(text) => {
            write(
                writer,
                Event::Start(
                    BytesStart::new("c").with_attributes([("r", reference), ("t", "inlineStr")]),
                ),
            )?;
            write(writer, Event::Start(BytesStart::new("is")))?;
            write(writer, Event::Start(BytesStart::new("t")))?;
            write(writer, Event::Text(BytesText::new(text)))?;
            write(writer, Event::End(BytesEnd::new("t")))?;
            write(writer, Event::End(BytesEnd::new("is")))?;
        }
        Cell::Number(value) => {
            let value = value.normalize().to_string();
            write(
                writer,
                Event::Start(BytesStart::new("c").with_attributes([("r", reference)])),
            )?;
            write(writer, Event::Start(BytesStart::new("v")))?;
            write(writer, Event::Text(BytesText::new(&value)))?;
            write(writer, Event::End(BytesEnd::new("v")))?;
        }
    }
    write(writer, Event::End(BytesEnd::new("c")))
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), PlanilhaError> {
    writer.write_event(event).map_err(serialization_error)
}

fn serialization_error(e: impl std::fmt::Display) -> PlanilhaError {
    PlanilhaError::Serialization(e.to_string())
}

/// Spreadsheet column letters for a 0-based index: 0 -> A, 25 -> Z, 26 -> AA.
fn column_name(index: usize) -> String {
    let mut name = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        name.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    name.reverse();
    String::from_utf8_lossy(&name).into_owned()
}
