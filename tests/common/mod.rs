//! Fixture builders shared by the integration tests.

#![allow(dead_code)]

use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// A line of text placed at `(x, y)` on a page.
pub type Placed<'a> = (i64, i64, &'a str);

/// Like [`Placed`], with the string bytes exactly as stored in the PDF.
pub type RawPlaced = (i64, i64, Vec<u8>);

fn page_operations(fragments: &[RawPlaced]) -> Vec<Operation> {
    let mut operations = Vec::new();
    for (x, y, text) in fragments {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new("Tf", vec!["F1".into(), 9.into()]));
        operations.push(Operation::new("Td", vec![(*x).into(), (*y).into()]));
        operations.push(Operation::new("Tj", vec![Object::string_literal(text.clone())]));
        operations.push(Operation::new("ET", vec![]));
    }
    operations
}

/// Write a PDF with one page per entry in `pages`.
pub fn write_pdf(path: &Path, pages: &[Vec<Placed<'_>>]) {
    let raw: Vec<Vec<RawPlaced>> = pages
        .iter()
        .map(|page| {
            page.iter()
                .map(|&(x, y, text)| (x, y, text.as_bytes().to_vec()))
                .collect()
        })
        .collect();
    write_pdf_with_encoding(path, &raw, None);
}

/// Write a PDF whose font declares `encoding` as its `/Encoding`.
pub fn write_pdf_with_encoding(path: &Path, pages: &[Vec<RawPlaced>], encoding: Option<Object>) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let mut font = dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    };
    if let Some(encoding) = encoding {
        font.set("Encoding", encoding);
    }
    let font_id = doc.add_object(font);
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for fragments in pages {
        let content = Content {
            operations: page_operations(fragments),
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc.save(path).unwrap();
}

/// Three cover/info pages, as at the front of every roster profile.
pub fn cover_pages() -> Vec<Vec<Placed<'static>>> {
    vec![
        vec![(72, 700, "2025 MLS Club Roster Profiles")],
        vec![(72, 700, "Roster Rules and Regulations")],
        vec![(72, 700, "Glossary: NAME ROSTER DESIGNATION")],
    ]
}

pub fn roster_header(y: i64) -> Vec<Placed<'static>> {
    vec![
        (30, y, "NO."),
        (60, y, "NAME"),
        (200, y, "ROSTER DESIGNATION"),
        (330, y, "CURRENT STATUS"),
        (440, y, "CONTRACT THRU"),
        (520, y, "OPTION YEARS"),
    ]
}

/// The LA Galaxy page with Jane Doe and John Roe.
pub fn galaxy_page() -> Vec<Placed<'static>> {
    let mut page = vec![
        (40, 760, "LA GALAXY | ROSTER PROFILE"),
        (40, 740, "Roster Construction Model: Designated Player Model"),
        (40, 725, "2025 GAM AVAILABLE $1,250,000"),
        (40, 690, "SENIOR ROSTER"),
    ];
    page.extend(roster_header(670));
    page.extend([
        (32, 655, "10"),
        (60, 655, "Jane Doe"),
        (200, 655, "Designated Player"),
        (440, 655, "2026"),
        (32, 640, "11"),
        (60, 640, "John Roe"),
        (200, 640, "TAM Player"),
        (330, 640, "Injured List"),
        (440, 640, "2025"),
        (520, 640, "1"),
    ]);
    page
}

pub const STATS_PAGE: &str = r#"
<html><head><title>2025 Major League Soccer Stats | FBref.com</title></head><body>
<table id="stats_standard">
  <thead>
    <tr class="over_header">
      <th colspan="3"></th>
      <th colspan="2">Performance</th>
    </tr>
    <tr><th>Rk</th><th>Player</th><th>Squad</th><th>Gls</th><th>Ast</th></tr>
  </thead>
  <tbody>
    <tr><th>1</th><td>Lionel Messi</td><td>Inter Miami</td><td>29</td><td>19</td></tr>
    <tr><th>2</th><td>Denis Bouanga</td><td>LAFC</td><td>24</td><td>8</td></tr>
    <tr class="thead"><th>Rk</th><th>Player</th><th>Squad</th><th>Gls</th><th>Ast</th></tr>
    <tr><th>3</th><td>Sam Surridge</td><td>Nashville</td><td>24</td><td>4</td></tr>
    <tr><th>4</th><td>Hany Mukhtar</td><td>Nashville</td><td>10</td><td>16</td></tr>
  </tbody>
</table>
<table id="stats_passing">
  <thead>
    <tr class="over_header">
      <th colspan="2"></th>
      <th colspan="2">Total</th>
      <th colspan="2">Short</th>
    </tr>
    <tr><th>Player</th><th>Squad</th><th>Cmp</th><th>Att</th><th>Cmp</th><th>Att</th></tr>
  </thead>
  <tbody>
    <tr><td>Lionel Messi</td><td>Inter Miami</td><td>1,102</td><td>1,350</td><td>480</td><td>520</td></tr>
  </tbody>
</table>
</body></html>
"#;
