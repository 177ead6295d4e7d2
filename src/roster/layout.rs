//! Positioned text extraction from PDF content streams.
//!
//! Walks a page's text operators and records where each run of text starts,
//! then groups runs sharing a baseline into lines. Glyph widths are not
//! measured: consecutive runs shown without repositioning are merged into a
//! single fragment.
//!
//! Strings are decoded with the `/Encoding` of the font selected by `Tf`
//! through lopdf; fonts without a named encoding fall back to WinAnsi.

use std::collections::BTreeMap;

use lopdf::{content::Content, content::Operation, Dictionary, Document, Object, ObjectId};


/// Runs whose baselines differ by at most this many points share a line.
pub const LINE_TOLERANCE: f64 = 2.0;

/// TJ kerning (thousandths of an em) below this reads as a word gap.
const TJ_SPACE_THRESHOLD: f64 = -200.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Matrix {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
    e: f64,
    f: f64,
}

impl Matrix {
    const IDENTITY: Matrix = Matrix {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    fn from_operands(operands: &[Object]) -> Option<Self> {
        let n: Vec<f64> = operands.iter().filter_map(number).collect();
        if n.len() != 6 {
            return None;
        }
        Some(Matrix {
            a: n[0],
            b: n[1],
            c: n[2],
            d: n[3],
            e: n[4],
            f: n[5],
        })
    }

    /// `self × other`
    fn concat(&self, other: &Matrix) -> Matrix {
        Matrix {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            e: self.e * other.a + self.f * other.c + other.e,
            f: self.e * other.b + self.f * other.d + other.f,
        }
    }

    fn translate(&self, tx: f64, ty: f64) -> Matrix {
        Matrix {
            e: tx * self.a + ty * self.c + self.e,
            f: tx * self.b + ty * self.d + self.f,
            ..*self
        }
    }
}

fn number(obj: &Object) -> Option<f64> {
    match obj {
        Object::Integer(i) => Some(*i as f64),
        Object::Real(r) => Some(*r as f64),
        _ => None,
    }
}

/// Font resource name (`F1`) to the base encoding name its font declares.
pub type FontEncodings = BTreeMap<Vec<u8>, String>;

/// Named encoding of a font dictionary, either `/Encoding /Name` or the
/// `/BaseEncoding` of an encoding dictionary.
fn font_encoding(doc: &Document, font: &Dictionary) -> Option<String> {
    let mut encoding = font.get(b"Encoding").ok()?;
    if let Object::Reference(id) = encoding {
        encoding = doc.get_object(*id).ok()?;
    }
    let name = match encoding {
        Object::Name(name) => name,
        Object::Dictionary(dict) => match dict.get(b"BaseEncoding").ok()? {
            Object::Name(name) => name,
            _ => return None,
        },
        _ => return None,
    };
    Some(String::from_utf8_lossy(name).into_owned())
}

/// Encodings of the fonts available to a page, inherited resources included.
pub fn page_font_encodings(doc: &Document, page_id: ObjectId) -> FontEncodings {
    doc.get_page_fonts(page_id)
        .into_iter()
        .filter_map(|(name, font)| font_encoding(doc, font).map(|encoding| (name, encoding)))
        .collect()
}

/// Decode a string shown with a font using `encoding`. UTF-16BE with a BOM
/// is always honoured.
pub(crate) fn decode_with_encoding(encoding: Option<&str>, bytes: &[u8]) -> String {
    match encoding {
        Some(encoding) if !bytes.starts_with(&[0xFE, 0xFF]) => {
            Document::decode_text(Some(encoding), bytes)
        }
        _ => decode_pdf_string(bytes),
    }
}

/// Decode a PDF string operand: UTF-16BE with BOM, otherwise a single-byte
/// encoding treated as WinAnsi.
pub(crate) fn decode_pdf_string(bytes: &[u8]) -> String {
    if bytes.starts_with(&[0xFE, 0xFF]) {
        let units: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        return char::decode_utf16(units)
            .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect();
    }

    bytes
        .iter()
        .map(|&b| match b {
            0x91 | 0x92 => '\'',
            0x93 | 0x94 => '"',
            0x96 | 0x97 => '-',
            0xA0 => ' ',
            _ => b as char,
        })
        .collect()
}

/// A run of text and the user-space point where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFragment {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

impl TextFragment {
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
        }
    }
}

/// Fragments sharing a baseline, left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub y: f64,
    pub fragments: Vec<TextFragment>,
}

impl TextLine {
    pub fn text(&self) -> String {
        self.fragments
            .iter()
            .map(|f| f.text.trim())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Text of one page, top to bottom.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub lines: Vec<TextLine>,
}

impl PageLayout {
    /// Group fragments into lines. Blank fragments are dropped.
    pub fn from_fragments(fragments: Vec<TextFragment>) -> Self {
        let mut fragments: Vec<TextFragment> = fragments
            .into_iter()
            .filter(|f| !f.text.trim().is_empty())
            .collect();
        fragments.sort_by(|l, r| r.y.total_cmp(&l.y).then(l.x.total_cmp(&r.x)));

        let mut lines: Vec<TextLine> = Vec::new();
        for fragment in fragments {
            match lines.last_mut() {
                Some(line) if (line.y - fragment.y).abs() <= LINE_TOLERANCE => {
                    line.fragments.push(fragment)
                }
                _ => lines.push(TextLine {
                    y: fragment.y,
                    fragments: vec![fragment],
                }),
            }
        }

        for line in &mut lines {
            line.fragments.sort_by(|l, r| l.x.total_cmp(&r.x));
        }

        Self { lines }
    }

    /// Interpret a page's content stream operations.
    pub fn from_operations(operations: &[Operation]) -> Self {
        Self::from_operations_with_fonts(operations, &FontEncodings::new())
    }

    /// Interpret operations, decoding strings with the encoding of the font
    /// each `Tf` selects.
    pub fn from_operations_with_fonts(operations: &[Operation], fonts: &FontEncodings) -> Self {
        let mut interpreter = TextInterpreter::new(fonts);
        for op in operations {
            interpreter.apply(op);
        }
        Self::from_fragments(interpreter.fragments)
    }

    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(TextLine::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Lay out one page of a loaded document.
pub fn extract_page_layout(doc: &Document, page_id: ObjectId) -> lopdf::Result<PageLayout> {
    let fonts = page_font_encodings(doc, page_id);
    let content = Content::decode(&doc.get_page_content(page_id)?)?;
    Ok(PageLayout::from_operations_with_fonts(
        &content.operations,
        &fonts,
    ))
}

struct TextInterpreter<'a> {
    fonts: &'a FontEncodings,
    encoding: Option<&'a str>,
    ctm: Matrix,
    ctm_stack: Vec<Matrix>,
    text_matrix: Matrix,
    line_matrix: Matrix,
    leading: f64,
    moved: bool,
    fragments: Vec<TextFragment>,
}

impl<'a> TextInterpreter<'a> {
    fn new(fonts: &'a FontEncodings) -> Self {
        Self {
            fonts,
            encoding: None,
            ctm: Matrix::IDENTITY,
            ctm_stack: Vec::new(),
            text_matrix: Matrix::IDENTITY,
            line_matrix: Matrix::IDENTITY,
            leading: 0.0,
            moved: true,
            fragments: Vec::new(),
        }
    }

    fn decode(&self, bytes: &[u8]) -> String {
        decode_with_encoding(self.encoding, bytes)
    }

    fn apply(&mut self, op: &Operation) {
        let operands = &op.operands;
        let num = |i: usize| operands.get(i).and_then(number);

        match op.operator.as_str() {
            "q" => self.ctm_stack.push(self.ctm),
            "Q" => {
                if let Some(ctm) = self.ctm_stack.pop() {
                    self.ctm = ctm;
                }
            }
            "cm" => {
                if let Some(m) = Matrix::from_operands(operands) {
                    self.ctm = m.concat(&self.ctm);
                }
            }
            "BT" => {
                self.text_matrix = Matrix::IDENTITY;
                self.line_matrix = Matrix::IDENTITY;
                self.moved = true;
            }
            "Tf" => {
                if let Some(Object::Name(name)) = operands.first() {
                    let fonts = self.fonts;
                    self.encoding = fonts.get(name).map(String::as_str);
                }
            }
            "TL" => {
                if let Some(leading) = num(0) {
                    self.leading = leading;
                }
            }
            "Td" => {
                if let (Some(tx), Some(ty)) = (num(0), num(1)) {
                    self.move_line(tx, ty);
                }
            }
            "TD" => {
                if let (Some(tx), Some(ty)) = (num(0), num(1)) {
                    self.leading = -ty;
                    self.move_line(tx, ty);
                }
            }
            "Tm" => {
                if let Some(m) = Matrix::from_operands(operands) {
                    self.line_matrix = m;
                    self.text_matrix = m;
                    self.moved = true;
                }
            }
            "T*" => self.next_line(),
            "Tj" => {
                if let Some(Object::String(bytes, _)) = operands.first() {
                    self.show(self.decode(bytes));
                }
            }
            "'" => {
                self.next_line();
                if let Some(Object::String(bytes, _)) = operands.first() {
                    self.show(self.decode(bytes));
                }
            }
            "\"" => {
                self.next_line();
                if let Some(Object::String(bytes, _)) = operands.get(2) {
                    self.show(self.decode(bytes));
                }
            }
            "TJ" => {
                if let Some(Object::Array(items)) = operands.first() {
                    let mut text = String::new();
                    for item in items {
                        match item {
                            Object::String(bytes, _) => text.push_str(&self.decode(bytes)),
                            other => {
                                if number(other).is_some_and(|n| n < TJ_SPACE_THRESHOLD) {
                                    text.push(' ');
                                }
                            }
                        }
                    }
                    self.show(text);
                }
            }
            _ => {}
        }
    }

    fn move_line(&mut self, tx: f64, ty: f64) {
        self.line_matrix = self.line_matrix.translate(tx, ty);
        self.text_matrix = self.line_matrix;
        self.moved = true;
    }

    fn next_line(&mut self) {
        self.move_line(0.0, -self.leading);
    }

    fn show(&mut self, text: String) {
        if !self.moved {
            if let Some(last) = self.fragments.last_mut() {
                last.text.push_str(&text);
                return;
            }
        }

        let origin = self.text_matrix.concat(&self.ctm);
        self.fragments.push(TextFragment::new(origin.e, origin.f, text));
        self.moved = false;
    }
}
