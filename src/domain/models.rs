use crate::report::LutData;
use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// One row of the per-tag walk: `processed` carries the extracted tables,
/// `no_data` means the tag matched the LUT family but the report had no
/// region for it, `skipped` means the signature is outside the family.
#[derive(Serialize)]
pub struct TagRow {
    pub index: u32,
    pub signature: String,
    pub status: String,
    pub lut: Option<LutSummary>,
}

#[derive(Serialize)]
pub struct LutSummary {
    pub bit_depth: u8,
    pub input_entries: Vec<String>,
    pub output_entries: Vec<String>,
    pub value_count: usize,
    /// First 10 normalized values; the full vector stays in [`LutData`].
    pub preview: Vec<f64>,
}

impl LutSummary {
    pub fn from_lut(lut: &LutData) -> Self {
        Self {
            bit_depth: lut.bit_depth,
            input_entries: lut.input_entries.clone(),
            output_entries: lut.output_entries.clone(),
            value_count: lut.values.len(),
            preview: lut.values.iter().take(10).copied().collect(),
        }
    }
}

#[derive(Serialize)]
pub struct ExtractReport {
    pub signature: String,
    pub found: bool,
    pub lut: Option<LutData>,
}

#[derive(Serialize)]
pub struct CheckItem {
    pub name: String,
    pub status: String,
}

#[derive(Serialize)]
pub struct DoctorReport {
    pub overall: String,
    pub checks: Vec<CheckItem>,
}
