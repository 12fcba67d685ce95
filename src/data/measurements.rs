//! Table 1 measurements: one CSV row per measured fold.
//!
//! Loading mirrors a lenient dataframe reader: rows with too many fields
//! or an unrecognised lamina are dropped, short rows keep their lamina and
//! simply lack the trailing metrics, and unparsable cells count as missing.

use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use super::layer::Layer;
use crate::error::{FigureError, Result};

pub const LAMINA_COLUMN: &str = "Lamina";

#[derive(Clone, Debug, PartialEq)]
pub struct MeasurementRecord {
    pub layer: Layer,
    metrics: BTreeMap<String, f64>,
}

impl MeasurementRecord {
    pub fn new(layer: Layer) -> Self {
        Self {
            layer,
            metrics: BTreeMap::new(),
        }
    }

    pub fn with_metric(mut self, name: &str, value: f64) -> Self {
        self.metrics.insert(name.to_string(), value);
        self
    }

    /// `None` when the cell was empty, non-numeric or absent.
    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }
}

#[derive(Clone, Debug, Default)]
pub struct MeasurementTable {
    columns: Vec<String>,
    records: Vec<MeasurementRecord>,
    skipped_rows: usize,
}

impl MeasurementTable {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|source| FigureError::DatasetUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::parse(bytes.as_slice())?;
        debug!(
            path = %path.display(),
            records = table.records.len(),
            skipped = table.skipped_rows,
            "loaded measurement table"
        );
        Ok(table)
    }

    pub fn parse<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let columns: Vec<String> = rdr.byte_headers()?.iter().map(decode_field).collect();
        let lamina_idx = columns
            .iter()
            .position(|c| c == LAMINA_COLUMN)
            .ok_or_else(|| FigureError::MissingColumn {
                column: LAMINA_COLUMN.to_string(),
            })?;

        let mut records = Vec::new();
        let mut skipped_rows = 0usize;
        for (row, result) in rdr.byte_records().enumerate() {
            let line = row + 2;
            let record = match result {
                Ok(record) => record,
                Err(err) => {
                    debug!(line, %err, "skipping malformed row");
                    skipped_rows += 1;
                    continue;
                }
            };
            if record.len() > columns.len() {
                debug!(
                    line,
                    fields = record.len(),
                    expected = columns.len(),
                    "skipping row with extra fields"
                );
                skipped_rows += 1;
                continue;
            }
            let layer = match record
                .get(lamina_idx)
                .map(|raw| decode_field(raw).parse::<Layer>())
            {
                Some(Ok(layer)) => layer,
                Some(Err(err)) => {
                    debug!(line, %err, "skipping row");
                    skipped_rows += 1;
                    continue;
                }
                None => {
                    debug!(line, "skipping row without lamina");
                    skipped_rows += 1;
                    continue;
                }
            };

            let mut parsed = MeasurementRecord::new(layer);
            for (idx, name) in columns.iter().enumerate() {
                if idx == lamina_idx {
                    continue;
                }
                if let Some(value) = record.get(idx).and_then(parse_value) {
                    parsed.metrics.insert(name.clone(), value);
                }
            }
            records.push(parsed);
        }

        Ok(Self {
            columns,
            records,
            skipped_rows,
        })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn records(&self) -> &[MeasurementRecord] {
        &self.records
    }

    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    /// Every `(lamina, value)` pair recorded for `metric`, in file order.
    pub fn metric_points(&self, metric: &str) -> Result<Vec<(Layer, f64)>> {
        if !self.has_column(metric) {
            return Err(FigureError::MissingColumn {
                column: metric.to_string(),
            });
        }
        Ok(self
            .records
            .iter()
            .filter_map(|r| r.metric(metric).map(|v| (r.layer, v)))
            .collect())
    }
}

/// UTF-8 when valid, otherwise ISO-8859-1.
fn decode_field(raw: &[u8]) -> String {
    let text = match std::str::from_utf8(raw) {
        Ok(s) => s.to_string(),
        Err(_) => raw.iter().map(|&b| b as char).collect(),
    };
    text.trim_start_matches('\u{feff}').trim().to_string()
}

fn parse_value(raw: &[u8]) -> Option<f64> {
    decode_field(raw)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}
