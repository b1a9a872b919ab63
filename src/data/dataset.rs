use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One labeled 2-D data point. Identity is `key`, unique within a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub key: String,
    pub x: f64,
    pub y: f64,
}

impl Record {
    pub fn new(key: impl Into<String>, x: f64, y: f64) -> ChartResult<Self> {
        let record = Self { key: key.into(), x, y };
        record.validate()?;
        Ok(record)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.key.is_empty() {
            return Err(ChartError::InvalidData(
                "record key must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "record `{}` values must be finite",
                self.key
            )));
        }
        Ok(())
    }
}

/// An ordered sequence of records plus the two axis/legend captions.
///
/// Validated at construction: at least one record, unique non-empty keys,
/// finite values, non-empty captions. Charts therefore never see non-finite
/// scale domains or ambiguous interaction groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<Record>,
    labels: [String; 2],
}

impl Dataset {
    pub fn new(records: Vec<Record>, labels: [String; 2]) -> ChartResult<Self> {
        if records.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        if labels.iter().any(String::is_empty) {
            return Err(ChartError::InvalidData(
                "dataset labels must not be empty".to_owned(),
            ));
        }

        let mut seen = IndexSet::with_capacity(records.len());
        for record in &records {
            record.validate()?;
            if !seen.insert(record.key.clone()) {
                return Err(ChartError::DuplicateKey(record.key.clone()));
            }
        }

        Ok(Self { records, labels })
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn labels(&self) -> &[String; 2] {
        &self.labels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        // Construction guarantees at least one record.
        false
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.key.as_str())
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.records.iter().any(|record| record.key == key)
    }

    /// The seven-point demo dataset used by the gallery binary and examples.
    #[must_use]
    pub fn sample() -> Self {
        let records = vec![
            Record { key: "Norway".to_owned(), x: 62.0, y: 75.0 },
            Record { key: "Portugal".to_owned(), x: 41.0, y: 53.0 },
            Record { key: "Chile".to_owned(), x: 28.0, y: 64.0 },
            Record { key: "Japan".to_owned(), x: 74.0, y: 36.0 },
            Record { key: "Kenya".to_owned(), x: 17.0, y: 22.0 },
            Record { key: "Canada".to_owned(), x: 55.0, y: 68.0 },
            Record { key: "Greece".to_owned(), x: 33.0, y: 47.0 },
        ];
        let labels = ["Exports".to_owned(), "Imports".to_owned()];

        // Statically valid; skips re-validation.
        Self { records, labels }
    }
}
