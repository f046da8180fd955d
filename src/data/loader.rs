//! Delimited text ingestion.
//!
//! Every non-target column becomes a discrete feature encoded through a
//! [`FeatureEncoder`]; the target column becomes `true` when it equals the
//! configured positive label.
use crate::data::dataset::{Dataset, Instance};
use crate::data::encoding::FeatureEncoder;
use crate::errors::Id3Error;
use csv::ReaderBuilder;
use log::{debug, info};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

#[derive(Clone, Debug)]
pub struct CsvSchema {
    pub target_column: usize,
    pub positive_label: String,
    /// Names for the non-target columns, in column order. When absent the
    /// header row is used, or `column_<index>` without headers.
    pub feature_names: Option<Vec<String>>,
    /// Records containing this token in any feature column are skipped.
    pub missing_token: String,
    pub has_headers: bool,
    pub delimiter: u8,
}

impl CsvSchema {
    pub fn new(target_column: usize, positive_label: &str) -> Self {
        Self {
            target_column,
            positive_label: positive_label.to_string(),
            feature_names: None,
            missing_token: "?".to_string(),
            has_headers: false,
            delimiter: b',',
        }
    }

    pub fn with_feature_names(mut self, names: &[&str]) -> Self {
        self.feature_names = Some(names.iter().map(|name| name.to_string()).collect());
        self
    }

    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }
}

pub fn load_path<P: AsRef<Path>>(
    path: P,
    schema: &CsvSchema,
    encoder: &mut FeatureEncoder,
) -> Result<Dataset, Id3Error> {
    let file = std::fs::File::open(path.as_ref())?;
    info!("Loading dataset from {}", path.as_ref().display());
    load_reader(file, schema, encoder)
}

pub fn load_reader<R: Read>(
    reader: R,
    schema: &CsvSchema,
    encoder: &mut FeatureEncoder,
) -> Result<Dataset, Id3Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(schema.has_headers)
        .delimiter(schema.delimiter)
        .flexible(true)
        .from_reader(reader);

    let headers: Option<Vec<String>> = if schema.has_headers {
        Some(reader.headers()?.iter().map(str::to_string).collect())
    } else {
        None
    };

    let mut instances = Vec::new();
    let mut skipped = 0;
    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |pos| pos.line());

        let label = record
            .get(schema.target_column)
            .ok_or(Id3Error::MissingColumn {
                line,
                column: schema.target_column,
            })?;

        let feature_columns: Vec<(usize, &str)> = record
            .iter()
            .enumerate()
            .filter(|(column, _)| *column != schema.target_column)
            .collect();
        if feature_columns
            .iter()
            .any(|(_, token)| *token == schema.missing_token)
        {
            skipped += 1;
            continue;
        }

        let mut features = BTreeMap::new();
        for (position, (column, token)) in feature_columns.into_iter().enumerate() {
            let name = column_name(schema, headers.as_deref(), position, column)
                .ok_or(Id3Error::MissingColumn { line, column })?;
            let code = encoder.encode(&name, token)?;
            features.insert(name, code);
        }
        instances.push(Instance::new(features, label == schema.positive_label));
    }

    if skipped > 0 {
        debug!("Skipped {} records with missing values", skipped);
    }
    info!("Loaded {} instances", instances.len());
    Ok(Dataset::new(instances))
}

fn column_name(
    schema: &CsvSchema,
    headers: Option<&[String]>,
    position: usize,
    column: usize,
) -> Option<String> {
    match (&schema.feature_names, headers) {
        (Some(names), _) => names.get(position).cloned(),
        (None, Some(headers)) => headers.get(column).cloned(),
        (None, None) => Some(format!("column_{}", column)),
    }
}
