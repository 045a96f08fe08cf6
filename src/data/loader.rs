use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::data::csv::{read_records, Record};
use crate::data::example::Example;
use crate::error::{NetErr, Result};

/// Label that maps to an expected output of `0.0`; every other label maps to `1.0`.
pub const MALE_LABEL: &str = "Male";

/// How numeric fields that fail to parse are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    /// Unparseable numbers are read as `0.0` and loading carries on.
    #[default]
    Lenient,
    /// Unparseable numbers abort loading with `NetErr::InvalidNumber`.
    Strict,
}

/// Which mean is subtracted from which feature.
///
/// `one` holds the weight column and `two` the height column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureCentering {
    /// `one -= height_mean`, `two -= weight_mean`.
    ///
    /// This is how the reference training data has always been prepared.
    /// The columns are crossed, so neither feature ends up zero-mean unless
    /// the two raw means happen to coincide.
    #[default]
    SwappedMeans,
    /// `one -= weight_mean`, `two -= height_mean`: each feature loses its own
    /// mean and sums to zero over the dataset.
    OwnMean,
}

/// Options for `load_dataset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    pub parse_mode: ParseMode,
    pub centering: FeatureCentering,
}

/// The centered training examples plus the raw column means used to center them.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub examples: Vec<Example>,
    /// Mean of CSV column 1 before centering (`0.0` for an empty dataset).
    pub height_mean: f64,
    /// Mean of CSV column 2 before centering (`0.0` for an empty dataset).
    pub weight_mean: f64,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Opens `path` and loads it with `load_dataset`.
pub fn load_dataset_from_path<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<Dataset> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);
    let dataset = load_dataset(reader, options)?;
    info!(
        "loaded {} examples from {} (height mean {:.4}, weight mean {:.4})",
        dataset.len(),
        path.as_ref().display(),
        dataset.height_mean,
        dataset.weight_mean
    );
    Ok(dataset)
}

/// Reads every `label,height,weight[,...]` record from `reader`, then centers
/// both features once using the full-dataset means.
///
/// Column 1 (height) becomes `Example::two` and column 2 (weight) becomes
/// `Example::one`. Columns past the third are ignored.
///
/// Bytes that are not valid UTF-8 do not stop loading.
///
/// # Errors
/// Any I/O failure, broken CSV structure, a record with fewer than three
/// fields, or (in `ParseMode::Strict`) an unparseable number.
pub fn load_dataset<R: Read>(mut reader: R, options: &LoadOptions) -> Result<Dataset> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    // Invalid UTF-8 becomes U+FFFD: such a label is never "Male" and such a
    // number never parses.
    let text = String::from_utf8_lossy(&bytes);
    let records = read_records(&text)?;

    let mut examples = Vec::with_capacity(records.len());
    let mut total_height = 0.0;
    let mut total_weight = 0.0;

    for record in &records {
        if record.fields.len() < 3 {
            return Err(NetErr::MissingColumn {
                line: record.line,
                got: record.fields.len(),
            });
        }

        let expected = if record.fields[0] == MALE_LABEL { 0.0 } else { 1.0 };
        let height = parse_number(record, 1, options.parse_mode)?;
        let weight = parse_number(record, 2, options.parse_mode)?;

        total_height += height;
        total_weight += weight;

        examples.push(Example::new(weight, height, expected));
    }

    if examples.is_empty() {
        return Ok(Dataset {
            examples,
            height_mean: 0.0,
            weight_mean: 0.0,
        });
    }

    let n = examples.len() as f64;
    let height_mean = total_height / n;
    let weight_mean = total_weight / n;

    center(&mut examples, height_mean, weight_mean, options.centering);

    Ok(Dataset {
        examples,
        height_mean,
        weight_mean,
    })
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn center(examples: &mut [Example], height_mean: f64, weight_mean: f64, centering: FeatureCentering) {
    let (one_mean, two_mean) = match centering {
        FeatureCentering::SwappedMeans => (height_mean, weight_mean),
        FeatureCentering::OwnMean => (weight_mean, height_mean),
    };
    for example in examples.iter_mut() {
        example.one -= one_mean;
        example.two -= two_mean;
    }
}

fn parse_number(record: &Record, column: usize, mode: ParseMode) -> Result<f64> {
    let raw = &record.fields[column];
    match raw.parse::<f64>() {
        Ok(value) => Ok(value),
        Err(_) => match mode {
            ParseMode::Lenient => {
                warn!(
                    "line {}: column {} value '{}' is not a number, using 0.0",
                    record.line, column, raw
                );
                Ok(0.0)
            }
            ParseMode::Strict => Err(NetErr::InvalidNumber {
                line: record.line,
                column,
                value: raw.clone(),
            }),
        },
    }
}
