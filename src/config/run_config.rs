use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::example::Example;
use crate::data::loader::LoadOptions;
use crate::error::Result;
use crate::train::train_config::TrainConfig;

/// A named input run through the trained network at the end of a run.
///
/// The features are fed in as given; they are not centered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Probe {
    pub name: String,
    pub one: f64,
    pub two: f64,
}

impl Probe {
    pub fn new(name: &str, one: f64, two: f64) -> Probe {
        Probe {
            name: name.to_string(),
            one,
            two,
        }
    }

    /// The probe as an unlabelled example.
    pub fn example(&self) -> Example {
        Example::new(self.one, self.two, 0.0)
    }
}

/// Everything the binary needs for one run.
///
/// Every field has a default, so a JSON file only has to name what it
/// changes. With no file at all, a run reads `inputs.csv`, trains for 4000
/// epochs at a learning rate of 0.0001 and probes "Fabi" and "Guilherme".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub input_path: PathBuf,
    pub load: LoadOptions,
    pub train: TrainConfig,
    pub probes: Vec<Probe>,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            input_path: PathBuf::from("inputs.csv"),
            load: LoadOptions::default(),
            train: TrainConfig::default(),
            probes: vec![
                Probe::new("Fabi", 136.6870, 69.6850),
                Probe::new("Guilherme", 244.7130, 72.0472),
            ],
        }
    }
}

impl RunConfig {
    /// Deserializes a `RunConfig` from a JSON file and validates it.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<RunConfig> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: RunConfig = serde_json::from_reader(reader)?;
        config.train.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::{FeatureCentering, ParseMode};
    use crate::error::NetErr;

    #[test]
    fn default_probes_are_the_reference_pair() {
        let config = RunConfig::default();
        let names: Vec<&str> = config.probes.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Fabi", "Guilherme"]);
        assert_eq!(config.probes[1].example(), Example::new(244.7130, 72.0472, 0.0));
        assert_eq!(config.input_path, PathBuf::from("inputs.csv"));
    }

    #[test]
    fn json_overrides_only_named_fields() {
        let json = r#"{
            "input_path": "data/people.csv",
            "load": { "parse_mode": "strict", "centering": "own_mean" },
            "train": { "epochs": 10 }
        }"#;
        let config: RunConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.input_path, PathBuf::from("data/people.csv"));
        assert_eq!(config.load.parse_mode, ParseMode::Strict);
        assert_eq!(config.load.centering, FeatureCentering::OwnMean);
        assert_eq!(config.train.epochs, 10);
        assert_eq!(config.train.report_interval, 1000);
        assert_eq!(config.probes.len(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("trio-nn-no-such-config.json");
        assert!(matches!(RunConfig::load_json(path), Err(NetErr::Io(_))));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let path = std::env::temp_dir().join(format!("trio-nn-bad-config-{}.json", std::process::id()));
        std::fs::write(&path, "{ \"train\": { \"epochs\": \"many\" } }").unwrap();
        let result = RunConfig::load_json(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(NetErr::Config(_))));
    }
}
