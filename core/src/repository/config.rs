use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde_json;
use tracing::info;

use crate::model::config::CalculatorConfig;
use crate::repository::traits::ConfigRepository;

const CONFIG_FILE_NAME: &str = "config.json";

/// `~/.satstreak`, where the config and log files live.
pub fn default_data_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(".satstreak"))
}

#[derive(Clone)]
pub struct FileConfigRepository {
    file_path: PathBuf,
}

impl FileConfigRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        fs::create_dir_all(&path)?;
        path.push(CONFIG_FILE_NAME);

        if !path.exists() {
            write_config(&path, &CalculatorConfig::default())?;
            info!(path = %path.display(), "created default config");
        }

        Ok(FileConfigRepository { file_path: path })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

fn write_config(path: &Path, config: &CalculatorConfig) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, config)?;
    writer.flush()?;
    Ok(())
}

impl ConfigRepository for FileConfigRepository {
    fn load(&self) -> Result<CalculatorConfig> {
        let file = File::open(&self.file_path)
            .with_context(|| format!("open config file '{}'", self.file_path.display()))?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)
            .with_context(|| format!("deserialize config '{}'", self.file_path.display()))?;
        Ok(config)
    }

    fn save(&self, config: &CalculatorConfig) -> Result<()> {
        write_config(&self.file_path, config)
    }
}
