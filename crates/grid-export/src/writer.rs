use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Errors during CSV export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("target folder is not a valid path: {0}")]
    InvalidTargetFolder(PathBuf),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Serializes an in-memory table as comma-delimited text.
///
/// The file lands at `target_folder/<name>.csv` when a folder is given
/// (the folder must already exist), otherwise at `<name>.csv` in the
/// working directory. Rows are written in input order, one line each,
/// with no header.
#[derive(Debug, Clone)]
pub struct DataWriter {
    name: String,
    data: Vec<Vec<String>>,
    target_folder: Option<PathBuf>,
}

impl DataWriter {
    pub fn new(
        name: impl Into<String>,
        data: Vec<Vec<String>>,
        target_folder: Option<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            data,
            target_folder,
        }
    }

    /// Write the table, truncating any existing file, and return the path
    /// written to.
    pub fn write_csv(&self) -> Result<PathBuf, ExportError> {
        let path = self.target_path()?;
        let file = File::create(&path).map_err(|e| ExportError::Io {
            path: path.clone(),
            source: e,
        })?;
        let mut writer = BufWriter::new(file);

        for row in &self.data {
            writeln!(writer, "{}", row.join(",")).map_err(|e| ExportError::Io {
                path: path.clone(),
                source: e,
            })?;
        }
        writer.flush().map_err(|e| ExportError::Io {
            path: path.clone(),
            source: e,
        })?;
        Ok(path)
    }

    fn target_path(&self) -> Result<PathBuf, ExportError> {
        let file_name = format!("{}.csv", self.name);
        match &self.target_folder {
            Some(folder) => {
                if !folder.is_dir() {
                    return Err(ExportError::InvalidTargetFolder(folder.clone()));
                }
                Ok(folder.join(file_name))
            }
            None => Ok(PathBuf::from(file_name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_working_directory() {
        let writer = DataWriter::new("report", vec![], None);
        assert_eq!(writer.target_path().unwrap(), PathBuf::from("report.csv"));
    }

    #[test]
    fn missing_folder_is_rejected_before_any_write() {
        let writer = DataWriter::new(
            "report",
            vec![vec!["A".to_string(), "3".to_string()]],
            Some(PathBuf::from("/definitely/not/here")),
        );
        assert!(matches!(
            writer.write_csv().unwrap_err(),
            ExportError::InvalidTargetFolder(_)
        ));
    }
}
