//! CSV snapshots of feature tables.
//!
//! The offline trainer writes the synthetic cohort next to the serialized
//! model so a run can be inspected or re-used outside the process.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::table::FeatureTable;

impl FeatureTable {
    /// Serialize the table to CSV: feature columns in schema order, then the
    /// label column.
    ///
    /// # Errors
    ///
    /// Returns an error if CSV serialization fails.
    pub fn to_csv_string(&self) -> Result<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);

        let mut header: Vec<&str> = self.feature_names().iter().map(String::as_str).collect();
        header.push(self.label_name());
        wtr.write_record(&header)?;

        for (row, label) in self.features().outer_iter().zip(self.labels()) {
            let mut record: Vec<String> = row.iter().map(|v| v.to_string()).collect();
            record.push(label.to_string());
            wtr.write_record(&record)?;
        }

        let data = String::from_utf8(wtr.into_inner().map_err(|e| e.into_error())?)
            .expect("CSV output is valid UTF-8");
        Ok(data)
    }

    /// Write the CSV snapshot to a file, creating parent directories as
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = self.to_csv_string()?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn sample_table() -> FeatureTable {
        FeatureTable::new(
            vec!["bmi".to_string(), "diabetes".to_string()],
            array![[24.5, 0.0], [31.0, 1.0]],
            vec![0, 1],
        )
        .unwrap()
        .with_label_name("fatty_liver")
    }

    #[test]
    fn test_csv_header_and_rows() {
        let csv = sample_table().to_csv_string().unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("bmi,diabetes,fatty_liver"));
        assert_eq!(lines.next(), Some("24.5,0,0"));
        assert_eq!(lines.next(), Some("31,1,1"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_write_csv_round_trip() {
        use std::io::Read;

        let temp_dir = std::env::temp_dir().join("hepatica_snapshot_test");
        let path = temp_dir.join("cohort.csv");

        sample_table().write_csv(&path).unwrap();

        let mut content = String::new();
        File::open(&path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert!(content.contains("fatty_liver"));
        assert!(content.contains("31,1,1"));

        std::fs::remove_dir_all(temp_dir).ok();
    }
}
