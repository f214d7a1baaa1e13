//! Output writers for simulation results.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::metrics::{CsvSummaryRow, GameMetrics};
use crate::types::OutputFormat;

pub struct OutputWriter {
    format: OutputFormat,
    detail_writer: Option<Box<dyn Write + Send>>,
    csv_writer: Option<csv::Writer<BufWriter<File>>>,
    detail_path: Option<PathBuf>,
    csv_path: Option<PathBuf>,
    /// Records held back until `finish` when writing a single JSON array
    buffered: Vec<GameMetrics>,
}

impl OutputWriter {
    pub fn new(
        output_dir: &str,
        format: &OutputFormat,
        compress: bool,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let dir = Path::new(output_dir);
        std::fs::create_dir_all(dir)?;

        let timestamp = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| "unknown".to_string())
            .replace(':', "-");

        let extension = match format {
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Json => "json",
        };
        let filename = format!("simulation_{timestamp}.{extension}");
        let (detail_writer, detail_path) = if compress {
            let gz_path = dir.join(format!("{filename}.gz"));
            let writer: Box<dyn Write + Send> = Box::new(BufWriter::new(GzEncoder::new(
                File::create(&gz_path)?,
                Compression::default(),
            )));
            (writer, gz_path)
        } else {
            let path = dir.join(&filename);
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&path)?;
            let writer: Box<dyn Write + Send> = Box::new(BufWriter::new(file));
            (writer, path)
        };

        // Always create CSV summary
        let csv_path = dir.join(format!("simulation_{timestamp}_summary.csv"));
        let csv_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&csv_path)?;
        let csv_writer = csv::Writer::from_writer(BufWriter::new(csv_file));

        Ok(Self {
            format: format.clone(),
            detail_writer: Some(detail_writer),
            csv_writer: Some(csv_writer),
            detail_path: Some(detail_path),
            csv_path: Some(csv_path),
            buffered: Vec::new(),
        })
    }

    pub fn write_game(&mut self, metrics: &GameMetrics) -> Result<(), Box<dyn std::error::Error>> {
        match self.format {
            OutputFormat::Jsonl => {
                if let Some(ref mut writer) = self.detail_writer {
                    let json = serde_json::to_string(metrics)?;
                    writeln!(writer, "{json}")?;
                    writer.flush()?;
                }
            }
            OutputFormat::Json => self.buffered.push(metrics.clone()),
        }

        if let Some(ref mut writer) = self.csv_writer {
            let row: CsvSummaryRow = metrics.into();
            writer.serialize(&row)?;
            writer.flush()?;
        }

        Ok(())
    }

    pub fn finish(mut self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(mut writer) = self.detail_writer.take() {
            if matches!(self.format, OutputFormat::Json) {
                serde_json::to_writer_pretty(&mut writer, &self.buffered)?;
                writeln!(writer)?;
            }
            writer.flush()?;
            // Dropping the boxed writer finalises the gzip stream
            drop(writer);
        }
        if let Some(ref mut writer) = self.csv_writer {
            writer.flush()?;
        }
        Ok(())
    }

    pub fn output_paths(&self) -> (Option<&PathBuf>, Option<&PathBuf>) {
        (self.detail_path.as_ref(), self.csv_path.as_ref())
    }
}
