use super::{Formatter, iso8601_timestamp};

pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format_row(&self, observation: usize, readings: &[f64]) -> String {
        let readings = readings
            .iter()
            .map(|r| format!("{:.2}", r))
            .collect::<Vec<_>>()
            .join(",");
        format!("{},{},{}", iso8601_timestamp(), observation, readings)
    }

    fn header(&self, reader_count: usize) -> Option<String> {
        let readers = (0..reader_count)
            .map(|i| format!("reader_{}", i))
            .collect::<Vec<_>>()
            .join(",");
        Some(format!("ts,observation,{}", readers))
    }
}
