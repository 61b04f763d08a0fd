use super::{Formatter, iso8601_timestamp};

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_row(&self, observation: usize, readings: &[f64]) -> String {
        let readings = readings
            .iter()
            .map(|r| format!("{:.2}", r))
            .collect::<Vec<_>>()
            .join(",");
        format!(
            r#"{{"ts":"{}","observation":{},"readings":[{}]}}"#,
            iso8601_timestamp(),
            observation,
            readings
        )
    }
}
