use super::Formatter;

pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format_row(&self, observation: usize, readings: &[f64]) -> String {
        let readings = readings
            .iter()
            .map(|r| format!("{:>8.2}", r))
            .collect::<Vec<_>>()
            .join(" ");
        format!("obs {:>4}: {}", observation, readings)
    }
}
