use crate::model::ResultRecord;
use crate::output::{prettify_response_body, Outputter};
use crate::Result;
use std::io::Write;

const ANSI_RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    White,
    LightBlue,
}

impl Color {
    fn ansi_code(self) -> &'static str {
        match self {
            Color::Red => "31",
            Color::Green => "32",
            Color::Yellow => "33",
            Color::Blue => "34",
            Color::Magenta => "35",
            Color::White => "37",
            Color::LightBlue => "94",
        }
    }
}

/// Status banding: 1xx and 5xx yellow, 2xx green, 3xx magenta, 4xx red.
pub fn status_color(status_code: u16) -> Option<Color> {
    match status_code {
        100..=199 | 500..=599 => Some(Color::Yellow),
        200..=299 => Some(Color::Green),
        300..=399 => Some(Color::Magenta),
        400..=499 => Some(Color::Red),
        _ => None,
    }
}

pub struct ColoredOutputter<'a, W: Write> {
    writer: &'a mut W,
    colored: bool,
}

impl<'a, W: Write> ColoredOutputter<'a, W> {
    pub fn new(writer: &mut W, colored: bool) -> ColoredOutputter<'_, W> {
        ColoredOutputter { writer, colored }
    }

    fn paint(&self, color: Option<Color>, content: &str) -> String {
        match color {
            Some(color) if self.colored => {
                format!("\x1b[{}m{}{}", color.ansi_code(), content, ANSI_RESET)
            }
            _ => content.to_string(),
        }
    }
}

impl<'a, W: Write> Outputter for ColoredOutputter<'a, W> {
    fn result(&mut self, record: &ResultRecord) -> Result<()> {
        let ResultRecord {
            protocol,
            status_code,
            response_time_ms,
            headers,
            body,
            ..
        } = record;

        let headers: String = headers
            .iter()
            .flat_map(|(name, values)| values.iter().map(move |value| (name, value)))
            .map(|(name, value)| {
                format!(
                    "  {}: {}\n",
                    self.paint(Some(Color::White), name),
                    self.paint(Some(Color::LightBlue), value)
                )
            })
            .collect();

        let output = format!(
            "
- Start time: {start_time}
- Protocol: {protocol}
- Status: {status}
- Time: {time}

- Headers:
{headers}{body}",
            start_time = self.paint(Some(Color::LightBlue), &record.formatted_start_time()),
            protocol = self.paint(Some(Color::Blue), protocol),
            status = self.paint(status_color(*status_code), &record.status()),
            time = self.paint(Some(Color::Green), &format!("{} ms", response_time_ms)),
            headers = headers,
            body = match body.as_str() {
                "" => String::new(),
                body => format!("\n- Response:\n{}\n", prettify_response_body(body)),
            }
        );

        self.writer.write_all(output.as_bytes())?;
        Ok(())
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        let line = format!("{}\n", self.paint(Some(Color::Green), message));
        self.writer.write_all(line.as_bytes())?;
        Ok(())
    }

    fn diagnostic(&mut self, message: &str) -> Result<()> {
        let line = format!("\n{}\n", message);
        self.writer.write_all(line.as_bytes())?;
        Ok(())
    }
}
