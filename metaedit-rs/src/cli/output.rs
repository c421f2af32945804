//! Output formatting for CLI commands.

use crate::cli::args::OutputFormat;
use crate::error::Result;
use crate::parser::key_text;
use serde::Serialize;
use serde_yaml::{Mapping, Value};

/// Helper for formatting and printing output.
pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    /// Render a serializable value in the configured format.
    pub fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        let rendered = match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(value)?,
            OutputFormat::Yaml => serde_yaml::to_string(value)?,
            OutputFormat::Toml => toml::to_string_pretty(&toml_ready(serde_yaml::to_value(value)?))?,
        };
        Ok(rendered.trim_end().to_string())
    }

    /// Print a serializable value in the configured format.
    pub fn print<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", self.render(value)?);
        Ok(())
    }

    /// Print a message if not in quiet mode.
    pub fn info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    /// Print a warning message.
    pub fn warn(&self, message: &str) {
        if !self.quiet {
            eprintln!("Warning: {}", message);
        }
    }
}

/// TOML has no null and only string keys: nulls become empty strings and
/// keys are rendered as text.
fn toml_ready(value: Value) -> Value {
    match value {
        Value::Null => Value::String(String::new()),
        Value::Sequence(items) => Value::Sequence(items.into_iter().map(toml_ready).collect()),
        Value::Mapping(map) => Value::Mapping(
            map.into_iter()
                .map(|(k, v)| (Value::String(key_text(&k)), toml_ready(v)))
                .collect::<Mapping>(),
        ),
        Value::Tagged(tagged) => toml_ready(tagged.value),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Property;

    #[derive(Serialize)]
    struct Sample {
        name: &'static str,
        count: u32,
    }

    const SAMPLE: Sample = Sample { name: "x", count: 2 };

    #[test]
    fn test_render_json() {
        let out = Output::new(OutputFormat::Json, false);
        assert_eq!(out.render(&SAMPLE).unwrap(), "{\n  \"name\": \"x\",\n  \"count\": 2\n}");
    }

    #[test]
    fn test_render_yaml() {
        let out = Output::new(OutputFormat::Yaml, false);
        assert_eq!(out.render(&SAMPLE).unwrap(), "name: x\ncount: 2");
    }

    #[test]
    fn test_render_toml() {
        let out = Output::new(OutputFormat::Toml, false);
        assert_eq!(out.render(&SAMPLE).unwrap(), "name = \"x\"\ncount = 2");
    }

    #[test]
    fn test_render_toml_with_null_content() {
        #[derive(Serialize)]
        struct Listing {
            properties: Vec<Property>,
        }

        let listing = Listing {
            properties: vec![
                Property::yaml("title", Value::String("Hi".to_string())),
                Property::yaml("empty", Value::Null),
            ],
        };
        let out = Output::new(OutputFormat::Toml, false);
        let rendered = out.render(&listing).unwrap();
        assert!(rendered.contains("key = \"empty\"\ncontent = \"\""), "{rendered}");

        let nested = serde_yaml::from_str::<Value>("1: ~\nlist: [a, ~]").unwrap();
        let rendered = out.render(&nested).unwrap();
        assert!(rendered.starts_with("1 = \"\"\n"), "{rendered}");
        assert!(rendered.contains("\"a\""), "{rendered}");
    }
}
