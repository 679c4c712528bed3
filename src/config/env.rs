use toml::Value;

use super::source::{ConfigEntry, ConfigSource};
use super::ConfigError;

/// Maps `PREFIX{sep}SECTION{sep}KEY=value` environment variables onto the
/// lowercased path `section.key`.
#[derive(Debug, Clone)]
pub struct EnvSource {
    prefix: String,
    separator: String,
}

impl EnvSource {
    /// # Panics
    ///
    /// Panics if `separator` is empty.
    pub fn new(prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        let separator = separator.into();
        assert!(!separator.is_empty(), "separator must not be empty");
        Self {
            prefix: prefix.into(),
            separator,
        }
    }

    fn entries_from(&self, vars: impl IntoIterator<Item = (String, String)>) -> Vec<ConfigEntry> {
        let prefix_with_sep = format!("{}{}", self.prefix, self.separator);

        vars.into_iter()
            .filter_map(|(key, value)| {
                let rest = key.strip_prefix(&prefix_with_sep)?;
                if rest.is_empty() {
                    return None;
                }
                let path = rest
                    .split(self.separator.as_str())
                    .map(str::to_lowercase)
                    .collect();
                Some(ConfigEntry::at_path(path, coerce_value(&value)))
            })
            .collect()
    }
}

impl ConfigSource for EnvSource {
    fn entries(&self) -> Result<Vec<ConfigEntry>, ConfigError> {
        Ok(self.entries_from(std::env::vars()))
    }
}

/// bool, then integer, then float, else string.
fn coerce_value(s: &str) -> Value {
    if s.eq_ignore_ascii_case("true") {
        return Value::Boolean(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return Value::Boolean(false);
    }

    let digits = s.strip_prefix('-').unwrap_or(s);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(i) = s.parse::<i64>() {
            return Value::Integer(i);
        }
    }

    if s.contains('.') {
        if let Ok(f) = s.parse::<f64>() {
            return Value::Float(f);
        }
    }

    Value::String(s.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_env_maps_prefixed_vars_to_lowercase_paths() {
        let source = EnvSource::new("MYAPP", "__");
        let entries = source.entries_from(vars(&[
            ("MYAPP__DATABASE__HOST", "db.internal"),
            ("OTHER__DATABASE__HOST", "ignored"),
            ("MYAPP__", "ignored"),
        ]));

        assert_eq!(
            entries,
            vec![ConfigEntry::at_path(
                vec!["database".into(), "host".into()],
                Value::String("db.internal".into())
            )]
        );
    }

    #[test]
    fn test_coerce_value() {
        assert_eq!(coerce_value("TRUE"), Value::Boolean(true));
        assert_eq!(coerce_value("false"), Value::Boolean(false));
        assert_eq!(coerce_value("-42"), Value::Integer(-42));
        assert_eq!(coerce_value("1.5"), Value::Float(1.5));
        assert_eq!(coerce_value("1e5"), Value::String("1e5".into()));
        assert_eq!(coerce_value("a,b"), Value::String("a,b".into()));
    }

    #[test]
    #[should_panic(expected = "separator must not be empty")]
    fn test_empty_separator_panics() {
        EnvSource::new("MYAPP", "");
    }
}
