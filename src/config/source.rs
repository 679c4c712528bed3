//! Pluggable sources feeding the local store, and the table merge they share.

use toml::{Table, Value};

use super::ConfigError;

/// A value contributed by a source, placed at `path` in the merged table.
///
/// An empty path means the value is a table merged at the root.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigEntry {
    pub path: Vec<String>,
    pub value: Value,
}

impl ConfigEntry {
    pub fn root(table: Table) -> Self {
        Self {
            path: Vec::new(),
            value: Value::Table(table),
        }
    }

    pub fn at_path(path: Vec<String>, value: Value) -> Self {
        Self { path, value }
    }

    /// Places `value` under a dotted key such as `database.host`.
    pub fn at_key(key: &str, value: Value) -> Self {
        Self::at_path(key_path(key), value)
    }
}

/// Something that can contribute entries to a [`Settings`](super::Settings) store.
pub trait ConfigSource: Send + Sync + std::fmt::Debug {
    fn entries(&self) -> Result<Vec<ConfigEntry>, ConfigError>;
}

pub(crate) fn key_path(key: &str) -> Vec<String> {
    key.split('.').map(str::to_owned).collect()
}

pub(crate) fn merge_entry(table: &mut Table, entry: ConfigEntry) {
    merge_at_path(table, &entry.path, entry.value);
}

/// Merges `value` into `table` at `path`, creating intermediate tables and
/// replacing any scalar that stands in the way.
pub(crate) fn merge_at_path(table: &mut Table, path: &[String], value: Value) {
    let Some((first, rest)) = path.split_first() else {
        if let Value::Table(overlay) = value {
            deep_merge(table, overlay);
        }
        return;
    };

    if rest.is_empty() {
        match (table.get_mut(first), value) {
            (Some(Value::Table(base)), Value::Table(overlay)) => deep_merge(base, overlay),
            (_, value) => {
                table.insert(first.clone(), value);
            }
        }
        return;
    }

    let nested = table
        .entry(first.clone())
        .or_insert_with(|| Value::Table(Table::new()));
    if !nested.is_table() {
        *nested = Value::Table(Table::new());
    }
    if let Value::Table(nested) = nested {
        merge_at_path(nested, rest, value);
    }
}

/// Tables merge recursively; every other value (arrays included) replaces.
pub(crate) fn deep_merge(base: &mut Table, overlay: Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(Value::Table(base_table)), Value::Table(overlay_table)) => {
                deep_merge(base_table, overlay_table);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

/// Walks a dotted key through nested tables.
pub(crate) fn lookup<'a>(table: &'a Table, key: &str) -> Option<&'a Value> {
    let mut segments = key.split('.');
    let mut current = table.get(segments.next()?)?;
    for segment in segments {
        current = current.as_table()?.get(segment)?;
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_table(toml_str: &str) -> Table {
        toml::from_str(toml_str).unwrap()
    }

    #[test]
    fn test_merge_creates_intermediate_tables() {
        let mut table = Table::new();
        merge_entry(&mut table, ConfigEntry::at_key("a.b.c", Value::from("deep")));

        assert_eq!(lookup(&table, "a.b.c"), Some(&Value::from("deep")));
    }

    #[test]
    fn test_merge_replaces_scalar_in_the_way() {
        let mut table = make_table(r#"a = "scalar""#);
        merge_entry(&mut table, ConfigEntry::at_key("a.b", Value::from(1)));

        assert_eq!(lookup(&table, "a.b"), Some(&Value::Integer(1)));
    }

    #[test]
    fn test_deep_merge_keeps_sibling_keys() {
        let mut base = make_table(
            r#"
            [database]
            host = "localhost"
            port = 5432
            "#,
        );
        let overlay = make_table(
            r#"
            [database]
            host = "db.internal"
            "#,
        );
        merge_entry(&mut base, ConfigEntry::root(overlay));

        assert_eq!(lookup(&base, "database.host"), Some(&Value::from("db.internal")));
        assert_eq!(lookup(&base, "database.port"), Some(&Value::Integer(5432)));
    }

    #[test]
    fn test_arrays_are_replaced_not_appended() {
        let mut base = make_table(r#"hosts = ["a", "b"]"#);
        merge_entry(&mut base, ConfigEntry::root(make_table(r#"hosts = ["c"]"#)));

        assert_eq!(base["hosts"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_lookup_through_scalar_is_none() {
        let table = make_table(r#"a = "scalar""#);

        assert_eq!(lookup(&table, "a.b"), None);
        assert_eq!(lookup(&table, "missing"), None);
    }
}
