//! Route short names and their stable ids.

use std::collections::HashMap;

use super::error::ConfigError;

/// Stable ids for route short names that are not plain numbers.
///
/// Numeric short names are turned into ids by the host; this table covers
/// the community and special routes (`cp1`, `sp6`, ...) whose ids must
/// not move between imports. No two short names share an id.
#[derive(Debug, Clone, Default)]
pub struct RouteIdTable {
    by_short_name: HashMap<String, u64>,
}

impl RouteIdTable {
    /// Build the table, rejecting two short names with the same id.
    pub fn new<I, S>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let mut by_short_name = HashMap::new();
        let mut by_id: HashMap<u64, String> = HashMap::new();

        for (short_name, id) in entries {
            let short_name = short_name.into();
            if let Some(first) = by_id.get(&id) {
                if first != &short_name {
                    return Err(ConfigError::DuplicateRouteId {
                        id,
                        first: first.clone(),
                        second: short_name,
                    });
                }
            }
            by_id.insert(id, short_name.clone());
            by_short_name.insert(short_name, id);
        }

        Ok(Self { by_short_name })
    }

    /// Exact, case-sensitive lookup.
    pub fn resolve(&self, short_name: &str) -> Option<u64> {
        self.by_short_name.get(short_name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_short_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_short_name.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.by_short_name.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Uppercase a non-numeric short name; numbers are left as they are.
pub fn clean_route_short_name(short_name: &str) -> String {
    let trimmed = short_name.trim();
    if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        trimmed.to_string()
    } else {
        trimmed.to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_names() {
        let table = RouteIdTable::new([("cp1", 100_001), ("sp6", 100_106)]).unwrap();
        assert_eq!(table.resolve("cp1"), Some(100_001));
        assert_eq!(table.resolve("sp6"), Some(100_106));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let table = RouteIdTable::new([("cp1", 100_001)]).unwrap();
        assert_eq!(table.resolve("CP1"), None);
        assert_eq!(table.resolve("cp1 "), None);
        assert_eq!(table.resolve("1"), None);
    }

    #[test]
    fn rejects_shared_id() {
        let err = RouteIdTable::new([("cp1", 7), ("ecs", 7)]).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateRouteId { id: 7, .. }));
    }

    #[test]
    fn repeated_entry_is_not_a_duplicate() {
        let table = RouteIdTable::new([("cp1", 7), ("cp1", 7)]).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn short_name_cleanup() {
        assert_eq!(clean_route_short_name("cp1"), "CP1");
        assert_eq!(clean_route_short_name(" sp14 "), "SP14");
        assert_eq!(clean_route_short_name("159"), "159");
        assert_eq!(clean_route_short_name("9a"), "9A");
        assert_eq!(clean_route_short_name(""), "");
    }
}
