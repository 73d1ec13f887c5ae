//! Route color rules.

use serde::{Deserialize, Serialize};

use crate::domain::HexColor;

use super::error::ConfigError;

/// "Routes whose long name contains `keyword` are drawn in `color`."
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorKeyword {
    pub keyword: String,
    pub color: HexColor,
}

impl ColorKeyword {
    pub fn new(keyword: impl Into<String>, color: HexColor) -> Self {
        Self {
            keyword: keyword.into(),
            color,
        }
    }
}

/// Color fixes applied to routes.
///
/// The feed still carries an old purple for some routes; that one value is
/// replaced by the agency blue. Routes without a color get one from the
/// first keyword their long name contains.
#[derive(Debug, Clone)]
pub struct ColorRules {
    legacy: HexColor,
    replacement: HexColor,
    /// Lowercased keywords, in priority order.
    keywords: Vec<ColorKeyword>,
}

impl ColorRules {
    pub fn new(
        legacy: HexColor,
        replacement: HexColor,
        keywords: Vec<ColorKeyword>,
    ) -> Result<Self, ConfigError> {
        let keywords = keywords
            .into_iter()
            .map(|k| {
                let keyword = k.keyword.trim().to_lowercase();
                if keyword.is_empty() {
                    Err(ConfigError::EmptyColorKeyword)
                } else {
                    Ok(ColorKeyword::new(keyword, k.color))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            legacy,
            replacement,
            keywords,
        })
    }

    /// Replace the legacy color (any case); pass anything else through.
    pub fn fix_legacy(&self, color: &str) -> String {
        if self.legacy.matches(color) {
            self.replacement.to_string()
        } else {
            color.to_string()
        }
    }

    /// Color for a route with none in the feed, if a keyword rule applies.
    pub fn missing_color(&self, route_long_name: &str) -> Option<HexColor> {
        let lower = route_long_name.to_lowercase();
        self.keywords
            .iter()
            .find(|rule| lower.contains(&rule.keyword))
            .map(|rule| rule.color)
    }
}
