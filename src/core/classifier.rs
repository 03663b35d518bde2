use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{DataShape, Record};

/// Chart family picked for a record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Pie,
    Bar,
}

impl ChartKind {
    pub const ALL: [Self; 3] = [Self::Line, Self::Pie, Self::Bar];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Pie => "pie",
            Self::Bar => "bar",
        }
    }
}

/// Condition half of a classification rule.
///
/// Token lists are matched as lowercase substrings of the column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RulePredicate {
    /// Category column name looks temporal and the first category cell looks like a date.
    TemporalAxis { category_tokens: Vec<String> },
    /// Few rows of a category column paired with a proportion column.
    ProportionAxes {
        max_rows: usize,
        category_tokens: Vec<String>,
        value_tokens: Vec<String>,
    },
    MaxRows { max_rows: usize },
    Always,
}

impl RulePredicate {
    fn matches(&self, records: &[Record], shape: &DataShape) -> bool {
        match self {
            Self::TemporalAxis { category_tokens } => {
                name_contains_any(shape.category_key(), category_tokens)
                    && records
                        .first()
                        .and_then(|first| shape.raw_category_text(first))
                        .is_some_and(|text| is_date_like(&text))
            }
            Self::ProportionAxes {
                max_rows,
                category_tokens,
                value_tokens,
            } => {
                records.len() <= *max_rows
                    && name_contains_any(shape.category_key(), category_tokens)
                    && name_contains_any(shape.value_key(), value_tokens)
            }
            Self::MaxRows { max_rows } => records.len() <= *max_rows,
            Self::Always => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRule {
    pub name: String,
    pub kind: ChartKind,
    pub predicate: RulePredicate,
}

impl ClassificationRule {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ChartKind, predicate: RulePredicate) -> Self {
        Self {
            name: name.into(),
            kind,
            predicate,
        }
    }
}

/// Outcome of classification, naming the rule that fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub kind: ChartKind,
    /// `None` when no rule matched and the bar default applied.
    pub rule: Option<String>,
}

/// Ordered rule list; the first matching rule decides the chart kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartClassifier {
    rules: Vec<ClassificationRule>,
}

impl Default for ChartClassifier {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl ChartClassifier {
    #[must_use]
    pub fn new(rules: Vec<ClassificationRule>) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    #[must_use]
    pub fn classify(&self, records: &[Record], shape: &DataShape) -> ChartKind {
        self.classify_with_rule(records, shape).kind
    }

    #[must_use]
    pub fn classify_with_rule(&self, records: &[Record], shape: &DataShape) -> Classification {
        let matched = self
            .rules
            .iter()
            .find(|rule| rule.predicate.matches(records, shape));

        let classification = match matched {
            Some(rule) => Classification {
                kind: rule.kind,
                rule: Some(rule.name.clone()),
            },
            None => Classification {
                kind: ChartKind::Bar,
                rule: None,
            },
        };
        debug!(
            rows = records.len(),
            category = shape.category_key(),
            value = shape.value_key(),
            kind = classification.kind.as_str(),
            rule = classification.rule.as_deref().unwrap_or("<none>"),
            "classified chart"
        );
        classification
    }
}

/// Built-in rules: temporal line, explicit proportion pie (≤5 rows),
/// small-set pie (≤4 rows), then bar.
#[must_use]
pub fn default_rules() -> Vec<ClassificationRule> {
    vec![
        ClassificationRule::new(
            "temporal_axis",
            ChartKind::Line,
            RulePredicate::TemporalAxis {
                category_tokens: tokens(&["date", "month", "year", "time"]),
            },
        ),
        ClassificationRule::new(
            "proportion_axes",
            ChartKind::Pie,
            RulePredicate::ProportionAxes {
                max_rows: 5,
                category_tokens: tokens(&["group", "category"]),
                value_tokens: tokens(&["share", "percent", "distribution"]),
            },
        ),
        ClassificationRule::new(
            "small_set",
            ChartKind::Pie,
            RulePredicate::MaxRows { max_rows: 4 },
        ),
        ClassificationRule::new("default", ChartKind::Bar, RulePredicate::Always),
    ]
}

fn tokens(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}

fn name_contains_any(name: &str, tokens: &[String]) -> bool {
    let lowered = name.to_lowercase();
    tokens
        .iter()
        .any(|token| lowered.contains(&token.to_lowercase()))
}

static YEAR_OR_MONTH_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\d{4}|\d{1,2})$").expect("static regex"));
static LEADING_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{L}+").expect("static regex"));

const MONTH_TOKENS: &[&str] = &[
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep",
    "sept", "oct", "nov", "dec", "январь", "февраль", "март", "апрель", "май", "июнь", "июль",
    "август", "сентябрь", "октябрь", "ноябрь", "декабрь", "января", "февраля", "марта",
    "апреля", "мая", "июня", "июля", "августа", "сентября", "октября", "ноября", "декабря", "янв",
    "фев", "мар", "апр", "июн", "июл", "авг", "сен", "сент", "окт", "ноя", "дек",
];

/// Whether a category cell reads like a date, year, month number or month name.
#[must_use]
pub fn is_date_like(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.contains('-') || trimmed.contains('/') {
        return true;
    }
    if YEAR_OR_MONTH_NUMBER.is_match(trimmed) {
        return true;
    }
    let lowered = trimmed.to_lowercase();
    LEADING_WORD
        .find(&lowered)
        .is_some_and(|word| MONTH_TOKENS.contains(&word.as_str()))
}
