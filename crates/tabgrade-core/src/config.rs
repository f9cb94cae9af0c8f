//! Table configuration: the raw host-level surface and its resolved form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, GradeError};

/// Literal representation used for a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Base {
    /// Optionally signed base-10 integers.
    #[serde(rename = "dec")]
    Decimal,
    /// Base-16 digit strings.
    Hex,
    /// Base-2 digit strings.
    #[serde(rename = "bin")]
    Binary,
    /// Opaque text compared verbatim.
    String,
}

impl Base {
    /// Numeric radix of the base, `None` for [`Base::String`].
    pub fn radix(self) -> Option<u32> {
        match self {
            Base::Decimal => Some(10),
            Base::Hex => Some(16),
            Base::Binary => Some(2),
            Base::String => None,
        }
    }

    /// Whether literals of this base are digit strings subject to two's complement.
    pub fn is_digit_string(self) -> bool {
        matches!(self, Base::Hex | Base::Binary)
    }

    /// Attribute spelling of the base (`dec`, `hex`, `bin`, `string`).
    pub fn as_str(self) -> &'static str {
        match self {
            Base::Decimal => "dec",
            Base::Hex => "hex",
            Base::Binary => "bin",
            Base::String => "string",
        }
    }

    /// Long name used in user facing messages.
    pub fn describe(self) -> &'static str {
        match self {
            Base::Decimal => "decimal",
            Base::Hex => "hexadecimal",
            Base::Binary => "binary",
            Base::String => "string",
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Base {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dec" => Ok(Base::Decimal),
            "hex" => Ok(Base::Hex),
            "bin" => Ok(Base::Binary),
            "string" => Ok(Base::String),
            other => Err(GradeError::ConfigurationConflict(
                ErrorInfo::new(
                    "config.unknown_base",
                    format!("invalid base '{other}'"),
                )
                .with_hint("expected one of \"dec\", \"hex\", \"bin\" or \"string\""),
            )),
        }
    }
}

/// Default literal prefixes keyed by base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixTable {
    /// Prefix for decimal literals.
    pub decimal: String,
    /// Prefix for hexadecimal literals.
    pub hex: String,
    /// Prefix for binary literals.
    pub binary: String,
    /// Prefix for string literals.
    pub string: String,
}

impl PrefixTable {
    /// The conventional `0x`/`0b` table.
    pub fn standard() -> Self {
        Self {
            decimal: String::new(),
            hex: "0x".into(),
            binary: "0b".into(),
            string: String::new(),
        }
    }

    /// Returns the default prefix for `base`.
    pub fn prefix_for(&self, base: Base) -> &str {
        match base {
            Base::Decimal => &self.decimal,
            Base::Hex => &self.hex,
            Base::Binary => &self.binary,
            Base::String => &self.string,
        }
    }
}

impl Default for PrefixTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Immutable configuration for one grading request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Answers name of the table; cell keys are `<name>_<row>`.
    pub name: String,
    /// Literal representation of the answer column.
    pub base: Base,
    /// Prefix stripped from and attached to literals.
    pub prefix: String,
    /// Required digit count after prefix removal, 0 when unconstrained.
    pub fixed_width: usize,
    /// Whether hex/bin literals are two's complement.
    pub signed: bool,
    /// Enforce the fixed width while grading instead of while validating.
    pub strict_grading: bool,
    /// Whether an empty submission is a distinct blank case.
    pub allow_blank: bool,
    /// Lower-cased sentinel literal meaning "unknown".
    pub unknown_value: String,
    /// Per-cell credit instead of all-or-nothing.
    pub partial_credit: bool,
    /// External weight for the table-level score.
    pub weight: u32,
    /// Whether per-cell feedback is shown to the student.
    pub show_partial_score: bool,
    /// Informational tables are never validated or graded.
    pub is_material: bool,
}

impl TableConfig {
    /// Creates a configuration for `base` with the standard prefix and defaults.
    pub fn for_base(base: Base) -> Self {
        Self {
            base,
            prefix: PrefixTable::standard().prefix_for(base).to_string(),
            ..Self::default()
        }
    }

    /// Key under which row `row` is submitted and scored.
    pub fn cell_key(&self, row: usize) -> String {
        cell_key(&self.name, row)
    }

    /// Returns `true` when `literal` (case-insensitively, trimmed) is the sentinel.
    pub fn is_unknown(&self, literal: &str) -> bool {
        literal.trim().to_lowercase() == self.unknown_value
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            name: "answers".into(),
            base: Base::Decimal,
            prefix: String::new(),
            fixed_width: 0,
            signed: true,
            strict_grading: false,
            allow_blank: false,
            unknown_value: String::new(),
            partial_credit: true,
            weight: 1,
            show_partial_score: true,
            is_material: false,
        }
    }
}

/// Builds the key for row `row` of table `name`.
pub fn cell_key(name: &str, row: usize) -> String {
    format!("{name}_{row}")
}

/// Index column settings as given by the host; `None` means "not specified".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IndexSpec {
    /// Either a single start value or one label per row.
    pub values: Vec<String>,
    /// Base the start value is parsed and formatted in.
    pub base: Option<Base>,
    /// Prefix attached to every generated label.
    pub prefix: Option<String>,
    /// Zero-padded digit count for generated labels.
    pub fixed_width: Option<usize>,
}

impl IndexSpec {
    /// A start value with no explicit formatting options.
    pub fn starting_at(start: impl Into<String>) -> Self {
        Self {
            values: vec![start.into()],
            ..Self::default()
        }
    }

    /// Whether any of base/prefix/fixed width were given explicitly.
    pub fn has_formatting(&self) -> bool {
        self.base.is_some() || self.prefix.is_some() || self.fixed_width.is_some()
    }
}

/// Raw table description as written by a question author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TableSpec {
    /// Answers name of the table.
    pub answers_name: String,
    /// External weight of the table score.
    #[serde(default = "default_weight")]
    pub weight: i64,
    /// Reference answers, one per row.
    #[serde(default)]
    pub correct_answer: Option<Vec<String>>,
    /// Index start value or full index list.
    #[serde(default = "default_index")]
    pub index: Vec<String>,
    /// Values prefilled into the inputs.
    #[serde(default)]
    pub prefill: Option<Vec<String>>,
    /// Placeholder hints shown in empty inputs.
    #[serde(default)]
    pub placeholder: Option<Vec<String>>,
    /// Base name of the answer column.
    #[serde(default = "default_data_base")]
    pub data_base: String,
    /// Prefix override for answer literals.
    #[serde(default)]
    pub data_prefix: Option<String>,
    /// Fixed digit width for answers.
    #[serde(default)]
    pub data_fixed_width: i64,
    /// Base name of the index column.
    #[serde(default)]
    pub index_base: Option<String>,
    /// Prefix override for index labels.
    #[serde(default)]
    pub index_prefix: Option<String>,
    /// Fixed digit width for index labels.
    #[serde(default)]
    pub index_fixed_width: Option<i64>,
    /// Whether hex/bin answers are two's complement.
    #[serde(default = "default_true")]
    pub signed: bool,
    /// Whether width is enforced at grading time.
    #[serde(default)]
    pub strict_grading: bool,
    /// Whether a blank table is accepted.
    #[serde(default)]
    pub allow_blank: bool,
    /// Sentinel for "unknown".
    #[serde(default)]
    pub unknown_value: String,
    /// Per-cell partial credit.
    #[serde(default = "default_true")]
    pub partial_credit: bool,
    /// Per-cell feedback visibility.
    #[serde(default = "default_true")]
    pub show_partial_score: bool,
    /// Informational table, skipped by grading.
    #[serde(default)]
    pub is_material: bool,
}

fn default_weight() -> i64 {
    1
}

fn default_index() -> Vec<String> {
    vec!["0".into()]
}

fn default_data_base() -> String {
    "dec".into()
}

fn default_true() -> bool {
    true
}

impl TableSpec {
    /// Creates a spec with only the required attributes set.
    pub fn new(answers_name: impl Into<String>, correct_answer: Vec<String>) -> Self {
        Self {
            answers_name: answers_name.into(),
            weight: default_weight(),
            correct_answer: Some(correct_answer),
            index: default_index(),
            prefill: None,
            placeholder: None,
            data_base: default_data_base(),
            data_prefix: None,
            data_fixed_width: 0,
            index_base: None,
            index_prefix: None,
            index_fixed_width: None,
            signed: true,
            strict_grading: false,
            allow_blank: false,
            unknown_value: String::new(),
            partial_credit: true,
            show_partial_score: true,
            is_material: false,
        }
    }

    /// Resolves the spec against the standard prefix table.
    pub fn resolve(&self) -> Result<TableConfig, GradeError> {
        self.resolve_with(&PrefixTable::standard())
    }

    /// Resolves the spec into an immutable [`TableConfig`].
    pub fn resolve_with(&self, prefixes: &PrefixTable) -> Result<TableConfig, GradeError> {
        let name = self.answers_name.trim();
        if name.is_empty() {
            return Err(GradeError::conflict(
                "config.missing_name",
                "answers-name must not be empty",
            ));
        }
        let base: Base = self.data_base.parse().map_err(|err: GradeError| {
            GradeError::ConfigurationConflict(
                err.info().clone().with_context("attribute", "data-base"),
            )
        })?;
        if base == Base::String && self.data_prefix.as_deref().is_some_and(|p| !p.is_empty()) {
            return Err(GradeError::ConfigurationConflict(
                ErrorInfo::new(
                    "config.string_prefix",
                    "data-prefix should not be specified when data-base is 'string'",
                )
                .with_context("table", name),
            ));
        }
        let fixed_width = non_negative(self.data_fixed_width, "data-fixed-width", name)?;
        let weight = u32::try_from(self.weight).map_err(|_| {
            GradeError::ConfigurationConflict(
                ErrorInfo::new("config.weight", "weight must be a non-negative integer")
                    .with_context("table", name)
                    .with_context("weight", self.weight.to_string()),
            )
        })?;
        let prefix = self
            .data_prefix
            .clone()
            .unwrap_or_else(|| prefixes.prefix_for(base).to_string());

        Ok(TableConfig {
            name: name.to_string(),
            base,
            prefix,
            fixed_width,
            signed: self.signed,
            strict_grading: self.strict_grading,
            allow_blank: self.allow_blank,
            unknown_value: self.unknown_value.to_lowercase(),
            partial_credit: self.partial_credit,
            weight,
            show_partial_score: self.show_partial_score,
            is_material: self.is_material,
        })
    }

    /// Returns the reference answers or a [`GradeError::MissingReferenceAnswer`].
    pub fn reference_answers(&self) -> Result<&[String], GradeError> {
        match self.correct_answer.as_deref() {
            Some(list) if !list.is_empty() => Ok(list),
            _ => Err(GradeError::MissingReferenceAnswer(
                ErrorInfo::new(
                    "reference.missing",
                    format!("Missing correct answer for {}", self.answers_name),
                )
                .with_hint("set correct-answer in the table description"),
            )),
        }
    }

    /// Resolves the index column settings.
    pub fn index_spec(&self) -> Result<IndexSpec, GradeError> {
        let base = self
            .index_base
            .as_deref()
            .map(str::parse::<Base>)
            .transpose()?;
        let fixed_width = self
            .index_fixed_width
            .map(|width| non_negative(width, "index-fixed-width", &self.answers_name))
            .transpose()?;
        Ok(IndexSpec {
            values: self.index.clone(),
            base,
            prefix: self.index_prefix.clone(),
            fixed_width,
        })
    }
}

fn non_negative(value: i64, attribute: &str, table: &str) -> Result<usize, GradeError> {
    usize::try_from(value).map_err(|_| {
        GradeError::ConfigurationConflict(
            ErrorInfo::new(
                "config.negative_width",
                format!("negative value input for {attribute}"),
            )
            .with_context("table", table)
            .with_context("value", value.to_string()),
        )
    })
}
