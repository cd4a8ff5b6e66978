use std::{env, str::FromStr};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;
use typed_builder::TypedBuilder;
use validator::{Validate, ValidationError};

use crate::error::Error;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_ROWS_PER_PAGE: u64 = 20;
pub const DEFAULT_ROWS_PER_PAGE_OPTIONS: [u64; 4] = [10, 20, 50, 100];
pub const DEFAULT_THOUSANDS_SEPARATOR: char = ',';

static ENV_INITIAL_PAGE: &str = "PAGEKEEPER_INITIAL_PAGE";
static ENV_ROWS_PER_PAGE: &str = "PAGEKEEPER_ROWS_PER_PAGE";
static ENV_ROWS_PER_PAGE_OPTIONS: &str = "PAGEKEEPER_ROWS_PER_PAGE_OPTIONS";
static ENV_THOUSANDS_SEPARATOR: &str = "PAGEKEEPER_THOUSANDS_SEPARATOR";

/// Construction options for a [`PaginationState`](super::PaginationState).
///
/// Every field has a default, so `PaginationOptions::builder().build()`,
/// `PaginationOptions::default()` and `{}` as JSON all describe the same
/// configuration: page 1, 20 rows per page out of {10, 20, 50, 100}, no items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, TypedBuilder)]
#[serde(default, rename_all = "camelCase")]
#[validate(schema(function = "validate_initial_rows_per_page"))]
pub struct PaginationOptions {
    #[builder(default = DEFAULT_PAGE)]
    #[validate(range(min = 1))]
    pub initial_page: u64,

    #[builder(default = DEFAULT_ROWS_PER_PAGE)]
    #[validate(range(min = 1))]
    pub initial_rows_per_page: u64,

    #[builder(default = DEFAULT_ROWS_PER_PAGE_OPTIONS.to_vec())]
    #[validate(length(min = 1), custom(function = "validate_no_empty_page_size"))]
    pub rows_per_page_options: Vec<u64>,

    #[builder(default)]
    pub total_items: u64,

    /// Digit grouping character used when item counts are formatted.
    #[builder(default = DEFAULT_THOUSANDS_SEPARATOR)]
    pub thousands_separator: char,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

// The macro hands over a reference to the field itself.
#[allow(clippy::ptr_arg)]
fn validate_no_empty_page_size(options: &Vec<u64>) -> Result<(), ValidationError> {
    if options.contains(&0) {
        return Err(ValidationError::new("zero_page_size"));
    }
    Ok(())
}

fn validate_initial_rows_per_page(options: &PaginationOptions) -> Result<(), ValidationError> {
    if !options
        .rows_per_page_options
        .contains(&options.initial_rows_per_page)
    {
        return Err(ValidationError::new("initial_rows_per_page_not_an_option"));
    }
    Ok(())
}

impl PaginationOptions {
    /// Read options from `PAGEKEEPER_*` environment variables, honouring a
    /// `.env` file. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment from {}", path.display());
        }
        Self::from_vars(|key| env::var(key).ok())
    }

    pub(crate) fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();

        if let Some(v) = non_blank(var(ENV_INITIAL_PAGE)) {
            options.initial_page = parse_number(ENV_INITIAL_PAGE, &v)?;
        }
        if let Some(v) = non_blank(var(ENV_ROWS_PER_PAGE)) {
            options.initial_rows_per_page = parse_number(ENV_ROWS_PER_PAGE, &v)?;
        }
        if let Some(v) = non_blank(var(ENV_ROWS_PER_PAGE_OPTIONS)) {
            options.rows_per_page_options = v
                .split(',')
                .map(|s| parse_number(ENV_ROWS_PER_PAGE_OPTIONS, s))
                .collect::<Result<Vec<u64>>>()?;
        }
        if let Some(v) = var(ENV_THOUSANDS_SEPARATOR).filter(|v| !v.is_empty()) {
            let mut chars = v.chars();
            options.thousands_separator = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => bail!("{ENV_THOUSANDS_SEPARATOR} must be a single character"),
            };
        }

        options
            .validate()
            .map_err(Error::from)
            .context("Pagination options from environment are inconsistent")?;
        debug!("Pagination options from environment: {:?}", options);
        Ok(options)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_number<T: FromStr>(name: &str, value: &str) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse()
        .with_context(|| format!("Cannot parse {name}: {value:?}"))
}
