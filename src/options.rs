use clap::ValueEnum;
use srclines_engine::options::{OutputFormat, SortKey};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Text,
    Json,
    Jsonl,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Text => Self::Text,
            CliOutputFormat::Json => Self::Json,
            CliOutputFormat::Jsonl => Self::Jsonl,
        }
    }
}

/// `None` はソートしない（列挙順）
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum CliSortKey {
    Name,
    Lines,
    NonBlank,
    None,
}

impl From<CliSortKey> for Option<SortKey> {
    fn from(value: CliSortKey) -> Self {
        match value {
            CliSortKey::Name => Some(SortKey::Name),
            CliSortKey::Lines => Some(SortKey::Lines),
            CliSortKey::NonBlank => Some(SortKey::NonBlank),
            CliSortKey::None => None,
        }
    }
}
