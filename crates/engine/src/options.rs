#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `name: lines (non_blank)` lines followed by a `Files: ...` summary
    #[default]
    Text,
    Json,
    Jsonl,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Every file, then the summary
    #[default]
    Full,
    /// Summary only
    TotalOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Lines,
    NonBlank,
}
