// src/args.rs
use crate::options::{CliOutputFormat, CliSortKey};
use clap::{ArgAction, Args as ClapArgs, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "srclines",
    version,
    about = "ソースファイルの行数/非空行数の集計ツール"
)]
pub struct Args {
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub filter: FilterOptions,

    #[command(flatten)]
    pub scan: ScanOptions,

    /// ログ詳細度 (-v: info, -vv: debug)。RUST_LOG が優先
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// 対象ディレクトリ
    #[arg(
        default_value = srclines_engine::config::DEFAULT_ROOT,
        value_hint = ValueHint::DirPath,
        help_heading = "走査/入力"
    )]
    pub dir: PathBuf,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: CliOutputFormat,

    /// ソートキー (none はディレクトリ列挙順のまま)
    #[arg(long, value_enum, default_value = "name", help_heading = "出力")]
    pub sort: CliSortKey,

    /// 降順ソート
    #[arg(long, help_heading = "出力")]
    pub desc: bool,

    /// 合計のみ表示
    #[arg(long, help_heading = "出力")]
    pub summary_only: bool,
}

#[derive(ClapArgs, Debug)]
pub struct FilterOptions {
    /// 対象拡張子 (カンマ区切り, 複数指定可, 先頭の '.' は省略可)
    #[arg(
        long = "ext",
        value_delimiter = ',',
        default_values_t = srclines_engine::config::DEFAULT_EXTENSIONS.map(String::from),
        help_heading = "フィルタ"
    )]
    pub extensions: Vec<String>,

    /// 非空行を数えない
    #[arg(long, help_heading = "フィルタ")]
    pub no_non_blank: bool,
}

#[derive(ClapArgs, Debug)]
pub struct ScanOptions {
    /// サブディレクトリも走査
    #[arg(short, long, help_heading = "走査/入力")]
    pub recursive: bool,

    /// .gitignore/.ignore を尊重し、隠しファイルを除外
    #[arg(long, help_heading = "走査/入力")]
    pub respect_ignore: bool,
}
