// src/logging.rs
use log::LevelFilter;

/// `-v` の回数からログレベルを決める。`RUST_LOG` があればそちらが優先。
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

/// stderr 向けロガーを初期化する。stdout は集計結果専用。
pub fn init(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for(verbosity))
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None);
    // 二重初期化（テスト等）は無視
    let _ = builder.try_init();
}
