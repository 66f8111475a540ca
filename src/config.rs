// src/config.rs
use crate::args::Args;
pub use srclines_engine::config::{
    Config, ConfigBuilder, FilterConfig, FilterConfigBuilder, WalkOptions, WalkOptionsBuilder,
};
use srclines_engine::error::EngineError;
use srclines_engine::options::OutputMode;

impl TryFrom<Args> for Config {
    type Error = EngineError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let walk = WalkOptionsBuilder::default()
            .root(args.dir)
            .recursive(args.scan.recursive)
            .respect_ignore(args.scan.respect_ignore)
            .build()?;

        let filter = FilterConfigBuilder::default()
            .extensions(args.filter.extensions)
            .build()?;

        let output_mode = if args.output.summary_only {
            OutputMode::TotalOnly
        } else {
            OutputMode::Full
        };

        Ok(ConfigBuilder::default()
            .walk(walk)
            .filter(filter)
            .count_non_blank(!args.filter.no_non_blank)
            .sort(args.output.sort)
            .descending(args.output.desc)
            .format(args.output.format)
            .output_mode(output_mode)
            .build()?)
    }
}
