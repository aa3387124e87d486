use anyhow::Result;
use migratemap::cli::{self, Commands};
use migratemap::commands::{
    handle_assess, handle_convert, handle_generate, AssessConfig, ConvertConfig, GenerateConfig,
};

fn main() -> Result<()> {
    env_logger::init();

    match cli::parse_args().command {
        Commands::Assess {
            path,
            format,
            output,
        } => handle_assess(AssessConfig {
            path,
            format: format.into(),
            output,
        }),
        Commands::Generate {
            path,
            profile,
            db,
            output,
        } => handle_generate(GenerateConfig {
            path,
            profile: profile.into(),
            flavor: db.into(),
            output,
        }),
        Commands::Convert { path, output } => handle_convert(ConvertConfig { path, output }),
    }
}
