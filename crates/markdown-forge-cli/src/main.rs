use anyhow::{Context, Result};
use markdown_forge_config::SiteConfig;
use markdown_forge_engine::{SiteOptions, build_site};
use std::{env, process};

fn site_options(config: SiteConfig) -> SiteOptions {
    SiteOptions {
        content_dir: config.content_dir,
        static_dir: config.static_dir,
        template_path: config.template_path,
        output_dir: config.output_dir,
        base_path: config.base_path,
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [base-path]", args[0]);
        process::exit(1);
    }

    let config_path = SiteConfig::config_path();
    let mut config = match SiteConfig::load()
        .with_context(|| format!("Failed to load config file {}", config_path.display()))?
    {
        Some(config) => {
            log::info!("Using config from {}", config_path.display());
            config
        }
        None => {
            log::debug!("No {} found, using default layout", config_path.display());
            SiteConfig::default()
        }
    };

    // CLI argument wins over the config file
    if let Some(base_path) = args.get(1) {
        config = config.with_base_path(base_path);
    }

    let options = site_options(config);
    log::info!(
        "Building {} into {} (base path {})",
        options.content_dir.display(),
        options.output_dir.display(),
        options.base_path
    );

    let summary = build_site(&options).context("Site build failed")?;

    log::info!(
        "Done: {} pages, {} static files",
        summary.pages.len(),
        summary.assets.len()
    );
    Ok(())
}
