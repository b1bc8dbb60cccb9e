use clap::Parser;
use competitor_lens_common::SCREENSHOTS;
use competitor_lens_prep::{cli, config, inspector, logging, screenshots};
use cli::{Cli, Commands};
use config::Config;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Inspect { workbook, export_dir, profile, matrix, json } => {
            let path = workbook.unwrap_or_else(|| config.workbook_path.clone());
            let options = inspector::InspectOptions {
                export_dir: export_dir.unwrap_or_else(|| config.export_dir.clone()),
                profile,
                matrix,
                json,
            };

            // Any failure ends the run with a message, not an error exit
            inspector::run(&path, &options);
        }

        Commands::Screenshots { output, font, seed } => {
            let output_dir = output.unwrap_or_else(|| config.screenshot_dir.clone());
            let candidates = if font.is_empty() { config.font_paths.clone() } else { font };
            let typeface = screenshots::Typeface::load(&candidates);

            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };

            screenshots::generate_all(&output_dir, &SCREENSHOTS, &typeface, &mut rng)?;
        }

        Commands::Config { show, init } => {
            if init {
                let path = config.save()?;
                println!("✔ Config written: {}", path.display());
            }

            if show || !init {
                println!("Config ({}):", Config::config_path()?.display());
                println!("  workbook:    {}", config.workbook_path.display());
                println!("  export dir:  {}", config.export_dir.display());
                println!("  screenshots: {}", config.screenshot_dir.display());
                for font in &config.font_paths {
                    println!("  font:        {}", font.display());
                }
            }
        }
    }

    Ok(())
}
