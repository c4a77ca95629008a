use std::path::PathBuf;

use clap::Args;
use comfy_table::Table;
use hermes_instructions::{
    distance_calc::HaversineDistanceCalc,
    translation::{DEFAULT_LOCALE, Translation, TranslationMap},
};
use tracing::info;

use crate::{file_utils::load_route, parsers::duration_from_millis};

pub const LOCALE_ENV: &str = "HERMES_LOCALE";

#[derive(Args)]
pub struct DescribeArgs {
    /// The route file
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Locale of the texts, defaults to $HERMES_LOCALE or "en"
    #[arg(short, long)]
    locale: Option<String>,

    /// `key=value` translation file used instead of the built-in ones
    #[arg(long)]
    translations: Option<PathBuf>,

    /// Print the maneuvers as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn translation(args: &DescribeArgs) -> anyhow::Result<TranslationMap> {
    let locale = args
        .locale
        .clone()
        .or_else(|| std::env::var(LOCALE_ENV).ok())
        .unwrap_or_else(|| DEFAULT_LOCALE.to_owned());

    match &args.translations {
        Some(file) => Ok(TranslationMap::from_file(locale, file)?),
        None => Ok(TranslationMap::for_locale(&locale)),
    }
}

pub fn run(args: DescribeArgs) -> anyhow::Result<()> {
    let tr = translation(&args)?;
    let route = load_route(&args.input)?;
    let maneuvers = route.create_maneuvers(&tr, &HaversineDistanceCalc);

    info!("Describing {} maneuvers in {}", maneuvers.len(), tr.locale());

    if args.json {
        serde_json::to_writer_pretty(std::io::stdout().lock(), &maneuvers)?;
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Maneuver", "Distance (m)", "Time", "Heading", "Note"]);

    for (index, maneuver) in maneuvers.iter().enumerate() {
        let heading = if maneuver.direction.is_empty() {
            String::new()
        } else {
            format!("{} ({}°)", maneuver.direction, maneuver.azimuth)
        };

        table.add_row(vec![
            (index + 1).to_string(),
            maneuver.text.clone(),
            format!("{:.0}", maneuver.distance.value()),
            duration_from_millis(maneuver.time)?.to_string(),
            heading,
            maneuver.annotation_text.clone().unwrap_or_default(),
        ]);
    }

    println!("{table}");

    Ok(())
}
