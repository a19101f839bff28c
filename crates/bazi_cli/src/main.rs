use std::path::PathBuf;

use bazi_base::{
    ALL_ELEMENTS, AnalysisConfig, FiveElement, HeavenlyStem, SolarTerm, hour_pillar, month_pillar,
    parse_sexagenary,
};
use bazi_engine::{BaziReport, BirthInput, FixedCalendar, Gender, calculate_bazi};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bazi", about = "Four Pillars chart and strength analysis")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a birth moment and analyze its chart
    Analyze {
        /// Birth year (1900 to the current year)
        year: i32,
        /// Birth month (1-12)
        month: u32,
        /// Birth day of month
        day: u32,
        /// Birth hour (0-23)
        hour: u8,
        /// Birth minute (0-59)
        #[arg(default_value = "0")]
        minute: u8,
        /// male or female
        #[arg(long, default_value = "male")]
        gender: String,
        /// Longitude in degrees, recorded with the input
        #[arg(long, allow_hyphen_values = true)]
        longitude: Option<f64>,
        /// Timezone offset in hours, recorded with the input
        #[arg(long, allow_hyphen_values = true)]
        tz: Option<f64>,
        /// TOML table of lunar days ([[day]] entries)
        #[arg(long)]
        calendar: PathBuf,
        /// TOML analysis configuration overriding the defaults
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Hour pillar from the hour and the Day stem
    HourPillar {
        /// Hour (0-23)
        hour: u8,
        /// Day stem, e.g. "Giáp" or "Jia"
        #[arg(long)]
        day_stem: String,
    },
    /// Month pillar from the Year stem and a solar term label
    MonthPillar {
        /// Year stem, e.g. "Canh" or "Geng"
        #[arg(long)]
        year_stem: String,
        /// Solar term label, e.g. "Lập hạ"
        #[arg(long)]
        term: String,
    },
    /// Parse a sexagenary name such as "Giáp Tý"
    Parse {
        name: String,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_gender(s: &str) -> Gender {
    match s.to_ascii_lowercase().as_str() {
        "male" | "m" => Gender::Male,
        "female" | "f" => Gender::Female,
        _ => {
            eprintln!("Invalid gender: {s} (male or female)");
            std::process::exit(1);
        }
    }
}

fn parse_stem(s: &str) -> HeavenlyStem {
    HeavenlyStem::from_name(s).unwrap_or_else(|| {
        eprintln!("Invalid stem: {s}");
        eprintln!("Valid: Giáp, Ất, Bính, Đinh, Mậu, Kỷ, Canh, Tân, Nhâm, Quý (or pinyin)");
        std::process::exit(1);
    })
}

fn load_calendar(path: &PathBuf) -> FixedCalendar {
    FixedCalendar::load(path).unwrap_or_else(|e| {
        eprintln!("Failed to load calendar {}: {e}", path.display());
        std::process::exit(1);
    })
}

fn load_config(path: Option<&PathBuf>) -> AnalysisConfig {
    match path {
        Some(p) => AnalysisConfig::load(p).unwrap_or_else(|e| {
            eprintln!("Failed to load config {}: {e}", p.display());
            std::process::exit(1);
        }),
        None => AnalysisConfig::default(),
    }
}

fn element_list(elements: &[FiveElement]) -> String {
    if elements.is_empty() {
        return "-".to_string();
    }
    elements
        .iter()
        .map(|e| e.name())
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_report(report: &BaziReport) {
    let a = &report.analysis;
    println!("Chart: {}", report.chart);
    println!();

    for p in &report.pillars {
        let god = p.stem_ten_god.map_or("Nhật Chủ", |g| g.name());
        let hidden = p
            .hidden_stems
            .iter()
            .map(|h| format!("{} {} ({})", h.stem.name(), h.weight, h.ten_god.name()))
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{:<5} {:<10} {:<10} [{}] {} | {}",
            p.position.name(),
            p.name,
            god,
            p.life_stage.name(),
            p.stem_element.name(),
            hidden
        );
    }
    println!();

    let i = &a.interactions;
    if let Some(c) = i.combination {
        println!("Combination: {:?} {}", c.kind, c.element.name());
    }
    for c in &i.clashes {
        println!("Clash: {} - {}", c.first.name(), c.second.name());
    }

    println!("Element scores:");
    for e in ALL_ELEMENTS {
        println!(
            "  {:<5} {:>7.2}  (limit {:+.1})",
            e.name(),
            a.element_scores.get(e),
            a.limit_scores.get(e)
        );
    }
    println!(
        "Party {:.2} / Enemy {:.2} ({:.1}% self)",
        a.party_score, a.enemy_score, a.percentage_self
    );
    println!();

    println!(
        "Structure: {} ({:?}, {:?})",
        a.structure_name.name(),
        a.structure_type,
        a.day_master_status
    );
    println!("  {}", a.reason);

    let f = &a.favorable_elements;
    println!("Useful:            {}", element_list(&f.useful));
    println!("Supporting:        {}", element_list(&f.supporting));
    println!("Adverse:           {}", element_list(&f.adverse));
    println!("Source of adverse: {}", element_list(&f.source_of_adverse));
    println!("Neutral:           {}", element_list(&f.neutral));

    if !report.shen_sha.is_empty() {
        println!();
        println!("Shen Sha:");
        for s in &report.shen_sha {
            println!("  {:<5} {}", s.pillar.name(), s.marker.name());
        }
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            year,
            month,
            day,
            hour,
            minute,
            gender,
            longitude,
            tz,
            calendar,
            config,
            json,
        } => {
            let mut input = BirthInput::new(parse_gender(&gender), year, month, day, hour, minute);
            input.longitude = longitude;
            input.timezone_offset = tz;
            let cal = load_calendar(&calendar);
            debug!(days = cal.len(), path = %calendar.display(), "calendar loaded");
            let config = load_config(config.as_ref());
            let report = calculate_bazi(&cal, &input, &config).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
            if json {
                match serde_json::to_string_pretty(&report) {
                    Ok(text) => println!("{text}"),
                    Err(e) => {
                        eprintln!("Failed to serialize report: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                print_report(&report);
            }
        }

        Commands::HourPillar { hour, day_stem } => {
            if hour > 23 {
                eprintln!("Invalid hour: {hour} (0-23)");
                std::process::exit(1);
            }
            let pillar = hour_pillar(hour, parse_stem(&day_stem));
            println!("{pillar} (cycle {})", pillar.cycle_index());
        }

        Commands::MonthPillar { year_stem, term } => {
            let term = SolarTerm::from_name(&term).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
            let pillar = month_pillar(parse_stem(&year_stem), term);
            println!("{pillar} ({} / {})", term.name(), term.english_name());
        }

        Commands::Parse { name } => match parse_sexagenary(&name) {
            Ok(p) => {
                let [v1, v2] = p.void_branches();
                println!("{p}");
                println!("  Cycle index: {}", p.cycle_index());
                println!("  Stem:   {} ({})", p.stem.pinyin(), p.stem.element().name());
                println!(
                    "  Branch: {} ({}, {})",
                    p.branch.pinyin(),
                    p.branch.element().name(),
                    p.branch.animal()
                );
                println!("  Void:   {} {}", v1.name(), v2.name());
            }
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
    }
}
