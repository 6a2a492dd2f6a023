use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Datelike;
use cipher_base::{
    CalendarDate, ComputedFacts, ReferenceDate, can_chi_from_str, life_path_from_str,
    personal_cycles_from_str, reduce_to_single_digit,
};
use cipher_config::{CipherConfig, OutputFormat};
use cipher_report::{
    ClarityLog, FearLog, ImpactKind, ImpactLog, JsonFileStore, LieLog, LogEntry, ReportKind,
    ReportStore, UserInputs, assemble_briefing, assemble_dossier, assemble_profile, net_syntropy,
    recent_patterns,
};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt, reload};

/// Filter used until the config file has been read.
const BOOTSTRAP_LOG: &str = "warn";

type FilterHandle = reload::Handle<EnvFilter, Registry>;

#[derive(Parser)]
#[command(name = "cipher", about = "Calendar-cipher profile CLI")]
struct Cli {
    /// Config file (default ~/.cipher/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print JSON regardless of the configured output format
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reduce a number to a single digit
    Reduce {
        #[arg(allow_negative_numbers = true)]
        n: i64,
        /// Stop at master numbers 11, 22, 33
        #[arg(long)]
        master: bool,
    },
    /// Life path number for a birth date
    LifePath {
        /// Birth date (YYYY-MM-DD)
        dob: String,
    },
    /// Personal year/month/day for a birth date
    Cycles {
        /// Birth date (YYYY-MM-DD)
        dob: String,
        /// Reference date (YYYY-MM-DD, default today)
        #[arg(long)]
        on: Option<CalendarDate>,
    },
    /// Can Chi stem, branch, animal and element for a birth year
    Zodiac {
        /// Birth date (YYYY-MM-DD)
        dob: String,
    },
    /// All computed facts for a birth date
    Facts {
        /// Birth date (YYYY-MM-DD)
        dob: String,
        /// Reference date (YYYY-MM-DD, default today)
        #[arg(long)]
        on: Option<CalendarDate>,
    },
    /// Splice computed facts into a generated profile and store it
    Profile {
        #[arg(long)]
        user: String,
        /// Generator output file, or - for stdin
        #[arg(long)]
        narrative: PathBuf,
        #[arg(long)]
        name: String,
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        dob: String,
        #[arg(long, default_value = "")]
        birth_time: String,
        #[arg(long, default_value = "")]
        birth_location: String,
        /// Reference date (YYYY-MM-DD, default today)
        #[arg(long)]
        on: Option<CalendarDate>,
    },
    /// Splice the personal day into a generated daily briefing and store it
    Briefing {
        #[arg(long)]
        user: String,
        /// Generator output file, or - for stdin
        #[arg(long)]
        narrative: PathBuf,
        /// Birth date (YYYY-MM-DD); defaults to the stored profile's
        #[arg(long)]
        dob: Option<String>,
        /// Reference date (YYYY-MM-DD, default today)
        #[arg(long)]
        on: Option<CalendarDate>,
    },
    /// Store a generated strategic dossier
    Dossier {
        #[arg(long)]
        user: String,
        /// Generator output file, or - for stdin
        #[arg(long)]
        narrative: PathBuf,
    },
    /// Show the stored profile and latest reports
    Show {
        #[arg(long)]
        user: String,
    },
    /// Record a journal entry
    Log {
        #[arg(long)]
        user: String,
        #[command(subcommand)]
        entry: LogCommand,
    },
    /// Syntropy score and recent behavioral patterns
    Ledger {
        #[arg(long)]
        user: String,
    },
}

#[derive(Subcommand)]
enum LogCommand {
    /// A lie told, and what drove it
    Lie {
        text: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        driver: String,
        #[arg(long)]
        method: String,
    },
    /// A fear, its worst case, and the plan around it
    Fear {
        fear: String,
        #[arg(long)]
        worst_case: String,
        #[arg(long)]
        prevention: String,
        #[arg(long)]
        repair: String,
    },
    /// A distorted thought and its rational reframe
    Clarity {
        thought: String,
        #[arg(long)]
        bias: String,
        #[arg(long)]
        truth: String,
    },
    /// An action that created order (default) or chaos
    Impact {
        action: String,
        /// Record as entropy instead of syntropy
        #[arg(long)]
        entropy: bool,
        /// 1-5
        #[arg(long, default_value = "1")]
        magnitude: u8,
    },
}

fn today() -> Result<ReferenceDate> {
    let now = chrono::Local::now().date_naive();
    Ok(CalendarDate::new(now.year(), now.month(), now.day())?)
}

fn reference_or_today(on: Option<CalendarDate>) -> Result<ReferenceDate> {
    match on {
        Some(d) => Ok(d),
        None => today(),
    }
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

fn read_narrative(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read narrative from stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read narrative {}", path.display()))
}

/// Reloadable filter layer. A `RUST_LOG` filter is final and yields no
/// handle; otherwise the handle swaps in the configured filter later.
fn log_filter_layer(
    rust_log: Option<EnvFilter>,
) -> (reload::Layer<EnvFilter, Registry>, Option<FilterHandle>) {
    let pinned = rust_log.is_some();
    let filter = rust_log.unwrap_or_else(|| EnvFilter::new(BOOTSTRAP_LOG));
    let (layer, handle) = reload::Layer::new(filter);
    (layer, (!pinned).then_some(handle))
}

fn init_logging() -> Option<FilterHandle> {
    let (filter, handle) = log_filter_layer(EnvFilter::try_from_default_env().ok());
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
    handle
}

fn facts_json(facts: &ComputedFacts) -> serde_json::Value {
    json!({
        "dob": facts.birth.to_string(),
        "reference": facts.reference.to_string(),
        "lifePathNumber": facts.life_path.value(),
        "personalYear": facts.cycles.personal_year.value(),
        "personalMonth": facts.cycles.personal_month.value(),
        "personalDay": facts.cycles.personal_day.value(),
        "stem": facts.zodiac.stem.name(),
        "branch": facts.zodiac.branch.name(),
        "animal": facts.zodiac.animal(),
        "stemElement": facts.zodiac.element.name(),
    })
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn build_entry(entry: LogCommand) -> Result<LogEntry> {
    let id = uuid::Uuid::new_v4().to_string();
    let timestamp = now_ms();
    Ok(match entry {
        LogCommand::Lie {
            text,
            category,
            driver,
            method,
        } => LogEntry::Lie(LieLog {
            id,
            text,
            category,
            driver,
            method,
            timestamp,
        }),
        LogCommand::Fear {
            fear,
            worst_case,
            prevention,
            repair,
        } => LogEntry::Fear(FearLog {
            id,
            fear,
            worst_case,
            prevention,
            repair,
            timestamp,
        }),
        LogCommand::Clarity {
            thought,
            bias,
            truth,
        } => LogEntry::Clarity(ClarityLog {
            id,
            distorted_thought: thought,
            cognitive_bias: bias,
            rational_truth: truth,
            timestamp,
        }),
        LogCommand::Impact {
            action,
            entropy,
            magnitude,
        } => {
            let kind = if entropy {
                ImpactKind::Entropy
            } else {
                ImpactKind::Syntropy
            };
            LogEntry::Impact(ImpactLog::new(id, action, kind, magnitude, timestamp)?)
        }
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter_handle = init_logging();
    let config = CipherConfig::load(cli.config.as_deref())?.with_env()?;
    if let Some(handle) = filter_handle {
        handle
            .reload(EnvFilter::new(&config.log_filter))
            .context("failed to apply configured log filter")?;
    }
    let json_out = cli.json || config.output == OutputFormat::Json;
    let store = JsonFileStore::new(&config.data_dir);
    tracing::debug!(data_dir = %config.data_dir.display(), json = json_out, "starting");

    match cli.command {
        Commands::Reduce { n, master } => {
            let d = reduce_to_single_digit(n, master)?;
            if json_out {
                print_json(&json!({ "input": n, "value": d.value(), "master": d.is_master() }))?;
            } else {
                println!("{d}{}", if d.is_master() { " (master)" } else { "" });
            }
        }

        Commands::LifePath { dob } => {
            let d = life_path_from_str(&dob)?;
            if json_out {
                print_json(&json!({ "dob": dob, "lifePathNumber": d.value() }))?;
            } else {
                println!(
                    "Life Path {d}{}",
                    if d.is_master() { " (master)" } else { "" }
                );
            }
        }

        Commands::Cycles { dob, on } => {
            let reference = reference_or_today(on)?;
            let c = personal_cycles_from_str(&dob, &reference)?;
            if json_out {
                print_json(&json!({
                    "reference": reference.to_string(),
                    "personalYear": c.personal_year.value(),
                    "personalMonth": c.personal_month.value(),
                    "personalDay": c.personal_day.value(),
                }))?;
            } else {
                println!(
                    "{reference}: Personal Year {} / Month {} / Day {}",
                    c.personal_year, c.personal_month, c.personal_day
                );
            }
        }

        Commands::Zodiac { dob } => {
            let cc = can_chi_from_str(&dob)?;
            if json_out {
                print_json(&json!({
                    "stem": cc.stem.name(),
                    "branch": cc.branch.name(),
                    "animal": cc.animal(),
                    "stemElement": cc.element.name(),
                }))?;
            } else {
                println!("{cc}");
            }
        }

        Commands::Facts { dob, on } => {
            let reference = reference_or_today(on)?;
            let facts = ComputedFacts::from_dob(&dob, &reference)?;
            if json_out {
                print_json(&facts_json(&facts))?;
            } else {
                println!("{}", facts.source_of_truth());
            }
        }

        Commands::Profile {
            user,
            narrative,
            name,
            dob,
            birth_time,
            birth_location,
            on,
        } => {
            let reference = reference_or_today(on)?;
            let inputs = UserInputs {
                full_name: name,
                dob,
                birth_time,
                birth_location,
            };
            let text = read_narrative(&narrative)?;
            let report = assemble_profile(&store, &user, &inputs, &text, &reference, now_ms())?;
            if json_out {
                print_json(&serde_json::to_value(&report)?)?;
            } else {
                let n = &report.profile.numerology;
                let z = &report.profile.vietnamese_zodiac;
                println!("{} - {}", inputs.full_name, n.archetype_title);
                println!(
                    "Life Path {} | Personal Year {} / Month {} / Day {}",
                    n.life_path_number, n.personal_year, n.personal_month, n.personal_day
                );
                println!(
                    "{} {} (The {} {}), Na-Yin {}",
                    z.stem, z.branch, z.stem_element, z.animal, z.nup_am_element
                );
                for bullet in &report.profile.narrator_bullets {
                    println!("  > {bullet}");
                }
            }
        }

        Commands::Briefing {
            user,
            narrative,
            dob,
            on,
        } => {
            let reference = reference_or_today(on)?;
            let dob = match dob {
                Some(d) => d,
                None => match store.load_profile(&user)? {
                    Some(stored) => stored.inputs.dob,
                    None => bail!("no stored profile for {user}; pass --dob"),
                },
            };
            let text = read_narrative(&narrative)?;
            let briefing = assemble_briefing(&store, &user, &dob, &text, &reference)?;
            if json_out {
                print_json(&serde_json::to_value(&briefing)?)?;
            } else {
                let id = &briefing.day_identity;
                println!("{} - Personal Day {}", id.date, id.personal_day_number);
                println!("{}", briefing.one_line_compass);
                for bullet in &briefing.narrator_bullets {
                    println!("  > {bullet}");
                }
                if !briefing.lesson.is_empty() {
                    println!("Lesson: {}", briefing.lesson);
                }
            }
        }

        Commands::Dossier { user, narrative } => {
            let text = read_narrative(&narrative)?;
            let dossier = assemble_dossier(&store, &user, &text)?;
            if json_out {
                print_json(&serde_json::to_value(&dossier)?)?;
            } else {
                println!(
                    "{} - {} ({})",
                    dossier.avatar.name, dossier.avatar.archetype, dossier.avatar.aura_color
                );
                println!("Opportunity: {}", dossier.crm_strategy.opportunity_level);
            }
        }

        Commands::Show { user } => {
            let Some(stored) = store.load_profile(&user)? else {
                bail!("no stored profile for {user}");
            };
            let briefing = store.latest_report(&user, ReportKind::Briefing)?;
            let dossier = store.latest_report(&user, ReportKind::Dossier)?;
            print_json(&json!({
                "profile": stored,
                "latestBriefing": briefing,
                "latestDossier": dossier,
            }))?;
        }

        Commands::Log { user, entry } => {
            let entry = build_entry(entry)?;
            let id = entry.id().to_string();
            store.append_log(&user, entry)?;
            if json_out {
                print_json(&json!({ "id": id }))?;
            } else {
                println!("logged {id}");
            }
        }

        Commands::Ledger { user } => {
            let logs = store.logs(&user)?;
            let score = net_syntropy(&logs.impact_logs);
            let patterns = recent_patterns(&logs.lie_logs);
            if json_out {
                print_json(&json!({
                    "netSyntropy": score,
                    "impactEvents": logs.impact_logs.len(),
                    "lies": logs.lie_logs.len(),
                    "fears": logs.fear_logs.len(),
                    "clarity": logs.clarity_logs.len(),
                    "patterns": patterns,
                }))?;
            } else {
                println!(
                    "Net syntropy {score:+} over {} impact events",
                    logs.impact_logs.len()
                );
                println!(
                    "{} lies, {} fears, {} clarity reframes",
                    logs.lie_logs.len(),
                    logs.fear_logs.len(),
                    logs.clarity_logs.len()
                );
                println!("{patterns}");
            }
        }
    }

    Ok(())
}
