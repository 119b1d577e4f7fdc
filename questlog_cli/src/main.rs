use chrono::{DateTime, Local, TimeZone};
use clap::{Parser, Subcommand};
use questlog_core::badges::{arrange_for_display, evaluate_badges};
use questlog_core::heatmap::{active_days, activity_heatmap, HeatmapCell};
use questlog_core::records::{personal_records, records_by_category, CardioRecords, PersonalRecords};
use questlog_core::scoreboard::summary;
use questlog_core::trend::{weight_trend, WeightTrend};
use questlog_core::window::parse_now;
use questlog_core::*;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "questlog")]
#[command(about = "Activity log progress: XP, levels, streaks and badges", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Use a specific config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Evaluate as of this RFC 3339 instant (its offset is the local zone)
    #[arg(long, global = true)]
    now: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// XP, level and streak (default)
    Status,

    /// Per-category totals for a period
    Summary {
        /// daily, weekly, monthly or overall
        #[arg(long, default_value = "weekly")]
        window: String,
    },

    /// Earned badges and next targets
    Badges {
        /// Show every milestone instead of the grouped view
        #[arg(long)]
        all: bool,
    },

    /// Cardio personal records
    Records,

    /// Daily cardio activity
    Heatmap {
        /// Number of days ending today
        #[arg(long)]
        days: Option<u32>,

        /// Limit to running or cycling
        #[arg(long)]
        category: Option<String>,
    },

    /// Weight trend and goal progress
    Weight,
}

fn main() -> Result<()> {
    questlog_core::logging::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let data_dir = cli
        .data_dir
        .clone()
        .unwrap_or_else(|| config.data.data_dir.clone());

    let pinned = cli.now.as_deref().map(parse_now).transpose()?;

    let book = JsonlSource::new(&data_dir).snapshot()?;

    // An explicit --now pins its own offset; otherwise keep the system zone so
    // historical logs convert with the offset in force on their own date.
    match pinned {
        Some(now) => dispatch(cli, &config, &book, &now),
        None => dispatch(cli, &config, &book, &Local::now()),
    }
}

fn dispatch<Tz: TimeZone>(cli: Cli, config: &Config, book: &LogBook, now: &DateTime<Tz>) -> Result<()>
where
    Tz::Offset: fmt::Display,
{
    tracing::debug!("Evaluating at {}", now.to_rfc3339());

    match cli.command.unwrap_or(Commands::Status) {
        Commands::Status => cmd_status(book, now, cli.json),
        Commands::Summary { window } => {
            let window: TimeWindow = window.parse()?;
            cmd_summary(book, window, now, cli.json)
        }
        Commands::Badges { all } => {
            cmd_badges(book, now, all || config.display.show_all_badges, cli.json)
        }
        Commands::Records => cmd_records(book, cli.json),
        Commands::Heatmap { days, category } => {
            let category = category
                .as_deref()
                .map(str::parse::<CardioCategory>)
                .transpose()?;
            let days = days.unwrap_or(config.display.heatmap_days);
            cmd_heatmap(book, category, now, days, cli.json)
        }
        Commands::Weight => cmd_weight(book, now, config, cli.json),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn header(title: &str) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {}", title);
    println!("╰─────────────────────────────────────────╯");
    println!();
}

fn cmd_status<Tz: TimeZone>(book: &LogBook, now: &DateTime<Tz>, json: bool) -> Result<()> {
    let board = evaluate(book, now);
    if json {
        return print_json(&board);
    }

    header("PROGRESS");
    let p = &board.progress;
    println!("  Level {}  ({} XP)", p.level, p.xp);
    println!(
        "  {:.1}% to level {} ({} / {} XP)",
        p.progress_to_next_level,
        p.level + 1,
        p.xp - p.level_start,
        p.next_level_at - p.level_start
    );
    println!("  Streak: {} day(s)", board.stats.streak);
    println!();

    let xp = &board.xp_breakdown;
    println!("  XP by category");
    println!("    weight      {:>7}", xp.weight);
    println!("    cardio      {:>7}", xp.cardio);
    println!("    strength    {:>7}", xp.strength);
    println!("    bodyweight  {:>7}", xp.bodyweight);
    println!("    nutrition   {:>7}", xp.nutrition);

    let earned = board.badges.iter().filter(|b| b.is_earned).count();
    println!();
    println!("  Badges: {} earned", earned);
    if let Some(next) = board.badges.iter().find(|b| !b.is_earned) {
        println!(
            "  Closest: {} - {} ({:.0}/{:.0})",
            next.name, next.description, next.progress, next.target
        );
    }
    println!();
    Ok(())
}

fn cmd_summary<Tz: TimeZone>(
    book: &LogBook,
    window: TimeWindow,
    now: &DateTime<Tz>,
    json: bool,
) -> Result<()> {
    let s = summary(book, window, now);
    if json {
        return print_json(&s);
    }

    header(&format!("{} SUMMARY", window.as_str().to_uppercase()));

    match s.weight.average {
        Some(avg) if s.weight.is_fallback => println!("  Weight:     {:.1} kg (last logged)", avg),
        Some(avg) => println!("  Weight:     {:.1} kg avg of {}", avg, s.weight.entries),
        None => println!("  Weight:     -"),
    }
    println!(
        "  Cardio:     {} session(s), {:.1} km, {:.0} min, {} kcal",
        s.cardio.total.sessions, s.cardio.total.distance, s.cardio.total.duration, s.cardio.total.calories
    );
    println!(
        "    running   {:.1} km   cycling {:.1} km",
        s.cardio.running.distance, s.cardio.cycling.distance
    );
    println!(
        "  Strength:   {} set(s), {:.0} kg volume",
        s.strength.sets_count, s.strength.total_volume
    );
    println!(
        "  Bodyweight: {} log(s), {} reps/sec",
        s.bodyweight.bw_count, s.bodyweight.total_units
    );
    println!(
        "  Nutrition:  {:.2} / 3 over {} log(s)",
        s.nutrition.average_score, s.nutrition.entries
    );
    println!();
    Ok(())
}

fn cmd_badges<Tz: TimeZone>(book: &LogBook, now: &DateTime<Tz>, all: bool, json: bool) -> Result<()> {
    let stats = compute_stats(book, now);
    let flat = evaluate_badges(&stats);
    let badges = if all { flat } else { arrange_for_display(flat) };

    if json {
        return print_json(&badges);
    }

    header("BADGES");
    for badge in &badges {
        let mark = if badge.is_earned { "★" } else { "·" };
        println!(
            "  {} {:<22} {:<9} {:<26} {:>8.0}/{:.0}",
            mark,
            badge.name,
            format!("{:?}", badge.tier).to_lowercase(),
            badge.description,
            badge.progress,
            badge.target
        );
    }
    println!();
    Ok(())
}

#[derive(Serialize)]
struct RecordsReport {
    overall: PersonalRecords,
    #[serde(flatten)]
    by_category: CardioRecords,
}

fn cmd_records(book: &LogBook, json: bool) -> Result<()> {
    let report = RecordsReport {
        overall: personal_records(&book.cardio, None),
        by_category: records_by_category(&book.cardio),
    };
    if json {
        return print_json(&report);
    }

    header("PERSONAL RECORDS");
    for (label, pr) in [
        ("Running", &report.by_category.running),
        ("Cycling", &report.by_category.cycling),
    ] {
        println!("  {} ({} session(s), {:.1} km total)", label, pr.sessions, pr.total_distance);
        println!("    longest     {:.1} km", pr.longest_distance);
        println!("    top speed   {:.1} km/h", pr.top_speed);
        println!("    most burned {} kcal", pr.most_calories);
    }
    println!();
    Ok(())
}

fn cmd_heatmap<Tz: TimeZone>(
    book: &LogBook,
    category: Option<CardioCategory>,
    now: &DateTime<Tz>,
    days: u32,
    json: bool,
) -> Result<()> {
    let cells = activity_heatmap(&book.cardio, category, now, days);
    if json {
        return print_json(&cells);
    }

    header("ACTIVITY");
    println!("  {} active day(s) in the last {}", active_days(&cells), cells.len());
    println!();
    for week in cells.chunks(7) {
        let row: String = week.iter().map(cell_glyph).collect();
        let start = week.first().map(|c| c.date.to_string()).unwrap_or_default();
        println!("  {}  {}", start, row);
    }
    println!();
    Ok(())
}

fn cell_glyph(cell: &HeatmapCell) -> char {
    match cell.count {
        0 => '·',
        1 => '▪',
        _ => '■',
    }
}

fn cmd_weight<Tz: TimeZone>(
    book: &LogBook,
    now: &DateTime<Tz>,
    config: &Config,
    json: bool,
) -> Result<()> {
    let trend: WeightTrend = weight_trend(&book.weight, &now.timezone(), &config.goal);
    if json {
        return print_json(&trend);
    }

    header("WEIGHT");
    match (trend.latest, trend.goal_progress) {
        (Some(latest), Some(progress)) => {
            println!("  Latest:  {:.1} kg", latest);
            println!(
                "  Goal:    {:.1} -> {:.1} kg ({:.0}% there)",
                trend.goal.start_weight, trend.goal.target_weight, progress
            );
        }
        _ => println!("  No weight logged yet."),
    }
    println!();
    for day in trend.days.iter().rev().take(14) {
        println!("  {}  {:.1} kg", day.date, day.weight);
    }
    println!();
    Ok(())
}
