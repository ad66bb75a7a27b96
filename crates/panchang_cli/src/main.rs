mod minimal_tracer;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use minimal_tracer::MinimalTracer;
use panchang_ephem::{AyanamshaSystem, Place};
use panchang_search::{Interval, PanchangConfig, PanchangResult, Period, compute, compute_for_date};
use panchang_time::{CivilDate, LocalInstant, UtcTime};
use tracing::debug;

#[derive(Parser)]
#[command(name = "panchang", about = "Hindu lunisolar calendar for a date and place")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full panchang of one civil day
    Day {
        /// Civil date at the place (YYYY-MM-DD)
        #[arg(long, conflicts_with = "at")]
        date: Option<String>,
        /// UTC instant (YYYY-MM-DDThh:mm:ssZ); the day containing it at the place
        #[arg(long)]
        at: Option<String>,
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// UTC offset in hours (e.g. 5.5)
        #[arg(long, allow_hyphen_values = true)]
        tz: f64,
        /// Altitude above sea level in metres
        #[arg(long, default_value = "0")]
        alt: f64,
        /// Ayanamsha system (lahiri, krishnamurti, raman, ...)
        #[arg(long)]
        ayanamsha: Option<String>,
        /// JSON file with PanchangConfig fields; flags override it
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the default configuration as JSON
    DefaultConfig,
    /// List the accepted ayanamsha systems
    Ayanamshas,
}

fn main() {
    if let Err(e) = MinimalTracer::register() {
        eprintln!("Failed to install log subscriber: {e}");
    }
    let cli = Cli::parse();

    match cli.command {
        Commands::Day {
            date,
            at,
            lat,
            lon,
            tz,
            alt,
            ayanamsha,
            config,
            json,
        } => {
            let mut cfg = config.map(|p| load_config(&p)).unwrap_or_default();
            if let Some(name) = ayanamsha {
                cfg.ayanamsha = parse_ayanamsha(&name);
            }
            let place = Place::new(lat, lon, tz)
                .and_then(|p| p.with_altitude(alt))
                .unwrap_or_else(|e| fail(&format!("Invalid location: {e}")));
            let provider = cfg.analytic_provider();
            debug!(?place, ayanamsha = %cfg.ayanamsha, "computing panchang");

            let result = match (date, at) {
                (Some(d), _) => {
                    let date = CivilDate::parse(&d).unwrap_or_else(|e| fail(&e.to_string()));
                    compute_for_date(&provider, date, &place, &cfg)
                }
                (None, Some(t)) => {
                    let instant = UtcTime::parse(&t)
                        .and_then(|u| u.to_instant())
                        .unwrap_or_else(|e| fail(&e.to_string()));
                    compute(&provider, instant, &place, &cfg)
                }
                (None, None) => fail("Either --date or --at is required"),
            }
            .unwrap_or_else(|e| fail(&format!("Panchang failed: {e}")));

            if json {
                print_json(&result);
            } else {
                print_day(&result);
            }
        }
        Commands::DefaultConfig => print_json(&PanchangConfig::default()),
        Commands::Ayanamshas => {
            for sys in AyanamshaSystem::all() {
                println!("{sys}");
            }
        }
    }
}

fn fail(msg: &str) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(&format!("Serialization failed: {e}")),
    }
}

fn load_config(path: &Path) -> PanchangConfig {
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| fail(&format!("Failed to read {}: {e}", path.display())));
    serde_json::from_str(&text)
        .unwrap_or_else(|e| fail(&format!("Invalid config {}: {e}", path.display())))
}

fn parse_ayanamsha(name: &str) -> AyanamshaSystem {
    name.parse().unwrap_or_else(|e: String| fail(&e))
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// Clock time on the panchang date; the next morning reads past 24:00.
fn clock(t: LocalInstant, r: &PanchangResult) -> String {
    t.clock_on(r.date).to_string()
}

fn print_periods(label: &str, periods: &[Period], r: &PanchangResult) {
    for (i, p) in periods.iter().enumerate() {
        let head = if i == 0 { label } else { "" };
        println!("{head:<10} {:<18} until {}", p.name(), clock(p.end, r));
    }
}

fn print_interval(w: &Interval, r: &PanchangResult) {
    println!(
        "  {:<14} {} - {}",
        w.name,
        clock(w.start, r),
        clock(w.end, r)
    );
}

fn print_day(r: &PanchangResult) {
    println!(
        "Panchang for {} at {:.4}°, {:.4}° (UTC{:+})\n",
        r.date, r.place.latitude_deg, r.place.longitude_deg, r.place.utc_offset_hours
    );
    println!("Sunrise:   {}", clock(r.sunrise, r));
    println!("Sunset:    {}", clock(r.sunset, r));
    match r.moonrise {
        Some(t) => println!("Moonrise:  {}", clock(t, r)),
        None => println!("Moonrise:  none"),
    }
    match r.moonset {
        Some(t) => println!("Moonset:   {}", clock(t, r)),
        None => println!("Moonset:   none"),
    }
    println!("Vaar:      {} ({})", r.vaar.name(), r.vaar.sanskrit_name());
    println!();

    println!(
        "Paksha:    {} (tithi {} of 15)",
        r.tithi.paksha.name(),
        r.tithi.tithi_in_paksha
    );
    print_periods("Tithi:", r.tithi.run.as_slice(), r);
    print_periods("Nakshatra:", r.nakshatra.run.as_slice(), r);
    println!("           pada {}", r.nakshatra.pada);
    print_periods("Yoga:", r.yoga.run.as_slice(), r);
    let karanas: Vec<Period> = r.karana.periods().copied().collect();
    print_periods("Karana:", &karanas, r);
    println!();

    let m = &r.month;
    println!("Amanta:      {}", m.amanta.label());
    println!("Purnimanta:  {}", m.purnimanta.label());
    println!("  as printed {}", m.purnimanta_display);
    let s = &r.samvat;
    println!("Kali:        {}", s.kali);
    println!("Shaka:       {} {}", s.shaka.number, s.shaka.samvatsara.name());
    println!("Vikram:      {} {}", s.vikram.number, s.vikram.samvatsara.name());
    println!("Gujarati:    {} {}", s.gujarati.number, s.gujarati.samvatsara.name());
    println!("Sun sign:    {} ({})", r.sun_sign.name(), r.sun_sign.western_name());
    println!("Moon sign:   {} ({})", r.moon_sign.name(), r.moon_sign.western_name());
    println!("Pravishte:   {}", r.pravishte);
    println!();

    let iv = &r.intervals;
    println!("Inauspicious:");
    for w in [&iv.rahu_kalam, &iv.gulika_kalam, &iv.yamaganda] {
        print_interval(w, r);
    }
    for w in iv.dur_muhurtam.iter().chain(&iv.varjyam) {
        print_interval(w, r);
    }
    println!("Auspicious:");
    for w in iv.abhijit.iter().chain(&iv.amrit_kalam) {
        print_interval(w, r);
    }
    println!("Choghadiya:");
    for c in &iv.choghadiya {
        let verdict = if c.quality.is_favourable() { "favourable" } else { "avoid" };
        println!(
            "  {:<6} {:<8} {:<10} {} - {}",
            c.choghadiya.name(),
            c.quality.name(),
            verdict,
            clock(c.start, r),
            clock(c.end, r)
        );
    }
}
