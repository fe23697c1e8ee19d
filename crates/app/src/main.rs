use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use haptic_sync_core::{
    project_definition, AppConfig, PlaybackClock, PlaybackRate, Player, Preset, Projection,
    Scheduler, SoundDefinition, SoundGenerator, Timeline, TracingAudioSink, TracingHapticSink,
};
use tracing_subscriber::EnvFilter;

fn main() -> haptic_sync_core::Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    init_tracing(&config.log_filter);

    match cli.command {
        Commands::List => run_list(),
        Commands::Project { preset, rate, json } => {
            let rate = resolve_rate(rate, &config)?;
            let sound = SoundGenerator::new().generate(preset, rate)?;
            print_projection(sound.name(), sound.projection(), json)
        }
        Commands::ProjectFile { path, rate, json } => {
            let rate = resolve_rate(rate, &config)?;
            run_project_file(&path, rate, json)
        }
        Commands::Play { preset, rate } => {
            let rate = resolve_rate(rate, &config)?;
            run_play(preset, rate, &config)
        }
        Commands::Simulate { preset, rate, step } => {
            let rate = resolve_rate(rate, &config)?;
            run_simulate(preset, rate, step)
        }
    }
}

fn resolve_rate(rate: Option<f64>, config: &AppConfig) -> haptic_sync_core::Result<PlaybackRate> {
    match rate {
        Some(rate) => PlaybackRate::new(rate),
        None => config.default_rate(),
    }
}

fn run_list() -> haptic_sync_core::Result<()> {
    for preset in Preset::ALL {
        let definition = preset.definition()?;
        println!(
            "{preset:<22} {:<20} {:>5.2}s  {} events, {} sounds",
            definition.name(),
            definition.duration(),
            definition.events().len(),
            definition.sound_resources().len(),
        );
    }
    Ok(())
}

fn run_project_file(path: &Path, rate: PlaybackRate, json: bool) -> haptic_sync_core::Result<()> {
    tracing::info!(?path, %rate, "projecting definition file");
    let contents = std::fs::read_to_string(path)?;
    let definition: SoundDefinition = serde_json::from_str(&contents)?;
    let projection = project_definition(&definition, rate);
    print_projection(definition.name(), &projection, json)
}

fn run_play(preset: Preset, rate: PlaybackRate, config: &AppConfig) -> haptic_sync_core::Result<()> {
    tracing::info!(%preset, %rate, "playing preset");
    let sound = SoundGenerator::new().generate(preset, rate)?;
    let player = Player::new(TracingAudioSink, TracingHapticSink)
        .with_resource_offsets(config.playback.schedule_resource_offsets);
    player.play(&sound);
    Ok(())
}

/// Upper bound on clock steps taken by `simulate`.
const MAX_SIMULATION_STEPS: u64 = 100_000;

fn run_simulate(preset: Preset, rate: PlaybackRate, step: f64) -> haptic_sync_core::Result<()> {
    let sound = SoundGenerator::new().generate(preset, rate)?;
    let timeline = Timeline::from_projection(sound.projection());
    let last_cue = timeline.entries().last().map_or(0.0, |entry| entry.time_seconds);
    let total = timeline.total_seconds().max(last_cue);
    let steps = simulation_steps(total, step)?;
    let mut scheduler = Scheduler::new(timeline);
    let mut clock = PlaybackClock::default();

    tracing::info!(%preset, %rate, total_seconds = total, steps, "simulating");
    for index in 0..=steps {
        clock.time_seconds = index as f64 * step;
        for entry in scheduler.tick(&clock) {
            tracing::info!(at = clock.time_seconds, due = entry.time_seconds, cue = ?entry.cue);
        }
        if scheduler.is_finished() {
            break;
        }
    }
    Ok(())
}

/// Number of `step`-sized clock advances needed to cover `total` seconds.
fn simulation_steps(total: f64, step: f64) -> haptic_sync_core::Result<u64> {
    if !(step.is_finite() && step > 0.0) {
        return Err(format!("simulation step must be positive, got {step}").into());
    }

    let steps = (total.max(0.0) / step).ceil();
    if steps.is_nan() || steps > MAX_SIMULATION_STEPS as f64 {
        return Err(format!(
            "simulating {total:.3}s in steps of {step}s needs more than {MAX_SIMULATION_STEPS} steps"
        )
        .into());
    }
    Ok(steps as u64)
}

fn print_projection(name: &str, projection: &Projection, json: bool) -> haptic_sync_core::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(projection)?);
        return Ok(());
    }

    println!(
        "{name} @ {} ({:.3}s of {:.3}s canonical)",
        projection.rate,
        projection.total_seconds(),
        projection.canonical_duration
    );
    for event in &projection.events {
        println!(
            "  haptic {:<10} t={:>7.3}s d={:>7.3}s intensity={:.2} sharpness={:.2}",
            format!("{:?}", event.kind).to_lowercase(),
            event.time_seconds,
            event.duration_seconds,
            event.intensity,
            event.sharpness,
        );
    }
    for (index, resource) in projection.resources.iter().enumerate() {
        println!(
            "  audio  {:<30} start={:>7.3}s rate={:.3} volume={:.2} pitch={:.1}",
            resource.file_name,
            projection.resource_start_seconds(index).unwrap_or(0.0),
            resource.rate,
            resource.volume,
            resource.pitch,
        );
    }
    Ok(())
}

fn init_tracing(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Synchronised sound and haptic effects", long_about = None)]
struct Cli {
    /// Optional JSON configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the built-in presets.
    List,
    /// Print the projected timings of a preset.
    Project {
        preset: Preset,
        /// Playback rate; defaults to the configured rate.
        #[arg(short, long)]
        rate: Option<f64>,
        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Print the projected timings of a definition stored as JSON.
    ProjectFile {
        path: PathBuf,
        #[arg(short, long)]
        rate: Option<f64>,
        #[arg(long)]
        json: bool,
    },
    /// Dispatch a preset to the logging audio and haptic backends.
    Play {
        preset: Preset,
        #[arg(short, long)]
        rate: Option<f64>,
    },
    /// Step a clock through a preset and log each cue as it becomes due.
    Simulate {
        preset: Preset,
        #[arg(short, long)]
        rate: Option<f64>,
        /// Clock step in seconds.
        #[arg(short, long, default_value_t = 0.05)]
        step: f64,
    },
}
