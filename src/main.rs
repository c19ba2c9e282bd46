mod replay;

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use clap::{Parser, ValueEnum};
use gestures::{DeviceProfile, GestureConfig};

use crate::replay::ReplayError;

#[derive(Parser, Debug)]
#[command(name = "printpad", about = "Replay pointer traces through the print-template gesture recognizer")]
struct Cli {
    /// JSON-lines trace, or - for stdin.
    #[arg(default_value = "-")]
    input: String,

    /// Preset thresholds to start from.
    #[arg(long, env = "PRINTPAD_PROFILE", value_enum, default_value = "touch")]
    profile: Profile,

    /// Overrides `GESTURE_LONG_PRESS_MS`.
    #[arg(long)]
    long_press_ms: Option<u64>,

    /// Overrides `GESTURE_MOVE_THRESHOLD_PX`.
    #[arg(long)]
    move_threshold_px: Option<f64>,

    /// Overrides `GESTURE_TAP_MAX_MS`.
    #[arg(long)]
    tap_max_ms: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Profile {
    Mouse,
    Touch,
    LenientTouch,
}

impl From<Profile> for DeviceProfile {
    fn from(profile: Profile) -> Self {
        match profile {
            Profile::Mouse => Self::Mouse,
            Profile::Touch => Self::Touch,
            Profile::LenientTouch => Self::LenientTouch,
        }
    }
}

impl Cli {
    /// Profile preset, then `GESTURE_*` environment, then command-line flags.
    fn config(&self) -> Result<GestureConfig, ReplayError> {
        let mut config = DeviceProfile::from(self.profile).config().with_env_overrides()?;
        if let Some(ms) = self.long_press_ms {
            config.long_press_ms = ms;
        }
        if let Some(px) = self.move_threshold_px {
            config.move_threshold_px = px;
        }
        if let Some(ms) = self.tap_max_ms {
            config.tap_max_ms = ms;
        }
        config.validate()?;
        Ok(config)
    }

    fn reader(&self) -> Result<Box<dyn BufRead>, ReplayError> {
        if self.input == "-" {
            return Ok(Box::new(BufReader::new(io::stdin())));
        }
        let file = File::open(&self.input)?;
        Ok(Box::new(BufReader::new(file)))
    }
}

fn main() -> Result<(), ReplayError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config()?;
    tracing::info!(
        profile = ?cli.profile,
        long_press_ms = config.long_press_ms,
        move_threshold_px = config.move_threshold_px,
        tap_max_ms = config.tap_max_ms,
        "replaying trace"
    );

    let reader = cli.reader()?;
    let mut stdout = io::stdout().lock();
    let summary = replay::replay(config, reader, &mut stdout)?;
    tracing::info!(
        samples = summary.samples,
        rejected = summary.rejected,
        gestures = summary.gestures,
        "replay finished"
    );
    Ok(())
}
