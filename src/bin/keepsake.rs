use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use keepsake::{
    KeepsakeError, RandomSource, SceneComposer, SplitMix64, Stage, StageConfig, ThreadRandom,
    Timeline, Transition, ViewState, Viewport,
};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "keepsake", version)]
struct Cli {
    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose one scene and print it as JSON.
    Scene(SceneArgs),
    /// Drive a stage through a sequence of steps and report each mount.
    Replay(ReplayArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ViewArg {
    Landing,
    Farewell,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    /// Classify the viewport width against the breakpoint.
    Auto,
    Compact,
    Full,
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// View to compose.
    #[arg(long, value_enum, default_value_t = ViewArg::Landing)]
    view: ViewArg,

    /// Compose the landing view with the video modal open.
    #[arg(long, default_value_t = false)]
    video_open: bool,

    /// Presentation mode.
    #[arg(long, value_enum, default_value_t = ModeArg::Auto)]
    mode: ModeArg,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Parser, Debug)]
struct ReplayArgs {
    /// Seconds the timeline advances after each step.
    #[arg(long, default_value_t = 1.0)]
    step_secs: f64,

    #[command(flatten)]
    common: CommonArgs,

    /// Steps: reveal, back, open-video, close-video, compact, full or resize=WxH.
    #[arg(required = true)]
    steps: Vec<Step>,
}

#[derive(clap::Args, Debug)]
struct CommonArgs {
    /// Viewport width in CSS pixels.
    #[arg(long, requires = "height")]
    width: Option<f64>,

    /// Viewport height in CSS pixels.
    #[arg(long, requires = "width")]
    height: Option<f64>,

    /// Seed for reproducible particle layouts.
    #[arg(long)]
    seed: Option<u64>,

    /// Stage configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl CommonArgs {
    fn viewport(&self) -> Option<Viewport> {
        Some(Viewport::new(self.width?, self.height?))
    }

    fn stage_config(&self) -> anyhow::Result<StageConfig> {
        match &self.config {
            Some(path) => StageConfig::from_path(path)
                .with_context(|| format!("load config '{}'", path.display())),
            None => Ok(StageConfig::default()),
        }
    }

    fn rng(&self) -> Box<dyn RandomSource> {
        match self.seed {
            Some(seed) => Box::new(SplitMix64::new(seed)),
            None => Box::new(ThreadRandom::default()),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Step {
    Transition(Transition),
    Compact(bool),
    Resize(Viewport),
}

impl FromStr for Step {
    type Err = KeepsakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compact" => return Ok(Self::Compact(true)),
            "full" => return Ok(Self::Compact(false)),
            _ => {}
        }
        if let Some(size) = s.strip_prefix("resize=") {
            let (w, h) = size.split_once('x').ok_or_else(|| {
                KeepsakeError::validation(format!("resize expects WxH, got '{size}'"))
            })?;
            let parse = |v: &str| {
                v.trim()
                    .parse::<f64>()
                    .map_err(|e| KeepsakeError::validation(format!("resize size '{v}': {e}")))
            };
            return Ok(Self::Resize(Viewport::new(parse(w)?, parse(h)?)));
        }
        s.parse().map(Self::Transition)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transition(t) => f.write_str(t.as_str()),
            Self::Compact(true) => f.write_str("compact"),
            Self::Compact(false) => f.write_str("full"),
            Self::Resize(v) => write!(f, "resize={}x{}", v.width, v.height),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.cmd {
        Command::Scene(args) => cmd_scene(args),
        Command::Replay(args) => cmd_replay(args),
    }
}

fn cmd_scene(args: SceneArgs) -> anyhow::Result<()> {
    let config = args.common.stage_config()?;
    let viewport = args.common.viewport();
    let compact = match args.mode {
        ModeArg::Auto => config.breakpoint().classify(viewport),
        ModeArg::Compact => true,
        ModeArg::Full => false,
    };
    let view = match args.view {
        ViewArg::Landing => ViewState::Landing {
            video_open: args.video_open,
        },
        ViewArg::Farewell => {
            if args.video_open {
                tracing::warn!("--video-open has no effect on the farewell view");
            }
            ViewState::Farewell
        }
    };

    let mut rng = args.common.rng();
    let mut composer = SceneComposer::new(config);
    let scene = composer.compose(view, compact, viewport, &mut *rng);
    let json = serde_json::to_string_pretty(&scene).context("serialize scene")?;
    println!("{json}");
    Ok(())
}

fn cmd_replay(args: ReplayArgs) -> anyhow::Result<()> {
    if !args.step_secs.is_finite() || args.step_secs < 0.0 {
        anyhow::bail!("--step-secs must be finite and >= 0");
    }
    let config = args.common.stage_config()?;
    let mut stage = Stage::new(
        config,
        Timeline::new(),
        args.common.rng(),
        args.common.viewport(),
    )?;
    report(&stage, 0, "mount");

    for (i, step) in args.steps.iter().enumerate() {
        match *step {
            Step::Transition(t) => {
                stage.dispatch(t);
            }
            Step::Compact(compact) => {
                stage.set_compact(compact);
            }
            Step::Resize(viewport) => {
                stage.resize(viewport);
            }
        }
        stage.scheduler().advance(args.step_secs);
        report(&stage, i + 1, &step.to_string());
    }
    Ok(())
}

fn report(stage: &Stage<Timeline>, index: usize, step: &str) {
    let state = match stage.state() {
        ViewState::Landing { video_open: false } => "landing",
        ViewState::Landing { video_open: true } => "landing+video",
        ViewState::Farewell => "farewell",
    };
    println!(
        "{index}\t{step}\tstate={state}\tcompact={}\tanimations={}\tactive={}\tmounts={}",
        stage.compact(),
        stage.scene().animation_count(),
        stage.scheduler().active_count(),
        stage.mount_count(),
    );
}
