//! Command-line interface for headless play and image generation

use crate::generation::client::{GenerationClient, resolve_endpoint};
use crate::generation::prompt::{PROMPT_CATALOG, PromptSelection};
use crate::generation::request::GenerateRequest;
use crate::io::configuration::{
    AUTOSOLVE_DRAG_STEPS, BOARD_SUFFIX, DEFAULT_CFG_SCALE, DEFAULT_COLUMNS, DEFAULT_COURSE_ID,
    DEFAULT_GENERATED_OUTPUT, DEFAULT_IMAGE_HEIGHT, DEFAULT_IMAGE_WIDTH, DEFAULT_ROWS,
    DEFAULT_STEPS, DEFAULT_USER_ID, ENDPOINT_ENV_VAR, GIF_FRAME_DELAY_MS, MAX_CAPTURED_FRAMES,
    ORIGINAL_SUFFIX, SESSION_SUFFIX, SURFACE_BACKGROUND,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{export_png, load_source_image};
use crate::io::progress::{ReplayProgress, Spinner};
use crate::io::script::load_script;
use crate::io::visualization::FrameCapture;
use crate::puzzle::autoplay::solution_events;
use crate::puzzle::board::Board;
use crate::puzzle::controller::{
    ControllerOptions, DropPolicy, PointerEvent, PointerOutcome, PuzzleController,
};
use crate::puzzle::shuffle::TileShuffler;
use crate::render::painter::RenderStyle;
use crate::render::raster::RasterSurface;
use crate::spatial::layout::{DivisionPolicy, GridDimensions};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "jigsnap")]
#[command(author, version, about = "Slice an image into a drag-and-snap tile puzzle")]
/// Command-line arguments for the puzzle tool
pub struct Cli {
    /// Only log warnings and errors, and hide progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Action to perform
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Build a puzzle from an image and play it with scripted pointer input
    Play(PlayArgs),
    /// Request a new puzzle image from the generation endpoint
    Generate(GenerateArgs),
}

/// Arguments of the `play` subcommand
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
#[derive(Args)]
pub struct PlayArgs {
    /// Source image for the puzzle
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Number of tile columns
    #[arg(short, long, default_value_t = DEFAULT_COLUMNS)]
    pub columns: u32,

    /// Number of tile rows
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: u32,

    /// Random seed for a reproducible shuffle (fresh shuffle if omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Handling of images that do not divide evenly into the grid
    #[arg(long, value_enum, default_value_t = DivisionPolicy::Crop)]
    pub uneven: DivisionPolicy,

    /// What happens to a tile dropped on a wrong cell
    #[arg(long, value_enum, default_value_t = DropPolicy::Revert)]
    pub drop_policy: DropPolicy,

    /// Ignore new drags once the puzzle is solved
    #[arg(long)]
    pub lock_when_solved: bool,

    /// Pointer event script to replay
    #[arg(long, value_name = "FILE", conflicts_with = "autosolve")]
    pub script: Option<PathBuf>,

    /// Drag every tile onto its correct cell automatically
    #[arg(short, long)]
    pub autosolve: bool,

    /// Output path for the final board rendering (default: <IMAGE>_board.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export the session as an animated GIF (<IMAGE>_session.gif)
    #[arg(short, long)]
    pub visualize: bool,

    /// Save the original image (<IMAGE>_original.png) once the puzzle is solved
    #[arg(short, long)]
    pub download: bool,
}

impl PlayArgs {
    /// Controller options selected by the flags
    pub fn controller_options(&self) -> ControllerOptions {
        ControllerOptions {
            drop_policy: self.drop_policy,
            lock_when_solved: self.lock_when_solved,
            style: RenderStyle::default(),
        }
    }

    /// Grid selected by the flags
    pub const fn grid(&self) -> GridDimensions {
        GridDimensions::new(self.columns, self.rows)
    }
}

/// Arguments of the `generate` subcommand
#[derive(Args)]
pub struct GenerateArgs {
    /// Prompt term to include; repeat for several
    #[arg(short, long = "prompt", value_name = "TERM")]
    pub prompts: Vec<String>,

    /// Generation endpoint (default: $JIGSNAP_ENDPOINT or the local service)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// User identifier sent with the request
    #[arg(long, default_value = DEFAULT_USER_ID)]
    pub user_id: String,

    /// Course identifier sent with the request
    #[arg(long, default_value = DEFAULT_COURSE_ID)]
    pub course_id: String,

    /// Diffusion steps
    #[arg(long, default_value_t = DEFAULT_STEPS)]
    pub steps: u32,

    /// Guidance scale
    #[arg(long, default_value_t = DEFAULT_CFG_SCALE)]
    pub cfg_scale: f32,

    /// Image width in pixels
    #[arg(long, default_value_t = DEFAULT_IMAGE_WIDTH)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = DEFAULT_IMAGE_HEIGHT)]
    pub height: u32,

    /// Where to save the generated image
    #[arg(short, long, default_value = DEFAULT_GENERATED_OUTPUT)]
    pub output: PathBuf,

    /// Print the suggested prompt terms and exit
    #[arg(long)]
    pub list_prompts: bool,
}

impl GenerateArgs {
    /// Build the request body described by the flags
    pub fn to_request(&self) -> GenerateRequest {
        let selection = PromptSelection::from_terms(&self.prompts);
        GenerateRequest {
            userid: self.user_id.clone(),
            course_id: self.course_id.clone(),
            steps: self.steps,
            cfg_scale: self.cfg_scale,
            width: self.width,
            height: self.height,
            ..GenerateRequest::from_selection(&selection)
        }
    }
}

/// Outcome of a headless play session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaySummary {
    /// Pointer events replayed
    pub events: usize,
    /// Tiles on their correct cell at the end
    pub placed: usize,
    /// Total tiles on the board
    pub tiles: usize,
    /// Whether the board was solved
    pub solved: bool,
}

/// Dispatch a parsed command line
///
/// # Errors
///
/// Returns an error if the selected subcommand fails
pub fn run(cli: &Cli) -> Result<()> {
    let show_progress = cli.should_show_progress();
    match &cli.command {
        Command::Play(args) => PlaySession::new(args, show_progress).run().map(|_| ()),
        Command::Generate(args) => GenerateCommand::new(args, show_progress).run(),
    }
}

/// Loads an image, builds a board and replays pointer input against it
pub struct PlaySession<'a> {
    args: &'a PlayArgs,
    show_progress: bool,
}

impl<'a> PlaySession<'a> {
    /// Create a session for the given arguments
    pub const fn new(args: &'a PlayArgs, show_progress: bool) -> Self {
        Self {
            args,
            show_progress,
        }
    }

    /// Run the session and write its outputs
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The image is missing or cannot be decoded
    /// - The grid does not fit the image
    /// - The pointer script cannot be read or parsed
    /// - Any output file cannot be written
    pub fn run(&self) -> Result<PlaySummary> {
        let image_path = &self.args.image;
        if !image_path.is_file() {
            return Err(invalid_parameter(
                "image",
                &image_path.display(),
                &"must be an existing image file",
            ));
        }

        let source = load_source_image(image_path)?;
        let mut shuffler = self
            .args
            .seed
            .map_or_else(TileShuffler::from_os_rng, TileShuffler::new);
        let board = Board::new(source, self.args.grid(), self.args.uneven, &mut shuffler)?;
        info!(
            image = %image_path.display(),
            columns = self.args.columns,
            rows = self.args.rows,
            piece = %board.layout().piece_size(),
            "puzzle ready"
        );

        let events = self.collect_events(&board)?;
        let mut controller = PuzzleController::new(
            board,
            RasterSurface::new(SURFACE_BACKGROUND),
            self.args.controller_options(),
        );

        let mut capture = self
            .args
            .visualize
            .then(|| FrameCapture::new(MAX_CAPTURED_FRAMES));
        if let Some(ref mut capture) = capture {
            capture.record(controller.board());
        }

        let progress = (self.show_progress && !events.is_empty())
            .then(|| ReplayProgress::new(&file_label(image_path), events.len()));

        for event in &events {
            let outcome = controller.handle(*event);
            if matches!(
                outcome,
                PointerOutcome::Dragged { .. } | PointerOutcome::Dropped(_)
            ) && let Some(ref mut capture) = capture
            {
                capture.record(controller.board());
            }
            if let PointerOutcome::Dropped(report) = outcome
                && report.newly_solved
            {
                info!(tile = %report.tile, "final tile placed");
            }
            if let Some(ref progress) = progress {
                let board = controller.board();
                progress.advance(board.placed_count(), board.tile_count());
            }
        }

        let solved = controller.is_solved();
        if let Some(ref progress) = progress {
            progress.finish(solved);
        }

        let (board, surface) = controller.into_parts();
        let output_path = self
            .args
            .output
            .clone()
            .unwrap_or_else(|| derived_path(image_path, BOARD_SUFFIX, "png"));
        export_png(surface.canvas(), &output_path)?;
        info!(path = %output_path.display(), "board rendering saved");

        if let Some(capture) = capture {
            let gif_path = derived_path(image_path, SESSION_SUFFIX, "gif");
            let style = self.args.controller_options().style;
            capture.export_gif(&board, style, &gif_path, GIF_FRAME_DELAY_MS)?;
            info!(
                path = %gif_path.display(),
                frames = capture.frame_count(),
                "session animation saved"
            );
        }

        if self.args.download {
            if solved {
                let original_path = derived_path(image_path, ORIGINAL_SUFFIX, "png");
                export_png(board.source_image(), &original_path)?;
                info!(path = %original_path.display(), "original image saved");
            } else {
                warn!("puzzle not solved, original image not saved");
            }
        }

        let summary = PlaySummary {
            events: events.len(),
            placed: board.placed_count(),
            tiles: board.tile_count(),
            solved,
        };
        info!(
            events = summary.events,
            placed = summary.placed,
            tiles = summary.tiles,
            solved = summary.solved,
            "session finished"
        );
        Ok(summary)
    }

    fn collect_events(&self, board: &Board) -> Result<Vec<PointerEvent>> {
        if let Some(script) = &self.args.script {
            return load_script(script);
        }
        if self.args.autosolve {
            return Ok(solution_events(board, AUTOSOLVE_DRAG_STEPS));
        }
        Ok(Vec::new())
    }
}

/// Sends a generation request and saves the resulting image
pub struct GenerateCommand<'a> {
    args: &'a GenerateArgs,
    show_progress: bool,
}

impl<'a> GenerateCommand<'a> {
    /// Create a command for the given arguments
    pub const fn new(args: &'a GenerateArgs, show_progress: bool) -> Self {
        Self {
            args,
            show_progress,
        }
    }

    /// Run the request and save the image
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails or the image cannot be saved
    pub fn run(&self) -> Result<()> {
        if self.args.list_prompts {
            Self::print_catalog();
            return Ok(());
        }

        let env_endpoint = std::env::var(ENDPOINT_ENV_VAR).ok();
        let endpoint = resolve_endpoint(self.args.endpoint.as_deref(), env_endpoint.as_deref());
        let client = GenerationClient::new(&endpoint)?;
        let request = self.args.to_request();

        let spinner = self
            .show_progress
            .then(|| Spinner::start("Generating image..."));
        let result = client.generate_image(&request);
        if let Some(ref spinner) = spinner {
            spinner.finish();
        }
        let (response, image) = result?;

        export_png(&image, &self.args.output)?;
        info!(
            image_url = %response.image_url,
            path = %self.args.output.display(),
            "generated image saved"
        );
        Ok(())
    }

    // Allow print for the requested listing
    #[allow(clippy::print_stdout)]
    fn print_catalog() {
        for term in PROMPT_CATALOG {
            println!("{term}");
        }
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

/// Sibling path of `input` with `suffix` appended to its stem
pub fn derived_path(input: &Path, suffix: &str, extension: &str) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();
    let name = format!("{}{suffix}.{extension}", stem.to_string_lossy());

    if let Some(parent) = input.parent() {
        parent.join(name)
    } else {
        PathBuf::from(name)
    }
}
