//! Constants and runtime configuration defaults

// Board defaults
/// Default number of tile columns
pub const DEFAULT_COLUMNS: u32 = 3;
/// Default number of tile rows
pub const DEFAULT_ROWS: u32 = 2;

// Rendering
/// Grid overlay color, black at 0.8 opacity
pub const GRID_LINE_COLOR: [u8; 4] = [0, 0, 0, 204];
/// Grid overlay thickness in pixels
pub const GRID_LINE_WIDTH: u32 = 2;
/// Color exported surfaces are cleared to
pub const SURFACE_BACKGROUND: [u8; 4] = [255, 255, 255, 255];

// Autoplay
/// Pointer moves generated per automatic drag
pub const AUTOSOLVE_DRAG_STEPS: u32 = 8;

// Image generation
/// Image-generation endpoint used when none is configured
pub const DEFAULT_GENERATE_ENDPOINT: &str = "http://localhost:3000/generate/generate";
/// Environment variable overriding the generation endpoint
pub const ENDPOINT_ENV_VAR: &str = "JIGSNAP_ENDPOINT";
/// User identifier sent with generation requests
pub const DEFAULT_USER_ID: &str = "user1";
/// Course identifier sent with generation requests
pub const DEFAULT_COURSE_ID: &str = "course1";
/// Diffusion steps requested
pub const DEFAULT_STEPS: u32 = 10;
/// Classifier-free guidance scale requested
pub const DEFAULT_CFG_SCALE: f32 = 7.5;
/// Requested image width
pub const DEFAULT_IMAGE_WIDTH: u32 = 512;
/// Requested image height
pub const DEFAULT_IMAGE_HEIGHT: u32 = 512;
/// Timeout for each generation HTTP call in seconds
pub const GENERATE_TIMEOUT_SECS: u64 = 120;
/// Output file for generated images
pub const DEFAULT_GENERATED_OUTPUT: &str = "generated.png";

// Logging
/// Environment variable selecting the log level
pub const LOG_LEVEL_ENV_VAR: &str = "LOG_LEVEL";

// Output settings
/// Suffix added to rendered board filenames
pub const BOARD_SUFFIX: &str = "_board";
/// Suffix added to session animation filenames
pub const SESSION_SUFFIX: &str = "_session";
/// Suffix added to downloaded original filenames
pub const ORIGINAL_SUFFIX: &str = "_original";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 40;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;
/// Upper bound on frames kept for a session animation
pub const MAX_CAPTURED_FRAMES: usize = 2_000;
