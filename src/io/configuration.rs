//! Rendering constants and runtime configuration defaults

// Grid geometry
/// Pixel size of one glyph cell (also the font size)
pub const GLYPH_PIXEL_SIZE: u32 = 12;

/// Viewports narrower than this are treated as mobile
pub const MOBILE_WIDTH_THRESHOLD: u32 = 768;

/// User agent fragments identifying mobile browsers (matched case-insensitively)
pub const MOBILE_USER_AGENT_TOKENS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

// Animation speed, applied per frame to the time accumulator
/// Time increment per frame on desktop-class devices
pub const DESKTOP_TIME_INCREMENT: f64 = 0.03;
/// Time increment per frame on mobile-class devices
pub const MOBILE_TIME_INCREMENT: f64 = 0.012;

// Per-frame glyph change probabilities
/// Desktop change probability for ordinary cells
pub const DESKTOP_BASE_CHANGE_RATE: f64 = 0.001;
/// Desktop change probability for bright cells
pub const DESKTOP_BRIGHT_CHANGE_RATE: f64 = 0.004;
/// Mobile change probability for ordinary cells
pub const MOBILE_BASE_CHANGE_RATE: f64 = 0.0005;
/// Mobile change probability for bright cells
pub const MOBILE_BRIGHT_CHANGE_RATE: f64 = 0.002;
/// Cells brighter than this use the bright change rate
pub const BRIGHT_CHANGE_THRESHOLD: f64 = 0.7;

// Noise sampling
/// Noise-space distance between adjacent cells
pub const NOISE_SPATIAL_SCALE: f64 = 0.05;
/// Noise-space distance per unit of accumulated time
pub const NOISE_TIME_SCALE: f64 = 0.1;

// Brightness and colour
/// Lower brightness clamp
pub const MIN_BRIGHTNESS: f64 = 0.2;
/// Upper brightness clamp
pub const MAX_BRIGHTNESS: f64 = 0.9;
/// Alpha is brightness scaled by this factor
pub const ALPHA_SCALE: f64 = 0.4;
/// Warm beige glyph tint
pub const GLYPH_TINT: [u8; 3] = [168, 144, 116];

// Cell seeding
/// Initial change timestamps are drawn from `[0, INITIAL_CHANGE_TIME_RANGE)`
pub const INITIAL_CHANGE_TIME_RANGE: f64 = 5000.0;

// Glitch zones
/// Minimum number of zones created per grid build
pub const GLITCH_ZONES_MIN: usize = 2;
/// Maximum number of zones created per grid build
pub const GLITCH_ZONES_MAX: usize = 4;
/// Minimum zone radius in cells
pub const GLITCH_RADIUS_MIN: u32 = 4;
/// Maximum zone radius in cells
pub const GLITCH_RADIUS_MAX: u32 = 11;
/// Minimum zone intensity
pub const GLITCH_INTENSITY_MIN: f64 = 0.2;
/// Maximum zone intensity
pub const GLITCH_INTENSITY_MAX: f64 = 1.0;
/// Minimum zone lifetime in frames (inclusive)
pub const GLITCH_LIFETIME_MIN: f64 = 100.0;
/// Maximum zone lifetime in frames (exclusive)
pub const GLITCH_LIFETIME_MAX: f64 = 300.0;
/// Offset amplitude of symbol-shift zones, in pixels
pub const GLITCH_SHIFT_AMPLITUDE: f64 = 3.0;
/// Scramble probability per unit of influence
pub const GLITCH_SCRAMBLE_RATE: f64 = 0.3;
/// Per-frame phase advances: shift, flicker, chaos, corruption, scramble
pub const GLITCH_PHASE_STEPS: [f64; 5] = [0.1, 0.15, 0.05, 0.08, 0.12];
/// Salt mixed into the seed of the glitch random stream
pub const GLITCH_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

// Default values for configurable parameters
/// Fixed seed for reproducible rendering
pub const DEFAULT_SEED: u64 = 42;
/// Default number of frames rendered by the CLI
pub const DEFAULT_FRAMES: usize = 120;
/// Default viewport width in pixels
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;
/// Default viewport height in pixels
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 720;
/// Default background painted behind the glyphs
pub const DEFAULT_BACKGROUND: [u8; 4] = [12, 10, 8, 255];

// Output settings
/// Delay between GIF animation frames (about 30 frames per second)
pub const GIF_FRAME_DELAY_MS: u32 = 33;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
