// Tracking and animation tuning constants shared by every page front-end.

// Pointer pursuit
pub const IDLE_LERP_RATE: f32 = 0.01; // smoothing rate while not following
pub const FOLLOW_LERP_FIRST: f32 = 0.2; // smoothing rate of the first item in a group
pub const FOLLOW_LERP_QUOTIENT: f32 = 0.85; // per-ordinal decay of the follow rate
pub const RATE_SMOOTHING: f32 = 0.01; // how fast the smoothing rate itself moves

// Frame timing
pub const REFERENCE_FRAME_MS: f32 = 1000.0 / 60.0; // slow-down factor of 1.0
pub const FRAME_DT_MIN_MS: f32 = 0.1;
pub const FRAME_DT_MAX_MS: f32 = 250.0;

// Follow mode
pub const FOLLOW_SCALE_FACTOR: f32 = 1.8; // enlargement while following
pub const FOLLOW_IN_DELAY_PER_KEY_MS: f32 = 1.0;
pub const FOLLOW_IN_DURATION_MS: f32 = 1100.0;
pub const FOLLOW_OUT_DELAY_PER_KEY_MS: f32 = 15.0;
pub const FOLLOW_OUT_DURATION_MS: f32 = 1400.0;

// Enter animation
pub const ENTER_DURATION_MS: f32 = 1500.0;
pub const ENTER_TILT_FACTOR: f32 = 0.03; // fraction of [-pi, pi] used for the random tilt
pub const DEFAULT_OPACITY: f32 = 1.0;

// Scatter exclusion zone, as fractions of the viewport
pub const EXCLUSION_WIDTH_FRACTION: f32 = 1.0 / 5.0;
pub const EXCLUSION_HEIGHT_FRACTION: f32 = 1.0 / 4.0;
pub const SCATTER_MAX_ATTEMPTS: u32 = 64;
pub const SCATTER_FALLBACK_MARGIN: f32 = 1.0; // px pushed past the zone on fallback

// Spiral carousel scroll
pub const SCROLL_LERP_EASE: f32 = 0.07;
pub const SCROLL_Y_MULTIPLIER: f32 = 0.004;
pub const SPIRAL_ITEM_SPACING: f32 = 0.056; // spline progress between neighbours
pub const SPIRAL_ZERO_PROGRESS_OFFSET: f32 = 0.25; // spline progress of the focused item
pub const SPIRAL_SCALE_FALLOFF: f32 = 8.0;
pub const SPIRAL_SCALE_EXPONENT: f32 = 0.2;

// Drag-to-launch gesture
pub const CATAPULT_POWER_FACTOR: f32 = 0.1; // power per px of drag

// Raycast identification tag for card planes
pub const CARD_COLLIDER_TAG: &str = "cardItem";
