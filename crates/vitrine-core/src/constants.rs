// Shared tuning constants for the page effects. Values match the shipped
// page, so the canvas output stays pixel-compatible with it.

// Background canvas
pub const GRID_SPACING: f32 = 60.0; // px between grid lines
pub const PARTICLE_COUNT: usize = 35;
pub const PARTICLE_SPEED_RANGE: f32 = 0.35; // full width of the velocity range, px/frame
pub const PARTICLE_MIN_RADIUS: f32 = 0.5;
pub const PARTICLE_RADIUS_SPAN: f32 = 1.8;
pub const PARTICLE_MIN_ALPHA: f32 = 0.1;
pub const PARTICLE_ALPHA_SPAN: f32 = 0.45;
pub const PROXIMITY_THRESHOLD: f32 = 0.22; // normalized distance where intersection glow fades out
pub const GLOW_BASE_ALPHA: f32 = 0.04;
pub const GLOW_ALPHA_SPAN: f32 = 0.45;
pub const GLOW_BASE_RADIUS: f32 = 2.0;
pub const GLOW_RADIUS_SPAN: f32 = 2.0;
pub const GLOW_IDLE_RADIUS: f32 = 1.5; // intersections outside pointer range
pub const POINTER_GLOW_RADIUS: f32 = 200.0; // px radius of the pointer-follow gradient
pub const GRID_LINE_WIDTH: f32 = 0.5;

// Custom cursor
pub const CURSOR_GLOW_LERP: f32 = 0.12; // glow catch-up fraction per frame

// Typed roles (ms)
pub const TYPE_CHAR_DELAY_MS: u32 = 70;
pub const DELETE_CHAR_DELAY_MS: u32 = 40;
pub const ROLE_HOLD_DELAY_MS: u32 = 2200;
pub const ROLE_GAP_DELAY_MS: u32 = 350;
pub const TYPER_START_DELAY_MS: u32 = 900;

// Counters
pub const COUNTER_STEPS: f32 = 60.0; // target is reached in at most this many ticks
pub const COUNTER_TICK_MS: i32 = 25;

// Scroll reveal / observers
pub const REVEAL_STAGGER_SEC: f32 = 0.07;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const COUNTER_THRESHOLD: f64 = 0.5;
pub const XP_BAR_THRESHOLD: f64 = 0.3;
pub const XP_BAR_FILL_DELAY_MS: i32 = 200;
pub const ACTIVE_NAV_THRESHOLD: f64 = 0.4;

// Navigation
pub const NAV_HEIGHT_PX: f64 = 64.0;
pub const NAV_SCROLLED_Y: f64 = 40.0;

// Magnetic buttons / card tilt
pub const MAGNET_PULL_X: f32 = 0.25;
pub const MAGNET_PULL_Y: f32 = 0.35;
pub const TILT_MAX_DEG: f32 = 7.0;
pub const TILT_LIFT_PX: f32 = 4.0;
pub const TILT_PERSPECTIVE_PX: f32 = 800.0;

// Contact form (ms)
pub const FORM_SEND_DELAY_MS: i32 = 1800;
pub const FORM_FEEDBACK_CLEAR_MS: i32 = 8000;
