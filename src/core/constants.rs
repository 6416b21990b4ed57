// Shared simulation tuning constants used by the core and the web frontend.

// Avatar movement
pub const AVATAR_STEP_PER_TICK: f32 = 0.15; // world units per held direction flag
pub const CAMERA_FOLLOW_HEIGHT: f32 = 1.0; // look-target height above the avatar

// Meditation spot activation
pub const ACTIVATION_RADIUS: f32 = 1.5; // ground-plane distance to begin warmup
pub const WARMUP_STAGE_MS: f64 = 500.0; // residency per warmup stage
pub const TERMINAL_STAGE: u8 = 3; // stage at which the spot is fully active

// Warmup stage palette (stage 0 uses the spot's own active color)
pub const STAGE_GOLD: [f32; 3] = [1.0, 0.843, 0.0]; // #FFD700
pub const STAGE_WARM_RED: [f32; 3] = [1.0, 0.42, 0.42]; // #FF6B6B
pub const STAGE_SIGNATURE_BLUE: [f32; 3] = [0.29, 0.565, 0.886]; // #4A90E2

// Spot visual feedback
pub const EMISSIVE_ACTIVE: f32 = 1.0;
pub const EMISSIVE_IDLE: f32 = 0.5;
pub const COLOR_EASE_PER_SEC: f32 = 3.0; // display color approach rate
pub const PULSE_DEPTH: f32 = 0.3; // terminal pulse oscillates in [1-d, 1+d]

// Ambient track fades
pub const AUDIO_TARGET_GAIN: f32 = 0.5;
pub const AUDIO_FADE_IN_SEC: f64 = 2.0;
pub const AUDIO_FADE_OUT_SEC: f64 = 1.0;

// Recovery ("return home")
pub const RECOVERY_CHECK_INTERVAL_MS: f64 = 1000.0;
pub const RECOVERY_DISTANCE_THRESHOLD: f32 = 25.0; // origin distance that raises the flag
pub const WORLD_BOUNDARY: f32 = 30.0; // per-axis magnitude that raises the flag
pub const RECOVERY_DURATION_MS: f64 = 1000.0;

// Resting camera framing (orbit coordinates around the look target)
pub const REST_CAMERA_DISTANCE: f32 = 13.3;
pub const REST_CAMERA_POLAR: f32 = 1.02;
pub const REST_CAMERA_AZIMUTH: f32 = std::f32::consts::FRAC_PI_4;
pub const REST_TARGET_HEIGHT: f32 = 1.0;

// Orbit constraints advertised to the external camera rig
pub const CAMERA_MAX_POLAR: f32 = std::f32::consts::PI / 2.1;
pub const CAMERA_MIN_DISTANCE: f32 = 5.0;
pub const CAMERA_MAX_DISTANCE: f32 = 25.0;

// Guided session durations offered by the overlay (minutes)
pub const SESSION_DURATIONS_MIN: [u32; 3] = [5, 10, 15];
