/// Boundary glue constants: overlay element ids and the packed snapshot
/// layout shared with the JS renderer.

// Overlay element ids
pub const CONTROLS_HINT_ID: &str = "controls-hint";
pub const RETURN_HOME_ID: &str = "return-home";
pub const SESSION_START_ID: &str = "session-start";
pub const SESSION_STOP_ID: &str = "session-stop";
pub const SESSION_DURATION_ID: &str = "session-duration";

// Ambient track served alongside the page
pub const MEDITATION_TRACK_URL: &str = "/sounds/meditation.mp3";

// Float32Array snapshot layout: one header record, then one record per spot.
// Header: avatar x/z, camera azimuth/polar/distance, target x/y/z,
// recovery-available flag, session-running flag.
pub const SNAPSHOT_HEADER_FLOATS: usize = 10;
// Per spot: position x/y/z, color r/g/b, emissive, beacon flag, beam flag.
pub const SNAPSHOT_SPOT_FLOATS: usize = 9;
