// Page behavior tuning constants.

// Breakpoints and scroll thresholds (CSS pixels)
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0; // below this the glow/parallax are off
pub const NAVBAR_SCROLLED_PX: f32 = 50.0; // navbar gains the "scrolled" class
pub const SCROLL_TOP_SHOW_PX: f32 = 500.0; // scroll-to-top button becomes visible
pub const ACTIVE_SECTION_MARGIN_PX: f32 = 100.0; // lookahead when picking the active section
pub const ANCHOR_SCROLL_OFFSET_PX: f64 = 80.0; // fixed navbar height compensated on anchor jumps

// Navigation accent
pub const ACTIVE_LINK_COLOR: &str = "#4a9eff";

// Particle cloud
pub const PARTICLE_COUNT_MOBILE: usize = 300;
pub const PARTICLE_COUNT_DESKTOP: usize = 800;
pub const PARTICLE_SPREAD: f32 = 20.0; // cube side length the cloud is scattered over
pub const PARTICLE_SIZE: f32 = 0.05; // world-space billboard half-size
pub const PARTICLE_OPACITY: f32 = 0.6;
pub const PARTICLE_HUE_BASE: f32 = 0.6; // blue
pub const PARTICLE_HUE_SPAN: f32 = 0.2; // up to purple
pub const PARTICLE_SATURATION: f32 = 0.8;
pub const PARTICLE_LIGHTNESS: f32 = 0.6;
pub const PARTICLE_SPIN_PER_SEC: f32 = 0.03; // idle yaw rate (radians)
pub const PARTICLE_SCROLL_SPIN: f32 = 3.0e-4; // extra yaw per scrolled px
pub const PARTICLE_SCROLL_TILT: f32 = 1.0e-4; // pitch per scrolled px
pub const PARTICLE_SCROLL_SINK: f32 = 2.0e-3; // world units the cloud sinks per scrolled px

// Wireframe shapes
pub const SHAPE_COUNT: usize = 5;
pub const SHAPE_SPREAD: [f32; 3] = [15.0, 15.0, 10.0]; // placement range per axis
pub const SHAPE_ROT_X_PER_SEC: f32 = 0.18; // base rates, scaled by (index + 1)
pub const SHAPE_ROT_Y_PER_SEC: f32 = 0.30;
pub const SHAPE_ROT_Z_PER_SEC: f32 = 0.12;
pub const SHAPE_BOB_PER_SEC: f32 = 0.12; // vertical drift amplitude rate
pub const SHAPE_DEPTH_AMPLITUDE: f32 = 2.0; // scroll-responsive z excursion
pub const SHAPE_DEPTH_SCROLL_FREQ: f32 = 1.0e-3; // phase advance per scrolled px
pub const SHAPE_OPACITY: f32 = 0.15;
pub const SHAPE_BASE_COLOR: [f32; 3] = [0.290, 0.620, 1.000]; // #4a9eff
pub const SHAPE_EMISSIVE_COLOR: [f32; 3] = [0.420, 0.486, 0.965]; // #6b7cf6
pub const AMBIENT_LIGHT_STRENGTH: f32 = 0.3;
pub const EMISSIVE_STRENGTH: f32 = 0.2;

// Camera
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const PARALLAX_RANGE: f32 = 0.05; // max camera offset from a fully deflected pointer
pub const PARALLAX_RESPONSE_PER_SEC: f32 = 3.0; // damped-follow rate

// Fog, matching the darkest palette stop so the scene fades into the page
pub const FOG_COLOR: [f32; 3] = [0.039, 0.055, 0.153]; // #0a0e27
pub const FOG_NEAR: f32 = 1.0;
pub const FOG_FAR: f32 = 15.0;

// Card tilt
pub const CERT_TILT_DIVISOR: f32 = 10.0;
pub const CONTACT_TILT_DIVISOR: f32 = 15.0;

// Frame pacing
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp deltas after a background tab resumes
