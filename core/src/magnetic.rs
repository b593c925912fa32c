//! Math behind the cursor-proximity pull on interactive elements. The app
//! layer owns measurement and paint; everything here is plain arithmetic so
//! it tests on the host.

pub const DEFAULT_RADIUS_PX: f32 = 80.0;
pub const DEFAULT_STRENGTH: f32 = 0.5;

pub const SPRING_STIFFNESS: f32 = 150.0;
pub const SPRING_DAMPING: f32 = 15.0;
pub const SPRING_MASS: f32 = 0.1;

// The default tuning decays at 150/s, which a whole-frame Euler step cannot
// integrate stably, so a step is cut into fixed substeps and long frame gaps
// (backgrounded tab) are capped.
const MAX_STEP_DT_S: f32 = 0.1;
const SUBSTEP_DT_S: f32 = 1.0 / 240.0;
const SETTLE_POSITION_EPSILON: f32 = 0.05;
const SETTLE_VELOCITY_EPSILON: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagneticParams {
    pub radius: f32,
    pub strength: f32,
}

impl Default for MagneticParams {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS_PX,
            strength: DEFAULT_STRENGTH,
        }
    }
}

/// Displacement of an element toward the pointer: the pointer-to-center
/// offset scaled by `strength` and a linear falloff, full at distance zero
/// and gone at the activation radius.
pub fn displacement(pointer: (f32, f32), center: (f32, f32), params: &MagneticParams) -> (f32, f32) {
    if params.radius <= 0.0 || params.strength <= 0.0 {
        return (0.0, 0.0);
    }
    let dx = pointer.0 - center.0;
    let dy = pointer.1 - center.1;
    let distance = (dx * dx + dy * dy).sqrt();
    if distance >= params.radius {
        return (0.0, 0.0);
    }
    let scale = params.strength * (1.0 - distance / params.radius);
    (dx * scale, dy * scale)
}

/// Damped spring along one axis, stepped with semi-implicit Euler. The
/// default tuning is overdamped, so the offset settles without overshoot
/// jitter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    position: f32,
    velocity: f32,
}

impl Spring {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            position: 0.0,
            velocity: 0.0,
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn step(&mut self, target: f32, dt: f32) -> f32 {
        let mut remaining = dt.clamp(0.0, MAX_STEP_DT_S);
        if self.mass <= 0.0 {
            return self.position;
        }
        while remaining > 0.0 {
            let sub = remaining.min(SUBSTEP_DT_S);
            let force = self.stiffness * (target - self.position) - self.damping * self.velocity;
            self.velocity += force / self.mass * sub;
            self.position += self.velocity * sub;
            remaining -= sub;
        }
        self.position
    }

    pub fn settled(&self, target: f32) -> bool {
        (self.position - target).abs() < SETTLE_POSITION_EPSILON
            && self.velocity.abs() < SETTLE_VELOCITY_EPSILON
    }

    pub fn snap(&mut self, value: f32) {
        self.position = value;
        self.velocity = 0.0;
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(SPRING_STIFFNESS, SPRING_DAMPING, SPRING_MASS)
    }
}
