use foundation::math::Vec3;
use foundation::math::easing::ease_in_out_cubic;

/// A camera position plus the point it frames.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraPose {
    pub fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
struct Transition {
    from: CameraPose,
    to: CameraPose,
    duration_s: f64,
    elapsed_s: f64,
}

/// Smoothly interpolating camera with named preset poses.
///
/// At most one transition is in flight; a request made while one is running
/// is dropped, so a reveal burst cannot yank the camera mid-move. Position
/// and look-at interpolate together with ease-in-out-cubic.
#[derive(Debug)]
pub struct CameraRig {
    pose: CameraPose,
    home: CameraPose,
    presets: Vec<(String, CameraPose)>,
    transition: Option<Transition>,
}

impl CameraRig {
    /// `home` is both the starting pose and the overview-return target.
    pub fn new(home: CameraPose) -> Self {
        Self {
            pose: home,
            home,
            presets: Vec::new(),
            transition: None,
        }
    }

    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    pub fn home(&self) -> CameraPose {
        self.home
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    pub fn add_preset(&mut self, name: &str, pose: CameraPose) {
        match self.presets.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = pose,
            None => self.presets.push((name.to_string(), pose)),
        }
    }

    pub fn preset(&self, name: &str) -> Option<CameraPose> {
        self.presets
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, pose)| *pose)
    }

    /// Starts a transition unless one is already running.
    ///
    /// Returns `true` if the request was accepted.
    pub fn transition_to(&mut self, target: CameraPose, duration_s: f64) -> bool {
        if self.transition.is_some() {
            return false;
        }
        if duration_s <= 0.0 {
            self.pose = target;
            return true;
        }
        self.transition = Some(Transition {
            from: self.pose,
            to: target,
            duration_s,
            elapsed_s: 0.0,
        });
        true
    }

    pub fn go_to_preset(&mut self, name: &str, duration_s: f64) -> bool {
        match self.preset(name) {
            Some(pose) => self.transition_to(pose, duration_s),
            None => false,
        }
    }

    pub fn return_home(&mut self, duration_s: f64) -> bool {
        let home = self.home;
        self.transition_to(home, duration_s)
    }

    pub fn update(&mut self, dt_s: f64) {
        let Some(mut transition) = self.transition else {
            return;
        };
        transition.elapsed_s += dt_s;
        let progress = (transition.elapsed_s / transition.duration_s).clamp(0.0, 1.0);
        let eased = ease_in_out_cubic(progress);

        self.pose = CameraPose {
            position: transition.from.position.lerp(transition.to.position, eased),
            look_at: transition.from.look_at.lerp(transition.to.look_at, eased),
        };

        if progress >= 1.0 {
            self.pose = transition.to;
            self.transition = None;
        } else {
            self.transition = Some(transition);
        }
    }
}
