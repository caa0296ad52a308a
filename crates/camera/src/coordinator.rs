use foundation::math::Vec3;
use reveal::hooks::RevealHooks;
use scene::entity::EntityId;

use crate::rig::{CameraPose, CameraRig};

/// Transient particle-burst request at a reveal site.
///
/// The coordinator only queues requests; a renderer drains and spawns the
/// actual particles.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DustBurst {
    pub center: Vec3,
    pub radius: f64,
    pub duration_s: f64,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FocusConfig {
    /// Camera move length when framing a revealed volume.
    pub focus_duration_s: f64,
    /// Camera move length for the overview return.
    pub return_duration_s: f64,
    /// Seconds without a reveal before returning to the overview.
    pub idle_return_s: f64,
    /// Framing distance per unit of volume height.
    pub frame_distance_scale: f64,
    /// Minimum framing distance, keeps small volumes from filling the view.
    pub frame_distance_min: f64,
    pub burst_duration_s: f64,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            focus_duration_s: 2.0,
            return_duration_s: 2.0,
            idle_return_s: 5.0,
            frame_distance_scale: 3.0,
            frame_distance_min: 50.0,
            burst_duration_s: 1.5,
        }
    }
}

/// Camera/effect side system for the reveal driver.
///
/// Listens for reveal starts: queues a dust burst at the ground footprint,
/// asks the rig to frame the volume, and arms the idle timer. Once
/// `idle_return_s` passes without a reveal, requests one overview return.
pub struct FocusCoordinator {
    rig: CameraRig,
    config: FocusConfig,
    bursts: Vec<DustBurst>,
    idle_s: f64,
    returned_home: bool,
}

impl FocusCoordinator {
    pub fn new(rig: CameraRig, config: FocusConfig) -> Self {
        Self {
            rig,
            config,
            bursts: Vec::new(),
            idle_s: 0.0,
            // Nothing has revealed yet, so there is nothing to return from.
            returned_home: true,
        }
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn rig_mut(&mut self) -> &mut CameraRig {
        &mut self.rig
    }

    pub fn pose(&self) -> CameraPose {
        self.rig.pose()
    }

    pub fn pending_bursts(&self) -> usize {
        self.bursts.len()
    }

    /// Hands queued burst requests to the renderer.
    pub fn drain_bursts(&mut self) -> Vec<DustBurst> {
        std::mem::take(&mut self.bursts)
    }

    /// Advances the rig and the idle clock.
    pub fn update(&mut self, dt_s: f64) {
        self.rig.update(dt_s);

        self.idle_s += dt_s;
        if !self.returned_home && self.idle_s >= self.config.idle_return_s {
            self.rig.return_home(self.config.return_duration_s);
            self.returned_home = true;
        }
    }

    /// Camera pose that frames a volume of `height` standing at `ground`.
    ///
    /// Offsets follow the original viewer's framing ratios; the distance is
    /// derived from the vertical extent since footprint sizes are not
    /// tracked here.
    fn framing_pose(&self, ground: Vec3, height: f64) -> CameraPose {
        let distance =
            (height * self.config.frame_distance_scale).max(self.config.frame_distance_min);
        let position = ground + Vec3::new(distance * 0.5, distance * 0.3, distance * 0.8);
        let look_at = ground + Vec3::new(0.0, 0.0, height * 0.5);
        CameraPose::new(position, look_at)
    }
}

impl RevealHooks for FocusCoordinator {
    fn reveal_started(&mut self, _building: &str, _entity: EntityId, ground: Vec3, height: f64) {
        self.bursts.push(DustBurst {
            center: ground,
            radius: (height * 0.5).max(1.0),
            duration_s: self.config.burst_duration_s,
        });

        let target = self.framing_pose(ground, height);
        self.rig.transition_to(target, self.config.focus_duration_s);

        self.idle_s = 0.0;
        self.returned_home = false;
    }
}
