use foundation::math::Vec3;
use scene::entity::EntityId;

/// Side-effect seam for the animation driver.
///
/// The driver calls these as jobs activate and complete; the camera/effect
/// coordinator is the main implementor. Default bodies do nothing, so
/// implementors override only what they consume.
pub trait RevealHooks {
    /// A job activated: the volume just became visible at its buried
    /// position. `ground` is the volume's footprint point at resting
    /// elevation.
    fn reveal_started(&mut self, building: &str, entity: EntityId, ground: Vec3, height: f64) {
        let _ = (building, entity, ground, height);
    }

    /// A job finished: the volume is at full scale and resting position.
    fn reveal_completed(&mut self, building: &str, entity: EntityId) {
        let _ = (building, entity);
    }
}

/// Hooks that ignore every notification.
pub struct NullHooks;

impl RevealHooks for NullHooks {}
