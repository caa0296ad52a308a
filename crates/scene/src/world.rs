use crate::components::{Footprint, Transform, Visibility};
use crate::entity::EntityId;
use foundation::handles::Handle;
use foundation::math::Vec3;

/// Registry of building volumes.
///
/// One building id owns one or more volumes, kept in spawn order. The
/// registry owns component storage; callers own the geometry they render
/// and only read transforms back each frame.
///
/// Lookup contract:
/// - Unknown building ids and unknown entities are silent no-ops, never
///   errors.
#[derive(Debug, Default)]
pub struct World {
    next_index: u32,
    transforms: Vec<Option<Transform>>,
    visibility: Vec<Option<Visibility>>,
    footprints: Vec<Option<Footprint>>,
    buildings: Vec<(String, Vec<EntityId>)>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one volume under `building`.
    ///
    /// The volume starts hidden at zero scale; `transform.position.z` is
    /// recorded as the resting elevation the reveal animation returns to.
    pub fn spawn_volume(&mut self, building: &str, transform: Transform, height: f64) -> EntityId {
        let id = EntityId(Handle::new(self.next_index, 0));
        self.next_index += 1;
        let idx = id.index() as usize;
        self.ensure_capacity(idx);

        let base_z = transform.position.z;
        self.transforms[idx] = Some(Transform {
            scale: Vec3::ZERO,
            ..transform
        });
        self.visibility[idx] = Some(Visibility::hidden());
        self.footprints[idx] = Some(Footprint::new(height, base_z));

        match self.buildings.iter_mut().find(|(name, _)| name == building) {
            Some((_, volumes)) => volumes.push(id),
            None => self.buildings.push((building.to_string(), vec![id])),
        }
        id
    }

    /// All volumes for `building`, in spawn order; empty for unknown ids.
    pub fn volumes(&self, building: &str) -> &[EntityId] {
        self.buildings
            .iter()
            .find(|(name, _)| name == building)
            .map(|(_, volumes)| volumes.as_slice())
            .unwrap_or(&[])
    }

    /// Registered building ids, in registration order.
    pub fn building_ids(&self) -> impl Iterator<Item = &str> {
        self.buildings.iter().map(|(name, _)| name.as_str())
    }

    pub fn volume_count(&self) -> usize {
        self.buildings.iter().map(|(_, volumes)| volumes.len()).sum()
    }

    pub fn transform(&self, entity: EntityId) -> Option<Transform> {
        self.transforms.get(entity.index() as usize).and_then(|t| *t)
    }

    pub fn transform_mut(&mut self, entity: EntityId) -> Option<&mut Transform> {
        self.transforms
            .get_mut(entity.index() as usize)
            .and_then(|t| t.as_mut())
    }

    pub fn visibility(&self, entity: EntityId) -> Option<Visibility> {
        self.visibility.get(entity.index() as usize).and_then(|v| *v)
    }

    pub fn footprint(&self, entity: EntityId) -> Option<Footprint> {
        self.footprints.get(entity.index() as usize).and_then(|f| *f)
    }

    pub fn set_visible(&mut self, entity: EntityId, visible: bool) {
        if let Some(visibility) = self
            .visibility
            .get_mut(entity.index() as usize)
            .and_then(|v| v.as_mut())
        {
            visibility.visible = visible;
        }
    }

    /// Forces the hidden sentinel: invisible, zero scale, resting position,
    /// no tilt. Safe to call mid-animation (the hard-cut path does).
    pub fn set_hidden(&mut self, entity: EntityId) {
        let Some(footprint) = self.footprint(entity) else {
            return;
        };
        if let Some(visibility) = self
            .visibility
            .get_mut(entity.index() as usize)
            .and_then(|v| v.as_mut())
        {
            visibility.visible = false;
        }
        if let Some(transform) = self.transform_mut(entity) {
            transform.scale = Vec3::ZERO;
            transform.position.z = footprint.base_z;
            transform.tilt_rad = 0.0;
        }
    }

    /// Forces the fully-shown state: visible, unit scale, resting position,
    /// no tilt. Idempotent.
    pub fn set_fully_shown(&mut self, entity: EntityId) {
        let Some(footprint) = self.footprint(entity) else {
            return;
        };
        if let Some(visibility) = self
            .visibility
            .get_mut(entity.index() as usize)
            .and_then(|v| v.as_mut())
        {
            visibility.visible = true;
        }
        if let Some(transform) = self.transform_mut(entity) {
            transform.scale = Vec3::splat(1.0);
            transform.position.z = footprint.base_z;
            transform.tilt_rad = 0.0;
        }
    }

    /// Drops every registration. Caller-owned geometry is untouched.
    pub fn clear(&mut self) {
        self.next_index = 0;
        self.transforms.clear();
        self.visibility.clear();
        self.footprints.clear();
        self.buildings.clear();
    }

    fn ensure_capacity(&mut self, idx: usize) {
        if self.transforms.len() <= idx {
            let new_len = idx + 1;
            self.transforms.resize(new_len, None);
            self.visibility.resize(new_len, None);
            self.footprints.resize(new_len, None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::World;
    use crate::components::Transform;
    use foundation::math::Vec3;

    #[test]
    fn spawn_registers_hidden_at_zero_scale() {
        let mut world = World::new();
        let e = world.spawn_volume("library", Transform::at(Vec3::new(4.0, 5.0, 1.0)), 12.0);

        assert!(!world.visibility(e).unwrap().visible);
        assert_eq!(world.transform(e).unwrap().scale, Vec3::ZERO);
        let fp = world.footprint(e).unwrap();
        assert_eq!(fp.height, 12.0);
        assert_eq!(fp.base_z, 1.0);
    }

    #[test]
    fn volumes_group_per_building_in_spawn_order() {
        let mut world = World::new();
        let a = world.spawn_volume("library", Transform::identity(), 10.0);
        let b = world.spawn_volume("dorm1", Transform::identity(), 8.0);
        let c = world.spawn_volume("library", Transform::identity(), 6.0);

        assert_eq!(world.volumes("library"), &[a, c]);
        assert_eq!(world.volumes("dorm1"), &[b]);
        assert!(world.volumes("ghost").is_empty());
        assert_eq!(world.volume_count(), 3);

        let ids: Vec<&str> = world.building_ids().collect();
        assert_eq!(ids, vec!["library", "dorm1"]);
    }

    #[test]
    fn set_fully_shown_is_idempotent() {
        let mut world = World::new();
        let e = world.spawn_volume("library", Transform::at(Vec3::new(0.0, 0.0, 2.0)), 10.0);

        world.set_fully_shown(e);
        let first = world.transform(e).unwrap();
        world.set_fully_shown(e);
        let second = world.transform(e).unwrap();

        assert_eq!(first, second);
        assert!(world.visibility(e).unwrap().visible);
        assert_eq!(first.scale, Vec3::splat(1.0));
        assert_eq!(first.position.z, 2.0);
    }

    #[test]
    fn set_hidden_restores_resting_position() {
        let mut world = World::new();
        let e = world.spawn_volume("library", Transform::at(Vec3::new(0.0, 0.0, 2.0)), 10.0);
        world.set_fully_shown(e);

        // Perturb mid-animation state, then hide.
        {
            let t = world.transform_mut(e).unwrap();
            t.position.z = -5.0;
            t.tilt_rad = 0.04;
        }
        world.set_hidden(e);

        let t = world.transform(e).unwrap();
        assert!(!world.visibility(e).unwrap().visible);
        assert_eq!(t.scale, Vec3::ZERO);
        assert_eq!(t.position.z, 2.0);
        assert_eq!(t.tilt_rad, 0.0);
    }

    #[test]
    fn unknown_entities_are_no_ops() {
        let mut world = World::new();
        let e = world.spawn_volume("library", Transform::identity(), 10.0);
        world.clear();

        assert!(world.transform(e).is_none());
        world.set_hidden(e);
        world.set_fully_shown(e);
        assert_eq!(world.volume_count(), 0);
    }
}
