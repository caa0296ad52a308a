use foundation::math::Vec3;
use reveal::timeline::TimelineIndex;
use scene::World;
use scene::components::Transform;

use crate::campus_manifest::CampusManifest;

/// Builds the timeline index from a manifest.
///
/// Keys are parsed numerically and the index sorts by year, so `"995"`
/// lands before `"2001"` regardless of the map's lexicographic order. The
/// loader already rejected non-numeric keys; if this is fed an unvalidated
/// manifest, bad keys are skipped rather than propagated.
pub fn timeline_index(manifest: &CampusManifest) -> TimelineIndex {
    let mut entries = Vec::new();
    for (key, buildings) in &manifest.timeline {
        let Ok(year) = key.trim().parse::<i32>() else {
            continue;
        };
        entries.push((year, buildings.clone()));
    }

    let mut index = TimelineIndex::from_entries(entries);
    for (building, facts) in &manifest.buildings {
        if let Some(display_name) = &facts.display_name {
            index.set_display_name(building, display_name);
        }
    }
    index
}

/// Spawns every placed volume into `world`, hidden.
///
/// Returns the number of volumes spawned. Placements naming buildings
/// absent from the timeline still spawn; they just never reveal.
pub fn spawn_volumes(manifest: &CampusManifest, world: &mut World) -> usize {
    for placement in &manifest.volumes {
        let [x, y, z] = placement.position;
        world.spawn_volume(
            &placement.building,
            Transform::at(Vec3::new(x, y, z)),
            placement.height,
        );
    }
    manifest.volumes.len()
}
