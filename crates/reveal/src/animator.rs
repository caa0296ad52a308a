use foundation::math::Vec3;
use foundation::math::easing::ease_out_back;
use scene::World;
use tracing::debug;

use crate::hooks::RevealHooks;
use crate::queue::{RevealJob, RevealQueue};
use crate::timeline::{BuildingInfo, TimelineIndex};

/// Tuning for the reveal scheduler and driver.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RevealConfig {
    /// Delay between consecutive newly-revealed buildings in one batch.
    pub stagger_s: f64,
    /// Length of one reveal animation.
    pub duration_s: f64,
    /// A volume with `scale.x` above this counts as fully shown.
    pub shown_scale_threshold: f64,
    /// Peak tilt of the settle wobble.
    pub wobble_rad: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            stagger_s: 1.0,
            duration_s: 2.0,
            shown_scale_threshold: 0.9,
            wobble_rad: 0.05,
        }
    }
}

/// Timeline-driven reveal scheduler and animation driver.
///
/// One instance owns the single job queue; `tick` is invoked once per frame
/// by the external loop with a delta time. There is no self-scheduling and
/// no wall clock: all timing accumulates from tick deltas.
///
/// State machine per job: Pending -> Active -> Complete (removed).
/// - Pending jobs count their delay down, frozen while paused.
/// - Active jobs run to completion regardless of pause ("finish current,
///   don't start new").
#[derive(Debug)]
pub struct RevealAnimator {
    timeline: TimelineIndex,
    config: RevealConfig,
    queue: RevealQueue,
    paused: bool,
    driving: bool,
}

impl RevealAnimator {
    pub fn new(timeline: TimelineIndex, config: RevealConfig) -> Self {
        Self {
            timeline,
            config,
            queue: RevealQueue::new(),
            paused: false,
            driving: false,
        }
    }

    pub fn timeline(&self) -> &TimelineIndex {
        &self.timeline
    }

    pub fn config(&self) -> RevealConfig {
        self.config
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// True while the queue is non-empty and frame ticks have work to do.
    pub fn is_driving(&self) -> bool {
        self.driving
    }

    pub fn queued_len(&self) -> usize {
        self.queue.len()
    }

    /// Freezes pending-job countdowns. Active jobs keep running.
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused == paused {
            return;
        }
        self.paused = paused;
        if paused {
            debug!("reveal animator paused");
        } else {
            debug!("reveal animator resumed");
        }
    }

    /// Construction year and display name for `building`, if indexed.
    pub fn info_for(&self, building: &str) -> Option<BuildingInfo> {
        self.timeline.info_for(building)
    }

    /// Brings the world to the visibility state of `year`.
    ///
    /// Buildings past `year` are hard-cut: hidden immediately and their
    /// queued or active jobs removed. Buildings at or before `year` are
    /// either snapped fully shown (`animate == false`, idempotent) or
    /// enqueued for a staggered reveal. Stagger counts newly-revealed
    /// buildings, not volumes, and new batches append after the current
    /// queue tail so repeated calls never collide with in-flight work.
    pub fn show_up_to_year(&mut self, world: &mut World, year: i32, animate: bool) {
        let target = self.timeline.buildings_through(year);

        // Hard cut everything past the target year, mid-flight or not.
        let cut: Vec<String> = world
            .building_ids()
            .filter(|building| !target.iter().any(|t| t == building))
            .map(str::to_string)
            .collect();
        for building in &cut {
            let removed = self.queue.cancel_building(building);
            if removed > 0 {
                debug!(building = building.as_str(), removed, "hard cut canceled reveals");
            }
            for entity in world.volumes(building).to_vec() {
                world.set_hidden(entity);
            }
        }

        if animate {
            let offset_s = self.queue.tail_s();
            let mut batch_index = 0usize;
            for building in &target {
                let volumes = world.volumes(building);
                if volumes.is_empty() {
                    continue;
                }
                let already_shown = volumes.iter().any(|entity| {
                    let visible = world.visibility(*entity).is_some_and(|v| v.visible);
                    let scale_x = world.transform(*entity).map(|t| t.scale.x).unwrap_or(0.0);
                    visible && scale_x > self.config.shown_scale_threshold
                });
                if already_shown || self.queue.contains_building(building) {
                    continue;
                }

                let delay_s = offset_s + batch_index as f64 * self.config.stagger_s;
                for entity in volumes.to_vec() {
                    let height = world.footprint(entity).map(|f| f.height).unwrap_or(0.0);
                    self.queue.push(RevealJob::new(
                        entity,
                        building,
                        height,
                        delay_s,
                        self.config.duration_s,
                    ));
                }
                debug!(building = *building, delay_s, "reveal enqueued");
                batch_index += 1;
            }
        } else {
            // Snapping to full scale supersedes any in-flight reveal.
            for building in &target {
                let volumes = world.volumes(building).to_vec();
                if volumes.is_empty() {
                    continue;
                }
                self.queue.cancel_building(building);
                for entity in volumes {
                    world.set_fully_shown(entity);
                }
            }
        }

        self.driving = !self.queue.is_empty();
    }

    /// Advances every queued job by `dt_s` seconds.
    pub fn tick(&mut self, world: &mut World, dt_s: f64, hooks: &mut dyn RevealHooks) {
        if !self.driving {
            return;
        }

        let paused = self.paused;
        let wobble_rad = self.config.wobble_rad;

        for job in self.queue.iter_mut() {
            if !job.started {
                if paused {
                    continue;
                }
                job.delay_remaining_s -= dt_s;
                if job.delay_remaining_s <= 0.0 {
                    job.started = true;
                    job.elapsed_s = 0.0;
                    activate(world, job, hooks);
                }
                continue;
            }

            job.elapsed_s += dt_s;
            let progress = (job.elapsed_s / job.duration_s).clamp(0.0, 1.0);
            if progress >= 1.0 {
                finish(world, job, hooks);
            } else {
                apply_progress(world, job, progress, wobble_rad);
            }
        }

        self.queue
            .retain(|job| !(job.started && job.elapsed_s >= job.duration_s));
        if self.queue.is_empty() {
            self.driving = false;
        }
    }

    /// Clears the queue and empties the registry. Geometry stays with the
    /// caller.
    pub fn dispose(&mut self, world: &mut World) {
        self.queue.clear();
        self.driving = false;
        world.clear();
        debug!("reveal animator disposed");
    }
}

/// Pending -> Active transition: the volume becomes visible at zero scale,
/// buried one full height below its resting position.
fn activate(world: &mut World, job: &RevealJob, hooks: &mut dyn RevealHooks) {
    let Some(footprint) = world.footprint(job.entity) else {
        return;
    };
    world.set_visible(job.entity, true);
    let Some(transform) = world.transform_mut(job.entity) else {
        return;
    };
    transform.scale = Vec3::ZERO;
    transform.position.z = footprint.buried_z();
    transform.tilt_rad = 0.0;
    let ground = Vec3::new(transform.position.x, transform.position.y, footprint.base_z);

    debug!(building = job.building.as_str(), "reveal started");
    hooks.reveal_started(&job.building, job.entity, ground, footprint.height);
}

fn apply_progress(world: &mut World, job: &RevealJob, progress: f64, wobble_rad: f64) {
    let Some(footprint) = world.footprint(job.entity) else {
        return;
    };
    let Some(transform) = world.transform_mut(job.entity) else {
        return;
    };
    let eased = ease_out_back(progress);
    transform.scale = Vec3::splat(eased);
    transform.position.z = footprint.buried_z() + footprint.height * eased;
    transform.tilt_rad = if progress < 0.5 {
        (progress * std::f64::consts::TAU).sin() * wobble_rad * (1.0 - 2.0 * progress)
    } else {
        0.0
    };
}

/// Active -> Complete transition: exact final state, no residual wobble.
fn finish(world: &mut World, job: &RevealJob, hooks: &mut dyn RevealHooks) {
    world.set_fully_shown(job.entity);
    debug!(building = job.building.as_str(), "reveal completed");
    hooks.reveal_completed(&job.building, job.entity);
}
