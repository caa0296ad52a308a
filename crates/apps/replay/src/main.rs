use std::env;
use std::process::ExitCode;

use camera::{CameraPose, CameraRig, FocusConfig, FocusCoordinator};
use formats::{load_manifest, spawn_volumes, timeline_index};
use foundation::math::Vec3;
use reveal::hooks::RevealHooks;
use reveal::{RevealAnimator, RevealConfig, TimelinePlayer};
use runtime::{EventBus, FixedTimestep, Frame};
use scene::World;
use scene::entity::EntityId;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

const FRAME_HZ: f64 = 60.0;

/// Forwards driver notifications to the camera coordinator and records them
/// on the event bus for the end-of-run summary.
struct ReplayHooks<'a> {
    coordinator: &'a mut FocusCoordinator,
    bus: &'a mut EventBus,
    frame: Frame,
}

impl RevealHooks for ReplayHooks<'_> {
    fn reveal_started(&mut self, building: &str, entity: EntityId, ground: Vec3, height: f64) {
        self.bus
            .emit(self.frame, "reveal_started", building.to_string());
        self.coordinator
            .reveal_started(building, entity, ground, height);
    }

    fn reveal_completed(&mut self, building: &str, entity: EntityId) {
        self.bus
            .emit(self.frame, "reveal_completed", building.to_string());
        self.coordinator.reveal_completed(building, entity);
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let Some(manifest_path) = args.next() else {
        error!("usage: replay <campus.manifest.json> [frames]");
        return ExitCode::FAILURE;
    };

    let manifest = match load_manifest(&manifest_path) {
        Ok(manifest) => manifest,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let year_interval_s: f64 = env::var("REPLAY_YEAR_INTERVAL_S")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(20.0);

    let mut world = World::new();
    let spawned = spawn_volumes(&manifest, &mut world);
    let index = timeline_index(&manifest);
    let years = index.years();
    info!(
        campus = manifest.campus_id.as_str(),
        spawned,
        years = years.len(),
        "campus loaded"
    );

    let frames: u64 = match args.next() {
        Some(raw) => match raw.parse() {
            Ok(frames) => frames,
            Err(_) => {
                error!(frames = raw.as_str(), "frame count is not a number");
                return ExitCode::FAILURE;
            }
        },
        // Enough to play every year plus a settle tail.
        None => ((years.len() as f64 * year_interval_s + 10.0) * FRAME_HZ) as u64,
    };

    let animator = RevealAnimator::new(index, RevealConfig::default());
    for entry in animator.timeline().entries() {
        for building in &entry.buildings {
            if let Some(info) = animator.info_for(building) {
                debug!(
                    year = info.year,
                    name = info.display_name.as_str(),
                    "indexed building"
                );
            }
        }
    }

    let overview = CameraPose::new(Vec3::new(200.0, -200.0, 100.0), Vec3::new(0.0, 150.0, 0.0));
    let mut rig = CameraRig::new(overview);
    rig.add_preset(
        "aerial",
        CameraPose::new(Vec3::new(0.0, -500.0, 200.0), Vec3::new(0.0, 150.0, 0.0)),
    );

    run(
        world,
        animator,
        TimelinePlayer::new(years, year_interval_s),
        FocusCoordinator::new(rig, FocusConfig::default()),
        frames,
    );
    ExitCode::SUCCESS
}

fn run(
    mut world: World,
    mut animator: RevealAnimator,
    mut player: TimelinePlayer,
    mut coordinator: FocusCoordinator,
    frames: u64,
) {
    let mut bus = EventBus::new();
    let mut steps = FixedTimestep::new(FRAME_HZ);
    player.play();

    for _ in 0..frames {
        let frame = steps.step();

        if let Some(year) = player.tick(frame.dt_s) {
            info!(year, "advancing timeline");
            animator.show_up_to_year(&mut world, year, true);
        }

        let mut hooks = ReplayHooks {
            coordinator: &mut coordinator,
            bus: &mut bus,
            frame,
        };
        animator.tick(&mut world, frame.dt_s, &mut hooks);

        coordinator.update(frame.dt_s);
        for burst in coordinator.drain_bursts() {
            debug!(
                x = burst.center.x,
                y = burst.center.y,
                radius = burst.radius,
                "dust burst"
            );
        }
    }

    let pose = coordinator.pose();
    info!(
        frames,
        started = bus.events_of_kind("reveal_started").count(),
        completed = bus.events_of_kind("reveal_completed").count(),
        camera_x = pose.position.x,
        camera_y = pose.position.y,
        camera_z = pose.position.z,
        "replay finished"
    );
}
