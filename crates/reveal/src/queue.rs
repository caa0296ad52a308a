use scene::entity::EntityId;

/// One scheduled reveal, as plain data.
///
/// Timing is accumulated from tick deltas; no wall clock is consulted.
/// `delay_remaining_s` counts down while the job is pending, `elapsed_s`
/// accumulates once it has started.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealJob {
    pub entity: EntityId,
    pub building: String,
    pub height: f64,
    pub delay_remaining_s: f64,
    pub duration_s: f64,
    pub started: bool,
    pub elapsed_s: f64,
}

impl RevealJob {
    pub fn new(
        entity: EntityId,
        building: &str,
        height: f64,
        delay_s: f64,
        duration_s: f64,
    ) -> Self {
        Self {
            entity,
            building: building.to_string(),
            height,
            delay_remaining_s: delay_s,
            duration_s,
            started: false,
            elapsed_s: 0.0,
        }
    }
}

/// Deterministic reveal queue.
///
/// Key properties:
/// - Insertion order is preserved and is the activation tie-break.
/// - An entity is queued at most once; duplicate pushes are rejected.
/// - Cancellation removes whole buildings and does not perturb the order
///   of surviving jobs.
///
/// Vec-backed on purpose: queues here hold tens of jobs, and correctness
/// plus determinism matter more than asymptotic performance.
#[derive(Debug, Default)]
pub struct RevealQueue {
    jobs: Vec<RevealJob>,
}

impl RevealQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Appends `job` unless its entity is already queued.
    ///
    /// Returns `true` if the queue changed.
    pub fn push(&mut self, job: RevealJob) -> bool {
        if self.contains_entity(job.entity) {
            return false;
        }
        self.jobs.push(job);
        true
    }

    pub fn contains_entity(&self, entity: EntityId) -> bool {
        self.jobs.iter().any(|job| job.entity == entity)
    }

    pub fn contains_building(&self, building: &str) -> bool {
        self.jobs.iter().any(|job| job.building == building)
    }

    /// Removes every job for `building`, pending or active.
    ///
    /// Returns the number of jobs removed.
    pub fn cancel_building(&mut self, building: &str) -> usize {
        let before = self.jobs.len();
        self.jobs.retain(|job| job.building != building);
        before - self.jobs.len()
    }

    /// Append offset for new batches: the maximum remaining
    /// `delay + duration` over queued jobs, 0.0 when empty.
    ///
    /// Started jobs count their full duration; the offset is an upper
    /// bound, not a completion estimate.
    pub fn tail_s(&self) -> f64 {
        self.jobs
            .iter()
            .map(|job| job.delay_remaining_s.max(0.0) + job.duration_s)
            .fold(0.0, f64::max)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RevealJob> {
        self.jobs.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut RevealJob> {
        self.jobs.iter_mut()
    }

    pub fn retain(&mut self, keep: impl FnMut(&RevealJob) -> bool) {
        self.jobs.retain(keep);
    }

    pub fn clear(&mut self) {
        self.jobs.clear();
    }
}
