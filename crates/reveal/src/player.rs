use tracing::debug;

/// Tick-driven timeline auto-advance.
///
/// Walks an ascending year list, emitting the next year every
/// `year_interval_s` while playing; the first year is emitted on the first
/// tick after `play()`. Emits at most one year per tick and pauses itself
/// after the final year. No timers or self-scheduling: the owner's frame
/// loop supplies deltas.
#[derive(Debug, Clone)]
pub struct TimelinePlayer {
    years: Vec<i32>,
    cursor: usize,
    playing: bool,
    year_interval_s: f64,
    accumulated_s: f64,
}

impl TimelinePlayer {
    pub fn new(years: Vec<i32>, year_interval_s: f64) -> Self {
        Self {
            years,
            cursor: 0,
            playing: false,
            year_interval_s,
            accumulated_s: 0.0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.years.len()
    }

    /// The most recently emitted year, if any.
    pub fn current_year(&self) -> Option<i32> {
        self.cursor.checked_sub(1).map(|i| self.years[i])
    }

    pub fn play(&mut self) {
        if self.is_finished() {
            return;
        }
        self.playing = true;
        if self.cursor == 0 {
            // Surface the opening year immediately instead of idling
            // through the first interval.
            self.accumulated_s = self.year_interval_s;
        }
        debug!("timeline player playing");
    }

    pub fn pause(&mut self) {
        self.playing = false;
        debug!("timeline player paused");
    }

    /// Advances the interval clock; returns a year when one becomes due.
    pub fn tick(&mut self, dt_s: f64) -> Option<i32> {
        if !self.playing || self.is_finished() {
            return None;
        }

        self.accumulated_s += dt_s;
        if self.accumulated_s < self.year_interval_s {
            return None;
        }

        self.accumulated_s -= self.year_interval_s;
        let year = self.years[self.cursor];
        self.cursor += 1;
        if self.is_finished() {
            self.playing = false;
        }
        Some(year)
    }
}

#[cfg(test)]
mod tests {
    use super::TimelinePlayer;

    #[test]
    fn emits_each_year_once_in_order_then_stops() {
        let mut player = TimelinePlayer::new(vec![2001, 2005, 2010], 2.0);
        player.play();

        let mut emitted = Vec::new();
        for _ in 0..1000 {
            if let Some(year) = player.tick(0.1) {
                emitted.push(year);
            }
        }

        assert_eq!(emitted, vec![2001, 2005, 2010]);
        assert!(!player.is_playing());
        assert!(player.is_finished());
        assert_eq!(player.current_year(), Some(2010));
    }

    #[test]
    fn first_year_arrives_on_the_first_tick() {
        let mut player = TimelinePlayer::new(vec![2001, 2005], 20.0);
        assert_eq!(player.tick(1.0), None); // not playing yet

        player.play();
        assert_eq!(player.tick(1.0 / 60.0), Some(2001));
        assert_eq!(player.tick(1.0 / 60.0), None);
    }

    #[test]
    fn pause_holds_the_interval_clock() {
        let mut player = TimelinePlayer::new(vec![2001, 2005], 1.0);
        player.play();
        assert_eq!(player.tick(0.1), Some(2001));

        player.pause();
        for _ in 0..100 {
            assert_eq!(player.tick(0.1), None);
        }

        player.play();
        assert_eq!(player.tick(1.0), Some(2005));
    }

    #[test]
    fn empty_timeline_never_plays() {
        let mut player = TimelinePlayer::new(Vec::new(), 1.0);
        player.play();
        assert!(!player.is_playing());
        assert_eq!(player.tick(10.0), None);
        assert_eq!(player.current_year(), None);
    }
}
