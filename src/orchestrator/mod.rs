//! Orchestrator - wires activity to the engines
//!
//! Owns the single writable [`SaveData`]. Each call handles one activity or
//! check-in and resolves the whole XP cascade before returning:
//!
//! ```text
//! activity ──► stats + base XP ──► matching quests
//!                    │
//!                    ▼
//!   ┌──► grant XP (levels, history, xp quests)
//!   │          │
//!   │          ▼
//!   │    quest rewards + badge checks
//!   │          │
//!   └── bonus XP pending? ──► no ──► stable
//! ```

mod clock;
mod events;

pub use clock::{Clock, FixedClock, SystemClock};
pub use events::{GamificationEvent, TickOutcome, XpSource};

use chrono::NaiveDate;
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::achievements::evaluate_achievements;
use crate::config::Settings;
use crate::domain::{ActivityEvent, ActivityKind, ProgressState, QuestKind};
use crate::progression::{apply_xp, update_streak};
use crate::quests::{advance_quests, generate_daily_quests};
use crate::store::SaveData;

/// Main manager for all gamification features
pub struct Orchestrator<C: Clock = SystemClock, R: Rng = ThreadRng> {
    save: SaveData,
    clock: C,
    rng: R,
}

impl Orchestrator {
    /// Orchestrator on the local clock with a thread-local RNG
    pub fn with_system_clock(save: SaveData) -> Self {
        Self::new(save, SystemClock, rand::thread_rng())
    }
}

impl<C: Clock, R: Rng> Orchestrator<C, R> {
    pub fn new(save: SaveData, clock: C, rng: R) -> Self {
        Self { save, clock, rng }
    }

    pub fn save_data(&self) -> &SaveData {
        &self.save
    }

    pub fn into_save_data(self) -> SaveData {
        self.save
    }

    pub fn state(&self) -> &ProgressState {
        &self.save.data
    }

    pub fn settings(&self) -> &Settings {
        &self.save.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.save.settings
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    // ========================================
    // ENTRY POINTS
    // ========================================

    /// Evaluate the daily streak and roll the daily quests for today.
    ///
    /// Both steps are idempotent per day, so calling this repeatedly is cheap.
    pub fn check_in(&mut self) -> TickOutcome {
        let today = self.clock.today();
        let mut outcome = TickOutcome::default();
        let pending = self.roll_day(today, &mut outcome);
        self.settle(today, pending, &mut outcome);
        self.finish(outcome)
    }

    /// Handle one activity notification
    pub fn dispatch(&mut self, event: &ActivityEvent) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        if self.save.settings.is_excluded(event.path()) {
            tracing::debug!("Ignoring {} in excluded path {}", event.kind(), event.path());
            outcome.excluded = true;
            return outcome;
        }

        let today = self.clock.today();
        let mut pending = self.roll_day(today, &mut outcome);

        let settings = &self.save.settings;
        let stats = &mut self.save.data.stats;
        let (base_xp, quest_delta) = match event {
            ActivityEvent::NoteCreated { .. } => {
                stats.notes_created = stats.notes_created.saturating_add(1);
                (settings.xp_per_note, Some((QuestKind::Notes, 1)))
            }
            ActivityEvent::NoteDeleted { .. } => {
                stats.notes_deleted = stats.notes_deleted.saturating_add(1);
                (0, None)
            }
            ActivityEvent::LinkDelta { delta, .. } => {
                let added = positive(*delta);
                stats.links_created = stats.links_created.saturating_add(added);
                (
                    added.saturating_mul(settings.xp_per_link),
                    Some((QuestKind::Links, added)),
                )
            }
            ActivityEvent::CharsDelta { delta, .. } => {
                let added = positive(*delta);
                stats.chars_written = stats.chars_written.saturating_add(added);
                (
                    added.saturating_mul(settings.xp_per_char),
                    Some((QuestKind::Chars, added)),
                )
            }
            ActivityEvent::ReadingTick { .. } => (settings.xp_per_minute_reading, None),
        };

        pending.push((base_xp, XpSource::Activity(event.kind())));

        if let Some((kind, amount)) = quest_delta {
            for quest in advance_quests(&mut self.save.data, kind, amount) {
                tracing::info!("Quest completed: {} (+{} XP)", quest.description, quest.reward_xp);
                pending.push((quest.reward_xp, XpSource::Quest(quest.id.clone())));
                outcome.push(GamificationEvent::QuestCompleted(quest));
            }
        }

        self.settle(today, pending, &mut outcome);
        self.finish(outcome)
    }

    /// Grant XP from outside the activity stream and resolve the cascade
    pub fn grant_xp(&mut self, amount: u64, kind: ActivityKind) -> TickOutcome {
        let today = self.clock.today();
        let mut outcome = TickOutcome::default();
        self.settle(today, vec![(amount, XpSource::Activity(kind))], &mut outcome);
        self.finish(outcome)
    }

    // ========================================
    // CASCADE
    // ========================================

    /// Streak and quest roll-over for `today`. Returns the streak bonus as pending XP.
    fn roll_day(&mut self, today: NaiveDate, outcome: &mut TickOutcome) -> Vec<(u64, XpSource)> {
        let mut pending = Vec::new();
        let data = &mut self.save.data;

        let update = update_streak(data, today);
        if update.changed() {
            tracing::info!("Streak updated: {} days ({:?})", update.streak, update.change);
            outcome.push(GamificationEvent::StreakUpdated(update));
            pending.push((update.gained_xp, XpSource::Streak));
        }

        if generate_daily_quests(data, today, self.clock.now(), &mut self.rng) {
            let count = data.quests.iter().filter(|q| q.is_daily()).count();
            tracing::info!("Generated {} daily quests for {}", count, today);
            outcome.push(GamificationEvent::QuestsGenerated { count });
        }

        pending
    }

    /// Grant pending XP and follow quest/badge rewards until nothing new happens.
    ///
    /// Every pass either earns something new or stops; quests complete once and
    /// badges unlock once, so the loop is bounded by the size of both sets.
    fn settle(
        &mut self,
        today: NaiveDate,
        mut pending: Vec<(u64, XpSource)>,
        outcome: &mut TickOutcome,
    ) {
        loop {
            for (amount, source) in std::mem::take(&mut pending) {
                if amount == 0 {
                    continue;
                }
                self.award(today, amount, source, outcome);

                for quest in advance_quests(&mut self.save.data, QuestKind::Xp, amount) {
                    tracing::info!(
                        "Quest completed: {} (+{} XP)",
                        quest.description,
                        quest.reward_xp
                    );
                    pending.push((quest.reward_xp, XpSource::Quest(quest.id.clone())));
                    outcome.push(GamificationEvent::QuestCompleted(quest));
                }
            }

            for badge in evaluate_achievements(&self.save.data) {
                self.save.data.record_badge(badge.id);
                tracing::info!("Badge unlocked: {} ({})", badge.name, badge.id);
                pending.push((badge.bonus_xp, XpSource::Badge(badge.id)));
                outcome.push(GamificationEvent::BadgeEarned(badge));
            }

            if pending.is_empty() {
                break;
            }
        }
    }

    fn award(&mut self, today: NaiveDate, amount: u64, source: XpSource, outcome: &mut TickOutcome) {
        let data = &mut self.save.data;
        let level_up = apply_xp(data, amount);
        data.record_history(today, amount);

        if self.save.settings.debug {
            tracing::info!(
                "Gained {} XP ({}). Total: {}/{}",
                amount,
                source,
                data.current_xp,
                data.next_level_xp
            );
        } else {
            tracing::debug!("Gained {} XP ({})", amount, source);
        }

        outcome.push(GamificationEvent::XpAwarded { amount, source });
        if let Some(level_up) = level_up {
            tracing::info!("Level up: {} -> {}", level_up.old_level, level_up.new_level);
            outcome.push(GamificationEvent::LevelUp(level_up));
        }
    }

    fn finish(&self, mut outcome: TickOutcome) -> TickOutcome {
        outcome.celebrate = self.save.settings.enable_effects
            && (outcome.level_ups().next().is_some() || outcome.earned_badges().next().is_some());
        outcome
    }
}

fn positive(delta: i64) -> u64 {
    delta.max(0) as u64
}
