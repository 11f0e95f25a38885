// src/session.rs
//
// Damage tracking for the selected boss. Only the main body's HP takes part;
// helpers are display-only.

use std::fmt;

use thiserror::Error;

use crate::config::consts::{MSG_BAD_DAMAGE, MSG_HALF_HP, MSG_SELECT_FIRST};
use crate::encounter::{BossEncounter, EncounterIndex, EncounterKey};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("{}", MSG_SELECT_FIRST)]
    NoSelection,

    #[error("{}", MSG_BAD_DAMAGE)]
    InvalidDamage,

    #[error("unknown boss {0}")]
    UnknownEncounter(EncounterKey),

    #[error("{0} has no HP data")]
    NoHp(EncounterKey),
}

/* ---------------- Percent ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Percent {
    Value(u8),
    Unavailable,
}

impl Percent {
    /// `round(current / max * 100)`, clamped to 0..=100.
    pub fn of(current: u64, max: u64) -> Self {
        if max == 0 {
            return Percent::Unavailable;
        }
        let current = u128::from(current.min(max));
        let max = u128::from(max);
        // Half-up rounding in integers.
        let pct = (current * 200 + max) / (max * 2);
        Percent::Value(pct.min(100) as u8)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Percent::Value(v) => write!(f, "{v}%"),
            Percent::Unavailable => f.write_str("-"),
        }
    }
}

/* ---------------- Session ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    /// 1-based position in the log.
    pub seq: usize,
    pub amount: u64,
    pub hp_after: u64,
    pub max_hp: u64,
    pub percent_after: Percent,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} -{} → {}/{} ({})",
            self.seq, self.amount, self.hp_after, self.max_hp, self.percent_after
        )
    }
}

/// Result of one accepted hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Applied {
    pub hp_after: u64,
    /// True only on the hit that crossed half HP.
    pub half_alert: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DamageSession {
    max_hp: u64,
    current_hp: u64,
    half_alert_fired: bool,
    log: Vec<LogEntry>,
}

impl DamageSession {
    pub fn new(max_hp: u64) -> Self {
        Self { max_hp, current_hp: max_hp, half_alert_fired: false, log: Vec::new() }
    }

    pub fn max_hp(&self) -> u64 { self.max_hp }
    pub fn current_hp(&self) -> u64 { self.current_hp }
    pub fn half_alert_fired(&self) -> bool { self.half_alert_fired }
    pub fn log(&self) -> &[LogEntry] { &self.log }

    pub fn percent(&self) -> Percent {
        Percent::of(self.current_hp, self.max_hp)
    }

    /// Subtract a positive amount, flooring at 0.
    pub fn apply(&mut self, amount: i64) -> Result<Applied, SessionError> {
        if amount <= 0 {
            return Err(SessionError::InvalidDamage);
        }
        let amount = amount as u64;
        let prev = self.current_hp;
        self.current_hp = prev.saturating_sub(amount);

        // prev > max/2 >= current, without rounding max/2 down.
        let crossed = prev.saturating_mul(2) > self.max_hp
            && self.current_hp.saturating_mul(2) <= self.max_hp;
        let half_alert = crossed && !self.half_alert_fired;
        if half_alert {
            self.half_alert_fired = true;
        }

        self.log.push(LogEntry {
            seq: self.log.len() + 1,
            amount,
            hp_after: self.current_hp,
            max_hp: self.max_hp,
            percent_after: self.percent(),
        });

        Ok(Applied { hp_after: self.current_hp, half_alert })
    }

    pub fn reset(&mut self) {
        self.current_hp = self.max_hp;
        self.half_alert_fired = false;
        self.log.clear();
    }
}

/* ---------------- Tracker ---------------- */

/// Read-only snapshot for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionView {
    pub key: EncounterKey,
    pub max_hp: u64,
    pub current_hp: u64,
    pub percent: Percent,
    pub log: Vec<LogEntry>,
    pub alert: Option<&'static str>,
}

#[derive(Clone, Debug, Default)]
pub enum Tracker {
    #[default]
    Unselected,
    Active { key: EncounterKey, session: DamageSession },
}

impl Tracker {
    pub fn new() -> Self { Self::default() }

    pub fn is_active(&self) -> bool {
        matches!(self, Tracker::Active { .. })
    }

    pub fn selected(&self) -> Option<&EncounterKey> {
        match self {
            Tracker::Active { key, .. } => Some(key),
            Tracker::Unselected => None,
        }
    }

    pub fn session(&self) -> Option<&DamageSession> {
        match self {
            Tracker::Active { session, .. } => Some(session),
            Tracker::Unselected => None,
        }
    }

    /// Look the boss up and start a fresh session. On error the state is unchanged.
    pub fn select(&mut self, index: &EncounterIndex, key: &EncounterKey) -> Result<(), SessionError> {
        let enc = index
            .get(key)
            .ok_or_else(|| SessionError::UnknownEncounter(key.clone()))?;
        self.select_encounter(enc)
    }

    pub fn select_encounter(&mut self, enc: &BossEncounter) -> Result<(), SessionError> {
        let max_hp = enc.max_hp().ok_or_else(|| SessionError::NoHp(enc.key()))?;
        logd!("Tracker: select {} (HP {max_hp})", enc.key());
        *self = Tracker::Active { key: enc.key(), session: DamageSession::new(max_hp) };
        Ok(())
    }

    pub fn deselect(&mut self) {
        *self = Tracker::Unselected;
    }

    pub fn apply_damage(&mut self, amount: i64) -> Result<Applied, SessionError> {
        match self {
            Tracker::Unselected => Err(SessionError::NoSelection),
            Tracker::Active { session, .. } => session.apply(amount),
        }
    }

    /// Damage typed by a user: a trimmed integer.
    pub fn apply_damage_input(&mut self, text: &str) -> Result<Applied, SessionError> {
        if !self.is_active() {
            return Err(SessionError::NoSelection);
        }
        let amount: i64 = text.trim().parse().map_err(|_| SessionError::InvalidDamage)?;
        self.apply_damage(amount)
    }

    pub fn reset(&mut self) -> Result<(), SessionError> {
        match self {
            Tracker::Unselected => Err(SessionError::NoSelection),
            Tracker::Active { session, .. } => {
                session.reset();
                Ok(())
            }
        }
    }

    pub fn view(&self) -> Option<SessionView> {
        match self {
            Tracker::Unselected => None,
            Tracker::Active { key, session } => Some(SessionView {
                key: key.clone(),
                max_hp: session.max_hp(),
                current_hp: session.current_hp(),
                percent: session.percent(),
                log: session.log().to_vec(),
                alert: session.half_alert_fired().then_some(MSG_HALF_HP),
            }),
        }
    }
}
