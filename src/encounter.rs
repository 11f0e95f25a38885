// src/encounter.rs
//
// Boss sheets grouped by boss name. Each group has one main body, whose HP
// drives the damage tracker, plus display-only helpers.

use std::{collections::HashMap, fmt, iter};

use crate::config::consts::*;
use crate::config::options::{IndexOptions, MainHpPolicy, ZeroHp};
use crate::core::sanitize::{digits_only, leading_int};
use crate::csv::{Column, CsvDocument};

/* ---------------- Records ---------------- */

/// One row of a boss sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatantRecord {
    pub boss_name: String,
    pub unit_name: String,
    pub count: Option<u32>,
    pub hp: Option<u64>,
    pub place: Option<String>,
    pub note: Option<String>,
    pub pattern: Option<String>,
    pub experience: Option<String>,
    pub gold: Option<String>,
    pub source: Option<String>,
}

impl CombatantRecord {
    pub fn is_main_body(&self) -> bool {
        self.unit_name == self.boss_name
    }

    /// `"unit / 2体 / HP 120"`, leaving out what is unknown.
    pub fn summary(&self) -> String {
        let mut text = self.unit_name.clone();
        if let Some(c) = self.count {
            text.push_str(&format!(" / {c}体"));
        }
        if let Some(hp) = self.hp {
            text.push_str(&format!(" / HP {hp}"));
        }
        text
    }
}

/// Header positions of a boss sheet, resolved once per document.
#[derive(Clone, Copy, Debug)]
pub struct BossColumns {
    pub boss: Column,
    pub unit: Column,
    pub count: Column,
    pub hp: Column,
    pub place: Column,
    pub experience: Column,
    pub gold: Column,
    pub note: Column,
    pub pattern: Column,
    pub source: Column,
}

impl BossColumns {
    pub fn resolve(doc: &CsvDocument) -> Self {
        Self {
            boss: doc.column(COL_BOSS),
            unit: doc.column(COL_UNIT),
            count: doc.column(COL_COUNT),
            hp: doc.column(COL_HP),
            place: doc.column(COL_PLACE),
            experience: doc.column(COL_EXP),
            gold: doc.column(COL_GOLD),
            note: doc.column(COL_NOTE),
            pattern: doc.column(COL_PATTERN),
            source: doc.column(COL_SOURCE),
        }
    }

    /// Typed record for one row; `None` when the boss name is blank.
    pub fn record(&self, row: &[String], opts: &IndexOptions) -> Option<CombatantRecord> {
        let boss_name = s!(self.boss.text(row)?);
        let unit_name = self.unit.text(row).map_or_else(|| boss_name.clone(), |u| s!(u));

        let count = self
            .count
            .text(row)
            .and_then(leading_int)
            .filter(|&n| n > 0)
            .and_then(|n| u32::try_from(n).ok());

        let hp = self.hp.text(row).and_then(digits_only).filter(|&n| match opts.zero_hp {
            ZeroHp::NoData => n > 0,
            ZeroHp::Valid => true,
        });

        let opt = |c: Column| c.text(row).map(String::from);
        Some(CombatantRecord {
            boss_name,
            unit_name,
            count,
            hp,
            place: opt(self.place),
            note: opt(self.note),
            pattern: opt(self.pattern),
            experience: opt(self.experience),
            gold: opt(self.gold),
            source: opt(self.source),
        })
    }
}

/* ---------------- Encounters ---------------- */

/// Identity of an encounter across games. Orders by game, then name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EncounterKey {
    pub game: String,
    pub name: String,
}

impl EncounterKey {
    pub fn new(game: impl Into<String>, name: impl Into<String>) -> Self {
        Self { game: game.into(), name: name.into() }
    }
}

impl fmt::Display for EncounterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.game, self.name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BossEncounter {
    pub game: String,
    pub name: String,
    pub main: CombatantRecord,
    pub helpers: Vec<CombatantRecord>,
}

impl BossEncounter {
    pub fn key(&self) -> EncounterKey {
        EncounterKey::new(self.game.as_str(), self.name.as_str())
    }

    /// HP usable by a damage session.
    pub fn max_hp(&self) -> Option<u64> {
        self.main.hp.filter(|&hp| hp > 0)
    }

    pub fn is_trackable(&self) -> bool {
        self.max_hp().is_some()
    }

    /// Main body's place, else the first unit that has one.
    pub fn place(&self) -> Option<&str> {
        self.units().find_map(|u| u.place.as_deref())
    }

    pub fn units(&self) -> impl Iterator<Item = &CombatantRecord> {
        iter::once(&self.main).chain(self.helpers.iter())
    }
}

/// Encounters of one sheet in first-appearance order, with lookup by name.
#[derive(Clone, Debug, Default)]
pub struct EncounterMap {
    game: String,
    list: Vec<BossEncounter>,
    by_name: HashMap<String, usize>,
}

impl EncounterMap {
    pub fn new(game: impl Into<String>) -> Self {
        Self { game: game.into(), ..Self::default() }
    }

    pub fn game(&self) -> &str { &self.game }
    pub fn len(&self) -> usize { self.list.len() }
    pub fn is_empty(&self) -> bool { self.list.is_empty() }
    pub fn iter(&self) -> std::slice::Iter<'_, BossEncounter> { self.list.iter() }

    pub fn get(&self, name: &str) -> Option<&BossEncounter> {
        self.by_name.get(name).map(|&i| &self.list[i])
    }

    fn insert(&mut self, enc: BossEncounter) {
        self.by_name.insert(enc.name.clone(), self.list.len());
        self.list.push(enc);
    }

    /// Keep only encounters that can drive a damage session.
    fn retain_trackable(self) -> Self {
        let mut out = Self::new(self.game);
        for enc in self.list.into_iter().filter(BossEncounter::is_trackable) {
            out.insert(enc);
        }
        out
    }
}

impl IntoIterator for EncounterMap {
    type Item = BossEncounter;
    type IntoIter = std::vec::IntoIter<BossEncounter>;
    fn into_iter(self) -> Self::IntoIter { self.list.into_iter() }
}

impl<'a> IntoIterator for &'a EncounterMap {
    type Item = &'a BossEncounter;
    type IntoIter = std::slice::Iter<'a, BossEncounter>;
    fn into_iter(self) -> Self::IntoIter { self.list.iter() }
}

/// Group every row of a boss sheet by boss name, including groups without
/// usable HP. A sheet without the boss-name column yields nothing.
pub fn group(doc: &CsvDocument, game: &str, opts: &IndexOptions) -> EncounterMap {
    let cols = BossColumns::resolve(doc);
    let mut out = EncounterMap::new(game);
    if !cols.boss.is_present() {
        logd!("Encounter: {game} sheet has no {COL_BOSS} column");
        return out;
    }

    let mut groups: Vec<Vec<CombatantRecord>> = Vec::new();
    let mut slot: HashMap<String, usize> = HashMap::new();

    for row in doc.rows() {
        let Some(rec) = cols.record(row, opts) else { continue };
        if opts.skip_rows_without_hp && !rec.hp.is_some_and(|hp| hp > 0) {
            continue;
        }
        let ix = *slot.entry(rec.boss_name.clone()).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[ix].push(rec);
    }

    for rows in groups {
        if let Some(enc) = assemble(game, rows, opts.main_hp) {
            out.insert(enc);
        }
    }
    out
}

/// Encounters that can be tracked: main body with a positive HP.
pub fn build(doc: &CsvDocument, game: &str, opts: &IndexOptions) -> EncounterMap {
    let all = group(doc, game, opts);
    let total = all.len();
    let published = all.retain_trackable();
    logd!("Encounter: {game} groups={total} published={}", published.len());
    published
}

fn assemble(game: &str, mut rows: Vec<CombatantRecord>, policy: MainHpPolicy) -> Option<BossEncounter> {
    if rows.is_empty() {
        return None;
    }
    let main_ix = rows.iter().position(CombatantRecord::is_main_body).unwrap_or(0);
    let mut main = rows.remove(main_ix);
    let mut helpers = Vec::with_capacity(rows.len());

    for rec in rows {
        if !rec.is_main_body() {
            helpers.push(rec);
            continue;
        }
        // Duplicate main-body row: never a helper.
        if policy == MainHpPolicy::LatestWins && rec.hp.is_some() {
            main.hp = rec.hp;
        }
    }

    Some(BossEncounter { game: s!(game), name: main.boss_name.clone(), main, helpers })
}

/* ---------------- Index across games ---------------- */

#[derive(Clone, Debug, Default)]
pub struct EncounterIndex {
    games: Vec<String>,
    list: Vec<BossEncounter>,
    by_key: HashMap<EncounterKey, usize>,
}

impl EncounterIndex {
    pub fn new() -> Self { Self::default() }

    pub fn from_maps<I: IntoIterator<Item = EncounterMap>>(maps: I) -> Self {
        let mut index = Self::new();
        for map in maps {
            index.push(map);
        }
        index
    }

    /// Add one sheet. An encounter whose key is already present replaces it.
    pub fn push(&mut self, map: EncounterMap) {
        if !self.games.iter().any(|g| g == map.game()) {
            self.games.push(s!(map.game()));
        }
        for enc in map {
            let key = enc.key();
            match self.by_key.get(&key) {
                Some(&i) => {
                    logw!("Encounter: duplicate {key}, keeping the later sheet's entry");
                    self.list[i] = enc;
                }
                None => {
                    self.by_key.insert(key, self.list.len());
                    self.list.push(enc);
                }
            }
        }
    }

    pub fn len(&self) -> usize { self.list.len() }
    pub fn is_empty(&self) -> bool { self.list.is_empty() }

    /// Game tags in load order.
    pub fn games(&self) -> &[String] { &self.games }

    pub fn get(&self, key: &EncounterKey) -> Option<&BossEncounter> {
        self.by_key.get(key).map(|&i| &self.list[i])
    }

    /// Every encounter ordered by (game, name).
    pub fn sorted(&self) -> Vec<&BossEncounter> {
        let mut out: Vec<&BossEncounter> = self.list.iter().collect();
        out.sort_by(|a, b| (&a.game, &a.name).cmp(&(&b.game, &b.name)));
        out
    }

    /// Encounters of one game in sheet order.
    pub fn for_game<'a>(&'a self, game: &'a str) -> impl Iterator<Item = &'a BossEncounter> + 'a {
        self.list.iter().filter(move |e| e.game == game)
    }
}

/* ---------------- Boss list ---------------- */

/// One line of the boss list table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BossSummary {
    pub name: String,
    pub place: String,
    pub hp: Option<u64>,
    pub experience: String,
    pub gold: String,
}

impl BossSummary {
    pub const HEADERS: [&'static str; 5] = [COL_BOSS, COL_PLACE, COL_HP, COL_EXP, COL_GOLD];

    pub fn of(enc: &BossEncounter) -> Self {
        Self {
            name: enc.name.clone(),
            place: s!(enc.place().unwrap_or("")),
            hp: enc.main.hp,
            experience: enc.main.experience.clone().unwrap_or_default(),
            gold: enc.main.gold.clone().unwrap_or_default(),
        }
    }

    pub fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.place.clone(),
            self.hp.map(|h| h.to_string()).unwrap_or_default(),
            self.experience.clone(),
            self.gold.clone(),
        ]
    }
}

pub fn summaries(map: &EncounterMap) -> Vec<BossSummary> {
    map.iter().map(BossSummary::of).collect()
}
