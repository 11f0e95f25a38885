// src/cli.rs
use std::{
    env,
    error::Error,
    io::{self, Write},
    path::PathBuf,
};

use crate::config::consts::{COL_EXP, COL_GOLD, COL_HP, COL_PLACE, DEFAULT_CONFIG_FILE, MSG_HALF_HP};
use crate::config::{file, options::AppOptions};
use crate::core::sanitize::pattern_lines;
use crate::csv;
use crate::data::WikiData;
use crate::encounter::{BossEncounter, BossSummary, EncounterKey};
use crate::fetch::{self, Location, Request};
use crate::search;
use crate::session::{SessionError, Tracker};

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Bosses { game: Option<String> },
    Show { game: String, boss: String },
    Track { game: String, boss: String, steps: Vec<String> },
    Search { query: String },
    Table { file: String, filter: Option<String>, tsv: bool },
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub verbose: bool,
    pub command: Command,
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let parsed = parse_args(&args)?;
    crate::log::init(parsed.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&parsed, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Parse and run against any writer (no log setup).
pub fn run_with(args: &[String], out: &mut dyn Write) -> Result<(), Box<dyn Error>> {
    let parsed = parse_args(args)?;
    execute(&parsed, out)
}

pub fn parse_args(args: &[String]) -> Result<CliArgs, Box<dyn Error>> {
    let mut config = None;
    let mut data_dir = None;
    let mut verbose = false;

    let mut it = args.iter();
    let mut command = None;
    while let Some(a) = it.next() {
        match a.as_str() {
            "--config" => config = Some(PathBuf::from(it.next().ok_or("Missing value for --config")?)),
            "--data" => data_dir = Some(PathBuf::from(it.next().ok_or("Missing value for --data")?)),
            "-v" | "--verbose" => verbose = true,
            "-h" | "--help" => {
                command = Some(Command::Help);
                break;
            }
            other if other.starts_with('-') => return Err(format!("Unknown option: {other}").into()),
            cmd => {
                let rest: Vec<&String> = it.by_ref().collect();
                command = Some(parse_command(cmd, &rest)?);
                break;
            }
        }
    }

    Ok(CliArgs { config, data_dir, verbose, command: command.unwrap_or(Command::Help) })
}

fn parse_command(cmd: &str, rest: &[&String]) -> Result<Command, Box<dyn Error>> {
    let mut it = rest.iter().map(|s| s.as_str());
    match cmd {
        "bosses" => {
            let mut game = None;
            while let Some(a) = it.next() {
                match a {
                    "--game" => game = Some(s!(it.next().ok_or("Missing value for --game")?)),
                    other => return Err(format!("Unknown arg for bosses: {other}").into()),
                }
            }
            Ok(Command::Bosses { game })
        }
        "show" => {
            let game = s!(it.next().ok_or("show needs <game> <boss>")?);
            let boss = s!(it.next().ok_or("show needs <game> <boss>")?);
            Ok(Command::Show { game, boss })
        }
        "track" => {
            let game = s!(it.next().ok_or("track needs <game> <boss> <step>...")?);
            let boss = s!(it.next().ok_or("track needs <game> <boss> <step>...")?);
            let steps: Vec<String> = it.map(String::from).collect();
            if steps.is_empty() {
                return Err("track needs at least one step (amount or reset)".into());
            }
            Ok(Command::Track { game, boss, steps })
        }
        "search" => {
            let words: Vec<&str> = it.collect();
            if words.is_empty() {
                return Err("search needs <query>".into());
            }
            Ok(Command::Search { query: words.join(" ") })
        }
        "table" => {
            let mut file = None;
            let mut filter = None;
            let mut tsv = false;
            while let Some(a) = it.next() {
                match a {
                    "--filter" => filter = Some(s!(it.next().ok_or("Missing value for --filter")?)),
                    "--tsv" => tsv = true,
                    other if file.is_none() && !other.starts_with("--") => file = Some(s!(other)),
                    other => return Err(format!("Unknown arg for table: {other}").into()),
                }
            }
            Ok(Command::Table { file: file.ok_or("table needs <file>")?, filter, tsv })
        }
        "help" => Ok(Command::Help),
        other => Err(format!("Unknown command: {other}").into()),
    }
}

fn options_for(args: &CliArgs) -> AppOptions {
    let path = args.config.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let mut opts = file::load(&path);
    if let Some(dir) = &args.data_dir {
        opts.sources.data_dir = dir.clone();
    }
    opts
}

/// Boss commands only need the boss sheets.
fn boss_only(mut opts: AppOptions) -> AppOptions {
    opts.sources.items.clear();
    opts.sources.pages = None;
    opts
}

fn execute(args: &CliArgs, out: &mut dyn Write) -> Result<(), Box<dyn Error>> {
    match &args.command {
        Command::Help => write!(out, "{HELP}")?,
        Command::Bosses { game } => {
            let data = WikiData::load(&boss_only(options_for(args)), None);
            print_bosses(&data, game.as_deref(), out)?;
        }
        Command::Show { game, boss } => {
            let data = WikiData::load(&boss_only(options_for(args)), None);
            let enc = data
                .sheet(game)
                .and_then(|s| s.grouped.get(boss))
                .ok_or_else(|| format!("No boss {} in {game}", boss))?;
            print_detail(enc, out)?;
        }
        Command::Track { game, boss, steps } => {
            let data = WikiData::load(&boss_only(options_for(args)), None);
            track(&data, &EncounterKey::new(game.as_str(), boss.as_str()), steps, out)?;
        }
        Command::Search { query } => {
            let data = WikiData::load(&options_for(args), None);
            let hits = data.search.query(query);
            if hits.is_empty() {
                writeln!(out, "No matches.")?;
            }
            for p in &hits.pages {
                writeln!(out, "page\t{}\t{}", p.title, p.url)?;
            }
            for i in &hits.items {
                writeln!(out, "item\t{}\t{}", i.display(), i.link)?;
            }
        }
        Command::Table { file, filter, tsv } => {
            let opts = options_for(args);
            let req = Request::new(file.as_str(), Location::resolve(&opts.sources.data_dir, file));
            let loaded = fetch::load_one(&req);
            if let Some(err) = loaded.error {
                return Err(err.into());
            }
            let doc = loaded.doc;
            let keep = search::filter_rows(&doc, filter.as_deref().unwrap_or(""));
            let rows: Vec<Vec<String>> = keep.into_iter().map(|i| doc.rows()[i].clone()).collect();
            let sep = if *tsv { '\t' } else { ',' };
            write!(out, "{}", csv::to_string(doc.header(), &rows, sep))?;
        }
    }
    Ok(())
}

fn print_bosses(data: &WikiData, game: Option<&str>, out: &mut dyn Write) -> Result<(), Box<dyn Error>> {
    let mut header = vec![s!("game")];
    header.extend(BossSummary::HEADERS.iter().map(|h| s!(*h)));
    csv::write_row(&mut *out, &header, '\t')?;

    for sheet in data.sheets.iter().filter(|s| game.is_none_or(|g| g == s.game)) {
        for enc in &sheet.grouped {
            let mut row = vec![sheet.game.clone()];
            row.extend(BossSummary::of(enc).cells());
            csv::write_row(&mut *out, &row, '\t')?;
        }
    }
    Ok(())
}

fn print_detail(enc: &BossEncounter, out: &mut dyn Write) -> io::Result<()> {
    let dash = |v: Option<&str>| s!(v.unwrap_or("-"));
    writeln!(out, "{}", enc.key())?;
    writeln!(out, "{COL_PLACE}: {}", dash(enc.place()))?;
    writeln!(out, "{COL_HP}: {}", enc.main.hp.map_or_else(|| s!("-"), |h| h.to_string()))?;
    writeln!(out, "{COL_EXP}: {}", dash(enc.main.experience.as_deref()))?;
    writeln!(out, "{COL_GOLD}: {}", dash(enc.main.gold.as_deref()))?;
    if let Some(note) = &enc.main.note {
        writeln!(out, "Note: {note}")?;
    }
    if let Some(pattern) = &enc.main.pattern {
        writeln!(out, "Pattern:")?;
        for line in pattern_lines(pattern) {
            writeln!(out, "  {line}")?;
        }
    }
    if !enc.helpers.is_empty() {
        writeln!(out, "Helpers:")?;
        for h in &enc.helpers {
            writeln!(out, "  - {}", h.summary())?;
        }
    }
    if let Some(src) = &enc.main.source {
        writeln!(out, "Source: {src}")?;
    }
    Ok(())
}

fn track(data: &WikiData, key: &EncounterKey, steps: &[String], out: &mut dyn Write) -> Result<(), Box<dyn Error>> {
    let mut tracker = Tracker::new();
    tracker.select(&data.index, key)?;

    for step in steps {
        if step.eq_ignore_ascii_case("reset") {
            tracker.reset()?;
            writeln!(out, "reset")?;
            continue;
        }
        match tracker.apply_damage_input(step) {
            Ok(applied) => {
                if let Some(entry) = tracker.session().and_then(|s| s.log().last()) {
                    writeln!(out, "{entry}")?;
                }
                if applied.half_alert {
                    writeln!(out, "! {MSG_HALF_HP}")?;
                }
            }
            Err(e @ SessionError::InvalidDamage) => writeln!(out, "skip {step:?}: {e}")?,
            Err(e) => return Err(e.into()),
        }
    }

    if let Some(v) = tracker.view() {
        writeln!(out, "{}: {}/{} ({})", v.key, v.current_hp, v.max_hp, v.percent)?;
    }
    Ok(())
}
