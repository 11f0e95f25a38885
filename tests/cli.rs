// tests/cli.rs
//
// CLI commands against the bundled data directory.
//
use std::{fs, path::PathBuf};

use dq_wiki::cli::{self, Command};

fn data_dir() -> String {
    format!("{}/data", env!("CARGO_MANIFEST_DIR"))
}

fn no_config() -> String {
    std::env::temp_dir()
        .join("dq_wiki_cli_no_config.conf")
        .to_string_lossy()
        .into_owned()
}

fn run(args: &[&str]) -> String {
    let mut full = vec![s("--config"), no_config(), s("--data"), data_dir()];
    full.extend(args.iter().map(|a| s(a)));
    let mut out = Vec::new();
    cli::run_with(&full, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn s(x: &str) -> String { x.to_string() }

#[test]
fn parse_global_options_and_command() {
    let args: Vec<String> = ["-v", "--data", "d", "bosses", "--game", "DQ1"].iter().map(|a| s(a)).collect();
    let parsed = cli::parse_args(&args).unwrap();
    assert!(parsed.verbose);
    assert_eq!(parsed.data_dir, Some(PathBuf::from("d")));
    assert_eq!(parsed.command, Command::Bosses { game: Some(s("DQ1")) });

    assert_eq!(cli::parse_args(&[]).unwrap().command, Command::Help);
    assert!(cli::parse_args(&[s("dance")]).is_err());
    assert!(cli::parse_args(&[s("track"), s("DQ1"), s("X")]).is_err());
    assert!(cli::parse_args(&[s("--bogus")]).is_err());
}

#[test]
fn help_text() {
    let out = run(&["help"]);
    assert!(out.starts_with("Usage:"));
    assert!(out.contains("track <game> <boss>"));
}

#[test]
fn bosses_for_one_game() {
    let out = run(&["bosses", "--game", "DQ1"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "game\tボス戦名\t出現場所\tHP\t経験値\tゴールド");
    assert!(lines.contains(&"DQ1\tゴーレム\tメルキド入口\t70\t5\t10"));
    assert_eq!(lines.len(), 1 + 5);
    assert!(!out.contains("DQ2"));
}

#[test]
fn show_boss_detail() {
    let out = run(&["show", "DQ2", "あくましんかん戦"]);
    assert!(out.starts_with("[DQ2] あくましんかん戦\n"));
    assert!(out.contains("HP: 1200\n"));
    assert!(out.contains("  ①こうげき\n  ②ベギラマ\n  ③なかまをよぶ\n"));
    assert!(out.contains("Helpers:\n  - ブリザード / 2体 / HP 110\n"));

    let mut sink = Vec::new();
    let args: Vec<String> = vec![s("--config"), no_config(), s("--data"), data_dir(), s("show"), s("DQ2"), s("だれ")];
    assert!(cli::run_with(&args, &mut sink).is_err());
}

#[test]
fn track_session() {
    let out = run(&["track", "DQ2", "シドー", "100", "25", "abc", "reset", "200"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "#1 -100 → 150/250 (60%)",
            "#2 -25 → 125/250 (50%)",
            "! HP has dropped past half. Expect a behavior change.",
            "skip \"abc\": Enter a positive damage amount.",
            "reset",
            "#1 -200 → 50/250 (20%)",
            "! HP has dropped past half. Expect a behavior change.",
            "[DQ2] シドー: 50/250 (20%)",
        ]
    );
}

#[test]
fn track_boss_without_hp_fails() {
    let args: Vec<String> = vec![s("--config"), no_config(), s("--data"), data_dir(), s("track"), s("DQ2"), s("ローレシアの王"), s("10")];
    let mut sink = Vec::new();
    assert!(cli::run_with(&args, &mut sink).is_err());
}

#[test]
fn search_pages_and_items() {
    let out = run(&["search", "ちからのたね"]);
    assert!(out.contains("page\tDQI キラキラの場所一覧\tdq1_kirakira.html\n"));
    assert!(out.contains("item\tDQI キラキラ：2 / ガライの町の北 / 森の切れ目 / ちからのたね\tdq1_kirakira.html\n"));

    assert_eq!(run(&["search", "zzzz"]), "No matches.\n");
}

#[test]
fn table_with_filter() {
    let dir = std::env::temp_dir().join(format!("dq_wiki_cli_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("monsters.csv");
    fs::write(&path, "name,place\nSlime,\"Field, south\"\nDrakee,Cave\n").unwrap();
    let p = path.to_string_lossy().into_owned();

    assert_eq!(run(&["table", &p, "--filter", "slime"]), "name,place\nSlime,\"Field, south\"\n");
    assert_eq!(run(&["table", &p, "--tsv"]), "name\tplace\nSlime\tField, south\nDrakee\tCave\n");

    let mut sink = Vec::new();
    let args: Vec<String> = vec![s("--config"), no_config(), s("table"), dir.join("nope.csv").to_string_lossy().into_owned()];
    assert!(cli::run_with(&args, &mut sink).is_err());
}

#[test]
fn bundled_item_table_by_name() {
    // Relative names resolve against the data directory; row 0 is a caption here.
    let out = run(&["table", "dq2_kirakira.csv", "--filter", "ザハン"]);
    assert_eq!(out, "番号,場所,詳細,アイテム\n2,ザハンの東,岩礁の間,ちからのたね\n");
}
