// tests/encounters.rs
//
// Grouping boss sheets into encounters and indexing them across games.
//
use dq_wiki::config::options::{IndexOptions, MainHpPolicy, ZeroHp};
use dq_wiki::csv::CsvDocument;
use dq_wiki::encounter::{self, BossSummary, EncounterIndex, EncounterKey};

const HEAD: &str = "ボス戦名,個体名,体数,HP,出現場所,経験値,ゴールド\n";

fn sheet(body: &str) -> CsvDocument {
    CsvDocument::parse(&format!("{HEAD}{body}"))
}

#[test]
fn main_body_and_helpers() {
    let doc = sheet(
        "あくましんかん戦,あくましんかん,1,\"1,200\",海底の洞窟,1900,400\n\
         あくましんかん戦,ブリザード,2,110,,,\n\
         シドー,シドー,1,250,ハーゴンの神殿,0,0\n",
    );
    let map = encounter::build(&doc, "DQ2", &IndexOptions::default());
    assert_eq!(map.len(), 2);

    let enc = map.get("あくましんかん戦").unwrap();
    // No row names the boss itself, so the first row is the main body.
    assert_eq!(enc.main.unit_name, "あくましんかん");
    assert_eq!(enc.max_hp(), Some(1200));
    assert_eq!(enc.helpers.len(), 1);
    assert_eq!(enc.helpers[0].summary(), "ブリザード / 2体 / HP 110");
    assert_eq!(enc.place(), Some("海底の洞窟"));

    let names: Vec<&str> = map.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["あくましんかん戦", "シドー"]);
}

#[test]
fn main_is_row_naming_the_boss_even_if_not_first() {
    let doc = sheet("B戦,おとも,3,40,,,\nB戦,B戦,1,500,城,,\n");
    let map = encounter::build(&doc, "DQ1", &IndexOptions::default());
    let enc = map.get("B戦").unwrap();
    assert_eq!(enc.main.unit_name, "B戦");
    assert_eq!(enc.max_hp(), Some(500));
    assert_eq!(enc.helpers.len(), 1);
    assert_eq!(enc.helpers[0].count, Some(3));
}

#[test]
fn unit_name_defaults_to_boss_name() {
    let doc = CsvDocument::parse("ボス戦名,HP\nゴーレム,70\n");
    let map = encounter::build(&doc, "DQ1", &IndexOptions::default());
    let enc = map.get("ゴーレム").unwrap();
    assert_eq!(enc.main.unit_name, "ゴーレム");
    assert!(enc.main.is_main_body());
    assert_eq!(enc.main.count, None);
}

#[test]
fn blank_boss_names_are_skipped() {
    let doc = sheet(" ,x,1,10,,,\nA,A,1,10,,,\n");
    let map = encounter::group(&doc, "DQ1", &IndexOptions::default());
    assert_eq!(map.len(), 1);
}

#[test]
fn missing_boss_column_yields_nothing() {
    let doc = CsvDocument::parse("名前,HP\nスライム,3\n");
    assert!(encounter::build(&doc, "DQ1", &IndexOptions::default()).is_empty());
    assert!(encounter::group(&doc, "DQ1", &IndexOptions::default()).is_empty());
}

#[test]
fn missing_hp_column_groups_but_publishes_nothing() {
    let doc = CsvDocument::parse("ボス戦名,個体名\nA,A\nB,B\n");
    let opts = IndexOptions::default();
    assert!(encounter::build(&doc, "DQ1", &opts).is_empty());
    assert_eq!(encounter::group(&doc, "DQ1", &opts).len(), 2);
}

#[test]
fn duplicate_main_rows_first_wins_by_default() {
    let doc = sheet("X,X,1,100,,,\nX,X,1,200,,,\nX,Y,1,50,,,\n");
    let map = encounter::build(&doc, "DQ1", &IndexOptions::default());
    let enc = map.get("X").unwrap();
    assert_eq!(enc.max_hp(), Some(100));
    assert_eq!(enc.helpers.len(), 1); // the duplicate is not a helper
    assert_eq!(enc.helpers[0].unit_name, "Y");
}

#[test]
fn duplicate_main_rows_latest_wins_when_configured() {
    let doc = sheet("X,X,1,100,,,\nX,X,1,200,,,\nX,X,1,?,,,\nX,Y,1,50,,,\n");
    let opts = IndexOptions { main_hp: MainHpPolicy::LatestWins, ..IndexOptions::default() };
    let map = encounter::build(&doc, "DQ1", &opts);
    let enc = map.get("X").unwrap();
    // The unparsable third row leaves the second row's HP in place.
    assert_eq!(enc.max_hp(), Some(200));
    assert_eq!(enc.helpers.len(), 1);
}

#[test]
fn zero_hp_policies() {
    let doc = sheet("A,A,1,300,,,\nA,影,1,0,,,\nZ,Z,1,0,,,\n");

    let no_data = encounter::group(&doc, "DQ1", &IndexOptions::default());
    assert_eq!(no_data.get("A").unwrap().helpers[0].hp, None);

    let valid = IndexOptions { zero_hp: ZeroHp::Valid, ..IndexOptions::default() };
    let grouped = encounter::group(&doc, "DQ1", &valid);
    assert_eq!(grouped.get("A").unwrap().helpers[0].hp, Some(0));
    assert_eq!(grouped.get("Z").unwrap().main.hp, Some(0));

    // A 0-HP main body is never published.
    let built = encounter::build(&doc, "DQ1", &valid);
    assert!(built.get("Z").is_none());
    assert!(built.get("A").is_some());
}

#[test]
fn skip_rows_without_hp() {
    let doc = sheet("B,B,1,,,,\nB,H,2,30,,,\nC,C,1,不明,,,\n");

    let plain = IndexOptions::default();
    assert_eq!(encounter::group(&doc, "DQ1", &plain).len(), 2);
    assert!(encounter::build(&doc, "DQ1", &plain).is_empty());

    let skip = IndexOptions { skip_rows_without_hp: true, ..IndexOptions::default() };
    let grouped = encounter::group(&doc, "DQ1", &skip);
    assert_eq!(grouped.len(), 1);
    let enc = grouped.get("B").unwrap();
    assert_eq!(enc.main.unit_name, "H");
    assert_eq!(enc.max_hp(), Some(30));
}

#[test]
fn count_is_leading_positive_integer() {
    let doc = sheet("A,A,3体,10,,,\nA,b,0,1,,,\nA,c,x,1,,,\n");
    let map = encounter::group(&doc, "DQ1", &IndexOptions::default());
    let enc = map.get("A").unwrap();
    assert_eq!(enc.main.count, Some(3));
    assert_eq!(enc.helpers[0].count, None);
    assert_eq!(enc.helpers[1].count, None);
    assert_eq!(enc.helpers[1].summary(), "c / HP 1");
}

#[test]
fn place_falls_back_to_helpers() {
    let doc = sheet("A,A,1,10,,,\nA,b,1,5,洞窟,,\n");
    let map = encounter::group(&doc, "DQ1", &IndexOptions::default());
    assert_eq!(map.get("A").unwrap().place(), Some("洞窟"));
}

#[test]
fn index_orders_by_game_then_name() {
    let opts = IndexOptions::default();
    let dq2 = encounter::build(&sheet("シドー,シドー,1,250,,,\nアトラス,アトラス,1,1200,,,\n"), "DQ2", &opts);
    let dq1 = encounter::build(&sheet("りゅうおう,りゅうおう,1,100,,,\nゴーレム,ゴーレム,1,70,,,\n"), "DQ1", &opts);
    let index = EncounterIndex::from_maps(vec![dq2, dq1]);

    assert_eq!(index.len(), 4);
    assert_eq!(index.games(), &["DQ2".to_string(), "DQ1".to_string()]);

    let keys: Vec<String> = index.sorted().iter().map(|e| e.key().to_string()).collect();
    // Codepoint order: hiragana sorts before katakana.
    assert_eq!(keys, vec!["[DQ1] りゅうおう", "[DQ1] ゴーレム", "[DQ2] アトラス", "[DQ2] シドー"]);

    // Per-game listing keeps sheet order.
    let dq2_names: Vec<&str> = index.for_game("DQ2").map(|e| e.name.as_str()).collect();
    assert_eq!(dq2_names, vec!["シドー", "アトラス"]);

    let key = EncounterKey::new("DQ2", "シドー");
    assert_eq!(index.get(&key).and_then(|e| e.max_hp()), Some(250));
    assert!(index.get(&EncounterKey::new("DQ1", "シドー")).is_none());
}

#[test]
fn same_key_from_a_later_sheet_replaces() {
    let opts = IndexOptions::default();
    let mut index = EncounterIndex::new();
    index.push(encounter::build(&sheet("A,A,1,10,,,\n"), "DQ1", &opts));
    index.push(encounter::build(&sheet("A,A,1,20,,,\n"), "DQ1", &opts));
    assert_eq!(index.len(), 1);
    assert_eq!(index.games().len(), 1);
    assert_eq!(index.get(&EncounterKey::new("DQ1", "A")).unwrap().max_hp(), Some(20));
}

#[test]
fn boss_summary_cells() {
    let doc = sheet("ゴーレム,ゴーレム,1,70,メルキド入口,5,10\n");
    let map = encounter::group(&doc, "DQ1", &IndexOptions::default());
    let rows: Vec<Vec<String>> = encounter::summaries(&map).iter().map(BossSummary::cells).collect();
    assert_eq!(rows, vec![vec!["ゴーレム", "メルキド入口", "70", "5", "10"]]);
}

#[test]
fn bundled_sheets() {
    let opts = IndexOptions::default();
    let dq1 = CsvDocument::parse(include_str!("../data/dq1_boss_multiunit.csv"));
    let dq2 = CsvDocument::parse(include_str!("../data/dq2_boss_multiunit.csv"));

    assert_eq!(encounter::build(&dq1, "DQ1", &opts).len(), 5);
    assert_eq!(encounter::group(&dq2, "DQ2", &opts).len(), 7);
    // ローレシアの王 has no HP data.
    let built = encounter::build(&dq2, "DQ2", &opts);
    assert_eq!(built.len(), 6);
    assert!(built.get("ローレシアの王").is_none());
}
