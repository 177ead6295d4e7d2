//! Unit tests for stat table extraction

use super::*;

const STANDARD_PAGE: &str = r#"
<html><body>
<div id="all_stats_squads_standard">
  <table id="stats_squads_standard_for">
    <thead><tr><th>Squad</th><th>Pl</th></tr></thead>
    <tbody><tr><th>Atlanta Utd</th><td>31</td></tr></tbody>
  </table>
</div>
<div id="all_stats_standard">
  <table id="stats_standard" class="stats_table">
    <thead>
      <tr class="over_header">
        <th colspan="4"></th>
        <th colspan="2">Playing Time</th>
        <th colspan="2">Performance</th>
        <th colspan="2">Per 90 Minutes</th>
      </tr>
      <tr>
        <th data-stat="ranker">Rk</th>
        <th data-stat="player">Player</th>
        <th data-stat="nationality">Nation</th>
        <th data-stat="team">Squad</th>
        <th data-stat="games">MP</th>
        <th data-stat="minutes">Min</th>
        <th data-stat="goals">Gls</th>
        <th data-stat="assists">Ast</th>
        <th data-stat="goals_per90">Gls</th>
        <th data-stat="assists_per90">Ast</th>
      </tr>
    </thead>
    <tbody>
      <tr>
        <th data-stat="ranker">1</th>
        <td data-stat="player"><a href="/en/players/x">Lionel  Messi</a></td>
        <td data-stat="nationality"><span>ar</span> ARG</td>
        <td data-stat="team">Inter Miami</td>
        <td>28</td><td>2,345</td><td>29</td><td>19</td><td>1.11</td><td>0.73</td>
      </tr>
      <tr class="thead">
        <th>Rk</th><th>Player</th><th>Nation</th><th>Squad</th><th>MP</th>
        <th>Min</th><th>Gls</th><th>Ast</th><th>Gls</th><th>Ast</th>
      </tr>
      <tr>
        <th data-stat="ranker">2</th>
        <td data-stat="player">Denis Bouanga</td>
        <td data-stat="nationality">ga GAB</td>
        <td data-stat="team">LAFC</td>
        <td>34</td><td>2,980</td><td>24</td><td>8</td><td>0.72</td>
      </tr>
      <tr>
        <th>Rk</th><td>Player</td><td>Nation</td><td>Squad</td><td>MP</td>
        <td>Min</td><td>Gls</td><td>Ast</td><td>Gls</td><td>Ast</td>
      </tr>
      <tr class="spacer"><td colspan="10"></td></tr>
      <tr>
        <th data-stat="ranker">3</th>
        <td data-stat="player">Sam Surridge</td>
        <td data-stat="nationality">eng ENG</td>
        <td data-stat="team">Nashville</td>
        <td>33</td><td>2,701</td><td>24</td><td>4</td><td>0.80</td><td>0.13</td>
      </tr>
    </tbody>
  </table>
</div>
</body></html>
"#;

#[test]
fn test_extract_standard_table_columns() {
    let table = extract_stat_table(STANDARD_PAGE, StatCategory::Standard).unwrap();

    assert_eq!(
        table.columns,
        vec![
            "Rk",
            "Player",
            "Nation",
            "Squad",
            "MP",
            "Min",
            "Gls",
            "Ast",
            "Per 90 Minutes_Gls",
            "Per 90 Minutes_Ast",
        ]
    );
}

#[test]
fn test_extract_standard_table_rows() {
    let table = extract_stat_table(STANDARD_PAGE, StatCategory::Standard).unwrap();

    assert_eq!(table.rows.len(), 3);
    for row in &table.rows {
        assert_eq!(row.cells.len(), table.columns.len());
    }

    assert_eq!(
        table.value(0, "Player"),
        Some(&CellValue::Text("Lionel Messi".to_string()))
    );
    assert_eq!(
        table.value(0, "Nation"),
        Some(&CellValue::Text("ar ARG".to_string()))
    );
    assert_eq!(table.value(0, "Min").and_then(CellValue::as_f64), Some(2345.0));
    assert_eq!(
        table.value(2, "Per 90 Minutes_Ast").map(|v| v.to_string()),
        Some("0.13".to_string())
    );
}

#[test]
fn test_short_rows_are_padded() {
    let table = extract_stat_table(STANDARD_PAGE, StatCategory::Standard).unwrap();
    assert_eq!(table.value(1, "Per 90 Minutes_Ast"), Some(&CellValue::Empty));
}

#[test]
fn test_missing_table_is_not_found() {
    let result = extract_stat_table(STANDARD_PAGE, StatCategory::Passing);

    match result {
        Err(MlsError::TableNotFound { table_id }) => assert_eq!(table_id, "stats_passing"),
        other => panic!("Expected TableNotFound, got {:?}", other.map(|t| t.rows.len())),
    }
}

#[test]
fn test_commented_out_table_is_not_found() {
    // FBref ships hidden tables inside HTML comments until "Show" is clicked.
    let html = r#"<div id="all_stats_standard"><!--
        <table id="stats_standard"><thead><tr><th>Player</th></tr></thead>
        <tbody><tr><td>Someone</td></tr></tbody></table>
    --></div>"#;

    assert!(matches!(
        extract_stat_table(html, StatCategory::Standard),
        Err(MlsError::TableNotFound { .. })
    ));
}

#[test]
fn test_table_without_thead_uses_first_row() {
    let html = r#"<table id="stats_misc">
        <tr><th>Player</th><th>CrdY</th></tr>
        <tr><td>A</td><td>3</td></tr>
    </table>"#;

    let table = extract_stat_table(html, StatCategory::Miscellaneous).unwrap();
    assert_eq!(table.columns, vec!["Player", "CrdY"]);
    assert_eq!(table.rows.len(), 1);
}

#[test]
fn test_headerless_table_does_not_repeat_header_row() {
    let html = r#"<table id="stats_keeper">
        <tr><th>Squad</th><th>GA</th><th>Saves</th></tr>
        <tr><td>LAFC</td><td>31</td><td>88</td></tr>
        <tr><td>Nashville</td><td>27</td><td>95</td></tr>
    </table>"#;

    let table = extract_stat_table(html, StatCategory::Goalkeeping).unwrap();
    assert_eq!(table.columns, vec!["Squad", "GA", "Saves"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(
        table.value(0, "Squad"),
        Some(&CellValue::Text("LAFC".to_string()))
    );
}

#[test]
fn test_per90_values_keep_printed_decimals() {
    let html = r#"<table id="stats_standard">
        <thead><tr><th>Player</th><th>Gls</th><th>+/-</th></tr></thead>
        <tbody><tr><td>A</td><td>1.00</td><td>+2</td></tr></tbody>
    </table>"#;

    let table = extract_stat_table(html, StatCategory::Standard).unwrap();
    let mut out = Vec::new();
    table.write_csv(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Player,Gls,+/-\nA,1.00,+2\n");
}

#[test]
fn test_flatten_columns_without_groups() {
    let leaves = vec!["Player".to_string(), "".to_string(), "Squad".to_string()];
    assert_eq!(
        flatten_columns(&[], &leaves),
        vec!["Player", "column_2", "Squad"]
    );
}

#[test]
fn test_flatten_columns_keeps_unknown_groups() {
    let groups = vec![
        "".to_string(),
        "Progression".to_string(),
        "Expected".to_string(),
    ];
    let leaves = vec!["Player".to_string(), "PrgC".to_string(), "xG".to_string()];
    assert_eq!(
        flatten_columns(&groups, &leaves),
        vec!["Player", "Progression_PrgC", "xG"]
    );
}

#[test]
fn test_flatten_columns_never_duplicates() {
    let groups = vec!["".to_string(), "".to_string()];
    let leaves = vec!["Gls".to_string(), "Gls".to_string()];
    assert_eq!(flatten_columns(&groups, &leaves), vec!["Gls", "Gls_2"]);
}
