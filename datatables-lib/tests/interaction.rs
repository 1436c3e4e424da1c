//! End-to-end render cycles through the in-memory widget boundary.

use datatables_lib::boundary::InMemoryBoundary;
use datatables_lib::config::{ActionSpec, ButtonDef, SelectMode, TableConfig};
use datatables_lib::error::{ConfigError, Error};
use datatables_lib::host::Host;
use datatables_lib::model::{Dataset, Row};
use datatables_lib::session::{InMemorySession, ResetOptions};
use datatables_lib::{DataTable, InteractionResult};

fn molecules(n: i64) -> Dataset {
    let rows = (0..n)
        .map(|i| Row::new().set("ID", i).set("NAME", format!("mol-{i}")).set("shape", "ring"))
        .collect();
    Dataset::new(["ID", "NAME", "shape"], rows).unwrap()
}

fn host() -> Host<InMemorySession, InMemoryBoundary> {
    Host::new(InMemorySession::new(), InMemoryBoundary::new())
}

#[test]
fn test_no_interaction_is_idle() {
    let host = host();
    let dataset = molecules(3);
    let config = TableConfig::new().key("table1").select(SelectMode::Single);

    let result = host.run(|cx| cx.table(Some(&dataset), &config)).unwrap();
    assert_eq!(result, InteractionResult::Idle);
    assert_eq!(result.to_value(), serde_json::json!({"rows": [], "indexes": [], "count": 0}));
}

#[test]
fn test_single_selection() {
    let host = host();
    let dataset = molecules(3);
    let config = TableConfig::new().key("table1");

    host.run(|cx| cx.table(Some(&dataset), &config)).unwrap();
    host.boundary().interact("table1", |w| w.toggle(1));

    let result = host.run(|cx| cx.table(Some(&dataset), &config)).unwrap();
    assert_eq!(
        result,
        InteractionResult::Selection {
            rows: vec![dataset.row(1).unwrap().clone()],
            indexes: vec![1],
            count: 1,
        }
    );
}

#[test]
fn test_multi_selection() {
    let host = host();
    let dataset = molecules(3);
    let config = TableConfig::new().key("table1").select(SelectMode::Multi);

    host.run(|cx| cx.table(Some(&dataset), &config)).unwrap();
    host.boundary().interact("table1", |w| {
        w.toggle(2);
        w.toggle(0);
    });

    let result = host.run(|cx| cx.table(Some(&dataset), &config)).unwrap();
    assert_eq!(
        result,
        InteractionResult::Selection {
            rows: vec![dataset.row(0).unwrap().clone(), dataset.row(2).unwrap().clone()],
            indexes: vec![0, 2],
            count: 2,
        }
    );
}

#[test]
fn test_action_click() {
    let host = host();
    let dataset = molecules(6);
    let config = TableConfig::new().key("buttons_table").actions(
        ActionSpec::new()
            .insert_at(0)
            .button(ButtonDef::new("view", "View").with_text("View"))
            .button(ButtonDef::new("delete", "Delete").with_svg("<svg/>")),
    );

    host.run(|cx| cx.table(Some(&dataset), &config)).unwrap();
    assert!(host.boundary().interact("buttons_table", |w| w.click_action("delete", 4)).unwrap());

    let result = host.run(|cx| cx.table(Some(&dataset), &config)).unwrap();
    let mut expected = serde_json::to_value(dataset.row(4).unwrap()).unwrap();
    expected["action"] = "delete".into();
    expected["_rowIndex"] = 4.into();
    assert_eq!(result.to_value(), expected);
    assert_eq!(result.action_id(), Some("delete"));
}

#[test]
fn test_only_last_interaction_is_observed() {
    let host = host();
    let dataset = molecules(3);
    let config = TableConfig::new()
        .key("t")
        .actions(ActionSpec::new().button(ButtonDef::new("view", "View").with_text("View")));

    host.run(|cx| cx.table(Some(&dataset), &config)).unwrap();
    host.boundary().interact("t", |w| {
        w.click_action("view", 0);
        w.select(2);
    });

    let result = host.run(|cx| cx.table(Some(&dataset), &config)).unwrap();
    assert_eq!(result.selected_indexes(), &[2]);
}

#[test]
fn test_first_reset_sends_nonce_one() {
    let host = host();
    let dataset = molecules(3);
    let config = TableConfig::new().key("table1");

    host.run(|cx| cx.reset_selection("table1", ResetOptions::no_rerun())).unwrap();

    let table = DataTable::new(host.session(), host.boundary());
    let payload = table.payload(Some(&dataset), &config).unwrap();
    assert_eq!(payload.reset_nonce, Some(1));
}

#[test]
fn test_reset_clears_selection_after_rerun() {
    let host = host();
    let dataset = molecules(3);
    let config = TableConfig::new().key("table1");

    host.run(|cx| cx.table(Some(&dataset), &config)).unwrap();
    host.boundary().interact("table1", |w| w.select(1));

    let mut passes = Vec::new();
    host.run(|cx| {
        let result = cx.table(Some(&dataset), &config)?;
        passes.push(result.clone());
        if result.selected_indexes() == [1] {
            cx.reset_selection("table1", ResetOptions::default())?;
        }
        Ok(())
    })
    .unwrap();

    assert_eq!(passes.len(), 2);
    assert_eq!(passes[0].selected_indexes(), &[1]);
    assert!(passes[1].is_idle());
    assert_eq!(host.boundary().widget("table1").unwrap().observed_nonce(), 1);
}

#[test]
fn test_ragged_dataset_fails_before_payload() {
    let rows = vec![
        Row::new().set("ID", 0i64).set("NAME", "a"),
        Row::new().set("ID", 1i64).set("shape", "ring"),
    ];
    let err = Dataset::from_records(rows).unwrap_err();
    assert!(matches!(err, ConfigError::RaggedRow { row: 1, .. }));
}

#[test]
fn test_missing_dataset_is_config_error() {
    let host = host();
    let err = host.run(|cx| cx.table(None, &TableConfig::new().key("t"))).unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::MissingDataset)));
    assert!(host.boundary().is_empty());
}
