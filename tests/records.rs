use lotadj_tools::ToolError;
use lotadj_tools::classify::Classifier;
use lotadj_tools::model::{ADJUSTMENT_HEADER, Category, SourceRow};
use lotadj_tools::parse::parse_adjustment;
use lotadj_tools::partition::category_table;
use lotadj_tools::process::{RecordBuilder, RunConfig, collect_records};

fn test_builder(bin: &str) -> RecordBuilder {
    RecordBuilder::new(bin, &RunConfig::default()).with_date("1/2/2026")
}

fn source_row(index: u32, adjustment: &str, lot: &str, item: &str, qty: f64) -> SourceRow {
    SourceRow {
        index,
        adjustment: adjustment.to_string(),
        lot: lot.to_string(),
        item: item.to_string(),
        qty: Some(qty),
        qty_raw: qty.to_string(),
    }
}

#[test]
fn instrument_prefixes_classify_as_instrument() {
    let classifier = Classifier::default();
    assert_eq!(classifier.classify("150912345"), Category::Instrument);
    assert_eq!(classifier.classify("150577"), Category::Instrument);
    assert_eq!(classifier.classify("150112345"), Category::Implant);
    assert_eq!(classifier.classify("2509"), Category::Implant);
    assert_eq!(classifier.classify(""), Category::Implant);
}

#[test]
fn explicit_quantity_overrides_fallback() {
    let entries = parse_adjustment("LOT99 (5)", 10.0).expect("adjustment parsed");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].target_lot, "LOT99");
    assert_eq!(entries[0].quantity, 5.0);
}

#[test]
fn bare_lot_carries_fallback_quantity() {
    let entries = parse_adjustment("LOT99", 10.0).expect("adjustment parsed");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].target_lot, "LOT99");
    assert_eq!(entries[0].quantity, 10.0);
}

#[test]
fn multi_lot_text_yields_one_entry_per_segment() {
    let entries = parse_adjustment("LOT99 (5), LOT88 (3)", 10.0).expect("adjustment parsed");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].target_lot, "LOT99");
    assert_eq!(entries[0].quantity, 5.0);
    assert_eq!(entries[1].target_lot, "LOT88");
    assert_eq!(entries[1].quantity, 3.0);
}

#[test]
fn unbracketed_and_negative_quantities_parse() {
    let entries = parse_adjustment("LOT5 7", 1.0).expect("adjustment parsed");
    assert_eq!(entries[0].quantity, 7.0);

    let entries = parse_adjustment("LOT5 (-3)", 1.0).expect("adjustment parsed");
    assert_eq!(entries[0].quantity, -3.0);
}

#[test]
fn non_numeric_quantity_is_rejected() {
    let error = parse_adjustment("LOT99 (five)", 10.0).expect_err("quantity must be numeric");
    assert!(matches!(error, ToolError::InvalidQuantity { value } if value == "(five)"));
}

#[test]
fn multi_lot_segment_without_quantity_is_rejected() {
    let error = parse_adjustment("LOT99 (5), LOT88", 10.0).expect_err("segment needs two tokens");
    assert!(matches!(error, ToolError::MalformedAdjustment { entry, .. } if entry == "LOT88"));
}

#[test]
fn single_adjustment_builds_out_then_in() {
    let builder = test_builder("B42");
    let entries = parse_adjustment("LOT99 (5)", 10.0).expect("adjustment parsed");
    let records = builder.build("150912345", "LOT01", 10.0, &entries);

    assert_eq!(records.len(), 2);

    let out = &records[0];
    assert_eq!(out.lot_number, "LOT01");
    assert_eq!(out.adj_qty_by, -10.0);
    assert_eq!(out.quantity, -10.0);

    let incoming = &records[1];
    assert_eq!(incoming.lot_number, "LOT99");
    assert_eq!(incoming.adj_qty_by, 5.0);

    for record in &records {
        assert_eq!(record.reference_number, "To Be Generated");
        assert_eq!(record.category, Category::Instrument);
        assert_eq!(
            record.adjustment_account,
            "65390 Manufacturing Overhead : Instrument wear"
        );
        assert_eq!(record.adjustment_account_reason, "SI Transaction");
        assert_eq!(record.bin_number, "B42");
        assert_eq!(record.location, "TRAYBUILD");
        assert_eq!(record.memo, "Cortera MMO Trays - ");
        assert_eq!(record.date, "1/2/2026");
    }
}

#[test]
fn multi_lot_adjustment_negates_original_quantity_per_pair() {
    let builder = test_builder("B42");
    let entries = parse_adjustment("LOT99 (5), LOT88 (3)", 10.0).expect("adjustment parsed");
    let records = builder.build("200100", "LOT01", 10.0, &entries);

    let summary: Vec<(&str, f64)> = records
        .iter()
        .map(|record| (record.lot_number.as_str(), record.adj_qty_by))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("LOT01", -10.0),
            ("LOT99", 5.0),
            ("LOT01", -10.0),
            ("LOT88", 3.0),
        ]
    );
}

#[test]
fn implant_items_post_against_the_implant_account() {
    let builder = test_builder("B42");
    let entries = parse_adjustment("LOT7", 4.0).expect("adjustment parsed");
    let records = builder.build("300200", "LOT02", 4.0, &entries);

    assert_eq!(records[1].category, Category::Implant);
    assert_eq!(
        records[1].adjustment_account,
        "65240 Manufacturing Overhead : Physical inventory adjustments"
    );
    assert_eq!(records[1].adjustment_account_reason, "HW Transaction");
}

#[test]
fn rows_without_adjustment_text_are_skipped() {
    let builder = test_builder("B42");
    let rows = vec![
        source_row(2, "", "LOT01", "150912345", 10.0),
        source_row(3, "   ", "LOT02", "200100", 4.0),
        source_row(4, "LOT99", "LOT03", "200200", 2.0),
    ];

    let outcome = collect_records(&rows, &builder);
    assert_eq!(outcome.rows_processed, 1);
    assert_eq!(outcome.records.len(), 2);
    assert!(outcome.issues.is_empty());
}

#[test]
fn a_bad_row_does_not_affect_other_rows() {
    let builder = test_builder("B42");
    let bad_qty = SourceRow {
        qty: None,
        qty_raw: "n/a".to_string(),
        ..source_row(3, "LOT88", "LOT02", "200100", 0.0)
    };
    let rows = vec![
        source_row(2, "LOT99 (5)", "LOT01", "150912345", 10.0),
        bad_qty,
        source_row(4, "LOT77 (oops)", "LOT03", "200200", 2.0),
        source_row(5, "LOT66", "LOT04", "200300", 6.0),
    ];

    let outcome = collect_records(&rows, &builder);
    assert_eq!(outcome.rows_processed, 4);
    assert_eq!(outcome.records.len(), 4);
    assert_eq!(outcome.issues.len(), 2);
    assert_eq!(outcome.issues[0].row, 3);
    assert!(matches!(
        outcome.issues[0].error,
        ToolError::InvalidQuantity { .. }
    ));
    assert_eq!(outcome.issues[1].row, 4);
}

#[test]
fn partitioning_is_a_stable_exhaustive_filter() {
    let builder = test_builder("B42");
    let rows = vec![
        source_row(2, "LOT99 (5)", "LOT01", "150912345", 10.0),
        source_row(3, "LOT88", "LOT02", "200100", 4.0),
        source_row(4, "LOT77 (2), LOT66 (1)", "LOT03", "150511111", 3.0),
    ];
    let outcome = collect_records(&rows, &builder);
    assert_eq!(outcome.records.len(), 8);

    let instruments = category_table(&outcome.records, Category::Instrument, "B42");
    let implants = category_table(&outcome.records, Category::Implant, "B42");

    assert_eq!(instruments.sheet_name, "B42-ADJ-INSTRUMENT");
    assert_eq!(implants.sheet_name, "B42-ADJ-IMPLANT");
    assert_eq!(instruments.rows.len() + implants.rows.len(), 8);

    // Row 2 and row 4 records keep their accumulation order.
    let lots: Vec<&str> = instruments
        .rows
        .iter()
        .map(|row| row[7].as_str())
        .collect();
    assert_eq!(lots, vec!["LOT01", "LOT99", "LOT03", "LOT77", "LOT03", "LOT66"]);

    let implant_lots: Vec<&str> = implants.rows.iter().map(|row| row[7].as_str()).collect();
    assert_eq!(implant_lots, vec!["LOT02", "LOT88"]);
}

#[test]
fn tables_carry_the_fixed_upload_header() {
    let table = category_table(&[], Category::Implant, "B42");
    assert_eq!(table.columns.len(), 13);
    let expected: Vec<String> = ADJUSTMENT_HEADER
        .iter()
        .map(|label| (*label).to_string())
        .collect();
    assert_eq!(table.columns, expected);
    // Misspelling required by the upload template.
    assert_eq!(table.columns[8], "Quantitiy");
    assert!(table.rows.is_empty());
}
