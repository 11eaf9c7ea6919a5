use calamine::{open_workbook, Data, Reader, Xlsx};
use datasynth_core::{
    generate_campaigns, generate_long, generate_wide, CampaignParams, CellValue, ColumnKey,
    CsvWriter, LongParams, NoiseParams, OutputFormat, RngFactory, SheetWriter, Table, WideParams,
    XlsxWriter,
};
use std::path::Path;
use tempfile::tempdir;

fn read_sheet(path: &Path) -> calamine::Range<Data> {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    workbook.worksheet_range("Sheet1").unwrap()
}

fn text_at(range: &calamine::Range<Data>, row: u32, col: u32) -> String {
    match range.get_value((row, col)) {
        Some(Data::String(s)) => s.clone(),
        _ => String::new(),
    }
}

#[test]
fn test_xlsx_long_layout() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("synthetic_dataset_1.xlsx");
    let params = LongParams {
        num_rows: 16,
        noise: NoiseParams::clean(),
        wrong_type_cols: vec![],
    };
    let table = generate_long(&params, &mut RngFactory::new(1).stream(0))
        .unwrap()
        .table;
    XlsxWriter::new().write(&table, &path).unwrap();

    let range = read_sheet(&path);
    assert_eq!(range.get_size(), (17, 4));
    let header: Vec<String> = (0..4).map(|c| text_at(&range, 0, c)).collect();
    assert_eq!(header, vec!["Date", "Channel", "Metric", "Value"]);
    for r in 1..17 {
        assert!(matches!(
            range.get_value((r, 0)),
            Some(Data::DateTime(_)) | Some(Data::Float(_))
        ));
        assert!(matches!(range.get_value((r, 3)), Some(Data::Float(_))));
    }
}

#[test]
fn test_xlsx_wide_stacked_headers() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wide.xlsx");
    let params = WideParams {
        num_dates: 3,
        noise: NoiseParams::clean(),
        wrong_type_cells: vec![],
    };
    let table = generate_wide(&params, &mut RngFactory::new(2).stream(0))
        .unwrap()
        .table;
    XlsxWriter::new().write(&table, &path).unwrap();

    let range = read_sheet(&path);
    // two header rows, three data rows, index plus four value columns
    assert_eq!(range.get_size(), (5, 5));
    assert_eq!(text_at(&range, 1, 0), "Date");
    assert_eq!(text_at(&range, 0, 1), "TV");
    assert_eq!(text_at(&range, 0, 3), "Radio");
    let fields: Vec<String> = (1..5).map(|c| text_at(&range, 1, c)).collect();
    assert_eq!(fields, vec!["Spend", "GRPs", "Spend", "GRPs"]);
}

#[test]
fn test_xlsx_campaign_groups_and_spacer() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("campaign.xlsx");
    let params = CampaignParams {
        num_campaigns: 2,
        num_dates: 2,
        noise: NoiseParams::clean(),
    };
    let table = generate_campaigns(&params, &mut RngFactory::new(3).stream(0))
        .unwrap()
        .table;
    XlsxWriter::new().write(&table, &path).unwrap();

    let range = read_sheet(&path);
    assert_eq!(text_at(&range, 0, 0), "Campaign A");
    assert_eq!(text_at(&range, 0, 5), "Campaign B");
    assert_eq!(text_at(&range, 1, 4), "");
    assert_eq!(text_at(&range, 1, 5), "Date");
    assert_eq!(text_at(&range, 1, 8), "Radio");
}

#[test]
fn test_xlsx_empty_and_malformed_cells() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("noisy.xlsx");
    let mut table = Table::new(vec![ColumnKey::simple("Value"), ColumnKey::simple("Note")]);
    table
        .push_row(vec![CellValue::Empty, CellValue::Text("ok".into())])
        .unwrap();
    table
        .push_row(vec![
            CellValue::Malformed("one hundred".into()),
            CellValue::Integer(3),
        ])
        .unwrap();
    XlsxWriter::new().write(&table, &path).unwrap();

    let range = read_sheet(&path);
    assert!(matches!(
        range.get_value((1, 0)),
        None | Some(Data::Empty)
    ));
    assert_eq!(text_at(&range, 2, 0), "one hundred");
    assert_eq!(range.get_value((2, 1)), Some(&Data::Float(3.0)));
}

#[test]
fn test_csv_writer_with_index() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out/wide.csv");
    let params = WideParams {
        num_dates: 2,
        noise: NoiseParams::clean(),
        wrong_type_cells: vec![],
    };
    let table = generate_wide(&params, &mut RngFactory::new(4).stream(0))
        .unwrap()
        .table;
    let writer = OutputFormat::Csv.writer();
    assert_eq!(writer.extension(), "csv");
    writer.write(&table, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Date,TV|Spend,TV|GRPs,Radio|Spend,Radio|GRPs");
    assert_eq!(lines[1].split(',').count(), 5);
}

#[test]
fn test_csv_writer_null_cells() {
    let mut table = Table::new(vec![ColumnKey::simple("Date"), ColumnKey::simple("Value")]);
    table
        .push_row(vec![CellValue::Malformed("soon".into()), CellValue::Empty])
        .unwrap();
    let text = String::from_utf8(CsvWriter::new().to_bytes(&table).unwrap()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["Date,Value", "soon,"]);
}
