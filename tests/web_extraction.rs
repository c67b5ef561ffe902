use record_miner::ingestion::extract_page_fields;
use record_miner::store::Store;
use record_miner::types::FieldValue;

fn texts(value: &FieldValue) -> Vec<&str> {
    match value {
        FieldValue::List(items) => items.iter().filter_map(|v| v.as_text()).collect(),
        other => panic!("expected a list, got {other:?}"),
    }
}

#[test]
fn extracts_emails_phones_and_urls() {
    let content =
        "Reach support@example.com or call +4712345678. Docs live at https://docs.example.com/start";
    let fields = extract_page_fields(content).unwrap();

    assert_eq!(texts(&fields["emails"]), ["support@example.com"]);
    assert_eq!(texts(&fields["phones"]), ["+4712345678"]);
    assert_eq!(texts(&fields["urls"]), ["https://docs.example.com/start"]);
    assert_eq!(
        fields["length"],
        FieldValue::Number(content.len() as f64)
    );
}

#[test]
fn plain_text_yields_empty_lists_but_still_a_length() {
    let fields = extract_page_fields("nothing to see here").unwrap();

    assert_eq!(texts(&fields["emails"]), Vec::<&str>::new());
    assert_eq!(texts(&fields["urls"]), Vec::<&str>::new());
    assert_eq!(fields["length"], FieldValue::Number(19.0));
}

#[test]
fn extracted_fields_append_as_web_records() {
    let fields = extract_page_fields("mail a@b.io").unwrap();

    let mut store = Store::new();
    let record = store.append(fields, "http://example.com", "web");

    assert_eq!(record.category, "web");
    assert_eq!(texts(&record.fields["emails"]), ["a@b.io"]);
}
