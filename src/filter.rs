use crate::model::record::MissingPersonRecord;

/// Lower-cased fields a query is matched against: name, city, state and contact phone
fn searchable_fields(record: &MissingPersonRecord) -> [String; 4] {
    [
        record.full_name.to_lowercase(),
        record.city().to_lowercase(),
        record.state().to_lowercase(),
        record
            .contact_phone
            .as_deref()
            .unwrap_or("")
            .to_lowercase(),
    ]
}

fn matches_lowered(record: &MissingPersonRecord, query: &str) -> bool {
    searchable_fields(record)
        .iter()
        .any(|field| field.contains(query))
}

/// Keeps the records where any searchable field contains the query, in their original order.
///
/// An empty query keeps every record. The input is never modified.
#[tracing::instrument(skip(records), fields(total = records.len()))]
pub fn filter_records<'a>(
    records: &'a [MissingPersonRecord],
    query: &str,
) -> Vec<&'a MissingPersonRecord> {
    let query = query.to_lowercase();

    let filtered_records = records
        .iter()
        .filter(|record| matches_lowered(record, &query))
        .collect();

    return filtered_records;
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::{consts::consts::RecordId, model::record::DisappearanceLocation};

    fn record(
        id: &str,
        name: &str,
        city: &str,
        state: &str,
        phone: Option<&str>,
    ) -> MissingPersonRecord {
        MissingPersonRecord {
            contact_phone: phone.map(str::to_string),
            disappearance_location: DisappearanceLocation {
                city: Some(city.to_string()),
                state: Some(state.to_string()),
                reference_point: None,
            },
            ..MissingPersonRecord::new(RecordId::from(id), name.to_string())
        }
    }

    fn collection() -> Vec<MissingPersonRecord> {
        vec![
            record("001", "Maria da Silva", "Campinas", "SP", Some("(19) 98888-1111")),
            record("002", "João Pereira", "Niterói", "RJ", None),
            record("003", "Ana Souza", "Belo Horizonte", "MG", Some("31 97777-2222")),
        ]
    }

    fn ids(records: &[&MissingPersonRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.to_string()).collect()
    }

    #[test]
    fn empty_query_keeps_every_record_in_order() {
        let records = collection();

        let filtered = filter_records(&records, "");

        assert_eq!(ids(&filtered), vec!["001", "002", "003"]);
    }

    #[rstest]
    #[case::name("maria", vec!["001"])]
    #[case::name_upper_case_query("SOUZA", vec!["003"])]
    #[case::city("niter", vec!["002"])]
    #[case::state("mg", vec!["003"])]
    #[case::phone("97777", vec!["003"])]
    #[case::shared_substring("a", vec!["001", "002", "003"])]
    #[case::no_match("curitiba", vec![])]
    fn matches_any_searchable_field(#[case] query: &str, #[case] expected: Vec<&str>) {
        let records = collection();

        let filtered = filter_records(&records, query);

        assert_eq!(ids(&filtered), expected);
    }

    #[test]
    fn absent_fields_only_match_empty_query() {
        let records = vec![MissingPersonRecord::new(RecordId::from("009"), String::new())];

        assert_eq!(filter_records(&records, "").len(), 1);
        assert!(filter_records(&records, "x").is_empty());
    }

    #[test]
    fn characteristics_are_not_searchable() {
        let records = vec![MissingPersonRecord {
            characteristics: Some("tatuagem no braço".to_string()),
            ..record("010", "Carlos", "Recife", "PE", None)
        }];

        assert!(filter_records(&records, "tatuagem").is_empty());
    }
}
