use std::collections::HashSet;

use crate::record::ProjectRecord;

/// Records of `extracted` whose link is not in `known`, in extraction order.
///
/// A link repeated within `extracted` is only kept the first time.
pub fn novel_records(
    known: &[ProjectRecord],
    extracted: Vec<ProjectRecord>,
) -> Vec<ProjectRecord> {
    let mut seen: HashSet<String> = known.iter().map(|r| r.link.clone()).collect();
    extracted
        .into_iter()
        .filter(|r| seen.insert(r.link.clone()))
        .collect()
}

/// Append the novel records of `extracted` after every known record.
///
/// Returns the number of records appended.
pub fn merge(known: &mut Vec<ProjectRecord>, extracted: Vec<ProjectRecord>) -> usize {
    let novel = novel_records(known, extracted);
    let n = novel.len();
    known.extend(novel);
    n
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn record(link: &str) -> ProjectRecord {
        ProjectRecord {
            title: link.to_uppercase(),
            link: link.to_owned(),
            image: "https://via.placeholder.com/150".to_owned(),
            retrieved_at: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    fn links(records: &[ProjectRecord]) -> Vec<&str> {
        records.iter().map(|r| r.link.as_str()).collect()
    }

    #[test]
    fn only_unknown_links_are_appended() {
        let mut known = vec![record("a"), record("b")];
        let added = merge(&mut known, vec![record("a"), record("c")]);
        assert_eq!(added, 1);
        assert_eq!(links(&known), vec!["a", "b", "c"]);
    }

    #[test]
    fn merging_twice_adds_nothing_the_second_time() {
        let extracted = vec![record("x"), record("y"), record("z")];
        let mut known = vec![];
        assert_eq!(merge(&mut known, extracted.clone()), 3);
        assert_eq!(merge(&mut known, extracted), 0);
        assert_eq!(links(&known), vec!["x", "y", "z"]);
    }

    #[test]
    fn novel_records_keep_extraction_order() {
        let known = vec![record("b")];
        let novel = novel_records(&known, vec![record("d"), record("b"), record("a"), record("c")]);
        assert_eq!(links(&novel), vec!["d", "a", "c"]);
    }

    #[test]
    fn duplicates_within_one_extraction_are_collapsed() {
        let mut known = vec![record("a")];
        merge(&mut known, vec![record("b"), record("b"), record("a"), record("c"), record("b")]);
        assert_eq!(links(&known), vec!["a", "b", "c"]);

        let unique: HashSet<&str> = known.iter().map(|r| r.link.as_str()).collect();
        assert_eq!(unique.len(), known.len());
    }
}
