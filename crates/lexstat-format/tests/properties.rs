use lexstat_format::{DECIMALS, report_row};
use lexstat_types::{CategoryPercents, DocumentReport, DocumentStats, REPORT_HEADER};
use proptest::prelude::*;

fn report() -> impl Strategy<Value = DocumentReport> {
    (
        "[a-z]{1,8}\\.txt",
        any::<u32>(),
        0usize..10_000,
        prop::array::uniform8(0.0f64..1000.0),
        0.0f64..20.0,
        0.0f64..20.0,
    )
        .prop_map(|(name, size, words, p, syl, len)| DocumentReport {
            document: name,
            size_bytes: u64::from(size),
            stats: DocumentStats {
                word_count: words,
                percentages: CategoryPercents {
                    positive: p[0],
                    negative: p[1],
                    uncertainty: p[2],
                    litigious: p[3],
                    weak_modal: p[4],
                    moderate_modal: p[5],
                    strong_modal: p[6],
                    constraining: p[7],
                },
                avg_syllables: syl,
                avg_word_length: len,
                vocabulary: words / 2,
                ..DocumentStats::default()
            },
        })
}

proptest! {
    #[test]
    fn row_width_always_matches_header(r in report()) {
        prop_assert_eq!(report_row(&r).len(), REPORT_HEADER.len());
    }

    #[test]
    fn ratio_cells_have_at_most_four_decimals(r in report()) {
        let row = report_row(&r);
        for cell in row[3..11].iter().chain(&row[15..17]) {
            let decimals = cell.split_once('.').map_or(0, |(_, frac)| frac.len());
            prop_assert!(decimals <= DECIMALS as usize, "cell {}", cell);
        }
    }
}
