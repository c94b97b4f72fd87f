use std::cmp::Ordering;

use anyhow::Result;

use pitch_accent_dictionary::{
    pitch_accent::{
        record_loader::{load_pitch_accent_entries, PitchAccentEntry},
        sort::sort_pitch_accent_entries,
    },
    utility::str::{cmp_utf16, split_lines},
};

fn load(content: &str) -> Result<Vec<PitchAccentEntry>> {
    load_pitch_accent_entries(split_lines(content).into_iter())
}

fn order(entries: &[PitchAccentEntry]) -> Vec<(usize, &str)> {
    entries
        .iter()
        .map(|e| (e.line_index, e.expression.as_str()))
        .collect()
}

#[test]
fn test_sort_by_normalized_then_raw_then_input_order() -> Result<()> {
    let mut entries = load(
        "が\tが\t1\n\
         か\u{3099}\tが\t2\n\
         あ\tあ\t0\n\
         が\tが\t3\n\
         か\tか\t0\n",
    )?;
    sort_pitch_accent_entries(&mut entries);

    assert_eq!(
        order(&entries),
        vec![
            (2, "あ"),
            (4, "か"),
            (1, "か\u{3099}"),
            (0, "が"),
            (3, "が"),
        ]
    );

    Ok(())
}

#[test]
fn test_sort_is_stable_for_identical_expressions() -> Result<()> {
    let content = (0..50)
        .map(|i| format!("橋\tはし\t{}", i))
        .collect::<Vec<_>>()
        .join("\n");
    let mut entries = load(&content)?;
    entries.reverse();
    sort_pitch_accent_entries(&mut entries);

    let positions: Vec<_> = entries
        .iter()
        .map(|e| e.record.pitches[0].position)
        .collect();
    assert_eq!(positions, (0..50).collect::<Vec<_>>());

    Ok(())
}

#[test]
fn test_sort_uses_utf16_order() -> Result<()> {
    assert_eq!(cmp_utf16("\u{ff21}", "\u{20000}"), Ordering::Greater);
    assert_eq!(cmp_utf16("あ", "あい"), Ordering::Less);
    assert_eq!(cmp_utf16("橋", "橋"), Ordering::Equal);

    let mut entries = load("\u{ff21}\tえー\t1\n\u{20000}\tほ\t0\n")?;
    sort_pitch_accent_entries(&mut entries);
    assert_eq!(order(&entries), vec![(1, "\u{20000}"), (0, "\u{ff21}")]);

    Ok(())
}
