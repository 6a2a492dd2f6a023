//! Golden values for the calendar-cipher engine.
//!
//! Pure-math tests (no collaborators needed).

use cipher_base::{
    ALL_BRANCHES, ALL_STEMS, Branch, CalendarDate, CipherError, ComputedFacts, Element, Stem,
    can_chi_from_str, can_chi_from_year, life_path_from_str, personal_cycles,
    personal_cycles_from_str, reduce_to_single_digit,
};

fn date(y: i32, m: u32, d: u32) -> CalendarDate {
    CalendarDate::new(y, m, d).unwrap()
}

// ---------------------------------------------------------------------------
// Reduction
// ---------------------------------------------------------------------------

#[test]
fn reduction_table() {
    let cases: [(i64, bool, u8); 8] = [
        (38, false, 2),
        (38, true, 11),
        (29, true, 11),
        (29, false, 2),
        (0, false, 0),
        (10, true, 1),
        (499, true, 22),
        (1977, true, 6),
    ];
    for (n, master, expected) in cases {
        let got = reduce_to_single_digit(n, master).unwrap();
        assert_eq!(got.value(), expected, "reduce({n}, {master})");
    }
}

#[test]
fn reduction_rejects_negative() {
    assert_eq!(
        reduce_to_single_digit(-5, false),
        Err(CipherError::InvalidInput(
            "cannot reduce negative number -5".into()
        ))
    );
}

// ---------------------------------------------------------------------------
// Life path
// ---------------------------------------------------------------------------

#[test]
fn life_path_golden() {
    let cases = [
        ("1990-07-16", 6),
        ("1990-01-09", 11),
        ("1998-09-04", 22),
        ("1969-12-31", 5),
        ("2000-01-01", 4),
    ];
    for (dob, expected) in cases {
        assert_eq!(life_path_from_str(dob).unwrap().value(), expected, "{dob}");
    }
}

#[test]
fn life_path_never_exceeds_22() {
    // max component sum is 9 + 9 + 9 = 27, so 33 cannot appear
    for year in 1900..2030 {
        for month in 1..=12 {
            let d = life_path_from_str(&format!("{year}-{month:02}-15")).unwrap();
            assert!(d.value() <= 9 || d.value() == 11 || d.value() == 22);
        }
    }
}

#[test]
fn life_path_missing_component_fails() {
    assert!(matches!(
        life_path_from_str("1990-07"),
        Err(CipherError::InvalidInput(_))
    ));
}

// ---------------------------------------------------------------------------
// Personal cycles
// ---------------------------------------------------------------------------

#[test]
fn cycles_golden() {
    let c = personal_cycles_from_str("1990-07-16", &date(2026, 10, 18)).unwrap();
    // 7 + 7 + (2026 → 10 → 1) = 15 → 6; 6 + 10 = 16 → 7; 7 + 18 = 25 → 7
    assert_eq!(c.personal_year.value(), 6);
    assert_eq!(c.personal_month.value(), 7);
    assert_eq!(c.personal_day.value(), 7);
}

#[test]
fn cycles_same_reference_month() {
    let birth = date(1990, 7, 16);
    let a = personal_cycles(&birth, &date(2026, 10, 1));
    for day in 2..=31 {
        let b = personal_cycles(&birth, &date(2026, 10, day));
        assert_eq!(a.personal_year, b.personal_year);
        assert_eq!(a.personal_month, b.personal_month);
    }
}

#[test]
fn cycles_change_across_years() {
    let birth = date(1990, 7, 16);
    let a = personal_cycles(&birth, &date(2025, 6, 1));
    let b = personal_cycles(&birth, &date(2026, 6, 1));
    assert_ne!(a.personal_year, b.personal_year);
}

// ---------------------------------------------------------------------------
// Can Chi
// ---------------------------------------------------------------------------

#[test]
fn can_chi_1990() {
    let cc = can_chi_from_str("1990-07-16").unwrap();
    assert_eq!(cc.stem, ALL_STEMS[0]);
    assert_eq!(cc.branch, ALL_BRANCHES[10]);
    assert_eq!(cc.element, cc.stem.element());
    assert_eq!(cc.element, Element::Metal);
    assert_eq!(cc.animal(), "Horse");
}

#[test]
fn can_chi_sweep_one_cycle() {
    let expected = [
        (2020, Stem::Canh, Branch::Ty, "Rat", Element::Metal),
        (2021, Stem::Tan, Branch::Suu, "Buffalo", Element::Metal),
        (2022, Stem::Nham, Branch::Dan, "Tiger", Element::Water),
        (2023, Stem::Quy, Branch::Mao, "Cat", Element::Water),
        (2024, Stem::Giap, Branch::Thin, "Dragon", Element::Wood),
        (2025, Stem::At, Branch::Ti, "Snake", Element::Wood),
        (2026, Stem::Binh, Branch::Ngo, "Horse", Element::Fire),
        (2027, Stem::Dinh, Branch::Mui, "Goat", Element::Fire),
        (2028, Stem::Mau, Branch::Than, "Monkey", Element::Earth),
        (2029, Stem::Ky, Branch::Dau, "Rooster", Element::Earth),
        (2030, Stem::Canh, Branch::Tuat, "Dog", Element::Metal),
        (2031, Stem::Tan, Branch::Hoi, "Pig", Element::Metal),
    ];
    for (year, stem, branch, animal, element) in expected {
        let cc = can_chi_from_year(year);
        assert_eq!(cc.stem, stem, "stem for {year}");
        assert_eq!(cc.branch, branch, "branch for {year}");
        assert_eq!(cc.animal(), animal, "animal for {year}");
        assert_eq!(cc.element, element, "element for {year}");
    }
}

#[test]
fn element_is_never_taken_from_branch() {
    // Same branch, different stems → different elements
    let a = can_chi_from_year(1990); // Canh Ngọ
    let b = can_chi_from_year(2026); // Bính Ngọ
    assert_eq!(a.branch, b.branch);
    assert_ne!(a.element, b.element);
}

#[test]
fn signed_or_empty_components_never_reach_the_engine() {
    assert!(matches!(
        CalendarDate::new(-1990, 7, 16),
        Err(CipherError::InvalidInput(_))
    ));
    assert!(CalendarDate::new(2024, 0, 0).is_err());
    assert!(life_path_from_str("-1990-07-16").is_err());
    assert!(personal_cycles_from_str("1990-07-16", &date(2024, 10, 18)).is_ok());
    assert!("2024-00-00".parse::<CalendarDate>().is_err());
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[test]
fn repeated_calls_identical() {
    let reference = date(2026, 10, 18);
    let a = ComputedFacts::from_dob("1984-02-29", &reference).unwrap();
    let b = ComputedFacts::from_dob("1984-02-29", &reference).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.source_of_truth(), b.source_of_truth());
}
