//! Integration tests for tuongso_rs using the built-in tables.

use chrono::NaiveDate;
use tuongso_rs::*;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn calculate_reference_date() {
    let r = calculate(15, 6, 1990).unwrap();
    assert_eq!((r.can_xuong, r.tinh_luong, r.tang_mao), (4, 3, 8));
    assert_eq!(r.element, Element::Kim);
    assert!(is_initialized());
}

#[test]
fn calculate_str_both_formats() {
    let a = calculate_str("03/03/2003").unwrap();
    let b = calculate_str("2003-03-03").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.tinh_luong, 9);
}

#[test]
fn calculate_rejects_invalid_date() {
    assert_eq!(
        calculate(31, 4, 2000),
        Err(TuongsoError::Numerology(NumerologyError::InvalidDate {
            day: 31,
            month: 4,
            year: 2000
        }))
    );
}

#[test]
fn calculate_rejects_far_future() {
    let err = calculate(1, 1, 9999).unwrap_err();
    assert!(matches!(
        err,
        TuongsoError::Numerology(NumerologyError::FutureDate { .. })
    ));
}

#[test]
fn calculate_on_fixed_today() {
    let date = BirthDate::new(1, 1, 2005).unwrap();
    let r = calculate_on(date, day(2005, 1, 1)).unwrap();
    assert_eq!(r.tang_mao, 10);
    assert!(calculate_on(date, day(2004, 12, 31)).is_err());
}

#[test]
fn calculate_str_garbage() {
    assert!(matches!(
        calculate_str("15.06.1990"),
        Err(TuongsoError::Numerology(NumerologyError::Parse(_)))
    ));
}

#[test]
fn indices_only() {
    let idx = indices(29, 2, 2024).unwrap();
    assert_eq!(
        (idx.can_xuong(), idx.tinh_luong(), idx.tang_mao()),
        (3, 1, 8)
    );
}

#[test]
fn interpret_raw_indices() {
    let r = interpret(4, 3, 8).unwrap();
    assert_eq!(r, calculate(15, 6, 1990).unwrap());
    assert!(interpret(0, 3, 8).is_err());
    assert!(interpret(4, 3, 11).is_err());
}

#[test]
fn global_tables_are_builtin_by_default() {
    assert_eq!(tables(), InterpretationTables::builtin());
}

#[test]
fn concurrent_calculations_agree() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| calculate(15, 6, 1990).unwrap()))
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn permission_reexports() {
    let roles = RoleSet::from_names(["Admin"]);
    assert!(roles.has_permission(Permission::AccessDashboard));
    assert!(has_permission(["User"], "create_story"));
    assert_eq!(roles.roles().next(), Some(Role::Admin));
}
