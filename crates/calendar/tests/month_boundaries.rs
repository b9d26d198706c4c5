use plaindate_calendar::{end_of_month, start_of_month};
use plaindate_core::PlainDate;

fn month() -> PlainDate {
    PlainDate::ym(2018, 5)
}

fn middle() -> PlainDate {
    PlainDate::ymd(2018, 5, 16)
}

#[test]
fn start_of_month_of_a_day() {
    assert!(start_of_month(&middle()).same_instance(&PlainDate::ymd(2018, 5, 1)));
}

#[test]
fn start_of_month_of_a_month() {
    assert!(start_of_month(&month()).same_instance(&PlainDate::ymd(2018, 5, 1)));
}

#[test]
fn end_of_month_of_a_day() {
    assert!(end_of_month(&middle()).unwrap().same_instance(&PlainDate::ymd(2018, 5, 31)));
}

#[test]
fn end_of_month_of_a_month() {
    assert!(end_of_month(&month()).unwrap().same_instance(&PlainDate::ymd(2018, 5, 31)));
}

#[test]
fn end_of_month_in_leap_years() {
    for (year, last) in [(2016, 29), (2018, 28), (2020, 29), (2100, 28), (2400, 29)] {
        assert_eq!(
            end_of_month(&PlainDate::ym(year, 2)).unwrap(),
            PlainDate::ymd(year, 2, last),
            "February {year}"
        );
    }
}

#[test]
fn boundaries_enclose_every_day_of_the_month() {
    let start = start_of_month(&month());
    let end = end_of_month(&month()).unwrap();
    for day in 1..=31 {
        assert!(PlainDate::ymd(2018, 5, day).is_within(&start, &end), "day {day}");
    }
    assert!(!PlainDate::ymd(2018, 6, 1).is_within(&start, &end));
}
