use rindirect::core::calculator::duration::{
    MAX_DURATION_MINUTES, coerce_minutes, is_numeric, total_minutes,
};
use rindirect::core::calculator::eod::{REFERENCE_SHIFT_MINUTES, calculate_eod};
use rindirect::core::calculator::remaining::calculate_remaining;
use rindirect::core::calculator::schedule::build_schedule;
use rindirect::core::logic::Core;
use rindirect::models::entry::Entry;
use rindirect::models::view_mode::ViewMode;
use rindirect::utils::colors::{GREY, RESET, colorize_optional};
use rindirect::utils::formatting::{decimal_hours, humanize_minutes, minutes_label};
use rindirect::utils::time::{format_clock, parse_minutes};

fn seeded() -> Vec<Entry> {
    vec![Entry::new("Lunch", "60"), Entry::new("Break", "30")]
}

#[test]
fn test_default_entries_schedule_before_ten_pm() {
    let schedule = build_schedule(&seeded(), parse_minutes("22:00").unwrap());

    assert_eq!(schedule.end_minutes, 1320);
    assert_eq!(schedule.total, 90);
    assert_eq!(schedule.adjusted_start, 1230);
    assert_eq!(format_clock(schedule.adjusted_start), "8:30 PM");

    let lunch = &schedule.items[0];
    assert_eq!(lunch.label, "Lunch");
    assert_eq!(lunch.start_clock(), "8:30 PM");
    assert_eq!(lunch.end_clock(), "9:30 PM");

    let brk = &schedule.items[1];
    assert_eq!(brk.label, "Break");
    assert_eq!(brk.start_clock(), "9:30 PM");
    assert_eq!(brk.end_clock(), "10:00 PM");
}

#[test]
fn test_schedule_blocks_are_contiguous_and_sum_to_total() {
    let lists = vec![
        vec![],
        seeded(),
        vec![
            Entry::new("a", "15"),
            Entry::new("", ""),
            Entry::new("b", "abc"),
            Entry::new("c", "45"),
            Entry::new("d", "7.4"),
        ],
        vec![Entry::new("long", "600"), Entry::new("neg", "-20")],
    ];

    for entries in lists {
        let schedule = build_schedule(&entries, 17 * 60);

        let sum: i64 = schedule.items.iter().map(|i| i.minutes).sum();
        assert_eq!(sum, schedule.total);
        assert_eq!(schedule.adjusted_start, 17 * 60 - schedule.total);
        assert_eq!(schedule.items.len(), entries.len());

        for (i, item) in schedule.items.iter().enumerate() {
            let expected_start = if i == 0 {
                schedule.adjusted_start
            } else {
                schedule.items[i - 1].end
            };
            assert_eq!(item.start, expected_start);
            assert_eq!(item.end, item.start + item.minutes);
        }

        if let Some(last) = schedule.items.last() {
            assert_eq!(last.end, 17 * 60);
        }
    }
}

#[test]
fn test_empty_labels_get_positional_names() {
    let entries = vec![Entry::new("Lunch", "60"), Entry::default(), Entry::new("", "5")];
    let schedule = build_schedule(&entries, 720);

    assert_eq!(schedule.items[0].label, "Lunch");
    assert_eq!(schedule.items[1].label, "Label 2");
    assert_eq!(schedule.items[2].label, "Label 3");
}

#[test]
fn test_non_numeric_durations_count_as_zero() {
    let entries = vec![
        Entry::new("Lunch", "60"),
        Entry::new("Oops", "sixty"),
        Entry::new("Blank", ""),
    ];
    let schedule = build_schedule(&entries, 1320);

    assert_eq!(schedule.total, 60);
    assert_eq!(schedule.items[1].minutes, 0);
    assert_eq!(schedule.items[1].start, schedule.items[1].end);
    assert!(!schedule.items[1].start_clock().contains("NaN"));
}

#[test]
fn test_duration_coercion() {
    assert_eq!(coerce_minutes(""), 0);
    assert_eq!(coerce_minutes("   "), 0);
    assert_eq!(coerce_minutes(" 45 "), 45);
    assert_eq!(coerce_minutes("abc"), 0);
    assert_eq!(coerce_minutes("12abc"), 0);
    assert_eq!(coerce_minutes("12.6"), 13);
    assert_eq!(coerce_minutes("1e2"), 100);
    assert_eq!(coerce_minutes("-15"), -15);
    assert_eq!(coerce_minutes("NaN"), 0);
    assert_eq!(coerce_minutes("inf"), 0);
    assert_eq!(coerce_minutes("0x10"), 0);

    assert!(is_numeric(""));
    assert!(is_numeric("30"));
    assert!(!is_numeric("thirty"));
    assert!(!is_numeric("NaN"));

    assert_eq!(total_minutes(["60", "30", "x", ""]), 90);
}

#[test]
fn test_clock_formatting() {
    assert_eq!(format_clock(0), "12:00 AM");
    assert_eq!(format_clock(65), "1:05 AM");
    assert_eq!(format_clock(11 * 60 + 59), "11:59 AM");
    assert_eq!(format_clock(720), "12:00 PM");
    assert_eq!(format_clock(750), "12:30 PM");
    assert_eq!(format_clock(1080), "6:00 PM");
    assert_eq!(format_clock(1439), "11:59 PM");
    // No wraparound: past midnight keeps counting
    assert_eq!(format_clock(1500), "13:00 PM");
}

#[test]
fn test_huge_durations_are_clamped() {
    assert_eq!(coerce_minutes("1e19"), MAX_DURATION_MINUTES);
    assert_eq!(coerce_minutes("-99999999999999999999"), -MAX_DURATION_MINUTES);
    assert_eq!(total_minutes(["1e19", "1e19"]), 2 * MAX_DURATION_MINUTES);

    let end = parse_minutes("22:00").unwrap();

    let schedule = build_schedule(&[Entry::new("A", "1e19"), Entry::new("B", "1e19")], end);
    assert_eq!(schedule.total, 2 * MAX_DURATION_MINUTES);
    assert_eq!(schedule.adjusted_start, end - 2 * MAX_DURATION_MINUTES);
    assert_eq!(schedule.items[1].start, schedule.items[0].end);
    assert_eq!(schedule.items[1].end, end);

    let schedule = build_schedule(&[Entry::new("A", "-99999999999999999999")], end);
    assert_eq!(schedule.total, -MAX_DURATION_MINUTES);
    assert_eq!(schedule.adjusted_start, end + MAX_DURATION_MINUTES);
    assert_eq!(schedule.items[0].end, end);

    let summary = Core::build_summary(
        &[Entry::new("A", "1e19"), Entry::new("B", "-1e19")],
        end,
        600,
        ViewMode::Eod,
    );
    assert_eq!(summary.total(), 0);
    assert_eq!(summary.remaining, end - 600);
}

#[test]
fn test_remaining_saturates_instead_of_overflowing() {
    assert_eq!(calculate_remaining(1320, 600, i64::MAX), 0);
    assert_eq!(calculate_remaining(1320, 600, i64::MIN), i64::MAX);
}

#[test]
fn test_remaining_never_negative() {
    assert_eq!(calculate_remaining(1320, 1080, 90), 150);
    assert_eq!(calculate_remaining(1320, 1230, 90), 0);
    assert_eq!(calculate_remaining(1320, 1300, 90), 0);
    assert_eq!(calculate_remaining(600, 1300, 0), 0);

    for now in (0..1440).step_by(37) {
        for total in [0, 30, 90, 400] {
            let r = calculate_remaining(1320, now, total);
            assert!(r >= 0);
            assert_eq!(r, (1320 - now - total).max(0));
        }
    }
}

#[test]
fn test_humanized_minutes() {
    assert_eq!(humanize_minutes(150), "2 hours 30 minutes");
    assert_eq!(humanize_minutes(90), "1 hour 30 minutes");
    assert_eq!(humanize_minutes(61), "1 hour 1 minute");
    assert_eq!(humanize_minutes(45), "45 minutes");
    assert_eq!(humanize_minutes(1), "1 minute");
    assert_eq!(humanize_minutes(0), "0 minute");
    assert_eq!(humanize_minutes(120), "2 hours 0 minute");
}

#[test]
fn test_minutes_label_and_decimal_hours() {
    assert_eq!(minutes_label(60), "60 mins");
    assert_eq!(minutes_label(1), "1 min");
    assert_eq!(minutes_label(0), "0 min");

    assert_eq!(decimal_hours(60), "1.00");
    assert_eq!(decimal_hours(30), "0.50");
    assert_eq!(decimal_hours(10), "0.17");
    assert_eq!(decimal_hours(0), "0.00");
}

#[test]
fn test_placeholder_values_are_greyed() {
    assert_eq!(colorize_optional(""), format!("{GREY}--{RESET}"));
    assert_eq!(colorize_optional("0"), format!("{GREY}0{RESET}"));
    assert_eq!(colorize_optional("45"), "45");
}

#[test]
fn test_eod_summary_uses_fixed_reference_shift() {
    let schedule = build_schedule(&seeded(), 1320);
    let eod = calculate_eod(&schedule);

    assert_eq!(REFERENCE_SHIFT_MINUTES, 540);
    assert_eq!(eod.total, 90);
    assert_eq!(eod.rows.len(), 2);
    assert_eq!(decimal_hours(eod.rows[0].minutes), "1.00");
    assert_eq!(decimal_hours(eod.rows[1].minutes), "0.50");
    assert_eq!(format!("{:.2}", eod.prod_hours), "7.50");

    // End of shift does not change Prod
    let other = calculate_eod(&build_schedule(&seeded(), 600));
    assert_eq!(other.prod_hours, eod.prod_hours);
}

#[test]
fn test_build_summary_scenario() {
    let summary = Core::build_summary(&seeded(), 1320, 1080, ViewMode::Schedule);

    assert_eq!(summary.total(), 90);
    assert_eq!(summary.end_minutes(), 1320);
    assert_eq!(summary.remaining, 150);
    assert_eq!(humanize_minutes(summary.remaining), "2 hours 30 minutes");
    assert_eq!(summary.view, ViewMode::Schedule);
    assert_eq!(summary.schedule.items.len(), 2);
}

#[test]
fn test_invalid_end_time_is_rejected() {
    assert!(parse_minutes("25:00").is_err());
    assert!(parse_minutes("10pm").is_err());
    assert!(parse_minutes("").is_err());
    assert_eq!(parse_minutes("00:00").unwrap(), 0);
    assert_eq!(parse_minutes("07:05").unwrap(), 425);
}
