pub struct ExpansionCase {
    pub name: &'static str,
    pub event: &'static str,
    pub expected: Option<&'static [&'static str]>,
    pub expected_len: Option<usize>,
}

#[expect(clippy::too_many_lines)]
pub fn expansion_cases() -> Vec<ExpansionCase> {
    vec![
        ExpansionCase {
            name: "none_returns_original",
            event: r#"{"title":"Dentist","date":"2024-01-15","startTime":"09:00","endTime":"10:00",
                "repeat":{"type":"none","interval":1,"endDate":"2024-02-15"}}"#,
            expected: Some(&["2024-01-15"]),
            expected_len: None,
        },
        ExpansionCase {
            name: "unknown_type_falls_back_to_none",
            event: r#"{"title":"Birthday","date":"2024-03-02","startTime":"00:00","endTime":"23:59",
                "repeat":{"type":"yearly","interval":5,"endDate":"2030-03-02"}}"#,
            expected: Some(&["2024-03-02"]),
            expected_len: None,
        },
        ExpansionCase {
            name: "daily_without_end_date",
            event: r#"{"title":"Walk","date":"2024-01-15","startTime":"07:00","endTime":"07:30",
                "repeat":{"type":"daily","interval":1}}"#,
            expected: Some(&["2024-01-15"]),
            expected_len: None,
        },
        ExpansionCase {
            name: "monthly_without_end_date",
            event: r#"{"title":"Rent","date":"2024-01-31","startTime":"08:00","endTime":"08:15",
                "repeat":{"type":"monthly","interval":12}}"#,
            expected: Some(&["2024-01-31"]),
            expected_len: None,
        },
        ExpansionCase {
            name: "daily_interval_bounds_count",
            event: r#"{"title":"Standup","date":"2024-01-15","startTime":"09:00","endTime":"09:15",
                "repeat":{"type":"daily","interval":30,"endDate":"2024-02-15"}}"#,
            expected: None,
            expected_len: Some(30),
        },
        ExpansionCase {
            name: "daily_across_month_end",
            event: r#"{"title":"Standup","date":"2024-01-31","startTime":"09:00","endTime":"09:15",
                "repeat":{"type":"daily","interval":7,"endDate":"2024-02-02"}}"#,
            expected: Some(&["2024-01-31", "2024-02-01", "2024-02-02"]),
            expected_len: None,
        },
        ExpansionCase {
            name: "daily_across_year_end",
            event: r#"{"title":"Journal","date":"2024-12-30","startTime":"21:00","endTime":"21:30",
                "repeat":{"type":"daily","interval":5,"endDate":"2025-01-02"}}"#,
            expected: Some(&["2024-12-30", "2024-12-31", "2025-01-01", "2025-01-02"]),
            expected_len: None,
        },
        ExpansionCase {
            name: "weekly_basic",
            event: r#"{"title":"Review","date":"2024-01-15","startTime":"14:00","endTime":"15:00",
                "repeat":{"type":"weekly","interval":3,"endDate":"2024-12-31"}}"#,
            expected: Some(&["2024-01-15", "2024-01-22", "2024-01-29"]),
            expected_len: None,
        },
        ExpansionCase {
            name: "weekly_across_month_end",
            event: r#"{"title":"Review","date":"2024-01-29","startTime":"14:00","endTime":"15:00",
                "repeat":{"type":"weekly","interval":10,"endDate":"2024-02-12"}}"#,
            expected: Some(&["2024-01-29", "2024-02-05", "2024-02-12"]),
            expected_len: None,
        },
        ExpansionCase {
            name: "weekly_through_leap_day",
            event: r#"{"title":"Review","date":"2024-02-22","startTime":"14:00","endTime":"15:00",
                "repeat":{"type":"weekly","interval":10,"endDate":"2024-03-07"}}"#,
            expected: Some(&["2024-02-22", "2024-02-29", "2024-03-07"]),
            expected_len: None,
        },
        ExpansionCase {
            name: "monthly_same_day",
            event: r#"{"title":"Invoice","date":"2024-01-15","startTime":"10:00","endTime":"10:30",
                "repeat":{"type":"monthly","interval":12,"endDate":"2024-03-15"}}"#,
            expected: Some(&["2024-01-15", "2024-02-15", "2024-03-15"]),
            expected_len: None,
        },
        ExpansionCase {
            name: "monthly_from_31st_clamps",
            event: r#"{"title":"Payroll","date":"2024-01-31","startTime":"10:00","endTime":"10:30",
                "repeat":{"type":"monthly","interval":12,"endDate":"2024-04-30"}}"#,
            expected: Some(&["2024-01-31", "2024-02-29", "2024-03-31", "2024-04-30"]),
            expected_len: None,
        },
        ExpansionCase {
            name: "monthly_from_31st_in_common_year",
            event: r#"{"title":"Payroll","date":"2023-01-31","startTime":"10:00","endTime":"10:30",
                "repeat":{"type":"monthly","interval":12,"endDate":"2023-03-31"}}"#,
            expected: Some(&["2023-01-31", "2023-02-28", "2023-03-31"]),
            expected_len: None,
        },
        ExpansionCase {
            name: "monthly_from_30th_clamps_only_february",
            event: r#"{"title":"Backup","date":"2024-01-30","startTime":"02:00","endTime":"03:00",
                "repeat":{"type":"monthly","interval":4,"endDate":"2024-12-31"}}"#,
            expected: Some(&["2024-01-30", "2024-02-29", "2024-03-30", "2024-04-30"]),
            expected_len: None,
        },
        ExpansionCase {
            name: "monthly_leap_day_into_common_year",
            event: r#"{"title":"Leap","date":"2024-02-29","startTime":"12:00","endTime":"13:00",
                "repeat":{"type":"monthly","interval":24,"endDate":"2025-02-28"}}"#,
            expected: Some(&[
                "2024-02-29",
                "2024-03-29",
                "2024-04-29",
                "2024-05-29",
                "2024-06-29",
                "2024-07-29",
                "2024-08-29",
                "2024-09-29",
                "2024-10-29",
                "2024-11-29",
                "2024-12-29",
                "2025-01-29",
                "2025-02-28",
            ]),
            expected_len: None,
        },
        ExpansionCase {
            name: "monthly_end_before_start",
            event: r#"{"title":"Typo","date":"2024-05-10","startTime":"12:00","endTime":"13:00",
                "repeat":{"type":"monthly","interval":6,"endDate":"2024-04-10"}}"#,
            expected: Some(&["2024-05-10"]),
            expected_len: None,
        },
    ]
}
