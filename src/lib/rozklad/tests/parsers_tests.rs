use crate::rozklad::models::reference_model::{Room, Teacher};

use super::*;

fn group(name: &str, id: u32) -> Group {
    Group {
        department: "Фізико-математичний факультет".to_string(),
        name: name.to_string(),
        id,
    }
}

fn generate_tables() -> ReferenceTables {
    ReferenceTables::new(
        vec![
            group("21Бд-СОмат", 11),
            group("22Бд-СОмат", 12),
            group("26Бд-Комп", 13),
        ],
        vec![
            Teacher {
                short_name: "Кривонос О.М.".to_string(),
                first_name_part: "Олександр".to_string(),
                middle_name_part: "Миколайович".to_string(),
                last_name_part: "Кривонос".to_string(),
                department: "Кафедра комп‘ютерних наук та інформаційних технологій".to_string(),
                id: 420,
            },
            Teacher {
                short_name: "Яценко О.С.".to_string(),
                first_name_part: "Олександр".to_string(),
                middle_name_part: "Сергійович".to_string(),
                last_name_part: "Яценко".to_string(),
                department: "Кафедра комп‘ютерних наук та інформаційних технологій".to_string(),
                id: 486,
            },
        ],
        vec![Room {
            block: "№1".to_string(),
            name: "320".to_string(),
            full_name: "320/№1".to_string(),
            id: 36,
        }],
    )
}

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 10, 16)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

#[test]
fn parse_time_range_padded() {
    let (start, end) = parse_time_range("09:00-10:20", "16.10.2023").unwrap();
    assert_eq!(start, at(9, 0));
    assert_eq!(end, at(10, 20));
}

#[test]
fn parse_time_range_not_padded() {
    let (start, end) = parse_time_range("8:30-9:50", "1.2.2024").unwrap();
    let day = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
    assert_eq!(start, day.and_hms_opt(8, 30, 0).unwrap());
    assert_eq!(end, day.and_hms_opt(9, 50, 0).unwrap());
}

#[test]
fn parse_time_range_bad_date() {
    assert_eq!(
        parse_time_range("09:00-10:20", "2023-10-16"),
        Err(FormatError::Date("2023-10-16".to_string()))
    );
    assert_eq!(
        parse_time_range("09:00-10:20", "31.02.2023"),
        Err(FormatError::Date("31.02.2023".to_string()))
    );
    assert_eq!(
        parse_time_range("09:00-10:20", "16.10.2023.99"),
        Err(FormatError::Date("16.10.2023.99".to_string()))
    );
}

#[test]
fn parse_time_range_bad_time() {
    for lesson_time in [
        "09:00",
        "09:00-10",
        "9.00-10.20",
        "09:xx-10:20",
        "25:00-26:00",
        "10:20-09:00",
    ] {
        assert_eq!(
            parse_time_range(lesson_time, "16.10.2023"),
            Err(FormatError::LessonTime(lesson_time.to_string())),
            "{lesson_time}"
        );
    }
}

#[test]
fn group_expression_empty_is_owner() {
    let tables = generate_tables();
    let parsed = parse_group_expression("22Бд-СОмат", "", &tables);
    assert_eq!(parsed.groups, vec![tables.group("22Бд-СОмат")]);
    assert_eq!(parsed.groups_type, GroupsType::Single);
    assert_eq!(parsed.sub_group, "");
}

#[test]
fn group_expression_subgroup() {
    let tables = generate_tables();
    let parsed = parse_group_expression("22Бд-СОмат", "(підгр. 1)", &tables);
    assert_eq!(parsed.groups, vec![group("22Бд-СОмат", 12)]);
    assert_eq!(parsed.groups_type, GroupsType::SubGroup);
    assert_eq!(parsed.sub_group, "(підгр. 1)");
}

#[test]
fn group_expression_combined_group() {
    let tables = generate_tables();
    let parsed =
        parse_group_expression("22Бд-СОмат", "Збірна група 21Бд-СОмат, 22Бд-СОмат", &tables);
    assert_eq!(
        parsed.groups,
        vec![group("21Бд-СОмат", 11), group("22Бд-СОмат", 12)]
    );
    assert_eq!(parsed.groups_type, GroupsType::Combined);
    assert_eq!(parsed.sub_group, "21Бд-СОмат, 22Бд-СОмат");
}

#[test]
fn group_expression_stream() {
    let tables = generate_tables();
    let parsed = parse_group_expression("26Бд-Комп", "Потік 21Бд-СОмат, 22Бд-СОмат", &tables);
    assert_eq!(
        parsed.groups,
        vec![group("21Бд-СОмат", 11), group("22Бд-СОмат", 12)]
    );
    assert_eq!(parsed.groups_type, GroupsType::Stream);
    assert_eq!(parsed.sub_group, "21Бд-СОмат, 22Бд-СОмат");
}

#[test]
fn group_expression_plain_name() {
    let tables = generate_tables();
    let parsed = parse_group_expression("320/№1", "21Бд-СОмат", &tables);
    assert_eq!(parsed.groups, vec![group("21Бд-СОмат", 11)]);
    assert_eq!(parsed.groups_type, GroupsType::Single);
    assert_eq!(parsed.sub_group, "");
}

#[test]
fn group_expression_unknown_members_keep_placeholders() {
    let tables = generate_tables();
    let parsed = parse_group_expression("26Бд-Комп", "Потік 21Бд-СОмат, 99Бд-Нема", &tables);
    assert_eq!(parsed.groups, vec![group("21Бд-СОмат", 11), Group::default()]);

    let parsed = parse_group_expression("26Бд-Комп", "Потік", &tables);
    assert_eq!(parsed.groups, vec![Group::default()]);
    assert_eq!(parsed.sub_group, "");
}

#[test]
fn short_teacher_name_from_full_name() {
    assert_eq!(
        short_teacher_name("Яценко Олександр Сергійович").unwrap(),
        "Яценко О.С."
    );
    assert_eq!(
        short_teacher_name("Яценко Олександр"),
        Err(FormatError::TeacherName("Яценко Олександр".to_string()))
    );
}

#[test]
fn subject_identity_per_view() {
    let row = LessonRow {
        object: "Кривонос Олександр Миколайович".to_string(),
        teacher: "Яценко О.С.".to_string(),
        room: "320/№1".to_string(),
        ..Default::default()
    };
    assert_eq!(
        parse_subject_identity(&row, ViewMode::Teacher).unwrap(),
        SubjectKeys {
            teacher: "Кривонос О.М.".to_string(),
            room: "320/№1".to_string(),
        }
    );
    assert_eq!(
        parse_subject_identity(&row, ViewMode::Group).unwrap(),
        SubjectKeys {
            teacher: "Яценко О.С.".to_string(),
            room: "320/№1".to_string(),
        }
    );

    let row = LessonRow {
        object: "Каф. проф. пед./№1".to_string(),
        room: "".to_string(),
        ..row
    };
    assert_eq!(
        parse_subject_identity(&row, ViewMode::Room).unwrap().room,
        "Каф. проф. пед./№1"
    );
}

#[test]
fn replacement_full_form() {
    let tables = generate_tables();
    let info = parse_replacement(
        "Увага! Заміна! Кривонос\u{a0}О.М. Комп‘ютерні мережі Лаб замість:",
        &tables,
    )
    .unwrap();
    assert_eq!(info.teacher.id, 420);
    assert_eq!(info.title, "Комп‘ютерні мережі");
    assert_eq!(info.lesson_type, "Лаб");
}

#[test]
fn replacement_teacher_only() {
    let tables = generate_tables();
    let info = parse_replacement(
        "Увага! Заміна! Яценко\u{a0}О.С. замість: Кривонос\u{a0}О.М.",
        &tables,
    )
    .unwrap();
    assert_eq!(info.teacher.id, 486);
    assert_eq!(info.title, "");
    assert_eq!(info.lesson_type, "");
}

#[test]
fn replacement_unknown_teacher_is_placeholder() {
    let tables = generate_tables();
    let info = parse_replacement("Увага! Заміна! Невідомий\u{a0}Н.Н. Фізика Л замість:", &tables)
        .unwrap();
    assert_eq!(info.teacher, Teacher::default());
    assert_eq!(info.title, "Фізика");
}

#[test]
fn replacement_malformed() {
    let tables = generate_tables();
    for announcement in [
        "Увага! Заміна! Кривонос\u{a0}О.М. Лаб замість:",
        "Заміна замість:",
        "Заміна",
    ] {
        assert_eq!(
            parse_replacement(announcement, &tables),
            Err(FormatError::Replacement(announcement.to_string()))
        );
    }
}
