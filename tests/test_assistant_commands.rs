//! End-to-end tests for the assistant's command surface.
//!
//! Each test feeds lines to an [`Assistant`] the way the interactive loop
//! does and checks the replies.

use chrono::NaiveDate;
use contact_assistant::{Assistant, Config, FixedClock, Reply};

fn assistant_on(y: i32, m: u32, d: u32) -> Assistant {
    let today = NaiveDate::from_ymd_opt(y, m, d).unwrap();
    Assistant::with_clock(&Config::default(), Box::new(FixedClock(today)))
}

/// Run a script of lines and collect the replies.
fn run(assistant: &mut Assistant, lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .map(|line| assistant.handle_line(line).text().to_string())
        .collect()
}

/// Test a typical session from greeting to exit.
///
/// This test validates:
/// - Contacts are created and then updated by `add`
/// - `change`, `phone`, and `all` reflect the edits
/// - Birthdays are recorded and reported with weekend shifting
#[test]
fn test_full_session() {
    let mut bot = assistant_on(2024, 6, 7);

    let replies = run(
        &mut bot,
        &[
            "hello",
            "add John 1234567890",
            "add John 5555555555",
            "add Jane 1112223333",
            "change John 1234567890 1231231234",
            "phone John",
            "add-birthday John 09.06.1990",
            "show-birthday John",
            "show-birthday Jane",
            "all",
            "birthdays",
        ],
    );

    assert_eq!(
        replies,
        vec![
            "How can I help you?",
            "Contact added.",
            "Contact updated.",
            "Contact added.",
            "Contact updated.",
            "1231231234, 5555555555",
            "Birthday set.",
            "09.06.1990",
            "No birthday set.",
            "John: 1231231234, 5555555555; birthday: 09.06.1990\nJane: 1112223333; birthday: —",
            "10.06.2024 — John",
        ]
    );

    assert_eq!(bot.handle_line("exit"), Reply::Exit("Good bye!".to_string()));
    assert_eq!(bot.book().len(), 2);
}

#[test]
fn test_error_replies() {
    let mut bot = assistant_on(2024, 6, 7);
    run(&mut bot, &["add John 1234567890"]);

    let replies = run(
        &mut bot,
        &[
            "",
            "fly",
            "add",
            "add Ann 12345",
            "change John",
            "change Nobody 1234567890 1111111111",
            "change John 0000000000 1111111111",
            "change John 1234567890 abc",
            "phone",
            "phone Nobody",
            "add-birthday John 31.02.1990",
            "show-birthday Nobody",
        ],
    );

    assert_eq!(
        replies,
        vec![
            "Invalid command.",
            "Invalid command.",
            "Give me name and phone please.",
            "Give me name and phone please.",
            "Give me name and phone please.",
            "Contact not found.",
            "Old phone not found.",
            "Incorrect phone number format. Number should be 10 digits long.",
            "Enter user name.",
            "Contact not found.",
            "Wrong arguments.",
            "Contact not found.",
        ]
    );

    // Failed commands leave the book as it was
    assert_eq!(bot.book().len(), 1);
    assert_eq!(run(&mut bot, &["phone John"]), vec!["1234567890"]);
    assert_eq!(run(&mut bot, &["show-birthday John"]), vec!["No birthday set."]);
}

#[test]
fn test_commands_are_case_insensitive_and_ignore_extra_arguments() {
    let mut bot = assistant_on(2024, 6, 7);

    assert_eq!(
        run(&mut bot, &["ADD John 1234567890 extra", "Phone John"]),
        vec!["Contact added.", "1234567890"]
    );
    assert_eq!(
        bot.handle_line("Close"),
        Reply::Exit("Good bye!".to_string())
    );
}

#[test]
fn test_birthdays_across_new_year() {
    // Monday 30.12.2024
    let mut bot = assistant_on(2024, 12, 30);
    run(
        &mut bot,
        &[
            "add-birthday Ann 30.12.1990",
            "add-birthday Bob 04.01.1991",
            "add-birthday Cid 07.01.1992",
        ],
    );

    // Saturday 04.01.2025 is greeted on Monday 06.01.2025; 07.01 is out of range
    assert_eq!(
        run(&mut bot, &["birthdays"]),
        vec!["30.12.2024 — Ann\n06.01.2025 — Bob"]
    );
}
