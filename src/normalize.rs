/// Balances unclosed brackets by appending the missing closers.
///
/// Voice and chat transcription routinely drops the closing bracket of a
/// trailing damage type ("2d8+4(fire"). Each bracket family is counted
/// independently and the deficit is appended at the end of the text, round
/// brackets first; nesting and ordering inside the text are not inspected.
/// Text without a deficit is returned unchanged.
///
/// # Examples
/// ```
/// use dicelang::normalize;
///
/// assert_eq!(normalize("roll 2d8+4(fire"), "roll 2d8+4(fire)");
/// assert_eq!(normalize("roll 2d6"), "roll 2d6");
/// ```
pub fn normalize(input: &str) -> String {
    let mut text = String::from(input);

    for (open, close) in [('(', ')'), ('[', ']')] {
        let opens = text.chars().filter(|&ch| ch == open).count();
        let closes = text.chars().filter(|&ch| ch == close).count();

        for _ in closes..opens {
            text.push(close);
        }
    }

    text
}

/// Prefixes the `roll` keyword when the text does not already contain it.
///
/// The check is a case-insensitive substring test, mirroring how loosely
/// transcribed commands arrive ("Roll 2d6", "ROLL d20"). Any occurrence of
/// the letters `roll` counts, even inside a longer word.
///
/// # Examples
/// ```
/// use dicelang::ensure_roll_keyword;
///
/// assert_eq!(ensure_roll_keyword("2d6+3"), "roll 2d6+3");
/// assert_eq!(ensure_roll_keyword("Roll 2d6"), "Roll 2d6");
/// ```
pub fn ensure_roll_keyword(input: &str) -> String {
    if input.to_ascii_uppercase().contains("ROLL") {
        return String::from(input);
    }

    format!("roll {}", input)
}

/// Runs the full text-repair pipeline: bracket balancing, then keyword
/// prefixing. This is the form [`crate::parse_command()`] feeds to the
/// parser.
///
/// # Examples
/// ```
/// use dicelang::prepare;
///
/// assert_eq!(prepare("2d8+4(fire"), "roll 2d8+4(fire)");
/// ```
pub fn prepare(input: &str) -> String {
    ensure_roll_keyword(&normalize(input))
}
