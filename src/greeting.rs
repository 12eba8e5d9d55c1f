//! Pure text shaping for the greeting page.
//!
//! Everything in here is plain string-in, string-out so the exact wording
//! rules can be pinned down in unit tests without a running server.

/// Fixed opening of the greeting line. A title-cased name is appended after
/// a single space when one was supplied.
pub const LANDING_PREFIX: &str = "I got you some flowers,";

/// Rendered text for one greeting request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    /// The "I got you some flowers, Name" line.
    pub landing_text: String,
    /// The capitalized message with the sender signature applied, or empty
    /// when no message was supplied.
    pub message: String,
}

/// Uppercase the first letter of each whitespace-separated word and
/// lowercase the rest. Whitespace is preserved as-is.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for c in input.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

/// Uppercase only the first character, leaving the rest untouched.
fn capitalize_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Build the two displayed strings from raw request inputs.
///
/// Whitespace-only values count as absent. The signature `", {Sender}"` is
/// only appended when the message does not already end with it, so running
/// an already-signed message through again changes nothing.
pub fn format_greeting(name: &str, message: &str, sender: &str) -> Greeting {
    let name = name.trim();
    let landing_text = if name.is_empty() {
        LANDING_PREFIX.to_string()
    } else {
        format!("{} {}", LANDING_PREFIX, title_case(name))
    };

    let trimmed = message.trim();
    let message = if trimmed.is_empty() {
        String::new()
    } else {
        let mut working = capitalize_first(trimmed);
        let sender = sender.trim();
        if !sender.is_empty() {
            let signature = format!(", {}", title_case(sender));
            if !working.ends_with(&signature) {
                working.push_str(&signature);
            }
        }
        working
    };

    Greeting {
        landing_text,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_basics() {
        assert_eq!(title_case("lili"), "Lili");
        assert_eq!(title_case("LILI"), "Lili");
        assert_eq!(title_case("mary jane"), "Mary Jane");
        assert_eq!(title_case("mary  jane"), "Mary  Jane");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn landing_text_with_name() {
        let greeting = format_greeting("lili", "", "");
        assert_eq!(greeting.landing_text, "I got you some flowers, Lili");
    }

    #[test]
    fn landing_text_without_name() {
        let greeting = format_greeting("", "", "");
        assert_eq!(greeting.landing_text, "I got you some flowers,");
        assert_eq!(greeting.message, "");
    }

    #[test]
    fn whitespace_only_inputs_count_as_absent() {
        let greeting = format_greeting("   ", " \t ", "  ");
        assert_eq!(greeting.landing_text, "I got you some flowers,");
        assert_eq!(greeting.message, "");
    }

    #[test]
    fn message_first_char_capitalized_rest_untouched() {
        let greeting = format_greeting("", "happy Birthday TO you", "");
        assert_eq!(greeting.message, "Happy Birthday TO you");
    }

    #[test]
    fn sender_is_title_cased_in_signature() {
        let greeting = format_greeting("", "happy birthday", "arne");
        assert_eq!(greeting.message, "Happy birthday, Arne");
    }

    #[test]
    fn signature_not_doubled() {
        let greeting = format_greeting("", "Happy birthday, Arne", "Arne");
        assert_eq!(greeting.message, "Happy birthday, Arne");
    }

    #[test]
    fn signing_is_idempotent() {
        let once = format_greeting("", "happy birthday", "bob");
        let twice = format_greeting("", &once.message, "bob");
        assert_eq!(once.message, twice.message);
    }

    #[test]
    fn sender_without_message_produces_nothing() {
        let greeting = format_greeting("lili", "", "arne");
        assert_eq!(greeting.message, "");
    }

    #[test]
    fn message_without_sender_is_unsigned() {
        let greeting = format_greeting("", "happy birthday", "");
        assert_eq!(greeting.message, "Happy birthday");
    }

    #[test]
    fn unicode_message_capitalization() {
        let greeting = format_greeting("", "étienne says hi", "");
        assert_eq!(greeting.message, "Étienne says hi");
    }
}
