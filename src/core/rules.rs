// qna-import - core/rules.rs
//
// The redaction rule set: one compiled email pattern, the ordered list of
// signature-start prefixes, and the inline sign-off pattern. Built once per
// process and shared read-only, so it can be tested apart from the
// orchestration flow.

use crate::util::constants;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

static STANDARD_RULES: LazyLock<RedactionRuleSet> = LazyLock::new(|| RedactionRuleSet {
    email: Regex::new(constants::EMAIL_PATTERN).expect("email pattern is valid"),
    email_replacement: constants::REDACTED_EMAIL,
    signature_prefixes: constants::SIGNATURE_PREFIXES,
    inline_signoff: Regex::new(constants::INLINE_SIGNOFF_PATTERN)
        .expect("inline sign-off pattern is valid"),
});

/// Fixed pattern/replacement and prefix tables applied to every question.
#[derive(Debug)]
pub struct RedactionRuleSet {
    email: Regex,
    email_replacement: &'static str,
    signature_prefixes: &'static [&'static str],
    inline_signoff: Regex,
}

impl RedactionRuleSet {
    /// The process-wide rule set.
    pub fn standard() -> &'static RedactionRuleSet {
        &STANDARD_RULES
    }

    /// Replace every email-shaped token with the redaction placeholder.
    ///
    /// Returns the input unchanged (borrowed) when nothing matched.
    pub fn redact_emails<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.email.replace_all(text, self.email_replacement)
    }

    /// Number of email-shaped tokens in `text`.
    pub fn count_emails(&self, text: &str) -> usize {
        self.email.find_iter(text).count()
    }

    /// True when the trimmed line begins (case-insensitively) with one of the
    /// signature prefixes.
    pub fn is_signature_start(&self, line: &str) -> bool {
        let trimmed = line.trim();
        self.signature_prefixes.iter().any(|prefix| {
            trimmed
                .get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        })
    }

    /// Drop a sign-off glued onto the end of a single line.
    ///
    /// A closing period, `!` or `?` stays; a comma before the sign-off goes
    /// with it. Returns the line unchanged (borrowed) when there is none.
    pub fn strip_inline_signoff<'t>(&self, line: &'t str) -> Cow<'t, str> {
        self.inline_signoff.replace(line, |caps: &Captures<'_>| match &caps[1] {
            "," => String::new(),
            terminal => terminal.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> &'static RedactionRuleSet {
        RedactionRuleSet::standard()
    }

    #[test]
    fn test_redacts_plain_email() {
        let out = rules().redact_emails("Contact me at user@example.com");
        assert_eq!(out, "Contact me at [redacted-email]");
    }

    #[test]
    fn test_redaction_is_case_insensitive() {
        let out = rules().redact_emails("Mail JOHN.DOE@Example.CO.UK today");
        assert_eq!(out, "Mail [redacted-email] today");
    }

    #[test]
    fn test_redacts_every_match() {
        let out = rules().redact_emails("a@b.io, c+tag@d.org and e_f@g-h.net");
        assert_eq!(
            out,
            "[redacted-email], [redacted-email] and [redacted-email]"
        );
        assert_eq!(rules().count_emails("a@b.io, c+tag@d.org and e_f@g-h.net"), 3);
    }

    #[test]
    fn test_trailing_punctuation_is_not_redacted() {
        assert_eq!(
            rules().redact_emails("Write to jane@corp.com."),
            "Write to [redacted-email]."
        );
        assert_eq!(
            rules().redact_emails("(jane@corp.com), ok?"),
            "([redacted-email]), ok?"
        );
    }

    #[test]
    fn test_non_ascii_addresses_redacted_whole() {
        for (text, expected) in [
            ("Mail josé@example.com please", "Mail [redacted-email] please"),
            ("Mail jane@münchen.de please", "Mail [redacted-email] please"),
            ("Mail o'brien@corp.com please", "Mail [redacted-email] please"),
            ("Frag müller.jürgen@firma.de bitte", "Frag [redacted-email] bitte"),
        ] {
            assert_eq!(rules().redact_emails(text), expected);
            assert_eq!(rules().count_emails(text), 1, "{text}");
        }
    }

    #[test]
    fn test_enclosing_quotes_and_brackets_stay_outside() {
        assert_eq!(
            rules().redact_emails("'jane@corp.com' or <sam.lee@contoso.com>"),
            "'[redacted-email]' or <[redacted-email]>"
        );
    }

    #[test]
    fn test_mentions_and_dotless_domains_untouched() {
        for text in [
            "ping @octocat about it",
            "user@localhost is not public",
            "price is 5@10 each",
            "trailing @",
        ] {
            let out = rules().redact_emails(text);
            assert!(matches!(out, Cow::Borrowed(_)), "changed: {text}");
            assert_eq!(out, text);
        }
    }

    #[test]
    fn test_signature_prefixes_case_insensitive_after_trim() {
        for line in [
            "Thanks,",
            "  thanks so much",
            "THANK YOU!",
            "Regards",
            "Best regards, Jo",
            "cheers",
            "Sincerely yours",
            "From: Jane",
            "sent: Monday",
            "To: team",
            "CC: boss",
            "Bcc: x",
            "\tSubject: hello",
        ] {
            assert!(rules().is_signature_start(line), "not detected: {line:?}");
        }
    }

    #[test]
    fn test_ordinary_lines_are_not_signatures() {
        for line in [
            "How do I use Copilot?",
            "",
            "   ",
            "Is it better to thank the reviewer?",
            "Tomorrow we try again",
            "Best practice for prompts?",
        ] {
            assert!(!rules().is_signature_start(line), "false positive: {line:?}");
        }
    }

    #[test]
    fn test_prefix_match_ignores_word_end() {
        // Plain prefix test: a line opening with "Thanksgiving" starts a
        // signature just like "Thanks".
        assert!(rules().is_signature_start("Thanksgiving week: will the lab stay open?"));
        assert!(rules().is_signature_start("Regardsless"));
    }

    #[test]
    fn test_prefix_check_survives_multibyte_lines() {
        assert!(!rules().is_signature_start("日本語の質問"));
        assert!(!rules().is_signature_start("é"));
    }

    #[test]
    fn test_inline_signoff_after_question_mark() {
        let out = rules().strip_inline_signoff("Does it work offline? Thanks, Jane");
        assert_eq!(out, "Does it work offline?");
    }

    #[test]
    fn test_inline_signoff_after_comma_drops_comma() {
        let out = rules().strip_inline_signoff("Any tips for tests, cheers Bob");
        assert_eq!(out, "Any tips for tests");
    }

    #[test]
    fn test_inline_signoff_keeps_question_after_thanks() {
        for line in [
            "Great demo. Thanks to the team, how do I enable agent mode in VS Code?",
            "Quick one, thanks for any pointers on prompt files?",
            "Loved it. Thanks for showing the CLI, can we get the repo link",
            "Nice. Cheers to that? really",
        ] {
            let out = rules().strip_inline_signoff(line);
            assert!(matches!(out, Cow::Borrowed(_)), "changed: {line}");
        }
    }

    #[test]
    fn test_inline_signoff_allows_short_name_after() {
        assert_eq!(
            rules().strip_inline_signoff("Is it recorded? Best regards, Jo Ann Smith"),
            "Is it recorded?"
        );
        assert_eq!(
            rules().strip_inline_signoff("Is it recorded? Thank you!"),
            "Is it recorded?"
        );
    }

    #[test]
    fn test_inline_signoff_requires_punctuation_and_word_end() {
        for line in [
            "Why thanks matters here",
            "Plans for it. Thanksgiving break?",
            "Ask the team regards",
        ] {
            let out = rules().strip_inline_signoff(line);
            assert!(matches!(out, Cow::Borrowed(_)), "changed: {line}");
        }
    }
}
