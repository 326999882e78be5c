use crate::models::ChatMessage;

pub const GREETING: &str = "Hi! I'm the FundWise assistant (mock). Ask about pricing or demos.";
pub const PRICING_REPLY: &str =
    "Growth is $149/mo (or $119/mo billed annually). Enterprise is custom.";
pub const DEMO_REPLY: &str =
    "Happy to help – use the Request a demo form and we'll schedule a session.";
pub const DEFAULT_REPLY: &str = "Thanks! A teammate will reach out shortly.";

/// Canned reply chosen when any keyword occurs in the lowercased input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplyRule {
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

impl ReplyRule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

pub const DEFAULT_RULES: &[ReplyRule] = &[
    ReplyRule {
        keywords: &["price", "pricing"],
        reply: PRICING_REPLY,
    },
    ReplyRule {
        keywords: &["demo"],
        reply: DEMO_REPLY,
    },
];

/// Rule-based responder; rules are tried in order and the first match wins.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatResponder {
    rules: &'static [ReplyRule],
    fallback: &'static str,
}

impl Default for ChatResponder {
    fn default() -> Self {
        Self::new(DEFAULT_RULES, DEFAULT_REPLY)
    }
}

impl ChatResponder {
    pub fn new(rules: &'static [ReplyRule], fallback: &'static str) -> Self {
        Self { rules, fallback }
    }

    pub fn reply_to(&self, text: &str) -> &'static str {
        let lowered = text.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| rule.reply)
            .unwrap_or(self.fallback)
    }
}

/// Session transcript of the chat widget. Append-only.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
    responder: ChatResponder,
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self::with_responder(ChatResponder::default())
    }
}

impl ChatTranscript {
    pub fn with_responder(responder: ChatResponder) -> Self {
        Self {
            messages: vec![ChatMessage::bot(GREETING)],
            responder,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Appends the user's message and the bot reply. Blank input is ignored.
    pub fn send(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }

        let reply = self.responder.reply_to(trimmed);
        self.messages.push(ChatMessage::user(trimmed));
        self.messages.push(ChatMessage::bot(reply));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChatRole;

    #[test]
    fn transcript_starts_with_greeting() {
        let transcript = ChatTranscript::default();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.messages()[0], ChatMessage::bot(GREETING));
    }

    #[test]
    fn pricing_question_gets_pricing_reply() {
        let mut transcript = ChatTranscript::default();

        assert!(transcript.send("What's the pricing?"));

        let added = &transcript.messages()[1..];
        assert_eq!(added.len(), 2);
        assert_eq!(added[0].role, ChatRole::User);
        assert_eq!(added[0].content, "What's the pricing?");
        assert_eq!(added[1].role, ChatRole::Bot);
        assert_eq!(added[1].content, PRICING_REPLY);
    }

    #[test]
    fn blank_input_leaves_transcript_unchanged() {
        let mut transcript = ChatTranscript::default();
        let before = transcript.clone();

        assert!(!transcript.send("   "));
        assert!(!transcript.send(""));
        assert_eq!(transcript, before);
    }

    #[test]
    fn user_text_is_trimmed() {
        let mut transcript = ChatTranscript::default();
        transcript.send("  hello there \n");
        assert_eq!(transcript.messages()[1].content, "hello there");
        assert_eq!(transcript.messages()[2].content, DEFAULT_REPLY);
    }

    #[test]
    fn matching_is_case_insensitive_and_pricing_outranks_demo() {
        let responder = ChatResponder::default();
        assert_eq!(responder.reply_to("Can I book a DEMO?"), DEMO_REPLY);
        assert_eq!(responder.reply_to("PRICE please"), PRICING_REPLY);
        assert_eq!(responder.reply_to("demo and pricing"), PRICING_REPLY);
        assert_eq!(responder.reply_to("hello"), DEFAULT_REPLY);
    }

    #[test]
    fn custom_rules_are_tried_in_order() {
        const RULES: &[ReplyRule] = &[
            ReplyRule {
                keywords: &["soc2"],
                reply: "We are SOC2 certified.",
            },
            ReplyRule {
                keywords: &["soc"],
                reply: "unreachable for soc2",
            },
        ];
        let responder = ChatResponder::new(RULES, "fallback");
        assert_eq!(responder.reply_to("Are you SOC2?"), "We are SOC2 certified.");
        assert_eq!(responder.reply_to("ssoo"), "fallback");
    }

    #[test]
    fn transcript_grows_without_bound() {
        let mut transcript = ChatTranscript::default();
        for i in 0..200 {
            transcript.send(&format!("message {i}"));
        }
        assert_eq!(transcript.len(), 1 + 400);
    }
}
