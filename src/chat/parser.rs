//! Chat-line classification into speaker/body pairs.
use regex::Regex;

/// Patterns tried in order; the first match wins. The angle form must come
/// first or `<Alice> hi: there` would mis-split on the colon.
const BUILTIN_PATTERNS: [&str; 2] = [
    r"^<(?P<speaker>.+)> (?P<body>.+)$",
    r"^(?P<speaker>[^:]+): (?P<body>.+)$",
];

/// A successfully classified chat line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub speaker: String,
    pub body: String,
}

/// Ordered-pattern chat line parser.
#[derive(Debug)]
pub struct ChatLineParser {
    patterns: Vec<Regex>,
}

impl ChatLineParser {
    /// Builds a parser from custom patterns. Each pattern must define
    /// `speaker` and `body` named capture groups.
    pub fn new(patterns: &[&str]) -> Result<Self, regex::Error> {
        let patterns = patterns
            .iter()
            .map(|pattern| Regex::new(pattern))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Classifies a raw chat line, or `None` if no pattern matches.
    pub fn parse(&self, line: &str) -> Option<ChatMessage> {
        for pattern in &self.patterns {
            if let Some(captures) = pattern.captures(line) {
                let speaker = captures.name("speaker")?.as_str();
                let body = captures.name("body")?.as_str();
                return Some(ChatMessage {
                    speaker: speaker.to_owned(),
                    body: body.to_owned(),
                });
            }
        }
        None
    }
}

impl Default for ChatLineParser {
    fn default() -> Self {
        Self::new(&BUILTIN_PATTERNS).expect("built-in chat patterns are valid")
    }
}
