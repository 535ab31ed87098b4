//! Comment content filter
//!
//! Two sources decide whether a comment is inappropriate: `rustrict`'s
//! general-purpose English detector, and a static list of Chinese insults
//! matched as plain substrings (no tokenisation, so words embedded in longer
//! text are still caught).

use rustrict::CensorStr;

/// Chinese words rejected anywhere in a comment
pub const CHINESE_BANNED_WORDS: &[&str] = &[
    "傻逼", "操你", "草你", "妈的", "他妈的", "滚蛋", "去死", "混蛋", "王八蛋", "狗屎", "白痴",
    "贱人", "婊子", "妓女", "废物", "垃圾人", "蠢货", "笨蛋", "猪头", "猪脑子", "狗东西",
    "狗娘养",
];

/// Profanity checker applied to comments before they are submitted
#[derive(Debug, Clone)]
pub struct ContentFilter {
    words: Vec<String>,
}

impl Default for ContentFilter {
    fn default() -> Self {
        Self {
            words: CHINESE_BANNED_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl ContentFilter {
    /// Built-in list plus extra words
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut filter = Self::default();
        for word in words {
            let word = word.into();
            if !word.is_empty() && !filter.words.contains(&word) {
                filter.words.push(word);
            }
        }
        filter
    }

    /// Localized banned words, built-in first
    pub fn words(&self) -> &[String] {
        &self.words
    }

    fn banned_word_in(&self, content: &str) -> Option<&str> {
        self.words
            .iter()
            .find(|w| content.contains(w.as_str()))
            .map(String::as_str)
    }

    /// Whether the content must be rejected
    pub fn contains_profanity(&self, content: &str) -> bool {
        if content.is_inappropriate() {
            return true;
        }
        self.banned_word_in(content).is_some()
    }

    /// Whitespace-separated tokens that would be flagged on their own
    pub fn profanity_list(&self, content: &str) -> Vec<String> {
        content
            .split_whitespace()
            .filter(|token| token.is_inappropriate() || self.banned_word_in(token).is_some())
            .map(str::to_string)
            .collect()
    }

    /// Mask flagged text with `*`, one per character
    pub fn clean(&self, content: &str) -> String {
        // Localized words go first, longest first, so "他妈的" is masked
        // whole before anything shorter inside it
        let mut words: Vec<&String> = self.words.iter().collect();
        words.sort_by_key(|w| std::cmp::Reverse(w.chars().count()));
        let mut cleaned = content.to_string();
        for word in words {
            if cleaned.contains(word.as_str()) {
                cleaned = cleaned.replace(word.as_str(), &"*".repeat(word.chars().count()));
            }
        }
        cleaned.censor()
    }
}
