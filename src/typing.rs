//! Character-by-character typing and deleting of a rotating phrase list.

pub const DEFAULT_PHRASES: [&str; 5] = [
    "軟體工程師 💻",
    "全端開發者 🚀",
    "技術愛好者 🔥",
    "問題解決者 🧩",
    "終身學習者 📚",
];

pub const START_DELAY_MS: u32 = 1_000;
pub const TYPE_DELAY_MS: u32 = 100;
pub const DELETE_DELAY_MS: u32 = 50;
pub const HOLD_FULL_MS: u32 = 2_000;
pub const HOLD_EMPTY_MS: u32 = 500;

/// What to display after a tick and how long to wait before the next one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingCursor {
    phrase_index: usize,
    char_index: usize,
    deleting: bool,
    delay_ms: u32,
}

impl Default for TypingCursor {
    fn default() -> Self {
        Self {
            phrase_index: 0,
            char_index: 0,
            deleting: false,
            delay_ms: START_DELAY_MS,
        }
    }
}

impl TypingCursor {
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Advances one character. Returns `None` only for an empty phrase list.
    pub fn advance<S: AsRef<str>>(&mut self, phrases: &[S]) -> Option<TypingFrame> {
        if phrases.is_empty() {
            return None;
        }

        self.phrase_index %= phrases.len();
        let phrase = phrases[self.phrase_index].as_ref();
        let length = phrase.chars().count();
        self.char_index = self.char_index.min(length);

        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            self.delay_ms = DELETE_DELAY_MS;
        } else {
            self.char_index = (self.char_index + 1).min(length);
            self.delay_ms = TYPE_DELAY_MS;
        }

        let text: String = phrase.chars().take(self.char_index).collect();

        if !self.deleting && self.char_index == length {
            self.deleting = true;
            self.delay_ms = HOLD_FULL_MS;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.phrase_index = (self.phrase_index + 1) % phrases.len();
            self.delay_ms = HOLD_EMPTY_MS;
        }

        Some(TypingFrame {
            text,
            delay_ms: self.delay_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(cursor: &mut TypingCursor, phrases: &[&str], ticks: usize) -> Vec<TypingFrame> {
        (0..ticks)
            .map(|_| cursor.advance(phrases).expect("non-empty phrase list"))
            .collect()
    }

    #[test]
    fn types_then_holds_then_deletes() {
        let mut cursor = TypingCursor::default();
        let frames = drive(&mut cursor, &["abc"], 7);

        let texts: Vec<&str> = frames.iter().map(|frame| frame.text.as_str()).collect();
        let delays: Vec<u32> = frames.iter().map(|frame| frame.delay_ms).collect();

        assert_eq!(texts, vec!["a", "ab", "abc", "ab", "a", "", "a"]);
        assert_eq!(
            delays,
            vec![
                TYPE_DELAY_MS,
                TYPE_DELAY_MS,
                HOLD_FULL_MS,
                DELETE_DELAY_MS,
                DELETE_DELAY_MS,
                HOLD_EMPTY_MS,
                TYPE_DELAY_MS,
            ]
        );
    }

    #[test]
    fn displayed_text_is_always_a_prefix_of_the_current_phrase() {
        let phrases = ["軟體 💻", "go", "x"];
        let mut cursor = TypingCursor::default();

        for _ in 0..200 {
            let index = cursor.phrase_index();
            let frame = cursor.advance(&phrases).expect("non-empty phrase list");
            assert!(phrases[index].starts_with(&frame.text));
            assert!(cursor.char_index() <= phrases[cursor.phrase_index()].chars().count());
        }
    }

    #[test]
    fn phrase_index_wraps_modulo_list_length() {
        let phrases = ["ab", "c"];
        let mut cursor = TypingCursor::default();
        let mut visited = Vec::new();

        for _ in 0..40 {
            let before = cursor.phrase_index();
            cursor.advance(&phrases);
            if cursor.phrase_index() != before {
                visited.push(cursor.phrase_index());
            }
        }

        assert_eq!(&visited[..4], &[1, 0, 1, 0]);
    }

    #[test]
    fn phase_flips_only_at_bounds() {
        let phrases = ["hello"];
        let mut cursor = TypingCursor::default();

        for _ in 0..60 {
            let was_deleting = cursor.is_deleting();
            cursor.advance(&phrases);
            if cursor.is_deleting() != was_deleting {
                let expected = if cursor.is_deleting() { 5 } else { 0 };
                assert_eq!(cursor.char_index(), expected);
            }
        }
    }

    #[test]
    fn empty_phrase_does_not_escape_bounds() {
        let mut cursor = TypingCursor::default();
        let frames = drive(&mut cursor, &["", "a"], 3);

        assert_eq!(frames[0].text, "");
        assert_eq!(frames[0].delay_ms, HOLD_FULL_MS);
        assert_eq!(frames[1].delay_ms, HOLD_EMPTY_MS);
        assert_eq!(cursor.phrase_index(), 1);
    }

    #[test]
    fn empty_list_yields_nothing() {
        let mut cursor = TypingCursor::default();
        let phrases: [&str; 0] = [];

        assert_eq!(cursor.advance(&phrases), None);
        assert_eq!(cursor.delay_ms(), START_DELAY_MS);
    }
}
