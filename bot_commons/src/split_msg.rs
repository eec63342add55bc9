/// Longest text Telegram accepts in a single message.
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;

/// Iterator over pieces of a text, each at most `max_len` bytes long.
///
/// Cuts at the last newline that fits, else at the last whitespace, else
/// wherever the limit lands (on a character boundary). Whitespace around
/// the cut is dropped.
pub struct MessageChunks<'a> {
    rest: &'a str,
    max_len: usize,
}

impl<'a> MessageChunks<'a> {
    /// # Panics
    /// Panics if `max_len` is under 4, as a single character can take that many bytes.
    #[must_use]
    pub fn new(text: &'a str, max_len: usize) -> Self {
        assert!(max_len >= 4, "Max length is too small");
        MessageChunks {
            rest: text,
            max_len,
        }
    }

    /// Chunks that fit into one Telegram message each.
    #[must_use]
    pub fn telegram(text: &'a str) -> Self {
        Self::new(text, TELEGRAM_MESSAGE_LIMIT)
    }
}

impl<'a> Iterator for MessageChunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.rest = self.rest.trim_start();
        if self.rest.is_empty() {
            return None;
        }

        if self.rest.len() <= self.max_len {
            let chunk = self.rest;
            self.rest = "";
            return Some(chunk.trim_end());
        }

        let mut window_end = self.max_len;
        while !self.rest.is_char_boundary(window_end) {
            window_end -= 1;
        }
        let window = &self.rest[..window_end];

        // Newlines first, then any whitespace. A cut at 0 would make no progress.
        let cut = window
            .rfind('\n')
            .filter(|&at| at > 0)
            .or_else(|| window.rfind(char::is_whitespace).filter(|&at| at > 0))
            .unwrap_or(window_end);

        let chunk = &self.rest[..cut];
        self.rest = &self.rest[cut..];
        Some(chunk.trim_end())
    }
}
