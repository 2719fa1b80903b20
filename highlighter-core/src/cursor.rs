/// Platform-agnostic cursor over a text, addressed by char offsets
#[derive(Debug, Clone)]
pub struct CursorState {
    /// Current cursor position (row, col), col counted in chars
    pub row: usize,
    pub col: usize,
    /// Char offset at which each line starts
    line_starts: Vec<usize>,
    /// Char length of each line, excluding the newline
    line_lens: Vec<usize>,
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            row: 0,
            col: 0,
            line_starts: vec![0],
            line_lens: vec![0],
        }
    }

    /// Load content and compute line offsets
    pub fn set_content(&mut self, content: &str) {
        self.line_starts.clear();
        self.line_lens.clear();
        self.line_starts.push(0);

        let mut line_len = 0;
        for (i, c) in content.chars().enumerate() {
            if c == '\n' {
                self.line_lens.push(line_len);
                self.line_starts.push(i + 1);
                line_len = 0;
            } else {
                line_len += 1;
            }
        }
        self.line_lens.push(line_len);

        self.row = 0;
        self.col = 0;
    }

    /// Get current cursor position as (row, col)
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Char offset of the cursor
    pub fn offset(&self) -> usize {
        self.cursor_to_offset(self.row, self.col)
    }

    /// Convert (row, col) to char offset, clamping to the text
    pub fn cursor_to_offset(&self, row: usize, col: usize) -> usize {
        if row >= self.line_starts.len() {
            return self.end_offset();
        }
        self.line_starts[row] + col.min(self.line_lens[row])
    }

    /// Offset just past the last char
    pub fn end_offset(&self) -> usize {
        let last = self.line_starts.len() - 1;
        self.line_starts[last] + self.line_lens[last]
    }

    /// Convert char offset to (row, col)
    pub fn offset_to_cursor(&self, offset: usize) -> (usize, usize) {
        let row = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        (row, (offset - self.line_starts[row]).min(self.line_lens[row]))
    }

    /// Set cursor to char offset
    pub fn set_cursor_offset(&mut self, offset: usize) {
        let (row, col) = self.offset_to_cursor(offset);
        self.row = row;
        self.col = col;
    }

    /// Get the number of lines
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    fn line_len(&self, row: usize) -> usize {
        self.line_lens.get(row).copied().unwrap_or(0)
    }

    // Cursor movement methods

    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(self.line_len(self.row));
        }
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < self.line_count() {
            self.row += 1;
            self.col = self.col.min(self.line_len(self.row));
        }
    }

    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            // Move to end of previous line
            self.row -= 1;
            self.col = self.line_len(self.row);
        }
    }

    pub fn move_right(&mut self) {
        if self.col < self.line_len(self.row) {
            self.col += 1;
        } else if self.row + 1 < self.line_count() {
            // Move to start of next line
            self.row += 1;
            self.col = 0;
        }
    }

    pub fn move_to_start(&mut self) {
        self.col = 0;
    }

    pub fn move_to_end(&mut self) {
        self.col = self.line_len(self.row);
    }

    pub fn move_to_top(&mut self) {
        self.row = 0;
        self.col = 0;
    }

    pub fn move_to_bottom(&mut self) {
        self.row = self.line_count() - 1;
        self.col = self.line_len(self.row);
    }

    pub fn move_word_forward(&mut self, text: &str) {
        let chars: Vec<char> = text.chars().collect();
        let mut offset = self.offset();

        // Skip current word, then whitespace
        while offset < chars.len() && !chars[offset].is_whitespace() {
            offset += 1;
        }
        while offset < chars.len() && chars[offset].is_whitespace() {
            offset += 1;
        }
        self.set_cursor_offset(offset);
    }

    pub fn move_word_back(&mut self, text: &str) {
        let chars: Vec<char> = text.chars().collect();
        let mut offset = self.offset().min(chars.len());

        // Skip whitespace backwards, then the word
        while offset > 0 && chars[offset - 1].is_whitespace() {
            offset -= 1;
        }
        while offset > 0 && !chars[offset - 1].is_whitespace() {
            offset -= 1;
        }
        self.set_cursor_offset(offset);
    }
}

impl Default for CursorState {
    fn default() -> Self {
        Self::new()
    }
}
