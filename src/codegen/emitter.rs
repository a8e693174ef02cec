//! Line-buffering output builder
//!
//! Accumulates the line under construction, writes the indentation prefix
//! lazily on the first real content, and collects finished lines.

/// Indentation-aware text builder
#[derive(Debug, Clone)]
pub struct Emitter {
    /// Current indentation level
    depth: usize,
    /// Spaces per indentation level
    unit: usize,
    /// Line under construction
    line: String,
    /// Whether the indentation prefix has been written for `line`
    indented: bool,
    /// A separating space is owed before the next content
    pending_space: bool,
    /// Finished lines
    lines: Vec<String>,
}

impl Emitter {
    pub fn new(unit: usize) -> Self {
        Self {
            depth: 0,
            unit,
            line: String::new(),
            indented: false,
            pending_space: false,
            lines: Vec::new(),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    fn push(&mut self, text: &str) {
        if !self.indented {
            self.line.push_str(&" ".repeat(self.depth * self.unit));
            self.indented = true;
        }
        self.line.push_str(text);
    }

    /// Append text to the current line.
    ///
    /// Leading and trailing spaces only mark a separator: it is written once,
    /// and only between two pieces of content on the same line.
    pub fn write(&mut self, text: &str) {
        let trimmed = text.trim_start_matches(' ');
        if trimmed.len() != text.len() && self.indented {
            self.pending_space = true;
        }

        let body = trimmed.trim_end_matches(' ');
        if !body.is_empty() {
            if std::mem::take(&mut self.pending_space) {
                self.line.push(' ');
            }
            self.push(body);
        }

        if body.len() != trimmed.len() && self.indented {
            self.pending_space = true;
        }
    }

    /// Append text directly after the previous content, dropping any owed space
    pub fn attach(&mut self, text: &str) {
        self.pending_space = false;
        self.push(text);
    }

    /// Finalize the current line
    pub fn newline(&mut self) {
        let finished = self.line.trim_end().to_string();
        self.lines.push(finished);
        self.line.clear();
        self.indented = false;
        self.pending_space = false;
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    /// Leave a block, flushing any content already written on the current line.
    ///
    /// Returns `None` without changing anything when no block is open.
    pub fn dedent(&mut self) -> Option<usize> {
        self.depth = self.depth.checked_sub(1)?;
        if !self.line.trim().is_empty() {
            self.newline();
        }
        Some(self.depth)
    }

    /// Assemble the output: trailing blank lines are dropped and the
    /// result ends with exactly one newline.
    pub fn finish(mut self) -> String {
        if !self.line.is_empty() {
            self.newline();
        }
        while self.lines.last().is_some_and(|l| l.is_empty()) {
            self.lines.pop();
        }

        let mut output = self.lines.join("\n");
        output.push('\n');
        output
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new(4)
    }
}
