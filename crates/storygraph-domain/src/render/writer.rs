/// Line-oriented text writer with four-space indentation per depth level.
#[derive(Debug, Default)]
pub struct DotWriter {
    out: String,
}

impl DotWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one line at the given indentation depth.
    pub fn line(&mut self, depth: usize, text: &str) {
        for _ in 0..depth {
            self.out.push_str("    ");
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    pub fn finish(self) -> String {
        self.out
    }
}
