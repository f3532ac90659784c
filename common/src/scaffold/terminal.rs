use ringbuffer::{AllocRingBuffer, RingBuffer};

/// Scrolling log: keeps the last `max_lines` messages, oldest first.
pub struct Terminal {
    lines: AllocRingBuffer<String>,
    prefix: String,
}

impl Terminal {
    pub fn new(max_lines: usize, prefix: impl Into<String>) -> Self {
        Self {
            lines: AllocRingBuffer::new(max_lines.max(1)),
            prefix: prefix.into(),
        }
    }

    pub fn write(&mut self, text: &str) {
        self.lines.enqueue(format!("{}{}", self.prefix, text));
    }

    pub fn lines(&self) -> impl Iterator<Item = &String> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.lines.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_prefixed() {
        let mut terminal = Terminal::new(10, ">> ");
        terminal.write("interface ready");
        assert_eq!(terminal.lines().collect::<Vec<_>>(), vec![">> interface ready"]);
    }

    #[test]
    fn test_scrollback_is_trimmed_to_max_lines() {
        let mut terminal = Terminal::new(3, "");
        for i in 0..5 {
            terminal.write(&format!("line {}", i));
        }
        assert_eq!(terminal.len(), 3);
        let lines: Vec<&String> = terminal.lines().collect();
        assert_eq!(lines, vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_zero_capacity_keeps_one_line() {
        let mut terminal = Terminal::new(0, "");
        terminal.write("a");
        terminal.write("b");
        assert_eq!(terminal.capacity(), 1);
        assert_eq!(terminal.lines().collect::<Vec<_>>(), vec!["b"]);
    }
}
