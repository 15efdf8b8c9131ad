use crossterm::event::KeyCode;

/// Cursor into a list that may shrink between refreshes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    index: usize,
}

impl Selection {
    /// Selected index, if the list has any items
    pub fn get(&self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.index.min(len - 1))
    }

    /// Keep the cursor inside a list of `len` items
    pub fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
    }

    /// Move on Up/Down (or k/j). Returns true if the key was a movement key.
    pub fn handle(&mut self, code: KeyCode, len: usize) -> bool {
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.index = self.index.saturating_sub(1);
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.index + 1 < len {
                    self.index += 1;
                }
                true
            }
            _ => false,
        }
    }
}
