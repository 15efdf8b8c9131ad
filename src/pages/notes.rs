//! Plain-text notes: open a file, edit, save, count words
//!
//! File paths are typed into an inline prompt. Read and write failures, and
//! files that are not UTF-8 text, surface as an error dialog; the page keeps
//! its previous text and stays usable.

use crate::shell::{Dialog, Element, Page, PageAction};
use anyhow::{anyhow, Context, Result};
use crossterm::event::{KeyCode, KeyEvent};
use std::path::{Path, PathBuf};

const CURSOR: &str = "▏";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Purpose {
    Open,
    Save,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    Browse,
    Prompt { purpose: Purpose, input: String },
    Edit,
}

pub struct NotesPage {
    text: String,
    file: Option<PathBuf>,
    mode: Mode,
    content: Vec<Element>,
}

impl NotesPage {
    pub fn new() -> Self {
        let mut page = Self {
            text: String::new(),
            file: None,
            mode: Mode::Browse,
            content: Vec::new(),
        };
        page.rebuild();
        page
    }

    fn rebuild(&mut self) {
        let file = match &self.file {
            Some(path) => path.display().to_string(),
            None => "(new note)".to_string(),
        };
        let mut content = vec![
            Element::heading("Notes"),
            Element::Blank,
            Element::field("File", file),
        ];

        match &self.mode {
            Mode::Prompt { purpose, input } => {
                let label = match purpose {
                    Purpose::Open => "Open file",
                    Purpose::Save => "Save as",
                };
                content.push(Element::field(label, format!("{}{}", input, CURSOR)));
            }
            Mode::Edit => content.push(Element::dim("Editing (Esc to finish)")),
            Mode::Browse => {}
        }
        content.push(Element::Blank);

        let body = if self.mode == Mode::Edit {
            vec![Element::text(format!("{}{}", self.text, CURSOR))]
        } else if self.text.is_empty() {
            vec![Element::dim("Empty note. Press e to edit or o to open a file.")]
        } else {
            vec![Element::text(&self.text)]
        };
        content.push(Element::section("Text", body));

        self.content = content;
    }

    fn prompt(&mut self, purpose: Purpose) -> PageAction {
        let input = self
            .file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        self.mode = Mode::Prompt { purpose, input };
        PageAction::Consumed
    }

    fn open(&mut self, path: PathBuf) -> PageAction {
        match read_text(&path) {
            Ok(text) => {
                self.text = text;
                let action = PageAction::Status(format!("Opened: {}", file_name(&path)));
                self.file = Some(path);
                action
            }
            Err(e) => PageAction::Dialog(Dialog::error(format!("Could not open file:\n{:#}", e))),
        }
    }

    fn save(&mut self, path: PathBuf) -> PageAction {
        match write_text(&path, &self.text) {
            Ok(()) => {
                let action = PageAction::Status(format!("Saved: {}", file_name(&path)));
                self.file = Some(path);
                action
            }
            Err(e) => PageAction::Dialog(Dialog::error(format!("Could not save file:\n{:#}", e))),
        }
    }

    fn word_count(&self) -> PageAction {
        let (words, chars) = count(&self.text);
        PageAction::Dialog(Dialog::info(
            "Word Count",
            format!("Words: {}\nCharacters: {}", words, chars),
        ))
    }

    fn handle_browse(&mut self, key: KeyEvent) -> PageAction {
        match key.code {
            KeyCode::Char('o') => self.prompt(Purpose::Open),
            KeyCode::Char('s') => match self.file.clone() {
                Some(path) => self.save(path),
                None => self.prompt(Purpose::Save),
            },
            KeyCode::Char('S') => self.prompt(Purpose::Save),
            KeyCode::Char('e') => {
                self.mode = Mode::Edit;
                PageAction::Consumed
            }
            KeyCode::Char('w') => self.word_count(),
            _ => PageAction::Ignored,
        }
    }

    fn handle_prompt(&mut self, purpose: Purpose, key: KeyEvent) -> PageAction {
        let Mode::Prompt { input, .. } = &mut self.mode else {
            return PageAction::Ignored;
        };

        match key.code {
            KeyCode::Char(c) => {
                input.push(c);
                PageAction::Consumed
            }
            KeyCode::Backspace => {
                input.pop();
                PageAction::Consumed
            }
            KeyCode::Esc => {
                self.mode = Mode::Browse;
                PageAction::Status("Cancelled".to_string())
            }
            KeyCode::Enter => {
                let typed = input.trim().to_string();
                self.mode = Mode::Browse;
                if typed.is_empty() {
                    return PageAction::Status("No file selected".to_string());
                }
                let path = expand_home(&typed);
                match purpose {
                    Purpose::Open => self.open(path),
                    Purpose::Save => self.save(path),
                }
            }
            _ => PageAction::Consumed,
        }
    }

    fn handle_edit(&mut self, key: KeyEvent) -> PageAction {
        match key.code {
            KeyCode::Char(c) => self.text.push(c),
            KeyCode::Enter => self.text.push('\n'),
            KeyCode::Tab => self.text.push('\t'),
            KeyCode::Backspace => {
                self.text.pop();
            }
            KeyCode::Esc => {
                self.mode = Mode::Browse;
                let (words, _) = count(&self.text);
                return PageAction::Status(format!("Note updated ({} words)", words));
            }
            _ => {}
        }
        PageAction::Consumed
    }
}

impl Default for NotesPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for NotesPage {
    fn title(&self) -> &str {
        "Notes"
    }

    fn content(&self) -> &[Element] {
        &self.content
    }

    // An unfinished prompt is dropped when the page is left
    fn on_hide(&mut self) {
        if matches!(self.mode, Mode::Prompt { .. }) {
            self.mode = Mode::Browse;
            self.rebuild();
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> PageAction {
        let prompt = match &self.mode {
            Mode::Prompt { purpose, .. } => Some(*purpose),
            _ => None,
        };
        let action = match prompt {
            Some(purpose) => self.handle_prompt(purpose, key),
            None if self.mode == Mode::Edit => self.handle_edit(key),
            None => self.handle_browse(key),
        };
        self.rebuild();
        action
    }

    fn captures_input(&self) -> bool {
        self.mode != Mode::Browse
    }

    fn hint(&self) -> Option<&'static str> {
        Some(match self.mode {
            Mode::Browse => "e: edit  o: open  s: save  S: save as  w: word count",
            Mode::Prompt { .. } => "Enter: confirm  Esc: cancel",
            Mode::Edit => "Esc: finish editing",
        })
    }
}

/// Read a UTF-8 text file
pub fn read_text(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    String::from_utf8(bytes).map_err(|e| {
        anyhow!(
            "{} is not a UTF-8 text file (invalid byte at offset {})",
            path.display(),
            e.utf8_error().valid_up_to()
        )
    })
}

pub fn write_text(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
}

/// Words split on whitespace; characters are Unicode scalar values
pub fn count(text: &str) -> (usize, usize) {
    (text.split_whitespace().count(), text.chars().count())
}

fn expand_home(input: &str) -> PathBuf {
    match input.strip_prefix("~/") {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(input),
        },
        None => PathBuf::from(input),
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::fixtures::{char_key, key};
    use crate::shell::to_plain_text;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("hyprspa-notes-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn type_text(page: &mut NotesPage, text: &str) {
        for c in text.chars() {
            page.handle_key(char_key(c));
        }
    }

    fn open(page: &mut NotesPage, path: &Path) -> PageAction {
        page.handle_key(char_key('o'));
        type_text(page, &path.display().to_string());
        page.handle_key(key(KeyCode::Enter))
    }

    #[test]
    fn counts_words_and_characters() {
        assert_eq!(count(""), (0, 0));
        assert_eq!(count("   \n\t"), (0, 5));
        assert_eq!(count("hello  wörld\nagain"), (3, 18));
    }

    #[test]
    fn word_count_dialog() {
        let mut page = NotesPage::new();
        page.handle_key(char_key('e'));
        type_text(&mut page, "one two three");
        page.handle_key(key(KeyCode::Esc));

        assert_eq!(
            page.handle_key(char_key('w')),
            PageAction::Dialog(Dialog::info("Word Count", "Words: 3\nCharacters: 13"))
        );
    }

    #[test]
    fn edit_mode_captures_global_keys() {
        let mut page = NotesPage::new();
        assert!(!page.captures_input());

        page.handle_key(char_key('e'));
        assert!(page.captures_input());
        type_text(&mut page, "q?y");
        page.handle_key(key(KeyCode::Enter));
        type_text(&mut page, "x");
        page.handle_key(key(KeyCode::Backspace));

        assert_eq!(
            page.handle_key(key(KeyCode::Esc)),
            PageAction::Status("Note updated (1 words)".to_string())
        );
        assert!(!page.captures_input());
        assert!(to_plain_text(page.content()).contains("  q?y\n"));
    }

    #[test]
    fn open_edit_save_round_trip() {
        let dir = scratch_dir("roundtrip");
        let path = dir.join("todo.txt");
        std::fs::write(&path, "buy milk").unwrap();

        let mut page = NotesPage::new();
        assert_eq!(
            open(&mut page, &path),
            PageAction::Status("Opened: todo.txt".to_string())
        );
        assert!(to_plain_text(page.content()).contains("buy milk"));

        page.handle_key(char_key('e'));
        type_text(&mut page, " and eggs");
        page.handle_key(key(KeyCode::Esc));

        // Saves back to the opened file without prompting
        assert_eq!(
            page.handle_key(char_key('s')),
            PageAction::Status("Saved: todo.txt".to_string())
        );
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "buy milk and eggs");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn non_utf8_file_shows_error_and_keeps_text() {
        let dir = scratch_dir("binary");
        let path = dir.join("image.png");
        std::fs::write(&path, [0x89, b'P', b'N', b'G', 0xff, 0xfe]).unwrap();

        let mut page = NotesPage::new();
        page.handle_key(char_key('e'));
        type_text(&mut page, "draft");
        page.handle_key(key(KeyCode::Esc));

        let PageAction::Dialog(dialog) = open(&mut page, &path) else {
            panic!("expected an error dialog");
        };
        assert!(dialog.is_error);
        assert!(dialog.message.starts_with("Could not open file:\n"));
        assert!(dialog.message.contains("not a UTF-8 text file"));

        // Still usable with the previous text
        assert!(!page.captures_input());
        let text = to_plain_text(page.content());
        assert!(text.contains("draft"));
        assert!(text.contains("File: (new note)"));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_and_unwritable_path_show_errors() {
        let dir = scratch_dir("missing");

        let mut page = NotesPage::new();
        let PageAction::Dialog(dialog) = open(&mut page, &dir.join("nope.txt")) else {
            panic!("expected an error dialog");
        };
        assert!(dialog.message.contains("Failed to read"));

        page.handle_key(char_key('S'));
        type_text(&mut page, &dir.join("no/such/dir/out.txt").display().to_string());
        let PageAction::Dialog(dialog) = page.handle_key(key(KeyCode::Enter)) else {
            panic!("expected an error dialog");
        };
        assert!(dialog.message.starts_with("Could not save file:\n"));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn empty_or_cancelled_prompt() {
        let mut page = NotesPage::new();

        page.handle_key(char_key('o'));
        assert_eq!(
            page.handle_key(key(KeyCode::Enter)),
            PageAction::Status("No file selected".to_string())
        );

        page.handle_key(char_key('o'));
        type_text(&mut page, "abc");
        assert!(to_plain_text(page.content()).contains("Open file: abc▏"));
        assert_eq!(
            page.handle_key(key(KeyCode::Esc)),
            PageAction::Status("Cancelled".to_string())
        );
        assert!(!page.captures_input());
    }

    #[test]
    fn leaving_the_page_drops_an_open_prompt() {
        let mut page = NotesPage::new();
        page.handle_key(char_key('o'));
        page.on_hide();
        assert!(!page.captures_input());
        assert!(!to_plain_text(page.content()).contains("Open file"));
    }
}
