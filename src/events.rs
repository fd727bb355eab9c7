/// A user action delivered by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerAction {
    Next,
    Prev,
    Current,
    OpenFolder(String),
    Reindex,
    NextFolder,
    PrevFolder,
    Folders,
    TogglePlay,
    Help,
    Quit,
}

impl ViewerAction {
    /// Parse one line of shell input. Blank or unknown input yields `None`.
    ///
    /// A line consisting only of spaces is the play/pause key.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        if !line.is_empty() && line.trim().is_empty() {
            return Some(Self::TogglePlay);
        }
        let line = line.trim();
        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };
        let action = match cmd.to_ascii_lowercase().as_str() {
            "n" | "k" | "f" | "next" => Self::Next,
            "p" | "j" | "d" | "prev" => Self::Prev,
            "c" | "current" => Self::Current,
            "o" | "open" if !rest.is_empty() => Self::OpenFolder(rest.to_string()),
            "r" | "reindex" => Self::Reindex,
            "7" | "5" | "next-folder" => Self::NextFolder,
            "6" | "4" | "prev-folder" => Self::PrevFolder,
            "l" | "folders" => Self::Folders,
            "t" | "play" | "pause" => Self::TogglePlay,
            "h" | "?" | "help" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            _ => return None,
        };
        Some(action)
    }
}

pub const HELP: &str = "\
n, k, f, next      next picture
p, j, d, prev      previous picture
c, current         show current picture
o <dir>            open folder
r, reindex         rescan current folder
7, 5, next-folder  newer folder from this session
6, 4, prev-folder  older folder from this session
l, folders         list folders opened this session
<space>, t, play   toggle play/pause
h, ?, help         this help
q, quit            quit";
