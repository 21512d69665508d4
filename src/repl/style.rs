/// Terminal styling for loop output
/// 
/// Plain ANSI escape sequences; turned off entirely when color is disabled
/// so output can be piped or compared in tests.

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

/// How loop messages are decorated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    color: bool,
}

impl Style {
    pub fn colored() -> Self {
        Self { color: true }
    }
    
    pub fn plain() -> Self {
        Self { color: false }
    }
    
    /// Failures reported back to the user
    pub fn error(&self, text: &str) -> String {
        self.paint(RED, text)
    }
    
    /// Informational notices (help header, file status)
    pub fn notice(&self, text: &str) -> String {
        self.paint(YELLOW, text)
    }
    
    /// Hints such as "unknown command"
    pub fn hint(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }
    
    fn paint(&self, color: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_string()
        }
    }
}
