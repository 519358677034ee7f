//! Default values for text, window and terminal-behaviour settings.

pub fn font_name() -> String {
    "Lucida Console".to_string()
}

pub fn font_size() -> i32 {
    9
}

pub fn cols() -> i32 {
    80
}

pub fn rows() -> i32 {
    24
}

pub fn scrollback_lines() -> i32 {
    10000
}

pub fn term() -> String {
    "xterm".to_string()
}

pub fn answerback() -> String {
    String::new()
}

pub fn word_chars() -> String {
    String::new() // Empty = built-in word character set
}
