// src/macros.rs
//! String building shorthands used by the page fragment builders.

/// `s!()` is an empty `String`; `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($text:expr) => {
        ::std::string::String::from($text)
    };
}

/// Concatenate string slices into a new `String`.
#[macro_export]
macro_rules! join {
    ($head:expr $(, $tail:expr)+ $(,)?) => {{
        let mut out = ::std::string::String::from($head);
        $( out.push_str($tail); )+
        out
    }};
}

/// Like `join!`, with a newline after every part. Keeps HTML templates
/// one source line per output line.
#[macro_export]
macro_rules! lines {
    ($($line:expr),+ $(,)?) => {{
        let mut out = ::std::string::String::new();
        $(
            out.push_str($line);
            out.push('\n');
        )+
        out
    }};
}
