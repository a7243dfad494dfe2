//! User-facing console lines: `info:` on stdout, `warn:`/`error:` on stderr.
//! The label is coloured only when its stream is a TTY.

use owo_colors::{AnsiColors, OwoColorize};

fn label(tag: &str, color: AnsiColors, stream: atty::Stream) -> String {
    if atty::is(stream) {
        tag.color(color).bold().to_string()
    } else {
        tag.to_string()
    }
}

/// Skip notices and dry-run plans.
pub fn print_info(msg: &str) {
    println!("{} {}", label("info:", AnsiColors::Cyan, atty::Stream::Stdout), msg);
}

pub fn print_warn(msg: &str) {
    eprintln!("{} {}", label("warn:", AnsiColors::Yellow, atty::Stream::Stderr), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", label("error:", AnsiColors::Red, atty::Stream::Stderr), msg);
}
