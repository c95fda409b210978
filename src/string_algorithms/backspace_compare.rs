//! Backspace string compare.
//!
//! `#` erases the previously typed character (no-op on an empty line).
//! Both strings are walked from the end; `skip` counts pending erasures, so
//! the comparison needs O(1) extra space.

const BACKSPACE: char = '#';

pub fn backspace_compare(s: &str, t: &str) -> bool {
    Typed::new(s).eq(Typed::new(t))
}

/// Surviving characters of a typed line, last to first.
struct Typed<I> {
    chars: I,
    skip: usize,
}

impl<'a> Typed<std::iter::Rev<std::str::Chars<'a>>> {
    fn new(line: &'a str) -> Self {
        Self { chars: line.chars().rev(), skip: 0 }
    }
}

impl<I: Iterator<Item = char>> Iterator for Typed<I> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        for c in self.chars.by_ref() {
            if c == BACKSPACE {
                self.skip += 1;
            } else if self.skip > 0 {
                self.skip -= 1;
            } else {
                return Some(c);
            }
        }
        None
    }
}
