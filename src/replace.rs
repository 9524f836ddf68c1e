/// One unit of input text: a decoded `char`, or a byte that is not part of
/// any valid UTF-8 sequence and is carried through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Char(char),
    Byte(u8),
}

impl Symbol {
    /// Number of bytes the symbol occupies in a line.
    pub fn width(self) -> usize {
        match self {
            Symbol::Char(c) => c.len_utf8(),
            Symbol::Byte(_) => 1,
        }
    }

    /// Whitespace as the C locale's `isspace` sees it.
    pub fn is_space(self) -> bool {
        matches!(
            self,
            Symbol::Char(' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
        )
    }

    fn encode(self, buf: &mut [u8; 4]) -> &[u8] {
        match self {
            Symbol::Char(c) => c.encode_utf8(buf).as_bytes(),
            Symbol::Byte(b) => {
                buf[0] = b;
                &buf[..1]
            }
        }
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Symbol::Char(c)
    }
}

/// Decode the symbol starting at `bytes[at]`.
fn symbol_at(bytes: &[u8], at: usize) -> Symbol {
    let window = &bytes[at..bytes.len().min(at + 4)];
    match window.utf8_chunks().next().and_then(|chunk| chunk.valid().chars().next()) {
        Some(c) => Symbol::Char(c),
        None => Symbol::Byte(window[0]),
    }
}

/// Split a line into symbols, left to right.
pub fn symbols(bytes: &[u8]) -> impl Iterator<Item = Symbol> + '_ {
    let mut at = 0;
    std::iter::from_fn(move || {
        if at >= bytes.len() {
            return None;
        }
        let symbol = symbol_at(bytes, at);
        at += symbol.width();
        Some(symbol)
    })
}

/// Return a copy of `text` with every `from` replaced by `to`.
///
/// Matching is exact and case-sensitive. The result always has as many
/// characters as `text`, and characters other than `from` keep their
/// positions.
///
/// ```
/// assert_eq!(charswap::replace_all("hello", 'l', 'L'), "heLLo");
/// ```
pub fn replace_all(text: &str, from: char, to: char) -> String {
    text.chars().map(|c| if c == from { to } else { c }).collect()
}

/// Replace every `from` in `line` with `to` in a single pass.
///
/// Bytes that do not belong to `from` are left exactly as they were, valid
/// UTF-8 or not. When both symbols have the same width the line is
/// overwritten where it lies; otherwise it is rebuilt once.
///
/// Returns how many symbols were changed, which is zero when `from == to`.
pub fn replace_in_place(line: &mut Vec<u8>, from: Symbol, to: Symbol) -> usize {
    if from == to {
        return 0;
    }

    let mut buf = [0u8; 4];
    let to_bytes = to.encode(&mut buf);
    let mut count = 0;
    let mut at = 0;

    if from.width() == to_bytes.len() {
        while at < line.len() {
            let symbol = symbol_at(line, at);
            if symbol == from {
                line[at..at + to_bytes.len()].copy_from_slice(to_bytes);
                count += 1;
            }
            at += symbol.width();
        }
        return count;
    }

    let mut rebuilt = Vec::with_capacity(line.len());
    while at < line.len() {
        let symbol = symbol_at(line, at);
        let width = symbol.width();
        if symbol == from {
            rebuilt.extend_from_slice(to_bytes);
            count += 1;
        } else {
            rebuilt.extend_from_slice(&line[at..at + width]);
        }
        at += width;
    }
    if count > 0 {
        *line = rebuilt;
    }
    count
}
