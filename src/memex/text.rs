/// Replace typographic punctuation with its plain ASCII counterpart.
pub fn clean_punctuation(text: &str) -> String {
    text.chars().map(plain_char).collect()
}

fn plain_char(c: char) -> char {
    match c {
        '\u{2018}' | '\u{2019}' => '\'',
        '\u{201C}' | '\u{201D}' => '"',
        '\u{2011}' | '\u{2013}' | '\u{2014}' => '-',
        '\u{00A0}' | '\u{2003}' | '\u{202F}' => ' ',
        other => other,
    }
}
